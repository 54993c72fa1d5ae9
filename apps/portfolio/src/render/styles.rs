// Inline stylesheet and page script. Kept as constants so the page is a single
// self-contained document.

pub const STYLESHEET: &str = r#"
:root { --accent: #60a5fa; --muted: #94a3b8; --rule: #334155; }
html.dark { --bg: #020617; --text: #cbd5e1; --heading: #ffffff; --panel: #1e293b; }
html.light { --bg: #f8fafc; --text: #334155; --heading: #0f172a; --panel: #e2e8f0; }
html { scroll-behavior: smooth; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, sans-serif; line-height: 1.6; }
a { color: inherit; text-decoration: none; }
.navbar { position: fixed; top: 0; width: 100%; z-index: 50; backdrop-filter: blur(12px); border-bottom: 1px solid var(--rule); background: color-mix(in srgb, var(--bg) 90%, transparent); }
.navbar-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; height: 4rem; display: flex; align-items: center; justify-content: space-between; }
.brand { font-size: 1.25rem; font-weight: 700; color: var(--heading); }
.accent { color: var(--accent); }
.nav-links { display: flex; gap: 2rem; }
.nav-link { font-size: .875rem; text-transform: uppercase; letter-spacing: .05em; color: var(--muted); }
.nav-link:hover { color: var(--accent); }
.content { max-width: 64rem; margin: 0 auto; padding: 8rem 1.5rem 5rem; }
.section, .hero { scroll-margin-top: 7rem; margin-bottom: 6rem; }
.hero { display: flex; align-items: center; gap: 4rem; }
.hero-text { flex: 1; }
.hero h1 { font-size: 3.75rem; margin: 0 0 1rem; color: var(--heading); }
.subtitle { color: var(--accent); min-height: 2rem; }
.caret { display: inline-block; width: 2px; height: 1.2em; margin-left: 2px; background: var(--accent); vertical-align: text-bottom; animation: blink 1s step-end infinite; }
.summary { font-size: 1.125rem; color: var(--muted); max-width: 42rem; }
.hero-links { display: flex; flex-wrap: wrap; gap: 1rem; }
.button { border: 1px solid var(--rule); padding: .75rem 1.5rem; border-radius: .5rem; transition: transform .15s, background .15s; }
.button:hover { background: var(--panel); transform: scale(1.05); }
.button:active { transform: scale(.95); }
.avatar { position: relative; width: 20rem; height: 20rem; flex-shrink: 0; }
.avatar-glow { position: absolute; inset: 0; background: #2563eb; border-radius: 1.5rem; filter: blur(40px); opacity: .2; }
.avatar-image, .avatar-initials { position: relative; width: 100%; height: 100%; border-radius: 1.5rem; object-fit: cover; }
.avatar-initials { display: flex; align-items: center; justify-content: center; font-size: 6rem; font-weight: 800; color: var(--heading); background: var(--panel); }
.avatar-initials[hidden] { display: none; }
.section-title { display: flex; align-items: center; gap: .75rem; margin-bottom: 2rem; border-bottom: 1px solid var(--rule); padding-bottom: .75rem; }
.section-title h2 { margin: 0; text-transform: uppercase; color: var(--heading); }
.icon { color: var(--accent); font-family: ui-monospace, monospace; }
.skill-row { display: grid; grid-template-columns: 160px 1fr; gap: 1rem; border-bottom: 1px solid var(--rule); padding-bottom: 1rem; margin-bottom: 1.5rem; }
.skill-row:last-child { border: 0; }
.skill-label { font-weight: 700; color: var(--heading); }
.skill-items { display: flex; flex-wrap: wrap; gap: .25rem .5rem; }
.separator { color: #64748b; font-size: .875rem; }
.timeline-entry { display: flex; gap: 2.5rem; margin-bottom: 3rem; }
.timeline-meta { width: 25%; flex-shrink: 0; }
.timeline-meta h3 { margin: 0; color: var(--heading); }
.period { font-family: ui-monospace, monospace; font-size: .875rem; color: var(--muted); }
.timeline-body h4 { margin: 0 0 .75rem; font-size: 1.25rem; color: var(--accent); }
.bullets { list-style: none; padding: 0; }
.bullets li, .list-item { display: flex; align-items: flex-start; gap: .75rem; margin-bottom: .75rem; }
.dot { margin-top: .6rem; width: 6px; height: 6px; border-radius: 50%; background: var(--accent); flex-shrink: 0; }
.bullets strong { color: var(--heading); }
.footer { border-top: 1px solid var(--rule); padding: 2.5rem 0; text-align: center; color: #64748b; font-size: .875rem; }

[data-motion] { opacity: 0; }
[data-motion].in-view { animation-duration: var(--duration); animation-delay: var(--delay); animation-timing-function: ease-out; animation-fill-mode: both; }
[data-motion="fade-in-up"].in-view { animation-name: fade-in-up; }
[data-motion="slide-in-left"].in-view { animation-name: slide-in-left; }
[data-motion="title-slide"].in-view { animation-name: title-slide; }
[data-motion="hero-rise"].in-view { animation-name: hero-rise; }
[data-motion="scale-in"].in-view { animation-name: scale-in; }
[data-motion="rise-in"].in-view { animation-name: rise-in; }
@keyframes fade-in-up { from { opacity: 0; transform: translateY(40px); } to { opacity: 1; transform: none; } }
@keyframes slide-in-left { from { opacity: 0; transform: translateX(-50px); } to { opacity: 1; transform: none; } }
@keyframes title-slide { from { opacity: 0; transform: translateX(-20px); } to { opacity: 1; transform: none; } }
@keyframes hero-rise { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes scale-in { from { opacity: 0; transform: scale(.8); } to { opacity: 1; transform: none; } }
@keyframes rise-in { from { opacity: 0; transform: translateY(50px); } to { opacity: 1; transform: none; } }
@keyframes blink { 50% { opacity: 0; } }
@media (prefers-reduced-motion: reduce) { [data-motion] { opacity: 1; animation: none !important; } }
@media (max-width: 768px) {
  .nav-links { display: none; }
  .hero { flex-direction: column-reverse; gap: 2.5rem; text-align: center; }
  .hero-links { justify-content: center; }
  .avatar { width: 16rem; height: 16rem; }
  .skill-row { grid-template-columns: 1fr; }
  .timeline-entry { flex-direction: column; gap: 1rem; border-left: 2px solid var(--panel); padding-left: 1.5rem; }
  .timeline-meta { width: auto; }
}
"#;

/// Shown only when scripting is off, so nothing stays invisible.
pub const NOSCRIPT_STYLESHEET: &str = "[data-motion] { opacity: 1; } .caret { display: none; }";

/// Starts load-triggered animations, arms view-triggered ones once, and feeds
/// the typing subtitle from its event stream.
pub const PAGE_SCRIPT: &str = r#"
(function () {
  var animated = document.querySelectorAll('[data-motion]');
  var observer = 'IntersectionObserver' in window ? new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.classList.add('in-view');
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.1 }) : null;
  animated.forEach(function (el) {
    if (el.dataset.trigger === 'load' || !observer) {
      el.classList.add('in-view');
    } else {
      observer.observe(el);
    }
  });

  document.querySelectorAll('[data-typing-src]').forEach(function (el) {
    if (!('EventSource' in window)) {
      el.textContent = el.getAttribute('aria-label');
      return;
    }
    var source = new EventSource(el.dataset.typingSrc);
    source.addEventListener('reveal', function (e) { el.textContent = e.data; });
    source.addEventListener('done', function (e) { el.textContent = e.data; source.close(); });
    source.onerror = function () { el.textContent = el.getAttribute('aria-label'); source.close(); };
  });
})();
"#;
