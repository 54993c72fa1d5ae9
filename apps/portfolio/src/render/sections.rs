use maud::{html, Markup};

use crate::models::{Education, Job, Personal, Profile, SkillCategory, Skills};
use crate::render::motion::{Entrance, Motion};
use crate::render::AvatarSource;

/// In-page anchors, in navbar order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#summary", "Summary"),
    ("#skills", "Skills"),
    ("#experience", "Experience"),
    ("#education", "Education"),
    ("#certifications", "Certifications"),
];

fn icon(name: &str) -> Markup {
    let glyph = match name {
        "terminal" => ">_",
        "server" => "▤",
        "code" => "</>",
        "smartphone" => "▯",
        "cloud" => "☁",
        "database" => "◫",
        "book" => "▥",
        "award" => "✪",
        "calendar" => "▦",
        "mail" => "✉",
        _ => "•",
    };
    html! { span.icon data-icon=(name) aria-hidden="true" { (glyph) } }
}

pub fn nav(personal: &Personal) -> Markup {
    html! {
        nav.navbar {
            div.navbar-inner {
                a.brand href="#summary" {
                    (personal.name.to_uppercase()) span.accent { "." }
                }
                div.nav-links {
                    @for (href, label) in NAV_LINKS {
                        a.nav-link href=(href) { (label) }
                    }
                }
            }
        }
    }
}

fn section_title(title: &str, icon_name: &str) -> Markup {
    let m = Motion::in_view(Entrance::TitleSlide);
    html! {
        div.section-title data-motion=(m.entrance.name()) data-trigger=(m.trigger.name()) style=(m.style()) {
            (icon(icon_name))
            h2 { (title) }
        }
    }
}

/// The typed subtitle. The element is filled by the page script from the
/// typing stream; `<noscript>` carries the full role.
fn typing_subtitle(role: &str, endpoint: &str) -> Markup {
    html! {
        h2.subtitle {
            span.typing data-typing-src=(endpoint) aria-label=(role) {}
            span.caret aria-hidden="true" {}
            noscript { (role) }
        }
    }
}

fn avatar(source: &AvatarSource) -> Markup {
    let m = Motion::on_load(Entrance::ScaleIn);
    html! {
        div.avatar data-motion=(m.entrance.name()) data-trigger=(m.trigger.name()) style=(m.style()) {
            div.avatar-glow {}
            @match source {
                AvatarSource::Image { src, initials } => {
                    img.avatar-image src=(src) alt="Avatar"
                        onerror="this.hidden=true;this.nextElementSibling.hidden=false;";
                    div.avatar-initials hidden { (initials) }
                }
                AvatarSource::Initials(initials) => {
                    div.avatar-initials { (initials) }
                }
            }
        }
    }
}

pub fn hero(personal: &Personal, avatar_source: &AvatarSource, typing_endpoint: &str) -> Markup {
    let m = Motion::on_load(Entrance::HeroRise);
    html! {
        section #summary .hero {
            div.hero-text data-motion=(m.entrance.name()) data-trigger=(m.trigger.name()) style=(m.style()) {
                h1 { (personal.name) }
                (typing_subtitle(&personal.role, typing_endpoint))
                p.summary { (personal.summary) }
                p.location { (personal.location) }
                div.hero-links {
                    a.button href=(personal.mailto()) { (icon("mail")) " Send Email" }
                    @if !personal.github.is_empty() {
                        a.button href=(personal.github) target="_blank" rel="noopener noreferrer" { "GitHub" }
                    }
                    @if !personal.linkedin.is_empty() {
                        a.button href=(personal.linkedin) target="_blank" rel="noopener noreferrer" { "LinkedIn" }
                    }
                }
            }
            (avatar(avatar_source))
        }
    }
}

/// Skill names with a divider between neighbours and none after the last.
pub fn skill_items(items: &[String]) -> Markup {
    html! {
        div.skill-items {
            @for (index, item) in items.iter().enumerate() {
                span.skill { (item) }
                @if index + 1 < items.len() {
                    span.separator aria-hidden="true" { "|" }
                }
            }
        }
    }
}

fn skill_row(category: SkillCategory, items: &[String], index: usize) -> Markup {
    let m = Motion::staggered(Entrance::FadeInUp, index);
    html! {
        div.skill-row data-motion=(m.entrance.name()) data-trigger=(m.trigger.name()) style=(m.style()) {
            div.skill-label { (icon(category.icon())) " " (category.label()) }
            (skill_items(items))
        }
    }
}

pub fn skills(skills: &Skills) -> Markup {
    html! {
        section #skills .section {
            (section_title("Technical Skills", "terminal"))
            div.skill-table {
                @for (index, (category, items)) in skills.rows().enumerate() {
                    (skill_row(category, items, index))
                }
            }
        }
    }
}

fn job_entry(job: &Job) -> Markup {
    let m = Motion::in_view(Entrance::SlideInLeft);
    html! {
        div.timeline-entry data-job-id=(job.id) data-motion=(m.entrance.name()) data-trigger=(m.trigger.name()) style=(m.style()) {
            div.timeline-meta {
                h3 { (job.company) }
                p.period { (job.period) }
            }
            div.timeline-body {
                h4 { (job.role) }
                ul.bullets {
                    @for line in &job.description {
                        li { span.dot {} span { (line) } }
                    }
                }
            }
        }
    }
}

pub fn experience(jobs: &[Job]) -> Markup {
    html! {
        section #experience .section {
            (section_title("Experience", "database"))
            div.timeline {
                @for job in jobs {
                    (job_entry(job))
                }
            }
        }
    }
}

pub fn education(education: &Education, languages: &[String]) -> Markup {
    let m = Motion::in_view(Entrance::RiseIn);
    html! {
        section #education .section {
            (section_title("Education", "book"))
            div.timeline-entry data-motion=(m.entrance.name()) data-trigger=(m.trigger.name()) style=(m.style()) {
                div.timeline-meta {
                    h3 { (education.school) }
                    p.period { (icon("calendar")) " " (education.period) }
                }
                div.timeline-body {
                    h4 { (education.degree) }
                    ul.bullets {
                        li {
                            span.dot {}
                            span { strong { "Final Year Project:" } " " (education.project) }
                        }
                        li {
                            span.dot {}
                            span { strong { "Languages:" } " " (languages.join(", ")) }
                        }
                    }
                }
            }
        }
    }
}

pub fn certifications(items: &[String]) -> Markup {
    html! {
        section #certifications .section {
            (section_title("Certifications", "award"))
            div.vertical-list {
                @for (index, item) in items.iter().enumerate() {
                    @let m = Motion::staggered(Entrance::FadeInUp, index);
                    div.list-item data-motion=(m.entrance.name()) data-trigger=(m.trigger.name()) style=(m.style()) {
                        span.dot {}
                        span { (item) }
                    }
                }
            }
        }
    }
}

pub fn footer(name: &str, year: i32) -> Markup {
    html! {
        footer.footer {
            p { "© " (year) " " (name) ". All rights reserved." }
        }
    }
}

/// Everything inside `<body>`, in page order.
pub fn body(profile: &Profile, avatar_source: &AvatarSource, year: i32, typing_endpoint: &str) -> Markup {
    html! {
        (nav(&profile.personal))
        main.content {
            (hero(&profile.personal, avatar_source, typing_endpoint))
            (skills(&profile.skills))
            (experience(&profile.experience))
            (education(&profile.education, &profile.languages))
            (certifications(&profile.certifications))
        }
        (footer(&profile.personal.name, year))
    }
}
