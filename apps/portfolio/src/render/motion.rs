//! Declarative entrance animations.
//!
//! Each animated element carries `data-motion` (the keyframes to run),
//! `data-trigger` (`load` or `view`) and a `style` with `--duration` and
//! `--delay`. The stylesheet and the small page script do the rest; nothing
//! here keeps state.

/// Delay added per child inside a stagger container.
pub const STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// Rise 40px while fading in.
    FadeInUp,
    /// Slide 50px from the left (experience entries).
    SlideInLeft,
    /// Slide 20px from the left (section titles).
    TitleSlide,
    /// Rise 20px (hero text).
    HeroRise,
    /// Grow from 0.8 scale (avatar).
    ScaleIn,
    /// Rise 50px (education block).
    RiseIn,
}

impl Entrance {
    pub fn name(&self) -> &'static str {
        match self {
            Entrance::FadeInUp => "fade-in-up",
            Entrance::SlideInLeft => "slide-in-left",
            Entrance::TitleSlide => "title-slide",
            Entrance::HeroRise => "hero-rise",
            Entrance::ScaleIn => "scale-in",
            Entrance::RiseIn => "rise-in",
        }
    }

    pub fn duration_ms(&self) -> u32 {
        match self {
            Entrance::FadeInUp | Entrance::SlideInLeft | Entrance::RiseIn => 600,
            Entrance::TitleSlide => 500,
            Entrance::HeroRise | Entrance::ScaleIn => 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Runs as soon as the page loads.
    Load,
    /// Runs once, the first time the element scrolls into view.
    View,
}

impl Trigger {
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::Load => "load",
            Trigger::View => "view",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub entrance: Entrance,
    pub trigger: Trigger,
    pub delay_ms: u32,
}

impl Motion {
    pub fn on_load(entrance: Entrance) -> Self {
        Self {
            entrance,
            trigger: Trigger::Load,
            delay_ms: 0,
        }
    }

    pub fn in_view(entrance: Entrance) -> Self {
        Self {
            entrance,
            trigger: Trigger::View,
            delay_ms: 0,
        }
    }

    /// The `index`th child of a stagger container.
    pub fn staggered(entrance: Entrance, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            entrance,
            trigger: Trigger::View,
            delay_ms: index.saturating_mul(STAGGER_MS),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "--duration:{}ms;--delay:{}ms",
            self.entrance.duration_ms(),
            self.delay_ms
        )
    }
}
