// Presentation: a pure Profile -> HTML mapping built with maud.
// Nothing here touches the clock, the filesystem, or global state; callers
// pass everything in through RenderOptions.

pub mod avatar;
pub mod handlers;
pub mod motion;
pub mod page;
pub mod sections;
pub mod styles;

use std::fmt;
use std::str::FromStr;

pub use avatar::{resolve_avatar, AvatarSource};
pub use page::render_page;

/// Color scheme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// The two renderings of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    /// Avatar image, degrading to initials if it cannot be shown.
    Photo,
    /// Initials badge only.
    Initials,
}

impl PageVariant {
    pub fn avatar(&self, resolved: &AvatarSource, initials: &str) -> AvatarSource {
        match self {
            PageVariant::Photo => resolved.clone(),
            PageVariant::Initials => AvatarSource::Initials(initials.to_string()),
        }
    }
}

/// Everything the page needs besides the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub avatar: AvatarSource,
    /// Copyright year shown in the footer.
    pub year: i32,
    /// SSE endpoint the hero subtitle subscribes to.
    pub typing_endpoint: String,
}
