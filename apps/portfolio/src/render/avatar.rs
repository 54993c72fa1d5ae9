use std::path::Path;

use tracing::warn;

use crate::models::Personal;

/// URL prefix the asset directory is mounted at.
pub const ASSETS_PREFIX: &str = "/assets/";

/// How the hero avatar is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    /// An image, with the initials kept for the client-side load-failure swap.
    Image { src: String, initials: String },
    Initials(String),
}

/// Decides once, at startup, whether the photo variant can show an image.
///
/// Remote URLs are trusted as-is. Paths under `/assets/` must exist in
/// `assets_dir`; anything missing degrades to the initials badge.
pub fn resolve_avatar(personal: &Personal, assets_dir: &Path) -> AvatarSource {
    let initials = personal.initials();

    let Some(src) = personal.avatar.as_deref().filter(|s| !s.trim().is_empty()) else {
        return AvatarSource::Initials(initials);
    };

    if src.starts_with("http://") || src.starts_with("https://") {
        return AvatarSource::Image {
            src: src.to_string(),
            initials,
        };
    }

    let relative = src
        .strip_prefix(ASSETS_PREFIX)
        .unwrap_or_else(|| src.trim_start_matches('/'));
    let on_disk = assets_dir.join(relative);

    if on_disk.is_file() {
        AvatarSource::Image {
            src: format!("{ASSETS_PREFIX}{relative}"),
            initials,
        }
    } else {
        warn!(
            "Avatar {} not found at {}; falling back to initials",
            src,
            on_disk.display()
        );
        AvatarSource::Initials(initials)
    }
}
