use std::sync::Arc;

use crate::config::Config;
use crate::models::Profile;
use crate::render::{resolve_avatar, AvatarSource};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub profile: Arc<Profile>,
    pub config: Config,
    /// Avatar for the photo variant, resolved against the asset directory at startup.
    pub avatar: AvatarSource,
}

impl AppState {
    pub fn new(profile: Profile, config: Config) -> Self {
        let avatar = resolve_avatar(&profile.personal, &config.assets_dir);
        Self {
            profile: Arc::new(profile),
            config,
            avatar,
        }
    }
}
