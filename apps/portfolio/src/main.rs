mod config;
mod errors;
mod models;
mod profile;
mod render;
mod routes;
mod state;
mod typing;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::profile::load_profile;
use crate::render::AvatarSource;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; bad values stop startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let profile = load_profile(config.profile_path.as_deref()).context("Failed to load profile")?;
    info!(
        "Profile ready: {} ({} jobs, {} certifications)",
        profile.personal.name,
        profile.experience.len(),
        profile.certifications.len()
    );

    let state = AppState::new(profile, config.clone());
    match &state.avatar {
        AvatarSource::Image { src, .. } => info!("Photo variant avatar: {src}"),
        AvatarSource::Initials(initials) => info!("Photo variant falls back to initials '{initials}'"),
    }
    info!(
        "Theme: {}, typing speed: {}ms, assets: {}",
        config.theme,
        config.typing_speed_ms,
        config.assets_dir.display()
    );

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
