pub mod health;

use axum::{http::Uri, routing::get, Router};
use tower_http::services::ServeDir;

use crate::errors::AppError;
use crate::profile::handlers as profile_handlers;
use crate::render::handlers as page_handlers;
use crate::state::AppState;
use crate::typing::handlers as typing_handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(page_handlers::handle_photo_page))
        .route("/initials", get(page_handlers::handle_initials_page))
        // API
        .route("/api/v1/profile", get(profile_handlers::handle_get_profile))
        .route(
            page_handlers::TYPING_ENDPOINT,
            get(typing_handlers::handle_typing_stream),
        )
        .nest_service("/assets", assets)
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::profile::default_profile;

    fn test_state(assets_dir: &std::path::Path) -> AppState {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.assets_dir = assets_dir.to_path_buf();
        AppState::new(default_profile(), config)
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(build_router(test_state(dir.path())), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "portfolio");
    }

    #[tokio::test]
    async fn test_photo_page_with_avatar_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("thihlinn.png"), b"png").unwrap();
        let (status, body) = get_body(build_router(test_state(dir.path())), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<img"));
        assert!(body.contains("src=\"/assets/thihlinn.png\""));
    }

    #[tokio::test]
    async fn test_photo_page_degrades_without_avatar_file() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(build_router(test_state(dir.path())), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<img"));
        assert!(body.contains(">TL</div>"));
    }

    #[tokio::test]
    async fn test_initials_page_never_has_image() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("thihlinn.png"), b"png").unwrap();
        let (status, body) = get_body(build_router(test_state(dir.path())), "/initials").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<img"));
        assert!(body.contains(">TL</div>"));
    }

    #[tokio::test]
    async fn test_profile_json() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) =
            get_body(build_router(test_state(dir.path())), "/api/v1/profile").await;
        assert_eq!(status, StatusCode::OK);
        let profile: crate::models::Profile = serde_json::from_str(&body).unwrap();
        assert_eq!(profile, default_profile());
    }

    #[tokio::test]
    async fn test_asset_is_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("thihlinn.png"), b"png").unwrap();
        let (status, body) =
            get_body(build_router(test_state(dir.path())), "/assets/thihlinn.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "png");
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_stream_ends_with_full_role() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) =
            get_body(build_router(test_state(dir.path())), "/api/v1/typing?speed=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("event: reveal\ndata: F\n"));
        assert!(body.contains("event: done\ndata: Fullstack Developer\n"));
        assert_eq!(body.matches("event: reveal").count(), "Fullstack Developer".len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_stream_survives_carriage_return_in_role() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());
        let mut profile = default_profile();
        profile.personal.role = "Full\r\nstack".to_string();
        state.profile = std::sync::Arc::new(profile);

        let (status, body) = get_body(build_router(state), "/api/v1/typing?speed=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains('\r'));
        assert!(body.contains("event: done\ndata: Full\ndata: stack\n"));
    }

    #[tokio::test]
    async fn test_typing_rejects_out_of_range_speed() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) =
            get_body(build_router(test_state(dir.path())), "/api/v1/typing?speed=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(build_router(test_state(dir.path())), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("NOT_FOUND"));
    }
}
