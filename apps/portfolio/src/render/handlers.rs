use axum::extract::State;
use chrono::{Datelike, Utc};
use maud::Markup;
use tracing::debug;

use crate::render::{render_page, PageVariant, RenderOptions};
use crate::state::AppState;

/// Path of the typing SSE endpoint, as seen by the browser.
pub const TYPING_ENDPOINT: &str = "/api/v1/typing";

fn render_variant(state: &AppState, variant: PageVariant) -> Markup {
    let personal = &state.profile.personal;
    let options = RenderOptions {
        theme: state.config.theme,
        avatar: variant.avatar(&state.avatar, &personal.initials()),
        year: Utc::now().year(),
        typing_endpoint: TYPING_ENDPOINT.to_string(),
    };
    debug!(?variant, "rendering portfolio page");
    render_page(&state.profile, &options)
}

/// GET /
pub async fn handle_photo_page(State(state): State<AppState>) -> Markup {
    render_variant(&state, PageVariant::Photo)
}

/// GET /initials
pub async fn handle_initials_page(State(state): State<AppState>) -> Markup {
    render_variant(&state, PageVariant::Initials)
}
