use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::typing::{reveal_stream, speed_from_millis, RevealSnapshot, TypingTicker};

#[derive(Deserialize)]
pub struct TypingQuery {
    /// Per-character delay in milliseconds; falls back to TYPING_SPEED_MS.
    pub speed: Option<u64>,
}

/// GET /api/v1/typing
/// Streams the profile role as it is revealed: one `reveal` event per prefix,
/// then a single `done` event. The ticker lives exactly as long as the connection.
pub async fn handle_typing_stream(
    State(state): State<AppState>,
    Query(params): Query<TypingQuery>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let speed_ms = params.speed.unwrap_or(state.config.typing_speed_ms);
    let speed = speed_from_millis(speed_ms).map_err(AppError::Validation)?;

    let ticker = TypingTicker::spawn(&state.profile.personal.role, speed);
    let events = reveal_stream(ticker)
        .flat_map(|snapshot| stream::iter(snapshot_events(&snapshot)))
        .map(Ok);

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// SSE data lines may not contain `\r`; normalize every line break to `\n`
/// so `Event::data` can split them into separate `data:` lines.
fn event_data(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn snapshot_events(snapshot: &RevealSnapshot) -> Vec<Event> {
    let mut events = Vec::with_capacity(2);
    let data = event_data(&snapshot.revealed);
    if snapshot.position > 0 {
        events.push(Event::default().event("reveal").data(&data));
    }
    if snapshot.is_done() {
        events.push(Event::default().event("done").data(&data));
    }
    events
}
