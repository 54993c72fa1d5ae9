// Typing-reveal effect: the pure state machine, its single-timer driver,
// and the SSE endpoint that streams the hero subtitle to the page.

pub mod handlers;
pub mod reveal;
pub mod ticker;

use std::time::Duration;

use futures::stream::{self, Stream};

pub use ticker::{RevealSnapshot, TypingTicker};

/// Per-character delay of the hero subtitle, used when none is configured.
pub const HERO_SPEED_MS: u64 = 80;

/// Accepted per-character delay range, in milliseconds.
pub const MIN_SPEED_MS: u64 = 1;
pub const MAX_SPEED_MS: u64 = 5_000;

/// Converts a millisecond delay into a reveal speed, rejecting values outside
/// `MIN_SPEED_MS..=MAX_SPEED_MS`.
pub fn speed_from_millis(ms: u64) -> Result<Duration, String> {
    if (MIN_SPEED_MS..=MAX_SPEED_MS).contains(&ms) {
        Ok(Duration::from_millis(ms))
    } else {
        Err(format!(
            "typing speed must be between {MIN_SPEED_MS} and {MAX_SPEED_MS} ms, got {ms}"
        ))
    }
}

/// Yields one snapshot per newly revealed prefix, ending with the terminal one.
///
/// The stream owns the ticker: dropping the stream (e.g. the client going
/// away) cancels the pending timer.
pub fn reveal_stream(ticker: TypingTicker) -> impl Stream<Item = RevealSnapshot> + Send {
    let rx = ticker.subscribe();
    stream::unfold(Some((ticker, rx, 0usize)), |state| async move {
        let (ticker, mut rx, last) = state?;
        loop {
            let current = rx.borrow_and_update().clone();
            if current.is_done() {
                return Some((current, None));
            }
            if current.position > last {
                let position = current.position;
                return Some((current, Some((ticker, rx, position))));
            }
            if rx.changed().await.is_err() {
                return None;
            }
        }
    })
}
