//! Pure functions for calculating animation deadlines.
//!
//! These functions are I/O-free and deterministic, suitable for use in the app layer.
//! The UI layer uses the returned deadlines to schedule wake-ups.

use std::time::{Duration, Instant};

use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

/// Interval for spinner animation updates (150ms for smooth animation at ~6.7 FPS)
const SPINNER_INTERVAL: Duration = Duration::from_millis(150);

/// Interval for cursor blink updates (500ms for standard blink rate)
const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

const TIMER_TICK: Duration = Duration::from_secs(1);

/// Calculates the next animation deadline based on the current state.
///
/// # Animation sources (in priority order):
/// 1. Spinner: a run or submit is pending
/// 2. Message timeout: status messages with expiration
/// 3. Session timer: the header clock rolls over to the next second
/// 4. Cursor blink: editor in Insert mode
pub fn next_animation_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    let mut earliest: Option<Instant> = None;

    if state.execution.any_pending() {
        earliest = min_instant(earliest, Some(now + SPINNER_INTERVAL));
    }

    if let Some(expires_at) = state.messages.expires_at {
        earliest = min_instant(earliest, Some(expires_at));
    }

    earliest = min_instant(earliest, Some(next_timer_tick(state.session.started_at, now)));

    if state.ui.input_mode == InputMode::Insert {
        earliest = min_instant(earliest, Some(now + CURSOR_BLINK_INTERVAL));
    }

    earliest
}

/// The instant the elapsed clock next shows a new second.
fn next_timer_tick(started_at: Instant, now: Instant) -> Instant {
    let elapsed = now.saturating_duration_since(started_at);
    let whole_secs = elapsed.as_secs() + 1;
    started_at + TIMER_TICK * u32::try_from(whole_secs).unwrap_or(u32::MAX)
}

/// Returns the earlier of two optional instants.
fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
