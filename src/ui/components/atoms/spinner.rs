const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns a spinner character based on elapsed time.
/// Advances one frame every 150ms, in step with the render schedule.
pub fn spinner_char(time_ms: u128) -> &'static str {
    SPINNER_FRAMES[(time_ms / 150) as usize % SPINNER_FRAMES.len()]
}
