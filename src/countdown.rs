//! `HH:MM:SS` rendering of the time left until the next deal

use chrono::Duration;

/// Format `duration` rounded to the nearest second as `HH:MM:SS`.
///
/// Negative durations get a single leading `-` in front of the magnitude,
/// so a deal that started 61 seconds ago renders as `-00:01:01`. Hours do
/// not wrap at 24.
pub fn format_countdown(duration: Duration) -> String {
    let millis = duration.num_milliseconds();
    let total = (millis.unsigned_abs() + 500) / 1000;

    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;

    let sign = if millis < 0 && total > 0 { "-" } else { "" };
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}
