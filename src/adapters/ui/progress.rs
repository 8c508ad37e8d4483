//! Step progress bars (quiz questions, poll statements).

use indicatif::{ProgressBar, ProgressStyle};

const STEP_TEMPLATE: &str = "{prefix} [{bar:30.magenta/white}] {pos}/{len}";

/// Draws a one-line bar at `position` of `total` and leaves it on screen.
pub fn draw_step(prefix: &str, position: usize, total: usize) {
    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template(STEP_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░");
    bar.set_style(style);
    bar.set_prefix(prefix.to_string());
    bar.set_position(position.min(total) as u64);
    bar.abandon();
}

/// Percentage bar for a poll reveal, e.g. `🚩 ████████░░ 78%`.
pub fn percent_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}
