//! Welcome banner: "SIGNALS" in figlet with a red-to-green gradient.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};
use tracing::debug;

/// Flag red (#ef4444).
const FLAG_RED: (u8, u8, u8) = (0xef, 0x44, 0x44);
/// Flag green (#22c55e).
const FLAG_GREEN: (u8, u8, u8) = (0x22, 0xc5, 0x5e);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
pub(crate) fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn banner_lines() -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("SIGNALS").map(|fig| fig.to_string()))
        .map(|art| art.lines().map(str::to_string).collect())
        .unwrap_or_else(|| vec!["TRUTH IN SIGNALS".to_string()])
}

fn tagline() -> String {
    format!("v{}  🚩 red flags, 💚 green flags", env!("CARGO_PKG_VERSION"))
}

/// Art rows shaded red to green, then the tagline back in flag red.
fn shaded_lines() -> Vec<(String, (u8, u8, u8))> {
    let art = banner_lines();
    let last = art.len().saturating_sub(1).max(1) as f64;
    art.into_iter()
        .enumerate()
        .map(|(i, line)| (line, lerp_rgb(FLAG_RED, FLAG_GREEN, i as f64 / last)))
        .chain(std::iter::once((tagline(), FLAG_RED)))
        .collect()
}

fn write_banner(out: &mut impl Write) -> io::Result<()> {
    for (line, (r, g, b)) in shaded_lines() {
        queue!(
            out,
            SetForegroundColor(Color::Rgb { r, g, b }),
            Print(line),
            ResetColor,
            Print("\r\n")
        )?;
    }
    out.flush()
}

/// Prints the gradient banner and tagline. Terminal write errors are ignored.
pub fn print_welcome() {
    if let Err(e) = write_banner(&mut stdout().lock()) {
        debug!(error = %e, "banner not printed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(FLAG_RED, FLAG_GREEN, 0.0), FLAG_RED);
        assert_eq!(lerp_rgb(FLAG_RED, FLAG_GREEN, 1.0), FLAG_GREEN);
        assert_eq!(lerp_rgb(FLAG_RED, FLAG_GREEN, 7.0), FLAG_GREEN);
    }

    #[test]
    fn test_banner_has_art() {
        assert!(!banner_lines().is_empty());
    }

    #[test]
    fn test_shading_runs_red_to_green_then_tagline() {
        let lines = shaded_lines();
        assert!(lines.len() >= 2);
        assert_eq!(lines[0].1, FLAG_RED);
        assert_eq!(lines[lines.len() - 2].1, FLAG_GREEN);
        let (tag, color) = &lines[lines.len() - 1];
        assert!(tag.starts_with('v'));
        assert_eq!(*color, FLAG_RED);
    }

    #[test]
    fn test_write_banner_ends_with_tagline() {
        let mut buf = Vec::new();
        write_banner(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("red flags"));
        assert!(text.ends_with("\r\n"));
    }
}
