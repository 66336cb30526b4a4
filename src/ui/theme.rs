use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

// ── Frame palette ───────────────────────────────────────────────
pub const BG: Color = Color::Rgb(241, 245, 249);
pub const SURFACE: Color = Color::Rgb(255, 255, 255);
pub const BORDER: Color = Color::Rgb(203, 213, 225);
pub const BORDER_NIGHT: Color = Color::Rgb(51, 65, 85);

pub const TEXT: Color = Color::Rgb(30, 41, 59);
pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184);
pub const ACCENT: Color = Color::Rgb(96, 165, 250);

// ── Sky palette ─────────────────────────────────────────────────
pub const DAY_SKY: Color = Color::Rgb(110, 191, 247);
pub const NIGHT_SKY: Color = Color::Rgb(26, 28, 41);
pub const SUN: Color = Color::Rgb(255, 208, 45);
pub const SUN_RAY: Color = Color::Rgb(254, 240, 138);
pub const MOON: Color = Color::Rgb(217, 220, 225);
pub const CRATER: Color = Color::Rgb(176, 181, 187);
pub const CLOUD: Color = Color::Rgb(255, 255, 255);
pub const STAR: Color = Color::Rgb(255, 255, 255);
pub const NIGHT_GLOW: Color = Color::Rgb(59, 130, 246);
pub const DAY_GLOW: Color = Color::Rgb(147, 197, 253);

/// Parse a configured colour, falling back when the terminal cannot show it.
pub fn parse_color(value: &str, fallback: Color) -> Color {
    match Color::from_str(value) {
        Ok(color @ Color::Rgb(..)) => color,
        _ => fallback,
    }
}

/// Mix `a` towards `b` by `t`. Non-RGB colours snap at the midpoint.
pub fn blend(a: Color, b: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => {
            let mix = |x: u8, y: u8| {
                let (x, y) = (f64::from(x), f64::from(y));
                (x + (y - x) * t).round() as u8
            };
            Color::Rgb(mix(ar, br), mix(ag, bg), mix(ab, bb))
        }
        _ if t < 0.5 => a,
        _ => b,
    }
}

pub fn title_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn subtitle_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn panel_title_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn footer_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn border_style(night: bool) -> Style {
    if night {
        Style::default().fg(BORDER_NIGHT)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn log_style(mode: Option<daybreak::Mode>) -> Style {
    match mode {
        Some(daybreak::Mode::Day) => Style::default().fg(Color::Rgb(202, 138, 4)),
        Some(daybreak::Mode::Night) => Style::default().fg(Color::Rgb(79, 70, 229)),
        None => Style::default().fg(TEXT_DIM),
    }
}
