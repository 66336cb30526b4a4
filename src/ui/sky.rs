//! Terminal rendering of the switch: track, glows, stars, clouds and the
//! sun/moon handle. All geometry is computed in track units and mapped to
//! cells at the end, so the picture scales with the track.

use super::theme;
use crate::app::{App, Transition};
use daybreak::presentation::{
    star_entry_delay, star_opacity, Layers, TrackGeometry, RAYS_TRANSITION, TRANSITION,
};
use daybreak::{Mode, StarField, Variant};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Widget};
use ratatui::Frame;
use std::f64::consts::TAU;
use std::time::Instant;

/// One revolution of the sun rays, in seconds.
const RAY_PERIOD: f64 = 12.0;
const STAR_DRIFT: f64 = 4.0;
const STAR_ENTRY_DROP: f64 = 12.0;

struct Circle {
    x: f64,
    y: f64,
    r: f64,
    alpha: f64,
}

impl Circle {
    const fn new(x: f64, y: f64, r: f64, alpha: f64) -> Self {
        Self { x, y, r, alpha }
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.x).hypot(y - self.y) <= self.r
    }
}

pub fn draw_sky(f: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();
    let field = app.stars.field();
    let widget = SkyWidget {
        field: &field,
        geometry: &app.geometry,
        day: theme::parse_color(&app.config.day_color, theme::DAY_SKY),
        night: theme::parse_color(&app.config.night_color, theme::NIGHT_SKY),
        transition: app.transition,
        now,
        clock: app.clock(),
    };
    f.render_widget(widget, area);
}

struct SkyWidget<'a> {
    field: &'a StarField,
    geometry: &'a TrackGeometry,
    day: Color,
    night: Color,
    transition: Transition,
    now: Instant,
    clock: f64,
}

/// Maps track units to cells of `inner`.
struct Canvas<'b> {
    buf: &'b mut Buffer,
    inner: Rect,
    width: f64,
    height: f64,
}

impl Canvas<'_> {
    /// Cells whose centre may fall within `r` of (`cx`, `cy`), with that
    /// centre in track units. Only the bounding rows and columns are visited.
    fn cells_around(
        &self,
        cx: f64,
        cy: f64,
        r: f64,
    ) -> impl Iterator<Item = (u16, u16, f64, f64)> + 'static {
        let inner = self.inner;
        let sx = self.width / f64::from(inner.width);
        let sy = self.height / f64::from(inner.height);
        let span = |lo: f64, hi: f64, step: f64, len: u16| {
            let first = (lo / step).floor().clamp(0.0, f64::from(len)) as u16;
            let last = ((hi / step).floor() + 1.0).clamp(0.0, f64::from(len)) as u16;
            first..last
        };
        let cols = span(cx - r, cx + r, sx, inner.width);
        let rows = span(cy - r, cy + r, sy, inner.height);
        rows.flat_map(move |row| {
            cols.clone().map(move |col| {
                (
                    inner.x + col,
                    inner.y + row,
                    (f64::from(col) + 0.5) * sx,
                    (f64::from(row) + 0.5) * sy,
                )
            })
        })
    }

    fn cell_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if !(0.0..self.width).contains(&x) || !(0.0..self.height).contains(&y) {
            return None;
        }
        let c = (x / self.width * f64::from(self.inner.width)) as u16;
        let r = (y / self.height * f64::from(self.inner.height)) as u16;
        Some((self.inner.x + c, self.inner.y + r))
    }

    fn tint(&mut self, circle: &Circle, color: Color, strength: f64, soft: bool) {
        if strength <= 0.0 {
            return;
        }
        for (col, row, x, y) in self.cells_around(circle.x, circle.y, circle.r) {
            let d = (x - circle.x).hypot(y - circle.y);
            if d > circle.r {
                continue;
            }
            let falloff = if soft { 1.0 - d / circle.r } else { 1.0 };
            let cell = &mut self.buf[(col, row)];
            cell.set_bg(theme::blend(cell.bg, color, circle.alpha * strength * falloff));
            if !soft && circle.alpha * strength > 0.5 {
                cell.set_char(' ');
            }
        }
    }
}

impl Widget for SkyWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let night = night_amount(&self.transition, self.now, ease_in_out);
        let rays = night_amount_over(&self.transition, self.now, RAYS_TRANSITION, ease_in_out);
        let day_layers = Layers::for_mode(Mode::Day);
        let night_layers = Layers::for_mode(Mode::Night);
        let layers = Layers::lerp(&day_layers, &night_layers, night);
        let rays_opacity = Layers::lerp(&day_layers, &night_layers, rays).rays_opacity;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style(night > 0.5))
            .style(Style::default().bg(theme::blend(self.day, self.night, night)));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let g = self.geometry;
        let (w, h) = (g.track_width, g.track_height);
        let mut canvas = Canvas {
            buf,
            inner,
            width: w,
            height: h,
        };

        let night_glows = [
            (Circle::new(0.2 * w + 128.0, -0.5 * h + 128.0, 128.0, 0.05), theme::STAR),
            (Circle::new(0.9 * w - 96.0, 1.2 * h - 96.0, 96.0, 0.10), theme::NIGHT_GLOW),
        ];
        let day_glows = [
            (Circle::new(1.1 * w - 128.0, -0.2 * h + 128.0, 128.0, 0.20), theme::CLOUD),
            (Circle::new(0.1 * w + 112.0, 1.5 * h - 112.0, 112.0, 0.30), theme::DAY_GLOW),
        ];
        for (glow, color) in &night_glows {
            canvas.tint(glow, *color, layers.night_gradient_opacity, true);
        }
        for (glow, color) in &day_glows {
            canvas.tint(glow, *color, layers.day_gradient_opacity, true);
        }

        self.draw_stars(&mut canvas);

        // Clouds, bottom right plus a filler on the left.
        let drop = layers.cloud_drop;
        for cloud in [
            Circle::new(w - 64.0, h - 40.0 + drop, 64.0, 0.95),
            Circle::new(w - 112.0, h - 32.0 + drop, 48.0, 0.90),
            Circle::new(w - 184.0, h - 24.0 + drop, 56.0, 0.85),
            Circle::new(w - 30.0, h - 32.0 + drop, 40.0, 0.80),
            Circle::new(192.0, h - 24.0 + drop, 64.0, 0.60),
        ] {
            canvas.tint(&cloud, theme::CLOUD, layers.cloud_opacity, false);
        }

        let handle = night_amount(&self.transition, self.now, ease_in_out_back);
        let radius = g.handle_size / 2.0;
        let cx = g.padding + g.travel() * handle + radius;
        let cy = g.padding + radius;
        self.draw_rays(&mut canvas, cx, cy, radius, rays_opacity);
        draw_body(&mut canvas, cx, cy, radius, layers.moon_offset);
    }
}

impl SkyWidget<'_> {
    fn draw_stars(&self, canvas: &mut Canvas<'_>) {
        let elapsed = self.transition.elapsed(self.now);
        for star in self.field {
            let local = elapsed.saturating_sub(star_entry_delay(star));
            let p = (local.as_secs_f64() / TRANSITION.as_secs_f64()).min(1.0);
            let visible = endpoint_blend(&self.transition, ease_in_out(p));

            let opacity = star_opacity(Mode::Night, star.variant) * visible;
            if opacity < 0.05 {
                continue;
            }

            let twinkle = 0.5
                + 0.5 * (TAU * (self.clock - star.twinkle_delay) / star.twinkle_duration).cos();
            let drift =
                (TAU * (self.clock - star.drift_delay) / star.drift_duration).sin() * STAR_DRIFT;

            let x = star.horizontal_position / 100.0 * canvas.width;
            let y = star.vertical_position / 100.0 * canvas.height
                + drift
                + (1.0 - visible) * STAR_ENTRY_DROP;

            let Some(pos) = canvas.cell_at(x, y) else {
                continue;
            };
            let brightness = opacity * (0.35 + 0.65 * twinkle);
            let cell = &mut canvas.buf[pos];
            cell.set_char(star_char(star.variant, star.size));
            cell.set_fg(theme::blend(cell.bg, theme::STAR, brightness));
        }
    }

    fn draw_rays(&self, canvas: &mut Canvas<'_>, cx: f64, cy: f64, radius: f64, opacity: f64) {
        if opacity < 0.02 {
            return;
        }
        let spin = self.clock / RAY_PERIOD * TAU;
        for i in 0..16 {
            let long = i % 2 == 0;
            let angle = spin + f64::from(i) * TAU / 16.0;
            let (reach, alpha) = if long { (32.0, 0.4) } else { (14.0, 0.3) };
            let mut d = radius + 4.0;
            while d <= radius + reach {
                if let Some(pos) = canvas.cell_at(cx + d * angle.cos(), cy + d * angle.sin()) {
                    let cell = &mut canvas.buf[pos];
                    cell.set_bg(theme::blend(cell.bg, theme::SUN_RAY, alpha * opacity));
                }
                d += 4.0;
            }
        }
    }
}

/// Sun disc with the moon sliding over it from the right.
fn draw_body(canvas: &mut Canvas<'_>, cx: f64, cy: f64, radius: f64, moon_offset: f64) {
    let diameter = radius * 2.0;
    let craters = [
        Circle::new(84.0, 28.0, 12.0, 1.0),
        Circle::new(42.0, 78.0, 18.0, 1.0),
        Circle::new(80.0, 80.0, 8.0, 1.0),
    ];
    let scale = diameter / 120.0;

    for (col, row, x, y) in canvas.cells_around(cx, cy, radius) {
        let d = (x - cx).hypot(y - cy);
        if d > radius {
            continue;
        }
        let lx = x - (cx - radius);
        let ly = y - (cy - radius);
        let moon_x = lx - moon_offset * diameter;

        let mut color = if moon_x >= 0.0 {
            let crater = craters
                .iter()
                .any(|c| c.contains(moon_x / scale, ly / scale));
            if crater {
                theme::CRATER
            } else {
                theme::MOON
            }
        } else {
            theme::SUN
        };

        // Highlight towards the upper left.
        let shine = (1.0 - lx.hypot(ly) / (diameter * 1.2)).max(0.0) * 0.35;
        color = theme::blend(color, Color::Rgb(255, 255, 255), shine);

        let cell = &mut canvas.buf[(col, row)];
        cell.set_char(' ');
        cell.set_bg(color);
    }
}

fn star_char(variant: Variant, size: f64) -> char {
    match variant {
        Variant::Glyph if size >= 15.0 => '✦',
        Variant::Glyph => '+',
        Variant::Dot if size >= 15.0 => '•',
        Variant::Dot => '·',
    }
}

/// How far towards Night the picture is, after easing.
fn night_amount(t: &Transition, now: Instant, ease: fn(f64) -> f64) -> f64 {
    night_amount_over(t, now, TRANSITION, ease)
}

fn night_amount_over(
    t: &Transition,
    now: Instant,
    duration: std::time::Duration,
    ease: fn(f64) -> f64,
) -> f64 {
    endpoint_blend(t, ease(t.progress(now, duration)))
}

fn endpoint_blend(t: &Transition, eased: f64) -> f64 {
    match (t.from, t.to) {
        (from, to) if from == to => {
            if to.is_night() {
                1.0
            } else {
                0.0
            }
        }
        (_, Mode::Night) => eased,
        (_, Mode::Day) => 1.0 - eased,
    }
}

pub fn ease_in_out(x: f64) -> f64 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

/// Overshoots slightly past both ends, like a springy handle.
pub fn ease_in_out_back(x: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C2: f64 = C1 * 1.525;
    if x < 0.5 {
        (2.0 * x).powi(2) * ((C2 + 1.0) * 2.0 * x - C2) / 2.0
    } else {
        ((2.0 * x - 2.0).powi(2) * ((C2 + 1.0) * (x * 2.0 - 2.0) + C2) + 2.0) / 2.0
    }
}

#[cfg(test)]
#[path = "sky_test.rs"]
mod tests;
