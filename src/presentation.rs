//! Pure mapping from toggle mode to what the renderer should show.
//!
//! Nothing here animates. Renderers interpolate between the values for the
//! old and the new mode over the durations given below.

use crate::types::{Mode, StarDescriptor, Variant};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Background, clouds, stars and handle.
pub const TRANSITION: Duration = Duration::from_millis(700);
/// Sun rays fade a little faster than the body moves.
pub const RAYS_TRANSITION: Duration = Duration::from_millis(500);

/// Fraction of `twinkle_delay` used to stagger a star's entrance.
const ENTRY_STAGGER: f64 = 0.1;
const DOT_OPACITY: f64 = 0.7;

/// Physical layout of the switch, in abstract units (pixels at scale 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub track_width: f64,
    pub track_height: f64,
    pub handle_size: f64,
    /// Gap between the handle and the track edge.
    pub padding: f64,
    pub border: f64,
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self {
            track_width: 328.0,
            track_height: 128.0,
            handle_size: 120.0,
            padding: 4.0,
            border: 4.0,
        }
    }
}

impl TrackGeometry {
    /// Distance the handle moves so it sits flush with either edge.
    pub fn travel(&self) -> f64 {
        (self.track_width - self.handle_size - 2.0 * self.padding).max(0.0)
    }

    /// Handle translation from its Day position.
    pub fn handle_offset(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Day => 0.0,
            Mode::Night => self.travel(),
        }
    }

    /// Size of the whole control including its border, at `scale`.
    pub fn outer_size(&self, scale: f64) -> (f64, f64) {
        (
            (self.track_width + 2.0 * self.border) * scale,
            (self.track_height + 2.0 * self.border) * scale,
        )
    }
}

/// Target values of every decoration layer for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layers {
    /// The sun disc is always drawn; the moon slides over it.
    pub sun_opacity: f64,
    /// Moon overlay offset as a fraction of the body width. 1.0 is fully off the body.
    pub moon_offset: f64,
    pub rays_opacity: f64,
    pub day_gradient_opacity: f64,
    pub night_gradient_opacity: f64,
    pub cloud_opacity: f64,
    /// Downward cloud displacement in track units.
    pub cloud_drop: f64,
}

impl Layers {
    pub const CLOUD_DROP: f64 = 96.0;

    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Day => Self {
                sun_opacity: 1.0,
                moon_offset: 1.0,
                rays_opacity: 1.0,
                day_gradient_opacity: 1.0,
                night_gradient_opacity: 0.0,
                cloud_opacity: 1.0,
                cloud_drop: 0.0,
            },
            Mode::Night => Self {
                sun_opacity: 1.0,
                moon_offset: 0.0,
                rays_opacity: 0.0,
                day_gradient_opacity: 0.0,
                night_gradient_opacity: 1.0,
                cloud_opacity: 0.0,
                cloud_drop: Self::CLOUD_DROP,
            },
        }
    }

    /// Linear blend between two layer sets, `t` in [0, 1].
    pub fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            sun_opacity: mix(from.sun_opacity, to.sun_opacity),
            moon_offset: mix(from.moon_offset, to.moon_offset),
            rays_opacity: mix(from.rays_opacity, to.rays_opacity),
            day_gradient_opacity: mix(from.day_gradient_opacity, to.day_gradient_opacity),
            night_gradient_opacity: mix(from.night_gradient_opacity, to.night_gradient_opacity),
            cloud_opacity: mix(from.cloud_opacity, to.cloud_opacity),
            cloud_drop: mix(from.cloud_drop, to.cloud_drop),
        }
    }
}

/// Resting opacity of a star in `mode`.
pub fn star_opacity(mode: Mode, variant: Variant) -> f64 {
    match (mode, variant) {
        (Mode::Day, _) => 0.0,
        (Mode::Night, Variant::Glyph) => 1.0,
        (Mode::Night, Variant::Dot) => DOT_OPACITY,
    }
}

/// How long a star waits before starting its entrance/exit.
pub fn star_entry_delay(star: &StarDescriptor) -> Duration {
    Duration::from_secs_f64(star.twinkle_delay * ENTRY_STAGGER)
}

/// Track background colours. Values pass through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub day: String,
    pub night: String,
}

impl Palette {
    pub fn background(&self, mode: Mode) -> &str {
        match mode {
            Mode::Day => &self.day,
            Mode::Night => &self.night,
        }
    }
}

#[cfg(test)]
#[path = "presentation_test.rs"]
mod tests;
