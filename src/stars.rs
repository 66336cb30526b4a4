//! Seeded night-sky generation.
//!
//! A field is a pure function of its seed: the same seed yields the same
//! stars, bit for bit, in every process.

use crate::types::{StarDescriptor, StarField, Variant};
use std::sync::Arc;

/// Modulus of the multiplicative generator (2^31 - 1).
const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 16_807;
/// Keeps seed 0 off the degenerate state and apart from other consumers of the seed.
const SEED_OFFSET: i64 = 12_345;

const MIN_STARS: usize = 5;
const STAR_COUNT_SPREAD: f64 = 4.0;

/// Park-Miller minimal standard stream. Lives for exactly one `generate` call.
struct RandomStream {
    state: i64,
}

impl RandomStream {
    fn new(seed: i64) -> Self {
        let mut state = (i128::from(seed) % i128::from(MODULUS)) as i64;
        if state <= 0 {
            state += MODULUS - 1;
        }
        // -(M - 1) lands on zero above.
        if state == 0 {
            state = MODULUS - 1;
        }
        Self { state }
    }

    /// Next value in [0, 1).
    fn draw(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }
}

/// Generate the star field for `seed`.
pub fn generate(seed: i64) -> StarField {
    let offset = (i128::from(seed) + i128::from(SEED_OFFSET)) % i128::from(MODULUS);
    let mut stream = RandomStream::new(offset as i64);

    let count = MIN_STARS + (stream.draw() * STAR_COUNT_SPREAD).floor() as usize;
    let stars = (0..count).map(|id| next_star(&mut stream, id)).collect();

    StarField { seed, stars }
}

// Draw order is part of the output format.
fn next_star(stream: &mut RandomStream, id: usize) -> StarDescriptor {
    let vertical_position = 15.0 + stream.draw() * 70.0;
    let horizontal_position = 5.0 + stream.draw() * 50.0;
    let size = 8.0 + stream.draw() * 12.0;
    let twinkle_delay = stream.draw() * 3.0;
    let twinkle_duration = 2.0 + stream.draw() * 3.0;
    let variant = if stream.draw() > 0.6 {
        Variant::Dot
    } else {
        Variant::Glyph
    };
    let drift_delay = stream.draw() * 5.0;
    let drift_duration = 6.0 + stream.draw() * 6.0;

    StarDescriptor {
        id,
        vertical_position,
        horizontal_position,
        size,
        twinkle_delay,
        twinkle_duration,
        drift_delay,
        drift_duration,
        variant,
    }
}

/// Holds the field for the current seed and regenerates it when the seed changes.
#[derive(Debug, Clone)]
pub struct StarCache {
    field: Arc<StarField>,
}

impl StarCache {
    pub fn new(seed: i64) -> Self {
        Self {
            field: Arc::new(generate(seed)),
        }
    }

    pub fn seed(&self) -> i64 {
        self.field.seed
    }

    pub fn field(&self) -> Arc<StarField> {
        Arc::clone(&self.field)
    }

    /// Switch to `seed`. Returns `true` when the field was regenerated.
    pub fn set_seed(&mut self, seed: i64) -> bool {
        if seed == self.field.seed {
            return false;
        }
        self.field = Arc::new(generate(seed));
        tracing::debug!(seed, stars = self.field.len(), "star field regenerated");
        true
    }
}

#[cfg(test)]
#[path = "stars_test.rs"]
mod tests;
