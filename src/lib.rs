//! Day/night toggle core: a seeded starfield generator and a two-state
//! switch, plus the pure presentation values a renderer needs.

pub mod audio;
pub mod config;
pub mod presentation;
pub mod stars;
pub mod toggle;
pub mod types;

pub use stars::{generate, StarCache};
pub use toggle::{ModeChange, Toggle};
pub use types::{Input, Key, Mode, StarDescriptor, StarField, Variant};
