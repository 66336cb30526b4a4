use serde::{Deserialize, Serialize};

/// Rendered shape of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Four-pointed sparkle.
    Glyph,
    /// Small round dot.
    Dot,
}

/// One star of a generated field. Positions are percentages of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarDescriptor {
    pub id: usize,
    pub vertical_position: f64,
    pub horizontal_position: f64,
    pub size: f64,
    pub twinkle_delay: f64,
    pub twinkle_duration: f64,
    pub drift_delay: f64,
    pub drift_duration: f64,
    pub variant: Variant,
}

/// The ordered stars generated for one seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarField {
    pub seed: i64,
    pub stars: Vec<StarDescriptor>,
}

impl StarField {
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarDescriptor> {
        self.stars.iter()
    }
}

impl<'a> IntoIterator for &'a StarField {
    type Item = &'a StarDescriptor;
    type IntoIter = std::slice::Iter<'a, StarDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.iter()
    }
}

/// Logical toggle state. Animated in-between frames belong to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Day,
    Night,
}

impl Mode {
    pub fn from_night(is_night: bool) -> Self {
        if is_night {
            Mode::Night
        } else {
            Mode::Day
        }
    }

    pub fn is_night(self) -> bool {
        self == Mode::Night
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Day => Mode::Night,
            Mode::Night => Mode::Day,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Day => write!(f, "Day"),
            Mode::Night => write!(f, "Night"),
        }
    }
}

/// Keys the toggle may receive while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// A discrete user interaction aimed at the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Primary pointer press on the track.
    Pointer,
    Key(Key),
}

impl Input {
    /// Enter and Space activate a switch; pointer presses always do.
    pub fn activates(self) -> bool {
        matches!(
            self,
            Input::Pointer | Input::Key(Key::Enter) | Input::Key(Key::Char(' '))
        )
    }
}
