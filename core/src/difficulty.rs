use core::fmt;
use core::ops::Range;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Normal, Self::Hard];

    /// Number of random activations used to scramble a fresh board.
    ///
    /// The upper bound is exclusive: a draw of `low + floor(r * (high - low))`
    /// with `r` in `[0, 1)` never reaches `high`.
    pub const fn scramble_steps(self) -> Range<u8> {
        match self {
            Self::Easy => 1..5,
            Self::Normal => 6..10,
            Self::Hard => 11..18,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Normal
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
