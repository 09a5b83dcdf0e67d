use std::fmt;

use cozy_chess::Color;
use utils::color_name;

/// Finite stand-in for forced mate scores, signed from White's perspective.
pub const MATE_SCORE: i32 = 100_000;

/// Centipawn boundaries between advantage buckets. A score below `equal` in
/// magnitude favors nobody; anything at or above `much` is winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub equal: i32,
    pub slight: i32,
    pub much: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            equal: 60,
            slight: 125,
            much: 250,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Advantage {
    Equal,
    Slight,
    Much,
    Winning,
}

impl Advantage {
    pub fn describe(&self) -> &'static str {
        match self {
            Advantage::Equal => "equal",
            Advantage::Slight => "slightly better",
            Advantage::Much => "much better",
            Advantage::Winning => "winning",
        }
    }
}

/// Who is better and by roughly how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvantageVerdict {
    pub favored: Option<Color>,
    pub advantage: Advantage,
}

impl AdvantageVerdict {
    /// Classify a White-relative centipawn score.
    pub fn from_score(score: i32, thresholds: &Thresholds) -> Self {
        let magnitude = score.saturating_abs();
        if magnitude < thresholds.equal {
            return Self {
                favored: None,
                advantage: Advantage::Equal,
            };
        }

        let advantage = if magnitude < thresholds.slight {
            Advantage::Slight
        } else if magnitude < thresholds.much {
            Advantage::Much
        } else {
            Advantage::Winning
        };

        let favored = if score > 0 { Color::White } else { Color::Black };

        Self {
            favored: Some(favored),
            advantage,
        }
    }
}

impl fmt::Display for AdvantageVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.favored {
            None => write!(f, "Position is equal"),
            Some(color) => write!(
                f,
                "{} is {} because:",
                color_name(color),
                self.advantage.describe()
            ),
        }
    }
}
