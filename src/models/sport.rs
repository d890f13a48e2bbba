//! Supported sports and their sport-specific tuning knobs.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Nfl,
    Nba,
    Mlb,
    Nhl,
}

impl Sport {
    pub const ALL: [Sport; 4] = [Sport::Nfl, Sport::Nba, Sport::Mlb, Sport::Nhl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Nfl => "nfl",
            Sport::Nba => "nba",
            Sport::Mlb => "mlb",
            Sport::Nhl => "nhl",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Sport> {
        match tag.to_ascii_lowercase().as_str() {
            "nfl" => Some(Sport::Nfl),
            "nba" => Some(Sport::Nba),
            "mlb" => Some(Sport::Mlb),
            "nhl" => Some(Sport::Nhl),
            _ => None,
        }
    }

    /// Inclusive per-side score range for an in-progress game.
    pub fn live_score_range(&self) -> (u32, u32) {
        match self {
            Sport::Nfl => (0, 28),
            Sport::Nba => (60, 120),
            Sport::Mlb => (0, 8),
            Sport::Nhl => (0, 4),
        }
    }

    /// Inclusive per-side score range for a completed game. Higher than the
    /// live range so final totals look like finished games.
    pub fn final_score_range(&self) -> (u32, u32) {
        match self {
            Sport::Nfl => (10, 45),
            Sport::Nba => (85, 135),
            Sport::Mlb => (1, 12),
            Sport::Nhl => (1, 7),
        }
    }

    /// Plausible single-event score increments during live play.
    pub fn score_increments(&self) -> &'static [u32] {
        match self {
            Sport::Nfl => &[3, 7],
            Sport::Nba => &[1, 2, 3],
            Sport::Mlb => &[1, 2],
            Sport::Nhl => &[1],
        }
    }

    /// Regulation periods (quarters, innings, periods).
    pub fn period_count(&self) -> u8 {
        match self {
            Sport::Nfl | Sport::Nba => 4,
            Sport::Mlb => 9,
            Sport::Nhl => 3,
        }
    }

    /// Length of one period in minutes. MLB has no real game clock; live MLB
    /// records still carry a synthetic one so every live game has a clock.
    pub fn period_minutes(&self) -> u32 {
        match self {
            Sport::Nfl => 15,
            Sport::Nba => 12,
            Sport::Mlb => 20,
            Sport::Nhl => 20,
        }
    }

    pub fn venue_suffix(&self) -> &'static str {
        match self {
            Sport::Nfl => "Stadium",
            Sport::Nba => "Arena",
            Sport::Mlb => "Park",
            Sport::Nhl => "Center",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
