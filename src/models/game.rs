//! Game records across the three lifecycle states.
//!
//! `status` determines which optional fields are populated: live games always
//! carry a score and clock, final games a final score and stats, scheduled
//! games neither. Construction goes through [`Game::scheduled`],
//! [`Game::live`], and [`Game::completed`] so the invariant holds by
//! construction; status is never changed on an existing record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sport::Sport;
use super::team::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Final,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Game clock for a live record: period number plus remaining time as a
/// `minutes:seconds` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClock {
    pub period: u8,
    pub time_remaining: String,
}

impl GameClock {
    pub fn from_seconds(period: u8, seconds: u32) -> Self {
        Self {
            period,
            time_remaining: format_remaining(seconds),
        }
    }

    /// Remaining time in whole seconds. A malformed string reads as zero.
    pub fn remaining_seconds(&self) -> u32 {
        let mut parts = self.time_remaining.splitn(2, ':');
        let minutes: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let seconds: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        minutes * 60 + seconds
    }

    /// Run the clock down by `seconds`, flooring at `0:00`.
    pub fn tick(&mut self, seconds: u32) {
        let remaining = self.remaining_seconds().saturating_sub(seconds);
        self.time_remaining = format_remaining(remaining);
    }
}

fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub sport: Sport,
    pub status: GameStatus,
    pub start_time: DateTime<Utc>,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<GameClock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<BTreeMap<String, String>>,
    pub broadcast: String,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
}

impl Game {
    #[allow(clippy::too_many_arguments)]
    fn base(
        id: String,
        sport: Sport,
        status: GameStatus,
        start_time: DateTime<Utc>,
        home_team: Team,
        away_team: Team,
        broadcast: String,
        venue: String,
    ) -> Self {
        Self {
            id,
            sport,
            status,
            start_time,
            home_team,
            away_team,
            score: None,
            final_score: None,
            clock: None,
            stats: None,
            broadcast,
            venue,
            last_update: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scheduled(
        id: String,
        sport: Sport,
        start_time: DateTime<Utc>,
        home_team: Team,
        away_team: Team,
        broadcast: String,
        venue: String,
    ) -> Self {
        Self::base(
            id,
            sport,
            GameStatus::Scheduled,
            start_time,
            home_team,
            away_team,
            broadcast,
            venue,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn live(
        id: String,
        sport: Sport,
        start_time: DateTime<Utc>,
        home_team: Team,
        away_team: Team,
        score: Score,
        clock: GameClock,
        broadcast: String,
        venue: String,
    ) -> Self {
        let mut game = Self::base(
            id,
            sport,
            GameStatus::Live,
            start_time,
            home_team,
            away_team,
            broadcast,
            venue,
        );
        game.score = Some(score);
        game.clock = Some(clock);
        game
    }

    #[allow(clippy::too_many_arguments)]
    pub fn completed(
        id: String,
        sport: Sport,
        start_time: DateTime<Utc>,
        home_team: Team,
        away_team: Team,
        final_score: Score,
        stats: BTreeMap<String, String>,
        broadcast: String,
        venue: String,
    ) -> Self {
        let mut game = Self::base(
            id,
            sport,
            GameStatus::Final,
            start_time,
            home_team,
            away_team,
            broadcast,
            venue,
        );
        game.final_score = Some(final_score);
        game.stats = Some(stats);
        game
    }

    pub fn is_live(&self) -> bool {
        self.status == GameStatus::Live
    }

    pub fn matchup(&self) -> String {
        format!(
            "{} @ {}",
            self.away_team.abbreviation, self.home_team.abbreviation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str) -> Team {
        Team {
            id: id.to_string(),
            name: "Team".to_string(),
            abbreviation: id.to_ascii_uppercase(),
            city: "City".to_string(),
            primary_color: "#000000".to_string(),
            secondary_color: "#ffffff".to_string(),
        }
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(GameClock::from_seconds(2, 754).time_remaining, "12:34");
        assert_eq!(GameClock::from_seconds(1, 5).time_remaining, "0:05");
        assert_eq!(GameClock::from_seconds(4, 0).time_remaining, "0:00");
    }

    #[test]
    fn test_clock_tick_floors_at_zero() {
        let mut clock = GameClock::from_seconds(4, 5);
        assert_eq!(clock.time_remaining, "0:05");
        clock.tick(30);
        assert_eq!(clock.time_remaining, "0:00");
        clock.tick(10);
        assert_eq!(clock.time_remaining, "0:00");
    }

    #[test]
    fn test_remaining_seconds_parses_back() {
        let clock = GameClock::from_seconds(3, 612);
        assert_eq!(clock.remaining_seconds(), 612);

        let malformed = GameClock {
            period: 1,
            time_remaining: "bogus".to_string(),
        };
        assert_eq!(malformed.remaining_seconds(), 0);
    }

    #[test]
    fn test_status_determines_optional_fields() {
        let scheduled = Game::scheduled(
            "g1".to_string(),
            Sport::Nfl,
            Utc::now(),
            team("gb"),
            team("chi"),
            "FOX".to_string(),
            "City Stadium".to_string(),
        );
        assert!(scheduled.score.is_none());
        assert!(scheduled.clock.is_none());
        assert!(scheduled.final_score.is_none());
        assert!(scheduled.stats.is_none());

        let live = Game::live(
            "g2".to_string(),
            Sport::Nba,
            Utc::now(),
            team("lal"),
            team("bos"),
            Score { home: 88, away: 90 },
            GameClock::from_seconds(3, 240),
            "TNT".to_string(),
            "City Arena".to_string(),
        );
        assert!(live.is_live());
        assert!(live.score.is_some());
        assert!(live.clock.is_some());
        assert!(live.final_score.is_none());

        let done = Game::completed(
            "g3".to_string(),
            Sport::Nhl,
            Utc::now(),
            team("bos"),
            team("nyr"),
            Score { home: 4, away: 2 },
            BTreeMap::new(),
            "ESPN".to_string(),
            "City Center".to_string(),
        );
        assert_eq!(done.status, GameStatus::Final);
        assert!(done.final_score.is_some());
        assert!(done.stats.is_some());
        assert!(done.clock.is_none());
    }

    #[test]
    fn test_wire_shape() {
        let live = Game::live(
            "g".to_string(),
            Sport::Nfl,
            Utc::now(),
            team("kc"),
            team("buf"),
            Score { home: 14, away: 10 },
            GameClock::from_seconds(2, 120),
            "CBS".to_string(),
            "City Stadium".to_string(),
        );
        let json = serde_json::to_string(&live).unwrap();
        assert!(json.contains("\"homeTeam\""));
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"timeRemaining\""));
        assert!(json.contains("\"status\":\"live\""));
        // Unpopulated optionals stay off the wire.
        assert!(!json.contains("finalScore"));
    }
}
