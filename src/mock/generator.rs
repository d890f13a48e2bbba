//! Synthetic game data with simulated live-score progression.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::models::{Game, GameClock, GameStatus, Score, Sport, Team};

use super::catalog::TeamCatalog;

/// Live games generated per configured sport.
const LIVE_GAMES_PER_SPORT: usize = 3;

/// Completed games generated per configured sport.
const RECENT_GAMES_PER_SPORT: usize = 5;

/// Scheduled games generated per configured sport.
const UPCOMING_GAMES_PER_SPORT: usize = 6;

/// Completed games are spread over this many hours in the past.
const RECENT_SPREAD_HOURS: i64 = 72;

/// Scheduled games are spread over this many hours ahead.
const UPCOMING_SPREAD_HOURS: i64 = 240;

/// Default artificial latency applied to every read, emulating a network
/// round trip.
const DEFAULT_LATENCY_MS: u64 = 150;

/// Probability that a live game scores on one update pass.
const SCORE_CHANCE: f64 = 0.3;

/// Probability that a live game's clock runs down on one update pass.
const CLOCK_CHANCE: f64 = 0.7;

const BROADCASTS: [&str; 6] = ["ESPN", "FOX", "CBS", "NBC", "ABC", "TNT"];

pub const DEFAULT_RECENT_HOURS: i64 = 24;
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// Construction-time knobs for [`MockGenerator`].
pub struct GeneratorConfig {
    /// Fixed RNG seed for reproducible batches; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Artificial read latency. Zero disables the delay entirely.
    pub latency: StdDuration,
    pub clock: Arc<dyn Clock>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            latency: StdDuration::from_millis(DEFAULT_LATENCY_MS),
            clock: Arc::new(SystemClock),
        }
    }
}

/// In-memory mock game feed.
///
/// One generation pass at construction produces three disjoint batches per
/// sport (live, recent/final, upcoming/scheduled); a game's status never
/// changes afterwards. The live batch's scores and clocks are mutated in
/// place by [`update_live_games`]; reads return snapshots, so callers
/// re-fetch to observe changes.
///
/// Each instance owns its game list exclusively - construct one per test for
/// isolation instead of sharing a process-wide feed.
///
/// [`update_live_games`]: MockGenerator::update_live_games
pub struct MockGenerator {
    games: RwLock<Vec<Game>>,
    rng: Mutex<StdRng>,
    clock: Arc<dyn Clock>,
    latency: StdDuration,
}

impl MockGenerator {
    pub fn new(catalog: &TeamCatalog) -> Self {
        Self::with_config(catalog, GeneratorConfig::default())
    }

    pub fn with_config(catalog: &TeamCatalog, config: GeneratorConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let now = config.clock.now();

        let mut games = Vec::new();
        for sport in Sport::ALL {
            generate_sport(&mut games, catalog, sport, now, &mut rng);
        }
        debug!(count = games.len(), "generated mock game batches");

        Self {
            games: RwLock::new(games),
            rng: Mutex::new(rng),
            clock: config.clock,
            latency: config.latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// All in-progress games, optionally filtered by sport.
    pub async fn live_games(&self, sport: Option<Sport>) -> Vec<Game> {
        self.simulate_latency().await;
        let games = self.games.read().await;
        games
            .iter()
            .filter(|g| g.status == GameStatus::Live && matches_sport(g, sport))
            .cloned()
            .collect()
    }

    /// Completed games that started within the last `hours`, newest first.
    pub async fn recent_games(&self, sport: Option<Sport>, hours: i64) -> Vec<Game> {
        self.simulate_latency().await;
        let cutoff = self.clock.now() - Duration::hours(hours);
        let games = self.games.read().await;
        let mut recent: Vec<Game> = games
            .iter()
            .filter(|g| {
                g.status == GameStatus::Final
                    && matches_sport(g, sport)
                    && g.start_time >= cutoff
            })
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        recent
    }

    /// Scheduled games starting within the next `days`, soonest first.
    pub async fn upcoming_games(&self, sport: Option<Sport>, days: i64) -> Vec<Game> {
        self.simulate_latency().await;
        let now = self.clock.now();
        let horizon = now + Duration::days(days);
        let games = self.games.read().await;
        let mut upcoming: Vec<Game> = games
            .iter()
            .filter(|g| {
                g.status == GameStatus::Scheduled
                    && matches_sport(g, sport)
                    && g.start_time > now
                    && g.start_time <= horizon
            })
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        upcoming
    }

    /// Advance every live game one simulation step: a chance of one side
    /// scoring, and a chance of the clock running down (floored at `0:00`).
    ///
    /// Mutation is in place on the shared records; the caller owns the timer
    /// that drives this (see `LiveUpdater`).
    pub async fn update_live_games(&self) {
        let now = self.clock.now();
        let mut games = self.games.write().await;
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        for game in games.iter_mut().filter(|g| g.status == GameStatus::Live) {
            if rng.gen_bool(SCORE_CHANCE) {
                let increments = game.sport.score_increments();
                if let (Some(score), Some(&points)) =
                    (game.score.as_mut(), increments.choose(&mut *rng))
                {
                    if rng.gen_bool(0.5) {
                        score.home += points;
                    } else {
                        score.away += points;
                    }
                    game.last_update = Some(now);
                }
            }
            if rng.gen_bool(CLOCK_CHANCE) {
                if let Some(clock) = game.clock.as_mut() {
                    clock.tick(rng.gen_range(5..=30));
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) async fn force_live_clocks(&self, time_remaining: &str) {
        let mut games = self.games.write().await;
        for game in games.iter_mut().filter(|g| g.status == GameStatus::Live) {
            if let Some(clock) = game.clock.as_mut() {
                clock.time_remaining = time_remaining.to_string();
            }
        }
    }
}

fn matches_sport(game: &Game, sport: Option<Sport>) -> bool {
    sport.map(|s| game.sport == s).unwrap_or(true)
}

fn generate_sport(
    games: &mut Vec<Game>,
    catalog: &TeamCatalog,
    sport: Sport,
    now: DateTime<Utc>,
    rng: &mut StdRng,
) {
    let teams = catalog.teams(sport);
    if teams.len() < 2 {
        warn!(sport = %sport, teams = teams.len(), "not enough teams configured, skipping sport");
        return;
    }

    for _ in 0..LIVE_GAMES_PER_SPORT {
        let (home, away) = pick_matchup(teams, rng);
        let start_time = now - Duration::minutes(rng.gen_range(20..=90));
        let (lo, hi) = sport.live_score_range();
        let score = Score {
            home: rng.gen_range(lo..=hi),
            away: rng.gen_range(lo..=hi),
        };
        let clock = GameClock::from_seconds(
            rng.gen_range(1..=sport.period_count()),
            rng.gen_range(0..=sport.period_minutes() * 60),
        );
        let (id, broadcast, venue) = game_extras(sport, &home, rng);
        games.push(Game::live(
            id, sport, start_time, home, away, score, clock, broadcast, venue,
        ));
    }

    for _ in 0..RECENT_GAMES_PER_SPORT {
        let (home, away) = pick_matchup(teams, rng);
        let start_time = now - Duration::hours(rng.gen_range(1..=RECENT_SPREAD_HOURS));
        let (lo, hi) = sport.final_score_range();
        let mut final_score = Score {
            home: rng.gen_range(lo..=hi),
            away: rng.gen_range(lo..=hi),
        };
        if final_score.home == final_score.away {
            // Mock data has no overtime model, so break the tie.
            final_score.home += sport.score_increments()[0];
        }
        let stats = final_stats(rng);
        let (id, broadcast, venue) = game_extras(sport, &home, rng);
        games.push(Game::completed(
            id,
            sport,
            start_time,
            home,
            away,
            final_score,
            stats,
            broadcast,
            venue,
        ));
    }

    for _ in 0..UPCOMING_GAMES_PER_SPORT {
        let (home, away) = pick_matchup(teams, rng);
        let start_time = now + Duration::hours(rng.gen_range(1..=UPCOMING_SPREAD_HOURS));
        let (id, broadcast, venue) = game_extras(sport, &home, rng);
        games.push(Game::scheduled(
            id, sport, start_time, home, away, broadcast, venue,
        ));
    }
}

/// Sample a home team, then an away team from the pool minus the home team.
/// Sampling without replacement terminates even with exactly two teams.
fn pick_matchup(teams: &[Team], rng: &mut StdRng) -> (Team, Team) {
    let home_idx = rng.gen_range(0..teams.len());
    let mut away_idx = rng.gen_range(0..teams.len() - 1);
    if away_idx >= home_idx {
        away_idx += 1;
    }
    (teams[home_idx].clone(), teams[away_idx].clone())
}

fn game_extras(sport: Sport, home: &Team, rng: &mut StdRng) -> (String, String, String) {
    let id = format!("{}-{:08x}", sport, rng.gen::<u32>());
    let broadcast = BROADCASTS
        .choose(rng)
        .copied()
        .unwrap_or("ESPN")
        .to_string();
    let venue = format!("{} {}", home.city, sport.venue_suffix());
    (id, broadcast, venue)
}

fn final_stats(rng: &mut StdRng) -> BTreeMap<String, String> {
    let mut stats = BTreeMap::new();
    stats.insert(
        "attendance".to_string(),
        rng.gen_range(9_000..=78_000u32).to_string(),
    );
    stats.insert(
        "leadChanges".to_string(),
        rng.gen_range(0..=15u32).to_string(),
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::models::GameStatus;

    fn seeded(catalog: &TeamCatalog, seed: u64, clock: Arc<dyn Clock>) -> MockGenerator {
        MockGenerator::with_config(
            catalog,
            GeneratorConfig {
                seed: Some(seed),
                latency: StdDuration::ZERO,
                clock,
            },
        )
    }

    fn assert_clock_format(time_remaining: &str) {
        let (minutes, seconds) = time_remaining
            .split_once(':')
            .unwrap_or_else(|| panic!("clock '{}' missing colon", time_remaining));
        minutes
            .parse::<u32>()
            .unwrap_or_else(|_| panic!("bad minutes in '{}'", time_remaining));
        assert_eq!(seconds.len(), 2, "seconds not zero-padded in '{}'", time_remaining);
        let s: u32 = seconds.parse().unwrap();
        assert!(s < 60);
    }

    #[tokio::test]
    async fn test_live_batch_shape() {
        let generator = seeded(&TeamCatalog::builtin(), 7, Arc::new(SystemClock));
        let live = generator.live_games(Some(Sport::Nfl)).await;
        assert_eq!(live.len(), 3);
        for game in &live {
            assert_eq!(game.sport, Sport::Nfl);
            assert_ne!(game.home_team.id, game.away_team.id);
            let clock = game.clock.as_ref().expect("live game must carry a clock");
            assert_clock_format(&clock.time_remaining);
            assert!(game.score.is_some());
        }
    }

    #[tokio::test]
    async fn test_live_games_unfiltered_covers_all_sports() {
        let generator = seeded(&TeamCatalog::builtin(), 3, Arc::new(SystemClock));
        let live = generator.live_games(None).await;
        assert_eq!(live.len(), 3 * Sport::ALL.len());
    }

    #[tokio::test]
    async fn test_two_team_pool_terminates_with_distinct_matchups() {
        let mut catalog = TeamCatalog::new();
        catalog.set_teams(
            Sport::Nba,
            TeamCatalog::builtin().teams(Sport::Nba)[..2].to_vec(),
        );
        let generator = seeded(&catalog, 11, Arc::new(SystemClock));
        let live = generator.live_games(None).await;
        assert_eq!(live.len(), 3);
        for game in &live {
            assert_ne!(game.home_team.id, game.away_team.id);
        }
    }

    #[tokio::test]
    async fn test_under_populated_sport_generates_nothing() {
        let mut catalog = TeamCatalog::new();
        catalog.set_teams(
            Sport::Nhl,
            TeamCatalog::builtin().teams(Sport::Nhl)[..1].to_vec(),
        );
        let generator = seeded(&catalog, 5, Arc::new(SystemClock));
        assert!(generator.live_games(None).await.is_empty());
        assert!(generator.recent_games(None, 72).await.is_empty());
    }

    #[tokio::test]
    async fn test_recent_window_excludes_older_finals() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let generator = seeded(&TeamCatalog::builtin(), 21, clock.clone());

        let wide = generator.recent_games(None, RECENT_SPREAD_HOURS + 1).await;
        let day = generator.recent_games(None, 24).await;
        assert_eq!(wide.len(), 5 * Sport::ALL.len());
        assert!(day.len() < wide.len(), "72h spread must leave some finals outside 24h");

        let cutoff = clock.now() - Duration::hours(24);
        for game in &day {
            assert_eq!(game.status, GameStatus::Final);
            assert!(game.start_time >= cutoff);
            assert!(game.final_score.is_some());
            assert!(game.stats.is_some());
        }
        for pair in day.windows(2) {
            assert!(pair[0].start_time >= pair[1].start_time, "recent must sort descending");
        }
    }

    #[tokio::test]
    async fn test_upcoming_window_and_ordering() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let generator = seeded(&TeamCatalog::builtin(), 42, clock.clone());

        let week = generator.upcoming_games(Some(Sport::Nba), 7).await;
        let horizon = clock.now() + Duration::days(7);
        for game in &week {
            assert_eq!(game.status, GameStatus::Scheduled);
            assert!(game.start_time > clock.now());
            assert!(game.start_time <= horizon);
            assert!(game.score.is_none());
            assert!(game.clock.is_none());
        }
        for pair in week.windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time, "upcoming must sort ascending");
        }
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let generator = seeded(&TeamCatalog::builtin(), 13, Arc::new(SystemClock));
        let before = generator.live_games(None).await;

        for _ in 0..10 {
            generator.update_live_games().await;
        }

        let after = generator.live_games(None).await;
        assert_eq!(before.len(), after.len());
        let changed = before
            .iter()
            .zip(after.iter())
            .any(|(b, a)| b.score != a.score || b.clock != a.clock);
        assert!(changed, "ten update passes should mutate at least one live game");
        // Status never changes on an existing record.
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.id, a.id);
            assert_eq!(a.status, GameStatus::Live);
        }
    }

    #[tokio::test]
    async fn test_clock_never_goes_negative() {
        let generator = seeded(&TeamCatalog::builtin(), 99, Arc::new(SystemClock));
        generator.force_live_clocks("0:05").await;

        for _ in 0..20 {
            generator.update_live_games().await;
        }

        for game in generator.live_games(None).await {
            let clock = game.clock.expect("live game must carry a clock");
            assert_clock_format(&clock.time_remaining);
            assert!(clock.remaining_seconds() <= 5);
        }
    }

    #[tokio::test]
    async fn test_seeded_generation_is_reproducible() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let a = seeded(&TeamCatalog::builtin(), 1234, clock.clone());
        let b = seeded(&TeamCatalog::builtin(), 1234, clock);
        assert_eq!(a.live_games(None).await, b.live_games(None).await);
        assert_eq!(
            a.upcoming_games(None, 30).await,
            b.upcoming_games(None, 30).await
        );
    }
}
