//! Data models for the scores dashboard.
//!
//! - `Sport`, `Team`, `Game`: the mock feed's domain entities
//! - `UserPreferences`, `FilterSettings`, `ThemeMode`: persisted records

pub mod game;
pub mod preferences;
pub mod sport;
pub mod team;

pub use game::{Game, GameClock, GameStatus, Score};
pub use preferences::{DisplaySettings, FilterSettings, SortOrder, ThemeMode, UserPreferences};
pub use sport::Sport;
pub use team::Team;
