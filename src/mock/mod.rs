//! Mock game data generator and live update simulator.
//!
//! No real data feed exists anywhere in this crate: the generator fabricates
//! internally consistent game records at construction and the simulator
//! nudges the live ones along on a caller-owned timer.

pub mod catalog;
pub mod generator;
pub mod simulator;

pub use catalog::TeamCatalog;
pub use generator::{
    GeneratorConfig, MockGenerator, DEFAULT_RECENT_HOURS, DEFAULT_UPCOMING_DAYS,
};
pub use simulator::{LiveUpdater, UpdaterHandle};
