pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, StdoutSink};
pub use config::{ResolvedConfig, TomlConfig};
pub use core::{
    engine::{PuzzleEngine, RunSummary},
    report::OutputFormat,
    solver::{solve_classic, Solver},
};
pub use domain::model::{Combination, CostCheck, PuzzleParams, SearchStats, Solution};
pub use utils::error::{PuzzleError, Result};
