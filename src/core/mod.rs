pub mod engine;
pub mod report;
pub mod solver;

pub use crate::domain::model::{Combination, CostCheck, PuzzleParams, SearchStats, Solution};
pub use crate::domain::ports::{ConfigProvider, OutputSink};
pub use crate::utils::error::Result;
