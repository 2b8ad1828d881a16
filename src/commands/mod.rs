//! Command implementations

pub mod benchmark;
pub mod recommend;
pub mod simulate;

pub use benchmark::{run_benchmark, BenchmarkResult};
pub use recommend::{recommend, RecommendResult};
pub use simulate::{play_game, GameResult, GameStep};
