//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_targets};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};
