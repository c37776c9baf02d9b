pub mod bench_config;
pub mod command;
pub mod config_manager;
pub mod errors;
pub mod launcher;
pub mod metrics;
pub mod reporting;
pub mod runners;

// Re-export main components for easier use
pub use bench_config::{BenchModel, BenchRunConfig, UnknownFormatPolicy};
pub use config_manager::ConfigManager;
pub use errors::{BenchError, BenchResult};
pub use launcher::{ProcessLauncher, SystemLauncher};
pub use runners::benchmark_runner::BenchmarkRunner;
