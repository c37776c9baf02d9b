pub mod benchmark_runner;

// Re-export for easier usage
pub use benchmark_runner::BenchmarkRunner;
