use anyhow::{Context, Result};
use robust_bench::reporting::ReportFormat;
use robust_bench::{BenchRunConfig, BenchmarkRunner, ConfigManager};
use std::io;
use std::path::{Path, PathBuf};

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub bin_path: Option<PathBuf>,
    pub model_dir: Option<PathBuf>,
    pub rounds: Option<u64>,
    pub avg_count: Option<usize>,
    pub amounts: Vec<u64>,
}

pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<BenchRunConfig> {
    let mut config = match config_path {
        Some(path) => BenchRunConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BenchRunConfig::default(),
    };

    if let Some(bin_path) = overrides.bin_path {
        config.bin_path = bin_path;
    }
    if let Some(model_dir) = overrides.model_dir {
        config.model_dir = model_dir;
    }
    if let Some(rounds) = overrides.rounds {
        config.rounds = rounds;
    }
    if let Some(avg_count) = overrides.avg_count {
        config.avg_count = avg_count;
    }
    if !overrides.amounts.is_empty() {
        config.amounts = overrides.amounts;
    }

    Ok(config)
}

pub fn run_benchmark(
    config: BenchRunConfig,
    output: Option<&Path>,
    format: ReportFormat,
) -> Result<()> {
    let config_manager = ConfigManager::new(config)?;
    let mut runner = BenchmarkRunner::new(config_manager);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let results = runner.run(&mut out)?;

    if let Some(path) = output {
        format
            .generator()
            .generate(&results, path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("Results saved to: {}", path.display());
    }

    Ok(())
}
