use anyhow::{Context, Result};
use robust_bench::BenchRunConfig;
use std::path::Path;

/// Print the default configuration, or write it to `output`.
pub fn handle_init_config(output: Option<&Path>) -> Result<()> {
    let config = BenchRunConfig::default().to_string()?;
    match output {
        Some(path) => {
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            println!("Default configuration written to {}", path.display());
        }
        None => println!("{}", config),
    }
    Ok(())
}
