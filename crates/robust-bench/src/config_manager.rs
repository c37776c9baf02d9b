use crate::bench_config::BenchRunConfig;
use crate::errors::{BenchError, BenchResult};
use std::path::Path;

/// Owns the run configuration together with the extra environment handed to
/// every launch of the checker.
pub struct ConfigManager {
    config: BenchRunConfig,
    env_vars: Vec<(String, String)>,
}

impl ConfigManager {
    pub fn new(config: BenchRunConfig) -> BenchResult<Self> {
        config.validate()?;
        let mut manager = Self {
            config,
            env_vars: Vec::new(),
        };
        manager.load_environment_variables()?;
        Ok(manager)
    }

    /// Get a reference to the underlying configuration
    pub fn config(&self) -> &BenchRunConfig {
        &self.config
    }

    /// Variables from the config's env_file, in file order.
    pub fn environment(&self) -> &[(String, String)] {
        &self.env_vars
    }

    fn load_environment_variables(&mut self) -> BenchResult<()> {
        if let Some(env_file) = &self.config.env_file {
            self.env_vars = Self::parse_env_file(env_file)?;
            tracing::debug!(
                "Loaded {} variables from {}",
                self.env_vars.len(),
                env_file.display()
            );
        }
        Ok(())
    }

    fn parse_env_file(path: &Path) -> BenchResult<Vec<(String, String)>> {
        let iter = dotenvy::from_path_iter(path).map_err(|e| {
            BenchError::EnvironmentError(format!(
                "Failed to open env file at {}: {}",
                path.display(),
                e
            ))
        })?;

        iter.map(|item| {
            item.map_err(|e| {
                BenchError::EnvironmentError(format!(
                    "Failed to parse env file at {}: {}",
                    path.display(),
                    e
                ))
            })
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn env_file_variables_are_loaded_in_order() {
        let mut env_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(env_file, "# checker settings").unwrap();
        writeln!(env_file, "STORM_THREADS=4").unwrap();
        writeln!(env_file).unwrap();
        writeln!(env_file, "STORM_SEED=\"42\"").unwrap();

        let config = BenchRunConfig {
            env_file: Some(env_file.path().to_path_buf()),
            ..BenchRunConfig::default()
        };
        let manager = ConfigManager::new(config).unwrap();
        assert_eq!(
            manager.environment(),
            &[
                ("STORM_THREADS".to_string(), "4".to_string()),
                ("STORM_SEED".to_string(), "42".to_string()),
            ]
        );
    }

    #[test]
    fn missing_env_file_is_an_environment_error() {
        let config = BenchRunConfig {
            env_file: Some("/nonexistent/bench.env".into()),
            ..BenchRunConfig::default()
        };
        assert!(matches!(
            ConfigManager::new(config),
            Err(BenchError::EnvironmentError(_))
        ));
    }

    #[test]
    fn no_env_file_means_no_extra_environment() {
        let manager = ConfigManager::new(BenchRunConfig::default()).unwrap();
        assert!(manager.environment().is_empty());
        assert_eq!(manager.config().models.len(), 5);
    }
}
