use crate::errors::util::{ensure_file_exists, to_config_error};
use crate::errors::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// A model file to benchmark, plus the arguments it needs on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchModel {
    pub file_name: String,
    #[serde(default)]
    pub extra_params: Vec<String>,
}

impl BenchModel {
    pub fn new(file_name: &str, extra_params: &[&str]) -> Self {
        BenchModel {
            file_name: file_name.to_string(),
            extra_params: extra_params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// What to do when a model file name has neither a `jani` nor a `prism` suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFormatPolicy {
    /// Report the problem and launch without a format flag.
    #[default]
    Warn,
    /// Fail the whole run.
    Abort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRunConfig {
    #[serde(default = "default_bin_path")]
    pub bin_path: PathBuf,
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
    #[serde(default = "default_amounts")]
    pub amounts: Vec<u64>,
    #[serde(default = "default_rounds")]
    pub rounds: u64,
    #[serde(default = "default_avg_count")]
    pub avg_count: usize,
    #[serde(default = "default_models")]
    pub models: Vec<BenchModel>,
    #[serde(default)]
    pub env_file: Option<PathBuf>,
    #[serde(default)]
    pub unknown_format: UnknownFormatPolicy,
}

fn default_bin_path() -> PathBuf {
    PathBuf::from("../build_release/bin/storm")
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_amounts() -> Vec<u64> {
    (0..5).map(|x| 10u64.pow(x)).collect()
}

fn default_rounds() -> u64 {
    2000
}

fn default_avg_count() -> usize {
    10
}

fn default_models() -> Vec<BenchModel> {
    vec![
        BenchModel::new("beb.3-4.v1.jani", &["--constants", "N=3"]),
        BenchModel::new("csma.2-2.v1.jani", &[]),
        BenchModel::new("zeroconf.v1.prism", &["--constants", "N=20,K=6,reset=true"]),
        BenchModel::new("test2.prism", &["--constants", "x=0.1"]),
        BenchModel::new("test3.prism", &["--constants", "x=0.1"]),
    ]
}

impl Default for BenchRunConfig {
    fn default() -> Self {
        BenchRunConfig {
            bin_path: default_bin_path(),
            model_dir: default_model_dir(),
            amounts: default_amounts(),
            rounds: default_rounds(),
            avg_count: default_avg_count(),
            models: default_models(),
            env_file: None,
            unknown_format: UnknownFormatPolicy::default(),
        }
    }
}

impl BenchRunConfig {
    /// Parse a JSON config string
    pub fn from_string(cfg: String) -> BenchResult<Self> {
        let config: BenchRunConfig = serde_json::from_str(&cfg)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config string
    pub fn from_toml(cfg: &str) -> BenchResult<Self> {
        let config: BenchRunConfig = toml::from_str(cfg)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, picking the parser from its extension.
    pub fn from_file(path: &Path) -> BenchResult<Self> {
        ensure_file_exists(path)?;
        let content = read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_string(content)
        } else {
            Self::from_toml(&content)
        };
        parsed.map_err(|e| to_config_error(e, &path.display().to_string()))
    }

    pub fn to_string(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Full path of a model file as handed to the checker.
    pub fn model_path(&self, model: &BenchModel) -> PathBuf {
        self.model_dir.join(&model.file_name)
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.avg_count == 0 {
            return Err(BenchError::ConfigError(
                "avg_count must be at least 1".to_string(),
            ));
        }
        if let Some(model) = self.models.iter().find(|m| m.file_name.is_empty()) {
            return Err(BenchError::ConfigError(format!(
                "model with extra params {:?} has an empty file name",
                model.extra_params
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_benchmark_table() {
        let config = BenchRunConfig::default();
        assert_eq!(config.amounts, vec![1, 10, 100, 1000, 10000]);
        assert_eq!(config.rounds, 2000);
        assert_eq!(config.avg_count, 10);
        assert_eq!(config.bin_path, PathBuf::from("../build_release/bin/storm"));

        let names: Vec<&str> = config.models.iter().map(|m| m.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "beb.3-4.v1.jani",
                "csma.2-2.v1.jani",
                "zeroconf.v1.prism",
                "test2.prism",
                "test3.prism"
            ]
        );
        assert!(config.models[1].extra_params.is_empty());
        assert_eq!(
            config.models[2].extra_params,
            vec!["--constants", "N=20,K=6,reset=true"]
        );
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = BenchRunConfig::from_string(
            r#"{"models": [{"file_name": "x.prism"}], "amounts": [1], "rounds": 5}"#.to_string(),
        )
        .unwrap();
        assert_eq!(config.models, vec![BenchModel::new("x.prism", &[])]);
        assert_eq!(config.amounts, vec![1]);
        assert_eq!(config.rounds, 5);
        assert_eq!(config.avg_count, 10);
        assert_eq!(config.model_dir, PathBuf::from("models"));
        assert_eq!(config.unknown_format, UnknownFormatPolicy::Warn);
    }

    #[test]
    fn toml_file_is_loaded_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        std::fs::write(
            &path,
            r#"
bin_path = "/opt/storm/bin/storm"
avg_count = 3
unknown_format = "abort"

[[models]]
file_name = "a.jani"
extra_params = ["--constants", "N=3"]
"#,
        )
        .unwrap();

        let config = BenchRunConfig::from_file(&path).unwrap();
        assert_eq!(config.bin_path, PathBuf::from("/opt/storm/bin/storm"));
        assert_eq!(config.avg_count, 3);
        assert_eq!(config.unknown_format, UnknownFormatPolicy::Abort);
        assert_eq!(config.models[0].extra_params, vec!["--constants", "N=3"]);
        assert_eq!(config.amounts, default_amounts());
    }

    #[test]
    fn zero_avg_count_is_rejected() {
        let err = BenchRunConfig::from_string(r#"{"avg_count": 0}"#.to_string()).unwrap_err();
        assert!(matches!(err, BenchError::ConfigError(_)));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = BenchRunConfig::from_file(Path::new("/nonexistent/bench.json")).unwrap_err();
        assert!(matches!(err, BenchError::FileNotFound(_)));
    }

    #[test]
    fn json_round_trips_through_to_string() {
        let config = BenchRunConfig::default();
        let parsed = BenchRunConfig::from_string(config.to_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn model_path_joins_model_dir() {
        let config = BenchRunConfig::default();
        assert_eq!(
            config.model_path(&config.models[0]),
            PathBuf::from("models/beb.3-4.v1.jani")
        );
    }
}
