use crate::bench_config::{BenchModel, BenchRunConfig};
use std::fmt;
use std::path::PathBuf;

/// Input language of a model file, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Jani,
    Prism,
}

impl ModelFormat {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.ends_with("jani") {
            Some(ModelFormat::Jani)
        } else if file_name.ends_with("prism") {
            Some(ModelFormat::Prism)
        } else {
            None
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            ModelFormat::Jani => "--jani",
            ModelFormat::Prism => "--prism",
        }
    }
}

/// One fully resolved invocation of the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
    pub format: Option<ModelFormat>,
}

impl BenchCommand {
    pub fn for_run(config: &BenchRunConfig, model: &BenchModel, amount: u64) -> Self {
        let mut args = model.extra_params.clone();
        args.extend([
            "--generateObservations".to_string(),
            "--runs".to_string(),
            amount.to_string(),
            "--rounds".to_string(),
            config.rounds.to_string(),
            "--generateUncertainMdp".to_string(),
        ]);

        let format = ModelFormat::from_file_name(&model.file_name);
        if let Some(format) = format {
            args.push(format.flag().to_string());
        }
        args.push(config.model_path(model).display().to_string());

        BenchCommand {
            program: config.bin_path.clone(),
            args,
            envs: Vec::new(),
            format,
        }
    }

    pub fn with_envs(mut self, envs: &[(String, String)]) -> Self {
        self.envs.extend_from_slice(envs);
        self
    }
}

impl fmt::Display for BenchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn config() -> BenchRunConfig {
        BenchRunConfig {
            bin_path: "storm".into(),
            model_dir: "models".into(),
            rounds: 2000,
            ..BenchRunConfig::default()
        }
    }

    #[test_case("beb.3-4.v1.jani", Some(ModelFormat::Jani) ; "jani model")]
    #[test_case("zeroconf.v1.prism", Some(ModelFormat::Prism) ; "prism model")]
    #[test_case("model.txt", None ; "unknown suffix")]
    #[test_case("prism.jani", Some(ModelFormat::Jani) ; "suffix wins over stem")]
    fn format_is_detected_from_suffix(file_name: &str, expected: Option<ModelFormat>) {
        assert_eq!(ModelFormat::from_file_name(file_name), expected);
    }

    #[test_case("a.jani", "--jani", "--prism" ; "jani")]
    #[test_case("a.prism", "--prism", "--jani" ; "prism")]
    fn command_carries_only_the_matching_flag(file_name: &str, present: &str, absent: &str) {
        let cmd = BenchCommand::for_run(&config(), &BenchModel::new(file_name, &[]), 1);
        assert!(cmd.args.iter().any(|a| a == present));
        assert!(!cmd.args.iter().any(|a| a == absent));
    }

    #[test]
    fn arguments_follow_the_checker_invocation_layout() {
        let model = BenchModel::new("beb.3-4.v1.jani", &["--constants", "N=3"]);
        let cmd = BenchCommand::for_run(&config(), &model, 100);
        assert_eq!(cmd.program, PathBuf::from("storm"));
        assert_eq!(
            cmd.args,
            vec![
                "--constants",
                "N=3",
                "--generateObservations",
                "--runs",
                "100",
                "--rounds",
                "2000",
                "--generateUncertainMdp",
                "--jani",
                "models/beb.3-4.v1.jani",
            ]
        );
        assert_eq!(
            cmd.to_string(),
            "storm --constants N=3 --generateObservations --runs 100 --rounds 2000 \
             --generateUncertainMdp --jani models/beb.3-4.v1.jani"
        );
    }

    #[test]
    fn unknown_format_still_passes_the_model_path() {
        let cmd = BenchCommand::for_run(&config(), &BenchModel::new("model.txt", &[]), 1);
        assert_eq!(cmd.format, None);
        assert_eq!(cmd.args.last().unwrap(), "models/model.txt");
        assert_eq!(cmd.args[cmd.args.len() - 2], "--generateUncertainMdp");
    }
}
