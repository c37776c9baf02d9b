use crate::bench_config::{BenchModel, UnknownFormatPolicy};
use crate::command::{BenchCommand, ModelFormat};
use crate::config_manager::ConfigManager;
use crate::errors::{BenchError, BenchResult};
use crate::launcher::{ProcessLauncher, SystemLauncher};
use crate::metrics::{MetricTotals, RunMetrics};
use crate::reporting::{AmountResult, BenchmarkResults, ModelResult};
use std::io::Write;

/// Drives the checker over every (model, amount) pair and streams averaged
/// results to a writer as they complete.
pub struct BenchmarkRunner<L = SystemLauncher> {
    config_manager: ConfigManager,
    launcher: L,
}

impl BenchmarkRunner<SystemLauncher> {
    pub fn new(config_manager: ConfigManager) -> Self {
        Self::with_launcher(config_manager, SystemLauncher)
    }
}

impl<L: ProcessLauncher> BenchmarkRunner<L> {
    pub fn with_launcher(config_manager: ConfigManager, launcher: L) -> Self {
        Self {
            config_manager,
            launcher,
        }
    }

    #[cfg(test)]
    pub(crate) fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Run the benchmark. Any failure aborts the whole run.
    pub fn run<W: Write>(&mut self, out: &mut W) -> BenchResult<BenchmarkResults> {
        let config = self.config_manager.config().clone();
        tracing::info!(
            "Benchmarking {} models with {} amounts, {} repetitions each",
            config.models.len(),
            config.amounts.len(),
            config.avg_count
        );

        let mut results =
            BenchmarkResults::new(config.bin_path.clone(), config.rounds, config.avg_count);

        for model in &config.models {
            let model_result = self.run_model(model, out)?;
            results.add_model(model_result);
        }

        Ok(results)
    }

    fn run_model<W: Write>(&mut self, model: &BenchModel, out: &mut W) -> BenchResult<ModelResult> {
        let config = self.config_manager.config();
        if config.unknown_format == UnknownFormatPolicy::Abort
            && ModelFormat::from_file_name(&model.file_name).is_none()
        {
            return Err(BenchError::UnknownFormat(model.file_name.clone()));
        }

        writeln!(out, "{}", model.file_name)?;
        tracing::info!("Benchmarking model {}", model.file_name);

        let mut model_result = ModelResult::new(model.file_name.clone());
        let amounts = config.amounts.clone();
        for amount in amounts {
            let row = self.run_amount(model, amount, out)?;
            model_result.add_row(row);
        }

        writeln!(out)?;
        out.flush()?;
        Ok(model_result)
    }

    fn run_amount<W: Write>(
        &mut self,
        model: &BenchModel,
        amount: u64,
        out: &mut W,
    ) -> BenchResult<AmountResult> {
        let config = self.config_manager.config();
        let rounds = config.rounds;
        let avg_count = config.avg_count;

        write!(out, "{}", AmountResult::label(amount, rounds))?;
        out.flush()?;

        let mut totals = MetricTotals::new();
        for repetition in 0..avg_count {
            let command = BenchCommand::for_run(config, model, amount)
                .with_envs(self.config_manager.environment());
            if command.format.is_none() {
                writeln!(out, "{}", BenchError::UnknownFormat(model.file_name.clone()))?;
                out.flush()?;
                tracing::warn!(
                    "No format flag for {}, passing the path unflagged",
                    model.file_name
                );
            }

            let output = self.launcher.run(&command)?;
            if !output.success() {
                tracing::warn!(
                    "{} exited with status {:?} (runs={}, repetition {})",
                    command.program.display(),
                    output.status,
                    amount,
                    repetition
                );
            }

            let metrics = RunMetrics::parse(&output.stderr)?;
            tracing::debug!(
                "{} runs={} repetition {}: {:?}",
                model.file_name,
                amount,
                repetition,
                metrics
            );
            totals.add(&metrics);
        }

        let row = AmountResult::new(amount, rounds, totals.average(avg_count));
        writeln!(out, "{}", row.values())?;
        out.flush()?;
        Ok(row)
    }
}
