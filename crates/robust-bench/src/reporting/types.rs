use crate::metrics::{format_float, RunMetrics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Averages for one (model, amount) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountResult {
    pub amount: u64,
    pub rounds: u64,
    pub avg_time: f64,
    pub avg_error: f64,
    pub avg_branches: f64,
}

impl AmountResult {
    pub fn new(amount: u64, rounds: u64, averages: RunMetrics) -> Self {
        Self {
            amount,
            rounds,
            avg_time: averages.time,
            avg_error: averages.error,
            avg_branches: averages.branches,
        }
    }

    /// The `runs=..., rounds=...: ` prefix of a result line.
    pub fn label(amount: u64, rounds: u64) -> String {
        format!("runs={}, rounds={}: ", amount, rounds)
    }

    /// The comma-separated averages that complete a result line.
    pub fn values(&self) -> String {
        format!(
            "{},{},{}",
            format_float(self.avg_time),
            format_float(self.avg_error),
            format_float(self.avg_branches)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub file_name: String,
    pub rows: Vec<AmountResult>,
}

impl ModelResult {
    pub fn new(file_name: String) -> Self {
        Self {
            file_name,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: AmountResult) {
        self.rows.push(row);
    }
}

/// Everything one benchmark run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResults {
    pub generated_at: DateTime<Utc>,
    pub bin_path: PathBuf,
    pub rounds: u64,
    pub avg_count: usize,
    pub models: Vec<ModelResult>,
}

impl BenchmarkResults {
    pub fn new(bin_path: PathBuf, rounds: u64, avg_count: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            bin_path,
            rounds,
            avg_count,
            models: Vec::new(),
        }
    }

    pub fn add_model(&mut self, model: ModelResult) {
        self.models.push(model);
    }
}

impl fmt::Display for BenchmarkResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for model in &self.models {
            writeln!(f, "{}", model.file_name)?;
            for row in &model.rows {
                writeln!(f, "{}{}", AmountResult::label(row.amount, row.rounds), row.values())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
