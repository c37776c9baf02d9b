use crate::errors::{BenchError, BenchResult};
use crate::reporting::types::BenchmarkResults;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;
use std::str::FromStr;

/// Trait for report generators
pub trait ReportGenerator {
    fn generate(&self, results: &BenchmarkResults, output: &Path) -> BenchResult<()>;
}

/// Report file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
    Text,
}

impl FromStr for ReportFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "text" => Ok(ReportFormat::Text),
            other => Err(BenchError::ReportError(format!(
                "unsupported report format '{}', expected json, csv or text",
                other
            ))),
        }
    }
}

impl ReportFormat {
    pub fn generator(&self) -> Box<dyn ReportGenerator> {
        match self {
            ReportFormat::Json => Box::new(JsonReportGenerator),
            ReportFormat::Csv => Box::new(CsvReportGenerator),
            ReportFormat::Text => Box::new(TextReportGenerator),
        }
    }
}

fn ensure_parent_dir(output: &Path) -> BenchResult<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Writes the full results as pretty-printed JSON
pub struct JsonReportGenerator;

impl ReportGenerator for JsonReportGenerator {
    fn generate(&self, results: &BenchmarkResults, output: &Path) -> BenchResult<()> {
        ensure_parent_dir(output)?;
        let output_str = serde_json::to_string_pretty(results)?;
        fs::write(output, output_str)?;
        Ok(())
    }
}

/// Writes the same lines the runner prints to stdout
pub struct TextReportGenerator;

impl ReportGenerator for TextReportGenerator {
    fn generate(&self, results: &BenchmarkResults, output: &Path) -> BenchResult<()> {
        ensure_parent_dir(output)?;
        fs::write(output, results.to_string())?;
        Ok(())
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    model: &'a str,
    amount: u64,
    rounds: u64,
    avg_time: f64,
    avg_error: f64,
    avg_branches: f64,
}

/// Writes one CSV row per (model, amount) pair
pub struct CsvReportGenerator;

impl ReportGenerator for CsvReportGenerator {
    fn generate(&self, results: &BenchmarkResults, output: &Path) -> BenchResult<()> {
        ensure_parent_dir(output)?;
        let mut writer = csv::Writer::from_writer(File::create(output)?);
        for model in &results.models {
            for row in &model.rows {
                writer.serialize(CsvRow {
                    model: &model.file_name,
                    amount: row.amount,
                    rounds: row.rounds,
                    avg_time: row.avg_time,
                    avg_error: row.avg_error,
                    avg_branches: row.avg_branches,
                })?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
