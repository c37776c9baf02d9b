use crate::errors::{BenchError, BenchResult};

/// The three figures the checker reports on stderr after a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunMetrics {
    pub time: f64,
    pub error: f64,
    pub branches: f64,
}

impl RunMetrics {
    /// Parse stderr that must hold exactly three float lines: time, error, branches.
    pub fn parse(stderr: &[u8]) -> BenchResult<RunMetrics> {
        let text = std::str::from_utf8(stderr).map_err(|e| {
            BenchError::MetricsParseError(format!("stderr is not valid UTF-8: {}", e))
        })?;

        let lines: Vec<&str> = text.lines().collect();
        if lines.len() != 3 {
            return Err(BenchError::MetricsParseError(format!(
                "expected 3 lines on stderr, got {}: {:?}",
                lines.len(),
                text
            )));
        }

        let values = lines
            .iter()
            .map(|line| {
                line.trim().parse::<f64>().map_err(|e| {
                    BenchError::MetricsParseError(format!("{:?} is not a number: {}", line, e))
                })
            })
            .collect::<BenchResult<Vec<f64>>>()?;

        Ok(RunMetrics {
            time: values[0],
            error: values[1],
            branches: values[2],
        })
    }
}

/// Running sums for one (model, amount) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricTotals {
    time: f64,
    error: f64,
    branches: f64,
    count: usize,
}

impl MetricTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, metrics: &RunMetrics) {
        self.time += metrics.time;
        self.error += metrics.error;
        self.branches += metrics.branches;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean over `samples` repetitions.
    pub fn average(&self, samples: usize) -> RunMetrics {
        let n = samples as f64;
        RunMetrics {
            time: self.time / n,
            error: self.error / n,
            branches: self.branches / n,
        }
    }
}

/// Render a float with shortest round-trip digits, always with a fractional
/// part or an exponent. Exponents carry a sign and at least two digits
/// (`5e-05`, `1e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
