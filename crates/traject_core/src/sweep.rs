use crate::traits::{DynamicalSystem, Parameterized};
use crate::trajectory::{solve_rk4, SolveSettings, Trajectory};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Evenly spaced parameter values over a closed interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub num_steps: usize,
}

impl SweepRange {
    pub fn new(start: f64, end: f64, num_steps: usize) -> Self {
        Self {
            start,
            end,
            num_steps,
        }
    }

    /// Materializes the values. Fewer than two steps collapse to the start
    /// value alone.
    pub fn values(&self) -> Vec<f64> {
        if self.num_steps < 2 {
            return vec![self.start];
        }
        let step = (self.end - self.start) / (self.num_steps - 1) as f64;
        (0..self.num_steps)
            .map(|i| self.start + i as f64 * step)
            .collect()
    }
}

/// Outcome of a parameter sweep. `values` and `results` are index-aligned:
/// `results[i]` is the post-processed reduction of the trajectory integrated
/// with `parameter` set to `values[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    pub parameter: String,
    pub values: Vec<f64>,
    pub results: Vec<Vec<f64>>,
}

/// Integrates the system once per parameter value and reduces each
/// trajectory with the caller's post-processing function.
///
/// Every run starts from a fresh copy of `x0`. Runs are sequential; the
/// system is restored to nothing in particular afterwards (it keeps the last
/// swept value).
pub fn parameter_sweep<S, F>(
    system: &mut S,
    parameter: &str,
    range: SweepRange,
    x0: &[f64],
    settings: SolveSettings,
    post_process: F,
) -> Result<SweepResult>
where
    S: DynamicalSystem<f64> + Parameterized,
    F: Fn(&Trajectory) -> Vec<f64>,
{
    let values = range.values();
    let mut results = Vec::with_capacity(values.len());
    for &value in &values {
        system.set_parameter(parameter, value)?;
        let trajectory = solve_rk4(system, x0, settings)?;
        results.push(post_process(&trajectory));
    }
    Ok(SweepResult {
        parameter: parameter.to_string(),
        values,
        results,
    })
}
