use crate::solvers::RK4;
use crate::traits::{DynamicalSystem, Steppable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors rejected before any stepping begins. Once integration is running
/// there is no failure path: the solver records whatever the vector field
/// produces, finite or not.
#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    #[error("Step size dt must be positive, got {0}.")]
    InvalidStepSize(f64),
    #[error("Initial state must have positive dimension.")]
    EmptyState,
    #[error("Initial state dimension mismatch. Expected {expected}, got {got}.")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Settings for a fixed-step integration run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolveSettings {
    /// Initial time.
    pub t0: f64,
    /// Maximum integration time. The run terminates at the first accumulated
    /// time >= tmax; if tmax <= t0 no stepping occurs.
    pub tmax: f64,
    /// Step size. Must be positive.
    pub dt: f64,
    /// Duration advanced (and discarded) before the first recorded sample.
    pub transient: f64,
    /// When set, record only the samples that reach the next multiple of
    /// this interval. Stepping still happens at `dt`. `None` records every
    /// step.
    pub output_interval: Option<f64>,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self {
            t0: 0.0,
            tmax: 50.0,
            dt: 0.01,
            transient: 0.0,
            output_interval: None,
        }
    }
}

/// An ordered time/state sample sequence produced by integrating from an
/// initial condition. `times` and `states` are index-aligned; every state
/// is an independently owned vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub states: Vec<Vec<f64>>,
}

impl Trajectory {
    fn with_capacity(n: usize) -> Self {
        Self {
            times: Vec::with_capacity(n),
            states: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, t: f64, state: &[f64]) {
        self.times.push(t);
        self.states.push(state.to_vec());
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// State-space dimension, or 0 for an empty trajectory.
    pub fn dimension(&self) -> usize {
        self.states.first().map_or(0, Vec::len)
    }

    /// Final recorded sample.
    pub fn last(&self) -> Option<(f64, &[f64])> {
        match (self.times.last(), self.states.last()) {
            (Some(&t), Some(state)) => Some((t, state.as_slice())),
            _ => None,
        }
    }

    /// Iterates over `(time, state)` samples in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.states.iter().map(Vec::as_slice))
    }
}

fn validate(dim: usize, x0: &[f64], settings: &SolveSettings) -> Result<(), SolveError> {
    if settings.dt <= 0.0 {
        return Err(SolveError::InvalidStepSize(settings.dt));
    }
    if x0.is_empty() {
        return Err(SolveError::EmptyState);
    }
    if x0.len() != dim {
        return Err(SolveError::DimensionMismatch {
            expected: dim,
            got: x0.len(),
        });
    }
    Ok(())
}

/// Integrates `system` from `x0` with the classical fixed-step RK4 method,
/// materializing the full trajectory.
///
/// The first sample is the post-transient initial condition; afterwards the
/// running time advances by repeated addition of `dt`, so the final sample
/// may overshoot `tmax` by up to one step. Non-finite values produced by
/// the vector field are recorded as-is, never detected or repaired.
///
/// Does not mutate `x0`; every recorded state is an independent copy.
pub fn solve_rk4<S: DynamicalSystem<f64>>(
    system: &S,
    x0: &[f64],
    settings: SolveSettings,
) -> Result<Trajectory, SolveError> {
    validate(system.dimension(), x0, &settings)?;

    let mut stepper = RK4::new(x0.len());
    let mut t = settings.t0;
    let mut x = x0.to_vec();

    // Transient phase: advance without recording.
    let t_record = settings.t0 + settings.transient;
    while t < t_record {
        stepper.step(system, &mut t, &mut x, settings.dt);
    }

    let steps = if settings.tmax > t {
        ((settings.tmax - t) / settings.dt).ceil() as usize
    } else {
        0
    };
    let mut trajectory = Trajectory::with_capacity(steps + 1);
    trajectory.push(t, &x);

    if let Some(interval) = settings.output_interval {
        let mut next_output = t + interval;
        while t < settings.tmax {
            stepper.step(system, &mut t, &mut x, settings.dt);
            if t >= next_output {
                trajectory.push(t, &x);
                next_output += interval;
            }
        }
    } else {
        while t < settings.tmax {
            stepper.step(system, &mut t, &mut x, settings.dt);
            trajectory.push(t, &x);
        }
    }

    Ok(trajectory)
}

/// Lazy, single-pass producer of trajectory samples.
///
/// Yields the same sequence as [`solve_rk4`] without materializing it, so
/// long horizons with small steps stay O(dimension) in memory. Forward-only;
/// dropping the iterator discards the remaining samples.
pub struct SampleIter<'a, S> {
    system: &'a S,
    stepper: RK4<f64>,
    t: f64,
    state: Vec<f64>,
    tmax: f64,
    dt: f64,
    /// (next output time, interval) when decimating; None records every step.
    output: Option<(f64, f64)>,
    started: bool,
}

/// Streaming counterpart of [`solve_rk4`]. Settings are validated up front;
/// the transient phase runs during construction.
pub fn stream_rk4<'a, S: DynamicalSystem<f64>>(
    system: &'a S,
    x0: &[f64],
    settings: SolveSettings,
) -> Result<SampleIter<'a, S>, SolveError> {
    validate(system.dimension(), x0, &settings)?;

    let mut stepper = RK4::new(x0.len());
    let mut t = settings.t0;
    let mut state = x0.to_vec();

    let t_record = settings.t0 + settings.transient;
    while t < t_record {
        stepper.step(system, &mut t, &mut state, settings.dt);
    }

    Ok(SampleIter {
        system,
        stepper,
        t,
        state,
        tmax: settings.tmax,
        dt: settings.dt,
        output: settings.output_interval.map(|interval| (t + interval, interval)),
        started: false,
    })
}

impl<S: DynamicalSystem<f64>> Iterator for SampleIter<'_, S> {
    type Item = (f64, Vec<f64>);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some((self.t, self.state.clone()));
        }
        while self.t < self.tmax {
            self.stepper
                .step(self.system, &mut self.t, &mut self.state, self.dt);
            match self.output.as_mut() {
                None => return Some((self.t, self.state.clone())),
                Some((next_output, interval)) => {
                    if self.t >= *next_output {
                        *next_output += *interval;
                        return Some((self.t, self.state.clone()));
                    }
                }
            }
        }
        None
    }
}
