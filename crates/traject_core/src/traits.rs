use anyhow::Result;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in our dynamical systems.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A continuous-time dynamical system dx/dt = f(t, x).
pub trait DynamicalSystem<T: Scalar> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the vector field.
    /// t: current time
    /// x: current state
    /// dxdt: buffer to write the derivative into (same length as x)
    fn rhs(&self, t: T, x: &[T], dxdt: &mut [T]);
}

/// Adapts a plain closure or function pointer to [`DynamicalSystem`], so a
/// vector field can be supplied without defining a new type.
///
/// The callable writes the derivative into the provided buffer, which ties
/// the output dimension to the state dimension by construction.
pub struct FnSystem<F> {
    dim: usize,
    f: F,
}

impl<F> FnSystem<F> {
    pub fn new(dim: usize, f: F) -> Self {
        Self { dim, f }
    }
}

impl<T: Scalar, F: Fn(T, &[T], &mut [T])> DynamicalSystem<T> for FnSystem<F> {
    fn dimension(&self) -> usize {
        self.dim
    }

    fn rhs(&self, t: T, x: &[T], dxdt: &mut [T]) {
        (self.f)(t, x, dxdt)
    }
}

/// A trait for solvers that can step a system forward.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt.
    /// t: current time (updated after step)
    /// state: current state (updated after step)
    /// dt: step size
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], dt: T);
}

/// Access to named system parameters, used by sweeps and external drivers.
pub trait Parameterized {
    /// Sets a parameter by name. Errors on unknown names.
    fn set_parameter(&mut self, name: &str, value: f64) -> Result<()>;

    /// Reads a parameter by name. Errors on unknown names.
    fn parameter(&self, name: &str) -> Result<f64>;
}
