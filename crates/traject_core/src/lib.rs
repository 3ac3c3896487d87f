//! The `traject_core` crate provides the integration engine behind the
//! `traject` CLI: fixed-step numerical integration of user-supplied
//! dynamical systems into time/state trajectories.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem`
//!   (vector fields, with `FnSystem` for plain closures), `Steppable`
//!   (solvers), `Parameterized` (named parameter access).
//! - **Solvers**: the classical fixed-step RK4 stepper.
//! - **Trajectory**: the eager `solve_rk4` driver and its streaming
//!   counterpart `stream_rk4`.
//! - **Systems**: bundled example systems (damped harmonic oscillator).
//! - **Sweep**: sequential parameter sweeps with trajectory post-processing.
//! - **Output**: the `time,state_0,...` CSV interchange schema consumed by
//!   the plotting tooling.

pub mod output;
pub mod solvers;
pub mod sweep;
pub mod systems;
pub mod traits;
pub mod trajectory;
