use crate::traits::{DynamicalSystem, Parameterized, Scalar};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Damped harmonic oscillator, x'' + 2*gamma*x' + omega_0^2 * x = 0,
/// written as the first-order system
///   dx/dt = v
///   dv/dt = -2*gamma*v - omega_0^2 * x
/// with state [position, velocity].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DampedOscillator {
    /// Natural frequency.
    pub omega_0: f64,
    /// Damping coefficient.
    pub gamma: f64,
}

impl DampedOscillator {
    pub fn new(omega_0: f64, gamma: f64) -> Self {
        Self { omega_0, gamma }
    }

    /// Closed-form underdamped solution (gamma < omega_0) from the initial
    /// condition `(x0, v0)` at t = 0, returned as `(position, velocity)`.
    pub fn analytic(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let omega_d = (self.omega_0 * self.omega_0 - self.gamma * self.gamma)
            .max(0.0)
            .sqrt();
        let psi = (omega_d * x0).atan2(v0 + self.gamma * x0);
        let amplitude = (x0 * x0 + ((v0 + self.gamma * x0) / omega_d).powi(2)).sqrt();
        let phi = self.gamma.atan2(omega_d);

        let envelope = amplitude * (-self.gamma * t).exp();
        let x = envelope * (omega_d * t + psi).sin();
        let v = self.omega_0 * envelope * (omega_d * t + psi + phi).cos();
        (x, v)
    }
}

impl<T: Scalar> DynamicalSystem<T> for DampedOscillator {
    fn dimension(&self) -> usize {
        2
    }

    fn rhs(&self, _t: T, x: &[T], dxdt: &mut [T]) {
        let omega_0 = T::from_f64(self.omega_0).unwrap();
        let gamma = T::from_f64(self.gamma).unwrap();
        let two = T::from_f64(2.0).unwrap();

        dxdt[0] = x[1];
        dxdt[1] = -two * gamma * x[1] - omega_0 * omega_0 * x[0];
    }
}

impl Parameterized for DampedOscillator {
    fn set_parameter(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "omega_0" => self.omega_0 = value,
            "gamma" => self.gamma = value,
            _ => bail!("Unknown parameter: {name}"),
        }
        Ok(())
    }

    fn parameter(&self, name: &str) -> Result<f64> {
        match name {
            "omega_0" => Ok(self.omega_0),
            "gamma" => Ok(self.gamma),
            _ => bail!("Unknown parameter: {name}"),
        }
    }
}
