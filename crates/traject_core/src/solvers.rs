use crate::traits::{DynamicalSystem, FnSystem, Scalar, Steppable};

/// Classic Runge-Kutta 4th Order Solver
///
/// Stage buffers are preallocated once, so repeated stepping does not
/// allocate.
pub struct RK4<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    tmp: Vec<T>,
}

impl<T: Scalar> RK4<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![T::from_f64(0.0).unwrap(); dim],
            k2: vec![T::from_f64(0.0).unwrap(); dim],
            k3: vec![T::from_f64(0.0).unwrap(); dim],
            k4: vec![T::from_f64(0.0).unwrap(); dim],
            tmp: vec![T::from_f64(0.0).unwrap(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for RK4<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], dt: T) {
        let half = T::from_f64(0.5).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();
        let two = T::from_f64(2.0).unwrap();

        let t0 = *t;

        // k1 = f(t, y)
        system.rhs(t0, state, &mut self.k1);

        // k2 = f(t + dt/2, y + dt*k1/2)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + dt * self.k1[i] * half;
        }
        system.rhs(t0 + dt * half, &self.tmp, &mut self.k2);

        // k3 = f(t + dt/2, y + dt*k2/2)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + dt * self.k2[i] * half;
        }
        system.rhs(t0 + dt * half, &self.tmp, &mut self.k3);

        // k4 = f(t + dt, y + dt*k3)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + dt * self.k3[i];
        }
        system.rhs(t0 + dt, &self.tmp, &mut self.k4);

        // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
        for i in 0..state.len() {
            state[i] = state[i]
                + dt * sixth * (self.k1[i] + two * self.k2[i] + two * self.k3[i] + self.k4[i]);
        }

        *t = t0 + dt;
    }
}

/// One-shot RK4 step: advances `x` from `t` by `h` under the vector field
/// `f` and returns the new state as an owned vector.
///
/// Allocates stage buffers on every call; use [`RK4`] directly when stepping
/// in a loop.
pub fn rk4_step<T, F>(f: F, t: T, x: &[T], h: T) -> Vec<T>
where
    T: Scalar,
    F: Fn(T, &[T], &mut [T]),
{
    let system = FnSystem::new(x.len(), f);
    let mut stepper = RK4::new(x.len());
    let mut t = t;
    let mut state = x.to_vec();
    stepper.step(&system, &mut t, &mut state, h);
    state
}
