use traject_core::systems::DampedOscillator;
use traject_core::trajectory::{solve_rk4, SolveSettings};

#[test]
fn integration_tracks_analytic_solution() {
    let system = DampedOscillator::new(1.0, 0.1);
    let (x0, v0) = (0.2, -2.0);
    let settings = SolveSettings {
        tmax: 10.0,
        dt: 0.001,
        ..SolveSettings::default()
    };

    let trajectory = solve_rk4(&system, &[x0, v0], settings).expect("solve should succeed");

    for (t, state) in trajectory.iter() {
        let (x, v) = system.analytic(x0, v0, t);
        assert!(
            (state[0] - x).abs() < 1e-8,
            "position diverged at t = {t}: numerical {} vs analytic {x}",
            state[0]
        );
        assert!(
            (state[1] - v).abs() < 1e-8,
            "velocity diverged at t = {t}: numerical {} vs analytic {v}",
            state[1]
        );
    }
}

#[test]
fn undamped_oscillator_conserves_energy() {
    let system = DampedOscillator::new(1.0, 0.0);
    let settings = SolveSettings {
        tmax: 20.0,
        dt: 0.01,
        ..SolveSettings::default()
    };

    let trajectory = solve_rk4(&system, &[1.0, 0.0], settings).expect("solve should succeed");

    // With gamma = 0 the energy x^2 + v^2 is a conserved quantity; RK4
    // dissipates it only at the truncation-error level.
    for (t, state) in trajectory.iter() {
        let energy = state[0] * state[0] + state[1] * state[1];
        assert!(
            (energy - 1.0).abs() < 1e-6,
            "energy drifted to {energy} at t = {t}"
        );
    }
}
