use approx::assert_abs_diff_eq;
use dpend::config::pendulum::{PendulumParameters, UnitPendulum};
use dpend::constants::degrees_to_radians;
use dpend::errors::DpendError;
use dpend::integrators::rk4::RK4;
use dpend::models::State;
use dpend::physics::dynamics::DoublePendulumDynamics;
use dpend::physics::energy::calculate_energy;
use dpend::simulation::{propagate, InitialConditions, SimulationConfig, Trajectory};

fn reference_run(steps: usize) -> Trajectory {
    let initial = InitialConditions::new(90.0, 0.0, -10.0, 0.0);
    let config = SimulationConfig::new(0.0, 1.0, initial, steps).unwrap();
    propagate(&UnitPendulum, &config)
}

#[test]
fn energy_is_approximately_conserved() {
    let trajectory = reference_run(1000);
    let initial_energy = calculate_energy(&UnitPendulum, &trajectory.first().unwrap().state);

    for point in &trajectory {
        let energy = calculate_energy(&UnitPendulum, &point.state);
        assert_abs_diff_eq!(energy, initial_energy, epsilon = 1e-6);
    }
    assert!(trajectory.energy_drift(&UnitPendulum) < 1e-7);
}

#[test]
fn identical_inputs_give_identical_output() {
    assert_eq!(reference_run(1000), reference_run(1000));
}

#[test]
fn trajectory_shape_and_initial_point() {
    let initial = InitialConditions::new(90.0, 12.5, -10.0, -3.0);
    let config = SimulationConfig::new(0.25, 3.0, initial, 357).unwrap();
    let trajectory = propagate(&UnitPendulum, &config);

    assert_eq!(trajectory.len(), 357);

    let first = trajectory.first().unwrap();
    assert_eq!(first.time, 0.25);
    assert_eq!(first.state.theta1(), degrees_to_radians(90.0));
    assert_eq!(first.state.omega1(), degrees_to_radians(12.5));
    assert_eq!(first.state.theta2(), degrees_to_radians(-10.0));
    assert_eq!(first.state.omega2(), degrees_to_radians(-3.0));

    let h = (3.0 - 0.25) / (357 - 1) as f64;
    for (i, point) in trajectory.iter().enumerate() {
        assert_eq!(point.time, 0.25 + i as f64 * h);
    }
}

#[test]
fn equilibrium_is_a_fixed_point() {
    let initial = InitialConditions::new(0.0, 0.0, 0.0, 0.0);
    let config = SimulationConfig::new(0.0, 50.0, initial, 500).unwrap();
    let trajectory = propagate(&UnitPendulum, &config);

    assert!(trajectory.iter().all(|p| p.state == State::zero()));
}

#[test]
fn halving_the_step_shrinks_the_error_by_about_sixteen() {
    // Resolution fine enough that its own error is negligible next to the coarse runs.
    let reference = reference_run(6401).last().unwrap().state;
    let coarse = reference_run(51).last().unwrap().state;
    let fine = reference_run(101).last().unwrap().state;

    let coarse_error = (coarse.data - reference.data).norm();
    let fine_error = (fine.data - reference.data).norm();
    let ratio = coarse_error / fine_error;

    assert!(fine_error > 0.0);
    assert!(
        ratio > 10.0 && ratio < 32.0,
        "error ratio {} is not consistent with fourth order convergence",
        ratio
    );
}

#[test]
fn two_points_take_a_single_full_step() {
    let initial = InitialConditions::new(45.0, 10.0, 30.0, -20.0);
    let config = SimulationConfig::new(1.0, 1.2, initial, 2).unwrap();
    let trajectory = propagate(&UnitPendulum, &config);

    assert_eq!(trajectory.len(), 2);
    assert_eq!(trajectory.points()[1].time, 1.0 + (1.2 - 1.0));

    let rk4 = RK4::new(DoublePendulumDynamics::new(&UnitPendulum));
    let expected = rk4.integrate(1.0, &initial.to_state(), 1.2 - 1.0);
    assert_eq!(trajectory.points()[1].state, expected);
}

#[test]
fn step_count_below_two_is_rejected() {
    let initial = InitialConditions::new(90.0, 0.0, -10.0, 0.0);
    for steps in [0, 1] {
        assert!(matches!(
            SimulationConfig::new(0.0, 1.0, initial, steps),
            Err(DpendError::InvalidStepCount(_))
        ));
    }
}

#[test]
fn degenerate_configuration_propagates_non_finite_values() {
    // Massless upper bob with aligned arms: both denominators vanish.
    let params = PendulumParameters::new(9.8, 1.0, 1.0, 0.0, 1.0);
    let initial = InitialConditions::new(30.0, 0.0, 30.0, 0.0);
    let config = SimulationConfig::new(0.0, 1.0, initial, 10).unwrap();
    let trajectory = propagate(&params, &config);

    assert_eq!(trajectory.len(), 10);
    assert_eq!(trajectory.first_non_finite(), Some(1));
    assert!(trajectory.iter().skip(1).all(|p| !p.state.is_finite()));
    assert!(trajectory.energy_drift(&params).is_nan());
}

#[test]
fn runtime_parameters_match_hardwired_defaults() {
    let initial = InitialConditions::new(120.0, 0.0, -45.0, 30.0);
    let config = SimulationConfig::new(0.0, 2.0, initial, 400).unwrap();

    assert_eq!(
        propagate(&UnitPendulum, &config),
        propagate(&PendulumParameters::default(), &config)
    );
}
