//! End-to-end trajectory scenarios exercising the full pipeline through the
//! public update interface.

use jolt::{Input, JoltError, Limits, Output, Status, TrajectoryGenerator};

const DT: f64 = 0.001;

/// Drive the generator to completion, feeding each tick's output back as
/// the next tick's current state (the cyclic-caller contract).
fn run_to_finish<const D: usize>(
    generator: &mut TrajectoryGenerator<D>,
    input: &mut Input<D>,
) -> (Output<D>, usize) {
    let mut output = Output::default();
    let mut ticks = 0;
    loop {
        let status = generator.update(input, &mut output).expect("update failed");
        ticks += 1;
        if status == Status::Finished {
            return (output, ticks);
        }
        assert!(ticks < 1_000_000, "trajectory never finished");
        input.current_position = output.new_position;
        input.current_velocity = output.new_velocity;
        input.current_acceleration = output.new_acceleration;
    }
}

#[test]
fn rest_to_rest_single_dof() {
    let mut generator = TrajectoryGenerator::<1>::new(DT);
    let mut input = Input::<1>::default();
    input.target_position[0] = 1.0;

    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();
    // with vMax = aMax = jMax = 1 and pd = 1 the peak acceleration
    // (pd·J²/2)^(1/3) ≈ 0.794 stays below the limit: symmetric
    // double-triangle, four equal ramps
    let expected = 4.0 * 0.5_f64.powf(1.0 / 3.0);
    assert!((output.duration - expected).abs() < 1e-9, "{}", output.duration);
    assert_eq!(generator.profile(0).unwrap().limits, Limits::None);

    let (end, ticks) = run_to_finish(&mut generator, &mut input);
    assert!((ticks as f64 * DT - expected).abs() < 2.0 * DT);
    assert!((end.new_position[0] - 1.0).abs() < 1e-6);
    assert!(end.new_velocity[0].abs() < 1e-6);
    assert!(end.new_acceleration[0].abs() < 1e-6);
}

#[test]
fn long_move_saturates_velocity() {
    let mut generator = TrajectoryGenerator::<1>::new(DT);
    let mut input = Input::<1>::default();
    input.target_position[0] = 10.0;

    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();
    assert_eq!(generator.profile(0).unwrap().limits, Limits::Acc0Acc1Vel);
    assert!((output.duration - 12.0).abs() < 1e-9);
}

#[test]
fn symmetric_triangular_profile() {
    let mut generator = TrajectoryGenerator::<1>::new(DT);
    let mut input = Input::<1>::default();
    input.target_position[0] = 0.1;
    input.max_velocity[0] = 10.0;
    input.max_acceleration[0] = 10.0;
    input.max_jerk[0] = 100.0;

    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();
    // peak accel (0.05·100²)^(1/3) ≈ 7.94 < 10, peak velocity ≈ 0.63 < 10
    let expected = 4.0 * 500.0_f64.powf(1.0 / 3.0) / 100.0;
    assert!((output.duration - expected).abs() < 1e-9, "{}", output.duration);
    assert_eq!(generator.profile(0).unwrap().limits, Limits::None);

    // every sampled velocity and acceleration stays within limits
    let steps = (output.duration / DT) as usize;
    let mut probe = Output::default();
    for k in 0..=steps {
        generator.at_time(k as f64 * DT, &mut probe).unwrap();
        assert!(probe.new_velocity[0].abs() <= 10.0 + 1e-9);
        assert!(probe.new_acceleration[0].abs() <= 10.0 + 1e-9);
    }
}

#[test]
fn overspeed_start_brakes_first() {
    let mut generator = TrajectoryGenerator::<1>::new(DT);
    let mut input = Input::<1>::default();
    input.current_velocity[0] = 2.0;
    input.max_velocity[0] = 1.0;
    input.max_acceleration[0] = 2.0;
    input.max_jerk[0] = 5.0;

    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();
    let profile = generator.profile(0).unwrap();
    let t_brake = profile.t_brake.expect("expected a brake pre-trajectory");
    assert!((profile.t_brakes[0] - 0.4).abs() < 1e-9);
    assert!((profile.t_brakes[1] - 0.3).abs() < 1e-9);
    assert!(t_brake > 0.0);

    // after the brake region every sample respects the velocity limit
    let mut probe = Output::default();
    let steps = ((output.duration - t_brake) / DT) as usize;
    for k in 1..=steps {
        generator.at_time(t_brake + k as f64 * DT, &mut probe).unwrap();
        assert!(
            probe.new_velocity[0].abs() <= 1.0 + 1e-9,
            "v = {} at {}",
            probe.new_velocity[0],
            t_brake + k as f64 * DT
        );
    }

    let (end, _) = run_to_finish(&mut generator, &mut input);
    assert!(end.new_position[0].abs() < 1e-5);
    assert!(end.new_velocity[0].abs() < 1e-5);
}

#[test]
fn two_dof_synchronization() {
    let mut generator = TrajectoryGenerator::<2>::new(DT);
    let mut input = Input::<2>::default();
    input.target_position[0] = 0.25;
    input.target_position[1] = 1.0;

    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();

    // dof 0 alone needs 4·(0.125/2·2)^(1/3)... = 2 s, dof 1 needs ~3.17 s
    let t0 = output.independent_min_durations[0];
    let t1 = output.independent_min_durations[1];
    assert!((t0 - 2.0).abs() < 1e-9, "{t0}");
    assert!((t1 - 4.0 * 0.5_f64.powf(1.0 / 3.0)).abs() < 1e-9, "{t1}");
    assert!((output.duration - t1).abs() < 1e-9);

    // the non-limiting DoF was re-timed to the synchronized duration
    assert!((generator.profile(0).unwrap().duration() - output.duration).abs() < 1e-7);

    let (end, _) = run_to_finish(&mut generator, &mut input);
    assert!((end.new_position[0] - 0.25).abs() < 1e-5);
    assert!((end.new_position[1] - 1.0).abs() < 1e-5);
}

#[test]
fn minimum_duration_stretches_with_reduced_jerk() {
    let mut generator = TrajectoryGenerator::<1>::new(DT);
    let mut input = Input::<1>::default();
    input.target_position[0] = 1.0;
    input.minimum_duration = Some(5.0);

    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();
    assert!((output.duration - 5.0).abs() < 1e-9);
    // the symmetric stretched shape scales jerk to 32·pd/tf³
    let jerk = generator.profile(0).unwrap().j[0].abs();
    assert!((jerk - 32.0 / 125.0).abs() < 1e-6, "{jerk}");

    let (end, _) = run_to_finish(&mut generator, &mut input);
    assert!((end.new_position[0] - 1.0).abs() < 1e-6);
}

#[test]
fn infeasible_target_reports_invalid_input() {
    let mut generator = TrajectoryGenerator::<1>::new(DT);
    let mut input = Input::<1>::default();
    input.target_velocity[0] = 2.0;

    let mut output = Output::default();
    let err = generator.update(&input, &mut output).unwrap_err();
    assert!(matches!(err, JoltError::InvalidInput { dof: 0, .. }));
    assert!(generator.at_time(0.0, &mut output).is_err());
}

#[test]
fn update_is_idempotent_apart_from_latency() {
    let mut input = Input::<2>::default();
    input.target_position = [0.7, -0.4];
    input.current_velocity = [0.1, -0.2];

    let mut gen_a = TrajectoryGenerator::<2>::new(DT);
    let mut gen_b = TrajectoryGenerator::<2>::new(DT);
    let mut out_a = Output::default();
    let mut out_b = Output::default();
    gen_a.update(&input, &mut out_a).unwrap();
    gen_b.update(&input, &mut out_b).unwrap();

    out_a.calculation_duration = 0.0;
    out_b.calculation_duration = 0.0;
    assert_eq!(out_a, out_b);
}

#[test]
fn samples_are_continuous_across_segment_boundaries() {
    let mut generator = TrajectoryGenerator::<1>::new(DT);
    let mut input = Input::<1>::default();
    input.target_position[0] = 10.0;
    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();

    let profile = *generator.profile(0).unwrap();
    let delta = 1e-7;
    let mut before = Output::default();
    let mut after = Output::default();
    for &boundary in &profile.t_sum {
        if boundary <= delta || boundary >= output.duration {
            continue;
        }
        generator.at_time(boundary - delta, &mut before).unwrap();
        generator.at_time(boundary + delta, &mut after).unwrap();
        assert!((before.new_position[0] - after.new_position[0]).abs() < 1e-5);
        assert!((before.new_velocity[0] - after.new_velocity[0]).abs() < 1e-5);
        assert!((before.new_acceleration[0] - after.new_acceleration[0]).abs() < 1e-4);
    }
}

#[test]
fn sampling_at_duration_yields_exact_target() {
    let mut generator = TrajectoryGenerator::<2>::new(DT);
    let mut input = Input::<2>::default();
    input.target_position = [0.6, -1.1];
    input.target_velocity = [0.2, 0.0];
    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();

    let mut probe = Output::default();
    generator.at_time(output.duration, &mut probe).unwrap();
    for dof in 0..2 {
        assert!((probe.new_position[dof] - input.target_position[dof]).abs() < 1e-8);
        assert!((probe.new_velocity[dof] - input.target_velocity[dof]).abs() < 1e-8);
        assert!((probe.new_acceleration[dof]).abs() < 1e-8);
    }
}

#[test]
fn boundary_equalities_hold_for_a_parameter_grid() {
    // universal invariant: the planned profile always lands exactly on the
    // target state (within the 1e-8 boundary tolerance)
    let starts = [-0.5, 0.0, 0.6];
    let velocities = [-0.5, 0.0, 0.4];
    let accelerations = [-0.6, 0.0, 0.3];
    for &p0 in &starts {
        for &v0 in &velocities {
            for &a0 in &accelerations {
                let mut generator = TrajectoryGenerator::<1>::new(DT);
                let mut input = Input::<1>::default();
                input.current_position[0] = p0;
                input.current_velocity[0] = v0;
                input.current_acceleration[0] = a0;
                input.target_position[0] = 1.0;
                input.target_velocity[0] = -0.3;

                let mut output = Output::default();
                generator
                    .update(&input, &mut output)
                    .unwrap_or_else(|e| panic!("p0={p0} v0={v0} a0={a0}: {e}"));
                let profile = generator.profile(0).unwrap();
                assert!((profile.p[7] - 1.0).abs() < 1e-8);
                assert!((profile.v[7] + 0.3).abs() < 1e-8);
                assert!(profile.a[7].abs() < 1e-8);
            }
        }
    }
}
