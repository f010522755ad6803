//! Benchmarks for the update hot path: fresh calculation vs. cached tick.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jolt::{Input, Output, TrajectoryGenerator};

fn bench_single_dof_calculation(c: &mut Criterion) {
    let mut input = Input::<1>::default();
    input.current_velocity[0] = 0.2;
    input.current_acceleration[0] = -0.1;
    input.target_position[0] = 1.0;
    input.target_velocity[0] = -0.3;

    c.bench_function("calculate_1dof", |b| {
        let mut output = Output::default();
        b.iter(|| {
            // a fresh generator forces the full pipeline every iteration
            let mut generator = TrajectoryGenerator::<1>::new(0.001);
            generator.update(black_box(&input), &mut output).unwrap();
            black_box(output.duration)
        })
    });
}

fn bench_three_dof_calculation(c: &mut Criterion) {
    let mut input = Input::<3>::default();
    input.target_position = [0.1, 1.0, 2.5];
    input.current_velocity = [0.2, -0.1, 0.0];

    c.bench_function("calculate_3dof", |b| {
        let mut output = Output::default();
        b.iter(|| {
            let mut generator = TrajectoryGenerator::<3>::new(0.001);
            generator.update(black_box(&input), &mut output).unwrap();
            black_box(output.duration)
        })
    });
}

fn bench_cached_tick(c: &mut Criterion) {
    let mut input = Input::<3>::default();
    input.target_position = [0.1, 1.0, 2.5];

    let mut generator = TrajectoryGenerator::<3>::new(0.001);
    let mut output = Output::default();
    generator.update(&input, &mut output).unwrap();
    input.current_position = output.new_position;
    input.current_velocity = output.new_velocity;
    input.current_acceleration = output.new_acceleration;

    c.bench_function("cached_tick_3dof", |b| {
        b.iter(|| {
            generator.update(black_box(&input), &mut output).unwrap();
            input.current_position = output.new_position;
            input.current_velocity = output.new_velocity;
            input.current_acceleration = output.new_acceleration;
            black_box(output.new_position[0])
        })
    });
}

criterion_group!(
    benches,
    bench_single_dof_calculation,
    bench_three_dof_calculation,
    bench_cached_tick
);
criterion_main!(benches);
