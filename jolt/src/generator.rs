//! Update entry point: validation, replanning, sampling.
//!
//! One generator instance owns the plan for a fixed set of DoFs. Each call
//! to [`TrajectoryGenerator::update`] advances the internal clock, replans
//! if the input changed, and samples the trajectory into the output. A
//! failed replan leaves the previously accepted plan untouched, so the
//! caller may keep sampling the old trajectory.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, warn};

use crate::block::Block;
use crate::brake::get_brake_trajectory;
use crate::params::{Input, Output};
use crate::profile::{integrate, Profile};
use crate::step1::Step1;
use crate::step2::Step2;
use crate::sync::{synchronize, MAX_DOFS};

/// Non-error outcome of an update tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The trajectory is still in progress.
    Working,
    /// The trajectory finishes within the next cycle.
    Finished,
}

/// Planning failure taxonomy. All variants leave the previous plan intact.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum JoltError {
    /// Input validation failed; no plan was computed.
    #[error("invalid input for DoF {dof}: {reason}")]
    InvalidInput {
        dof: usize,
        reason: &'static str,
    },
    /// No feasible time-optimal profile exists for the DoF.
    #[error("profile search failed for DoF {dof}")]
    ProfileSearch { dof: usize },
    /// No common finish time could be realized across all DoFs.
    #[error("duration synchronization failed")]
    Synchronization,
    /// A read-only query was made before any plan was computed.
    #[error("no trajectory has been computed yet")]
    NoTrajectory,
}

/// Online jerk-limited trajectory generator for `DOFS` degrees of freedom.
#[derive(Debug, Clone)]
pub struct TrajectoryGenerator<const DOFS: usize> {
    /// Cycle period [s].
    pub delta_time: f64,

    t: f64,
    tf: f64,
    profiles: [Profile; DOFS],
    current_input: Option<Input<DOFS>>,
}

impl<const DOFS: usize> TrajectoryGenerator<DOFS> {
    /// Create a generator with the given cycle period (seconds, > 0).
    pub fn new(delta_time: f64) -> Self {
        const { assert!(DOFS > 0 && DOFS <= MAX_DOFS) };
        assert!(delta_time > 0.0, "cycle period must be positive");
        Self {
            delta_time,
            t: 0.0,
            tf: 0.0,
            profiles: [Profile::default(); DOFS],
            current_input: None,
        }
    }

    /// Duration of the current trajectory [s]; zero before the first plan.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.tf
    }

    /// The profile planned for a DoF, once a trajectory exists.
    pub fn profile(&self, dof: usize) -> Option<&Profile> {
        self.current_input.as_ref()?;
        self.profiles.get(dof)
    }

    /// Check the input against the limits: all limits positive, targets
    /// within the velocity/acceleration limits, and a target acceleration
    /// actually reachable without breaking the velocity limit on the way.
    pub fn validate_input(&self, input: &Input<DOFS>) -> Result<(), JoltError> {
        for dof in 0..DOFS {
            if input.max_velocity[dof] <= 0.0 {
                warn!(dof, "velocity limit must be positive");
                return Err(JoltError::InvalidInput {
                    dof,
                    reason: "velocity limit must be positive",
                });
            }
            if input.max_acceleration[dof] <= 0.0 {
                warn!(dof, "acceleration limit must be positive");
                return Err(JoltError::InvalidInput {
                    dof,
                    reason: "acceleration limit must be positive",
                });
            }
            if input.max_jerk[dof] <= 0.0 {
                warn!(dof, "jerk limit must be positive");
                return Err(JoltError::InvalidInput {
                    dof,
                    reason: "jerk limit must be positive",
                });
            }
            if input.target_velocity[dof].abs() > input.max_velocity[dof] {
                warn!(dof, "target velocity exceeds the velocity limit");
                return Err(JoltError::InvalidInput {
                    dof,
                    reason: "target velocity exceeds the velocity limit",
                });
            }
            if input.target_acceleration[dof].abs() > input.max_acceleration[dof] {
                warn!(dof, "target acceleration exceeds the acceleration limit");
                return Err(JoltError::InvalidInput {
                    dof,
                    reason: "target acceleration exceeds the acceleration limit",
                });
            }
            let reachable = (2.0
                * input.max_jerk[dof]
                * (input.max_velocity[dof] - input.target_velocity[dof].abs()))
            .sqrt();
            if input.target_acceleration[dof].abs() > reachable {
                warn!(dof, "target acceleration unreachable under the velocity limit");
                return Err(JoltError::InvalidInput {
                    dof,
                    reason: "target acceleration unreachable under the velocity limit",
                });
            }
        }
        Ok(())
    }

    /// Run one control cycle.
    ///
    /// Advances the internal clock by `delta_time`, replans when `input`
    /// differs from the last accepted input, samples the trajectory at the
    /// current clock into `output`, and reports whether the trajectory is
    /// still in progress. After a `Working` tick the accepted input's
    /// current state is replaced by the sampled state, so feeding the
    /// output back as the next input does not force a replan.
    pub fn update(
        &mut self,
        input: &Input<DOFS>,
        output: &mut Output<DOFS>,
    ) -> Result<Status, JoltError> {
        let start = Instant::now();

        self.t += self.delta_time;
        output.new_calculation = false;

        if self.current_input.as_ref() != Some(input) {
            self.calculate(input, output)?;
        }

        self.sample(self.t, output);
        output.duration = self.tf;
        output.calculation_duration = start.elapsed().as_secs_f64() * 1e6;

        if self.t + self.delta_time > self.tf {
            return Ok(Status::Finished);
        }

        let accepted = self
            .current_input
            .as_mut()
            .expect("plan exists after calculate");
        accepted.current_position = output.new_position;
        accepted.current_velocity = output.new_velocity;
        accepted.current_acceleration = output.new_acceleration;
        Ok(Status::Working)
    }

    /// Sample the last computed trajectory at an arbitrary `time ≥ 0`.
    pub fn at_time(&self, time: f64, output: &mut Output<DOFS>) -> Result<(), JoltError> {
        if self.current_input.is_none() {
            return Err(JoltError::NoTrajectory);
        }
        self.sample(time, output);
        output.duration = self.tf;
        Ok(())
    }

    /// Full planning pipeline: brake → Step 1 → synchronize → Step 2.
    ///
    /// Works on scratch state and commits only on success; an error return
    /// leaves the previous plan and input snapshot untouched.
    fn calculate(
        &mut self,
        input: &Input<DOFS>,
        output: &mut Output<DOFS>,
    ) -> Result<(), JoltError> {
        self.validate_input(input)?;

        let mut profiles = [Profile::default(); DOFS];
        let mut blocks: [Option<Block>; DOFS] = [None; DOFS];
        let mut p0s = [0.0; DOFS];
        let mut v0s = [0.0; DOFS];
        let mut a0s = [0.0; DOFS];

        for dof in 0..DOFS {
            if !input.enabled[dof] {
                continue;
            }
            let profile = &mut profiles[dof];

            // brake first when the current state is outside the limits
            let brake = get_brake_trajectory(
                input.current_velocity[dof],
                input.current_acceleration[dof],
                input.max_velocity[dof],
                input.max_acceleration[dof],
                input.max_jerk[dof],
            );
            profile.t_brakes = brake.t;
            profile.j_brakes = brake.j;
            profile.t_brake = (!brake.is_empty()).then(|| brake.duration());

            p0s[dof] = input.current_position[dof];
            v0s[dof] = input.current_velocity[dof];
            a0s[dof] = input.current_acceleration[dof];
            if brake.t[0] > 0.0 {
                profile.p_brakes[0] = p0s[dof];
                profile.v_brakes[0] = v0s[dof];
                profile.a_brakes[0] = a0s[dof];
                (p0s[dof], v0s[dof], a0s[dof]) =
                    integrate(brake.t[0], p0s[dof], v0s[dof], a0s[dof], brake.j[0]);
                if brake.t[1] > 0.0 {
                    profile.p_brakes[1] = p0s[dof];
                    profile.v_brakes[1] = v0s[dof];
                    profile.a_brakes[1] = a0s[dof];
                    (p0s[dof], v0s[dof], a0s[dof]) =
                        integrate(brake.t[1], p0s[dof], v0s[dof], a0s[dof], brake.j[1]);
                }
            }

            let step1 = Step1::new(
                p0s[dof],
                v0s[dof],
                a0s[dof],
                input.target_position[dof],
                input.target_velocity[dof],
                input.target_acceleration[dof],
                input.max_velocity[dof],
                input.max_acceleration[dof],
                input.max_jerk[dof],
            );
            let mut block = step1.block().ok_or(JoltError::ProfileSearch { dof })?;

            // the block's candidate profiles inherit the brake prefix
            for candidate in [Some(&mut block.p_min), block.p_a.as_mut(), block.p_b.as_mut()]
                .into_iter()
                .flatten()
            {
                candidate.t_brake = profile.t_brake;
                candidate.t_brakes = profile.t_brakes;
                candidate.j_brakes = profile.j_brakes;
                candidate.p_brakes = profile.p_brakes;
                candidate.v_brakes = profile.v_brakes;
                candidate.a_brakes = profile.a_brakes;
            }

            output.independent_min_durations[dof] = block.t_min;
            blocks[dof] = Some(block);
        }

        let sync = synchronize(&blocks, input.minimum_duration, &input.enabled)
            .ok_or(JoltError::Synchronization)?;
        let t_sync = sync.t_sync;
        if let (Some(dof), Some(profile)) = (sync.limiting_dof, sync.profile) {
            profiles[dof] = profile;
        }

        if t_sync > 0.0 {
            for dof in 0..DOFS {
                if !input.enabled[dof] || Some(dof) == sync.limiting_dof {
                    continue;
                }
                let t_profile = t_sync - profiles[dof].brake_duration();
                let step2 = Step2::new(
                    t_profile,
                    p0s[dof],
                    v0s[dof],
                    a0s[dof],
                    input.target_position[dof],
                    input.target_velocity[dof],
                    input.target_acceleration[dof],
                    input.max_velocity[dof],
                    input.max_acceleration[dof],
                    input.max_jerk[dof],
                );
                let mut profile = step2.profile().ok_or(JoltError::Synchronization)?;
                profile.t_brake = profiles[dof].t_brake;
                profile.t_brakes = profiles[dof].t_brakes;
                profile.j_brakes = profiles[dof].j_brakes;
                profile.p_brakes = profiles[dof].p_brakes;
                profile.v_brakes = profiles[dof].v_brakes;
                profile.a_brakes = profiles[dof].a_brakes;
                profiles[dof] = profile;
            }
        }

        debug!(
            duration = t_sync,
            limiting_dof = ?sync.limiting_dof,
            "computed new trajectory"
        );

        // commit the new plan
        self.profiles = profiles;
        self.current_input = Some(input.clone());
        self.t = 0.0;
        self.tf = t_sync;
        output.duration = t_sync;
        output.new_calculation = true;
        Ok(())
    }

    /// Evaluate `(p, v, a)` for every DoF at the given time by walking the
    /// selected profiles (brake region included). Past the end of the
    /// trajectory the target state extrapolates under constant
    /// acceleration. Disabled DoFs integrate freely from their current
    /// state with zero jerk.
    fn sample(&self, time: f64, output: &mut Output<DOFS>) {
        let input = self
            .current_input
            .as_ref()
            .expect("sample requires a plan");

        if time + self.delta_time > self.tf {
            for dof in 0..DOFS {
                let (p, v, a) = integrate(
                    time - self.tf,
                    input.target_position[dof],
                    input.target_velocity[dof],
                    input.target_acceleration[dof],
                    0.0,
                );
                output.new_position[dof] = p;
                output.new_velocity[dof] = v;
                output.new_acceleration[dof] = a;
            }
            return;
        }

        for dof in 0..DOFS {
            if !input.enabled[dof] {
                let (p, v, a) = integrate(
                    time,
                    input.current_position[dof],
                    input.current_velocity[dof],
                    input.current_acceleration[dof],
                    0.0,
                );
                output.new_position[dof] = p;
                output.new_velocity[dof] = v;
                output.new_acceleration[dof] = a;
                continue;
            }

            let profile = &self.profiles[dof];
            let mut t_diff = time;

            if let Some(t_brake) = profile.t_brake {
                if t_diff < t_brake {
                    let index = usize::from(t_diff >= profile.t_brakes[0]);
                    if index > 0 {
                        t_diff -= profile.t_brakes[0];
                    }
                    let (p, v, a) = integrate(
                        t_diff,
                        profile.p_brakes[index],
                        profile.v_brakes[index],
                        profile.a_brakes[index],
                        profile.j_brakes[index],
                    );
                    output.new_position[dof] = p;
                    output.new_velocity[dof] = v;
                    output.new_acceleration[dof] = a;
                    continue;
                }
                t_diff -= t_brake;
            }

            if t_diff >= profile.t_sum[6] {
                output.new_position[dof] = profile.p[7];
                output.new_velocity[dof] = profile.v[7];
                output.new_acceleration[dof] = profile.a[7];
                continue;
            }

            // stable upper-bound search over the prefix sums
            let index = profile
                .t_sum
                .iter()
                .position(|&sum| t_diff < sum)
                .unwrap_or(6);
            if index > 0 {
                t_diff -= profile.t_sum[index - 1];
            }
            let (p, v, a) = integrate(
                t_diff,
                profile.p[index],
                profile.v[index],
                profile.a[index],
                profile.j[index],
            );
            output.new_position[dof] = p;
            output.new_velocity[dof] = v;
            output.new_acceleration[dof] = a;
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_target_velocity_beyond_limit() {
        let mut gen = TrajectoryGenerator::<1>::new(0.001);
        let mut input = Input::<1>::default();
        input.target_velocity[0] = 2.0; // max_velocity = 1
        let mut output = Output::default();
        let err = gen.update(&input, &mut output).unwrap_err();
        assert!(matches!(err, JoltError::InvalidInput { dof: 0, .. }));
        // nothing was accepted
        assert!(gen.at_time(0.0, &mut output).is_err());
    }

    #[test]
    fn rejects_negative_target_velocity_beyond_limit() {
        // the sign-agnostic comparison: -2 must be rejected like +2
        let mut gen = TrajectoryGenerator::<1>::new(0.001);
        let mut input = Input::<1>::default();
        input.target_velocity[0] = -2.0;
        let mut output = Output::default();
        assert!(gen.update(&input, &mut output).is_err());
    }

    #[test]
    fn rejects_unreachable_target_acceleration() {
        let mut gen = TrajectoryGenerator::<1>::new(0.001);
        let mut input = Input::<1>::default();
        // at target velocity 0.995·vMax, only sqrt(2·j·0.005) ≈ 0.1 of
        // acceleration is reachable without breaking the velocity limit
        input.target_velocity[0] = 0.995;
        input.target_acceleration[0] = 0.5;
        let mut output = Output::default();
        assert!(gen.update(&input, &mut output).is_err());
    }

    #[test]
    fn failed_replan_keeps_previous_trajectory() {
        let mut gen = TrajectoryGenerator::<1>::new(0.001);
        let mut input = Input::<1>::default();
        input.target_position[0] = 1.0;
        let mut output = Output::default();
        gen.update(&input, &mut output).unwrap();
        let duration = output.duration;

        let mut bad = input.clone();
        bad.target_velocity[0] = 5.0;
        assert!(gen.update(&bad, &mut output).is_err());

        // the old plan is still sampleable
        let mut probe = Output::default();
        gen.at_time(duration, &mut probe).unwrap();
        assert!((probe.new_position[0] - 1.0).abs() < 1e-8);
    }

    #[test]
    fn unchanged_input_skips_replanning() {
        let mut gen = TrajectoryGenerator::<1>::new(0.001);
        let mut input = Input::<1>::default();
        input.target_position[0] = 1.0;
        let mut output = Output::default();
        gen.update(&input, &mut output).unwrap();
        assert!(output.new_calculation);

        // feed the sampled state back, as a cyclic caller does
        input.current_position = output.new_position;
        input.current_velocity = output.new_velocity;
        input.current_acceleration = output.new_acceleration;
        gen.update(&input, &mut output).unwrap();
        assert!(!output.new_calculation);
    }

    #[test]
    fn disabled_dof_integrates_freely() {
        let mut gen = TrajectoryGenerator::<2>::new(0.001);
        let mut input = Input::<2>::default();
        input.target_position[0] = 1.0;
        input.enabled[1] = false;
        input.current_velocity[1] = 0.25;
        let mut output = Output::default();
        gen.update(&input, &mut output).unwrap();
        // dof 1 drifts at constant velocity instead of tracking a profile
        let mut probe = Output::default();
        gen.at_time(2.0, &mut probe).unwrap();
        assert!((probe.new_position[1] - 0.5).abs() < 1e-9);
        assert!((probe.new_velocity[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn finishes_and_extrapolates_with_constant_acceleration() {
        let mut gen = TrajectoryGenerator::<1>::new(0.001);
        let mut input = Input::<1>::default();
        input.target_position[0] = 1.0;
        let mut output = Output::default();
        gen.update(&input, &mut output).unwrap();
        let duration = output.duration;

        let mut probe = Output::default();
        gen.at_time(duration + 0.5, &mut probe).unwrap();
        // target state has zero velocity and acceleration: it holds still
        assert!((probe.new_position[0] - 1.0).abs() < 1e-9);
        assert!(probe.new_velocity[0].abs() < 1e-12);
    }
}
