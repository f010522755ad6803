//! Seven-segment constant-jerk motion profile for a single degree of freedom.
//!
//! A profile is an ordered sequence of seven segments with piecewise-constant
//! jerk, optionally preceded by up to two brake segments that pull an
//! out-of-limits state back toward the feasible region. Boundary states are
//! derived by exact integration and validated against the kinematic limits
//! by [`Profile::check`].

use crate::math::{EPS_JERK, EPS_STATE, EPS_LIMIT};

/// Which kinematic limits the profile saturates. `Acc0` refers to the
/// acceleration limit in the initial half, `Acc1` in the final half, `Vel`
/// to the velocity limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limits {
    Acc0Acc1Vel,
    Vel,
    Acc0,
    Acc1,
    Acc0Acc1,
    Acc0Vel,
    Acc1Vel,
    #[default]
    None,
}

/// Sign convention of the dominant motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// Sign applied to positions, velocities, accelerations, and jerks to
    /// map the solver's canonical frame onto this direction.
    #[inline]
    pub(crate) fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

/// Jerk sign pattern across the seven segments.
///
/// `Uddu` applies `(+j, 0, -j, 0, -j, 0, +j)`: the second half descends onto
/// the target. `Udud` applies `(+j, 0, -j, 0, +j, 0, -j)`: the second half
/// climbs onto it. Together with the direction flip these cover every shape
/// the solvers enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Teeth {
    #[default]
    Uddu,
    Udud,
}

/// Evaluate constant-jerk kinematics over a duration.
///
/// Negative durations are permitted; the sampler uses them to extrapolate
/// past the end of a trajectory under constant acceleration.
#[inline]
pub fn integrate(t: f64, p0: f64, v0: f64, a0: f64, j: f64) -> (f64, f64, f64) {
    (
        p0 + t * (v0 + t * (a0 / 2.0 + t * j / 6.0)),
        v0 + t * (a0 + t * j / 2.0),
        a0 + t * j,
    )
}

/// A single DoF's planned trajectory: seven constant-jerk segments plus an
/// optional prepended brake of up to two segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Profile {
    /// Segment durations [s].
    pub t: [f64; 7],
    /// Prefix sums of the segment durations [s].
    pub t_sum: [f64; 7],
    /// Jerk applied during each segment [m/s³].
    pub j: [f64; 7],
    /// Acceleration at segment boundaries [m/s²].
    pub a: [f64; 8],
    /// Velocity at segment boundaries [m/s].
    pub v: [f64; 8],
    /// Position at segment boundaries [m].
    pub p: [f64; 8],

    /// Saturated limit classification.
    pub limits: Limits,
    /// Dominant motion direction.
    pub direction: Direction,
    /// Jerk sign pattern.
    pub teeth: Teeth,

    /// Total brake duration [s]; `None` when no brake is needed.
    pub t_brake: Option<f64>,
    /// Brake segment durations [s].
    pub t_brakes: [f64; 2],
    /// Brake segment jerks [m/s³].
    pub j_brakes: [f64; 2],
    /// Acceleration at each brake segment start [m/s²].
    pub a_brakes: [f64; 2],
    /// Velocity at each brake segment start [m/s].
    pub v_brakes: [f64; 2],
    /// Position at each brake segment start [m].
    pub p_brakes: [f64; 2],
}

impl Profile {
    /// Install the state the main profile starts from (after brakes).
    #[inline]
    pub(crate) fn set_start(&mut self, p0: f64, v0: f64, a0: f64) {
        self.p[0] = p0;
        self.v[0] = v0;
        self.a[0] = a0;
    }

    /// Validate the profile against boundary conditions and limits.
    ///
    /// Fills `j`, `t_sum`, and the boundary states from `(p[0], v[0], a[0])`
    /// and the segment durations, then verifies:
    /// - every duration is non-negative,
    /// - `|v|` at boundaries 3.. and `|a|` at boundaries 2.. stay within the
    ///   limits (the earlier boundaries may exceed them when the raw input
    ///   state did; the brake guarantees the solver-controlled ramps pull
    ///   the state back in by the time those indices are reached),
    /// - the final boundary state matches the target within `1e-8`.
    pub(crate) fn check(
        &mut self,
        teeth: Teeth,
        pf: f64,
        vf: f64,
        af: f64,
        jf: f64,
        v_max: f64,
        a_max: f64,
    ) -> bool {
        self.j = match teeth {
            Teeth::Uddu => [jf, 0.0, -jf, 0.0, -jf, 0.0, jf],
            Teeth::Udud => [jf, 0.0, -jf, 0.0, jf, 0.0, -jf],
        };
        self.teeth = teeth;

        let mut sum = 0.0;
        for i in 0..7 {
            if self.t[i] < 0.0 {
                return false;
            }
            sum += self.t[i];
            self.t_sum[i] = sum;
        }
        for i in 0..7 {
            let (p, v, a) = integrate(self.t[i], self.p[i], self.v[i], self.a[i], self.j[i]);
            self.p[i + 1] = p;
            self.v[i + 1] = v;
            self.a[i + 1] = a;
        }

        if !self.v[3..].iter().all(|v| v.abs() < v_max.abs() + EPS_LIMIT) {
            return false;
        }
        if !self.a[2..].iter().all(|a| a.abs() < a_max.abs() + EPS_LIMIT) {
            return false;
        }
        (self.p[7] - pf).abs() < EPS_STATE
            && (self.v[7] - vf).abs() < EPS_STATE
            && (self.a[7] - af).abs() < EPS_STATE
    }

    /// [`Profile::check`] with the total duration pinned to `tf` and the
    /// jerk magnitude bounded by `j_max` (the duration-constrained solvers
    /// may use a reduced jerk).
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn check_with_duration(
        &mut self,
        teeth: Teeth,
        tf: f64,
        pf: f64,
        vf: f64,
        af: f64,
        jf: f64,
        v_max: f64,
        a_max: f64,
        j_max: f64,
    ) -> bool {
        jf.abs() < j_max.abs() + EPS_JERK
            && self.check(teeth, pf, vf, af, jf, v_max, a_max)
            && (self.t_sum[6] - tf).abs() < EPS_STATE
    }

    /// Total duration of the seven main segments [s].
    #[inline]
    pub fn duration(&self) -> f64 {
        self.t_sum[6]
    }

    /// Total brake duration, zero when the profile has no brake [s].
    #[inline]
    pub fn brake_duration(&self) -> f64 {
        self.t_brake.unwrap_or(0.0)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
