//! Brake pre-trajectory: up to two corrective segments that pull a state
//! exceeding (or inevitably about to exceed) the kinematic limits back
//! toward the feasible region before the main profile starts.
//!
//! The velocity criterion accounts for the committed part of the motion:
//! with acceleration `a`, the velocity will still change by `a²/(2·jMax)`
//! while the acceleration is ramped back to zero, so the relevant quantity
//! is the zero-acceleration projection of the velocity, not the velocity
//! itself.

use crate::math::{sqrt_clamped, EPS_BRAKE};
use crate::profile::integrate;

/// Brake segment durations and jerks. All durations are non-negative; an
/// all-zero result means no brake is required.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrakeTrajectory {
    pub t: [f64; 2],
    pub j: [f64; 2],
}

impl BrakeTrajectory {
    /// Total brake duration [s].
    #[inline]
    pub fn duration(&self) -> f64 {
        self.t[0] + self.t[1]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t[0] == 0.0 && self.t[1] == 0.0
    }

    fn mirrored(mut self) -> Self {
        self.j[0] = -self.j[0];
        self.j[1] = -self.j[1];
        self
    }
}

/// Compute the brake segments for the given state and limits.
///
/// After applying the returned segments via the integrator, the
/// acceleration is inside `±aMax` and the velocity is either inside
/// `±vMax` or heading back into that band with its deceleration dip
/// bounded by the opposite limit (the overshoot is absorbed by the
/// early-boundary tolerance of the profile check).
pub fn get_brake_trajectory(v0: f64, a0: f64, v_max: f64, a_max: f64, j_max: f64) -> BrakeTrajectory {
    // the side the acceleration is driving toward is the urgent one
    let hi = v0 > v_max || (a0 > 0.0 && v0 + a0 * a0 / (2.0 * j_max) > v_max);
    let lo = v0 < -v_max || (a0 < 0.0 && v0 - a0 * a0 / (2.0 * j_max) < -v_max);

    if a0 > a_max {
        acceleration_brake(v0, a0, v_max, a_max, j_max)
    } else if a0 < -a_max {
        acceleration_brake(-v0, -a0, v_max, a_max, j_max).mirrored()
    } else if lo && (a0 <= 0.0 || !hi) {
        velocity_brake(-v0, -a0, v_max, a_max, j_max).mirrored()
    } else if hi {
        velocity_brake(v0, a0, v_max, a_max, j_max)
    } else {
        BrakeTrajectory::default()
    }
}

/// Frame: `a0 > aMax`. A single segment jerks the acceleration down onto the
/// limit; if the velocity projection is already past `vMax` the whole state
/// is handed to the velocity brake instead, which also clears the
/// acceleration violation.
fn acceleration_brake(v0: f64, a0: f64, v_max: f64, a_max: f64, j_max: f64) -> BrakeTrajectory {
    let v_at_a_zero = v0 + a0 * a0 / (2.0 * j_max);
    if v_at_a_zero > v_max {
        return velocity_brake(v0, a0, v_max, a_max, j_max);
    }
    BrakeTrajectory {
        t: [(a0 - a_max) / j_max + EPS_BRAKE, 0.0],
        j: [-j_max, 0.0],
    }
}

/// Frame: the velocity (or its zero-acceleration projection) is beyond
/// `+vMax`. The first segment jerks at `-jMax` until one of:
/// - the velocity crosses back down onto `+vMax`,
/// - the deceleration dip would bottom out exactly on `-vMax`,
/// - the acceleration reaches `-aMax`, after which a constant-deceleration
///   coast carries the velocity onto the limit.
fn velocity_brake(v0: f64, a0: f64, v_max: f64, a_max: f64, j_max: f64) -> BrakeTrajectory {
    let mut brake = BrakeTrajectory {
        t: [0.0, 0.0],
        j: [-j_max, 0.0],
    };
    let t_to_a_min = (a0 + a_max) / j_max;
    let t_to_v_max = a0 / j_max + sqrt_clamped(a0 * a0 + 2.0 * j_max * (v0 - v_max)) / j_max;
    let t_to_v_min = a0 / j_max + sqrt_clamped(a0 * a0 / 2.0 + j_max * (v0 + v_max)) / j_max;
    let mut t_stop = t_to_v_max.min(t_to_v_min);
    if a0 > a_max {
        // an acceleration violation must clear no matter what
        t_stop = t_stop.max((a0 - a_max) / j_max);
    }
    if t_stop < t_to_a_min {
        brake.t[0] = (t_stop - EPS_BRAKE).max(0.0);
    } else {
        brake.t[0] = (t_to_a_min - EPS_BRAKE).max(0.0);
        // coast at -aMax; stop on the limit, or early enough that the
        // acceleration-recovery dip cannot land below -vMax
        let (_, v1, _) = integrate(brake.t[0], 0.0, v0, a0, -j_max);
        let t_direct = (v1 - v_max) / a_max;
        let t_guard = (v1 + v_max) / a_max - a_max / (2.0 * j_max);
        brake.t[1] = (t_direct.min(t_guard) - EPS_BRAKE).max(0.0);
        brake.j[1] = 0.0;
    }
    brake
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(brake: &BrakeTrajectory, v0: f64, a0: f64) -> (f64, f64) {
        let (_, v, a) = integrate(brake.t[0], 0.0, v0, a0, brake.j[0]);
        let (_, v, a) = integrate(brake.t[1], 0.0, v, a, brake.j[1]);
        (v, a)
    }

    #[test]
    fn in_limits_state_needs_no_brake() {
        let brake = get_brake_trajectory(0.5, 0.2, 1.0, 1.0, 1.0);
        assert!(brake.is_empty());
    }

    #[test]
    fn velocity_overshoot_brakes_down_to_limit() {
        // v0 = 2 with vMax = 1, aMax = 2, jMax = 5
        let brake = get_brake_trajectory(2.0, 0.0, 1.0, 2.0, 5.0);
        assert!(!brake.is_empty());
        assert!((brake.t[0] - 0.4).abs() < 1e-9);
        assert!((brake.t[1] - 0.3).abs() < 1e-9);
        let (v, a) = apply(&brake, 2.0, 0.0);
        assert!(v <= 1.0 + 1e-9);
        assert!(a.abs() <= 2.0 + 1e-9);
    }

    #[test]
    fn acceleration_overshoot_ramps_onto_limit() {
        let brake = get_brake_trajectory(0.0, 2.0, 10.0, 1.0, 1.0);
        let (_, a) = apply(&brake, 0.0, 2.0);
        assert!(a.abs() <= 1.0 + 1e-9);
        assert!(brake.t[1] == 0.0);
    }

    #[test]
    fn projected_velocity_violation_triggers_brake() {
        // v0 inside the limit but v0 + a0²/(2 jMax) far beyond it
        let v0 = 0.5;
        let a0 = 2.0;
        let brake = get_brake_trajectory(v0, a0, 1.0, 3.0, 1.0);
        assert!(!brake.is_empty());
        let (v, a) = apply(&brake, v0, a0);
        // after the brake the projection must be back inside the band
        let proj = v + a.abs() * a / (2.0 * 1.0);
        assert!(proj.abs() <= 1.0 + 1e-6, "projection {proj}");
    }

    #[test]
    fn mirrored_state_brakes_symmetrically() {
        let up = get_brake_trajectory(2.0, 0.5, 1.0, 2.0, 5.0);
        let down = get_brake_trajectory(-2.0, -0.5, 1.0, 2.0, 5.0);
        assert!((up.t[0] - down.t[0]).abs() < 1e-15);
        assert!((up.j[0] + down.j[0]).abs() < 1e-15);
    }

    #[test]
    fn durations_never_negative_on_grid() {
        for iv in -8..=8 {
            for ia in -8..=8 {
                let v0 = iv as f64 * 0.5;
                let a0 = ia as f64 * 0.5;
                let brake = get_brake_trajectory(v0, a0, 1.0, 1.5, 2.0);
                assert!(brake.t[0] >= 0.0 && brake.t[1] >= 0.0);
                let (v, a) = apply(&brake, v0, a0);
                assert!(a.abs() <= 1.5 + 1e-9, "a={a} from v0={v0} a0={a0}");
                // velocity either inside, or decreasing toward the band with
                // a bounded dip
                let dip = if a < 0.0 {
                    v - a * a / (2.0 * 2.0)
                } else {
                    v + a * a / (2.0 * 2.0)
                };
                let tol = 1e-9 * (1.0 + v.abs() + a * a / 4.0);
                let ok_hi = v <= 1.0 + tol || (a < tol && dip >= -1.0 - tol);
                let ok_lo = v >= -1.0 - tol || (a > -tol && dip <= 1.0 + tol);
                assert!(ok_hi && ok_lo, "v={v} a={a} from v0={v0} a0={a0}");
            }
        }
    }
}
