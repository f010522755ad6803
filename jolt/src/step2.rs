//! Constrained-duration profile solve.
//!
//! For a DoF that is not the limiting one, re-solves the shape enumeration
//! with the total duration pinned to the synchronized finish time. Shapes
//! either keep the full jerk and free the cruise velocity, or pin the
//! saturated limits and free the jerk magnitude (which is how a stretched
//! profile ends up with reduced jerk). The first candidate that passes
//! [`Profile::check_with_duration`] wins.

use crate::coefficients as coeff;
use crate::math::{find_roots_bracketed, solve_polynomial, sqrt_clamped, EPS_JERK};
use crate::profile::{integrate, Direction, Limits, Profile, Teeth};
use crate::step1::{clamp_durations, Frame};

/// One duration-pinned candidate in the solver's up-frame. Unlike Step 1
/// the jerk magnitude may differ from the limit.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    t: [f64; 7],
    jf: f64,
    limits: Limits,
    teeth: Teeth,
}

const MAX_CANDIDATES: usize = 64;

struct Candidates {
    buf: [Candidate; MAX_CANDIDATES],
    len: usize,
}

impl Candidates {
    fn new() -> Self {
        Self {
            buf: [Candidate {
                t: [0.0; 7],
                jf: 0.0,
                limits: Limits::None,
                teeth: Teeth::Uddu,
            }; MAX_CANDIDATES],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, t: [f64; 7], jf: f64, limits: Limits, teeth: Teeth) {
        if self.len < MAX_CANDIDATES {
            self.buf[self.len] = Candidate {
                t,
                jf,
                limits,
                teeth,
            };
            self.len += 1;
        }
    }

    fn as_slice(&self) -> &[Candidate] {
        &self.buf[..self.len]
    }
}

fn enumerate_cases(f: &Frame, tf: f64, out: &mut Candidates) {
    let Frame {
        pd,
        v0,
        a0,
        vf,
        af,
        v_max,
        a_max,
        j_max: j,
    } = *f;

    let t0s = (a_max - a0) / j;
    let t1s = (v_max - v0) / a_max + (a0 * a0 / 2.0 - a_max * a_max) / (a_max * j);
    let t2s = a_max / j;
    let t4s = a_max / j;
    let t5s = (v_max - vf) / a_max + (af * af / 2.0 - a_max * a_max) / (a_max * j);
    let t6s = (a_max + af) / j;
    let h1 = v0 + (2.0 * a_max * a_max - a0 * a0) / (2.0 * j);
    let h2 = vf + (2.0 * a_max * a_max - af * af) / (2.0 * j);
    let h2u = vf - (2.0 * a_max * a_max - af * af) / (2.0 * j);
    let t6u = (a_max - af) / j;

    // ── cruise at vMax, both phases saturated, reduced jerk ──
    for &jf in
        solve_polynomial(&coeff::s2_acc0_acc1_vel(pd, v0, a0, vf, af, v_max, a_max, j, tf))
            .as_slice()
    {
        if !(jf > 0.0 && jf <= j * (1.0 + EPS_JERK)) {
            continue;
        }
        let u0 = (a_max - a0) / jf;
        let u1 = (v_max - v0) / a_max + (a0 * a0 / 2.0 - a_max * a_max) / (a_max * jf);
        let u2 = a_max / jf;
        let u4 = a_max / jf;
        let u5 = (v_max - vf) / a_max + (af * af / 2.0 - a_max * a_max) / (a_max * jf);
        let u6 = (a_max + af) / jf;
        let u3 = tf - (u0 + u1 + u2 + u4 + u5 + u6);
        out.push(
            [u0, u1, u2, u3, u4, u5, u6],
            jf,
            Limits::Acc0Acc1Vel,
            Teeth::Uddu,
        );
    }

    // ── exact-fit vMax-cruise shapes: full jerk, the cruise absorbs the
    //    slack; the profile check decides whether the distance works out ──
    let ah = sqrt_clamped(j * (v_max - v0) + a0 * a0 / 2.0);
    let ad = sqrt_clamped(j * (v_max - vf) + af * af / 2.0);
    let exact: [([f64; 6], Limits); 3] = [
        (
            [(ah - a0) / j, 0.0, ah / j, t4s, t5s, t6s],
            Limits::Acc1Vel,
        ),
        (
            [t0s, t1s, t2s, ad / j, 0.0, (ad + af) / j],
            Limits::Acc0Vel,
        ),
        (
            [(ah - a0) / j, 0.0, ah / j, ad / j, 0.0, (ad + af) / j],
            Limits::Vel,
        ),
    ];
    for (ts, limits) in exact {
        let t3 = tf - ts.iter().sum::<f64>();
        out.push(
            [ts[0], ts[1], ts[2], t3, ts[3], ts[4], ts[5]],
            j,
            limits,
            Teeth::Uddu,
        );
    }

    // ── cruise at a free velocity, both phases saturated ──
    for &x in
        solve_polynomial(&coeff::s2_acc0_acc1(pd, v0, a0, vf, af, v_max, a_max, j, tf)).as_slice()
    {
        let t5 = x + (h1 - h2) / a_max;
        let t3 = tf - (t0s + x + t2s + t4s + t5 + t6s);
        out.push(
            [t0s, x, t2s, t3, t4s, t5, t6s],
            j,
            Limits::Acc0Acc1,
            Teeth::Uddu,
        );
    }
    for &x in
        solve_polynomial(&coeff::s2_acc0_acc1_udud(pd, v0, a0, vf, af, v_max, a_max, j, tf))
            .as_slice()
    {
        let vp = h1 + a_max * x;
        let t5 = (vf - vp) / a_max - (2.0 * a_max * a_max - af * af) / (2.0 * a_max * j);
        let t3 = tf - (t0s + x + t2s + t4s + t5 + t6u);
        out.push(
            [t0s, x, t2s, t3, t4s, t5, t6u],
            j,
            Limits::Acc0Acc1,
            Teeth::Udud,
        );
    }

    // ── triangular first phase, saturated second ──
    for &x in solve_polynomial(&coeff::s2_acc1(pd, v0, a0, vf, af, v_max, a_max, j, tf)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let vp = v0 + (2.0 * x * x - a0 * a0) / (2.0 * j);
        let t5 = (vp - h2) / a_max;
        let t3 = tf - ((x - a0) / j + x / j + t4s + t5 + t6s);
        out.push(
            [(x - a0) / j, 0.0, x / j, t3, t4s, t5, t6s],
            j,
            Limits::Acc1,
            Teeth::Uddu,
        );
    }
    for &x in
        solve_polynomial(&coeff::s2_acc1_udud(pd, v0, a0, vf, af, v_max, a_max, j, tf)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let vp = v0 + (2.0 * x * x - a0 * a0) / (2.0 * j);
        let t5 = (vf - vp) / a_max - (2.0 * a_max * a_max - af * af) / (2.0 * a_max * j);
        let t3 = tf - ((x - a0) / j + x / j + t4s + t5 + t6u);
        out.push(
            [(x - a0) / j, 0.0, x / j, t3, t4s, t5, t6u],
            j,
            Limits::Acc1,
            Teeth::Udud,
        );
    }

    // ── saturated first phase, triangular second ──
    for &x in solve_polynomial(&coeff::s2_acc0(pd, v0, a0, vf, af, v_max, a_max, j, tf)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let vp = vf + (2.0 * x * x - af * af) / (2.0 * j);
        let t1 = (vp - h1) / a_max;
        let t3 = tf - (t0s + t1 + t2s + x / j + (x + af) / j);
        out.push(
            [t0s, t1, t2s, t3, x / j, 0.0, (x + af) / j],
            j,
            Limits::Acc0,
            Teeth::Uddu,
        );
    }
    for &x in
        solve_polynomial(&coeff::s2_acc0_udud(pd, v0, a0, vf, af, v_max, a_max, j, tf)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let vp = vf - (2.0 * x * x - af * af) / (2.0 * j);
        let t1 = (vp - h1) / a_max;
        let t3 = tf - (t0s + t1 + t2s + x / j + (x - af) / j);
        out.push(
            [t0s, t1, t2s, t3, x / j, 0.0, (x - af) / j],
            j,
            Limits::Acc0,
            Teeth::Udud,
        );
    }

    // ── no cruise, reduced jerk, three ramps ──
    for &jf in solve_polynomial(&coeff::s2_none(pd, v0, a0, vf, af, v_max, a_max, j, tf)).as_slice()
    {
        if !(jf > 0.0 && jf <= j * (1.0 + EPS_JERK)) {
            continue;
        }
        let m = (a0 - af + jf * tf) / 2.0;
        if m == 0.0 {
            continue;
        }
        let ahat = (2.0 * jf * (vf - v0) + 2.0 * m * m + a0 * a0 - af * af) / (4.0 * m);
        let alow = ahat - m;
        out.push(
            [
                (ahat - a0) / jf,
                0.0,
                (ahat - alow) / jf,
                0.0,
                0.0,
                0.0,
                (af - alow) / jf,
            ],
            jf,
            Limits::None,
            Teeth::Uddu,
        );
    }

    // ── no cruise, full jerk, four ramps ──
    let c = (j * tf + a0 + af) / 2.0;
    for &u in
        solve_polynomial(&coeff::s2_none_udud(pd, v0, a0, vf, af, v_max, a_max, j, tf)).as_slice()
    {
        let q = u * u - 4.0 * c * u + 2.0 * c * c + a0 * a0 + af * af + 2.0 * j * (vf - v0);
        let d = sqrt_clamped(q);
        for dd in [d, -d] {
            let am = u - c;
            let apk1 = (u + dd) / 2.0;
            let apk2 = (u - dd) / 2.0;
            out.push(
                [
                    (apk1 - a0) / j,
                    0.0,
                    (apk1 - am) / j,
                    0.0,
                    (apk2 - am) / j,
                    0.0,
                    (apk2 - af) / j,
                ],
                j,
                Limits::None,
                Teeth::Udud,
            );
            if d == 0.0 {
                break;
            }
        }
    }

    // ── last resort: cruise at a free velocity with both phases
    //    triangular; the residual is a quintic, solved on its bracket ──
    enumerate_plateau_tri_tri(f, tf, out);
}

/// Cruise at a free velocity with both acceleration phases triangular at
/// full jerk. The position residual does not reduce below quintic degree in
/// any usable unknown, so the roots come from a bracketed scan over the
/// phase-1 peak. Covers both teeth patterns.
fn enumerate_plateau_tri_tri(f: &Frame, tf: f64, out: &mut Candidates) {
    let Frame {
        pd,
        v0,
        a0,
        vf,
        af,
        v_max,
        j_max: j,
        ..
    } = *f;

    for teeth in [Teeth::Uddu, Teeth::Udud] {
        let build = |x: f64| -> [f64; 7] {
            let vp = v0 + (2.0 * x * x - a0 * a0) / (2.0 * j);
            let (t4, t6) = match teeth {
                Teeth::Uddu => {
                    let y = sqrt_clamped(j * (vp - vf) + af * af / 2.0);
                    (y / j, (y + af) / j)
                }
                Teeth::Udud => {
                    let y = sqrt_clamped(j * (vf - vp) + af * af / 2.0);
                    (y / j, (y - af) / j)
                }
            };
            let t0 = (x - a0) / j;
            let t2 = x / j;
            let t3 = tf - (t0 + t2 + t4 + t6);
            [t0, 0.0, t2, t3, t4, 0.0, t6]
        };
        let residual = |x: f64| {
            let ts = build(x);
            let sgn = match teeth {
                Teeth::Uddu => -1.0,
                Teeth::Udud => 1.0,
            };
            let (mut p, mut v, mut a) = (0.0, v0, a0);
            for (t, jj) in ts.iter().zip([j, 0.0, -j, 0.0, sgn * j, 0.0, -sgn * j]) {
                (p, v, a) = integrate(*t, p, v, a, jj);
            }
            p - pd
        };
        let x_lo = a0.max(0.0);
        let x_hi = sqrt_clamped(j * (v_max - v0) + a0 * a0 / 2.0).min(f.a_max);
        for &x in find_roots_bracketed(residual, x_lo, x_hi).as_slice() {
            out.push(build(x), j, Limits::None, teeth);
        }
    }
}

// ─── Search Driver ──────────────────────────────────────────────────

/// Duration-pinned profile search for one DoF.
pub(crate) struct Step2 {
    tf: f64,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    af: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
}

impl Step2 {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        tf: f64,
        p0: f64,
        v0: f64,
        a0: f64,
        pf: f64,
        vf: f64,
        af: f64,
        v_max: f64,
        a_max: f64,
        j_max: f64,
    ) -> Self {
        Self {
            tf,
            p0,
            v0,
            a0,
            pf,
            vf,
            af,
            v_max,
            a_max,
            j_max,
        }
    }

    /// First profile that finishes exactly at `tf`, or `None`.
    pub(crate) fn profile(&self) -> Option<Profile> {
        for direction in [Direction::Up, Direction::Down] {
            let frame = Frame::mirrored(
                direction, self.p0, self.v0, self.a0, self.pf, self.vf, self.af, self.v_max,
                self.a_max, self.j_max,
            );
            let mut cands = Candidates::new();
            enumerate_cases(&frame, self.tf, &mut cands);
            for cand in cands.as_slice() {
                let mut prof = Profile::default();
                prof.t = cand.t;
                clamp_durations(&mut prof.t);
                prof.set_start(self.p0, self.v0, self.a0);
                prof.direction = direction;
                prof.limits = cand.limits;
                let jf = direction.sign() * cand.jf;
                if prof.check_with_duration(
                    cand.teeth, self.tf, self.pf, self.vf, self.af, jf, self.v_max, self.a_max,
                    self.j_max,
                ) {
                    return Some(prof);
                }
            }
        }
        None
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step1::Step1;

    fn solve(tf: f64, p0: f64, v0: f64, a0: f64, pf: f64, vf: f64, af: f64) -> Option<Profile> {
        Step2::new(tf, p0, v0, a0, pf, vf, af, 1.0, 1.0, 1.0).profile()
    }

    #[test]
    fn stretched_rest_to_rest_reduces_jerk() {
        // minimum time is ~3.17 s; pinned to 5 s the symmetric shape scales
        // its jerk down to 32·pd/tf³ = 0.256
        let prof = solve(5.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0).unwrap();
        assert!((prof.duration() - 5.0).abs() < 1e-8);
        assert!((prof.j[0].abs() - 0.256).abs() < 1e-6, "{}", prof.j[0]);
        assert!((prof.p[7] - 1.0).abs() < 1e-8);
        assert!((prof.v[7]).abs() < 1e-8);
    }

    #[test]
    fn slightly_stretched_move_still_hits_duration() {
        let t_min = Step1::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0)
            .block()
            .unwrap()
            .t_min;
        for stretch in [1.01, 1.1, 1.5, 2.0, 4.0, 10.0] {
            let tf = t_min * stretch;
            let prof = solve(tf, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0)
                .unwrap_or_else(|| panic!("no profile at stretch {stretch}"));
            assert!((prof.duration() - tf).abs() < 1e-8);
            assert!((prof.p[7] - 1.0).abs() < 1e-8);
        }
    }

    #[test]
    fn nonzero_boundary_state_sweep() {
        let (p0, v0, a0) = (0.2, 0.4, -0.3);
        let (pf, vf, af) = (1.4, 0.2, 0.1);
        let t_min = Step1::new(p0, v0, a0, pf, vf, af, 1.0, 1.0, 1.0)
            .block()
            .unwrap()
            .t_min;
        for stretch in [1.05, 1.3, 2.0, 3.0, 6.0] {
            let tf = t_min * stretch;
            let prof = solve(tf, p0, v0, a0, pf, vf, af)
                .unwrap_or_else(|| panic!("no profile at stretch {stretch}"));
            assert!((prof.duration() - tf).abs() < 1e-8);
            assert!((prof.p[7] - pf).abs() < 1e-8);
            assert!((prof.v[7] - vf).abs() < 1e-8);
            assert!((prof.a[7] - af).abs() < 1e-8);
        }
    }

    #[test]
    fn respects_velocity_limit_when_stretched() {
        let prof = solve(20.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0).unwrap();
        assert!((prof.duration() - 20.0).abs() < 1e-8);
        for v in &prof.v[3..] {
            assert!(v.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn jerk_never_exceeds_limit() {
        for stretch in [1.2, 2.0, 5.0] {
            let prof = solve(3.1748 * stretch, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0).unwrap();
            for j in &prof.j {
                assert!(j.abs() <= 1.0 + 1e-9);
            }
        }
    }
}
