//! Per-DoF time-optimal profile search.
//!
//! Enumerates the profile shapes over both directions and both jerk sign
//! patterns, validates each candidate with [`Profile::check`], and folds the
//! surviving profiles into a [`Block`]: the minimum finish time plus up to
//! two blocked duration intervals.
//!
//! The down-direction shapes are obtained by mirroring the state (negating
//! positions, velocities, accelerations, and jerks) and solving the same
//! up-frame systems, so every case solver exists only once.

use crate::block::{Block, Interval};
use crate::coefficients as coeff;
use crate::math::{find_roots_bracketed, solve_polynomial, sqrt_clamped, EPS_STATE};
use crate::profile::{integrate, Direction, Limits, Profile, Teeth};

/// Upper bound on simultaneously valid profiles per DoF. The enumeration
/// yields at most a handful in practice; the buffer is sized generously and
/// overflow simply drops the extra candidate.
const MAX_VALID: usize = 16;

/// One unvalidated shape candidate in the solver's up-frame.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    t: [f64; 7],
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
                limits: Limits::None,
                teeth: Teeth::Uddu,
            }; MAX_CANDIDATES],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, t: [f64; 7], limits: Limits, teeth: Teeth) {
        if self.len < MAX_CANDIDATES {
            self.buf[self.len] = Candidate { t, limits, teeth };
            self.len += 1;
        }
    }

    fn as_slice(&self) -> &[Candidate] {
        &self.buf[..self.len]
    }
}

/// Planning frame: the state and target mirrored into the solver's
/// canonical (up) direction, relative to the start position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub pd: f64,
    pub v0: f64,
    pub a0: f64,
    pub vf: f64,
    pub af: f64,
    pub v_max: f64,
    pub a_max: f64,
    pub j_max: f64,
}

impl Frame {
    pub(crate) fn mirrored(
        direction: Direction,
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
        let s = direction.sign();
        Self {
            pd: s * (pf - p0),
            v0: s * v0,
            a0: s * a0,
            vf: s * vf,
            af: s * af,
            v_max,
            a_max,
            j_max,
        }
    }

    fn coeff_args(&self) -> (f64, f64, f64, f64, f64, f64, f64, f64) {
        (
            self.pd, self.v0, self.a0, self.vf, self.af, self.v_max, self.a_max, self.j_max,
        )
    }
}

/// Clamp closed-form roots that land a hair below an exactly-empty segment.
pub(crate) fn clamp_durations(t: &mut [f64; 7]) {
    for ti in t.iter_mut() {
        if -EPS_STATE < *ti && *ti < 0.0 {
            *ti = 0.0;
        }
    }
}

// ─── Case Enumeration (up-frame) ────────────────────────────────────

/// Compute the cruise duration of a velocity-limited shape from the
/// distance the six ramp segments leave uncovered.
fn cruise_from_distance(ts: [f64; 6], f: &Frame) -> [f64; 7] {
    let j = f.j_max;
    let (mut p, mut v, mut a) = (0.0, f.v0, f.a0);
    for (t, jj) in ts[..3].iter().zip([j, 0.0, -j]) {
        (p, v, a) = integrate(*t, p, v, a, jj);
    }
    for (t, jj) in ts[3..].iter().zip([-j, 0.0, j]) {
        (p, v, a) = integrate(*t, p, v, a, jj);
    }
    let t3 = (f.pd - p) / f.v_max;
    [ts[0], ts[1], ts[2], t3, ts[3], ts[4], ts[5]]
}

fn enumerate_cases(f: &Frame, out: &mut Candidates) {
    let (pd, v0, a0, vf, af, v_max, a_max, j) = f.coeff_args();

    // saturated-phase building blocks
    let t0s = (a_max - a0) / j;
    let t1s = (v_max - v0) / a_max + (a0 * a0 / 2.0 - a_max * a_max) / (a_max * j);
    let t2s = a_max / j;
    let t4s = a_max / j;
    let t5s = (v_max - vf) / a_max + (af * af / 2.0 - a_max * a_max) / (a_max * j);
    let t6s = (a_max + af) / j;
    // triangular peaks that touch the velocity limit
    let ah = sqrt_clamped(j * (v_max - v0) + a0 * a0 / 2.0);
    let ad = sqrt_clamped(j * (v_max - vf) + af * af / 2.0);

    out.push(
        cruise_from_distance([t0s, t1s, t2s, t4s, t5s, t6s], f),
        Limits::Acc0Acc1Vel,
        Teeth::Uddu,
    );
    out.push(
        cruise_from_distance([(ah - a0) / j, 0.0, ah / j, t4s, t5s, t6s], f),
        Limits::Acc1Vel,
        Teeth::Uddu,
    );
    out.push(
        cruise_from_distance([t0s, t1s, t2s, ad / j, 0.0, (ad + af) / j], f),
        Limits::Acc0Vel,
        Teeth::Uddu,
    );
    out.push(
        cruise_from_distance([(ah - a0) / j, 0.0, ah / j, ad / j, 0.0, (ad + af) / j], f),
        Limits::Vel,
        Teeth::Uddu,
    );

    let h1 = v0 + (2.0 * a_max * a_max - a0 * a0) / (2.0 * j);
    let h2 = vf + (2.0 * a_max * a_max - af * af) / (2.0 * j);

    for &x in
        solve_polynomial(&coeff::s1_acc0_acc1(pd, v0, a0, vf, af, v_max, a_max, j, 0.0)).as_slice()
    {
        out.push(
            [t0s, x, t2s, 0.0, t4s, x + (h1 - h2) / a_max, t6s],
            Limits::Acc0Acc1,
            Teeth::Uddu,
        );
    }

    for &x in solve_polynomial(&coeff::s1_acc1(pd, v0, a0, vf, af, v_max, a_max, j, 0.0)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let vp = v0 + (2.0 * x * x - a0 * a0) / (2.0 * j);
        out.push(
            [(x - a0) / j, 0.0, x / j, 0.0, t4s, (vp - h2) / a_max, t6s],
            Limits::Acc1,
            Teeth::Uddu,
        );
    }

    for &x in solve_polynomial(&coeff::s1_acc0(pd, v0, a0, vf, af, v_max, a_max, j, 0.0)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let vp = vf + (2.0 * x * x - af * af) / (2.0 * j);
        out.push(
            [t0s, (vp - h1) / a_max, t2s, 0.0, x / j, 0.0, (x + af) / j],
            Limits::Acc0,
            Teeth::Uddu,
        );
    }

    let g = j * (v0 - vf) + (af * af - a0 * a0) / 2.0;
    for &x in solve_polynomial(&coeff::s1_none(pd, v0, a0, vf, af, v_max, a_max, j, 0.0)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let y = sqrt_clamped(x * x + g);
        out.push(
            [(x - a0) / j, 0.0, x / j, 0.0, y / j, 0.0, (y + af) / j],
            Limits::None,
            Teeth::Uddu,
        );
    }

    // ── UDUD siblings: the second phase climbs onto the target ──
    let h2u = vf - (2.0 * a_max * a_max - af * af) / (2.0 * j);
    let t6u = (a_max - af) / j;

    for &x in
        solve_polynomial(&coeff::s1_acc0_acc1_udud(pd, v0, a0, vf, af, v_max, a_max, j, 0.0))
            .as_slice()
    {
        out.push(
            [t0s, x, t2s, 0.0, t4s, -x - (h1 - h2u) / a_max, t6u],
            Limits::Acc0Acc1,
            Teeth::Udud,
        );
    }

    for &x in
        solve_polynomial(&coeff::s1_acc1_udud(pd, v0, a0, vf, af, v_max, a_max, j, 0.0)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let vp = v0 + (2.0 * x * x - a0 * a0) / (2.0 * j);
        out.push(
            [(x - a0) / j, 0.0, x / j, 0.0, t4s, (h2u - vp) / a_max, t6u],
            Limits::Acc1,
            Teeth::Udud,
        );
    }

    for &x in
        solve_polynomial(&coeff::s1_acc0_udud(pd, v0, a0, vf, af, v_max, a_max, j, 0.0)).as_slice()
    {
        if x < 0.0 {
            continue;
        }
        let vp = vf - (2.0 * x * x - af * af) / (2.0 * j);
        out.push(
            [t0s, (vp - h1) / a_max, t2s, 0.0, x / j, 0.0, (x - af) / j],
            Limits::Acc0,
            Teeth::Udud,
        );
    }

    // the UDUD shape with no saturated limit rationalizes above quartic
    // degree; solve the position residual directly on its feasible bracket
    let gu = j * (vf - v0) + (af * af + a0 * a0) / 2.0;
    if gu > 0.0 {
        let residual = |x: f64| {
            let y = sqrt_clamped(gu - x * x);
            let ts = [(x - a0) / j, 0.0, x / j, 0.0, y / j, 0.0, (y - af) / j];
            let (mut p, mut v, mut a) = (0.0, v0, a0);
            for (t, jj) in ts.iter().zip([j, 0.0, -j, 0.0, j, 0.0, -j]) {
                (p, v, a) = integrate(*t, p, v, a, jj);
            }
            p - pd
        };
        for &x in find_roots_bracketed(residual, a0.max(0.0), gu.sqrt()).as_slice() {
            let y = sqrt_clamped(gu - x * x);
            out.push(
                [(x - a0) / j, 0.0, x / j, 0.0, y / j, 0.0, (y - af) / j],
                Limits::None,
                Teeth::Udud,
            );
        }
    }
}

/// Degenerate cruise shapes, tried only when the main catalogue comes up
/// empty. They are boundary members of an under-determined family (cruise
/// pinned at a projected velocity), valid but not exactly time-optimal, so
/// they never participate in blocked-interval construction.
fn enumerate_fallback_cases(f: &Frame, out: &mut Candidates) {
    let (pd, v0, a0, vf, af, _v_max, _a_max, j) = f.coeff_args();

    // A negative initial acceleration forces the velocity down onto its
    // zero-acceleration projection; cruise there before heading out.
    if a0 < 0.0 {
        let vp = v0 - a0 * a0 / (2.0 * j);
        if vp != 0.0 {
            let t0 = -a0 / j;
            let (teeth, tail) = if vf <= vp {
                let y = sqrt_clamped(j * (vp - vf) + af * af / 2.0);
                (Teeth::Uddu, [y / j, 0.0, (y + af) / j])
            } else {
                let y = sqrt_clamped(j * (vf - vp) + af * af / 2.0);
                (Teeth::Udud, [y / j, 0.0, (y - af) / j])
            };
            let sgn = match teeth {
                Teeth::Uddu => -1.0,
                Teeth::Udud => 1.0,
            };
            let (mut p, mut v, mut a) = integrate(t0, 0.0, v0, a0, j);
            for (t, jj) in tail.iter().zip([sgn * j, 0.0, -sgn * j]) {
                (p, v, a) = integrate(*t, p, v, a, jj);
            }
            let t3 = (pd - p) / vp;
            out.push(
                [t0, 0.0, 0.0, t3, tail[0], tail[1], tail[2]],
                Limits::None,
                teeth,
            );
        }
    }

    // Likewise a nonzero target acceleration pins the arrival ramp; cruise
    // at the velocity from which that single ramp lands on the target.
    if af != 0.0 {
        let (vp, teeth, tail) = if af > 0.0 {
            (vf - af * af / (2.0 * j), Teeth::Uddu, [0.0, 0.0, af / j])
        } else {
            (vf + af * af / (2.0 * j), Teeth::Udud, [0.0, 0.0, -af / j])
        };
        if vp != 0.0 {
            let ah = sqrt_clamped(j * (vp - v0) + a0 * a0 / 2.0);
            let head = [(ah - a0) / j, 0.0, ah / j];
            let (mut p, mut v, mut a) = (0.0, v0, a0);
            for (t, jj) in head.iter().zip([j, 0.0, -j]) {
                (p, v, a) = integrate(*t, p, v, a, jj);
            }
            let sgn = match teeth {
                Teeth::Uddu => -1.0,
                Teeth::Udud => 1.0,
            };
            for (t, jj) in tail.iter().zip([sgn * j, 0.0, -sgn * j]) {
                (p, v, a) = integrate(*t, p, v, a, jj);
            }
            let t3 = (pd - p) / vp;
            out.push(
                [head[0], head[1], head[2], t3, tail[0], tail[1], tail[2]],
                Limits::None,
                teeth,
            );
        }
    }
}

// ─── Search Driver ──────────────────────────────────────────────────

/// Time-optimal search over all shape candidates for one DoF.
pub(crate) struct Step1 {
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

impl Step1 {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
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

    /// Run the enumeration and fold the valid profiles into a [`Block`].
    /// Returns `None` when no shape validates.
    pub(crate) fn block(&self) -> Option<Block> {
        let mut valid = [Profile::default(); MAX_VALID];
        let mut n_valid = self.collect(enumerate_cases, &mut valid);
        if n_valid == 0 {
            n_valid = self.collect(enumerate_fallback_cases, &mut valid);
            // a fallback profile is feasibility-only: publish its duration
            // as the minimum and claim nothing about blocked intervals
            let first = *valid[..n_valid]
                .iter()
                .min_by(|p, q| p.duration().total_cmp(&q.duration()))?;
            return Some(Block::new(first.duration(), first));
        }

        let valid = &mut valid[..n_valid];
        valid.sort_unstable_by(|p, q| p.duration().total_cmp(&q.duration()));

        let mut block = Block::new(valid[0].duration(), valid[0]);
        if valid.len() >= 3 {
            block.a = Some(Interval {
                left: valid[1].duration(),
                right: valid[2].duration(),
            });
            block.p_a = Some(valid[2]);
        }
        if valid.len() >= 5 {
            block.b = Some(Interval {
                left: valid[3].duration(),
                right: valid[4].duration(),
            });
            block.p_b = Some(valid[4]);
        }
        Some(block)
    }

    fn collect(
        &self,
        enumerate: fn(&Frame, &mut Candidates),
        valid: &mut [Profile; MAX_VALID],
    ) -> usize {
        let mut n = 0;
        for direction in [Direction::Up, Direction::Down] {
            let frame = Frame::mirrored(
                direction, self.p0, self.v0, self.a0, self.pf, self.vf, self.af, self.v_max,
                self.a_max, self.j_max,
            );
            let mut cands = Candidates::new();
            enumerate(&frame, &mut cands);
            for cand in cands.as_slice() {
                let mut prof = Profile::default();
                prof.t = cand.t;
                clamp_durations(&mut prof.t);
                prof.set_start(self.p0, self.v0, self.a0);
                prof.direction = direction;
                prof.limits = cand.limits;
                let jf = direction.sign() * self.j_max;
                if !prof.check(
                    cand.teeth, self.pf, self.vf, self.af, jf, self.v_max, self.a_max,
                ) {
                    continue;
                }
                let dur = prof.duration();
                let duplicate = valid[..n]
                    .iter()
                    .any(|q| (q.duration() - dur).abs() <= 8.0 * EPS_STATE);
                if !duplicate && n < MAX_VALID {
                    valid[n] = prof;
                    n += 1;
                }
            }
        }
        n
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
