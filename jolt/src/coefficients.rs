//! Closed-form polynomial coefficients for the profile case solvers.
//!
//! Each function returns the numerator of its case's position residual as a
//! polynomial in the case's free unknown, coefficients highest-first; the
//! real roots are the candidate solutions. The expressions are mechanical
//! algebra produced by symbolic expansion of the seven-segment boundary
//! equations; edit the derivation, not these bodies.
#![allow(clippy::too_many_arguments)]

pub(crate) fn s1_acc0_acc1(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 3] {
    let _ = v_max;
    let _ = tf;
    let h0 = a_max.powi(2);
    let h1 = j_max.powi(2);
    let h2 = 24.0*h1;
    let h3 = j_max*v0;
    let h4 = a0.powi(2);
    let h5 = 24.0*a_max;
    let h6 = h5*j_max;
    let h7 = 8.0*a_max;
    let h8 = 12.0*j_max*vf;
    let h9 = af.powi(2);
    let h10 = 12.0*h1;
    [
        h0*h2,
        h6*(3.0*h0 + 2.0*h3 - h4),
        3.0*a0.powi(4) + a0.powi(3)*h7 - a0*h3*h5 + 48.0*a_max.powi(4) - a_max*h2*pd - 3.0*af.powi(4) - af.powi(3)*h7 + af*h6*vf + 84.0*h0*h3 - 42.0*h0*h4 + h0*h8 - 6.0*h0*h9 + h10*v0.powi(2) - h10*vf.powi(2) - 12.0*h3*h4 + h8*h9,
    ]
}

pub(crate) fn s1_acc1(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let _ = tf;
    let h0 = 24.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = j_max*v0;
    let h3 = a0.powi(2);
    let h4 = 2.0*h2 - h3;
    let h5 = j_max.powi(2);
    let h6 = af.powi(2);
    let h7 = 6.0*h1;
    [
        12.0,
        h0,
        12.0*h1 + 12.0*h4,
        h0*h4,
        3.0*a0.powi(4) + 8.0*a0.powi(3)*a_max - a0*h0*h2 - 8.0*a_max*af.powi(3) + 24.0*a_max*af*j_max*vf - 3.0*af.powi(4) - h0*h5*pd + 12.0*h1*j_max*v0 + 12.0*h1*j_max*vf - 12.0*h2*h3 - h3*h7 + 12.0*h5*v0.powi(2) - 12.0*h5*vf.powi(2) - h6*h7 + 12.0*h6*j_max*vf,
    ]
}

pub(crate) fn s1_acc0(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let _ = tf;
    let h0 = 24.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = j_max*vf;
    let h3 = af.powi(2);
    let h4 = 2.0*h2 - h3;
    let h5 = j_max.powi(2);
    let h6 = a0.powi(2);
    let h7 = 6.0*h1;
    [
        12.0,
        h0,
        12.0*h1 + 12.0*h4,
        h0*h4,
        -3.0*a0.powi(4) + 8.0*a0.powi(3)*a_max - a0*h0*j_max*v0 - 8.0*a_max*af.powi(3) + 24.0*a_max*af*j_max*vf + 3.0*af.powi(4) - h0*h5*pd + 12.0*h1*j_max*v0 + 12.0*h1*j_max*vf - 12.0*h2*h3 - h3*h7 - 12.0*h5*v0.powi(2) + 12.0*h5*vf.powi(2) - h6*h7 + 12.0*h6*j_max*v0,
    ]
}

pub(crate) fn s1_none(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let _ = a_max;
    let _ = tf;
    let h0 = af.powi(2);
    let h1 = 2.0*j_max;
    let h2 = h1*v0;
    let h3 = a0.powi(2);
    let h4 = af.powi(3);
    let h5 = a0.powi(3);
    let h6 = 3.0*j_max;
    let h7 = a0*v0;
    let h8 = j_max.powi(2);
    let h9 = h8*pd;
    let h10 = a0.powi(4);
    let h11 = af.powi(4);
    let h12 = 4.0*j_max;
    let h13 = h12*v0;
    let h14 = h12*vf;
    let h15 = h8*vf;
    let h16 = h15*v0;
    let h17 = v0.powi(2);
    let h18 = 4.0*h8;
    let h19 = vf.powi(2);
    let h20 = h0*h3;
    let h21 = j_max.powi(3);
    let h22 = h21*pd;
    let h23 = h6*vf;
    let h24 = h17*h8;
    let h25 = j_max*v0;
    let h26 = j_max*vf;
    let h27 = 36.0*h21;
    let h28 = 72.0*h22;
    let h29 = 24.0*h9;
    let h30 = 18.0*h20;
    let h31 = 36.0*h16;
    let h32 = 18.0*h19*h8;
    [
        18.0*h0 - 18.0*h1*vf + 18.0*h2 - 18.0*h3,
        72.0*af*j_max*vf - 24.0*h4 + 24.0*h5 - 24.0*h6*h7 - 72.0*h9,
        9.0*h0*h13 - 9.0*h0*h14 + 9.0*h10 + 9.0*h11 - 9.0*h13*h3 + 9.0*h14*h3 - 72.0*h16 + 9.0*h17*h18 + 9.0*h18*h19 - 18.0*h20,
        -24.0*a0.powi(5) - 144.0*a0*h24 - 24.0*af*h23*h3 + 144.0*af*h8*v0*vf - 24.0*h2*h4 - 144.0*h22*v0 + 24.0*h3*h4 + 72.0*h3*h8*pd + 120.0*h5*j_max*v0,
        (17_f64/2.0)*a0.powi(6) - 1_f64/2.0*af.powi(6) - 72.0*af*h15*h7 + 24.0*af*h26*h5 - af*h28*vf + (9_f64/2.0)*h0*h10 + 18.0*h0*h24 - h0*h31 - h0*h32 - 51.0*h10*h25 - 9.0*h10*h26 + h11*h23 + 9.0*h11*h25 - 9_f64/2.0*h11*h3 - h17*h27*vf + h19*h27*v0 + 90.0*h24*h3 - h25*h30 + h26*h30 - h27*v0.powi(3) + h27*vf.powi(3) + h28*h7 + h29*h4 - h29*h5 + h3*h31 - h3*h32 - 8.0*h4*h5 + 24.0*h4*h7*j_max + 36.0*j_max.powi(4)*pd.powi(2),
    ]
}

pub(crate) fn s1_acc0_acc1_udud(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 2] {
    let _ = v_max;
    let _ = tf;
    let h0 = 24.0*j_max;
    let h1 = 8.0*a_max;
    let h2 = a_max*h0;
    let h3 = j_max.powi(2);
    let h4 = a_max.powi(2);
    let h5 = 12.0*j_max;
    let h6 = h5*vf;
    let h7 = a0.powi(2);
    let h8 = af.powi(2);
    let h9 = 12.0*h3;
    [
        a_max.powi(3)*h0,
        -3.0*a0.powi(4) + a0.powi(3)*h1 - a0*h2*v0 + 24.0*a_max.powi(4) - 24.0*a_max*h3*pd + 3.0*af.powi(4) - af.powi(3)*h1 - af*h2*vf + h4*h6 - 18.0*h4*h7 + 6.0*h4*h8 + 36.0*h4*j_max*v0 + h5*h7*v0 + h6*h8 - h9*v0.powi(2) + h9*vf.powi(2),
    ]
}

pub(crate) fn s1_acc1_udud(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let _ = tf;
    let h0 = 24.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = a0.powi(2);
    let h3 = j_max*v0;
    let h4 = 2.0*h3;
    let h5 = 8.0*a_max;
    let h6 = j_max*vf;
    let h7 = j_max.powi(2);
    let h8 = 12.0*h3;
    let h9 = 12.0*h6;
    let h10 = af.powi(2);
    let h11 = 6.0*h1;
    let h12 = 12.0*h7;
    [
        -12.0,
        h0,
        12.0*h1 + 12.0*h2 - 12.0*h4,
        h0*(-h2 + h4),
        -3.0*a0.powi(4) + a0.powi(3)*h5 - a0*h0*h3 + 3.0*af.powi(4) - af.powi(3)*h5 - af*h0*h6 - h0*h7*pd + h1*h8 + h1*h9 + h10*h11 + h10*h9 - h11*h2 - h12*v0.powi(2) + h12*vf.powi(2) + h2*h8,
    ]
}

pub(crate) fn s1_acc0_udud(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let _ = tf;
    let h0 = 24.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = af.powi(2);
    let h3 = j_max*vf;
    let h4 = h2 + 2.0*h3;
    let h5 = 8.0*a_max;
    let h6 = j_max*v0;
    let h7 = j_max.powi(2);
    let h8 = 12.0*h1;
    let h9 = a0.powi(2);
    let h10 = 6.0*h1;
    let h11 = 12.0*h7;
    [
        12.0,
        -h0,
        -12.0*h1 - 12.0*h4,
        h0*h4,
        -3.0*a0.powi(4) + a0.powi(3)*h5 - a0*h0*h6 + 3.0*af.powi(4) - af.powi(3)*h5 - af*h0*h3 - h0*h7*pd + h10*h2 - h10*h9 - h11*v0.powi(2) + h11*vf.powi(2) + 12.0*h2*h3 + h3*h8 + h6*h8 + 12.0*h6*h9,
    ]
}

pub(crate) fn s2_acc0_acc1_vel(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 3] {
    let _ = j_max;
    let h0 = 2.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = a0.powi(2);
    let h3 = af.powi(2);
    let h4 = h0*v_max;
    let h5 = 6.0*h1;
    [
        24.0*a_max*tf*v_max - 12.0*h0*pd - 12.0*v0.powi(2) + 24.0*v0*v_max - 24.0*v_max.powi(2) + 24.0*v_max*vf - 12.0*vf.powi(2),
        -12.0*a0*h0*v0 + 12.0*a0*h4 + 12.0*af*h0*vf - 12.0*af*h4 + 12.0*h1*v0 - 24.0*h1*v_max + 12.0*h1*vf + 12.0*h2*v0 - 12.0*h2*v_max - 12.0*h3*v_max + 12.0*h3*vf,
        -3.0*a0.powi(4) + 8.0*a0.powi(3)*a_max - 8.0*a_max*af.powi(3) - 3.0*af.powi(4) - h2*h5 - h3*h5,
    ]
}

pub(crate) fn s2_acc0_acc1(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 3] {
    let _ = v_max;
    let h0 = a_max.powi(2);
    let h1 = j_max.powi(2);
    let h2 = 24.0*h1;
    let h3 = af.powi(2);
    let h4 = a0.powi(2);
    let h5 = 12.0*j_max;
    let h6 = a_max.powi(3);
    let h7 = j_max*v0;
    let h8 = 12.0*h1;
    [
        -h0*h2,
        a_max*h5*(2.0*a0*a_max - 2.0*a_max*af + 2.0*a_max*j_max*tf - 6.0*h0 - h3 + h4 - 2.0*j_max*v0 + 2.0*j_max*vf),
        -3.0*a0.powi(4) - 4.0*a0.powi(3)*a_max + 24.0*a0*h6 - 48.0*a_max.powi(4) - 8.0*a_max*af.powi(3) + 12.0*a_max*af*h4 - 24.0*a_max*af*h7 + 24.0*a_max*af*j_max*vf + 24.0*a_max*h1*tf*v0 - a_max*h2*pd - 12.0*a_max*h4*j_max*tf - 3.0*af.powi(4) - 24.0*af*h6 - 18.0*h0*h3 + 18.0*h0*h4 - 36.0*h0*h7 + 36.0*h0*j_max*vf + 24.0*h1*v0*vf + 6.0*h3*h4 - h3*h5*v0 + 12.0*h3*j_max*vf - h4*h5*vf + 12.0*h4*j_max*v0 + 24.0*h6*j_max*tf - h8*v0.powi(2) - h8*vf.powi(2),
    ]
}

pub(crate) fn s2_acc0_acc1_udud(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 2] {
    let _ = v_max;
    let h0 = a0.powi(2);
    let h1 = af.powi(2);
    let h2 = a_max.powi(2);
    let h3 = 12.0*a_max;
    let h4 = a_max.powi(3);
    let h5 = j_max.powi(2);
    let h6 = 24.0*h5;
    let h7 = 12.0*j_max;
    let h8 = h7*v0;
    let h9 = 6.0*h2;
    [
        h3*j_max*(2.0*a0*a_max + 2.0*a_max*af + 2.0*a_max*j_max*tf - h0 - h1 - 2.0*h2 + 2.0*j_max*v0 - 2.0*j_max*vf),
        3.0*a0.powi(4) - 4.0*a0.powi(3)*a_max + 24.0*a0*h4 - 24.0*a_max.powi(4) - 8.0*a_max*af.powi(3) + 24.0*a_max*af*j_max*v0 - 24.0*a_max*af*j_max*vf - a_max*h0*h7*tf + 24.0*a_max*h5*tf*v0 - a_max*h6*pd + 3.0*af.powi(4) - af*h0*h3 + 24.0*af*h4 + 6.0*h0*h1 - h0*h8 - h0*h9 + 12.0*h0*j_max*vf - h1*h8 - h1*h9 + 12.0*h1*j_max*vf - h2*h7*vf + 12.0*h2*j_max*v0 + 24.0*h4*j_max*tf + 12.0*h5*v0.powi(2) + 12.0*h5*vf.powi(2) - h6*v0*vf,
    ]
}

pub(crate) fn s2_acc1(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let h0 = 24.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = af.powi(2);
    let h3 = a0.powi(2);
    let h4 = j_max.powi(2);
    let h5 = 12.0*j_max;
    let h6 = h5*v0;
    let h7 = 12.0*h4;
    [
        -12.0,
        -h0,
        24.0*a0*a_max - 24.0*a_max*af + 24.0*a_max*j_max*tf - 12.0*h1 - 12.0*h2 + 12.0*h3 - 24.0*j_max*v0 + 24.0*j_max*vf,
        0.0,
        -3.0*a0.powi(4) - 4.0*a0.powi(3)*a_max - 8.0*a_max*af.powi(3) + 12.0*a_max*af*h3 + 24.0*a_max*af*j_max*vf - 12.0*a_max*h3*j_max*tf + 24.0*a_max*h4*tf*v0 - 3.0*af.powi(4) - af*h0*j_max*v0 - h0*h4*pd - 6.0*h1*h2 + 6.0*h1*h3 - h1*h6 + 12.0*h1*j_max*vf + 6.0*h2*h3 - h2*h6 + 12.0*h2*j_max*vf - h3*h5*vf + 12.0*h3*j_max*v0 + 24.0*h4*v0*vf - h7*v0.powi(2) - h7*vf.powi(2),
    ]
}

pub(crate) fn s2_acc1_udud(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let h0 = 24.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = a0.powi(2);
    let h3 = af.powi(2);
    let h4 = j_max*v0;
    let h5 = af*h0;
    let h6 = j_max*vf;
    let h7 = j_max.powi(2);
    let h8 = h0*h7;
    let h9 = 12.0*h2;
    let h10 = 12.0*h4;
    let h11 = 12.0*h6;
    let h12 = 6.0*h1;
    let h13 = 12.0*h7;
    [
        12.0,
        -h0,
        24.0*a0*a_max + 24.0*a_max*af + 24.0*a_max*j_max*tf - 12.0*h1 - 12.0*h2 - 12.0*h3 + 24.0*j_max*v0 - 24.0*j_max*vf,
        0.0,
        3.0*a0.powi(4) - 4.0*a0.powi(3)*a_max - 8.0*a_max*af.powi(3) - a_max*af*h9 - a_max*h9*j_max*tf + 3.0*af.powi(4) - h1*h10 + h1*h11 - h10*h3 + h11*h3 + h12*h2 + h12*h3 + h13*v0.powi(2) + h13*vf.powi(2) + 6.0*h2*h3 + h4*h5 - h4*h9 - h5*h6 + h6*h9 - 24.0*h7*v0*vf - h8*pd + h8*tf*v0,
    ]
}

pub(crate) fn s2_acc0(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let h0 = 24.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = a0.powi(2);
    let h3 = af.powi(2);
    let h4 = j_max*v0;
    let h5 = j_max.powi(2);
    let h6 = 12.0*h3;
    let h7 = a_max*h6;
    let h8 = j_max*vf;
    let h9 = 12.0*h5;
    [
        -12.0,
        -h0,
        24.0*a0*a_max - 24.0*a_max*af + 24.0*a_max*j_max*tf - 12.0*h1 - 12.0*h2 + 12.0*h3 + 24.0*j_max*v0 - 24.0*j_max*vf,
        0.0,
        -3.0*a0.powi(4) + 8.0*a0.powi(3)*a_max + 24.0*a0*a_max*j_max*vf - a0*h0*h4 - a0*h7 + 4.0*a_max*af.powi(3) + 24.0*a_max*h5*tf*vf - 3.0*af.powi(4) - h0*h5*pd - 6.0*h1*h2 + 6.0*h1*h3 - 12.0*h1*h8 + 12.0*h1*j_max*v0 + 6.0*h2*h3 - 12.0*h2*h8 + 12.0*h2*j_max*v0 + 12.0*h3*j_max*vf - h4*h6 + 24.0*h5*v0*vf - h7*j_max*tf - h9*v0.powi(2) - h9*vf.powi(2),
    ]
}

pub(crate) fn s2_acc0_udud(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let h0 = 24.0*a_max;
    let h1 = a_max.powi(2);
    let h2 = a0.powi(2);
    let h3 = af.powi(2);
    let h4 = 2.0*a_max;
    let h5 = 2.0*j_max;
    let h6 = j_max.powi(2);
    let h7 = 12.0*j_max*vf;
    let h8 = 6.0*h1;
    let h9 = 12.0*h6;
    [
        -12.0,
        h0,
        -12.0*a0*h4 - 12.0*af*h4 + 12.0*h1 + 12.0*h2 + 12.0*h3 - 12.0*h4*j_max*tf - 12.0*h5*v0 + 12.0*h5*vf,
        0.0,
        -3.0*a0.powi(4) + 8.0*a0.powi(3)*a_max + 12.0*a0*a_max*h3 + 24.0*a0*a_max*j_max*vf - a0*h0*j_max*v0 + 4.0*a_max*af.powi(3) + 12.0*a_max*h3*j_max*tf + 24.0*a_max*h6*tf*vf - 3.0*af.powi(4) - h0*h6*pd - h1*h7 + 12.0*h1*j_max*v0 - 6.0*h2*h3 - h2*h7 - h2*h8 + 12.0*h2*j_max*v0 - h3*h7 - h3*h8 + 12.0*h3*j_max*v0 + 24.0*h6*v0*vf - h9*v0.powi(2) - h9*vf.powi(2),
    ]
}

pub(crate) fn s2_none(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 5] {
    let _ = v_max;
    let _ = a_max;
    let _ = j_max;
    let h0 = 4.0*tf;
    let h1 = tf.powi(2);
    let h2 = a0*h1;
    let h3 = a0.powi(2);
    let h4 = af.powi(2);
    let h5 = a0.powi(3);
    let h6 = af.powi(3);
    [
        3.0*tf.powi(4),
        12.0*tf*(-af*h1 + h0*v0 + h0*vf + h2 - 8.0*pd),
        -96.0*a0*pd + 96.0*a0*tf*vf - 36.0*af*h2 + 96.0*af*pd - 96.0*af*tf*v0 - 6.0*h1*h3 - 6.0*h1*h4 - 48.0*v0.powi(2) + 96.0*v0*vf - 48.0*vf.powi(2),
        h0*(-3.0*a0*h4 + 3.0*af*h3 - h5 + h6),
        -a0.powi(4) + 4.0*a0*h6 - af.powi(4) + 4.0*af*h5 - 6.0*h3*h4,
    ]
}

pub(crate) fn s2_none_udud(pd: f64, v0: f64, a0: f64, vf: f64, af: f64, v_max: f64, a_max: f64, j_max: f64, tf: f64) -> [f64; 3] {
    let _ = v_max;
    let _ = a_max;
    let h0 = a0.powi(4);
    let h1 = af.powi(4);
    let h2 = j_max*v0;
    let h3 = a0*af;
    let h4 = af.powi(3);
    let h5 = a0.powi(3);
    let h6 = j_max.powi(2);
    let h7 = v0.powi(2);
    let h8 = h6*h7;
    let h9 = vf.powi(2);
    let h10 = h6*h9;
    let h11 = a0.powi(2);
    let h12 = j_max*vf;
    let h13 = (1_f64/2.0)*h12;
    let h14 = af.powi(2);
    let h15 = tf*v0;
    let h16 = a0*h6;
    let h17 = h15*h16;
    let h18 = h15*h6;
    let h19 = af*h18;
    let h20 = j_max.powi(4);
    let h21 = tf.powi(4);
    let h22 = h20*h21;
    let h23 = h11*h14;
    let h24 = (1_f64/4.0)*a0;
    let h25 = j_max*tf;
    let h26 = h14*h25;
    let h27 = (1_f64/4.0)*af;
    let h28 = h11*h25;
    let h29 = tf.powi(2);
    let h30 = j_max.powi(3);
    let h31 = h30*v0;
    let h32 = tf.powi(3);
    let h33 = h30*h32;
    let h34 = h29*h6;
    let h35 = (1_f64/8.0)*h34;
    let h36 = a0.powi(5);
    let h37 = af.powi(5);
    let h38 = (3_f64/8.0)*h1;
    let h39 = (3_f64/8.0)*h0;
    let h40 = h2*h5;
    let h41 = h2*h4;
    let h42 = a0*h14;
    let h43 = af*h11;
    let h44 = j_max.powi(5);
    let h45 = h44*tf.powi(5);
    let h46 = (1_f64/4.0)*h4;
    let h47 = (1_f64/4.0)*h5;
    let h48 = h20*h32;
    let h49 = h48*v0;
    let h50 = (1_f64/2.0)*h25;
    let h51 = a0*h4;
    let h52 = af*h5;
    let h53 = h6*vf;
    let h54 = 4.0*h53*v0;
    let h55 = h30*vf;
    let h56 = 2.0*a0;
    let h57 = 2.0*af;
    let h58 = h30*tf;
    let h59 = 2.0*h58;
    let h60 = (5_f64/8.0)*h22;
    let h61 = 6.0*h3;
    let h62 = h53*tf;
    let h63 = 3.0*h29;
    let h64 = a0*h55;
    let h65 = af*h63;
    let h66 = (3_f64/4.0)*h33;
    let h67 = (9_f64/4.0)*h34;
    let h68 = (39_f64/8.0)*h12;
    let h69 = 18.0*h30;
    let h70 = 36.0*pd;
    let h71 = 36.0*h20*pd;
    let h72 = (27_f64/16.0)*h45;
    let h73 = h15*h69*vf;
    let h74 = 9.0*h3;
    let h75 = h14*pd;
    let h76 = 9.0*h58;
    let h77 = (9_f64/2.0)*h49;
    let h78 = (27_f64/2.0)*h11;
    let h79 = (27_f64/2.0)*h14;
    let h80 = (27_f64/8.0)*h33;
    let h81 = (117_f64/32.0)*h22;
    let h82 = h29*h31;
    let h83 = (81_f64/8.0)*h34;
    let h84 = (117_f64/8.0)*h33;
    [
        9.0*a0*af*j_max*vf + (9_f64/4.0)*a0*h4 + 9.0*a0*h6*tf*vf + (9_f64/4.0)*af*h5 + 9.0*af*h6*tf*vf - 9_f64/16.0*h0 - 9_f64/16.0*h1 - 9.0*h10 - 9.0*h11*h13 - 9.0*h11*h35 + (9_f64/2.0)*h11*j_max*v0 - 9.0*h13*h14 - 9.0*h14*h35 + (9_f64/2.0)*h14*j_max*v0 - 9.0*h17 - 9.0*h19 - 9.0*h2*h3 - 9_f64/16.0*h22 - 27_f64/8.0*h23 - 9.0*h24*h26 - 9.0*h24*h33 - 9.0*h27*h28 - 9.0*h27*h33 + (9_f64/2.0)*h29*h30*vf - 9_f64/2.0*h29*h31 - 27_f64/4.0*h3*h34 + (9_f64/4.0)*h4*j_max*tf + (9_f64/4.0)*h5*j_max*tf + 18.0*h6*v0*vf - 9.0*h8,
        9.0*a0*h31*h63 - 9.0*a0*h38 - 9.0*a0*h54 + 9.0*a0*h60 - 9.0*af*h39 - 9.0*af*h54 + 9.0*af*h60 + 9.0*h10*h56 + 9.0*h10*h57 + 9.0*h11*h18 + 9.0*h11*h46 - 9.0*h11*h62 + 9.0*h11*h66 + 9.0*h12*h4 - 9.0*h12*h42 - 9.0*h12*h43 + 9.0*h12*h5 + 9.0*h14*h18 + 9.0*h14*h47 - 9.0*h14*h62 + 9.0*h14*h66 - 36.0*h15*h55 + 9.0*h18*h61 + 9.0*h2*h42 + 9.0*h2*h43 + (63_f64/4.0)*h23*h25 - 9.0*h25*h38 - 9.0*h25*h39 + (45_f64/2.0)*h3*h33 + 9.0*h31*h65 - 9.0*h34*h46 - 9.0*h34*h47 + (9_f64/8.0)*h36 + (9_f64/8.0)*h37 - 9.0*h40 - 9.0*h41 + 9.0*h42*h67 + 9.0*h43*h67 + (9_f64/8.0)*h45 - 9.0*h48*vf + 9.0*h49 - 9.0*h50*h51 - 9.0*h50*h52 - 9.0*h55*h65 + 9.0*h56*h8 + 9.0*h57*h8 + 9.0*h59*h7 + 9.0*h59*h9 - 9.0*h61*h62 - 9.0*h63*h64,
        -19_f64/32.0*a0.powi(6) + (27_f64/2.0)*a0*af*h29*h30*vf + 18.0*a0*af*h6*v0*vf + (81_f64/16.0)*a0*h1*j_max*tf + (81_f64/2.0)*a0*h14*h6*tf*vf + (9_f64/2.0)*a0*h20*h32*vf + 27.0*a0*h30*h9*tf + 36.0*a0*h30*pd*v0 + (21_f64/16.0)*a0*h37 + (3_f64/2.0)*a0*h4*j_max*vf - 3_f64/2.0*a0*h41 - a0*h7*h76 - a0*h72 - a0*h73 - a0*h77 - 19_f64/32.0*af.powi(6) + (81_f64/16.0)*af*h0*j_max*tf + 18.0*af*h11*h6*pd + (45_f64/2.0)*af*h11*h6*tf*vf + (9_f64/2.0)*af*h20*h32*vf + 27.0*af*h30*h7*tf + 36.0*af*h30*pd*vf - af*h31*h70 + (21_f64/16.0)*af*h36 - 3_f64/2.0*af*h40 + (3_f64/2.0)*af*h5*j_max*vf - af*h72 - af*h73 - af*h76*h9 - af*h77 + (3_f64/32.0)*h0*h14 + (81_f64/32.0)*h0*h29*h6 - h0*h68 + (39_f64/8.0)*h0*j_max*v0 + (3_f64/32.0)*h1*h11 + (81_f64/32.0)*h1*h29*h6 - h1*h68 + (39_f64/8.0)*h1*j_max*v0 - h10*h74 - h10*h78 - h10*h79 + (27_f64/4.0)*h11*h14*j_max*vf - 81_f64/2.0*h11*h19 + (9_f64/4.0)*h11*h29*h30*vf + 18.0*h11*h30*pd*tf + 27.0*h11*h6*v0*vf - h11*h81 - 81_f64/4.0*h11*h82 - 45_f64/2.0*h14*h17 + (81_f64/4.0)*h14*h29*h30*vf + 27.0*h14*h6*v0*vf - h14*h81 - 9_f64/4.0*h14*h82 - h15*h71 - 18.0*h16*h75 - 15_f64/2.0*h18*h4 - 3_f64/2.0*h18*h5 - 27_f64/4.0*h2*h23 + (27_f64/2.0)*h20*h29*h7 + (27_f64/2.0)*h20*h29*h9 + 9.0*h20*h29*v0*vf + 36.0*h20*pd.powi(2) - 9_f64/8.0*h21*h44*v0 + (9_f64/8.0)*h21*h44*vf - 135_f64/16.0*h22*h3 - 333_f64/16.0*h23*h34 - 51_f64/8.0*h26*h5 - 51_f64/8.0*h28*h4 - 27_f64/2.0*h3*h82 + 54.0*h30*h9*v0 + 18.0*h30*v0.powi(3) + (21_f64/16.0)*h36*j_max*tf + (21_f64/16.0)*h37*j_max*tf - 13_f64/8.0*h4*h5 + 6.0*h4*h6*pd + (3_f64/2.0)*h4*h6*tf*vf - h4*h80 - h42*h84 - h43*h84 - 6.0*h5*h6*pd + (15_f64/2.0)*h5*h6*tf*vf - h5*h80 - h51*h83 - h52*h83 - 54.0*h55*h7 - h64*h70 - h69*h75*tf - h69*vf.powi(3) - h71*tf*vf - h74*h8 - h78*h8 - h79*h8 - 9_f64/32.0*j_max.powi(6)*tf.powi(6),
    ]
}
