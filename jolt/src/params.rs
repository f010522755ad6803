//! Input and output parameter containers for the update entry point.
//!
//! Fixed-size per-DoF arrays; no heap allocation. The input's structural
//! equality against the last accepted input decides whether a tick replans.

/// Per-DoF planning input.
#[derive(Debug, Clone, PartialEq)]
pub struct Input<const DOFS: usize> {
    pub current_position: [f64; DOFS],
    pub current_velocity: [f64; DOFS],
    pub current_acceleration: [f64; DOFS],

    pub target_position: [f64; DOFS],
    pub target_velocity: [f64; DOFS],
    pub target_acceleration: [f64; DOFS],

    /// Velocity limit per DoF, > 0 [m/s].
    pub max_velocity: [f64; DOFS],
    /// Acceleration limit per DoF, > 0 [m/s²].
    pub max_acceleration: [f64; DOFS],
    /// Jerk limit per DoF, > 0 [m/s³].
    pub max_jerk: [f64; DOFS],

    /// Disabled DoFs keep integrating their current state freely.
    pub enabled: [bool; DOFS],
    /// Optional lower bound on the synchronized duration [s].
    pub minimum_duration: Option<f64>,
}

impl<const DOFS: usize> Default for Input<DOFS> {
    fn default() -> Self {
        Self {
            current_position: [0.0; DOFS],
            current_velocity: [0.0; DOFS],
            current_acceleration: [0.0; DOFS],
            target_position: [0.0; DOFS],
            target_velocity: [0.0; DOFS],
            target_acceleration: [0.0; DOFS],
            max_velocity: [1.0; DOFS],
            max_acceleration: [1.0; DOFS],
            max_jerk: [1.0; DOFS],
            enabled: [true; DOFS],
            minimum_duration: None,
        }
    }
}

/// Per-DoF planning output, refreshed every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Output<const DOFS: usize> {
    pub new_position: [f64; DOFS],
    pub new_velocity: [f64; DOFS],
    pub new_acceleration: [f64; DOFS],

    /// Synchronized trajectory duration [s].
    pub duration: f64,
    /// Each DoF's unsynchronized minimum duration [s].
    pub independent_min_durations: [f64; DOFS],
    /// Whether this tick ran the full planning pipeline.
    pub new_calculation: bool,
    /// Wall-clock time spent in the last update [µs].
    pub calculation_duration: f64,
}

impl<const DOFS: usize> Default for Output<DOFS> {
    fn default() -> Self {
        Self {
            new_position: [0.0; DOFS],
            new_velocity: [0.0; DOFS],
            new_acceleration: [0.0; DOFS],
            duration: 0.0,
            independent_min_durations: [0.0; DOFS],
            new_calculation: false,
            calculation_duration: 0.0,
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality_covers_all_fields() {
        let a = Input::<2>::default();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.target_position[1] = 0.5;
        assert_ne!(a, b);
        let mut c = a.clone();
        c.enabled[0] = false;
        assert_ne!(a, c);
        let mut d = a.clone();
        d.minimum_duration = Some(1.0);
        assert_ne!(a, d);
    }
}
