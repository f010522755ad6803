//! Cross-DoF time synchronization.
//!
//! Selects the smallest finish time that every DoF can realize: candidate
//! times are each DoF's minimum duration and the right endpoints of its
//! blocked intervals, plus the caller's requested minimum duration. The
//! first candidate (in ascending order, ties broken by DoF index then
//! candidate slot) that no DoF considers blocked wins.

use crate::block::Block;
use crate::profile::Profile;

/// Hard upper bound on the DoF count, sized for dense-array axis sets.
pub const MAX_DOFS: usize = 16;

const SLOTS: usize = 3 * MAX_DOFS + 1;

/// Synchronization result: the common finish time and, unless the time came
/// from the requested minimum duration, the DoF whose Step 1 profile
/// already realizes it exactly (that DoF skips Step 2).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Synchronized {
    pub t_sync: f64,
    pub limiting_dof: Option<usize>,
    pub profile: Option<Profile>,
}

pub(crate) fn synchronize<const DOFS: usize>(
    blocks: &[Option<Block>; DOFS],
    minimum_duration: Option<f64>,
    enabled: &[bool; DOFS],
) -> Option<Synchronized> {
    let active = enabled.iter().filter(|e| **e).count();
    if active == 1 && minimum_duration.is_none() {
        let dof = enabled.iter().position(|e| *e)?;
        let block = blocks[dof].as_ref()?;
        return Some(Synchronized {
            t_sync: block.t_min,
            limiting_dof: Some(dof),
            profile: Some(block.p_min),
        });
    }

    // candidate finish times: {t_min, a.right, b.right} per DoF plus the
    // requested minimum duration (which needs no limiting profile)
    let mut times = [f64::INFINITY; SLOTS];
    for dof in 0..DOFS {
        if !enabled[dof] {
            continue;
        }
        if let Some(block) = &blocks[dof] {
            times[3 * dof] = block.t_min;
            if let Some(iv) = &block.a {
                times[3 * dof + 1] = iv.right;
            }
            if let Some(iv) = &block.b {
                times[3 * dof + 2] = iv.right;
            }
        }
    }
    let min_slot = 3 * DOFS;
    if let Some(t_min) = minimum_duration {
        times[min_slot] = t_min;
    }

    let mut order = [0usize; SLOTS];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i;
    }
    let order = &mut order[..min_slot + 1];
    // ascending by time; index tie-break keeps the ordering stable
    order.sort_unstable_by(|&i, &j| times[i].total_cmp(&times[j]).then(i.cmp(&j)));

    for &slot in order.iter() {
        let t = times[slot];
        if !t.is_finite() {
            continue;
        }
        if minimum_duration.is_some_and(|m| t < m) {
            continue;
        }
        let blocked = (0..DOFS).any(|dof| {
            enabled[dof]
                && blocks[dof]
                    .as_ref()
                    .is_some_and(|block| block.is_blocked(t))
        });
        if blocked {
            continue;
        }
        if slot == min_slot {
            return Some(Synchronized {
                t_sync: t,
                limiting_dof: None,
                profile: None,
            });
        }
        let dof = slot / 3;
        let block = blocks[dof].as_ref()?;
        let profile = match slot % 3 {
            0 => Some(block.p_min),
            1 => block.p_a,
            _ => block.p_b,
        };
        return Some(Synchronized {
            t_sync: t,
            limiting_dof: Some(dof),
            profile,
        });
    }
    None
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Interval;

    fn block(t_min: f64) -> Block {
        Block::new(t_min, Profile::default())
    }

    #[test]
    fn single_dof_returns_its_minimum() {
        let blocks = [Some(block(1.5))];
        let sync = synchronize(&blocks, None, &[true]).unwrap();
        assert_eq!(sync.t_sync, 1.5);
        assert_eq!(sync.limiting_dof, Some(0));
    }

    #[test]
    fn slowest_dof_limits() {
        let blocks = [Some(block(1.0)), Some(block(1.5))];
        let sync = synchronize(&blocks, None, &[true, true]).unwrap();
        assert_eq!(sync.t_sync, 1.5);
        assert_eq!(sync.limiting_dof, Some(1));
    }

    #[test]
    fn blocked_interval_pushes_to_right_endpoint() {
        let mut b0 = block(1.0);
        b0.a = Some(Interval {
            left: 1.2,
            right: 2.0,
        });
        b0.p_a = Some(Profile::default());
        // DoF 1 needs 1.5 which falls inside DoF 0's blocked interval
        let blocks = [Some(b0), Some(block(1.5))];
        let sync = synchronize(&blocks, None, &[true, true]).unwrap();
        assert_eq!(sync.t_sync, 2.0);
        assert_eq!(sync.limiting_dof, Some(0));
    }

    #[test]
    fn minimum_duration_overrides_when_larger() {
        let blocks = [Some(block(1.0)), Some(block(1.5))];
        let sync = synchronize(&blocks, Some(5.0), &[true, true]).unwrap();
        assert_eq!(sync.t_sync, 5.0);
        assert_eq!(sync.limiting_dof, None);
    }

    #[test]
    fn minimum_duration_below_candidates_is_inert() {
        let blocks = [Some(block(1.0)), Some(block(1.5))];
        let sync = synchronize(&blocks, Some(0.5), &[true, true]).unwrap();
        assert_eq!(sync.t_sync, 1.5);
        assert_eq!(sync.limiting_dof, Some(1));
    }

    #[test]
    fn disabled_dofs_are_ignored() {
        let blocks = [Some(block(9.0)), Some(block(1.5))];
        let sync = synchronize(&blocks, None, &[false, true]).unwrap();
        assert_eq!(sync.t_sync, 1.5);
        assert_eq!(sync.limiting_dof, Some(1));
    }

    #[test]
    fn ties_break_by_dof_index() {
        let blocks = [Some(block(2.0)), Some(block(2.0))];
        let sync = synchronize(&blocks, None, &[true, true]).unwrap();
        assert_eq!(sync.limiting_dof, Some(0));
    }
}
