//! # jolt
//!
//! Online time-optimal jerk-limited trajectory generation for systems with
//! multiple degrees of freedom.
//!
//! Given a current kinematic state (position, velocity, acceleration), a
//! target state, and per-DoF limits on velocity, acceleration, and jerk,
//! the generator produces a trajectory that reaches the target in minimum
//! time, respects every limit, and synchronizes all DoFs to finish
//! simultaneously. The generator is re-entrant: each control cycle may
//! supply new inputs and triggers a replan only when they changed.
//!
//! ## Pipeline
//!
//! 1. **Brake** — when the current state already exceeds (or will
//!    inevitably exceed) the limits, a short corrective pre-trajectory
//!    pulls it back toward the feasible region.
//! 2. **Step 1** — per DoF, a closed-form enumeration over profile shapes
//!    finds the minimum finish time and the set of unreachable durations.
//! 3. **Synchronization** — the smallest finish time realizable by every
//!    DoF becomes the common duration.
//! 4. **Step 2** — each non-limiting DoF is re-solved to finish exactly at
//!    the common duration.
//! 5. **Sampling** — `(p, v, a)` at any query time by walking the profile.
//!
//! ## Real-time behavior
//!
//! The hot path performs no heap allocation, no I/O, and no unbounded
//! iteration; per cycle it solves a fixed number of closed-form systems per
//! DoF. One generator instance owns one plan; independent planners are
//! independent instances.
//!
//! ```
//! use jolt::{Input, Output, Status, TrajectoryGenerator};
//!
//! let mut generator = TrajectoryGenerator::<1>::new(0.001);
//! let mut input = Input::<1>::default();
//! input.target_position[0] = 1.0;
//!
//! let mut output = Output::default();
//! while generator.update(&input, &mut output)? == Status::Working {
//!     input.current_position = output.new_position;
//!     input.current_velocity = output.new_velocity;
//!     input.current_acceleration = output.new_acceleration;
//! }
//! assert!((output.new_position[0] - 1.0).abs() < 1e-8);
//! # Ok::<(), jolt::JoltError>(())
//! ```

mod block;
mod brake;
mod coefficients;
mod generator;
mod math;
mod params;
mod profile;
mod step1;
mod step2;
mod sync;

pub use block::{Block, Interval};
pub use brake::{get_brake_trajectory, BrakeTrajectory};
pub use generator::{JoltError, Status, TrajectoryGenerator};
pub use params::{Input, Output};
pub use profile::{integrate, Direction, Limits, Profile, Teeth};
pub use sync::MAX_DOFS;
