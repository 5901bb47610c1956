//! Action selection
//!
//! A uniform draw `u` in `[0, 1)` decides between the greedy action and a
//! uniformly random one. The comparison is `u < threshold → exploit`, the
//! reverse of the usual ε-greedy reading: a threshold of 0.95 exploits about
//! 95% of the time and 1.0 always exploits. Learned tables depend on this
//! exact comparison, so it must not be flipped.

use rand::Rng;

use super::q_table::QTable;
use crate::types::{Action, Position};

/// Threshold used while training.
pub const TRAINING_EXPLORATION_THRESHOLD: f64 = 0.95;

/// Threshold used for the greedy rollout; `u < 1.0` always holds.
pub const NAVIGATION_EXPLORATION_THRESHOLD: f64 = 1.0;

/// Choose an action for `pos`.
///
/// The uniform draw is taken on every call, including when the threshold
/// makes the outcome certain, so the generator advances identically either way.
pub fn select_action<R: Rng + ?Sized>(
    q_table: &QTable,
    pos: Position,
    exploration_threshold: f64,
    rng: &mut R,
) -> Action {
    let u: f64 = rng.random();
    if u < exploration_threshold {
        q_table.best_action(pos).0
    } else {
        Action::from_index(rng.random_range(0..Action::COUNT))
    }
}
