//! Best-first search over a [`MapModel`](crate::MapModel).
//!
//! See [`find_path`] for the exact expansion rules.

mod a_star;
pub use a_star::{find_path, find_path_with};

use crate::{Cost, NodeID};

use std::cmp::Ordering;

/// The Heuristic penalty for locations without coordinate.
///
/// Large enough that such locations are only expanded once everything with a coordinate is
/// exhausted on the floor plans this crate is used with.
pub const HEURISTIC_FALLBACK: Cost = 999.0;

/// A frontier entry: `(f, insertion sequence, g, node, trail index)`.
///
/// The heap pops the lowest `f` first; entries with the same `f` come out in insertion order.
#[derive(Debug)]
pub(crate) struct HeuristicElement {
    pub estimate: Cost,
    pub seq: usize,
    pub cost: Cost,
    pub node: NodeID,
    pub trail: usize,
}
impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.estimate
            .total_cmp(&self.estimate)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}
