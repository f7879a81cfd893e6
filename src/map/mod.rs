//! The static floor plan the robot drives on.
//!
//! A [`MapModel`] is a directed, weighted graph of named locations, each of which may carry a
//! 2-D coordinate. It is built once (with a [`MapBuilder`], from JSON or as the built-in
//! [`floor_plan`](MapModel::floor_plan)) and never changes afterwards.
//!
//! Labels are case-insensitive: every label passed in is canonicalized with [`canonical`]
//! before it is stored or looked up.

mod node;
pub(crate) use node::Node;

mod node_list;
use node_list::NodeList;

mod builder;
pub use builder::MapBuilder;

mod document;

mod floor_plan;

use crate::{Cost, NodeID, Point, RouteError};
use std::collections::HashMap;

/// Canonical form of a location label: surrounding whitespace removed, upper case.
///
/// ```
/// # use delivery_route::map::canonical;
/// assert_eq!(canonical(" 11a "), "11A");
/// assert_eq!(canonical("simpang_utama"), "SIMPANG_UTAMA");
/// ```
pub fn canonical(label: &str) -> String {
    label.trim().to_uppercase()
}

/// Anything that can give the coordinate of a location.
///
/// Used by the Instruction generator, which needs coordinates but not the graph itself.
/// Implemented for [`MapModel`] and for plain coordinate tables.
pub trait CoordinateLookup {
    /// The coordinate of `label`, or `None` if it has none.
    fn coordinate(&self, label: &str) -> Option<Point>;
}

impl CoordinateLookup for MapModel {
    fn coordinate(&self, label: &str) -> Option<Point> {
        self.id(label).and_then(|id| self.nodes[id].pos)
    }
}

impl<S: std::hash::BuildHasher> CoordinateLookup for HashMap<String, Point, S> {
    fn coordinate(&self, label: &str) -> Option<Point> {
        self.get(label).copied()
    }
}

impl<T: CoordinateLookup + ?Sized> CoordinateLookup for &T {
    fn coordinate(&self, label: &str) -> Option<Point> {
        (**self).coordinate(label)
    }
}

/// An immutable floor plan: locations, their coordinates and the corridors between them.
///
/// The graph is directed. Most floor plans declare every corridor in both directions with the
/// same weight, but nothing here relies on that.
#[derive(Clone, Debug)]
pub struct MapModel {
    nodes: NodeList,
}

impl MapModel {
    pub(crate) fn from_nodes(nodes: NodeList) -> MapModel {
        MapModel { nodes }
    }

    /// Creates a [`MapBuilder`].
    pub fn builder() -> MapBuilder {
        MapBuilder::new()
    }

    /// The number of locations on the map
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the map has no locations
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The internal id of `label`, if it is on the map.
    pub fn id(&self, label: &str) -> Option<NodeID> {
        self.nodes.id_of(&canonical(label))
    }

    /// `true` if `label` is on the map
    pub fn contains(&self, label: &str) -> bool {
        self.id(label).is_some()
    }

    /// The canonical label of a Node.
    ///
    /// ## Panics
    /// if `id` does not belong to this map
    #[track_caller]
    pub fn label(&self, id: NodeID) -> &str {
        &self.nodes[id].label
    }

    /// All labels, in the order the locations were declared.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|(_, node)| node.label.as_str())
    }

    /// The outgoing corridors of `label` as `(neighbor, weight)` pairs.
    ///
    /// ```
    /// # use delivery_route::MapModel;
    /// let map = MapModel::floor_plan();
    /// let neighbors: Vec<_> = map.neighbors("j_bawah").unwrap().collect();
    /// assert_eq!(neighbors, vec![("SIMPANG_UTAMA", 3.0), ("13A", 2.0)]);
    ///
    /// assert!(map.neighbors("99Z").is_err());
    /// ```
    pub fn neighbors(
        &self,
        label: &str,
    ) -> Result<impl Iterator<Item = (&str, Cost)> + '_, RouteError> {
        let id = self.lookup(label)?;
        Ok(self.nodes[id]
            .edges
            .iter()
            .map(move |&(other, cost)| (self.nodes[other].label.as_str(), cost)))
    }

    /// The coordinate of `label`.
    ///
    /// Unlike [`CoordinateLookup::coordinate`], this distinguishes between a label that is not on
    /// the map ([`RouteError::UnknownLocation`]) and one without coordinate
    /// ([`RouteError::MissingCoordinate`]).
    pub fn position(&self, label: &str) -> Result<Point, RouteError> {
        let id = self.lookup(label)?;
        let node = &self.nodes[id];
        node.pos
            .ok_or_else(|| RouteError::MissingCoordinate(node.label.clone()))
    }

    pub(crate) fn lookup(&self, label: &str) -> Result<NodeID, RouteError> {
        self.id(label)
            .ok_or_else(|| RouteError::UnknownLocation(canonical(label)))
    }

    pub(crate) fn node(&self, id: NodeID) -> &Node {
        &self.nodes[id]
    }
}
