use super::{canonical, MapModel, NodeList};
use crate::{Cost, MapError, Point};

/// Collects locations and corridors for a [`MapModel`].
///
/// Nothing is validated until [`build`](MapBuilder::build) is called, so declarations can be
/// chained freely. Labels that only appear in an edge are added as locations without
/// coordinate.
///
/// ## Examples
/// ```
/// use delivery_route::MapBuilder;
///
/// let map = MapBuilder::new()
///     .node("dock", (0.0, 0.0))
///     .node("hall", (4.0, 0.0))
///     .two_way("dock", "hall", 4.0)
///     .build()
///     .unwrap();
///
/// assert!(map.contains("DOCK"));
///
/// let broken = MapBuilder::new().edge("dock", "hall", 0.0).build();
/// assert!(broken.is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapBuilder {
    coords: Vec<(String, Point)>,
    edges: Vec<(String, String, Cost)>,
}

impl MapBuilder {
    /// Creates an empty builder.
    pub fn new() -> MapBuilder {
        MapBuilder::default()
    }

    /// Declares a location with its coordinate. Declaring it again replaces the coordinate.
    pub fn node(mut self, label: &str, pos: Point) -> MapBuilder {
        self.coords.push((canonical(label), pos));
        self
    }

    /// Declares the directed corridor `from -> to`.
    pub fn edge(mut self, from: &str, to: &str, weight: Cost) -> MapBuilder {
        self.edges.push((canonical(from), canonical(to), weight));
        self
    }

    /// Declares `a -> b` and `b -> a` with the same weight.
    pub fn two_way(self, a: &str, b: &str, weight: Cost) -> MapBuilder {
        self.edge(a, b, weight).edge(b, a, weight)
    }

    /// Validates all declarations and creates the map.
    ///
    /// ## Errors
    /// - [`MapError::InvalidLabel`] for empty labels
    /// - [`MapError::InvalidWeight`] for weights that are not finite and positive
    pub fn build(self) -> Result<MapModel, MapError> {
        let labels = self
            .coords
            .iter()
            .map(|(label, _)| label)
            .chain(self.edges.iter().flat_map(|(from, to, _)| [from, to]));
        for label in labels {
            if label.is_empty() {
                return Err(MapError::InvalidLabel(label.clone()));
            }
        }
        for (from, to, weight) in self.edges.iter() {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(MapError::InvalidWeight {
                    from: from.clone(),
                    to: to.clone(),
                    weight: *weight,
                });
            }
        }
        Ok(self.assemble())
    }

    /// Creates the map without validating. Only for declarations known to be valid.
    pub(crate) fn assemble(self) -> MapModel {
        let mut nodes = NodeList::new();
        for (label, pos) in self.coords {
            let id = nodes.add_node(&label);
            nodes.set_pos(id, pos);
        }
        for (from, to, weight) in self.edges {
            let src = nodes.add_node(&from);
            let target = nodes.add_node(&to);
            nodes.add_edge(src, target, weight);
        }
        log::debug!("assembled map with {} locations", nodes.len());
        MapModel::from_nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_weights() {
        for weight in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let result = MapBuilder::new().edge("A", "B", weight).build();
            assert!(matches!(result, Err(MapError::InvalidWeight { .. })));
        }
    }

    #[test]
    fn rejects_empty_labels() {
        let result = MapBuilder::new().node("  ", (0.0, 0.0)).build();
        assert!(matches!(result, Err(MapError::InvalidLabel(_))));
    }

    #[test]
    fn asymmetric_edges() {
        let map = MapBuilder::new()
            .edge("A", "B", 1.0)
            .edge("B", "A", 4.0)
            .edge("B", "C", 1.0)
            .build()
            .unwrap();

        assert_eq!(map.neighbors("A").unwrap().collect::<Vec<_>>(), vec![("B", 1.0)]);
        assert_eq!(
            map.neighbors("B").unwrap().collect::<Vec<_>>(),
            vec![("A", 4.0), ("C", 1.0)]
        );
        assert_eq!(map.neighbors("C").unwrap().count(), 0);
    }
}
