use super::{MapBuilder, MapModel};
use crate::{Cost, MapError, Point};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;

/// The JSON layout of a floor plan:
/// ```json
/// {
///     "graph": { "START": { "SIMPANG_UTAMA": 2 } },
///     "coords": { "START": [10, 5] }
/// }
/// ```
/// Keys are sorted on load, which fixes the neighbor order of every location.
#[derive(Debug, Default, Deserialize)]
struct MapDocument {
    #[serde(default)]
    graph: BTreeMap<String, BTreeMap<String, Cost>>,
    #[serde(default)]
    coords: BTreeMap<String, Point>,
}

impl MapDocument {
    fn into_builder(self) -> MapBuilder {
        let mut builder = MapBuilder::new();
        for (label, pos) in self.coords {
            builder = builder.node(&label, pos);
        }
        for (from, edges) in self.graph {
            for (to, weight) in edges {
                builder = builder.edge(&from, &to, weight);
            }
        }
        builder
    }
}

impl MapModel {
    /// Reads a floor plan from a JSON string.
    ///
    /// ```
    /// # use delivery_route::MapModel;
    /// let map = MapModel::from_json(r#"{
    ///     "graph": { "A": { "B": 1 }, "B": { "A": 1 } },
    ///     "coords": { "A": [0, 0], "B": [1, 0] }
    /// }"#).unwrap();
    ///
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<MapModel, MapError> {
        let document: MapDocument = serde_json::from_str(json)?;
        document.into_builder().build()
    }

    /// Reads a floor plan in the same format as [`from_json`](MapModel::from_json) from a reader.
    pub fn from_reader(reader: impl Read) -> Result<MapModel, MapError> {
        let document: MapDocument = serde_json::from_reader(reader)?;
        document.into_builder().build()
    }
}
