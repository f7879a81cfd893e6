use super::{MapBuilder, MapModel};

impl MapModel {
    /// The delivery floor the robot was built for.
    ///
    /// ```no_code
    /// 11A--11B
    ///        \
    ///         \      10A--J_ATAS
    /// 10B------------------+
    ///                      |
    ///               SIMPANG_UTAMA--START
    /// 12A                 /
    ///    \               /
    ///    13B--13A--J_BAWAH
    ///    /
    /// 12B
    /// ```
    /// (schematic; the coordinates below are what the planner uses)
    /// `SIMPANG_UTAMA`, `J_ATAS` and `J_BAWAH` are junctions without a delivery point.
    /// Every corridor is declared in both directions with the same weight.
    pub fn floor_plan() -> MapModel {
        MapBuilder::new()
            .node("START", (10.0, 5.0))
            .node("SIMPANG_UTAMA", (8.0, 5.0))
            .node("J_ATAS", (8.0, 8.0))
            .node("10A", (6.0, 8.0))
            .node("10B", (2.0, 7.0))
            .node("11B", (2.0, 9.0))
            .node("11A", (0.0, 9.0))
            .node("J_BAWAH", (6.0, 3.0))
            .node("13A", (5.0, 3.0))
            .node("13B", (4.0, 3.0))
            .node("12A", (2.0, 4.0))
            .node("12B", (2.0, 2.0))
            .two_way("START", "SIMPANG_UTAMA", 2.0)
            .two_way("SIMPANG_UTAMA", "J_ATAS", 3.0)
            .two_way("SIMPANG_UTAMA", "J_BAWAH", 3.0)
            // upper wing
            .two_way("J_ATAS", "10B", 2.0)
            .two_way("J_ATAS", "10A", 2.0)
            .two_way("J_ATAS", "11B", 2.0)
            .two_way("11B", "11A", 2.0)
            // lower wing, 13B branches off to the 12s
            .two_way("J_BAWAH", "13A", 2.0)
            .two_way("13A", "13B", 1.0)
            .two_way("13B", "12A", 2.0)
            .two_way("13B", "12B", 2.0)
            .assemble()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoordinateLookup;

    #[test]
    fn every_location_has_a_coordinate() {
        let map = MapModel::floor_plan();
        assert_eq!(map.len(), 12);
        for label in map.labels() {
            assert!(map.coordinate(label).is_some(), "{} has no coordinate", label);
        }
    }

    #[test]
    fn corridors_are_symmetric() {
        let map = MapModel::floor_plan();
        for label in map.labels() {
            for (other, weight) in map.neighbors(label).unwrap() {
                let back: Vec<_> = map.neighbors(other).unwrap().collect();
                assert!(back.contains(&(label, weight)), "{} -> {}", label, other);
            }
        }
    }
}
