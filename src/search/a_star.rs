use super::{HeuristicElement, HEURISTIC_FALLBACK};
use crate::{Cost, MapModel, NodeID, Route, RouteError};

use hashbrown::HashSet;
use std::collections::BinaryHeap;

/// Searches the floor plan for a Route from `start` to `goal`.
///
/// Same as [`find_path_with`] using [`HEURISTIC_FALLBACK`] for locations without coordinate.
///
/// ## Examples
/// ```
/// # use delivery_route::{find_path, MapModel, RouteError};
/// let map = MapModel::floor_plan();
///
/// let route = find_path(&map, "13a", "12B").unwrap();
/// assert_eq!(route.path, vec!["13A", "13B", "12B"]);
/// assert_eq!(route.cost, 3.0);
///
/// assert_eq!(
///     find_path(&map, "START", "99Z"),
///     Err(RouteError::UnknownLocation("99Z".into()))
/// );
/// ```
pub fn find_path(map: &MapModel, start: &str, goal: &str) -> Result<Route, RouteError> {
    find_path_with(map, start, goal, HEURISTIC_FALLBACK)
}

/// Searches the floor plan for a Route from `start` to `goal` using an A*-style best-first search.
///
/// ## Rules
/// - Labels are canonicalized before lookup.
/// - The frontier is ordered by `f = g + h`, where `g` is the sum of edge weights so far and
///   `h` the straight-line distance to the goal. If the location or the goal has no coordinate,
///   `h` is `heuristic_fallback`. Entries with the same `f` are expanded in insertion order.
/// - The first frontier entry that reaches the goal is the result.
/// - A location is expanded at most once. Finalized locations are never pushed again, even if a
///   cheaper way to them shows up later. With a Heuristic that overestimates, this can return a
///   Route that is not the cheapest one.
///
/// ## Returns
/// the Route on success. Its first location is always the `start` and the last is the `goal`.
/// `start == goal` yields the single-location Route with Cost 0.
///
/// ## Errors
/// - [`RouteError::UnknownLocation`] if `start` or `goal` is not on the map
/// - [`RouteError::NoPathFound`] if the `goal` cannot be reached. This is an expected outcome;
///   callers should report it instead of treating it as fatal.
pub fn find_path_with(
    map: &MapModel,
    start: &str,
    goal: &str,
    heuristic_fallback: Cost,
) -> Result<Route, RouteError> {
    let start_id = map.lookup(start)?;
    let goal_id = map.lookup(goal)?;
    let goal_pos = map.node(goal_id).pos;

    let heuristic = |id: NodeID| -> Cost {
        match (map.node(id).pos, goal_pos) {
            (Some((x1, y1)), Some((x2, y2))) => (x1 - x2).hypot(y1 - y2),
            _ => {
                log::debug!(
                    "no coordinate for {} or {}, using heuristic {}",
                    map.label(id),
                    map.label(goal_id),
                    heuristic_fallback
                );
                heuristic_fallback
            }
        }
    };

    // every pushed entry records (node, index of the step it came from)
    let mut trail: Vec<(NodeID, Option<usize>)> = vec![(start_id, None)];
    let mut visited = HashSet::with_capacity(map.len());
    let mut next = BinaryHeap::with_capacity(map.len());
    let mut seq = 0;
    next.push(HeuristicElement {
        estimate: 0.0,
        seq,
        cost: 0.0,
        node: start_id,
        trail: 0,
    });

    while let Some(HeuristicElement {
        cost: current_cost,
        node: current_id,
        trail: current_step,
        ..
    }) = next.pop()
    {
        if current_id == goal_id {
            let route = Route::new(steps(map, &trail, current_step), current_cost);
            log::debug!("found {}", route);
            return Ok(route);
        }
        if !visited.insert(current_id) {
            continue;
        }
        log::trace!("expanding {} (g = {})", map.label(current_id), current_cost);

        for &(other_id, weight) in map.node(current_id).edges.iter() {
            if visited.contains(&other_id) {
                continue;
            }
            let other_cost = current_cost + weight;
            trail.push((other_id, Some(current_step)));
            seq += 1;
            next.push(HeuristicElement {
                estimate: other_cost + heuristic(other_id),
                seq,
                cost: other_cost,
                node: other_id,
                trail: trail.len() - 1,
            });
        }
    }

    let start = map.label(start_id).to_owned();
    let goal = map.label(goal_id).to_owned();
    log::debug!("no route from {} to {}", start, goal);
    Err(RouteError::NoPathFound { start, goal })
}

fn steps(map: &MapModel, trail: &[(NodeID, Option<usize>)], last: usize) -> Vec<String> {
    let mut steps = vec![];
    let mut current = Some(last);
    while let Some(index) = current {
        let (node, prev) = trail[index];
        steps.push(map.label(node).to_owned());
        current = prev;
    }
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapBuilder;

    #[test]
    fn basic() {
        let map = MapBuilder::new()
            .node("START", (10.0, 5.0))
            .node("SIMPANG_UTAMA", (8.0, 5.0))
            .node("J_ATAS", (8.0, 8.0))
            .node("10A", (6.0, 8.0))
            .edge("START", "SIMPANG_UTAMA", 2.0)
            .edge("SIMPANG_UTAMA", "J_ATAS", 3.0)
            .edge("J_ATAS", "10A", 2.0)
            .build()
            .unwrap();

        let route = find_path(&map, "start", "10a").unwrap();

        assert_eq!(route.path, vec!["START", "SIMPANG_UTAMA", "J_ATAS", "10A"]);
        assert_eq!(route.cost, 7.0);
    }

    #[test]
    fn same_start_and_goal() {
        let map = MapModel::floor_plan();
        let route = find_path(&map, "j_atas", "J_ATAS").unwrap();

        assert_eq!(route.path, vec!["J_ATAS"]);
        assert_eq!(route.cost, 0.0);
    }

    #[test]
    fn unreachable_goal() {
        let map = MapBuilder::new()
            .node("A", (0.0, 0.0))
            .node("B", (1.0, 0.0))
            .node("C", (5.0, 5.0))
            .node("D", (6.0, 5.0))
            .two_way("A", "B", 1.0)
            .two_way("C", "D", 1.0)
            .build()
            .unwrap();

        assert_eq!(
            find_path(&map, "a", "d"),
            Err(RouteError::NoPathFound {
                start: "A".into(),
                goal: "D".into()
            })
        );
    }

    #[test]
    fn one_way_corridor() {
        let map = MapBuilder::new()
            .node("A", (0.0, 0.0))
            .node("B", (1.0, 0.0))
            .edge("A", "B", 1.0)
            .build()
            .unwrap();

        assert!(find_path(&map, "A", "B").is_ok());
        assert!(matches!(
            find_path(&map, "B", "A"),
            Err(RouteError::NoPathFound { .. })
        ));
    }

    #[test]
    fn unknown_locations() {
        let map = MapModel::floor_plan();

        assert_eq!(
            find_path(&map, "nowhere", "START"),
            Err(RouteError::UnknownLocation("NOWHERE".into()))
        );
        assert_eq!(
            find_path(&map, "START", "14a"),
            Err(RouteError::UnknownLocation("14A".into()))
        );
    }

    #[test]
    fn finalized_locations_are_not_reopened() {
        // B reaches C first with g = 6. The cheaper way over A (g = 2) is found only after C
        // has been expanded and is dropped.
        let map = MapBuilder::new()
            .node("S", (0.0, 0.0))
            .node("A", (10.0, 0.0))
            .node("B", (0.0, 0.0))
            .node("C", (0.0, 0.0))
            .node("G", (0.0, 0.0))
            .edge("S", "A", 1.0)
            .edge("S", "B", 1.0)
            .edge("A", "C", 1.0)
            .edge("B", "C", 5.0)
            .edge("C", "G", 10.0)
            .build()
            .unwrap();

        let route = find_path(&map, "S", "G").unwrap();

        assert_eq!(route.path, vec!["S", "B", "C", "G"]);
        assert_eq!(route.cost, 16.0);
    }

    #[test]
    fn missing_coordinates_fall_back() {
        let map = MapBuilder::new()
            .node("A", (0.0, 0.0))
            .node("C", (2.0, 0.0))
            .edge("A", "B", 1.0)
            .edge("B", "C", 1.0)
            .edge("A", "C", 5.0)
            .build()
            .unwrap();

        // B has no coordinate and is pushed with f = 1 + 999
        let route = find_path(&map, "A", "C").unwrap();
        assert_eq!(route.path, vec!["A", "C"]);
        assert_eq!(route.cost, 5.0);

        let route = find_path_with(&map, "A", "C", 0.0).unwrap();
        assert_eq!(route.path, vec!["A", "B", "C"]);
        assert_eq!(route.cost, 2.0);
    }

    #[test]
    fn goal_without_coordinate() {
        // every h is the fallback, so the frontier is ordered by g alone
        let map = MapModel::builder()
            .node("S", (0.0, 0.0))
            .node("A", (1.0, 0.0))
            .node("B", (2.0, 0.0))
            .edge("S", "G", 5.0)
            .edge("S", "A", 1.0)
            .edge("A", "B", 1.0)
            .edge("B", "G", 1.0)
            .build()
            .unwrap();

        let route = find_path(&map, "S", "G").unwrap();
        assert_eq!(route.path, vec!["S", "A", "B", "G"]);
        assert_eq!(route.cost, 3.0);
    }
}
