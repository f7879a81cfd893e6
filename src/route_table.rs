use crate::{find_path_with, map::canonical, Cost, MapModel, Route, RouteError};

use hashbrown::HashMap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Routes from one origin to every other location on the map.
///
/// Used by the dashboard to list the reachable delivery points without planning on every
/// request. The table is a snapshot: it is built once for an immutable [`MapModel`].
///
/// With the `parallel` feature (on by default) the Routes are planned on the rayon thread pool.
///
/// ## Examples
/// ```
/// use delivery_route::prelude::*;
///
/// let map = MapModel::floor_plan();
/// let table = RouteTable::from_origin(&map, "start").unwrap();
///
/// assert_eq!(table.origin(), "START");
/// assert_eq!(table.len(), 11);
/// assert_eq!(table.get("11a").unwrap().cost, 9.0);
/// assert!(table.unreachable().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct RouteTable {
    origin: String,
    routes: HashMap<String, Route>,
    unreachable: Vec<String>,
}

impl RouteTable {
    /// Plans a Route from `origin` to every other location.
    ///
    /// ## Errors
    /// [`RouteError::UnknownLocation`] if `origin` is not on the map. Locations that cannot be
    /// reached are not an error; they are listed in [`unreachable`](RouteTable::unreachable).
    pub fn from_origin(map: &MapModel, origin: &str) -> Result<RouteTable, RouteError> {
        RouteTable::from_origin_with(map, origin, crate::search::HEURISTIC_FALLBACK)
    }

    /// Same as [`from_origin`](RouteTable::from_origin) with a custom Heuristic fallback.
    pub fn from_origin_with(
        map: &MapModel,
        origin: &str,
        heuristic_fallback: Cost,
    ) -> Result<RouteTable, RouteError> {
        let origin_id = map.lookup(origin)?;
        let origin = map.label(origin_id).to_owned();

        let goals: Vec<&str> = map.labels().filter(|&label| label != origin).collect();

        #[cfg(feature = "parallel")]
        let iter = goals.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = goals.iter();

        let results: Vec<(&str, Result<Route, RouteError>)> = iter
            .map(|&goal| (goal, find_path_with(map, &origin, goal, heuristic_fallback)))
            .collect();

        let mut routes = HashMap::with_capacity(results.len());
        let mut unreachable = vec![];
        for (goal, result) in results {
            match result {
                Ok(route) => {
                    routes.insert(goal.to_owned(), route);
                }
                Err(RouteError::NoPathFound { .. }) => unreachable.push(goal.to_owned()),
                Err(err) => return Err(err),
            }
        }
        log::debug!(
            "route table for {}: {} reachable, {} unreachable",
            origin,
            routes.len(),
            unreachable.len()
        );

        Ok(RouteTable {
            origin,
            routes,
            unreachable,
        })
    }

    /// the canonical origin label
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The Route to `goal`, if it is reachable.
    pub fn get(&self, goal: &str) -> Option<&Route> {
        self.routes.get(canonical(goal).as_str())
    }

    /// the number of reachable locations (excluding the origin)
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// `true` if no other location can be reached
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Locations without a Route from the origin, in map order.
    pub fn unreachable(&self) -> &[String] {
        &self.unreachable
    }

    /// All reachable locations, sorted by label.
    pub fn destinations(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// An iterator over all `(goal, Route)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> + '_ {
        self.routes.iter().map(|(goal, route)| (goal.as_str(), route))
    }
}
