use crate::Cost;

use serde::{Deserialize, Serialize};

/// A Route across the floor plan
///
/// Stores the sequence of locations in `path` (start and goal included) and the total Cost of
/// driving it in `cost`.
/// Note that the individual costs of the steps within the Route cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
	/// the canonical labels, from start to goal
	pub path: Vec<String>,
	/// the sum of all edge weights along `path`
	pub cost: Cost,
}

impl Route {
	/// creates a new Route with the given sequence of locations and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use delivery_route::Route;
	/// let route = Route::new(vec!["A".into(), "B".into()], 2.0);
	///
	/// assert_eq!(route.start(), "A");
	/// assert_eq!(route.goal(), "B");
	/// ```
	pub fn new(path: Vec<String>, cost: Cost) -> Route {
		Route { path, cost }
	}

	/// The number of locations on the Route
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the Route has no locations. Routes returned by the planner never are.
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// `true` if start and goal are the same location
	pub fn is_stationary(&self) -> bool {
		self.path.len() < 2
	}

	/// the first location, or `""` for an empty Route
	pub fn start(&self) -> &str {
		self.path.first().map_or("", String::as_str)
	}

	/// the last location, or `""` for an empty Route
	pub fn goal(&self) -> &str {
		self.path.last().map_or("", String::as_str)
	}

	/// The labels joined by `separator`.
	/// ## Examples
	/// ```
	/// # use delivery_route::Route;
	/// let route = Route::new(vec!["START".into(), "J_ATAS".into()], 5.0);
	///
	/// assert_eq!(route.path_string(" -> "), "START -> J_ATAS");
	/// ```
	pub fn path_string(&self, separator: &str) -> String {
		self.path.join(separator)
	}
}

use std::ops::{Deref, Index};

impl Index<usize> for Route {
	type Output = str;
	fn index(&self, index: usize) -> &str {
		&self.path[index]
	}
}

impl Deref for Route {
	type Target = [String];
	fn deref(&self) -> &[String] {
		&self.path
	}
}

use std::cmp::Ordering;

impl PartialOrd for Route {
	fn partial_cmp(&self, other: &Route) -> Option<Ordering> {
		self.cost.partial_cmp(&other.cost)
	}
}

use std::fmt;
impl fmt::Display for Route {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Route[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}
