use crate::{search::HEURISTIC_FALLBACK, Cost, Phrasebook};

use std::borrow::Cow;

/// Options for planning and describing Routes
///
/// Default options:
/// ```
/// # use delivery_route::{NavigationConfig, Phrasebook};
/// assert_eq!(
/// 	NavigationConfig {
/// 		origin: "START".into(),
/// 		heuristic_fallback: 999.0,
/// 		separator: " -> ",
/// 		phrasebook: Phrasebook::ENGLISH,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationConfig {
	/// The station the robot returns to after a delivery (defaults to `"START"`)
	pub origin: Cow<'static, str>,
	/// The Heuristic used for locations without coordinate (defaults to `999`).
	///
	/// Such locations are explored last. Setting this to 0 makes the search treat them like
	/// every other location, at the cost of a less directed search.
	pub heuristic_fallback: Cost,
	/// Joins the labels of a path string (defaults to `" -> "`)
	pub separator: &'static str,
	/// The wording of the Instructions (defaults to [`Phrasebook::ENGLISH`])
	pub phrasebook: Phrasebook,
}

impl NavigationConfig {
	/// the default options with English Instructions
	pub const ENGLISH: NavigationConfig = NavigationConfig {
		origin: Cow::Borrowed("START"),
		heuristic_fallback: HEURISTIC_FALLBACK,
		separator: " -> ",
		phrasebook: Phrasebook::ENGLISH,
	};

	/// the default options with the dashboard's Indonesian Instructions
	///
	/// Values:
	/// ```
	/// # use delivery_route::{NavigationConfig, Phrasebook};
	/// assert_eq!(
	/// 	NavigationConfig {
	/// 		phrasebook: Phrasebook::INDONESIAN,
	/// 		..Default::default()
	/// 	},
	/// 	NavigationConfig::INDONESIAN
	/// );
	/// ```
	pub const INDONESIAN: NavigationConfig = NavigationConfig {
		origin: Cow::Borrowed("START"),
		heuristic_fallback: HEURISTIC_FALLBACK,
		separator: " -> ",
		phrasebook: Phrasebook::INDONESIAN,
	};

	/// the default options with a different origin
	/// ```
	/// # use delivery_route::NavigationConfig;
	/// let config = NavigationConfig::with_origin("DOCK");
	/// assert_eq!(config.origin, "DOCK");
	/// assert_eq!(config.separator, " -> ");
	///
	/// // read at runtime
	/// let station = String::from("loading_bay");
	/// assert_eq!(NavigationConfig::with_origin(station).origin, "loading_bay");
	/// ```
	pub fn with_origin(origin: impl Into<Cow<'static, str>>) -> NavigationConfig {
		NavigationConfig {
			origin: origin.into(),
			..Default::default()
		}
	}
}

impl Default for NavigationConfig {
	fn default() -> NavigationConfig {
		NavigationConfig::ENGLISH
	}
}
