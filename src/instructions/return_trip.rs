use super::generate_instructions_with;
use crate::{find_path_with, MapModel, NavigationConfig};

use serde::{Deserialize, Serialize};

/// The Instructions for driving back to the station.
///
/// All three fields are empty if there is no way back (see [`is_empty`](ReturnInstructions::is_empty)).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnInstructions {
    /// human-readable steps, starting with the return marker
    pub text: Vec<String>,
    /// controller codes; the return marker has none
    pub codes: Vec<i8>,
    /// the planned path joined by the configured separator
    pub path_string: String,
}

impl ReturnInstructions {
    /// `true` if no return Route was found
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.codes.is_empty() && self.path_string.is_empty()
    }
}

/// Plans the trip from `current` back to [`config.origin`](NavigationConfig::origin) and
/// generates its Instructions.
///
/// The text starts with the [`return_marker`](crate::Phrasebook::return_marker), which has no
/// code. If no Route can be planned (unknown location, no path) the result is empty; the robot
/// then has to be brought back by hand, which callers should report instead of failing.
///
/// ## Examples
/// ```
/// use delivery_route::prelude::*;
///
/// let map = MapModel::floor_plan();
/// let config = NavigationConfig::default();
///
/// let back = generate_return_instructions(&map, "12b", &config);
/// assert_eq!(back.path_string, "12B -> 13B -> 13A -> J_BAWAH -> SIMPANG_UTAMA -> START");
/// assert_eq!(back.text[0], config.phrasebook.return_marker);
/// assert_eq!(back.text[1], "Start at 12B");
/// assert_eq!(back.codes.last(), Some(&4));
///
/// assert!(generate_return_instructions(&map, "99Z", &config).is_empty());
/// ```
pub fn generate_return_instructions(
    map: &MapModel,
    current: &str,
    config: &NavigationConfig,
) -> ReturnInstructions {
    let route = match find_path_with(map, current, &config.origin, config.heuristic_fallback) {
        Ok(route) => route,
        Err(err) => {
            log::warn!("no return route: {}", err);
            return ReturnInstructions::default();
        }
    };

    let instructions = match generate_instructions_with(&route.path, map, &config.phrasebook) {
        Ok(instructions) => instructions,
        Err(err) => {
            log::warn!("cannot describe return route {}: {}", route, err);
            return ReturnInstructions::default();
        }
    };

    let mut text = Vec::with_capacity(instructions.text.len() + 1);
    text.push(config.phrasebook.return_marker.to_owned());
    text.extend(instructions.text);

    ReturnInstructions {
        text,
        codes: instructions.codes,
        path_string: route.path_string(config.separator),
    }
}
