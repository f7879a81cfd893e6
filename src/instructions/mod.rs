//! Turning a Route into turn-by-turn Instructions.
//!
//! Every Instruction list comes in two independent sequences:
//! - `text`: one phrase per step, for the dashboard
//! - `codes`: [`Maneuver`](crate::Maneuver) codes for the embedded controller
//!
//! The two are **not** paired index by index. The first hop has a phrase but no code of its
//! own, and a turn that is not the last maneuver is followed by an extra straight code, so the
//! controller drives out of the junction before looking for the next one.

mod phrasebook;
pub use phrasebook::Phrasebook;

mod return_trip;
pub use return_trip::{generate_return_instructions, ReturnInstructions};

use crate::{classify_turn, CoordinateLookup, Maneuver, RouteError};

use serde::{Deserialize, Serialize};

/// The Instructions for driving a path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructions {
    /// human-readable steps
    pub text: Vec<String>,
    /// controller codes (see [`Maneuver`])
    pub codes: Vec<i8>,
}

impl Instructions {
    /// The codes as [`Maneuver`]s. Codes produced by this crate are always valid.
    pub fn maneuvers(&self) -> impl Iterator<Item = Maneuver> + '_ {
        self.codes
            .iter()
            .filter_map(|&code| Maneuver::try_from(code).ok())
    }
}

/// Generates the Instructions for `path` with the English [`Phrasebook`].
///
/// See [`generate_instructions_with`].
pub fn generate_instructions<S, L>(path: &[S], coordinates: &L) -> Result<Instructions, RouteError>
where
    S: AsRef<str>,
    L: CoordinateLookup + ?Sized,
{
    generate_instructions_with(path, coordinates, &Phrasebook::ENGLISH)
}

/// Generates the Instructions for driving along `path`.
///
/// - A path with fewer than 2 locations needs no movement: the result is the single
///   [`stationary`](Phrasebook::stationary) phrase and a single [`Maneuver::Stop`] code.
/// - Otherwise the text is: start, proceed toward the second location, one phrase per interior
///   location, arrived. The codes are: straight for the start, one code per interior location
///   (plus a straight after every turn that is not the last one), and stop.
///
/// ## Examples
/// ```
/// use delivery_route::prelude::*;
///
/// let map = MapModel::floor_plan();
/// let route = find_path(&map, "START", "12A").unwrap();
/// assert_eq!(route.path, vec!["START", "SIMPANG_UTAMA", "J_BAWAH", "13A", "13B", "12A"]);
///
/// let instructions = generate_instructions_with(&route.path, &map, &Phrasebook::ENGLISH).unwrap();
/// assert_eq!(instructions.text, vec![
///     "Start at START",
///     "Proceed toward SIMPANG_UTAMA",
///     "Turn left at SIMPANG_UTAMA toward J_BAWAH",
///     "Turn right at J_BAWAH toward 13A",
///     "Straight through 13A to 13B",
///     "Turn right at 13B toward 12A",
///     "Arrived at destination",
/// ]);
/// assert_eq!(instructions.codes, vec![0, -1, 0, 1, 0, 0, 1, 4]);
/// ```
///
/// ## Errors
/// [`RouteError::MissingCoordinate`] if an interior location (or its neighbors on the path)
/// cannot be looked up. Paths over a map where every location has a coordinate never fail.
pub fn generate_instructions_with<S, L>(
    path: &[S],
    coordinates: &L,
    phrasebook: &Phrasebook,
) -> Result<Instructions, RouteError>
where
    S: AsRef<str>,
    L: CoordinateLookup + ?Sized,
{
    if path.len() < 2 {
        return Ok(Instructions {
            text: vec![phrasebook.stationary.to_owned()],
            codes: vec![Maneuver::Stop.code()],
        });
    }

    let position = |label: &str| {
        coordinates
            .coordinate(label)
            .ok_or_else(|| RouteError::MissingCoordinate(label.to_owned()))
    };

    let mut text = Vec::with_capacity(path.len() + 2);
    let mut codes = Vec::with_capacity(2 * path.len());

    text.push(phrasebook.start_at(path[0].as_ref()));
    codes.push(Maneuver::Straight.code());
    text.push(phrasebook.proceed_toward(path[1].as_ref()));

    let last_center = path.len() - 2;
    for (i, window) in path.windows(3).enumerate() {
        let (prev, curr, next) = (window[0].as_ref(), window[1].as_ref(), window[2].as_ref());
        let maneuver = classify_turn(position(prev)?, position(curr)?, position(next)?);
        log::trace!("{} at {}", maneuver, curr);

        text.push(phrasebook.maneuver(maneuver, curr, next));
        codes.push(maneuver.code());
        // window i is centered on path[i + 1]
        if maneuver.is_turn() && i + 1 != last_center {
            codes.push(Maneuver::Straight.code());
        }
    }

    text.push(phrasebook.arrived.to_owned());
    codes.push(Maneuver::Stop.code());

    log::trace!("{} instructions, {} codes", text.len(), codes.len());
    Ok(Instructions { text, codes })
}
