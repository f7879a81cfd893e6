//! Classifying the maneuver at a junction.

use crate::Point;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Cross products strictly inside `(-STRAIGHT_TOLERANCE, STRAIGHT_TOLERANCE)` count as straight.
pub const STRAIGHT_TOLERANCE: f64 = 0.5;

/// A navigation action, as understood by the embedded controller.
///
/// Serialized as its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Maneuver {
    /// keep driving
    Straight = 0,
    /// turn counter-clockwise
    Left = -1,
    /// turn clockwise
    Right = 1,
    /// destination reached, or nothing to do
    Stop = 4,
}
pub use self::Maneuver::*;

impl Maneuver {
    /// the controller code
    pub fn code(self) -> i8 {
        self as i8
    }

    /// `true` for [`Left`] and [`Right`]
    pub fn is_turn(self) -> bool {
        matches!(self, Left | Right)
    }

    /// a short lowercase name
    pub fn label(self) -> &'static str {
        match self {
            Straight => "straight",
            Left => "left",
            Right => "right",
            Stop => "stop",
        }
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A code that is not a [`Maneuver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid maneuver code {0}")]
pub struct InvalidManeuverCode(pub i8);

impl TryFrom<i8> for Maneuver {
    type Error = InvalidManeuverCode;
    fn try_from(code: i8) -> Result<Maneuver, InvalidManeuverCode> {
        match code {
            0 => Ok(Straight),
            -1 => Ok(Left),
            1 => Ok(Right),
            4 => Ok(Stop),
            _ => Err(InvalidManeuverCode(code)),
        }
    }
}

impl From<Maneuver> for i8 {
    fn from(maneuver: Maneuver) -> i8 {
        maneuver.code()
    }
}

/// Classifies the maneuver at `curr` when coming from `prev` and heading on to `next`.
///
/// Uses the 2-D cross product of the incoming vector `curr - prev` and the outgoing vector
/// `next - curr`. Values within [`STRAIGHT_TOLERANCE`] of zero are straight, positive ones are
/// left and everything else is right (with the y axis pointing up).
///
/// ## Examples
/// ```
/// use delivery_route::{classify_turn, Maneuver};
///
/// assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (2.0, 0.0)), Maneuver::Straight);
/// assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (1.0, 1.0)), Maneuver::Left);
/// assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (1.0, -1.0)), Maneuver::Right);
/// ```
pub fn classify_turn(prev: Point, curr: Point, next: Point) -> Maneuver {
    let (dx_in, dy_in) = (curr.0 - prev.0, curr.1 - prev.1);
    let (dx_out, dy_out) = (next.0 - curr.0, next.1 - curr.1);

    let cross = dx_in * dy_out - dy_in * dx_out;

    if -STRAIGHT_TOLERANCE < cross && cross < STRAIGHT_TOLERANCE {
        Straight
    } else if cross > 0.0 {
        Left
    } else {
        Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_band() {
        // cross = 0.4
        assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (2.0, 0.4)), Straight);
        // cross = -0.4
        assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (2.0, -0.4)), Straight);
        // the band is open: exactly 0.5 is a turn
        assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (2.0, 0.5)), Left);
        assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (2.0, -0.5)), Right);
    }

    #[test]
    fn u_turn_is_straight() {
        assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (0.0, 0.0)), Straight);
    }

    #[test]
    fn scale_matters() {
        // the same angle, but long legs push the cross product out of the band
        assert_eq!(classify_turn((0.0, 0.0), (1.0, 0.0), (2.0, 0.1)), Straight);
        assert_eq!(classify_turn((0.0, 0.0), (10.0, 0.0), (20.0, 1.0)), Left);
    }

    #[test]
    fn not_a_number() {
        assert_eq!(classify_turn((f64::NAN, 0.0), (1.0, 0.0), (2.0, 0.0)), Right);
    }

    #[test]
    fn codes() {
        for maneuver in [Straight, Left, Right, Stop] {
            assert_eq!(Maneuver::try_from(maneuver.code()), Ok(maneuver));
        }
        assert_eq!(Maneuver::try_from(2), Err(InvalidManeuverCode(2)));
        assert!(Left.is_turn() && Right.is_turn());
        assert!(!Straight.is_turn() && !Stop.is_turn());
    }

    #[test]
    fn labels() {
        assert_eq!(Left.label(), "left");
        assert_eq!(Stop.label(), "stop");
        assert_eq!(format!("{} then {}", Right, Straight), "right then straight");
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Left).unwrap(), "-1");
        assert_eq!(serde_json::from_str::<Maneuver>("4").unwrap(), Stop);
        assert!(serde_json::from_str::<Maneuver>("3").is_err());
    }
}
