use thiserror::Error;

/// Errors reported while planning a Route or writing its Instructions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The label is not a location on the map.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The search ran out of candidates before reaching the goal.
    ///
    /// This is an expected outcome on maps with one-way corridors or disconnected areas,
    /// not a failure of the planner.
    #[error("no route available from {start} to {goal}")]
    NoPathFound {
        /// The (canonical) start label.
        start: String,
        /// The (canonical) goal label.
        goal: String,
    },

    /// A location on the path has no coordinate, so the turn at it cannot be classified.
    #[error("location {0} has no coordinate")]
    MissingCoordinate(String),
}

impl RouteError {
    /// `true` if asking for a different goal may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RouteError::NoPathFound { .. })
    }
}

/// Errors reported while constructing a [`MapModel`](crate::MapModel).
#[derive(Debug, Error)]
pub enum MapError {
    /// Edge weights have to be finite and strictly positive.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        /// Source of the edge.
        from: String,
        /// Target of the edge.
        to: String,
        /// The rejected weight.
        weight: f64,
    },

    /// Labels must not be empty or only whitespace.
    #[error("invalid location label {0:?}")]
    InvalidLabel(String),

    /// The JSON document could not be read.
    #[error("failed to parse map: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = RouteError::UnknownLocation("99Z".into());
        assert_eq!(format!("{err}"), "unknown location: 99Z");

        let err = RouteError::NoPathFound {
            start: "START".into(),
            goal: "12A".into(),
        };
        assert_eq!(format!("{err}"), "no route available from START to 12A");
        assert!(err.is_recoverable());

        let err = MapError::InvalidWeight {
            from: "A".into(),
            to: "B".into(),
            weight: -1.0,
        };
        assert!(format!("{err}").contains("-1"));
    }
}
