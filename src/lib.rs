#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! Route planning and turn-by-turn instructions for an indoor delivery robot.
//!
//! ## Introduction
//! The robot drives on a small, hand-authored floor plan: a handful of named locations
//! (delivery areas, junctions, the charging station) connected by weighted corridors.
//! Every location has a 2-D coordinate, which is used both as a Heuristic while searching
//! and to decide whether the robot has to turn at a junction.
//!
//! This crate turns a pair of location labels into
//! - a [`Route`] found with an A*-style search over the floor plan,
//! - a sequence of human-readable [`Instructions`] for the dashboard, together with the
//!   maneuver codes the embedded controller understands,
//! - the same for the trip back to the station ([`ReturnInstructions`]).
//!
//! Everything here is pure computation over an immutable [`MapModel`], so the same map can be
//! shared between threads without locking.
//!
//! ## Examples
//! Finding a Route:
//! ```
//! use delivery_route::prelude::*;
//!
//! let map = MapModel::floor_plan();
//!
//! // labels are case-insensitive
//! let route = find_path(&map, "start", "10a").unwrap();
//!
//! assert_eq!(route.path, vec!["START", "SIMPANG_UTAMA", "J_ATAS", "10A"]);
//! assert_eq!(route.cost, 7.0);
//! ```
//!
//! Turning the Route into Instructions:
//! ```
//! # use delivery_route::prelude::*;
//! # let map = MapModel::floor_plan();
//! # let route = find_path(&map, "start", "10a").unwrap();
//! let instructions = generate_instructions(&route.path, &map).unwrap();
//!
//! assert_eq!(instructions.text[0], "Start at START");
//! assert_eq!(instructions.text.len(), 5);
//! assert_eq!(instructions.codes.last(), Some(&4));
//! ```
//! Note that `text` and `codes` are **not** the same length in general: every turn that is not
//! the last maneuver is followed by an extra "straight" code, which the controller uses to leave
//! the junction before it looks for the next one.
//!
//! Going back to the station:
//! ```
//! # use delivery_route::prelude::*;
//! # let map = MapModel::floor_plan();
//! let back = generate_return_instructions(&map, "10A", &NavigationConfig::default());
//!
//! assert_eq!(back.path_string, "10A -> J_ATAS -> SIMPANG_UTAMA -> START");
//! assert_eq!(back.text[0], NavigationConfig::default().phrasebook.return_marker);
//! ```
//!
//! ### Configuration
//! [`NavigationConfig`] collects the few knobs of the subsystem: the origin of return trips,
//! the Heuristic penalty for nodes without coordinates, the separator used for path strings and
//! the wording of the Instructions. The dashboard's original wording is available as
//! [`NavigationConfig::INDONESIAN`]:
//! ```
//! use delivery_route::prelude::*;
//!
//! let map = MapModel::floor_plan();
//! let config = NavigationConfig::INDONESIAN;
//! let route = find_path(&map, "START", "12A").unwrap();
//! let instructions = generate_instructions_with(&route.path, &map, &config.phrasebook).unwrap();
//!
//! assert_eq!(instructions.text[0], "Mulai dari START");
//! assert_eq!(instructions.text.last().unwrap(), "Sampai di Tujuan");
//! ```

/// The Type used to reference a Node in the [`MapModel`]
pub type NodeID = usize;

/// A shorthand for coordinates on the floor plan
pub type Point = (f64, f64);

/// The Type used for edge weights and accumulated Route costs
pub type Cost = f64;

mod error;
pub use self::error::{MapError, RouteError};

pub mod map;
pub use self::map::{CoordinateLookup, MapBuilder, MapModel};

mod path;
pub use self::path::Route;

pub mod search;
pub use self::search::{find_path, find_path_with};

pub mod turn;
pub use self::turn::{classify_turn, Maneuver};

mod config;
pub use self::config::NavigationConfig;

pub mod instructions;
pub use self::instructions::{
    generate_instructions, generate_instructions_with, generate_return_instructions, Instructions,
    Phrasebook, ReturnInstructions,
};

mod route_table;
pub use self::route_table::RouteTable;

pub mod mission;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        classify_turn, find_path, find_path_with, generate_instructions,
        generate_instructions_with, generate_return_instructions,
        mission::{DeliveryPlan, MissionPhase, NavigationPayload, PackageStatus, RobotStatus},
        CoordinateLookup, Cost, Instructions, Maneuver, MapBuilder, MapError, MapModel,
        NavigationConfig, NodeID, Phrasebook, Point, ReturnInstructions, Route, RouteError,
        RouteTable,
    };
}
