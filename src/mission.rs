//! One delivery: the trip to the destination and the trip back.
//!
//! A mission is planned up front and then runs through a fixed sequence of [`MissionPhase`]s.
//! In each phase the dashboard shows a [`RobotStatus`] and a [`PackageStatus`], and the device
//! layer receives a [`NavigationPayload`].

use crate::{
    find_path_with, generate_instructions_with, generate_return_instructions, Instructions,
    MapModel, NavigationConfig, ReturnInstructions, Route, RouteError,
};

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// The state of the robot as stored by the dashboard.
///
/// The integer codes are persisted, so they must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum RobotStatus {
    /// powered off or not connected
    Inactive = 101,
    /// connected, not yet at the station
    Active = 102,
    /// waiting at the station for a package
    StandbyAtStation = 103,
    /// on the way to the destination
    Delivering = 104,
    /// arrived, waiting for the package to be taken
    Delivered = 105,
    /// on the way back to the station
    ReturningToStation = 106,
    /// a hardware check failed; the mission was aborted
    Fault = 107,
}

impl RobotStatus {
    /// the persisted code
    pub fn code(self) -> u16 {
        self as u16
    }

    /// `true` while the robot is away from the station on a mission
    pub fn is_on_mission(self) -> bool {
        matches!(
            self,
            RobotStatus::Delivering | RobotStatus::Delivered | RobotStatus::ReturningToStation
        )
    }
}

/// A code that is not a [`RobotStatus`] or [`PackageStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid status code {0}")]
pub struct InvalidStatusCode(pub u16);

impl TryFrom<u16> for RobotStatus {
    type Error = InvalidStatusCode;
    fn try_from(code: u16) -> Result<RobotStatus, InvalidStatusCode> {
        Ok(match code {
            101 => RobotStatus::Inactive,
            102 => RobotStatus::Active,
            103 => RobotStatus::StandbyAtStation,
            104 => RobotStatus::Delivering,
            105 => RobotStatus::Delivered,
            106 => RobotStatus::ReturningToStation,
            107 => RobotStatus::Fault,
            _ => return Err(InvalidStatusCode(code)),
        })
    }
}

impl From<RobotStatus> for u16 {
    fn from(status: RobotStatus) -> u16 {
        status.code()
    }
}

/// Where the package is, as stored by the dashboard next to the [`RobotStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum PackageStatus {
    /// the robot cannot take a package right now
    RobotUnavailable = 301,
    /// the robot waits at the station for a package
    AwaitingPackage = 302,
    /// the package is on its way
    InTransit = 303,
    /// the package reached the destination
    Arrived = 304,
}

impl PackageStatus {
    /// the persisted code
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for PackageStatus {
    type Error = InvalidStatusCode;
    fn try_from(code: u16) -> Result<PackageStatus, InvalidStatusCode> {
        Ok(match code {
            301 => PackageStatus::RobotUnavailable,
            302 => PackageStatus::AwaitingPackage,
            303 => PackageStatus::InTransit,
            304 => PackageStatus::Arrived,
            _ => return Err(InvalidStatusCode(code)),
        })
    }
}

impl From<PackageStatus> for u16 {
    fn from(status: PackageStatus) -> u16 {
        status.code()
    }
}

/// What the embedded controller receives for one phase of a mission.
///
/// The firmware reads `tujuan`, `rute`, `instruksi` and `timestamp`. `kode` carries the
/// maneuver codes next to them:
/// ```
/// # use delivery_route::mission::NavigationPayload;
/// let payload = NavigationPayload {
///     destination: "10A".into(),
///     route: "START -> 10A".into(),
///     instructions: vec!["Start at START".into()],
///     codes: vec![0, 4],
///     timestamp: 1700000000.5,
/// };
/// assert_eq!(
///     payload.to_json().unwrap(),
///     r#"{"tujuan":"10A","rute":"START -> 10A","instruksi":["Start at START"],"kode":[0,4],"timestamp":1700000000.5}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationPayload {
    /// where this leg ends
    #[serde(rename = "tujuan")]
    pub destination: String,
    /// the path string of this leg
    #[serde(rename = "rute")]
    pub route: String,
    /// human-readable steps
    #[serde(rename = "instruksi")]
    pub instructions: Vec<String>,
    /// controller codes
    #[serde(rename = "kode")]
    pub codes: Vec<i8>,
    /// seconds since the Unix epoch when the payload was created
    pub timestamp: f64,
}

impl NavigationPayload {
    /// Creates a payload stamped with the current time.
    pub fn new(
        destination: String,
        route: String,
        instructions: Vec<String>,
        codes: Vec<i8>,
    ) -> NavigationPayload {
        NavigationPayload {
            destination,
            route,
            instructions,
            codes,
            timestamp: unix_time(),
        }
    }

    /// A payload without movement, for phases where the robot stays at `location`.
    pub fn idle(location: &str) -> NavigationPayload {
        NavigationPayload::new(location.to_owned(), String::new(), vec![], vec![])
    }

    /// Serializes the payload as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn unix_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}

/// One step of a mission: what the dashboard shows and what the robot is told.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MissionPhase {
    /// the robot status during this phase
    pub robot: RobotStatus,
    /// the package status during this phase
    pub package: PackageStatus,
    /// the payload sent when the phase starts
    pub payload: NavigationPayload,
}

impl MissionPhase {
    fn new(robot: RobotStatus, package: PackageStatus, payload: NavigationPayload) -> MissionPhase {
        MissionPhase {
            robot,
            package,
            payload,
        }
    }
}

/// A planned delivery from the origin to `destination` and back.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryPlan {
    /// the origin label, where the return trip ends
    pub origin: String,
    /// the canonical destination label
    pub destination: String,
    /// the outbound Route
    pub outbound: Route,
    /// the outbound Instructions
    pub outbound_instructions: Instructions,
    /// the outbound path string
    pub outbound_path: String,
    /// the trip back; empty if there is no way back
    pub inbound: ReturnInstructions,
}

impl DeliveryPlan {
    /// Plans both legs of a delivery to `destination`.
    ///
    /// ## Errors
    /// Whatever planning the outbound leg reports. A missing way back is not an error; check
    /// [`has_return_route`](DeliveryPlan::has_return_route).
    ///
    /// ## Examples
    /// ```
    /// use delivery_route::prelude::*;
    ///
    /// let map = MapModel::floor_plan();
    /// let plan = DeliveryPlan::plan(&map, "11a", &NavigationConfig::default()).unwrap();
    ///
    /// assert_eq!(plan.outbound_path, "START -> SIMPANG_UTAMA -> J_ATAS -> 11B -> 11A");
    /// assert_eq!(plan.inbound.path_string, "11A -> 11B -> J_ATAS -> SIMPANG_UTAMA -> START");
    ///
    /// let phases = plan.phases();
    /// assert_eq!(phases[0].robot, RobotStatus::Delivering);
    /// assert_eq!(phases[2].payload.destination, "START");
    /// ```
    pub fn plan(
        map: &MapModel,
        destination: &str,
        config: &NavigationConfig,
    ) -> Result<DeliveryPlan, RouteError> {
        let outbound = find_path_with(map, &config.origin, destination, config.heuristic_fallback)?;
        let outbound_instructions =
            generate_instructions_with(&outbound.path, map, &config.phrasebook)?;
        let inbound = generate_return_instructions(map, outbound.goal(), config);
        log::info!("planned delivery {}", outbound);

        Ok(DeliveryPlan {
            origin: map.label(map.lookup(&config.origin)?).to_owned(),
            destination: outbound.goal().to_owned(),
            outbound_path: outbound.path_string(config.separator),
            outbound,
            outbound_instructions,
            inbound,
        })
    }

    /// `true` if the robot can drive back on its own
    pub fn has_return_route(&self) -> bool {
        !self.inbound.is_empty()
    }

    /// the payload for the outbound leg
    pub fn outbound_payload(&self) -> NavigationPayload {
        NavigationPayload::new(
            self.destination.clone(),
            self.outbound_path.clone(),
            self.outbound_instructions.text.clone(),
            self.outbound_instructions.codes.clone(),
        )
    }

    /// the payload for the way back
    pub fn return_payload(&self) -> NavigationPayload {
        NavigationPayload::new(
            self.origin.clone(),
            self.inbound.path_string.clone(),
            self.inbound.text.clone(),
            self.inbound.codes.clone(),
        )
    }

    /// The phases of a mission that passed the hardware check, in order:
    ///
    /// | robot | package | payload |
    /// |---|---|---|
    /// | `Delivering` (104) | `InTransit` (303) | outbound |
    /// | `Delivered` (105) | `Arrived` (304) | outbound |
    /// | `ReturningToStation` (106) | `RobotUnavailable` (301) | return |
    /// | `StandbyAtStation` (103) | `AwaitingPackage` (302) | idle at the origin |
    pub fn phases(&self) -> [MissionPhase; 4] {
        let outbound = self.outbound_payload();
        [
            MissionPhase::new(
                RobotStatus::Delivering,
                PackageStatus::InTransit,
                outbound.clone(),
            ),
            MissionPhase::new(RobotStatus::Delivered, PackageStatus::Arrived, outbound),
            MissionPhase::new(
                RobotStatus::ReturningToStation,
                PackageStatus::RobotUnavailable,
                self.return_payload(),
            ),
            MissionPhase::new(
                RobotStatus::StandbyAtStation,
                PackageStatus::AwaitingPackage,
                NavigationPayload::idle(&self.origin),
            ),
        ]
    }

    /// The single phase of a mission cancelled by a failed hardware check.
    pub fn aborted(&self) -> MissionPhase {
        MissionPhase::new(
            RobotStatus::Fault,
            PackageStatus::RobotUnavailable,
            NavigationPayload::idle(&self.destination),
        )
    }

    /// The phases to run, depending on the hardware check before departure.
    pub fn run(&self, hardware_ok: bool) -> Vec<MissionPhase> {
        if hardware_ok {
            self.phases().to_vec()
        } else {
            log::warn!("hardware check failed, cancelling delivery to {}", self.destination);
            vec![self.aborted()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        for code in 101..=107 {
            assert_eq!(RobotStatus::try_from(code).unwrap().code(), code);
        }
        assert_eq!(RobotStatus::try_from(201), Err(InvalidStatusCode(201)));
        assert_eq!(serde_json::to_string(&RobotStatus::Delivered).unwrap(), "105");
        assert_eq!(
            serde_json::from_str::<RobotStatus>("106").unwrap(),
            RobotStatus::ReturningToStation
        );
        assert!(RobotStatus::Delivering.is_on_mission());
        assert!(!RobotStatus::StandbyAtStation.is_on_mission());

        for code in 301..=304 {
            assert_eq!(PackageStatus::try_from(code).unwrap().code(), code);
        }
        assert_eq!(PackageStatus::try_from(305), Err(InvalidStatusCode(305)));
        assert_eq!(serde_json::to_string(&PackageStatus::Arrived).unwrap(), "304");
    }

    #[test]
    fn mission_sequence() {
        let map = MapModel::floor_plan();
        let plan = DeliveryPlan::plan(&map, "10A", &NavigationConfig::default()).unwrap();
        let phases = plan.run(true);

        let robot: Vec<u16> = phases.iter().map(|phase| phase.robot.code()).collect();
        let package: Vec<u16> = phases.iter().map(|phase| phase.package.code()).collect();
        assert_eq!(robot, vec![104, 105, 106, 103]);
        assert_eq!(package, vec![303, 304, 301, 302]);

        assert_eq!(phases[0].payload.route, "START -> SIMPANG_UTAMA -> J_ATAS -> 10A");
        assert_eq!(phases[0].payload.codes, vec![0, 1, 0, -1, 4]);
        assert_eq!(phases[1].payload.destination, "10A");
        assert_eq!(phases[2].payload.route, "10A -> J_ATAS -> SIMPANG_UTAMA -> START");
        assert_eq!(phases[3].payload.destination, "START");
        assert!(phases[3].payload.instructions.is_empty());
        assert!(phases.iter().all(|phase| phase.payload.timestamp > 0.0));
    }

    #[test]
    fn failed_hardware_check() {
        let map = MapModel::floor_plan();
        let plan = DeliveryPlan::plan(&map, "12a", &NavigationConfig::default()).unwrap();
        let phases = plan.run(false);

        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].robot, RobotStatus::Fault);
        assert_eq!(phases[0].package, PackageStatus::RobotUnavailable);
        assert_eq!(phases[0].payload.destination, "12A");
        assert!(phases[0].payload.codes.is_empty());
    }

    #[test]
    fn delivery_to_12b() {
        let map = MapModel::floor_plan();
        let plan = DeliveryPlan::plan(&map, "12b", &NavigationConfig::default()).unwrap();

        assert_eq!(plan.destination, "12B");
        assert_eq!(plan.outbound.cost, 10.0);
        assert!(plan.has_return_route());
        assert_eq!(plan.outbound_instructions.text.len(), plan.outbound.len() + 1);

        let json = plan.return_payload().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tujuan"], "START");
        assert_eq!(value["instruksi"][0], "RETURN MODE: heading back to the station");
        assert_eq!(value["kode"].as_array().unwrap().last().unwrap(), 4);
        assert!(value["timestamp"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn one_way_delivery() {
        let map = MapModel::builder()
            .node("START", (0.0, 0.0))
            .node("A", (1.0, 0.0))
            .edge("START", "A", 1.0)
            .build()
            .unwrap();
        let plan = DeliveryPlan::plan(&map, "a", &NavigationConfig::default()).unwrap();

        assert!(!plan.has_return_route());
        assert!(plan.return_payload().instructions.is_empty());
    }

    #[test]
    fn unknown_destination() {
        let map = MapModel::floor_plan();
        assert_eq!(
            DeliveryPlan::plan(&map, "lobby", &NavigationConfig::default()),
            Err(RouteError::UnknownLocation("LOBBY".into()))
        );
    }
}
