use crate::Maneuver;

/// The fixed wording of every Instruction.
///
/// Each entry is assembled from these words and the labels involved, for example
/// `"{turn_left} {at} J_ATAS {toward} 10A"`.
///
/// English wording (the default):
/// ```
/// # use delivery_route::{Maneuver, Phrasebook};
/// let words = Phrasebook::ENGLISH;
/// assert_eq!(words.start_at("START"), "Start at START");
/// assert_eq!(words.proceed_toward("J_ATAS"), "Proceed toward J_ATAS");
/// assert_eq!(words.maneuver(Maneuver::Left, "J_ATAS", "10A"), "Turn left at J_ATAS toward 10A");
/// assert_eq!(words.maneuver(Maneuver::Straight, "13A", "13B"), "Straight through 13A to 13B");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrasebook {
	/// "Start at"
	pub start: &'static str,
	/// "Proceed toward"
	pub proceed: &'static str,
	/// "Straight through"
	pub straight: &'static str,
	/// joins the two labels of a straight entry: "to"
	pub straight_join: &'static str,
	/// "Turn left"
	pub turn_left: &'static str,
	/// "Turn right"
	pub turn_right: &'static str,
	/// "at"
	pub at: &'static str,
	/// "toward"
	pub toward: &'static str,
	/// the last entry of every non-degenerate Instruction list
	pub arrived: &'static str,
	/// the only entry when no movement is required
	pub stationary: &'static str,
	/// the first entry of return trips
	pub return_marker: &'static str,
}

impl Phrasebook {
	/// English wording
	pub const ENGLISH: Phrasebook = Phrasebook {
		start: "Start at",
		proceed: "Proceed toward",
		straight: "Straight through",
		straight_join: "to",
		turn_left: "Turn left",
		turn_right: "Turn right",
		at: "at",
		toward: "toward",
		arrived: "Arrived at destination",
		stationary: "Stay in place",
		return_marker: "RETURN MODE: heading back to the station",
	};

	/// The dashboard's original Indonesian wording
	///
	/// ```
	/// # use delivery_route::{Maneuver, Phrasebook};
	/// let words = Phrasebook::INDONESIAN;
	/// assert_eq!(words.maneuver(Maneuver::Right, "SIMPANG_UTAMA", "J_ATAS"), "Belok Kanan di SIMPANG_UTAMA menuju J_ATAS");
	/// assert_eq!(words.maneuver(Maneuver::Straight, "13A", "13B"), "Lurus melewati 13A ke 13B");
	/// ```
	pub const INDONESIAN: Phrasebook = Phrasebook {
		start: "Mulai dari",
		proceed: "Maju menuju",
		straight: "Lurus melewati",
		straight_join: "ke",
		turn_left: "Belok Kiri",
		turn_right: "Belok Kanan",
		at: "di",
		toward: "menuju",
		arrived: "Sampai di Tujuan",
		stationary: "Diam di tempat",
		return_marker: "MODE PULANG: Kembali ke Station",
	};

	/// the first entry: where the robot starts
	pub fn start_at(&self, label: &str) -> String {
		format!("{} {}", self.start, label)
	}

	/// the entry for the first hop
	pub fn proceed_toward(&self, label: &str) -> String {
		format!("{} {}", self.proceed, label)
	}

	/// the entry for the maneuver at `curr` on the way to `next`.
	///
	/// [`Maneuver::Stop`] never comes out of the turn classifier and is rendered as [`arrived`](Phrasebook::arrived).
	pub fn maneuver(&self, maneuver: Maneuver, curr: &str, next: &str) -> String {
		let turn = match maneuver {
			Maneuver::Straight => {
				return format!("{} {} {} {}", self.straight, curr, self.straight_join, next)
			}
			Maneuver::Stop => return self.arrived.to_owned(),
			Maneuver::Left => self.turn_left,
			Maneuver::Right => self.turn_right,
		};
		format!("{} {} {} {} {}", turn, self.at, curr, self.toward, next)
	}
}

impl Default for Phrasebook {
	fn default() -> Phrasebook {
		Phrasebook::ENGLISH
	}
}
