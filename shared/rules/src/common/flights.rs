//! Flight naming
//!
//! Stocked flights are named `Flight - OD<od> ID<id> P<pitch> T<thickness>
//! <RH|LH> <R<turns>>`. Rules rebuild that name from the selected OD and
//! pitch attributes and then check the catalog for it.

use std::sync::OnceLock;

use forgebom_database::ProductCatalog;
use forgebom_utils::bom::parser::{self, FlightSpec};
use regex::Regex;

pub const FLIGHT_MARKER: &str = "Flight -";

/// Inner diameters within this many mm above the tube OD fit the tube.
const ID_TOLERANCE_MM: i64 = 5;

fn flight_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"ID(\d+)").expect("static regex pattern"))
}

fn dash_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-\s*(\d+)").expect("static regex pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Right,
    Left,
}

impl Rotation {
    /// Anything other than "Right Hand Rotation" is left hand.
    pub fn from_attribute(value: &str) -> Self {
        if value.trim() == "Right Hand Rotation" {
            Self::Right
        } else {
            Self::Left
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Right => "RH",
            Self::Left => "LH",
        }
    }
}

/// Flight OD for an auger diameter: 20mm under size below 1500mm, 30mm above.
pub fn auger_flight_od(diameter: i64) -> i64 {
    if diameter < 1500 {
        diameter - 20
    } else {
        diameter - 30
    }
}

/// Outer diameter the flight bore must clear. A bare "- <n>" size wins over
/// an "OD<n>" marker.
pub fn centre_tube_bore(centre_tube: &str) -> i64 {
    dash_number_re()
        .captures(centre_tube)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .or_else(|| parser::outer_diameter(centre_tube).map(|od| od as i64))
        .unwrap_or(0)
}

/// Smallest stocked flight inner diameter within tolerance above `bore`.
pub fn find_flight_id(catalog: &dyn ProductCatalog, bore: i64) -> Option<i64> {
    let fits = bore..=bore + ID_TOLERANCE_MM;
    catalog
        .names_containing(FLIGHT_MARKER)
        .iter()
        .filter_map(|name| {
            flight_id_re()
                .captures(name)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<i64>().ok())
        })
        .filter(|id| fits.contains(id))
        .min()
}

/// Catalog name of a flight.
///
/// A missing inner diameter renders as `ID?`, which never matches a stocked
/// flight. Single-turn flights leave the turns slot empty, so the name ends
/// in a space.
pub fn flight_name(od: i64, id: Option<i64>, spec: &FlightSpec, rotation: Rotation) -> String {
    let id = id.map_or_else(|| "?".to_string(), |id| id.to_string());
    format!(
        "Flight - OD{} ID{} P{} T{} {} {}",
        od,
        id,
        spec.pitch,
        spec.thickness,
        rotation.code(),
        spec.turns_suffix()
    )
}
