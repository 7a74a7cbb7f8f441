//! CFA lead, carrier and coupling flights
//!
//! All three flights must be stocked. Setting "Override BOM" accepts a
//! missing flight but then leaves every flight off the BOM.

use forgebom_models::ComponentList;
use forgebom_utils::bom::parity::{ceil_half, floor_half};
use forgebom_utils::bom::parser::{self, FlightPitch, FlightSpec, PitchDefaults};
use forgebom_utils::{ForgeError, ForgeResult};

use super::{couplings, CfaSpec, CfaType, LeadAuger};
use crate::common::flight_name;
use crate::context::RuleContext;

/// Flight name from an OD attribute and a pitch attribute. The inner
/// diameter is the OD of `bore`, or for coupling flights its ID when given.
fn cfa_flight(spec: &CfaSpec<'_>, od: &str, pitch: &str, bore: &str, coupling: bool) -> String {
    if od.is_empty() && pitch.is_empty() {
        return String::new();
    }
    if coupling && bore.is_empty() {
        return String::new();
    }
    let Some(od) = parser::outer_diameter(od) else {
        return String::new();
    };

    let id = if coupling {
        parser::inner_diameter(bore).or_else(|| parser::outer_diameter(bore))
    } else {
        parser::outer_diameter(bore)
    };
    flight_name(
        od as i64,
        id.map(|id| id as i64),
        &FlightSpec::parse(pitch),
        spec.rotation,
    )
}

fn missing_flights(lead: bool, carrier: bool, coupling: bool) -> Option<&'static str> {
    let missing = match (lead, carrier, coupling) {
        (false, false, _) => "Lead & Carrier Flights",
        (false, _, false) => "Lead & Coupling Flights",
        (_, false, false) => "Carrier & Coupling Flights",
        (false, _, _) => "Lead Flight",
        (_, false, _) => "Carrier Flight",
        (_, _, false) => "Coupling Flight",
        _ => return None,
    };
    Some(missing)
}

pub(super) fn flights(spec: &CfaSpec<'_>, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let lead = cfa_flight(spec, spec.lead_od, spec.lead_pitch, spec.centre_tube, false);
    let carrier = cfa_flight(spec, spec.carrier_od, spec.carrier_pitch, spec.centre_tube, false);
    let coupling = cfa_flight(spec, spec.lead_od, spec.lead_pitch, spec.coupling_id, true);

    let missing = missing_flights(
        ctx.catalog.exists(&lead),
        ctx.catalog.exists(&carrier),
        ctx.catalog.exists(&coupling),
    );
    if let Some(missing) = missing {
        if !spec.override_bom {
            return Err(ForgeError::validation(
                "flights",
                format!(
                    "Oops! {} is not available. Please review the selection or override the BOM.",
                    missing
                ),
            ));
        }
        tracing::info!(missing, "Flights not stocked, BOM overridden");
    }
    if spec.override_bom {
        return Ok(ComponentList::new());
    }

    let coupling_qty = coupling_flight_qty(spec, &coupling);
    let carrier_qty = carrier_flight_qty(spec, &lead, &carrier, coupling_qty);

    let mut lines = ComponentList::new();
    lines.push(lead, lead_flight_qty(spec));
    lines.push(carrier, carrier_qty.abs());
    lines.push(coupling, coupling_qty.abs());
    Ok(lines)
}

fn lead_flight_qty(spec: &CfaSpec<'_>) -> f64 {
    match (spec.cfa, spec.lead) {
        (CfaType::Lead, Some(LeadAuger::ClayShale | LeadAuger::SingleCut)) => 1.0,
        _ => 2.0,
    }
}

/// Coupling flights that fit inside the female coupling height, rounded
/// down to a half flight.
fn coupling_flight_qty(spec: &CfaSpec<'_>, coupling: &str) -> f64 {
    if coupling.is_empty() {
        return 0.0;
    }
    let female_height = couplings::female(spec.drive_head).map_or(0.0, |f| f.height);
    let pitch = FlightPitch::parse(coupling, PitchDefaults::CFA);
    if pitch.length() == 0.0 {
        tracing::warn!(coupling, "Coupling flight has no pitch, quantity set to zero");
        return 0.0;
    }
    floor_half(female_height / pitch.length())
}

/// Carrier flights covering the section length, less the lead flight on a
/// lead section and less the coupling flights, rounded up to a half.
fn carrier_flight_qty(spec: &CfaSpec<'_>, lead: &str, carrier: &str, coupling_qty: f64) -> f64 {
    let lead = FlightPitch::parse(lead, PitchDefaults::CFA);
    let carrier_pitch = FlightPitch::parse(carrier, PitchDefaults::CFA);
    let per_flight = carrier_pitch.length() / 1000.0;
    if per_flight == 0.0 {
        tracing::warn!(
            carrier_pitch = carrier_pitch.pitch,
            carrier_turns = carrier_pitch.turns,
            "Carrier flight has no pitch, quantity set to zero"
        );
        return 0.0;
    }

    let covered = match spec.cfa {
        CfaType::Lead => spec.length - lead.length() / 1000.0,
        CfaType::Intermediate => spec.length,
        CfaType::Extension => return 0.0,
    };
    ceil_half(covered / per_flight - coupling_qty)
}
