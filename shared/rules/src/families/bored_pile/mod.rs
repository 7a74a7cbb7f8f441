//! Bored pile augers
//!
//! Every auger carries its drive head, a centre tube cut to length, lead
//! and carrier flights, and a cutting front end chosen by the auger type.
//! Rock and clay augers also pick up base plates, gussets and flight
//! braces depending on the head and diameter.

pub(crate) mod teeth;

use std::sync::OnceLock;

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::bom::parity::{ceil_half, round2};
use forgebom_utils::bom::parser::{self, FlightPitch, FlightSpec, PitchDefaults};
use forgebom_utils::{ForgeError, ForgeResult, RangeTable};

use crate::common::heads::{self, auger_head_height};
use crate::common::{pilots, zed, Rotation};
use crate::common::{auger_flight_od, centre_tube_bore, find_flight_id, flight_name, tube_gusset};
use crate::context::{attribute_enum, RuleContext};

attribute_enum! {
    pub enum AugerType {
        TaperRock => "Taper Rock",
        DualRock => "Dual Rock",
        TriadRock => "Triad Rock",
        Zed25 => "ZED 25mm",
        Zed32 => "ZED 32mm",
        Zed40 => "ZED 40mm",
        Zed50 => "ZED 50mm",
        ClayShale => "Clay/Shale",
        Blade => "Blade",
    }
}

impl AugerType {
    pub fn is_zed(&self) -> bool {
        matches!(self, Self::Zed25 | Self::Zed32 | Self::Zed40 | Self::Zed50)
    }

    /// Rock and clay augers are built on a plated, gusseted head.
    fn has_head_assembly(&self) -> bool {
        !matches!(self, Self::TriadRock | Self::Blade)
    }

    fn has_flight_brace(&self) -> bool {
        matches!(self, Self::TaperRock | Self::DualRock) || self.is_zed()
    }
}

/// Attribute values read by the bored pile rules.
struct AugerSpec<'a> {
    auger: AugerType,
    diameter: i64,
    drive_head: &'a str,
    overall_length: f64,
    flighted_length: f64,
    rotation: Rotation,
    teeth: &'a str,
    pilot: &'a str,
    centre_tube: &'a str,
    lead_od: &'a str,
    lead_pitch: &'a str,
    carrier_od: &'a str,
    carrier_pitch: &'a str,
    override_bom: bool,
}

impl<'a> AugerSpec<'a> {
    fn from_attributes(auger: AugerType, attrs: &'a AttributeSet) -> Self {
        let mm = |name: &str| parser::first_integer(attrs.get(name)).unwrap_or(0);
        Self {
            auger,
            diameter: mm("Auger Diameter"),
            drive_head: attrs.get("Drive Head"),
            overall_length: mm("Overall Length") as f64,
            flighted_length: mm("Flighted Length") as f64,
            rotation: Rotation::from_attribute(attrs.get("Rotation")),
            teeth: attrs.get("Teeth"),
            pilot: attrs.get("Pilot"),
            centre_tube: attrs.get("Centre Tube"),
            lead_od: attrs.get("Lead Flight OD"),
            lead_pitch: attrs.get("Lead Flight Pitch"),
            carrier_od: attrs.get("Carrier Flight OD"),
            carrier_pitch: attrs.get("Carrier Flight Pitch"),
            override_bom: attrs.has("Override BOM"),
        }
    }
}

pub fn derive(attrs: &AttributeSet, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let type_value = attrs.get("Type");
    let Some(auger) = AugerType::parse(type_value) else {
        return ctx.unsupported(ProductFamily::BoredPileAuger, "Type", type_value);
    };

    let spec = AugerSpec::from_attributes(auger, attrs);
    tracing::debug!(auger = %auger, diameter = spec.diameter, "Deriving bored pile auger");

    let flights = lead_and_carrier_flights(&spec, ctx)?;
    let front_end = teeth::front_end(&spec);

    let mut lines = ComponentList::new();
    lines.push(spec.drive_head, 1.0);

    if auger.has_head_assembly() {
        lines.push_opt(heads::stiffening_ring(spec.drive_head, spec.centre_tube), 1.0);
        lines.push_opt(heads::base_plate(spec.drive_head), 1.0);
        lines.push_opt(tube_gusset(spec.drive_head, spec.centre_tube), 1.0);
    }
    if auger.has_flight_brace() {
        if let Some((brace, qty)) = flight_brace(&spec) {
            lines.push(brace, qty);
        }
    }

    let zed_centre = zed::zed_centre(spec.centre_tube);
    let tube_qty = if auger.is_zed() {
        zed_centre_tube_qty(&spec, zed_centre)
    } else {
        centre_tube_qty(&spec, pilots::find_support(&front_end))
    };
    lines.push(spec.centre_tube, tube_qty);
    lines.append(flights);

    if auger.is_zed() {
        lines.push("ZED Auger Teeth Brace", 2.0);
        lines.push_opt(zed_centre, 1.0);
    }
    lines.append(front_end);

    Ok(lines)
}

/// Centre tube metres: overall length less the head, its base plate and
/// the pilot support.
fn centre_tube_qty(spec: &AugerSpec<'_>, pilot_support: Option<&str>) -> f64 {
    let Some(head) = auger_head_height(spec.drive_head, false) else {
        return 0.0;
    };
    let pilot = pilot_support.map(pilots::support_height).unwrap_or(0.0);
    round2((spec.overall_length - head.head - head.base_plate - pilot) / 1000.0)
}

/// ZED augers measure the centre tube to the ZED centre instead of a pilot.
fn zed_centre_tube_qty(spec: &AugerSpec<'_>, centre: Option<&str>) -> f64 {
    let Some(centre_height) = centre.and_then(zed::zed_centre_height) else {
        return 0.0;
    };
    let Some(head) = auger_head_height(spec.drive_head, true) else {
        return 0.0;
    };
    round2((spec.overall_length - head.head - head.base_plate - centre_height) / 1000.0)
}

/// Heads too small to need a flight brace.
const NO_FLIGHT_BRACE: &[&str] = &[
    heads::HEAD_65_ROUND,
    heads::HEAD_65_SQUARE,
    heads::HEAD_75_SQUARE,
    heads::HEAD_100_SQUARE,
    heads::HEAD_110_SQUARE,
    heads::HEAD_4IN_LO_DRILL,
    heads::HEAD_3IN_HEX,
    heads::HEAD_2IN_HEX,
    heads::CUSTOM_HEAD,
];

fn flight_braces() -> &'static RangeTable<&'static str> {
    static TABLE: OnceLock<RangeTable<&'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        RangeTable::from_static(vec![
            (750.0, 900.0, "750mm flight brace 180mm long"),
            (900.0, 1050.0, "900mm Flight brace 230mm long"),
            (1050.0, 1200.0, "1050mm flight brace 280mm long"),
            (1200.0, 1350.0, "1200mm Flight Brace 330mm long"),
            (1350.0, 5000.0, "1350mm+ flight brace 480mm long"),
        ])
    })
}

/// One brace when a carrier flight is specified, otherwise two.
fn flight_brace(spec: &AugerSpec<'_>) -> Option<(&'static str, f64)> {
    if NO_FLIGHT_BRACE.contains(&spec.drive_head) {
        return None;
    }
    let qty = if !spec.carrier_od.is_empty() && !spec.carrier_pitch.is_empty() {
        1.0
    } else {
        2.0
    };
    flight_braces()
        .resolve(spec.diameter as f64)
        .map(|brace| (*brace, qty))
}

/// Flight name for one OD/pitch pair, or an empty name when neither is set.
fn auger_flight(spec: &AugerSpec<'_>, od: &str, pitch: &str, ctx: &RuleContext<'_>) -> String {
    if od.is_empty() && pitch.is_empty() {
        return String::new();
    }
    let bore = centre_tube_bore(spec.centre_tube);
    flight_name(
        auger_flight_od(spec.diameter),
        find_flight_id(ctx.catalog, bore),
        &FlightSpec::parse(pitch),
        spec.rotation,
    )
}

fn lead_and_carrier_flights(
    spec: &AugerSpec<'_>,
    ctx: &RuleContext<'_>,
) -> ForgeResult<ComponentList> {
    let lead = auger_flight(spec, spec.lead_od, spec.lead_pitch, ctx);
    let carrier = auger_flight(spec, spec.carrier_od, spec.carrier_pitch, ctx);

    let lead_stocked = ctx.catalog.exists(&lead);
    let carrier_stocked = ctx.catalog.exists(&carrier);

    if !(lead_stocked && carrier_stocked) && !spec.override_bom {
        let missing = match (lead_stocked, carrier_stocked) {
            (false, false) => "Lead Flight & Carrier Flights",
            (false, true) => "Lead Flight",
            _ => "Carrier Flight",
        };
        return Err(ForgeError::validation(
            "flights",
            format!(
                "Opss! {} is not available, please review the selection or Override BOM.",
                missing
            ),
        ));
    }

    let lead_qty = match spec.auger {
        AugerType::TriadRock if spec.diameter > 650 => 3.0,
        AugerType::TriadRock => 1.0,
        _ => 2.0,
    };
    let carrier_qty = carrier_flight_qty(spec, &lead, &carrier);

    let mut lines = ComponentList::new();
    if lead_stocked {
        lines.push(lead, lead_qty);
    }
    if carrier_stocked {
        lines.push(carrier, carrier_qty);
    }
    Ok(lines)
}

/// Carrier flights needed to cover the flighted length left after the lead
/// flight, rounded up to a half flight.
fn carrier_flight_qty(spec: &AugerSpec<'_>, lead: &str, carrier: &str) -> f64 {
    if lead.is_empty() && carrier.is_empty() {
        return 0.0;
    }

    let lead = FlightPitch::parse(lead, PitchDefaults::BORED_PILE);
    let carrier = FlightPitch::parse(carrier, PitchDefaults::BORED_PILE);
    let per_flight = carrier.length();
    if per_flight == 0.0 {
        tracing::warn!(
            auger = %spec.auger,
            carrier_pitch = carrier.pitch,
            carrier_turns = carrier.turns,
            "Carrier flight has no pitch, quantity set to zero"
        );
        return 0.0;
    }

    let flighted = spec.flighted_length;
    let qty = match spec.auger {
        AugerType::ClayShale | AugerType::Blade => (flighted - lead.length()) / per_flight * 2.0,
        AugerType::TriadRock => (flighted - lead.length() * 0.4) / per_flight,
        _ => (flighted - lead.length()) / per_flight,
    };
    ceil_half(qty)
}
