//! CFA augers
//!
//! Continuous flight augers are built in sections. A lead section carries
//! the cutting front end, intermediates add flighted length, and
//! extensions are plain coupled tube. Every section has a coupling block:
//! the female and male drive halves, an optional base plate, and the centre
//! and inner tubes cut to what the couplings leave of the section length.

mod couplings;
mod flights;
mod teeth;

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::bom::parity::round2;
use forgebom_utils::bom::parser;
use forgebom_utils::ForgeResult;

use crate::common::pilots::{self, Pilot};
use crate::common::{zed, Rotation};
use crate::context::{attribute_enum, RuleContext};

use couplings::Accessories;

attribute_enum! {
    pub enum CfaType {
        Lead => "Lead",
        Intermediate => "Intermediate",
        Extension => "Extension",
    }
}

attribute_enum! {
    /// Cutting arrangement of a lead section.
    pub enum LeadAuger {
        TaperRock => "Taper Rock",
        DualRock => "Dual Rock",
        ClayShale => "Clay/Shale",
        Zed25 => "ZED 25mm",
        Zed32 => "ZED 32mm",
        Zed40 => "ZED 40mm",
        Zed50 => "ZED 50mm",
        SingleCut => "Single Cut",
    }
}

impl LeadAuger {
    pub fn is_zed(&self) -> bool {
        matches!(self, Self::Zed25 | Self::Zed32 | Self::Zed40 | Self::Zed50)
    }
}

/// Section type of a CFA variant, used to pick its routing.
pub fn section_type(attrs: &AttributeSet) -> Option<CfaType> {
    CfaType::parse(attrs.get("Type"))
}

struct CfaSpec<'a> {
    cfa: CfaType,
    lead: Option<LeadAuger>,
    diameter: i64,
    drive_head: &'a str,
    /// Section length in metres.
    length: f64,
    rotation: Rotation,
    teeth: &'a str,
    pilot: &'a str,
    centre_tube: &'a str,
    inner_tube: Option<&'a str>,
    lead_od: &'a str,
    lead_pitch: &'a str,
    carrier_od: &'a str,
    carrier_pitch: &'a str,
    coupling_id: &'a str,
    override_bom: bool,
}

impl<'a> CfaSpec<'a> {
    fn from_attributes(attrs: &'a AttributeSet) -> Option<Self> {
        let cfa = section_type(attrs)?;
        let inner_tube = attrs
            .value("Inner Tube")
            .map(str::trim)
            .filter(|tube| *tube != "-");
        Some(Self {
            cfa,
            lead: LeadAuger::parse(attrs.get("Lead Auger")),
            diameter: parser::first_integer(attrs.get("Auger Diameter")).unwrap_or(0),
            drive_head: attrs.get("CFA Drive Head"),
            length: parser::length_metres(attrs.get("Length")).unwrap_or(0.0),
            rotation: Rotation::from_attribute(attrs.get("Rotation")),
            teeth: attrs.get("Teeth"),
            pilot: attrs.get("Pilot"),
            centre_tube: attrs.get("Centre Tube"),
            inner_tube,
            lead_od: attrs.get("Lead Flight OD"),
            lead_pitch: attrs.get("Lead Flight Pitch"),
            carrier_od: attrs.get("Carrier Flight OD"),
            carrier_pitch: attrs.get("Carrier Flight Pitch"),
            coupling_id: attrs.get("Coupling Flight ID"),
            override_bom: attrs.has("Override BOM"),
        })
    }
}

pub fn derive(attrs: &AttributeSet, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let Some(spec) = CfaSpec::from_attributes(attrs) else {
        return ctx.unsupported(ProductFamily::CfaAuger, "Type", attrs.get("Type"));
    };
    let lead = match (spec.cfa, spec.lead) {
        (CfaType::Lead, None) => {
            let value = attrs.get("Lead Auger");
            return ctx.unsupported(ProductFamily::CfaAuger, "Lead Auger", value);
        }
        (CfaType::Lead, lead) => lead,
        _ => None,
    };
    tracing::debug!(
        section = %spec.cfa,
        lead = ?lead,
        diameter = spec.diameter,
        drive_head = spec.drive_head,
        "Deriving CFA auger"
    );

    let accessories = couplings::accessories(spec.centre_tube, spec.inner_tube);
    let mut lines = ComponentList::new();

    let Some(lead) = lead else {
        lines.append(coupling_block(&spec, None, accessories.as_ref(), None));
        if spec.cfa == CfaType::Intermediate {
            lines.append(flights::flights(&spec, ctx)?);
        }
        if let Some((ring, qty)) = accessories.and_then(|a| a.spacer_ring) {
            lines.push(ring, qty);
        }
        return Ok(lines);
    };

    let zed_centre = if lead.is_zed() {
        zed::zed_centre(spec.centre_tube)
    } else {
        None
    };
    lines.append(coupling_block(&spec, Some(lead), accessories.as_ref(), zed_centre));
    lines.append(flights::flights(&spec, ctx)?);
    lines.append(teeth::front_end(&spec, lead));
    if let Some(accessories) = &accessories {
        lines.append(accessories.lines());
    }

    if lead.is_zed() {
        lines.push_opt(zed_centre, 1.0);
        lines.push(zed::flight_stiffener(spec.diameter), 2.0);
    }
    if lead == LeadAuger::SingleCut {
        let tube_od = parser::outer_diameter(spec.centre_tube)
            .map(|od| (od as i64).to_string())
            .unwrap_or_default();
        lines.push(
            format!(
                "Profiling - CFA Single Cut {}mm Diameter x Flight - OD280 ID{} P330 T32 RH",
                spec.diameter, tube_od
            ),
            1.0,
        );
    }
    Ok(lines)
}

/// Drive halves, base plate and the tubes cut to fit between them.
///
/// A lead section has no male half; its tubes stop at the pilot support,
/// or at the ZED centre on ZED leads. The inner tube also stops at the
/// elbow and runs into the coupling slots.
fn coupling_block(
    spec: &CfaSpec<'_>,
    lead: Option<LeadAuger>,
    accessories: Option<&Accessories>,
    zed_centre: Option<&str>,
) -> ComponentList {
    let metres = |mm: f64| mm / 1000.0;
    let female = couplings::female(spec.drive_head);
    let male = couplings::male(spec.drive_head);
    let plate = couplings::base_plate(spec.drive_head);

    let (female_height, female_slot) = female
        .as_ref()
        .map_or((0.0, 0.0), |f| (metres(f.height), metres(f.slot)));
    let (male_height, male_slot) = male
        .as_ref()
        .map_or((0.0, 0.0), |m| (metres(m.height), metres(m.slot)));
    let base_plate = plate.map_or(0.0, |(_, thickness)| metres(thickness));
    let elbow = accessories.map_or(0.0, |a| metres(couplings::elbow_height(a.elbow)));
    let extension = match accessories.and_then(|a| a.pipe_extension) {
        Some(_) => couplings::PIPE_EXTENSION_M,
        None => 0.0,
    };

    let l = spec.length;
    let (centre_qty, inner_qty) = match (spec.cfa, lead) {
        (CfaType::Lead, Some(lead)) => {
            let stop = if lead.is_zed() {
                metres(zed_centre.and_then(zed::zed_centre_height).unwrap_or(0.0))
            } else {
                let support = Pilot::parse(spec.pilot)
                    .map_or(pilots::SUPPORT_100_SQUARE, |pilot| pilot.support());
                metres(pilots::support_height(support))
            };
            (
                l - female_height - stop - base_plate - extension,
                l - female_height - stop - elbow - base_plate + female_slot,
            )
        }
        (CfaType::Extension, _) => (
            l - female_height - male_height,
            l - female_height - male_height + female_slot + male_slot,
        ),
        _ => (
            l - female_height - male_height - base_plate,
            l - female_height - male_height - base_plate + female_slot + male_slot,
        ),
    };

    let mut lines = ComponentList::new();
    lines.push_opt(female.map(|f| f.name), 1.0);
    if spec.cfa != CfaType::Lead {
        lines.push_opt(male.map(|m| m.name), 1.0);
    }
    lines.push_opt(plate.map(|(name, _)| name), 1.0);
    lines.push(spec.centre_tube, round2(centre_qty.abs()));
    lines.push_opt(spec.inner_tube, round2(inner_qty.abs()));
    lines
}
