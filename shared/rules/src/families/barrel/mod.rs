//! Drilling barrels and cleaning buckets
//!
//! Both are rolled barrels hung from a square drive head on a hinged base.
//! The opening type decides how the base is held shut: a locking handle, a
//! sprung plunger, or both. Drilling barrels also carry a cutting front end.

mod cleaning;
mod drilling;
mod hinges;

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::bom::parity::round_to_nearest_even;
use forgebom_utils::bom::parser;
use forgebom_utils::ForgeResult;

use crate::common::barrel_heads::{Duty, HeadClass, SquareHead};
use crate::context::{attribute_enum, RuleContext};

attribute_enum! {
    pub enum OpeningType {
        Handle => "Handle",
        Plunger => "Plunger",
        PlungerHandle => "Plunger & Handle",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BarrelKind {
    Drilling,
    Cleaning,
}

impl BarrelKind {
    fn family(&self) -> ProductFamily {
        match self {
            Self::Drilling => ProductFamily::DrillingBarrel,
            Self::Cleaning => ProductFamily::CleaningBucket,
        }
    }

    /// Wall allowance taken off the diameter before measuring around it.
    fn wall_allowance(&self) -> f64 {
        match self {
            Self::Drilling => 40.0,
            Self::Cleaning => 30.0,
        }
    }
}

/// Attribute values read by the barrel rules.
pub(crate) struct BarrelSpec<'a> {
    kind: BarrelKind,
    opening: OpeningType,
    duty: Duty,
    head: Option<SquareHead>,
    diameter: i64,
    diameter_value: &'a str,
    height: i64,
    height_value: &'a str,
    blades: &'a str,
    customization: &'a str,
    front_end: &'a str,
    teeth: &'a str,
}

impl<'a> BarrelSpec<'a> {
    fn from_attributes(
        kind: BarrelKind,
        opening: OpeningType,
        duty: Duty,
        attrs: &'a AttributeSet,
    ) -> Self {
        Self {
            kind,
            opening,
            duty,
            head: SquareHead::parse(attrs.get("Drive Head")),
            diameter: parser::first_integer(attrs.get("Diameter")).unwrap_or(0),
            diameter_value: attrs.get("Diameter"),
            height: parser::first_integer(attrs.get("Barrel Height")).unwrap_or(0),
            height_value: attrs.get("Barrel Height"),
            blades: attrs.get("No. of Blade"),
            customization: attrs.get("Customization"),
            front_end: attrs.get("Front End"),
            teeth: attrs.get("Teeth"),
        }
    }

    fn head_class(&self) -> Option<HeadClass> {
        self.head.map(|head| head.class())
    }

    fn dual_blade(&self) -> bool {
        self.blades == "Dual Blade"
    }
}

pub fn derive_drilling_barrel(
    attrs: &AttributeSet,
    ctx: &RuleContext<'_>,
) -> ForgeResult<ComponentList> {
    derive(BarrelKind::Drilling, attrs, ctx)
}

pub fn derive_cleaning_bucket(
    attrs: &AttributeSet,
    ctx: &RuleContext<'_>,
) -> ForgeResult<ComponentList> {
    derive(BarrelKind::Cleaning, attrs, ctx)
}

fn derive(kind: BarrelKind, attrs: &AttributeSet, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let opening_value = attrs.get("Opening Type");
    let Some(opening) = OpeningType::parse(opening_value) else {
        return ctx.unsupported(kind.family(), "Opening Type", opening_value);
    };
    let duty_value = attrs.get("Type");
    let Some(duty) = Duty::parse(duty_value) else {
        return ctx.unsupported(kind.family(), "Type", duty_value);
    };

    let spec = BarrelSpec::from_attributes(kind, opening, duty, attrs);
    tracing::debug!(
        family = %kind.family(),
        opening = %opening,
        duty = %duty,
        diameter = spec.diameter,
        "Deriving barrel"
    );

    let mut lines = ComponentList::new();
    lines.push(profiling(&spec), 1.0);
    lines.push_opt(gusset(&spec), 4.0);
    if let Some(head) = spec.head {
        lines.push_opt(head.drive_head(), 1.0);
        if let Some((ears, qty)) = head.ears() {
            lines.push(ears, qty);
        }
    }
    let pivot_kit = match kind {
        BarrelKind::Drilling => drilling::pivot_kit(&spec),
        BarrelKind::Cleaning => cleaning::pivot_kit(&spec),
    };
    lines.push_opt(pivot_kit, 1.0);

    match opening {
        OpeningType::Handle => {
            lines.append(handle_hinge(&spec));
            lines.push(arrow_head(spec.diameter), 1.0);
        }
        OpeningType::Plunger => lines.append(plunger(&spec)),
        OpeningType::PlungerHandle => {
            lines.append(handle_hinge(&spec));
            lines.push(arrow_head(spec.diameter), 1.0);
            lines.push_opt(plunger_bar(&spec), 1.0);
            lines.push(PLUNGER_BUSH, 1.0);
            lines.push(PLUNGER_SPRING, 1.0);
            lines.push(PLUNGER_END_CAP, 1.0);
        }
    }

    lines.push("Barrel Wear Pads", wear_pads(&spec));
    lines.append(channels(&spec));

    if kind == BarrelKind::Drilling {
        lines.append(drilling::front_end(&spec, pivot_kit));
    }
    Ok(lines)
}

/// Profiling line naming the variant and the plate group it is cut from.
fn profiling(spec: &BarrelSpec<'_>) -> String {
    let mut fields = vec![spec.opening.as_str(), spec.blades, spec.customization];
    if spec.kind == BarrelKind::Drilling {
        fields.push(spec.front_end);
        fields.push(spec.teeth);
    }

    let mut name = format!(
        "Profiling - {} {} x {} - {}",
        spec.kind.family().template_name(),
        spec.diameter_value,
        spec.height_value,
        fields.join(" - ")
    );
    if let Some(combination) = spec.head.and_then(|head| head.duty_combination(spec.duty)) {
        name.push_str(" - ");
        name.push_str(&combination);
    }
    name
}

fn gusset(spec: &BarrelSpec<'_>) -> Option<String> {
    let head = spec.head?;
    let name = format!("Gusset {} x {}mm Diameter", head.gusset_label(), spec.diameter);
    Some(match head {
        SquareHead::Custom => name,
        _ => format!("{} - Clean & Drill Barrel", name),
    })
}

fn handle_hinge(spec: &BarrelSpec<'_>) -> ComponentList {
    let mut lines = ComponentList::new();
    let Some((hinge, handle)) = hinges::handle_hinge(spec.kind, spec.diameter) else {
        return lines;
    };
    lines.push(hinge.knuckle, 1.0);
    lines.push(hinge.bush, 2.0);
    if let Some((pin, metres)) = hinges::handle_pin(spec.kind, spec.diameter) {
        lines.push(pin, metres);
    }
    lines.push(handle.bar, handle_bar_qty(spec));
    lines.push(handle.outer_washer, 3.0);
    lines.push(handle.inner_washer, 3.0);
    lines
}

/// Handle bar metres: the barrel height plus the reach past the hinge.
fn handle_bar_qty(spec: &BarrelSpec<'_>) -> f64 {
    let d = spec.diameter;
    let (from_350, from_400, other) = match spec.opening {
        OpeningType::PlungerHandle => (0.235, 0.27, 0.1),
        _ => (0.635, 0.67, 0.5),
    };
    let reach = if (350..400).contains(&d) {
        from_350
    } else if (400..500).contains(&d) {
        from_400
    } else {
        other
    };
    spec.height as f64 / 1000.0 + reach
}

fn arrow_head(diameter: i64) -> &'static str {
    if diameter < 350 {
        "Arrow Head - Small"
    } else if diameter < 1600 {
        "Arrow Head - Medium"
    } else {
        "Arrow Head - Large"
    }
}

const PLUNGER_BUSH: &str = "Plunger Bush - 110mm OD 75mm ID - 100mm long";
const PLUNGER_SPRING: &str = "Plunger Spring";
const PLUNGER_END_CAP: &str = "Plunger End Cap";

/// Plunger barrels double the plunger from 1850mm.
fn plunger(spec: &BarrelSpec<'_>) -> ComponentList {
    let mut lines = ComponentList::new();
    if let Some(hinge) = hinges::plunger_hinge(spec.kind, spec.diameter) {
        lines.push(hinge.knuckle, 1.0);
        lines.push(hinge.bush, 2.0);
    }
    if let Some((pin, metres)) = hinges::plunger_pin(spec.kind, spec.diameter) {
        lines.push(pin, metres);
    }

    let plungers = if spec.diameter < 1850 { 1.0 } else { 2.0 };
    lines.push_opt(plunger_bar(spec), plungers);
    lines.push(PLUNGER_BUSH, plungers);
    lines.push(PLUNGER_SPRING, plungers);
    lines.push(PLUNGER_END_CAP, plungers);
    lines.push("Hex Bolt - M30 x 130mm GR10.9", 3.0 * plungers);
    lines.push("Nut - M30 Coneloc", 3.0 * plungers);
    lines
}

fn plunger_bar(spec: &BarrelSpec<'_>) -> Option<&'static str> {
    let long = spec.diameter >= 900;
    let length = match (spec.head?, spec.head_class()?) {
        (_, HeadClass::Small) => 550,
        (_, HeadClass::Medium) if long => 650,
        (SquareHead::Mait200, _) if !long => 550,
        (_, HeadClass::Medium) => 550,
        (SquareHead::Bauer200, _) if !long => 650,
        (_, HeadClass::Large) => 750,
        (_, HeadClass::Custom) if !long => 650,
        (_, HeadClass::Custom) => return None,
    };
    Some(match length {
        550 => "Plunger Bars - 550mm Tongue & grooved one end + M24 thread",
        650 => "Plunger Bars - 650mm Tongue & grooved one end + M24 thread",
        _ => "Plunger Bars - 750mm Tongue & grooved one end + M24 thread",
    })
}

/// Wear pads spaced around both edges, kept to an even count.
fn wear_pads(spec: &BarrelSpec<'_>) -> f64 {
    let circumference = (spec.diameter as f64 - spec.kind.wall_allowance()) * 3.142;
    round_to_nearest_even(circumference * 2.0 / 200.0) as f64
}

/// Parallel flange channel bracing for barrels of 2000mm and over.
fn channels(spec: &BarrelSpec<'_>) -> ComponentList {
    let d = spec.diameter as f64;
    let mut lines = ComponentList::new();
    if spec.diameter < 2000 {
        return lines;
    }
    lines.push(
        "200mm PFC - Parallel Flange Channel",
        ((d - spec.kind.wall_allowance()) * 2.0 - 300.0) / 1000.0,
    );
    let cross = if spec.diameter < 2500 {
        "250mm PFC - Parallel Flange Channel"
    } else {
        "300mm PFC - Parallel Flange Channel"
    };
    lines.push(cross, (d - 240.0) / 1000.0);
    lines
}
