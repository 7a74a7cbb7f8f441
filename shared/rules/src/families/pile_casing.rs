//! Pile casing stock
//!
//! A rolled permanent casing, optionally banded at the top (drive band) and
//! bottom (shoe). Bands come either as profiled plate or as flat bar rolled
//! to the casing; flat bar is measured around the circle it sits on.

use std::f64::consts::PI;

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::bom::parity::round2;
use forgebom_utils::bom::parser::{self, FlatBarSize};
use forgebom_utils::{ForgeError, ForgeResult};

use crate::context::{attribute_enum, RuleContext};

pub const CASING_TEETH: &str = "BFZ318TB - Weld on Casing teeth";

attribute_enum! {
    pub enum CasingType {
        Standard => "Standard",
        Segmental => "Segmental",
    }
}

attribute_enum! {
    /// What to do when the derived casing is not a stocked product.
    pub enum MissingCasing {
        NonStocked => "Permanent Casing - Non-Stocked",
        ProceedWithout => "Proceed without Casing",
    }
}

/// Band attributes that, when any is set, put the casing through rolling.
pub const BAND_ATTRIBUTES: [&str; 6] = [
    "1) Drive Band Size",
    "Drive Band Type (A)",
    "Drive Band Type (B)",
    "2) Shoe Size",
    "Shoe Type (A)",
    "Shoe Type (B)",
];

/// True when the casing carries a drive band or shoe.
pub fn has_band(attrs: &AttributeSet) -> bool {
    BAND_ATTRIBUTES.iter().any(|name| attrs.has(name))
}

/// Circle a flat bar band is rolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    /// Inside the casing bore.
    Inside,
    /// Flush with the casing outside.
    Outside,
    /// Lapped over the casing outside with a 3mm gap.
    Overlap,
}

struct CasingSpec<'a> {
    casing_type: CasingType,
    inside_diameter: f64,
    wall_thickness: f64,
    diameter_value: &'a str,
    wall_value: &'a str,
    segment: &'a str,
    length: f64,
    band_size: &'a str,
    band_type_a: &'a str,
    band_type_b: &'a str,
    shoe_size: &'a str,
    shoe_type_a: &'a str,
    shoe_type_b: &'a str,
    lock_type: &'a str,
    lift_holes: &'a str,
    teeth: bool,
    teeth_qty: f64,
}

impl<'a> CasingSpec<'a> {
    fn from_attributes(casing_type: CasingType, attrs: &'a AttributeSet) -> Self {
        Self {
            casing_type,
            inside_diameter: parser::first_number(attrs.get("Inside Diameter")).unwrap_or(0.0),
            wall_thickness: parser::first_number(attrs.get("Wall Thickness")).unwrap_or(0.0),
            diameter_value: attrs.get("Inside Diameter"),
            wall_value: attrs.get("Wall Thickness"),
            segment: attrs.get("Segment"),
            length: parser::first_number(attrs.get("Casing Length")).unwrap_or(0.0),
            band_size: attrs.get("1) Drive Band Size"),
            band_type_a: attrs.get("Drive Band Type (A)"),
            band_type_b: attrs.get("Drive Band Type (B)"),
            shoe_size: attrs.get("2) Shoe Size"),
            shoe_type_a: attrs.get("Shoe Type (A)"),
            shoe_type_b: attrs.get("Shoe Type (B)"),
            lock_type: attrs.get("Lock Type"),
            lift_holes: attrs.get("Lift Holes"),
            teeth: attrs.has("Teeth"),
            teeth_qty: parser::first_integer(attrs.get("No. of Teeth")).unwrap_or(0) as f64,
        }
    }

    fn band_profiled(&self) -> bool {
        self.band_type_b == "Profiled Drive Band"
    }

    fn shoe_profiled(&self) -> bool {
        self.shoe_type_b == "Profiled Casing Shoe"
    }

    fn band_alignment(&self) -> Alignment {
        if self.band_type_a == "ID Aligned Drive Band" {
            Alignment::Inside
        } else {
            Alignment::Overlap
        }
    }

    fn shoe_alignment(&self) -> Alignment {
        if self.shoe_type_a == "ID Aligned Casing Shoe" {
            Alignment::Inside
        } else {
            Alignment::Outside
        }
    }

    /// Metres of flat bar for a band of the given size.
    fn flat_bar_metres(&self, alignment: Alignment, size: &FlatBarSize) -> f64 {
        let id = self.inside_diameter;
        let wt = self.wall_thickness;
        let t = size.thickness;
        let circle = match alignment {
            Alignment::Inside => id + t,
            Alignment::Outside => id + 2.0 * wt - t,
            Alignment::Overlap => id + 2.0 * wt + 6.0 + t,
        };
        round2(circle * PI / 1000.0)
    }

    fn profiling(&self, parts: &[&str]) -> String {
        let parts: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
        format!("Profiling - {} {}", ProductFamily::PileCasing.template_name(), parts.join(", "))
    }
}

/// Stocked casing name: outside diameter from the bore and two walls.
pub fn permanent_casing(inside_diameter: &str, wall_thickness: &str) -> String {
    let id = parser::mm_number(inside_diameter).unwrap_or(0.0).trunc();
    let wall = parser::mm_number(wall_thickness).unwrap_or(0.0);
    format!(
        "Permanent Casing - OD{} WT{}",
        (id + 2.0 * wall) as i64,
        parser::format_number(wall)
    )
}

pub fn derive(attrs: &AttributeSet, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let type_value = attrs.get("Casing Type");
    let Some(casing_type) = CasingType::parse(type_value) else {
        return ctx.unsupported(ProductFamily::PileCasing, "Casing Type", type_value);
    };
    let spec = CasingSpec::from_attributes(casing_type, attrs);
    tracing::debug!(
        casing_type = %casing_type,
        diameter = spec.inside_diameter,
        "Deriving pile casing"
    );

    let casing = casing_line(&spec, attrs.get("Not Available Casing?"), ctx)?;

    let mut lines = ComponentList::new();
    lines.push_opt(casing, spec.length);
    let band = parser::flat_bar_size(spec.band_size);
    let shoe = parser::flat_bar_size(spec.shoe_size);

    match (spec.band_profiled(), spec.shoe_profiled()) {
        (true, false) => {
            lines.push(
                spec.profiling(&[
                    spec.casing_type.as_str(),
                    spec.segment,
                    spec.diameter_value,
                    spec.wall_value,
                    spec.band_size,
                    spec.band_type_a,
                    spec.lock_type,
                    spec.lift_holes,
                ]),
                1.0,
            );
            if let Some(shoe) = shoe {
                lines.push(shoe.label(), spec.flat_bar_metres(spec.shoe_alignment(), &shoe));
            }
        }
        (false, true) => {
            if let Some(band) = band {
                lines.push(band.label(), spec.flat_bar_metres(spec.band_alignment(), &band));
            }
            lines.push(
                spec.profiling(&[
                    spec.casing_type.as_str(),
                    spec.segment,
                    spec.diameter_value,
                    spec.wall_value,
                    spec.shoe_size,
                    spec.shoe_type_a,
                ]),
                1.0,
            );
        }
        (true, true) => {
            lines.push(
                spec.profiling(&[
                    spec.casing_type.as_str(),
                    spec.segment,
                    spec.diameter_value,
                    spec.wall_value,
                    spec.band_size,
                    spec.band_type_a,
                    spec.shoe_size,
                    spec.shoe_type_a,
                    spec.lock_type,
                    spec.lift_holes,
                ]),
                1.0,
            );
        }
        (false, false) => lines.append(flat_bars(&spec, band, shoe)),
    }

    if spec.teeth {
        lines.push(CASING_TEETH, spec.teeth_qty);
    }
    Ok(lines)
}

/// Casing line after the stock check. Unstocked casings need an explicit
/// choice in "Not Available Casing?".
fn casing_line(
    spec: &CasingSpec<'_>,
    missing_value: &str,
    ctx: &RuleContext<'_>,
) -> ForgeResult<Option<String>> {
    let casing = permanent_casing(spec.diameter_value, spec.wall_value);
    if ctx.catalog.exists(&casing) {
        return Ok(Some(casing));
    }

    match MissingCasing::parse(missing_value) {
        Some(MissingCasing::NonStocked) => Ok(Some(format!("{} - Non-Stocked", casing))),
        Some(MissingCasing::ProceedWithout) => Ok(None),
        None => {
            tracing::warn!(casing = %casing, "Permanent casing not stocked");
            Err(ForgeError::validation(
                "Not Available Casing?",
                format!(
                    "Oops! The '{}' is not available.\nPlease select the available casing \
                     attributes to proceed with BOM creation.",
                    casing
                ),
            ))
        }
    }
}

/// Flat bar bands. A drive band and shoe cut from the same bar share a line.
fn flat_bars(
    spec: &CasingSpec<'_>,
    band: Option<FlatBarSize>,
    shoe: Option<FlatBarSize>,
) -> ComponentList {
    let band = band.map(|size| (size, spec.flat_bar_metres(spec.band_alignment(), &size)));
    let shoe = shoe.map(|size| (size, spec.flat_bar_metres(spec.shoe_alignment(), &size)));

    let mut lines = ComponentList::new();
    match (band, shoe) {
        (Some((band, band_qty)), Some((shoe, shoe_qty))) if band == shoe => {
            lines.push(band.label(), band_qty + shoe_qty);
        }
        (band, shoe) => {
            for (size, qty) in band.into_iter().chain(shoe) {
                lines.push(size.label(), qty);
            }
        }
    }
    lines
}
