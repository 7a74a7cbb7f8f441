//! Extension bars
//!
//! A bar is a centre tube between a female drive head and a male stub.
//! Rigid bars can instead end in a second female head (female to female)
//! or a second stub (male to male), and an adaptor swaps the stub for
//! another drive size.

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::bom::parity::round2;
use forgebom_utils::bom::parser;
use forgebom_utils::ForgeResult;

use crate::common::heads::{self, listed_base_plate};
use crate::common::{leading_mm, lift_lug, tube_gusset};
use crate::context::{attribute_enum, RuleContext};

attribute_enum! {
    pub enum BarType {
        TelescopicInner => "Telescopic Inner",
        TelescopicOuter => "Telescopic Outer",
        Rigid => "Rigid",
    }
}

/// A square drive with its head, stub and heights in mm.
#[derive(Debug)]
struct SquareDrive {
    label: &'static str,
    head: &'static str,
    stub: &'static str,
    head_mm: f64,
    plate_mm: f64,
    stub_mm: f64,
}

impl SquareDrive {
    fn size(&self) -> f64 {
        leading_mm(self.label)
    }

    fn plate(&self) -> Option<&'static str> {
        listed_base_plate(self.head)
    }
}

macro_rules! square_drive {
    ($label:literal, $head:expr, $stub:literal, [$h:literal, $p:literal, $s:literal]) => {
        SquareDrive {
            label: $label,
            head: $head,
            stub: $stub,
            head_mm: $h,
            plate_mm: $p,
            stub_mm: $s,
        }
    };
}

const DRIVES: &[SquareDrive] = &[
    square_drive!("75mm Square Drive", heads::HEAD_75_SQUARE, "75mm Square Extension Bar Stubb", [150.0, 0.0, 40.0]),
    square_drive!("100mm Square Drive", heads::HEAD_100_SQUARE, "100mm square Stubb", [175.0, 25.0, 50.0]),
    square_drive!("110mm Square Drive", heads::HEAD_110_SQUARE, "110mm Drive Stubb", [240.0, 25.0, 40.0]),
    square_drive!("130mm Square Drive", heads::HEAD_130_SQUARE, "130mm Stubb", [260.0, 32.0, 40.0]),
    square_drive!("130mm Square Digga Drive", heads::HEAD_130_DIGGA, "130mm Stubb - Digga", [260.0, 32.0, 40.0]),
    square_drive!("150mm Square Drive", heads::HEAD_150_SQUARE, "150mm Drive Stub", [260.0, 32.0, 60.0]),
    square_drive!("150mm Square IMT Drive", heads::HEAD_150_IMT, "150mm IMT Stub", [260.0, 32.0, 60.0]),
    square_drive!("200mm Square Bauer Drive", heads::HEAD_200_BAUER, "200mm Bauer Drive Stubb", [457.0, 32.0, 60.0]),
    square_drive!("200mm Square MAIT Drive", heads::HEAD_200_MAIT, "200mm MAIT Square Stub", [345.0, 32.0, 60.0]),
];

fn drive(label: &str) -> Option<&'static SquareDrive> {
    let label = label.trim();
    DRIVES.iter().find(|d| d.label == label)
}

/// Drive named by a "to <drive> (<suffix>)" option.
fn far_end(value: &str, suffix: &str) -> Option<&'static SquareDrive> {
    let label = value.trim().strip_prefix("to ")?.strip_suffix(suffix)?;
    drive(label)
}

/// Stub named by an "Adaptor" option such as "to 100mm Square Stub".
fn adaptor_stub(value: &str) -> Option<&'static str> {
    let label = value.trim().strip_prefix("to ")?.replace("Stub", "Drive");
    drive(&label).map(|d| d.stub)
}

fn collar(centre_tube: &str) -> Option<&'static str> {
    match centre_tube.trim() {
        "4140 75mm square billet" => Some("Extension Bar Collar - 75mm"),
        "4140 100mm square billet" => Some("Extension Bar Collar - 100mm"),
        _ => None,
    }
}

struct BarSpec<'a> {
    kind: BarType,
    drive: Option<&'static SquareDrive>,
    adaptor: Option<&'a str>,
    female: Option<&'static SquareDrive>,
    male: Option<&'static SquareDrive>,
    centre_tube: &'a str,
    length: f64,
}

impl<'a> BarSpec<'a> {
    fn from_attributes(kind: BarType, attrs: &'a AttributeSet) -> Self {
        Self {
            kind,
            drive: drive(attrs.get("Drive")),
            adaptor: attrs.value("Adaptor"),
            female: far_end(attrs.get("Female to Female"), " (Female to Female)"),
            male: far_end(attrs.get("Male to Male"), " (Male to Male)"),
            centre_tube: attrs.get("Centre Tube"),
            length: parser::length_metres(attrs.get("Length")).unwrap_or(0.0),
        }
    }

    fn head(&self) -> Option<&'static str> {
        self.drive.map(|d| d.head)
    }

    fn female_head(&self) -> Option<&'static str> {
        self.female.map(|f| f.head)
    }

    /// Female end with a different size from the drive.
    fn female_resized(&self) -> bool {
        self.female.map_or(0.0, SquareDrive::size) != self.drive.map_or(0.0, SquareDrive::size)
    }

    /// Centre tube metres: the length less the heights of whatever is
    /// welded to each end.
    fn tube_metres(&self) -> f64 {
        let (head, plate, stub) = self
            .drive
            .map_or((0.0, 0.0, 0.0), |d| (d.head_mm, d.plate_mm, d.stub_mm));
        let fitted_mm = match self.kind {
            BarType::TelescopicInner => head,
            BarType::TelescopicOuter => head + stub,
            BarType::Rigid => match (self.female, self.male) {
                (Some(female), None) => head + female.head_mm + plate + female.plate_mm,
                (None, Some(male)) => stub + male.stub_mm,
                _ => head + stub + plate,
            },
        };
        round2(self.length - fitted_mm / 1000.0)
    }
}

/// Centre tube, then for rigid bars the plates, second head and second
/// stub, then the stub on the male end.
fn tube_and_ends(spec: &BarSpec<'_>) -> ComponentList {
    let mut lines = ComponentList::new();
    lines.push(spec.centre_tube, spec.tube_metres());

    let mut stub_qty = if spec.male.is_some() { 2.0 } else { 1.0 };
    if spec.kind == BarType::Rigid {
        let mut plate_qty = if spec.female.is_some() { 2.0 } else { 1.0 };
        if spec.male.is_none() {
            if let Some(female) = spec.female.filter(|_| spec.female_resized()) {
                lines.push_opt(female.plate(), 1.0);
                plate_qty = 1.0;
            }
            lines.push_opt(spec.drive.and_then(SquareDrive::plate), plate_qty);
            if spec.female.is_some() && spec.head() != spec.female_head() {
                lines.push_opt(spec.female_head(), 1.0);
            }
        }
        if let Some(male) = spec.male.filter(|m| spec.head() != Some(m.head)) {
            stub_qty = 1.0;
            lines.push(male.stub, 1.0);
        }
    }

    if spec.kind != BarType::TelescopicInner && spec.female.is_none() {
        match spec.adaptor {
            Some(adaptor) => lines.push_opt(adaptor_stub(adaptor), 1.0),
            None => lines.push_opt(spec.drive.map(|d| d.stub), stub_qty),
        }
    }
    lines
}

fn rigid(spec: &BarSpec<'_>, attrs: &AttributeSet) -> ComponentList {
    let same_heads = spec.female.is_some() && spec.head() == spec.female_head();

    let mut lines = ComponentList::new();
    if spec.male.is_none() {
        lines.push_opt(spec.head(), if same_heads { 2.0 } else { 1.0 });
    }
    lines.append(tube_and_ends(spec));
    if let Some((lug, qty)) = lift_lug(attrs) {
        lines.push(lug, qty);
    }

    if spec.male.is_none() {
        let single = spec.female.is_none()
            || (spec.head() != spec.female_head() && spec.female_resized());
        let gusset = spec.head().and_then(|h| tube_gusset(h, spec.centre_tube));
        lines.push_opt(gusset, if single { 1.0 } else { 2.0 });
        if spec.female_resized() {
            let gusset = spec.female_head().and_then(|h| tube_gusset(h, spec.centre_tube));
            lines.push_opt(gusset, 1.0);
        }
    }
    lines
}

pub fn derive(attrs: &AttributeSet, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let type_value = attrs.get("Type");
    let Some(kind) = BarType::parse(type_value) else {
        return ctx.unsupported(ProductFamily::ExtensionBar, "Type", type_value);
    };
    let spec = BarSpec::from_attributes(kind, attrs);
    tracing::debug!(
        bar_type = %kind,
        drive = spec.drive.map(|d| d.label),
        female = spec.female.map(|d| d.label),
        male = spec.male.map(|d| d.label),
        length = spec.length,
        "Deriving extension bar"
    );

    let lines = match kind {
        BarType::TelescopicInner => {
            let mut lines = ComponentList::new();
            lines.push_opt(spec.head(), 1.0);
            lines.append(tube_and_ends(&spec));
            lines.push_opt(collar(spec.centre_tube), 1.0);
            if let Some((lug, qty)) = lift_lug(attrs) {
                lines.push(lug, qty);
            }
            lines
        }
        BarType::TelescopicOuter => {
            let mut lines = ComponentList::new();
            lines.push_opt(spec.head(), 1.0);
            lines.append(tube_and_ends(&spec));
            let gusset = spec.head().and_then(|h| tube_gusset(h, spec.centre_tube));
            lines.push_opt(gusset, 1.0);
            if let Some((lug, qty)) = lift_lug(attrs) {
                lines.push(lug, qty);
            }
            lines
        }
        BarType::Rigid => rigid(&spec, attrs),
    };
    Ok(lines)
}
