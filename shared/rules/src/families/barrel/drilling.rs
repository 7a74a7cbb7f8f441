//! Drilling barrel pivot kits and front ends

use forgebom_models::ComponentList;
use forgebom_utils::bom::parity::{make_even_up, make_odd_down, round_half_even_to_int};

use super::BarrelSpec;
use crate::common::barrel_heads::{Duty, HeadClass};
use crate::common::{pilots, zed};
use crate::context::attribute_enum;

const PIVOT_KIT_90: &str = "Drilling Barrel Pivot Kit - 90mm";
const PIVOT_KIT_120: &str = "Drilling Barrel Pivot Kit - 120mm";
const PIVOT_KIT_160: &str = "Drilling Barrel Pivot Kit - 160mm";

attribute_enum! {
    pub enum FrontEnd {
        Rock => "Rock Front End",
        Clay => "Clay Front End",
        TaperRock => "Taper Rock Front End",
        Zed => "ZED Front End",
    }
}

/// Teeth options, matched without regard to case ("25mm teeth").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarrelTeeth {
    Shank(&'static ShankTeeth),
    Bfz162,
    Fz54,
}

impl BarrelTeeth {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "22mm teeth" => Some(Self::Shank(&SHANK_22)),
            "25mm teeth" => Some(Self::Shank(&SHANK_25)),
            "38/30 teeth" => Some(Self::Shank(&SHANK_38)),
            "bfz162 teeth" => Some(Self::Bfz162),
            "fz54 teeth" => Some(Self::Fz54),
            _ => None,
        }
    }
}

/// Shank teeth with the pilot they pair with and the holders used by each
/// front end.
#[derive(Debug, PartialEq, Eq)]
struct ShankTeeth {
    tooth: &'static str,
    pilot: &'static str,
    support: &'static str,
    block_holder: &'static str,
    /// Tooth spacing along a block-holder flight, in mm.
    block_spacing: i64,
    round_holder: &'static str,
    /// Tooth spacing along a dual-blade round-holder flight, in mm.
    round_spacing: i64,
    /// ZED flights braced behind the teeth.
    zed_brace: bool,
}

static SHANK_22: ShankTeeth = ShankTeeth {
    tooth: "BC86 - 22mm Shank Teeth BETEK",
    pilot: "Rock Pilot suit 22mm Teeth 44mm Hex - RH",
    support: pilots::SUPPORT_HEX,
    block_holder: "BHR176 - 22mm Block Tooth Holder",
    block_spacing: 42,
    round_holder: "BHR174 - 22mm Round Tooth Holder",
    round_spacing: 43,
    zed_brace: false,
};

static SHANK_25: ShankTeeth = ShankTeeth {
    tooth: "BTK03TB - 25mm Shank Teeth",
    pilot: "Rock Auger Pilot - 25mm Shank 75mm square",
    support: pilots::SUPPORT_75_SQUARE,
    block_holder: "BHR31 - 25mm Block Tooth Holder",
    block_spacing: 44,
    round_holder: "BHR167 - 25mm Round Tooth Holder",
    round_spacing: 50,
    zed_brace: true,
};

static SHANK_38: ShankTeeth = ShankTeeth {
    tooth: "BKH105TB - 38/30mm Shank Teeth",
    pilot: "Rock Auger Pilot - 38/30mm Shank 100mm Square",
    support: pilots::SUPPORT_100_SQUARE,
    block_holder: "BHR38 - 38/30mm Block Tooth Holder",
    block_spacing: 66,
    round_holder: "TB38R - 38/30 Shank Round Holder",
    round_spacing: 74,
    zed_brace: true,
};

/// Pivot kit sized by head and diameter. Heavy duty barrels on 130mm and
/// 150mm heads step up to the 120mm kit from 900mm instead of 1000mm.
pub(super) fn pivot_kit(spec: &BarrelSpec<'_>) -> Option<&'static str> {
    let d = spec.diameter;
    let medium_step = if spec.duty == Duty::HeavyDuty { 900 } else { 1000 };
    let kit = match spec.head_class()? {
        HeadClass::Small => PIVOT_KIT_90,
        HeadClass::Medium if d < medium_step => PIVOT_KIT_90,
        HeadClass::Medium => PIVOT_KIT_120,
        HeadClass::Large | HeadClass::Custom if d < 800 => PIVOT_KIT_90,
        HeadClass::Large | HeadClass::Custom if d < 2100 => PIVOT_KIT_120,
        HeadClass::Large | HeadClass::Custom => PIVOT_KIT_160,
    };
    Some(kit)
}

/// Outer diameter of the pivot boss, taken off the teeth sweep.
fn pivot_head_od(kit: Option<&str>) -> i64 {
    match kit {
        Some(PIVOT_KIT_90) => 150,
        Some(PIVOT_KIT_120) => 200,
        Some(PIVOT_KIT_160) => 270,
        _ => 0,
    }
}

/// Hollow bar extending the centre down to a taper or ZED front end.
fn hollow_bar_extension(spec: &BarrelSpec<'_>, front_end: FrontEnd) -> Option<&'static str> {
    const OD152: &str = "Hollow Bar - OD152mm WT 33.5mm";
    const OD273: &str = "Hollow Bar - OD273mm WT 25mm";
    let od200 = match front_end {
        FrontEnd::TaperRock => "Hollow Bar - OD200 ID150",
        _ => "Hollow Bar - OD219mm WT 25mm",
    };

    let d = spec.diameter;
    let medium_step = if spec.duty == Duty::HeavyDuty { 900 } else { 1000 };
    let bar = match spec.head_class()? {
        HeadClass::Small => OD152,
        HeadClass::Medium if d < medium_step => OD152,
        HeadClass::Medium => od200,
        HeadClass::Large if d < 800 => OD152,
        HeadClass::Large if d < 2100 => od200,
        HeadClass::Large => OD273,
        HeadClass::Custom => return None,
    };
    Some(bar)
}

/// Centre extension, ZED centre and the teeth set for the front end.
pub(super) fn front_end(spec: &BarrelSpec<'_>, pivot_kit: Option<&str>) -> ComponentList {
    let mut lines = ComponentList::new();
    let Some(front_end) = FrontEnd::parse(spec.front_end) else {
        if !spec.front_end.is_empty() {
            tracing::warn!(front_end = spec.front_end, "Unknown drilling barrel front end");
        }
        return lines;
    };

    if matches!(front_end, FrontEnd::TaperRock | FrontEnd::Zed) {
        let extension = hollow_bar_extension(spec, front_end);
        lines.push_opt(extension, 1.0);
        if front_end == FrontEnd::Zed {
            lines.push_opt(extension.and_then(zed::zed_centre), 1.0);
        }
    }

    let Some(teeth) = BarrelTeeth::parse(spec.teeth) else {
        return lines;
    };
    let d = spec.diameter;
    let teeth_lines = match (front_end, teeth) {
        (FrontEnd::Zed, BarrelTeeth::Shank(shank)) => zed_teeth(shank, d, pivot_head_od(pivot_kit)),
        (FrontEnd::TaperRock, BarrelTeeth::Shank(shank)) => taper_teeth(shank, d),
        (FrontEnd::Rock, BarrelTeeth::Shank(shank)) => rock_teeth(shank, d, spec.dual_blade()),
        (FrontEnd::Clay, BarrelTeeth::Bfz162 | BarrelTeeth::Fz54) => {
            clay_teeth(teeth, d, spec.dual_blade())
        }
        _ => ComponentList::new(),
    };
    lines.append(teeth_lines);
    lines
}

/// ZED front ends: an even count of block teeth around the pivot boss.
fn zed_teeth(shank: &ShankTeeth, diameter: i64, pivot_od: i64) -> ComponentList {
    let sweep = (diameter - pivot_od - 40) as f64;
    let qty = make_even_up(round_half_even_to_int(sweep / shank.block_spacing as f64 * 2.0)) as f64;

    let mut lines = ComponentList::new();
    lines.push(shank.tooth, qty);
    lines.push(shank.block_holder, qty);
    if shank.zed_brace {
        lines.push("ZED Auger Teeth Brace", 2.0);
    }
    let stiffener = if diameter < 750 {
        zed::STIFFENER_UNDER_600
    } else {
        zed::STIFFENER_600_PLUS
    };
    lines.push(stiffener, 2.0);
    lines
}

/// Taper rock front ends: an odd tooth count; the four pilot-side teeth
/// sit without holders.
fn taper_teeth(shank: &ShankTeeth, diameter: i64) -> ComponentList {
    let sweep = (diameter - pilots::support_od(shank.support) as i64 - 40) as f64;
    let qty = make_odd_down(round_half_even_to_int(sweep / shank.block_spacing as f64 + 4.0));

    let mut lines = ComponentList::new();
    lines.push(shank.tooth, qty as f64);
    lines.push(shank.block_holder, (qty - 4) as f64);
    lines.push(shank.pilot, 1.0);
    lines.push(shank.support, 1.0);
    lines
}

/// Rock front ends on round holders. Dual blade barrels space teeth at
/// the holder pitch and keep an odd count; single blades at twice the pitch.
fn rock_teeth(shank: &ShankTeeth, diameter: i64, dual_blade: bool) -> ComponentList {
    let sweep = diameter - pilots::support_od(shank.support) as i64 - 40;
    let qty = if dual_blade {
        make_odd_down(sweep.div_euclid(shank.round_spacing) + 4)
    } else {
        sweep.div_euclid(shank.round_spacing * 2) + 4
    };

    let mut lines = ComponentList::new();
    lines.push(shank.tooth, qty as f64);
    lines.push(shank.round_holder, (qty - 4) as f64);
    lines.push(shank.pilot, 1.0);
    lines.push(shank.support, 1.0);
    lines
}

/// Clay front ends on flat teeth, with four spare pilot teeth.
fn clay_teeth(teeth: BarrelTeeth, diameter: i64, dual_blade: bool) -> ComponentList {
    let (flat, holder, shank, spacing) = match teeth {
        BarrelTeeth::Bfz162 => (
            "BFZ162 (FZ70) 38/30mm step shank flat Teeth",
            "Phaser Teeth Holder",
            &SHANK_38,
            75,
        ),
        _ => ("FZ54 Mini Bauer Teeth", "Mini Bauer Holder", &SHANK_25, 58),
    };
    let sweep = diameter - pilots::support_od(shank.support) as i64 - 40;
    let qty = if dual_blade {
        make_odd_down(sweep.div_euclid(spacing))
    } else {
        sweep.div_euclid(spacing * 2)
    };
    let qty = qty.max(0) as f64;

    let mut lines = ComponentList::new();
    lines.push(flat, qty);
    lines.push(shank.tooth, 4.0);
    lines.push(holder, qty);
    lines.push(shank.pilot, 1.0);
    lines.push(shank.support, 1.0);
    lines
}
