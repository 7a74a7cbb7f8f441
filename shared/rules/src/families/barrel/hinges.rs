//! Hinge, hinge pin and locking handle tables, bucketed by barrel diameter.
//!
//! Drilling barrels and cleaning buckets share most rows; buckets run the
//! 45mm hinge up to 1500mm where barrels step to the 60mm hinge at 1050mm.

use std::sync::OnceLock;

use forgebom_utils::RangeTable;

use super::BarrelKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Hinge {
    pub knuckle: &'static str,
    pub bush: &'static str,
}

/// Locking handle bar with its outer and inner washers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Handle {
    pub bar: &'static str,
    pub outer_washer: &'static str,
    pub inner_washer: &'static str,
}

const fn hinge(knuckle: &'static str, bush: &'static str) -> Hinge {
    Hinge { knuckle, bush }
}

const BUSH_35: &str = "35mm Hinge - Bush";
const BUSH_45: &str = "45mm Hinge - Bush";
const BUSH_60: &str = "60mm Hinge - Bush";
const BUSH_100: &str = "100mm Hinge - Bush";

const HINGE_35_75: Hinge = hinge("35mm Hinge - 75mm Long", BUSH_35);
const HINGE_35_110: Hinge = hinge("35mm Hinge - 110mm Long", BUSH_35);
const HINGE_45_180: Hinge = hinge("45mm Hinge - 180mm Long", BUSH_45);
const HINGE_45_240: Hinge = hinge("45mm Hinge - 240mm Long", BUSH_45);
const HINGE_45_320: Hinge = hinge("45mm Hinge - 320mm long", BUSH_45);
const HINGE_60_250: Hinge = hinge("60mm Hinge - 250mm long", BUSH_60);
const HINGE_60_400: Hinge = hinge("60mm Hinge - 400mm long", BUSH_60);
const HINGE_100_450: Hinge = hinge("100mm Hinge - 450mm long", BUSH_100);
const HINGE_100_550: Hinge = hinge("100mm Hinge - 550mm long", BUSH_100);

const HANDLE_25: Handle = Handle {
    bar: "4140 Bright Bar - 25mm",
    outer_washer: "26mm Locking Handle Washers / Bush",
    inner_washer: "25mm Locking Handle Washers / Bush",
};
const HANDLE_35: Handle = Handle {
    bar: "4140 Bright Bar - 35mm",
    outer_washer: "36mm Locking Handle Washers / Bush",
    inner_washer: "35mm Locking Handle Washers / Bush",
};
const HANDLE_50: Handle = Handle {
    bar: "4140 Bright bar - 50mm",
    outer_washer: "51mm Locking Handle Washers / Bush",
    inner_washer: "50mm Locking Handle Washers / Bush",
};

const PIN_35: &str = "4140 Bright Bar - 35mm";
const PIN_45: &str = "4140 Bright Bar - 45mm";
const PIN_60: &str = "4140 Bright Bar - 60mm";
const PIN_100: &str = "4140 Bright Bar - 100mm";

type Pin = (&'static str, f64);

/// Hinge and locking handle for barrels opened by handle.
pub(super) fn handle_hinge(kind: BarrelKind, diameter: i64) -> Option<(Hinge, Handle)> {
    static DRILLING: OnceLock<RangeTable<(Hinge, Handle)>> = OnceLock::new();
    static CLEANING: OnceLock<RangeTable<(Hinge, Handle)>> = OnceLock::new();

    let table = match kind {
        BarrelKind::Drilling => DRILLING.get_or_init(|| {
            RangeTable::from_static(vec![
                (0.0, 350.0, (HINGE_35_75, HANDLE_25)),
                (350.0, 400.0, (HINGE_35_75, HANDLE_35)),
                (400.0, 500.0, (HINGE_35_110, HANDLE_35)),
                (500.0, 650.0, (HINGE_45_180, HANDLE_35)),
                (650.0, 800.0, (HINGE_45_240, HANDLE_35)),
                (800.0, 1050.0, (HINGE_45_320, HANDLE_35)),
                (1050.0, 1400.0, (HINGE_60_250, HANDLE_35)),
                (1400.0, 1600.0, (HINGE_60_400, HANDLE_35)),
                (1600.0, 1850.0, (HINGE_60_400, HANDLE_50)),
                (1850.0, 2500.0, (HINGE_100_450, HANDLE_50)),
                (2500.0, 5000.0, (HINGE_100_550, HANDLE_50)),
            ])
        }),
        BarrelKind::Cleaning => CLEANING.get_or_init(|| {
            RangeTable::from_static(vec![
                (0.0, 350.0, (HINGE_35_75, HANDLE_25)),
                (350.0, 400.0, (HINGE_35_75, HANDLE_35)),
                (400.0, 500.0, (HINGE_35_110, HANDLE_35)),
                (500.0, 650.0, (HINGE_45_180, HANDLE_35)),
                (650.0, 800.0, (HINGE_45_240, HANDLE_35)),
                (800.0, 1500.0, (HINGE_45_320, HANDLE_35)),
                (1500.0, 1600.0, (HINGE_60_400, HANDLE_35)),
                (1600.0, 1850.0, (HINGE_60_400, HANDLE_50)),
                (1850.0, 2500.0, (HINGE_100_450, HANDLE_50)),
                (2500.0, 5000.0, (HINGE_100_550, HANDLE_50)),
            ])
        }),
    };
    table.resolve(diameter as f64).copied()
}

/// Hinge for barrels opened by plunger.
pub(super) fn plunger_hinge(kind: BarrelKind, diameter: i64) -> Option<Hinge> {
    static DRILLING: OnceLock<RangeTable<Hinge>> = OnceLock::new();
    static CLEANING: OnceLock<RangeTable<Hinge>> = OnceLock::new();

    let table = match kind {
        BarrelKind::Drilling => DRILLING.get_or_init(|| {
            RangeTable::from_static(vec![
                (0.0, 400.0, HINGE_35_75),
                (400.0, 500.0, HINGE_35_110),
                (500.0, 650.0, HINGE_45_180),
                (650.0, 800.0, HINGE_45_240),
                (800.0, 1050.0, HINGE_45_320),
                (1050.0, 1400.0, HINGE_60_250),
                (1400.0, 1850.0, HINGE_60_400),
                (1850.0, 2500.0, HINGE_100_450),
                (2500.0, 5000.0, HINGE_100_550),
            ])
        }),
        BarrelKind::Cleaning => CLEANING.get_or_init(|| {
            RangeTable::from_static(vec![
                (0.0, 400.0, HINGE_35_75),
                (400.0, 500.0, HINGE_35_110),
                (500.0, 650.0, HINGE_45_180),
                (650.0, 800.0, HINGE_45_240),
                (800.0, 1500.0, HINGE_45_320),
                (1500.0, 1850.0, HINGE_60_400),
                (1850.0, 2500.0, HINGE_100_450),
                (2500.0, 5000.0, HINGE_100_550),
            ])
        }),
    };
    table.resolve(diameter as f64).copied()
}

/// Hinge pin bar and its length in metres for handle barrels.
///
/// There is no pin row between 350mm and 500mm.
pub(super) fn handle_pin(kind: BarrelKind, diameter: i64) -> Option<Pin> {
    static DRILLING: OnceLock<RangeTable<Pin>> = OnceLock::new();
    static CLEANING: OnceLock<RangeTable<Pin>> = OnceLock::new();

    let table = match kind {
        BarrelKind::Drilling => DRILLING.get_or_init(|| {
            RangeTable::from_static(vec![
                (0.0, 350.0, (PIN_35, 0.14)),
                (500.0, 650.0, (PIN_45, 0.26)),
                (650.0, 800.0, (PIN_45, 0.32)),
                (800.0, 1050.0, (PIN_45, 0.40)),
                (1050.0, 1400.0, (PIN_60, 0.41)),
                (1400.0, 1850.0, (PIN_60, 0.56)),
                (1850.0, 2500.0, (PIN_100, 1.15)),
                (2500.0, 5000.0, (PIN_100, 1.25)),
            ])
        }),
        BarrelKind::Cleaning => CLEANING.get_or_init(|| {
            RangeTable::from_static(vec![
                (0.0, 350.0, (PIN_35, 0.14)),
                (500.0, 650.0, (PIN_45, 0.26)),
                (650.0, 800.0, (PIN_45, 0.32)),
                (800.0, 1500.0, (PIN_45, 0.40)),
                (1500.0, 1850.0, (PIN_60, 0.56)),
                (1850.0, 2500.0, (PIN_100, 1.15)),
                (2500.0, 5000.0, (PIN_100, 1.25)),
            ])
        }),
    };
    table.resolve(diameter as f64).copied()
}

pub(super) fn plunger_pin(kind: BarrelKind, diameter: i64) -> Option<Pin> {
    static DRILLING: OnceLock<RangeTable<Pin>> = OnceLock::new();
    static CLEANING: OnceLock<RangeTable<Pin>> = OnceLock::new();

    let table = match kind {
        BarrelKind::Drilling => DRILLING.get_or_init(|| {
            RangeTable::from_static(vec![
                (0.0, 400.0, (PIN_35, 0.14)),
                (400.0, 500.0, (PIN_35, 0.17)),
                (500.0, 650.0, (PIN_45, 0.26)),
                (650.0, 800.0, (PIN_45, 0.32)),
                (800.0, 1050.0, (PIN_45, 0.40)),
                (1050.0, 1400.0, (PIN_60, 0.41)),
                (1400.0, 1850.0, (PIN_60, 0.56)),
                (1850.0, 2500.0, (PIN_100, 1.15)),
                (2500.0, 5000.0, (PIN_100, 1.25)),
            ])
        }),
        BarrelKind::Cleaning => CLEANING.get_or_init(|| {
            RangeTable::from_static(vec![
                (0.0, 400.0, (PIN_35, 0.14)),
                (400.0, 500.0, (PIN_45, 0.17)),
                (500.0, 650.0, (PIN_45, 0.26)),
                (650.0, 800.0, (PIN_45, 0.32)),
                (800.0, 1500.0, (PIN_60, 0.40)),
                (1500.0, 1850.0, (PIN_60, 0.56)),
                (1850.0, 2500.0, (PIN_100, 1.15)),
                (2500.0, 5000.0, (PIN_100, 1.25)),
            ])
        }),
    };
    table.resolve(diameter as f64).copied()
}
