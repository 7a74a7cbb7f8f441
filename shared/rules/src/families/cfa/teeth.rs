//! CFA lead front ends: teeth, holders and pilot kits per lead auger.

use forgebom_models::ComponentList;
use forgebom_utils::bom::parity::{make_even_up, nearest_odd, round_half_even_to_int};
use forgebom_utils::bom::parser;

use super::{CfaSpec, LeadAuger};
use crate::common::pilots::{self, Pilot};
use crate::families::bored_pile::teeth::rock_teeth;

/// Clearance between the teeth sweep and the flight edge, in mm.
const EDGE_MM: f64 = 10.0;

const BFZ162: (&str, &str) = (
    "BFZ162 (FZ70) 38/30mm step shank flat Teeth",
    "Phaser Teeth Holder",
);
const FZ54: (&str, &str) = ("FZ54 Mini Bauer Teeth", "Mini Bauer Holder");
const AR150: (&str, &str) = ("AR150 Teeth", "C87B Holder - suit AR150");

/// Rock teeth that fit a ZED lead.
const ZED_TEETH: &[&str] = &[
    "BC05TB - 22mm Shank Teeth",
    "BTK03TB - 25mm Shank Teeth",
    "BKH105TB - 38/30mm Shank Teeth",
];

pub(super) fn front_end(spec: &CfaSpec<'_>, lead: LeadAuger) -> ComponentList {
    match lead {
        LeadAuger::TaperRock | LeadAuger::DualRock => dual_taper(spec),
        LeadAuger::ClayShale => clay_shale(spec),
        LeadAuger::SingleCut => single_cut(spec),
        LeadAuger::Zed25 | LeadAuger::Zed32 | LeadAuger::Zed40 | LeadAuger::Zed50 => zed(spec),
    }
}

fn span(spec: &CfaSpec<'_>, offset: f64) -> f64 {
    spec.diameter as f64 - offset - EDGE_MM
}

/// Two rows of rock teeth around the pilot: the nearest odd count, four
/// fewer holders.
fn dual_taper(spec: &CfaSpec<'_>) -> ComponentList {
    let pilot = Pilot::parse(spec.pilot).filter(Pilot::is_rock);
    let support_od = pilot.map_or(0.0, |p| pilots::support_od(p.support()));

    let mut lines = ComponentList::new();
    if let Some(teeth) = rock_teeth(spec.teeth) {
        let qty = nearest_odd(span(spec, support_od) / teeth.divisor + 8.0);
        lines.push(teeth.tooth, qty as f64);
        lines.push(teeth.holder, (qty - 4) as f64);
    }
    if let Some(pilot) = pilot {
        lines.append(pilot.kit());
    }
    lines
}

/// ZED teeth sweep from the centre tube. Button carbide is always counted
/// on the 42mm spacing.
fn zed(spec: &CfaSpec<'_>) -> ComponentList {
    let tube_od = parser::outer_diameter(spec.centre_tube).unwrap_or(0.0);
    let count = |divisor: f64| {
        make_even_up(round_half_even_to_int(span(spec, tube_od) / divisor * 2.0))
    };

    let mut lines = ComponentList::new();
    let Some(teeth) = rock_teeth(spec.teeth).filter(|t| ZED_TEETH.contains(&t.tooth)) else {
        return lines;
    };
    let qty = count(teeth.divisor);
    lines.push(teeth.tooth, qty as f64);
    lines.push(teeth.holder, qty as f64);
    lines.push("BA13 - Weld on Button Carbide", count(42.0) as f64 / 2.0);
    lines
}

fn clay_shale(spec: &CfaSpec<'_>) -> ComponentList {
    let even = |offset: f64, divisor: f64| {
        make_even_up(round_half_even_to_int(span(spec, offset) / divisor)).max(0) as f64
    };

    let mut lines = ComponentList::new();
    let teeth = match spec.teeth.trim() {
        "AR150 Teeth" => Some((AR150, even(78.0, 80.0))),
        "38/30 BFZ162 Teeth" => Some((BFZ162, even(150.0, 150.0))),
        "FZ54 Teeth" => Some((FZ54, even(200.0, 116.0))),
        _ => None,
    };
    if let Some(((tooth, holder), qty)) = teeth {
        lines.push(tooth, qty);
        lines.push(holder, qty);
    }

    if let Some(pilot) = Pilot::parse(spec.pilot).filter(|p| *p != Pilot::BladeFishtail) {
        lines.append(pilot.kit());
        if let Some((tooth, qty)) = pilot.pilot_teeth() {
            lines.push(tooth, qty);
        }
    }
    lines
}

/// One row of flat teeth with no parity rule. Square pilots carry ten
/// spare teeth and six round holders.
fn single_cut(spec: &CfaSpec<'_>) -> ComponentList {
    let count =
        |offset: f64, divisor: f64| round_half_even_to_int(span(spec, offset) / divisor) as f64;

    let mut lines = ComponentList::new();
    let teeth = match spec.teeth.trim() {
        "38/30 BFZ162 Teeth" => Some((BFZ162, count(150.0, 150.0))),
        "FZ54 Teeth" => Some((FZ54, count(200.0, 116.0))),
        _ => None,
    };
    if let Some(((tooth, holder), qty)) = teeth {
        lines.push(tooth, qty);
        lines.push(holder, qty);
    }

    let pilot_spares = match Pilot::parse(spec.pilot) {
        Some(pilot @ Pilot::Teeth25) => Some((pilot, "BHR167 - 25mm Round Tooth Holder")),
        Some(pilot @ Pilot::Teeth38) => Some((pilot, "38/30mm Round Tooth Holder")),
        _ => None,
    };
    if let Some((pilot, holder)) = pilot_spares {
        lines.append(pilot.kit());
        if let Some((tooth, _)) = pilot.pilot_teeth() {
            lines.push(tooth, 10.0);
        }
        lines.push(holder, 6.0);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::super::tests::lead_auger;
    use super::*;
    use forgebom_models::AttributeSet;
    use proptest::prelude::*;

    fn lines_for(lead: LeadAuger, attrs: &AttributeSet) -> ComponentList {
        let spec = CfaSpec::from_attributes(attrs).unwrap();
        front_end(&spec, lead)
    }

    #[test]
    fn test_dual_rock_teeth() {
        let attrs = lead_auger("Dual Rock");
        let lines = lines_for(LeadAuger::DualRock, &attrs);
        // (600 - 78 - 10) / 42 + 8 = 20.19 -> 21
        assert_eq!(lines.qty_of("BC05TB - 22mm Shank Teeth"), Some(21.0));
        assert_eq!(lines.qty_of("BHR176 - 22mm Block Tooth Holder"), Some(17.0));
        assert!(lines.contains(pilots::SUPPORT_HEX));
    }

    #[test]
    fn test_zed_teeth() {
        let attrs = lead_auger("ZED 25mm").with("Teeth", "25mm BTK03 Teeth w/ Block Holder");
        let lines = lines_for(LeadAuger::Zed25, &attrs);
        // (600 - 152 - 10) / 44 * 2 = 19.9 -> 20
        assert_eq!(lines.qty_of("BTK03TB - 25mm Shank Teeth"), Some(20.0));
        assert_eq!(lines.qty_of("BHR31 - 25mm Block Tooth Holder"), Some(20.0));
        // (600 - 152 - 10) / 42 * 2 = 20.86 -> 21 -> 22
        assert_eq!(lines.qty_of("BA13 - Weld on Button Carbide"), Some(11.0));
    }

    #[test]
    fn test_zed_ignores_hex_pilot_teeth_sets() {
        let attrs = lead_auger("ZED 25mm").with("Teeth", "22mm BC86 Teeth");
        assert!(lines_for(LeadAuger::Zed25, &attrs).is_empty());
    }

    #[test]
    fn test_clay_shale_adds_pilot_teeth() {
        let attrs = lead_auger("Clay/Shale")
            .with("Teeth", "AR150 Teeth")
            .with("Pilot", "25mm Teeth Pilot");
        let lines = lines_for(LeadAuger::ClayShale, &attrs);
        // (600 - 78 - 10) / 80 = 6.4 -> 6
        assert_eq!(lines.qty_of("AR150 Teeth"), Some(6.0));
        assert_eq!(lines.qty_of("BTK03TB - 25mm Shank Teeth"), Some(4.0));
        assert!(lines.contains(pilots::SUPPORT_75_SQUARE));
    }

    #[test]
    fn test_single_cut_pilot_spares() {
        let attrs = lead_auger("Single Cut")
            .with("Auger Diameter", "900mm")
            .with("Teeth", "FZ54 Teeth")
            .with("Pilot", "38/30 Teeth Pilot");
        let lines = lines_for(LeadAuger::SingleCut, &attrs);
        // (900 - 200 - 10) / 116 = 5.95 -> 6
        assert_eq!(lines.qty_of("FZ54 Mini Bauer Teeth"), Some(6.0));
        assert_eq!(lines.qty_of("BKH105TB - 38/30mm Shank Teeth"), Some(10.0));
        assert_eq!(lines.qty_of("38/30mm Round Tooth Holder"), Some(6.0));

        let attrs = attrs.with("Pilot", "22mm Teeth Pilot");
        let lines = lines_for(LeadAuger::SingleCut, &attrs);
        assert_eq!(lines.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_clay_shale_teeth_never_negative(
            diameter in 50i64..1500,
            teeth in prop::sample::select(&["AR150 Teeth", "38/30 BFZ162 Teeth", "FZ54 Teeth"][..]),
        ) {
            let attrs = lead_auger("Clay/Shale")
                .with("Auger Diameter", format!("{}mm", diameter))
                .with("Teeth", teeth);
            let lines = lines_for(LeadAuger::ClayShale, &attrs);
            prop_assert!(lines.iter().all(|l| l.qty >= 0.0));
        }

        #[test]
        fn prop_dual_taper_teeth_are_odd(diameter in 400i64..2500) {
            let attrs = lead_auger("Taper Rock")
                .with("Auger Diameter", format!("{}mm", diameter))
                .with("Teeth", "38/30 BKH105 Teeth")
                .with("Pilot", "38/30 Teeth Pilot");
            let lines = lines_for(LeadAuger::TaperRock, &attrs);
            let qty = lines.qty_of("BKH105TB - 38/30mm Shank Teeth").unwrap() as i64;
            prop_assert_eq!(qty.rem_euclid(2), 1);
        }

        #[test]
        fn prop_clay_and_zed_teeth_are_even(diameter in 400i64..2500) {
            let attrs = lead_auger("Clay/Shale")
                .with("Auger Diameter", format!("{}mm", diameter))
                .with("Teeth", "FZ54 Teeth");
            let lines = lines_for(LeadAuger::ClayShale, &attrs);
            let qty = lines.qty_of("FZ54 Mini Bauer Teeth").unwrap() as i64;
            prop_assert_eq!(qty.rem_euclid(2), 0);

            let attrs = attrs.with("Teeth", "38/30 BKH105 Teeth");
            let lines = lines_for(LeadAuger::Zed50, &attrs);
            let qty = lines.qty_of("BKH105TB - 38/30mm Shank Teeth").unwrap() as i64;
            prop_assert_eq!(qty.rem_euclid(2), 0);
        }
    }
}
