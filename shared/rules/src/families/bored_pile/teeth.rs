//! Bored pile front ends: teeth, holders and pilots per auger type.

use forgebom_models::ComponentList;
use forgebom_utils::bom::parity::{make_odd_up, round_half_even_to_int};
use forgebom_utils::bom::parser;

use super::{AugerSpec, AugerType};
use crate::common::pilots::{self, Pilot};
use crate::common::zed;

/// A tooth, its holder and the pitch spacing used to count them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TeethSet {
    pub tooth: &'static str,
    pub holder: &'static str,
    pub divisor: f64,
}

const fn set(tooth: &'static str, holder: &'static str, divisor: f64) -> TeethSet {
    TeethSet {
        tooth,
        holder,
        divisor,
    }
}

const BSK17: &str = "BSK17 - 19.4mm Shank Teeth";
const BC86: &str = "BC86TB - TEBCO 22mm Teeth";
const BC05: &str = "BC05TB - 22mm Shank Teeth";
const BTK03: &str = "BTK03TB - 25mm Shank Teeth";
const BKH105: &str = "BKH105TB - 38/30mm Shank Teeth";
const BHR176: &str = "BHR176 - 22mm Block Tooth Holder";

/// Rock teeth sets, keyed by the "Teeth" attribute.
pub(crate) fn rock_teeth(teeth: &str) -> Option<TeethSet> {
    let teeth = match teeth.trim() {
        "19.4mm BSK17 Teeth" | "19.4mm BK17 Teeth" => {
            set(BSK17, "BHR164 - 19.4mm Block Holder", 40.0)
        }
        "22mm BC86 Teeth" => set(BC86, BHR176, 42.0),
        "22mm BC05 Teeth" => set(BC05, BHR176, 42.0),
        "25mm BTK03 Teeth w/ Flat Back Holder" => set(BTK03, "TB25 - 25mm Flat Back Holder", 44.0),
        "25mm BTK03 Teeth w/ Block Holder" => set(BTK03, "BHR31 - 25mm Block Tooth Holder", 44.0),
        "38/30 BKH105 Teeth" => set(BKH105, "BHR38 - 38/30mm Block Tooth Holder", 66.0),
        _ => return None,
    };
    Some(teeth)
}

/// Flight edge clearance: 20mm on smaller augers, 30mm from 1500mm.
fn edge_offset(diameter: i64) -> f64 {
    if diameter < 1500 {
        20.0
    } else {
        30.0
    }
}

/// Pilot kit when the pilot is one this auger type accepts.
fn accepted_pilot(pilot: &str, accepts: impl Fn(Pilot) -> bool) -> Option<Pilot> {
    Pilot::parse(pilot).filter(|p| accepts(*p))
}

fn kit_support_od(pilot: Option<Pilot>) -> f64 {
    pilot.map(|p| pilots::support_od(p.support())).unwrap_or(0.0)
}

/// Even count: twice the rounded half-spacing, never below zero.
fn even_teeth(span: f64, divisor: f64) -> i64 {
    (2 * round_half_even_to_int(span / divisor)).max(0)
}

pub(super) fn front_end(spec: &AugerSpec<'_>) -> ComponentList {
    match spec.auger {
        AugerType::TaperRock | AugerType::DualRock => dual_taper(spec),
        AugerType::TriadRock => triad(spec),
        AugerType::ClayShale => clay_shale(spec),
        AugerType::Blade => blade(spec),
        _ => zed_front_end(spec),
    }
}

/// Two rows of teeth: an odd count, four fewer holders.
fn dual_taper(spec: &AugerSpec<'_>) -> ComponentList {
    let pilot = accepted_pilot(spec.pilot, |p| p.is_rock());
    let mut lines = ComponentList::new();

    if let Some(teeth) = rock_teeth(spec.teeth) {
        let span = spec.diameter as f64 - kit_support_od(pilot) - edge_offset(spec.diameter);
        let qty = make_odd_up(round_half_even_to_int(span / teeth.divisor + 8.0));
        lines.push(teeth.tooth, qty as f64);
        lines.push(teeth.holder, (qty - 4) as f64);
    }
    if let Some(pilot) = pilot {
        lines.append(pilot.kit());
    }
    lines
}

/// Three rows of 22mm teeth around the 22mm rock pilot.
fn triad(spec: &AugerSpec<'_>) -> ComponentList {
    let pilot = accepted_pilot(spec.pilot, |p| p == Pilot::Teeth22);
    let mut lines = ComponentList::new();

    if spec.teeth.trim() == "22mm BC86 Teeth" {
        let span = spec.diameter as f64 - kit_support_od(pilot) - edge_offset(spec.diameter);
        let qty = round_half_even_to_int(span / 84.0 * 3.0 + 4.0);
        lines.push(BC86, qty as f64);
        lines.push(BHR176, (qty - 4) as f64);
    }
    if let Some(pilot) = pilot {
        lines.append(pilot.kit());
    }
    lines
}

/// ZED teeth sit around the ZED centre, so the tube OD replaces the pilot.
fn zed_front_end(spec: &AugerSpec<'_>) -> ComponentList {
    let mut lines = ComponentList::new();
    let teeth = rock_teeth(spec.teeth).filter(|t| t.tooth != BSK17 && t.tooth != BC86);

    if let Some(teeth) = teeth {
        let tube_od = parser::outer_diameter(spec.centre_tube).unwrap_or(0.0).trunc();
        let span = spec.diameter as f64 - tube_od - edge_offset(spec.diameter);
        let qty = even_teeth(span, teeth.divisor);
        lines.push(teeth.tooth, qty as f64);
        lines.push(teeth.holder, qty as f64);
        lines.push("BA13 - Weld on Button Carbide", (qty / 2) as f64);
    }
    lines.push(zed::flight_stiffener(spec.diameter), 2.0);
    lines
}

/// Clay holders for the fixed AR150 diameters.
fn clay_holder(diameter: i64) -> Option<(f64, String)> {
    let teeth = match diameter {
        300 => 4.0,
        400 | 450 => 8.0,
        600 => 12.0,
        _ => return None,
    };
    Some((teeth, format!("{}mm Clay Shale Teeth Holder", diameter)))
}

fn clay_shale(spec: &AugerSpec<'_>) -> ComponentList {
    let pilot = Pilot::parse(spec.pilot);
    let mut lines = ComponentList::new();

    let flat_teeth = match spec.teeth.trim() {
        "38/30 BFZ162 Teeth" => Some(set(
            "BFZ162 (FZ70) 38/30mm step shank flat Teeth",
            "Phaser Teeth Holder",
            75.0,
        )),
        "FZ54 Teeth" => Some(set("FZ54 Mini Bauer Teeth", "Mini Bauer Holder", 58.0)),
        _ => None,
    };

    if let Some(teeth) = flat_teeth {
        let span = spec.diameter as f64 - kit_support_od(pilot) - 20.0;
        let qty = even_teeth(span, teeth.divisor) as f64;
        lines.push(teeth.tooth, qty);
        lines.push(teeth.holder, qty);
        if let Some(pilot) = pilot {
            lines.append(pilot.kit());
        }
        return lines;
    }

    // AR150 teeth: counted on small augers, fixed holders on stock sizes.
    if spec.diameter < 300 {
        let hex_support_od = pilots::support_od(pilots::SUPPORT_HEX);
        let qty = even_teeth(spec.diameter as f64 - hex_support_od - 20.0, 40.0) as f64;
        lines.push("AR150 Teeth", qty);
        lines.push("C87B Holder - suit AR150", qty);
    } else if let Some((qty, holder)) = clay_holder(spec.diameter) {
        lines.push("AR150 Teeth", qty);
        lines.push(holder, 2.0);
    } else {
        return lines;
    }

    if let Some(pilot) = pilot {
        lines.append(pilot.kit());
        if let Some((tooth, qty)) = pilot.pilot_teeth() {
            lines.push(tooth, qty);
        }
    }
    lines
}

/// Blade augers come in three stock diameters with a fishtail pilot.
fn blade(spec: &AugerSpec<'_>) -> ComponentList {
    let mut lines = ComponentList::new();
    if matches!(spec.diameter, 300 | 400 | 450) {
        lines.push(format!("{}mm Hardfaced Blade Teeth", spec.diameter), 2.0);
        lines.push(format!("{}mm Blade Holder", spec.diameter), 2.0);
    }

    let pilot = accepted_pilot(spec.pilot, |p| {
        matches!(p, Pilot::BladeFishtail | Pilot::HexFishtail)
    });
    if let Some(pilot) = pilot {
        lines.append(pilot.kit());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgebom_models::AttributeSet;
    use forgebom_utils::bom::parity::round_to_nearest_even;
    use proptest::prelude::*;

    fn spec_for(auger: AugerType, attrs: &AttributeSet) -> AugerSpec<'_> {
        AugerSpec::from_attributes(auger, attrs)
    }

    fn attrs(diameter: i64, teeth: &str, pilot: &str) -> AttributeSet {
        AttributeSet::new()
            .with("Auger Diameter", format!("{}mm", diameter))
            .with("Teeth", teeth)
            .with("Pilot", pilot)
            .with("Centre Tube", "Hollow Bar - OD219mm WT 25mm")
    }

    #[test]
    fn test_clay_shale_small_auger_has_no_negative_teeth() {
        // (100 - 200 - 20) / 58 rounds to -2
        let flat = attrs(100, "FZ54 Teeth", "38/30 Teeth Pilot");
        let lines = front_end(&spec_for(AugerType::ClayShale, &flat));
        assert_eq!(lines.qty_of("FZ54 Mini Bauer Teeth"), Some(0.0));
        assert!(lines.iter().all(|l| l.qty >= 0.0));

        let ar150 = attrs(20, "AR150 Teeth", "22mm Teeth Pilot");
        let lines = front_end(&spec_for(AugerType::ClayShale, &ar150));
        assert_eq!(lines.qty_of("AR150 Teeth"), Some(0.0));
    }

    #[test]
    fn test_dual_rock_with_square_pilot() {
        let attrs = attrs(1200, "38/30 BKH105 Teeth", "38/30 Teeth Pilot");
        let lines = front_end(&spec_for(AugerType::DualRock, &attrs));

        // round((1200 - 200 - 20) / 66 + 8) = 23
        assert_eq!(lines.qty_of(BKH105), Some(23.0));
        assert_eq!(lines.qty_of("BHR38 - 38/30mm Block Tooth Holder"), Some(19.0));
        assert!(lines.contains(pilots::SUPPORT_100_SQUARE));
    }

    #[test]
    fn test_dual_rock_ignores_fishtail_pilot() {
        let attrs = attrs(900, "22mm BC05 Teeth", "Hex Auger Torque Fishtail Pilot");
        let lines = front_end(&spec_for(AugerType::TaperRock, &attrs));
        assert!(!lines.contains(pilots::SUPPORT_HEX));
        // round((900 - 0 - 20) / 42 + 8) = 29
        assert_eq!(lines.qty_of(BC05), Some(29.0));
    }

    #[test]
    fn test_triad_counts_have_no_parity() {
        let attrs = attrs(900, "22mm BC86 Teeth", "22mm Teeth Pilot");
        let lines = front_end(&spec_for(AugerType::TriadRock, &attrs));
        // round((900 - 78 - 20) / 84 * 3 + 4) = round(32.64) = 33
        assert_eq!(lines.qty_of(BC86), Some(33.0));
        assert_eq!(lines.qty_of(BHR176), Some(29.0));
    }

    #[test]
    fn test_zed_teeth_and_button_carbide() {
        let attrs = attrs(1200, "22mm BC05 Teeth", "");
        let lines = front_end(&spec_for(AugerType::Zed25, &attrs));
        // 2 * round((1200 - 219 - 20) / 42) = 46
        assert_eq!(lines.qty_of(BC05), Some(46.0));
        assert_eq!(lines.qty_of(BHR176), Some(46.0));
        assert_eq!(lines.qty_of("BA13 - Weld on Button Carbide"), Some(23.0));
        assert_eq!(lines.qty_of("ZED Flight Stiffener (600mm+)"), Some(2.0));
    }

    #[test]
    fn test_zed_without_teeth_keeps_stiffener() {
        let attrs = attrs(500, "22mm BC86 Teeth", "");
        let lines = front_end(&spec_for(AugerType::Zed40, &attrs));
        assert_eq!(lines.names(), vec!["ZED Flight Stiffener (Under 600mm)"]);
    }

    #[test]
    fn test_clay_stock_sizes_add_pilot_teeth() {
        let attrs = attrs(450, "AR150 Teeth", "25mm Teeth Pilot");
        let lines = front_end(&spec_for(AugerType::ClayShale, &attrs));
        assert_eq!(lines.qty_of("AR150 Teeth"), Some(8.0));
        assert_eq!(lines.qty_of("450mm Clay Shale Teeth Holder"), Some(2.0));
        assert_eq!(lines.qty_of(BTK03), Some(4.0));
        assert!(lines.contains(pilots::SUPPORT_75_SQUARE));
    }

    #[test]
    fn test_clay_small_auger_counts_ar150() {
        let attrs = attrs(250, "AR150 Teeth", "Hex Auger Torque Fishtail Pilot");
        let lines = front_end(&spec_for(AugerType::ClayShale, &attrs));
        // 2 * round((250 - 78 - 20) / 40) = 8
        assert_eq!(lines.qty_of("C87B Holder - suit AR150"), Some(8.0));
    }

    #[test]
    fn test_clay_unlisted_diameter_has_no_front_end() {
        let attrs = attrs(750, "AR150 Teeth", "22mm Teeth Pilot");
        assert!(front_end(&spec_for(AugerType::ClayShale, &attrs)).is_empty());
    }

    #[test]
    fn test_clay_flat_teeth_skip_pilot_teeth() {
        let attrs = attrs(900, "FZ54 Teeth", "22mm Teeth Pilot");
        let lines = front_end(&spec_for(AugerType::ClayShale, &attrs));
        // 2 * round((900 - 78 - 20) / 58) = 28
        assert_eq!(lines.qty_of("FZ54 Mini Bauer Teeth"), Some(28.0));
        assert!(!lines.contains(BC86));
    }

    #[test]
    fn test_blade_front_end() {
        let attrs = attrs(400, "Blade Teeth", "Blade Auger Fishtail Pilot");
        let lines = front_end(&spec_for(AugerType::Blade, &attrs));
        assert_eq!(
            lines.names(),
            vec![
                "400mm Hardfaced Blade Teeth",
                "400mm Blade Holder",
                "Blade Auger Fishtail Pilot",
                pilots::SUPPORT_PIPE_101,
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_dual_rock_teeth_are_odd(diameter in 300i64..3000) {
            let attrs = attrs(diameter, "25mm BTK03 Teeth w/ Block Holder", "25mm Teeth Pilot");
            let lines = front_end(&spec_for(AugerType::DualRock, &attrs));
            let qty = lines.qty_of(BTK03).unwrap() as i64;
            prop_assert_eq!(qty % 2, 1);
        }

        #[test]
        fn prop_zed_teeth_are_even(diameter in 400i64..3000) {
            let attrs = attrs(diameter, "38/30 BKH105 Teeth", "");
            let lines = front_end(&spec_for(AugerType::Zed50, &attrs));
            let qty = lines.qty_of(BKH105).unwrap() as i64;
            prop_assert_eq!(qty % 2, 0);
        }

        #[test]
        fn prop_even_teeth_never_negative(span in -400.0f64..400.0, divisor in 40.0f64..120.0) {
            prop_assert!(even_teeth(span, divisor) >= 0);
        }

        #[test]
        fn prop_even_teeth_matches_nearest_even(span in 0.0f64..3000.0, divisor in 40.0f64..120.0) {
            let expected = round_to_nearest_even(span / divisor * 2.0);
            let qty = even_teeth(span, divisor);
            prop_assert_eq!(qty % 2, 0);
            prop_assert!((qty - expected).abs() <= 2);
        }
    }
}
