//! Cleaning bucket pivot kits

use super::BarrelSpec;
use crate::common::barrel_heads::{Duty, HeadClass, SquareHead};

/// Pivot kit sized by duty, head and diameter. 200mm heads share one scale
/// across duties; smaller heads step from 60mm through 80mm to 90mm. A
/// lightweight custom head only takes the 90mm kit, below 1300mm.
pub(super) fn pivot_kit(spec: &BarrelSpec<'_>) -> Option<&'static str> {
    let d = spec.diameter;
    let head = spec.head?;
    let class = head.class();

    if class == HeadClass::Custom {
        let lightweight = spec.duty == Duty::Lightweight;
        return (lightweight && d < 1300).then_some("Cleaning Bucket Pivot Kit - 90mm");
    }

    if class == HeadClass::Large {
        return Some(if d < 1300 {
            "Cleaning Bucket Pivot Kit - 90mm"
        } else if d < 2500 {
            "Cleaning Bucket Pivot Kit - 120mm"
        } else {
            "Cleaning Bucket Pivot Kit - 160mm"
        });
    }

    let small = match (spec.duty, head, class) {
        (_, SquareHead::Square75, _) => (550, 800),
        (Duty::Lightweight, _, HeadClass::Small) => (550, 800),
        (Duty::Standard, _, HeadClass::Small) => (500, 650),
        (Duty::HeavyDuty, _, _) => (0, 500),
        (_, _, _) => (450, 550),
    };
    Some(step_kit(d, small))
}

/// 60mm below the first step, 80mm below the second, 90mm from there.
fn step_kit(diameter: i64, (to_80, to_90): (i64, i64)) -> &'static str {
    if diameter < to_80 {
        "Cleaning Bucket Pivot Kit - 60mm"
    } else if diameter < to_90 {
        "Cleaning Bucket Pivot Kit - 80mm"
    } else {
        "Cleaning Bucket Pivot Kit - 90mm"
    }
}

#[cfg(test)]
mod tests {
    use super::super::{BarrelKind, OpeningType};
    use super::*;
    use forgebom_models::AttributeSet;

    fn kit(head: &str, duty: Duty, dia: i64) -> Option<&'static str> {
        let attrs = AttributeSet::new()
            .with("Drive Head", head)
            .with("Diameter", format!("{}mm", dia));
        let spec =
            BarrelSpec::from_attributes(BarrelKind::Cleaning, OpeningType::Handle, duty, &attrs);
        pivot_kit(&spec).map(|kit| kit.trim_start_matches("Cleaning Bucket Pivot Kit - "))
    }

    #[test]
    fn test_small_heads() {
        assert_eq!(kit("75mm Square Head", Duty::HeavyDuty, 549), Some("60mm"));
        assert_eq!(kit("75mm Square Head", Duty::HeavyDuty, 550), Some("80mm"));
        assert_eq!(kit("75mm Square Head", Duty::Standard, 800), Some("90mm"));
        assert_eq!(kit("100mm Square Head", Duty::Lightweight, 600), Some("80mm"));
        assert_eq!(kit("110mm Square Head", Duty::Standard, 600), Some("80mm"));
        assert_eq!(kit("110mm Square Head", Duty::Standard, 650), Some("90mm"));
        assert_eq!(kit("4\" Lo Drill Head", Duty::Standard, 499), Some("60mm"));
    }

    #[test]
    fn test_heavy_duty_skips_60mm() {
        assert_eq!(kit("100mm Square Head", Duty::HeavyDuty, 300), Some("80mm"));
        assert_eq!(kit("150mm Square Head", Duty::HeavyDuty, 500), Some("90mm"));
    }

    #[test]
    fn test_medium_heads() {
        assert_eq!(kit("130mm Square Head", Duty::Standard, 380), Some("60mm"));
        assert_eq!(kit("130mm Digga Square Head", Duty::Lightweight, 450), Some("80mm"));
        assert_eq!(kit("150mm IMT Square Head", Duty::Standard, 550), Some("90mm"));
    }

    #[test]
    fn test_large_and_custom_heads() {
        assert_eq!(kit("200mm Bauer Square Head", Duty::Standard, 1299), Some("90mm"));
        assert_eq!(kit("200mm Mait Square Head", Duty::HeavyDuty, 1300), Some("120mm"));
        assert_eq!(kit("200mm Mait Square Head", Duty::Lightweight, 2500), Some("160mm"));
        assert_eq!(kit("Custom head", Duty::Lightweight, 900), Some("90mm"));
        assert_eq!(kit("Custom head", Duty::Lightweight, 1299), Some("90mm"));
        assert_eq!(kit("Custom head", Duty::Lightweight, 1300), None);
        assert_eq!(kit("Custom head", Duty::Lightweight, 2500), None);
        assert_eq!(kit("Custom head", Duty::Standard, 900), None);
        assert_eq!(kit("", Duty::Standard, 900), None);
    }
}
