//! Part tables shared by several product families.

pub mod barrel_heads;
pub mod flights;
pub mod gussets;
pub mod heads;
pub mod pilots;
pub mod zed;

pub use flights::{auger_flight_od, centre_tube_bore, find_flight_id, flight_name, Rotation};
pub use gussets::tube_gusset;
pub use heads::{auger_head_height, base_plate, listed_base_plate, stiffening_ring, HeadGroup, HeadHeight};
pub use pilots::Pilot;

use forgebom_models::AttributeSet;
use forgebom_utils::bom::parser;

/// Lift lug line: the leading count of the "Lift Lug" value, if any.
pub fn lift_lug(attrs: &AttributeSet) -> Option<(&'static str, f64)> {
    let value = attrs.value("Lift Lug")?;
    let count = value
        .trim_start()
        .split(|c: char| !c.is_ascii_digit() && c != '.')
        .next()
        .and_then(|n| n.parse::<f64>().ok())
        .unwrap_or(0.0);
    Some(("Lift lug", count.trunc()))
}

/// Integer part of the first number in an attribute, or zero.
pub fn leading_mm(value: &str) -> f64 {
    parser::first_integer(value).map(|n| n as f64).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lift_lug_count() {
        let attrs = AttributeSet::new().with("Lift Lug", "2 x Lift Lugs");
        assert_eq!(lift_lug(&attrs), Some(("Lift lug", 2.0)));

        let attrs = AttributeSet::new().with("Lift Lug", "Yes");
        assert_eq!(lift_lug(&attrs), Some(("Lift lug", 0.0)));

        assert_eq!(lift_lug(&AttributeSet::new()), None);
    }

    #[test]
    fn test_leading_mm() {
        assert_eq!(leading_mm("6000mm"), 6000.0);
        assert_eq!(leading_mm("N/A"), 0.0);
    }
}
