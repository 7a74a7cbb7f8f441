//! Pilot kits
//!
//! A pilot option brings the pilot itself, a pilot support and usually an
//! end cap. Rock pilots on clay augers also carry four spare pilot teeth.

use forgebom_models::ComponentList;

use crate::context::attribute_enum;

pub const SUPPORT_HEX: &str = "Pilot Support - Hex";
pub const SUPPORT_75_SQUARE: &str = "Pilot Support - 75mm Square";
pub const SUPPORT_100_SQUARE: &str = "Pilot Support - 100mm Square";
pub const SUPPORT_PIPE_101: &str = "Pipe - OD101mm WT4.0mm";

attribute_enum! {
    pub enum Pilot {
        Teeth19 => "19.4mm Teeth Pilot",
        Teeth22 => "22mm Teeth Pilot",
        Teeth25 => "25mm Teeth Pilot",
        Teeth38 => "38/30 Teeth Pilot",
        HexFishtail => "Hex Auger Torque Fishtail Pilot",
        BladeFishtail => "Blade Auger Fishtail Pilot",
    }
}

impl Pilot {
    pub fn is_rock(&self) -> bool {
        matches!(
            self,
            Self::Teeth19 | Self::Teeth22 | Self::Teeth25 | Self::Teeth38
        )
    }

    pub fn support(&self) -> &'static str {
        match self {
            Self::Teeth19 | Self::Teeth22 | Self::HexFishtail => SUPPORT_HEX,
            Self::Teeth25 => SUPPORT_75_SQUARE,
            Self::Teeth38 => SUPPORT_100_SQUARE,
            Self::BladeFishtail => SUPPORT_PIPE_101,
        }
    }

    /// Pilot, support and end cap lines.
    pub fn kit(&self) -> ComponentList {
        let mut lines = ComponentList::new();
        match self {
            Self::Teeth19 => {
                lines.push("Rock Pilot suit 19mm Teeth 44mm Hex - RH / LH", 1.0);
                lines.push(SUPPORT_HEX, 1.0);
                lines.push("End Cap - Suit Hex Pilot Support", 1.0);
            }
            Self::Teeth22 => {
                lines.push("Rock Pilot suit 22mm Teeth 44mm Hex - RH / LH", 1.0);
                lines.push(SUPPORT_HEX, 1.0);
                lines.push("End Cap - Suit Hex Pilot Support", 1.0);
            }
            Self::Teeth25 => {
                lines.push("Rock Auger Pilot - 25mm Shank 75mm square", 1.0);
                lines.push(SUPPORT_75_SQUARE, 1.0);
                lines.push("End Cap - Suit 75mm Square Pilot Support", 1.0);
            }
            Self::Teeth38 => {
                lines.push("Rock Auger Pilot - 38/30mm Shank 100mm Square", 1.0);
                lines.push(SUPPORT_100_SQUARE, 1.0);
                lines.push("End Cap - Suit 100mm Square Pilot Support", 1.0);
            }
            Self::HexFishtail => {
                lines.push("Auger Pilot - Hex Auger Torque Fishtail", 1.0);
                lines.push(SUPPORT_HEX, 1.0);
                lines.push("End Cap - Suit Hex Pilot Support", 1.0);
            }
            Self::BladeFishtail => {
                lines.push("Blade Auger Fishtail Pilot", 1.0);
                lines.push(SUPPORT_PIPE_101, 0.25);
            }
        }
        lines
    }

    /// Spare teeth fitted to a rock pilot.
    pub fn pilot_teeth(&self) -> Option<(&'static str, f64)> {
        match self {
            Self::Teeth19 => Some(("BSK17 - 19.4mm Shank Teeth", 4.0)),
            Self::Teeth22 => Some(("BC86TB - TEBCO 22mm Teeth", 4.0)),
            Self::Teeth25 => Some(("BTK03TB - 25mm Shank Teeth", 4.0)),
            Self::Teeth38 => Some(("BKH105TB - 38/30mm Shank Teeth", 4.0)),
            Self::HexFishtail | Self::BladeFishtail => None,
        }
    }
}

/// Outer diameter of a pilot support, taken off the teeth sweep.
pub fn support_od(support: &str) -> f64 {
    match support {
        SUPPORT_HEX => 78.0,
        SUPPORT_75_SQUARE => 150.0,
        SUPPORT_100_SQUARE => 200.0,
        _ => 0.0,
    }
}

/// Length a pilot support takes off the centre tube, in mm.
pub fn support_height(support: &str) -> f64 {
    match support {
        SUPPORT_HEX => 75.0,
        SUPPORT_75_SQUARE | SUPPORT_PIPE_101 => 70.0,
        SUPPORT_100_SQUARE => 100.0,
        _ => 0.0,
    }
}

/// First pilot support among already derived lines.
pub fn find_support(lines: &ComponentList) -> Option<&str> {
    lines
        .iter()
        .map(|line| line.name.as_str())
        .find(|name| name.contains("Pilot Support") || *name == SUPPORT_PIPE_101)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_pilot_kit() {
        let kit = Pilot::Teeth25.kit();
        assert_eq!(kit.len(), 3);
        assert_eq!(find_support(&kit), Some(SUPPORT_75_SQUARE));
        assert_eq!(support_od(SUPPORT_75_SQUARE), 150.0);
        assert_eq!(support_height(SUPPORT_75_SQUARE), 70.0);
    }

    #[test]
    fn test_blade_fishtail_uses_pipe_support() {
        let kit = Pilot::BladeFishtail.kit();
        assert_eq!(kit.qty_of(SUPPORT_PIPE_101), Some(0.25));
        assert_eq!(find_support(&kit), Some(SUPPORT_PIPE_101));
        assert!(Pilot::BladeFishtail.pilot_teeth().is_none());
    }

    #[test]
    fn test_parse_pilot() {
        assert_eq!(Pilot::parse("38/30 Teeth Pilot"), Some(Pilot::Teeth38));
        assert!(Pilot::Teeth19.is_rock());
        assert!(!Pilot::HexFishtail.is_rock());
        assert_eq!(Pilot::parse("None"), None);
    }
}
