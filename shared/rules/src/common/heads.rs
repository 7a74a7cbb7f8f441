//! Drive head tables shared by the auger families.

pub const HEAD_65_ROUND: &str = "Drive Head - 65mm Round";
pub const HEAD_65_SQUARE: &str = "Drive Head - 65mm Square";
pub const HEAD_75_SQUARE: &str = "Drive Head - 75mm Square";
pub const HEAD_100_SQUARE: &str = "Drive Head - 100mm Square";
pub const HEAD_110_SQUARE: &str = "Drive Head - 110mm Square";
pub const HEAD_130_SQUARE: &str = "Drive Head - 130mm Square";
pub const HEAD_130_DIGGA: &str = "Drive Head - 130mm Square DIGGA";
pub const HEAD_150_SQUARE: &str = "Drive Head - 150mm Square";
pub const HEAD_150_IMT: &str = "Drive Head - 150mm Square IMT";
pub const HEAD_200_BAUER: &str = "Drive Head - 200mm Square Bauer";
pub const HEAD_200_MAIT: &str = "Drive Head - 200mm Square MAIT";
pub const HEAD_4IN_LO_DRILL: &str = "Drive Head - 4\" Lo Drill";
pub const HEAD_3IN_HEX: &str = "Drive Head - 3\" Hex";
pub const HEAD_2IN_HEX: &str = "Drive Head - 2\" Hex";
pub const CUSTOM_HEAD: &str = "Custom Head";

/// Heads welded without a base plate.
const NO_BASE_PLATE: &[&str] = &[
    HEAD_65_ROUND,
    HEAD_65_SQUARE,
    HEAD_75_SQUARE,
    HEAD_4IN_LO_DRILL,
    HEAD_3IN_HEX,
    HEAD_2IN_HEX,
    CUSTOM_HEAD,
];

/// Base plate for an auger drive head. Square heads from 100mm up take a
/// plate sized to the head; unlisted heavy heads take the 200mm plate.
pub fn base_plate(head: &str) -> Option<String> {
    if head.trim().is_empty() || NO_BASE_PLATE.contains(&head) {
        return None;
    }

    let size = match head {
        HEAD_100_SQUARE => 100,
        HEAD_110_SQUARE => 110,
        HEAD_130_SQUARE | HEAD_130_DIGGA => 130,
        HEAD_150_SQUARE | HEAD_150_IMT => 150,
        _ => 200,
    };
    Some(format!("Base Plate - {}mm Head", size))
}

/// Base plate for heads with a known plate only; everything else has none.
pub fn listed_base_plate(head: &str) -> Option<&'static str> {
    match head {
        HEAD_100_SQUARE => Some("Base Plate - 100mm Head"),
        HEAD_110_SQUARE => Some("Base Plate - 110mm Head"),
        HEAD_130_SQUARE | HEAD_130_DIGGA => Some("Base Plate - 130mm Head"),
        HEAD_150_SQUARE | HEAD_150_IMT => Some("Base Plate - 150mm Head"),
        HEAD_200_BAUER | HEAD_200_MAIT => Some("Base Plate - 200mm Head"),
        _ => None,
    }
}

/// Stiffening ring needed when a 75mm head sits on the 150mm hollow bar.
pub fn stiffening_ring(head: &str, centre_tube: &str) -> Option<&'static str> {
    (head == HEAD_75_SQUARE && centre_tube == "Hollow Bar - OD150mm ID120mm")
        .then_some("Stiffening Ring - 75mm Head")
}

/// Height of a drive head and the thickness of its base plate, in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadHeight {
    pub head: f64,
    pub base_plate: f64,
}

/// Head and base plate heights used for auger centre tube lengths.
///
/// The 200mm Bauer head measures 475mm over a ZED centre and 457mm
/// otherwise.
pub fn auger_head_height(head: &str, zed: bool) -> Option<HeadHeight> {
    let (head_mm, base_mm) = match head {
        HEAD_65_ROUND | HEAD_65_SQUARE => (100.0, 0.0),
        HEAD_75_SQUARE => (150.0, 0.0),
        HEAD_100_SQUARE => (175.0, 25.0),
        HEAD_110_SQUARE => (240.0, 25.0),
        HEAD_130_SQUARE | HEAD_130_DIGGA | HEAD_150_SQUARE | HEAD_150_IMT => (260.0, 32.0),
        HEAD_200_BAUER if zed => (475.0, 32.0),
        HEAD_200_BAUER => (457.0, 32.0),
        HEAD_200_MAIT => (345.0, 32.0),
        HEAD_4IN_LO_DRILL => (332.0, 25.0),
        HEAD_3IN_HEX => (155.0, 0.0),
        HEAD_2IN_HEX => (135.0, 0.0),
        _ => return None,
    };
    Some(HeadHeight {
        head: head_mm,
        base_plate: base_mm,
    })
}

/// Head families sharing one gusset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadGroup {
    Square100,
    Square130,
    Square150,
    Square200,
}

impl HeadGroup {
    pub fn of(head: &str) -> Option<Self> {
        match head {
            HEAD_100_SQUARE | HEAD_110_SQUARE => Some(Self::Square100),
            HEAD_130_SQUARE | HEAD_130_DIGGA => Some(Self::Square130),
            HEAD_150_SQUARE | HEAD_150_IMT => Some(Self::Square150),
            HEAD_200_BAUER | HEAD_200_MAIT => Some(Self::Square200),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_plate_by_head() {
        assert_eq!(base_plate(HEAD_130_SQUARE).as_deref(), Some("Base Plate - 130mm Head"));
        assert_eq!(base_plate(HEAD_150_IMT).as_deref(), Some("Base Plate - 150mm Head"));
        assert_eq!(base_plate(HEAD_200_MAIT).as_deref(), Some("Base Plate - 200mm Head"));
        assert_eq!(base_plate(HEAD_75_SQUARE), None);
        assert_eq!(base_plate(CUSTOM_HEAD), None);
        assert_eq!(base_plate(""), None);
    }

    #[test]
    fn test_listed_base_plate_skips_unknown_heads() {
        assert_eq!(listed_base_plate(HEAD_200_BAUER), Some("Base Plate - 200mm Head"));
        assert_eq!(listed_base_plate("Drive Head - 250mm Square"), None);
    }

    #[test]
    fn test_stiffening_ring() {
        assert!(stiffening_ring(HEAD_75_SQUARE, "Hollow Bar - OD150mm ID120mm").is_some());
        assert!(stiffening_ring(HEAD_100_SQUARE, "Hollow Bar - OD150mm ID120mm").is_none());
    }

    #[test]
    fn test_bauer_height_depends_on_zed_centre() {
        assert_eq!(auger_head_height(HEAD_200_BAUER, true).unwrap().head, 475.0);
        assert_eq!(auger_head_height(HEAD_200_BAUER, false).unwrap().head, 457.0);
        assert_eq!(auger_head_height(HEAD_3IN_HEX, false).unwrap().base_plate, 0.0);
        assert!(auger_head_height(CUSTOM_HEAD, false).is_none());
    }
}
