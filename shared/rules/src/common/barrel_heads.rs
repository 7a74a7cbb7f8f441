//! Square drive heads as selected on barrels, buckets and core barrels
//!
//! These products name the head by its socket ("130mm Square Head") rather
//! than by the catalog part, and grade the build by duty.

use crate::common::heads;
use crate::context::attribute_enum;

attribute_enum! {
    pub enum SquareHead {
        Square75 => "75mm Square Head",
        Square100 => "100mm Square Head",
        Square110 => "110mm Square Head",
        Square130 => "130mm Square Head",
        Digga130 => "130mm Digga Square Head",
        Square150 => "150mm Square Head",
        Imt150 => "150mm IMT Square Head",
        Bauer200 => "200mm Bauer Square Head",
        Mait200 => "200mm Mait Square Head",
        LoDrill => "4\" Lo Drill Head",
        Custom => "Custom head",
    }
}

attribute_enum! {
    pub enum Duty {
        Lightweight => "Lightweight",
        Standard => "Standard",
        HeavyDuty => "Heavy Duty",
    }
}

/// Size class used by the pivot kit, extension and plunger bar tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadClass {
    /// 75, 100 and 110mm heads and the Lo Drill.
    Small,
    /// 130 and 150mm heads.
    Medium,
    /// 200mm heads.
    Large,
    Custom,
}

impl SquareHead {
    pub fn class(&self) -> HeadClass {
        match self {
            Self::Square75 | Self::Square100 | Self::Square110 | Self::LoDrill => HeadClass::Small,
            Self::Square130 | Self::Digga130 | Self::Square150 | Self::Imt150 => HeadClass::Medium,
            Self::Bauer200 | Self::Mait200 => HeadClass::Large,
            Self::Custom => HeadClass::Custom,
        }
    }

    /// Catalog drive head part. Custom heads are made to order.
    pub fn drive_head(&self) -> Option<&'static str> {
        match self {
            Self::Square75 => Some(heads::HEAD_75_SQUARE),
            Self::Square100 => Some(heads::HEAD_100_SQUARE),
            Self::Square110 => Some(heads::HEAD_110_SQUARE),
            Self::Square130 => Some(heads::HEAD_130_SQUARE),
            Self::Digga130 => Some(heads::HEAD_130_DIGGA),
            Self::Square150 => Some(heads::HEAD_150_SQUARE),
            Self::Imt150 => Some(heads::HEAD_150_IMT),
            Self::Bauer200 => Some(heads::HEAD_200_BAUER),
            Self::Mait200 => Some(heads::HEAD_200_MAIT),
            Self::LoDrill => Some(heads::HEAD_4IN_LO_DRILL),
            Self::Custom => None,
        }
    }

    /// Ears welded either side of 130mm heads.
    pub fn ears(&self) -> Option<(&'static str, f64)> {
        match self {
            Self::Square130 => Some(("Drive Head EARS - 130mm Square", 2.0)),
            Self::Digga130 => Some(("Drive Head EARS - 130mm Square DIGGA", 4.0)),
            _ => None,
        }
    }

    /// Head label used in barrel gusset names.
    pub fn gusset_label(&self) -> &'static str {
        match self {
            Self::Square75 => "75mm Drive",
            Self::Square100 => "100mm Drive",
            Self::Square110 => "110mm Drive",
            Self::Square130 => "130mm Square Drive",
            Self::Digga130 => "130mm Digga Drive",
            Self::Square150 => "150mm Drive",
            Self::Imt150 => "150mm IMT Drive",
            Self::Bauer200 => "200mm Bauer Drive",
            Self::Mait200 => "200mm Mait Drive",
            Self::LoDrill => "4\" Lo Drill",
            Self::Custom => "Custom Head",
        }
    }

    /// Socket size as written in core barrel gussets, e.g. "130mm".
    pub fn socket_mm(&self) -> Option<&'static str> {
        match self {
            Self::Square75 => Some("75mm"),
            Self::Square100 => Some("100mm"),
            Self::Square110 => Some("110mm"),
            Self::Square130 | Self::Digga130 => Some("130mm"),
            Self::Square150 | Self::Imt150 => Some("150mm"),
            Self::Bauer200 | Self::Mait200 => Some("200mm"),
            Self::LoDrill | Self::Custom => None,
        }
    }

    /// Profiling group shared by head and duty combinations that are cut
    /// from the same plate.
    pub fn duty_combination(&self, duty: Duty) -> Option<String> {
        let step = match self {
            Self::Square75 => 0,
            Self::Square100 | Self::Square110 => 1,
            Self::Square130 | Self::Digga130 | Self::Square150 | Self::Imt150 => 2,
            Self::Bauer200 | Self::Mait200 => 3,
            Self::LoDrill => return Some(format!("4\" Lo Drill {}", duty)),
            Self::Custom => return Some(format!("Custom Head {}", duty)),
        };
        let grade = match duty {
            Duty::Lightweight => 0,
            Duty::Standard => 1,
            Duty::HeavyDuty => 2,
        };
        let label = match step + grade {
            0 => "75mm Lightweight",
            1 => "75mm Standard, 100mm Lightweight, 110mm Lightweight",
            2 => "75mm Heavy Duty, 100mm Standard, 110mm Standard, 130mm Lightweight, 150mm Lightweight",
            3 => "100mm Heavy Duty, 110mm Heavy Duty, 130mm Standard, 150mm Standard, 200mm Lightweight",
            4 => "130mm Heavy Duty, 150mm Heavy Duty, 200mm Standard",
            _ => "200mm Heavy Duty",
        };
        Some(label.to_string())
    }
}
