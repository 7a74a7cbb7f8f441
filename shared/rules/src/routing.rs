//! Routing templates
//!
//! Every BOM carries the fixed operation sequence of its family. Pile
//! casings and CFA sections vary with their attributes.

use forgebom_models::{AttributeSet, ProductFamily, RoutingOperation};

use crate::families::cfa::{self, CfaType};
use crate::families::pile_casing;

const ROLLING: (&str, u32) = ("Rolling", 9);
const TACKING: (&str, u32) = ("Tacking", 1);
const WELDING: (&str, u32) = ("Welding", 4);
const CORE_BARREL_WELDING: (&str, u32) = ("Core Barrel Welding", 4);
const TEETH_SETTING: (&str, u32) = ("Teeth Setting", 2);
const TEETH_WELDING: (&str, u32) = ("Teeth Welding", 3);
const HEAD_SETTING: (&str, u32) = ("HEAD Setting", 1);
const HEAD_WELDING: (&str, u32) = ("HEAD Welding", 3);

/// Operations applied when a family has no template of its own.
pub const DEFAULT_OPERATIONS: &[(&str, u32)] = &[ROLLING, TACKING, CORE_BARREL_WELDING];

fn template(family: ProductFamily, attrs: &AttributeSet) -> &'static [(&'static str, u32)] {
    match family {
        ProductFamily::PileCasing if pile_casing::has_band(attrs) => &[ROLLING, TACKING, WELDING],
        ProductFamily::PileCasing => &[TACKING, WELDING],
        ProductFamily::BoredPileAuger => &[
            TACKING,
            ("Flight Welding", 5),
            TEETH_SETTING,
            TEETH_WELDING,
            HEAD_SETTING,
            HEAD_WELDING,
        ],
        ProductFamily::DrillingBarrel => &[
            ROLLING,
            TACKING,
            ("Welding", 5),
            TEETH_SETTING,
            TEETH_WELDING,
            HEAD_SETTING,
            HEAD_WELDING,
        ],
        ProductFamily::CleaningBucket => &[ROLLING, TACKING, ("Barrel Welding", 4)],
        ProductFamily::TremiePipe => &[TACKING, ("Welding", 5)],
        ProductFamily::CoreBarrel | ProductFamily::ExtensionBar => DEFAULT_OPERATIONS,
        ProductFamily::CfaAuger => match cfa::section_type(attrs) {
            Some(CfaType::Lead) => &[
                ("Flight Pressing", 8),
                TACKING,
                ("Flight Welding", 11),
                ("Teeth Setting", 12),
                ("Teeth Welding", 13),
            ],
            Some(CfaType::Intermediate) => {
                &[("Flight Pressing", 8), TACKING, ("Flight Welding", 11)]
            }
            Some(CfaType::Extension) | None => &[TACKING, WELDING],
        },
        ProductFamily::HighTensileAdapter => &[TACKING, WELDING],
    }
}

/// Routing operations for a product variant, in execution order.
pub fn operations(family: ProductFamily, attrs: &AttributeSet) -> Vec<RoutingOperation> {
    template(family, attrs)
        .iter()
        .map(|(name, work_center)| RoutingOperation::new(*name, *work_center))
        .collect()
}
