//! Family dispatch
//!
//! Routes an attribute set to the rules of its product family and drops
//! inapplicable lines from the result.

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::ForgeResult;

use crate::context::RuleContext;
use crate::families::{
    barrel, bored_pile, cfa, core_barrel, extension_bar, high_tensile, pile_casing, tremie_pipe,
};

/// Component lines for one product variant, with empty names and zero
/// quantities removed.
pub fn derive(
    family: ProductFamily,
    attrs: &AttributeSet,
    ctx: &RuleContext<'_>,
) -> ForgeResult<ComponentList> {
    let rule = match family {
        ProductFamily::PileCasing => pile_casing::derive,
        ProductFamily::BoredPileAuger => bored_pile::derive,
        ProductFamily::DrillingBarrel => barrel::derive_drilling_barrel,
        ProductFamily::CleaningBucket => barrel::derive_cleaning_bucket,
        ProductFamily::TremiePipe => tremie_pipe::derive,
        ProductFamily::CoreBarrel => core_barrel::derive,
        ProductFamily::CfaAuger => cfa::derive,
        ProductFamily::ExtensionBar => extension_bar::derive,
        ProductFamily::HighTensileAdapter => high_tensile::derive,
    };

    let raw = rule(attrs, ctx)?;
    let raw_count = raw.len();
    let lines = raw.filtered();
    tracing::debug!(
        family = %family,
        raw_count,
        line_count = lines.len(),
        "Derived component lines"
    );
    Ok(lines)
}
