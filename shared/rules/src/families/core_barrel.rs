//! Core barrels
//!
//! An open rolled barrel with a ring of teeth at the cutting edge. The
//! tooth count per diameter comes from the teeth quantity table.

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::ForgeResult;

use crate::common::barrel_heads::{Duty, SquareHead};
use crate::context::{attribute_enum, RuleContext};

attribute_enum! {
    pub enum CoreTeeth {
        Teeth22 => "22mm Teeth",
        Teeth22Extra => "22mm Extra Teeth",
        Teeth25 => "25mm Teeth",
        Teeth25Extra => "25mm Extra Teeth",
        Teeth38 => "38/30 Teeth",
        Cj2 => "CJ2 Teeth",
        Ws20 => "WS20 Teeth",
        Cj2Ws20Combo => "CJ2/WS20 Combo Teeth",
    }
}

impl CoreTeeth {
    /// Holder and tooth for a single-type ring.
    fn holder_and_tooth(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Teeth22 | Self::Teeth22Extra => {
                Some(("BHR174 - 22mm Round Tooth Holder", "BC05TB - 22mm Shank Teeth"))
            }
            Self::Teeth25 | Self::Teeth25Extra => {
                Some(("BHR167 - 25mm Round Tooth Holder", "BTK03TB - 25mm Shank Teeth"))
            }
            Self::Teeth38 => Some(("38/30mm Round Tooth Holder", "BKH105TB - 38/30mm Shank Teeth")),
            Self::Cj2 => Some(("CJ2 Tooth Holder", "CJ2 Teeth")),
            Self::Ws20 => Some(("WS20 Tooth Holder", "WS20 Teeth")),
            Self::Cj2Ws20Combo => None,
        }
    }

    fn gusset_label(&self) -> &'static str {
        match self {
            Self::Teeth22 | Self::Teeth22Extra => "Core Barrel 22mm Teeth",
            _ => "Core Barrel",
        }
    }
}

pub fn derive(attrs: &AttributeSet, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let duty_value = attrs.get("Type");
    let Some(duty) = Duty::parse(duty_value) else {
        return ctx.unsupported(ProductFamily::CoreBarrel, "Type", duty_value);
    };

    let diameter = attrs.get("Diameter");
    let teeth_value = attrs.get("Teeth");
    let head = SquareHead::parse(attrs.get("Drive Head"));
    let teeth = CoreTeeth::parse(teeth_value);
    tracing::debug!(duty = %duty, diameter, teeth = teeth_value, "Deriving core barrel");

    let combination = head
        .and_then(|head| head.duty_combination(duty))
        .unwrap_or_default();
    let mut lines = ComponentList::new();
    lines.push(
        format!(
            "Profiling - {} {}, {}, {}, {} - {}",
            ProductFamily::CoreBarrel.template_name(),
            diameter,
            attrs.get("Height-A"),
            teeth_value,
            attrs.get("Customization"),
            combination
        ),
        1.0,
    );

    if let Some(socket) = head.and_then(|head| head.socket_mm()) {
        let label = teeth.map_or("Core Barrel", |teeth| teeth.gusset_label());
        lines.push(format!("Gusset {} Drive x {} - {}", socket, diameter, label), 4.0);
    }
    lines.push_opt(head.and_then(|head| head.drive_head()), 1.0);

    match teeth {
        Some(CoreTeeth::Cj2Ws20Combo) => {
            lines.push("WS20 Tooth Holder", 4.0);
            lines.push("WS20 Teeth", 4.0);
            lines.push("CJ2 Tooth Holder", 1.0);
            lines.push("CJ2 Teeth", 1.0);
        }
        Some(teeth) => {
            if let Some((holder, tooth)) = teeth.holder_and_tooth() {
                let qty = teeth_qty(ctx, diameter, teeth_value);
                lines.push(holder, qty);
                lines.push(tooth, qty);
            }
        }
        None if !teeth_value.is_empty() => {
            tracing::warn!(teeth = teeth_value, "Unknown core barrel teeth, no teeth derived");
        }
        None => {}
    }

    if let Some((ears, qty)) = head.and_then(|head| head.ears()) {
        lines.push(ears, qty);
    }
    lines.push("40x8 Flat Bar - Hardfaced Wear Strip", 1.0);
    lines.push("12mm Round Bar - Miniflights", 1.0);
    Ok(lines)
}

/// Teeth around the cutting edge, never fewer than one.
fn teeth_qty(ctx: &RuleContext<'_>, diameter: &str, teeth: &str) -> f64 {
    let Some(table) = ctx.teeth_table else {
        tracing::warn!(diameter, teeth, "No teeth table loaded, using one tooth");
        return 1.0;
    };
    let qty = table.teeth_for(diameter, teeth);
    if qty > 0 {
        qty as f64
    } else {
        1.0
    }
}
