//! Tremie pipe sections
//!
//! A length of pipe with a threaded coupling at one or both ends. The pipe
//! is cut short of the section length by what the couplings add.

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::bom::parser;
use forgebom_utils::ForgeResult;

use crate::context::{attribute_enum, RuleContext};

attribute_enum! {
    pub enum TremieType {
        Intermediate => "Intermediate",
        LeadSection => "Lead Section",
    }
}

const PLUG_HOLDER: &str = "105mm CFA Plug Holder";

fn female_coupling(inches: i64) -> String {
    format!("{}\" Tremie Coupling - Female", inches)
}

fn male_coupling(inches: i64) -> String {
    format!("{}\" Tremie Coupling - Male", inches)
}

/// Length both couplings of an intermediate section take off the pipe, in
/// metres. Unlisted sizes have no cut length.
fn coupling_allowance(inches: i64) -> Option<f64> {
    match inches {
        4 => Some(0.13),
        6 => Some(0.10),
        8 => Some(0.19),
        10 | 12 => Some(0.20),
        _ => None,
    }
}

pub fn derive(attrs: &AttributeSet, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let type_value = attrs.get("Type_TP");
    let Some(tremie) = TremieType::parse(type_value) else {
        return ctx.unsupported(ProductFamily::TremiePipe, "Type_TP", type_value);
    };

    let length = parser::first_number(attrs.get("Length_TP")).unwrap_or(0.0);
    let diameter_value = attrs.get("Diameter_TP");
    let inches = parser::first_integer(diameter_value).unwrap_or(0);
    let pipe = attrs.get("Pipe Size_TP");
    tracing::debug!(tremie = %tremie, length, inches, "Deriving tremie pipe");

    let mut lines = ComponentList::new();
    match tremie {
        TremieType::Intermediate => {
            lines.push(female_coupling(inches), 1.0);
            lines.push(male_coupling(inches), 1.0);
            match coupling_allowance(inches) {
                Some(allowance) => lines.push(pipe, length - allowance),
                None => tracing::warn!(inches, "No coupling allowance for tremie diameter"),
            }
        }
        TremieType::LeadSection if diameter_value == "4\" Diameter" => {
            lines.push(female_coupling(4), 1.0);
            lines.push(PLUG_HOLDER, 1.0);
            lines.push(pipe, length - 0.10);
        }
        TremieType::LeadSection => {
            let allowance = if inches == 6 { 0.10 } else { 0.16 };
            lines.push(female_coupling(inches), 1.0);
            lines.push(pipe, length - allowance);
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgebom_database::InMemoryCatalog;

    fn tremie(kind: &str, diameter: &str) -> AttributeSet {
        AttributeSet::new()
            .with("Type_TP", kind)
            .with("Length_TP", "3m")
            .with("Diameter_TP", diameter)
            .with("Pipe Size_TP", "Pipe - OD219mm WT8.18mm")
    }

    fn derive_lines(attrs: &AttributeSet) -> ComponentList {
        let catalog = InMemoryCatalog::new();
        derive(attrs, &RuleContext::new(&catalog)).unwrap().filtered()
    }

    fn approx(lines: &ComponentList, name: &str, expected: f64) {
        let qty = lines.qty_of(name).unwrap();
        assert!((qty - expected).abs() < 1e-9, "{} = {}", name, qty);
    }

    #[test]
    fn test_intermediate_section() {
        let lines = derive_lines(&tremie("Intermediate", "8\" Diameter"));
        assert_eq!(
            lines.names(),
            vec![
                "8\" Tremie Coupling - Female",
                "8\" Tremie Coupling - Male",
                "Pipe - OD219mm WT8.18mm"
            ]
        );
        approx(&lines, "Pipe - OD219mm WT8.18mm", 2.81);
    }

    #[test]
    fn test_intermediate_unlisted_diameter_has_no_pipe() {
        let lines = derive_lines(&tremie("Intermediate", "5\" Diameter"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_lead_section() {
        let lines = derive_lines(&tremie("Lead Section", "4\" Diameter"));
        assert_eq!(
            lines.names(),
            vec!["4\" Tremie Coupling - Female", PLUG_HOLDER, "Pipe - OD219mm WT8.18mm"]
        );
        approx(&lines, "Pipe - OD219mm WT8.18mm", 2.9);

        let lines = derive_lines(&tremie("Lead Section", "6\" Diameter"));
        approx(&lines, "Pipe - OD219mm WT8.18mm", 2.9);
        assert!(!lines.contains(PLUG_HOLDER));

        let lines = derive_lines(&tremie("Lead Section", "10\" Diameter"));
        approx(&lines, "Pipe - OD219mm WT8.18mm", 2.84);
        assert!(lines.contains("10\" Tremie Coupling - Female"));
    }

    #[test]
    fn test_unknown_section_type() {
        let catalog = InMemoryCatalog::new();
        let ctx = RuleContext::new(&catalog).with_strict_types(false);
        assert!(derive(&tremie("Tail", "6\" Diameter"), &ctx).unwrap().is_empty());
    }
}
