//! High tensile adapters
//!
//! An adapter joins two drive standards. Each end is the female or male
//! half of its drive: a coupling half, or a drive head and its stub for
//! square drives. A welded female drive head sits on a base plate, and a
//! stub entering a larger head is reinforced with a stiffening ring.

use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_utils::bom::parser;
use forgebom_utils::ForgeResult;

use crate::common::heads::{self, listed_base_plate};
use crate::common::lift_lug;
use crate::context::{attribute_enum, RuleContext};

attribute_enum! {
    pub enum AdapterType {
        FemaleToFemale => "Female to Female",
        MaleToMale => "Male to Male",
        FemaleToMale => "Female to Male",
        MaleToFemale => "Male to Female",
    }
}

/// Couplings named "<base> Coupling - Female" / "- Male".
const NAMED_COUPLINGS: &[&str] = &[
    "35TM",
    "53TM",
    "Carrendeena 5\"",
    "Casagrande 5\"",
    "HD4",
    "HD5",
    "25XHD5",
    "XHD5",
    "XHD5 Mini",
    "Llamada",
    "MAIT175",
    "MAIT200",
    "TB46",
];

/// Square and hex drives: the female head and, where one exists, its stub.
const DRIVES: &[(&str, &str, Option<&str>)] = &[
    ("65mm Round Drive", heads::HEAD_65_ROUND, None),
    ("65mm Square Drive", heads::HEAD_65_SQUARE, None),
    ("75mm Square Drive", heads::HEAD_75_SQUARE, Some("75mm Square Extension Bar Stubb")),
    ("100mm Square Drive", heads::HEAD_100_SQUARE, Some("100mm square Stubb")),
    ("110mm Square Drive", heads::HEAD_110_SQUARE, Some("110mm Drive Stubb")),
    ("130mm Square Drive", heads::HEAD_130_SQUARE, Some("130mm Stubb")),
    ("130mm Square Drive DIGGA", heads::HEAD_130_DIGGA, Some("130mm Stubb - Digga")),
    ("150mm Square Drive", heads::HEAD_150_SQUARE, Some("150mm Stub")),
    ("150mm Square Drive IMT", heads::HEAD_150_IMT, Some("150mm IMT Stub")),
    ("200mm Square Drive Bauer", heads::HEAD_200_BAUER, Some("200mm Bauer Drive Stubb")),
    ("200mm Square Drive MAIT", heads::HEAD_200_MAIT, Some("200mm MAIT Square Stub")),
    ("150mm AT Hex", "Drive Head - 150mm AT Hex", None),
    ("Terex 2.5\" Hex H250", "Terex Hex Hub Female 2.5\" (H250)", None),
];

fn drive(value: &str) -> Option<&'static (&'static str, &'static str, Option<&'static str>)> {
    DRIVES.iter().find(|(label, _, _)| *label == value)
}

fn named_coupling(value: &str) -> Option<&'static str> {
    let base = value.strip_suffix(" Coupling")?;
    NAMED_COUPLINGS.iter().find(|b| **b == base).copied()
}

fn hex_size(value: &str) -> Option<&str> {
    match value {
        "2\" Hex Coupling" => Some("2"),
        "3\" Hex Coupling" => Some("3"),
        "4\" Hex Coupling" => Some("4"),
        _ => None,
    }
}

/// Female part for a drive option.
pub fn female_part(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(base) = named_coupling(value) {
        return Some(format!("{} Coupling - Female", base));
    }
    if let Some(size) = hex_size(value) {
        return Some(format!("{}\" Hex Coupling - Female", size));
    }
    let part = match value {
        "3.5\" API Coupling" => "3.5\" API Female coupling",
        "SW80 Coupling" => "TB80/SW80 Coupling - Female",
        "SW110 Coupling" => "SW110 Female Coupling",
        "SW150 EMDE Coupling" => "SW150 Bauer Female Octagon Coupling",
        "SW150 Bauer Coupling" => "SW150 EMDE Female",
        "SW175 Coupling" => "SW175 Coupling - Female",
        "SW200 Coupling" => "SW200 Female Coupling",
        "SW250 Coupling" => "SW250 Female Coupling",
        _ => return drive(value).map(|(_, head, _)| head.to_string()),
    };
    Some(part.to_string())
}

/// Male part for a drive option. Round and hex drives have none.
pub fn male_part(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(base) = named_coupling(value) {
        return Some(format!("{} Coupling - Male", base));
    }
    if let Some(size) = hex_size(value) {
        return Some(format!("{}\" Hex Coupling - Male Male Joiner", size));
    }
    let part = match value {
        "3.5\" API Coupling" => "3.5\" API Male coupling",
        "SW80 Coupling" => "TB80/SW80 Coupling - Male",
        "SW110 Coupling" => "SW110 Male Coupling",
        "SW150 EMDE Coupling" => "SW150 Bauer Male Coupling",
        "SW150 Bauer Coupling" => "SW150 EMDE Male",
        "SW175 Coupling" => "SW175 Coupling - male",
        "SW200 Coupling" => "SW200 Male Coupling",
        "SW250 Coupling" => "SW250 Male Coupling",
        _ => return drive(value).and_then(|(_, _, stub)| stub.map(str::to_string)),
    };
    Some(part.to_string())
}

fn reducer(value: &str) -> Option<&'static str> {
    match value.trim() {
        "Reducer - 4\" to 2\"" => Some("Reducer - 4\" to 2\""),
        "Reducer - 5\" to 4\"" => Some("Internal reducer funnel 5\" to 4\""),
        "Reducer - 250NB to 100NB" => Some("Concentric reducer - 250NB to 100NB NB"),
        "Reducer - 350NB to 200NB" => Some("Concentric reducer - 350 NB to 200 NB"),
        "Reducer - 500NB to 300NB" => Some("Concentric reducer - 500 NB to 300 NB"),
        _ => None,
    }
}

fn size_mm(part: Option<&str>) -> f64 {
    part.and_then(parser::mm_number).unwrap_or(0.0)
}

/// Stub sizes a drive head can take with a stiffening ring.
fn ringed_stubs(head: &str) -> &'static [i64] {
    match head {
        heads::HEAD_100_SQUARE => &[75],
        heads::HEAD_110_SQUARE => &[75, 100],
        heads::HEAD_130_SQUARE | heads::HEAD_130_DIGGA => &[75, 100, 110],
        heads::HEAD_150_SQUARE => &[75, 100, 110, 130],
        heads::HEAD_150_IMT | heads::HEAD_200_BAUER | heads::HEAD_200_MAIT => {
            &[75, 100, 110, 130, 150]
        }
        _ => &[],
    }
}

/// Ring for a female drive head receiving a male stub. A 75mm head always
/// takes its own ring.
fn stiffening_ring(head: Option<&str>, stub: Option<&str>) -> Option<String> {
    let head = head?;
    if size_mm(Some(head)) == 75.0 {
        return Some("Stiffening Ring - 75mm Head".to_string());
    }

    let stub = stub?;
    if !stub.to_lowercase().contains("stub") {
        return None;
    }
    let size = parser::mm_number(stub)? as i64;
    ringed_stubs(head)
        .contains(&size)
        .then(|| format!("Stiffening Ring - {}mm Stubb", size))
}

pub fn derive(attrs: &AttributeSet, ctx: &RuleContext<'_>) -> ForgeResult<ComponentList> {
    let type_value = attrs.get("Type");
    let Some(adapter) = AdapterType::parse(type_value) else {
        return ctx.unsupported(ProductFamily::HighTensileAdapter, "Type", type_value);
    };
    let from = attrs.get("From");
    let to = attrs.get("To");
    tracing::debug!(adapter = %adapter, from, to, "Deriving high tensile adapter");

    let (from_part, to_part, plate, ring) = match adapter {
        AdapterType::FemaleToFemale => {
            let (from_part, to_part) = (female_part(from), female_part(to));
            let plated = if size_mm(from_part.as_deref()) > size_mm(to_part.as_deref()) {
                from_part.as_deref()
            } else {
                to_part.as_deref()
            };
            let plate = plated.and_then(listed_base_plate);
            (from_part, to_part, plate, None)
        }
        AdapterType::MaleToMale => (male_part(from), male_part(to), None, None),
        AdapterType::FemaleToMale => {
            let (from_part, to_part) = (female_part(from), male_part(to));
            let plate = from_part.as_deref().and_then(listed_base_plate);
            let ring = stiffening_ring(from_part.as_deref(), to_part.as_deref());
            (from_part, to_part, plate, ring)
        }
        AdapterType::MaleToFemale => {
            let (from_part, to_part) = (male_part(from), female_part(to));
            let plate = to_part.as_deref().and_then(listed_base_plate);
            let ring = stiffening_ring(to_part.as_deref(), from_part.as_deref());
            (from_part, to_part, plate, ring)
        }
    };

    let mut lines = ComponentList::new();
    lines.push_opt(from_part, 1.0);
    lines.push_opt(to_part, 1.0);
    lines.push_opt(plate, 1.0);
    lines.push_opt(reducer(attrs.get("Reducer")), 1.0);
    lines.push_opt(ring, 1.0);
    if let Some((lug, qty)) = lift_lug(attrs) {
        lines.push(lug, qty);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgebom_database::InMemoryCatalog;

    fn adapter(kind: &str, from: &str, to: &str) -> AttributeSet {
        AttributeSet::new()
            .with("Type", kind)
            .with("From", from)
            .with("To", to)
    }

    fn derive_lines(attrs: &AttributeSet) -> ComponentList {
        let catalog = InMemoryCatalog::new();
        derive(attrs, &RuleContext::new(&catalog)).unwrap().filtered()
    }

    #[test]
    fn test_female_to_male_with_ring() {
        let lines = derive_lines(&adapter(
            "Female to Male",
            "150mm Square Drive",
            "130mm Square Drive",
        ));
        assert_eq!(
            lines.names(),
            vec![
                heads::HEAD_150_SQUARE,
                "130mm Stubb",
                "Base Plate - 150mm Head",
                "Stiffening Ring - 130mm Stubb",
            ]
        );
    }

    #[test]
    fn test_male_to_female_ring_follows_matrix() {
        let lines = derive_lines(&adapter(
            "Male to Female",
            "100mm Square Drive",
            "110mm Square Drive",
        ));
        assert!(lines.contains("Stiffening Ring - 100mm Stubb"));
        assert!(lines.contains("Base Plate - 110mm Head"));

        let lines = derive_lines(&adapter(
            "Male to Female",
            "110mm Square Drive",
            "110mm Square Drive",
        ));
        assert!(!lines.names().iter().any(|n| n.starts_with("Stiffening Ring")));
    }

    #[test]
    fn test_75mm_head_takes_head_ring() {
        let lines = derive_lines(&adapter("Female to Male", "75mm Square Drive", "HD4 Coupling"));
        assert_eq!(
            lines.names(),
            vec![
                heads::HEAD_75_SQUARE,
                "HD4 Coupling - Male",
                "Stiffening Ring - 75mm Head",
            ]
        );
    }

    #[test]
    fn test_female_to_female_plates_larger_head() {
        let attrs = adapter("Female to Female", "XHD5 Coupling", "130mm Square Drive")
            .with("Reducer", "Reducer - 5\" to 4\"")
            .with("Lift Lug", "2");
        let lines = derive_lines(&attrs);
        assert_eq!(
            lines.names(),
            vec![
                "XHD5 Coupling - Female",
                heads::HEAD_130_SQUARE,
                "Base Plate - 130mm Head",
                "Internal reducer funnel 5\" to 4\"",
                "Lift lug",
            ]
        );
        assert_eq!(lines.qty_of("Lift lug"), Some(2.0));

        let lines = derive_lines(&adapter(
            "Female to Female",
            "200mm Square Drive Bauer",
            "100mm Square Drive",
        ));
        assert!(lines.contains("Base Plate - 200mm Head"));
        assert!(!lines.contains("Base Plate - 100mm Head"));
    }

    #[test]
    fn test_male_to_male_has_no_plate() {
        let lines = derive_lines(&adapter("Male to Male", "SW150 EMDE Coupling", "3\" Hex Coupling"));
        assert_eq!(
            lines.names(),
            vec!["SW150 Bauer Male Coupling", "3\" Hex Coupling - Male Male Joiner"]
        );
    }

    #[test]
    fn test_round_drive_has_no_male_part() {
        assert_eq!(male_part("65mm Round Drive"), None);
        assert_eq!(female_part("65mm Round Drive").as_deref(), Some(heads::HEAD_65_ROUND));
        assert_eq!(female_part("Unknown Drive"), None);
    }

    #[test]
    fn test_unknown_adapter_type() {
        let catalog = InMemoryCatalog::new();
        let ctx = RuleContext::new(&catalog);
        let err = derive(&adapter("Sideways", "HD4 Coupling", "HD5 Coupling"), &ctx).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");
    }
}
