//! BOM generation against the in-memory store.

use std::sync::Arc;

use uuid::Uuid;

use forgebom_database::{BomStore, InMemoryBomStore};
use forgebom_models::{AttributeSet, ProductFamily, UnitOfMeasure};
use forgebom_rules::{BomGenerator, GenerationOutcome};
use forgebom_utils::TeethTable;

const CASING: &str = "Permanent Casing - OD1232 WT16";
const LEAD: &str = "Flight - OD580 ID152 P200 T20 RH ";
const CARRIER: &str = "Flight - OD580 ID152 P400 T20 RH ";
const COUPLING: &str = "Flight - OD580 ID120 P200 T20 RH ";

fn casing() -> AttributeSet {
    AttributeSet::new()
        .with("Casing Type", "Standard")
        .with("Inside Diameter", "1200mm")
        .with("Wall Thickness", "16mm")
        .with("Casing Length", "6m")
        .with("1) Drive Band Size", "100x10t")
        .with("Teeth", "Yes")
        .with("No. of Teeth", "12 Teeth")
}

fn cfa_lead() -> AttributeSet {
    AttributeSet::new()
        .with("Type", "Lead")
        .with("Lead Auger", "Dual Rock")
        .with("Auger Diameter", "600mm")
        .with("CFA Drive Head", "Drive Head - 130mm Square")
        .with("Length", "6m")
        .with("Rotation", "Right Hand Rotation")
        .with("Teeth", "22mm BC05 Teeth")
        .with("Pilot", "22mm Teeth Pilot")
        .with("Centre Tube", "Hollow Bar - OD152mm WT 26mm")
        .with("Inner Tube", "-")
        .with("Lead Flight OD", "OD580")
        .with("Lead Flight Pitch", "P200 T20")
        .with("Carrier Flight OD", "OD580")
        .with("Carrier Flight Pitch", "P400 T20")
        .with("Coupling Flight ID", "Hollow Bar - OD150mm ID120mm")
}

fn core_barrel() -> AttributeSet {
    AttributeSet::new()
        .with("Diameter", "600mm")
        .with("Height-A", "1200mm")
        .with("Drive Head", "130mm Square Head")
        .with("Teeth", "22mm Teeth")
        .with("Customization", "Standard")
        .with("Type", "Standard")
}

fn created(outcome: GenerationOutcome) -> (Uuid, Vec<forgebom_models::BomLine>) {
    match outcome {
        GenerationOutcome::Created { bom_id, lines } => (bom_id, lines),
        GenerationOutcome::Skipped { product_id } => panic!("BOM skipped for {}", product_id),
    }
}

#[tokio::test]
async fn test_pile_casing_bom_is_persisted_with_routing() {
    let store = Arc::new(InMemoryBomStore::with_products([CASING]));
    let generator = BomGenerator::new(store.clone());
    let product_id = Uuid::new_v4();

    let outcome = generator
        .generate(product_id, ProductFamily::PileCasing, "PC-1200", &casing())
        .await
        .unwrap();
    let (bom_id, lines) = created(outcome);

    let names: Vec<&str> = lines.iter().map(|l| l.component_name.as_str()).collect();
    assert_eq!(
        names,
        vec![CASING, "Flat Bar - 100mm x 10.0mm", "BFZ318TB - Weld on Casing teeth"]
    );
    assert!(lines.iter().take(2).all(|l| l.uom == UnitOfMeasure::Meter));
    assert_eq!(lines[2].uom, UnitOfMeasure::Unit);

    let record = store.find_bom(product_id).await.unwrap().unwrap();
    assert_eq!(record.id, bom_id);
    assert_eq!(record.code, "PC-1200");
    let operations: Vec<&str> = record.operations.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(operations, vec!["Rolling", "Tacking", "Welding"]);

    // Casing was already in the catalog; the flat bar and teeth are new.
    assert_eq!(store.component_count().await, 3);
}

#[tokio::test]
async fn test_validation_failure_writes_nothing() {
    let store = Arc::new(InMemoryBomStore::new());
    let generator = BomGenerator::new(store.clone());

    let err = generator
        .generate(Uuid::new_v4(), ProductFamily::PileCasing, "PC-1200", &casing())
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().starts_with("Oops! The 'Permanent Casing - OD1232 WT16'"));
    assert_eq!(store.component_count().await, 0);
    assert_eq!(store.bom_count().await, 0);
}

#[tokio::test]
async fn test_failed_bom_write_discards_new_components() {
    let store = Arc::new(InMemoryBomStore::with_products([CASING]));
    let generator = BomGenerator::new(store.clone());

    // An empty BOM code fails when the header is written, after the flat
    // bar and teeth were find-or-created.
    let err = generator
        .generate(Uuid::new_v4(), ProductFamily::PileCasing, "", &casing())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "DATABASE_ERROR");
    assert_eq!(store.component_count().await, 1);
    assert_eq!(store.bom_count().await, 0);
}

#[tokio::test]
async fn test_core_barrel_is_generated_once() {
    let store = Arc::new(InMemoryBomStore::new());
    let table = TeethTable::from_reader(
        "Diameter,22mm_teeth,22mm_extra_teeth,25mm_teeth,25mm_extra_teeth,38_30_teeth\n\
         600,10,15,9,13,7\n"
            .as_bytes(),
    )
    .unwrap();
    let generator = BomGenerator::new(store.clone()).with_teeth_table(Arc::new(table));
    let product_id = Uuid::new_v4();

    let first = generator
        .generate(product_id, ProductFamily::CoreBarrel, "CB-600", &core_barrel())
        .await
        .unwrap();
    let (_, lines) = created(first);
    let teeth = lines
        .iter()
        .find(|l| l.component_name == "BC05TB - 22mm Shank Teeth")
        .unwrap();
    assert_eq!(teeth.qty, 10.0);

    let second = generator
        .generate(product_id, ProductFamily::CoreBarrel, "CB-600", &core_barrel())
        .await
        .unwrap();
    assert_eq!(second, GenerationOutcome::Skipped { product_id });
    assert_eq!(store.bom_count().await, 1);
}

#[tokio::test]
async fn test_other_families_regenerate() {
    let store = Arc::new(InMemoryBomStore::with_products([CASING]));
    let generator = BomGenerator::new(store.clone());
    let product_id = Uuid::new_v4();

    for _ in 0..2 {
        generator
            .generate(product_id, ProductFamily::PileCasing, "PC-1200", &casing())
            .await
            .unwrap();
    }
    assert_eq!(store.bom_count().await, 2);
}

#[tokio::test]
async fn test_cfa_lines_use_cfa_units() {
    let store = Arc::new(InMemoryBomStore::with_products([LEAD, CARRIER, COUPLING]));
    let generator = BomGenerator::new(store.clone());

    let preview = generator
        .preview(ProductFamily::CfaAuger, &cfa_lead())
        .await
        .unwrap();
    let uom_of = |name: &str| {
        preview
            .lines
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.uom)
    };
    assert_eq!(uom_of("Hollow Bar - OD152mm WT 26mm"), Some(UnitOfMeasure::Meter));
    assert_eq!(uom_of("Pilot Support - Hex"), Some(UnitOfMeasure::Meter));
    assert_eq!(uom_of(LEAD), Some(UnitOfMeasure::Unit));
    assert_eq!(preview.operations.len(), 5);
    assert_eq!(store.bom_count().await, 0);
}

#[tokio::test]
async fn test_missing_cfa_flight_rejects_generation() {
    let store = Arc::new(InMemoryBomStore::with_products([LEAD, CARRIER]));
    let generator = BomGenerator::new(store.clone());

    let err = generator
        .generate(Uuid::new_v4(), ProductFamily::CfaAuger, "CFA-600", &cfa_lead())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Oops! Coupling Flight is not available. Please review the selection or override the BOM."
    );
    assert_eq!(store.bom_count().await, 0);
}

#[tokio::test]
async fn test_lenient_generator_accepts_unknown_types() {
    let store = Arc::new(InMemoryBomStore::new());
    let attrs = AttributeSet::new().with("Type", "Unheard Of");

    let strict = BomGenerator::new(store.clone());
    let err = strict
        .preview(ProductFamily::ExtensionBar, &attrs)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");

    let lenient = BomGenerator::new(store).with_strict_types(false);
    let preview = lenient
        .preview(ProductFamily::ExtensionBar, &attrs)
        .await
        .unwrap();
    assert!(preview.lines.is_empty());
}
