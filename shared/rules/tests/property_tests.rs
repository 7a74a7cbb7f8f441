//! Property tests over the family rules.

use proptest::prelude::*;

use forgebom_database::InMemoryCatalog;
use forgebom_models::{AttributeSet, ComponentList, ProductFamily};
use forgebom_rules::families::extension_bar::BarType;
use forgebom_rules::families::high_tensile::AdapterType;
use forgebom_rules::{derive, RuleContext};

const DRIVE_OPTIONS: &[&str] = &[
    "HD4 Coupling",
    "XHD5 Mini Coupling",
    "2\" Hex Coupling",
    "3.5\" API Coupling",
    "SW80 Coupling",
    "SW175 Coupling",
    "65mm Round Drive",
    "75mm Square Drive",
    "100mm Square Drive",
    "130mm Square Drive DIGGA",
    "150mm Square Drive IMT",
    "200mm Square Drive MAIT",
    "Terex 2.5\" Hex H250",
    "Not A Drive",
];

const BAR_DRIVES: &[&str] = &[
    "75mm Square Drive",
    "100mm Square Drive",
    "110mm Square Drive",
    "130mm Square Digga Drive",
    "150mm Square IMT Drive",
    "200mm Square Bauer Drive",
];

fn derive_lines(family: ProductFamily, attrs: &AttributeSet) -> ComponentList {
    let catalog = InMemoryCatalog::new();
    derive(family, attrs, &RuleContext::new(&catalog)).unwrap()
}

mod high_tensile_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every adapter line names a part and has a positive quantity, and
        /// at most one base plate and one ring are fitted.
        #[test]
        fn prop_adapter_lines_are_applicable(
            kind in prop::sample::select(AdapterType::ALL),
            from in prop::sample::select(DRIVE_OPTIONS),
            to in prop::sample::select(DRIVE_OPTIONS),
        ) {
            let attrs = AttributeSet::new()
                .with("Type", kind.as_str())
                .with("From", from)
                .with("To", to);
            let lines = derive_lines(ProductFamily::HighTensileAdapter, &attrs);

            prop_assert!(lines.iter().all(|l| !l.name.is_empty() && l.qty > 0.0));
            let plates = lines.names().iter().filter(|n| n.starts_with("Base Plate")).count();
            let rings = lines.names().iter().filter(|n| n.starts_with("Stiffening Ring")).count();
            prop_assert!(plates <= 1);
            prop_assert!(rings <= 1);
            if matches!(kind, AdapterType::MaleToMale | AdapterType::FemaleToFemale) {
                prop_assert_eq!(rings, 0);
            }
        }
    }
}

mod extension_bar_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// One more metre of bar is one more metre of centre tube.
        #[test]
        fn prop_tube_tracks_bar_length(
            kind in prop::sample::select(BarType::ALL),
            drive in prop::sample::select(BAR_DRIVES),
            tenths in 20u32..120,
        ) {
            let tube = "Pipe - OD273mm WT9.3mm";
            let bar = |metres: f64| {
                AttributeSet::new()
                    .with("Type", kind.as_str())
                    .with("Drive", drive)
                    .with("Centre Tube", tube)
                    .with("Length", format!("{}m", metres))
            };
            let metres = f64::from(tenths) / 10.0;
            let short = derive_lines(ProductFamily::ExtensionBar, &bar(metres));
            let long = derive_lines(ProductFamily::ExtensionBar, &bar(metres + 1.0));

            let short_qty = short.qty_of(tube).unwrap();
            let long_qty = long.qty_of(tube).unwrap();
            prop_assert!((long_qty - short_qty - 1.0).abs() < 0.011);
            prop_assert!(short_qty < metres);
        }
    }
}

mod pile_casing_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A wider casing needs a longer band.
        #[test]
        fn prop_band_grows_with_diameter(
            diameter in 600u32..2400,
            aligned in any::<bool>(),
        ) {
            let band = "Flat Bar - 100mm x 10.0mm";
            let casing = |id: u32| {
                let attrs = AttributeSet::new()
                    .with("Casing Type", "Standard")
                    .with("Inside Diameter", format!("{}mm", id))
                    .with("Wall Thickness", "16mm")
                    .with("Casing Length", "6m")
                    .with("Not Available Casing?", "Proceed without Casing")
                    .with("1) Drive Band Size", "100x10t");
                if aligned {
                    attrs.with("Drive Band Type (A)", "ID Aligned Drive Band")
                } else {
                    attrs
                }
            };
            let narrow = derive_lines(ProductFamily::PileCasing, &casing(diameter));
            let wide = derive_lines(ProductFamily::PileCasing, &casing(diameter + 100));
            prop_assert!(wide.qty_of(band).unwrap() > narrow.qty_of(band).unwrap());
        }
    }
}
