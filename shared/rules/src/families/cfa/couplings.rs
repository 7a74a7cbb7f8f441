//! CFA coupling parts
//!
//! Each drive option has a female and a male half. Their heights and slot
//! depths come off the centre and inner tube lengths. The centre tube also
//! picks up an elbow, and sometimes a pipe extension, spacer rings and a
//! concrete plug.

use forgebom_models::ComponentList;

use crate::common::heads;

/// A coupling half with its height and slot depth, in mm.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CouplingPart {
    pub name: String,
    pub height: f64,
    pub slot: f64,
}

fn part(name: impl Into<String>, height: f64, slot: f64) -> CouplingPart {
    CouplingPart {
        name: name.into(),
        height,
        slot,
    }
}

/// Couplings named "<base> Coupling - Female" / "- Male": base, slot,
/// female height, male height.
const NAMED_COUPLINGS: &[(&str, f64, f64, f64)] = &[
    ("35TM", 10.0, 289.0, 85.0),
    ("53TM", 10.0, 250.0, 85.0),
    ("Carrendeena 5\"", 0.0, 230.0, 55.0),
    ("Casagrande 5\"", 10.0, 230.0, 60.0),
    ("HD4", 0.0, 220.0, 85.0),
    ("HD5", 0.0, 220.0, 80.0),
    ("25XHD5", 10.0, 365.0, 70.0),
    ("XHD5", 10.0, 242.0, 58.5),
    ("XHD5 Mini", 10.0, 242.0, 58.0),
    ("Llamada", 0.0, 279.0, 41.0),
    ("MAIT175", 10.0, 240.0, 65.0),
    ("MAIT200", 10.0, 304.0, 55.0),
    ("TB46", 10.0, 250.0, 75.0),
];

fn named_coupling(drive: &str) -> Option<(&'static str, f64, f64, f64)> {
    let base = drive.strip_suffix(" Coupling")?;
    NAMED_COUPLINGS.iter().find(|row| row.0 == base).copied()
}

fn hex_size(drive: &str) -> Option<&str> {
    match drive {
        "2\" Hex Coupling" => Some("2"),
        "3\" Hex Coupling" => Some("3"),
        "4\" Hex Coupling" => Some("4"),
        _ => None,
    }
}

/// Female half for a drive option.
pub(super) fn female(drive: &str) -> Option<CouplingPart> {
    let drive = drive.trim();
    if let Some((base, slot, height, _)) = named_coupling(drive) {
        return Some(part(format!("{} Coupling - Female", base), height, slot));
    }
    if let Some(size) = hex_size(drive) {
        return Some(part(format!("{}\" Hex Coupling - Female", size), 155.0, 0.0));
    }

    let female = match drive {
        "3.5\" API Coupling" => part("3.5\" API Female coupling", 142.0, 0.0),
        "TB2/TB80/SW80 Coupling" | "SW80 Coupling" => part("TB80/SW80 Coupling - Female", 148.0, 0.0),
        "SW110 Coupling (TB3)" | "SW110 Coupling" => part("SW110 Female Coupling", 170.0, 0.0),
        "SW150 Bauer Coupling" => part("SW150 Bauer Female Octagon Coupling", 258.0, 0.0),
        "SW150 EMDE Coupling" => part("SW150 Bauer Female Octagon Coupling", 225.0, 0.0),
        "SW175 Coupling" => part("SW150 EMDE Female", 400.0, 0.0),
        "SW190 Coupling" => part("SW175 Coupling - Female", 400.0, 10.0),
        "SW200 Coupling" => part("SW200 Female Coupling", 446.0, 10.0),
        "SW250 Coupling" => part("SW250 Female Coupling", 585.0, 10.0),
        heads::HEAD_75_SQUARE => part(heads::HEAD_75_SQUARE, 150.0, 0.0),
        heads::HEAD_100_SQUARE => part(heads::HEAD_100_SQUARE, 175.0, 0.0),
        heads::HEAD_110_SQUARE => part(heads::HEAD_110_SQUARE, 240.0, 0.0),
        heads::HEAD_130_SQUARE => part(heads::HEAD_130_SQUARE, 260.0, 0.0),
        heads::HEAD_130_DIGGA => part(heads::HEAD_130_DIGGA, 260.0, 0.0),
        _ => return None,
    };
    Some(female)
}

/// Male half for a drive option. Drive heads pair with a stub.
pub(super) fn male(drive: &str) -> Option<CouplingPart> {
    let drive = drive.trim();
    if let Some((base, slot, _, height)) = named_coupling(drive) {
        return Some(part(format!("{} Coupling - Male", base), height, slot));
    }
    if let Some(size) = hex_size(drive) {
        return Some(part(format!("{}\" Hex Coupling - Male Male Joiner", size), 155.0, 0.0));
    }

    let male = match drive {
        "3.5\" API Coupling" => part("3.5\" API Male coupling", 50.0, 0.0),
        "TB2/TB80/SW80 Coupling" | "SW80 Coupling" => part("TB80/SW80 Coupling - Male", 20.0, 0.0),
        "SW110 Coupling (TB3)" | "SW110 Coupling" => part("SW110 Male Coupling", 35.0, 0.0),
        "SW150 EMDE Coupling" => part("SW150 Bauer Male Coupling", 50.0, 0.0),
        "SW150 Bauer Coupling" => part("SW150 EMDE Male", 100.0, 0.0),
        "SW175 Coupling" => part("SW175 Coupling - male", 85.0, 10.0),
        "SW190 Coupling" => part("SW190 Coupling - Male", 85.0, 10.0),
        "SW200 Coupling" => part("SW200 Male Coupling", 145.0, 10.0),
        "SW250 Coupling" => part("SW250 Male Coupling", 100.0, 10.0),
        heads::HEAD_75_SQUARE => part("75mm Square Adapter Stubb", 40.0, 0.0),
        heads::HEAD_100_SQUARE => part("100mm square Stubb", 50.0, 0.0),
        heads::HEAD_110_SQUARE => part("110mm Drive Stubb", 40.0, 0.0),
        heads::HEAD_130_SQUARE => part("130mm Stubb", 40.0, 0.0),
        heads::HEAD_130_DIGGA => part("130mm Stubb - Digga", 40.0, 0.0),
        _ => return None,
    };
    Some(male)
}

/// Base plate and its thickness in mm. Only the 100mm to 130mm heads are
/// plated on CFA augers.
pub(super) fn base_plate(drive: &str) -> Option<(&'static str, f64)> {
    match drive.trim() {
        heads::HEAD_100_SQUARE => Some(("Base Plate - 100mm Head", 25.0)),
        heads::HEAD_110_SQUARE => Some(("Base Plate - 110mm Head", 25.0)),
        heads::HEAD_130_SQUARE | heads::HEAD_130_DIGGA => Some(("Base Plate - 130mm Head", 32.0)),
        _ => None,
    }
}

const ELBOW_50NB: &str = "50NB Elbow - Xstrong Long Radius Bend";
const ELBOW_75NB: &str = "75NB elbow - Xstrong Long radius";
const ELBOW_105NB: &str = "105NB elbow - Xstrong Long radius";
const ELBOW_125NB: &str = "125NB elbow - Xstrong long radius";

const INNER_141: &str = "Pipe - OD141mm WT6.6mm";

/// Length of pipe extension welded above the elbow, in metres.
pub(super) const PIPE_EXTENSION_M: f64 = 0.25;

/// Height an elbow takes off the inner tube, in mm.
pub(super) fn elbow_height(elbow: &str) -> f64 {
    match elbow {
        ELBOW_125NB => 260.0,
        ELBOW_105NB => 209.0,
        ELBOW_75NB => 158.0,
        ELBOW_50NB => 106.0,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Plug {
    Mm105,
    Mm125,
}

impl Plug {
    fn parts(&self) -> (&'static str, &'static str) {
        match self {
            Self::Mm105 => ("105mm CFA Plug", "105mm CFA Plug Holder"),
            Self::Mm125 => ("125mm CFA Plug", "125mm CFA Plug Holder"),
        }
    }
}

/// Parts fitted around the centre tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Accessories {
    pub elbow: &'static str,
    pub pipe_extension: Option<&'static str>,
    pub spacer_ring: Option<(&'static str, f64)>,
    pub plug: Option<Plug>,
}

const fn elbow_only(elbow: &'static str) -> Accessories {
    Accessories {
        elbow,
        pipe_extension: None,
        spacer_ring: None,
        plug: None,
    }
}

const fn plugged(elbow: &'static str, plug: Plug) -> Accessories {
    Accessories {
        elbow,
        pipe_extension: None,
        spacer_ring: None,
        plug: Some(plug),
    }
}

const fn extended(elbow: &'static str, extension: &'static str, plug: Plug) -> Accessories {
    Accessories {
        elbow,
        pipe_extension: Some(extension),
        spacer_ring: None,
        plug: Some(plug),
    }
}

const fn spaced(ring: &'static str, qty: f64) -> Accessories {
    Accessories {
        elbow: ELBOW_125NB,
        pipe_extension: None,
        spacer_ring: Some((ring, qty)),
        plug: Some(Plug::Mm125),
    }
}

impl Accessories {
    /// Elbow first, then extension, spacer rings, plug and holder.
    pub fn lines(&self) -> ComponentList {
        let mut lines = ComponentList::new();
        lines.push(self.elbow, 1.0);
        lines.push_opt(self.pipe_extension, PIPE_EXTENSION_M);
        if let Some((ring, qty)) = self.spacer_ring {
            lines.push(ring, qty);
        }
        if let Some(plug) = self.plug {
            let (plug, holder) = plug.parts();
            lines.push(plug, 1.0);
            lines.push(holder, 1.0);
        }
        lines
    }
}

fn with_inner_tube(centre: &str, inner: &str) -> Option<Accessories> {
    let accessories = match (centre, inner) {
        ("Pipe - OD114mm WT8.56mm", "Pipe - OD44mm WT2.77mm") => elbow_only(ELBOW_125NB),
        ("Hollow Bar - OD219mm WT 25mm", INNER_141) => {
            spaced("219 CFA Spacer Ring (164mm OD 143mm ID 10mm)", 2.0)
        }
        ("Hollow bar - OD273mm WT14", INNER_141) | ("Hollow Bar - OD273mm WT 25mm", INNER_141) => {
            spaced("273 CFA Spacer Ring (218mm OD 143mm ID 10mm)", 2.0)
        }
        ("Hollow Bar - OD273mm WT 32mm", INNER_141) => {
            spaced("273 CFA heavy wall Spacer Ring (207mm OD 143mm ID 10mm)", 3.0)
        }
        ("Hollow Bar - OD323mm WT25mm", INNER_141) | ("Hollow Bar - OD323mm WT30mm", INNER_141) => {
            spaced("323 CFA Spacer Ring (270mm OD 143mm ID 10mm)", 3.0)
        }
        _ => return None,
    };
    Some(accessories)
}

fn centre_tube_only(centre: &str) -> Option<Accessories> {
    let accessories = match centre {
        "Hollow bar - OD80mm ID60mm" | "Hollow Bar - OD80mm ID55mm" => elbow_only(ELBOW_50NB),
        "Hollow Bar - OD100mm ID80mm" | "Hollow Bar - OD110 ID70" => elbow_only(ELBOW_75NB),
        "Hollow Bar - OD128mm WT 11.5mm"
        | "Hollow Bar - OD150mm ID120mm"
        | "Hollow Bar - OD152mm WT 33.5mm" => plugged(ELBOW_105NB, Plug::Mm105),
        "Hollow Bar - OD152mm WT 26mm" => {
            extended(ELBOW_105NB, "Hollow Bar - OD150mm ID120mm", Plug::Mm105)
        }
        "Hollow Bar - OD168mm WT 21.5mm" => {
            extended(ELBOW_125NB, "Hollow Bar - OD170mm ID140mm", Plug::Mm125)
        }
        "Hollow Bar - OD168mm WT 29mm" | "Hollow Bar - OD170mm ID140mm" => {
            plugged(ELBOW_125NB, Plug::Mm125)
        }
        "Hollow Bar - OD180 ID150" | "Hollow bar - OD200 ID150" => elbow_only(ELBOW_125NB),
        _ => return None,
    };
    Some(accessories)
}

fn inner_tube_only(inner: &str) -> Option<Accessories> {
    let accessories = match inner {
        "Pipe - OD88.9mm WT5.4mm" => elbow_only(ELBOW_75NB),
        "Pipe - OD114mm WT6.0mm" => plugged(ELBOW_105NB, Plug::Mm105),
        "Hollow Bar - OD168mm WT 21.5mm" => plugged(ELBOW_125NB, Plug::Mm125),
        _ => return None,
    };
    Some(accessories)
}

/// Accessories for a centre tube and optional inner tube. The exact pair
/// wins, then the centre tube alone, then the inner tube alone.
pub(super) fn accessories(centre: &str, inner: Option<&str>) -> Option<Accessories> {
    let centre = centre.trim();
    inner
        .and_then(|inner| with_inner_tube(centre, inner))
        .or_else(|| centre_tube_only(centre))
        .or_else(|| inner.and_then(inner_tube_only))
}
