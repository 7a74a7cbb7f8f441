//! Tube gusset table
//!
//! Gusset choice depends on the drive head group and the centre tube. Tube
//! names are matched case-insensitively because the catalog spells some
//! hollow bars both ways.

use super::heads::HeadGroup;

const HOLLOW_150: &[&str] = &[
    "Hollow Bar - OD150mm ID120mm",
    "Hollow Bar - OD152mm WT 26mm",
    "Hollow Bar - OD152mm WT 33.5mm",
];
const HOLLOW_128: &str = "Hollow Bar - OD128mm WT 11.5mm";
const HOLLOW_170: &[&str] = &[
    "Hollow Bar - OD168mm WT 21.5mm",
    "Hollow Bar - OD168mm WT 29mm",
    "Hollow Bar - OD170mm ID140mm",
    "Hollow Bar - OD180mm ID140mm",
    "Hollow Bar - OD180 ID150",
    "Hollow bar - OD200 ID150",
];
const HOLLOW_219: &[&str] = &["Hollow Bar - OD219mm WT 25mm"];
const HOLLOW_273: &[&str] = &[
    "Hollow bar - OD273mm WT14",
    "Hollow Bar - OD273mm WT 25mm",
    "Hollow Bar - OD273mm WT 32mm",
];
const HOLLOW_323: &[&str] = &[
    "Hollow Bar - OD323mm WT25mm",
    "Hollow Bar - OD323mm WT30mm",
    "Hollow Bar - OD356 ID306",
    "Hollow bar - OD457mm T35mm",
    "Hollow bar - OD457mm T25mm",
];
const PIPE_170: &[&str] = &[
    "Pipe - OD168mm WT6.4mm",
    "Pipe - OD168mm WT4.8mm",
    "Pipe - OD168mm WT11mm",
    "Pipe - OD177mm WT 8mm",
];
const PIPE_219: &[&str] = &[
    "Pipe - OD219mm WT8.2mm",
    "Pipe - OD219mm WT6.4mm",
    "Pipe - OD219mm WT12.7mm",
];
const PIPE_273: &[&str] = &[
    "Pipe - OD273mm WT9.3mm",
    "Pipe - OD273mm WT6.4mm",
    "Pipe - OD273mm WT12.7mm",
];
const PIPE_323: &[&str] = &[
    "Pipe - OD323mm WT9.75mm",
    "Pipe - OD323mm WT9.5mm",
    "Pipe - OD323mm WT6.4mm",
    "Pipe - OD323mm WT12.7mm",
    "Pipe - OD355 WT9.5mm",
    "Pipe - OD355mm WT12.7mm",
    "Pipe - 406mm 9.5mm WT",
    "Pipe - OD406mm WT12.7mm",
    "Pipe - OD457mm WT9.5mm",
    "Pipe - OD457mm WT15.9mm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TubeClass {
    Hollow128,
    Hollow150,
    Hollow170,
    Hollow219,
    Hollow273,
    Hollow323,
    Pipe170,
    Pipe219,
    Pipe273,
    Pipe323,
}

fn classify(tube: &str) -> Option<TubeClass> {
    let tube = tube.trim();
    let matches = |names: &[&str]| names.iter().any(|n| n.eq_ignore_ascii_case(tube));

    if HOLLOW_128.eq_ignore_ascii_case(tube) {
        Some(TubeClass::Hollow128)
    } else if matches(HOLLOW_150) {
        Some(TubeClass::Hollow150)
    } else if matches(HOLLOW_170) {
        Some(TubeClass::Hollow170)
    } else if matches(HOLLOW_219) {
        Some(TubeClass::Hollow219)
    } else if matches(HOLLOW_273) {
        Some(TubeClass::Hollow273)
    } else if matches(HOLLOW_323) {
        Some(TubeClass::Hollow323)
    } else if matches(PIPE_170) {
        Some(TubeClass::Pipe170)
    } else if matches(PIPE_219) {
        Some(TubeClass::Pipe219)
    } else if matches(PIPE_273) {
        Some(TubeClass::Pipe273)
    } else if matches(PIPE_323) {
        Some(TubeClass::Pipe323)
    } else {
        None
    }
}

/// Gusset for a drive head on a centre tube, as (drive size, tube size).
fn gusset_sizes(group: HeadGroup, tube: TubeClass) -> Option<(u32, u32)> {
    use HeadGroup::*;
    use TubeClass::*;

    let sizes = match (group, tube) {
        (Square100, Hollow128 | Hollow150) => (100, 150),
        (Square100, Hollow170 | Pipe170) => (100, 170),
        (Square100, Hollow219 | Pipe219) => (100, 219),
        (Square100, _) => return None,

        (Square130, Hollow128) => return None,
        (Square130, Hollow150) => (130, 150),
        (Square130, Hollow170 | Pipe170) => (130, 170),
        (Square130, Hollow219 | Pipe219) => (130, 219),
        (Square130, Hollow273 | Pipe273) => (130, 273),
        (Square130, Hollow323 | Pipe323) => (130, 323),

        // 150mm heads reuse the 130mm gussets on the small pipes.
        (Square150, Hollow128) => return None,
        (Square150, Hollow150) => (150, 150),
        (Square150, Hollow170 | Hollow219) => (150, 170),
        (Square150, Pipe170) => (130, 170),
        (Square150, Pipe219) => (130, 219),
        (Square150, Hollow273 | Hollow323 | Pipe273 | Pipe323) => (150, 273),

        (Square200, Hollow128 | Hollow150) => return None,
        (Square200, Hollow170 | Hollow219 | Pipe170 | Pipe219) => (200, 170),
        (Square200, Hollow273 | Hollow323 | Pipe273 | Pipe323) => (200, 273),
    };
    Some(sizes)
}

/// Tube gusset for a drive head and centre tube, if the pair takes one.
pub fn tube_gusset(head: &str, centre_tube: &str) -> Option<String> {
    let group = HeadGroup::of(head)?;
    let tube = classify(centre_tube)?;
    let (drive, tube) = gusset_sizes(group, tube)?;
    Some(format!("Gusset - {}mm Drive {}mm Tube", drive, tube))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::heads::*;

    #[test]
    fn test_gusset_by_head_group() {
        assert_eq!(
            tube_gusset(HEAD_110_SQUARE, "Hollow Bar - OD128mm WT 11.5mm").as_deref(),
            Some("Gusset - 100mm Drive 150mm Tube")
        );
        assert_eq!(
            tube_gusset(HEAD_130_DIGGA, "Pipe - OD406mm WT12.7mm").as_deref(),
            Some("Gusset - 130mm Drive 323mm Tube")
        );
        assert_eq!(
            tube_gusset(HEAD_200_MAIT, "Pipe - OD219mm WT6.4mm").as_deref(),
            Some("Gusset - 200mm Drive 170mm Tube")
        );
    }

    #[test]
    fn test_150mm_heads_use_130mm_gussets_on_small_pipes() {
        assert_eq!(
            tube_gusset(HEAD_150_SQUARE, "Pipe - OD168mm WT11mm").as_deref(),
            Some("Gusset - 130mm Drive 170mm Tube")
        );
        assert_eq!(
            tube_gusset(HEAD_150_IMT, "Hollow Bar - OD219mm WT 25mm").as_deref(),
            Some("Gusset - 150mm Drive 170mm Tube")
        );
    }

    #[test]
    fn test_tube_match_ignores_case() {
        assert_eq!(
            tube_gusset(HEAD_130_SQUARE, "hollow bar - OD273mm WT14").as_deref(),
            Some("Gusset - 130mm Drive 273mm Tube")
        );
    }

    #[test]
    fn test_unsupported_pairs() {
        assert_eq!(tube_gusset(HEAD_75_SQUARE, "Hollow Bar - OD150mm ID120mm"), None);
        assert_eq!(tube_gusset(HEAD_100_SQUARE, "Pipe - OD273mm WT9.3mm"), None);
        assert_eq!(tube_gusset(HEAD_200_BAUER, "Hollow Bar - OD152mm WT 26mm"), None);
        assert_eq!(tube_gusset(HEAD_130_SQUARE, "Bright Bar - 90mm"), None);
    }
}
