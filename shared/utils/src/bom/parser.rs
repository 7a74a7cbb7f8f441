//! Encoded-string parsing
//!
//! Attribute values and catalog names embed their dimensions as text:
//! "Hollow Bar - OD152mm WT 33.5mm", "P330 T32 R1.5", "100x10t", "6.5m".
//! These helpers pull the numbers back out.

use regex::Regex;
use std::sync::OnceLock;

macro_rules! cached_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect("static regex pattern"))
        }
    };
}

cached_regex!(number_re, r"\d+(?:\.\d+)?");
cached_regex!(integer_re, r"\d+");
cached_regex!(mm_re, r"(\d+(?:\.\d+)?)\s*mm");
cached_regex!(od_re, r"OD\s*(\d+)");
cached_regex!(id_re, r"ID\s*(\d+)");
cached_regex!(pitch_re, r"P(\d+)");
cached_regex!(thickness_re, r"T(\d+)");
cached_regex!(turns_re, r"R(\d+\.\d+)");
cached_regex!(flat_bar_re, r"(?i)(\d+(?:\.\d+)?)\s*x\s*(\d+(?:\.\d+)?)\s*t");
cached_regex!(metres_re, r"(\d+(?:\.\d+)?)\s*m\b");

/// First decimal number anywhere in the string.
pub fn first_number(s: &str) -> Option<f64> {
    number_re().find(s).and_then(|m| m.as_str().parse().ok())
}

/// First run of digits, ignoring any fractional part that follows.
pub fn first_integer(s: &str) -> Option<i64> {
    integer_re().find(s).and_then(|m| m.as_str().parse().ok())
}

/// Number immediately followed by "mm".
pub fn mm_number(s: &str) -> Option<f64> {
    capture_f64(mm_re(), s)
}

/// Outer diameter from an "OD<n>" marker.
pub fn outer_diameter(s: &str) -> Option<f64> {
    capture_f64(od_re(), s)
}

/// Inner diameter from an "ID<n>" marker.
pub fn inner_diameter(s: &str) -> Option<f64> {
    capture_f64(id_re(), s)
}

/// Length in metres from values such as "6m", "6.5 m" or "12.0m Long".
pub fn length_metres(s: &str) -> Option<f64> {
    capture_f64(metres_re(), s)
}

/// Pitch and turns of an encoded flight string such as "P100 T6 R1.5".
pub fn pitch_turns(s: &str, defaults: PitchDefaults) -> FlightPitch {
    FlightPitch::parse(s, defaults)
}

/// Flat bar cross-section "<width>x<thickness>t".
pub fn flat_bar_size(s: &str) -> Option<FlatBarSize> {
    let caps = flat_bar_re().captures(s)?;
    Some(FlatBarSize {
        width: caps.get(1)?.as_str().parse().ok()?,
        thickness: caps.get(2)?.as_str().parse().ok()?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatBarSize {
    pub width: f64,
    pub thickness: f64,
}

impl FlatBarSize {
    /// Catalog label, e.g. "Flat Bar - 100mm x 10.0mm".
    pub fn label(&self) -> String {
        format!(
            "Flat Bar - {}mm x {}mm",
            format_number(self.width),
            format_py_float(self.thickness)
        )
    }
}

/// Defaults applied when a flight string carries no pitch or turns marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchDefaults {
    pub pitch: f64,
    pub turns: f64,
}

impl PitchDefaults {
    /// Bored pile augers: a missing pitch reads as zero.
    pub const BORED_PILE: PitchDefaults = PitchDefaults { pitch: 0.0, turns: 1.0 };
    /// CFA augers: a missing pitch reads as one.
    pub const CFA: PitchDefaults = PitchDefaults { pitch: 1.0, turns: 1.0 };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightPitch {
    pub pitch: f64,
    pub turns: f64,
}

impl FlightPitch {
    pub fn parse(s: &str, defaults: PitchDefaults) -> Self {
        Self {
            pitch: capture_f64(pitch_re(), s).unwrap_or(defaults.pitch),
            turns: capture_f64(turns_re(), s).unwrap_or(defaults.turns),
        }
    }

    pub fn length(&self) -> f64 {
        self.pitch * self.turns
    }
}

/// Pitch, thickness and turns of a flight attribute such as "P330 T32 R1.5".
///
/// Missing markers read as zero; turns of one or less read as zero because
/// single-turn flights carry no "R" suffix in their names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSpec {
    pub pitch: i64,
    pub thickness: i64,
    pub turns: f64,
}

impl FlightSpec {
    pub fn parse(s: &str) -> Self {
        let pitch = capture_f64(pitch_re(), s).map(|v| v as i64).unwrap_or(0);
        let thickness = capture_f64(thickness_re(), s).map(|v| v as i64).unwrap_or(0);
        let turns = capture_f64(turns_re(), s)
            .filter(|t| *t > 1.0)
            .unwrap_or(0.0);
        Self {
            pitch,
            thickness,
            turns,
        }
    }

    /// "R<turns>" or an empty string for single-turn flights.
    pub fn turns_suffix(&self) -> String {
        if self.turns > 1.0 {
            format!("R{}", format_py_float(self.turns))
        } else {
            String::new()
        }
    }
}

/// Formats a float the way catalog names were generated: whole values keep
/// one decimal ("10.0"), others print as-is ("33.5").
pub fn format_py_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Formats a number without a trailing ".0" when it is whole.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn capture_f64(re: &Regex, s: &str) -> Option<f64> {
    re.captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_numbers() {
        assert_eq!(first_number("1200mm"), Some(1200.0));
        assert_eq!(first_number("12.5m Long"), Some(12.5));
        assert_eq!(first_integer("16.5mm"), Some(16));
        assert_eq!(first_number("N/A"), None);
        assert_eq!(mm_number("Drive Head - 130mm Square"), Some(130.0));
    }

    #[test]
    fn test_diameters() {
        assert_eq!(outer_diameter("Hollow Bar - OD152mm WT 33.5mm"), Some(152.0));
        assert_eq!(inner_diameter("Hollow Bar - OD150mm ID120mm"), Some(120.0));
    }

    #[test]
    fn test_length_metres() {
        assert_eq!(length_metres("6m"), Some(6.0));
        assert_eq!(length_metres("2.5 m"), Some(2.5));
        assert_eq!(length_metres("1200mm"), None);
    }

    #[test]
    fn test_flat_bar_size() {
        let size = flat_bar_size("100x10t").unwrap();
        assert_eq!(size, FlatBarSize { width: 100.0, thickness: 10.0 });
        assert_eq!(size.label(), "Flat Bar - 100mm x 10.0mm");
        assert_eq!(flat_bar_size("150 X 12.5T").unwrap().label(), "Flat Bar - 150mm x 12.5mm");
        assert!(flat_bar_size("Profiled").is_none());
    }

    #[test]
    fn test_flight_pitch_defaults_per_family() {
        let bp = FlightPitch::parse("Flight - OD880 ID152 T20 RH ", PitchDefaults::BORED_PILE);
        assert_eq!(bp, FlightPitch { pitch: 0.0, turns: 1.0 });
        let cfa = pitch_turns("", PitchDefaults::CFA);
        assert_eq!(cfa, FlightPitch { pitch: 1.0, turns: 1.0 });
        let full = pitch_turns("Flight - OD880 ID152 P330 T32 RH R1.5", PitchDefaults::CFA);
        assert_eq!(full.length(), 495.0);
    }

    #[test]
    fn test_flight_spec() {
        let spec = FlightSpec::parse("P330 T32 R2.0");
        assert_eq!(spec.pitch, 330);
        assert_eq!(spec.thickness, 32);
        assert_eq!(spec.turns_suffix(), "R2.0");
        assert_eq!(FlightSpec::parse("P330 T32 R1.0").turns_suffix(), "");
    }

    proptest! {
        #[test]
        fn prop_flat_bar_label_round_trips(width in 20u32..400, thickness in 4u32..60) {
            let parsed = flat_bar_size(&format!("{}x{}t", width, thickness)).unwrap();
            prop_assert_eq!(
                parsed.label(),
                format!("Flat Bar - {}mm x {}.0mm", width, thickness)
            );
        }
    }
}
