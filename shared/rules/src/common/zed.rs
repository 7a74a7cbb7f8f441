//! ZED centre parts
//!
//! ZED front ends replace the pilot with a cast centre sized to the centre
//! tube, and stiffen the lead flight with a pair of plates.

const ZED_CENTRES: &[(&str, &str)] = &[
    ("Hollow Bar - OD150mm ID120mm", "ZED Centre 150mm"),
    ("Hollow Bar - OD152mm WT 26mm", "ZED Centre 150mm"),
    ("Hollow Bar - OD152mm WT 33.5mm", "ZED Centre 150mm"),
    ("Hollow Bar - OD168mm WT 21.5mm", "ZED Centre 168mm"),
    ("Hollow Bar - OD168mm WT 29mm", "ZED Centre 168mm"),
    ("Hollow Bar - OD170mm ID140mm", "ZED Centre 168mm"),
    ("Hollow Bar - OD219mm WT 25mm", "ZED Centre 219mm"),
    ("Hollow bar - OD273mm WT14", "ZED Centre 273mm"),
    ("Hollow Bar - OD273mm WT 25mm", "ZED Centre 273mm"),
    ("Hollow Bar - OD273mm WT 32mm", "ZED Centre 273mm"),
    ("Pipe - OD168mm WT4.8mm", "ZED Centre 168mm"),
    ("Pipe - OD168mm WT6.4mm", "ZED Centre 168mm"),
    ("Pipe - OD168mm WT11mm", "ZED Centre 168mm"),
    ("Pipe - OD219mm WT12.7mm", "ZED Centre 219mm"),
    ("Pipe - OD273mm WT12.7mm", "ZED Centre 273mm"),
];

/// ZED centre fitting a centre tube.
pub fn zed_centre(centre_tube: &str) -> Option<&'static str> {
    let tube = centre_tube.trim();
    ZED_CENTRES
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(tube))
        .map(|(_, centre)| *centre)
}

/// Length a ZED centre takes off the centre tube, in mm.
pub fn zed_centre_height(centre: &str) -> Option<f64> {
    match centre {
        "ZED Centre 150mm" => Some(133.5),
        "ZED Centre 168mm" => Some(147.5),
        "ZED Centre 219mm" | "ZED Centre 273mm" => Some(163.0),
        _ => None,
    }
}

pub const STIFFENER_UNDER_600: &str = "ZED Flight Stiffener (Under 600mm)";
pub const STIFFENER_600_PLUS: &str = "ZED Flight Stiffener (600mm+)";

pub fn flight_stiffener(diameter: i64) -> &'static str {
    if diameter < 600 {
        STIFFENER_UNDER_600
    } else {
        STIFFENER_600_PLUS
    }
}
