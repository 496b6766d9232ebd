//! # Mandala
//!
//! Maps an ecliptic longitude onto the 64-gate wheel. Total over all finite
//! inputs: any longitude is first folded into `[0, 360)`.

use serde::{Deserialize, Serialize};

use crate::catalog::GATE_ORDER;

/// Tropical longitude where gate 41 line 1 begins.
pub const MANDALA_START: f64 = 302.0;
pub const GATE_WIDTH: f64 = 360.0 / 64.0;
pub const LINE_WIDTH: f64 = GATE_WIDTH / 6.0;

/// Fold an angle into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed difference `to - from`, wrapped into `(-180, 180]`.
pub fn angular_difference(from: f64, to: f64) -> f64 {
    let d = normalize_degrees(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateLine {
    pub gate: u8,
    pub line: u8,
}

/// Longitude → (gate, line).
pub fn map_longitude(longitude: f64) -> GateLine {
    let offset = normalize_degrees(longitude - MANDALA_START);
    let index = (offset / GATE_WIDTH).floor() as usize % GATE_ORDER.len();
    let within = offset % GATE_WIDTH;
    // Clamp: floating error at the far edge of a gate would otherwise give line 7.
    let line = ((within / LINE_WIDTH).floor() as u8 + 1).min(6);
    GateLine { gate: GATE_ORDER[index], line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandala_start_is_gate_41_line_1() {
        assert_eq!(map_longitude(302.0), GateLine { gate: 41, line: 1 });
    }

    #[test]
    fn test_gate_boundaries() {
        // Second slice starts one gate width after the start.
        assert_eq!(map_longitude(302.0 + GATE_WIDTH), GateLine { gate: 19, line: 1 });
        let just_before = 302.0 + GATE_WIDTH - 1e-9;
        assert_eq!(map_longitude(just_before), GateLine { gate: 41, line: 6 });
    }

    #[test]
    fn test_wraps_through_zero() {
        // 0° is 58° past the start: slice 10 (gate 25), 1.75° into it.
        assert_eq!(map_longitude(0.0), GateLine { gate: 25, line: 2 });
        assert_eq!(map_longitude(360.0), map_longitude(0.0));
        assert_eq!(map_longitude(-360.0), map_longitude(0.0));
    }

    #[test]
    fn test_golden_suns() {
        assert_eq!(map_longitude(347.497), GateLine { gate: 22, line: 1 });
        assert_eq!(map_longitude(259.497), GateLine { gate: 26, line: 3 });
    }

    #[test]
    fn test_angular_difference_wraps() {
        assert!((angular_difference(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_difference(10.0, 350.0) + 20.0).abs() < 1e-12);
        assert_eq!(angular_difference(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_normalize_never_returns_360() {
        assert!(normalize_degrees(-1e-18) < 360.0);
        assert_eq!(normalize_degrees(720.5), 0.5);
    }
}
