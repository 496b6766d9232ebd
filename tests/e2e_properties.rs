//! Properties of the static catalog and the mandala mapping.

use bodygraph::catalog::{self, CHANNELS, GATE_ORDER};
use bodygraph::mandala::{GATE_WIDTH, LINE_WIDTH, MANDALA_START, angular_difference, normalize_degrees};
use bodygraph::{Center, CenterSet, GateSet, map_longitude};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    // Dyadic longitudes keep the ±360° shifts exact in f64.
    #[test]
    fn prop_mapping_is_periodic(k in 0u32..(360 * 1024)) {
        let lon = f64::from(k) / 1024.0;
        let here = map_longitude(lon);
        prop_assert_eq!(here, map_longitude(lon + 360.0));
        prop_assert_eq!(here, map_longitude(lon - 360.0));
    }

    #[test]
    fn prop_mapping_in_range(lon in -1_000.0f64..1_000.0) {
        let gl = map_longitude(lon);
        prop_assert!((1..=64).contains(&gl.gate));
        prop_assert!((1..=6).contains(&gl.line));
    }

    #[test]
    fn prop_angular_difference_is_shortest_arc(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let d = angular_difference(a, b);
        prop_assert!(d > -180.0 && d <= 180.0);
        let landed = normalize_degrees(a + d);
        prop_assert!(angular_difference(landed, b).abs() < 1e-9);
    }
}

#[test]
fn test_gate_order_is_a_permutation() {
    let set = GateSet::from_gates(GATE_ORDER).unwrap();
    assert_eq!(set.len(), 64);
}

#[test]
fn test_each_slice_maps_to_its_gate_and_lines() {
    for (i, &gate) in GATE_ORDER.iter().enumerate() {
        let start = MANDALA_START + i as f64 * GATE_WIDTH;
        for line in 1..=6u8 {
            let lon = start + (f64::from(line) - 0.5) * LINE_WIDTH;
            let gl = map_longitude(lon);
            assert_eq!((gl.gate, gl.line), (gate, line), "slice {i} line {line}");
        }
    }
}

#[test]
fn test_channel_lookup_is_order_independent() {
    for ch in &CHANNELS {
        assert!(ch.gate1 < ch.gate2);
        let fwd = catalog::get_channel(ch.gate1, ch.gate2).unwrap();
        let rev = catalog::get_channel(ch.gate2, ch.gate1).unwrap();
        assert_eq!(fwd.name, rev.name);
        assert_eq!(catalog::gate_center(ch.gate1).unwrap(), ch.center1);
        assert_eq!(catalog::gate_center(ch.gate2).unwrap(), ch.center2);
    }
}

#[test]
fn test_every_gate_has_a_center() {
    let centers: CenterSet = (1..=64u8).map(|g| catalog::gate_center(g).unwrap()).collect();
    assert_eq!(centers, CenterSet::ALL);
    assert!(catalog::gate_center(0).is_err());
    assert!(catalog::gate_center(65).is_err());
}

#[test]
fn test_all_gates_define_every_center() {
    let all = GateSet::from_gates(1..=64).unwrap();
    assert_eq!(catalog::completed_by(all).count(), 36);
    assert_eq!(catalog::centers_completed_by(all), CenterSet::ALL);
    assert_eq!(catalog::centers_completed_by(GateSet::new()), CenterSet::new());
}

#[test]
fn test_motor_centers() {
    let motors: Vec<Center> = Center::ALL.into_iter().filter(|c| c.is_motor()).collect();
    assert_eq!(motors, vec![Center::HeartEgo, Center::SolarPlexus, Center::Sacral, Center::Root]);
}
