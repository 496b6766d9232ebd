//! Composite resolution across all view modes.
//!
//! Charts here are synthetic: random gate sets pushed through `analyze`,
//! so every invariant is checked against real analysis output.

use bodygraph::{
    Activation, Bridge, ChartEngine, ChartAnalysis, Chart, Entity, Error, Owner, Planet, ViewMode,
    ViewRequest, VisualOwner, analyze, bridge_state, composite_gates, julian_day, resolve,
    resolve_request,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn activations(gates: &[u8]) -> Vec<Activation> {
    Planet::ALL
        .iter()
        .zip(gates)
        .map(|(&planet, &gate)| Activation { planet, longitude: 0.0, gate, line: 1 + gate % 6 })
        .collect()
}

fn chart_analysis(personality: &[u8], design: &[u8]) -> ChartAnalysis {
    let chart = Chart {
        personality: activations(personality).into_iter().collect(),
        design: activations(design).into_iter().collect(),
    };
    analyze(&chart).unwrap()
}

fn roster() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=64, 13)
}

fn blends_are_two_distinct_owners(view: &bodygraph::CompositeView) -> bool {
    view.gate_state.iter().all(|o| match o {
        VisualOwner::Blend(a, b) => a != b,
        _ => true,
    })
}

proptest! {
    #[test]
    fn prop_single_view_covers_own_gates(p in roster(), d in roster()) {
        let a = chart_analysis(&p, &d);
        let view = resolve(ViewMode::Single, Some(&a), None, &[]).unwrap();
        prop_assert_eq!(view.gate_state.len(), 64);
        prop_assert_eq!(view.active_gates(), a.all_gates);
        prop_assert_eq!(view.defined_centers, a.defined_centers);
        prop_assert_eq!(view.blend_count as usize, a.personality_gates.intersection(a.design_gates).len());
        prop_assert!(blends_are_two_distinct_owners(&view));
    }

    #[test]
    fn prop_person_transit_overlay(p in roster(), d in roster(), t in roster()) {
        let a = chart_analysis(&p, &d);
        let transit = activations(&t);
        let view = resolve(ViewMode::PersonTransit, Some(&a), None, &transit).unwrap();

        for gate in a.all_gates.iter() {
            let owner = view.owner(gate).unwrap();
            prop_assert!(owner.is_active());
            prop_assert!(owner != VisualOwner::Solid(Owner::Transit));
        }
        for &gate in &t {
            prop_assert!(view.owner(gate).unwrap().is_active());
        }
        prop_assert_eq!(view.defined_centers.difference(a.defined_centers), view.temporary_centers);
        prop_assert!(view.defined_centers.union(a.defined_centers) == view.defined_centers);
        prop_assert!(view.composite_gates.is_empty());
    }

    #[test]
    fn prop_person_person_is_symmetric_in_coverage(
        pa in roster(), da in roster(), pb in roster(), db in roster()
    ) {
        let a = chart_analysis(&pa, &da);
        let b = chart_analysis(&pb, &db);
        let ab = resolve(ViewMode::PersonPerson, Some(&a), Some(&b), &[]).unwrap();
        let ba = resolve(ViewMode::PersonPerson, Some(&b), Some(&a), &[]).unwrap();

        prop_assert_eq!(ab.active_gates(), a.all_gates.union(b.all_gates));
        prop_assert_eq!(ab.active_gates(), ba.active_gates());
        prop_assert_eq!(ab.defined_centers, ba.defined_centers);
        prop_assert_eq!(ab.composite_gates, composite_gates(&b, &a));
        prop_assert!(ab.defined_centers.union(a.defined_centers).union(b.defined_centers) == ab.defined_centers);
        prop_assert!(ab.temporary_centers.is_empty());
        prop_assert!(blends_are_two_distinct_owners(&ab));
    }

    #[test]
    fn prop_loose_and_typed_requests_agree(p in roster(), d in roster(), t in roster()) {
        let a = chart_analysis(&p, &d);
        let transit = activations(&t);
        let loose = resolve(ViewMode::PersonTransit, Some(&a), None, &transit).unwrap();
        let typed = resolve_request(ViewRequest::PersonTransit { person: &a, transit: &transit }).unwrap();
        prop_assert_eq!(loose, typed);
    }
}

#[test]
fn test_resolution_is_repeatable() {
    // The blend counter belongs to one resolution, never to the process.
    let a = chart_analysis(&[5; 13], &[5; 13]);
    let first = resolve(ViewMode::Single, Some(&a), None, &[]).unwrap();
    let second = resolve(ViewMode::Single, Some(&a), None, &[]).unwrap();
    assert_eq!(first.blend_count, 1);
    assert_eq!(first, second);
}

#[test]
fn test_unused_inputs_are_ignored() {
    let a = chart_analysis(&[1; 13], &[8; 13]);
    let b = chart_analysis(&[2; 13], &[14; 13]);
    let transit = activations(&[30; 13]);
    let with_extras = resolve(ViewMode::Single, Some(&a), Some(&b), &transit).unwrap();
    let plain = resolve(ViewMode::Single, Some(&a), None, &[]).unwrap();
    assert_eq!(with_extras, plain);
}

#[test]
fn test_missing_charts() {
    let a = chart_analysis(&[1; 13], &[8; 13]);
    assert!(matches!(
        resolve(ViewMode::PersonTransit, None, Some(&a), &[]),
        Err(Error::MissingChart { mode: ViewMode::PersonTransit, slot: Entity::A })
    ));
    assert!(matches!(
        resolve(ViewMode::PersonPerson, Some(&a), None, &[]),
        Err(Error::MissingChart { slot: Entity::B, .. })
    ));
}

#[test]
fn test_two_real_charts() {
    let engine = ChartEngine::analytic();
    let a = analyze(&engine.chart_at(julian_day(1976, 3, 7, 22.0 + 40.0 / 60.0)).unwrap()).unwrap();
    let b = analyze(&engine.chart_at(julian_day(1990, 7, 21, 6.5)).unwrap()).unwrap();

    let view = resolve(ViewMode::PersonPerson, Some(&a), Some(&b), &[]).unwrap();
    assert_eq!(view.active_gates(), a.all_gates.union(b.all_gates));
    for gate in view.composite_gates.iter() {
        assert!(a.all_gates.contains(gate) || b.all_gates.contains(gate), "{gate}");
        assert!(view.owner(gate).is_some_and(|o| o.is_active()), "{gate}");
    }
    for bridge in Bridge::ALL {
        let state = bridge_state(&view, bridge);
        let expected = bridge.gates().iter().any(|&g| view.owner(g).is_some_and(|o| o.is_active()));
        assert_eq!(state.is_active(), expected, "{bridge:?}");
    }
}
