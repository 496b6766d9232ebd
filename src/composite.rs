//! # Composite Resolver
//!
//! Decides, for every gate 1..=64, which chart (and which half of it) a
//! view should attribute the gate to, and which centers the view shows as
//! defined. Output is rendering-agnostic: a presentation layer maps each
//! `Owner` to its own palette.
//!
//! ## View modes
//!
//! | Mode | Charts | Gate owners |
//! |------|--------|-------------|
//! | `Transit` | none | transit only |
//! | `Single` | A | A personality / design / blend |
//! | `PersonTransit` | A | A, then transit on gates A lacks |
//! | `PersonPerson` | A, B | A and B, blended where both hold a gate |
//!
//! Blends are at most two owners deep: an entity holding a gate in both
//! halves collapses to its personality before blending with another entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CHANNELS};
use crate::model::{Activation, CenterSet, ChartAnalysis, GateSet};
use crate::{Error, Result};

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Transit,
    Single,
    PersonTransit,
    PersonPerson,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Transit => "transit",
            ViewMode::Single => "single",
            ViewMode::PersonTransit => "person-transit",
            ViewMode::PersonPerson => "person-person",
        })
    }
}

/// Which selected chart a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    A,
    B,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::A => f.write_str("A"),
            Entity::B => f.write_str("B"),
        }
    }
}

/// A single source of a gate's activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Personality(Entity),
    Design(Entity),
    Transit,
}

/// Per-gate visual assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisualOwner {
    #[default]
    Inactive,
    Solid(Owner),
    Blend(Owner, Owner),
}

impl VisualOwner {
    pub fn is_active(&self) -> bool {
        !matches!(self, VisualOwner::Inactive)
    }
}

/// Resolved view: what a presentation layer needs to draw one bodygraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeView {
    pub mode: ViewMode,
    /// Owner of gate `n` at index `n - 1`; always 64 entries.
    pub gate_state: Vec<VisualOwner>,
    pub defined_centers: CenterSet,
    /// Defined only because of transit (`PersonTransit` only).
    pub temporary_centers: CenterSet,
    /// Gates of channels completed across A and B (`PersonPerson` only).
    pub composite_gates: GateSet,
    /// Number of blended gates produced by this resolution.
    pub blend_count: u32,
}

impl CompositeView {
    /// Owner of `gate`, `None` outside 1..=64.
    pub fn owner(&self, gate: u8) -> Option<VisualOwner> {
        self.gate_state.get(usize::from(gate).checked_sub(1)?).copied()
    }

    pub fn active_gates(&self) -> GateSet {
        let mut set = GateSet::new();
        for (gate, owner) in (1..=64u8).zip(&self.gate_state) {
            if owner.is_active() {
                // 1..=64 is always in range.
                let _ = set.insert(gate);
            }
        }
        set
    }
}

// ============================================================================
// Bridges
// ============================================================================

/// Compound visual elements that span several gate paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bridge {
    /// Shared path of the 10 / 20 / 57 integration gates.
    Span,
    Connect10,
    Connect34,
}

impl Bridge {
    pub const ALL: [Bridge; 3] = [Bridge::Span, Bridge::Connect10, Bridge::Connect34];

    /// Gates the bridge follows, in priority order.
    pub fn gates(self) -> &'static [u8] {
        match self {
            Bridge::Span => &[10, 20],
            Bridge::Connect10 => &[10],
            Bridge::Connect34 => &[34],
        }
    }
}

/// First non-inactive owner among the bridge's gates, else inactive.
pub fn bridge_state(view: &CompositeView, bridge: Bridge) -> VisualOwner {
    bridge
        .gates()
        .iter()
        .filter_map(|&g| view.owner(g))
        .find(VisualOwner::is_active)
        .unwrap_or_default()
}

// ============================================================================
// Resolution
// ============================================================================

/// Typed request: each mode carries exactly the inputs it needs.
#[derive(Debug, Clone, Copy)]
pub enum ViewRequest<'a> {
    Transit { transit: &'a [Activation] },
    Single { person: &'a ChartAnalysis },
    PersonTransit { person: &'a ChartAnalysis, transit: &'a [Activation] },
    PersonPerson { a: &'a ChartAnalysis, b: &'a ChartAnalysis },
}

impl ViewRequest<'_> {
    pub fn mode(&self) -> ViewMode {
        match self {
            ViewRequest::Transit { .. } => ViewMode::Transit,
            ViewRequest::Single { .. } => ViewMode::Single,
            ViewRequest::PersonTransit { .. } => ViewMode::PersonTransit,
            ViewRequest::PersonPerson { .. } => ViewMode::PersonPerson,
        }
    }
}

/// Resolve a view from loosely supplied inputs.
///
/// Charts a mode does not use are ignored; a missing required chart is
/// `Error::MissingChart`.
pub fn resolve(
    mode: ViewMode,
    a: Option<&ChartAnalysis>,
    b: Option<&ChartAnalysis>,
    transit: &[Activation],
) -> Result<CompositeView> {
    let request = match mode {
        ViewMode::Transit => ViewRequest::Transit { transit },
        ViewMode::Single => ViewRequest::Single { person: require(a, mode, Entity::A)? },
        ViewMode::PersonTransit => ViewRequest::PersonTransit {
            person: require(a, mode, Entity::A)?,
            transit,
        },
        ViewMode::PersonPerson => ViewRequest::PersonPerson {
            a: require(a, mode, Entity::A)?,
            b: require(b, mode, Entity::B)?,
        },
    };
    resolve_request(request)
}

fn require(chart: Option<&ChartAnalysis>, mode: ViewMode, slot: Entity) -> Result<&ChartAnalysis> {
    chart.ok_or(Error::MissingChart { mode, slot })
}

/// Resolve a typed view request.
pub fn resolve_request(request: ViewRequest<'_>) -> Result<CompositeView> {
    let mut resolver = Resolver::new(request.mode());

    match request {
        ViewRequest::Transit { transit } => {
            let transit_gates = gates_of(transit)?;
            resolver.paint(|g| transit_gates.contains(g).then_some(VisualOwner::Solid(Owner::Transit)));
            resolver.defined = catalog::centers_completed_by(transit_gates);
        }
        ViewRequest::Single { person } => {
            resolver.paint_person(person, Entity::A);
            resolver.defined = person.defined_centers;
        }
        ViewRequest::PersonTransit { person, transit } => {
            let transit_gates = gates_of(transit)?;
            resolver.paint_person(person, Entity::A);
            // Transit never overrides a natal assignment.
            let overlay = transit_gates.difference(person.all_gates);
            resolver.paint(|g| overlay.contains(g).then_some(VisualOwner::Solid(Owner::Transit)));

            let combined = catalog::centers_completed_by(person.all_gates.union(transit_gates));
            resolver.defined = person.defined_centers.union(combined);
            resolver.temporary = resolver.defined.difference(person.defined_centers);
        }
        ViewRequest::PersonPerson { a, b } => {
            resolver.composite = composite_gates(a, b);
            resolver.paint_pair(a, b);
            let cross = CHANNELS
                .iter()
                .filter(|ch| ch.is_completed_by(resolver.composite))
                .fold(CenterSet::new(), |acc, ch| acc.union(ch.centers()));
            resolver.defined = a.defined_centers.union(b.defined_centers).union(cross);
        }
    }

    let view = resolver.finish();
    tracing::debug!(
        mode = %view.mode,
        active_gates = view.active_gates().len(),
        defined_centers = view.defined_centers.len(),
        blends = view.blend_count,
        "view resolved"
    );
    Ok(view)
}

/// Gates of channels split across A and B with neither holding both ends.
pub fn composite_gates(a: &ChartAnalysis, b: &ChartAnalysis) -> GateSet {
    let (ga, gb) = (a.all_gates, b.all_gates);
    let mut out = GateSet::new();
    for ch in &CHANNELS {
        let (a1, a2) = (ga.contains(ch.gate1), ga.contains(ch.gate2));
        let (b1, b2) = (gb.contains(ch.gate1), gb.contains(ch.gate2));
        let split = (a1 && b2) || (a2 && b1);
        if split && !(a1 && a2) && !(b1 && b2) {
            // Catalog gates are always in range.
            let _ = out.insert(ch.gate1);
            let _ = out.insert(ch.gate2);
        }
    }
    out
}

fn gates_of(activations: &[Activation]) -> Result<GateSet> {
    GateSet::from_gates(activations.iter().map(|a| a.gate))
}

/// Per-invocation accumulator. The blend counter lives here, never in
/// module state.
struct Resolver {
    mode: ViewMode,
    gate_state: Vec<VisualOwner>,
    defined: CenterSet,
    temporary: CenterSet,
    composite: GateSet,
    blend_count: u32,
}

impl Resolver {
    fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            gate_state: vec![VisualOwner::Inactive; 64],
            defined: CenterSet::new(),
            temporary: CenterSet::new(),
            composite: GateSet::new(),
            blend_count: 0,
        }
    }

    /// Assign every gate for which `owner_of` returns a value.
    fn paint(&mut self, mut owner_of: impl FnMut(u8) -> Option<VisualOwner>) {
        for (gate, slot) in (1..=64u8).zip(self.gate_state.iter_mut()) {
            if let Some(owner) = owner_of(gate) {
                if matches!(owner, VisualOwner::Blend(..)) {
                    self.blend_count += 1;
                }
                *slot = owner;
            }
        }
    }

    fn paint_person(&mut self, person: &ChartAnalysis, entity: Entity) {
        self.paint(|g| intrinsic(person, entity, g));
    }

    fn paint_pair(&mut self, a: &ChartAnalysis, b: &ChartAnalysis) {
        self.paint(|g| match (solid_side(a, Entity::A, g), solid_side(b, Entity::B, g)) {
            (Some(oa), Some(ob)) => Some(VisualOwner::Blend(oa, ob)),
            (Some(_), None) => intrinsic(a, Entity::A, g),
            (None, Some(_)) => intrinsic(b, Entity::B, g),
            (None, None) => None,
        });
    }

    fn finish(self) -> CompositeView {
        CompositeView {
            mode: self.mode,
            gate_state: self.gate_state,
            defined_centers: self.defined,
            temporary_centers: self.temporary,
            composite_gates: self.composite,
            blend_count: self.blend_count,
        }
    }
}

/// One entity's own colouring of a gate: blend of its halves when both
/// hold it.
fn intrinsic(person: &ChartAnalysis, entity: Entity, gate: u8) -> Option<VisualOwner> {
    match (person.personality_gates.contains(gate), person.design_gates.contains(gate)) {
        (true, true) => Some(VisualOwner::Blend(Owner::Personality(entity), Owner::Design(entity))),
        (true, false) => Some(VisualOwner::Solid(Owner::Personality(entity))),
        (false, true) => Some(VisualOwner::Solid(Owner::Design(entity))),
        (false, false) => None,
    }
}

/// An entity's single colour for a gate when blending across entities.
/// Personality wins when both halves hold the gate.
fn solid_side(person: &ChartAnalysis, entity: Entity, gate: u8) -> Option<Owner> {
    if person.personality_gates.contains(gate) {
        Some(Owner::Personality(entity))
    } else if person.design_gates.contains(gate) {
        Some(Owner::Design(entity))
    } else {
        None
    }
}
