//! # Chart Analysis
//!
//! Chart → `ChartAnalysis`. Pure folds over the channel catalog: no state,
//! no mutation of previously returned values.
//!
//! Type and authority are chosen by ordered decision tables so precedence
//! is data, testable without building a chart.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::catalog::{self, Channel};
use crate::model::{
    Authority, Center, CenterSet, ChannelSource, Chart, ChartAnalysis, DefinedChannel, GateSet,
    Half, HdType, IncarnationCross, Planet, Profile,
};
use crate::Result;

// ============================================================================
// Center graph
// ============================================================================

/// Undirected graph over the nine centers, one neighbour set per center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CenterGraph {
    adjacent: [CenterSet; 9],
}

impl CenterGraph {
    pub fn from_channels<'a>(channels: impl IntoIterator<Item = &'a Channel>) -> Self {
        let mut graph = Self::default();
        for ch in channels {
            graph.connect(ch.center1, ch.center2);
        }
        graph
    }

    pub fn connect(&mut self, a: Center, b: Center) {
        self.adjacent[a.index()].insert(b);
        self.adjacent[b.index()].insert(a);
    }

    pub fn neighbours(&self, center: Center) -> CenterSet {
        self.adjacent[center.index()]
    }

    /// Breadth-first reachability.
    pub fn reaches(&self, from: Center, to: Center) -> bool {
        let mut visited = CenterSet::new();
        let mut queue = VecDeque::from([from]);
        while let Some(node) = queue.pop_front() {
            if node == to {
                return true;
            }
            if !visited.insert(node) {
                continue;
            }
            queue.extend(self.neighbours(node).difference(visited).iter());
        }
        false
    }

    /// Whether any defined motor center reaches the Throat.
    pub fn motor_to_throat(&self, defined: CenterSet) -> bool {
        Center::MOTORS
            .into_iter()
            .filter(|m| defined.contains(*m))
            .any(|m| self.reaches(m, Center::Throat))
    }
}

// ============================================================================
// Decision tables
// ============================================================================

/// Inputs the type and authority tables decide on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterFacts {
    pub defined: CenterSet,
    pub motor_to_throat: bool,
}

impl CenterFacts {
    fn has(&self, center: Center) -> bool {
        self.defined.contains(center)
    }
}

/// Ordered `(predicate, result)` rules; the first match wins.
pub struct DecisionTable<T: 'static> {
    pub rules: &'static [(fn(&CenterFacts) -> bool, T)],
    pub fallback: T,
}

impl<T: Copy> DecisionTable<T> {
    pub fn evaluate(&self, facts: &CenterFacts) -> T {
        self.rules
            .iter()
            .find(|(when, _)| when(facts))
            .map_or(self.fallback, |&(_, result)| result)
    }
}

fn sacral_and_motor(f: &CenterFacts) -> bool {
    f.has(Center::Sacral) && f.motor_to_throat
}

fn sacral_only(f: &CenterFacts) -> bool {
    f.has(Center::Sacral) && !f.motor_to_throat
}

fn motor_without_sacral(f: &CenterFacts) -> bool {
    !f.has(Center::Sacral) && f.motor_to_throat
}

fn any_defined(f: &CenterFacts) -> bool {
    !f.defined.is_empty()
}

pub static TYPE_RULES: DecisionTable<HdType> = DecisionTable {
    rules: &[
        (sacral_and_motor, HdType::ManifestingGenerator),
        (sacral_only, HdType::Generator),
        (motor_without_sacral, HdType::Manifestor),
        (any_defined, HdType::Projector),
    ],
    fallback: HdType::Reflector,
};

fn solar_plexus(f: &CenterFacts) -> bool {
    f.has(Center::SolarPlexus)
}

fn sacral(f: &CenterFacts) -> bool {
    f.has(Center::Sacral)
}

fn spleen(f: &CenterFacts) -> bool {
    f.has(Center::Spleen)
}

fn heart(f: &CenterFacts) -> bool {
    f.has(Center::HeartEgo)
}

fn g_center(f: &CenterFacts) -> bool {
    f.has(Center::G)
}

fn mental(f: &CenterFacts) -> bool {
    f.has(Center::Ajna) || f.has(Center::Head)
}

pub static AUTHORITY_RULES: DecisionTable<Authority> = DecisionTable {
    rules: &[
        (solar_plexus, Authority::Emotional),
        (sacral, Authority::Sacral),
        (spleen, Authority::Splenic),
        (heart, Authority::EgoHeart),
        (g_center, Authority::SelfProjected),
        (mental, Authority::Mental),
    ],
    fallback: Authority::Lunar,
};

// ============================================================================
// analyze
// ============================================================================

/// Derive the structural snapshot of a chart.
///
/// Fails only on a malformed roster (a Sun or Earth missing from a half).
pub fn analyze(chart: &Chart) -> Result<ChartAnalysis> {
    let personality_gates = chart.gates(Half::Personality)?;
    let design_gates = chart.gates(Half::Design)?;
    let all_gates = personality_gates.union(design_gates);

    let defined_channels: SmallVec<[DefinedChannel; 8]> = catalog::completed_by(all_gates)
        .map(|ch| DefinedChannel {
            gate1: ch.gate1,
            gate2: ch.gate2,
            center1: ch.center1,
            center2: ch.center2,
            source: channel_source(ch, personality_gates, design_gates),
        })
        .collect();
    let defined_centers = catalog::centers_completed_by(all_gates);

    let graph = CenterGraph::from_channels(catalog::completed_by(all_gates));
    let facts = CenterFacts {
        defined: defined_centers,
        motor_to_throat: graph.motor_to_throat(defined_centers),
    };
    let hd_type = TYPE_RULES.evaluate(&facts);
    let authority = AUTHORITY_RULES.evaluate(&facts);

    let p_sun = chart.find(Half::Personality, Planet::Sun)?;
    let d_sun = chart.find(Half::Design, Planet::Sun)?;
    let p_earth = chart.find(Half::Personality, Planet::Earth)?;
    let d_earth = chart.find(Half::Design, Planet::Earth)?;

    let analysis = ChartAnalysis {
        hd_type,
        authority,
        profile: Profile::new(p_sun.line, d_sun.line),
        incarnation_cross: IncarnationCross {
            personality_sun: p_sun.gate,
            personality_earth: p_earth.gate,
            design_sun: d_sun.gate,
            design_earth: d_earth.gate,
        },
        defined_channels,
        defined_centers,
        open_centers: defined_centers.complement(),
        personality_gates,
        design_gates,
        all_gates,
        motor_to_throat: facts.motor_to_throat,
    };

    tracing::debug!(
        hd_type = %analysis.hd_type,
        authority = %analysis.authority,
        profile = %analysis.profile,
        channels = analysis.defined_channels.len(),
        "chart analysed"
    );
    Ok(analysis)
}

fn channel_source(ch: &Channel, personality: GateSet, design: GateSet) -> ChannelSource {
    if ch.is_completed_by(personality) {
        ChannelSource::Personality
    } else if ch.is_completed_by(design) {
        ChannelSource::Design
    } else {
        ChannelSource::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::model::Activation;
    use pretty_assertions::assert_eq;

    /// A chart whose personality activates `p` and design activates `d`.
    /// The first gate of each list goes to the Sun, the second to Earth;
    /// remaining roster entries repeat the last gate.
    fn chart_with(p: &[u8], d: &[u8]) -> Chart {
        let half = |gates: &[u8]| -> SmallVec<[Activation; 13]> {
            Planet::ALL
                .iter()
                .enumerate()
                .map(|(i, &planet)| Activation {
                    planet,
                    longitude: 0.0,
                    gate: gates[i.min(gates.len() - 1)],
                    line: 1,
                })
                .collect()
        };
        Chart { personality: half(p), design: half(d) }
    }

    fn facts(centers: &[Center], motor_to_throat: bool) -> CenterFacts {
        CenterFacts { defined: centers.iter().copied().collect(), motor_to_throat }
    }

    #[test]
    fn test_bfs_reaches_through_chain() {
        let mut g = CenterGraph::default();
        g.connect(Center::Root, Center::Spleen);
        g.connect(Center::Spleen, Center::Throat);
        assert!(g.reaches(Center::Root, Center::Throat));
        assert!(!g.reaches(Center::Root, Center::Head));
        assert!(g.reaches(Center::Head, Center::Head));
    }

    #[test]
    fn test_motor_must_be_defined() {
        let mut g = CenterGraph::default();
        g.connect(Center::G, Center::Throat);
        let defined: CenterSet = [Center::G, Center::Throat].into_iter().collect();
        assert!(!g.motor_to_throat(defined));
    }

    #[test]
    fn test_type_table_precedence() {
        assert_eq!(TYPE_RULES.evaluate(&facts(&[Center::Sacral, Center::Throat], true)), HdType::ManifestingGenerator);
        assert_eq!(TYPE_RULES.evaluate(&facts(&[Center::Sacral], false)), HdType::Generator);
        assert_eq!(TYPE_RULES.evaluate(&facts(&[Center::HeartEgo, Center::Throat], true)), HdType::Manifestor);
        assert_eq!(TYPE_RULES.evaluate(&facts(&[Center::Ajna, Center::Head], false)), HdType::Projector);
        assert_eq!(TYPE_RULES.evaluate(&facts(&[], false)), HdType::Reflector);
    }

    #[test]
    fn test_authority_emotional_beats_sacral() {
        let f = facts(&[Center::SolarPlexus, Center::Sacral], false);
        assert_eq!(AUTHORITY_RULES.evaluate(&f), Authority::Emotional);
    }

    #[test]
    fn test_authority_table_order() {
        assert_eq!(AUTHORITY_RULES.evaluate(&facts(&[Center::Sacral, Center::Spleen], false)), Authority::Sacral);
        assert_eq!(AUTHORITY_RULES.evaluate(&facts(&[Center::Spleen, Center::HeartEgo], false)), Authority::Splenic);
        assert_eq!(AUTHORITY_RULES.evaluate(&facts(&[Center::HeartEgo, Center::G], false)), Authority::EgoHeart);
        assert_eq!(AUTHORITY_RULES.evaluate(&facts(&[Center::G, Center::Throat], false)), Authority::SelfProjected);
        assert_eq!(AUTHORITY_RULES.evaluate(&facts(&[Center::Head, Center::Ajna], false)), Authority::Mental);
        assert_eq!(AUTHORITY_RULES.evaluate(&facts(&[Center::Throat], false)), Authority::Lunar);
        assert_eq!(AUTHORITY_RULES.evaluate(&facts(&[], false)), Authority::Lunar);
    }

    #[test]
    fn test_synthetic_emotional_generator() {
        // 6-59 joins Solar Plexus and Sacral; nothing reaches the Throat.
        let chart = chart_with(&[6, 36], &[59, 14]);
        let a = analyze(&chart).unwrap();
        assert_eq!(a.hd_type, HdType::Generator);
        assert_eq!(a.authority, Authority::Emotional);
        assert!(a.has_channel(59, 6));
        assert_eq!(a.defined_channels[0].source, ChannelSource::Mixed);
    }

    #[test]
    fn test_synthetic_reflector() {
        let chart = chart_with(&[1, 2], &[3, 4]);
        let a = analyze(&chart).unwrap();
        assert_eq!(a.hd_type, HdType::Reflector);
        assert_eq!(a.authority, Authority::Lunar);
        assert!(a.defined_centers.is_empty());
        assert_eq!(a.open_centers, CenterSet::ALL);
        assert_eq!(a.incarnation_cross, IncarnationCross {
            personality_sun: 1,
            personality_earth: 2,
            design_sun: 3,
            design_earth: 4,
        });
    }

    #[test]
    fn test_manifesting_generator_via_sacral_throat() {
        // 20-34 connects Sacral straight to the Throat.
        let chart = chart_with(&[20, 34], &[5, 5]);
        let a = analyze(&chart).unwrap();
        assert_eq!(a.hd_type, HdType::ManifestingGenerator);
        assert_eq!(a.defined_channels[0].source, ChannelSource::Personality);
        assert!(a.motor_to_throat);
    }

    #[test]
    fn test_missing_sun_is_malformed() {
        let mut chart = chart_with(&[1, 2], &[3, 4]);
        chart.design.retain(|a| a.planet != Planet::Sun);
        assert!(matches!(
            analyze(&chart),
            Err(Error::MalformedRoster { half: Half::Design, planet: Planet::Sun })
        ));
    }
}
