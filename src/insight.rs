//! # Transit Insights
//!
//! Finds channels a transit completes against a natal chart, the centers
//! that transit defines for the time being, and renders a fixed-template
//! narrative. Identical inputs give byte-identical text; the only clock
//! input is an explicitly supplied `generated_at`.

use std::fmt;

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, CHANNELS, meanings};
use crate::model::{
    Activation, Authority, Center, CenterSet, Chart, ChartAnalysis, GateSet, Half, HdType, Planet,
    Profile,
};
use crate::Result;

// ============================================================================
// Report types
// ============================================================================

/// How long a transiting body lingers in a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitSpeed {
    Fast,
    Medium,
    Slow,
}

impl TransitSpeed {
    pub fn of(planet: Planet) -> Self {
        match planet {
            Planet::Moon => TransitSpeed::Fast,
            Planet::Sun | Planet::Earth | Planet::Mercury | Planet::Venus | Planet::Mars => TransitSpeed::Medium,
            _ => TransitSpeed::Slow,
        }
    }
}

/// Natal activation that holds one end of a transit-completed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NatalSource {
    pub planet: Planet,
    pub half: Half,
}

impl fmt::Display for NatalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.planet, self.half)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitChannelInsight {
    pub channel_name: String,
    pub gate1: u8,
    pub gate2: u8,
    pub keynote: String,
    pub description: String,
    /// `None` when no natal activation sits on the natal gate.
    pub natal: Option<NatalSource>,
    pub natal_gate: u8,
    pub transit_planet: Planet,
    pub transit_gate: u8,
    pub duration: String,
    pub speed: TransitSpeed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub person_name: String,
    pub hd_type: HdType,
    pub authority: Authority,
    pub profile: Profile,
    pub strategy: String,
    pub type_guidance: String,
    pub authority_guidance: String,
    pub transit_channels: Vec<TransitChannelInsight>,
    pub temporary_centers: CenterSet,
    pub summary: String,
    pub full_text: String,
    pub generated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Generation
// ============================================================================

/// Build a report without a timestamp.
pub fn generate(
    person_name: &str,
    chart: &Chart,
    analysis: &ChartAnalysis,
    transit: &[Activation],
) -> Result<InsightReport> {
    build(person_name, chart, analysis, transit, None)
}

/// Build a report stamped with `generated_at`.
pub fn generate_at(
    person_name: &str,
    chart: &Chart,
    analysis: &ChartAnalysis,
    transit: &[Activation],
    generated_at: DateTime<Utc>,
) -> Result<InsightReport> {
    build(person_name, chart, analysis, transit, Some(generated_at))
}

fn build(
    person_name: &str,
    chart: &Chart,
    analysis: &ChartAnalysis,
    transit: &[Activation],
    generated_at: Option<DateTime<Utc>>,
) -> Result<InsightReport> {
    // Later activations on the same gate replace earlier ones.
    let by_gate: HashMap<u8, &Activation> = transit.iter().map(|a| (a.gate, a)).collect();
    let transit_gates = GateSet::from_gates(by_gate.keys().copied())?;
    let natal = analysis.all_gates;

    let mut transit_channels = Vec::new();
    for ch in &CHANNELS {
        let (natal1, natal2) = (natal.contains(ch.gate1), natal.contains(ch.gate2));
        let (natal_gate, transit_gate) = match (natal1, natal2) {
            (true, false) => (ch.gate1, ch.gate2),
            (false, true) => (ch.gate2, ch.gate1),
            _ => continue,
        };
        let Some(act) = by_gate.get(&transit_gate) else {
            continue;
        };
        let meaning = meanings::channel_meaning(ch.gate1, ch.gate2);
        transit_channels.push(TransitChannelInsight {
            channel_name: ch.name.to_string(),
            gate1: ch.gate1,
            gate2: ch.gate2,
            keynote: meaning.map_or("", |m| m.keynote).to_string(),
            description: meaning.map_or("", |m| m.description).to_string(),
            natal: natal_source(chart, natal_gate),
            natal_gate,
            transit_planet: act.planet,
            transit_gate,
            duration: meanings::planet_duration(act.planet).to_string(),
            speed: TransitSpeed::of(act.planet),
        });
    }

    let temporary_centers =
        catalog::centers_completed_by(natal.union(transit_gates)).difference(analysis.defined_centers);

    let mut report = InsightReport {
        person_name: person_name.to_string(),
        hd_type: analysis.hd_type,
        authority: analysis.authority,
        profile: analysis.profile,
        strategy: analysis.hd_type.strategy().to_string(),
        type_guidance: meanings::type_guidance(analysis.hd_type).to_string(),
        authority_guidance: meanings::authority_guidance(analysis.authority).to_string(),
        summary: summary(transit_channels.len(), temporary_centers.len()),
        transit_channels,
        temporary_centers,
        full_text: String::new(),
        generated_at,
    };
    report.full_text = render(&report);

    tracing::debug!(
        person = person_name,
        transit_channels = report.transit_channels.len(),
        temporary_centers = report.temporary_centers.len(),
        "insight report generated"
    );
    Ok(report)
}

/// First natal activation on `gate`, personality before design.
fn natal_source(chart: &Chart, gate: u8) -> Option<NatalSource> {
    [Half::Personality, Half::Design].into_iter().find_map(|half| {
        chart
            .half(half)
            .iter()
            .find(|a| a.gate == gate)
            .map(|a| NatalSource { planet: a.planet, half })
    })
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn summary(channels: usize, centers: usize) -> String {
    if channels == 0 {
        return "No transit-completed channels at this time.".to_string();
    }
    let mut s = format!("{channels} transit channel{} active", plural(channels));
    if centers > 0 {
        s.push_str(&format!(", {centers} temporarily defined center{}", plural(centers)));
    }
    s
}

// ============================================================================
// Text rendering
// ============================================================================

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render(report: &InsightReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Transit Insight Report for {}", report.person_name));
    if let Some(at) = report.generated_at {
        lines.push(format!("Generated {}", at.format("%Y-%m-%d %H:%M")));
    }
    lines.push(String::new());
    lines.push(format!("Type: {} | Strategy: {}", report.hd_type, report.strategy));
    lines.push(format!("Authority: {}", report.authority));
    lines.push(format!("Profile: {}", report.profile));
    lines.push(String::new());
    lines.push(format!("As a {}, {}", report.hd_type, report.type_guidance));
    lines.push(format!(
        "With {} authority, {}",
        report.authority,
        lowercase_first(&report.authority_guidance)
    ));
    lines.push(String::new());

    let count = report.transit_channels.len();
    if count == 0 {
        lines.push(
            "No transit-completed channels at this time. The transiting planets are activating \
             gates that don't currently complete any channels with your natal chart."
                .to_string(),
        );
        lines.push(String::new());
        lines.push(
            "This is a time of relative stability in your energy configuration. Your defined \
             channels continue to operate as usual."
                .to_string(),
        );
    } else {
        let verb = if count == 1 { " is" } else { "s are" };
        lines.push(format!(
            "Currently, {count} channel{verb} being temporarily completed by planetary transits:"
        ));
        lines.push(String::new());
        for tc in &report.transit_channels {
            render_channel(&mut lines, tc);
        }
    }

    if !report.temporary_centers.is_empty() {
        let names: Vec<&str> = report.temporary_centers.iter().map(Center::name).collect();
        lines.push("--- Temporarily Defined Centers ---".to_string());
        lines.push(String::new());
        lines.push(format!(
            "The following centers are temporarily defined by transits: {}",
            names.join(", ")
        ));
        lines.push(String::new());
        lines.push(
            "When normally open centers become temporarily defined, you may feel the energy more \
             intensely than usual. Remember that this energy is not \"yours\", it's transiting \
             through. Observe it without identifying with it."
                .to_string(),
        );
        lines.push(String::new());
        for center in report.temporary_centers.iter() {
            lines.push(format!("{}: {}", center, meanings::temporary_center_text(center)));
        }
    }

    lines.join("\n")
}

fn render_channel(lines: &mut Vec<String>, tc: &TransitChannelInsight) {
    let natal = tc.natal.map_or_else(|| "Unknown".to_string(), |n| n.to_string());
    let keyword = |gate| meanings::gate_keyword(gate).unwrap_or("");

    lines.push(format!("--- Channel {}-{}: {} ---", tc.gate1, tc.gate2, tc.channel_name));
    lines.push(format!("\"{}\"", tc.keynote));
    lines.push(String::new());
    lines.push(tc.description.clone());
    lines.push(String::new());
    lines.push(format!(
        "Your natal {natal} in Gate {} ({}) meets transit {} in Gate {} ({}).",
        tc.natal_gate,
        keyword(tc.natal_gate),
        tc.transit_planet,
        tc.transit_gate,
        keyword(tc.transit_gate),
    ));
    lines.push(String::new());
    lines.push(match tc.speed {
        TransitSpeed::Slow => format!(
            "This is a longer-term transit ({}). {} moves slowly, so you'll feel this energy for \
             an extended period. Notice how this theme develops over time.",
            tc.duration, tc.transit_planet
        ),
        TransitSpeed::Fast => format!(
            "This is a quick transit ({}). The Moon moves fast, bringing brief but intense \
             activation. Pay attention to what comes up in the next few hours.",
            tc.duration
        ),
        TransitSpeed::Medium => format!(
            "This transit lasts approximately {}. {} brings this energy into your field for a \
             moderate period, long enough to work with consciously.",
            tc.duration, tc.transit_planet
        ),
    });
    lines.push(String::new());
}
