//! JSON export: serialize resolved views and insight reports.
//!
//! The payload is what a presentation layer needs to draw a bodygraph
//! without re-running resolution:
//!
//! ```text
//! resolve() → CompositeView → export_view_json() → { mode, gates, bridges, centers }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::composite::{Bridge, CompositeView, ViewMode, VisualOwner, bridge_state};
use crate::insight::InsightReport;
use crate::model::{CenterSet, GateSet};
use crate::Result;

#[derive(Debug, Serialize)]
struct GateEntry {
    gate: u8,
    owner: VisualOwner,
}

#[derive(Debug, Serialize)]
struct BridgeEntry {
    bridge: Bridge,
    owner: VisualOwner,
}

#[derive(Debug, Serialize)]
struct ViewPayload {
    mode: ViewMode,
    /// Active gates only, ascending.
    gates: Vec<GateEntry>,
    bridges: Vec<BridgeEntry>,
    defined_centers: CenterSet,
    temporary_centers: CenterSet,
    composite_gates: GateSet,
    blend_count: u32,
}

impl ViewPayload {
    fn new(view: &CompositeView) -> Self {
        let gates = (1..=64u8)
            .zip(&view.gate_state)
            .filter(|(_, owner)| owner.is_active())
            .map(|(gate, &owner)| GateEntry { gate, owner })
            .collect();
        let bridges = Bridge::ALL
            .iter()
            .map(|&bridge| BridgeEntry { bridge, owner: bridge_state(view, bridge) })
            .collect();
        Self {
            mode: view.mode,
            gates,
            bridges,
            defined_centers: view.defined_centers,
            temporary_centers: view.temporary_centers,
            composite_gates: view.composite_gates,
            blend_count: view.blend_count,
        }
    }
}

/// Presentation payload for a resolved view, pretty-printed.
pub fn export_view_json(view: &CompositeView) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ViewPayload::new(view))?)
}

/// Stream the view payload to `writer`, newline-terminated.
pub fn write_view_json(view: &CompositeView, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &ViewPayload::new(view))?;
    writeln!(writer)?;
    Ok(())
}

/// The full insight report, including the rendered text.
pub fn export_report_json(report: &InsightReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::{Owner, resolve};
    use crate::model::{Activation, Planet};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn transit_view() -> CompositeView {
        let transit: Vec<Activation> = [10, 34]
            .iter()
            .map(|&gate| Activation { planet: Planet::Mars, longitude: 0.0, gate, line: 2 })
            .collect();
        resolve(ViewMode::Transit, None, None, &transit).unwrap()
    }

    #[test]
    fn test_view_payload_lists_active_gates_and_bridges() {
        let json: Value = serde_json::from_str(&export_view_json(&transit_view()).unwrap()).unwrap();
        assert_eq!(json["mode"], json!("transit"));
        assert_eq!(json["gates"].as_array().unwrap().len(), 2);
        assert_eq!(json["gates"][0]["gate"], json!(10));
        assert_eq!(json["bridges"].as_array().unwrap().len(), 3);
        assert_eq!(json["bridges"][0]["bridge"], json!("Span"));
        assert_eq!(
            json["bridges"][0]["owner"],
            serde_json::to_value(VisualOwner::Solid(Owner::Transit)).unwrap()
        );
        assert_eq!(json["composite_gates"], json!([]));
    }

    #[test]
    fn test_write_matches_export() {
        let view = transit_view();
        let mut buf = Vec::new();
        write_view_json(&view, &mut buf).unwrap();
        let written = String::from_utf8(buf).unwrap();
        assert_eq!(written, format!("{}\n", export_view_json(&view).unwrap()));
    }
}
