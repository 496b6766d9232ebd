//! # bodygraph: Rave Mandala chart engine
//!
//! Computes a bodygraph chart from a birth instant, analyses its structure
//! and resolves how several charts plus a live transit overlay onto one
//! bodygraph.
//!
//! ## Design Principles
//!
//! 1. **Provider-first**: `EphemerisProvider` is the contract between the
//!    chart pipeline and whatever computes planetary longitudes
//! 2. **Clean DTOs**: `Activation`, `Chart`, `ChartAnalysis` cross all boundaries
//! 3. **Pure stages**: mapping, analysis, composite resolution and insight
//!    generation are functions of their inputs, nothing is cached globally
//! 4. **Static catalog**: gates, channels and centers are fixed data
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bodygraph::{BirthData, ChartEngine};
//!
//! # fn example() -> bodygraph::Result<()> {
//! let engine = ChartEngine::analytic();
//!
//! let birth = BirthData::new(1976, 3, 8, 0, 40, 2.0);
//! let (_chart, analysis) = engine.chart(&birth)?;
//!
//! println!("{} / {}", analysis.hd_type, analysis.authority);
//! for ch in &analysis.defined_channels {
//!     println!("{}-{}", ch.gate1, ch.gate2);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Gate mapping | `mandala` | longitude → (gate, line) |
//! | Positions | `position` | provider longitude → `Activation` |
//! | Design date | `design` | Sun-88° root finding |
//! | Analysis | `analysis` | type, authority, profile, cross |
//! | Composite | `composite` | per-gate ownership across view modes |
//! | Insight | `insight` | transit narrative |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod catalog;
pub mod mandala;
pub mod ephemeris;
pub mod position;
pub mod design;
pub mod chart;
pub mod analysis;
pub mod composite;
pub mod insight;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Activation, Chart, Half, Planet,
    Center, CenterSet, GateSet,
    ChartAnalysis, DefinedChannel, ChannelSource,
    HdType, Authority, Profile, IncarnationCross,
    BirthData, PersonData, PersonChart,
};

// ============================================================================
// Re-exports: Ephemeris
// ============================================================================

pub use ephemeris::{
    Body, JulianDay, EphemerisProvider, EphemerisConfig, NodeMode,
    AnalyticEphemeris, CachingEphemeris, CacheStats,
    julian_day, resolve_instant,
};

// ============================================================================
// Re-exports: Pipeline stages
// ============================================================================

pub use mandala::{GateLine, map_longitude};
pub use design::{SolverConfig, DesignSolution, solve_design, solve_design_instant};
pub use chart::{calculate_chart, calculate_transit};
pub use analysis::analyze;
pub use composite::{
    ViewMode, ViewRequest, Entity, Owner, VisualOwner, CompositeView, Bridge,
    resolve, resolve_request, bridge_state, composite_gates,
};
pub use export::{export_view_json, export_report_json, write_view_json};
pub use insight::{
    InsightReport, TransitChannelInsight, TransitSpeed, NatalSource, generate, generate_at,
};

// ============================================================================
// Engine configuration
// ============================================================================

/// Configuration for a [`ChartEngine`].
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub solver: SolverConfig,
    pub ephemeris: EphemerisConfig,
}

// ============================================================================
// Top-level ChartEngine handle
// ============================================================================

/// The primary entry point. A `ChartEngine` wraps an ephemeris provider and
/// runs the full chart pipeline against it.
///
/// The provider is an explicit handle: whatever one-time setup it needs
/// happens before it is handed to the engine.
pub struct ChartEngine<P: EphemerisProvider> {
    provider: P,
    config: EngineConfig,
}

impl<P: EphemerisProvider> ChartEngine<P> {
    /// Create an engine with the given provider and default configuration.
    pub fn new(provider: P) -> Self {
        Self { provider, config: EngineConfig::default() }
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(provider: P, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Compute and analyse the chart for a birth record.
    pub fn chart(&self, birth: &BirthData) -> Result<(Chart, ChartAnalysis)> {
        let chart = self.chart_at(birth.instant()?)?;
        let analysis = analysis::analyze(&chart)?;
        Ok((chart, analysis))
    }

    /// Compute the raw chart for a birth instant (UT).
    pub fn chart_at(&self, birth: JulianDay) -> Result<Chart> {
        chart::calculate_chart(&self.provider, birth, &self.config.solver)
    }

    /// Compute the chart for a stored person and pair it with its analysis.
    pub fn person_chart(&self, person: PersonData) -> Result<PersonChart> {
        let chart = self.chart_at(person.birth.instant()?)?;
        let analysis = analysis::analyze(&chart)?;
        Ok(PersonChart { person, chart, analysis })
    }

    /// Transit activations for an arbitrary instant.
    pub fn transit(&self, at: JulianDay) -> Result<Vec<Activation>> {
        chart::calculate_transit(&self.provider, at)
    }

    /// Transit activations for the current wall-clock instant.
    pub fn transit_now(&self) -> Result<Vec<Activation>> {
        self.transit(JulianDay::from_datetime(chrono::Utc::now()))
    }

    /// Access the underlying provider (for advanced use).
    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Engine backed by the built-in analytic ephemeris.
impl ChartEngine<AnalyticEphemeris> {
    pub fn analytic() -> Self {
        Self::analytic_with_config(EngineConfig::default())
    }

    pub fn analytic_with_config(config: EngineConfig) -> Self {
        let provider = AnalyticEphemeris::new(config.ephemeris.clone());
        Self::with_config(provider, config)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed roster: {planet} missing from {half} activations")]
    MalformedRoster { half: Half, planet: Planet },

    #[error("Invalid gate number: {0} (expected 1..=64)")]
    InvalidGate(u8),

    #[error("Ephemeris error: {0}")]
    Ephemeris(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("View mode {mode} requires chart {slot}")]
    MissingChart { mode: ViewMode, slot: Entity },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a provider failure. Providers surface their own errors through
    /// this constructor; the core never retries.
    pub fn ephemeris(msg: impl Into<String>) -> Self {
        Error::Ephemeris(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
