//! # Chart Model
//!
//! Clean DTOs that define a bodygraph chart.
//! These types cross every boundary: ephemeris ↔ analysis ↔ composite ↔ caller.
//!
//! Design rule: NO provider handles, NO rendering concerns here.
//! This module is pure data: no I/O, no state.

pub mod gate_set;
pub mod center;
pub mod activation;
pub mod analysis;
pub mod person;

pub use gate_set::GateSet;
pub use center::{Center, CenterSet};
pub use activation::{Activation, Chart, Half, Planet};
pub use analysis::{
    ChartAnalysis, DefinedChannel, ChannelSource,
    HdType, Authority, Profile, IncarnationCross,
};
pub use person::{BirthData, PersonData, PersonChart};
