//! Birth records and the person ↔ chart association.

use serde::{Deserialize, Serialize};

use super::{Chart, ChartAnalysis};
use crate::Result;
use crate::ephemeris::{JulianDay, resolve_instant};

/// Local civil birth time plus its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Hours east of UTC, e.g. `2.0` for UTC+2.
    pub utc_offset_hours: f64,
}

impl BirthData {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, utc_offset_hours: f64) -> Self {
        Self { year, month, day, hour, minute, utc_offset_hours }
    }

    /// The birth instant in UT.
    pub fn instant(&self) -> Result<JulianDay> {
        resolve_instant(self.year, self.month, self.day, self.hour, self.minute, self.utc_offset_hours)
    }
}

/// Identity of a stored person. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonData {
    pub id: String,
    pub name: String,
    pub birth: BirthData,
}

impl PersonData {
    pub fn new(id: impl Into<String>, name: impl Into<String>, birth: BirthData) -> Self {
        Self { id: id.into(), name: name.into(), birth }
    }
}

/// A person together with their computed chart and analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonChart {
    pub person: PersonData,
    pub chart: Chart,
    pub analysis: ChartAnalysis,
}
