//! # Ephemeris Provider
//!
//! THE contract between the chart pipeline and whatever supplies planetary
//! longitudes. The core never holds a global provider: every call site is
//! handed an explicit `EphemerisProvider`.
//!
//! ## Implementations
//!
//! | Provider | Module | Description |
//! |----------|--------|-------------|
//! | `AnalyticEphemeris` | `analytic` | In-process series, 1800–2050 |
//! | `CachingEphemeris` | `cache` | Memoising wrapper over any provider |

pub mod analytic;
pub mod cache;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use analytic::AnalyticEphemeris;
pub use cache::{CacheStats, CachingEphemeris};

// ============================================================================
// Bodies
// ============================================================================

/// A body the provider is asked about. Earth and the South Node are derived
/// from the Sun and North Node and never requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Sun, Body::Moon, Body::Mercury, Body::Venus, Body::Mars,
        Body::Jupiter, Body::Saturn, Body::Uranus, Body::Neptune, Body::Pluto,
        Body::NorthNode,
    ];
}

// ============================================================================
// Instants
// ============================================================================

/// Julian day number in Universal Time. The core's notion of an instant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(pub f64);

/// Julian day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

impl JulianDay {
    /// J2000.0 epoch.
    pub const J2000: JulianDay = JulianDay(2_451_545.0);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        JulianDay(dt.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD)
    }

    /// Nearest millisecond as a UTC timestamp.
    pub fn to_datetime(self) -> Result<DateTime<Utc>> {
        let millis = ((self.0 - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return Err(Error::InvalidDate(format!("julian day {} out of range", self.0)));
        }
        DateTime::from_timestamp_millis(millis as i64)
            .ok_or_else(|| Error::InvalidDate(format!("julian day {} out of range", self.0)))
    }

    pub fn plus_days(self, days: f64) -> Self {
        JulianDay(self.0 + days)
    }

    /// `self - earlier`, in days.
    pub fn days_since(self, earlier: JulianDay) -> f64 {
        self.0 - earlier.0
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.0 - Self::J2000.0) / 36_525.0
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

/// Proleptic Gregorian calendar date to Julian day (Meeus, ch. 7).
/// `hour` is fractional UT hours and may run past 24.
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> JulianDay {
    let (y, m) = if month <= 2 {
        (f64::from(year - 1), f64::from(month + 12))
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    JulianDay(
        (365.25 * (y + 4716.0)).floor()
            + (30.6001 * (m + 1.0)).floor()
            + f64::from(day)
            + hour / 24.0
            + b
            - 1524.5,
    )
}

/// Local civil time plus UTC offset to a UT instant.
///
/// Subtracting the offset may roll the date across day, month and year
/// boundaries; leap years follow the Gregorian rule.
pub fn resolve_instant(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    utc_offset_hours: f64,
) -> Result<JulianDay> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))?;
    let local = date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| Error::InvalidDate(format!("time {hour:02}:{minute:02}")))?;
    if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > 24.0 {
        return Err(Error::InvalidDate(format!("utc offset {utc_offset_hours}")));
    }
    let offset = TimeDelta::seconds((utc_offset_hours * 3600.0).round() as i64);
    let utc = local
        .checked_sub_signed(offset)
        .ok_or_else(|| Error::InvalidDate(format!("{local} shifted by {utc_offset_hours}h")))?;

    let hours = f64::from(utc.hour()) + f64::from(utc.minute()) / 60.0 + f64::from(utc.second()) / 3600.0;
    Ok(julian_day(utc.year(), utc.month(), utc.day(), hours))
}

// ============================================================================
// Provider configuration
// ============================================================================

/// Which lunar node the built-in provider reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeMode {
    /// Mean node plus the principal periodic corrections.
    #[default]
    True,
    Mean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    pub node: NodeMode,
    /// Report planet longitudes in the equinox of date rather than J2000.
    pub precession: bool,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self { node: NodeMode::True, precession: true }
    }
}

// ============================================================================
// The trait
// ============================================================================

/// Source of geocentric ecliptic longitudes.
///
/// Implementations must be safe to call from several threads; any one-time
/// setup happens before the provider is handed to the core. Errors are
/// returned to the caller unchanged, the core never retries.
pub trait EphemerisProvider: Send + Sync {
    /// Longitude of `body` at `at`, in degrees within `[0, 360)`.
    fn longitude(&self, at: JulianDay, body: Body) -> Result<f64>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn longitude(&self, at: JulianDay, body: Body) -> Result<f64> {
        (**self).longitude(at, body)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn longitude(&self, at: JulianDay, body: Body) -> Result<f64> {
        (**self).longitude(at, body)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Arc<P> {
    fn longitude(&self, at: JulianDay, body: Body) -> Result<f64> {
        (**self).longitude(at, body)
    }
}
