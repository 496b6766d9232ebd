//! # Chart Calculation
//!
//! Birth instant → personality and design activations.

use crate::design::{SolverConfig, solve_design};
use crate::ephemeris::{EphemerisProvider, JulianDay};
use crate::model::{Activation, Chart};
use crate::position::positions;
use crate::Result;

/// Full chart for a birth instant (UT).
pub fn calculate_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    birth: JulianDay,
    solver: &SolverConfig,
) -> Result<Chart> {
    let personality = positions(provider, birth)?;
    let design = solve_design(provider, birth, solver)?;
    let design = positions(provider, design.instant)?;
    Ok(Chart { personality, design })
}

/// Transit activations at `at`, in roster order.
pub fn calculate_transit<P: EphemerisProvider + ?Sized>(provider: &P, at: JulianDay) -> Result<Vec<Activation>> {
    Ok(positions(provider, at)?.into_vec())
}
