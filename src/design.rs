//! # Design Date Solver
//!
//! Finds the instant roughly 88 days before birth when the Sun stood 88°
//! behind its birth longitude. The Sun's apparent motion is not uniform, so
//! the instant is found by iterating with the mean daily motion as the step
//! divisor.
//!
//! Hitting the iteration cap is not an error: the last estimate is returned
//! with `converged = false` and a warning is logged.

use serde::{Deserialize, Serialize};

use crate::ephemeris::{Body, EphemerisProvider, JulianDay};
use crate::mandala::{angular_difference, normalize_degrees};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Solar arc between design and birth.
    pub offset_degrees: f64,
    /// Initial guess, in days before birth.
    pub seed_days: f64,
    pub max_iterations: u32,
    pub tolerance_degrees: f64,
    /// Sun's mean motion in degrees per day.
    pub mean_daily_motion: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            offset_degrees: 88.0,
            seed_days: 88.0,
            max_iterations: 100,
            tolerance_degrees: 1e-5,
            mean_daily_motion: 0.9856,
        }
    }
}

/// Result of a solve, including how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSolution {
    pub instant: JulianDay,
    /// Sun evaluations made inside the iteration loop.
    pub iterations: u32,
    /// `|sun(instant) - target|` in degrees.
    pub residual_degrees: f64,
    pub converged: bool,
}

/// Solve for the design instant of `birth`.
pub fn solve_design<P: EphemerisProvider + ?Sized>(
    provider: &P,
    birth: JulianDay,
    config: &SolverConfig,
) -> Result<DesignSolution> {
    let birth_sun = provider.longitude(birth, Body::Sun)?;
    let target = normalize_degrees(birth_sun - config.offset_degrees);
    let mut instant = birth.plus_days(-config.seed_days);

    let mut iterations = 0;
    while iterations < config.max_iterations {
        iterations += 1;
        let sun = provider.longitude(instant, Body::Sun)?;
        let diff = angular_difference(sun, target);
        if diff.abs() < config.tolerance_degrees {
            tracing::debug!(
                birth = birth.0,
                design = instant.0,
                iterations,
                residual = diff.abs(),
                "design instant solved"
            );
            return Ok(DesignSolution { instant, iterations, residual_degrees: diff.abs(), converged: true });
        }
        instant = instant.plus_days(diff / config.mean_daily_motion);
    }

    let sun = provider.longitude(instant, Body::Sun)?;
    let residual = angular_difference(sun, target).abs();
    let converged = residual < config.tolerance_degrees;
    if !converged {
        tracing::warn!(
            birth = birth.0,
            design = instant.0,
            iterations,
            residual,
            "design solver hit iteration cap, using last estimate"
        );
    }
    Ok(DesignSolution { instant, iterations, residual_degrees: residual, converged })
}

/// Design instant with the default solver settings.
pub fn solve_design_instant<P: EphemerisProvider + ?Sized>(provider: &P, birth: JulianDay) -> Result<JulianDay> {
    Ok(solve_design(provider, birth, &SolverConfig::default())?.instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{AnalyticEphemeris, julian_day};
    use crate::Error;

    /// Sun moving uniformly at the solver's own mean motion.
    struct UniformSun;

    impl EphemerisProvider for UniformSun {
        fn longitude(&self, at: JulianDay, _body: Body) -> Result<f64> {
            Ok(normalize_degrees(at.0 * 0.9856))
        }
    }

    /// A Sun that never moves: the step never shrinks the difference.
    struct StuckSun;

    impl EphemerisProvider for StuckSun {
        fn longitude(&self, _at: JulianDay, _body: Body) -> Result<f64> {
            Ok(42.0)
        }
    }

    struct NoSun;

    impl EphemerisProvider for NoSun {
        fn longitude(&self, _at: JulianDay, _body: Body) -> Result<f64> {
            Err(Error::ephemeris("offline"))
        }
    }

    #[test]
    fn test_golden_birth_design_instant() {
        let provider = AnalyticEphemeris::default();
        let birth = julian_day(1976, 3, 7, 22.0 + 40.0 / 60.0);
        let sol = solve_design(&provider, birth, &SolverConfig::default()).unwrap();

        assert!(sol.converged);
        assert!(sol.iterations <= 10, "{}", sol.iterations);
        let days = birth.days_since(sol.instant);
        assert!((86.0..=90.0).contains(&days), "{days}");

        let birth_sun = provider.longitude(birth, Body::Sun).unwrap();
        let design_sun = provider.longitude(sol.instant, Body::Sun).unwrap();
        assert!(angular_difference(design_sun, normalize_degrees(birth_sun - 88.0)).abs() < 1e-4);
    }

    #[test]
    fn test_uniform_sun_lands_on_seed() {
        // With a perfectly uniform Sun the seed is only off by the 88° vs
        // 88 days mismatch, which one step removes.
        let birth = JulianDay(2_450_000.0);
        let sol = solve_design(&UniformSun, birth, &SolverConfig::default()).unwrap();
        assert!(sol.converged);
        assert!(sol.iterations <= 3);
        assert!((birth.days_since(sol.instant) - 88.0 / 0.9856).abs() < 1e-3);
    }

    #[test]
    fn test_non_convergence_returns_last_estimate() {
        let birth = JulianDay(2_450_000.0);
        let sol = solve_design(&StuckSun, birth, &SolverConfig::default()).unwrap();
        assert!(!sol.converged);
        assert_eq!(sol.iterations, 100);
        assert!((sol.residual_degrees - 88.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_iterations_returns_seed() {
        let birth = JulianDay(2_450_000.0);
        let config = SolverConfig { max_iterations: 0, ..SolverConfig::default() };
        let sol = solve_design(&AnalyticEphemeris::default(), birth, &config).unwrap();
        assert_eq!(sol.iterations, 0);
        assert_eq!(sol.instant, birth.plus_days(-88.0));
    }

    #[test]
    fn test_converges_across_realistic_years() {
        let provider = AnalyticEphemeris::default();
        for year in (1900..=2040).step_by(7) {
            for month in [1, 4, 7, 10] {
                let birth = julian_day(year, month, 15, 12.0);
                let sol = solve_design(&provider, birth, &SolverConfig::default()).unwrap();
                assert!(sol.converged, "{year}-{month}");
                assert!(sol.iterations < 100);
            }
        }
    }

    #[test]
    fn test_provider_error_propagates() {
        assert!(matches!(
            solve_design_instant(&NoSun, JulianDay(2_450_000.0)),
            Err(Error::Ephemeris(_))
        ));
    }
}
