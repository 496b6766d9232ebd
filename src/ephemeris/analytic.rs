//! Built-in analytic ephemeris.
//!
//! Low-precision series good to a small fraction of a line width between
//! 1800 and 2050:
//!
//! - Sun: Meeus ch. 25 apparent longitude (equation of centre, nutation
//!   and aberration folded into one correction).
//! - Moon: the principal periodic terms of Meeus ch. 47.
//! - North Node: mean node, optionally with the main periodic terms of the
//!   true node.
//! - Mercury..Pluto: JPL approximate Keplerian elements, heliocentric
//!   J2000 positions differenced against the Earth–Moon barycentre.

use super::{Body, EphemerisConfig, EphemerisProvider, JulianDay, NodeMode};
use crate::Result;
use crate::mandala::normalize_degrees;

/// General precession in longitude, degrees per Julian century.
const PRECESSION_PER_CENTURY: f64 = 1.396971;

/// In-process provider. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalyticEphemeris {
    config: EphemerisConfig,
}

impl AnalyticEphemeris {
    pub fn new(config: EphemerisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn longitude(&self, at: JulianDay, body: Body) -> Result<f64> {
        let t = at.centuries_since_j2000();
        let lon = match body {
            Body::Sun => sun(t),
            Body::Moon => moon(t),
            Body::NorthNode => match self.config.node {
                NodeMode::True => true_node(t),
                NodeMode::Mean => mean_node(t),
            },
            Body::Mercury => self.planet(&MERCURY, t),
            Body::Venus => self.planet(&VENUS, t),
            Body::Mars => self.planet(&MARS, t),
            Body::Jupiter => self.planet(&JUPITER, t),
            Body::Saturn => self.planet(&SATURN, t),
            Body::Uranus => self.planet(&URANUS, t),
            Body::Neptune => self.planet(&NEPTUNE, t),
            Body::Pluto => self.planet(&PLUTO, t),
        };
        if !lon.is_finite() {
            return Err(crate::Error::ephemeris(format!("non-finite longitude for {body:?} at {at}")));
        }
        Ok(normalize_degrees(lon))
    }
}

impl AnalyticEphemeris {
    fn planet(&self, elements: &Elements, t: f64) -> f64 {
        let (x, y, _) = elements.heliocentric(t);
        let (ex, ey, _) = EM_BARY.heliocentric(t);
        let lon = (y - ey).atan2(x - ex).to_degrees();
        if self.config.precession {
            lon + PRECESSION_PER_CENTURY * t
        } else {
            lon
        }
    }
}

// ============================================================================
// Sun, Moon, Node
// ============================================================================

fn sun(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    l0 + c - 0.00569 - 0.00478 * omega.sin()
}

fn moon(t: f64) -> f64 {
    let lp = 218.3165 + 481267.8813 * t;
    let d = (297.8502 + 445267.1115 * t).to_radians();
    let m = (357.5291 + 35999.0503 * t).to_radians();
    let mp = (134.9634 + 477198.8676 * t).to_radians();
    let f = (93.2721 + 483202.0175 * t).to_radians();

    lp + 6.289 * mp.sin()
        + 1.274 * (2.0 * d - mp).sin()
        + 0.658 * (2.0 * d).sin()
        + 0.214 * (2.0 * mp).sin()
        - 0.186 * m.sin()
        - 0.114 * (2.0 * f).sin()
        + 0.059 * (2.0 * (d - mp)).sin()
        + 0.057 * (2.0 * d - m - mp).sin()
        + 0.053 * (2.0 * d + mp).sin()
        + 0.046 * (2.0 * d - m).sin()
        - 0.041 * (m - mp).sin()
        - 0.035 * d.sin()
        - 0.031 * (m + mp).sin()
}

fn mean_node(t: f64) -> f64 {
    125.04452 - 1934.13626 * t + 0.00220 * t * t + t * t * t / 467_441.0
}

fn true_node(t: f64) -> f64 {
    let omega = 125.0445479 - 1934.1362891 * t + 0.0020754 * t * t;
    let d = (297.8501921 + 445267.1114034 * t).to_radians();
    let m = (357.5291092 + 35999.0502909 * t).to_radians();
    let mp = (134.9633964 + 477198.8675055 * t).to_radians();
    let f = (93.2720950 + 483202.0175233 * t).to_radians();

    omega - 1.4979 * (2.0 * (d - f)).sin()
        - 0.1500 * m.sin()
        - 0.1226 * (2.0 * d).sin()
        + 0.1176 * (2.0 * f).sin()
        - 0.0801 * (2.0 * (mp - f)).sin()
}

// ============================================================================
// Keplerian planets
// ============================================================================

/// Orbital elements at J2000 and their rates per Julian century.
/// Angles in degrees, `a` in AU.
struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    incl: [f64; 2],
    mean_lon: [f64; 2],
    peri_lon: [f64; 2],
    node_lon: [f64; 2],
}

impl Elements {
    /// Heliocentric ecliptic J2000 rectangular coordinates.
    fn heliocentric(&self, t: f64) -> (f64, f64, f64) {
        let at = |el: [f64; 2]| el[0] + el[1] * t;
        let a = at(self.a);
        let e = at(self.e);
        let incl = at(self.incl).to_radians();
        let peri = at(self.peri_lon);
        let node = at(self.node_lon);

        let mut mean_anomaly = normalize_degrees(at(self.mean_lon) - peri);
        if mean_anomaly > 180.0 {
            mean_anomaly -= 360.0;
        }
        let ecc_anomaly = solve_kepler(mean_anomaly.to_radians(), e);

        let xp = a * (ecc_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let w = (peri - node).to_radians();
        let o = node.to_radians();
        let (sw, cw) = w.sin_cos();
        let (so, co) = o.sin_cos();
        let (si, ci) = incl.sin_cos();

        let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
        let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
        let z = (sw * si) * xp + (cw * si) * yp;
        (x, y, z)
    }
}

/// Newton iteration on `E - e sin E = M`.
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (mean_anomaly - (ecc - e * ecc.sin())) / (1.0 - e * ecc.cos());
        ecc += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

const MERCURY: Elements = Elements {
    a: [0.38709927, 0.00000037],
    e: [0.20563593, 0.00001906],
    incl: [7.00497902, -0.00594749],
    mean_lon: [252.25032350, 149472.67411175],
    peri_lon: [77.45779628, 0.16047689],
    node_lon: [48.33076593, -0.12534081],
};

const VENUS: Elements = Elements {
    a: [0.72333566, 0.00000390],
    e: [0.00677672, -0.00004107],
    incl: [3.39467605, -0.00078890],
    mean_lon: [181.97909950, 58517.81538729],
    peri_lon: [131.60246718, 0.00268329],
    node_lon: [76.67984255, -0.27769418],
};

const EM_BARY: Elements = Elements {
    a: [1.00000261, 0.00000562],
    e: [0.01671123, -0.00004392],
    incl: [-0.00001531, -0.01294668],
    mean_lon: [100.46457166, 35999.37244981],
    peri_lon: [102.93768193, 0.32327364],
    node_lon: [0.0, 0.0],
};

const MARS: Elements = Elements {
    a: [1.52371034, 0.00001847],
    e: [0.09339410, 0.00007882],
    incl: [1.84969142, -0.00813131],
    mean_lon: [-4.55343205, 19140.30268499],
    peri_lon: [-23.94362959, 0.44441088],
    node_lon: [49.55953891, -0.29257343],
};

const JUPITER: Elements = Elements {
    a: [5.20288700, -0.00011607],
    e: [0.04838624, -0.00013253],
    incl: [1.30439695, -0.00183714],
    mean_lon: [34.39644051, 3034.74612775],
    peri_lon: [14.72847983, 0.21252668],
    node_lon: [100.47390909, 0.20469106],
};

const SATURN: Elements = Elements {
    a: [9.53667594, -0.00125060],
    e: [0.05386179, -0.00050991],
    incl: [2.48599187, 0.00193609],
    mean_lon: [49.95424423, 1222.49362201],
    peri_lon: [92.59887831, -0.41897216],
    node_lon: [113.66242448, -0.28867794],
};

const URANUS: Elements = Elements {
    a: [19.18916464, -0.00196176],
    e: [0.04725744, -0.00004397],
    incl: [0.77263783, -0.00242939],
    mean_lon: [313.23810451, 428.48202785],
    peri_lon: [170.95427630, 0.40805281],
    node_lon: [74.01692503, 0.04240589],
};

const NEPTUNE: Elements = Elements {
    a: [30.06992276, 0.00026291],
    e: [0.00859048, 0.00005105],
    incl: [1.77004347, 0.00035372],
    mean_lon: [-55.12002969, 218.45945325],
    peri_lon: [44.96476227, -0.32241464],
    node_lon: [131.78422574, -0.00508664],
};

const PLUTO: Elements = Elements {
    a: [39.48211675, -0.00031596],
    e: [0.24882730, 0.00005170],
    incl: [17.14001206, 0.00004818],
    mean_lon: [238.92903833, 145.20780515],
    peri_lon: [224.06891629, -0.04062942],
    node_lon: [110.30393684, -0.01183482],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::julian_day;

    fn golden_birth() -> JulianDay {
        julian_day(1976, 3, 7, 22.0 + 40.0 / 60.0)
    }

    fn lon(body: Body, at: JulianDay) -> f64 {
        AnalyticEphemeris::default().longitude(at, body).unwrap()
    }

    #[test]
    fn test_sun_meeus_example() {
        // Meeus example 25.a: 1992 October 13.0 TD, apparent λ = 199.90895°.
        let l = lon(Body::Sun, julian_day(1992, 10, 13, 0.0));
        assert!((l - 199.909).abs() < 0.01, "{l}");
    }

    #[test]
    fn test_moon_meeus_example() {
        // Meeus example 47.a: 1992 April 12.0 TD, λ = 133.162655°.
        let l = lon(Body::Moon, julian_day(1992, 4, 12, 0.0));
        assert!((l - 133.16).abs() < 0.05, "{l}");
    }

    #[test]
    fn test_golden_birth_longitudes() {
        let at = golden_birth();
        let cases = [
            (Body::Sun, 347.497),
            (Body::Moon, 63.349),
            (Body::NorthNode, 224.275),
            (Body::Mercury, 327.573),
            (Body::Venus, 321.254),
            (Body::Mars, 85.584),
            (Body::Jupiter, 25.834),
            (Body::Saturn, 116.456),
            (Body::Uranus, 216.851),
            (Body::Neptune, 253.947),
            (Body::Pluto, 190.962),
        ];
        for (body, expected) in cases {
            let l = lon(body, at);
            assert!((l - expected).abs() < 0.01, "{body:?}: {l} vs {expected}");
        }
    }

    #[test]
    fn test_mean_node_differs_from_true_node() {
        let at = golden_birth();
        let mean = AnalyticEphemeris::new(EphemerisConfig { node: NodeMode::Mean, precession: true })
            .longitude(at, Body::NorthNode)
            .unwrap();
        let tru = lon(Body::NorthNode, at);
        assert!((mean - tru).abs() < 2.0);
        assert!((mean - tru).abs() > 1e-6);
    }

    #[test]
    fn test_precession_shifts_planets_only() {
        let at = julian_day(2030, 1, 1, 0.0);
        let j2000 = AnalyticEphemeris::new(EphemerisConfig { node: NodeMode::True, precession: false });
        let dated = AnalyticEphemeris::default();
        let shift = dated.longitude(at, Body::Mars).unwrap() - j2000.longitude(at, Body::Mars).unwrap();
        assert!((shift - PRECESSION_PER_CENTURY * at.centuries_since_j2000()).abs() < 1e-9);
        assert_eq!(dated.longitude(at, Body::Sun).unwrap(), j2000.longitude(at, Body::Sun).unwrap());
    }

    #[test]
    fn test_longitudes_in_range() {
        let p = AnalyticEphemeris::default();
        for year in (1800..=2050).step_by(17) {
            let at = julian_day(year, 6, 15, 0.0);
            for body in Body::ALL {
                let l = p.longitude(at, body).unwrap();
                assert!((0.0..360.0).contains(&l), "{body:?} {year}: {l}");
            }
        }
    }

    #[test]
    fn test_kepler_circular_orbit() {
        assert_eq!(solve_kepler(1.0, 0.0), 1.0);
    }
}
