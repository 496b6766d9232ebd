//! # Positions
//!
//! Provider longitude → `Activation`, for one roster entry or all thirteen.

use smallvec::SmallVec;

use crate::ephemeris::{Body, EphemerisProvider, JulianDay};
use crate::mandala::{map_longitude, normalize_degrees};
use crate::model::{Activation, Planet};
use crate::Result;

/// One roster entry: which body to ask the provider about, the planet it
/// becomes, and whether to take the opposite point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetDef {
    pub body: Body,
    pub planet: Planet,
    pub opposite: bool,
}

const fn def(body: Body, planet: Planet, opposite: bool) -> PlanetDef {
    PlanetDef { body, planet, opposite }
}

/// The fixed roster, in chart order.
pub const ROSTER: [PlanetDef; 13] = [
    def(Body::Sun, Planet::Sun, false),
    def(Body::Sun, Planet::Earth, true),
    def(Body::Moon, Planet::Moon, false),
    def(Body::NorthNode, Planet::NorthNode, false),
    def(Body::NorthNode, Planet::SouthNode, true),
    def(Body::Mercury, Planet::Mercury, false),
    def(Body::Venus, Planet::Venus, false),
    def(Body::Mars, Planet::Mars, false),
    def(Body::Jupiter, Planet::Jupiter, false),
    def(Body::Saturn, Planet::Saturn, false),
    def(Body::Uranus, Planet::Uranus, false),
    def(Body::Neptune, Planet::Neptune, false),
    def(Body::Pluto, Planet::Pluto, false),
];

/// Build an activation from a raw provider longitude.
pub fn activation(planet: Planet, raw_longitude: f64, opposite: bool) -> Activation {
    let longitude = if opposite {
        normalize_degrees(raw_longitude + 180.0)
    } else {
        normalize_degrees(raw_longitude)
    };
    let gl = map_longitude(longitude);
    Activation { planet, longitude, gate: gl.gate, line: gl.line }
}

/// Position of a single roster entry at `at`.
pub fn position<P: EphemerisProvider + ?Sized>(provider: &P, at: JulianDay, def: &PlanetDef) -> Result<Activation> {
    let raw = provider.longitude(at, def.body)?;
    Ok(activation(def.planet, raw, def.opposite))
}

/// All thirteen roster positions at `at`.
///
/// Each body is requested once: Earth and the South Node reuse the Sun and
/// North Node longitudes.
pub fn positions<P: EphemerisProvider + ?Sized>(provider: &P, at: JulianDay) -> Result<SmallVec<[Activation; 13]>> {
    let mut raw: SmallVec<[(Body, f64); 11]> = SmallVec::new();
    let mut out = SmallVec::new();
    for def in &ROSTER {
        let lon = match raw.iter().find(|(b, _)| *b == def.body) {
            Some(&(_, lon)) => lon,
            None => {
                let lon = provider.longitude(at, def.body)?;
                raw.push((def.body, lon));
                lon
            }
        };
        out.push(activation(def.planet, lon, def.opposite));
    }
    Ok(out)
}
