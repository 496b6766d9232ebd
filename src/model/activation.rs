//! Activations and the two-halved chart they form.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::GateSet;
use crate::{Error, Result};

/// One entry of the fixed 13-body roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Earth,
    Moon,
    NorthNode,
    SouthNode,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    /// Roster order.
    pub const ALL: [Planet; 13] = [
        Planet::Sun, Planet::Earth, Planet::Moon, Planet::NorthNode, Planet::SouthNode,
        Planet::Mercury, Planet::Venus, Planet::Mars, Planet::Jupiter, Planet::Saturn,
        Planet::Uranus, Planet::Neptune, Planet::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Earth => "Earth",
            Planet::Moon => "Moon",
            Planet::NorthNode => "North Node",
            Planet::SouthNode => "South Node",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which half of a chart an activation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    /// Computed at the birth instant.
    Personality,
    /// Computed at the solved design instant.
    Design,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::Personality => f.write_str("Personality"),
            Half::Design => f.write_str("Design"),
        }
    }
}

/// A single body's placement on the mandala at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Activation {
    pub planet: Planet,
    /// Ecliptic longitude in `[0, 360)`.
    pub longitude: f64,
    pub gate: u8,
    pub line: u8,
}

/// Activation list for one chart half, in roster order.
pub type Activations = SmallVec<[Activation; 13]>;

/// Personality and design activations for one birth instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub personality: Activations,
    pub design: Activations,
}

impl Chart {
    pub fn half(&self, half: Half) -> &[Activation] {
        match half {
            Half::Personality => &self.personality,
            Half::Design => &self.design,
        }
    }

    /// Look up a roster entry. A miss means the chart was not built from
    /// the full roster.
    pub fn find(&self, half: Half, planet: Planet) -> Result<&Activation> {
        self.half(half)
            .iter()
            .find(|a| a.planet == planet)
            .ok_or(Error::MalformedRoster { half, planet })
    }

    /// Gates activated in one half.
    pub fn gates(&self, half: Half) -> Result<GateSet> {
        GateSet::from_gates(self.half(half).iter().map(|a| a.gate))
    }

    /// Check that both halves carry exactly one activation per roster entry
    /// and every gate and line is in range.
    pub fn validate(&self) -> Result<()> {
        for half in [Half::Personality, Half::Design] {
            let acts = self.half(half);
            for planet in Planet::ALL {
                if acts.iter().filter(|a| a.planet == planet).count() != 1 {
                    return Err(Error::MalformedRoster { half, planet });
                }
            }
            for a in acts {
                if !(1..=64).contains(&a.gate) {
                    return Err(Error::InvalidGate(a.gate));
                }
                if !(1..=6).contains(&a.line) {
                    return Err(Error::MalformedRoster { half, planet: a.planet });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(planet: Planet, gate: u8, line: u8) -> Activation {
        Activation { planet, longitude: 0.0, gate, line }
    }

    fn full_half(gate: u8) -> Activations {
        Planet::ALL.into_iter().map(|p| act(p, gate, 1)).collect()
    }

    #[test]
    fn test_find_and_validate() {
        let chart = Chart { personality: full_half(22), design: full_half(26) };
        assert!(chart.validate().is_ok());
        assert_eq!(chart.find(Half::Design, Planet::Sun).unwrap().gate, 26);
        assert_eq!(chart.gates(Half::Personality).unwrap().iter().collect::<Vec<_>>(), vec![22]);
    }

    #[test]
    fn test_missing_planet_is_malformed() {
        let mut design = full_half(26);
        design.retain(|a| a.planet != Planet::Moon);
        let chart = Chart { personality: full_half(22), design };
        assert!(matches!(
            chart.find(Half::Design, Planet::Moon),
            Err(Error::MalformedRoster { half: Half::Design, planet: Planet::Moon })
        ));
        assert!(chart.validate().is_err());
    }

    #[test]
    fn test_duplicate_planet_is_malformed() {
        let mut personality = full_half(22);
        personality.push(act(Planet::Sun, 1, 1));
        let chart = Chart { personality, design: full_half(26) };
        assert!(matches!(
            chart.validate(),
            Err(Error::MalformedRoster { half: Half::Personality, planet: Planet::Sun })
        ));
    }

    #[test]
    fn test_planet_names() {
        assert_eq!(Planet::NorthNode.to_string(), "North Node");
        assert_eq!(Planet::ALL.len(), 13);
        assert_eq!(Half::Design.to_string(), "Design");
    }
}
