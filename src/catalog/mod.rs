//! # Static Catalog
//!
//! The fixed mandala wheel, the gate → center table and the 36 channels.
//! Nothing here is computed at runtime; every lookup is a pure function
//! over compile-time data.

pub mod meanings;

use serde::Serialize;

use crate::model::{Center, CenterSet, GateSet};
use crate::{Error, Result};

/// Gate occupying each successive 5.625° slice, starting at the mandala
/// start and moving toward increasing longitude.
pub const GATE_ORDER: [u8; 64] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42, 3,
    27, 24, 2, 23, 8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56,
    31, 33, 7, 4, 29, 59, 40, 64, 47, 6, 46, 18, 48, 57, 32, 50,
    28, 44, 1, 43, 14, 34, 9, 5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// The center a gate belongs to.
pub fn gate_center(gate: u8) -> Result<Center> {
    let center = match gate {
        64 | 61 | 63 => Center::Head,
        47 | 24 | 4 | 17 | 43 | 11 => Center::Ajna,
        62 | 23 | 56 | 35 | 12 | 45 | 33 | 8 | 31 | 20 | 16 => Center::Throat,
        1 | 2 | 7 | 10 | 13 | 15 | 25 | 46 => Center::G,
        21 | 51 | 26 | 40 => Center::HeartEgo,
        36 | 22 | 6 | 37 | 49 | 55 | 30 => Center::SolarPlexus,
        5 | 14 | 29 | 59 | 9 | 3 | 42 | 27 | 34 => Center::Sacral,
        48 | 57 | 44 | 50 | 32 | 28 | 18 => Center::Spleen,
        58 | 38 | 54 | 53 | 60 | 52 | 19 | 39 | 41 => Center::Root,
        _ => return Err(Error::InvalidGate(gate)),
    };
    Ok(center)
}

/// A fixed pairing of two gates joining two centers. `gate1 < gate2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Channel {
    pub gate1: u8,
    pub gate2: u8,
    pub name: &'static str,
    pub center1: Center,
    pub center2: Center,
}

impl Channel {
    const fn new(gate1: u8, gate2: u8, name: &'static str, center1: Center, center2: Center) -> Self {
        Self { gate1, gate2, name, center1, center2 }
    }

    pub fn has_gate(&self, gate: u8) -> bool {
        self.gate1 == gate || self.gate2 == gate
    }

    /// The gate at the other end, if `gate` is one of this channel's gates.
    pub fn other_gate(&self, gate: u8) -> Option<u8> {
        if gate == self.gate1 {
            Some(self.gate2)
        } else if gate == self.gate2 {
            Some(self.gate1)
        } else {
            None
        }
    }

    /// Both gates present in `gates`.
    pub fn is_completed_by(&self, gates: GateSet) -> bool {
        gates.contains(self.gate1) && gates.contains(self.gate2)
    }

    pub fn centers(&self) -> CenterSet {
        [self.center1, self.center2].into_iter().collect()
    }
}

use Center::*;

pub static CHANNELS: [Channel; 36] = [
    Channel::new(1, 8, "Inspiration", G, Throat),
    Channel::new(2, 14, "The Beat", G, Sacral),
    Channel::new(3, 60, "Mutation", Sacral, Root),
    Channel::new(4, 63, "Logic", Ajna, Head),
    Channel::new(5, 15, "Rhythms", Sacral, G),
    Channel::new(6, 59, "Intimacy", SolarPlexus, Sacral),
    Channel::new(7, 31, "The Alpha", G, Throat),
    Channel::new(9, 52, "Concentration", Sacral, Root),
    Channel::new(10, 20, "Awakening", G, Throat),
    Channel::new(10, 34, "Exploration", G, Sacral),
    Channel::new(10, 57, "Perfected Form", G, Spleen),
    Channel::new(11, 56, "Curiosity", Ajna, Throat),
    Channel::new(12, 22, "Openness", Throat, SolarPlexus),
    Channel::new(13, 33, "The Prodigal", G, Throat),
    Channel::new(16, 48, "The Wavelength", Throat, Spleen),
    Channel::new(17, 62, "Acceptance", Ajna, Throat),
    Channel::new(18, 58, "Judgement", Spleen, Root),
    Channel::new(19, 49, "Synthesis", Root, SolarPlexus),
    Channel::new(20, 34, "Charisma", Throat, Sacral),
    Channel::new(20, 57, "The Brainwave", Throat, Spleen),
    Channel::new(21, 45, "Money Line", HeartEgo, Throat),
    Channel::new(23, 43, "Structuring", Throat, Ajna),
    Channel::new(24, 61, "Awareness", Ajna, Head),
    Channel::new(25, 51, "Initiation", G, HeartEgo),
    Channel::new(26, 44, "Surrender", HeartEgo, Spleen),
    Channel::new(27, 50, "Preservation", Sacral, Spleen),
    Channel::new(28, 38, "Struggle", Spleen, Root),
    Channel::new(29, 46, "Discovery", Sacral, G),
    Channel::new(30, 41, "Recognition", SolarPlexus, Root),
    Channel::new(32, 54, "Transformation", Spleen, Root),
    Channel::new(34, 57, "Power", Sacral, Spleen),
    Channel::new(35, 36, "Transitoriness", Throat, SolarPlexus),
    Channel::new(37, 40, "Community", SolarPlexus, HeartEgo),
    Channel::new(39, 55, "Emoting", Root, SolarPlexus),
    Channel::new(42, 53, "Maturation", Sacral, Root),
    Channel::new(47, 64, "Abstraction", Ajna, Head),
];

/// Order-independent channel lookup.
pub fn get_channel(g1: u8, g2: u8) -> Option<&'static Channel> {
    let (lo, hi) = if g1 <= g2 { (g1, g2) } else { (g2, g1) };
    CHANNELS.iter().find(|c| c.gate1 == lo && c.gate2 == hi)
}

/// Every channel with `gate` at one end.
pub fn channels_for_gate(gate: u8) -> impl Iterator<Item = &'static Channel> {
    CHANNELS.iter().filter(move |c| c.has_gate(gate))
}

/// Channels whose two gates are both in `gates`, in catalog order.
pub fn completed_by(gates: GateSet) -> impl Iterator<Item = &'static Channel> {
    CHANNELS.iter().filter(move |c| c.is_completed_by(gates))
}

/// Centers touched by a channel completed within `gates`.
pub fn centers_completed_by(gates: GateSet) -> CenterSet {
    completed_by(gates).fold(CenterSet::new(), |acc, c| acc.union(c.centers()))
}
