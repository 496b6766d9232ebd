//! Structural labels derived from a chart.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Center, CenterSet, GateSet};
use crate::catalog;

// ============================================================================
// Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HdType {
    ManifestingGenerator,
    Generator,
    Manifestor,
    Projector,
    Reflector,
}

impl HdType {
    pub fn name(self) -> &'static str {
        match self {
            HdType::ManifestingGenerator => "Manifesting Generator",
            HdType::Generator => "Generator",
            HdType::Manifestor => "Manifestor",
            HdType::Projector => "Projector",
            HdType::Reflector => "Reflector",
        }
    }

    pub fn strategy(self) -> &'static str {
        match self {
            HdType::ManifestingGenerator => "To Respond & Inform",
            HdType::Generator => "To Respond",
            HdType::Manifestor => "To Inform",
            HdType::Projector => "Wait for the Invitation",
            HdType::Reflector => "Wait a Lunar Cycle",
        }
    }

    /// Theme felt when living the strategy.
    pub fn signature(self) -> &'static str {
        match self {
            HdType::ManifestingGenerator | HdType::Generator => "Satisfaction",
            HdType::Manifestor => "Peace",
            HdType::Projector => "Success",
            HdType::Reflector => "Surprise",
        }
    }

    pub fn not_self(self) -> &'static str {
        match self {
            HdType::ManifestingGenerator => "Frustration & Anger",
            HdType::Generator => "Frustration",
            HdType::Manifestor => "Anger",
            HdType::Projector => "Bitterness",
            HdType::Reflector => "Disappointment",
        }
    }
}

impl fmt::Display for HdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Authority
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    EgoHeart,
    SelfProjected,
    Mental,
    Lunar,
}

impl Authority {
    pub fn label(self) -> &'static str {
        match self {
            Authority::Emotional => "Emotional (Solar Plexus)",
            Authority::Sacral => "Sacral",
            Authority::Splenic => "Splenic",
            Authority::EgoHeart => "Ego / Heart",
            Authority::SelfProjected => "Self-Projected",
            Authority::Mental => "Mental / Environmental",
            Authority::Lunar => "Lunar (None)",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Profile / Cross
// ============================================================================

/// Personality Sun line over design Sun line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub personality_line: u8,
    pub design_line: u8,
}

impl Profile {
    pub fn new(personality_line: u8, design_line: u8) -> Self {
        Self { personality_line, design_line }
    }

    /// Descriptive name, or `"Unknown"` for combinations outside the
    /// twelve recognised profiles.
    pub fn name(&self) -> &'static str {
        match (self.personality_line, self.design_line) {
            (1, 3) => "Investigator / Martyr",
            (1, 4) => "Investigator / Opportunist",
            (2, 4) => "Hermit / Opportunist",
            (2, 5) => "Hermit / Heretic",
            (3, 5) => "Martyr / Heretic",
            (3, 6) => "Martyr / Role Model",
            (4, 6) => "Opportunist / Role Model",
            (4, 1) => "Opportunist / Investigator",
            (5, 1) => "Heretic / Investigator",
            (5, 2) => "Heretic / Hermit",
            (6, 2) => "Role Model / Hermit",
            (6, 3) => "Role Model / Martyr",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.personality_line, self.design_line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncarnationCross {
    pub personality_sun: u8,
    pub personality_earth: u8,
    pub design_sun: u8,
    pub design_earth: u8,
}

impl fmt::Display for IncarnationCross {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} | {}/{}",
            self.personality_sun, self.personality_earth, self.design_sun, self.design_earth,
        )
    }
}

// ============================================================================
// Channels
// ============================================================================

/// Which chart half supplied a defined channel's gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelSource {
    /// Both gates present in the personality half.
    Personality,
    /// Both gates present in the design half.
    Design,
    /// Completed only by combining the halves.
    Mixed,
}

/// A catalog channel whose two gates are both active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefinedChannel {
    pub gate1: u8,
    pub gate2: u8,
    pub center1: Center,
    pub center2: Center,
    pub source: ChannelSource,
}

impl DefinedChannel {
    pub fn name(&self) -> &'static str {
        catalog::get_channel(self.gate1, self.gate2).map_or("Unknown", |c| c.name)
    }

    pub fn key(&self) -> (u8, u8) {
        (self.gate1, self.gate2)
    }
}

// ============================================================================
// ChartAnalysis
// ============================================================================

/// Read-only snapshot of a chart's structure. Re-derive on any input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub hd_type: HdType,
    pub authority: Authority,
    pub profile: Profile,
    pub incarnation_cross: IncarnationCross,
    pub defined_channels: SmallVec<[DefinedChannel; 8]>,
    pub defined_centers: CenterSet,
    pub open_centers: CenterSet,
    pub personality_gates: GateSet,
    pub design_gates: GateSet,
    pub all_gates: GateSet,
    /// Whether a defined motor reaches the Throat.
    pub motor_to_throat: bool,
}

impl ChartAnalysis {
    pub fn strategy(&self) -> &'static str {
        self.hd_type.strategy()
    }

    pub fn has_channel(&self, g1: u8, g2: u8) -> bool {
        self.defined_channels
            .iter()
            .any(|c| (c.gate1, c.gate2) == (g1, g2) || (c.gate1, c.gate2) == (g2, g1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_names() {
        assert_eq!(Profile::new(1, 3).name(), "Investigator / Martyr");
        assert_eq!(Profile::new(6, 3).name(), "Role Model / Martyr");
        assert_eq!(Profile::new(1, 1).name(), "Unknown");
        assert_eq!(Profile::new(2, 4).to_string(), "2/4");
    }

    #[test]
    fn test_type_strategy_table() {
        assert_eq!(HdType::ManifestingGenerator.strategy(), "To Respond & Inform");
        assert_eq!(HdType::Reflector.signature(), "Surprise");
        assert_eq!(HdType::Projector.not_self(), "Bitterness");
    }

    #[test]
    fn test_defined_channel_name_lookup() {
        let ch = DefinedChannel {
            gate1: 56,
            gate2: 11,
            center1: Center::Ajna,
            center2: Center::Throat,
            source: ChannelSource::Mixed,
        };
        assert_eq!(ch.name(), "Curiosity");
    }
}
