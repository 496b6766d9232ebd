//! Static text attached to channels, gates, planets, types, authorities
//! and centers. Used only for rendering insight reports.

use crate::model::{Authority, Center, HdType, Planet};

pub struct ChannelMeaning {
    pub gate1: u8,
    pub gate2: u8,
    pub keynote: &'static str,
    pub description: &'static str,
}

/// Order-independent lookup of a channel's keynote and description.
pub fn channel_meaning(g1: u8, g2: u8) -> Option<&'static ChannelMeaning> {
    let (lo, hi) = if g1 <= g2 { (g1, g2) } else { (g2, g1) };
    CHANNEL_MEANINGS.iter().find(|m| m.gate1 == lo && m.gate2 == hi)
}

/// Traditional name of a gate, e.g. `"Grace"` for 22.
pub fn gate_name(gate: u8) -> Option<&'static str> {
    gate_entry(gate).map(|(name, _)| name)
}

/// Short keyword of a gate, e.g. `"Openness"` for 22.
pub fn gate_keyword(gate: u8) -> Option<&'static str> {
    gate_entry(gate).map(|(_, keyword)| keyword)
}

fn gate_entry(gate: u8) -> Option<(&'static str, &'static str)> {
    GATE_KEYWORDS.get(usize::from(gate).checked_sub(1)?).copied()
}

/// How long a planet typically stays in one gate.
pub fn planet_duration(planet: Planet) -> &'static str {
    match planet {
        Planet::Sun | Planet::Earth => "~6 days per gate",
        Planet::Moon => "~6 hours per gate",
        Planet::Mercury => "~3-7 days per gate",
        Planet::Venus => "~5-6 days per gate",
        Planet::Mars => "~6-7 days per gate",
        Planet::Jupiter => "~33 days per gate",
        Planet::Saturn => "~44 days per gate",
        Planet::Uranus => "~88 days per gate",
        Planet::Neptune => "~100 days per gate",
        Planet::Pluto => "~115 days per gate",
        Planet::NorthNode | Planet::SouthNode => "~90 days per gate",
    }
}

pub fn type_guidance(hd_type: HdType) -> &'static str {
    match hd_type {
        HdType::Generator => "Wait to respond before engaging with this energy. Notice what lights up your sacral response.",
        HdType::ManifestingGenerator => "Wait to respond, then inform before acting. Your sacral will guide you, so trust the gut response.",
        HdType::Manifestor => "Inform others before initiating. This transit may bring a new impulse to act on.",
        HdType::Projector => "Wait for recognition and invitation. Use this energy to refine your guidance and wisdom.",
        HdType::Reflector => "Wait a full lunar cycle before making decisions. Sample this energy without identifying with it.",
    }
}

pub fn authority_guidance(authority: Authority) -> &'static str {
    match authority {
        Authority::Emotional => "Ride the emotional wave. Clarity comes with time, not in the moment.",
        Authority::Sacral => "Trust your sacral sounds and sensations. The body knows before the mind.",
        Authority::Splenic => "Listen to spontaneous intuition. It speaks once, in the moment.",
        Authority::EgoHeart => "Ask yourself: \"Do I really want this? Is my heart in it?\"",
        Authority::SelfProjected => "Talk it out with trusted others. Hear your own truth in your voice.",
        Authority::Mental => "Discuss with your sounding board. The right environment will clarify.",
        Authority::Lunar => "Wait 28 days. Let the Moon cycle through all gates before deciding.",
    }
}

/// What a normally open center feels like while a transit defines it.
pub fn temporary_center_text(center: Center) -> &'static str {
    match center {
        Center::Head => "You may feel unusual mental pressure to figure things out or be inspired. Let inspiration come to you rather than chasing it.",
        Center::Ajna => "You may feel more mentally certain than usual. Be careful not to fixate on ideas, flexibility serves you better.",
        Center::Throat => "You may feel increased pressure to speak or act. Choose your timing carefully rather than feeling compelled to express.",
        Center::G => "You may feel a stronger sense of direction or identity. Enjoy the clarity but don't make permanent commitments based on it.",
        Center::HeartEgo => "You may feel increased willpower or desire to prove yourself. Avoid overcommitting, this drive is temporary.",
        Center::SolarPlexus => "You may experience more emotional waves than usual. Don't make important decisions while riding emotional highs or lows.",
        Center::Sacral => "You may feel more energetic and responsive. Enjoy the vitality but pace yourself, it won't last indefinitely.",
        Center::Spleen => "You may feel heightened intuition or survival awareness. Trust the instincts but verify with your authority.",
        Center::Root => "You may feel more pressure to get things done. The urgency is temporary, don't let it drive you into stress.",
    }
}

pub static CHANNEL_MEANINGS: [ChannelMeaning; 36] = [
    ChannelMeaning {
        gate1: 1,
        gate2: 8,
        keynote: "Creative role model",
        description: "The channel of creative self-expression. When activated, it brings the energy to manifest unique creative contributions that inspire others through authentic individual expression.",
    },
    ChannelMeaning {
        gate1: 2,
        gate2: 14,
        keynote: "Keeper of keys",
        description: "The channel of direction and resources. This energy connects higher knowing about direction with the power to sustain effort, creating the capacity to be a keeper of important knowledge and resources.",
    },
    ChannelMeaning {
        gate1: 3,
        gate2: 60,
        keynote: "Energy to begin and sustain",
        description: "The channel of mutation and new beginnings. This energy pulses with the potential to start something entirely new, bringing order out of chaos through accepting limitation as a creative force.",
    },
    ChannelMeaning {
        gate1: 4,
        gate2: 63,
        keynote: "Mental ease mixed with doubt",
        description: "The channel of logical thinking. This connects questioning doubt with formulaic answers, creating the mental pressure to find logical explanations and prove theories through evidence.",
    },
    ChannelMeaning {
        gate1: 5,
        gate2: 15,
        keynote: "Being in the flow",
        description: "The channel of natural rhythms and timing. This energy aligns personal patterns with universal flow, creating someone who embodies and models natural timing and seasonal awareness.",
    },
    ChannelMeaning {
        gate1: 6,
        gate2: 59,
        keynote: "Focused on reproduction",
        description: "The channel of intimacy and connection. This emotional-sacral connection governs the process of bonding, fertility, and breaking down barriers to create deep intimate connections.",
    },
    ChannelMeaning {
        gate1: 7,
        gate2: 31,
        keynote: "Leadership for good or ill",
        description: "The channel of leadership. This connects the role of the democratic leader with the ability to influence through voice, creating natural leadership that guides the collective direction.",
    },
    ChannelMeaning {
        gate1: 9,
        gate2: 52,
        keynote: "Focused determination",
        description: "The channel of concentration and focus. This connects the energy to attend to details with the stillness of focused awareness, creating deep concentration and determination.",
    },
    ChannelMeaning {
        gate1: 10,
        gate2: 20,
        keynote: "Commitment to higher principles",
        description: "The channel of awakening and self-love. This connects authentic behavior with presence in the now, creating someone who lives their truth in each moment with existential awareness.",
    },
    ChannelMeaning {
        gate1: 10,
        gate2: 34,
        keynote: "Following one's convictions",
        description: "The channel of exploration through power. This connects authentic self-behavior with raw sacral power, creating someone who has the energy to explore life on their own terms.",
    },
    ChannelMeaning {
        gate1: 10,
        gate2: 57,
        keynote: "Survival through intuition",
        description: "The channel of perfected form. This connects authentic behavior with intuitive awareness, creating someone who instinctively knows what is correct behavior for their own well-being.",
    },
    ChannelMeaning {
        gate1: 11,
        gate2: 56,
        keynote: "A searcher",
        description: "The channel of curiosity and storytelling. This connects the gate of ideas with the gift of stimulation through language, creating someone who collects and shares experiences and ideas.",
    },
    ChannelMeaning {
        gate1: 12,
        gate2: 22,
        keynote: "A social being",
        description: "The channel of openness. This connects the voice of caution with emotional grace, creating someone who can transform individual feelings into social expression when the mood is right.",
    },
    ChannelMeaning {
        gate1: 13,
        gate2: 33,
        keynote: "A witness",
        description: "The channel of the prodigal. This connects listening and collecting experiences with the ability to remember and share them as wisdom, creating a natural witness and storyteller.",
    },
    ChannelMeaning {
        gate1: 16,
        gate2: 48,
        keynote: "Talent through practice",
        description: "The channel of talent. This connects enthusiasm and skill-building with the depth of collective knowledge, creating mastery through dedicated practice and repetition.",
    },
    ChannelMeaning {
        gate1: 17,
        gate2: 62,
        keynote: "An organizational being",
        description: "The channel of acceptance. This connects opinion and mental organization with the expression of facts and details, creating someone who structures understanding logically.",
    },
    ChannelMeaning {
        gate1: 18,
        gate2: 58,
        keynote: "Insatiability for perfection",
        description: "The channel of judgement. This connects the drive to correct and improve with the joy of vitality, creating someone with the energy and insight to challenge and perfect patterns.",
    },
    ChannelMeaning {
        gate1: 19,
        gate2: 49,
        keynote: "Sensitivity through need",
        description: "The channel of synthesis. This connects the pressure of need with the power of principles and revolution, creating deep tribal sensitivity and awareness of group needs.",
    },
    ChannelMeaning {
        gate1: 20,
        gate2: 34,
        keynote: "Where thoughts become deeds",
        description: "The channel of charisma. This connects present-moment awareness with raw sacral power, creating someone who acts in the now with immediate and powerful response.",
    },
    ChannelMeaning {
        gate1: 20,
        gate2: 57,
        keynote: "Penetrating awareness in the now",
        description: "The channel of the brainwave. This connects existential awareness with splenic intuition, creating someone who can express intuitive knowing in the present moment.",
    },
    ChannelMeaning {
        gate1: 21,
        gate2: 45,
        keynote: "The materialist",
        description: "The channel of money and resources. This connects willpower and control with the energy to gather and distribute material resources, creating natural material leadership.",
    },
    ChannelMeaning {
        gate1: 23,
        gate2: 43,
        keynote: "Individuality through thinking",
        description: "The channel of structuring. This connects the voice of individual insight with inner knowing, creating the ability to express unique mental breakthroughs and \"aha\" moments.",
    },
    ChannelMeaning {
        gate1: 24,
        gate2: 61,
        keynote: "A thinker who rationalizes",
        description: "The channel of awareness. This connects rationalization with inner truth and mystery, creating a mind that processes inspiration into concepts that can be communicated.",
    },
    ChannelMeaning {
        gate1: 25,
        gate2: 51,
        keynote: "Needing to be first",
        description: "The channel of initiation. This connects universal love with competitive spirit, creating the archetype of the spiritual warrior who initiates others through their own courage.",
    },
    ChannelMeaning {
        gate1: 26,
        gate2: 44,
        keynote: "A transmitter",
        description: "The channel of surrender. This connects the trickster's persuasive ability with pattern recognition, creating someone who can sell, transmit, and make things happen through alertness.",
    },
    ChannelMeaning {
        gate1: 27,
        gate2: 50,
        keynote: "A custodian",
        description: "The channel of preservation. This connects nurturing energy with tribal values and responsibility, creating someone who cares for and sustains community through devoted service.",
    },
    ChannelMeaning {
        gate1: 28,
        gate2: 38,
        keynote: "Stubbornness for purpose",
        description: "The channel of struggle. This connects the game player's risk-taking with the fighter's determination, creating someone who persists through difficulty to find life's purpose.",
    },
    ChannelMeaning {
        gate1: 29,
        gate2: 46,
        keynote: "Succeeding where others fail",
        description: "The channel of discovery. This connects the energy to commit with good fortune through the body, creating someone who discovers through physical experience and perseverance.",
    },
    ChannelMeaning {
        gate1: 30,
        gate2: 41,
        keynote: "Focused energy through feelings",
        description: "The channel of recognition. This connects emotional desire with the pressure to begin new experiences, creating intense feeling energy that fantasizes and then manifests.",
    },
    ChannelMeaning {
        gate1: 32,
        gate2: 54,
        keynote: "A driven being",
        description: "The channel of transformation. This connects the fear of failure with ambition and drive, creating someone who transforms community through instinct-driven material success.",
    },
    ChannelMeaning {
        gate1: 34,
        gate2: 57,
        keynote: "An archetype with human design",
        description: "The channel of power. This connects raw sacral power with intuitive awareness, creating an archetype of pure survival power guided by instinct and in-the-moment awareness.",
    },
    ChannelMeaning {
        gate1: 35,
        gate2: 36,
        keynote: "A jack of all trades",
        description: "The channel of transitoriness. This connects manifesting experience with emotional crisis and adventure, creating someone who seeks and collects diverse life experiences.",
    },
    ChannelMeaning {
        gate1: 37,
        gate2: 40,
        keynote: "A part seeking a whole",
        description: "The channel of community. This connects bargaining within the tribe with the will to provide, creating the foundation of community through agreements and mutual support.",
    },
    ChannelMeaning {
        gate1: 39,
        gate2: 55,
        keynote: "Spirit-driven emotionality",
        description: "The channel of emoting. This connects the provocateur with emotional spirit, creating someone whose moods and provocations serve to awaken and elevate others' awareness.",
    },
    ChannelMeaning {
        gate1: 42,
        gate2: 53,
        keynote: "Balanced development",
        description: "The channel of maturation. This connects growth and completion with the pressure to start new cycles, creating someone who matures through the natural process of beginning and finishing.",
    },
    ChannelMeaning {
        gate1: 47,
        gate2: 64,
        keynote: "Mental activity mixed with clarity",
        description: "The channel of abstraction. This connects the process of making sense of confusion with imaginative pressure, creating a mind that resolves abstract mental patterns into understanding.",
    },
];

/// `(name, keyword)` for gate `n` at index `n - 1`.
pub static GATE_KEYWORDS: [(&str, &str); 64] = [
    ("The Creative", "Self-Expression"),
    ("The Receptive", "Higher Knowing"),
    ("Difficulty at the Beginning", "Ordering"),
    ("Youthful Folly", "Formulization"),
    ("Waiting", "Fixed Rhythms"),
    ("Conflict", "Friction"),
    ("The Army", "The Role of the Self"),
    ("Holding Together", "Contribution"),
    ("Taming Power of the Small", "Focus"),
    ("Treading", "Self-Love"),
    ("Peace", "Ideas"),
    ("Standstill", "Caution"),
    ("Fellowship", "The Listener"),
    ("Possession in Great Measure", "Power Skills"),
    ("Modesty", "Extremes"),
    ("Enthusiasm", "Skills"),
    ("Following", "Opinions"),
    ("Work on What Has Been Spoiled", "Correction"),
    ("Approach", "Wanting"),
    ("Contemplation", "The Now"),
    ("Biting Through", "Control"),
    ("Grace", "Openness"),
    ("Splitting Apart", "Assimilation"),
    ("Return", "Rationalization"),
    ("Innocence", "Universal Love"),
    ("Taming Power of the Great", "The Trickster"),
    ("Nourishment", "Caring"),
    ("Preponderance of the Great", "The Game Player"),
    ("The Abysmal", "Commitment"),
    ("The Clinging Fire", "Feelings"),
    ("Influence", "Leading"),
    ("Duration", "Continuity"),
    ("Retreat", "Privacy"),
    ("Power of the Great", "Power"),
    ("Progress", "Change"),
    ("Darkening of the Light", "Crisis"),
    ("The Family", "Friendship"),
    ("Opposition", "The Fighter"),
    ("Obstruction", "Provocation"),
    ("Deliverance", "Aloneness"),
    ("Decrease", "Contraction"),
    ("Increase", "Growth"),
    ("Breakthrough", "Insight"),
    ("Coming to Meet", "Alertness"),
    ("Gathering Together", "The Gatherer"),
    ("Pushing Upward", "Good Fortune"),
    ("Oppression", "Realization"),
    ("The Well", "Depth"),
    ("Revolution", "Principles"),
    ("The Cauldron", "Values"),
    ("The Arousing", "Shock"),
    ("Keeping Still", "Stillness"),
    ("Development", "Beginnings"),
    ("The Marrying Maiden", "Ambition"),
    ("Abundance", "Spirit"),
    ("The Wanderer", "Stimulation"),
    ("The Gentle", "Intuition"),
    ("The Joyous", "Vitality"),
    ("Dispersion", "Sexuality"),
    ("Limitation", "Acceptance"),
    ("Inner Truth", "Mystery"),
    ("Preponderance of the Small", "Details"),
    ("After Completion", "Doubt"),
    ("Before Completion", "Confusion"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CHANNELS;

    #[test]
    fn test_every_channel_has_meaning() {
        for ch in &CHANNELS {
            let m = channel_meaning(ch.gate2, ch.gate1);
            assert!(m.is_some(), "{}", ch.name);
        }
    }

    #[test]
    fn test_gate_keywords() {
        assert_eq!(gate_keyword(22), Some("Openness"));
        assert_eq!(gate_name(1), Some("The Creative"));
        assert_eq!(gate_keyword(64), Some("Confusion"));
        assert_eq!(gate_keyword(0), None);
        assert_eq!(gate_keyword(65), None);
    }
}
