//! Centers of the bodygraph and a fixed-size set over them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the nine bodygraph centers. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    HeartEgo,
    SolarPlexus,
    Sacral,
    Spleen,
    Root,
}

impl Center {
    pub const ALL: [Center; 9] = [
        Center::Head, Center::Ajna, Center::Throat, Center::G,
        Center::HeartEgo, Center::SolarPlexus, Center::Sacral,
        Center::Spleen, Center::Root,
    ];

    /// Centers that can power a channel to the Throat.
    pub const MOTORS: [Center; 4] = [
        Center::Sacral, Center::SolarPlexus, Center::HeartEgo, Center::Root,
    ];

    /// Position in [`Center::ALL`], used to index fixed-size tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn is_motor(self) -> bool {
        Self::MOTORS.contains(&self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Center::Head => "Head",
            Center::Ajna => "Ajna",
            Center::Throat => "Throat",
            Center::G => "G (Self)",
            Center::HeartEgo => "Heart/Ego",
            Center::SolarPlexus => "Solar Plexus",
            Center::Sacral => "Sacral",
            Center::Spleen => "Spleen",
            Center::Root => "Root",
        }
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// CenterSet
// ============================================================================

/// A set of centers, one bit per [`Center::index`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CenterSet(u16);

impl CenterSet {
    pub const EMPTY: CenterSet = CenterSet(0);
    pub const ALL: CenterSet = CenterSet((1 << 9) - 1);

    pub const fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, center: Center) -> bool {
        let fresh = !self.contains(center);
        self.0 |= 1 << center.index();
        fresh
    }

    pub fn contains(&self, center: Center) -> bool {
        self.0 & (1 << center.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: CenterSet) -> CenterSet {
        CenterSet(self.0 | other.0)
    }

    pub fn difference(self, other: CenterSet) -> CenterSet {
        CenterSet(self.0 & !other.0)
    }

    /// Every center not in this set.
    pub fn complement(self) -> CenterSet {
        CenterSet::ALL.difference(self)
    }

    /// Iterate members in [`Center::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Center> + '_ {
        let bits = self.0;
        Center::ALL.into_iter().filter(move |c| bits & (1 << c.index()) != 0)
    }
}

impl FromIterator<Center> for CenterSet {
    fn from_iter<I: IntoIterator<Item = Center>>(iter: I) -> Self {
        let mut set = CenterSet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Debug for CenterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for CenterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CenterSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Vec::<Center>::deserialize(deserializer)?.into_iter().collect())
    }
}
