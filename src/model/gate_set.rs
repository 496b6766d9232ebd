//! One bit per mandala gate.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// A set of gate numbers in `1..=64`, stored as a 64-bit mask.
///
/// Gate `n` lives in bit `n - 1`. Iteration is always ascending.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GateSet(u64);

impl GateSet {
    pub const EMPTY: GateSet = GateSet(0);

    pub const fn new() -> Self {
        Self(0)
    }

    /// Build a set from gate numbers, rejecting anything outside `1..=64`.
    pub fn from_gates(gates: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut set = Self::new();
        for gate in gates {
            set.insert(gate)?;
        }
        Ok(set)
    }

    /// Insert a gate. Returns whether it was newly added.
    pub fn insert(&mut self, gate: u8) -> Result<bool> {
        let bit = Self::bit(gate)?;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        Ok(fresh)
    }

    pub fn contains(&self, gate: u8) -> bool {
        Self::bit(gate).is_ok_and(|bit| self.0 & bit != 0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: GateSet) -> GateSet {
        GateSet(self.0 | other.0)
    }

    pub fn intersection(self, other: GateSet) -> GateSet {
        GateSet(self.0 & other.0)
    }

    pub fn difference(self, other: GateSet) -> GateSet {
        GateSet(self.0 & !other.0)
    }

    /// Ascending iterator over member gates.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        let bits = self.0;
        (1..=64u8).filter(move |g| bits & (1u64 << (g - 1)) != 0)
    }

    fn bit(gate: u8) -> Result<u64> {
        match gate {
            1..=64 => Ok(1u64 << (gate - 1)),
            _ => Err(Error::InvalidGate(gate)),
        }
    }
}

impl fmt::Debug for GateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for GateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for GateSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let gates = Vec::<u8>::deserialize(deserializer)?;
        GateSet::from_gates(gates).map_err(serde::de::Error::custom)
    }
}
