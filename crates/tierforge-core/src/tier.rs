use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InvalidInput;

/// How many units of one tier merge into a single unit of the next tier.
pub const MERGE_RATIO: u32 = 3;

/// A progression tier, 1-indexed. A tier `n` unit is worth `3^(n-1)`
/// tier-1 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tier(u32);

impl Tier {
    /// The lowest tier; the only one that can be bought directly.
    pub const BASE: Tier = Tier(1);

    pub fn new(level: u32) -> Result<Self, InvalidInput> {
        if level == 0 {
            return Err(InvalidInput::ZeroTier);
        }
        Ok(Tier(level))
    }

    /// The tier one above the highest tier an inventory of `held_tiers`
    /// slots covers.
    pub fn after(held_tiers: usize) -> Self {
        let level = u32::try_from(held_tiers)
            .ok()
            .and_then(|n| n.checked_add(1))
            .unwrap_or(u32::MAX);
        Tier(level)
    }

    pub fn level(self) -> u32 {
        self.0
    }

    /// 0-based slot of this tier inside an inventory.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Number of tier-1 units one unit of this tier is worth.
    pub fn base_value(self) -> BigUint {
        BigUint::from(MERGE_RATIO).pow(self.0 - 1)
    }
}

impl TryFrom<u32> for Tier {
    type Error = InvalidInput;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        Tier::new(level)
    }
}

impl From<Tier> for u32 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
