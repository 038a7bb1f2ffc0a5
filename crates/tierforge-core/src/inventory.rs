//! Unit counts held per tier.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::tier::{MERGE_RATIO, Tier};

/// Units held at each tier, tier 1 first. Slots past the end count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    #[serde(with = "crate::decimal::seq")]
    counts: Vec<BigUint>,
}

impl Inventory {
    pub fn new(counts: Vec<BigUint>) -> Self {
        Self { counts }
    }

    /// Build an inventory from signed counts, rejecting any negative entry.
    pub fn from_signed<I, T>(counts: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        let counts = counts
            .into_iter()
            .enumerate()
            .map(|(index, count)| {
                let count = count.into();
                count
                    .to_biguint()
                    .ok_or(InvalidInput::NegativeCount {
                        tier: index + 1,
                        count,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { counts })
    }

    /// Decompose `value` tier-1 units into base-3 digits across the lowest
    /// `tiers` slots. Anything worth a tier above that is dropped.
    pub fn from_base_units(value: &BigUint, tiers: usize) -> Self {
        let ratio = BigUint::from(MERGE_RATIO);
        let mut remaining = value.clone();
        let mut counts = Vec::with_capacity(tiers);
        for _ in 0..tiers {
            counts.push(&remaining % &ratio);
            remaining /= &ratio;
        }
        Self { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Units held at `tier`; zero when the inventory does not reach it.
    pub fn count(&self, tier: Tier) -> BigUint {
        self.counts
            .get(tier.index())
            .cloned()
            .unwrap_or_default()
    }

    /// True when at least one unit sits at `tier`.
    pub fn holds(&self, tier: Tier) -> bool {
        self.counts
            .get(tier.index())
            .is_some_and(|count| !count.is_zero())
    }

    pub fn counts(&self) -> &[BigUint] {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &BigUint)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(index, count)| (Tier::after(index), count))
    }

    /// Total worth of the inventory in tier-1 units.
    pub fn base_units(&self) -> BigUint {
        let ratio = BigUint::from(MERGE_RATIO);
        let mut place = BigUint::from(1u32);
        let mut total = BigUint::zero();
        for count in &self.counts {
            total += count * &place;
            place *= &ratio;
        }
        total
    }

    pub fn into_counts(self) -> Vec<BigUint> {
        self.counts
    }

    pub(crate) fn set(&mut self, tier: Tier, count: BigUint) {
        let index = tier.index();
        if self.counts.len() <= index {
            self.counts.resize(index + 1, BigUint::zero());
        }
        self.counts[index] = count;
    }
}

impl From<Vec<BigUint>> for Inventory {
    fn from(counts: Vec<BigUint>) -> Self {
        Self::new(counts)
    }
}

impl<const N: usize> From<[u64; N]> for Inventory {
    fn from(counts: [u64; N]) -> Self {
        Self::new(counts.into_iter().map(BigUint::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn base_units_weights_each_tier() {
        let inventory = Inventory::from([1, 0, 1, 2, 1, 2]);
        assert_eq!(inventory.base_units(), big(631));
        assert_eq!(Inventory::default().base_units(), big(0));
    }

    #[test]
    fn from_signed_rejects_negative_counts() {
        let err = Inventory::from_signed([2i64, -1, 0]).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::NegativeCount {
                tier: 2,
                count: BigInt::from(-1),
            }
        );
        let ok = Inventory::from_signed([2i64, 0, 5]).unwrap();
        assert_eq!(ok, Inventory::from([2, 0, 5]));
    }

    #[test]
    fn from_base_units_extracts_base_three_digits() {
        // 47 = 2 + 0*3 + 2*9 + 1*27
        let inventory = Inventory::from_base_units(&big(47), 4);
        assert_eq!(inventory, Inventory::from([2, 0, 2, 1]));
    }

    #[test]
    fn from_base_units_pads_and_truncates() {
        assert_eq!(Inventory::from_base_units(&big(1), 3), Inventory::from([1, 0, 0]));
        // 10 = 1 + 0*3 + 1*9; only two digits kept.
        assert_eq!(Inventory::from_base_units(&big(10), 2), Inventory::from([1, 0]));
        assert!(Inventory::from_base_units(&big(10), 0).is_empty());
    }

    #[test]
    fn count_past_end_is_zero() {
        let inventory = Inventory::from([4]);
        let tier2 = Tier::new(2).unwrap();
        assert_eq!(inventory.count(Tier::BASE), big(4));
        assert_eq!(inventory.count(tier2), big(0));
        assert!(inventory.holds(Tier::BASE));
        assert!(!inventory.holds(tier2));
    }

    #[test]
    fn serializes_counts_as_decimal_strings() {
        let inventory = Inventory::new(vec![big(1), BigUint::from(3u32).pow(50)]);
        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(json, r#"["1","717897987691852588770249"]"#);
        let back: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inventory);
    }
}
