//! The tier converter: how many tier-1 units must be bought to own one unit
//! at a target tier.
//!
//! The inventory is read as a base-3 number whose digits are the per-tier
//! counts. The converter totals it in tier-1 units, buys the shortfall against
//! `3^(target-1)`, merges one target-tier unit, and spreads whatever is left
//! back over the lower tiers as base-3 digits.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::InvalidInput;
use crate::inventory::Inventory;
use crate::tier::Tier;

/// Price of one purchasable tier-1 unit.
pub const UNIT_PRICE: u32 = 200;

/// Outcome of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResult {
    /// Tier-1 units that have to be bought.
    #[serde(with = "crate::decimal")]
    pub units_to_buy: BigUint,

    /// `units_to_buy * UNIT_PRICE`.
    #[serde(with = "crate::decimal")]
    pub total_cost: BigUint,

    /// Inventory after merging. When the target tier was already held this
    /// is the input inventory, untouched and unpadded.
    pub final_inventory: Inventory,
}

impl PurchaseResult {
    fn already_satisfied(inventory: &Inventory) -> Self {
        Self {
            units_to_buy: BigUint::zero(),
            total_cost: BigUint::zero(),
            final_inventory: inventory.clone(),
        }
    }

    pub fn needs_purchase(&self) -> bool {
        !self.units_to_buy.is_zero()
    }
}

/// Tier-1 units needed to merge a single unit of `target`.
pub fn required_base_units(target: Tier) -> BigUint {
    target.base_value()
}

/// Work out the purchase needed to hold one unit at `target`.
///
/// If `inventory` already holds a unit at `target` the result is returned
/// immediately with the inventory unchanged. Otherwise the returned inventory
/// has exactly `target` slots, the last holding one unit.
pub fn compute(target: Tier, inventory: &Inventory) -> PurchaseResult {
    if inventory.holds(target) {
        debug!(target = %target, "target tier already held");
        return PurchaseResult::already_satisfied(inventory);
    }

    let held = inventory.base_units();
    let required = required_base_units(target);
    let units_to_buy = if required > held {
        &required - &held
    } else {
        BigUint::zero()
    };
    let total_cost = &units_to_buy * UNIT_PRICE;

    let remaining = &held + &units_to_buy - &required;
    let lower_tiers = target.index();
    let mut final_inventory = Inventory::from_base_units(&remaining, lower_tiers);
    final_inventory.set(target, BigUint::from(1u32));

    if remaining >= required {
        warn!(
            target = %target,
            leftover = %remaining,
            "leftover units exceed the tiers below the target and are dropped"
        );
    }
    debug!(
        target = %target,
        held = %held,
        required = %required,
        units_to_buy = %units_to_buy,
        "computed purchase"
    );

    PurchaseResult {
        units_to_buy,
        total_cost,
        final_inventory,
    }
}

/// Validate raw inputs, then [`compute`].
pub fn compute_raw(target_tier: u32, counts: &[BigInt]) -> Result<PurchaseResult, InvalidInput> {
    let target = Tier::new(target_tier)?;
    let inventory = Inventory::from_signed(counts.iter().cloned())?;
    Ok(compute(target, &inventory))
}
