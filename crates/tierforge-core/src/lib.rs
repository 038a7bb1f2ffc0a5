//! Tierforge Core -- purchase planning for merge-three tier progressions.
//!
//! Units come in tiers. Three units of one tier merge into one unit of the
//! next, so a tier `n` unit is worth `3^(n-1)` tier-1 units, and only tier-1
//! units can be bought. Given what a player already holds, this crate works
//! out how many tier-1 units must be bought to own one unit at a target tier
//! and what the inventory looks like afterwards.
//!
//! ```rust
//! use tierforge_core::{compute, Inventory, Tier};
//!
//! let inventory = Inventory::from([1, 0, 1, 2, 1, 2]);
//! let result = compute(Tier::after(inventory.len()), &inventory);
//! assert_eq!(result.units_to_buy, 98u32.into());
//! assert_eq!(result.total_cost, 19_600u32.into());
//! ```
//!
//! # Key Types
//!
//! - [`tier::Tier`] -- A 1-indexed tier; never zero.
//! - [`inventory::Inventory`] -- Unbounded per-tier unit counts.
//! - [`converter::PurchaseResult`] -- Units to buy, their cost, and the
//!   inventory after merging.
//! - [`error::InvalidInput`] -- Zero tiers and negative counts.

pub mod converter;
pub mod decimal;
pub mod error;
pub mod inventory;
pub mod tier;

pub use converter::{PurchaseResult, UNIT_PRICE, compute, compute_raw, required_base_units};
pub use error::InvalidInput;
pub use inventory::Inventory;
pub use tier::{MERGE_RATIO, Tier};
