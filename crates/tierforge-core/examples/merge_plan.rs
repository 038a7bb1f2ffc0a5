//! Merge plan example: from a partial inventory to the next tier.
//!
//! Starts from a player holding units across six tiers, works out how many
//! tier-1 units to buy for a tier-7 unit, then shows a surplus inventory
//! being merged and redistributed.
//!
//! Run with: `cargo run -p tierforge-core --example merge_plan`

use tierforge_core::{Inventory, Tier, UNIT_PRICE, compute};

fn print_inventory(label: &str, inventory: &Inventory) {
    let slots: Vec<String> = inventory
        .iter()
        .map(|(tier, count)| format!("Lv{tier}: {count}"))
        .collect();
    println!("{label}: {}", slots.join(", "));
}

fn main() {
    // --- Short by a few units ---

    let inventory = Inventory::from([1, 0, 1, 2, 1, 2]);
    let target = Tier::after(inventory.len());
    print_inventory("Holding", &inventory);
    println!(
        "Worth {} tier-1 units, a tier-{target} unit needs {}",
        inventory.base_units(),
        target.base_value()
    );

    let plan = compute(target, &inventory);
    println!(
        "Buy {} units at {UNIT_PRICE} each: {} total",
        plan.units_to_buy, plan.total_cost
    );
    print_inventory("After merging", &plan.final_inventory);

    // --- More than enough ---

    println!();
    let inventory = Inventory::from([8, 2]);
    let target = Tier::after(inventory.len());
    print_inventory("Holding", &inventory);

    let plan = compute(target, &inventory);
    println!("Buy {} units", plan.units_to_buy);
    print_inventory("After merging", &plan.final_inventory);

    // --- Already there ---

    println!();
    let inventory = Inventory::from([0, 0, 1]);
    let target = Tier::after(2);
    let plan = compute(target, &inventory);
    println!(
        "Tier {target} already held: buy {}, inventory unchanged = {}",
        plan.units_to_buy,
        plan.final_inventory == inventory
    );
}
