//! Rendering a purchase plan for the terminal.

use num_bigint::BigUint;
use serde::Serialize;
use tierforge_core::{Inventory, PurchaseResult, Tier};

use crate::error::CliError;

/// Group decimal digits in threes: `19600` becomes `19,600`.
pub fn with_thousands(value: &BigUint) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `Lv1: 0, Lv2: 1, ...`
pub fn distribution(inventory: &Inventory) -> String {
    inventory
        .iter()
        .map(|(tier, count)| format!("Lv{tier}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The four-line text report.
pub fn render_text(target: Tier, result: &PurchaseResult) -> String {
    format!(
        "Target Level: {target}\n\
         Units to buy: {}\n\
         Total Gems: {}\n\
         Final units distribution: {}\n",
        result.units_to_buy,
        with_thousands(&result.total_cost),
        distribution(&result.final_inventory),
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    target_tier: Tier,
    #[serde(flatten)]
    result: &'a PurchaseResult,
}

/// The report as a single JSON object followed by a newline.
pub fn render_json(target: Tier, result: &PurchaseResult) -> Result<String, CliError> {
    let mut out = serde_json::to_string_pretty(&JsonReport {
        target_tier: target,
        result,
    })?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierforge_core::compute;

    #[test]
    fn thousands_grouping() {
        let cases = [
            (0u64, "0"),
            (200, "200"),
            (1_000, "1,000"),
            (19_600, "19,600"),
            (145_800, "145,800"),
            (1_234_567, "1,234,567"),
        ];
        for (value, expected) in cases {
            assert_eq!(with_thousands(&BigUint::from(value)), expected);
        }
    }

    #[test]
    fn text_report_matches_expected_layout() {
        let inventory = Inventory::from([1, 0, 1, 2, 1, 2]);
        let target = Tier::after(inventory.len());
        let result = compute(target, &inventory);
        assert_eq!(
            render_text(target, &result),
            "Target Level: 7\n\
             Units to buy: 98\n\
             Total Gems: 19,600\n\
             Final units distribution: Lv1: 0, Lv2: 0, Lv3: 0, Lv4: 0, Lv5: 0, Lv6: 0, Lv7: 1\n"
        );
    }

    #[test]
    fn json_report_carries_target_and_strings() {
        let target = Tier::new(2).unwrap();
        let result = compute(target, &Inventory::from([0]));
        let json: serde_json::Value =
            serde_json::from_str(&render_json(target, &result).unwrap()).unwrap();
        assert_eq!(json["target_tier"], 2);
        assert_eq!(json["units_to_buy"], "3");
        assert_eq!(json["total_cost"], "600");
        assert_eq!(json["final_inventory"], serde_json::json!(["0", "1"]));
    }
}
