use num_bigint::BigInt;

/// Inputs the converter refuses to work with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// Tiers are 1-indexed; tier 0 does not exist.
    #[error("target tier must be at least 1")]
    ZeroTier,

    /// A tier holds a negative number of units.
    #[error("tier {tier} has a negative unit count: {count}")]
    NegativeCount { tier: usize, count: BigInt },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_tier() {
        let err = InvalidInput::NegativeCount {
            tier: 3,
            count: BigInt::from(-4),
        };
        assert_eq!(err.to_string(), "tier 3 has a negative unit count: -4");
        assert_eq!(
            InvalidInput::ZeroTier.to_string(),
            "target tier must be at least 1"
        );
    }
}
