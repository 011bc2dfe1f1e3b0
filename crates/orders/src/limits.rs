use serde::{Deserialize, Serialize};

use dresscalc_core::Money;

/// Upper bounds applied when a draft is validated.
///
/// Counts must also be at least one and prices non-negative; those lower
/// bounds are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLimits {
    pub max_unit_price: Money,
    pub max_variant_count: u32,
}

impl EntryLimits {
    pub const DEFAULT_MAX_UNIT_PRICE: u64 = 10_000_000;
    pub const DEFAULT_MAX_VARIANT_COUNT: u32 = 10;
}

impl Default for EntryLimits {
    fn default() -> Self {
        Self {
            max_unit_price: Money::from_rupees(Self::DEFAULT_MAX_UNIT_PRICE),
            max_variant_count: Self::DEFAULT_MAX_VARIANT_COUNT,
        }
    }
}
