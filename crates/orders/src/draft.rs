//! Draft input: the four text fields of the order form.

use serde::{Deserialize, Serialize};

use dresscalc_core::{DomainError, DomainResult, Money};

use crate::category::Category;
use crate::limits::EntryLimits;

/// Not-yet-submitted form fields, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEntry {
    pub category: String,
    pub unit_price: String,
    pub size_count: String,
    pub colour_count: String,
}

impl DraftEntry {
    pub fn new(
        category: impl Into<String>,
        unit_price: impl Into<String>,
        size_count: impl Into<String>,
        colour_count: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            unit_price: unit_price.into(),
            size_count: size_count.into(),
            colour_count: colour_count.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        self.missing_fields().len() == 4
    }

    /// Labels of the fields that are empty after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("dress type", &self.category),
            ("price per piece", &self.unit_price),
            ("size count", &self.size_count),
            ("colour count", &self.colour_count),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Check presence, parse every field and apply `limits`.
    pub fn validate(&self, limits: &EntryLimits) -> DomainResult<ValidatedDraft> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::validation(format!(
                "please fill all fields (missing: {})",
                missing.join(", ")
            )));
        }

        let category = Category::parse(&self.category)?;

        let unit_price: Money = self
            .unit_price
            .parse()
            .map_err(|_| DomainError::validation("price per piece must be a non-negative number"))?;
        if unit_price.decimal_places() > MAX_PRICE_DECIMALS {
            return Err(DomainError::validation(format!(
                "price per piece can have at most {MAX_PRICE_DECIMALS} decimal places"
            )));
        }
        if unit_price > limits.max_unit_price {
            return Err(DomainError::validation(format!(
                "price per piece cannot exceed {}",
                limits.max_unit_price
            )));
        }

        let size_count = parse_count("size count", &self.size_count, limits)?;
        let colour_count = parse_count("colour count", &self.colour_count, limits)?;

        Ok(ValidatedDraft {
            category,
            unit_price,
            size_count,
            colour_count,
        })
    }
}

/// Prices are quoted in paise at most.
const MAX_PRICE_DECIMALS: u32 = 2;

fn parse_count(field: &str, text: &str, limits: &EntryLimits) -> DomainResult<u32> {
    let trimmed = text.trim();
    let count: u32 = trimmed
        .parse()
        .map_err(|_| DomainError::validation(format!("{field} must be a whole number, got '{trimmed}'")))?;
    if count == 0 {
        return Err(DomainError::validation(format!("{field} must be at least 1")));
    }
    if count > limits.max_variant_count {
        return Err(DomainError::validation(format!(
            "{field} cannot exceed {}",
            limits.max_variant_count
        )));
    }
    Ok(count)
}

/// Typed draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub category: Category,
    pub unit_price: Money,
    pub size_count: u32,
    pub colour_count: u32,
}
