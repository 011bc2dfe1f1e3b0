//! Shell configuration, read once from the environment.

use anyhow::Context;
use dresscalc_core::Money;
use dresscalc_export::ExportOptions;
use dresscalc_orders::EntryLimits;

pub const TITLE_ENV: &str = "DRESSCALC_TITLE";
pub const FOOTER_ENV: &str = "DRESSCALC_FOOTER";
pub const MAX_UNIT_PRICE_ENV: &str = "DRESSCALC_MAX_UNIT_PRICE";
pub const MAX_VARIANTS_ENV: &str = "DRESSCALC_MAX_VARIANTS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    pub limits: EntryLimits,
    pub export: ExportOptions,
}

impl ShellConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(title) = lookup(TITLE_ENV).filter(|v| !v.trim().is_empty()) {
            config.export.title = title;
        }
        if let Some(footer) = lookup(FOOTER_ENV).filter(|v| !v.trim().is_empty()) {
            config.export.generator = footer;
        }
        if let Some(raw) = lookup(MAX_UNIT_PRICE_ENV) {
            config.limits.max_unit_price = raw
                .parse::<Money>()
                .with_context(|| format!("{MAX_UNIT_PRICE_ENV} must be a non-negative amount"))?;
        }
        if let Some(raw) = lookup(MAX_VARIANTS_ENV) {
            let max: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{MAX_VARIANTS_ENV} must be a whole number"))?;
            if max == 0 {
                anyhow::bail!("{MAX_VARIANTS_ENV} must be at least 1");
            }
            config.limits.max_variant_count = max;
        }

        Ok(config)
    }
}
