//! Dress categories and variant option labels.

use serde::{Deserialize, Serialize};

use dresscalc_core::{DomainError, DomainResult, ValueObject};

/// Category label of a cart entry.
///
/// Any trimmed, non-empty text is accepted; the catalogue in [`DressType`] is
/// what the form offers. Grouping compares labels exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl ValueObject for Category {}

impl Category {
    pub fn parse(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("dress type must be selected"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The catalogue entry with this exact label, if any.
    pub fn dress_type(&self) -> Option<DressType> {
        DressType::from_label(&self.0)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DressType> for Category {
    fn from(value: DressType) -> Self {
        Self(value.label().to_string())
    }
}

/// Dress types offered by the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DressType {
    PalazzoSuit,
    Lehenga,
    ShortAnarkali,
    NormalSuit,
    LongAnarkali,
}

impl DressType {
    /// Catalogue in form order.
    pub const ALL: [DressType; 5] = [
        DressType::PalazzoSuit,
        DressType::Lehenga,
        DressType::ShortAnarkali,
        DressType::NormalSuit,
        DressType::LongAnarkali,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DressType::PalazzoSuit => "Palazzo Suit",
            DressType::Lehenga => "Lehenga",
            DressType::ShortAnarkali => "Short Anarkali",
            DressType::NormalSuit => "Normal Suit",
            DressType::LongAnarkali => "Long Anarkali",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl core::fmt::Display for DressType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which variant dimension a count refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Size,
    Colour,
}

/// Option label shown next to a variant count, e.g. `1 Size` or `3 Colours`.
pub fn variant_label(kind: VariantKind, count: u32) -> String {
    let noun = match (kind, count == 1) {
        (VariantKind::Size, true) => "Size",
        (VariantKind::Size, false) => "Sizes",
        (VariantKind::Colour, true) => "Colour",
        (VariantKind::Colour, false) => "Colours",
    };
    format!("{count} {noun}")
}
