//! Read-side projections over the cart, recomputed on every call.

use serde::{Deserialize, Serialize};

use dresscalc_core::Money;

use crate::category::Category;
use crate::entry::OrderEntry;

/// Grand totals over the whole cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateView {
    pub item_count: usize,
    pub total_pieces: u64,
    pub total_price: Money,
}

impl AggregateView {
    pub fn from_entries(entries: &[OrderEntry]) -> Self {
        Self {
            item_count: entries.len(),
            total_pieces: entries.iter().map(OrderEntry::total_pieces).sum(),
            total_price: entries.iter().map(OrderEntry::total_price).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Pieces summed for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub category: Category,
    pub pieces: u64,
}

/// Per-category piece totals, in order of first appearance in the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown {
    rows: Vec<BreakdownRow>,
}

impl Breakdown {
    pub fn from_entries(entries: &[OrderEntry]) -> Self {
        let mut rows: Vec<BreakdownRow> = Vec::new();
        for entry in entries {
            match rows.iter_mut().find(|r| r.category == *entry.category()) {
                Some(row) => row.pieces += entry.total_pieces(),
                None => rows.push(BreakdownRow {
                    category: entry.category().clone(),
                    pieces: entry.total_pieces(),
                }),
            }
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[BreakdownRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreakdownRow> {
        self.rows.iter()
    }

    /// Pieces for an exact category label.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|r| r.category.as_str() == label)
            .map(|r| r.pieces)
    }

    pub fn total_pieces(&self) -> u64 {
        self.rows.iter().map(|r| r.pieces).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which entries are surfaced for display. Never affects stored data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    ShowAll,
    #[default]
    LatestOnly,
}

impl FocusMode {
    pub fn toggled(self) -> Self {
        match self {
            FocusMode::ShowAll => FocusMode::LatestOnly,
            FocusMode::LatestOnly => FocusMode::ShowAll,
        }
    }

    /// The subset of `entries` this mode exposes.
    pub fn select(self, entries: &[OrderEntry]) -> &[OrderEntry] {
        match self {
            FocusMode::ShowAll => entries,
            FocusMode::LatestOnly => {
                let start = entries.len().saturating_sub(1);
                &entries[start..]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dresscalc_core::EntryId;

    fn entry(category: &str, price: u64, sizes: u32, colours: u32) -> OrderEntry {
        OrderEntry::new(
            EntryId::new(),
            Category::parse(category).unwrap(),
            Money::from_rupees(price),
            sizes,
            colours,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn empty_cart_has_zero_aggregates() {
        let view = AggregateView::from_entries(&[]);
        assert_eq!(view, AggregateView::default());
        assert!(view.is_empty());
        assert!(Breakdown::from_entries(&[]).is_empty());
    }

    #[test]
    fn breakdown_keeps_first_appearance_order_and_sums() {
        let entries = vec![
            entry("Lehenga", 1000, 3, 2),
            entry("Palazzo Suit", 500, 2, 2),
            entry("Lehenga", 800, 1, 1),
        ];
        let breakdown = Breakdown::from_entries(&entries);
        let labels: Vec<_> = breakdown.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(labels, vec!["Lehenga", "Palazzo Suit"]);
        assert_eq!(breakdown.get("Lehenga"), Some(7));
        assert_eq!(breakdown.get("Palazzo Suit"), Some(4));
        assert_eq!(breakdown.get("lehenga"), None);
        assert_eq!(
            breakdown.total_pieces(),
            AggregateView::from_entries(&entries).total_pieces
        );
    }

    #[test]
    fn focus_mode_defaults_to_latest_only() {
        assert_eq!(FocusMode::default(), FocusMode::LatestOnly);
        assert_eq!(FocusMode::LatestOnly.toggled().toggled(), FocusMode::LatestOnly);
    }

    #[test]
    fn focus_mode_selects_subset() {
        let entries = vec![entry("A", 1, 1, 1), entry("B", 1, 1, 1)];
        assert_eq!(FocusMode::ShowAll.select(&entries).len(), 2);
        let latest = FocusMode::LatestOnly.select(&entries);
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].category().as_str(), "B");
        assert!(FocusMode::LatestOnly.select(&[]).is_empty());
    }
}
