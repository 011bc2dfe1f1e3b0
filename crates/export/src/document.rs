//! The exported document value.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::Serialize;

use dresscalc_core::Money;
use dresscalc_orders::Category;

/// One row of the line-item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// 1-based position in cart order.
    pub serial: usize,
    pub category: Category,
    pub unit_price: Money,
    pub size_count: u32,
    pub colour_count: u32,
    pub total_pieces: u64,
    pub total_price: Money,
}

/// The order summary section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub item_count: usize,
    pub total_pieces: u64,
    pub grand_total: Money,
}

/// One row of the category breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub category: Category,
    pub pieces: u64,
}

/// Moment of export, kept with the offset it was taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedAt(pub DateTime<FixedOffset>);

impl GeneratedAt {
    /// `19/10/2026`
    pub fn date_label(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }

    /// `3:05:09 pm`
    pub fn time_label(&self) -> String {
        self.0.format("%-I:%M:%S %P").to_string()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

/// Document sections in the order they are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'a> {
    LineItems(&'a [LineItem]),
    Summary(&'a OrderSummary),
    Breakdown(&'a [BreakdownLine]),
}

/// Self-contained, renderable summary of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryDocument {
    pub title: String,
    pub generated_at: GeneratedAt,
    pub line_items: Vec<LineItem>,
    pub summary: OrderSummary,
    pub breakdown: Vec<BreakdownLine>,
    pub footer: Vec<String>,
}

impl SummaryDocument {
    /// Line items, then summary, then breakdown.
    pub fn sections(&self) -> [Section<'_>; 3] {
        [
            Section::LineItems(&self.line_items),
            Section::Summary(&self.summary),
            Section::Breakdown(&self.breakdown),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
