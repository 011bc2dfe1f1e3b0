use chrono::{DateTime, FixedOffset};
use tracing::info;

use dresscalc_orders::{AggregateView, Breakdown, OrderEntry, OrderSession};

use crate::document::{BreakdownLine, GeneratedAt, LineItem, OrderSummary, SummaryDocument};
use crate::options::ExportOptions;

/// Builds [`SummaryDocument`]s. Never fails: entries were validated when they
/// were added, and an empty cart yields a document with no rows.
#[derive(Debug, Clone, Default)]
pub struct SummaryExporter {
    options: ExportOptions,
}

impl SummaryExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn export(
        &self,
        entries: &[OrderEntry],
        aggregates: &AggregateView,
        breakdown: &Breakdown,
        timestamp: DateTime<FixedOffset>,
    ) -> SummaryDocument {
        let line_items = entries
            .iter()
            .enumerate()
            .map(|(i, e)| LineItem {
                serial: i + 1,
                category: e.category().clone(),
                unit_price: e.unit_price(),
                size_count: e.size_count(),
                colour_count: e.colour_count(),
                total_pieces: e.total_pieces(),
                total_price: e.total_price(),
            })
            .collect::<Vec<_>>();

        let summary = OrderSummary {
            item_count: aggregates.item_count,
            total_pieces: aggregates.total_pieces,
            grand_total: aggregates.total_price,
        };

        let breakdown = breakdown
            .iter()
            .map(|row| BreakdownLine {
                category: row.category.clone(),
                pieces: row.pieces,
            })
            .collect::<Vec<_>>();

        let generated_at = GeneratedAt(timestamp);
        let footer = vec![
            self.options.generator.clone(),
            format!("© {} - {}", generated_at.year(), self.options.tagline),
        ];

        info!(
            rows = line_items.len(),
            categories = breakdown.len(),
            grand_total = %summary.grand_total,
            "summary document exported"
        );

        SummaryDocument {
            title: self.options.title.clone(),
            generated_at,
            line_items,
            summary,
            breakdown,
            footer,
        }
    }

    /// Export the session's full cart (focus mode does not apply).
    pub fn export_session(
        &self,
        session: &OrderSession,
        timestamp: DateTime<FixedOffset>,
    ) -> SummaryDocument {
        self.export(
            session.entries(),
            &session.aggregates(),
            &session.breakdown(),
            timestamp,
        )
    }
}
