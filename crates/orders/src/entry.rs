use chrono::{DateTime, Utc};
use serde::Serialize;

use dresscalc_core::{DomainError, DomainResult, Entity, EntryId, Money};

use crate::cart::EntryAdded;
use crate::category::Category;

/// One cart line.
///
/// Totals are derived once, at construction, from the three inputs and are
/// never changed afterwards. There is no edit operation: entries are only added
/// or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEntry {
    id: EntryId,
    category: Category,
    unit_price: Money,
    size_count: u32,
    colour_count: u32,
    total_pieces: u64,
    total_price: Money,
    added_at: DateTime<Utc>,
}

impl OrderEntry {
    pub fn new(
        id: EntryId,
        category: Category,
        unit_price: Money,
        size_count: u32,
        colour_count: u32,
        added_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if size_count == 0 || colour_count == 0 {
            return Err(DomainError::validation(
                "size and colour counts must be at least 1",
            ));
        }

        let total_pieces = u64::from(size_count) * u64::from(colour_count);
        let total_price = unit_price
            .checked_times(total_pieces)
            .ok_or_else(|| DomainError::validation("total price is out of range"))?;

        Ok(Self {
            id,
            category,
            unit_price,
            size_count,
            colour_count,
            total_pieces,
            total_price,
            added_at,
        })
    }

    /// Rebuild an entry exactly as an `EntryAdded` event recorded it.
    pub(crate) fn from_recorded(event: &EntryAdded) -> Self {
        Self {
            id: event.entry_id,
            category: event.category.clone(),
            unit_price: event.unit_price,
            size_count: event.size_count,
            colour_count: event.colour_count,
            total_pieces: event.total_pieces,
            total_price: event.total_price,
            added_at: event.occurred_at,
        }
    }

    pub fn id_typed(&self) -> EntryId {
        self.id
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn size_count(&self) -> u32 {
        self.size_count
    }

    pub fn colour_count(&self) -> u32 {
        self.colour_count
    }

    pub fn total_pieces(&self) -> u64 {
        self.total_pieces
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

impl Entity for OrderEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
