//! The calculator session: cart, draft form and display mode.
//!
//! The presentation layer calls a mutating operation, then re-queries the
//! read-only snapshots it needs (`entries`, `visible_entries`, `aggregates`,
//! `breakdown`). Nothing is pushed to it.

use chrono::Utc;
use tracing::{debug, info, warn};

use dresscalc_core::{Aggregate, AggregateRoot, CartId, DomainError, DomainResult, EntryId};
use dresscalc_events::Event;

use crate::cart::{AddEntry, Cart, CartCommand, CartEvent, ClearCart, RemoveEntry};
use crate::draft::DraftEntry;
use crate::entry::OrderEntry;
use crate::limits::EntryLimits;
use crate::view::{AggregateView, Breakdown, FocusMode};

#[derive(Debug, Clone)]
pub struct OrderSession {
    cart: Cart,
    draft: DraftEntry,
    focus: FocusMode,
    limits: EntryLimits,
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSession {
    pub fn new() -> Self {
        Self::with_limits(EntryLimits::default())
    }

    pub fn with_limits(limits: EntryLimits) -> Self {
        Self {
            cart: Cart::empty(CartId::new()),
            draft: DraftEntry::default(),
            focus: FocusMode::default(),
            limits,
        }
    }

    pub fn limits(&self) -> &EntryLimits {
        &self.limits
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // --- draft form -------------------------------------------------------

    pub fn draft(&self) -> &DraftEntry {
        &self.draft
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.draft.category = value.into();
    }

    pub fn set_unit_price(&mut self, value: impl Into<String>) {
        self.draft.unit_price = value.into();
    }

    pub fn set_size_count(&mut self, value: impl Into<String>) {
        self.draft.size_count = value.into();
    }

    pub fn set_colour_count(&mut self, value: impl Into<String>) {
        self.draft.colour_count = value.into();
    }

    /// Validate the current draft and add it to the cart.
    pub fn submit_draft(&mut self) -> DomainResult<OrderEntry> {
        let draft = self.draft.clone();
        self.add_draft(&draft)
    }

    // --- aggregator operations --------------------------------------------

    /// Validate the four text fields, derive totals and append the entry.
    ///
    /// On success the draft form is cleared. On failure neither the cart nor
    /// the draft changes.
    pub fn add(
        &mut self,
        category: &str,
        unit_price: &str,
        size_count: &str,
        colour_count: &str,
    ) -> DomainResult<OrderEntry> {
        self.add_draft(&DraftEntry::new(category, unit_price, size_count, colour_count))
    }

    fn add_draft(&mut self, draft: &DraftEntry) -> DomainResult<OrderEntry> {
        let validated = draft.validate(&self.limits).inspect_err(|err| {
            debug!(error = %err, "draft rejected");
        })?;

        let entry_id = EntryId::new();
        let command = CartCommand::AddEntry(AddEntry {
            entry_id,
            category: validated.category,
            unit_price: validated.unit_price,
            size_count: validated.size_count,
            colour_count: validated.colour_count,
            occurred_at: Utc::now(),
        });
        self.record(&command)?;
        self.draft.clear();

        let entry = self
            .cart
            .get(entry_id)
            .cloned()
            .ok_or_else(|| DomainError::invariant("added entry missing from cart"))?;

        info!(
            entry_id = %entry.id_typed(),
            category = %entry.category(),
            total_pieces = entry.total_pieces(),
            total_price = %entry.total_price(),
            "entry added"
        );
        Ok(entry)
    }

    /// Remove an entry. Unknown identifiers are ignored; returns whether
    /// anything was removed.
    pub fn remove(&mut self, entry_id: EntryId) -> bool {
        let command = CartCommand::RemoveEntry(RemoveEntry {
            entry_id,
            occurred_at: Utc::now(),
        });
        let removed = match self.record(&command) {
            Ok(events) => !events.is_empty(),
            Err(err) => {
                warn!(entry_id = %entry_id, error = %err, "remove rejected");
                false
            }
        };

        if removed {
            info!(entry_id = %entry_id, "entry removed");
        } else {
            debug!(entry_id = %entry_id, "remove ignored: no such entry");
        }
        removed
    }

    /// Remove every entry; returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.cart.len();
        let command = CartCommand::ClearCart(ClearCart {
            occurred_at: Utc::now(),
        });
        match self.record(&command) {
            Ok(_) if count > 0 => info!(removed = count, "cart cleared"),
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "clear rejected");
                return 0;
            }
        }
        count
    }

    fn record(&mut self, command: &CartCommand) -> DomainResult<Vec<CartEvent>> {
        let events = self.cart.execute(command)?;
        for event in &events {
            debug!(
                cart_id = %self.cart.id(),
                event = %event.label(),
                occurred_at = %event.occurred_at(),
                version = self.cart.version(),
                "event applied"
            );
        }
        Ok(events)
    }

    /// Entry at a 1-based position in cart order.
    pub fn entry_at(&self, serial: usize) -> Option<&OrderEntry> {
        serial.checked_sub(1).and_then(|i| self.cart.entries().get(i))
    }

    // --- snapshots --------------------------------------------------------

    pub fn entries(&self) -> &[OrderEntry] {
        self.cart.entries()
    }

    pub fn aggregates(&self) -> AggregateView {
        self.cart.aggregates()
    }

    pub fn breakdown(&self) -> Breakdown {
        self.cart.breakdown()
    }

    pub fn focus(&self) -> FocusMode {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FocusMode) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) -> FocusMode {
        self.focus = self.focus.toggled();
        debug!(focus = ?self.focus, "focus mode toggled");
        self.focus
    }

    /// Entries the presentation layer should show under the current focus mode.
    pub fn visible_entries(&self) -> &[OrderEntry] {
        self.focus.select(self.cart.entries())
    }
}
