use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use dresscalc_core::{Aggregate, AggregateRoot, CartId, DomainError, EntryId, Money};
use dresscalc_events::Event;

use crate::category::Category;
use crate::entry::OrderEntry;
use crate::view::{AggregateView, Breakdown};

/// Aggregate root: the session's insertion-ordered cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    entries: Vec<OrderEntry>,
    version: u64,
}

impl Cart {
    pub fn empty(id: CartId) -> Self {
        Self {
            id,
            entries: Vec::new(),
            version: 0,
        }
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry_id: EntryId) -> bool {
        self.position_of(entry_id).is_some()
    }

    pub fn get(&self, entry_id: EntryId) -> Option<&OrderEntry> {
        self.entries.iter().find(|e| e.id_typed() == entry_id)
    }

    pub fn latest(&self) -> Option<&OrderEntry> {
        self.entries.last()
    }

    pub fn aggregates(&self) -> AggregateView {
        AggregateView::from_entries(&self.entries)
    }

    pub fn breakdown(&self) -> Breakdown {
        Breakdown::from_entries(&self.entries)
    }

    fn position_of(&self, entry_id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id_typed() == entry_id)
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddEntry (inputs already parsed and bounded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddEntry {
    pub entry_id: EntryId,
    pub category: Category,
    pub unit_price: Money,
    pub size_count: u32,
    pub colour_count: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveEntry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveEntry {
    pub entry_id: EntryId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddEntry(AddEntry),
    RemoveEntry(RemoveEntry),
    ClearCart(ClearCart),
}

/// Event: EntryAdded (carries the derived totals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAdded {
    pub cart_id: CartId,
    pub entry_id: EntryId,
    pub category: Category,
    pub unit_price: Money,
    pub size_count: u32,
    pub colour_count: u32,
    pub total_pieces: u64,
    pub total_price: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: EntryRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRemoved {
    pub cart_id: CartId,
    pub entry_id: EntryId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub removed: Vec<EntryId>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    EntryAdded(EntryAdded),
    EntryRemoved(EntryRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::EntryAdded(_) => "cart.entry.added",
            CartEvent::EntryRemoved(_) => "cart.entry.removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::EntryAdded(e) => e.occurred_at,
            CartEvent::EntryRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::EntryAdded(e) => {
                let entry = OrderEntry::from_recorded(e);
                let rederived = OrderEntry::new(
                    e.entry_id,
                    e.category.clone(),
                    e.unit_price,
                    e.size_count,
                    e.colour_count,
                    e.occurred_at,
                );
                if rederived.as_ref().ok() != Some(&entry) {
                    warn!(
                        cart_id = %self.id,
                        entry_id = %e.entry_id,
                        "recorded entry totals do not match its inputs"
                    );
                }
                self.entries.push(entry);
            }
            CartEvent::EntryRemoved(e) => {
                if let Some(pos) = self.position_of(e.entry_id) {
                    self.entries.remove(pos);
                }
            }
            CartEvent::CartCleared(_) => {
                self.entries.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddEntry(cmd) => self.handle_add(cmd),
            CartCommand::RemoveEntry(cmd) => Ok(self.handle_remove(cmd)),
            CartCommand::ClearCart(cmd) => Ok(self.handle_clear(cmd)),
        }
    }
}

impl Cart {
    fn handle_add(&self, cmd: &AddEntry) -> Result<Vec<CartEvent>, DomainError> {
        if self.contains(cmd.entry_id) {
            return Err(DomainError::conflict(format!(
                "entry {} already exists in cart",
                cmd.entry_id
            )));
        }

        let entry = OrderEntry::new(
            cmd.entry_id,
            cmd.category.clone(),
            cmd.unit_price,
            cmd.size_count,
            cmd.colour_count,
            cmd.occurred_at,
        )?;

        Ok(vec![CartEvent::EntryAdded(EntryAdded {
            cart_id: self.id,
            entry_id: entry.id_typed(),
            category: entry.category().clone(),
            unit_price: entry.unit_price(),
            size_count: entry.size_count(),
            colour_count: entry.colour_count(),
            total_pieces: entry.total_pieces(),
            total_price: entry.total_price(),
            occurred_at: cmd.occurred_at,
        })])
    }

    /// Unknown identifiers are not an error: nothing is emitted.
    fn handle_remove(&self, cmd: &RemoveEntry) -> Vec<CartEvent> {
        if !self.contains(cmd.entry_id) {
            return Vec::new();
        }
        vec![CartEvent::EntryRemoved(EntryRemoved {
            cart_id: self.id,
            entry_id: cmd.entry_id,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Vec<CartEvent> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        vec![CartEvent::CartCleared(CartCleared {
            cart_id: self.id,
            removed: self.entries.iter().map(OrderEntry::id_typed).collect(),
            occurred_at: cmd.occurred_at,
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn add_cmd(category: &str, price: u64, sizes: u32, colours: u32) -> CartCommand {
        CartCommand::AddEntry(AddEntry {
            entry_id: EntryId::new(),
            category: Category::parse(category).unwrap(),
            unit_price: Money::from_rupees(price),
            size_count: sizes,
            colour_count: colours,
            occurred_at: test_time(),
        })
    }

    #[test]
    fn replayed_entry_added_is_kept_even_if_inconsistent() {
        let mut cart = Cart::empty(CartId::new());
        let event = CartEvent::EntryAdded(EntryAdded {
            cart_id: *cart.id(),
            entry_id: EntryId::new(),
            category: Category::parse("Lehenga").unwrap(),
            unit_price: Money::from_rupees(100),
            size_count: 0,
            colour_count: 2,
            total_pieces: 5,
            total_price: Money::from_rupees(500),
            occurred_at: test_time(),
        });
        cart.apply(&event);

        assert_eq!(cart.version(), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].total_pieces(), 5);
        assert_eq!(cart.aggregates().total_price, Money::from_rupees(500));
    }

    fn remove_cmd(entry_id: EntryId) -> CartCommand {
        CartCommand::RemoveEntry(RemoveEntry {
            entry_id,
            occurred_at: test_time(),
        })
    }

    #[test]
    fn add_entry_emits_entry_added_with_totals() {
        let cart = Cart::empty(CartId::new());
        let events = cart.handle(&add_cmd("Lehenga", 1000, 3, 2)).unwrap();
        assert_eq!(events.len(), 1);

        match &events[0] {
            CartEvent::EntryAdded(e) => {
                assert_eq!(e.cart_id, *cart.id());
                assert_eq!(e.total_pieces, 6);
                assert_eq!(e.total_price, Money::from_rupees(6000));
            }
            _ => panic!("Expected EntryAdded event"),
        }
        assert_eq!(events[0].event_type(), "cart.entry.added");
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut cart = Cart::empty(CartId::new());
        cart.execute(&add_cmd("Lehenga", 1000, 3, 2)).unwrap();
        cart.execute(&add_cmd("Palazzo Suit", 500, 2, 2)).unwrap();
        cart.execute(&add_cmd("Short Anarkali", 700, 1, 1)).unwrap();

        let labels: Vec<_> = cart.entries().iter().map(|e| e.category().as_str()).collect();
        assert_eq!(labels, vec!["Lehenga", "Palazzo Suit", "Short Anarkali"]);
        assert_eq!(cart.latest().unwrap().category().as_str(), "Short Anarkali");
    }

    #[test]
    fn duplicate_entry_id_is_a_conflict() {
        let mut cart = Cart::empty(CartId::new());
        let cmd = add_cmd("Lehenga", 1000, 3, 2);
        cart.execute(&cmd).unwrap();

        let err = cart.handle(&cmd).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn invalid_add_leaves_cart_unchanged() {
        let mut cart = Cart::empty(CartId::new());
        cart.execute(&add_cmd("Lehenga", 1000, 3, 2)).unwrap();
        let before = cart.clone();

        let err = cart.execute(&add_cmd("Lehenga", 1000, 0, 2)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut cart = Cart::empty(CartId::new());
        cart.execute(&add_cmd("A", 1, 1, 1)).unwrap();
        cart.execute(&add_cmd("B", 1, 1, 1)).unwrap();
        cart.execute(&add_cmd("C", 1, 1, 1)).unwrap();

        let middle = cart.entries()[1].id_typed();
        let events = cart.execute(&remove_cmd(middle)).unwrap();
        assert_eq!(events.len(), 1);

        let labels: Vec<_> = cart.entries().iter().map(|e| e.category().as_str()).collect();
        assert_eq!(labels, vec!["A", "C"]);
    }

    #[test]
    fn remove_unknown_id_is_a_silent_no_op() {
        let mut cart = Cart::empty(CartId::new());
        cart.execute(&add_cmd("Lehenga", 1000, 3, 2)).unwrap();
        let before = cart.clone();

        let events = cart.execute(&remove_cmd(EntryId::new())).unwrap();
        assert!(events.is_empty());
        assert_eq!(cart, before);
    }

    #[test]
    fn clear_removes_everything_in_one_event() {
        let mut cart = Cart::empty(CartId::new());
        cart.execute(&add_cmd("A", 1, 1, 1)).unwrap();
        cart.execute(&add_cmd("B", 1, 1, 1)).unwrap();
        let ids: Vec<_> = cart.entries().iter().map(OrderEntry::id_typed).collect();

        let events = cart
            .execute(&CartCommand::ClearCart(ClearCart { occurred_at: test_time() }))
            .unwrap();
        match &events[..] {
            [CartEvent::CartCleared(e)] => assert_eq!(e.removed, ids),
            other => panic!("Expected a single CartCleared event, got {other:?}"),
        }
        assert!(cart.is_empty());
        assert_eq!(cart.aggregates(), AggregateView::default());
    }

    #[test]
    fn version_increments_on_apply() {
        let mut cart = Cart::empty(CartId::new());
        assert_eq!(cart.version(), 0);
        cart.execute(&add_cmd("A", 1, 1, 1)).unwrap();
        assert_eq!(cart.version(), 1);
        let id = cart.entries()[0].id_typed();
        cart.execute(&remove_cmd(id)).unwrap();
        assert_eq!(cart.version(), 2);
        // no-op removal emits nothing, so the version stays put
        cart.execute(&remove_cmd(id)).unwrap();
        assert_eq!(cart.version(), 2);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let cart = Cart::empty(CartId::new());
        let cmd = add_cmd("Lehenga", 1000, 3, 2);
        let events1 = cart.handle(&cmd).unwrap();
        let events2 = cart.handle(&cmd).unwrap();
        assert_eq!(cart.version(), 0);
        assert!(cart.is_empty());
        assert_eq!(events1, events2);
    }

    #[test]
    fn worked_example_two_entries() {
        let mut cart = Cart::empty(CartId::new());
        cart.execute(&add_cmd("Lehenga", 1000, 3, 2)).unwrap();
        cart.execute(&add_cmd("Palazzo Suit", 500, 2, 2)).unwrap();

        let view = cart.aggregates();
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total_pieces, 10);
        assert_eq!(view.total_price, Money::from_rupees(8000));

        let breakdown = cart.breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown.get("Lehenga"), Some(6));
        assert_eq!(breakdown.get("Palazzo Suit"), Some(4));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add { category: usize, price: u64, sizes: u32, colours: u32 },
        RemoveAt(usize),
        RemoveUnknown,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0usize..3, 0u64..100_000, 1u32..10, 1u32..10).prop_map(
                |(category, price, sizes, colours)| Op::Add { category, price, sizes, colours }
            ),
            1 => (0usize..20).prop_map(Op::RemoveAt),
            1 => Just(Op::RemoveUnknown),
        ]
    }

    const CATEGORIES: [&str; 3] = ["Lehenga", "Palazzo Suit", "Long Anarkali"];

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any add/remove sequence the aggregates equal the
        /// per-entry sums, and the breakdown agrees with the flat totals.
        #[test]
        fn aggregates_match_entry_sums(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut cart = Cart::empty(CartId::new());

            for op in ops {
                match op {
                    Op::Add { category, price, sizes, colours } => {
                        cart.execute(&add_cmd(CATEGORIES[category], price, sizes, colours)).unwrap();
                    }
                    Op::RemoveAt(i) => {
                        if let Some(id) = cart.entries().get(i).map(OrderEntry::id_typed) {
                            cart.execute(&remove_cmd(id)).unwrap();
                        }
                    }
                    Op::RemoveUnknown => {
                        let before = cart.entries().to_vec();
                        cart.execute(&remove_cmd(EntryId::new())).unwrap();
                        prop_assert_eq!(cart.entries(), &before[..]);
                    }
                }
            }

            for e in cart.entries() {
                prop_assert_eq!(e.total_pieces(), u64::from(e.size_count()) * u64::from(e.colour_count()));
                prop_assert_eq!(Some(e.total_price()), e.unit_price().checked_times(e.total_pieces()));
            }

            let view = cart.aggregates();
            prop_assert_eq!(view, cart.aggregates());
            prop_assert_eq!(view.item_count, cart.len());
            let expected_price: Money = cart.entries().iter().map(OrderEntry::total_price).sum();
            prop_assert_eq!(view.total_price, expected_price);
            prop_assert_eq!(cart.breakdown().total_pieces(), view.total_pieces);
        }

        /// Property: adding n entries and removing them all leaves zero aggregates.
        #[test]
        fn add_then_remove_all_is_empty(prices in prop::collection::vec(0u64..1_000_000, 1..20)) {
            let mut cart = Cart::empty(CartId::new());
            for price in &prices {
                cart.execute(&add_cmd("Lehenga", *price, 2, 3)).unwrap();
            }
            let ids: Vec<_> = cart.entries().iter().map(OrderEntry::id_typed).collect();
            for id in ids {
                cart.execute(&remove_cmd(id)).unwrap();
            }
            prop_assert!(cart.is_empty());
            let view = cart.aggregates();
            prop_assert_eq!(view.total_pieces, 0);
            prop_assert_eq!(view.total_price, Money::ZERO);
        }
    }
}
