//! Order aggregator for wholesale dress orders.
//!
//! Pure domain logic only: draft validation, derived totals, the insertion-ordered
//! cart and the read-side projections (aggregate view, category breakdown, focus
//! mode). No IO, no rendering.

pub mod cart;
pub mod category;
pub mod draft;
pub mod entry;
pub mod limits;
pub mod session;
pub mod view;

pub use cart::{
    AddEntry, Cart, CartCleared, CartCommand, CartEvent, ClearCart, EntryAdded, EntryRemoved,
    RemoveEntry,
};
pub use category::{Category, DressType, VariantKind, variant_label};
pub use draft::{DraftEntry, ValidatedDraft};
pub use entry::OrderEntry;
pub use limits::EntryLimits;
pub use session::OrderSession;
pub use view::{AggregateView, Breakdown, BreakdownRow, FocusMode};
