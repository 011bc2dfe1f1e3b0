//! Domain events emitted by the order aggregator.

pub mod event;

pub use event::Event;
