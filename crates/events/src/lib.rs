//! Store events and the in-process snapshot channel.
//!
//! The product store publishes one message per effective mutation; UI
//! collaborators subscribe and re-render from the snapshot they receive.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{SnapshotBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemorySnapshotBus};
