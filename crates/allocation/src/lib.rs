//! Allocation domain module.
//!
//! Order lines are matched to stock batches by SKU, availability and arrival
//! priority. Everything here is deterministic in-memory domain logic (no IO,
//! no storage, no locking); callers own the batches they pass in.

pub mod batch;
pub mod error;
pub mod order_line;
pub mod service;

pub use batch::Batch;
pub use error::AllocationError;
pub use order_line::OrderLine;
pub use service::allocate;
