//! Cart types: lines, the snapshot reducer, and the order summary.

mod line;
mod store;
mod summary;

pub use line::{CartLine, LineKey};
pub use store::CartSnapshot;
pub use summary::OrderSummary;
