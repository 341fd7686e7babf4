//! Database module for PostgreSQL persistence.

mod pool;
mod shipments;

pub use pool::*;
pub use shipments::*;
