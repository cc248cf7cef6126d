//! spend-domain
//!
//! Pure data model for the spend dashboard (records, metrics, filters, users).
//! No I/O, no CLI, no storage. Only data types and closed enumerations.

pub mod aggregate;
pub mod dates;
pub mod filter;
pub mod metric;
pub mod record;
pub mod user;
pub mod window;

pub use aggregate::*;
pub use filter::*;
pub use metric::*;
pub use record::*;
pub use user::*;
pub use window::*;

// Re-export common dependencies so consumers can rely on this crate as a façade.
pub use chrono;
pub use indexmap;
pub use serde;
