//! spend-core
//!
//! Aggregation engines and the dashboard session for spend records.
//! Depends on spend-domain. No CLI, no terminal I/O, no direct file access.

pub mod dashboard;
pub mod error;
pub mod filter_controller;
pub mod filter_service;
pub mod grouping_service;
pub mod options_service;
pub mod record_store;
pub mod storage;
pub mod summary_service;
pub mod table_service;

pub use dashboard::*;
pub use error::CoreError;
pub use filter_controller::*;
pub use filter_service::*;
pub use grouping_service::*;
pub use options_service::*;
pub use record_store::*;
pub use summary_service::*;
pub use table_service::*;
