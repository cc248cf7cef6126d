#![doc(test(attr(deny(warnings))))]

//! Spend Dashboard presents per-user spend metrics filtered by date range,
//! sector, and category, grouped by dimensional attributes, and rendered as
//! text tables from a line-oriented shell.

pub mod cli;
pub mod errors;
pub mod utils;

pub use spend_config as config;
pub use spend_core as engine;
pub use spend_domain as domain;
pub use spend_storage_json as storage;

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    utils::init_tracing();
    tracing::info!("Spend Dashboard tracing initialized.");
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_init_is_harmless() {
        super::init();
        super::init();
    }
}
