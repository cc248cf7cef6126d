use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: [&str; 4] = [
    "warn",
    "spend_dashboard=info",
    "spend_core=info",
    "spend_storage_json=info",
];

/// Initializes the global tracing subscriber, honouring `RUST_LOG` when set.
///
/// Logs go to stderr so command output on stdout stays scriptable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES.join(",")));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
