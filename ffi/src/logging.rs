use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directives for this library.
pub const LOG_ENV: &str = "GRAPH_WALK_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Install a stderr fmt subscriber once per process.
///
/// Leaves an existing global subscriber in place, so a Rust host that already
/// configured `tracing` keeps its own output.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Install the library's log subscriber ahead of the first graph handle.
#[no_mangle]
pub extern "C" fn gw_init_logging() {
    init_logging();
}
