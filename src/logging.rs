use tracing_subscriber::EnvFilter;

/// Initialise logging for the command line driver. The default level is
/// `info`; passing `debug` raises it, and `RUST_LOG` may override the level
/// only when debug output was requested.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        // Ignore `RUST_LOG` here so a stray environment variable cannot turn
        // verbose output back on.
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
