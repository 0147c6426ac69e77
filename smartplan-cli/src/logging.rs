use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_DIRECTIVES: &str = "warn";

/// Log to stderr, filtered by `SMARTPLAN_LOG` (e.g. `smartplan_core=debug`).
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("SMARTPLAN_LOG").unwrap_or_else(|_| {
        let directives = if verbose { "smartplan_core=debug,info" } else { DEFAULT_LOG_DIRECTIVES };
        EnvFilter::new(directives)
    });

    // Ignore a second init; tests may have installed a subscriber already.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
