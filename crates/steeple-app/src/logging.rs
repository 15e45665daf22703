use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default filter.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "steeple_app=debug,steeple_store=debug,steeple_db=info,steeple_media=debug".into()
    });

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
