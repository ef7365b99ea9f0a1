use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` takes precedence; otherwise this crate logs at `info`. Called
/// once from [`crate::init`].
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("finance_ledger=info"));

    // Another subscriber may already be installed by the host application.
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
