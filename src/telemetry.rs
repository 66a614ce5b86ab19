use tracing_subscriber::EnvFilter;

use crate::config::SystemConfig;

/// Configure tracing once at startup for the whole process.
///
/// `RUST_LOG` takes precedence; otherwise `config.default_log_filter` applies.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=registry_recipe::registry=debug,info cargo run
/// ```
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
