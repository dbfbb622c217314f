//! Tracing setup. Logs go to stderr so stdout carries only the verdict.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CheckConfig;

/// Initialize the global tracing subscriber.
pub fn init_telemetry(config: &CheckConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,contract_check=info,auth_contract=info"));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!(
        policy = %config.policy,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}
