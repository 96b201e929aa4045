use orderflow_app::config::ENV_LOG_FORMAT;
use orderflow_app::{AppConfig, reporter_for, run};
use orderflow_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    // Tracing goes up first so configuration warnings are logged.
    let log_format = std::env::var(ENV_LOG_FORMAT)
        .ok()
        .and_then(|raw| raw.parse::<LogFormat>().ok())
        .unwrap_or_default();
    orderflow_observability::init_with(log_format);

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    run(&config, reporter_for(config.output))
}
