use std::sync::Once;

use smart_default::SmartDefault;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. `"info"` or
/// `"hmi_sdl=debug,hmi_graphics=warn"`. When it is unset, `RUST_LOG` is
/// used, and `default_level` when neither is present.
#[derive(SmartDefault, Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    #[default(log::LevelFilter::Info)]
    pub default_level: log::LevelFilter,
    #[default(env_logger::WriteStyle::Auto)]
    pub write_style: env_logger::WriteStyle,
}

static INIT: Once = Once::new();

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> String {
    config
        .env_filter
        .clone()
        .or(rust_log)
        .unwrap_or_else(|| config.default_level.to_string())
}

/// Installs the global logger. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init();

        match installed {
            Ok(()) => log::debug!("Logging initialized with filter {filter:?}"),
            Err(e) => eprintln!("Unable to install logger: {e}"),
        }
    });
}
