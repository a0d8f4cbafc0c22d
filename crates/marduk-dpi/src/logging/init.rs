use std::sync::Once;

/// Settings for the `env_logger` backend installed by [`init_logging`].
///
/// `env_filter` takes a directive string such as `"marduk_dpi=trace"`;
/// `None` defers to `RUST_LOG`. `write_style` picks colored or plain output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Filter precedence: `config.env_filter`,
/// then `RUST_LOG`, then `warn`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // Conversions are hot paths; keep the default quiet.
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.write_style(config.write_style);
        builder.format_timestamp(None);

        // `try_init` so a host that already installed a logger keeps it.
        if builder.try_init().is_err() {
            log::debug!("global logger already set; marduk-dpi logging config ignored");
            return;
        }

        log::debug!("logging initialized");
    });
}
