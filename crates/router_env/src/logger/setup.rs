//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::config;

/// Contains guards necessary for logging
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
/// The `RUST_LOG` environment variable overrides the configured directives.
///
pub fn setup<Str: AsRef<str>>(
    config: &config::Log,
    service_name: &str,
    crates_to_watch: Vec<Str>,
) -> TelemetryGuard {
    let mut guards = Vec::new();
    let subscriber = tracing_subscriber::registry();

    if config.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter = get_envfilter(
            config.console.filtering_directive.as_ref(),
            config.console.level,
            crates_to_watch,
        );

        match config.console.log_format {
            config::LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_timer(fmt::time::time())
                    .pretty()
                    .with_writer(console_writer)
                    .with_filter(console_filter);
                subscriber.with(logging_layer).init();
            }
            config::LogFormat::Json => {
                let logging_layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(console_writer)
                    .with_filter(console_filter);
                subscriber.with(logging_layer).init();
            }
        }
    } else {
        subscriber.init();
    }

    tracing::debug!(service = service_name, "Logging subsystem initialized");

    // Returning the WorkerGuard for logs to be printed until it is dropped
    TelemetryGuard {
        _log_guards: guards,
    }
}

fn get_envfilter<Str: AsRef<str>>(
    filtering_directive: Option<&String>,
    level: config::Level,
    crates_to_watch: Vec<Str>,
) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());

    if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        return builder.from_env_lossy();
    }

    let directives = filtering_directive.cloned().unwrap_or_else(|| {
        let level = level.into_level();
        crates_to_watch
            .iter()
            .map(|crate_name| format!("{}={level}", crate_name.as_ref()))
            .collect::<Vec<_>>()
            .join(",")
    });

    builder.parse_lossy(directives)
}
