use kinolist_core::config::{AppConfig, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for output; with `logging.file` set they are also written to a daily
/// rolling file. Keep the returned guard alive until exit.
pub fn init(config: &LoggingConfig, verbose: u8) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter)),
        1 => EnvFilter::new("kinolist=debug"),
        _ => EnvFilter::new("kinolist=trace"),
    };
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if config.file {
        let appender = tracing_appender::rolling::daily(AppConfig::log_dir(), "kinolist.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr)
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .init();
        Some(guard)
    } else {
        tracing_subscriber::registry().with(filter).with(stderr).init();
        None
    }
}
