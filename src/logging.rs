use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_VAR: &str = "LOG";

/// Map the first letter of `LOG` to a level: D, I, W, E. Anything else is info.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    let first = value
        .and_then(|v| v.chars().next())
        .map(|c| c.to_ascii_uppercase());

    match first {
        Some('D') => LevelFilter::DEBUG,
        Some('I') => LevelFilter::INFO,
        Some('W') => LevelFilter::WARN,
        Some('E') => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

/// Install the stderr subscriber. Keep the guard alive until exit so buffered lines flush.
pub fn init() -> WorkerGuard {
    let level = level_from(std::env::var(LOG_VAR).ok().as_deref());
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(false)
        .with_env_filter(EnvFilter::default().add_directive(level.into()))
        .init();

    guard
}
