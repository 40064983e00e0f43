use figment::Figment;
use randovec_core::{Error, LogFormat};
use tracing_subscriber::EnvFilter;

/// The configured format, or the default together with why the setting was rejected.
pub fn format_from(figment: &Figment) -> (LogFormat, Option<Error>) {
    match LogFormat::from_figment(figment) {
        Ok(format) => (format, None),
        Err(e) => (LogFormat::default(), Some(e)),
    }
}

/// Install the process-wide subscriber. Call once, before anything logs.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
}
