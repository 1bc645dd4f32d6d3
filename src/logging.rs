use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` always takes precedence; `verbose` falls back to DEBUG,
/// otherwise WARN. Safe to call more than once.
pub fn init_logging(verbose: bool) {
	let level = if verbose { Level::DEBUG } else { Level::WARN };
	let filter = EnvFilter::from_default_env().add_directive(level.into());

	let _ = tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.try_init();
}
