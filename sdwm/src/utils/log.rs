use tracing::Subscriber;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Environment variable holding the log filter, e.g. `SDWM_LOG=sdwm_core=debug`.
pub const LOG_ENV: &str = "SDWM_LOG";

/// Installs the global subscriber. Logs go to stderr, at `info` unless `SDWM_LOG` says otherwise.
pub fn setup_logging() {
    let subscriber = get_subscriber(env_filter());
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("sdwm: couldn't set up logging: {err}");
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

fn get_subscriber(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
}
