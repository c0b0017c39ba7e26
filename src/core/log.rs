use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Installs the global subscriber.
///
/// A valid `RUST_LOG` replaces the level defaults entirely. Otherwise this
/// crate and `tower_http` log at INFO (DEBUG when `verbose`) and everything
/// else at WARN.
pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (env_filter, default_filter) = select_filters(verbose, rust_log.as_deref());

    tracing_subscriber::registry()
        .with(fmt::layer().compact())
        .with(default_filter)
        .with(env_filter)
        .init();
}

/// Exactly one of the two filters is returned.
fn select_filters(
    verbose: bool,
    rust_log: Option<&str>,
) -> (Option<EnvFilter>, Option<Targets>) {
    match rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        Some(env_filter) => (Some(env_filter), None),
        None => (None, Some(default_targets(verbose))),
    }
}

fn default_targets(verbose: bool) -> Targets {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    Targets::new()
        .with_target("flightfare", level)
        .with_target("tower_http", level)
        .with_default(LevelFilter::WARN)
}
