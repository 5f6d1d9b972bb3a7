use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive, overridden by `RUST_LOG`.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "grafana2hashcat=debug,info" } else { "grafana2hashcat=info,warn" }
}

/// Install the stderr diagnostic subscriber.
///
/// Diagnostics stay on stderr so stdout only carries the usage banner and
/// the run summary.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
