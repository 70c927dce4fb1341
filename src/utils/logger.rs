use std::io;
use tracing_subscriber::fmt::{self, format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, format::DefaultFields, format::Format, fn() -> io::Stderr>;

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match (level, verbose) {
        (Some(directive), _) => EnvFilter::new(directive),
        (None, true) => EnvFilter::new("addtime=debug,info"),
        (None, false) => EnvFilter::new("addtime=info"),
    })
}

/// Logs go to stderr so that stdout only carries results.
fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(stderr_layer().compact())
        .init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(stderr_layer().json())
        .init();
}
