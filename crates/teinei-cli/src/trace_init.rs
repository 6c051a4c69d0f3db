use std::path::Path;

/// Keeps the background log writer alive; logs are flushed when it is dropped.
#[cfg(feature = "trace")]
pub struct TraceGuard(#[allow(dead_code)] tracing_appender::non_blocking::WorkerGuard);

#[cfg(not(feature = "trace"))]
pub struct TraceGuard;

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    let file_appender = tracing_appender::rolling::never(log_dir, "teitool-trace.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("teinei_core=debug,teinei_cli=debug")),
        )
        .init();

    TraceGuard(guard)
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard
}
