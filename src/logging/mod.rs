//! Logging infrastructure: tracing-backed logger, console subscriber and
//! line sinks.

mod logger;
mod sink;
mod subscriber;
mod types;

pub use logger::Logger;
pub use sink::{LogSink, MemorySink, NullSink, Sink, SinkLevel, WriterSink};
pub use subscriber::init_subscriber;
pub use types::Log;

/// Create a [`Logger`] whose events are captured by an isolated per-thread
/// tracing subscriber.
///
/// Returns the sink receiving the formatted lines and a
/// [`tracing::dispatcher::DefaultGuard`] that must be kept alive for the
/// duration of the test.  Only events emitted on the calling thread are
/// captured.
#[cfg(test)]
pub(crate) fn capture_logger() -> (
    Logger,
    std::sync::Arc<MemorySink>,
    tracing::dispatcher::DefaultGuard,
) {
    use tracing_subscriber::layer::SubscriberExt as _;
    let sink = std::sync::Arc::new(MemorySink::new());
    let layer = subscriber::CaptureLayer {
        sink: std::sync::Arc::clone(&sink),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(subscriber));
    (Logger::new(), sink, guard)
}
