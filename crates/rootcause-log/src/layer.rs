//! Bridge from `tracing` events to registered log sinks.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::{LogEntry, LogRegistry, LogSeverity, SinkRegistry};

/// A [`Layer`] that forwards every event to a [`LogRegistry`].
///
/// Entry text is `"<target>: <message> <field>=<value>..."`.
///
/// ```rust
/// use tracing_subscriber::layer::SubscriberExt;
/// use rootcause_log::SinkLayer;
///
/// let subscriber = tracing_subscriber::registry().with(SinkLayer::global());
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::warn!("forwarded to every registered sink");
/// });
/// ```
#[derive(Clone)]
pub struct SinkLayer {
    registry: Arc<dyn LogRegistry>,
}

impl SinkLayer {
    pub fn new(registry: Arc<dyn LogRegistry>) -> Self {
        Self { registry }
    }

    /// A layer feeding [`SinkRegistry::global`].
    pub fn global() -> Self {
        Self::new(Arc::clone(SinkRegistry::global()) as Arc<dyn LogRegistry>)
    }
}

impl fmt::Debug for SinkLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkLayer").finish_non_exhaustive()
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = EntryVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry::new(
            LogSeverity::from(*metadata.level()),
            visitor.render(metadata.target()),
        );
        self.registry.emit(&entry);
    }
}

#[derive(Default)]
struct EntryVisitor {
    message: String,
    fields: String,
}

impl EntryVisitor {
    fn render(self, target: &str) -> String {
        let mut text = format!("{}: {}", target, self.message);
        text.push_str(&self.fields);
        text
    }
}

impl Visit for EntryVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogHistoryConfig, StatusLogSink};
    use pretty_assertions::assert_eq;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_events_reach_status_sink() {
        let registry = Arc::new(SinkRegistry::new());
        let sink = Arc::new(StatusLogSink::new());
        sink.enable_with(&*registry, || LogHistoryConfig { capacity: 4 });

        let subscriber = tracing_subscriber::registry()
            .with(SinkLayer::new(registry.clone() as Arc<dyn LogRegistry>));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "worker", "step started");
            tracing::warn!(target: "worker", attempt = 2, "retrying step");
            tracing::error!(target: "worker", node = "n1", "step failed");
        });

        assert_eq!(
            sink.messages(),
            vec![
                "worker: retrying step attempt=2".to_string(),
                "worker: step failed node=n1".to_string(),
            ]
        );
    }
}
