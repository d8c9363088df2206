//! Sink registration: the seam between log producers and log consumers.

use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::LogEntry;

/// A receiver of log entries.
pub trait LogSink: Send + Sync {
    fn send(&self, entry: &LogEntry);
}

/// The logging collaborator: sinks register once and then receive every
/// entry emitted through it.
pub trait LogRegistry: Send + Sync {
    fn register(&self, sink: Arc<dyn LogSink>);

    fn emit(&self, entry: &LogEntry);
}

static GLOBAL_REGISTRY: LazyLock<Arc<SinkRegistry>> =
    LazyLock::new(|| Arc::new(SinkRegistry::new()));

/// Fan-out of entries to a list of registered sinks.
#[derive(Default)]
pub struct SinkRegistry {
    sinks: RwLock<Vec<Arc<dyn LogSink>>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry fed by [`crate::SinkLayer::global`].
    pub fn global() -> &'static Arc<SinkRegistry> {
        &GLOBAL_REGISTRY
    }

    /// Number of registered sinks.
    pub fn len(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.read().is_empty()
    }
}

impl LogRegistry for SinkRegistry {
    fn register(&self, sink: Arc<dyn LogSink>) {
        self.sinks.write().push(sink);
    }

    fn emit(&self, entry: &LogEntry) {
        // Snapshot so a sink may log or register without holding our lock.
        let sinks = self.sinks.read().clone();
        for sink in &sinks {
            sink.send(entry);
        }
    }
}

impl fmt::Debug for SinkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkRegistry")
            .field("sinks", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogSeverity;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct CollectingSink {
        seen: Mutex<Vec<String>>,
    }

    impl LogSink for CollectingSink {
        fn send(&self, entry: &LogEntry) {
            self.seen.lock().push(entry.text().to_string());
        }
    }

    #[test]
    fn test_emit_reaches_every_sink() {
        let registry = SinkRegistry::new();
        let first = Arc::new(CollectingSink::default());
        let second = Arc::new(CollectingSink::default());
        registry.register(first.clone());
        registry.register(second.clone());
        assert_eq!(registry.len(), 2);

        registry.emit(&LogEntry::new(LogSeverity::Info, "hello"));
        assert_eq!(*first.seen.lock(), vec!["hello".to_string()]);
        assert_eq!(*second.seen.lock(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_emit_without_sinks() {
        let registry = SinkRegistry::new();
        assert!(registry.is_empty());
        registry.emit(&LogEntry::new(LogSeverity::Error, "dropped"));
    }
}
