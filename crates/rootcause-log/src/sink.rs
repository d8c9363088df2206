//! The process-wide buffer of recent warning and error logs.

use std::collections::VecDeque;
use std::sync::{Arc, LazyLock, OnceLock};

use parking_lot::Mutex;

use crate::{LogEntry, LogHistoryConfig, LogRegistry, LogSeverity, LogSink, SinkRegistry};

/// A source of recently captured log lines, oldest first.
pub trait RecentLogs {
    fn recent_messages(&self) -> Vec<String>;
}

static INSTANCE: LazyLock<Arc<StatusLogSink>> = LazyLock::new(|| Arc::new(StatusLogSink::new()));

/// Fixed-capacity FIFO of recent WARNING-and-above log lines.
///
/// Starts disabled. The first call to [`StatusLogSink::enable`] (or
/// [`StatusLogSink::enable_with`]) fixes the capacity and, when it is
/// non-zero, registers the sink with the logging collaborator; later calls
/// do nothing. Concurrent first callers wait for the single initialization
/// and all observe its capacity.
///
/// There is no shutdown path; the process-wide instance lives until exit.
#[derive(Debug, Default)]
pub struct StatusLogSink {
    capacity: OnceLock<usize>,
    messages: Mutex<VecDeque<String>>,
}

impl StatusLogSink {
    /// Create a detached, not yet enabled sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide sink.
    pub fn instance() -> &'static Arc<StatusLogSink> {
        &INSTANCE
    }

    /// Enable against the global registry, reading the capacity from the
    /// environment.
    pub fn enable(self: &Arc<Self>) {
        self.enable_with(&**SinkRegistry::global(), LogHistoryConfig::from_env);
    }

    /// Enable against `registry` using the configuration produced by
    /// `config`. `config` runs at most once over the life of the sink.
    pub fn enable_with<F>(self: &Arc<Self>, registry: &dyn LogRegistry, config: F)
    where
        F: FnOnce() -> LogHistoryConfig,
    {
        self.capacity.get_or_init(|| {
            let config = config();
            if config.is_enabled() {
                registry.register(Arc::clone(self) as Arc<dyn LogSink>);
            }
            tracing::debug!(capacity = config.capacity, "status log sink enabled");
            config.capacity
        });
    }

    /// The configured capacity, `None` until enabled.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity.get().copied()
    }

    /// True once enabled with a non-zero capacity.
    pub fn is_enabled(&self) -> bool {
        self.capacity().is_some_and(|capacity| capacity > 0)
    }

    /// Snapshot of the buffered lines, oldest first. Does not drain.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().iter().cloned().collect()
    }
}

impl LogSink for StatusLogSink {
    fn send(&self, entry: &LogEntry) {
        if entry.severity() < LogSeverity::Warning {
            return;
        }

        let capacity = self.capacity().unwrap_or(0);
        let mut messages = self.messages.lock();
        messages.push_back(entry.to_string());
        while messages.len() > capacity {
            messages.pop_front();
        }
    }
}

impl RecentLogs for StatusLogSink {
    fn recent_messages(&self) -> Vec<String> {
        self.messages()
    }
}
