//! Aggregation of many statuses into one.

use rootcause_log::{RecentLogs, StatusLogSink};
use rootcause_status::{Code, Status};

use crate::derived;
use crate::format::{MAX_AGGREGATED_MESSAGE_CHARS, recent_logs_block, truncate_chars};

const CONCATENATION_BANNER: &str = "=====================";

/// Collects the statuses of many sub-operations and reduces them to one.
///
/// OK statuses are only counted; non-OK statuses are kept in call order.
/// The group is meant for a single owner: updating it from several threads
/// needs external synchronization.
#[derive(Debug, Clone)]
pub struct StatusGroup {
    ok: bool,
    num_ok: usize,
    children: Vec<Status>,
    recent_logs: Vec<String>,
}

impl Default for StatusGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusGroup {
    pub fn new() -> Self {
        Self {
            ok: true,
            num_ok: 0,
            children: Vec::new(),
            recent_logs: Vec::new(),
        }
    }

    /// See [`derived::make_derived`].
    pub fn make_derived(status: &Status) -> Status {
        derived::make_derived(status)
    }

    /// See [`derived::is_derived`].
    pub fn is_derived(status: &Status) -> bool {
        derived::is_derived(status)
    }

    /// Enable process-wide capture of recent warning and error logs.
    ///
    /// Safe to call any number of times from any thread.
    pub fn configure_log_history() {
        StatusLogSink::instance().enable();
    }

    /// Record the outcome of one sub-operation.
    pub fn update(&mut self, status: &Status) {
        if status.is_ok() {
            self.num_ok += 1;
        } else {
            self.ok = false;
            self.children.push(status.clone());
        }
    }

    /// True if no error has been recorded.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Number of OK statuses recorded.
    pub fn ok_count(&self) -> usize {
        self.num_ok
    }

    /// Recorded errors, in call order.
    pub fn children(&self) -> &[Status] {
        &self.children
    }

    /// Log lines captured by the last attach call.
    pub fn recent_logs(&self) -> &[String] {
        &self.recent_logs
    }

    /// Replace the captured log lines with the contents of the process-wide
    /// sink.
    pub fn attach_log_messages(&mut self) {
        self.attach_log_messages_from(&**StatusLogSink::instance());
    }

    /// Replace the captured log lines with the contents of `source`.
    pub fn attach_log_messages_from<R>(&mut self, source: &R)
    where
        R: RecentLogs + ?Sized,
    {
        self.recent_logs.clear();
        self.recent_logs.extend(source.recent_messages());
    }

    /// Summarize the recorded errors for a human reader.
    ///
    /// Use this when the children are raw errors. A single root error is
    /// returned with its own code and message; several are listed under a
    /// header with success and derived counts. Captured log lines are
    /// appended in both cases.
    pub fn as_summary_status(&self) -> Status {
        if self.ok {
            return Status::OK;
        }

        let root_errors = self.root_errors();
        let recent_logs = recent_logs_block(&self.recent_logs);

        match root_errors.as_slice() {
            [] => self.first_child(),
            [root] => Status::new(root.code(), format!("{}{}", root.message(), recent_logs)),
            roots => {
                let derived_count = self.children.len() - roots.len();
                tracing::trace!(
                    root_errors = roots.len(),
                    derived_errors = derived_count,
                    "summarizing status group"
                );

                let mut lines = Vec::with_capacity(roots.len() + 3);
                lines.push(format!("{} root error(s) found.", roots.len()));
                for (index, status) in roots.iter().enumerate() {
                    lines.push(format!("  ({index}) {status}"));
                }
                lines.push(format!("{} successful operations.", self.num_ok));
                lines.push(format!("{derived_count} derived errors ignored."));

                let mut message = lines.join("\n");
                truncate_chars(&mut message, MAX_AGGREGATED_MESSAGE_CHARS);
                message.push_str(&recent_logs);

                Status::new(summary_code(roots), message)
            }
        }
    }

    /// Concatenate the recorded errors.
    ///
    /// Use this when every child is already a summary, so no header or
    /// footer is added and no log lines are attached.
    pub fn as_concatenated_status(&self) -> Status {
        if self.ok {
            return Status::OK;
        }

        let root_errors = self.root_errors();

        match root_errors.as_slice() {
            [] => self.first_child(),
            [root] => (*root).clone(),
            roots => {
                let mut lines = Vec::with_capacity(roots.len() + 2);
                lines.push(format!("\n{CONCATENATION_BANNER}"));
                lines.extend(roots.iter().map(|status| status.to_string()));
                lines.push(format!("{CONCATENATION_BANNER}\n"));

                let mut message = lines.join("\n");
                truncate_chars(&mut message, MAX_AGGREGATED_MESSAGE_CHARS);

                Status::new(roots[0].code(), message)
            }
        }
    }

    fn root_errors(&self) -> Vec<&Status> {
        self.children
            .iter()
            .filter(|status| !derived::is_derived(status))
            .collect()
    }

    // Only reachable when every child is derived.
    fn first_child(&self) -> Status {
        self.children.first().cloned().unwrap_or_default()
    }
}

/// The first root code that is not CANCELLED, or CANCELLED if there is none.
fn summary_code(roots: &[&Status]) -> Code {
    roots
        .iter()
        .map(|status| status.code())
        .find(|code| *code != Code::Cancelled)
        .unwrap_or(Code::Cancelled)
}
