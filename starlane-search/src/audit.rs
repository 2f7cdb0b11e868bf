//! Per-origin audit trails for calculator runs.

use std::collections::BTreeMap;

use starlane_core::galaxy::SystemId;

/// Ordered, human-readable trace of the decisions taken during runs, keyed
/// by origin system.
///
/// Trails accumulate across runs on the same calculator; `clear` on the
/// calculator leaves them in place so a batch over many origins can be
/// audited afterwards. Entry prefixes number origins in the order they were
/// first seen.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    logs: BTreeMap<SystemId, Vec<String>>,
    current: SystemId,
    prefix: String,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the trail for a run from `origin_id`, creating it on first use.
    pub fn begin_run(&mut self, origin_id: SystemId, origin_name: &str) {
        self.logs.entry(origin_id).or_default();
        self.current = origin_id;
        self.prefix = format!("[run{}|{origin_name}#{origin_id}]", self.logs.len());
    }

    /// Append an entry to the current run's trail.
    pub fn record(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::debug!(origin = self.current, entry = %message, "audit entry");
        if let Some(entries) = self.logs.get_mut(&self.current) {
            entries.push(format!("{} {message}", self.prefix));
        }
    }

    /// Entries recorded for one origin, oldest first.
    pub fn for_origin(&self, origin_id: SystemId) -> &[String] {
        self.logs.get(&origin_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every trail, keyed by origin id.
    pub fn all(&self) -> &BTreeMap<SystemId, Vec<String>> {
        &self.logs
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        self.current = 0;
        self.prefix.clear();
    }
}
