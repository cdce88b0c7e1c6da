use super::types::LogEntry;
use parking_lot::RwLock;
use std::sync::Arc;

/// Append-only conversation log, lives until process exit
#[derive(Debug, Clone)]
pub struct ConversationLog {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn append(&self, entry: LogEntry) {
        self.entries.write().push(entry);
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.read().iter().map(LogEntry::line).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}
