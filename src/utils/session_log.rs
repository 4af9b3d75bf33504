//! Timestamped, bounded event log for a play session.
//!
//! Entries are formatted as `info string` lines by the terminal front end,
//! mirroring how engine diagnostics are reported.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

impl LogEntry {
    pub fn format_line(&self) -> String {
        format!("info string [{}] {}", self.at.format("%H:%M:%S%.3f"), self.message)
    }
}

#[derive(Debug, Clone)]
pub struct SessionLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    /// Number of entries not yet returned by `drain_unread`.
    unread: usize,
}

impl SessionLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            unread: 0,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Local::now(),
            message: message.into(),
        });
        self.unread = (self.unread + 1).min(self.entries.len());
    }

    /// Entries pushed since the previous call, oldest first.
    pub fn drain_unread(&mut self) -> Vec<LogEntry> {
        let start = self.entries.len() - self.unread;
        self.unread = 0;
        self.entries.iter().skip(start).cloned().collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.unread = self.unread.min(self.entries.len());
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionLog;

    #[test]
    fn oldest_entries_are_evicted_at_capacity() {
        let mut log = SessionLog::with_capacity(2);
        log.push("one");
        log.push("two");
        log.push("three");

        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn drain_unread_returns_each_entry_once() {
        let mut log = SessionLog::default();
        log.push("first");
        assert_eq!(log.drain_unread().len(), 1);
        assert!(log.drain_unread().is_empty());

        log.push("second");
        log.push("third");
        let drained = log.drain_unread();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "second");
        assert!(drained[1].format_line().starts_with("info string ["));
        assert!(drained[1].format_line().ends_with("] third"));
        assert_eq!(log.len(), 3);
    }
}
