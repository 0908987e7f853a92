//! Append-only JSONL record of translation calls.
//!
//! Attach one to a [`Translator`](crate::Translator) with `with_logger` to
//! keep a history of what was requested and how each call ended. The most
//! recent entries are also held in memory for inspection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

const MAX_LOG_ENTRIES: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub operation: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl LogEntry {
    pub fn new(level: LogLevel, operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            operation: operation.into(),
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, ctx: serde_json::Value) -> Self {
        self.context = Some(ctx);
        self
    }
}

pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    writer: BufWriter<File>,
}

impl ActivityLog {
    /// Open (or create) the log, replaying existing entries into memory.
    pub fn open(file_path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file_path = file_path.as_ref();

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut entries = VecDeque::with_capacity(MAX_LOG_ENTRIES);
        if file_path.exists() {
            let reader = BufReader::new(File::open(file_path)?);
            for line in reader.lines().map_while(std::result::Result::ok) {
                if let Ok(entry) = serde_json::from_str::<LogEntry>(&line) {
                    push_bounded(&mut entries, entry);
                }
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;

        Ok(Self {
            entries,
            writer: BufWriter::new(file),
        })
    }

    pub fn append(&mut self, entry: LogEntry) {
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = writeln!(self.writer, "{json}");
            let _ = self.writer.flush();
        }
        push_bounded(&mut self.entries, entry);
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }
}

fn push_bounded(entries: &mut VecDeque<LogEntry>, entry: LogEntry) {
    if entries.len() >= MAX_LOG_ENTRIES {
        entries.pop_front();
    }
    entries.push_back(entry);
}

#[derive(Clone)]
pub struct SharedLogger(Arc<Mutex<ActivityLog>>);

impl SharedLogger {
    pub fn new(file_path: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Self(Arc::new(Mutex::new(ActivityLog::open(file_path)?))))
    }

    pub fn log(&self, entry: LogEntry) {
        if let Ok(mut log) = self.0.lock() {
            log.append(entry);
        }
    }

    pub fn info(
        &self,
        operation: impl Into<String>,
        message: impl Into<String>,
        context: serde_json::Value,
    ) {
        self.log(LogEntry::new(LogLevel::Info, operation, message).with_context(context));
    }

    pub fn error(
        &self,
        operation: impl Into<String>,
        message: impl Into<String>,
        context: serde_json::Value,
    ) {
        self.log(LogEntry::new(LogLevel::Error, operation, message).with_context(context));
    }

    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        self.0.lock().map(|l| l.recent(limit)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("activity.jsonl");

        let logger = SharedLogger::new(&path).unwrap();
        logger.info("translate_one", "en|es", json!({ "bytes": 5 }));
        logger.error("translate_many", "quota exceeded", json!({ "count": 2 }));

        let recent = logger.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].level, LogLevel::Error);
        assert_eq!(recent[1].operation, "translate_one");

        let reopened = SharedLogger::new(&path).unwrap();
        let recent = reopened.recent(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].message, "quota exceeded");
        assert_eq!(recent[0].context, Some(json!({ "count": 2 })));
    }

    #[test]
    fn test_memory_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = ActivityLog::open(dir.path().join("a.jsonl")).unwrap();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            log.append(LogEntry::new(LogLevel::Info, "op", i.to_string()));
        }
        let all = log.recent(usize::MAX);
        assert_eq!(all.len(), MAX_LOG_ENTRIES);
        assert_eq!(all[0].message, (MAX_LOG_ENTRIES + 4).to_string());
    }
}
