//! JSONL file writer for backend exchange events.
//!
//! Each [`ExchangeEvent`] is serialized as a single JSON line with `type`,
//! `stage` and `timestamp` fields, appended to the file via a buffered writer.

use serde_json::{Value, json};
use skillpath_application::{ExchangeEvent, ExchangeLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL exchange logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file so
/// consecutive runs share one transcript. Flushes on `Drop`.
pub struct JsonlExchangeLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlExchangeLogger {
    /// Open (or create) the log file at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; the pipeline then runs
    /// without an exchange log.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create exchange log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open exchange log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ExchangeEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        match event.payload {
            Value::Object(mut map) => {
                map.insert("type".to_string(), Value::from(event.event_type));
                map.insert("stage".to_string(), Value::from(event.stage.as_str()));
                map.insert("timestamp".to_string(), Value::String(timestamp));
                Value::Object(map)
            }
            other => json!({
                "type": event.event_type,
                "stage": event.stage.as_str(),
                "timestamp": timestamp,
                "data": other,
            }),
        }
    }
}

impl ExchangeLogger for JsonlExchangeLogger {
    fn log(&self, event: ExchangeEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush every line; the transcript is read while runs are in flight
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlExchangeLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpath_domain::Stage;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exchanges.jsonl");
        let logger = JsonlExchangeLogger::new(&path).unwrap();

        logger.log(ExchangeEvent::new(
            "completion_response",
            Stage::SkillExtraction,
            json!({"model": "test-model", "duration_ms": 42, "text": "[]"}),
        ));
        logger.log(ExchangeEvent::new(
            "search_request",
            Stage::JobSearch,
            json!({"query": "jobs in Berlin"}),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
        }
        assert_eq!(lines[0]["type"], "completion_response");
        assert_eq!(lines[0]["stage"], "skill_extraction");
        assert_eq!(lines[0]["duration_ms"], 42);
        assert_eq!(lines[1]["query"], "jobs in Berlin");
    }

    #[test]
    fn test_jsonl_logger_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jsonl");
        let logger = JsonlExchangeLogger::new(&path).unwrap();

        logger.log(ExchangeEvent::new(
            "rejected_output",
            Stage::RoadmapGeneration,
            json!("just a string"),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "rejected_output");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_jsonl_logger_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("runs.jsonl");

        for _ in 0..2 {
            let logger = JsonlExchangeLogger::new(&path).unwrap();
            logger.log(ExchangeEvent::new("search_request", Stage::JobSearch, json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }
}
