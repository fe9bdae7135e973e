//! JSON Listener
//!
//! Writes repository notifications as NDJSON for scripts and CI.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};

use crate::domain::ports::RepositoryListener;
use crate::domain::value_objects::RepositoryEvent;

/// Listener that outputs one JSON object per notification
pub struct JsonListener {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonListener {
    /// Create a new JSON listener writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON listener writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Serialize a notification with the `command` and `at` envelope fields
pub fn to_json(event: &RepositoryEvent) -> serde_json::Value {
    let mut value =
        serde_json::to_value(event).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
    if let Some(obj) = value.as_object_mut() {
        obj.insert("command".to_string(), serde_json::json!("watch"));
        obj.insert(
            "at".to_string(),
            serde_json::json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
    }
    value
}

impl RepositoryListener for JsonListener {
    fn on_event(&self, event: &RepositoryEvent) {
        self.write_event(to_json(event));
    }
}
