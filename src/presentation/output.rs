//! Output Rendering
//!
//! Text and JSON rendering for the CLI commands, plus the console listener
//! used by `watch` in text mode.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Local;
use serde_json::json;

use crate::domain::entities::RefSnapshot;
use crate::domain::ports::RepositoryListener;
use crate::domain::value_objects::{RepositoryEvent, WatchedPaths};

/// Listener that prints one timestamped line per notification
pub struct ConsoleListener {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleListener {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl RepositoryListener for ConsoleListener {
    fn on_event(&self, event: &RepositoryEvent) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "[{}] {}", Local::now().format("%H:%M:%S"), event);
            let _ = writer.flush();
        }
    }
}

/// Render the resolved watched paths
pub fn render_paths(paths: &WatchedPaths, json: bool) -> String {
    let rows = [
        ("repository_root", paths.repository_root()),
        ("metadata_dir", paths.metadata_dir()),
        ("index_file", paths.index_file()),
        ("head_file", paths.head_file()),
        ("local_refs_dir", paths.local_refs_dir()),
        ("remote_refs_dir", paths.remote_refs_dir()),
        ("config_file", paths.config_file()),
    ];

    if json {
        let mut obj = serde_json::Map::new();
        obj.insert("command".to_string(), json!("paths"));
        for (key, path) in rows {
            obj.insert(key.to_string(), json!(path.display().to_string()));
        }
        obj.insert(
            "watch_roots".to_string(),
            json!(paths
                .watch_roots()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()),
        );
        return serde_json::Value::Object(obj).to_string();
    }

    let mut out = String::new();
    for (key, path) in rows {
        out.push_str(&format!("{key:<16} {}\n", path.display()));
    }
    for root in paths.watch_roots() {
        out.push_str(&format!("{:<16} {}\n", "watch_root", root.display()));
    }
    out
}

/// Render local and remote reference snapshots
pub fn render_refs(local: &RefSnapshot, remote: &RefSnapshot, json: bool) -> String {
    if json {
        let to_map = |snapshot: &RefSnapshot| {
            snapshot
                .iter()
                .map(|(name, target)| (name.to_string(), json!(target.to_string())))
                .collect::<serde_json::Map<_, _>>()
        };
        return json!({
            "command": "refs",
            "local": to_map(local),
            "remote": to_map(remote),
        })
        .to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("Local branches ({})\n", local.len()));
    for (name, target) in local.iter() {
        out.push_str(&format!("  {name}  {target}\n"));
    }
    out.push_str(&format!("Remote branches ({})\n", remote.len()));
    for (name, target) in remote.iter() {
        out.push_str(&format!("  {name}  {target}\n"));
    }
    out
}
