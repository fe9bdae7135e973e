//! Fake working copy and recording listener.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use repowatch::{RepositoryEvent, RepositoryListener};

pub const OID_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const OID_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

/// Minimal on-disk layout: `.git/{HEAD,config,index,refs/heads/master}`
pub struct FakeRepo {
    _dir: TempDir,
    root: PathBuf,
}

impl FakeRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let repo = Self { _dir: dir, root };

        fs::create_dir_all(repo.git("refs/heads")).unwrap();
        fs::create_dir_all(repo.git("refs/tags")).unwrap();
        fs::write(repo.git("HEAD"), "ref: refs/heads/master\n").unwrap();
        fs::write(repo.git("config"), "[core]\n\tbare = false\n").unwrap();
        fs::write(repo.git("index"), "DIRC").unwrap();
        fs::write(repo.git("refs/heads/master"), format!("{OID_A}\n")).unwrap();
        repo
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn git(&self, relative: &str) -> PathBuf {
        self.root.join(".git").join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn write_git(&self, relative: &str, content: &str) {
        self.write(&format!(".git/{relative}"), content);
    }

    pub fn remove_git(&self, relative: &str) {
        fs::remove_file(self.git(relative)).unwrap();
    }
}

/// Listener collecting every notification it receives
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<RepositoryEvent>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<RepositoryEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Wait until `done` holds for the collected events, then one more settle
    /// period so late extras are caught.
    pub fn wait_until(
        &self,
        settle: Duration,
        done: impl Fn(&[RepositoryEvent]) -> bool,
    ) -> Vec<RepositoryEvent> {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !done(&self.events()) && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(20));
        }
        thread::sleep(settle);
        self.events()
    }
}

impl RepositoryListener for Recorder {
    fn on_event(&self, event: &RepositoryEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
