use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use repowatch::config::Config;
use repowatch::presentation::ConsoleListener;
use repowatch::{
    discover, JsonListener, NotifyEventSource, RawEventSource, RepositoryListener,
    RepositoryWatcher,
};

pub fn cmd_watch(path: &Path, config: &Config) -> Result<()> {
    let paths = discover(path).with_context(|| format!("cannot watch {}", path.display()))?;
    let root = paths.repository_root().to_path_buf();

    let source: Arc<dyn RawEventSource> = if config.watch.poll_fallback {
        info!("using polling backend every {:?}", config.poll_interval());
        Arc::new(NotifyEventSource::polling(config.poll_interval()))
    } else {
        Arc::new(NotifyEventSource::new())
    };

    let json = config.output.json;
    let listener: Arc<dyn RepositoryListener> = if json {
        Arc::new(JsonListener::stdout())
    } else {
        Arc::new(ConsoleListener::stdout())
    };

    let watcher = RepositoryWatcher::new(paths, source).with_debounce(config.debounce());
    watcher.add_listener(listener);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    watcher.start()?;
    if !json {
        eprintln!("Watching {} (Ctrl+C to stop)", root.display());
    }

    while running.load(Ordering::SeqCst) {
        thread::sleep(Duration::from_millis(100));
    }

    watcher.stop();
    if !json {
        eprintln!("Stopped.");
    }
    Ok(())
}
