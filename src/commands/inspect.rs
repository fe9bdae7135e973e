//! One-shot inspection commands

use std::path::Path;

use anyhow::{Context, Result};

use repowatch::application::watch::RefStore;
use repowatch::infrastructure::{discover, normalize};
use repowatch::presentation::output::{render_paths, render_refs};

pub fn cmd_paths(path: &Path, json: bool) -> Result<()> {
    let paths = discover(path).with_context(|| format!("cannot inspect {}", path.display()))?;
    let paths = normalize(&paths);
    print_block(render_paths(&paths, json));
    Ok(())
}

pub fn cmd_refs(path: &Path, json: bool) -> Result<()> {
    let paths = discover(path).with_context(|| format!("cannot inspect {}", path.display()))?;
    let store = RefStore::load(&paths);
    print_block(render_refs(store.local(), store.remote(), json));
    Ok(())
}

fn print_block(text: String) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}
