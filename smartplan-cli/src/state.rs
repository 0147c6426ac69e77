use anyhow::{Context, Result};
use smartplan_core::Task;
use std::fs;
use std::path::{Path, PathBuf};

/// `$SMARTPLAN_HOME`, or `~/.smartplan`.
pub fn smartplan_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SMARTPLAN_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".smartplan"))
}

pub fn ensure_smartplan_home() -> Result<PathBuf> {
    let dir = smartplan_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Read a JSON array of tasks exported from the task store.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse tasks in {}", path.display()))
}
