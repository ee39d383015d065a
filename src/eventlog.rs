//! Dispatch event log
//!
//! When voice debugging is on, every dispatched utterance and its planned
//! actions are appended to a log file. "hark show log" opens that file with
//! the platform opener.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only event log at a fixed path
pub struct EventLog {
    path: PathBuf,
    file: Option<File>,
}

impl EventLog {
    /// Default location: ~/.hark/hark.log
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hark")
            .join("hark.log")
    }

    pub fn new(path: PathBuf) -> Self {
        Self { path, file: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event line with a local timestamp
    pub fn record(&mut self, line: &str) -> Result<()> {
        if self.file.is_none() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .with_context(|| format!("opening log file {}", self.path.display()))?;
            self.file = Some(file);
        }

        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file = self.file.as_mut().unwrap();
        writeln!(file, "{} {}", stamp, line)
            .with_context(|| format!("writing to {}", self.path.display()))?;
        Ok(())
    }

    /// Open the log file with the platform's default opener
    pub fn open_viewer(&self) -> Result<()> {
        let path = &self.path;
        if !path.exists() {
            // Nothing recorded yet; create an empty file so the viewer has
            // something to open.
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            File::create(path)?;
        }

        #[cfg(target_os = "macos")]
        let status = std::process::Command::new("open").arg(path).status();
        #[cfg(target_os = "windows")]
        let status = std::process::Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .status();
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let status = std::process::Command::new("xdg-open").arg(path).status();

        let status = status.with_context(|| format!("launching viewer for {}", path.display()))?;
        anyhow::ensure!(status.success(), "log viewer exited with {}", status);
        Ok(())
    }
}
