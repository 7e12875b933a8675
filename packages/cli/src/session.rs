//! Editor state for a command-line session.
//!
//! The buffers live in the workspace directory as `index.html`, `styles.css`
//! and `script.js`; the active project id lives under its own storage key so
//! it survives between invocations. Project content is only ever written to
//! the project list by an explicit save.

use crate::config::Config;
use anyhow::{Context as _, Result};
use codestudio_editor::{BufferKind, Notification, NotificationKind, Playground, Sources};
use codestudio_store::{DirectoryStorage, KeyValueStorage, ProjectStore};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage key for the CLI's active-project pointer
pub const SESSION_KEY: &str = "codestudio.session";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    active_id: Option<String>,
}

pub struct Session {
    pub config: Config,
    pub cwd: String,
    pub playground: Playground<DirectoryStorage>,
}

impl Session {
    /// Load config and projects, then restore the active project and any
    /// unsaved buffers from the workspace
    pub fn open(cwd: &str) -> Result<Self> {
        let config = Config::load(cwd)?;
        let storage = DirectoryStorage::open(config.get_storage_dir(cwd))?;
        let mut playground = Playground::open(ProjectStore::new(storage))?;

        let record = read_record(&playground)?;
        if let Some(id) = record.active_id {
            if playground.store().get(&id).is_some() {
                playground.activate(&id)?;
            }
        }

        let workspace = config.get_workspace_dir(cwd);
        if let Some(sources) = read_workspace_buffers(&workspace)? {
            debug!(workspace = %workspace.display(), "Restored buffers from workspace");
            playground.restore_buffers(sources);
        }

        Ok(Self {
            config,
            cwd: cwd.to_string(),
            playground,
        })
    }

    pub fn workspace_dir(&self) -> PathBuf {
        self.config.get_workspace_dir(&self.cwd)
    }

    /// Write the buffers to the workspace and remember the active project
    pub fn checkout(&mut self) -> Result<()> {
        write_workspace_buffers(&self.workspace_dir(), self.playground.buffers())?;
        self.remember_active()
    }

    /// Persist only the active-project pointer
    pub fn remember_active(&mut self) -> Result<()> {
        let record = SessionRecord {
            active_id: self.playground.active_id().map(str::to_string),
        };
        let json = serde_json::to_string(&record)?;
        self.playground
            .store_mut()
            .storage_mut()
            .set(SESSION_KEY, &json)?;
        Ok(())
    }

    /// Print and clear queued notifications, returning whether any was an
    /// error
    pub fn print_notifications(&mut self) -> bool {
        let notifications = self.playground.take_notifications();
        for notification in &notifications {
            print_notification(notification);
        }
        notifications.iter().any(Notification::is_error)
    }
}

fn read_record(playground: &Playground<DirectoryStorage>) -> Result<SessionRecord> {
    let Some(json) = playground.store().storage().get(SESSION_KEY)? else {
        return Ok(SessionRecord::default());
    };

    match serde_json::from_str(&json) {
        Ok(record) => Ok(record),
        Err(e) => {
            warn!(error = %e, key = SESSION_KEY, "Session record unreadable, falling back to first project");
            Ok(SessionRecord::default())
        }
    }
}

/// Buffers from the workspace, or `None` when no buffer file exists.
/// Missing files among present ones read as empty.
pub fn read_workspace_buffers(dir: &Path) -> Result<Option<Sources>> {
    let mut sources = Sources::default();
    let mut found = false;

    for kind in BufferKind::ALL {
        let path = dir.join(kind.file_name());
        match fs::read_to_string(&path) {
            Ok(text) => {
                sources.set(kind, text);
                found = true;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        }
    }

    Ok(found.then_some(sources))
}

pub fn write_workspace_buffers(dir: &Path, sources: &Sources) -> Result<()> {
    fs::create_dir_all(dir)?;
    for kind in BufferKind::ALL {
        let path = dir.join(kind.file_name());
        fs::write(&path, sources.get(kind))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

fn print_notification(notification: &Notification) {
    let (icon, title) = match notification.kind {
        NotificationKind::Success => ("✓".green(), notification.title.green().bold()),
        NotificationKind::Info => ("•".cyan(), notification.title.cyan().bold()),
        NotificationKind::Error => ("✗".red(), notification.title.red().bold()),
    };

    match &notification.description {
        Some(description) => println!("  {} {} {}", icon, title, description.dimmed()),
        None => println!("  {} {}", icon, title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let sources = Sources::new("<p>a</p>", "p{}", "f()");

        write_workspace_buffers(dir.path(), &sources).unwrap();

        assert_eq!(read_workspace_buffers(dir.path()).unwrap(), Some(sources));
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("styles.css").exists());
        assert!(dir.path().join("script.js").exists());
    }

    #[test]
    fn test_empty_workspace_has_no_buffers() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_workspace_buffers(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_partial_workspace_reads_missing_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("styles.css"), "a{}").unwrap();

        let sources = read_workspace_buffers(dir.path()).unwrap().unwrap();
        assert_eq!(sources, Sources::new("", "a{}", ""));
    }

    #[test]
    fn test_session_remembers_active_project() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        let created = {
            let mut session = Session::open(cwd).unwrap();
            let id = session.playground.create("Second").unwrap().id.clone();
            session.playground.activate("default").unwrap();
            session.checkout().unwrap();
            id
        };

        let session = Session::open(cwd).unwrap();
        assert_eq!(session.playground.active_id(), Some("default"));
        assert_ne!(session.playground.active_id(), Some(created.as_str()));
    }

    #[test]
    fn test_corrupt_session_record_falls_back_to_first_project() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        let newest = {
            let mut session = Session::open(cwd).unwrap();
            let id = session.playground.create("Newest").unwrap().id.clone();
            session.playground.activate("default").unwrap();
            session.remember_active().unwrap();
            id
        };
        let record = dir
            .path()
            .join(".codestudio")
            .join(format!("{}.json", SESSION_KEY));
        assert!(record.exists());
        fs::write(&record, "{not json").unwrap();

        let session = Session::open(cwd).unwrap();
        assert_eq!(session.playground.active_id(), Some(newest.as_str()));
    }

    #[test]
    fn test_session_restores_unsaved_workspace_edits() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        {
            let mut session = Session::open(cwd).unwrap();
            session.checkout().unwrap();
        }
        fs::write(dir.path().join("index.html"), "<p>edited on disk</p>").unwrap();

        let session = Session::open(cwd).unwrap();
        assert_eq!(
            session.playground.buffer(BufferKind::Markup),
            "<p>edited on disk</p>"
        );
        assert!(session.playground.is_dirty());
    }
}
