//! # Playground
//!
//! Glues the project store, the editor state and the notification queue.
//!
//! Every user action maps to one method. Failures come back as
//! `PlaygroundError`; hosts that want the original "show a toast and carry
//! on" behaviour pass the result through [`Playground::report`].

use crate::errors::PlaygroundError;
use crate::state::EditorState;
use codestudio_common::{BufferKind, FileSystem, Notification, Sources};
use codestudio_export::ExportedArchive;
use codestudio_preview::{compose, PreviewRenderer, RenderSurface};
use codestudio_store::{KeyValueStorage, Project, ProjectStore};
use std::path::Path;
use tracing::{debug, info, warn};

pub struct Playground<S> {
    store: ProjectStore<S>,
    state: EditorState,
    notifications: Vec<Notification>,
}

impl<S: KeyValueStorage> Playground<S> {
    /// Load the store and activate its first project (if any)
    pub fn open(mut store: ProjectStore<S>) -> Result<Self, PlaygroundError> {
        store.load()?;

        let mut state = EditorState::new();
        if let Some(first) = store.first() {
            state.activate(first);
        }

        Ok(Self {
            store,
            state,
            notifications: Vec::new(),
        })
    }

    /// Projects for the switcher, most recently created first
    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.state.active_id().and_then(|id| self.store.get(id))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.state.active_id()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn buffers(&self) -> &Sources {
        self.state.buffers()
    }

    pub fn buffer(&self, kind: BufferKind) -> &str {
        self.state.buffer(kind)
    }

    pub fn set_buffer(&mut self, kind: BufferKind, text: impl Into<String>) {
        self.state.set_buffer(kind, text);
    }

    /// Replace all three buffers without touching storage
    pub fn restore_buffers(&mut self, sources: Sources) {
        self.state.set_buffers(sources);
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn store(&self) -> &ProjectStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProjectStore<S> {
        &mut self.store
    }

    /// Switch the editor to project `id`. Unsaved edits are discarded.
    pub fn activate(&mut self, id: &str) -> Result<(), PlaygroundError> {
        let project = self
            .store
            .get(id)
            .ok_or_else(|| PlaygroundError::ProjectNotFound(id.to_string()))?;

        self.state.activate(project);
        debug!(id, "Activated project");
        Ok(())
    }

    /// Create a template project and make it active
    pub fn create(&mut self, name: &str) -> Result<&Project, PlaygroundError> {
        let project = self.store.create(name)?;
        self.state.activate(&project);
        self.notify(Notification::success("Project created").with_description(project.name.clone()));

        self.store
            .get(&project.id)
            .ok_or(PlaygroundError::ProjectNotFound(project.id))
    }

    /// Write the buffers into the active project.
    ///
    /// Returns `false` (and writes nothing) when no project is active.
    pub fn save(&mut self) -> Result<bool, PlaygroundError> {
        let Some(id) = self.state.active_id().map(str::to_string) else {
            debug!("Save skipped, no active project");
            return Ok(false);
        };

        if !self.store.update_sources(&id, self.state.buffers())? {
            // Active id vanished from the store underneath us
            return Err(PlaygroundError::ProjectNotFound(id));
        }

        self.state.mark_saved();
        info!(id = %id, "Saved project");
        self.notify(Notification::success("Project saved"));
        Ok(true)
    }

    /// Delete project `id`, promoting the new first project when the active
    /// one goes away
    pub fn delete(&mut self, id: &str) -> Result<Option<Project>, PlaygroundError> {
        let Some(removed) = self.store.delete(id)? else {
            return Ok(None);
        };

        if self.state.is_active(id) {
            match self.store.first() {
                Some(next) => self.state.activate(next),
                None => self.state.clear(),
            }
        }

        self.notify(Notification::success("Project deleted").with_description(removed.name.clone()));
        Ok(Some(removed))
    }

    /// Replace one buffer with the full text of a file
    pub fn import_file(
        &mut self,
        kind: BufferKind,
        path: &Path,
        fs: &dyn FileSystem,
    ) -> Result<(), PlaygroundError> {
        let text = fs.read_to_string(path).map_err(PlaygroundError::FileRead)?;
        info!(buffer = %kind, path = %path.display(), bytes = text.len(), "Imported file");
        self.state.set_buffer(kind, text);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.notify(Notification::success("File loaded").with_description(file_name));
        Ok(())
    }

    /// The composed document for the current buffers
    pub fn compose(&self) -> String {
        compose(self.state.buffers())
    }

    /// Push the current buffers into a preview renderer
    pub fn refresh<R: RenderSurface>(
        &self,
        renderer: &mut PreviewRenderer<R>,
    ) -> Result<(), PlaygroundError> {
        renderer.refresh(self.state.buffers())?;
        Ok(())
    }

    /// Package the buffers as `<project name>.zip`
    pub fn export_archive(&mut self) -> Result<ExportedArchive, PlaygroundError> {
        let name = self
            .active_project()
            .map(|p| p.name.clone())
            .ok_or(PlaygroundError::NoActiveProject)?;

        let archive = ExportedArchive::new(&name, self.state.buffers())?;
        self.notify(Notification::success("Archive ready").with_description(archive.file_name.clone()));
        Ok(archive)
    }

    /// Turn an error into an error notification, passing successes through
    pub fn report<T>(&mut self, result: Result<T, PlaygroundError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "Operation failed");
                self.notify(Notification::error(e.title()).with_description(e.to_string()));
                None
            }
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain queued notifications for display
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
