//! # Editor State
//!
//! Which project is active, plus the three live buffers.
//!
//! Transitions are plain functions over this struct with no storage side
//! effects; persistence is the [`Playground`](crate::Playground)'s concern.
//!
//! ```text
//!            activate(p)              set_buffer
//! Empty ─────────────────► Active(p) ───────────► Active(p, dirty)
//!   ▲                         │  ▲                      │
//!   └──────── clear ──────────┘  └──── mark_saved ──────┘
//! ```

use codestudio_common::{BufferKind, Sources};
use codestudio_store::Project;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    active_id: Option<String>,
    buffers: Sources,
    /// Content of the active project as last loaded or saved
    baseline: Option<Sources>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the buffers to `project`, discarding whatever was there
    pub fn activate(&mut self, project: &Project) {
        let sources = project.sources();
        self.active_id = Some(project.id.clone());
        self.baseline = Some(sources.clone());
        self.buffers = sources;
    }

    /// No active project, empty buffers
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    pub fn buffers(&self) -> &Sources {
        &self.buffers
    }

    pub fn buffer(&self, kind: BufferKind) -> &str {
        self.buffers.get(kind)
    }

    /// Overwrite one buffer
    pub fn set_buffer(&mut self, kind: BufferKind, text: impl Into<String>) {
        self.buffers.set(kind, text);
    }

    /// Overwrite all three buffers (e.g. restoring unsaved work)
    pub fn set_buffers(&mut self, sources: Sources) {
        self.buffers = sources;
    }

    /// Record that the current buffers are what storage now holds
    pub fn mark_saved(&mut self) {
        if self.active_id.is_some() {
            self.baseline = Some(self.buffers.clone());
        }
    }

    /// Buffers differ from the active project's persisted content.
    ///
    /// Informational only; saves always overwrite.
    pub fn is_dirty(&self) -> bool {
        match &self.baseline {
            Some(baseline) => baseline != &self.buffers,
            None => false,
        }
    }
}
