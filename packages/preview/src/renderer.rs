//! # Preview Renderer
//!
//! Decides *when* a composed document reaches the surface.
//!
//! ```text
//! mount ───────────────► present
//! refresh ─────────────► present
//! buffers_changed ──┬──► present      (RefreshMode::OnChange)
//!                   └──► nothing      (RefreshMode::Explicit)
//! ```

use crate::compose::{compose_with, ComposeOptions};
use crate::surface::{RenderError, RenderSurface};
use codestudio_common::Sources;
use tracing::debug;

/// Trigger discipline for pushing documents into the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Present on mount and on explicit refresh only
    #[default]
    Explicit,
    /// Also present after every buffer change
    OnChange,
}

pub struct PreviewRenderer<R> {
    surface: R,
    mode: RefreshMode,
    options: ComposeOptions,
    mounted: bool,
    last_document: Option<String>,
}

impl<R: RenderSurface> PreviewRenderer<R> {
    pub fn new(surface: R, mode: RefreshMode) -> Self {
        Self {
            surface,
            mode,
            options: ComposeOptions::default(),
            mounted: false,
            last_document: None,
        }
    }

    pub fn with_options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    /// First presentation of the preview
    pub fn mount(&mut self, sources: &Sources) -> Result<(), RenderError> {
        self.mounted = true;
        self.push(sources)
    }

    /// User-triggered refresh: always recomposes and presents
    pub fn refresh(&mut self, sources: &Sources) -> Result<(), RenderError> {
        self.mounted = true;
        self.push(sources)
    }

    /// Notify the renderer that a buffer changed.
    ///
    /// Returns whether the surface was updated.
    pub fn buffers_changed(&mut self, sources: &Sources) -> Result<bool, RenderError> {
        if !self.mounted || self.mode == RefreshMode::Explicit {
            return Ok(false);
        }
        self.push(sources)?;
        Ok(true)
    }

    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Document most recently presented, if any
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    fn push(&mut self, sources: &Sources) -> Result<(), RenderError> {
        let document = compose_with(sources, self.options.clone());
        self.surface.present(&document)?;
        debug!(bytes = document.len(), "Presented preview document");
        self.last_document = Some(document);
        Ok(())
    }
}
