//! # CodeStudio Preview
//!
//! Turns the three editor buffers into one HTML document and hands it to a
//! rendering surface.
//!
//! Composition performs no escaping: style and script text land in the
//! document verbatim, so a composed document is only as contained as the
//! surface that renders it. Hosts are expected to render inside a sandbox that
//! allows scripts and nothing else (see [`SANDBOX_POLICY`]).

mod compose;
mod frame;
mod renderer;
mod surface;

pub use compose::{compose, compose_with, ComposeOptions};
pub use frame::{escape_attribute, srcdoc_frame, SANDBOX_CSP, SANDBOX_POLICY};
pub use renderer::{PreviewRenderer, RefreshMode};
pub use surface::{FileSurface, MemorySurface, RenderError, RenderSurface};
