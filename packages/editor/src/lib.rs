//! # CodeStudio Editor
//!
//! Editing session for the code playground.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ store: persisted project list               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Playground                          │
//! │  - active project + three buffers           │
//! │  - create / save / delete / activate        │
//! │  - file import, export, publish             │
//! │  - notification queue                       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ preview: compose → rendering surface        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use codestudio_editor::Playground;
//! use codestudio_store::{MemoryStorage, ProjectStore};
//!
//! let mut playground = Playground::open(ProjectStore::new(MemoryStorage::new()))?;
//! playground.create("Landing")?;
//! playground.set_buffer(BufferKind::Markup, "<h1>Hi</h1>");
//! playground.save()?;
//!
//! let document = playground.compose();
//! ```

mod errors;
mod playground;
mod publish;
mod state;

pub use errors::PlaygroundError;
pub use playground::Playground;
pub use publish::{
    generate_publish_id, Clipboard, ClipboardError, DeniedClipboard, MemoryClipboard,
    PublishOptions, PublishReceipt, DEFAULT_URL_TEMPLATE, PUBLISH_ID_LEN,
    PUBLISH_NOTIFICATION_MS,
};
pub use state::EditorState;

// Re-export common types for convenience
pub use codestudio_common::{BufferKind, Notification, NotificationKind, Sources};
