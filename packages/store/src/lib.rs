//! # CodeStudio Store
//!
//! Owns the persisted list of playground projects.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │ ProjectStore                  │  load / create / update / delete
//! │  - in-memory Vec<Project>     │
//! └───────────────────────────────┘
//!                ↓ whole-list JSON blob
//! ┌───────────────────────────────┐
//! │ KeyValueStorage               │  one fixed key, full rewrite per change
//! │  - MemoryStorage              │
//! │  - DirectoryStorage           │
//! └───────────────────────────────┘
//! ```
//!
//! Every mutation rewrites the entire blob. There are no partial updates and no
//! cross-process coordination: two hosts sharing one storage location simply
//! overwrite each other's last write.

mod project;
mod storage;
mod store;

pub use project::{Project, DEFAULT_PROJECT_ID, DEFAULT_PROJECT_NAME};
pub use storage::{DirectoryStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{CorruptBlobPolicy, ProjectStore, StoreError, PROJECTS_KEY};
