//! # CodeStudio Export
//!
//! Packages the three buffers into a zip archive with a fixed layout:
//!
//! ```text
//! <project>.zip
//! ├── index.html   (markup, verbatim)
//! ├── styles.css   (style, verbatim)
//! └── script.js    (script, verbatim)
//! ```
//!
//! Producing the bytes is this crate's job; delivering them (a file on disk,
//! a browser download) belongs to the host.

mod archive;

pub use archive::{
    archive_file_name, build_archive, read_archive, ArchiveError, ExportedArchive,
    ARCHIVE_ENTRIES,
};
