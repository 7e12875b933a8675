use super::projects::finish;
use crate::session::{write_workspace_buffers, Session};
use anyhow::Result;
use clap::Args;
use codestudio_common::{BufferKind, RealFileSystem};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Buffer to replace (markup, style, script)
    pub buffer: BufferKind,

    /// File whose full text replaces the buffer
    pub file: PathBuf,
}

/// Overwrite one workspace buffer with a file's contents
pub fn import(args: ImportArgs, cwd: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;

    let suggested = args.buffer.suggested_extensions();
    let matches_suggestion = args
        .file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| suggested.iter().any(|s| s.eq_ignore_ascii_case(e)))
        .unwrap_or(false);
    if !matches_suggestion {
        println!(
            "{} {} is not a usual {} file ({}); importing anyway",
            "⚠️".yellow(),
            args.file.display(),
            args.buffer,
            suggested.join(", ")
        );
    }

    let result = session
        .playground
        .import_file(args.buffer, &args.file, &RealFileSystem);
    if session.playground.report(result).is_some() {
        write_workspace_buffers(&session.workspace_dir(), session.playground.buffers())?;
    }

    finish(&mut session)
}
