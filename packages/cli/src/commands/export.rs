use super::projects::finish;
use crate::session::Session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Directory to write the archive into (defaults to current directory)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Write `<project>.zip` containing the three workspace buffers
pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;
    let out_dir = args.out_dir.unwrap_or_else(|| PathBuf::from(cwd));

    let result = session.playground.export_archive();
    if let Some(archive) = session.playground.report(result) {
        let path = archive.write_to_dir(&out_dir)?;
        println!(
            "  {} {} ({} bytes)",
            "📦".green(),
            path.display().to_string().cyan(),
            archive.bytes.len()
        );
    }

    finish(&mut session)
}
