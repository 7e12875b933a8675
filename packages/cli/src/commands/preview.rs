use super::projects::finish;
use crate::session::Session;
use anyhow::Result;
use clap::Args;
use codestudio_preview::{ComposeOptions, FileSurface, PreviewRenderer, RefreshMode};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Output file (overrides config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Compose the workspace buffers into one document
pub fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;

    if args.stdout {
        print!("{}", session.playground.compose());
        return Ok(());
    }

    let path = args
        .out
        .unwrap_or_else(|| session.config.get_preview_file(cwd));
    let options = ComposeOptions {
        title: session.playground.active_project().map(|p| p.name.clone()),
        ..ComposeOptions::default()
    };
    let mut renderer =
        PreviewRenderer::new(FileSurface::new(&path), RefreshMode::Explicit).with_options(options);

    let result = session.playground.refresh(&mut renderer);
    if session.playground.report(result).is_some() {
        println!(
            "  {} Preview written to {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
        println!("{}", "  Open it in a browser; run again to refresh".dimmed());
    }

    finish(&mut session)
}
