mod commands;
mod config;
mod session;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    delete, export, import, init, list, new, open, preview, publish, save, serve, DeleteArgs,
    ExportArgs, ImportArgs, InitArgs, NewArgs, OpenArgs, PreviewArgs, ServeArgs,
};
use tracing_subscriber::EnvFilter;

/// CodeStudio - edit markup, style and script, preview it, keep projects locally
#[derive(Parser, Debug)]
#[command(name = "codestudio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config and check out the first project
    Init(InitArgs),

    /// List projects
    List,

    /// Create a project and check it out
    New(NewArgs),

    /// Activate a project and check it out
    Open(OpenArgs),

    /// Save the workspace buffers into the active project
    Save,

    /// Delete a project
    Delete(DeleteArgs),

    /// Replace one buffer with the contents of a file
    Import(ImportArgs),

    /// Compose the buffers into a preview document
    Preview(PreviewArgs),

    /// Serve a live preview in a sandboxed frame
    Serve(ServeArgs),

    /// Export the buffers as <project>.zip
    Export(ExportArgs),

    /// Simulate publishing and copy the link
    Publish,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::List => list(&cwd),
        Command::New(args) => new(args, &cwd),
        Command::Open(args) => open(args, &cwd),
        Command::Save => save(&cwd),
        Command::Delete(args) => delete(args, &cwd),
        Command::Import(args) => import(args, &cwd),
        Command::Preview(args) => preview(args, &cwd),
        Command::Serve(args) => serve(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Publish => publish(&cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
