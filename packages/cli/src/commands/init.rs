use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::session::Session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for the persisted project list
    #[arg(long, default_value = ".codestudio")]
    pub storage_dir: String,

    /// Directory the buffers are checked out into
    #[arg(short, long, default_value = ".")]
    pub workspace_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing CodeStudio...".bright_blue().bold());

    let config = Config {
        storage_dir: args.storage_dir,
        workspace_dir: args.workspace_dir,
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    // First open seeds the default project when storage is empty
    let mut session = Session::open(cwd)?;
    session.checkout()?;

    let active = session
        .playground
        .active_project()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "(none)".to_string());
    println!(
        "  {} Checked out {} into {}/",
        "✓".green(),
        active.cyan(),
        config.workspace_dir
    );

    println!();
    println!("{}", "✅ Ready!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit index.html, styles.css and script.js");
    println!("  2. Run: codestudio preview   (or codestudio serve)");
    println!("  3. Run: codestudio save");

    Ok(())
}
