use crate::session::Session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name
    pub name: String,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Id of the project to activate
    pub id: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the project to delete
    pub id: String,
}

/// List projects, newest first
pub fn list(cwd: &str) -> Result<()> {
    let session = Session::open(cwd)?;
    let projects = session.playground.projects();

    if projects.is_empty() {
        println!("{}", "No projects yet. Run: codestudio new <name>".yellow());
        return Ok(());
    }

    println!("{}", "📁 Projects".bright_blue().bold());
    for project in projects {
        let active = session.playground.active_id() == Some(project.id.as_str());
        let marker = if active { "●".green() } else { "○".dimmed() };
        println!(
            "  {} {} {} {}",
            marker,
            project.name.bold(),
            project.id.dimmed(),
            project.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }

    if session.playground.is_dirty() {
        println!();
        println!("{}", "Workspace has unsaved changes".yellow());
    }

    Ok(())
}

/// Create a project, activate it and check it out
pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;
    warn_if_dirty(&session);

    let result = session.playground.create(&args.name).map(|_| ());
    if session.playground.report(result).is_some() {
        session.checkout()?;
    }

    finish(&mut session)
}

/// Activate a project and check it out, discarding unsaved workspace edits
pub fn open(args: OpenArgs, cwd: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;
    warn_if_dirty(&session);

    let result = session.playground.activate(&args.id);
    if session.playground.report(result).is_some() {
        session.checkout()?;
        if let Some(project) = session.playground.active_project() {
            println!("  {} Opened {}", "✓".green(), project.name.cyan());
        }
    }

    finish(&mut session)
}

/// Copy the workspace buffers into the active project
pub fn save(cwd: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;

    let result = session.playground.save();
    if let Some(false) = session.playground.report(result) {
        println!("{}", "No active project, nothing saved".yellow());
    }

    finish(&mut session)
}

/// Delete a project; check out whatever becomes active
pub fn delete(args: DeleteArgs, cwd: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;
    let was_active = session.playground.active_id() == Some(args.id.as_str());

    let result = session.playground.delete(&args.id);
    match session.playground.report(result) {
        Some(Some(_)) if was_active => session.checkout()?,
        Some(Some(_)) => {}
        Some(None) => println!("{} No project with id {}", "⚠️".yellow(), args.id),
        None => {}
    }

    finish(&mut session)
}

/// Checking out another project overwrites the workspace files
fn warn_if_dirty(session: &Session) -> bool {
    let dirty = session.playground.is_dirty();
    if dirty {
        println!(
            "{}",
            "⚠️  Discarding unsaved workspace changes".yellow()
        );
    }
    dirty
}

pub(crate) fn finish(session: &mut Session) -> Result<()> {
    if session.print_notifications() {
        anyhow::bail!("command did not complete");
    }
    Ok(())
}
