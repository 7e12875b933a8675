use super::projects::finish;
use crate::session::Session;
use anyhow::Result;
use codestudio_editor::{Clipboard, ClipboardError, PublishOptions};
use colored::Colorize;

/// The desktop clipboard
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

/// Save, fabricate a publish URL and copy it. Nothing is uploaded.
pub fn publish(cwd: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;
    let options = PublishOptions {
        url_template: session.config.publish_url_template.clone(),
        notification_ms: session.config.notification_ms,
    };

    let receipt = session
        .playground
        .publish(&mut SystemClipboard, &mut rand::thread_rng(), &options);

    println!("{}", "🌐 Published (simulated)".bright_blue().bold());
    println!("  {}", receipt.url.cyan().underline());
    if receipt.copied {
        println!("  {}", "Link copied to clipboard".dimmed());
    } else {
        println!("  {}", "Clipboard unavailable, copy the link above".yellow());
    }

    finish(&mut session)
}
