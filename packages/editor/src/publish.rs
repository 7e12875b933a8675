//! # Publish
//!
//! Simulated publishing. Saves the active project, invents a short id, builds a
//! URL from a fixed pattern, copies it to the clipboard and raises a
//! notification. Nothing leaves the machine.

use crate::playground::Playground;
use codestudio_common::Notification;
use codestudio_store::KeyValueStorage;
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_URL_TEMPLATE: &str = "https://yoursite-{id}.poehali.dev";
pub const PUBLISH_NOTIFICATION_MS: u64 = 5000;
pub const PUBLISH_ID_LEN: usize = 6;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Error, Debug)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Destination for the published URL
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Holds the last copied text (tests, hosts that copy on their own)
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard the environment refuses to give us
#[derive(Debug, Default, Clone, Copy)]
pub struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("access denied".to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// URL pattern; `{id}` is replaced with the generated id
    pub url_template: String,
    pub notification_ms: u64,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            notification_ms: PUBLISH_NOTIFICATION_MS,
        }
    }
}

/// Outcome of a publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub id: String,
    pub url: String,
    /// Whether the clipboard accepted the URL
    pub copied: bool,
}

/// Lowercase base-36 id of `PUBLISH_ID_LEN` characters
pub fn generate_publish_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..PUBLISH_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

impl<S: KeyValueStorage> Playground<S> {
    /// Save, fabricate a URL, copy it and announce it. Never fails: save and
    /// clipboard problems are reported as notifications instead.
    pub fn publish<R: Rng + ?Sized>(
        &mut self,
        clipboard: &mut dyn Clipboard,
        rng: &mut R,
        options: &PublishOptions,
    ) -> PublishReceipt {
        let saved = self.save();
        self.report(saved);

        let id = generate_publish_id(rng);
        let url = options.url_template.replace("{id}", &id);

        let copied = match clipboard.set_text(&url) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Could not copy publish URL");
                false
            }
        };

        info!(url = %url, copied, "Published project");
        self.notify(
            Notification::success("Site published")
                .with_description(url.clone())
                .with_duration(options.notification_ms),
        );

        PublishReceipt { id, url, copied }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_publish_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = generate_publish_id(&mut rng);
            assert_eq!(id.len(), PUBLISH_ID_LEN);
            assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_publish_id_is_seed_deterministic() {
        let a = generate_publish_id(&mut StdRng::seed_from_u64(42));
        let b = generate_publish_id(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_denied_clipboard_errors() {
        assert!(DeniedClipboard.set_text("x").is_err());
    }
}
