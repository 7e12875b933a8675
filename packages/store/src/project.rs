use chrono::{DateTime, Utc};
use codestudio_common::Sources;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROJECT_ID: &str = "default";
pub const DEFAULT_PROJECT_NAME: &str = "My First Project";

/// A named bundle of markup, style and script.
///
/// Field names on disk are `html`, `css`, `js` and `createdAt`, matching blobs
/// written by earlier front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "html")]
    pub markup: String,
    #[serde(rename = "css")]
    pub style: String,
    #[serde(rename = "js")]
    pub script: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// New project with starter template content
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let template = Sources::template();
        Self {
            id: id.into(),
            name: name.into(),
            markup: template.markup,
            style: template.style,
            script: template.script,
            created_at,
        }
    }

    /// The project seeded into an empty store
    pub fn default_project(created_at: DateTime<Utc>) -> Self {
        Self::new(DEFAULT_PROJECT_ID, DEFAULT_PROJECT_NAME, created_at)
    }

    pub fn sources(&self) -> Sources {
        Sources::new(&self.markup, &self.style, &self.script)
    }

    /// Overwrite all three content fields
    pub fn set_sources(&mut self, sources: &Sources) {
        self.markup.clone_from(&sources.markup);
        self.style.clone_from(&sources.style);
        self.script.clone_from(&sources.script);
    }
}
