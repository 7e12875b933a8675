//! The three editable text buffers and the vocabulary for addressing them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MARKUP: &str = "<h1>Hello World</h1>";
pub const DEFAULT_STYLE: &str = "h1 { color: #0EA5E9; }";
pub const DEFAULT_SCRIPT: &str = "console.log(\"Hello!\");";

/// Markup, style and script text of one playground document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sources {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl Sources {
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
        }
    }

    /// Starter content for fresh projects
    pub fn template() -> Self {
        Self::new(DEFAULT_MARKUP, DEFAULT_STYLE, DEFAULT_SCRIPT)
    }

    pub fn get(&self, kind: BufferKind) -> &str {
        match kind {
            BufferKind::Markup => &self.markup,
            BufferKind::Style => &self.style,
            BufferKind::Script => &self.script,
        }
    }

    pub fn get_mut(&mut self, kind: BufferKind) -> &mut String {
        match kind {
            BufferKind::Markup => &mut self.markup,
            BufferKind::Style => &mut self.style,
            BufferKind::Script => &mut self.script,
        }
    }

    /// Replace one buffer wholesale
    pub fn set(&mut self, kind: BufferKind, text: impl Into<String>) {
        *self.get_mut(kind) = text.into();
    }
}

/// Which of the three buffers an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferKind {
    Markup,
    Style,
    Script,
}

impl BufferKind {
    pub const ALL: [BufferKind; 3] = [BufferKind::Markup, BufferKind::Style, BufferKind::Script];

    /// Fixed file name used for checkouts and archive entries
    pub const fn file_name(self) -> &'static str {
        match self {
            BufferKind::Markup => "index.html",
            BufferKind::Style => "styles.css",
            BufferKind::Script => "script.js",
        }
    }

    /// Extensions offered when picking a file to import. Never enforced.
    pub fn suggested_extensions(self) -> &'static [&'static str] {
        match self {
            BufferKind::Markup => &["html", "htm"],
            BufferKind::Style => &["css"],
            BufferKind::Script => &["js"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BufferKind::Markup => "markup",
            BufferKind::Style => "style",
            BufferKind::Script => "script",
        }
    }
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BufferKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markup" | "html" => Ok(BufferKind::Markup),
            "style" | "css" => Ok(BufferKind::Style),
            "script" | "js" => Ok(BufferKind::Script),
            other => Err(format!(
                "Unknown buffer '{}'. Use: markup, style, or script",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_only_target_buffer() {
        let mut sources = Sources::template();
        sources.set(BufferKind::Style, "p { margin: 0 }");

        assert_eq!(sources.style, "p { margin: 0 }");
        assert_eq!(sources.markup, DEFAULT_MARKUP);
        assert_eq!(sources.script, DEFAULT_SCRIPT);
    }

    #[test]
    fn test_parse_buffer_kind_aliases() {
        assert_eq!("html".parse::<BufferKind>().unwrap(), BufferKind::Markup);
        assert_eq!("CSS".parse::<BufferKind>().unwrap(), BufferKind::Style);
        assert_eq!("script".parse::<BufferKind>().unwrap(), BufferKind::Script);
        assert!("ts".parse::<BufferKind>().is_err());
    }

    #[test]
    fn test_file_names_are_fixed() {
        let names: Vec<_> = BufferKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names, vec!["index.html", "styles.css", "script.js"]);
    }
}
