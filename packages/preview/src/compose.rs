use codestudio_common::Sources;

/// Options for document composition
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Pretty print the wrapper markup
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Optional `<title>` for the document
    pub title: Option<String>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: None,
        }
    }
}

struct Context {
    options: ComposeOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: ComposeOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    /// Emit `open`, the user content untouched, then `close` on one line
    fn add_wrapped(&mut self, open: &str, content: &str, close: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(open);
        self.add(content);
        self.add(close);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Escape text placed inside generated elements. Buffer content is never
/// passed through here.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Compose markup, style and script into one self-contained document
pub fn compose(sources: &Sources) -> String {
    compose_with(sources, ComposeOptions::default())
}

/// Compose with explicit options.
///
/// Style goes into a `<style>` element in `<head>`, markup into `<body>`, and
/// script into a trailing `<script>` element. Each appears exactly once.
pub fn compose_with(sources: &Sources, options: ComposeOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    if let Some(title) = ctx.options.title.clone() {
        ctx.add_wrapped("<title>", &escape_html(&title), "</title>");
    }
    ctx.add_wrapped("<style>", &sources.style, "</style>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_wrapped("", &sources.markup, "");
    ctx.add_wrapped("<script>", &sources.script, "</script>");
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}
