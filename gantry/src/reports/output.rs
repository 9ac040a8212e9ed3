//! Output trait for rendering reports.

use std::io::{self, Write};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render something that was created.
    fn added_item(&mut self, text: &str);

    /// Render something that was already in place.
    fn unchanged_item(&mut self, text: &str);

    /// Render an external command that ran.
    fn command_item(&mut self, text: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Plain-text output, stdout unless another writer is given.
pub struct TerminalOutput<W: Write = io::Stdout> {
    writer: W,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        // A closed stdout (e.g. `gantry list | head`) is not worth failing over.
        let _ = writeln!(self.writer, "{text}");
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn section(&mut self, name: &str) {
        self.line(format_args!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(format_args!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.line(format_args!("  - {text}"));
    }

    fn added_item(&mut self, text: &str) {
        self.line(format_args!("  + {text}"));
    }

    fn unchanged_item(&mut self, text: &str) {
        self.line(format_args!("  = {text}"));
    }

    fn command_item(&mut self, text: &str) {
        self.line(format_args!("  $ {text}"));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(format_args!("{text}"));
    }

    fn newline(&mut self) {
        self.line(format_args!(""));
    }
}

/// Render `report` into a string, for tests.
#[cfg(test)]
pub fn render_to_string(report: &dyn Report) -> String {
    let mut out = TerminalOutput::with_writer(Vec::new());
    report.render(&mut out);
    String::from_utf8(out.writer).unwrap()
}
