//! Tree formatter
//!
//! Turns a sequence of [`Entry`] values into the indented connector drawing,
//! either as a plain string or written with colours through `termcolor`.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::{Error, Result};
use crate::tree::{BuilderConfig, Entry, TreeBuilder};

use super::config::OutputConfig;
use super::utils::{child_prefixes, connector, size_label, sorted_siblings};

/// Formatter for a fully built tree.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render `entries` with trailing whitespace trimmed. An empty sequence
    /// renders as an empty string.
    pub fn format(&self, entries: &[Entry]) -> String {
        render(entries, &[]).trim_end().to_string()
    }

    /// Print to stdout, followed by a single newline.
    pub fn print(&self, entries: &[Entry]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if self.config.use_color {
            self.write_colored(&mut stdout, entries)
        } else {
            writeln!(stdout, "{}", self.format(entries))
        }
    }

    /// Write the drawing with directory names highlighted. Apart from the
    /// colour codes the bytes match `format()` plus a newline.
    pub fn write_colored<W: WriteColor>(&self, out: &mut W, entries: &[Entry]) -> io::Result<()> {
        if entries.is_empty() {
            return writeln!(out);
        }
        self.write_level(out, entries, &[], true)
    }

    /// `on_tail` is true while every ancestor so far was the last sibling,
    /// i.e. this level may hold the final line of the drawing.
    fn write_level<W: WriteColor>(
        &self,
        out: &mut W,
        entries: &[Entry],
        prefixes: &[&str],
        on_tail: bool,
    ) -> io::Result<()> {
        let graphic = prefixes.concat();
        let siblings = sorted_siblings(entries);
        let count = siblings.len();

        for (i, entry) in siblings.into_iter().enumerate() {
            let is_last = i == count - 1;
            let tail = on_tail && is_last;
            // The final line gets the same trailing trim as `format()`.
            let is_final_line = tail && entry.children().is_empty();

            write!(out, "{}{}", graphic, connector(is_last))?;

            if entry.is_dir() {
                let name = if is_final_line {
                    entry.name().trim_end()
                } else {
                    entry.name()
                };
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", name)?;
                out.reset()?;
                writeln!(out)?;
                self.write_level(out, entry.children(), &child_prefixes(prefixes, is_last), tail)?;
            } else {
                let line = format!("{} {}", entry.name(), size_label(entry.size()));
                writeln!(out, "{}", if is_final_line { line.trim_end() } else { &line })?;
            }
        }
        Ok(())
    }
}

/// Render `entries` below an existing stack of prefix fragments.
///
/// Each entry gets one line, `<prefixes><connector><name>`, with files
/// followed by their size label. A directory's line comes before the block
/// of its children. Siblings are drawn in ascending name order.
pub fn render(entries: &[Entry], prefixes: &[&str]) -> String {
    let mut output = String::new();
    render_level(&mut output, entries, prefixes);
    output
}

fn render_level(output: &mut String, entries: &[Entry], prefixes: &[&str]) {
    let graphic = prefixes.concat();
    let siblings = sorted_siblings(entries);
    let count = siblings.len();

    for (i, entry) in siblings.into_iter().enumerate() {
        let is_last = i == count - 1;

        output.push_str(&graphic);
        output.push_str(connector(is_last));
        output.push_str(entry.name());

        if entry.is_dir() {
            output.push('\n');
            render_level(output, entry.children(), &child_prefixes(prefixes, is_last));
        } else {
            output.push(' ');
            output.push_str(&size_label(entry.size()));
            output.push('\n');
        }
    }
}

/// Build the tree below `path` and write it to `out` as plain text with a
/// trailing newline. Nothing is written when the build fails.
pub fn write_tree<W: Write>(out: &mut W, path: impl AsRef<Path>, include_files: bool) -> Result<()> {
    let entries = TreeBuilder::new(BuilderConfig { include_files }).build(path.as_ref())?;
    let text = TreeFormatter::new(OutputConfig { use_color: false }).format(&entries);
    writeln!(out, "{}", text).map_err(Error::Output)
}
