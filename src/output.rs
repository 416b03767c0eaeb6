//! Result formatting for the `drills` binary

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes drill results either as colored `label: value` lines or as one
/// JSON object per line
pub struct Printer<W: WriteColor> {
    out: W,
    json: bool,
}

impl Printer<StandardStream> {
    pub fn stdout(choice: ColorChoice, json: bool) -> Self {
        Self::new(StandardStream::stdout(choice), json)
    }
}

impl<W: WriteColor> Printer<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    /// Print a result. `text` is the human-readable form, `value` the JSON form.
    pub fn result<T: Serialize + ?Sized>(
        &mut self,
        label: &str,
        text: &str,
        value: &T,
    ) -> Result<()> {
        if self.json {
            let line = json!({ "drill": label, "result": value });
            writeln!(self.out, "{}", line)?;
            return Ok(());
        }

        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(self.out, "{}", label)?;
        self.out.reset()?;
        writeln!(self.out, ": {}", text)?;
        Ok(())
    }

    /// Print a result that has no value (nothing matched, item absent)
    pub fn missing(&mut self, label: &str, message: &str) -> Result<()> {
        if self.json {
            let line = json!({ "drill": label, "result": null });
            writeln!(self.out, "{}", line)?;
            return Ok(());
        }

        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(self.out, "{}", label)?;
        self.out.reset()?;
        writeln!(self.out, ": {}", message)?;
        Ok(())
    }

    /// Print a section heading (human-readable mode only)
    pub fn heading(&mut self, title: &str) -> Result<()> {
        if self.json {
            return Ok(());
        }
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(self.out, "{}", title)?;
        self.out.reset()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Format a list the way the course printed arrays: `[A, B, C]`
pub fn format_list<T: AsRef<str>>(items: &[T]) -> String {
    let joined = items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
    format!("[{}]", joined)
}
