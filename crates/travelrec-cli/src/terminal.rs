use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use travelrec_core::{DisplayRecord, Renderer, StatusMessage};

/// How records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable cards; status lines go to the same stream.
    Cards,
    /// One JSON object per record; status lines go to stderr.
    JsonLines,
}

/// Renders destination cards to a writer (stdout by default).
pub struct TerminalRenderer<W> {
    out: Mutex<W>,
    format: OutputFormat,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        TerminalRenderer::new(io::stdout(), format)
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        TerminalRenderer {
            out: Mutex::new(out),
            format,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_with(&self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = f(&mut *out).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "could not write to terminal");
        }
    }
}

/// Write one record as a text card.
pub fn write_card(out: &mut impl Write, record: &DisplayRecord) -> io::Result<()> {
    match record.image_url() {
        Some(url) => writeln!(out, "[image: {url}]")?,
        None => writeln!(out, "[no image]")?,
    }
    writeln!(out, "{}", record.name)?;
    writeln!(out, "  {}", record.description)?;
    writeln!(out, "  Type: {}", record.kind)?;
    writeln!(out)
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn show_results(&self, records: &[&DisplayRecord]) {
        match self.format {
            OutputFormat::Cards => self.write_with(|out| {
                for record in records {
                    write_card(out, record)?;
                }
                Ok(())
            }),
            OutputFormat::JsonLines => self.write_with(|out| {
                for record in records {
                    serde_json::to_writer(&mut *out, record)?;
                    writeln!(out)?;
                }
                Ok(())
            }),
        }
    }

    fn show_status(&self, status: &StatusMessage) {
        match self.format {
            OutputFormat::Cards => self.write_with(|out| writeln!(out, "» {status}")),
            OutputFormat::JsonLines => eprintln!("» {status}"),
        }
    }

    fn set_input(&self, keyword: &str) {
        if self.format == OutputFormat::Cards {
            self.write_with(|out| writeln!(out, "search: {keyword}"));
        }
    }
}
