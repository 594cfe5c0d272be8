//! Handles all user-facing output for the CLI.
//!
//! Confirmation lines go to stdout, one per accepted snapshot. Colour is only
//! used when stdout is a terminal, so piped output stays plain.

// ============================================================================
// OUTPUT SINKS: OutputBuffer and ConsoleSink implementations
// ============================================================================

use std::io::{self, Write};

use log::warn;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::accept::AcceptSink;

/// OutputBuffer: collects confirmation lines for testing or programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }
}

impl AcceptSink for OutputBuffer {
    fn accepted(&mut self, base_name: &str) {
        self.lines.push(confirmation_line(base_name));
    }
}

/// ConsoleSink: writes confirmation lines to a colour-capable stream.
///
/// Colour errors are ignored. A failed text write is logged and counted; the
/// rename it reports has already happened, so the run carries on.
pub struct ConsoleSink<W: WriteColor> {
    out: W,
    dropped: usize,
}

/// The sink the CLI uses.
pub type StdoutSink = ConsoleSink<StandardStream>;

impl ConsoleSink<StandardStream> {
    /// Stdout, coloured only when it is a terminal.
    pub fn stdout() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, dropped: 0 }
    }

    /// Confirmation lines that could not be written.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, base_name: &str) -> io::Result<()> {
        let _ = self
            .out
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
        let word = write!(self.out, "accepted");
        let _ = self.out.reset();
        word?;
        writeln!(self.out, " {base_name}")
    }
}

impl<W: WriteColor> AcceptSink for ConsoleSink<W> {
    fn accepted(&mut self, base_name: &str) {
        if let Err(e) = self.write_line(base_name) {
            self.dropped += 1;
            warn!("could not print confirmation for {base_name}: {e}");
        }
    }
}

/// The plain-text confirmation line for one accepted snapshot.
pub fn confirmation_line(base_name: &str) -> String {
    format!("accepted {base_name}")
}
