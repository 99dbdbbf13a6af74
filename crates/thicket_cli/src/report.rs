//! Writes diagnostics to an output stream and decides the exit code.

use std::io::{self, Write};
use thicket_diagnostics::{Diagnostic, DiagnosticRenderer};

/// What the run does after a diagnostic is reported.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Disposition {
    /// Keep going; the diagnostic accompanies a skip or a warning.
    ///
    /// This is the non-fatal path: `thicket explain` uses it, and library
    /// callers reporting a recoverable misuse use it to leave the exit code
    /// at 0.
    Continue,
    /// Stop the run; the process exits with a failure code.
    Abort,
}

/// Renders diagnostics to a writer, normally stderr.
pub struct Reporter<W: Write> {
    writer: W,
    renderer: Box<dyn DiagnosticRenderer>,
    reported: usize,
    aborted: bool,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing through `renderer` to `writer`.
    pub fn new(writer: W, renderer: Box<dyn DiagnosticRenderer>) -> Self {
        Self {
            writer,
            renderer,
            reported: 0,
            aborted: false,
        }
    }

    /// Renders and writes one diagnostic.
    pub fn report(&mut self, diag: &Diagnostic, disposition: Disposition) -> io::Result<()> {
        log::debug!("reporting '{}' ({disposition:?})", diag.heading());
        let rendered = self.renderer.render(diag);
        self.writer.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.reported += 1;
        self.aborted |= disposition == Disposition::Abort;
        Ok(())
    }

    /// Number of diagnostics reported so far.
    pub fn reported(&self) -> usize {
        self.reported
    }

    /// The process exit code: 1 once any aborting diagnostic was reported.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.aborted)
    }
}
