//! # Confirmation Prompt
//!
//! File: cli/src/common/ui/prompt.rs
//!
//! Line-based `[y/N]` prompt used by the confirmation gate. The question is
//! written to stderr and the answer read from stdin, so piping output or
//! answers works the same as a terminal session. Only `y` or `yes` (any case)
//! confirm; an empty line or end of input declines.
//!
use crate::core::error::{Result, SvcError};
use crate::engine::gate::{ConfirmationRequest, Confirmer};
use std::io::{self, BufRead, Stderr, StdinLock, Write};

pub struct TerminalConfirmer<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalConfirmer<StdinLock<'static>, Stderr> {
    pub fn stdio() -> Self {
        TerminalConfirmer::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalConfirmer { input, output }
    }

    fn ask(&mut self, request: &ConfirmationRequest<'_>) -> io::Result<bool> {
        write!(
            self.output,
            "About to run {} on {}. Proceed? [y/N] ",
            request.label, request.target
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

impl<R: BufRead, W: Write> Confirmer for TerminalConfirmer<R, W> {
    fn confirm(&mut self, request: &ConfirmationRequest<'_>) -> Result<bool> {
        Ok(self.ask(request).map_err(SvcError::from)?)
    }
}
