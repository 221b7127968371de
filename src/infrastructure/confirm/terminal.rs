//! Terminal Confirmer
//!
//! Asks yes/no questions on a terminal-like reader/writer pair.

use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stderr, Write};

use tracing::warn;

use crate::domain::ports::Confirmer;

/// Interactive confirmer
///
/// Accepts `y`/`Y` and `n`/`N`; any other answer logs a warning and asks
/// again. End of input or a read error counts as "no".
pub struct TerminalConfirmer<R: BufRead, W: Write> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl TerminalConfirmer<StdinLock<'static>, Stderr> {
    /// Prompt on stderr, read answers from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> Confirmer for TerminalConfirmer<R, W> {
    fn confirm(&self, question: &str) -> bool {
        loop {
            {
                let mut output = self.output.borrow_mut();
                let _ = write!(output, "{} [y/n] ", question);
                let _ = output.flush();
            }

            let mut answer = String::new();
            match self.input.borrow_mut().read_line(&mut answer) {
                Ok(0) | Err(_) => return false,
                Ok(_) => {}
            }

            match answer.trim() {
                "y" | "Y" => return true,
                "n" | "N" => return false,
                other => warn!(answer = other, "invalid answer"),
            }
        }
    }
}
