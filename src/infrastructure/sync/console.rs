//! Console preview target
//!
//! Renders the ordered batch as `+ path` / `- path` lines before the user is
//! asked to confirm it.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;

use crate::domain::entities::Action;
use crate::domain::ports::{Target, TargetError};

pub struct ConsoleTarget<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl ConsoleTarget<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleTarget<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Target for ConsoleTarget<W> {
    fn display_name(&self) -> String {
        "console".to_string()
    }

    fn read(&self, _path: &str) -> Result<Option<Vec<u8>>, TargetError> {
        Ok(None)
    }

    fn send(&self, _work: &Path, actions: &[Action]) -> Result<(), TargetError> {
        let mut out = self.out.borrow_mut();
        for action in actions {
            writeln!(out, "{}", action)?;
        }
        writeln!(out, "{} change(s)", actions.len())?;
        out.flush()?;
        Ok(())
    }
}
