//! Line-oriented interactive console.
//!
//! Bundles the input stream with the two output streams so the input layer,
//! the resolution service and the dispatcher all talk to the same terminal.
//! Tests drive it with in-memory buffers.

use crate::base::error::ConsoleError;
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// An input stream plus standard output and standard error.
#[derive(Debug)]
pub struct Console<R, O, E> {
    input: R,
    out: O,
    err: E,
}

/// The process console.
pub type StdConsole = Console<StdinLock<'static>, Stdout, Stderr>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R, O, E> Console<R, O, E> {
    pub fn new(input: R, out: O, err: E) -> Self {
        Self { input, out, err }
    }

    /// Progress and result lines go here.
    pub fn out(&mut self) -> &mut O {
        &mut self.out
    }

    /// Diagnostics go here.
    pub fn err(&mut self) -> &mut E {
        &mut self.err
    }

    pub fn into_parts(self) -> (R, O, E) {
        (self.input, self.out, self.err)
    }
}

impl<R: BufRead, O: Write, E: Write> Console<R, O, E> {
    /// Reads one whole line with its terminator removed.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so such a
    /// line is rejected by the readers like any other malformed entry.
    /// Returns [`ConsoleError::Closed`] once the input is exhausted.
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::Closed);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes `text` without a newline and flushes so it shows before input.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}
