//! Interactive command dispatcher.
//!
//! A single pass through the menu state machine:
//!
//! ```text
//! MenuPrompt --1--> SingleResolve --+
//!            --2--> ReverseLookup --+--> Done
//!            --3--> BatchResolve  --+
//!            --*--> Done ("Invalid choice")
//! ```
//!
//! Lookup failures are reported by the resolution service and never end the
//! session with an error. A closed console ends it quietly.

use crate::base::error::{ConsoleError, Error};
use crate::console::Console;
use crate::dns::{NameResolutionService, Resolve};
use crate::input::InputHandler;
use std::io::{BufRead, Write};

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ResolveDomain,
    ReverseLookup,
    ResolveMultiple,
}

impl Command {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::ResolveDomain),
            2 => Some(Self::ReverseLookup),
            3 => Some(Self::ResolveMultiple),
            _ => None,
        }
    }
}

/// Dispatcher states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MenuPrompt,
    SingleResolve,
    ReverseLookup,
    BatchResolve,
    Done,
}

impl From<Command> for State {
    fn from(command: Command) -> Self {
        match command {
            Command::ResolveDomain => State::SingleResolve,
            Command::ReverseLookup => State::ReverseLookup,
            Command::ResolveMultiple => State::BatchResolve,
        }
    }
}

/// Drives one interactive session.
#[derive(Debug, Clone)]
pub struct Dispatcher<Res> {
    service: NameResolutionService<Res>,
    input: InputHandler,
}

impl<Res: Resolve> Dispatcher<Res> {
    pub fn new(service: NameResolutionService<Res>, input: InputHandler) -> Self {
        Self { service, input }
    }

    pub fn service(&self) -> &NameResolutionService<Res> {
        &self.service
    }

    /// Runs the menu once and returns when the session is done.
    ///
    /// Only a broken console is an error; closed input is reported and
    /// treated as a normal end of session.
    pub fn run<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<(), ConsoleError> {
        match self.drive(console) {
            Err(ConsoleError::Closed) => {
                writeln!(console.out())?;
                writeln!(console.err(), "No more input. Exiting.")?;
                Ok(())
            }
            other => other,
        }
    }

    fn drive<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<(), ConsoleError> {
        let mut state = State::MenuPrompt;
        loop {
            tracing::trace!(?state, "dispatcher step");
            state = match state {
                State::MenuPrompt => self.menu(console)?,
                State::SingleResolve => self.single_resolve(console)?,
                State::ReverseLookup => self.reverse_lookup(console)?,
                State::BatchResolve => self.batch_resolve(console)?,
                State::Done => return Ok(()),
            };
        }
    }

    fn menu<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<State, ConsoleError> {
        writeln!(console.out(), "1. Resolve Domain")?;
        writeln!(console.out(), "2. Reverse DNS Lookup")?;
        writeln!(console.out(), "3. Resolve Multiple Domains")?;
        console.prompt("Choose an option: ")?;

        let choice = self.input.read_menu_choice(console)?;
        match Command::from_choice(choice) {
            Some(command) => Ok(command.into()),
            None => {
                tracing::debug!(choice, "unknown menu choice");
                writeln!(console.err(), "Invalid choice. Exiting.")?;
                Ok(State::Done)
            }
        }
    }

    fn single_resolve<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<State, ConsoleError> {
        console.prompt("Enter domain: ")?;
        let domain = self.input.read_line(console)?;
        let family = self.input.read_family_choice(console)?;

        settle(self.service.resolve_forward(console, domain, family))?;
        Ok(State::Done)
    }

    fn reverse_lookup<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<State, ConsoleError> {
        console.prompt("Enter IP address: ")?;
        let ip = self.input.read_line(console)?;

        settle(self.service.resolve_reverse(console, &ip))?;
        Ok(State::Done)
    }

    fn batch_resolve<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<State, ConsoleError> {
        console.prompt("Enter number of domains: ")?;
        let count = self.input.read_count(console)?;

        let mut domains = Vec::with_capacity(count);
        for i in 1..=count {
            console.prompt(&format!("Enter domain {i}: "))?;
            domains.push(self.input.read_line(console)?);
        }
        let family = self.input.read_family_choice(console)?;

        settle(self.service.resolve_multiple(console, domains, family))?;
        Ok(State::Done)
    }
}

/// Lookup failures were already reported; only console failures escape.
fn settle<T>(result: Result<T, Error>) -> Result<(), ConsoleError> {
    match result {
        Ok(_) => Ok(()),
        Err(Error::Console(err)) => Err(err),
        Err(err) => {
            tracing::debug!(error = %err, "lookup did not succeed");
            Ok(())
        }
    }
}
