//! Validated interactive input.
//!
//! Every reader consumes whole lines, so whatever follows a malformed entry
//! on the same line is discarded with it and can never leak into the next
//! read. Rejected entries are reported on standard error and asked for
//! again; only a closed or broken console ends a read early.

use crate::base::config::LookupConfig;
use crate::base::error::{ConsoleError, InputFormatError};
use crate::console::Console;
use crate::dns::AddressFamily;
use std::io::{BufRead, Write};

/// Parses a whole line as an integer. Surrounding whitespace is ignored.
pub fn parse_integer(line: &str) -> Result<i64, InputFormatError> {
    line.trim()
        .parse()
        .map_err(|_| InputFormatError::NotANumber)
}

/// Parses an address family submenu entry.
pub fn parse_family(line: &str) -> Result<AddressFamily, InputFormatError> {
    parse_integer(line)
        .ok()
        .and_then(AddressFamily::from_choice)
        .ok_or(InputFormatError::InvalidFamily)
}

/// Reads menu selections, counts, family choices and free text.
#[derive(Debug, Clone)]
pub struct InputHandler {
    max_batch_domains: usize,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(&LookupConfig::default())
    }
}

impl InputHandler {
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            max_batch_domains: config.max_batch_domains,
        }
    }

    /// Reads until a line parses as an integer. No range check.
    pub fn read_menu_choice<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<i64, ConsoleError> {
        loop {
            let line = console.read_line()?;
            match parse_integer(&line) {
                Ok(choice) => return Ok(choice),
                Err(err) => reject(console, &line, err)?,
            }
        }
    }

    /// Shows the family submenu until the answer is 1, 2 or 3.
    pub fn read_family_choice<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<AddressFamily, ConsoleError> {
        loop {
            writeln!(console.out(), "Select Address Family:")?;
            writeln!(console.out(), "1. IPv4 only")?;
            writeln!(console.out(), "2. IPv6 only")?;
            writeln!(console.out(), "3. Both (default)")?;
            console.prompt("Enter choice: ")?;

            let line = console.read_line()?;
            match parse_family(&line) {
                Ok(family) => return Ok(family),
                Err(err) => reject(console, &line, err)?,
            }
        }
    }

    /// Reads the number of domains for a batch.
    ///
    /// Counts outside `1..=max_batch_domains` are rejected and asked for
    /// again, so a batch is never empty and never unbounded.
    pub fn read_count<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<usize, ConsoleError> {
        let min = LookupConfig::MIN_BATCH_DOMAINS;
        let max = self.max_batch_domains;
        loop {
            let choice = self.read_menu_choice(console)?;
            match usize::try_from(choice) {
                Ok(count) if (min..=max).contains(&count) => return Ok(count),
                _ => {
                    reject(
                        console,
                        &choice.to_string(),
                        InputFormatError::CountOutOfRange { min, max },
                    )?;
                    console.prompt("Enter number of domains: ")?;
                }
            }
        }
    }

    /// One line of free text, verbatim. Empty lines are returned as-is.
    pub fn read_line<R: BufRead, O: Write, E: Write>(
        &self,
        console: &mut Console<R, O, E>,
    ) -> Result<String, ConsoleError> {
        console.read_line()
    }
}

fn reject<R, O, E: Write>(
    console: &mut Console<R, O, E>,
    line: &str,
    err: InputFormatError,
) -> Result<(), ConsoleError> {
    tracing::debug!(input = %line, error = %err, "rejected input");
    writeln!(console.err(), "{err}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    fn stderr(console: TestConsole) -> String {
        let (_, _, err) = console.into_parts();
        String::from_utf8(err).unwrap()
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("3"), Ok(3));
        assert_eq!(parse_integer("  -7 "), Ok(-7));
        assert_eq!(parse_integer("abc"), Err(InputFormatError::NotANumber));
        assert_eq!(parse_integer("12abc"), Err(InputFormatError::NotANumber));
        assert_eq!(parse_integer(""), Err(InputFormatError::NotANumber));
    }

    #[test]
    fn test_parse_family() {
        assert_eq!(parse_family("1"), Ok(AddressFamily::Ipv4));
        assert_eq!(parse_family("2"), Ok(AddressFamily::Ipv6));
        assert_eq!(parse_family("3"), Ok(AddressFamily::Unspecified));
        assert_eq!(parse_family("4"), Err(InputFormatError::InvalidFamily));
        assert_eq!(parse_family("x"), Err(InputFormatError::InvalidFamily));
    }

    #[test]
    fn test_menu_choice_reprompts_until_number() {
        let handler = InputHandler::default();
        let mut console = console("abc\n1x\n\n42\n");

        assert_eq!(handler.read_menu_choice(&mut console).unwrap(), 42);
        assert_eq!(
            stderr(console),
            "Invalid input. Please enter a number.\n".repeat(3)
        );
    }

    #[test]
    fn test_menu_choice_reprompts_after_invalid_utf8() {
        let handler = InputHandler::default();
        let mut console: TestConsole =
            Console::new(Cursor::new(b"\xff\xfe\n7\n".to_vec()), Vec::new(), Vec::new());

        assert_eq!(handler.read_menu_choice(&mut console).unwrap(), 7);
        assert_eq!(stderr(console), "Invalid input. Please enter a number.\n");
    }

    #[test]
    fn test_menu_choice_leaves_next_line_untouched() {
        let handler = InputHandler::default();
        let mut console = console("oops trailing words\n1\nexample.com\n");

        assert_eq!(handler.read_menu_choice(&mut console).unwrap(), 1);
        assert_eq!(handler.read_line(&mut console).unwrap(), "example.com");
    }

    #[test]
    fn test_family_choice_reprompts_with_menu() {
        let handler = InputHandler::default();
        let mut console = console("0\nfoo\n2\n");

        assert_eq!(
            handler.read_family_choice(&mut console).unwrap(),
            AddressFamily::Ipv6
        );
        let (_, out, err) = console.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Select Address Family:").count(), 3);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Invalid input. Enter 1, 2, or 3.\n".repeat(2)
        );
    }

    #[test]
    fn test_count_rejects_out_of_range() {
        let handler = InputHandler::new(&LookupConfig::default().with_max_batch_domains(5));
        let mut console = console("0\n-3\n6\n5\n");

        assert_eq!(handler.read_count(&mut console).unwrap(), 5);
        assert_eq!(
            stderr(console),
            "Invalid count. Enter a number between 1 and 5.\n".repeat(3)
        );
    }

    #[test]
    fn test_closed_input_ends_loops() {
        let handler = InputHandler::default();

        let mut menu = console("nope\n");
        assert!(matches!(
            handler.read_menu_choice(&mut menu),
            Err(ConsoleError::Closed)
        ));

        let mut family = console("9\n");
        assert!(matches!(
            handler.read_family_choice(&mut family),
            Err(ConsoleError::Closed)
        ));
    }
}
