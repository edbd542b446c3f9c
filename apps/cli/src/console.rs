//! # Console
//!
//! Line-oriented prompts over any `BufRead`/`Write` pair.
//!
//! The retry loops for numeric input live here: [`Console::prompt_parsed`]
//! asks, runs a pure parser from `stockroom_core::validation`, prints the
//! rejection in red and asks again until the parser accepts.
//!
//! Tests drive it with `Cursor<Vec<u8>>` in and `Vec<u8>` out.

use std::io::{BufRead, Write};

use colored::Colorize;
use stockroom_core::validation::ValidationResult;

use crate::error::{CliError, CliResult};

/// Interactive console.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Reads one line without its terminator.
    ///
    /// Only the trailing `\n` / `\r\n` is removed; other whitespace is kept
    /// so menu matching stays exact. Bytes that are not UTF-8 become
    /// `U+FFFD`, so a garbled line is rejected by the parsers and re-prompted
    /// like any other bad answer.
    ///
    /// ## Returns
    /// * `Err(CliError::InputClosed)` - End of input
    pub fn read_line(&mut self) -> CliResult<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(CliError::InputClosed);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Prints a yellow prompt and reads the answer.
    pub fn prompt(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{}", label.yellow())?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prints a green selection prompt and reads the answer.
    pub fn prompt_choice(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{}", label.green())?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts until `parse` accepts the answer.
    pub fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> CliResult<T> {
        loop {
            let answer = self.prompt(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.error(&format!("{err}."))?,
            }
        }
    }

    /// Prints a cyan section title preceded by a blank line.
    pub fn title(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "\n{}", format!("--- {text} ---").cyan())?;
        Ok(())
    }

    /// Prints a line in green.
    pub fn success(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text.green())?;
        Ok(())
    }

    /// Prints a line in red.
    pub fn error(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text.red())?;
        Ok(())
    }

    /// Prints a line in yellow.
    pub fn info(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text.yellow())?;
        Ok(())
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom_core::validation::parse_quantity;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        console_bytes(script.as_bytes())
    }

    fn console_bytes(script: &[u8]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        Console::new(Cursor::new(script.to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_only_terminator() {
        let mut console = console("1\n 2 \r\nlast");
        assert_eq!(console.read_line().unwrap(), "1");
        assert_eq!(console.read_line().unwrap(), " 2 ");
        assert_eq!(console.read_line().unwrap(), "last");
        assert!(matches!(console.read_line(), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut console = console_bytes(b"\xff\xfe\r\nok\n");
        assert_eq!(console.read_line().unwrap(), "\u{FFFD}\u{FFFD}");
        assert_eq!(console.read_line().unwrap(), "ok");
    }

    #[test]
    fn test_prompt_parsed_retries_after_invalid_utf8() {
        let mut console = console_bytes(b"\xff\xfe\n3\n");
        let quantity = console.prompt_parsed("Quantity: ", parse_quantity).unwrap();
        assert_eq!(quantity, 3);

        assert!(output(console).contains("Please enter a valid whole number for quantity."));
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut console = console("\n");
        assert_eq!(console.read_line().unwrap(), "");
        assert!(matches!(console.read_line(), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_prompt_writes_label() {
        let mut console = console("Widget\n");
        assert_eq!(console.prompt("Name: ").unwrap(), "Widget");
        assert_eq!(output(console), "Name: ");
    }

    #[test]
    fn test_prompt_parsed_retries_until_valid() {
        let mut console = console("abc\n-1\n7\n");
        let quantity = console.prompt_parsed("Quantity: ", parse_quantity).unwrap();
        assert_eq!(quantity, 7);

        let out = output(console);
        assert_eq!(out.matches("Quantity: ").count(), 3);
        assert_eq!(
            out.matches("Please enter a valid whole number for quantity.").count(),
            2
        );
    }

    #[test]
    fn test_prompt_parsed_stops_on_eof() {
        let mut console = console("abc\n");
        let result = console.prompt_parsed("Quantity: ", parse_quantity);
        assert!(matches!(result, Err(CliError::InputClosed)));
    }

    #[test]
    fn test_title_format() {
        let mut console = console("");
        console.title("PRODUCT LIST").unwrap();
        assert_eq!(output(console), "\n--- PRODUCT LIST ---\n");
    }
}
