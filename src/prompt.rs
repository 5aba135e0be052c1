//! Line-oriented prompting that re-asks until the answer parses.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt input/output pair. Generic so sessions can run against in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `question` and returns the next line without its line ending.
    ///
    /// # Errors
    ///
    /// Fails if the input is closed or unreadable.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading answer")?;
        if read == 0 {
            bail!("input closed while waiting for an answer");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks `question` until `parse` accepts the answer, printing `retry`
    /// after each rejected one.
    pub fn ask_until<T, E, F>(&mut self, question: &str, retry: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, E>,
        E: std::fmt::Display,
    {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "Rejected answer");
                    writeln!(self.output, "{retry}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::parse_yes_no;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut c = console("Chicago\r\n");
        assert_eq!(c.ask("City?").unwrap(), "Chicago");
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "City?\n");
    }

    #[test]
    fn test_ask_until_retries() {
        let mut c = console("maybe\n\nYES\n");
        let answer = c.ask_until("Go?", "Say yes or no.", parse_yes_no).unwrap();
        assert!(answer);

        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Go?").count(), 3);
        assert_eq!(out.matches("Say yes or no.").count(), 2);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut c = console("nope\n");
        let err = c.ask_until("Go?", "again", parse_yes_no).unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }
}
