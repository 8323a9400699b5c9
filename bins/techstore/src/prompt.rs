//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Why a prompt produced no answer.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input closed before an answer was given
    #[error("end of input")]
    Eof,

    /// Reading or writing the terminal failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = std::result::Result<T, PromptError>;

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for everything that is not a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask once and return the answer without its line ending.
    pub fn ask(&mut self, label: &str) -> PromptResult<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(answer)
    }

    /// Ask until the answer parses as `T`.
    pub fn ask_parsed<T: FromStr>(&mut self, label: &str) -> PromptResult<T> {
        loop {
            let answer = self.ask(label)?;
            match answer.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(input = %answer, "Rejected malformed input");
                    writeln!(self.output, "Invalid value '{}', please try again.", answer.trim())?;
                }
            }
        }
    }

    /// Like [`Prompter::ask_parsed`], but a blank answer yields `None`.
    pub fn ask_optional<T: FromStr>(&mut self, label: &str) -> PromptResult<Option<T>> {
        loop {
            let answer = self.ask(label)?;
            let trimmed = answer.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    tracing::debug!(input = %answer, "Rejected malformed input");
                    writeln!(self.output, "Invalid value '{}', please try again.", trimmed)?;
                }
            }
        }
    }

    /// Ask a yes/no question; blank picks `default`.
    pub fn ask_yes_no(&mut self, label: &str, default: bool) -> PromptResult<bool> {
        loop {
            let answer = self.ask(label)?;
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" | "s" | "si" | "sí" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => writeln!(self.output, "Please answer y or n (got '{}').", other)?,
            }
        }
    }

    /// Free text; blank yields `None`.
    pub fn ask_text(&mut self, label: &str) -> PromptResult<Option<String>> {
        let answer = self.ask(label)?;
        let trimmed = answer.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output).unwrap()
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut p = prompter("  Apple \r\n");
        assert_eq!(p.ask("Brand").unwrap(), "  Apple ");
        assert_eq!(written(p), "Brand: ");
    }

    #[test]
    fn test_ask_eof() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Anything"), Err(PromptError::Eof)));
    }

    #[test]
    fn test_ask_parsed_reprompts() {
        let mut p = prompter("abc\n\n42\n");
        assert_eq!(p.ask_parsed::<i64>("Number").unwrap(), 42);
        let out = written(p);
        assert_eq!(out.matches("Number: ").count(), 3);
        assert!(out.contains("Invalid value 'abc'"));
    }

    #[test]
    fn test_ask_parsed_eof_while_reprompting() {
        let mut p = prompter("abc\n");
        assert!(matches!(p.ask_parsed::<u32>("Id"), Err(PromptError::Eof)));
    }

    #[test]
    fn test_ask_optional_blank() {
        let mut p = prompter("\n12.5\n");
        assert_eq!(p.ask_optional::<f64>("Min").unwrap(), None);
        assert_eq!(p.ask_optional::<f64>("Min").unwrap(), Some(12.5));
    }

    #[test]
    fn test_ask_yes_no() {
        let mut p = prompter("maybe\nS\n\n");
        assert!(p.ask_yes_no("Approximate", false).unwrap());
        assert!(!p.ask_yes_no("Approximate", false).unwrap());
    }

    #[test]
    fn test_ask_text() {
        let mut p = prompter("   \n Sony \n");
        assert_eq!(p.ask_text("Brand").unwrap(), None);
        assert_eq!(p.ask_text("Brand").unwrap().as_deref(), Some("Sony"));
    }
}
