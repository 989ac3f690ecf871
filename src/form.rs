//! Form entry: four questions, normalized answers, one sentence
//!
//! Transforms never modify their input; they hand back a new `String`.

use std::io::{BufRead, Write};

use crate::error::{PrimerError, PrimerResult};

pub const FIRST_NAME_PROMPT: &str = "What's your first name?";
pub const LAST_NAME_PROMPT: &str = "What's your last name?";
pub const CITY_PROMPT: &str = "What city are you from?";
pub const STATE_PROMPT: &str = "What state or province are you from?";

/// Source of answers for the form.
pub trait Prompter {
    /// Ask one question and return the raw answer without its line ending.
    fn ask(&mut self, question: &str) -> PrimerResult<String>;
}

/// Prints each question to `out` and reads one line from `input`.
/// Bytes that are not UTF-8 are replaced rather than rejected.
pub struct LinePrompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> PrimerResult<String> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PrimerError::InputClosed {
                prompt: question.to_string(),
            });
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(chomp(&line).to_string())
    }
}

/// Drop one trailing `\n` or `\r\n`.
pub fn chomp(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Every character uppercased.
pub fn upcase(s: &str) -> String {
    s.to_uppercase()
}

/// Normalized answers to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAnswers {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
}

impl FormAnswers {
    /// Normalize raw answers: names and city capitalized, state uppercased.
    pub fn from_raw(first_name: &str, last_name: &str, city: &str, state: &str) -> Self {
        Self {
            first_name: capitalize(first_name),
            last_name: capitalize(last_name),
            city: capitalize(city),
            state: upcase(state),
        }
    }

    /// Ask the four questions in order.
    pub fn collect(prompter: &mut impl Prompter) -> PrimerResult<Self> {
        let first_name = prompter.ask(FIRST_NAME_PROMPT)?;
        let last_name = prompter.ask(LAST_NAME_PROMPT)?;
        let city = prompter.ask(CITY_PROMPT)?;
        let state = prompter.ask(STATE_PROMPT)?;
        Ok(Self::from_raw(&first_name, &last_name, &city, &state))
    }

    pub fn sentence(&self) -> String {
        format!(
            "Your name is {} {} and you're from {}, {}!",
            self.first_name, self.last_name, self.city, self.state
        )
    }
}
