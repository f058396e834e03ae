//! Sequential prompts read from a line-buffered input.
//!
//! Answers are whitespace-separated tokens. A line holding several tokens
//! answers several prompts in turn, and a prompt skips blank lines until a
//! token arrives.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub const FILENAME_PROMPT: &str = "Enter data filename: ";
pub const SORT_PROMPT: &str = "Sort courses by 'title', 'code', or 'mark'? ";
pub const FILTER_PROMPT: &str = "Print all courses (A) or filter by year (1-4)? Enter A or 1-4: ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print `prompt` and return the next token, or `None` at end of input.
    pub fn ask_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        self.next_token()
    }

    /// Print `prompt` and return the next non-whitespace character.
    ///
    /// The rest of that token stays queued for the following prompt.
    pub fn ask_char(&mut self, prompt: &str) -> io::Result<Option<char>> {
        let Some(token) = self.ask_token(prompt)? else {
            return Ok(None);
        };
        let mut chars = token.chars();
        let first = chars.next();
        let rest = chars.as_str();
        if !rest.is_empty() {
            self.pending.push_front(rest.to_string());
        }
        Ok(first)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_are_written_before_reading() {
        let mut prompter = Prompter::new(Cursor::new("courses.dat\n"), Vec::new());
        let answer = prompter.ask_token(FILENAME_PROMPT).expect("ask");
        assert_eq!(answer.as_deref(), Some("courses.dat"));
        let output = String::from_utf8(prompter.into_output()).expect("utf8");
        assert_eq!(output, FILENAME_PROMPT);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut prompter = Prompter::new(Cursor::new("\n   \n code \n"), Vec::new());
        assert_eq!(
            prompter.ask_token(SORT_PROMPT).expect("ask").as_deref(),
            Some("code")
        );
    }

    #[test]
    fn tokens_on_one_line_answer_successive_prompts() {
        let mut prompter = Prompter::new(Cursor::new("data.txt mark 2\n"), Vec::new());
        assert_eq!(
            prompter.ask_token(FILENAME_PROMPT).expect("ask").as_deref(),
            Some("data.txt")
        );
        assert_eq!(
            prompter.ask_token(SORT_PROMPT).expect("ask").as_deref(),
            Some("mark")
        );
        assert_eq!(prompter.ask_char(FILTER_PROMPT).expect("ask"), Some('2'));
    }

    #[test]
    fn ask_char_keeps_remainder_queued() {
        let mut prompter = Prompter::new(Cursor::new("A1\n"), Vec::new());
        assert_eq!(prompter.ask_char(FILTER_PROMPT).expect("ask"), Some('A'));
        assert_eq!(
            prompter.ask_token(SORT_PROMPT).expect("ask").as_deref(),
            Some("1")
        );
    }

    #[test]
    fn end_of_input_yields_none() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask_token(FILENAME_PROMPT).expect("ask"), None);
        assert_eq!(prompter.ask_char(FILTER_PROMPT).expect("ask"), None);
    }
}
