//! Line-based terminal input and colored output.

use std::io::{self, BufRead, IsTerminal, Stdin, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::error::AppError;

/// How a line of output is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Menu titles.
    Title,
    /// Management and listing entries.
    Entry,
    /// Search, statistics, and export entries; section headers.
    Tool,
    /// Save, load, back, and quit entries.
    Meta,
    /// Headers above search results.
    Results,
    Success,
    Warning,
    Failure,
    Plain,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Self::Title | Self::Failure => Some(Color::Red),
            Self::Entry | Self::Success => Some(Color::Green),
            Self::Tool => Some(Color::Blue),
            Self::Meta | Self::Warning => Some(Color::Yellow),
            Self::Results => Some(Color::Cyan),
            Self::Plain => None,
        }
    }
}

/// The menu's view of the terminal.
pub trait Console {
    /// Prints one line.
    fn say(&mut self, tone: Tone, text: &str) -> Result<(), AppError>;

    /// Shows `prompt` and reads one line, without its line ending.
    ///
    /// Returns [`AppError::InputClosed`] at end of input.
    fn ask(&mut self, prompt: &str) -> Result<String, AppError>;

    /// Like [`ask`](Self::ask), but does not echo what is typed when possible.
    fn ask_secret(&mut self, prompt: &str) -> Result<String, AppError>;
}

/// [`Console`] over the process's stdin and stdout.
pub struct Terminal {
    stdin: Stdin,
    stdout: Stdout,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn read_hidden(&mut self) -> Result<String, AppError> {
        enable_raw_mode()?;
        let result = read_hidden_keys();
        let restore = disable_raw_mode();
        writeln!(self.stdout)?;
        restore?;
        result
    }
}

// Collects key presses until Enter. Ctrl-C and Ctrl-D abort the prompt.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn read_hidden_keys() -> Result<String, AppError> {
    let mut secret = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Enter => return Ok(secret),
            KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(AppError::InputClosed);
            }
            KeyCode::Backspace => {
                secret.pop();
            }
            KeyCode::Char(c) => secret.push(c),
            _ => {}
        }
    }
}

impl Console for Terminal {
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn say(&mut self, tone: Tone, text: &str) -> Result<(), AppError> {
        match tone.color() {
            Some(color) => writeln!(self.stdout, "{}", text.with(color))?,
            None => writeln!(self.stdout, "{text}")?,
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(strip_line_ending(&line).to_string())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn ask_secret(&mut self, prompt: &str) -> Result<String, AppError> {
        if !self.stdin.is_terminal() {
            return self.ask(prompt);
        }
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;
        self.read_hidden()
    }
}

/// Removes a trailing `\n` or `\r\n`, keeping any other whitespace.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// A [`Console`] fed from a script, recording everything shown.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub(crate) output: Vec<(Tone, String)>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub(crate) fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// All printed lines and prompts, one per line.
    pub(crate) fn transcript(&self) -> String {
        self.output
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns `true` if some line was printed with exactly this tone and text.
    pub(crate) fn printed(&self, tone: Tone, text: &str) -> bool {
        self.output.iter().any(|(t, s)| *t == tone && s == text)
    }

    pub(crate) fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn say(&mut self, tone: Tone, text: &str) -> Result<(), AppError> {
        self.output.push((tone, text.to_string()));
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        self.output.push((Tone::Plain, prompt.to_string()));
        self.inputs.pop_front().ok_or(AppError::InputClosed)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String, AppError> {
        self.ask(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unix_and_windows_endings() {
        assert_eq!(strip_line_ending("Alice\n"), "Alice");
        assert_eq!(strip_line_ending("Alice\r\n"), "Alice");
        assert_eq!(strip_line_ending("Alice"), "Alice");
    }

    #[test]
    fn keeps_other_whitespace() {
        assert_eq!(strip_line_ending(" Alice \n"), " Alice ");
        assert_eq!(strip_line_ending("\n"), "");
    }

    #[test]
    fn tone_colors() {
        assert_eq!(Tone::Title.color(), Some(Color::Red));
        assert_eq!(Tone::Entry.color(), Some(Color::Green));
        assert_eq!(Tone::Tool.color(), Some(Color::Blue));
        assert_eq!(Tone::Meta.color(), Some(Color::Yellow));
        assert_eq!(Tone::Results.color(), Some(Color::Cyan));
        assert_eq!(Tone::Plain.color(), None);
    }

    #[test]
    fn scripted_console_runs_dry() {
        let mut console = ScriptedConsole::new(&["one"]);
        assert_eq!(console.ask("? ").unwrap(), "one");
        assert!(matches!(console.ask("? "), Err(AppError::InputClosed)));
        assert_eq!(console.remaining_inputs(), 0);
        assert_eq!(console.transcript(), "? \n? ");
    }
}
