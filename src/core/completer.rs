use std::path::{PathBuf, MAIN_SEPARATOR_STR};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Completes command words at the start of the line and entry names elsewhere
pub struct CommandCompleter {
    commands: Vec<String>,
    current_dir: PathBuf,
}

impl CommandCompleter {
    pub fn new(commands: Vec<&'static str>, current_dir: PathBuf) -> Self {
        Self {
            commands: commands.into_iter().map(String::from).collect(),
            current_dir,
        }
    }

    pub fn set_current_dir(&mut self, current_dir: PathBuf) {
        self.current_dir = current_dir;
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let head = &line[..pos];
        // inside an open quote the word runs from the quote, spaces included
        let start = if head.matches('"').count() % 2 == 1 {
            head.rfind('"').unwrap_or(0)
        } else {
            head.rfind(' ').map(|i| i + 1).unwrap_or(0)
        };
        let word = line[start..pos].trim_start_matches('"').to_lowercase();

        let mut matches = Vec::new();

        if start == 0 {
            matches.extend(
                self.commands
                    .iter()
                    .filter(|cmd| cmd.starts_with(word.as_str()))
                    .map(|cmd| Pair {
                        display: cmd.clone(),
                        replacement: cmd.clone(),
                    }),
            );
        } else if let Ok(entries) = std::fs::read_dir(&self.current_dir) {
            matches.extend(
                entries
                    .filter_map(Result::ok)
                    .filter(|entry| {
                        let name = entry.file_name().to_string_lossy().to_lowercase();
                        name.starts_with(word.as_str())
                    })
                    .map(|entry| {
                        let name = entry.file_name().to_string_lossy().to_string();
                        let display = if entry.path().is_dir() {
                            format!("{}{}", name, MAIN_SEPARATOR_STR)
                        } else {
                            name.clone()
                        };
                        let replacement = if name.contains(char::is_whitespace) {
                            format!("\"{}\"", name)
                        } else {
                            name
                        };
                        Pair {
                            display,
                            replacement,
                        }
                    }),
            );
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        (start, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok(self.candidates(line, pos))
    }
}

impl Validator for CommandCompleter {}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Helper for CommandCompleter {}
