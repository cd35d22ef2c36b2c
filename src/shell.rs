use colored::Colorize;
use rustyline::{error::ReadlineError, history::MemHistory, Config as EditorConfig, Editor};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    core::{
        command::{CommandContext, Settings},
        completer::CommandCompleter,
        error::ShellResult,
        registry::CommandRegistry,
    },
};

pub const PROMPT: &str = "$> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Stopped,
}

pub struct Shell {
    current_dir: PathBuf,
    registry: CommandRegistry,
    settings: Settings,
    state: ShellState,
}

impl Shell {
    pub fn new(config: &Config) -> ShellResult<Self> {
        let root = config.root_dir()?;
        log::info!("starting in {}", root.display());

        Ok(Self {
            settings: config.settings(&root),
            registry: CommandRegistry::setup(config.strict),
            current_dir: root,
            state: ShellState::Running,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn run(&mut self) -> ShellResult<()> {
        let mut editor: Editor<CommandCompleter, MemHistory> =
            Editor::with_history(EditorConfig::default(), MemHistory::new())?;
        editor.set_helper(Some(CommandCompleter::new(
            self.registry.get_commands(),
            self.current_dir.clone(),
        )));

        let mut stdout = io::stdout();
        self.greet(&mut stdout)?;

        while self.state() == ShellState::Running {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.as_str())?;
                    }
                    self.step(&line, &mut stdout);

                    if let Some(helper) = editor.helper_mut() {
                        helper.set_current_dir(self.current_dir.clone());
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D
                    self.state = ShellState::Stopped;
                }
                Err(e) => return Err(e.into()),
            }
        }

        writeln!(stdout, "File system closed.")?;
        Ok(())
    }

    /// Parses and runs one line. On success the current directory is replaced
    /// by the command's result; on failure it is left alone.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> ShellResult<()> {
        let parsed = self.registry.parse(line)?;
        log::debug!("running {} with {:?}", parsed.name(), parsed.args());

        let mut context = CommandContext {
            current_dir: &self.current_dir,
            settings: &self.settings,
            out,
        };
        let new_dir = parsed.execute(&mut context)?;
        let stop = parsed.should_stop();

        self.current_dir = new_dir;
        if stop {
            self.state = ShellState::Stopped;
        }
        Ok(())
    }

    /// Runs one line and reports any error on `out`; the loop never dies here
    pub fn step(&mut self, line: &str, out: &mut dyn Write) -> ShellState {
        if let Err(e) = self.handle_line(line, out) {
            log::debug!("command failed: {:?}", e);
            let message = if self.settings.color {
                e.to_string().red().to_string()
            } else {
                e.to_string()
            };
            if let Err(e) = writeln!(out, "{}", message) {
                log::warn!("could not report error: {}", e);
            }
        }
        if let Err(e) = out.flush() {
            log::warn!("could not flush output: {}", e);
        }

        self.state
    }

    fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Welcome to the file system!")?;
        writeln!(out, "Commands: {}", self.registry.usages().join(", "))?;
        writeln!(out, "Currently at {}", self.current_dir().display())
    }
}
