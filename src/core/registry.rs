use std::path::PathBuf;

use crate::commands::{Back, Detail, Exit, List, Open, Show};

use super::{
    command::{Command, CommandContext, CommandResult},
    error::ShellError,
};

/// The fixed set of shell commands, searched in declaration order
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    strict: bool,
}

/// A command selected by [`CommandRegistry::parse`] together with its arguments
pub struct ParsedCommand<'r> {
    command: &'r dyn Command,
    args: Vec<String>,
}

impl CommandRegistry {
    pub fn setup(strict: bool) -> Self {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(List),
            Box::new(Show),
            Box::new(Back),
            Box::new(Open),
            Box::new(Detail),
            Box::new(Exit),
        ];

        CommandRegistry { commands, strict }
    }

    pub fn parse(&self, line: &str) -> CommandResult<ParsedCommand<'_>> {
        let mut parts = split_arguments(line).into_iter();
        let word = parts.next().ok_or(ShellError::EmptyInput)?;

        let command = self
            .commands
            .iter()
            .find(|cmd| cmd.accepts(&word, self.strict))
            .ok_or_else(|| ShellError::Unparseable(line.trim().to_string()))?;

        Ok(ParsedCommand {
            command: command.as_ref(),
            args: parts.collect(),
        })
    }

    pub fn get_commands(&self) -> Vec<&'static str> {
        self.commands.iter().map(|cmd| cmd.name()).collect()
    }

    pub fn usages(&self) -> Vec<&'static str> {
        self.commands.iter().map(|cmd| cmd.usage()).collect()
    }
}

impl ParsedCommand<'_> {
    pub fn name(&self) -> &'static str {
        self.command.name()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn should_stop(&self) -> bool {
        self.command.should_stop()
    }

    pub fn execute(&self, context: &mut CommandContext) -> CommandResult<PathBuf> {
        self.command.execute(&self.args, context)
    }
}

/// Splits a line on whitespace; double quotes group words containing spaces
pub fn split_arguments(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current_part = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current_part.is_empty() {
                    parts.push(std::mem::take(&mut current_part));
                }
            }
            _ => current_part.push(c),
        }
    }

    if !current_part.is_empty() {
        parts.push(current_part);
    }

    parts
}
