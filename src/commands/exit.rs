use std::{io::Write, path::PathBuf};

use crate::core::command::{Command, CommandContext, CommandResult};

#[derive(Clone)]
pub struct Exit;

impl Command for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _args: &[String], context: &mut CommandContext) -> CommandResult<PathBuf> {
        writeln!(context.out, "Exiting...")?;
        Ok(context.current_dir.to_path_buf())
    }

    fn should_stop(&self) -> bool {
        true
    }
}
