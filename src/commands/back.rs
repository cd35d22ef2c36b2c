use std::{io::Write, path::PathBuf};

use crate::core::command::{Command, CommandContext, CommandResult};

#[derive(Clone)]
pub struct Back;

impl Command for Back {
    fn name(&self) -> &'static str {
        "back"
    }

    fn execute(&self, _args: &[String], context: &mut CommandContext) -> CommandResult<PathBuf> {
        let current = context.current_dir;

        // at the filesystem root (or the confinement root) stay where we are
        let target = match current.parent() {
            Some(parent) => match &context.settings.confine_to {
                Some(root) if !parent.starts_with(root) => current,
                _ => parent,
            },
            None => current,
        };

        if target == current {
            log::debug!("back: already at top ({})", current.display());
        }

        writeln!(context.out, "now at {}", target.display())?;
        Ok(target.to_path_buf())
    }
}
