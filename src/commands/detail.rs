use std::{fs, io::Write, path::PathBuf};

use crate::{
    core::{
        command::{single_argument, Command, CommandContext, CommandResult},
        error::ShellError,
    },
    utils,
};

const USAGE: &str = "detail <file or directory name>";

#[derive(Clone)]
pub struct Detail;

impl Command for Detail {
    fn name(&self) -> &'static str {
        "detail"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn execute(&self, args: &[String], context: &mut CommandContext) -> CommandResult<PathBuf> {
        let name = single_argument(args, USAGE)?;
        let path = context.resolve(name)?;

        // the canonical path has its links resolved, so ask the name as typed
        let is_symlink = fs::symlink_metadata(context.current_dir.join(name))
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        let metadata = fs::metadata(&path).map_err(|e| ShellError::from_io(e, name, path.clone()))?;

        let is_dir = metadata.is_dir();
        let is_file = metadata.is_file();
        let is_hidden = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'));

        let out = &mut *context.out;
        writeln!(out, "Is a directory? {}", is_dir)?;
        writeln!(out, "Is a regular file? {}", is_file)?;
        writeln!(out, "Is a symbolic link? {}", is_symlink)?;
        writeln!(out, "Is other? {}", !is_dir && !is_file)?;
        writeln!(out, "Is read-only? {}", metadata.permissions().readonly())?;
        writeln!(out, "Is hidden? {}", is_hidden)?;
        writeln!(out, "Size (in bytes): {}", metadata.len())?;
        writeln!(out, "Last modified: {}", utils::format_time(metadata.modified()))?;
        writeln!(out, "Last access: {}", utils::format_time(metadata.accessed()))?;

        Ok(context.current_dir.to_path_buf())
    }
}
