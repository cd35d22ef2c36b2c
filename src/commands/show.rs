use std::{io::Write, path::PathBuf};

use crate::core::{
    command::{single_argument, Command, CommandContext, CommandResult},
    error::ShellError,
};

const USAGE: &str = "show <file name>";

#[derive(Clone)]
pub struct Show;

impl Command for Show {
    fn name(&self) -> &'static str {
        "show"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn execute(&self, args: &[String], context: &mut CommandContext) -> CommandResult<PathBuf> {
        let name = single_argument(args, USAGE)?;
        let path = context.resolve(name)?;

        if path.is_dir() {
            return Err(ShellError::IsADirectory(path));
        }
        if !path.is_file() {
            return Err(ShellError::NotARegularFile(path));
        }
        if !is_text_file(&path) {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.to_string());
            return Err(ShellError::UnsupportedFormat(file_name));
        }

        let reader = context.reader();
        reader.read(&path, context.out)?;
        context.out.flush()?;

        Ok(context.current_dir.to_path_buf())
    }
}

fn is_text_file(path: &std::path::Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("txt"))
}
