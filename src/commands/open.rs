use std::{io::Write, path::PathBuf};

use crate::core::{
    command::{single_argument, Command, CommandContext, CommandResult},
    error::ShellError,
};

const USAGE: &str = "open <directory name>";

#[derive(Clone)]
pub struct Open;

impl Command for Open {
    fn name(&self) -> &'static str {
        "open"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn execute(&self, args: &[String], context: &mut CommandContext) -> CommandResult<PathBuf> {
        let name = single_argument(args, USAGE)?;
        let path = context.resolve(name).map_err(|e| match e {
            ShellError::NotFound(name) => ShellError::DirectoryNotFound(name),
            e => e,
        })?;

        if !path.is_dir() {
            return Err(ShellError::NotADirectory(path));
        }

        writeln!(context.out, "now at: {}", path.display())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::{fixture, Back},
        core::command::Settings,
    };

    #[test]
    fn test_open_subdirectory() {
        let (_tmp_dir, root) = fixture::tree();
        let (result, output) = fixture::run(&Open, &["sub"], &root);
        let sub = root.join("sub");
        assert_eq!(result.unwrap(), sub);
        assert_eq!(output, format!("now at: {}\n", sub.display()));
    }

    #[test]
    fn test_open_then_back_round_trip() {
        let (_tmp_dir, root) = fixture::tree();
        let (opened, _) = fixture::run(&Open, &["sub"], &root);
        let (back, _) = fixture::run(&Back, &[], &opened.unwrap());
        assert_eq!(back.unwrap(), root);
    }

    #[test]
    fn test_open_dot_dot() {
        let (_tmp_dir, root) = fixture::tree();
        let (result, _) = fixture::run(&Open, &[".."], &root.join("sub"));
        assert_eq!(result.unwrap(), root);
    }

    #[test]
    fn test_open_file() {
        let (_tmp_dir, root) = fixture::tree();
        let (result, output) = fixture::run(&Open, &["notes.txt"], &root);
        assert!(matches!(result, Err(ShellError::NotADirectory(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_open_missing() {
        let (_tmp_dir, root) = fixture::tree();
        let (result, _) = fixture::run(&Open, &["nowhere"], &root);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "directory \"nowhere\" does not exist");
    }

    #[test]
    fn test_open_usage() {
        let (_tmp_dir, root) = fixture::tree();
        let (result, _) = fixture::run(&Open, &[], &root);
        assert!(matches!(result, Err(ShellError::Usage(USAGE))));
    }

    #[test]
    fn test_open_confined() {
        let (_tmp_dir, root) = fixture::tree();
        let sub = root.join("sub");
        let settings = Settings {
            confine_to: Some(sub.clone()),
            ..Settings::default()
        };
        let (result, _) = fixture::run_with(&Open, &[".."], &sub, &settings);
        assert!(matches!(result, Err(ShellError::OutsideRoot { .. })));
    }
}
