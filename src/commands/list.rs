use std::{fs, io::Write, path::PathBuf};

use crate::{
    core::{
        command::{Command, CommandContext, CommandResult},
        error::ShellError,
    },
    utils,
};

#[derive(Clone)]
pub struct List;

impl Command for List {
    fn name(&self) -> &'static str {
        "list"
    }

    fn execute(&self, _args: &[String], context: &mut CommandContext) -> CommandResult<PathBuf> {
        let dir = context.current_dir;
        let name = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|e| ShellError::from_io(e, &name, dir.into()))?;

        let mut listing = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            // follows symlinks, so a link to a directory is listed as one
            let is_dir = entry.path().is_dir();
            listing.push((file_name, is_dir));
        }
        listing.sort();

        for (file_name, is_dir) in listing {
            let marker = if is_dir {
                std::path::MAIN_SEPARATOR_STR
            } else {
                ""
            };

            if context.settings.color {
                let colored = utils::colorize_file_name(&file_name, is_dir);
                writeln!(context.out, "{}{}", colored, marker)?;
            } else {
                writeln!(context.out, "{}{}", file_name, marker)?;
            }
        }

        Ok(dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture;
    use std::path::MAIN_SEPARATOR;

    #[test]
    fn test_list_marks_directories() {
        let (_tmp_dir, root) = fixture::tree();
        let (result, output) = fixture::run(&List, &[], &root);
        assert_eq!(result.unwrap(), root);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "image.png".to_string(),
                "notes.txt".to_string(),
                format!("sub{}", MAIN_SEPARATOR),
            ]
        );
    }

    #[test]
    fn test_list_only_immediate_children() {
        let (_tmp_dir, root) = fixture::tree();
        let (_, output) = fixture::run(&List, &[], &root);
        assert!(!output.contains("inner.txt"));
    }

    #[test]
    fn test_list_empty_dir() {
        let (_tmp_dir, root) = fixture::tree();
        let empty = root.join("empty");
        fs::create_dir(&empty).unwrap();
        let (result, output) = fixture::run(&List, &[], &empty);
        assert_eq!(result.unwrap(), empty);
        assert!(output.is_empty());
    }

    #[test]
    fn test_list_ignores_extra_args() {
        let (_tmp_dir, root) = fixture::tree();
        let (result, output) = fixture::run(&List, &["whatever"], &root);
        assert!(result.is_ok());
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_list_vanished_dir() {
        let (_tmp_dir, root) = fixture::tree();
        let (result, _) = fixture::run(&List, &[], &root.join("gone"));
        assert!(matches!(result, Err(ShellError::NotFound(_))));
    }
}
