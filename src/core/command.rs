use std::{
    io::Write,
    path::{Path, PathBuf},
};

use super::{
    error::{ShellError, ShellResult},
    reader::TextFileReader,
    resolver,
};

pub type CommandResult<T> = ShellResult<T>;

/// Session-wide options every command can see
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// When set, resolved paths and `back` must stay under this directory
    pub confine_to: Option<PathBuf>,
    pub color: bool,
    pub max_lines: Option<usize>,
}

pub struct CommandContext<'a> {
    pub current_dir: &'a Path,
    pub settings: &'a Settings,
    pub out: &'a mut dyn Write,
}

impl CommandContext<'_> {
    /// Resolves `name` against the current directory, honoring confinement
    pub fn resolve(&self, name: &str) -> CommandResult<PathBuf> {
        let path = resolver::resolve(self.current_dir, name)?;
        match &self.settings.confine_to {
            Some(root) => resolver::confine(path, root),
            None => Ok(path),
        }
    }

    pub fn reader(&self) -> TextFileReader {
        TextFileReader::new(self.settings.max_lines)
    }
}

pub trait Command {
    /// The command word, lowercase
    fn name(&self) -> &'static str;

    fn usage(&self) -> &'static str {
        self.name()
    }

    /// Runs the command and returns the directory the shell should be in afterwards
    fn execute(&self, args: &[String], context: &mut CommandContext) -> CommandResult<PathBuf>;

    /// Whether `word` selects this command. Matching is case-insensitive and,
    /// unless `strict`, any word starting with the command name is accepted.
    fn accepts(&self, word: &str, strict: bool) -> bool {
        let word = word.to_lowercase();
        if strict {
            word == self.name()
        } else {
            word.starts_with(self.name())
        }
    }

    fn should_stop(&self) -> bool {
        false
    }
}

/// Returns the only argument, or a usage error if there isn't exactly one
pub fn single_argument<'a>(args: &'a [String], usage: &'static str) -> CommandResult<&'a str> {
    match args {
        [arg] => Ok(arg.as_str()),
        _ => Err(ShellError::Usage(usage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Command for Probe {
        fn name(&self) -> &'static str {
            "list"
        }

        fn execute(&self, _args: &[String], context: &mut CommandContext) -> CommandResult<PathBuf> {
            Ok(context.current_dir.to_path_buf())
        }
    }

    #[test]
    fn test_accepts_prefix() {
        assert!(Probe.accepts("list", false));
        assert!(Probe.accepts("LIST", false));
        assert!(Probe.accepts("List", false));
        assert!(Probe.accepts("listing", false));
        assert!(!Probe.accepts("lis", false));
        assert!(!Probe.accepts("show", false));
    }

    #[test]
    fn test_accepts_strict() {
        assert!(Probe.accepts("LIST", true));
        assert!(!Probe.accepts("listing", true));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Probe.usage(), "list");
        assert!(!Probe.should_stop());
    }

    #[test]
    fn test_single_argument() {
        let one = vec!["a.txt".to_string()];
        assert_eq!(single_argument(&one, "show <file>").unwrap(), "a.txt");

        let none: Vec<String> = vec![];
        assert!(matches!(
            single_argument(&none, "show <file>"),
            Err(ShellError::Usage("show <file>"))
        ));

        let two = vec!["a".to_string(), "b".to_string()];
        assert!(single_argument(&two, "show <file>").is_err());
    }

    #[test]
    fn test_context_confines() {
        let tmp_dir = tempfile::TempDir::new().unwrap();
        let root = tmp_dir.path().canonicalize().unwrap();
        std::fs::create_dir(root.join("sub")).unwrap();
        let sub = root.join("sub");

        let settings = Settings {
            confine_to: Some(sub.clone()),
            ..Settings::default()
        };
        let mut out = Vec::new();
        let context = CommandContext {
            current_dir: &sub,
            settings: &settings,
            out: &mut out,
        };

        assert!(context.resolve(".").is_ok());
        assert!(matches!(
            context.resolve(".."),
            Err(ShellError::OutsideRoot { .. })
        ));
    }
}
