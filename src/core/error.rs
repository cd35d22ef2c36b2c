use std::{io, path::PathBuf};

use rustyline::error::ReadlineError;

/// Errors raised while parsing or running a shell command
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("type something...")]
    EmptyInput,
    #[error("can't parse command [{0}]")]
    Unparseable(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("directory \"{0}\" does not exist")]
    DirectoryNotFound(String),
    #[error("{} is a directory, not a file", .0.display())]
    IsADirectory(PathBuf),
    #[error("{} is a file, not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("{} is not a regular file", .0.display())]
    NotARegularFile(PathBuf),
    #[error("unsupported file ({0})")]
    UnsupportedFormat(String),
    #[error("access denied: {}", .0.display())]
    AccessDenied(PathBuf),
    #[error("{} is outside of {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("unknown I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("root directory {} does not exist", .0.display())]
    RootNotFound(PathBuf),
    #[error("root {} is not a directory", .0.display())]
    RootNotADirectory(PathBuf),
}

pub type ShellResult<T> = Result<T, ShellError>;

impl ShellError {
    /// Maps an I/O failure on `path` to the matching user-facing error.
    /// `name` is what the user typed and is used for not-found messages.
    pub fn from_io(err: io::Error, name: &str, path: PathBuf) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ShellError::NotFound(name.to_string()),
            io::ErrorKind::PermissionDenied => ShellError::AccessDenied(path),
            _ => {
                log::warn!("I/O failure on {}: {}", path.display(), err);
                ShellError::Io(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = ShellError::from_io(err, "notes.txt", PathBuf::from("/data/notes.txt"));
        assert!(matches!(err, ShellError::NotFound(ref name) if name == "notes.txt"));
        assert_eq!(err.to_string(), "file not found: notes.txt");
    }

    #[test]
    fn test_from_io_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let err = ShellError::from_io(err, "secret.txt", PathBuf::from("/data/secret.txt"));
        assert_eq!(err.to_string(), "access denied: /data/secret.txt");
    }

    #[test]
    fn test_from_io_other() {
        let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let err = ShellError::from_io(err, "a.txt", PathBuf::from("/a.txt"));
        assert!(matches!(err, ShellError::Io(_)));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ShellError::UnsupportedFormat("image.png".into()).to_string(),
            "unsupported file (image.png)"
        );
        assert_eq!(
            ShellError::DirectoryNotFound("sub".into()).to_string(),
            "directory \"sub\" does not exist"
        );
        assert_eq!(
            ShellError::RootNotFound(PathBuf::from("/x")).to_string(),
            "root directory /x does not exist"
        );
    }
}
