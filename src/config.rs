use std::path::{Path, PathBuf};

use clap::Parser;

use crate::core::{
    command::Settings,
    error::{ShellError, ShellResult},
};

/// Browse a directory tree and read text files from an interactive prompt
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "treesh", version, about)]
pub struct Config {
    /// Directory to start in (defaults to the working directory)
    #[arg(short, long, env = "TREESH_ROOT")]
    pub root: Option<PathBuf>,

    /// Keep every command inside the starting directory
    #[arg(long, env = "TREESH_CONFINE")]
    pub confine: bool,

    /// Require whole command words instead of accepting prefixes
    #[arg(long)]
    pub strict: bool,

    /// Print at most this many lines per `show`
    #[arg(long, env = "TREESH_MAX_LINES")]
    pub max_lines: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter, e.g. `debug` or `treesh=info` (RUST_LOG takes precedence)
    #[arg(long, env = "TREESH_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// The canonical starting directory. Fails if it is missing or not a directory.
    pub fn root_dir(&self) -> ShellResult<PathBuf> {
        let root = match &self.root {
            Some(root) => expand_tilde(root),
            None => std::env::current_dir()?,
        };

        let root = root
            .canonicalize()
            .map_err(|_| ShellError::RootNotFound(root.clone()))?;
        if !root.is_dir() {
            return Err(ShellError::RootNotADirectory(root));
        }

        Ok(root)
    }

    pub fn settings(&self, root: &Path) -> Settings {
        Settings {
            confine_to: self.confine.then(|| root.to_path_buf()),
            color: !self.no_color,
            max_lines: self.max_lines,
        }
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
