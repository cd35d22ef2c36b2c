use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use super::error::{ShellError, ShellResult};

/// Streams a text file to an output, line by line
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileReader {
    max_lines: Option<usize>,
}

impl TextFileReader {
    pub fn new(max_lines: Option<usize>) -> Self {
        Self { max_lines }
    }

    /// Prints the lines of `path` in order and returns how many were written.
    ///
    /// Lines already written stay written if a later read fails.
    pub fn read(&self, path: &Path, out: &mut dyn Write) -> ShellResult<usize> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| ShellError::from_io(e, &name, path.into()))?;

        let mut written = 0;
        for line in BufReader::new(file).split(b'\n') {
            if self.max_lines.is_some_and(|max| written >= max) {
                writeln!(out, "... (truncated after {} lines)", written)?;
                break;
            }

            let line = line.map_err(|e| ShellError::from_io(e, &name, path.into()))?;
            writeln!(out, "{}", decode_line(&line))?;
            written += 1;
        }

        log::debug!("printed {} lines of {}", written, path.display());
        Ok(written)
    }
}

fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}
