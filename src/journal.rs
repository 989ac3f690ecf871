//! Journal file: read every line, append one line
//!
//! Appended lines start with a carriage return. When reading back, `\r`
//! inside a line counts as a break and the empty pieces it leaves are
//! dropped, so neither CR prefixes nor CRLF endings reach the output.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{PrimerError, PrimerResult};

/// A flat text file addressed by a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line. A missing file is `FileNotFound`; bytes that are not
    /// UTF-8 come back as U+FFFD.
    pub fn read_lines(&self) -> PrimerResult<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| self.map_open_error(e))?;

        let mut reader = BufReader::new(file);
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let record = String::from_utf8_lossy(&buf);
            let record = record
                .strip_suffix('\n')
                .map(|r| r.strip_suffix('\r').unwrap_or(r))
                .unwrap_or(&record);
            lines.extend(split_carriage_returns(record).map(str::to_string));
        }

        tracing::debug!(path = %self.path.display(), lines = lines.len(), "read journal");
        Ok(lines)
    }

    /// Append `\r{line}\n`, creating the file if needed.
    pub fn append(&self, line: &str) -> PrimerResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "\r{}", line)?;

        tracing::debug!(path = %self.path.display(), line, "appended to journal");
        Ok(())
    }

    fn map_open_error(&self, err: std::io::Error) -> PrimerError {
        match err.kind() {
            ErrorKind::NotFound => PrimerError::FileNotFound {
                path: self.path.clone(),
            },
            _ => PrimerError::Io(err),
        }
    }
}

/// Split text into the lines a reader would print.
pub fn split_records(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(split_carriage_returns)
        .map(str::to_string)
        .collect()
}

fn split_carriage_returns(line: &str) -> Box<dyn Iterator<Item = &str> + '_> {
    if line.is_empty() {
        Box::new(std::iter::once(line))
    } else {
        Box::new(line.split('\r').filter(|piece| !piece.is_empty()))
    }
}
