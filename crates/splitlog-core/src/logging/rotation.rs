//! A single append-only file that rotates itself by size
//!
//! Rotation closes the current handle, renames the file to
//! `<path><YYYYMMDDHHMMSSffff>` and opens a fresh file at the original path.
//! The close must happen before the rename and the rename before the reopen.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};

use crate::error::{FileRole, LogError, LogResult};

/// Local-time layout of the rotation suffix, followed by four sub-second digits
pub const ROTATION_SUFFIX_FORMAT: &str = "%Y%m%d%H%M%S";

/// Size-checked log file owned by one logger
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    role: FileRole,
    max_size: u64,
    file: Option<File>,
    closed: bool,
}

impl RotatingFile {
    /// Open `path` in create-or-append mode
    pub fn open(path: impl Into<PathBuf>, role: FileRole, max_size: u64) -> LogResult<Self> {
        let path = path.into();
        let file = open_append(&path).map_err(|e| LogError::open(role, &path, e))?;
        Ok(Self {
            path,
            role,
            max_size,
            file: Some(file),
            closed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn role(&self) -> FileRole {
        self.role
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Rotate if the file is full, then append `bytes`
    ///
    /// A rotation failure drops this write; the next call starts over.
    pub fn write(&mut self, bytes: &[u8]) -> LogResult<()> {
        if self.closed {
            return Err(LogError::Closed);
        }
        self.rotate_if_full()?;

        let file = match self.file.take() {
            Some(file) => file,
            // A previous rotation lost the handle; try the original path again
            None => open_append(&self.path).map_err(|e| LogError::rotation(&self.path, e))?,
        };
        let file = self.file.insert(file);
        file.write_all(bytes)
            .and_then(|_| file.flush())
            .map_err(|e| LogError::write(&self.path, e))
    }

    fn rotate_if_full(&mut self) -> LogResult<()> {
        let Some(file) = self.file.as_ref() else {
            return Ok(());
        };
        let size = file
            .metadata()
            .map_err(|e| LogError::rotation(&self.path, e))?
            .len();
        if size < self.max_size {
            return Ok(());
        }
        self.rotate().map(|_| ())
    }

    /// Move the current file aside and start a new one; returns the rotated path
    pub fn rotate(&mut self) -> LogResult<PathBuf> {
        if self.closed {
            return Err(LogError::Closed);
        }

        // Close before rename
        drop(self.file.take());

        let target = rotated_path(&self.path);
        let renamed = fs::rename(&self.path, &target);

        // Reopen whether or not the rename worked so the logger stays usable
        match open_append(&self.path) {
            Ok(file) => self.file = Some(file),
            Err(e) => return Err(LogError::rotation(&self.path, e)),
        }

        renamed.map_err(|e| LogError::rotation(&self.path, e))?;
        tracing::debug!(
            from = %self.path.display(),
            to = %target.display(),
            "rotated log file"
        );
        Ok(target)
    }

    /// Release the handle; later writes fail with [`LogError::Closed`]
    pub fn close(&mut self) {
        drop(self.file.take());
        self.closed = true;
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Current local time as `YYYYMMDDHHMMSS` plus four sub-second digits
pub fn rotation_suffix() -> String {
    let now = Local::now();
    format!(
        "{}{:04}",
        now.format(ROTATION_SUFFIX_FORMAT),
        now.nanosecond() % 1_000_000_000 / 100_000
    )
}

/// Pick a free name for the rotated copy of `path`
///
/// Rotations inside the same suffix tick get a `.1`, `.2`, ... counter
/// rather than overwriting each other.
pub fn rotated_path(path: &Path) -> PathBuf {
    let mut base = path.as_os_str().to_owned();
    base.push(rotation_suffix());
    let candidate = PathBuf::from(&base);
    if !candidate.exists() {
        return candidate;
    }
    (1u32..)
        .map(|n| {
            let mut name = base.clone();
            name.push(format!(".{}", n));
            PathBuf::from(name)
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}
