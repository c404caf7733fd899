//! Employee repository contract and text-file implementation.
//!
//! # Responsibility
//! - Load the whole roster from its backing file.
//! - Replace the whole backing file with a new roster.
//!
//! # Invariants
//! - A missing backing file is an empty roster, not an error.
//! - Malformed content is surfaced as `RepoError::Corrupt`, never skipped.
//! - Saves go through a sibling temp file and a rename, so readers observe
//!   either the previous or the new content.

use crate::model::employee::Employee;
use crate::repo::codec::{decode_records, encode_records, CodecError};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure for roster load/save.
#[derive(Debug)]
pub enum RepoError {
    /// The backing file could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// The backing file exists but does not decode.
    Corrupt { path: PathBuf, source: CodecError },
    /// A record cannot be represented in the text format.
    Unencodable(CodecError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access roster file `{}`: {source}", path.display())
            }
            Self::Corrupt { path, source } => {
                write!(f, "roster file `{}` is malformed: {source}", path.display())
            }
            Self::Unencodable(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Unencodable(err) => Some(err),
        }
    }
}

/// Whole-roster persistence contract.
pub trait EmployeeRepository {
    /// Returns every stored record in stored order.
    fn load_all(&self) -> RepoResult<Vec<Employee>>;
    /// Replaces stored content with `employees`, in order.
    fn save_all(&self, employees: &[Employee]) -> RepoResult<()>;
}

/// Repository backed by one field-prefix encoded text file.
#[derive(Debug, Clone)]
pub struct TextFileEmployeeRepository {
    path: PathBuf,
}

impl TextFileEmployeeRepository {
    /// Binds the repository to `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl EmployeeRepository for TextFileEmployeeRepository {
    fn load_all(&self) -> RepoResult<Vec<Employee>> {
        let started_at = Instant::now();

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "event=store_load module=repo status=ok records=0 reason=file_missing duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error error_code=read_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(self.io_error(err));
            }
        };

        match decode_records(&text) {
            Ok(employees) => {
                debug!(
                    "event=store_load module=repo status=ok records={} duration_ms={}",
                    employees.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(employees)
            }
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error error_code=corrupt_file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(RepoError::Corrupt {
                    path: self.path.clone(),
                    source: err,
                })
            }
        }
    }

    fn save_all(&self, employees: &[Employee]) -> RepoResult<()> {
        let started_at = Instant::now();

        let text = encode_records(employees).map_err(|err| {
            error!(
                "event=store_save module=repo status=error error_code=unencodable error={}",
                err
            );
            RepoError::Unencodable(err)
        })?;

        match replace_file(&self.path, text.as_bytes()) {
            Ok(()) => {
                info!(
                    "event=store_save module=repo status=ok records={} bytes={} duration_ms={}",
                    employees.len(),
                    text.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=repo status=error error_code=write_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(self.io_error(err))
            }
        }
    }
}

/// Writes `data` to a temp file beside the target, then renames it over
/// the target.
///
/// An existing target is resolved through symlinks first and its
/// permissions are carried over to the replacement.
fn replace_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let (target, permissions) = match fs::canonicalize(path) {
        Ok(resolved) => {
            let permissions = fs::metadata(&resolved)?.permissions();
            (resolved, Some(permissions))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => (path.to_path_buf(), None),
        Err(err) => return Err(err),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(data)?;
    temp_file.flush()?;
    if let Some(permissions) = permissions {
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.persist(&target).map_err(|err| err.error)?;
    Ok(())
}
