//! Command-line interface definition using clap.

use clap::Parser;
use roster_core::default_log_level;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "employee.txt";
const DEFAULT_LOG_DIR_NAME: &str = "logs";

/// Interactive employee roster backed by a plain text file
#[derive(Parser, Debug)]
#[command(name = "roster", version)]
pub struct Cli {
    /// Roster file to read and write
    #[arg(long, env = "ROSTER_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = "ROSTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files (defaults to `logs` beside the data file)
    #[arg(long, env = "ROSTER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    /// Absolute log directory, resolving relative paths against `cwd`.
    pub fn resolved_log_dir(&self, cwd: &Path) -> PathBuf {
        let dir = match &self.log_dir {
            Some(dir) => dir.clone(),
            None => match self.data_file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    parent.join(DEFAULT_LOG_DIR_NAME)
                }
                _ => PathBuf::from(DEFAULT_LOG_DIR_NAME),
            },
        };

        if dir.is_absolute() {
            dir
        } else {
            cwd.join(dir)
        }
    }
}
