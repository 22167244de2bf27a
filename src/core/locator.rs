use crate::utils::error::{PlotError, Result};
use chrono::{DateTime, Local};
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::SystemTime;

/// Naming convention shared with the simulator: four unsigned decimal fields,
/// no signs, anchored to the whole file name.
static RESULT_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ldpc_ber_N(\d+)_wc(\d+)_wr(\d+)_iter(\d+)_data\.csv$")
        .expect("result-file pattern is a valid regex")
});

/// Field captures exactly as they appear in the file name, unparsed.
#[derive(Debug, Clone)]
pub struct RawCaptures {
    pub block_length: String,
    pub column_weight: String,
    pub row_weight: String,
    pub iterations: String,
}

#[derive(Debug, Clone)]
pub struct LocatedFile {
    pub path: PathBuf,
    pub captures: RawCaptures,
    pub modified: SystemTime,
}

#[derive(Debug, Default)]
pub struct ResultLocator;

impl ResultLocator {
    pub fn new() -> Self {
        Self
    }

    /// Scan `dir` and return the matching entry with the greatest modification
    /// time. Ties go to whichever entry the listing yielded last.
    pub fn locate(&self, dir: &Path) -> Result<LocatedFile> {
        let entries = fs::read_dir(dir).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                PlotError::DirectoryNotFound {
                    path: dir.to_path_buf(),
                }
            } else {
                PlotError::IoError(err)
            }
        })?;

        let mut newest: Option<LocatedFile> = None;
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(caps) = RESULT_FILE_RE.captures(name) else {
                continue;
            };

            let modified = entry.metadata()?.modified()?;
            let candidate = LocatedFile {
                path: entry.path(),
                captures: RawCaptures {
                    block_length: caps[1].to_string(),
                    column_weight: caps[2].to_string(),
                    row_weight: caps[3].to_string(),
                    iterations: caps[4].to_string(),
                },
                modified,
            };

            let replace = match &newest {
                Some(best) => candidate.modified >= best.modified,
                None => true,
            };
            if replace {
                newest = Some(candidate);
            }
        }

        match newest {
            Some(found) => {
                tracing::debug!(
                    "selected {} (modified {})",
                    found.path.display(),
                    DateTime::<Local>::from(found.modified).format("%Y-%m-%d %H:%M:%S")
                );
                Ok(found)
            }
            None => Err(PlotError::NoMatchingFile {
                dir: dir.to_path_buf(),
            }),
        }
    }
}
