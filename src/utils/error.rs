use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("results directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("no file matching ldpc_ber_N*_wc*_wr*_iter*_data.csv under {dir}")]
    NoMatchingFile { dir: PathBuf },

    #[error("required column {column} missing from {path}")]
    SchemaError { path: PathBuf, column: String },

    #[error("CSV parse error: {0}")]
    ParseError(#[from] csv::Error),

    #[error("row weight wr = 0 makes the code rate undefined")]
    DivisionByZero,

    #[error("filename field is not a valid integer: {0}")]
    MetadataError(#[from] std::num::ParseIntError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("chart rendering failed: {message}")]
    RenderError { message: String },

    #[error("invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PlotError {
    pub fn render(err: impl std::fmt::Display) -> Self {
        PlotError::RenderError {
            message: err.to_string(),
        }
    }

    /// Pipeline stage the error belongs to, for the operator-facing message.
    pub fn stage(&self) -> &'static str {
        match self {
            PlotError::DirectoryNotFound { .. }
            | PlotError::NoMatchingFile { .. }
            | PlotError::MetadataError(_)
            | PlotError::DivisionByZero => "discover",
            PlotError::SchemaError { .. } | PlotError::ParseError(_) => "ingest",
            PlotError::RenderError { .. } => "render",
            PlotError::IoError(_) => "filesystem",
            PlotError::InvalidConfigValueError { .. } => "config",
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlotError::DirectoryNotFound { path } => format!(
                "run the LDPC simulator first so it writes its CSV output under {}",
                path.display()
            ),
            PlotError::NoMatchingFile { .. } => {
                "expected a file named like ldpc_ber_N1024_wc3_wr6_iter50_data.csv".to_string()
            }
            PlotError::SchemaError { column, .. } => format!(
                "regenerate the CSV; the header row must contain the {} column",
                column
            ),
            PlotError::ParseError(_) => {
                "check the CSV for truncated rows or non-numeric cells".to_string()
            }
            PlotError::DivisionByZero => {
                "the wr field in the filename is 0; rename the file with the real row weight"
                    .to_string()
            }
            PlotError::MetadataError(_) => {
                "the filename fields must be plain unsigned decimal integers".to_string()
            }
            PlotError::IoError(_) => {
                "check filesystem permissions for the results and images directories".to_string()
            }
            PlotError::RenderError { .. } => {
                "make sure a serif system font is installed and the images directory is writable"
                    .to_string()
            }
            PlotError::InvalidConfigValueError { field, .. } => {
                format!("fix the {} configuration value and re-run", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
