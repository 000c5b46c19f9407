use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while applying a patch to the site files
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("File is not valid UTF-8: {}", .path.display())]
    Encoding { path: PathBuf },

    /// The confirmation lines could not be printed
    #[error("Failed to print progress: {source}")]
    Output { source: std::io::Error },

    #[error("Unknown patch: {name}")]
    UnknownPatch { name: String },
}

impl PatchError {
    /// Classify a read failure, keeping invalid UTF-8 apart from plain IO errors
    pub fn read_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::InvalidData {
            Self::Encoding { path }
        } else {
            Self::Read { source: err, path }
        }
    }

    pub fn write_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write {
            source: err,
            path: path.into(),
        }
    }

    pub fn output_error(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }

    pub fn unknown_patch(name: impl Into<String>) -> Self {
        Self::UnknownPatch { name: name.into() }
    }
}

pub type PatchResult<T> = Result<T, PatchError>;
