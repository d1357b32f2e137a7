//! Scan error types for hsym-scan.

use std::path::{Path, PathBuf};

/// Errors from walking a tree or scanning a single file.
///
/// `Read` and `Decode` are per-file: the dispatcher turns them into
/// [`ScanFailure`](hsym_core::ScanFailure) entries instead of aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A root passed on the command line does not exist.
    #[error("no such file or directory: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("read failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An extension could not be turned into a glob.
    #[error("invalid extension {extension:?}: {source}")]
    Extension {
        extension: String,
        #[source]
        source: globset::Error,
    },

    #[error("no usable extension given")]
    NoExtensions,

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("thread pool error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

impl ScanError {
    /// The file a per-file error belongs to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::MissingRoot(path) | Self::Read { path, .. } | Self::Decode { path, .. } => {
                Some(path)
            }
            Self::Extension { .. } | Self::NoExtensions | Self::NoWorkers | Self::Pool(_) => None,
        }
    }
}
