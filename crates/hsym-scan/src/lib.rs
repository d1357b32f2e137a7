//! # hsym-scan
//!
//! Walks header trees and extracts symbols from every file in parallel.
//!
//! File discovery lives in [`walk`]: `ignore` for the tree, `globset` for the
//! extension filter. [`Dispatcher`] runs one extraction task per file on a
//! bounded `rayon` pool and isolates per-file failures.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use hsym_scan::{scan, ScanOptions};
//!
//! let report = scan(&[PathBuf::from("Sources")], &ScanOptions::default()).expect("scan");
//! for (path, names) in report.result.names() {
//!     println!("{}: {names:?}", path.display());
//! }
//! ```

pub mod dispatch;
pub mod error;
pub mod walk;

use std::path::{Path, PathBuf};

pub use dispatch::{Dispatcher, scan_file};
pub use error::ScanError;
pub use walk::{ExtensionFilter, WalkMode, build_walker, collect_files};

use hsym_core::ScanReport;

/// Options for a whole-tree scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Extensions to scan, with or without a leading dot.
    pub extensions: Vec<String>,
    pub workers: usize,
    pub mode: WalkMode,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["h".to_string()],
            workers: Dispatcher::DEFAULT_WORKERS,
            mode: WalkMode::Raw,
        }
    }
}

/// Collect the files under `roots` and scan them.
///
/// # Errors
///
/// Returns [`ScanError`] for a missing root, an unusable extension list or a
/// zero worker count. Unreadable files do not fail the call; they are listed in
/// [`ScanReport::failures`].
pub fn scan(roots: &[PathBuf], opts: &ScanOptions) -> Result<ScanReport, ScanError> {
    scan_with_progress(roots, opts, |_| {})
}

/// [`scan`] with a callback invoked once per finished file.
///
/// # Errors
///
/// Same as [`scan`].
pub fn scan_with_progress<F>(
    roots: &[PathBuf],
    opts: &ScanOptions,
    on_done: F,
) -> Result<ScanReport, ScanError>
where
    F: Fn(&Path) + Sync,
{
    let dispatcher = Dispatcher::new(opts.workers)?;
    let files = collect_files(roots, opts.mode, &opts.extensions)?;
    dispatcher.run_with_progress(&files, on_done)
}
