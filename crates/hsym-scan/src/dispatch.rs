//! Bounded parallel dispatch: one extraction task per file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use hsym_core::{FileRecord, ScanFailure, ScanReport, ScanResult};
use rayon::prelude::*;

use crate::error::ScanError;

/// Runs [`scan_file`] over a file list on a dedicated thread pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatcher {
    workers: usize,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            workers: Self::DEFAULT_WORKERS,
        }
    }
}

impl Dispatcher {
    pub const DEFAULT_WORKERS: usize = 4;

    /// # Errors
    ///
    /// [`ScanError::NoWorkers`] when `workers` is zero.
    pub fn new(workers: usize) -> Result<Self, ScanError> {
        if workers == 0 {
            return Err(ScanError::NoWorkers);
        }
        Ok(Self { workers })
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Scan every file. Equivalent to [`Dispatcher::run_with_progress`] with a no-op callback.
    ///
    /// # Errors
    ///
    /// Only when the thread pool cannot be built. Per-file errors end up in
    /// [`ScanReport::failures`].
    pub fn run(&self, files: &[PathBuf]) -> Result<ScanReport, ScanError> {
        self.run_with_progress(files, |_| {})
    }

    /// Scan every file, calling `on_done` once per finished file from the worker
    /// that handled it.
    ///
    /// A failing file never stops the others; every failure is listed in the
    /// returned report.
    ///
    /// # Errors
    ///
    /// Only when the thread pool cannot be built.
    pub fn run_with_progress<F>(&self, files: &[PathBuf], on_done: F) -> Result<ScanReport, ScanError>
    where
        F: Fn(&Path) + Sync,
    {
        let start = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("hsym-worker-{i}"))
            .build()?;

        let outcomes: Vec<Result<FileRecord, ScanFailure>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let outcome = scan_file(path).map_err(|e| {
                        tracing::warn!(path = %path.display(), error = %e, "file failed");
                        ScanFailure {
                            path: path.clone(),
                            error: e.to_string(),
                        }
                    });
                    on_done(path);
                    outcome
                })
                .collect()
        });

        let mut result = ScanResult::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(record) => result.insert(record),
                Err(failure) => failures.push(failure),
            }
        }

        let report = ScanReport::new(result, failures, start.elapsed());
        tracing::info!(
            files = report.stats.files_scanned,
            failed = report.stats.files_failed,
            symbols = report.stats.symbols,
            elapsed_ms = report.stats.elapsed_ms,
            workers = self.workers,
            "scan complete"
        );
        Ok(report)
    }
}

/// Read one file and extract its tagged symbol union.
///
/// # Errors
///
/// [`ScanError::Read`] when the file cannot be read and [`ScanError::Decode`]
/// when it is not valid UTF-8.
pub fn scan_file(path: &Path) -> Result<FileRecord, ScanError> {
    let _span = tracing::debug_span!("scan_file", path = %path.display()).entered();

    let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let symbols = hsym_parser::extract_tagged(&text);
    tracing::debug!(symbols = symbols.len(), "extracted");
    Ok(FileRecord {
        path: path.to_path_buf(),
        symbols,
    })
}
