//! File discovery for header scans.
//!
//! Uses the `ignore` crate for directory walking and `globset` for the
//! extension filter.
//!
//! ## Walking modes
//!
//! - `Raw`: disables all standard filters. Walks every file, including hidden
//!   files and ignored directories. The default.
//! - `RespectIgnore`: honours `.gitignore` (with or without a git repository),
//!   a custom `.hsymignore`, skips hidden entries and the `.hsym/` directory.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::ScanError;

/// Name of the project-local ignore file read in [`WalkMode::RespectIgnore`].
pub const IGNORE_FILENAME: &str = ".hsymignore";

/// Walking mode for the file walker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// No filters: every file under the root is a candidate.
    #[default]
    Raw,
    /// Honour ignore files and skip hidden entries.
    RespectIgnore,
}

/// Matches file names against a set of `*.{ext}` globs.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    set: GlobSet,
}

impl ExtensionFilter {
    /// Build a filter from extensions given with or without a leading dot.
    ///
    /// # Errors
    ///
    /// [`ScanError::NoExtensions`] when every extension is blank, and
    /// [`ScanError::Extension`] when one does not form a valid glob.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Result<Self, ScanError> {
        let mut builder = GlobSetBuilder::new();
        let mut added = 0;
        for extension in extensions {
            let ext = extension.as_ref().trim_start_matches('.');
            if ext.is_empty() {
                continue;
            }
            let glob = Glob::new(&format!("*.{ext}")).map_err(|source| ScanError::Extension {
                extension: ext.to_string(),
                source,
            })?;
            builder.add(glob);
            added += 1;
        }
        if added == 0 {
            return Err(ScanError::NoExtensions);
        }
        let set = builder.build().map_err(|source| ScanError::Extension {
            extension: String::new(),
            source,
        })?;
        Ok(Self { set })
    }

    /// Whether the file name of `path` carries one of the extensions.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.set.is_match(name))
    }
}

/// Build a walker over `root` that yields directories and matching files.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use hsym_scan::walk::{build_walker, ExtensionFilter, WalkMode};
///
/// let filter = ExtensionFilter::new(&["h"]).expect("valid extension");
/// for entry in build_walker(Path::new("Sources"), WalkMode::Raw, &filter).flatten() {
///     println!("{}", entry.path().display());
/// }
/// ```
#[must_use]
pub fn build_walker(root: &Path, mode: WalkMode, filter: &ExtensionFilter) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);

    match mode {
        WalkMode::Raw => {
            builder.standard_filters(false);
            builder.hidden(false);
        }
        WalkMode::RespectIgnore => {
            builder.require_git(false);
            builder.add_custom_ignore_filename(IGNORE_FILENAME);
        }
    }

    let filter = filter.clone();
    builder.filter_entry(move |entry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return !(mode == WalkMode::RespectIgnore && entry.file_name() == ".hsym");
        }
        filter.matches(entry.path())
    });

    builder.build()
}

/// Every matching file under `roots`: absolute, sorted and de-duplicated.
///
/// A root that is itself a file is kept when its extension matches.
/// Walker errors on individual entries are logged and skipped.
///
/// # Errors
///
/// [`ScanError::MissingRoot`] when a root does not exist, or an extension error
/// from [`ExtensionFilter::new`].
pub fn collect_files<S: AsRef<str>>(
    roots: &[PathBuf],
    mode: WalkMode,
    extensions: &[S],
) -> Result<Vec<PathBuf>, ScanError> {
    let filter = ExtensionFilter::new(extensions)?;
    let mut files = Vec::new();

    for root in roots {
        if !root.exists() {
            return Err(ScanError::MissingRoot(root.clone()));
        }
        let root = std::path::absolute(root).map_err(|source| ScanError::Read {
            path: root.clone(),
            source,
        })?;

        if root.is_file() {
            if filter.matches(&root) {
                files.push(root);
            }
            continue;
        }

        for result in build_walker(&root, mode, &filter) {
            let entry = match result {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(root = %root.display(), error = %e, "walker error");
                    continue;
                }
            };
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!(files = files.len(), ?mode, "collected files");
    Ok(files)
}
