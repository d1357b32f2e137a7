//! Scan results, per-file failures and run statistics.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::symbol::{MatcherKind, Symbol};

/// Symbols extracted from one file, in aggregation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub symbols: Vec<Symbol>,
}

/// Every successfully scanned file, ordered by path.
///
/// Serializes as a map from path to symbol list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    files: BTreeMap<PathBuf, Vec<Symbol>>,
}

impl ScanResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file's symbols. A second record for the same path replaces the first.
    pub fn insert(&mut self, record: FileRecord) {
        self.files.insert(record.path, record.symbols);
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total symbols across all files, duplicates included.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&[Symbol]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[Symbol])> {
        self.files
            .iter()
            .map(|(path, symbols)| (path.as_path(), symbols.as_slice()))
    }

    /// Path to symbol names, dropping the producing category.
    #[must_use]
    pub fn names(&self) -> BTreeMap<&Path, Vec<&str>> {
        self.iter()
            .map(|(path, symbols)| (path, symbols.iter().map(|s| s.name.as_str()).collect()))
            .collect()
    }

    /// Path to category to symbol names. Categories without symbols are omitted.
    #[must_use]
    pub fn by_kind(&self) -> BTreeMap<&Path, BTreeMap<MatcherKind, Vec<&str>>> {
        self.iter()
            .map(|(path, symbols)| {
                let mut kinds: BTreeMap<MatcherKind, Vec<&str>> = BTreeMap::new();
                for symbol in symbols {
                    kinds.entry(symbol.kind).or_default().push(symbol.name.as_str());
                }
                (path, kinds)
            })
            .collect()
    }
}

impl FromIterator<FileRecord> for ScanResult {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl Extend<FileRecord> for ScanResult {
    fn extend<I: IntoIterator<Item = FileRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

/// A file that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: String,
}

impl std::fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files attempted, failed ones included.
    pub files_scanned: usize,
    pub files_failed: usize,
    pub symbols: usize,
    pub elapsed_ms: u64,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub result: ScanResult,
    pub failures: Vec<ScanFailure>,
    pub stats: ScanStats,
}

impl ScanReport {
    /// Assemble a report, deriving its statistics. Failures are sorted by path.
    #[must_use]
    pub fn new(result: ScanResult, mut failures: Vec<ScanFailure>, elapsed: Duration) -> Self {
        failures.sort_by(|a, b| a.path.cmp(&b.path));
        let stats = ScanStats {
            files_scanned: result.len() + failures.len(),
            files_failed: failures.len(),
            symbols: result.symbol_count(),
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        };
        Self {
            result,
            failures,
            stats,
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn symbol(name: &str, kind: MatcherKind) -> Symbol {
        Symbol {
            name: name.to_string(),
            kind,
        }
    }

    fn record(path: &str, symbols: Vec<Symbol>) -> FileRecord {
        FileRecord {
            path: PathBuf::from(path),
            symbols,
        }
    }

    fn sample() -> ScanResult {
        [
            record(
                "/src/b.h",
                vec![
                    symbol("kB", MatcherKind::Define),
                    symbol("BFoo", MatcherKind::Function),
                    symbol("kB2", MatcherKind::Define),
                ],
            ),
            record("/src/a.h", vec![symbol("A", MatcherKind::Interface)]),
            record("/src/empty.h", vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn result_is_ordered_by_path() {
        let result = sample();
        let paths: Vec<_> = result.iter().map(|(p, _)| p.to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/src/a.h"),
                PathBuf::from("/src/b.h"),
                PathBuf::from("/src/empty.h"),
            ]
        );
        assert_eq!(result.len(), 3);
        assert_eq!(result.symbol_count(), 4);
    }

    #[test]
    fn reinserting_a_path_replaces_it() {
        let mut result = sample();
        result.insert(record("/src/a.h", vec![]));
        assert_eq!(result.get(Path::new("/src/a.h")), Some(&[][..]));
        assert_eq!(result.symbol_count(), 3);
    }

    #[test]
    fn names_view_keeps_symbol_order() {
        let result = sample();
        let names = result.names();
        assert_eq!(names[Path::new("/src/b.h")], vec!["kB", "BFoo", "kB2"]);
        assert!(names[Path::new("/src/empty.h")].is_empty());
    }

    #[test]
    fn by_kind_groups_within_a_file() {
        let result = sample();
        let grouped = result.by_kind();
        let b = &grouped[Path::new("/src/b.h")];
        assert_eq!(b[&MatcherKind::Define], vec!["kB", "kB2"]);
        assert_eq!(b[&MatcherKind::Function], vec!["BFoo"]);
        assert!(!b.contains_key(&MatcherKind::Enum));
    }

    #[test]
    fn result_serializes_as_a_path_map() {
        let json = serde_json::to_value(sample()).expect("serializes");
        assert_eq!(json["/src/a.h"][0]["name"], "A");
        assert_eq!(json["/src/a.h"][0]["kind"], "interface");
    }

    #[test]
    fn report_derives_stats_and_sorts_failures() {
        let failures = vec![
            ScanFailure {
                path: PathBuf::from("/src/z.h"),
                error: "invalid UTF-8".to_string(),
            },
            ScanFailure {
                path: PathBuf::from("/src/c.h"),
                error: "permission denied".to_string(),
            },
        ];
        let report = ScanReport::new(sample(), failures, Duration::from_millis(42));

        assert!(report.has_failures());
        assert_eq!(
            report.stats,
            ScanStats {
                files_scanned: 5,
                files_failed: 2,
                symbols: 4,
                elapsed_ms: 42,
            }
        );
        assert_eq!(report.failures[0].to_string(), "/src/c.h: permission denied");
    }
}
