//! # hsym-core
//!
//! Types shared by every hsym crate.
//!
//! - [`MatcherKind`] and [`Symbol`]: a candidate name and the category matcher
//!   that produced it
//! - [`FileRecord`], [`ScanResult`], [`ScanFailure`] and [`ScanReport`]: the
//!   outcome of scanning a tree of headers
//! - [`diagnostics`]: the heuristic check pass over a finished result

pub mod diagnostics;
pub mod report;
pub mod symbol;

pub use diagnostics::{CheckRules, Problem, ProblemReason, check};
pub use report::{FileRecord, ScanFailure, ScanReport, ScanResult, ScanStats};
pub use symbol::{MatcherKind, Symbol};
