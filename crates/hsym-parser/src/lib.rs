//! # hsym-parser
//!
//! Lexical symbol extraction for Objective-C and C headers.
//!
//! Eight category matchers (constants, `#define` macros, enums, structs,
//! typedefs, free functions, class interfaces, protocols) each recognize one
//! declaration shape with regular expressions and named exclusion rules. No
//! grammar is built, so results are candidates rather than a faithful symbol
//! table.
//!
//! Every matcher is a pure function of its input: raw text is scrubbed of
//! comments, then searched. Matchers never fail; no match is an empty list.
//!
//! # Usage
//!
//! ```
//! use hsym_parser::{MatcherKind, extract, extract_all};
//!
//! let header = "typedef NS_ENUM(NSInteger, E) { A = 0, B = 1 };";
//! assert_eq!(extract(MatcherKind::Enum, header), vec!["E", "A", "B"]);
//! assert_eq!(extract_all(header), vec!["E", "A", "B"]);
//! ```

mod aggregate;
pub mod exclusion;
pub mod matchers;
pub mod scrub;

pub use aggregate::{extract, extract_all, extract_tagged};
pub use exclusion::Exclusion;
pub use hsym_core::{MatcherKind, Symbol};
pub use matchers::{Matcher, matcher};
pub use scrub::{Scrub, scrub_comments, scrub_preprocessor};
