//! dircompare: recursive directory tree comparison
//!
//! Walks two roots, keys every regular file by its platform-neutral relative
//! path, and classifies each path as present only in the first tree, only in
//! the second, in both with different content, or in both with identical
//! content. Meant for verifying backups and synchronized copies.
//!
//! ```no_run
//! use dircompare::{compare_directories, CompareOptions, TracingSink};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), dircompare::CompareError> {
//! let result = compare_directories(
//!     Path::new("/data/original"),
//!     Path::new("/backup/original"),
//!     &CompareOptions::default(),
//!     &TracingSink,
//! )?;
//! println!("{} difference(s)", result.counts.total_differences);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod compare;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use engine::{compare_directories, compare_directories_collecting, CompareOptions};
pub use error::CompareError;
pub use types::{ComparisonResult, Counts, DifferenceSet, FileEntry, PathMapping};
