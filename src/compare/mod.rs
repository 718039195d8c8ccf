//! Comparison stages
//!
//! Content equality for one pair of files, classification of two mappings
//! into the four difference sequences, and the summary counts.

pub mod aggregate;
pub mod content;
pub mod reconcile;

pub use aggregate::aggregate;
pub use content::{contents_differ, ContentOptions};
pub use reconcile::reconcile;
