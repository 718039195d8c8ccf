//! Directory trees
//!
//! Walking a root, turning what was found into a relative-path keyed
//! mapping, and the path normalization both sides share.

pub mod mapper;
pub mod path;
pub mod walker;

pub use mapper::build_map;
pub use walker::{walk, WalkOptions, Walker};
