//! Integration tests for directory comparison

mod comparison_properties;
mod path_keys;
mod read_failures;
mod scenarios;
