mod multiple;
mod pattern;

pub use multiple::{filter_multiple, SearchTerm};
pub use pattern::{compile_pattern, filter_regex};
