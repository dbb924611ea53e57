pub mod chain;
pub mod error;
pub mod filter;
pub mod format;
pub mod value;

pub use chain::{parse_chain, ChainParseError, FilterChain, FilterName, FilterStage};
pub use error::FilterError;
pub use filter::{filter_multiple, filter_regex};
pub use format::*;
pub use value::FilterValue;
