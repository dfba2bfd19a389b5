//! Parser for the flat markdown subset.

mod block;
mod inline;
mod lexer;

pub use block::BlockScanner;
pub use inline::parse_runs;
