//! Query-side processing: request types, synonym-aware query enhancement,
//! and entity filter construction.

mod enhance;
mod filter;
mod types;


pub use enhance::SynonymTable;
pub use filter::EntityFilter;
pub use types::{QueryIntent, SearchRequest, SearchStrategy};
