pub mod search;

pub use search::format_search;
