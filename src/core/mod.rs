// Core algorithm exports
pub mod filters;
pub mod format;
pub mod matcher;

pub use filters::first_failed_condition;
pub use format::{format_catalog_error, format_matches, format_scheme, NO_MATCH_TEXT};
pub use matcher::{Matcher, MatchResult};
