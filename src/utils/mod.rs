// Query string helpers
pub mod query_string;

// Display helpers
pub mod number_format;

// Re-export all utilities for convenient access
pub use query_string::build_query_string;
pub use number_format::{format_cost, format_number, MISSING};
