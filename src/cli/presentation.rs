//! CLI presentation: text and json formatters per command.

mod generate;
mod hash;

pub use generate::{format_generate_summary_json, format_generate_summary_text};
pub use hash::{format_hash_results_json, format_hash_results_text, HashLine};
