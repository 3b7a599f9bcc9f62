//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; the route table dispatches to the manifest builder.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_generate_summary_json, format_generate_summary_text, format_hash_results_json,
    format_hash_results_text, HashLine,
};
pub use route::{CommandOutput, RunContext};
