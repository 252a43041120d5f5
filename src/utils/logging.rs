// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored CLI formatting
// reference: https://docs.rs/tracing-subscriber

use crate::models::MatchType;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(level);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

/// Match badge rendered next to each result row.
pub fn format_match_badge(match_type: MatchType) -> String {
    let label = format!("[{}]", match_type.as_str());
    match match_type {
        MatchType::Exact => label.green().bold().to_string(),
        MatchType::Tag => label.cyan().to_string(),
        MatchType::Description => label.blue().to_string(),
        MatchType::Fuzzy => label.yellow().to_string(),
    }
}
