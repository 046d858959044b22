//! Output rendering for the command-line front end
//!
//! Turns lookup results into text or JSON, and annotates addresses found in
//! piped input.

pub mod formatter;
pub mod matcher;

pub use formatter::{annotate_line, format_fields, format_json, format_result};
