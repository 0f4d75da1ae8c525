//! Time command implementation.

use crate::cli::TimeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use planner_extractor::parse_time;

/// Execute the time command.
pub fn execute_time(args: TimeArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", render_time(args, formatter)?);
    Ok(())
}

/// Normalize the time and render it without printing.
pub fn render_time(args: TimeArgs, formatter: &Formatter) -> Result<String> {
    let text = args.text.join(" ");
    let time = parse_time(&text)
        .ok_or_else(|| CliError::InvalidInput(format!("no time found in '{}'", text)))?;
    formatter.format_time(&time)
}
