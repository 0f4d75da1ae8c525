//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use planner_domain::{Clock, FixedClock, SystemClock};
use planner_extractor::{ExtractionRequest, ExtractorConfig, TaskExtractor};
use tracing::debug;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: ExtractorConfig, formatter: &Formatter) -> Result<()> {
    println!("{}", render_parse(args, config, formatter)?);
    Ok(())
}

/// Run the extraction and render it without printing.
pub fn render_parse(args: ParseArgs, config: ExtractorConfig, formatter: &Formatter) -> Result<String> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("task text must not be empty".to_string()));
    }

    let today = args.today.unwrap_or_else(|| SystemClock.today());
    debug!("Resolving relative dates against {}", today);

    let extractor = TaskExtractor::new(config)?.with_clock(FixedClock::new(today));

    let mut request = ExtractionRequest::new(text);
    if let Some(list_id) = args.list_id {
        request = request.with_list_id(list_id);
    }

    let result = extractor.extract_request(request);
    formatter.format_extraction(&result)
}
