mod json;
mod text;

use clap::ValueEnum;

use crate::engine::MatchOutcome;

pub use json::render_json;
pub use text::TextReport;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum ReportFormat {
    /// Four fixed sections for people.
    #[default]
    Text,
    /// The outcome as a JSON document.
    Json
}

/// Renders the outcome in the requested format.
pub fn render(outcome: &MatchOutcome<'_>, format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Text => Ok(TextReport(outcome).to_string()),
        ReportFormat::Json => Ok(render_json(outcome)?)
    }
}
