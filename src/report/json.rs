use crate::engine::MatchOutcome;

/// Serializes the outcome as pretty-printed JSON. Amounts are written as strings.
pub fn render_json(outcome: &MatchOutcome<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
