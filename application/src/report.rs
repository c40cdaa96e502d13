//! Rendering of a valuation report.

use service::query::report::valuation::Output;

/// Renders the provided valuation [`Output`] as JSON.
///
/// # Errors
///
/// If the [`Output`] cannot be serialized.
pub fn render(
    output: &Output,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    }
}
