// src/reporting/json.rs
//! Machine-readable rendering of a full run.

use crate::rank::RankReport;
use anyhow::Result;

/// Serializes the whole report (config, matrix, trace, final vector,
/// ranking) as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &RankReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
