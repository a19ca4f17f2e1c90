use std::fmt::{self, Write};

use strum::{Display, EnumString};
use thiserror::Error;

use crate::monitor::CodeEventResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not render table")]
    Table(#[from] fmt::Error),
    #[error("could not render JSON")]
    Json(#[from] serde_json::Error),
}

pub fn render(result: &CodeEventResult, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(render_table(result)?),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(result)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_table(result: &CodeEventResult) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if !result.is_found() {
        out.push_str("No code events found\n");
        writeln!(out, "Events checked: {}", result.events_checked())?;
        if let Some(error) = result.error() {
            writeln!(out, "Error: {error}")?;
        }
        return Ok(out);
    }

    out.push_str("Code event found\n");
    writeln!(out, "Events checked: {}", result.events_checked())?;

    if let Some(description) = result.event_description() {
        writeln!(out, "{description}")?;
    }

    match result.submitted_before() {
        Some(true) => out.push_str("Status: submitted before deadline\n"),
        Some(false) => out.push_str("Status: submitted after deadline\n"),
        None => {}
    }

    if let Some(diff) = result.time_difference() {
        writeln!(out, "Time difference: {diff}")?;
    }

    if let Some(event) = result.last_code_event() {
        let mut rows = vec![
            ("Event ID", event.id.clone()),
            ("Event Type", event.event_type.clone()),
            ("Created At", event.created_at.to_rfc3339()),
            ("Actor", event.actor.clone()),
            ("Repository", event.repository.clone()),
        ];
        if let Some(branch) = event.ref_name() {
            rows.push(("Branch", branch));
        }
        for commit in event.commits() {
            let short_sha: String = commit.sha.chars().take(7).collect();
            let summary = commit.message.lines().next().unwrap_or_default();
            rows.push(("Commit", format!("{short_sha} {summary} ({})", commit.author)));
        }

        let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        out.push_str("\nLast Code Event Details:\n");
        writeln!(out, "  {:width$}  Value", "Field")?;
        for (field, value) in rows {
            writeln!(out, "  {field:width$}  {value}")?;
        }
    }

    Ok(out)
}
