// crates/verdict-cli/src/output.rs
//
// Output formatting utilities for the Verdict CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use verdict_slashing::{Params, Slash};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data)
        .unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

#[derive(Debug, Tabled)]
pub struct SlashRow {
    #[tabled(rename = "ID")]
    pub id: u64,
    #[tabled(rename = "Argument")]
    pub argument_id: u64,
    #[tabled(rename = "Reason")]
    pub reason: String,
    #[tabled(rename = "Detail")]
    pub detail: String,
    #[tabled(rename = "Creator")]
    pub creator: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<&Slash> for SlashRow {
    fn from(slash: &Slash) -> Self {
        Self {
            id: slash.id,
            argument_id: slash.argument_id,
            reason: format!("{:?}", slash.reason),
            detail: truncate(&slash.detailed_reason, 40),
            creator: short_address(&slash.creator.to_hex()),
            created: slash.created_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Tabled)]
pub struct ParamRow {
    #[tabled(rename = "Param")]
    pub name: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub fn param_rows(params: &Params) -> Vec<ParamRow> {
    let admins = if params.slash_admins.is_empty() {
        "(none)".to_string()
    } else {
        params
            .slash_admins
            .iter()
            .map(|a| a.to_hex())
            .collect::<Vec<_>>()
            .join("\n")
    };
    vec![
        ParamRow {
            name: "min_slash_count",
            value: params.min_slash_count.to_string(),
        },
        ParamRow {
            name: "max_detailed_reason_length",
            value: params.max_detailed_reason_length.to_string(),
        },
        ParamRow {
            name: "slash_min_stake",
            value: params.slash_min_stake.to_string(),
        },
        ParamRow {
            name: "slash_magnitude",
            value: params.slash_magnitude.to_string(),
        },
        ParamRow {
            name: "curator_share",
            value: params.curator_share.to_string(),
        },
        ParamRow {
            name: "slash_admins",
            value: admins,
        },
    ]
}

/// Render a list of slashes in the requested format.
pub fn render_slashes(slashes: &[Slash], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(slashes),
        OutputFormat::Table if slashes.is_empty() => "No slashes found.".to_string(),
        OutputFormat::Table => {
            let rows: Vec<SlashRow> = slashes.iter().map(SlashRow::from).collect();
            format_table(&rows)
        }
    }
}

/// Truncate a string to at most `max_len` characters, appending "..." if
/// truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let head: String = s.chars().take(max_len).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

fn short_address(hex: &str) -> String {
    match (hex.get(..8), hex.get(hex.len().saturating_sub(6)..)) {
        (Some(head), Some(tail)) if hex.len() > 14 => format!("{}..{}", head, tail),
        _ => hex.to_string(),
    }
}
