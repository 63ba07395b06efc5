// src/report.rs

//! Renders an `Analysis` for the command line driver.

use std::fmt::{self, Write as _};

use crate::config::OutputFormat;
use crate::lexer::Analysis;

/// Renders `analysis` in the requested format. The result ends with a newline.
pub fn render(analysis: &Analysis, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(analysis)?),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(analysis)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// A verdict line followed by one `token<TAB>category` line per token.
pub fn render_text(analysis: &Analysis) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match analysis.error_at() {
        None => out.push_str("valid\n"),
        Some(rest) => writeln!(
            out,
            "invalid: stopped in state {} at {:?}",
            analysis.final_state(),
            rest
        )?,
    }
    for (token, category) in analysis.classified() {
        writeln!(out, "{}\t{}", token.text(), category)?;
    }
    Ok(out)
}
