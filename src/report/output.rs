// src/report/output.rs
// =============================================================================
// Writes reports to disk.
//
// Two formats:
// - JSON: any Serialize value, pretty-printed with 4-space indentation
// - Text: a titled, underlined list of snippets for a single article
//
//   Citations Needed In Wiki Article: https://en.wikipedia.org/wiki/X
//   =================================================================
//   [1] Some claim.[citation needed]
//
//   [2] Another claim.[citation needed]
//
// Files are created or truncated; parent directories must already exist.
// =============================================================================

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::error::Result;

/// Prefix of the title line in text reports.
pub const TEXT_REPORT_TITLE: &str = "Citations Needed In Wiki Article: ";

// Serializes with 4-space indentation (serde_json's default pretty printer
// uses 2)
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = to_json_pretty(value)?;
    fs::write(path, json)?;
    info!("Saved JSON report to {}", path.display());
    Ok(())
}

pub fn render_text_report(url: &str, snippets: &[String]) -> String {
    let title = format!("{}{}", TEXT_REPORT_TITLE, url);
    let underline = "=".repeat(title.chars().count());

    let mut text = format!("{}\n{}\n", title, underline);
    for snippet in snippets {
        text.push_str(snippet);
    }
    text
}

pub fn save_text_report(url: &str, snippets: &[String], path: &Path) -> Result<()> {
    fs::write(path, render_text_report(url, snippets))?;
    info!("Saved text report to {}", path.display());
    Ok(())
}
