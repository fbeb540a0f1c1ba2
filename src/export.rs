// SPDX-License-Identifier: PMPL-1.0-or-later

//! Export: writing per-locale JSON resource files
//!
//! Walks the corpus in authoring order and writes each locale's catalog to
//! `<locales_dir>/<code>/landing.json`, pretty-printed with 2-space indent
//! and literal UTF-8. A locale that cannot be written is recorded and the
//! run moves on; the report carries one outcome row per locale so CI can
//! tell a clean run from a partial one.

use crate::catalog::{Corpus, MessageCatalog};
use crate::locale::LocaleCode;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Leaf filename written under every locale directory.
pub const RESOURCE_FILE: &str = "landing.json";

/// Configuration for one export run
pub struct ExportConfig {
    /// Base directory that holds one subdirectory per locale
    pub locales_dir: PathBuf,
    /// Restrict the run to these locale codes (empty = whole corpus)
    pub locales: Vec<String>,
    /// Create missing per-locale directories instead of failing those locales
    pub create_dirs: bool,
    /// Output path for the JSON run report (handled by caller)
    pub report: Option<PathBuf>,
    /// Suppress per-locale confirmation lines
    pub quiet: bool,
}

/// Outcome of a single locale's write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleOutcome {
    pub locale: String,
    pub path: PathBuf,
    pub bytes_written: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete export run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub created_at: String,
    pub locales_dir: PathBuf,
    pub locales_total: usize,
    pub locales_written: usize,
    pub locales_failed: usize,
    pub outcomes: Vec<LocaleOutcome>,
}

impl ExportReport {
    /// True when every locale in the run was written.
    pub fn is_complete(&self) -> bool {
        self.locales_failed == 0
    }
}

/// Destination of one locale's resource file.
pub fn resource_path(locales_dir: &Path, code: &LocaleCode) -> PathBuf {
    locales_dir.join(code.as_str()).join(RESOURCE_FILE)
}

/// Serialize one catalog exactly as consumers expect it on disk.
///
/// 2-space indent, keys in catalog order, non-ASCII written literally
/// (serde_json never emits `\uXXXX` for characters that are valid UTF-8),
/// no trailing newline. Re-exporting an unchanged catalog reproduces the
/// file byte for byte.
pub fn render(catalog: &MessageCatalog) -> Result<String> {
    let body = serde_json::to_string_pretty(catalog)?;
    Ok(body)
}

/// Run the export across every locale in the corpus.
///
/// Locale order is the corpus authoring order. A serialization failure
/// aborts the whole run; a failed *write* only fails that locale, gets
/// recorded in its outcome row, and the rest of the run continues.
pub fn run(corpus: &Corpus, config: &ExportConfig) -> Result<ExportReport> {
    let filtered;
    let selected = if config.locales.is_empty() {
        corpus
    } else {
        filtered = corpus.select(&config.locales)?;
        &filtered
    };

    let mut outcomes: Vec<LocaleOutcome> = Vec::new();

    for (code, catalog) in selected.iter() {
        let path = resource_path(&config.locales_dir, code);
        let body = render(catalog)
            .with_context(|| format!("serializing catalog for locale '{}'", code))?;

        match write_resource(&path, &body, config.create_dirs) {
            Ok(()) => {
                if !config.quiet {
                    println!("{} {}/{}", "Created".green(), code, RESOURCE_FILE);
                }
                outcomes.push(LocaleOutcome {
                    locale: code.to_string(),
                    path,
                    bytes_written: body.len(),
                    error: None,
                });
            }
            Err(e) => {
                outcomes.push(LocaleOutcome {
                    locale: code.to_string(),
                    path,
                    bytes_written: 0,
                    error: Some(format!("{:#}", e)),
                });
            }
        }
    }

    let locales_written = outcomes.iter().filter(|o| o.error.is_none()).count();
    let locales_failed = outcomes.len() - locales_written;

    Ok(ExportReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        locales_dir: config.locales_dir.clone(),
        locales_total: outcomes.len(),
        locales_written,
        locales_failed,
        outcomes,
    })
}

/// Write one rendered catalog, truncating any previous file.
///
/// `fs::write` opens with truncate, so a stale resource is replaced whole.
/// When the open itself fails (missing directory under `--require-dirs`,
/// permissions), no partial file is left behind.
fn write_resource(path: &Path, body: &str, create_dirs: bool) -> Result<()> {
    if create_dirs {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Print the run summary to the terminal
pub fn print_summary(report: &ExportReport) {
    println!();
    if report.is_complete() {
        println!(
            "{} Exported {} locale(s) to {}",
            "Done.".green().bold(),
            report.locales_written,
            report.locales_dir.display()
        );
        return;
    }

    println!(
        "{} Exported {} of {} locale(s) to {}",
        "Incomplete.".red().bold(),
        report.locales_written,
        report.locales_total,
        report.locales_dir.display()
    );
    for outcome in &report.outcomes {
        if let Some(err) = &outcome.error {
            println!("  {:<8} ERROR: {}", outcome.locale, err);
        }
    }
}

/// Write the run report as JSON
pub fn write_report(report: &ExportReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
