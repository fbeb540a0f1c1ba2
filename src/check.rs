// SPDX-License-Identifier: PMPL-1.0-or-later

//! Schema parity check across the corpus.
//!
//! The exporter itself never validates catalog contents — a uniform key
//! set is a contract with downstream consumers, not a write-time
//! precondition. This pass makes that contract checkable before content
//! ships: the first locale in the corpus is taken as the reference schema
//! and every locale (reference included) is audited against it, plus a few
//! leaf-level checks that catch blank strings and empty variant sets.

use crate::catalog::{Corpus, MessageCatalog, MessageEntry};
use anyhow::{anyhow, Result};
use colored::*;

/// Parity findings for one locale. Empty findings means the locale
/// matches the reference schema.
#[derive(Debug, Clone)]
pub struct LocaleParity {
    pub locale: String,
    pub findings: Vec<String>,
}

/// Outcome of a parity run across the whole corpus.
#[derive(Debug, Clone)]
pub struct ParityReport {
    /// Locale whose catalog served as the reference schema.
    pub reference: String,
    pub locales_checked: usize,
    pub rows: Vec<LocaleParity>,
}

impl ParityReport {
    pub fn is_clean(&self) -> bool {
        self.rows.iter().all(|row| row.findings.is_empty())
    }

    pub fn finding_count(&self) -> usize {
        self.rows.iter().map(|row| row.findings.len()).sum()
    }
}

/// Audit every locale against the first locale's schema.
///
/// Errors only when the corpus is empty; schema drift is reported through
/// [`ParityReport`], not as an `Err`, so the caller decides how hard to
/// fail.
pub fn run(corpus: &Corpus) -> Result<ParityReport> {
    let (reference_code, reference) = corpus
        .first()
        .ok_or_else(|| anyhow!("catalog is empty, nothing to check"))?;

    let mut rows = Vec::with_capacity(corpus.len());
    for (code, catalog) in corpus.iter() {
        let mut findings = Vec::new();
        check_catalog(catalog, reference, &mut findings);
        rows.push(LocaleParity {
            locale: code.to_string(),
            findings,
        });
    }

    Ok(ParityReport {
        reference: reference_code.to_string(),
        locales_checked: rows.len(),
        rows,
    })
}

fn check_catalog(
    catalog: &MessageCatalog,
    reference: &MessageCatalog,
    findings: &mut Vec<String>,
) {
    for key in reference.keys() {
        if !catalog.contains_key(key.as_str()) {
            findings.push(format!("missing key '{}'", key));
        }
    }

    for (key, entry) in catalog {
        match reference.get(key.as_str()) {
            None => findings.push(format!("unexpected key '{}'", key)),
            Some(expected) if expected.kind() != entry.kind() => {
                findings.push(format!(
                    "key '{}' is a {}, reference has a {}",
                    key,
                    entry.kind(),
                    expected.kind()
                ));
            }
            Some(MessageEntry::Errors(expected_kinds)) => {
                if let MessageEntry::Errors(kinds) = entry {
                    for kind in expected_kinds.keys() {
                        if !kinds.contains_key(kind.as_str()) {
                            findings.push(format!("'{}' is missing error kind '{}'", key, kind));
                        }
                    }
                    for kind in kinds.keys() {
                        if !expected_kinds.contains_key(kind.as_str()) {
                            findings.push(format!("'{}' has unexpected error kind '{}'", key, kind));
                        }
                    }
                }
            }
            Some(_) => {}
        }

        check_entry(key, entry, findings);
    }
}

fn check_entry(key: &str, entry: &MessageEntry, findings: &mut Vec<String>) {
    match entry {
        MessageEntry::Variants { variations } => {
            if variations.is_empty() {
                findings.push(format!("'{}' has an empty variant set", key));
            }
            for (i, variation) in variations.iter().enumerate() {
                if variation.trim().is_empty() {
                    findings.push(format!("'{}' variant {} is blank", key, i));
                }
            }
        }
        MessageEntry::Fixed { message } => {
            if message.trim().is_empty() {
                findings.push(format!("'{}' has a blank message", key));
            }
        }
        MessageEntry::Errors(kinds) => {
            for (kind, message) in kinds {
                if message.trim().is_empty() {
                    findings.push(format!("'{}' error kind '{}' is blank", key, kind));
                }
            }
        }
    }
}

/// Print one row per locale plus a verdict line
pub fn print_summary(report: &ParityReport) {
    println!("Schema parity against '{}'", report.reference);
    println!();

    for row in &report.rows {
        if row.findings.is_empty() {
            println!("  [{}]    {}", "OK".green(), row.locale);
        } else {
            println!("  [{}] {}", "DRIFT".red(), row.locale);
            for finding in &row.findings {
                println!("          {}", finding);
            }
        }
    }

    println!();
    if report.is_clean() {
        println!(
            "{} {} locale(s) share one schema",
            "OK".green().bold(),
            report.locales_checked
        );
    } else {
        println!(
            "{} {} finding(s) across {} locale(s)",
            "DRIFT".red().bold(),
            report.finding_count(),
            report.locales_checked
        );
    }
}
