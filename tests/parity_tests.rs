// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the schema parity check

use locale_press::catalog::{Corpus, MessageCatalog, MessageEntry};
use locale_press::check;
use locale_press::locale::LocaleCode;

fn variants(values: &[&str]) -> MessageEntry {
    MessageEntry::Variants {
        variations: values.iter().map(|v| v.to_string()).collect(),
    }
}

fn fixed(message: &str) -> MessageEntry {
    MessageEntry::Fixed {
        message: message.to_string(),
    }
}

fn errors(kinds: &[(&str, &str)]) -> MessageEntry {
    MessageEntry::Errors(
        kinds
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn add_locale(corpus: &mut Corpus, code: &str, entries: Vec<(&str, MessageEntry)>) {
    let mut messages = MessageCatalog::new();
    for (key, entry) in entries {
        messages.insert(key.to_string(), entry);
    }
    corpus.insert(LocaleCode::parse(code).unwrap(), messages);
}

#[test]
fn test_builtin_corpus_is_clean() {
    let corpus = Corpus::builtin().expect("built-in corpus should load");
    let report = check::run(&corpus).expect("check should run");

    assert_eq!(report.reference, "it-IT");
    assert_eq!(report.locales_checked, 21);

    let dirty: Vec<_> = report
        .rows
        .iter()
        .filter(|row| !row.findings.is_empty())
        .collect();
    assert!(dirty.is_empty(), "unexpected findings: {:?}", dirty);
}

#[test]
fn test_missing_key_reported() {
    let mut corpus = Corpus::default();
    add_locale(
        &mut corpus,
        "it-IT",
        vec![
            ("welcome", variants(&["Ciao!"])),
            ("askName", fixed("Il tuo nome?")),
        ],
    );
    add_locale(&mut corpus, "fi-FI", vec![("welcome", variants(&["Hei!"]))]);

    let report = check::run(&corpus).expect("check should run");
    assert!(!report.is_clean());
    assert_eq!(report.finding_count(), 1);

    let finnish = report
        .rows
        .iter()
        .find(|row| row.locale == "fi-FI")
        .expect("fi-FI should have a row");
    assert_eq!(finnish.findings, ["missing key 'askName'"]);

    let italian = report
        .rows
        .iter()
        .find(|row| row.locale == "it-IT")
        .expect("it-IT should have a row");
    assert!(
        italian.findings.is_empty(),
        "the reference locale trivially matches itself"
    );
}

#[test]
fn test_unexpected_key_reported() {
    let mut corpus = Corpus::default();
    add_locale(&mut corpus, "it-IT", vec![("welcome", variants(&["Ciao!"]))]);
    add_locale(
        &mut corpus,
        "fi-FI",
        vec![
            ("welcome", variants(&["Hei!"])),
            ("farewell", fixed("Näkemiin!")),
        ],
    );

    let report = check::run(&corpus).expect("check should run");
    let finnish = report
        .rows
        .iter()
        .find(|row| row.locale == "fi-FI")
        .expect("fi-FI should have a row");
    assert_eq!(finnish.findings, ["unexpected key 'farewell'"]);
}

#[test]
fn test_shape_mismatch_reported() {
    let mut corpus = Corpus::default();
    add_locale(&mut corpus, "it-IT", vec![("welcome", variants(&["Ciao!"]))]);
    add_locale(&mut corpus, "fi-FI", vec![("welcome", fixed("Hei!"))]);

    let report = check::run(&corpus).expect("check should run");
    let finnish = report
        .rows
        .iter()
        .find(|row| row.locale == "fi-FI")
        .expect("fi-FI should have a row");
    assert_eq!(
        finnish.findings,
        ["key 'welcome' is a fixed message, reference has a variant set"]
    );
}

#[test]
fn test_error_kind_drift_reported() {
    let mut corpus = Corpus::default();
    add_locale(
        &mut corpus,
        "it-IT",
        vec![(
            "errors",
            errors(&[("generic", "Ops!"), ("loginFailed", "Accesso non riuscito.")]),
        )],
    );
    add_locale(
        &mut corpus,
        "fi-FI",
        vec![(
            "errors",
            errors(&[("generic", "Hups!"), ("extraKind", "Ylimääräinen.")]),
        )],
    );

    let report = check::run(&corpus).expect("check should run");
    let finnish = report
        .rows
        .iter()
        .find(|row| row.locale == "fi-FI")
        .expect("fi-FI should have a row");
    assert_eq!(
        finnish.findings,
        [
            "'errors' is missing error kind 'loginFailed'",
            "'errors' has unexpected error kind 'extraKind'",
        ]
    );
}

#[test]
fn test_blank_strings_reported() {
    let mut corpus = Corpus::default();
    add_locale(
        &mut corpus,
        "it-IT",
        vec![
            ("welcome", variants(&["Ciao!", " "])),
            ("checking", fixed("")),
            ("errors", errors(&[("generic", "")])),
        ],
    );

    let report = check::run(&corpus).expect("check should run");
    assert_eq!(
        report.rows[0].findings,
        [
            "'welcome' variant 1 is blank",
            "'checking' has a blank message",
            "'errors' error kind 'generic' is blank",
        ]
    );
}

#[test]
fn test_empty_variant_set_reported() {
    let mut corpus = Corpus::default();
    add_locale(&mut corpus, "it-IT", vec![("welcome", variants(&[]))]);

    let report = check::run(&corpus).expect("check should run");
    assert_eq!(
        report.rows[0].findings,
        ["'welcome' has an empty variant set"]
    );
}

#[test]
fn test_empty_corpus_errors() {
    let corpus = Corpus::default();
    let result = check::run(&corpus);
    assert!(result.is_err(), "an empty corpus has no reference schema");
}
