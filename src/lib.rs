// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-Press — Locale Catalog Export.
//!
//! This crate turns an ordered locale → message-catalog corpus into the
//! on-disk layout front-end translation loaders consume: one pretty-printed
//! JSON resource file per locale at `<locales_root>/<code>/landing.json`,
//! written as literal UTF-8 so every script stays readable in review diffs.
//!
//! EXPORT PILLARS:
//! 1. **Catalog**: The corpus itself — embedded compile-time shards or an
//!    external JSON/YAML file, keyed by validated locale codes.
//! 2. **Export**: The write loop. Serializes each catalog with a stable
//!    2-space layout, fills in the leaf files, and records per-locale
//!    outcomes so one bad locale never aborts the run.
//! 3. **Check**: Schema parity across locales, so every catalog keeps the
//!    key set downstream consumers were promised.

pub mod catalog;
pub mod check;
pub mod export;
pub mod locale;
