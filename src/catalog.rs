// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalogs and the corpus that holds them.
//!
//! The shipped corpus is embedded at compile time as JSON shards under
//! `assets/`, one shard per rollout group, merged in declaration order by
//! [`Corpus::builtin`]. Every map in the model is an [`IndexMap`], so the
//! order translators authored survives parsing, merging, and re-export —
//! downstream review diffs stay stable because nothing ever re-sorts keys.
//!
//! ## Adding a locale
//!
//! 1. Add the locale object to the matching `assets/landing_*.json` shard
//!    (or a new shard listed in `SHARDS`)
//! 2. Add the code to `language_name()`/`native_name()` in [`crate::locale`]
//!    so `list` can label it
//! 3. Run `locale-press check` — the new catalog must carry the same key
//!    set as the first locale in the corpus
//!
//! ## Adding a key
//!
//! Add it to every locale in every shard, in the same position. `check`
//! reports the locales you missed.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::locale::LocaleCode;

/// Embedded corpus shards, merged in declaration order.
const SHARDS: &[(&str, &str)] = &[
    (
        "landing_european.json",
        include_str!("../assets/landing_european.json"),
    ),
    (
        "landing_asian.json",
        include_str!("../assets/landing_asian.json"),
    ),
    (
        "landing_eastern_european.json",
        include_str!("../assets/landing_eastern_european.json"),
    ),
];

/// One named message in a catalog.
///
/// Serialized form is untagged, so the on-disk JSON keeps the exact shapes
/// consumers already load. Variant order matters here: `{"message": ...}`
/// must match [`MessageEntry::Fixed`] before the error-table variant gets
/// a chance to absorb it as a generic string map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageEntry {
    /// Interchangeable renderings of one message. Order is preserved;
    /// which one a consumer shows is its business, not ours.
    Variants { variations: Vec<String> },
    /// A single deterministic rendering.
    Fixed { message: String },
    /// Nested error-kind → message table (the `errors` block).
    Errors(IndexMap<String, String>),
}

impl MessageEntry {
    /// Human-readable shape name, used in parity findings.
    pub fn kind(&self) -> &'static str {
        match self {
            MessageEntry::Variants { .. } => "variant set",
            MessageEntry::Fixed { .. } => "fixed message",
            MessageEntry::Errors(_) => "error table",
        }
    }
}

/// The full set of named UI strings for one locale, in authoring order.
pub type MessageCatalog = IndexMap<String, MessageEntry>;

/// Locale code → message catalog, in authoring order.
///
/// The corpus is fully defined before an export starts; nothing mutates it
/// mid-run. `locale-press` ships a built-in corpus ([`Corpus::builtin`]) and
/// can load an external one ([`Corpus::load`]) for catalogs maintained
/// outside this repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    locales: IndexMap<LocaleCode, MessageCatalog>,
}

impl Corpus {
    /// The corpus embedded in the binary, all shards merged.
    ///
    /// Fails if a shard does not parse or two shards claim the same locale.
    /// Both are packaging defects, not runtime conditions, and the test
    /// suite exercises this path so they surface before a release does.
    pub fn builtin() -> Result<Self> {
        let mut locales = IndexMap::new();
        for &(name, raw) in SHARDS {
            merge_shard(&mut locales, name, raw)?;
        }
        Ok(Corpus { locales })
    }

    /// Load a corpus from an external JSON or YAML file.
    ///
    /// The format is picked by extension: `.yaml`/`.yml` parse as YAML,
    /// everything else as JSON. Locale codes are validated during
    /// deserialization, so a catalog keyed by `../evil` never gets as far
    /// as the filesystem.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("parsing YAML catalog {}", path.display())),
            _ => serde_json::from_str(&raw)
                .with_context(|| format!("parsing JSON catalog {}", path.display())),
        }
    }

    /// Number of locales in the corpus.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Look up one locale's catalog by code.
    pub fn get(&self, code: &str) -> Option<&MessageCatalog> {
        self.locales.get(code)
    }

    /// First locale in authoring order. The parity check treats it as the
    /// reference schema every other locale is compared against.
    pub fn first(&self) -> Option<(&LocaleCode, &MessageCatalog)> {
        self.locales.first()
    }

    /// Locales in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (&LocaleCode, &MessageCatalog)> {
        self.locales.iter()
    }

    /// Insert or replace one locale's catalog.
    pub fn insert(&mut self, code: LocaleCode, catalog: MessageCatalog) {
        self.locales.insert(code, catalog);
    }

    /// Subset of the corpus containing exactly the requested locales.
    ///
    /// Errors on the first code the corpus does not contain — a filter
    /// typo should fail the run loudly, not quietly export nothing.
    pub fn select(&self, codes: &[String]) -> Result<Corpus> {
        let mut locales = IndexMap::new();
        for code in codes {
            let (key, catalog) = self
                .locales
                .get_key_value(code.as_str())
                .ok_or_else(|| anyhow!("locale '{}' is not in the catalog", code))?;
            locales.insert(key.clone(), catalog.clone());
        }
        Ok(Corpus { locales })
    }
}

fn merge_shard(
    locales: &mut IndexMap<LocaleCode, MessageCatalog>,
    name: &str,
    raw: &str,
) -> Result<()> {
    let shard: IndexMap<LocaleCode, MessageCatalog> =
        serde_json::from_str(raw).with_context(|| format!("parsing embedded shard {}", name))?;

    for (code, catalog) in shard {
        if locales.contains_key(&code) {
            bail!("locale '{}' defined twice (second copy in {})", code, name);
        }
        locales.insert(code, catalog);
    }
    Ok(())
}
