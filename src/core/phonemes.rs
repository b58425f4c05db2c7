//! Phoneme banks: per-family phonetic fragments, built-in or loaded from RON.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::schema::language::Family;

#[derive(Debug, Error)]
pub enum PhonemeError {
    #[error("phoneme family '{0}' has no phonemes")]
    EmptyFamily(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

const ELVISH: &[&str] = &[
    "ae", "th", "iel", "wen", "lor", "mir", "del", "ion", "eth", "uil",
];
const DWARVISH: &[&str] = &[
    "thor", "din", "bal", "nor", "grim", "dur", "bok", "gron", "thok", "urn",
];
const DEMONIC: &[&str] = &[
    "zul", "kath", "gor", "morg", "xul", "neth", "rax", "vorth", "zel", "ak",
];
const CELESTIAL: &[&str] = &[
    "cel", "est", "lum", "or", "ath", "riel", "phos", "hel", "aur", "sol",
];

/// Family name → phonetic fragments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhonemeBank {
    pub families: FxHashMap<String, Vec<String>>,
}

impl PhonemeBank {
    /// The four compiled-in families.
    pub fn builtin() -> Self {
        let mut families = FxHashMap::default();
        for (family, phonemes) in [
            (Family::Elvish, ELVISH),
            (Family::Dwarvish, DWARVISH),
            (Family::Demonic, DEMONIC),
            (Family::Celestial, CELESTIAL),
        ] {
            families.insert(
                family.name().to_string(),
                phonemes.iter().map(|p| p.to_string()).collect(),
            );
        }
        PhonemeBank { families }
    }

    /// Load a phoneme bank from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<PhonemeBank, PhonemeError> {
        let contents = std::fs::read_to_string(path)?;
        let bank = Self::parse_ron(&contents)?;
        debug!(
            path = %path.display(),
            families = bank.families.len(),
            "Phoneme bank loaded"
        );
        Ok(bank)
    }

    /// Parse a phoneme bank from a RON map of family name to phoneme list.
    ///
    /// Family names are lower-cased so they line up with `Family::from_name`.
    pub fn parse_ron(input: &str) -> Result<PhonemeBank, PhonemeError> {
        let raw: FxHashMap<String, Vec<String>> = ron::from_str(input)?;
        let mut families = FxHashMap::default();

        for (name, phonemes) in raw {
            let name = name.trim().to_lowercase();
            let phonemes: Vec<String> = phonemes.into_iter().filter(|p| !p.is_empty()).collect();
            if phonemes.is_empty() {
                return Err(PhonemeError::EmptyFamily(name));
            }
            families.insert(name, phonemes);
        }

        Ok(PhonemeBank { families })
    }

    /// Merge another bank into this one. Families from `other` replace
    /// families in `self` with the same name.
    pub fn merge(&mut self, other: PhonemeBank) {
        for (name, phonemes) in other.families {
            self.families.insert(name, phonemes);
        }
    }

    pub fn contains(&self, family: &Family) -> bool {
        self.families.contains_key(family.name())
    }

    /// Phonemes for a family, falling back to the elvish bank.
    pub fn phonemes(&self, family: &Family) -> &[String] {
        self.families
            .get(family.name())
            .or_else(|| self.families.get(Family::Elvish.name()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
