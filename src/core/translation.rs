//! Toy translation: positional tables pairing English words with generated ones.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::registry::LanguageRegistry;
use crate::core::script::ScriptEncoder;
use crate::schema::language::Language;
use crate::schema::script::ScriptKind;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("language not found: {0}")]
    LanguageNotFound(String),
    #[error("no translation table for language: {0}")]
    NoTable(String),
}

/// The English words used when the caller has no corpus of its own.
pub const DEFAULT_ENGLISH_CORPUS: [&str; 10] = [
    "sky",
    "earth",
    "fire",
    "water",
    "light",
    "dark",
    "life",
    "death",
    "beautiful",
    "today",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationPair {
    pub english: String,
    pub ancient: String,
}

/// Ordered English/generated word pairs for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTable {
    pub language: String,
    pub pairs: Vec<TranslationPair>,
}

impl TranslationTable {
    /// Zip `corpus` against the lexicon in insertion order, stopping at the
    /// shorter of the two.
    pub fn build<S: AsRef<str>>(language: &Language, corpus: &[S]) -> Self {
        let pairs = corpus
            .iter()
            .zip(language.lexicon.words())
            .map(|(english, ancient)| TranslationPair {
                english: english.as_ref().to_string(),
                ancient: ancient.to_string(),
            })
            .collect();
        Self {
            language: language.name.clone(),
            pairs,
        }
    }

    /// First pair, in table order, whose English side contains `word`.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.english.contains(word))
            .map(|pair| pair.ancient.as_str())
    }

    /// The first `count` pairs.
    pub fn preview(&self, count: usize) -> &[TranslationPair] {
        &self.pairs[..count.min(self.pairs.len())]
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Translation tables keyed by language name.
#[derive(Debug, Clone, Default)]
pub struct TranslationIndex {
    tables: FxHashMap<String, TranslationTable>,
}

impl TranslationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build (or rebuild) the table for the language registered as `name`.
    pub fn build<S: AsRef<str>>(
        &mut self,
        registry: &LanguageRegistry,
        name: &str,
        corpus: &[S],
    ) -> Result<&TranslationTable, TranslationError> {
        let language = registry
            .get(name)
            .ok_or_else(|| TranslationError::LanguageNotFound(name.to_string()))?;
        let table = TranslationTable::build(language, corpus);

        debug!(
            language = name,
            corpus = corpus.len(),
            lexicon = language.lexicon.len(),
            pairs = table.len(),
            "Translation table built"
        );

        self.tables.insert(name.to_string(), table);
        self.table(name)
            .ok_or_else(|| TranslationError::NoTable(name.to_string()))
    }

    /// Build against `DEFAULT_ENGLISH_CORPUS`.
    pub fn build_default(
        &mut self,
        registry: &LanguageRegistry,
        name: &str,
    ) -> Result<&TranslationTable, TranslationError> {
        self.build(registry, name, &DEFAULT_ENGLISH_CORPUS)
    }

    /// Word-by-word translation of `text`.
    ///
    /// The text is lower-cased and split on whitespace. Each word becomes the
    /// generated word of the first table pair whose English side contains
    /// it; words with no match are kept as they are. Output words are joined
    /// by single spaces.
    pub fn translate(&self, text: &str, name: &str) -> Result<String, TranslationError> {
        let table = self
            .table(name)
            .ok_or_else(|| TranslationError::NoTable(name.to_string()))?;

        let lowered = text.to_lowercase();
        let translated: Vec<&str> = lowered
            .split_whitespace()
            .map(|word| table.lookup(word).unwrap_or(word))
            .collect();
        Ok(translated.join(" "))
    }

    /// Three labelled lines: the original text, its translation, and the
    /// translation in runes.
    pub fn bilingual_inscription(
        &self,
        text: &str,
        name: &str,
    ) -> Result<String, TranslationError> {
        let ancient = self.translate(text, name)?;
        let runic = ScriptEncoder::encode(&ancient, ScriptKind::Runic);
        Ok(format!(
            "English: {}\n{}: {}\nRunic: {}",
            text, name, ancient, runic
        ))
    }

    pub fn table(&self, name: &str) -> Option<&TranslationTable> {
        self.tables.get(name)
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}
