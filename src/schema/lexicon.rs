//! Insertion-ordered word list with part-of-speech tags.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of word categories a generated word can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 5] = [
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
        Self::Preposition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexEntry {
    pub word: String,
    pub pos: PartOfSpeech,
}

/// A word → part-of-speech mapping that remembers insertion order.
///
/// Order matters downstream: translation tables zip against it, so two
/// lexicons with the same entries in a different order are not equal.
/// Words are unique and never empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<LexEntry>", into = "Vec<LexEntry>")]
pub struct Lexicon {
    entries: Vec<LexEntry>,
    index: FxHashMap<String, usize>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word. Returns false (and changes nothing) when the word is
    /// empty or already present.
    pub fn insert(&mut self, word: impl Into<String>, pos: PartOfSpeech) -> bool {
        let word = word.into();
        if word.is_empty() || self.index.contains_key(&word) {
            return false;
        }
        self.index.insert(word.clone(), self.entries.len());
        self.entries.push(LexEntry { word, pos });
        true
    }

    /// Respell `old` as `new`, keeping its category. The respelled word
    /// moves to the end of the insertion order.
    ///
    /// Returns false when `old` is missing or `new` is empty or taken.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) -> bool {
        let new = new.into();
        if new.is_empty() || self.index.contains_key(&new) {
            return false;
        }
        let Some(slot) = self.index.remove(old) else {
            return false;
        };
        let LexEntry { pos, .. } = self.entries.remove(slot);
        for entry in &self.entries[slot..] {
            if let Some(i) = self.index.get_mut(&entry.word) {
                *i -= 1;
            }
        }
        self.insert(new, pos)
    }

    pub fn get(&self, word: &str) -> Option<PartOfSpeech> {
        self.index.get(word).map(|&i| self.entries[i].pos)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[LexEntry] {
        &self.entries
    }

    /// Words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Words of one category, in insertion order.
    pub fn by_pos(&self, pos: PartOfSpeech) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.pos == pos)
            .map(|e| e.word.as_str())
            .collect()
    }
}

impl PartialEq for Lexicon {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Lexicon {}

impl From<Vec<LexEntry>> for Lexicon {
    fn from(entries: Vec<LexEntry>) -> Self {
        let mut lexicon = Lexicon::new();
        for entry in entries {
            lexicon.insert(entry.word, entry.pos);
        }
        lexicon
    }
}

impl From<Lexicon> for Vec<LexEntry> {
    fn from(lexicon: Lexicon) -> Self {
        lexicon.entries
    }
}
