//! Conlang Engine: procedural fictional languages for games.
//!
//! Generates languages (lexicon, word order, morphology, writing system)
//! from phoneme banks, fills sentence templates from their lexicons,
//! transliterates text into rune alphabets, and builds toy word-for-word
//! translation tables. All randomness flows through seedable, per-component
//! RNGs, so a seeded session is fully reproducible.

pub mod core;
pub mod schema;

pub use crate::core::engine::{ConlangEngine, ConlangEngineBuilder, EngineError};
pub use crate::schema::language::{Family, Language, LanguageFamily, WordOrder};
pub use crate::schema::lexicon::{Lexicon, PartOfSpeech};
pub use crate::schema::script::ScriptKind;
