//! The session facade: one owner for the registry, grammar engine and
//! translation tables.
//!
//! Built via `ConlangEngine::builder()`. Everything lives in memory for the
//! lifetime of the engine and can be wiped with `reset`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::core::grammar::{GrammarEngine, GrammarError};
use crate::core::phonemes::{PhonemeBank, PhonemeError};
use crate::core::registry::{LanguageRegistry, DEFAULT_VOCABULARY_RANGE};
use crate::core::script::{ScriptEncoder, DEFAULT_CIRCLE_DIAMETER};
use crate::core::translation::{TranslationError, TranslationIndex, TranslationTable};
use crate::schema::language::{Family, Language, LanguageFamily};
use crate::schema::script::ScriptKind;

/// Offset between the registry and grammar RNG seeds so the two streams
/// differ for the same engine seed.
const GRAMMAR_SEED_OFFSET: u64 = 7919;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),
    #[error("translation error: {0}")]
    Translation(#[from] TranslationError),
    #[error("phoneme error: {0}")]
    Phonemes(#[from] PhonemeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// True when the error reports a language or table that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Grammar(GrammarError::LanguageNotFound(_))
                | Self::Translation(
                    TranslationError::LanguageNotFound(_) | TranslationError::NoTable(_)
                )
        )
    }
}

/// The top-level conlang engine.
pub struct ConlangEngine {
    registry: LanguageRegistry,
    grammar: GrammarEngine,
    translations: TranslationIndex,
    seed: Option<u64>,
}

/// Builder for constructing a `ConlangEngine`.
pub struct ConlangEngineBuilder {
    seed: Option<u64>,
    vocabulary: (usize, usize),
    phoneme_banks_dir: Option<String>,
    /// Directly provided banks (for testing without files).
    phoneme_banks: Vec<PhonemeBank>,
}

impl ConlangEngine {
    pub fn builder() -> ConlangEngineBuilder {
        ConlangEngineBuilder {
            seed: None,
            vocabulary: DEFAULT_VOCABULARY_RANGE,
            phoneme_banks_dir: None,
            phoneme_banks: Vec::new(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn translations(&self) -> &TranslationIndex {
        &self.translations
    }

    pub fn language(&self, name: &str) -> Option<&Language> {
        self.registry.get(name)
    }

    pub fn generate_language(&mut self, name: &str, family: Family) -> Language {
        self.registry.generate_language(name, family)
    }

    pub fn create_language_family(&mut self, base_name: &str, n: usize) -> LanguageFamily {
        self.registry.create_language_family(base_name, n)
    }

    pub fn create_language_family_in(
        &mut self,
        base_name: &str,
        family: Family,
        n: usize,
    ) -> LanguageFamily {
        self.registry.create_language_family_in(base_name, family, n)
    }

    pub fn generate_sentence(&mut self, name: &str) -> Result<String, EngineError> {
        Ok(self.grammar.generate_sentence(&self.registry, name)?)
    }

    pub fn generate_sentences(
        &mut self,
        name: &str,
        count: usize,
    ) -> Result<Vec<String>, EngineError> {
        Ok(self.grammar.generate_sentences(&self.registry, name, count)?)
    }

    pub fn encode(&self, text: &str, script: ScriptKind) -> String {
        ScriptEncoder::encode(text, script)
    }

    pub fn render_circle(&self, text: &str) -> String {
        ScriptEncoder::render_circle(text, DEFAULT_CIRCLE_DIAMETER)
    }

    pub fn render_sigil(&self, text: &str) -> String {
        ScriptEncoder::render_sigil(text)
    }

    /// Build the translation table for `name` and return a copy of it.
    pub fn build_translation<S: AsRef<str>>(
        &mut self,
        name: &str,
        english_words: &[S],
    ) -> Result<TranslationTable, EngineError> {
        Ok(self
            .translations
            .build(&self.registry, name, english_words)?
            .clone())
    }

    /// Build the translation table for `name` from the default English words.
    pub fn build_default_translation(
        &mut self,
        name: &str,
    ) -> Result<TranslationTable, EngineError> {
        Ok(self.translations.build_default(&self.registry, name)?.clone())
    }

    pub fn translate(&self, text: &str, name: &str) -> Result<String, EngineError> {
        Ok(self.translations.translate(text, name)?)
    }

    pub fn bilingual_inscription(&self, text: &str, name: &str) -> Result<String, EngineError> {
        Ok(self.translations.bilingual_inscription(text, name)?)
    }

    /// Drop every language and translation table.
    ///
    /// A seeded engine is reseeded from its original seed, so the same
    /// calls after a reset reproduce the same output.
    pub fn reset(&mut self) {
        let languages = self.registry.len();
        let tables = self.translations.len();

        self.registry.clear();
        self.translations.clear();
        let (registry_rng, grammar_rng) = session_rngs(self.seed);
        self.registry.reseed(registry_rng);
        self.grammar.reseed(grammar_rng);

        info!(languages, tables, "Session reset");
    }
}

/// RNGs for the registry and grammar engine. Seeded deterministically when a
/// seed is given, from OS entropy otherwise.
fn session_rngs(seed: Option<u64>) -> (StdRng, StdRng) {
    match seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(GRAMMAR_SEED_OFFSET)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    }
}

impl ConlangEngineBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inclusive range for the number of word attempts per language.
    pub fn vocabulary_range(mut self, min: usize, max: usize) -> Self {
        self.vocabulary = (min, max);
        self
    }

    /// Directory of `.ron` phoneme banks to load on build.
    pub fn phoneme_banks_dir(mut self, path: &str) -> Self {
        self.phoneme_banks_dir = Some(path.to_string());
        self
    }

    /// Provide a phoneme bank directly (for testing without files).
    pub fn with_phoneme_banks(mut self, bank: PhonemeBank) -> Self {
        self.phoneme_banks.push(bank);
        self
    }

    pub fn build(self) -> Result<ConlangEngine, EngineError> {
        let mut phonemes = PhonemeBank::builtin();

        // Files override built-ins; directly provided banks override files.
        if let Some(ref dir) = self.phoneme_banks_dir {
            if Path::new(dir).exists() {
                load_ron_files_from_dir(dir, |path| {
                    phonemes.merge(PhonemeBank::load_from_ron(path)?);
                    Ok(())
                })?;
            }
        }
        for bank in self.phoneme_banks {
            phonemes.merge(bank);
        }

        info!(
            seeded = self.seed.is_some(),
            families = phonemes.families.len(),
            "Conlang engine built"
        );

        let (registry_rng, grammar_rng) = session_rngs(self.seed);
        let (min, max) = self.vocabulary;

        Ok(ConlangEngine {
            registry: LanguageRegistry::new(registry_rng)
                .with_phonemes(phonemes)
                .with_vocabulary_range(min, max),
            grammar: GrammarEngine::new(grammar_rng),
            translations: TranslationIndex::new(),
            seed: self.seed,
        })
    }
}

/// Load all .ron files from a directory, calling `loader` for each.
fn load_ron_files_from_dir<F>(dir: &str, mut loader: F) -> Result<(), EngineError>
where
    F: FnMut(&Path) -> Result<(), EngineError>,
{
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    // Sorted so overlapping banks merge in a stable order.
    paths.sort();
    for path in &paths {
        loader(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_engine() -> ConlangEngine {
        ConlangEngine::builder().seed(42).build().unwrap()
    }

    #[test]
    fn builder_with_seed() {
        let engine = ConlangEngine::builder().seed(12345).build().unwrap();
        assert_eq!(engine.seed(), Some(12345));
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn unseeded_engine_still_generates() {
        let mut engine = ConlangEngine::builder().build().unwrap();
        assert_eq!(engine.seed(), None);
        let lang = engine.generate_language("Wild", Family::Demonic);
        assert!(!lang.lexicon.is_empty());
    }

    #[test]
    fn same_seed_same_session() {
        let mut a = build_test_engine();
        let mut b = build_test_engine();

        assert_eq!(
            a.create_language_family("Kin", 3),
            b.create_language_family("Kin", 3)
        );
        assert_eq!(
            a.generate_sentences("Kin_1", 4).unwrap(),
            b.generate_sentences("Kin_1", 4).unwrap()
        );
    }

    #[test]
    fn engines_do_not_share_random_state() {
        let mut a = build_test_engine();
        let mut b = build_test_engine();

        // Draws on one engine must not shift the other.
        for i in 0..5 {
            a.generate_language(&format!("Noise{}", i), Family::Elvish);
        }
        let mut fresh = build_test_engine();
        assert_eq!(
            b.generate_language("Echo", Family::Elvish).lexicon,
            fresh.generate_language("Echo", Family::Elvish).lexicon
        );
    }

    #[test]
    fn vocabulary_range_reaches_registry() {
        let mut engine = ConlangEngine::builder()
            .seed(1)
            .vocabulary_range(3, 6)
            .build()
            .unwrap();
        assert_eq!(engine.registry().vocabulary_range(), (3, 6));
        assert!(engine.generate_language("Terse", Family::Elvish).lexicon.len() <= 6);
    }

    #[test]
    fn phoneme_banks_load_from_dir() {
        let mut engine = ConlangEngine::builder()
            .seed(3)
            .phoneme_banks_dir("tests/fixtures/phonemes")
            .build()
            .unwrap();
        assert!(engine.registry().phonemes().contains(&Family::from_name("abyssal")));

        let lang = engine.generate_language("Deep", Family::from_name("abyssal"));
        let abyssal = ["khor", "ulm", "drak", "vex", "oth", "grul"];
        for word in lang.lexicon.words() {
            assert!(abyssal.iter().any(|p| word.contains(p)), "{}", word);
        }
    }

    #[test]
    fn missing_banks_dir_is_ignored() {
        let engine = ConlangEngine::builder()
            .phoneme_banks_dir("tests/fixtures/does_not_exist")
            .build()
            .unwrap();
        assert_eq!(engine.registry().phonemes().families.len(), 4);
    }

    #[test]
    fn direct_banks_override_builtins() {
        let bank = PhonemeBank::parse_ron(r#"{ "elvish": ["ai"] }"#).unwrap();
        let engine = ConlangEngine::builder()
            .with_phoneme_banks(bank)
            .build()
            .unwrap();
        assert_eq!(engine.registry().phonemes().phonemes(&Family::Elvish), ["ai"]);
    }

    #[test]
    fn not_found_errors_are_flagged() {
        let mut engine = build_test_engine();

        let err = engine.generate_sentence("Nobody").unwrap_err();
        assert!(err.is_not_found());
        let err = engine.translate("hello", "Nobody").unwrap_err();
        assert!(err.is_not_found());
        let err = engine.build_translation("Nobody", &["sky"]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn translation_round_through_engine() {
        let mut engine = build_test_engine();
        engine.generate_language("Elder", Family::Elvish);
        let table = engine.build_default_translation("Elder").unwrap();
        assert_eq!(table.len(), 10);

        let sky = table.pairs[0].ancient.clone();
        assert_eq!(engine.translate("sky", "Elder").unwrap(), sky);

        let inscription = engine.bilingual_inscription("The sky", "Elder").unwrap();
        assert!(inscription.starts_with("English: The sky\n"));
    }

    #[test]
    fn reset_clears_and_replays() {
        let mut engine = build_test_engine();
        let first = engine.generate_language("Again", Family::Dwarvish);
        engine.build_default_translation("Again").unwrap();

        engine.reset();
        assert!(engine.registry().is_empty());
        assert!(engine.translations().is_empty());
        assert!(engine.generate_sentence("Again").is_err());

        let second = engine.generate_language("Again", Family::Dwarvish);
        assert_eq!(first, second);
    }

    #[test]
    fn script_helpers_delegate() {
        let engine = build_test_engine();
        assert_eq!(engine.render_circle(""), "O");
        assert_eq!(
            engine.encode("abc", ScriptKind::Astrological),
            "\u{2600}\u{2601}\u{2602}"
        );
        assert_eq!(engine.render_sigil("a"), engine.encode("a", ScriptKind::Alchemical));
    }
}
