//! Language registry: generation, storage by name, and family derivation.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::lexicon::LexiconBuilder;
use crate::core::morphology::MorphologySelector;
use crate::core::phonemes::PhonemeBank;
use crate::schema::language::{Family, Language, LanguageFamily, ScriptStyle, WordOrder};
use crate::schema::lexicon::Lexicon;

/// Default inclusive range for the number of word attempts per language.
pub const DEFAULT_VOCABULARY_RANGE: (usize, usize) = (50, 100);

/// Suffixes appended to words renamed in a derived language.
pub const DERIVATION_SUFFIXES: [&str; 7] = ["a", "i", "o", "th", "n", "el", "ar"];

/// A derived language resamples its word order when a draw exceeds this.
const WORD_ORDER_RESAMPLE_THRESHOLD: f64 = 0.7;

/// Owns every generated language, keyed by name.
///
/// This is the single source of truth for sentence generation and
/// translation; values returned from it are clones.
pub struct LanguageRegistry {
    languages: FxHashMap<String, Language>,
    phonemes: PhonemeBank,
    vocabulary: (usize, usize),
    rng: StdRng,
}

impl LanguageRegistry {
    /// An empty registry with the built-in phoneme bank.
    pub fn new(rng: StdRng) -> Self {
        Self {
            languages: FxHashMap::default(),
            phonemes: PhonemeBank::builtin(),
            vocabulary: DEFAULT_VOCABULARY_RANGE,
            rng,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn with_phonemes(mut self, phonemes: PhonemeBank) -> Self {
        self.phonemes = phonemes;
        self
    }

    /// Set the inclusive range for word attempts. Bounds are swapped if
    /// given in the wrong order.
    pub fn with_vocabulary_range(mut self, min: usize, max: usize) -> Self {
        self.vocabulary = (min.min(max), min.max(max));
        self
    }

    pub fn phonemes(&self) -> &PhonemeBank {
        &self.phonemes
    }

    pub fn vocabulary_range(&self) -> (usize, usize) {
        self.vocabulary
    }

    pub fn reseed(&mut self, rng: StdRng) {
        self.rng = rng;
    }

    /// Generate a language and register it under `name`, replacing any
    /// language already stored there.
    pub fn generate_language(&mut self, name: &str, family: Family) -> Language {
        let (min, max) = self.vocabulary;
        let word_count = self.rng.gen_range(min..=max);
        let lexicon =
            LexiconBuilder::build(self.phonemes.phonemes(&family), word_count, &mut self.rng);
        let word_order = *WordOrder::ALL
            .choose(&mut self.rng)
            .unwrap_or(&WordOrder::Svo);
        let morphology = MorphologySelector::select(&mut self.rng);
        let script = *ScriptStyle::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ScriptStyle::AngularRunic);

        let language = Language {
            name: name.to_string(),
            family,
            lexicon,
            word_order,
            morphology,
            script,
        };

        debug!(
            language = %language.name,
            family = %language.family,
            attempts = word_count,
            words = language.lexicon.len(),
            word_order = %language.word_order,
            "Language generated"
        );

        self.register(language.clone());
        language
    }

    /// Create an elvish prime language and `n - 1` derived variants.
    pub fn create_language_family(&mut self, base_name: &str, n: usize) -> LanguageFamily {
        self.create_language_family_in(base_name, Family::Elvish, n)
    }

    /// Create a family rooted at a prime of the given phonetic family.
    ///
    /// Registers `{base}_prime`, then `{base}_1` to `{base}_{n-1}`. Any `n`
    /// works; `n <= 1` yields the prime alone.
    pub fn create_language_family_in(
        &mut self,
        base_name: &str,
        family: Family,
        n: usize,
    ) -> LanguageFamily {
        let prime = self.generate_language(&LanguageFamily::prime_name(base_name), family);
        let mut members = vec![prime];

        for i in 1..n {
            let derived = self.derive(&members[0], &LanguageFamily::member_name(base_name, i));
            self.register(derived.clone());
            members.push(derived);
        }

        info!(
            base = base_name,
            members = members.len(),
            "Language family created"
        );

        LanguageFamily {
            base_name: base_name.to_string(),
            members,
        }
    }

    /// Clone `prime` under a new name, respelling a third of its words.
    ///
    /// floor(len / 3) distinct words are picked and each is respelled with a
    /// randomly chosen starting suffix (see `respell`). Respelled words move
    /// to the end of the lexicon in the order they were respelled. Lexicon
    /// size never changes.
    fn derive(&mut self, prime: &Language, name: &str) -> Language {
        let mut derived = prime.clone();
        derived.name = name.to_string();

        let len = derived.lexicon.len();
        let targets: Vec<String> = index::sample(&mut self.rng, len, len / 3)
            .into_iter()
            .map(|i| derived.lexicon.entries()[i].word.clone())
            .collect();

        let mut kept = 0usize;
        for word in &targets {
            let start = self.rng.gen_range(0..DERIVATION_SUFFIXES.len());
            if !respell(&mut derived.lexicon, word, start) {
                kept += 1;
            }
        }

        if self.rng.gen::<f64>() > WORD_ORDER_RESAMPLE_THRESHOLD {
            derived.word_order = *WordOrder::ALL
                .choose(&mut self.rng)
                .unwrap_or(&prime.word_order);
        }

        debug!(
            language = %derived.name,
            prime = %prime.name,
            renamed = targets.len() - kept,
            kept,
            word_order = %derived.word_order,
            "Language derived"
        );

        derived
    }

    /// Store a language under its own name, returning any language it replaced.
    pub fn register(&mut self, language: Language) -> Option<Language> {
        let replaced = self.languages.insert(language.name.clone(), language);
        if let Some(old) = &replaced {
            debug!(language = %old.name, "Replaced existing language");
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&Language> {
        self.languages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Drop every registered language.
    pub fn clear(&mut self) {
        self.languages.clear();
    }
}

/// Append a derivation suffix to `word`, starting at `DERIVATION_SUFFIXES[start]`.
///
/// A taken respelling falls through to the next suffix in pool order,
/// wrapping around. Returns false, leaving the lexicon unchanged, when every
/// respelling is taken or `word` is missing.
fn respell(lexicon: &mut Lexicon, word: &str, start: usize) -> bool {
    (0..DERIVATION_SUFFIXES.len()).any(|offset| {
        let suffix = DERIVATION_SUFFIXES[(start + offset) % DERIVATION_SUFFIXES.len()];
        lexicon.rename(word, format!("{}{}", word, suffix))
    })
}
