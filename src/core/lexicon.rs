//! Lexicon construction from phonemes and category affixes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::schema::lexicon::{Lexicon, PartOfSpeech};

/// Probability threshold: an affix is attached when a uniform draw exceeds it.
const AFFIX_THRESHOLD: f64 = 0.3;
/// Prepositions take a prefix when a second draw exceeds this.
const PREFIX_THRESHOLD: f64 = 0.5;
const MAX_PHONEMES_PER_WORD: usize = 3;

/// Affixes attached to a word of the given category. Prepositions list
/// prefixes, everything else lists suffixes.
pub fn affixes(pos: PartOfSpeech) -> &'static [&'static str] {
    match pos {
        PartOfSpeech::Noun => &["-ion", "-eth", "-ul", "-ar", "-en", "-il", "-or", "-ath"],
        PartOfSpeech::Verb => &["-ate", "-ish", "-ize", "-en", "-ify", "-es", "-eth"],
        PartOfSpeech::Adjective => &["-ic", "-al", "-ous", "-ive", "-y", "-ed", "-ing", "-an"],
        PartOfSpeech::Adverb => &["-ly", "-ward", "-wise", "-way", "-time"],
        PartOfSpeech::Preposition => &["a-", "be-", "for-", "with-", "out-"],
    }
}

/// Builds lexicons by stitching phonemes together.
pub struct LexiconBuilder;

impl LexiconBuilder {
    /// Make `word_count` attempts at a new word.
    ///
    /// Each attempt picks a category, joins 1-3 phonemes drawn with
    /// replacement, and attaches a category affix 70% of the time. Attempts
    /// that yield an empty word or one already in the lexicon are dropped,
    /// so the result holds at most `word_count` entries.
    pub fn build<S: AsRef<str>>(phonemes: &[S], word_count: usize, rng: &mut StdRng) -> Lexicon {
        let mut lexicon = Lexicon::new();

        for _ in 0..word_count {
            let pos = *PartOfSpeech::ALL
                .choose(rng)
                .unwrap_or(&PartOfSpeech::Noun);

            let mut word = String::new();
            let syllables = rng.gen_range(1..=MAX_PHONEMES_PER_WORD);
            for _ in 0..syllables {
                if let Some(phoneme) = phonemes.choose(rng) {
                    word.push_str(phoneme.as_ref());
                }
            }

            if rng.gen::<f64>() > AFFIX_THRESHOLD {
                if let Some(affix) = affixes(pos).choose(rng) {
                    if pos == PartOfSpeech::Preposition && rng.gen::<f64>() > PREFIX_THRESHOLD {
                        word.insert_str(0, affix);
                    } else {
                        word.push_str(affix);
                    }
                }
            }

            // Collisions and empty words are skipped, not retried.
            lexicon.insert(word, pos);
        }

        lexicon
    }
}
