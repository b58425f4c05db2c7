//! Sentence synthesis: word-order templates filled from a registered lexicon.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::registry::LanguageRegistry;
use crate::schema::language::WordOrder;
use crate::schema::lexicon::{Lexicon, PartOfSpeech};

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("language not found: {0}")]
    LanguageNotFound(String),
}

/// A grammatical slot in a sentence template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Subj,
    Obj,
    Verb,
    Adj,
}

impl Slot {
    /// Order in which slots draw their words. Fixed so seeded output is stable.
    pub const RESOLUTION_ORDER: [Slot; 4] = [Slot::Subj, Slot::Verb, Slot::Obj, Slot::Adj];

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Subj => "SUBJ",
            Self::Obj => "OBJ",
            Self::Verb => "VERB",
            Self::Adj => "ADJ",
        }
    }

    pub fn from_placeholder(token: &str) -> Option<Slot> {
        match token {
            "SUBJ" => Some(Self::Subj),
            "OBJ" => Some(Self::Obj),
            "VERB" => Some(Self::Verb),
            "ADJ" => Some(Self::Adj),
            _ => None,
        }
    }

    /// Category of word that fills this slot. Subject and object both take
    /// nouns but are drawn independently.
    pub fn pos(&self) -> PartOfSpeech {
        match self {
            Self::Subj | Self::Obj => PartOfSpeech::Noun,
            Self::Verb => PartOfSpeech::Verb,
            Self::Adj => PartOfSpeech::Adjective,
        }
    }
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemplateSegment {
    /// Literal token, emitted as-is.
    Literal(String),
    /// Placeholder filled from the lexicon.
    Slot(Slot),
}

/// A parsed sentence template: whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string. `SUBJ`, `OBJ`, `VERB` and `ADJ` become
    /// slots; every other token is literal.
    pub fn parse(input: &str) -> Template {
        let segments = input
            .split_whitespace()
            .map(|token| match Slot::from_placeholder(token) {
                Some(slot) => TemplateSegment::Slot(slot),
                None => TemplateSegment::Literal(token.to_string()),
            })
            .collect();
        Template { segments }
    }

    pub fn has_slot(&self, slot: Slot) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, TemplateSegment::Slot(found) if *found == slot))
    }

    /// Fill this template from `lexicon`.
    ///
    /// Each slot kind present in the template, taken in
    /// `Slot::RESOLUTION_ORDER`, draws one word of its category and fills the
    /// first still-open occurrence. A slot with no candidate words stays as
    /// its placeholder. The result is capitalized: first character upper,
    /// the rest lower.
    pub fn realize(&self, lexicon: &Lexicon, rng: &mut StdRng) -> String {
        let mut tokens: Vec<String> = self
            .segments
            .iter()
            .map(|segment| match segment {
                TemplateSegment::Literal(text) => text.clone(),
                TemplateSegment::Slot(slot) => slot.placeholder().to_string(),
            })
            .collect();
        let mut filled = vec![false; tokens.len()];

        for slot in Slot::RESOLUTION_ORDER {
            if !self.has_slot(slot) {
                continue;
            }
            let candidates = lexicon.by_pos(slot.pos());
            let Some(word) = candidates.choose(rng) else {
                continue;
            };
            let open = self.segments.iter().enumerate().position(|(i, s)| {
                !filled[i] && matches!(s, TemplateSegment::Slot(found) if *found == slot)
            });
            if let Some(i) = open {
                tokens[i] = (*word).to_string();
                filled[i] = true;
            }
        }

        capitalize(&tokens.join(" "))
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Generates sentences for registered languages.
///
/// Owns its RNG; two engines never share random state.
pub struct GrammarEngine {
    rng: StdRng,
}

impl GrammarEngine {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn reseed(&mut self, rng: StdRng) {
        self.rng = rng;
    }

    /// The base and extended templates for a word order.
    pub fn templates(order: WordOrder) -> [Template; 2] {
        order.templates().map(Template::parse)
    }

    /// Generate a sentence in the language registered under `name`.
    ///
    /// Only the registry's copy is consulted, so a `Language` value that was
    /// never registered cannot be used here.
    pub fn generate_sentence(
        &mut self,
        registry: &LanguageRegistry,
        name: &str,
    ) -> Result<String, GrammarError> {
        let language = registry
            .get(name)
            .ok_or_else(|| GrammarError::LanguageNotFound(name.to_string()))?;

        let templates = Self::templates(language.word_order);
        let template = templates.choose(&mut self.rng).unwrap_or(&templates[0]);
        Ok(template.realize(&language.lexicon, &mut self.rng))
    }

    /// Generate `count` independent sentences.
    pub fn generate_sentences(
        &mut self,
        registry: &LanguageRegistry,
        name: &str,
        count: usize,
    ) -> Result<Vec<String>, GrammarError> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.generate_sentence(registry, name)?);
        }
        Ok(results)
    }
}
