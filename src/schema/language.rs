//! Language records and the closed option sets they are drawn from.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::Lexicon;

/// Phonetic family a language is generated from.
///
/// The four built-in families have phoneme banks compiled in. Any other
/// name becomes `Custom` and is resolved against loaded banks, falling back
/// to elvish phonemes when no bank matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Elvish,
    Dwarvish,
    Demonic,
    Celestial,
    Custom(String),
}

impl Family {
    /// Parse a family name case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "elvish" => Self::Elvish,
            "dwarvish" => Self::Dwarvish,
            "demonic" => Self::Demonic,
            "celestial" => Self::Celestial,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Elvish => "elvish",
            Self::Dwarvish => "dwarvish",
            Self::Demonic => "demonic",
            Self::Celestial => "celestial",
            Self::Custom(name) => name,
        }
    }
}

impl Default for Family {
    fn default() -> Self {
        Self::Elvish
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical constituent order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordOrder {
    Sov,
    Svo,
    Vso,
}

impl WordOrder {
    pub const ALL: [WordOrder; 3] = [Self::Sov, Self::Svo, Self::Vso];

    /// Base and extended (adjective-bearing) sentence templates.
    pub fn templates(&self) -> [&'static str; 2] {
        match self {
            Self::Sov => ["SUBJ OBJ VERB", "SUBJ OBJ ADJ VERB"],
            Self::Svo => ["SUBJ VERB OBJ", "SUBJ VERB ADJ OBJ"],
            Self::Vso => ["VERB SUBJ OBJ", "VERB SUBJ ADJ OBJ"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sov => "SOV",
            Self::Svo => "SVO",
            Self::Vso => "VSO",
        }
    }
}

impl fmt::Display for WordOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluralRule {
    SuffixI,
    SuffixEn,
    VowelChange,
    SuffixAth,
}

impl PluralRule {
    pub const ALL: [PluralRule; 4] = [
        Self::SuffixI,
        Self::SuffixEn,
        Self::VowelChange,
        Self::SuffixAth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SuffixI => "add 'i' suffix",
            Self::SuffixEn => "add 'en' suffix",
            Self::VowelChange => "vowel change",
            Self::SuffixAth => "add 'ath' suffix",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbConjugation {
    Regular,
    Irregular,
    PrefixBased,
    ToneBased,
}

impl VerbConjugation {
    pub const ALL: [VerbConjugation; 4] = [
        Self::Regular,
        Self::Irregular,
        Self::PrefixBased,
        Self::ToneBased,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Irregular => "irregular",
            Self::PrefixBased => "prefix-based",
            Self::ToneBased => "tone-based",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseSystem {
    None,
    NominativeAccusative,
    ErgativeAbsolutive,
}

impl CaseSystem {
    pub const ALL: [CaseSystem; 3] = [
        Self::None,
        Self::NominativeAccusative,
        Self::ErgativeAbsolutive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NominativeAccusative => "nominative-accusative",
            Self::ErgativeAbsolutive => "ergative-absolutive",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(PluralRule, VerbConjugation, CaseSystem);

/// Morphological rules of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphology {
    pub plural: PluralRule,
    pub conjugation: VerbConjugation,
    pub case_system: CaseSystem,
}

/// Description of a language's writing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptStyle {
    CursiveFlowing,
    AngularRunic,
    Geometric,
    DotBased,
    CircularGlyphs,
    LinearPhonetic,
}

impl ScriptStyle {
    pub const ALL: [ScriptStyle; 6] = [
        Self::CursiveFlowing,
        Self::AngularRunic,
        Self::Geometric,
        Self::DotBased,
        Self::CircularGlyphs,
        Self::LinearPhonetic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CursiveFlowing => "cursive flowing script",
            Self::AngularRunic => "angular runic carvings",
            Self::Geometric => "geometric patterns",
            Self::DotBased => "dot-based notation",
            Self::CircularGlyphs => "circular glyphs",
            Self::LinearPhonetic => "linear phonetic symbols",
        }
    }
}

display_via_label!(ScriptStyle);

/// A generated language.
///
/// Values handed out by the registry are snapshots: editing one does not
/// touch the registered copy, and sentence generation only ever reads the
/// registered copy by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub family: Family,
    pub lexicon: Lexicon,
    pub word_order: WordOrder,
    pub morphology: Morphology,
    pub script: ScriptStyle,
}

/// A prime language plus the variants derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageFamily {
    pub base_name: String,
    /// Prime first, then `{base}_1`, `{base}_2`, ...
    pub members: Vec<Language>,
}

impl LanguageFamily {
    pub fn prime_name(base_name: &str) -> String {
        format!("{}_prime", base_name)
    }

    pub fn member_name(base_name: &str, index: usize) -> String {
        format!("{}_{}", base_name, index)
    }

    pub fn prime(&self) -> Option<&Language> {
        self.members.first()
    }

    pub fn get(&self, name: &str) -> Option<&Language> {
        self.members.iter().find(|l| l.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|l| l.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
