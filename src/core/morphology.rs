//! Morphology selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::schema::language::{CaseSystem, Morphology, PluralRule, VerbConjugation};

/// Samples a morphology, each rule independently and uniformly.
pub struct MorphologySelector;

impl MorphologySelector {
    pub fn select(rng: &mut StdRng) -> Morphology {
        Morphology {
            plural: *PluralRule::ALL.choose(rng).unwrap_or(&PluralRule::SuffixI),
            conjugation: *VerbConjugation::ALL
                .choose(rng)
                .unwrap_or(&VerbConjugation::Regular),
            case_system: *CaseSystem::ALL.choose(rng).unwrap_or(&CaseSystem::None),
        }
    }
}
