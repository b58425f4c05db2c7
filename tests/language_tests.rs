/// Language generation and family derivation integration tests.

use conlang_engine::core::lexicon::LexiconBuilder;
use conlang_engine::core::phonemes::PhonemeBank;
use conlang_engine::core::registry::{LanguageRegistry, DERIVATION_SUFFIXES};
use conlang_engine::{ConlangEngine, Family, Language, PartOfSpeech, WordOrder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;

#[test]
fn elvish_two_phoneme_scenario() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let lexicon = LexiconBuilder::build(&["ae", "th"], 5, &mut rng);
        assert!(lexicon.len() <= 5);
        for entry in lexicon.entries() {
            assert!(PartOfSpeech::ALL.contains(&entry.pos));
        }
    }
}

#[test]
fn generated_languages_hold_lexicon_invariants() {
    let mut registry = LanguageRegistry::seeded(2024);
    for family in ["elvish", "dwarvish", "demonic", "celestial", "unknown"] {
        let name = format!("{}_tongue", family);
        let lang = registry.generate_language(&name, Family::from_name(family));
        assert!(lang.lexicon.len() <= 100);

        let mut seen = FxHashSet::default();
        for entry in lang.lexicon.entries() {
            assert!(!entry.word.is_empty());
            assert!(seen.insert(entry.word.clone()), "duplicate word {}", entry.word);
        }
    }
}

#[test]
fn unknown_family_speaks_with_elvish_sounds() {
    let mut registry = LanguageRegistry::seeded(8);
    let lang = registry.generate_language("Stranger", Family::from_name("fae"));
    assert_eq!(lang.family, Family::Custom("fae".to_string()));

    let elvish = PhonemeBank::builtin();
    let phonemes = elvish.phonemes(&Family::Elvish);
    for word in lang.lexicon.words() {
        assert!(phonemes.iter().any(|p| word.contains(p.as_str())), "{}", word);
    }
}

#[test]
fn families_of_every_supported_size() {
    for n in 2..=5 {
        let mut engine = ConlangEngine::builder().seed(n as u64).build().unwrap();
        let family = engine.create_language_family("Ancient", n);

        assert_eq!(family.len(), n);
        assert_eq!(engine.registry().len(), n);

        let prime = family.prime().unwrap();
        assert_eq!(prime.name, "Ancient_prime");
        for i in 1..n {
            let name = format!("Ancient_{}", i);
            let member = engine.language(&name).unwrap();
            assert_eq!(member.lexicon.len(), prime.lexicon.len());
            assert_eq!(family.get(&name), Some(member));
        }
    }
}

#[test]
fn derived_vocabulary_keeps_categories() {
    let mut registry = LanguageRegistry::seeded(77);
    let family = registry.create_language_family_in("Deep", Family::Dwarvish, 4);
    let prime = family.prime().unwrap();

    let count = |lang: &Language, pos: PartOfSpeech| lang.lexicon.by_pos(pos).len();
    for member in &family.members {
        assert_eq!(member.family, Family::Dwarvish);
        for pos in PartOfSpeech::ALL {
            assert_eq!(count(member, pos), count(prime, pos));
        }
        for word in member.lexicon.words() {
            if !prime.lexicon.contains(word) {
                assert!(
                    DERIVATION_SUFFIXES.iter().any(|s| word
                        .strip_suffix(s)
                        .is_some_and(|stem| prime.lexicon.contains(stem))),
                    "{} is not a respelling of a prime word",
                    word
                );
            }
        }
    }
}

#[test]
fn word_order_sometimes_shifts_across_a_family() {
    // 30% resample chance per member: across many families at least one
    // member should differ from its prime.
    let mut registry = LanguageRegistry::seeded(5);
    let mut shifted = false;
    for i in 0..30 {
        let family = registry.create_language_family(&format!("F{}", i), 5);
        let prime_order: WordOrder = family.prime().unwrap().word_order;
        if family.members.iter().any(|m| m.word_order != prime_order) {
            shifted = true;
            break;
        }
    }
    assert!(shifted);
}

#[test]
fn sentences_come_from_the_registered_lexicon() {
    let mut engine = ConlangEngine::builder().seed(11).build().unwrap();
    engine.create_language_family("Song", 3);

    for name in ["Song_prime", "Song_1", "Song_2"] {
        let lexicon = engine.language(name).unwrap().lexicon.clone();
        for sentence in engine.generate_sentences(name, 10).unwrap() {
            let tokens: Vec<String> = sentence.split(' ').map(|t| t.to_lowercase()).collect();
            assert!(tokens.len() == 3 || tokens.len() == 4, "{}", sentence);
            for token in tokens {
                let placeholder = ["subj", "obj", "verb", "adj"].contains(&token.as_str());
                assert!(
                    placeholder || lexicon.contains(&token),
                    "{} not in {}",
                    token,
                    name
                );
            }
        }
    }
}
