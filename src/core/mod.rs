pub mod engine;
pub mod grammar;
pub mod lexicon;
pub mod morphology;
pub mod phonemes;
pub mod registry;
pub mod script;
pub mod translation;
