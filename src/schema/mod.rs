pub mod language;
pub mod lexicon;
pub mod script;
