//! Rune rendering: letter-to-symbol transliteration, circles, and sigils.

use rustc_hash::FxHashMap;

use crate::schema::script::ScriptKind;

/// Default grid size for `ScriptEncoder::render_circle`.
pub const DEFAULT_CIRCLE_DIAMETER: usize = 5;

/// Returned by the circle renderer when the phrase has no visible characters.
pub const EMPTY_CIRCLE: &str = "O";

const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Maps the 26 lowercase Latin letters onto an alphabet, cycling through
/// the symbols. Alphabets shorter than 26 alias several letters onto one
/// symbol, so the mapping cannot be reversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSymbolMap {
    map: FxHashMap<char, char>,
}

impl ScriptSymbolMap {
    pub fn for_script(kind: ScriptKind) -> Self {
        Self::cyclic(kind.symbols())
    }

    /// Build a map over a custom alphabet. `None` if the alphabet is empty.
    pub fn from_symbols(symbols: &[char]) -> Option<Self> {
        if symbols.is_empty() {
            return None;
        }
        Some(Self::cyclic(symbols))
    }

    fn cyclic(symbols: &[char]) -> Self {
        let map = LATIN_LOWER
            .chars()
            .zip(symbols.iter().cycle())
            .map(|(letter, symbol)| (letter, *symbol))
            .collect();
        Self { map }
    }

    pub fn get(&self, letter: char) -> Option<char> {
        self.map.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Renders text in invented scripts. Stateless and deterministic.
pub struct ScriptEncoder;

impl ScriptEncoder {
    /// Lower-case `text` and replace every Latin letter with its symbol.
    /// Anything else (spaces, digits, punctuation, other scripts) passes
    /// through unchanged.
    pub fn encode(text: &str, kind: ScriptKind) -> String {
        Self::encode_with(text, &ScriptSymbolMap::for_script(kind))
    }

    pub fn encode_with(text: &str, map: &ScriptSymbolMap) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| map.get(c).unwrap_or(c))
            .collect()
    }

    /// Lay the characters of `phrase` out in a filled circle.
    ///
    /// Spaces are stripped first; an empty remainder yields `"O"`. Otherwise
    /// the result is `diameter` rows of `diameter` cells, each row ending in
    /// a newline. Cell (i, j) shows `chars[(i * diameter + j) % len]` when
    /// its distance from the point (d/2, d/2) is strictly less than d/2, and
    /// a space otherwise.
    pub fn render_circle(phrase: &str, diameter: usize) -> String {
        let chars: Vec<char> = phrase.chars().filter(|&c| c != ' ').collect();
        if chars.is_empty() {
            return EMPTY_CIRCLE.to_string();
        }

        let radius = diameter as f64 / 2.0;
        let mut circle = String::with_capacity(diameter * (diameter + 1));
        for i in 0..diameter {
            for j in 0..diameter {
                let di = i as f64 - radius;
                let dj = j as f64 - radius;
                if (di * di + dj * dj).sqrt() < radius {
                    circle.push(chars[(i * diameter + j) % chars.len()]);
                } else {
                    circle.push(' ');
                }
            }
            circle.push('\n');
        }
        circle
    }

    /// Condense an intent into a sigil: first and last character of every
    /// word longer than one character, short words whole, then encoded in
    /// the alchemical alphabet.
    pub fn render_sigil(intent: &str) -> String {
        let mut sigil = String::new();
        for word in intent.split_whitespace() {
            let mut chars = word.chars();
            match (chars.next(), chars.next_back()) {
                (Some(first), Some(last)) => {
                    sigil.push(first);
                    sigil.push(last);
                }
                _ => sigil.push_str(word),
            }
        }
        Self::encode(&sigil, ScriptKind::Alchemical)
    }
}
