//! Symbol alphabets available to the script encoder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptKind {
    Alchemical,
    Runic,
    Geometric,
    Astrological,
}

impl ScriptKind {
    pub const ALL: [ScriptKind; 4] = [
        Self::Alchemical,
        Self::Runic,
        Self::Geometric,
        Self::Astrological,
    ];

    /// Resolve a script name. Unknown names fall back to runic.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "alchemical" => Self::Alchemical,
            "geometric" => Self::Geometric,
            "astrological" => Self::Astrological,
            _ => Self::Runic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alchemical => "alchemical",
            Self::Runic => "runic",
            Self::Geometric => "geometric",
            Self::Astrological => "astrological",
        }
    }

    pub fn symbols(&self) -> &'static [char] {
        match self {
            Self::Alchemical => &['\u{26B0}', '\u{26B1}', '\u{2695}', '\u{2697}', '\u{26E8}'],
            Self::Runic => &[
                '\u{16A0}', '\u{16A1}', '\u{16A2}', '\u{16A3}', '\u{16A4}', '\u{16A5}',
            ],
            Self::Geometric => &['\u{25A0}', '\u{25B2}', '\u{25C6}', '\u{25C7}', '\u{25C8}'],
            Self::Astrological => &['\u{2600}', '\u{2601}', '\u{2602}', '\u{2603}', '\u{2604}'],
        }
    }
}

impl Default for ScriptKind {
    fn default() -> Self {
        Self::Runic
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
