//! Card faces.

use serde::{Deserialize, Serialize};

/// The animal printed on a card face.
///
/// Two cards match when they carry the same symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Dog,
    Cat,
    Mouse,
    Hamster,
    Rabbit,
    Fox,
    Bear,
    Panda,
    Koala,
    Tiger,
}

impl Symbol {
    /// Every symbol, in catalogue order.
    pub const ALL: [Symbol; 10] = [
        Symbol::Dog,
        Symbol::Cat,
        Symbol::Mouse,
        Symbol::Hamster,
        Symbol::Rabbit,
        Symbol::Fox,
        Symbol::Bear,
        Symbol::Panda,
        Symbol::Koala,
        Symbol::Tiger,
    ];

    /// The emoji shown on the revealed face.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Dog => "🐶",
            Symbol::Cat => "🐱",
            Symbol::Mouse => "🐭",
            Symbol::Hamster => "🐹",
            Symbol::Rabbit => "🐰",
            Symbol::Fox => "🦊",
            Symbol::Bear => "🐻",
            Symbol::Panda => "🐼",
            Symbol::Koala => "🐨",
            Symbol::Tiger => "🐯",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
