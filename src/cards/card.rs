//! Dealt cards and their public view.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Position of a card in the deck, stable for the whole round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw position as a `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for CardIndex {
    type Error = std::num::TryFromIntError;

    /// Positions beyond `u32::MAX` are refused rather than wrapped.
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index).map(Self)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in the deck.
///
/// Whether it is face up is not stored here: a card is revealed while it
/// sits in the round's flipped or matched set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub index: CardIndex,
    pub symbol: Symbol,
}

impl Card {
    #[must_use]
    pub const fn new(index: CardIndex, symbol: Symbol) -> Self {
        Self { index, symbol }
    }
}

/// What a player can see of one deck position.
///
/// `symbol` is `None` while the card is face down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub index: CardIndex,
    pub symbol: Option<Symbol>,
    pub matched: bool,
}

impl CardView {
    /// Face shown for this card: the animal when revealed, a question mark otherwise.
    #[must_use]
    pub fn face(&self) -> &'static str {
        self.symbol.map_or("❓", Symbol::glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_from_usize() {
        assert_eq!(CardIndex::try_from(7usize), Ok(CardIndex::new(7)));
        assert_eq!(CardIndex::new(7).index(), 7);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_index_beyond_u32_is_refused() {
        assert!(CardIndex::try_from(u32::MAX as usize + 1).is_err());
        assert!(CardIndex::try_from(4_294_967_296usize).is_err());
    }

    #[test]
    fn test_face_hides_unrevealed_symbol() {
        let hidden = CardView {
            index: CardIndex::new(0),
            symbol: None,
            matched: false,
        };
        let shown = CardView {
            symbol: Some(Symbol::Dog),
            ..hidden
        };
        assert_eq!(hidden.face(), "❓");
        assert_eq!(shown.face(), Symbol::Dog.glyph());
    }
}
