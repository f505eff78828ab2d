//! Cards and the deck
//!
//! The deck is a fixed multiset of six heart symbols, each appearing twice.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of cards on the board
pub const DECK_SIZE: usize = 12;

/// Number of distinct symbols in the deck
pub const SYMBOL_COUNT: usize = 6;

/// The symbols printed on card faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    SparklingHeart,
    HeartEyes,
    LoveLetter,
    TwoHearts,
    HeartWithArrow,
    BeatingHeart,
}

impl Symbol {
    /// All symbols, in deck order
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::SparklingHeart,
        Symbol::HeartEyes,
        Symbol::LoveLetter,
        Symbol::TwoHearts,
        Symbol::HeartWithArrow,
        Symbol::BeatingHeart,
    ];

    /// Emoji shown on the card face
    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::SparklingHeart => "💖",
            Symbol::HeartEyes => "😍",
            Symbol::LoveLetter => "💌",
            Symbol::TwoHearts => "💕",
            Symbol::HeartWithArrow => "💘",
            Symbol::BeatingHeart => "💓",
        }
    }

    /// Single-letter face for terminals without emoji support
    pub fn ascii(&self) -> &'static str {
        match self {
            Symbol::SparklingHeart => "A",
            Symbol::HeartEyes => "B",
            Symbol::LoveLetter => "C",
            Symbol::TwoHearts => "D",
            Symbol::HeartWithArrow => "E",
            Symbol::BeatingHeart => "F",
        }
    }

    fn index(&self) -> usize {
        match self {
            Symbol::SparklingHeart => 0,
            Symbol::HeartEyes => 1,
            Symbol::LoveLetter => 2,
            Symbol::TwoHearts => 3,
            Symbol::HeartWithArrow => 4,
            Symbol::BeatingHeart => 5,
        }
    }
}

/// Visibility of a single card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Hidden,
    Revealed,
    /// Terminal: a matched card never changes again
    Matched,
}

/// A card at a fixed board position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub position: usize,
    pub symbol: Symbol,
    pub state: CardState,
}

impl Card {
    pub fn new(position: usize, symbol: Symbol) -> Self {
        Self {
            position,
            symbol,
            state: CardState::Hidden,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Turn face up. Only hidden cards can be revealed.
    pub fn reveal(&mut self) -> bool {
        if self.state != CardState::Hidden {
            return false;
        }
        self.state = CardState::Revealed;
        true
    }

    /// Turn face down again after a mismatch
    pub fn hide(&mut self) -> bool {
        if self.state != CardState::Revealed {
            return false;
        }
        self.state = CardState::Hidden;
        true
    }

    /// Lock the card as part of a found pair
    pub fn mark_matched(&mut self) -> bool {
        if self.state != CardState::Revealed {
            return false;
        }
        self.state = CardState::Matched;
        true
    }
}

/// Errors from building a deck out of an explicit symbol ordering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck must hold 12 cards, got {0}")]
    WrongSize(usize),
    #[error("symbol {symbol:?} appears {count} times, expected 2")]
    UnpairedSymbol { symbol: Symbol, count: usize },
}

/// An ordering of the fixed twelve-card multiset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    symbols: [Symbol; DECK_SIZE],
}

impl Deck {
    /// The unshuffled deck: every symbol twice, side by side
    pub const FULL: [Symbol; DECK_SIZE] = [
        Symbol::SparklingHeart,
        Symbol::SparklingHeart,
        Symbol::HeartEyes,
        Symbol::HeartEyes,
        Symbol::LoveLetter,
        Symbol::LoveLetter,
        Symbol::TwoHearts,
        Symbol::TwoHearts,
        Symbol::HeartWithArrow,
        Symbol::HeartWithArrow,
        Symbol::BeatingHeart,
        Symbol::BeatingHeart,
    ];

    /// The fixed deck, unshuffled
    pub fn ordered() -> Self {
        Self { symbols: Self::FULL }
    }

    /// A uniformly random permutation of the fixed deck (Fisher-Yates)
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = Self::FULL;
        for i in (1..DECK_SIZE).rev() {
            let j = rng.gen_range(0..=i);
            symbols.swap(i, j);
        }
        Self { symbols }
    }

    /// Build a deck from a caller-chosen ordering
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self, DeckError> {
        let symbols: [Symbol; DECK_SIZE] = symbols
            .try_into()
            .map_err(|_| DeckError::WrongSize(symbols.len()))?;

        let mut counts = [0usize; SYMBOL_COUNT];
        for symbol in &symbols {
            counts[symbol.index()] += 1;
        }
        for symbol in Symbol::ALL {
            let count = counts[symbol.index()];
            if count != 2 {
                return Err(DeckError::UnpairedSymbol { symbol, count });
            }
        }

        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Lay the deck out as face-down cards indexed by position
    pub fn deal(&self) -> Vec<Card> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| Card::new(position, symbol))
            .collect()
    }
}
