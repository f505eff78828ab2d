//! Per-game session data
//!
//! Holds the dealt cards and the bookkeeping of one play-through. The
//! controller owns the only instance and replaces it on every new game.

use super::card::{Card, Deck};

/// Maximum number of face-up cards awaiting a match decision
pub const MAX_REVEALED: usize = 2;

/// State of one play-through, from shuffle to the next reset
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Cards indexed by board position
    cards: Vec<Card>,
    /// Positions revealed but not yet confirmed or hidden (at most two)
    revealed: Vec<usize>,
    /// Positions of matched cards, in match order
    matched: Vec<usize>,
    /// Completed pair attempts
    moves: u32,
    /// Seconds counted by the clock while this session was live
    elapsed_seconds: u64,
}

impl GameSession {
    pub fn new(deck: &Deck) -> Self {
        Self {
            cards: deck.deal(),
            revealed: Vec::with_capacity(MAX_REVEALED),
            matched: Vec::new(),
            moves: 0,
            elapsed_seconds: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    pub fn matched(&self) -> &[usize] {
        &self.matched
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Every card has been matched
    pub fn is_complete(&self) -> bool {
        self.matched.len() == self.cards.len()
    }

    /// Whether a selection of `position` would take effect
    pub fn can_reveal(&self, position: usize) -> bool {
        position < self.cards.len()
            && self.revealed.len() < MAX_REVEALED
            && !self.revealed.contains(&position)
            && !self.matched.contains(&position)
    }

    /// Flip a card face up. Returns false and changes nothing if the
    /// selection is not allowed.
    pub fn reveal(&mut self, position: usize) -> bool {
        if !self.can_reveal(position) || !self.cards[position].reveal() {
            return false;
        }
        self.revealed.push(position);
        true
    }

    /// The two revealed positions, once a pair is complete
    pub fn pending_pair(&self) -> Option<(usize, usize)> {
        match self.revealed.as_slice() {
            &[first, second] => Some((first, second)),
            _ => None,
        }
    }

    pub fn record_move(&mut self) -> u32 {
        self.moves += 1;
        self.moves
    }

    pub fn record_second(&mut self) -> u64 {
        self.elapsed_seconds += 1;
        self.elapsed_seconds
    }

    /// Whether the two positions hold the same symbol
    pub fn symbols_match(&self, first: usize, second: usize) -> bool {
        match (self.cards.get(first), self.cards.get(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        }
    }

    /// Move the pending pair into the matched set
    pub fn confirm_match(&mut self, first: usize, second: usize) {
        for position in [first, second] {
            if self.cards[position].mark_matched() {
                self.matched.push(position);
            }
        }
        self.revealed.retain(|&p| p != first && p != second);
    }

    /// Turn the pending pair face down and release the revealed slots
    pub fn hide_pair(&mut self, first: usize, second: usize) {
        for position in [first, second] {
            if let Some(card) = self.cards.get_mut(position) {
                card.hide();
            }
        }
        self.revealed.retain(|&p| p != first && p != second);
    }
}
