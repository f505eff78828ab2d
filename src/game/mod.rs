//! Game module - Core game logic and state management

mod card;
mod session;
mod state;
mod time;

pub use card::{Card, CardState, Deck, DeckError, Symbol, DECK_SIZE, SYMBOL_COUNT};
pub use session::{GameSession, MAX_REVEALED};
pub use state::{Game, GamePhase, SelectOutcome, Timings};
pub use time::{Clock, FrameClock, TimerEvent, TimerHandle};
