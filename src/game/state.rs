//! Game controller
//!
//! Owns the session and every transition of it: dealing, card selection,
//! the match rule and the deferred resolutions that the clock delivers.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::card::{Card, Deck};
use super::session::GameSession;
use super::time::{Clock, FrameClock, TimerEvent};
use crate::config::GameConfig;
use crate::render::{CardFace, RenderSurface, VisualState};

/// Where the current session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Pairs remain to be found
    Playing,
    /// All pairs found. `announced` flips once the win notification fired.
    Won { announced: bool },
}

/// Result of a card selection, for callers that want feedback.
/// Selection never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Not allowed right now; nothing changed
    Rejected,
    /// First card of a pair turned over
    Revealed,
    /// Second card turned over and the pair matched
    Matched,
    /// Second card turned over and the pair will be hidden again
    Mismatched,
    /// The last pair was found
    Won,
}

/// Delays used by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Wait before a mismatched pair is turned face down
    pub mismatch_delay: Duration,
    /// Wait between the final match and the win notification
    pub win_delay: Duration,
    /// Elapsed-time counter resolution
    pub tick_interval: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            mismatch_delay: Duration::from_millis(1000),
            win_delay: Duration::from_millis(600),
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// The game controller
pub struct Game<R: RenderSurface, C: Clock = FrameClock> {
    /// Current play-through
    session: GameSession,
    phase: GamePhase,
    /// Display collaborator
    surface: R,
    /// Time collaborator
    clock: C,
    /// Shuffle source (seeded for reproducibility when configured)
    rng: StdRng,
    timings: Timings,
    win_message: String,
    /// Bumped on every new game; deferred events carry the value they were
    /// scheduled under
    generation: u64,
}

impl<R: RenderSurface, C: Clock> Game<R, C> {
    /// Create a controller and deal the first game
    pub fn new(surface: R, clock: C, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut game = Self {
            session: GameSession::new(&Deck::ordered()),
            phase: GamePhase::Playing,
            surface,
            clock,
            rng,
            timings: config.timings(),
            win_message: config.win_message.clone(),
            generation: 0,
        };
        game.new_game();
        game
    }

    /// Shuffle a fresh deck and start over
    pub fn new_game(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_with_deck(deck);
    }

    /// Same as [`Game::new_game`], for the reset control
    pub fn reset_game(&mut self) {
        log::debug!("Reset requested");
        self.new_game();
    }

    /// Start a game with a caller-chosen card order
    pub fn start_with_deck(&mut self, deck: Deck) {
        self.generation += 1;

        // Nothing scheduled by the previous session may run
        self.clock.stop();
        self.clock.cancel_all();

        self.session = GameSession::new(&deck);
        self.phase = GamePhase::Playing;
        self.clock.start(self.timings.tick_interval);

        self.surface.clear_board();
        self.surface.render_board(self.session.cards());
        self.surface.update_move_counter(0);
        self.surface.update_time_counter(0);

        log::info!("New game started (generation {})", self.generation);
    }

    /// Turn over the card at `position`. Invalid selections do nothing.
    pub fn select_card(&mut self, position: usize) -> SelectOutcome {
        if !self.session.reveal(position) {
            return SelectOutcome::Rejected;
        }

        let symbol = self.session.cards()[position].symbol;
        self.surface.set_card_face(position, CardFace::Symbol(symbol));
        self.surface.set_card_visual_state(position, VisualState::Revealed);

        let Some((first, second)) = self.session.pending_pair() else {
            log::debug!("Revealed card {}", position);
            return SelectOutcome::Revealed;
        };

        let moves = self.session.record_move();
        self.surface.update_move_counter(moves);

        self.resolve_pair(first, second)
    }

    /// Apply the match rule to a completed pair
    fn resolve_pair(&mut self, first: usize, second: usize) -> SelectOutcome {
        if !self.session.symbols_match(first, second) {
            log::debug!("Mismatch: {} and {}", first, second);
            // Both stay in the revealed set until the delay resolves,
            // which keeps a third selection out
            self.clock.schedule_once(
                self.timings.mismatch_delay,
                TimerEvent::HideMismatch {
                    generation: self.generation,
                    first,
                    second,
                },
            );
            return SelectOutcome::Mismatched;
        }

        log::debug!("Match: {} and {}", first, second);
        self.session.confirm_match(first, second);
        self.surface.set_card_visual_state(first, VisualState::Matched);
        self.surface.set_card_visual_state(second, VisualState::Matched);

        if !self.session.is_complete() {
            return SelectOutcome::Matched;
        }

        self.clock.stop();
        self.phase = GamePhase::Won { announced: false };
        self.clock.schedule_once(
            self.timings.win_delay,
            TimerEvent::AnnounceWin {
                generation: self.generation,
            },
        );
        log::info!(
            "All pairs found in {} moves and {}s",
            self.session.moves(),
            self.session.elapsed_seconds()
        );
        SelectOutcome::Won
    }

    /// Advance time and run everything that came due
    pub fn update(&mut self, delta: Duration) {
        for event in self.clock.advance(delta) {
            self.handle_timer(event);
        }
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick => {
                if self.phase == GamePhase::Playing {
                    let seconds = self.session.record_second();
                    self.surface.update_time_counter(seconds);
                }
            }
            TimerEvent::HideMismatch {
                generation,
                first,
                second,
            } => {
                if generation != self.generation {
                    log::debug!("Dropping stale mismatch from generation {}", generation);
                    return;
                }
                self.session.hide_pair(first, second);
                for position in [first, second] {
                    self.surface.set_card_face(position, CardFace::Placeholder);
                    self.surface.set_card_visual_state(position, VisualState::Default);
                }
            }
            TimerEvent::AnnounceWin { generation } => {
                if generation != self.generation {
                    log::debug!("Dropping stale win from generation {}", generation);
                    return;
                }
                if self.phase == (GamePhase::Won { announced: false }) {
                    self.phase = GamePhase::Won { announced: true };
                    self.surface.notify_win(&self.win_message);
                }
            }
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.session.moves()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.session.elapsed_seconds()
    }

    pub fn cards(&self) -> &[Card] {
        self.session.cards()
    }

    /// Positions revealed and awaiting resolution
    pub fn revealed(&self) -> &[usize] {
        self.session.revealed()
    }

    pub fn matched(&self) -> &[usize] {
        self.session.matched()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
