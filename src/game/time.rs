//! Game clock
//!
//! Drives the once-per-second elapsed-time tick and the one-shot resolution
//! delays. Nothing here sleeps: the frame loop feeds deltas into the clock
//! and the clock hands back whatever has come due.

use std::time::Duration;

/// Deferred work the controller asked to be woken up for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Recurring elapsed-time tick
    Tick,
    /// Turn a mismatched pair face down again
    HideMismatch {
        generation: u64,
        first: usize,
        second: usize,
    },
    /// All pairs found, show the win notification
    AnnounceWin { generation: u64 },
}

/// Handle returned by [`Clock::schedule_once`], used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Source of time for the game controller
pub trait Clock {
    /// Start emitting [`TimerEvent::Tick`] every `interval`
    fn start(&mut self, interval: Duration);

    /// Stop the recurring tick. One-shot timers are unaffected.
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Deliver `event` once after `delay`
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);

    /// Drop every pending one-shot timer
    fn cancel_all(&mut self);

    /// Move time forward and return the events that came due, oldest first
    fn advance(&mut self, delta: Duration) -> Vec<TimerEvent>;
}

#[derive(Debug, Clone)]
struct Scheduled {
    handle: TimerHandle,
    due: Duration,
    event: TimerEvent,
}

/// Deterministic clock advanced by frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Total time fed into the clock
    now: Duration,
    /// Interval between ticks while running
    tick_interval: Duration,
    /// When the next tick fires, if running
    next_tick: Option<Duration>,
    /// Pending one-shot timers in scheduling order
    pending: Vec<Scheduled>,
    next_handle: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of one-shot timers still waiting
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Clock for FrameClock {
    fn start(&mut self, interval: Duration) {
        // A zero interval would tick forever within one advance
        self.tick_interval = interval.max(Duration::from_millis(1));
        self.next_tick = Some(self.now + self.tick_interval);
    }

    fn stop(&mut self) {
        self.next_tick = None;
    }

    fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Scheduled {
            handle,
            due: self.now + delay,
            event,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|s| s.handle != handle);
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }

    fn advance(&mut self, delta: Duration) -> Vec<TimerEvent> {
        self.now += delta;
        let now = self.now;

        let mut due: Vec<(Duration, TimerEvent)> = Vec::new();

        let (ready, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = waiting;
        due.extend(ready.into_iter().map(|s| (s.due, s.event)));

        while let Some(at) = self.next_tick {
            if at > now {
                break;
            }
            due.push((at, TimerEvent::Tick));
            self.next_tick = Some(at + self.tick_interval);
        }

        // Stable: equal due times keep scheduling order
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, event)| event).collect()
    }
}
