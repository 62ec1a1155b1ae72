//! Terminal event source.
//!
//! The dashboard redraws only on input or on a tick, so a synchronous poll
//! bounded by the tick rate is enough; no reader thread is needed.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Events the event loop reacts to.
#[derive(Debug)]
pub enum Event {
    /// Tick elapsed without input.
    Tick,
    Key(KeyEvent),
    Resize,
}

pub struct EventSource {
    tick_rate: Duration,
}

impl EventSource {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits at most one tick for the next relevant event.
    ///
    /// Key releases (reported on Windows), mouse and focus events are
    /// skipped without restarting the tick.
    pub fn next(&self) -> io::Result<Event> {
        let deadline = Instant::now() + self.tick_rate;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(Event::Tick);
            }
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(..) => return Ok(Event::Resize),
                _ => {}
            }
        }
    }
}
