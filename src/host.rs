//! Everything the terminal loop does that doesn't need a real terminal:
//! routing events to the game, driving the tick timer, and making sure the
//! terminal is handed back whatever happens.

use std::time::Instant;

use crossterm::event::Event;
use log::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::{map_key, Command};
use crate::render::{Frame, INTRO_LINES};
use crate::state::{GameState, Mode, TickOutcome};
use crate::ticker::Ticker;
use crate::{GridInt, TermInt};

/// A screen the game can take over and must give back.
pub trait Terminal {
    fn setup(&mut self) -> anyhow::Result<()>;
    fn restore(&mut self) -> anyhow::Result<()>;
}

/// Runs `play` on a set-up terminal. `restore` runs on every path, including
/// a `setup` that failed halfway through. The first error wins.
pub fn with_terminal<T, R, F>(term: &mut T, play: F) -> anyhow::Result<R>
where
    T: Terminal + ?Sized,
    F: FnOnce(&mut T) -> anyhow::Result<R>,
{
    let res = term.setup().and_then(|()| play(term));
    let restored = term.restore();

    match (res, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore_err)) => {
            warn!("Failed to restore terminal: {}", restore_err);
            Err(e)
        }
    }
}

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Ignored,
    Redraw,
    /// The terminal changed size; adopt it, then redraw.
    Resized(TermInt, TermInt),
    Quit,
}

/// Outcome of an event while the intro box is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStep {
    Wait,
    Resized(TermInt, TermInt),
    Begin,
    Quit,
}

pub struct Host {
    state: GameState,
    ticker: Ticker,
    cell_width: TermInt,
}

impl Host {
    pub fn new(config: &GameConfig, width: TermInt, height: TermInt) -> Result<Self, GameError> {
        let (cols, rows) = grid_size(width, height, config.cell_width);
        Ok(Self::with_state(config, GameState::new(cols, rows)?))
    }

    pub fn with_state(config: &GameConfig, state: GameState) -> Self {
        let ticker = Ticker::new(config.tick_interval());
        info!(
            "Grid is {}x{} cells, ticking every {:?}",
            state.cols(),
            state.rows(),
            ticker.interval()
        );
        Host { state, ticker, cell_width: config.cell_width }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Starts the clock for the first round.
    pub fn begin(&mut self, now: Instant) {
        self.sync_ticker(self.state.mode(), now);
    }

    pub fn intro_event(&mut self, ev: Event) -> IntroStep {
        match ev {
            Event::Key(key) if map_key(&key) == Some(Command::Quit) => IntroStep::Quit,
            Event::Key(_) => IntroStep::Begin,
            Event::Resize(width, height) => {
                self.resize(width, height);
                IntroStep::Resized(width, height)
            }
            _ => IntroStep::Wait,
        }
    }

    pub fn handle_event(&mut self, ev: Event, now: Instant) -> Response {
        match ev {
            Event::Key(key) => match map_key(&key) {
                Some(cmd) => self.apply(cmd, now),
                None => Response::Ignored,
            },
            Event::Resize(width, height) => {
                self.resize(width, height);
                Response::Resized(width, height)
            }
            _ => Response::Ignored,
        }
    }

    pub fn apply(&mut self, cmd: Command, now: Instant) -> Response {
        match cmd {
            Command::Steer(direction) => {
                self.state.steer(direction);
                Response::Ignored
            }
            Command::TogglePause => {
                let mode = self.state.toggle_pause();
                if mode != Mode::Over {
                    info!("{}", if mode == Mode::Paused { "Paused" } else { "Resumed" });
                }
                self.sync_ticker(mode, now);
                Response::Redraw
            }
            Command::Restart => {
                if !self.state.restart() {
                    return Response::Ignored;
                }
                self.sync_ticker(self.state.mode(), now);
                Response::Redraw
            }
            Command::Quit => {
                info!("Quit requested");
                Response::Quit
            }
        }
    }

    /// Ticks the game if the timer is due. Returns whether anything moved.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }

        if let TickOutcome::Collided(_) = self.state.tick() {
            self.ticker.stop();
        }
        true
    }

    /// Recomputes the grid for a new terminal size. Too small a terminal
    /// keeps the previous grid.
    pub fn resize(&mut self, width: TermInt, height: TermInt) {
        debug!("Terminal resized to {}x{}", width, height);
        let (cols, rows) = grid_size(width, height, self.cell_width);

        if let Err(e) = self.state.on_resize(cols, rows) {
            warn!("Ignoring resize: {}", e);
        }
    }

    pub fn frame(&self, width: TermInt, height: TermInt) -> Frame {
        Frame::compose(&self.state, self.cell_width, width, height)
    }

    pub fn intro_frame(&self, width: TermInt, height: TermInt) -> Frame {
        let mut frame = self.frame(width, height);
        frame.show_message(INTRO_LINES);
        frame
    }

    ///////////////////////////////////////////////////////////////////////////

    fn sync_ticker(&mut self, mode: Mode, now: Instant) {
        if mode == Mode::Running {
            self.ticker.start(now);
        } else {
            self.ticker.stop();
        }
    }
}

pub fn grid_size(width: TermInt, height: TermInt, cell_width: TermInt) -> (GridInt, GridInt) {
    let cols = width / cell_width.max(1);
    (GridInt::from(cols), GridInt::from(height))
}
