use std::{thread::sleep, time::{Duration, Instant}};

use anyhow::Context;

use snake_arcade::config::GameConfig;
use snake_arcade::host::{with_terminal, Host, IntroStep, Response};

use crate::term::TermManager;

/// How often the loop wakes up to drain input, independent of the tick rate.
const POLL_INTERVAL_MS: u64 = 5;

pub struct SnakeGame {
    term: TermManager,
    host: Host,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> anyhow::Result<Self> {
        let term = TermManager::new().context("reading terminal size")?;
        let (width, height) = term.get_terminal_size();
        let host = Host::new(&config, width, height).context("terminal too small to play")?;

        Ok(SnakeGame { term, host })
    }

    /// Takes over the terminal until the player quits. The terminal is
    /// restored on every exit path.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let host = &mut self.host;
        with_terminal(&mut self.term, |term| play(term, host))
    }
}

fn play(term: &mut TermManager, host: &mut Host) -> anyhow::Result<()> {
    if !show_intro(term, host)? {
        return Ok(());
    }

    host.begin(Instant::now());
    render(term, host)?;

    loop {
        sleep(Duration::from_millis(POLL_INTERVAL_MS));
        let mut dirty = false;

        for ev in term.read_events_queue()? {
            match host.handle_event(ev, Instant::now()) {
                Response::Quit => return Ok(()),
                Response::Resized(width, height) => {
                    term.resize(width, height)?;
                    dirty = true;
                }
                Response::Redraw => dirty = true,
                Response::Ignored => {}
            }
        }

        dirty |= host.poll_tick(Instant::now());

        if dirty {
            render(term, host)?;
        }
    }
}

/// Returns false if the player quit from the intro screen.
fn show_intro(term: &mut TermManager, host: &mut Host) -> anyhow::Result<bool> {
    loop {
        let (width, height) = term.get_terminal_size();
        term.draw(&host.intro_frame(width, height))?;

        loop {
            match host.intro_event(term.read_event_blocking()?) {
                IntroStep::Wait => continue,
                IntroStep::Resized(width, height) => {
                    term.resize(width, height)?;
                    break;
                }
                IntroStep::Begin => return Ok(true),
                IntroStep::Quit => return Ok(false),
            }
        }
    }
}

fn render(term: &mut TermManager, host: &Host) -> anyhow::Result<()> {
    let (width, height) = term.get_terminal_size();
    term.draw(&host.frame(width, height))?;
    Ok(())
}
