use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal, Result};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};

use snake_arcade::host::Terminal;
use snake_arcade::render::Frame;
use snake_arcade::TermInt;

/// Owns the terminal for the lifetime of the game. Remembers the last frame
/// it printed so each draw only touches cells that changed.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Frame,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        let screen = Frame::blank(width, height);
        Ok(TermManager { width, height, stdout, screen })
    }

    /// Blocks until the next terminal event, resizes included.
    pub fn read_event_blocking(&self) -> Result<Event> {
        read()
    }

    /// Drains everything the terminal has queued up without blocking.
    pub fn read_events_queue(&self) -> Result<Vec<Event>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            events.push(read()?);
        }

        Ok(events)
    }

    pub fn get_terminal_size(&self) -> (TermInt, TermInt) {
        (self.width, self.height)
    }

    /// Adopts a new terminal size. The next draw repaints everything.
    pub fn resize(&mut self, width: TermInt, height: TermInt) -> Result<()> {
        self.width = width;
        self.height = height;
        self.clear()
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        if frame.width() != self.screen.width() || frame.height() != self.screen.height() {
            self.clear()?;
        }

        let mut color = None;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let glyph = match frame.get(x, y) {
                    Some(glyph) => glyph,
                    None => continue,
                };

                if self.screen.get(x, y) == Some(glyph) {
                    continue;
                }

                if color != Some(glyph.color) {
                    queue!(self.stdout, style::SetForegroundColor(glyph.color))?;
                    color = Some(glyph.color);
                }

                queue!(self.stdout, cursor::MoveTo(x, y), style::Print(glyph.ch))?;
            }
        }

        self.screen = frame.clone();
        self.flush()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
        self.screen = Frame::blank(self.width, self.height);
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Terminal for TermManager {
    fn setup(&mut self) -> anyhow::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.clear()?;
        Ok(())
    }

    /// Undoes as much of `setup` as it can, even after a step fails.
    fn restore(&mut self) -> anyhow::Result<()> {
        let raw = terminal::disable_raw_mode();
        let screen = execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        );

        raw?;
        screen?;
        Ok(())
    }
}
