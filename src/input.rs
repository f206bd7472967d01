use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::direction::Direction::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    Restart,
    Quit,
}

/// Maps a key press to a game command. Unbound keys map to `None`.
pub fn map_key(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    let cmd = match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Command::Steer(Up),
        KeyCode::Char('a') | KeyCode::Left => Command::Steer(Left),
        KeyCode::Char('s') | KeyCode::Down => Command::Steer(Down),
        KeyCode::Char('d') | KeyCode::Right => Command::Steer(Right),
        KeyCode::Char(' ') | KeyCode::Esc => Command::TogglePause,
        KeyCode::Enter => Command::Restart,
        KeyCode::Char('q') => Command::Quit,
        _ => return None,
    };

    Some(cmd)
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
