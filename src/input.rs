use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind};

/// Background pump that forwards key presses over a channel so the main
/// loop can drain them without blocking between simulation ticks.
pub struct InputPump {
    rx: mpsc::Receiver<KeyEvent>,
}

impl InputPump {
    pub fn new(poll_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let poll = Duration::from_millis(poll_ms);

        thread::spawn(move || loop {
            if event::poll(poll).unwrap_or(false) {
                if let Ok(event::Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && tx.send(key).is_err() {
                        return;
                    }
                }
            }
        });

        Self { rx }
    }

    pub fn try_next(&self) -> Option<KeyEvent> {
        self.rx.try_recv().ok()
    }
}

/// Snapshot of the movement/boost actions seen since the previous drain,
/// handed to the active scene once per tick. Terminals report key repeats
/// rather than key state, so "held" means "pressed again recently".
#[derive(Debug, Default, Clone, Copy)]
pub struct Keys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
}

impl Keys {
    pub fn absorb(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => self.up = true,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => self.down = true,
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => self.left = true,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => self.right = true,
            KeyCode::Char(' ') => self.boost = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_wasd_map_to_the_same_actions() {
        let mut keys = Keys::default();
        keys.absorb(&press(KeyCode::Up));
        keys.absorb(&press(KeyCode::Char('a')));
        keys.absorb(&press(KeyCode::Char(' ')));
        assert!(keys.up && keys.left && keys.boost);
        assert!(!keys.down && !keys.right);
    }

    #[test]
    fn snapshot_accumulates_until_replaced() {
        // repeats landing on different polling passes pile into one snapshot;
        // only consuming a simulation batch starts a fresh one
        let mut keys = Keys::default();
        keys.absorb(&press(KeyCode::Char('d')));
        keys.absorb(&press(KeyCode::Up));
        assert!(keys.right && keys.up);
        keys = Keys::default();
        assert!(!keys.right && !keys.up);
    }

    #[test]
    fn unrelated_keys_leave_the_snapshot_alone() {
        let mut keys = Keys::default();
        keys.absorb(&press(KeyCode::Char('x')));
        keys.absorb(&press(KeyCode::Enter));
        assert!(!keys.up && !keys.down && !keys.left && !keys.right && !keys.boost);
    }
}
