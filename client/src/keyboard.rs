use std::{
    collections::HashMap,
    io::{self, Write},
    time::{Duration, Instant},
};

use cpong_shared::input::{FrameInput, PaddleInput};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::renderer::TerminalRenderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Control {
    fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::LeftUp),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::LeftDown),
            KeyCode::Up => Some(Control::RightUp),
            KeyCode::Down => Some(Control::RightDown),
            _ => None,
        }
    }
}

/// tracks which of the paddle keys are currently held down.
///
/// terminals without key release reporting only send a press followed by auto-repeats while a key
/// is held, so for those a key counts as held until `hold_timeout` passes without a new event.
pub struct KeyboardState {
    held: HashMap<Control, Instant>,
    hold_timeout: Option<Duration>,
}

impl KeyboardState {
    pub fn new(hold_timeout: Option<Duration>) -> Self {
        Self {
            held: HashMap::new(),
            hold_timeout,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> LoopControl {
        if key.kind == KeyEventKind::Press && is_quit_key(&key) {
            return LoopControl::Quit;
        }
        if let Some(control) = Control::from_key_code(key.code) {
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.held.insert(control, now);
                }
                KeyEventKind::Release => {
                    self.held.remove(&control);
                }
            }
        }
        LoopControl::Continue
    }

    pub fn snapshot(&self, now: Instant) -> FrameInput {
        FrameInput {
            left: PaddleInput {
                up: self.is_held(Control::LeftUp, now),
                down: self.is_held(Control::LeftDown, now),
            },
            right: PaddleInput {
                up: self.is_held(Control::RightUp, now),
                down: self.is_held(Control::RightDown, now),
            },
        }
    }

    fn is_held(&self, control: Control, now: Instant) -> bool {
        match (self.held.get(&control), self.hold_timeout) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(last_seen), Some(timeout)) => now.saturating_duration_since(*last_seen) < timeout,
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// drains every pending terminal event without blocking.
pub fn poll_events<W: Write>(
    keyboard: &mut KeyboardState,
    renderer: &mut TerminalRenderer<W>,
) -> io::Result<LoopControl> {
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) => {
                if keyboard.handle_key(key, Instant::now()) == LoopControl::Quit {
                    return Ok(LoopControl::Quit);
                }
            }
            Event::Resize(cols, rows) => renderer.resize(cols, rows)?,
            _ => {}
        }
    }
    Ok(LoopControl::Continue)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use cpong_shared::input::{FrameInput, PaddleInput};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use crate::keyboard::{KeyboardState, LoopControl};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn press_and_release() {
        let mut keyboard = KeyboardState::new(None);
        let now = Instant::now();
        keyboard.handle_key(key(KeyCode::Char('w'), KeyEventKind::Press), now);
        keyboard.handle_key(key(KeyCode::Down, KeyEventKind::Press), now);
        assert_eq!(
            keyboard.snapshot(now + Duration::from_secs(10)),
            FrameInput {
                left: PaddleInput::UP,
                right: PaddleInput::DOWN,
            }
        );
        keyboard.handle_key(key(KeyCode::Char('w'), KeyEventKind::Release), now);
        assert_eq!(
            keyboard.snapshot(now),
            FrameInput {
                left: PaddleInput::default(),
                right: PaddleInput::DOWN,
            }
        );
    }

    #[test]
    fn held_keys_expire_without_release_events() {
        let timeout = Duration::from_millis(150);
        let mut keyboard = KeyboardState::new(Some(timeout));
        let start = Instant::now();
        keyboard.handle_key(key(KeyCode::Char('s'), KeyEventKind::Press), start);
        assert!(keyboard.snapshot(start + Duration::from_millis(100)).left.down);
        keyboard.handle_key(
            key(KeyCode::Char('s'), KeyEventKind::Repeat),
            start + Duration::from_millis(100),
        );
        assert!(keyboard.snapshot(start + Duration::from_millis(200)).left.down);
        assert!(!keyboard.snapshot(start + Duration::from_millis(250)).left.down);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut keyboard = KeyboardState::new(None);
        let now = Instant::now();
        assert_eq!(
            keyboard.handle_key(key(KeyCode::Char('x'), KeyEventKind::Press), now),
            LoopControl::Continue
        );
        assert_eq!(keyboard.snapshot(now), FrameInput::default());
    }

    #[test]
    fn quit_keys() {
        let mut keyboard = KeyboardState::new(None);
        let now = Instant::now();
        assert_eq!(
            keyboard.handle_key(key(KeyCode::Esc, KeyEventKind::Press), now),
            LoopControl::Quit
        );
        assert_eq!(
            keyboard.handle_key(key(KeyCode::Char('q'), KeyEventKind::Press), now),
            LoopControl::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keyboard.handle_key(ctrl_c, now), LoopControl::Quit);
        // a plain 'c' is not a quit request, and neither is releasing escape.
        assert_eq!(
            keyboard.handle_key(key(KeyCode::Char('c'), KeyEventKind::Press), now),
            LoopControl::Continue
        );
        assert_eq!(
            keyboard.handle_key(key(KeyCode::Esc, KeyEventKind::Release), now),
            LoopControl::Continue
        );
    }
}
