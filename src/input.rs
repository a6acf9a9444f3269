//! Keyboard input adapter.
//!
//! Key events arrive between ticks at whatever rate the terminal delivers
//! them. The adapter latches them into edge-triggered intents, and the next
//! tick takes (and clears) them. Holding a key does not re-trigger a jump on
//! terminals that report repeat events (the game enables this when the
//! terminal supports it). Elsewhere auto-repeat arrives as fresh presses and
//! each one flaps.

use crate::core::tick::TickInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a single key press means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Any ordinary key: jump while playing.
    Jump,
    /// Space: jump while playing, restart after game over.
    JumpOrRestart,
    /// Esc, q or Ctrl-C.
    Quit,
    /// Repeats and releases.
    Ignored,
}

/// Classify a raw key event.
pub fn classify_key(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignored;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char(' ') => KeyAction::JumpOrRestart,
        _ => KeyAction::Jump,
    }
}

/// Latches intents between ticks.
#[derive(Debug, Default)]
pub struct InputAdapter {
    pending: TickInput,
    quit: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Multiple presses before a tick collapse into one.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match classify_key(&key) {
            KeyAction::Jump => self.pending.jump = true,
            KeyAction::JumpOrRestart => {
                self.pending.jump = true;
                self.pending.restart = true;
            }
            KeyAction::Quit => self.quit = true,
            KeyAction::Ignored => {}
        }
    }

    /// Hand the latched intents to the next tick and clear them.
    pub fn take_tick_input(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
