use std::io::{self, stdout};

use cpong_shared::GAME_TITLE;
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    style::ResetColor,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, Clear, ClearType,
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use tracing::{debug, warn};

/// puts the terminal into raw mode on an alternate screen, and puts it back when dropped.
pub struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            keyboard_enhanced: false,
        };
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            SetTitle(GAME_TITLE),
            Clear(ClearType::All),
        )?;
        if matches!(supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
            guard.keyboard_enhanced = true;
        }
        debug!(keyboard_enhanced = guard.keyboard_enhanced, "terminal ready");
        Ok(guard)
    }

    /// whether the terminal reports key release events.
    pub fn reports_key_releases(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = stdout();
        if self.keyboard_enhanced {
            if let Err(err) = execute!(stdout, PopKeyboardEnhancementFlags) {
                warn!("failed to pop keyboard enhancement flags: {err}");
            }
        }
        if let Err(err) = execute!(stdout, ResetColor, LeaveAlternateScreen, cursor::Show) {
            warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            warn!("failed to disable raw mode: {err}");
        }
    }
}
