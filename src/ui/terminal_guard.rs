use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw-mode session guard: alternate screen, mouse capture, focus-change
/// reporting, and (where the terminal supports it) key release events.
/// Everything is restored on drop, and on panic via the hook.
pub struct TerminalGuard {
    release_events: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;
        io::stdout().execute(EnableMouseCapture)?;
        io::stdout().execute(EnableFocusChange)?;

        // Release events need the kitty keyboard protocol; without it the
        // host synthesizes the release phase from each press.
        let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if release_events {
            io::stdout().execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }

        set_panic_hook();

        Ok(TerminalGuard { release_events })
    }

    /// Whether the terminal delivers `KeyEventKind::Release`.
    pub fn release_events(&self) -> bool {
        self.release_events
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.release_events {
            let _ = io::stdout().execute(PopKeyboardEnhancementFlags);
        }
        let _ = io::stdout().execute(DisableFocusChange);
        let _ = io::stdout().execute(DisableMouseCapture);
        let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            let _ = io::stdout().execute(PopKeyboardEnhancementFlags);
            let _ = io::stdout().execute(DisableFocusChange);
            let _ = io::stdout().execute(DisableMouseCapture);
            let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
            let _ = disable_raw_mode();
            eprintln!("Panic: {}", panic_info);
            std::process::exit(1);
        }));
    });
}
