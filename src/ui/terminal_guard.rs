//! Raw-mode terminal session for the reader.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

pub type ReaderTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way the shell left it.
///
/// Runs once: on drop, or from the panic hook if the loop panics first.
pub struct TerminalGuard {
    active: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let active = Arc::new(Mutex::new(true));
        let hook_flag = Arc::clone(&active);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&hook_flag);
            previous(info);
        }));
        Self { active }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.active);
    }
}

fn restore_once(active: &Mutex<bool>) {
    let mut active = active.lock();
    if !*active {
        return;
    }
    *active = false;
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Enter raw mode on the alternate screen. Keep the guard alive for as
/// long as the terminal is in use.
pub fn setup_terminal() -> io::Result<(ReaderTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
