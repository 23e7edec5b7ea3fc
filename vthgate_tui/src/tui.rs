use crate::error::VthGateTuiResult;

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use std::io::{self, Stdout};
use std::panic::{self, PanicHookInfo};

pub type PlotTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen, left again when dropped.
pub struct TerminalGuard {
    terminal: PlotTerminal,
}

impl TerminalGuard {
    pub fn enter() -> VthGateTuiResult<Self> {
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        setup_panic_hook();
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut PlotTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

pub fn restore_terminal() -> VthGateTuiResult<()> {
    io::stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |hook_info: &PanicHookInfo| {
        let _ = restore_terminal();
        original_hook(hook_info);
    }));
}
