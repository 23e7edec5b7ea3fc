use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::debug;
use vthgate_sim::Waveform;

use crate::{error::VthGateTuiResult, tui::TerminalGuard, widgets::VoltagePlot};

/// Shows the waveform full screen until `q`, `Esc` or `Enter` is pressed.
pub fn show(waveform: &Waveform) -> VthGateTuiResult<()> {
    let mut guard = TerminalGuard::enter()?;
    debug!(gate = waveform.gate_name, "plotting waveform");
    loop {
        guard
            .terminal()
            .draw(|frame| frame.render_widget(VoltagePlot::new(waveform), frame.area()))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && is_close_key(key.code) {
                return Ok(());
            }
        }
    }
}

fn is_close_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
}
