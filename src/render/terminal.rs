use std::io::{Stderr, stderr};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::port::RenderPort;
use super::renderer::{Notice, Renderer};
use crate::game::{CollisionType, GameOverNotice, Snapshot};
use crate::metrics::{RoundMetrics, RoundSummary};

/// Render port drawing into the terminal's alternate screen
pub struct TerminalPort {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    renderer: Renderer,
    metrics: RoundMetrics,
    notice_style: GameOverNotice,
    notice: Notice,
}

impl TerminalPort {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    ///
    /// If any step after raw mode fails, the terminal is put back before the
    /// error is returned.
    pub fn enter(cell_width: u16, notice_style: GameOverNotice) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let terminal = undo_on_error(Self::open_screen(), || {
            let mut stderr = stderr();
            let _ = execute!(stderr, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;

        Ok(Self {
            terminal,
            renderer: Renderer::new(cell_width),
            metrics: RoundMetrics::new(),
            notice_style,
            notice: Notice::None,
        })
    }

    fn open_screen() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let mut terminal =
            Terminal::new(CrosstermBackend::new(stderr)).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    }

    pub fn metrics(&self) -> &RoundMetrics {
        &self.metrics
    }

    /// Hand the terminal back to the shell
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }

    fn draw(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        self.metrics.update();
        let (renderer, metrics, notice) = (&self.renderer, &self.metrics, self.notice);
        self.terminal
            .draw(|frame| renderer.render(frame, snapshot, metrics, notice))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl RenderPort for TerminalPort {
    fn state_changed(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        self.draw(snapshot)
    }

    fn round_ended(&mut self, snapshot: &Snapshot<'_>, collision: CollisionType) -> Result<()> {
        let summary = RoundSummary {
            collision,
            length: snapshot.snake_len(),
            ticks: snapshot.ticks,
        };
        self.metrics.on_round_over(summary);
        self.notice = match self.notice_style {
            GameOverNotice::Inline => Notice::Banner,
            GameOverNotice::Modal => Notice::Modal,
        };
        self.draw(snapshot)
    }

    fn round_started(&mut self, _snapshot: &Snapshot<'_>) -> Result<()> {
        self.metrics.on_round_start();
        // The banner stays up during the next round; a popup goes away
        if self.notice == Notice::Modal {
            self.notice = Notice::None;
        }
        Ok(())
    }
}

/// Run `undo` when `result` is an error, then pass `result` on
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}
