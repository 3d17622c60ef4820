use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tracing::{debug, info};

use crate::clock::RepeatingTimer;
use crate::game::{GameConfig, GameEngine};
use crate::input::InputHandler;
use crate::render::TerminalPort;
use crate::session::{Flow, GameSession};

/// Keyboard play in the terminal
pub struct HumanMode {
    config: GameConfig,
    seed: Option<u64>,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            seed: None,
            input_handler: InputHandler::new(),
        }
    }

    /// Make food placement reproducible
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn engine(&self) -> GameEngine {
        match self.seed {
            Some(seed) => GameEngine::seeded(self.config.clone(), seed),
            None => GameEngine::new(self.config.clone()),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let port = TerminalPort::enter(self.config.cell_width, self.config.notice)?;
        let mut session = GameSession::with_engine(self.engine(), port);

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut session).await;

        session.port_mut().restore()?;

        info!(
            rounds = session.port().metrics().rounds_played,
            "left the game"
        );
        result
    }

    async fn run_game_loop(&mut self, session: &mut GameSession<TerminalPort>) -> Result<()> {
        let mut event_stream = EventStream::new();
        let (mut timer, timer_handle) = RepeatingTimer::new(self.config.tick_period());

        info!(
            width = self.config.grid_width,
            height = self.config.grid_height,
            level = ?self.config.level,
            period_ms = timer.period().as_millis() as u64,
            "game started"
        );
        session.redraw()?;

        loop {
            let flow = tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(session, event)?,
                    Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                    None => Flow::Quit,
                },

                tick = timer.tick() => match tick {
                    Some(_) => {
                        session.tick()?;
                        Flow::Continue
                    }
                    None => Flow::Quit,
                },

                _ = tokio::signal::ctrl_c() => Flow::Quit,
            };

            if flow == Flow::Quit {
                timer_handle.cancel();
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&self, session: &mut GameSession<TerminalPort>, event: Event) -> Result<Flow> {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input_handler.handle_key_event(key);
                if !action.is_consumed() && !session.notice_pending() {
                    debug!(code = ?key.code, "key not handled");
                }
                session.apply(action)
            }
            Event::Resize(..) => {
                session.redraw()?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Level, Position};

    #[test]
    fn test_seeded_engines_agree() {
        let config = GameConfig::new(12, 12).with_level(Level::Medium);
        let mode = HumanMode::new(config).with_seed(Some(5));

        let first = mode.engine().reset();
        let second = mode.engine().reset();

        assert_eq!(first, second);
        assert_eq!(first.snake.head(), Position::new(6, 6));
        assert_eq!(first.level, Level::Medium);
    }

    #[test]
    fn test_unseeded_engine_uses_config() {
        let mode = HumanMode::new(GameConfig::new(8, 4));
        let state = mode.engine().reset();

        assert!(state.running);
        assert_eq!(state.grid.columns, 8);
        assert_eq!(state.grid.rows, 4);
    }
}
