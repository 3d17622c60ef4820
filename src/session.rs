//! One running game: engine, state and the render port it reports to
//!
//! The session is where rounds end and restart. It applies key commands,
//! forwards every visible change to the port and, depending on the
//! configured [`GameOverNotice`], either starts the next round right away or
//! holds ticks until the player dismisses the notice.

use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::game::{
    GameConfig, GameEngine, GameOverNotice, GameState, Heading, RandomPort, Snapshot, TickOutcome,
};
use crate::input::KeyAction;
use crate::render::RenderPort;

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct GameSession<P, R = StdRng> {
    engine: GameEngine<R>,
    state: GameState,
    port: P,
    notice_pending: bool,
}

impl<P: RenderPort> GameSession<P, StdRng> {
    pub fn new(config: GameConfig, port: P) -> Self {
        Self::with_engine(GameEngine::new(config), port)
    }
}

impl<P: RenderPort, R: RandomPort> GameSession<P, R> {
    /// Start the first round. Nothing is drawn until [`redraw`](Self::redraw).
    pub fn with_engine(mut engine: GameEngine<R>, port: P) -> Self {
        let state = engine.reset();
        Self {
            engine,
            state,
            port,
            notice_pending: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// True while a modal game-over notice waits for a key
    pub fn notice_pending(&self) -> bool {
        self.notice_pending
    }

    /// Push the current state to the port without changing anything
    pub fn redraw(&mut self) -> Result<()> {
        self.port.state_changed(&self.state.snapshot())
    }

    /// Run one game tick
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.notice_pending {
            return Ok(TickOutcome::Suspended);
        }

        let outcome = self.engine.advance(&mut self.state);
        match outcome {
            TickOutcome::Moved { .. } => self.port.state_changed(&self.state.snapshot())?,
            TickOutcome::Collided(collision) => {
                info!(
                    ?collision,
                    length = self.state.snake.len(),
                    ticks = self.state.ticks,
                    "game over"
                );
                self.port.round_ended(&self.state.snapshot(), collision)?;

                match self.engine.config().notice {
                    GameOverNotice::Inline => self.restart()?,
                    GameOverNotice::Modal => self.notice_pending = true,
                }
            }
            TickOutcome::Idle | TickOutcome::Suspended => {}
        }

        Ok(outcome)
    }

    /// Request a new heading; an accepted change is redrawn
    pub fn steer(&mut self, heading: Heading) -> Result<bool> {
        let accepted = self.engine.set_heading(&mut self.state, heading);
        if accepted {
            self.port.state_changed(&self.state.snapshot())?;
        } else {
            debug!(?heading, current = ?self.state.heading(), "reversal ignored");
        }
        Ok(accepted)
    }

    /// Throw away the current round and start a new one
    pub fn restart(&mut self) -> Result<()> {
        self.engine.reset_in_place(&mut self.state);
        self.notice_pending = false;
        info!(food = ?self.state.food, "new round");

        let snapshot = self.state.snapshot();
        self.port.round_started(&snapshot)?;
        self.port.state_changed(&snapshot)
    }

    /// Apply a routed key command
    pub fn apply(&mut self, action: KeyAction) -> Result<Flow> {
        match action {
            KeyAction::Quit => return Ok(Flow::Quit),
            // Any other key dismisses a pending notice
            _ if self.notice_pending => self.restart()?,
            KeyAction::Steer(heading) => {
                self.steer(heading)?;
            }
            KeyAction::Restart => self.restart()?,
            KeyAction::Ignored => {}
        }
        Ok(Flow::Continue)
    }
}
