use anyhow::Result;

use crate::game::{CollisionType, Snapshot};

/// Presentation side of the game.
///
/// The session calls into this after every change worth drawing. Adapters
/// own whatever drawing surface they use; the game never touches it.
pub trait RenderPort {
    /// The board changed: a move, or an accepted heading change
    fn state_changed(&mut self, snapshot: &Snapshot<'_>) -> Result<()>;

    /// A move collided and the round is over
    fn round_ended(&mut self, snapshot: &Snapshot<'_>, collision: CollisionType) -> Result<()>;

    /// A fresh round was set up
    fn round_started(&mut self, _snapshot: &Snapshot<'_>) -> Result<()> {
        Ok(())
    }
}
