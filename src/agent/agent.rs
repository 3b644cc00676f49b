use crate::error::AgentError;
use crate::game::{GridView, Player};

/// Fails with [`AgentError::InvalidSnapshot`] if the snapshot has no columns
/// or no rows. Every agent runs this before looking at the grid.
pub fn validate_snapshot(snapshot: &dyn GridView) -> Result<(), AgentError> {
    let (width, height) = (snapshot.width(), snapshot.height());
    if width == 0 || height == 0 {
        return Err(AgentError::InvalidSnapshot { width, height });
    }
    Ok(())
}

/// Decision-making seat in a game: a human at a keyboard, a script, or a
/// strategy. Each agent plays one fixed color.
pub trait Agent {
    /// Color of the tokens this agent drops.
    fn color(&self) -> Player;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Pick the 0-based column to drop a token into, given a read-only copy
    /// of the board. The base behavior only validates the snapshot and picks
    /// column 0.
    fn choose_column(&mut self, snapshot: &dyn GridView) -> Result<usize, AgentError> {
        validate_snapshot(snapshot)?;
        Ok(0)
    }
}

/// Agent that keeps the base behavior: always column 0.
#[derive(Debug, Clone)]
pub struct PlaceholderAgent {
    color: Player,
}

impl PlaceholderAgent {
    pub fn new(color: Player) -> Self {
        PlaceholderAgent { color }
    }
}

impl Agent for PlaceholderAgent {
    fn color(&self) -> Player {
        self.color
    }

    fn name(&self) -> &str {
        "Placeholder"
    }
}
