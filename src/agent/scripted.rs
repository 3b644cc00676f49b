use std::collections::VecDeque;

use crate::error::AgentError;
use crate::game::{GridView, Player};

use super::agent::{validate_snapshot, Agent};

/// Plays a fixed sequence of columns, one per turn, without looking at the
/// board. Useful for replaying a known game.
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    color: Player,
    moves: VecDeque<usize>,
    played: usize,
}

impl ScriptedAgent {
    pub fn new(color: Player, moves: impl IntoIterator<Item = usize>) -> Self {
        ScriptedAgent {
            color,
            moves: moves.into_iter().collect(),
            played: 0,
        }
    }

    /// Columns not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Agent for ScriptedAgent {
    fn color(&self) -> Player {
        self.color
    }

    fn name(&self) -> &str {
        "Scripted"
    }

    fn choose_column(&mut self, snapshot: &dyn GridView) -> Result<usize, AgentError> {
        validate_snapshot(snapshot)?;
        let column = self
            .moves
            .pop_front()
            .ok_or(AgentError::ScriptExhausted { played: self.played })?;
        self.played += 1;
        Ok(column)
    }
}
