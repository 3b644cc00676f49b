use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::AgentError;
use crate::game::{GridView, Player};

use super::agent::{validate_snapshot, Agent};

/// An agent that picks uniformly at random among columns that are not full.
pub struct RandomAgent {
    color: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(color: Player) -> Self {
        RandomAgent {
            color,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible games.
    pub fn with_seed(color: Player, seed: u64) -> Self {
        RandomAgent {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Columns whose top cell is still empty.
fn open_columns(snapshot: &dyn GridView) -> Vec<usize> {
    (0..snapshot.width())
        .filter(|&col| snapshot.cell(col, 0).is_some_and(|cell| cell.is_empty()))
        .collect()
}

impl Agent for RandomAgent {
    fn color(&self) -> Player {
        self.color
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn choose_column(&mut self, snapshot: &dyn GridView) -> Result<usize, AgentError> {
        validate_snapshot(snapshot)?;
        let columns = open_columns(snapshot);
        if columns.is_empty() {
            return Err(AgentError::NoLegalColumn);
        }
        let idx = self.rng.random_range(0..columns.len());
        Ok(columns[idx])
    }
}
