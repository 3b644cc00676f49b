use crate::agent::Agent;
use crate::error::GameError;

use super::board::{Board, InsertOutcome};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One game between two agents sharing a single board.
pub struct Game {
    board: Board,
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
    current_player: Player,
    outcome: Option<GameOutcome>,
    moves: Vec<usize>,
}

impl Game {
    /// Seat `red` and `yellow`; `first` moves first. Each agent must play the
    /// color of its seat.
    pub fn new(
        red: Box<dyn Agent>,
        yellow: Box<dyn Agent>,
        first: Player,
    ) -> Result<Self, GameError> {
        for (seat, agent) in [(Player::Red, &red), (Player::Yellow, &yellow)] {
            if agent.color() != seat {
                return Err(GameError::ColorMismatch {
                    seat,
                    agent: agent.color(),
                });
            }
        }

        Ok(Game {
            board: Board::new(),
            red,
            yellow,
            current_player: first,
            outcome: None,
            moves: Vec::new(),
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns played so far, in order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Ask the current agent for a column and play it. Returns the outcome once
    /// the game has ended.
    pub fn step(&mut self) -> Result<Option<GameOutcome>, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        let snapshot = self.board.copy_of_grid();
        let agent = match player {
            Player::Red => &mut self.red,
            Player::Yellow => &mut self.yellow,
        };
        let column = agent.choose_column(&snapshot)?;

        let row = match self.board.try_insert_token(column, player.to_cell()) {
            InsertOutcome::Placed { row } => row,
            reason => {
                log::warn!("{} picked unplayable column {}: {:?}", player, column, reason);
                return Err(GameError::IllegalMove {
                    player,
                    column,
                    reason,
                });
            }
        };
        self.moves.push(column);
        log::debug!(
            "move {}: {} -> column {}, row {}",
            self.moves.len(),
            player,
            column,
            row
        );

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(GameOutcome::Winner(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        if let Some(outcome) = self.outcome {
            log::info!("game over after {} moves: {:?}", self.moves.len(), outcome);
        }
        Ok(self.outcome)
    }

    /// Step until the game ends.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Start over on an empty board with the same agents.
    pub fn restart(&mut self, first: Player) {
        self.board.reset();
        self.current_player = first;
        self.outcome = None;
        self.moves.clear();
    }
}
