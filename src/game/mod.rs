//! Core Connect Four logic: the gravity board, four-in-a-row detection, player
//! colors, and a game session that alternates two agents.

mod board;
mod player;
mod session;
mod win;

pub use board::{render_grid, Board, Cell, Grid, InsertOutcome, HEIGHT, WIDTH};
pub use player::Player;
pub use session::{Game, GameOutcome};
pub use win::{winner, GridView};
