use std::fmt;

use super::player::Player;
use super::win::{self, GridView};

/// Number of columns on the board.
pub const WIDTH: usize = 7;
/// Number of rows on the board.
pub const HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character used by [`Board::render`]: a space for empty cells, otherwise
    /// the first letter of the color name.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Column-major grid: `grid[column][row]`, row 0 is the top.
pub type Grid = [[Cell; HEIGHT]; WIDTH];

/// Why a token was or was not placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Placed { row: usize },
    ColumnFull,
    ColumnOutOfRange,
    EmptyColor,
}

impl InsertOutcome {
    pub fn is_placed(self) -> bool {
        matches!(self, InsertOutcome::Placed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    tokens: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        let mut board = Board {
            grid: [[Cell::Empty; HEIGHT]; WIDTH],
            tokens: 0,
        };
        board.reset();
        board
    }

    /// Clear every cell so a new game can start.
    pub fn reset(&mut self) {
        for column in self.grid.iter_mut() {
            column.fill(Cell::Empty);
        }
        self.tokens = 0;
    }

    /// Independent copy of the grid; changes to it never reach the board.
    pub fn copy_of_grid(&self) -> Grid {
        self.grid
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.grid[column][row]
    }

    pub fn token_count(&self) -> usize {
        self.tokens
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.grid.get(column) {
            Some(cells) => !cells[0].is_empty(),
            None => true,
        }
    }

    /// Columns that can still take a token, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a token into `column`. Returns `false` and leaves the board
    /// untouched if the column is out of range or already full.
    pub fn insert_token(&mut self, column: usize, color: Cell) -> bool {
        self.try_insert_token(column, color).is_placed()
    }

    /// Same rule as [`Board::insert_token`], reporting where the token landed
    /// or why it was rejected.
    pub fn try_insert_token(&mut self, column: usize, color: Cell) -> InsertOutcome {
        if column >= WIDTH {
            return InsertOutcome::ColumnOutOfRange;
        }
        if color.is_empty() {
            return InsertOutcome::EmptyColor;
        }
        if self.is_column_full(column) {
            return InsertOutcome::ColumnFull;
        }

        // The token falls until it rests on another token or on the bottom row.
        let cells = &mut self.grid[column];
        let row = (1..HEIGHT)
            .find(|&row| !cells[row].is_empty())
            .map_or(HEIGHT - 1, |occupied| occupied - 1);
        cells[row] = color;
        self.tokens += 1;

        InsertOutcome::Placed { row }
    }

    /// Winner of the current position, if exactly one color has four in a row.
    pub fn winner(&self) -> Option<Player> {
        win::winner(&self.grid)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.tokens == WIDTH * HEIGHT
    }

    /// Plain-text picture of the board, one `|`-bounded line per row.
    pub fn render(&self) -> String {
        render_grid(&self.grid)
    }
}

/// Text picture of any grid snapshot in the same format as [`Board::render`].
pub fn render_grid<G: GridView + ?Sized>(grid: &G) -> String {
    let (width, height) = (grid.width(), grid.height());
    let mut output = String::with_capacity(height * (width + 3));
    for row in 0..height {
        output.push('|');
        for column in 0..width {
            output.push(grid.cell(column, row).unwrap_or_default().symbol());
        }
        output.push('|');
        output.push('\n');
    }
    output
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty_cells(board: &Board) -> usize {
        board
            .copy_of_grid()
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for col in 0..WIDTH {
            for row in 0..HEIGHT {
                assert_eq!(board.get(col, row), Cell::Empty);
            }
        }
        assert_eq!(board.token_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_insert_token() {
        let mut board = Board::new();

        // First token in column 3 lands on the bottom row
        assert_eq!(
            board.try_insert_token(3, Cell::Red),
            InsertOutcome::Placed { row: HEIGHT - 1 }
        );
        assert_eq!(board.get(3, 5), Cell::Red);

        // Second token rests on top of the first
        assert!(board.insert_token(3, Cell::Yellow));
        assert_eq!(board.get(3, 4), Cell::Yellow);
        assert_eq!(board.token_count(), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..HEIGHT {
            assert!(board.insert_token(0, Cell::Red));
        }

        let before = board.copy_of_grid();
        assert!(board.is_column_full(0));
        assert!(!board.insert_token(0, Cell::Yellow));
        assert_eq!(board.try_insert_token(0, Cell::Yellow), InsertOutcome::ColumnFull);
        assert_eq!(board.copy_of_grid(), before);
        assert_eq!(board.token_count(), HEIGHT);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert!(!board.insert_token(WIDTH, Cell::Red));
        assert_eq!(
            board.try_insert_token(usize::MAX, Cell::Red),
            InsertOutcome::ColumnOutOfRange
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_color_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.try_insert_token(2, Cell::Empty), InsertOutcome::EmptyColor);
        assert_eq!(board.token_count(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..WIDTH {
            for _ in 0..HEIGHT {
                assert!(!board.is_full());
                assert!(board.insert_token(col, Cell::Red));
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(non_empty_cells(&board), WIDTH * HEIGHT);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        for col in 0..4 {
            board.insert_token(col, Cell::Yellow);
        }
        assert_eq!(board.winner(), Some(Player::Yellow));

        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(non_empty_cells(&board), 0);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut board = Board::new();
        board.insert_token(1, Cell::Red);

        let mut copy = board.copy_of_grid();
        copy[1][HEIGHT - 1] = Cell::Yellow;
        copy[4][0] = Cell::Red;

        assert_eq!(board.get(1, HEIGHT - 1), Cell::Red);
        assert_eq!(board.get(4, 0), Cell::Empty);
        assert_ne!(board.copy_of_grid(), copy);
    }

    #[test]
    fn test_legal_columns_skip_full() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            board.insert_token(2, Cell::Yellow);
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 3, 4, 5, 6]);
        assert!(board.is_column_full(WIDTH));
    }

    #[test]
    fn test_render_empty_board() {
        let board = Board::new();
        let expected = "|       |\n".repeat(HEIGHT);
        assert_eq!(board.render(), expected);
    }

    #[test]
    fn test_render_tokens() {
        let mut board = Board::new();
        board.insert_token(0, Cell::Red);
        board.insert_token(0, Cell::Yellow);
        board.insert_token(6, Cell::Yellow);

        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), HEIGHT);
        assert_eq!(lines[HEIGHT - 2], "|Y      |");
        assert_eq!(lines[HEIGHT - 1], "|R     Y|");
        assert!(lines.iter().all(|line| line.chars().count() == WIDTH + 2));
        assert_eq!(board.to_string(), rendered);
    }

    #[test]
    fn test_render_grid_of_other_sizes() {
        let grid = vec![vec![Cell::Red, Cell::Empty], vec![Cell::Empty, Cell::Yellow]];
        assert_eq!(render_grid(&grid), "|R |\n| Y|\n");

        let empty: Vec<Vec<Cell>> = Vec::new();
        assert_eq!(render_grid(&empty), "");
    }
}
