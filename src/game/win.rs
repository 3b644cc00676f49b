//! Four-in-a-row detection over any rectangular grid snapshot.

use super::board::Cell;
use super::player::Player;

/// Read-only, column-major view of a grid. Row 0 is the top.
pub trait GridView {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows, taken from the first column.
    fn height(&self) -> usize;

    /// Cell at `(column, row)`, or `None` outside the grid.
    fn cell(&self, column: usize, row: usize) -> Option<Cell>;
}

impl<C: AsRef<[Cell]>> GridView for [C] {
    fn width(&self) -> usize {
        self.len()
    }

    fn height(&self) -> usize {
        self.first().map_or(0, |column| column.as_ref().len())
    }

    fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        self.get(column)?.as_ref().get(row).copied()
    }
}

impl<C: AsRef<[Cell]>, const N: usize> GridView for [C; N] {
    fn width(&self) -> usize {
        self.as_slice().width()
    }

    fn height(&self) -> usize {
        self.as_slice().height()
    }

    fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        self.as_slice().cell(column, row)
    }
}

impl<C: AsRef<[Cell]>> GridView for Vec<C> {
    fn width(&self) -> usize {
        self.as_slice().width()
    }

    fn height(&self) -> usize {
        self.as_slice().height()
    }

    fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        self.as_slice().cell(column, row)
    }
}

/// Column and row step for one scan direction.
#[derive(Debug, Clone, Copy)]
struct Direction {
    dc: isize,
    dr: isize,
}

/// NE, E, SE and S. The other four are covered by scanning from the far end.
const DIRECTIONS: [Direction; 4] = [
    Direction { dc: 1, dr: -1 },
    Direction { dc: 1, dr: 0 },
    Direction { dc: 1, dr: 1 },
    Direction { dc: 0, dr: 1 },
];

/// Returns the color that has four in a row. If both colors or neither do,
/// there is no winner. A grid with no columns or no rows has no winner.
pub fn winner<G: GridView + ?Sized>(grid: &G) -> Option<Player> {
    let width = grid.width();
    let height = grid.height();
    if width == 0 || height == 0 {
        return None;
    }

    let mut red_has_four = false;
    let mut yellow_has_four = false;

    for column in 0..width {
        for row in 0..height {
            let cell = match grid.cell(column, row) {
                Some(cell) => cell,
                None => continue,
            };
            let already_found = match cell {
                Cell::Empty => continue,
                Cell::Red => red_has_four,
                Cell::Yellow => yellow_has_four,
            };
            if already_found {
                continue;
            }

            let found = DIRECTIONS
                .iter()
                .any(|&dir| run_of_four(grid, column, row, cell, dir));
            match cell {
                Cell::Red => red_has_four |= found,
                Cell::Yellow => yellow_has_four |= found,
                Cell::Empty => {}
            }
        }
    }

    match (red_has_four, yellow_has_four) {
        (true, false) => Some(Player::Red),
        (false, true) => Some(Player::Yellow),
        _ => None,
    }
}

/// True if the three cells after `(column, row)` in `dir` all hold `cell`.
fn run_of_four<G: GridView + ?Sized>(
    grid: &G,
    column: usize,
    row: usize,
    cell: Cell,
    dir: Direction,
) -> bool {
    (1..4isize).all(|step| {
        let next_column = column.checked_add_signed(dir.dc * step);
        let next_row = row.checked_add_signed(dir.dr * step);
        match (next_column, next_row) {
            (Some(c), Some(r)) => grid.cell(c, r) == Some(cell),
            _ => false,
        }
    })
}
