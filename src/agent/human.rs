use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::error::AgentError;
use crate::game::{render_grid, GridView, Player};

use super::agent::{validate_snapshot, Agent};

/// Text-based human player. Shows the board on `output` and reads a 1-based
/// column number from `input`, asking again until the answer is playable.
///
/// Two seats at one terminal must share a single input through
/// [`HumanAgent::shared`]; each agent only borrows it while reading a line.
pub struct HumanAgent<R, W> {
    color: Player,
    input: Rc<RefCell<R>>,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(color: Player, input: R, output: W) -> Self {
        Self::shared(color, Rc::new(RefCell::new(input)), output)
    }

    /// Agent reading from an input that other seats also read from.
    pub fn shared(color: Player, input: Rc<RefCell<R>>, output: W) -> Self {
        HumanAgent {
            color,
            input,
            output,
        }
    }

    /// Checks an answer against the snapshot, returning the 0-based column or
    /// a message to show the player.
    fn parse_choice(line: &str, snapshot: &dyn GridView) -> Result<usize, String> {
        let width = snapshot.width();
        let number: usize = line
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a column number", line.trim()))?;
        if number == 0 || number > width {
            return Err(format!("Column must be between 1 and {}", width));
        }
        let column = number - 1;
        if !snapshot.cell(column, 0).is_some_and(|cell| cell.is_empty()) {
            return Err(format!("Column {} is full", number));
        }
        Ok(column)
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn color(&self) -> Player {
        self.color
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn choose_column(&mut self, snapshot: &dyn GridView) -> Result<usize, AgentError> {
        validate_snapshot(snapshot)?;
        write!(self.output, "{}", render_grid(snapshot))?;

        loop {
            write!(
                self.output,
                "{} to play, column (1-{}): ",
                self.color,
                snapshot.width()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.borrow_mut().read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }

            match Self::parse_choice(&line, snapshot) {
                Ok(column) => return Ok(column),
                Err(message) => {
                    log::debug!("rejected input {:?}: {}", line.trim(), message);
                    writeln!(self.output, "{}", message)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cell, HEIGHT};
    use std::io::Cursor;

    fn agent(input: &str) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
        HumanAgent::new(Player::Red, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_one_based_column() {
        let mut human = agent("4\n");
        let snapshot = Board::new().copy_of_grid();
        assert_eq!(human.choose_column(&snapshot).unwrap(), 3);

        let shown = String::from_utf8(human.output).unwrap();
        assert!(shown.starts_with("|       |\n"));
        assert!(shown.contains("Red to play, column (1-7): "));
    }

    #[test]
    fn test_reprompts_until_playable() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            board.insert_token(1, Cell::Yellow);
        }
        let mut human = agent("abc\n0\n8\n2\n 7 \n");
        assert_eq!(human.choose_column(&board.copy_of_grid()).unwrap(), 6);

        let shown = String::from_utf8(human.output).unwrap();
        assert!(shown.contains("'abc' is not a column number"));
        assert!(shown.contains("Column must be between 1 and 7"));
        assert!(shown.contains("Column 2 is full"));
    }

    #[test]
    fn test_end_of_input_errors() {
        let mut human = agent("9\n");
        let snapshot = Board::new().copy_of_grid();
        assert!(matches!(
            human.choose_column(&snapshot),
            Err(AgentError::InputClosed)
        ));
    }

    #[test]
    fn test_seats_take_turns_on_shared_input() {
        let input = Rc::new(RefCell::new(Cursor::new(b"3\nx\n5\n".to_vec())));
        let mut red = HumanAgent::shared(Player::Red, Rc::clone(&input), Vec::new());
        let mut yellow = HumanAgent::shared(Player::Yellow, Rc::clone(&input), Vec::new());
        let snapshot = Board::new().copy_of_grid();

        assert_eq!(red.choose_column(&snapshot).unwrap(), 2);
        assert_eq!(yellow.choose_column(&snapshot).unwrap(), 4);
        assert!(matches!(
            red.choose_column(&snapshot),
            Err(AgentError::InputClosed)
        ));
        assert!(String::from_utf8(yellow.output)
            .unwrap()
            .contains("'x' is not a column number"));
    }

    #[test]
    fn test_invalid_snapshot_prints_nothing() {
        let mut human = agent("1\n");
        let snapshot: Vec<Vec<Cell>> = Vec::new();
        assert!(human.choose_column(&snapshot).is_err());
        assert!(human.output.is_empty());
    }
}
