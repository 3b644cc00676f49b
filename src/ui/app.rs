use crate::agent::Agent;
use crate::config::AppConfig;
use crate::game::{Board, GameOutcome, InsertOutcome, Player, WIDTH};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    first_player: Player,
    /// Automatic agents by seat; `None` means the keyboard plays that color.
    red: Option<Box<dyn Agent>>,
    yellow: Option<Box<dyn Agent>>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    poll_interval: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let game = &config.game;
        App {
            board: Board::new(),
            current_player: game.first,
            outcome: None,
            first_player: game.first,
            red: game
                .red
                .build_automatic(Player::Red, game.seed_for(Player::Red)),
            yellow: game
                .yellow
                .build_automatic(Player::Yellow, game.seed_for(Player::Yellow)),
            selected_column: WIDTH / 2, // Start in middle
            should_quit: false,
            message: None,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            // Automatic seats move once per poll, so keys still get through
            let automatic = self.automatic_turn();
            self.handle_events()?;
            if automatic && !self.should_quit {
                self.play_automatic();
            }
        }
        Ok(())
    }

    fn automatic_turn(&self) -> bool {
        self.outcome.is_none() && self.seat_agent(self.current_player).is_some()
    }

    fn seat_agent(&self, player: Player) -> Option<&dyn Agent> {
        match player {
            Player::Red => self.red.as_deref(),
            Player::Yellow => self.yellow.as_deref(),
        }
    }

    fn play_automatic(&mut self) {
        let snapshot = self.board.copy_of_grid();
        let agent = match self.current_player {
            Player::Red => self.red.as_mut(),
            Player::Yellow => self.yellow.as_mut(),
        };
        let choice = match agent {
            Some(agent) => agent.choose_column(&snapshot),
            None => return,
        };
        match choice {
            Ok(column) => self.drop_piece(column),
            Err(err) => {
                // Hand the seat to the keyboard rather than retrying forever
                log::error!("{} agent failed: {}", self.current_player, err);
                self.message = Some(format!("{} agent failed: {}", self.current_player, err));
                match self.current_player {
                    Player::Red => self.red = None,
                    Player::Yellow => self.yellow = None,
                }
            }
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < WIDTH - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.outcome.is_some() {
                    self.message = Some("Game over! Press 'r' to restart.".to_string());
                } else if self.automatic_turn() {
                    self.message = Some(format!("Waiting for {} to move", self.current_player));
                } else {
                    self.drop_piece(self.selected_column);
                }
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.board.reset();
        self.current_player = self.first_player;
        self.outcome = None;
        self.selected_column = WIDTH / 2;
    }

    /// Drop the current player's token in `column`
    fn drop_piece(&mut self, column: usize) {
        match self.board.try_insert_token(column, self.current_player.to_cell()) {
            InsertOutcome::Placed { .. } => {
                if let Some(winner) = self.board.winner() {
                    self.outcome = Some(GameOutcome::Winner(winner));
                } else if self.board.is_full() {
                    self.outcome = Some(GameOutcome::Draw);
                } else {
                    self.current_player = self.current_player.other();
                }

                if let Some(outcome) = self.outcome {
                    log::info!("game over: {:?}", outcome);
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            InsertOutcome::ColumnFull => {
                self.message = Some("Column is full!".to_string());
            }
            InsertOutcome::ColumnOutOfRange | InsertOutcome::EmptyColor => {
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    fn seat_label(&self) -> String {
        let label = |player: Player| match self.seat_agent(player) {
            Some(agent) => agent.name().to_string(),
            None => "Human".to_string(),
        };
        format!("Red: {}  vs  Yellow: {}", label(Player::Red), label(Player::Yellow))
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.board,
            self.current_player,
            self.outcome.is_some(),
            self.selected_column,
            &self.message,
            &self.seat_label(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentKind;
    use crate::game::{Cell, HEIGHT};
    use crossterm::event::KeyModifiers;

    fn hot_seat() -> App {
        let mut config = AppConfig::default();
        config.game.yellow = AgentKind::Human;
        App::new(&config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_keyboard_drop_alternates_players() {
        let mut app = hot_seat();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.get(WIDTH / 2 - 1, HEIGHT - 1), Cell::Red);
        assert_eq!(app.current_player, Player::Yellow);
        assert!(!app.automatic_turn());
    }

    #[test]
    fn test_win_ends_game_and_restart_clears() {
        let mut app = hot_seat();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            app.drop_piece(col);
        }
        assert_eq!(app.outcome, Some(GameOutcome::Winner(Player::Red)));
        assert_eq!(app.message.as_deref(), Some("Red wins!"));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.board, Board::new());
        assert_eq!(app.outcome, None);
        assert_eq!(app.current_player, Player::Red);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = hot_seat();
        for _ in 0..HEIGHT {
            app.drop_piece(0);
        }
        app.drop_piece(0);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.board.token_count(), HEIGHT);
    }

    #[test]
    fn test_random_seat_plays_automatically() {
        let mut config = AppConfig::default();
        config.game.seed = Some(5);
        let mut app = App::new(&config);

        press(&mut app, KeyCode::Enter);
        assert!(app.automatic_turn());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.token_count(), 1);
        assert_eq!(app.message.as_deref(), Some("Waiting for Yellow to move"));
        app.play_automatic();
        assert_eq!(app.board.token_count(), 2);
        assert_eq!(app.current_player, Player::Red);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = hot_seat();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_between_automatic_moves() {
        let mut config = AppConfig::default();
        config.game.red = AgentKind::Random;
        config.game.seed = Some(11);
        let mut app = App::new(&config);

        app.play_automatic();
        assert!(app.automatic_turn());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
        assert_eq!(app.board.token_count(), 1);
    }
}
