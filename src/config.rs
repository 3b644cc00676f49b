use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::Path;
use std::rc::Rc;

use crate::agent::{Agent, HumanAgent, PlaceholderAgent, RandomAgent};
use crate::error::{ConfigError, GameError};
use crate::game::{Game, Player};

/// Who plays a seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Human,
    Random,
    Placeholder,
}

impl AgentKind {
    /// Build a non-interactive agent for `color`. Human seats are driven by
    /// the front end, so they return `None`.
    pub fn build_automatic(self, color: Player, seed: Option<u64>) -> Option<Box<dyn Agent>> {
        match self {
            AgentKind::Human => None,
            AgentKind::Random => Some(Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(color, seed),
                None => RandomAgent::new(color),
            })),
            AgentKind::Placeholder => Some(Box::new(PlaceholderAgent::new(color))),
        }
    }
}

/// Seats and starting player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub red: AgentKind,
    pub yellow: AgentKind,
    pub first: Player,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            red: AgentKind::Human,
            yellow: AgentKind::Random,
            first: Player::Red,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn seat(&self, player: Player) -> AgentKind {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    /// Seed for one seat, offset so both random seats do not mirror each other.
    pub fn seed_for(&self, player: Player) -> Option<u64> {
        self.seed.map(|seed| match player {
            Player::Red => seed,
            Player::Yellow => seed.wrapping_add(1),
        })
    }

    /// Build a game from the configured seats. Human seats all read from the
    /// one `input`; `output` gives each human seat its own writer.
    pub fn build_game<R, W>(
        &self,
        input: R,
        mut output: impl FnMut(Player) -> W,
    ) -> Result<Game, GameError>
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        let input = Rc::new(RefCell::new(input));
        let mut seat = |color: Player| -> Box<dyn Agent> {
            self.seat(color)
                .build_automatic(color, self.seed_for(color))
                .unwrap_or_else(|| {
                    Box::new(HumanAgent::shared(color, Rc::clone(&input), output(color)))
                })
        };
        let red = seat(Player::Red);
        let yellow = seat(Player::Yellow);
        Game::new(red, yellow, self.first)
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key press before redrawing, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Extra checks for the terminal UI, which only knows human and random
    /// seats.
    pub fn validate_for_tui(&self) -> Result<(), ConfigError> {
        self.validate()?;
        for player in [Player::Red, Player::Yellow] {
            if self.game.seat(player) == AgentKind::Placeholder {
                return Err(ConfigError::Validation(format!(
                    "game.{} = \"placeholder\" is not supported by the terminal UI",
                    player.name().to_lowercase()
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
