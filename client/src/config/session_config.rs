use std::time::Duration;

use common::config::Validate;
use common::games::tictactoe::{
    DEFAULT_AI_DELAY, Difficulty, GameMode, Mark, TicTacToeSessionSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    pub ai_delay_ms: u64,
}

impl SessionConfig {
    pub fn to_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.mode,
            difficulty: self.difficulty,
            human_mark: self.human_mark,
            ai_delay: Duration::from_millis(self.ai_delay_ms),
        }
    }

    pub fn update_from_settings(&mut self, settings: &TicTacToeSessionSettings) {
        self.mode = settings.mode;
        self.difficulty = settings.difficulty;
        self.human_mark = settings.human_mark;
        self.ai_delay_ms = settings.ai_delay.as_millis() as u64;
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_settings().validate()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        let settings = TicTacToeSessionSettings::default();
        Self {
            mode: settings.mode,
            difficulty: settings.difficulty,
            human_mark: settings.human_mark,
            ai_delay_ms: DEFAULT_AI_DELAY.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_config_matches_default_settings() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.to_settings(), TicTacToeSessionSettings::default());
    }

    #[test]
    fn test_empty_human_mark_is_rejected() {
        let config = SessionConfig {
            human_mark: Mark::Empty,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ai_delay_limit() {
        let config = SessionConfig {
            ai_delay_ms: 10_000,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SessionConfig {
            ai_delay_ms: 0,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_update_from_settings() {
        let mut config = SessionConfig::default();
        let settings = TicTacToeSessionSettings {
            mode: GameMode::HumanVsAi,
            difficulty: Difficulty::Hard,
            human_mark: Mark::O,
            ai_delay: Duration::from_millis(250),
        };
        config.update_from_settings(&settings);
        assert_eq!(config.mode, GameMode::HumanVsAi);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.human_mark, Mark::O);
        assert_eq!(config.ai_delay_ms, 250);
    }
}
