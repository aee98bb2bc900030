use std::time::Duration;

use super::types::{Difficulty, GameMode, Mark};

pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(600);
pub const MAX_AI_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    pub ai_delay: Duration,
}

impl TicTacToeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.human_mark.is_player() {
            return Err("Human player must play X or O".to_string());
        }
        if self.ai_delay > MAX_AI_DELAY {
            return Err(format!(
                "AI delay must not exceed {} ms",
                MAX_AI_DELAY.as_millis()
            ));
        }
        Ok(())
    }

    pub fn ai_mark(&self) -> Mark {
        self.human_mark.opponent().unwrap_or(Mark::O)
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            difficulty: Difficulty::Medium,
            human_mark: Mark::X,
            ai_delay: DEFAULT_AI_DELAY,
        }
    }
}
