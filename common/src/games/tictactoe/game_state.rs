use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::select_move;
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GameMode, GameVerdict, Mark};
use super::win_detector::evaluate;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    history: Vec<Board>,
    current_move: usize,
    settings: TicTacToeSessionSettings,
    ai_pending: bool,
}

impl TicTacToeGameState {
    pub fn new(settings: TicTacToeSessionSettings) -> Result<Self, String> {
        settings.validate()?;
        Ok(Self {
            history: vec![Board::new()],
            current_move: 0,
            settings,
            ai_pending: false,
        })
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> Board {
        self.history[self.current_move]
    }

    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    pub fn current_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn ai_mark(&self) -> Mark {
        self.settings.ai_mark()
    }

    pub fn verdict(&self) -> GameVerdict {
        evaluate(&self.current_board())
    }

    pub fn is_ai_pending(&self) -> bool {
        self.ai_pending
    }

    pub fn game_in_progress(&self) -> bool {
        self.history.len() > 1
    }

    pub fn is_human_turn(&self) -> bool {
        self.settings.mode == GameMode::HumanVsHuman || self.current_mark() == self.settings.human_mark
    }

    pub fn is_ai_turn(&self) -> bool {
        self.settings.mode == GameMode::HumanVsAi && self.current_mark() == self.ai_mark()
    }

    pub fn needs_ai_move(&self) -> bool {
        self.is_ai_turn() && !self.ai_pending && !self.verdict().is_over
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameVerdict, String> {
        if self.verdict().is_over {
            return Err("Game is already over".to_string());
        }
        if self.ai_pending {
            return Err("Waiting for the AI to move".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.apply_move(index, self.current_mark())
    }

    pub fn begin_ai_turn(&mut self) -> Result<(), String> {
        if self.ai_pending {
            return Err("AI move already pending".to_string());
        }
        if !self.needs_ai_move() {
            return Err("No AI move needed".to_string());
        }
        self.ai_pending = true;
        Ok(())
    }

    pub fn complete_ai_turn(&mut self, rng: &mut SessionRng) -> Result<Option<usize>, String> {
        if !self.ai_pending {
            return Err("No AI move pending".to_string());
        }
        self.ai_pending = false;

        let ai_mark = self.ai_mark();
        let difficulty = self.settings.difficulty;
        let Some(index) = select_move(&self.current_board(), ai_mark, difficulty, rng) else {
            log!("AI ({}) found no legal move", difficulty);
            return Ok(None);
        };

        self.apply_move(index, ai_mark)?;
        log!("AI ({}) played {} at cell {}", difficulty, ai_mark, index);
        Ok(Some(index))
    }

    pub fn play_ai_turn(&mut self, rng: &mut SessionRng) -> Result<Option<usize>, String> {
        self.begin_ai_turn()?;
        self.complete_ai_turn(rng)
    }

    pub fn jump_to(&mut self, ply: usize) -> Result<(), String> {
        if ply >= self.history.len() {
            return Err(format!(
                "Move {} does not exist, history has {} moves",
                ply,
                self.history.len() - 1
            ));
        }
        self.current_move = ply;
        self.ai_pending = false;
        Ok(())
    }

    pub fn start_new_game(&mut self, settings: TicTacToeSessionSettings) -> Result<(), String> {
        settings.validate()?;
        self.settings = settings;
        self.history = vec![Board::new()];
        self.current_move = 0;
        self.ai_pending = false;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.ai_pending = false;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    pub fn set_human_mark(&mut self, mark: Mark) -> Result<(), String> {
        if !mark.is_player() {
            return Err("Human player must play X or O".to_string());
        }
        self.settings.human_mark = mark;
        self.ai_pending = false;
        Ok(())
    }

    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|ply| if ply == 0 { "Start".to_string() } else { format!("#{}", ply) })
            .collect()
    }

    fn apply_move(&mut self, index: usize, mark: Mark) -> Result<GameVerdict, String> {
        let next = self.current_board().with_mark(index, mark)?;
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        Ok(evaluate(&next))
    }
}
