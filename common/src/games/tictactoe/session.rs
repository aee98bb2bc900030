use crate::games::SessionRng;
use crate::log;
use super::game_state::TicTacToeGameState;
use super::scores::Scores;
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GameMode, GameVerdict, Mark};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    MoveApplied { index: usize, mark: Mark, by_ai: bool },
    GameOver(GameVerdict),
    NewGame,
    ScoresReset,
    SettingsChanged(String),
}

impl SessionEvent {
    pub fn notification(&self) -> Option<String> {
        match self {
            SessionEvent::MoveApplied { .. } => None,
            SessionEvent::GameOver(verdict) => verdict.message(),
            SessionEvent::NewGame => Some("New game started!".to_string()),
            SessionEvent::ScoresReset => Some("Scores reset!".to_string()),
            SessionEvent::SettingsChanged(message) => Some(message.clone()),
        }
    }
}

pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

impl SessionObserver for Vec<SessionEvent> {
    fn on_event(&mut self, event: &SessionEvent) {
        self.push(event.clone());
    }
}

/// A game plus the running score for everything played in this process.
pub struct TicTacToeSession<O: SessionObserver> {
    game: TicTacToeGameState,
    scores: Scores,
    rng: SessionRng,
    observer: O,
    last_verdict: GameVerdict,
}

impl<O: SessionObserver> TicTacToeSession<O> {
    pub fn new(
        settings: TicTacToeSessionSettings,
        rng: SessionRng,
        observer: O,
    ) -> Result<Self, String> {
        let game = TicTacToeGameState::new(settings)?;
        log!(
            "Session created: {}, difficulty {}, human plays {}, rng seed {}",
            settings.mode,
            settings.difficulty,
            settings.human_mark,
            rng.seed()
        );
        Ok(Self {
            game,
            scores: Scores::new(),
            rng,
            observer,
            last_verdict: GameVerdict::ongoing(),
        })
    }

    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        self.game.settings()
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameVerdict, String> {
        let mark = self.game.current_mark();
        let verdict = self.game.place_mark(index)?;
        log!("{} played cell {}", mark, index);
        self.after_move(index, mark, false);
        Ok(verdict)
    }

    pub fn begin_ai_turn(&mut self) -> Result<(), String> {
        self.game.begin_ai_turn()
    }

    pub fn complete_ai_turn(&mut self) -> Result<Option<usize>, String> {
        let mark = self.game.ai_mark();
        let chosen = self.game.complete_ai_turn(&mut self.rng)?;
        if let Some(index) = chosen {
            self.after_move(index, mark, true);
        }
        Ok(chosen)
    }

    pub fn play_ai_turn(&mut self) -> Result<Option<usize>, String> {
        self.begin_ai_turn()?;
        self.complete_ai_turn()
    }

    pub fn jump_to(&mut self, ply: usize) -> Result<(), String> {
        self.game.jump_to(ply)?;
        self.last_verdict = self.game.verdict();
        log!("Jumped to move {}", ply);
        Ok(())
    }

    pub fn new_game(&mut self) -> Result<(), String> {
        let settings = *self.game.settings();
        self.game.start_new_game(settings)?;
        self.last_verdict = GameVerdict::ongoing();
        log!("New game: {}, difficulty {}", settings.mode, settings.difficulty);
        self.emit(SessionEvent::NewGame);
        Ok(())
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.game.set_mode(mode);
        self.emit(SessionEvent::SettingsChanged(format!("Game mode changed to {}", mode)));
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.game.set_difficulty(difficulty);
        self.emit(SessionEvent::SettingsChanged(format!(
            "AI difficulty set to {}",
            difficulty
        )));
    }

    pub fn set_human_mark(&mut self, mark: Mark) -> Result<(), String> {
        self.game.set_human_mark(mark)?;
        self.emit(SessionEvent::SettingsChanged(format!("Playing as {}", mark)));
        Ok(())
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
        log!("Scores reset");
        self.emit(SessionEvent::ScoresReset);
    }

    fn after_move(&mut self, index: usize, mark: Mark, by_ai: bool) {
        self.emit(SessionEvent::MoveApplied { index, mark, by_ai });

        let verdict = self.game.verdict();
        if verdict.is_over && !self.last_verdict.is_over {
            self.scores.record(&verdict);
            log!(
                "Game over: {:?}, scores X {} / O {} / ties {}",
                verdict.status(),
                self.scores.x,
                self.scores.o,
                self.scores.ties
            );
            self.emit(SessionEvent::GameOver(verdict));
        }
        self.last_verdict = verdict;
    }

    fn emit(&mut self, event: SessionEvent) {
        self.observer.on_event(&event);
    }
}
