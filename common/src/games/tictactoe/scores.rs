use super::types::{GameStatus, GameVerdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
    pub ties: u32,
}

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Returns false for verdicts that are still in progress.
    pub fn record(&mut self, verdict: &GameVerdict) -> bool {
        match verdict.status() {
            GameStatus::XWon => self.x += 1,
            GameStatus::OWon => self.o += 1,
            GameStatus::Draw => self.ties += 1,
            GameStatus::InProgress => return false,
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn games_played(&self) -> u32 {
        self.x + self.o + self.ties
    }
}
