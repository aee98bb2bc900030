use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_player(&self) -> bool {
        *self != Mark::Empty
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '_' | '.' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '_',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Mark::X),
            "o" => Ok(Mark::O),
            other => Err(format!("Unknown player mark '{}', expected x or o", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine(pub [usize; 3]);

impl WinningLine {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

// Scan order: the first complete line is the one reported.
pub const LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameVerdict {
    pub is_over: bool,
    pub winner: Option<Mark>,
    pub is_draw: bool,
    pub winning_line: Option<WinningLine>,
}

impl GameVerdict {
    pub fn ongoing() -> Self {
        Self {
            is_over: false,
            winner: None,
            is_draw: false,
            winning_line: None,
        }
    }

    pub fn won(mark: Mark, line: WinningLine) -> Self {
        debug_assert!(mark.is_player());
        Self {
            is_over: true,
            winner: Some(mark),
            is_draw: false,
            winning_line: Some(line),
        }
    }

    pub fn draw() -> Self {
        Self {
            is_over: true,
            winner: None,
            is_draw: true,
            winning_line: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(Mark::X), _) => GameStatus::XWon,
            (Some(Mark::O), _) => GameStatus::OWon,
            (_, true) => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }

    pub fn message(&self) -> Option<String> {
        match self.status() {
            GameStatus::XWon | GameStatus::OWon => {
                self.winner.map(|mark| format!("{} wins!", mark))
            }
            GameStatus::Draw => Some("It's a draw!".to_string()),
            GameStatus::InProgress => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsAi,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "hvh" | "pvp" => Ok(GameMode::HumanVsHuman),
            "ai" | "hva" | "bot" => Ok(GameMode::HumanVsAi),
            other => Err(format!("Unknown game mode '{}', expected human or ai", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_verdict_invariants() {
        for verdict in [
            GameVerdict::ongoing(),
            GameVerdict::won(Mark::O, LINES[4]),
            GameVerdict::draw(),
        ] {
            assert_eq!(verdict.is_over, verdict.winner.is_some() || verdict.is_draw);
            if verdict.is_draw {
                assert_eq!(verdict.winner, None);
            }
        }
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(
            GameVerdict::won(Mark::X, LINES[0]).message().as_deref(),
            Some("X wins!")
        );
        assert_eq!(GameVerdict::draw().message().as_deref(), Some("It's a draw!"));
        assert_eq!(GameVerdict::ongoing().message(), None);
    }

    #[test]
    fn test_parse_settings_values() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" ai ".parse::<GameMode>(), Ok(GameMode::HumanVsAi));
        assert_eq!("o".parse::<Mark>(), Ok(Mark::O));
        assert!("impossible".parse::<Difficulty>().is_err());
        assert!("_".parse::<Mark>().is_err());
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for index in 0..CELL_COUNT {
            assert!(LINES.iter().any(|line| line.contains(index)));
        }
    }
}
