use std::io::{self, Write};

use common::games::tictactoe::{
    BOARD_SIZE, Board, GameMode, GameVerdict, Mark, Scores, TicTacToeGameState,
    TicTacToeSessionSettings,
};
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use crate::theme::{ThemePalette, ThemeSettings};

/// Rows printed by [`draw_board`], used to move the cursor back for a redraw.
pub const BOARD_HEIGHT: u16 = (BOARD_SIZE * 2 - 1) as u16;

const ROW_SEPARATOR: &str = "---+---+---";

fn cell_text(board: &Board, index: usize, palette: &ThemePalette, highlight: bool) -> String {
    let mark = board[index];
    let content = match mark {
        Mark::Empty => format!(" {} ", index + 1).with(palette.label).dim(),
        _ => format!(" {} ", mark).with(palette.mark_color(mark)).bold(),
    };
    if highlight {
        content.on(palette.win).to_string()
    } else {
        content.to_string()
    }
}

/// Board rows with empty cells showing their 1-based number.
pub fn board_lines(
    board: &Board,
    verdict: &GameVerdict,
    theme: &ThemeSettings,
    highlight: bool,
) -> Vec<String> {
    let palette = theme.palette();
    let separator = ROW_SEPARATOR.with(palette.accent).to_string();
    let divider = "|".with(palette.accent).to_string();
    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);

    for row in 0..BOARD_SIZE {
        if row > 0 {
            lines.push(separator.clone());
        }
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                let in_line = verdict.winning_line.is_some_and(|line| line.contains(index));
                cell_text(board, index, palette, highlight && in_line)
            })
            .collect();
        lines.push(cells.join(&divider));
    }
    lines
}

pub fn status_text(game: &TicTacToeGameState) -> String {
    let verdict = game.verdict();
    if let Some(winner) = verdict.winner {
        return format!("Winner: {}", winner);
    }
    if verdict.is_draw {
        return "Game ended in a draw!".to_string();
    }
    if game.is_ai_pending() || game.is_ai_turn() {
        return "AI is thinking...".to_string();
    }
    format!("{}'s turn", game.current_mark())
}

pub fn settings_text(settings: &TicTacToeSessionSettings) -> String {
    match settings.mode {
        GameMode::HumanVsHuman => settings.mode.to_string(),
        GameMode::HumanVsAi => format!(
            "{} ({}), you play {}",
            settings.mode, settings.difficulty, settings.human_mark
        ),
    }
}

pub fn scores_text(scores: &Scores) -> String {
    format!("X: {}  O: {}  Ties: {}", scores.x, scores.o, scores.ties)
}

/// Timeline of the current game; the entry being shown is marked with `>`.
pub fn history_lines(game: &TicTacToeGameState) -> Vec<String> {
    game.move_labels()
        .into_iter()
        .enumerate()
        .map(|(ply, label)| {
            let marker = if ply == game.current_move() { '>' } else { ' ' };
            format!("{} {:>2}: {}", marker, ply, label)
        })
        .collect()
}

pub fn draw_board<W: Write>(
    out: &mut W,
    game: &TicTacToeGameState,
    theme: &ThemeSettings,
    highlight: bool,
) -> io::Result<()> {
    for line in board_lines(&game.current_board(), &game.verdict(), theme, highlight) {
        queue!(out, Clear(ClearType::CurrentLine), Print(line), Print("\n"))?;
    }
    out.flush()
}

/// Redraws a board printed directly above the cursor.
pub fn redraw_board<W: Write>(
    out: &mut W,
    game: &TicTacToeGameState,
    theme: &ThemeSettings,
    highlight: bool,
) -> io::Result<()> {
    queue!(out, MoveUp(BOARD_HEIGHT), MoveToColumn(0))?;
    draw_board(out, game, theme, highlight)
}

pub fn draw_status<W: Write>(
    out: &mut W,
    game: &TicTacToeGameState,
    theme: &ThemeSettings,
) -> io::Result<()> {
    let palette = theme.palette();
    let status = status_text(game).with(palette.heading).bold();
    let settings = settings_text(game.settings()).with(palette.label);
    queue!(
        out,
        Print(status),
        Print("  "),
        Print(settings),
        Print("\n")
    )?;
    out.flush()
}

pub fn draw_notification<W: Write>(
    out: &mut W,
    message: &str,
    theme: &ThemeSettings,
) -> io::Result<()> {
    queue!(
        out,
        Print(format!("* {}", message).with(theme.palette().accent)),
        Print("\n")
    )?;
    out.flush()
}

pub fn draw_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    queue!(out, Print(format!("! {}", message).red()), Print("\n"))?;
    out.flush()
}

pub fn draw_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        queue!(out, Print(line), Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::Difficulty;
    use std::time::Duration;

    fn ai_settings() -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: GameMode::HumanVsAi,
            difficulty: Difficulty::Hard,
            human_mark: Mark::X,
            ai_delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_board_has_five_rows() {
        let theme = ThemeSettings::default();
        let lines = board_lines(&Board::new(), &GameVerdict::ongoing(), &theme, false);
        assert_eq!(lines.len(), BOARD_HEIGHT as usize);
    }

    #[test]
    fn test_empty_cells_show_their_number() {
        let theme = ThemeSettings::default();
        let board: Board = "X__ _O_ ___".parse().unwrap();
        let lines = board_lines(&board, &GameVerdict::ongoing(), &theme, false);
        assert!(lines[0].contains(" X "));
        assert!(lines[0].contains(" 2 "));
        assert!(lines[2].contains(" O "));
        assert!(lines[4].contains(" 9 "));
    }

    #[test]
    fn test_status_text() {
        let mut game = TicTacToeGameState::new(TicTacToeSessionSettings::default()).unwrap();
        assert_eq!(status_text(&game), "X's turn");
        game.place_mark(0).unwrap();
        assert_eq!(status_text(&game), "O's turn");

        for index in [3, 1, 4, 2] {
            game.place_mark(index).unwrap();
        }
        assert_eq!(status_text(&game), "Winner: X");
    }

    #[test]
    fn test_status_text_draw() {
        let mut game = TicTacToeGameState::new(TicTacToeSessionSettings::default()).unwrap();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.place_mark(index).unwrap();
        }
        assert_eq!(status_text(&game), "Game ended in a draw!");
    }

    #[test]
    fn test_status_text_while_ai_moves() {
        let mut game = TicTacToeGameState::new(ai_settings()).unwrap();
        game.place_mark(0).unwrap();
        assert_eq!(status_text(&game), "AI is thinking...");
        game.begin_ai_turn().unwrap();
        assert_eq!(status_text(&game), "AI is thinking...");
        game.complete_ai_turn(&mut SessionRng::new(3)).unwrap();
        assert_eq!(status_text(&game), "X's turn");
    }

    #[test]
    fn test_settings_text() {
        assert_eq!(settings_text(&TicTacToeSessionSettings::default()), "Human vs Human");
        assert_eq!(settings_text(&ai_settings()), "Human vs AI (hard), you play X");
    }

    #[test]
    fn test_history_marks_current_move() {
        let mut game = TicTacToeGameState::new(TicTacToeSessionSettings::default()).unwrap();
        game.place_mark(4).unwrap();
        game.place_mark(0).unwrap();
        game.jump_to(1).unwrap();
        let lines = history_lines(&game);
        assert_eq!(lines, vec!["   0: Start", ">  1: #1", "   2: #2"]);
    }

    #[test]
    fn test_scores_text() {
        let scores = Scores { x: 2, o: 1, ties: 3 };
        assert_eq!(scores_text(&scores), "X: 2  O: 1  Ties: 3");
    }

    #[test]
    fn test_draw_board_writes_rows() {
        let game = TicTacToeGameState::new(TicTacToeSessionSettings::default()).unwrap();
        let mut out = Vec::new();
        draw_board(&mut out, &game, &ThemeSettings::default(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), BOARD_HEIGHT as usize);
    }
}
