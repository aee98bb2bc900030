use super::board::Board;
use super::types::{GameVerdict, LINES, Mark, WinningLine};

pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinningLine)> {
    for line in LINES {
        let [a, b, c] = line.cells();
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            return Some((mark, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn evaluate(board: &Board) -> GameVerdict {
    if let Some((mark, line)) = check_win_with_line(board) {
        return GameVerdict::won(mark, line);
    }

    if board.is_full() {
        return GameVerdict::draw();
    }

    GameVerdict::ongoing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::GameStatus;

    const X_WINS: [&str; 8] = [
        "XXX XOO OXO",
        "XOO XXX OXO",
        "XOO OOX XXX",
        "XXO XOX XOO",
        "XXO OXX OXO",
        "XOX OOX OXX",
        "XXO OXO OOX",
        "XOX OXO XOO",
    ];

    fn swap_marks(board: &str) -> String {
        board
            .chars()
            .map(|c| match c {
                'X' => 'O',
                'O' => 'X',
                other => other,
            })
            .collect()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        let verdict = evaluate(&Board::new());
        assert_eq!(verdict, GameVerdict::ongoing());
        assert_eq!(verdict.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_every_line_is_detected() {
        for (line, text) in LINES.iter().zip(X_WINS) {
            for (winner, text) in [(Mark::X, text.to_string()), (Mark::O, swap_marks(text))] {
                let board: Board = text.parse().unwrap();
                let verdict = evaluate(&board);
                assert!(verdict.is_over, "line {:?} on\n{}", line, board);
                assert_eq!(verdict.winner, Some(winner));
                assert!(!verdict.is_draw);
                assert_eq!(verdict.winning_line, Some(*line));
            }
        }
    }

    #[test]
    fn test_single_line_reported_exactly() {
        let board: Board = "OX_ OX_ _XO".parse().unwrap();
        let verdict = evaluate(&board);
        assert_eq!(verdict.winner, Some(Mark::X));
        assert_eq!(verdict.winning_line, Some(WinningLine([1, 4, 7])));

        let board: Board = "X_O XO_ O_X".parse().unwrap();
        let verdict = evaluate(&board);
        assert_eq!(verdict.winner, Some(Mark::O));
        assert_eq!(verdict.winning_line, Some(WinningLine([2, 4, 6])));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        let verdict = evaluate(&board);
        assert!(verdict.is_over);
        assert!(verdict.is_draw);
        assert_eq!(verdict.winner, None);
        assert_eq!(verdict.winning_line, None);
        assert_eq!(verdict.status(), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        let verdict = evaluate(&board);
        assert_eq!(verdict.winner, Some(Mark::X));
        assert!(!verdict.is_draw);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        let board: Board = "XO_ _X_ __O".parse().unwrap();
        assert!(!evaluate(&board).is_over);
    }

    #[test]
    fn test_double_completion_reports_first_line_in_scan_order() {
        let board: Board = "XXX X__ X__".parse().unwrap();
        let verdict = evaluate(&board);
        assert_eq!(verdict.winning_line, Some(WinningLine([0, 1, 2])));

        let board: Board = "O_O _O_ O_O".parse().unwrap();
        assert_eq!(evaluate(&board).winning_line, Some(WinningLine([0, 4, 8])));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board: Board = "OOO XX_ X__".parse().unwrap();
        let first = evaluate(&board);
        for _ in 0..5 {
            assert_eq!(evaluate(&board), first);
        }
    }

    #[test]
    fn test_check_win() {
        let board: Board = "O__ _O_ __O".parse().unwrap();
        assert_eq!(check_win(&board), Some(Mark::O));
        assert_eq!(check_win(&Board::new()), None);
    }
}
