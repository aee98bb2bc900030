use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::types::{CELL_COUNT, Difficulty, Mark};
use super::win_detector::check_win;

pub const MEDIUM_RANDOM_MOVE_PROBABILITY: f64 = 0.3;
pub const DEFAULT_DEPTH_LIMIT: usize = 6;
pub const ENDGAME_DEPTH_LIMIT: usize = 9;
pub const ENDGAME_EMPTY_THRESHOLD: usize = 5;
pub const WIN_SCORE: i32 = 10;

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const PRIORITY_MOVES: [usize; 5] = [4, 0, 2, 6, 8];
/// Root positions with at least this many empty cells skip the search.
pub const PRIORITY_MOVE_MIN_EMPTY: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxResult {
    pub score: i32,
    pub best_move: Option<usize>,
}

pub fn select_move(
    board: &Board,
    ai_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    if !ai_mark.is_player() {
        return None;
    }

    if let Some(index) = calculate_opening_move(board, rng) {
        return Some(index);
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_RANDOM_MOVE_PROBABILITY) {
                calculate_random_move(board, rng)
            } else {
                calculate_hard_move(board, ai_mark)
            }
        }
        Difficulty::Hard => calculate_hard_move(board, ai_mark),
    }
}

/// Fixed replies for the first two plies: center on an empty board, then a
/// random corner if the opponent took the center, otherwise the center.
pub fn calculate_opening_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    match board.empty_count() {
        CELL_COUNT => Some(CENTER),
        n if n == CELL_COUNT - 1 => {
            if board[CENTER] != Mark::Empty {
                rng.choose(&CORNERS)
            } else {
                Some(CENTER)
            }
        }
        _ => None,
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    rng.choose(&available_moves)
}

fn calculate_hard_move(board: &Board, ai_mark: Mark) -> Option<usize> {
    let depth_limit = calculate_depth_limit(board.empty_count());
    calculate_minimax_move(board, ai_mark, depth_limit).best_move
}

pub fn calculate_depth_limit(empty_count: usize) -> usize {
    if empty_count <= ENDGAME_EMPTY_THRESHOLD {
        ENDGAME_DEPTH_LIMIT
    } else {
        DEFAULT_DEPTH_LIMIT
    }
}

pub fn calculate_minimax_move(board: &Board, ai_mark: Mark, max_depth: usize) -> MinimaxResult {
    let Some(opponent_mark) = ai_mark.opponent() else {
        return MinimaxResult {
            score: 0,
            best_move: None,
        };
    };
    minimax(board, ai_mark, opponent_mark, 0, max_depth, true, i32::MIN, i32::MAX)
}

fn minimax(
    board: &Board,
    ai_mark: Mark,
    opponent_mark: Mark,
    depth: usize,
    max_depth: usize,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> MinimaxResult {
    let winner = check_win(board);
    if winner.is_some() || board.is_full() || depth >= max_depth {
        let score = match winner {
            Some(mark) if mark == ai_mark => WIN_SCORE - depth as i32,
            Some(_) => depth as i32 - WIN_SCORE,
            None => 0,
        };
        return MinimaxResult {
            score,
            best_move: None,
        };
    }

    let moves = get_available_moves(board);

    if depth == 0
        && moves.len() >= PRIORITY_MOVE_MIN_EMPTY
        && let Some(&index) = PRIORITY_MOVES.iter().find(|index| moves.contains(index))
    {
        return MinimaxResult {
            score: 0,
            best_move: Some(index),
        };
    }

    let player = if is_maximizing { ai_mark } else { opponent_mark };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for index in moves {
        let next_board = board.placed(index, player);
        let result = minimax(
            &next_board,
            ai_mark,
            opponent_mark,
            depth + 1,
            max_depth,
            !is_maximizing,
            alpha,
            beta,
        );

        if is_maximizing {
            if result.score > best_score {
                best_score = result.score;
                best_move = Some(index);
            }
            alpha = alpha.max(best_score);
        } else {
            if result.score < best_score {
                best_score = result.score;
                best_move = Some(index);
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            break;
        }
    }

    MinimaxResult {
        score: best_score,
        best_move,
    }
}
