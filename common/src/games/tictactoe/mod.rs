mod board;
mod bot_controller;
mod game_state;
mod scores;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{
    CENTER, CORNERS, DEFAULT_DEPTH_LIMIT, ENDGAME_DEPTH_LIMIT, ENDGAME_EMPTY_THRESHOLD,
    MEDIUM_RANDOM_MOVE_PROBABILITY, MinimaxResult, PRIORITY_MOVES, PRIORITY_MOVE_MIN_EMPTY,
    WIN_SCORE, calculate_depth_limit, calculate_minimax_move, calculate_opening_move,
    calculate_random_move, select_move,
};
pub use game_state::TicTacToeGameState;
pub use scores::Scores;
pub use session::{SessionEvent, SessionObserver, TicTacToeSession};
pub use settings::{DEFAULT_AI_DELAY, MAX_AI_DELAY, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Difficulty, GameMode, GameStatus, GameVerdict, LINES, Mark,
    WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
