use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if index >= CELL_COUNT {
            return Err(format!("Cell index {} out of bounds", index));
        }
        if self.cells[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }
        Ok(self.placed(index, mark))
    }

    pub(crate) fn placed(&self, index: usize, mark: Mark) -> Board {
        let mut cells = self.cells;
        cells[index] = mark;
        Board { cells }
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub fn is_empty(&self) -> bool {
        self.empty_count() == CELL_COUNT
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl TryFrom<&[Mark]> for Board {
    type Error = String;

    fn try_from(cells: &[Mark]) -> Result<Self, Self::Error> {
        let fixed: [Mark; CELL_COUNT] = cells.try_into().map_err(|_| {
            format!("Board must have exactly {} cells, got {}", CELL_COUNT, cells.len())
        })?;
        Ok(Self { cells: fixed })
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marks = Vec::with_capacity(CELL_COUNT);
        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' || c == ',' {
                continue;
            }
            let mark = Mark::from_char(c)
                .ok_or_else(|| format!("Invalid board character '{}'", c))?;
            marks.push(mark);
        }
        Board::try_from(marks.as_slice())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(|mark| mark.to_char()).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_ OO_ ___".parse().unwrap();
        assert_eq!(board[0], Mark::X);
        assert_eq!(board[4], Mark::O);
        assert_eq!(board[8], Mark::Empty);
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XX_OO".parse::<Board>().is_err());
        assert!("XX_OO____X".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        assert!("XX_OO___Z".parse::<Board>().is_err());
    }

    #[test]
    fn test_try_from_slice_requires_nine_cells() {
        let short = [Mark::X; 4];
        assert!(Board::try_from(&short[..]).is_err());
        let full = [Mark::O; 9];
        assert!(Board::try_from(&full[..]).unwrap().is_full());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert_eq!(board[4], Mark::Empty);
        assert_eq!(next[4], Mark::X);
    }

    #[test]
    fn test_with_mark_rejects_invalid_moves() {
        let board = Board::new().with_mark(0, Mark::X).unwrap();
        assert!(board.with_mark(0, Mark::O).is_err());
        assert!(board.with_mark(9, Mark::O).is_err());
        assert!(board.with_mark(1, Mark::Empty).is_err());
    }

    #[test]
    fn test_available_moves_in_index_order() {
        let board: Board = "X_O_X_O__".parse().unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 5, 7, 8]);
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 0));
        assert!(!is_valid_move(&board, 12));
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = "XO_|_X_|__O".parse().unwrap();
        assert_eq!(board.to_string(), "XO_\n_X_\n__O");
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }
}
