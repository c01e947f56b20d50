use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coords::Coord;

pub const ROWS: usize = 8;
pub const COLS: usize = 8;
pub const MINES: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub revealed: bool,
    pub has_mine: bool,
    pub flagged: bool,
    pub adjacent_mines: u8,
}

/// The minefield. Serializes as a plain row-major array of cell records,
/// the same shape the bot has always written to `game-state.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cells = Vec::<Vec<Cell>>::deserialize(deserializer)?;
        // Coord guarantees in-bounds indexing, so a board that is not 8x8
        // must be rejected here rather than blow up on lookup later.
        if cells.len() != ROWS || cells.iter().any(|row| row.len() != COLS) {
            return Err(serde::de::Error::custom(format!(
                "board is not {ROWS}x{COLS}"
            )));
        }
        Ok(Self { cells })
    }
}

impl Board {
    fn empty() -> Self {
        Self {
            cells: (0..ROWS).map(|_| vec![Cell::default(); COLS]).collect(),
        }
    }

    /// Generates a board with exactly [`MINES`] mines placed uniformly at
    /// random, redrawing on collision with an already-mined cell.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::empty();

        let mut placed = 0;
        while placed < MINES {
            let row = rng.random_range(0..ROWS);
            let col = rng.random_range(0..COLS);
            if board.cells[row][col].has_mine {
                continue;
            }
            board.place_mine(row, col);
            placed += 1;
        }

        board
    }

    pub fn random() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Builds a board with a fixed mine layout. Duplicate coordinates are
    /// ignored, so the mine count is the number of distinct entries.
    pub fn with_mines(mines: &[Coord]) -> Self {
        let mut board = Self::empty();
        for coord in mines {
            if !board.cells[coord.row()][coord.col()].has_mine {
                board.place_mine(coord.row(), coord.col());
            }
        }
        board
    }

    fn place_mine(&mut self, row: usize, col: usize) {
        self.cells[row][col].has_mine = true;
        for neighbor in Coord::neighbors_of(row, col) {
            self.cells[neighbor.row()][neighbor.col()].adjacent_mines += 1;
        }
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord.row()][coord.col()]
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        &mut self.cells[coord.row()][coord.col()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    pub fn mine_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.has_mine)
            .count()
    }

    /// True iff every non-mine cell is revealed, the win condition.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|cell| cell.has_mine || cell.revealed)
    }

    pub(crate) fn reveal_mines(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.has_mine {
                cell.revealed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn generated_board_has_exactly_ten_mines() {
        let board = Board::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(board.mine_count(), MINES);
    }

    #[test]
    fn generation_is_deterministic_for_a_seeded_rng() {
        let a = Board::generate(&mut StdRng::seed_from_u64(7));
        let b = Board::generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn adjacency_counts_match_mined_neighbors() {
        let board = Board::generate(&mut StdRng::seed_from_u64(1234));

        for row in 0..ROWS {
            for col in 0..COLS {
                let expected = Coord::neighbors_of(row, col)
                    .filter(|&n| board.cell(n).has_mine)
                    .count();
                assert_eq!(
                    board.cell(at(row, col)).adjacent_mines as usize,
                    expected,
                    "adjacency mismatch at {}",
                    at(row, col)
                );
            }
        }
    }

    #[test]
    fn with_mines_increments_neighbors_once_per_mine() {
        let board = Board::with_mines(&[at(0, 0), at(0, 2)]);

        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.cell(at(0, 1)).adjacent_mines, 2);
        assert_eq!(board.cell(at(1, 1)).adjacent_mines, 2);
        assert_eq!(board.cell(at(1, 0)).adjacent_mines, 1);
        assert_eq!(board.cell(at(0, 0)).adjacent_mines, 0);
        assert_eq!(board.cell(at(3, 3)).adjacent_mines, 0);
    }

    #[test]
    fn with_mines_ignores_duplicates() {
        let board = Board::with_mines(&[at(4, 4), at(4, 4)]);

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.cell(at(4, 5)).adjacent_mines, 1);
    }

    #[test]
    fn deserialization_rejects_wrong_shaped_boards() {
        let board = Board::with_mines(&[at(0, 0)]);
        let mut value = serde_json::to_value(&board).unwrap();
        value.as_array_mut().unwrap().pop();

        assert!(serde_json::from_value::<Board>(value).is_err());
        let round_trip: Board = serde_json::from_str(&serde_json::to_string(&board).unwrap()).unwrap();
        assert_eq!(round_trip, board);
    }

    #[test]
    fn corner_mine_touches_only_three_neighbors() {
        let board = Board::with_mines(&[at(7, 7)]);

        let touched: usize = (0..ROWS)
            .flat_map(|r| (0..COLS).map(move |c| (r, c)))
            .filter(|&(r, c)| board.cell(at(r, c)).adjacent_mines > 0)
            .count();
        assert_eq!(touched, 3);
    }
}
