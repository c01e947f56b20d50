use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{COLS, ROWS};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("not a valid board coordinate (expected a letter A-H and a row 1-8)")]
pub struct ParseCoordError;

/// A validated board position. `row` and `col` are always within the 8x8
/// grid, so lookups through a `Coord` never go out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// The up-to-8 surrounding positions, clamped at the board edges.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Self::neighbors_of(self.row, self.col)
    }

    pub fn neighbors_of(row: usize, col: usize) -> impl Iterator<Item = Coord> {
        let row_range = row.saturating_sub(1)..=(row + 1).min(ROWS - 1);
        row_range.flat_map(move |r| {
            let col_range = col.saturating_sub(1)..=(col + 1).min(COLS - 1);
            col_range
                .map(move |c| Coord { row: r, col: c })
                .filter(move |n| n.row != row || n.col != col)
        })
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses a label like `A1` or `h8`: column letter first, then the row
    /// number. Anything malformed or off the board is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_uppercase();
        if label.len() < 2 || label.len() > 3 {
            return Err(ParseCoordError);
        }

        let col_char = label.chars().next().ok_or(ParseCoordError)?;
        if !col_char.is_ascii_uppercase() || col_char >= (b'A' + COLS as u8) as char {
            return Err(ParseCoordError);
        }

        let row: usize = label[1..].parse().map_err(|_| ParseCoordError)?;
        if !(1..=ROWS).contains(&row) {
            return Err(ParseCoordError);
        }

        Ok(Self {
            row: row - 1,
            col: (col_char as u8 - b'A') as usize,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(label: &str) -> Coord {
        label.parse().unwrap()
    }

    #[test]
    fn parses_corner_labels() {
        assert_eq!(parsed("A1"), Coord::new(0, 0).unwrap());
        assert_eq!(parsed("H8"), Coord::new(7, 7).unwrap());
    }

    #[test]
    fn is_case_insensitive_and_trims_whitespace() {
        assert_eq!(parsed(" b3 "), Coord::new(2, 1).unwrap());
        assert_eq!(parsed("h1"), Coord::new(0, 7).unwrap());
    }

    #[test]
    fn rejects_out_of_range_and_malformed_labels() {
        for label in ["I1", "A9", "A0", "", "A", "A10", "11", "AA", "1A", "A-1"] {
            assert_eq!(label.parse::<Coord>(), Err(ParseCoordError), "{label:?}");
        }
    }

    #[test]
    fn displays_as_the_original_label() {
        assert_eq!(parsed("A1").to_string(), "A1");
        assert_eq!(parsed("g7").to_string(), "G7");
    }

    #[test]
    fn new_rejects_out_of_bounds_indices() {
        assert!(Coord::new(8, 0).is_none());
        assert!(Coord::new(0, 8).is_none());
        assert!(Coord::new(3, 5).is_some());
    }

    #[test]
    fn interior_cell_has_eight_neighbors_and_corner_has_three() {
        assert_eq!(Coord::new(4, 4).unwrap().neighbors().count(), 8);
        assert_eq!(Coord::new(0, 0).unwrap().neighbors().count(), 3);
        assert_eq!(Coord::new(0, 4).unwrap().neighbors().count(), 5);
    }
}
