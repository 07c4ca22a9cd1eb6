use std::fmt;

use rand::Rng;

/// One of the four cardinal directions a guard can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        }
    }

    /// Uniform draw over the four directions.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A guard occupying a cell, with its current facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    pub row: usize,
    pub col: usize,
    pub facing: Facing,
}

/// Square grid of cell markers plus the guard roster derived from it.
///
/// Markers are opaque strings; the game logic owns the token set. The roster
/// is only populated while decoding a stored session and is rebuilt from
/// scratch on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTable {
    size: usize,
    cells: Vec<String>,
    pub guards: Vec<Guard>,
}

impl GameTable {
    /// An `size` x `size` table with every cell set to `fill`.
    pub fn new(size: usize, fill: &str) -> Self {
        GameTable {
            size,
            cells: vec![fill.to_string(); size * size],
            guards: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.cells[row * self.size + col]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, token: &str) {
        self.cells[row * self.size + col] = token.to_string();
    }

    /// Count of cells currently holding `token`.
    pub fn count_marker(&self, token: &str) -> usize {
        self.cells.iter().filter(|cell| *cell == token).count()
    }
}

impl fmt::Display for GameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cell(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major() {
        let mut table = GameTable::new(3, ".");
        table.set_cell(0, 2, "#");
        table.set_cell(2, 0, "G");
        assert_eq!(table.cell(0, 2), "#");
        assert_eq!(table.cell(2, 0), "G");
        assert_eq!(table.cell(1, 1), ".");
        assert_eq!(table.count_marker("G"), 1);
    }

    #[test]
    fn display_renders_rows() {
        let mut table = GameTable::new(2, ".");
        table.set_cell(0, 0, "#");
        assert_eq!(table.to_string(), "# .\n. .\n");
    }

    #[test]
    fn facing_covers_four_directions() {
        assert_eq!(Facing::ALL.len(), 4);
        let mut rng = rand::thread_rng();
        let facing = Facing::random(&mut rng);
        assert!(Facing::ALL.contains(&facing));
    }
}
