use std::fmt::{Debug, Formatter};

/// A cell on the rhombus, addressed by `row` (top to bottom) and `col` (left to right).
///
/// Tiles exist independently of a board size so moves can be constructed and parsed before they are
/// validated against a board, see [HexBoard::check_move](crate::board::HexBoard::check_move).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tile {
    row: u16,
    col: u16,
}

/// The six hex directions, named as seen on a rhombus that leans to the right.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
}

impl Direction {
    /// All directions, in the order neighbours are visited by the connectivity search.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
    ];
}

impl Tile {
    /// The largest row index that still has a notation (rows are written with at most two digits).
    pub const MAX_ROW: u16 = 98;
    /// The largest column index that still has a notation (`zz`).
    pub const MAX_COL: u16 = 26 * 26 + 25;

    pub fn new(row: u16, col: u16) -> Self {
        assert!(
            row <= Self::MAX_ROW && col <= Self::MAX_COL,
            "Coordinates ({}, {}) too large, max=({}, {})",
            row,
            col,
            Self::MAX_ROW,
            Self::MAX_COL,
        );
        Tile { row, col }
    }

    /// Like [Tile::new] but returns `None` for coordinates that are negative or have no notation.
    pub fn try_new(row: i64, col: i64) -> Option<Self> {
        let row = u16::try_from(row).ok()?;
        let col = u16::try_from(col).ok()?;
        if row <= Self::MAX_ROW && col <= Self::MAX_COL {
            Some(Tile { row, col })
        } else {
            None
        }
    }

    pub fn row(self) -> u16 {
        self.row
    }

    pub fn col(self) -> u16 {
        self.col
    }

    /// All tiles of a board with the given size, in increasing `(row, col)` order.
    pub fn all(size: u8) -> impl Iterator<Item = Tile> {
        let size = size as u16;
        (0..size).flat_map(move |row| (0..size).map(move |col| Tile::new(row, col)))
    }

    pub fn exists(self, size: u8) -> bool {
        self.row < size as u16 && self.col < size as u16
    }

    /// The index of this tile in a flat row-major array. Only meaningful if the tile exists.
    pub fn index(self, size: u8) -> usize {
        debug_assert!(self.exists(size));
        self.row as usize * size as usize + self.col as usize
    }

    pub fn from_index(index: usize, size: u8) -> Tile {
        let size = size as usize;
        assert!(index < size * size);
        Tile::new((index / size) as u16, (index % size) as u16)
    }

    /// The tile with row and column swapped, used by the swap rule.
    /// Panics if the column is too large to be a row, which never happens for tiles on a board.
    #[must_use]
    pub fn mirror(self) -> Tile {
        Tile::new(self.col, self.row)
    }

    pub fn adjacent_in(self, dir: Direction, size: u8) -> Option<Tile> {
        let (row, col) = match dir {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::UpRight => (self.row.checked_sub(1)?, self.col.checked_add(1)?),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col.checked_add(1)?),
            Direction::DownLeft => (self.row.checked_add(1)?, self.col.checked_sub(1)?),
            Direction::Down => (self.row.checked_add(1)?, self.col),
        };
        let size = size as u16;
        if row < size && col < size {
            Some(Tile { row, col })
        } else {
            None
        }
    }

    /// The existing neighbours of this tile, in [Direction::ALL] order.
    pub fn all_adjacent(self, size: u8) -> impl Iterator<Item = Tile> + Clone {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.adjacent_in(dir, size))
    }

    pub fn is_adjacent(self, other: Tile) -> bool {
        let dr = other.row as i32 - self.row as i32;
        let dc = other.col as i32 - self.col as i32;
        matches!((dr, dc), (-1, 0) | (-1, 1) | (0, -1) | (0, 1) | (1, -1) | (1, 0))
    }
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile(({}, {}), {})", self.row, self.col, self)
    }
}
