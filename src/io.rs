//! Text formats: move notation (`d4`, `aa12`, `swap-pieces`, `pass`) and board diagrams.
use std::fmt::{Debug, Display, Formatter, Write};
use std::str::FromStr;

use itertools::Itertools;

use crate::board::{HexBoard, Player};
use crate::error::InvalidNotation;
use crate::mv::{Move, MoveKind};
use crate::tile::Tile;

pub const SWAP_PIECES: &str = "swap-pieces";
pub const PASS: &str = "pass";

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Column index displayed as spreadsheet-style letters: `a..z`, then `aa, ab, ..., zz`.
/// Always at most [Tile::MAX_COL].
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct TileCol(u16);

impl TileCol {
    pub fn new(col: u16) -> Option<Self> {
        (col <= Tile::MAX_COL).then(|| TileCol(col))
    }

    pub fn index(self) -> u16 {
        self.0
    }
}

impl Display for TileCol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let n = LETTERS.len();
        let x = self.0 as usize;
        match LETTERS.get(x) {
            Some(&b) => f.pad(&(b as char).to_string()),
            None => {
                let b1 = LETTERS[x / n - 1] as char;
                let b0 = LETTERS[x % n] as char;
                f.pad(&format!("{}{}", b1, b0))
            }
        }
    }
}

impl FromStr for TileCol {
    type Err = InvalidNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidNotation(s.to_owned());
        let index = |c: u8| LETTERS.iter().position(|&cand| cand == c).ok_or_else(err);

        let x = match *s.as_bytes() {
            [c] => index(c)?,
            [c1, c0] => (1 + index(c1)?) * LETTERS.len() + index(c0)?,
            _ => return Err(err()),
        };
        u16::try_from(x).ok().and_then(TileCol::new).ok_or_else(err)
    }
}

impl Tile {
    pub fn col_disp(self) -> TileCol {
        TileCol(self.col())
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.col_disp(), self.row() as u32 + 1)
    }
}

impl FromStr for Tile {
    type Err = InvalidNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Move::from_str(s)?.kind() {
            MoveKind::Place(tile) => Ok(tile),
            MoveKind::SwapPieces | MoveKind::Pass => Err(InvalidNotation(s.to_owned())),
        }
    }
}

impl Display for MoveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveKind::Place(tile) => write!(f, "{}", tile),
            MoveKind::SwapPieces => write!(f, "{}", SWAP_PIECES),
            MoveKind::Pass => write!(f, "{}", PASS),
        }
    }
}

impl FromStr for MoveKind {
    type Err = InvalidNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::move_kind(s)
            .map(|(_, kind)| kind)
            .map_err(|_| InvalidNotation(s.to_owned()))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Parses a move in notation, stamped with the current time.
impl FromStr for Move {
    type Err = InvalidNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = MoveKind::from_str(s)?;
        Ok(Move::new(kind, chrono::Utc::now()))
    }
}

impl Move {
    /// Alias of [FromStr::from_str], for symmetry with `to_string`.
    pub fn from_string(s: &str) -> Result<Move, InvalidNotation> {
        s.parse()
    }
}

mod parse {
    use nom::branch::alt;
    use nom::bytes::complete::{tag, take_while_m_n};
    use nom::combinator::{all_consuming, map, map_res, value};
    use nom::sequence::pair;
    use nom::IResult;

    use super::*;

    pub fn move_kind(input: &str) -> IResult<&str, MoveKind> {
        all_consuming(alt((
            value(MoveKind::SwapPieces, tag(SWAP_PIECES)),
            value(MoveKind::Pass, tag(PASS)),
            map(tile, MoveKind::Place),
        )))(input)
    }

    fn tile(input: &str) -> IResult<&str, Tile> {
        let letters = take_while_m_n(1, 2, |c: char| c.is_ascii_lowercase());
        let digits = take_while_m_n(1, 2, |c: char| c.is_ascii_digit());

        map_res(pair(letters, digits), |(col, row): (&str, &str)| {
            let col = TileCol::from_str(col)?.0;
            let row = row.parse::<u16>().map_err(|_| InvalidNotation(row.to_owned()))?;
            if row == 0 {
                return Err(InvalidNotation(input.to_owned()));
            }
            Ok::<_, InvalidNotation>(Tile::new(row - 1, col))
        })(input)
    }
}

#[derive(Debug, Clone)]
pub struct InvalidGrid {
    pub grid: String,
    pub reason: &'static str,
}

/// Character used for a tile in grid strings and diagrams.
pub fn tile_symbol(owner: Option<Player>) -> char {
    match owner {
        None => '.',
        Some(Player::A) => 'x',
        Some(Player::B) => 'o',
    }
}

impl HexBoard {
    /// Parse a board from rows separated by `/`, using `.` for empty tiles, `x` for [Player::A]
    /// and `o` for [Player::B]. Whitespace is ignored.
    ///
    /// ```
    /// # use hex_game::board::{HexBoard, Player};
    /// let board = HexBoard::from_grid("x../.o./...").unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert_eq!(board.tile("b2".parse().unwrap()), Some(Player::B));
    /// ```
    pub fn from_grid(grid: &str) -> Result<HexBoard, InvalidGrid> {
        let err = |reason| InvalidGrid {
            grid: grid.to_owned(),
            reason,
        };

        let rows = grid
            .split('/')
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect_vec())
            .collect_vec();

        let size = rows.len();
        if size == 0 || size > HexBoard::MAX_SIZE as usize {
            return Err(err("Size out of range"));
        }
        let mut board = HexBoard::new(size as u8);

        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != size {
                return Err(err("Row length does not match the number of rows"));
            }
            for (col, &c) in chars.iter().enumerate() {
                let owner = match c {
                    '.' => None,
                    'x' => Some(Player::A),
                    'o' => Some(Player::B),
                    _ => return Err(err("Invalid character in grid")),
                };
                board.set_tile(Tile::new(row as u16, col as u16), owner);
            }
        }

        Ok(board)
    }

    /// The inverse of [HexBoard::from_grid].
    pub fn to_grid(&self) -> String {
        let mut s = String::new();
        for row in 0..self.size() as u16 {
            if row != 0 {
                s.push('/');
            }
            for col in 0..self.size() as u16 {
                s.push(tile_symbol(self.tile(Tile::new(row, col))));
            }
        }
        s
    }
}

impl Debug for HexBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HexBoard(\"{}\")", self.to_grid())
    }
}

impl Display for HexBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let size = self.size() as u16;
        let label_width = 2;

        let mut header = String::new();
        write!(&mut header, "{:w$} ", "", w = label_width)?;
        for col in 0..size {
            write!(&mut header, " {:<3}", TileCol(col))?;
        }
        writeln!(f, "{}", header.trim_end())?;

        for row in 0..size {
            write!(f, "{:>w$} {:indent$}", row + 1, "", w = label_width, indent = row as usize * 2)?;
            let line = (0..size)
                .map(|col| tile_symbol(self.tile(Tile::new(row, col))))
                .join("   ");
            writeln!(f, " {}", line)?;
        }

        Ok(())
    }
}
