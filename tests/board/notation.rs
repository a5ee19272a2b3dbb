use proptest::prelude::*;

use hex_game::error::InvalidNotation;
use hex_game::io::TileCol;
use hex_game::mv::{Move, MoveKind};
use hex_game::tile::Tile;

#[test]
fn examples() {
    let mv = Move::from_string("c2").unwrap();
    assert_eq!(mv.tile(), Some(Tile::new(1, 2)));
    assert_eq!(mv.to_string(), "c2");

    let mv = Move::from_string("aa1").unwrap();
    assert_eq!(mv.tile().map(|t| t.col()), Some(26));
    assert_eq!(mv.tile().map(|t| t.row()), Some(0));

    let mv = Move::from_string("zz99").unwrap();
    assert_eq!(mv.tile(), Some(Tile::new(98, 701)));
}

#[test]
fn specials() {
    for (s, kind) in [("swap-pieces", MoveKind::SwapPieces), ("pass", MoveKind::Pass)] {
        let mv = Move::from_string(s).unwrap();
        assert_eq!(mv.kind(), kind);
        assert!(mv.is_special());
        assert_eq!(mv.tile(), None);
        assert_eq!(mv.to_string(), s);
    }
}

#[test]
fn invalid() {
    for s in ["", "c", "2", "c0", "c123", "C2", "abc2", "c2c", "swap", "swap-piece", "Pass", "d 4"] {
        assert_eq!(Move::from_string(s), Err(InvalidNotation(s.to_owned())), "{:?}", s);
    }
}

proptest! {
    #[test]
    fn tile_round_trip(row in 0u16..=Tile::MAX_ROW, col in 0u16..=Tile::MAX_COL) {
        let tile = Tile::new(row, col);
        let notation = tile.to_string();

        prop_assert_eq!(notation.parse::<Tile>(), Ok(tile));
        prop_assert_eq!(Move::from_string(&notation), Ok(Move::place(tile)));
        prop_assert_eq!(Move::place(tile).to_string(), notation);
    }

    #[test]
    fn column_round_trip(col in 0u16..=Tile::MAX_COL) {
        let letters = TileCol::new(col).unwrap().to_string();
        prop_assert!(letters.len() == 1 || letters.len() == 2);
        prop_assert_eq!(letters.len() == 1, col < 26);
        prop_assert_eq!(letters.parse::<TileCol>().map(TileCol::index), Ok(col));
    }

    #[test]
    fn data_round_trip(row in 0u16..=Tile::MAX_ROW, col in 0u16..=Tile::MAX_COL, special in 0..3u8) {
        let mv = match special {
            0 => Move::at(row, col),
            1 => Move::swap_pieces(),
            _ => Move::pass(),
        };
        let back = Move::from_data(&mv.to_data()).unwrap();
        prop_assert_eq!(back, mv);
        prop_assert_eq!(back.played_at(), mv.played_at());
    }
}
