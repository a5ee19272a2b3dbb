//! Utilities to generate a [HexBoard] in a specific or random state.
use rand::Rng;

use crate::board::{HexBoard, Player};
use crate::tile::Tile;

/// Place stones on the given tiles of an empty board, alternating between players starting with [Player::A].
/// Panics if a tile is out of bounds or placed twice.
pub fn board_with_moves(size: u8, tiles: &[Tile]) -> HexBoard {
    let mut board = HexBoard::new(size);
    let mut player = Player::A;
    for &tile in tiles {
        assert!(board.contains(tile), "Tile {} is outside of the board\n{}", tile, board);
        assert_eq!(board.tile(tile), None, "Tile {} is already occupied\n{}", tile, board);
        board.set_tile(tile, Some(player));
        player = player.other();
    }
    board
}

/// Generate a board by placing `n` alternating stones on random empty tiles.
/// Connections are not checked, so the board can contain a winning chain for both players.
pub fn random_board_with_stones(size: u8, n: usize, rng: &mut impl Rng) -> HexBoard {
    let mut board = HexBoard::new(size);
    assert!(n <= board.area(), "Cannot place {} stones on a board with size {}", n, size);

    let mut player = Player::A;
    for _ in 0..n {
        let tile = match board.random_available_move(rng) {
            Some(tile) => tile,
            None => unreachable!("board is full before placing {} stones", n),
        };
        board.set_tile(tile, Some(player));
        player = player.other();
    }
    board
}

/// Generate a completely filled board with an equal share of stones for both players,
/// [Player::A] getting the extra stone for odd areas.
pub fn random_filled_board(size: u8, rng: &mut impl Rng) -> HexBoard {
    let area = HexBoard::new(size).area();
    random_board_with_stones(size, area, rng)
}
