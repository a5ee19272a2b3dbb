use internal_iterator::InternalIterator;
use itertools::Itertools;

use hex_game::board::{HexBoard, Player};
use hex_game::tile::Tile;
use hex_game::util::tiny::consistent_rng;

use crate::util::{assert_uniform_available_moves, assert_valid_path, brute_force_path_len};

mod connect;
mod notation;

pub fn board_test_main(board: &HexBoard) {
    board_test_main_impl(board, true)
}

pub fn board_test_main_without_uniform(board: &HexBoard) {
    board_test_main_impl(board, false)
}

fn board_test_main_impl(board: &HexBoard, random_uniform: bool) {
    println!("Currently testing board\n{:?}\n{}", board, board);

    test_available_match(board);
    test_grid_round_trip(board);
    test_connection_matches_brute_force(board);

    if random_uniform {
        test_random_available_uniform(board);
    }
}

fn test_available_match(board: &HexBoard) {
    let available: Vec<Tile> = board.available_moves().collect();
    let expected = Tile::all(board.size()).filter(|&t| board.tile(t).is_none()).collect_vec();

    assert_eq!(expected, available, "available_moves mismatch");
    assert_eq!(available.len(), board.available_moves().count(), "count mismatch");
    assert_eq!(available.len(), board.empty_count());
    assert_eq!(available.is_empty(), board.is_full());
    assert_eq!(
        board.area(),
        board.empty_count() + board.stone_count(Player::A) + board.stone_count(Player::B)
    );

    for tile in available {
        assert!(board.check_move(&tile.into()).is_ok(), "tile {} should be available", tile);
    }
}

fn test_grid_round_trip(board: &HexBoard) {
    let parsed = HexBoard::from_grid(&board.to_grid()).unwrap();
    assert_eq!(board, &parsed);
}

fn test_connection_matches_brute_force(board: &HexBoard) {
    for player in Player::BOTH {
        let expected = brute_force_path_len(board, player);
        let path = board.shortest_path(player);

        assert_eq!(expected.is_some(), board.has_connection(player), "connection mismatch for {:?}", player);
        assert_eq!(expected, path.as_ref().map(|p| p.len()), "path length mismatch for {:?}", player);

        if let Some(path) = path {
            assert_valid_path(board, player, &path);
        }
    }

    let expected_winner = Player::BOTH.iter().copied().find(|&p| board.has_connection(p));
    assert_eq!(expected_winner, board.calculate_winner());
    assert_eq!(
        expected_winner.and_then(|p| board.shortest_path(p)),
        board.shortest_winning_path()
    );
}

fn test_random_available_uniform(board: &HexBoard) {
    assert_uniform_available_moves(board, &mut consistent_rng());
}
