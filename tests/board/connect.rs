use hex_game::board::{HexBoard, Player};
use hex_game::tile::Tile;
use hex_game::util::board_gen::{random_board_with_stones, random_filled_board};
use hex_game::util::tiny::consistent_rng;

use crate::board::{board_test_main, board_test_main_without_uniform};

#[test]
fn empty() {
    for size in 1..=8 {
        board_test_main_without_uniform(&HexBoard::new(size));
    }
    board_test_main(&HexBoard::new(4));
}

#[test]
fn single_tile() {
    for grid in [".", "x", "o"] {
        board_test_main(&HexBoard::from_grid(grid).unwrap());
    }
    assert_eq!(HexBoard::from_grid("o").unwrap().calculate_winner(), Some(Player::B));
}

#[test]
fn manual_boards() {
    let cases = [
        ("x../.x./..x", None),
        ("..x/.x./x..", Some(Player::A)),
        ("o../.o./..o", None),
        (".x./.x./.x.", Some(Player::A)),
        ("x.../ooo./x.../....", None),
        ("..../oooo/x.../x...", Some(Player::B)),
        ("xo./.xo/..x", None),
    ];

    for (grid, winner) in cases {
        let board = HexBoard::from_grid(grid).unwrap();
        board_test_main(&board);
        assert_eq!(winner, board.calculate_winner(), "winner of {}", grid);
    }
}

#[test]
fn shortest_path_tie_break() {
    // b2-a3-a4 and b2-b3-a4 are both shortest, neighbour order picks the first
    let board = HexBoard::from_grid(".x.../.x.../xx.../x..../x....").unwrap();
    board_test_main(&board);

    let path = board.shortest_winning_path().unwrap();
    let expected = ["b1", "b2", "a3", "a4", "a5"]
        .iter()
        .map(|s| s.parse::<Tile>().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(path, expected);
}

#[test]
fn random_partial_boards() {
    let mut rng = consistent_rng();
    for size in 1..=7 {
        let area = size as usize * size as usize;
        for n in [0, area / 4, area / 2, area * 3 / 4] {
            let board = random_board_with_stones(size, n, &mut rng);
            if size <= 5 {
                board_test_main(&board);
            } else {
                board_test_main_without_uniform(&board);
            }
        }
    }
}

#[test]
fn random_dense_boards() {
    let mut rng = consistent_rng();
    for _ in 0..200 {
        let board = random_board_with_stones(9, 60, &mut rng);
        board_test_main_without_uniform(&board);
    }
}

/// On a full board exactly one player has a connection.
#[test]
fn full_board_has_exactly_one_winner() {
    let mut rng = consistent_rng();
    for size in 1..=11 {
        for _ in 0..20 {
            let board = random_filled_board(size, &mut rng);
            assert!(board.is_full());

            let a = board.has_connection(Player::A);
            let b = board.has_connection(Player::B);
            assert!(a != b, "expected exactly one connection on\n{}", board);
            assert_eq!(board.calculate_winner(), Some(if a { Player::A } else { Player::B }));

            board_test_main_without_uniform(&board);
        }
    }
}
