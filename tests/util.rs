use std::collections::{HashMap, VecDeque};

use internal_iterator::InternalIterator;
use itertools::Itertools;
use rand::Rng;

use hex_game::board::{HexBoard, Player};
use hex_game::tile::Tile;

/// Draw many random available moves from `board` and check that every empty tile comes up
/// about equally often, and that nothing else does.
pub fn assert_uniform_available_moves(board: &HexBoard, rng: &mut impl Rng) {
    let empty: Vec<Tile> = board.available_moves().collect();
    if empty.is_empty() {
        for _ in 0..100 {
            assert_eq!(None, board.random_available_move(rng), "full board\n{}", board);
        }
        return;
    }

    let draws_per_tile = 1000;
    let mut counts = vec![0u32; board.area()];
    for _ in 0..draws_per_tile * empty.len() {
        let tile = board.random_available_move(rng).expect("board has empty tiles");
        assert_eq!(None, board.tile(tile), "drew occupied tile {} on\n{}", tile, board);
        counts[tile.index(board.size())] += 1;
    }

    for tile in empty {
        let relative = counts[tile.index(board.size())] as f32 / draws_per_tile as f32;
        assert!(
            (0.8..1.2).contains(&relative),
            "tile {} drawn with relative frequency {} on\n{}",
            tile,
            relative,
            board
        );
    }
}

/// Length of the shortest chain of `player` between their edges,
/// found by comparing every pair of owned tiles instead of walking neighbours.
pub fn brute_force_path_len(board: &HexBoard, player: Player) -> Option<usize> {
    let size = board.size();
    let owned = Tile::all(size).filter(|&t| board.tile(t) == Some(player)).collect_vec();

    let mut dist: HashMap<Tile, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    for &tile in &owned {
        if player.start_edge(size).any(|t| t == tile) {
            dist.insert(tile, 1);
            queue.push_back(tile);
        }
    }

    while let Some(curr) = queue.pop_front() {
        let d = dist[&curr];
        for &next in &owned {
            if curr.is_adjacent(next) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    owned
        .iter()
        .filter(|&&t| player.is_on_goal_edge(t, size))
        .filter_map(|t| dist.get(t).copied())
        .min()
}

pub fn assert_valid_path(board: &HexBoard, player: Player, path: &[Tile]) {
    let size = board.size();
    assert!(!path.is_empty(), "Empty path on\n{}", board);

    let first = path[0];
    let last = path[path.len() - 1];
    assert!(
        player.start_edge(size).any(|t| t == first),
        "Path {:?} does not start on the edge of {:?}",
        path,
        player
    );
    assert!(
        player.is_on_goal_edge(last, size),
        "Path {:?} does not end on the goal edge of {:?}",
        path,
        player
    );

    for &tile in path {
        assert_eq!(board.tile(tile), Some(player), "Path {:?} contains foreign tile {}", path, tile);
    }
    for (&a, &b) in path.iter().tuple_windows() {
        assert!(a.is_adjacent(b), "Path {:?} jumps from {} to {}", path, a, b);
    }
}
