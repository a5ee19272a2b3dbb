//! Win detection: does a chain of stones connect the two goal edges of a player?
//!
//! Both questions are answered by the same multi-source breadth-first search: it starts from all stones
//! of the player on their first edge, in increasing coordinate order, visits neighbours in [Direction::ALL]
//! order and stops at the first tile dequeued on the opposite edge. Because the search is breadth-first the
//! chain found that way is as short as possible, and the fixed visiting order makes it reproducible.
//!
//! [Direction::ALL]: crate::tile::Direction::ALL
use std::collections::VecDeque;

use crate::board::{HexBoard, Player};
use crate::tile::Tile;

impl Player {
    /// The tiles on the edge where chains of this player start: the top row for [Player::A],
    /// the left column for [Player::B].
    pub fn start_edge(self, size: u8) -> impl Iterator<Item = Tile> {
        let size = size as u16;
        (0..size).map(move |i| match self {
            Player::A => Tile::new(0, i),
            Player::B => Tile::new(i, 0),
        })
    }

    /// Whether `tile` is on the edge opposite to [Player::start_edge].
    pub fn is_on_goal_edge(self, tile: Tile, size: u8) -> bool {
        let last = size as u16 - 1;
        match self {
            Player::A => tile.row() == last,
            Player::B => tile.col() == last,
        }
    }
}

impl HexBoard {
    /// Whether `player` has a chain connecting both of their edges.
    pub fn has_connection(&self, player: Player) -> bool {
        self.search(player).is_some()
    }

    /// The player that connected their edges, if any. Player A is checked first.
    pub fn calculate_winner(&self) -> Option<Player> {
        Player::BOTH.iter().copied().find(|&player| self.has_connection(player))
    }

    /// The shortest chain of the winner, from their start edge to their goal edge.
    pub fn shortest_winning_path(&self) -> Option<Vec<Tile>> {
        let winner = self.calculate_winner()?;
        self.search(winner)
    }

    /// The shortest chain of `player` connecting their edges, whether or not they are the winner.
    pub fn shortest_path(&self, player: Player) -> Option<Vec<Tile>> {
        self.search(player)
    }

    fn search(&self, player: Player) -> Option<Vec<Tile>> {
        let size = self.size();

        let mut prev: Vec<Option<Tile>> = vec![None; self.area()];
        let mut visited = vec![false; self.area()];
        let mut queue = VecDeque::new();

        for tile in player.start_edge(size) {
            if self.tile(tile) == Some(player) {
                visited[tile.index(size)] = true;
                queue.push_back(tile);
            }
        }

        while let Some(tile) = queue.pop_front() {
            if player.is_on_goal_edge(tile, size) {
                return Some(reconstruct(&prev, tile, size));
            }

            for adj in tile.all_adjacent(size) {
                let index = adj.index(size);
                if !visited[index] && self.tile(adj) == Some(player) {
                    visited[index] = true;
                    prev[index] = Some(tile);
                    queue.push_back(adj);
                }
            }
        }

        None
    }
}

fn reconstruct(prev: &[Option<Tile>], end: Tile, size: u8) -> Vec<Tile> {
    let mut path = vec![end];
    let mut curr = end;
    while let Some(before) = prev[curr.index(size)] {
        path.push(before);
        curr = before;
    }
    path.reverse();
    path
}
