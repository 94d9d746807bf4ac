//! Performance Test
//!
//! [Perft](https://www.chessprogramming.org/Perft)
//!
//! A simple debugging and testing function used to count
//! the number of paths to a specific depth of the move-generation tree.

use std::ops::{Add, AddAssign};
use std::thread;

use crate::board::Board;
use crate::coretypes::PlyKind;

/// Debugging information about results of perft test.
/// nodes: Number of paths to the lowest depth of perft.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl PerftInfo {
    fn new(nodes: u64) -> Self {
        PerftInfo { nodes }
    }
}

impl Add for PerftInfo {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        PerftInfo {
            nodes: self.nodes + rhs.nodes,
        }
    }
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

/// Count the number of paths to a certain depth.
/// This ignores higher terminal nodes.
/// With more than one thread, the work is split once across the root moves.
pub fn perft(board: Board, ply: PlyKind, threads: usize) -> PerftInfo {
    // Guard easy to calculate inputs.
    if ply == 0 {
        // Ever only 1 position at 0 ply.
        return PerftInfo::new(1);
    } else if ply <= 2 || threads <= 1 {
        // Simple enough to not require threads, or single threaded.
        return perft_recurse(&board, ply);
    }

    let legal_moves = board.get_legal_moves();

    // A terminal root has no paths, and no moves to split across threads.
    if legal_moves.is_empty() {
        return PerftInfo::new(0);
    }

    let handles: Vec<thread::JoinHandle<PerftInfo>> = legal_moves
        .as_slice()
        .chunks((legal_moves.len() + threads - 1) / threads.max(1))
        .map(|chunk| {
            let chunk = chunk.to_vec();
            thread::spawn(move || {
                let mut info = PerftInfo::new(0);
                for legal_move in chunk {
                    let successor = board.make_move(legal_move);
                    info += perft_recurse(&successor, ply - 1);
                }
                info
            })
        })
        .collect();

    let mut perft_info = PerftInfo::new(0);
    for handle in handles {
        perft_info += handle.join().unwrap();
    }
    perft_info
}

fn perft_recurse(board: &Board, ply: PlyKind) -> PerftInfo {
    if ply == 1 {
        PerftInfo::new(board.get_legal_moves().len() as u64)
    } else {
        let mut perft_info = PerftInfo::new(0);
        for legal_move in board.get_legal_moves() {
            let successor = board.make_move(legal_move);
            perft_info += perft_recurse(&successor, ply - 1);
        }
        perft_info
    }
}
