//! Static positional evaluation shared by the minimax agent and the heuristic MCTS policy.

use crate::board::{Board, Player, windows};
use crate::random::RandomGenerator;

/// Score of a window holding four, three, two or one pieces of the same side.
const WINDOW_SCORES: [f64; 5] = [0.0, 9.0, 99.0, 999.0, 9999.0];

/// Scores `board` from the point of view of `player`.
///
/// Every run of four cells is summed with `player`'s pieces counting +1 and the opponent's -1.
/// A sum of `v` contributes `sign(v) * WINDOW_SCORES[|v|]`, so nearly completed lines dominate.
/// Evaluating the same board for the other player yields exactly the negated score.
pub fn evaluate(board: &Board, player: Player) -> f64 {
    windows()
        .map(|window| {
            let sum: i32 = window
                .iter()
                .map(|&(row, column)| match board.cell(row, column) {
                    Some(owner) if owner == player => 1,
                    Some(_) => -1,
                    None => 0,
                })
                .sum();
            let magnitude = WINDOW_SCORES[sum.unsigned_abs() as usize];
            if sum < 0 { -magnitude } else { magnitude }
        })
        .sum()
}

/// Returns the column whose resulting board `player` evaluates highest.
///
/// Columns are tried in the order produced by `random`, the first strictly best one wins.
/// Returns `None` when no column has room.
pub fn best_heuristic_move<K: RandomGenerator>(
    board: &Board,
    player: Player,
    random: &mut K,
) -> Option<usize> {
    let mut columns = board.valid_moves();
    random.shuffle(&mut columns);

    let mut best: Option<(usize, f64)> = None;
    for column in columns {
        let Ok(after) = board.with_move(column, player) else {
            continue;
        };
        let value = evaluate(&after, player);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((column, value));
        }
    }

    best.map(|(column, _)| column)
}
