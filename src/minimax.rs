use crate::board::{Board, Player};
use crate::error::AgentError;
use crate::heuristic::evaluate;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use log::debug;

/// Search depth used when none is given.
pub const DEFAULT_DEPTH: u32 = 4;

/// Value of a searched position together with the column that achieves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimaxResult {
    /// Evaluation of the position for the maximizing player.
    pub value: f64,
    /// Best column for the side to move, `None` at a cutoff or when nothing beat the sentinel.
    pub column: Option<usize>,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// `maximizer` is the side whose evaluation is maximized; `to_move` is the side playing next.
/// Leaves (depth exhausted, a win for either side, or a full board) are scored with
/// [`evaluate`] for `maximizer`. Columns are visited in the order `random` shuffles them into,
/// which only changes which of several equally good columns is reported.
pub fn minimax<K: RandomGenerator>(
    board: &Board,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    to_move: Player,
    maximizer: Player,
    random: &mut K,
) -> MinimaxResult {
    if depth == 0 || board.is_finished() {
        return MinimaxResult {
            value: evaluate(board, maximizer),
            column: None,
        };
    }

    let maximizing = to_move == maximizer;
    let mut best = MinimaxResult {
        value: if maximizing { f64::NEG_INFINITY } else { f64::INFINITY },
        column: None,
    };

    let mut columns = board.valid_moves();
    random.shuffle(&mut columns);

    for column in columns {
        let Ok(child) = board.with_move(column, to_move) else {
            continue;
        };
        let value = minimax(
            &child,
            depth - 1,
            alpha,
            beta,
            to_move.other(),
            maximizer,
            random,
        )
        .value;

        if maximizing {
            if value > best.value {
                best = MinimaxResult {
                    value,
                    column: Some(column),
                };
            }
            alpha = alpha.max(best.value);
        } else {
            if value < best.value {
                best = MinimaxResult {
                    value,
                    column: Some(column),
                };
            }
            beta = beta.min(best.value);
        }

        if alpha >= beta {
            break;
        }
    }

    best
}

/// Stateless minimax agent.
pub struct MinimaxAgent<K: RandomGenerator> {
    depth: u32,
    random: K,
}

impl Default for MinimaxAgent<StandardRandomGenerator> {
    fn default() -> Self {
        MinimaxAgent::new(DEFAULT_DEPTH)
    }
}

impl<K: RandomGenerator> MinimaxAgent<K> {
    /// Creates an agent searching `depth` plies ahead.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            random: K::default(),
        }
    }

    /// Sets the generator used to order the columns at every node.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random = rg;
        self
    }

    /// Number of plies searched per move.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns the column `player` should play on `board`.
    pub fn generate_move(&mut self, board: &Board, player: Player) -> Result<usize, AgentError> {
        let result = minimax(
            board,
            self.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            player,
            player,
            &mut self.random,
        );

        let column = result.column.ok_or(AgentError::NoMoveFound)?;
        debug!(
            "minimax picked column {column} for {player:?} (depth {}, value {})",
            self.depth, result.value
        );
        Ok(column)
    }
}

/// Returns the column `player` should play on `board`, searching `depth` plies ahead.
pub fn generate_move_minimax(
    board: &Board,
    player: Player,
    depth: u32,
) -> Result<usize, AgentError> {
    MinimaxAgent::<StandardRandomGenerator>::new(depth).generate_move(board, player)
}
