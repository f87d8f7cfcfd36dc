use crate::board::{Board, GameState, Player};
use crate::error::AgentError;
use crate::mcts::MonteCarloTreeSearch;
use crate::minimax::MinimaxAgent;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use log::debug;

/// Anything that can pick a column for a side.
///
/// Stateful agents keep whatever they carry between moves (such as a search tree) in `self`.
pub trait Agent {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns the column `player` should play on `board`.
    fn generate_move(&mut self, board: &Board, player: Player) -> Result<usize, AgentError>;
}

impl<K: RandomGenerator> Agent for MinimaxAgent<K> {
    fn name(&self) -> &str {
        "minimax"
    }

    fn generate_move(&mut self, board: &Board, player: Player) -> Result<usize, AgentError> {
        MinimaxAgent::generate_move(self, board, player)
    }
}

impl<K: RandomGenerator> Agent for MonteCarloTreeSearch<K> {
    fn name(&self) -> &str {
        "mcts"
    }

    fn generate_move(&mut self, board: &Board, player: Player) -> Result<usize, AgentError> {
        MonteCarloTreeSearch::generate_move(self, board, player)
    }
}

/// Plays a uniformly random valid column.
#[derive(Default)]
pub struct RandomAgent<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomAgent<K> {
    /// Creates an agent drawing its columns from `random`.
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl<K: RandomGenerator> Agent for RandomAgent<K> {
    fn name(&self) -> &str {
        "random"
    }

    fn generate_move(&mut self, board: &Board, player: Player) -> Result<usize, AgentError> {
        generate_move_random(board, player, &mut self.random)
    }
}

/// Returns a uniformly chosen column that still has room.
pub fn generate_move_random<K: RandomGenerator>(
    board: &Board,
    _player: Player,
    random: &mut K,
) -> Result<usize, AgentError> {
    let columns = board.valid_moves();
    random
        .choose(&columns)
        .copied()
        .ok_or(AgentError::NoMoveFound)
}

/// Returns a random column using the thread-local RNG.
pub fn generate_move_random_default(board: &Board, player: Player) -> Result<usize, AgentError> {
    generate_move_random(board, player, &mut StandardRandomGenerator)
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// The final position.
    pub board: Board,
    /// Every column played, in order, starting with [`Player::One`].
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

/// Plays a full game, `first` as [`Player::One`] and `second` as [`Player::Two`].
///
/// A column an agent returns is checked before it is played; a full or out-of-range column ends
/// the game with [`AgentError::InvalidMove`].
pub fn play_game(first: &mut dyn Agent, second: &mut dyn Agent) -> Result<GameRecord, AgentError> {
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut player = Player::One;

    loop {
        let agent: &mut dyn Agent = match player {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };
        let column = agent.generate_move(&board, player)?;
        board.apply_move(column, player)?;
        moves.push(column);
        debug!("{} ({player:?}) played column {column}\n{board}", agent.name());

        let outcome = match board.classify(player) {
            GameState::Win => GameOutcome::Winner(player),
            GameState::Draw => GameOutcome::Draw,
            GameState::Ongoing => {
                player = player.other();
                continue;
            }
        };
        return Ok(GameRecord {
            board,
            moves,
            outcome,
        });
    }
}
