//! Game-tree search agents for Connect Four.
//!
//! Two engines pick a column for a side given a 6x7 board: a Monte Carlo tree search agent that
//! keeps its tree between moves, and a depth-limited minimax agent with alpha-beta pruning. Both
//! rely on the same static evaluation, which scores every run of four cells on the board.
//!
//! # Example
//!
//! ```rust
//! use connect4_agents::board::{Board, Player};
//! use connect4_agents::mcts::{Budget, MonteCarloTreeSearch};
//! use connect4_agents::minimax::{generate_move_minimax, DEFAULT_DEPTH};
//! use connect4_agents::random::CustomNumberGenerator;
//!
//! let mut board = Board::new();
//! board.apply_move(3, Player::One).unwrap();
//!
//! // Create and configure a new MCTS search instance using the builder
//! let mut mcts = MonteCarloTreeSearch::builder(Player::Two)
//!     .with_random_generator(CustomNumberGenerator::default())
//!     .with_budget(Budget::Iterations(500))
//!     .build();
//!
//! let column = mcts.generate_move(&board, Player::Two).unwrap();
//! board.apply_move(column, Player::Two).unwrap();
//!
//! let reply = generate_move_minimax(&board, Player::One, DEFAULT_DEPTH).unwrap();
//! println!("mcts played {column}, minimax answers {reply}\n{board}");
//! ```

/// The `Agent` trait, the random agent and a runner playing two agents against each other.
pub mod agent;
/// The board, its players and the rules of the game.
pub mod board;
/// The error type shared by the whole crate.
pub mod error;
/// Static evaluation of positions.
pub mod heuristic;
/// The Monte Carlo tree search engine.
pub mod mcts;
/// Contains the `MctsNode` struct, which holds the statistics of one node in the search tree.
pub mod mcts_node;
/// Minimax search with alpha-beta pruning.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;
/// The arena tree the MCTS engine searches in.
pub mod search_tree;
