use crate::board::{Board, Player};
use crate::error::AgentError;
use crate::heuristic::best_heuristic_move;
use crate::mcts_node::MctsNode;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::search_tree::SearchTree;
use ego_tree::{NodeId, NodeRef};
use log::{debug, trace};
use std::time::{Duration, Instant};

/// Exploration constant `C` of the UCB1 formula.
pub const DEFAULT_EXPLORATION: f64 = 2.0;
/// Number of random opponent replies generated per engine move during expansion.
pub const DEFAULT_BRANCHING: usize = 1;
/// Number of iterations run per move when no budget is configured.
pub const DEFAULT_ITERATIONS: u32 = 2000;

const WIN_REWARD: f64 = 1.0;
const DRAW_REWARD: f64 = 0.5;
const LOSS_REWARD: f64 = 0.0;

/// How much search is done for each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// Run exactly this many iterations.
    Iterations(u32),
    /// Keep iterating until this much wall-clock time has passed.
    ///
    /// The clock is read after each complete iteration, so the search overruns by at most one
    /// iteration. A limit too large to add to the current time never expires.
    Time(Duration),
}

impl Default for Budget {
    fn default() -> Self {
        Budget::Iterations(DEFAULT_ITERATIONS)
    }
}

/// How moves are picked inside the search: for rollouts and for opponent replies during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RolloutPolicy {
    /// Uniformly random valid columns.
    #[default]
    Random,
    /// The column with the best static evaluation for the side to move.
    Heuristic,
}

/// Monte Carlo tree search agent for one side of the board.
///
/// Every node of the tree is a position with the engine's side to move; a child is reached by
/// one engine move followed by one opponent reply. The tree is kept between moves and re-rooted
/// at the position the opponent's reply leads to when that position has already been explored.
pub struct MonteCarloTreeSearch<K: RandomGenerator> {
    tree: SearchTree,
    player: Player,
    opponent: Player,
    random: K,
    budget: Budget,
    exploration: f64,
    policy: RolloutPolicy,
    branching: usize,
}

impl Default for MonteCarloTreeSearch<StandardRandomGenerator> {
    fn default() -> Self {
        MonteCarloTreeSearchBuilder::new(Player::One).build()
    }
}

/// A builder for creating instances of `MonteCarloTreeSearch`.
pub struct MonteCarloTreeSearchBuilder<K: RandomGenerator> {
    player: Player,
    random_generator: K,
    budget: Budget,
    exploration: f64,
    policy: RolloutPolicy,
    branching: usize,
}

impl<K: RandomGenerator> MonteCarloTreeSearchBuilder<K> {
    /// Creates a builder for an engine playing `player`.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            random_generator: K::default(),
            budget: Budget::default(),
            exploration: DEFAULT_EXPLORATION,
            policy: RolloutPolicy::default(),
            branching: DEFAULT_BRANCHING,
        }
    }

    /// Sets the random number generator for the search.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    /// Sets the per-move search budget.
    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the UCB1 exploration constant.
    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }

    /// Sets the policy used for rollouts and for opponent replies during expansion.
    pub fn with_rollout_policy(mut self, policy: RolloutPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets how many random opponent replies follow each engine move when a node is expanded.
    ///
    /// Only used with [`RolloutPolicy::Random`]; values below one are treated as one.
    pub fn with_branching(mut self, branching: usize) -> Self {
        self.branching = branching;
        self
    }

    /// Builds the engine, starting from a tree rooted at the empty board.
    pub fn build(self) -> MonteCarloTreeSearch<K> {
        MonteCarloTreeSearch {
            tree: SearchTree::new(Board::new()),
            player: self.player,
            opponent: self.player.other(),
            random: self.random_generator,
            budget: self.budget,
            exploration: self.exploration,
            policy: self.policy,
            branching: self.branching.max(1),
        }
    }
}

impl<K: RandomGenerator> MonteCarloTreeSearch<K> {
    /// Returns a new builder for `MonteCarloTreeSearch`.
    pub fn builder(player: Player) -> MonteCarloTreeSearchBuilder<K> {
        MonteCarloTreeSearchBuilder::new(player)
    }

    /// Returns the current search tree.
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// The side this engine is searching for.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The per-move search budget.
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Switches the side the engine plays.
    ///
    /// Statistics are only meaningful for the side they were gathered for, so switching sides
    /// throws the tree away and starts over from an empty board.
    pub fn set_player(&mut self, player: Player) {
        if player == self.player {
            return;
        }

        trace!("mcts switching from {:?} to {player:?}, discarding tree", self.player);
        self.player = player;
        self.opponent = player.other();
        self.tree = SearchTree::new(Board::new());
    }

    /// Re-roots the tree at `board`, keeping earlier search results when the position is already
    /// in the tree.
    pub fn set_current_board(&mut self, board: &Board) {
        match self.tree.find(board) {
            Some(subtree) => {
                trace!(
                    "mcts reusing {} nodes and {} visits",
                    subtree.len(),
                    subtree.root().value().visits
                );
                self.tree = subtree;
            }
            None => {
                trace!("mcts position not in tree, starting fresh");
                self.tree = SearchTree::new(*board);
            }
        }
    }

    /// Performs one iteration: selection, expansion, simulation and backpropagation.
    pub fn iterate(&mut self) -> Result<(), AgentError> {
        let root_id = self.tree.root_id();
        if self.tree.is_leaf(root_id) {
            self.expand(root_id)?;
        }

        let mut path = self.select();
        let leaf_id = self.tree.node_at(&path)?;
        let leaf = self.leaf_value(leaf_id)?;

        if leaf.visits == 0 {
            return self.simulate(&path, leaf_id, &leaf.board);
        }

        if self.expand(leaf_id)? == 0 {
            let reward = self.rollout(&leaf.board)?;
            return self.tree.reinforce(&path, reward);
        }

        path.push(0);
        let child_id = self.tree.node_at(&path)?;
        let child = self.leaf_value(child_id)?;
        self.simulate(&path, child_id, &child.board)
    }

    /// Runs `n` iterations.
    pub fn iterate_n_times(&mut self, n: u32) -> Result<(), AgentError> {
        for _ in 0..n {
            self.iterate()?;
        }
        Ok(())
    }

    /// Iterates until the configured budget is used up and returns the number of iterations run.
    pub fn search(&mut self) -> Result<u32, AgentError> {
        match self.budget {
            Budget::Iterations(n) => {
                self.iterate_n_times(n)?;
                Ok(n)
            }
            Budget::Time(limit) => {
                let deadline = search_deadline(limit);
                let mut iterations = 0;
                loop {
                    self.iterate()?;
                    iterations += 1;
                    if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                        break;
                    }
                }
                Ok(iterations)
            }
        }
    }

    /// Returns the child of the root with the highest mean reward. Unvisited children are ignored.
    pub fn best_child(&self) -> Option<NodeRef<'_, MctsNode>> {
        let mut best: Option<NodeRef<'_, MctsNode>> = None;
        for child in self.tree.root().children() {
            if child.value().visits == 0 {
                continue;
            }
            if best.is_none_or(|b| child.value().mean_score() > b.value().mean_score()) {
                best = Some(child);
            }
        }
        best
    }

    /// Returns the column leading to [`MonteCarloTreeSearch::best_child`].
    ///
    /// The column is the one where the child's board has a new piece of the engine's side.
    pub fn choose_action(&self) -> Result<usize, AgentError> {
        let child = self.best_child().ok_or(AgentError::NoMoveFound)?;
        self.tree
            .root()
            .value()
            .board
            .placed_column(&child.value().board, self.player)
            .ok_or(AgentError::NoMoveFound)
    }

    /// Searches `board` for `player` within the configured budget and returns the chosen column.
    pub fn generate_move(&mut self, board: &Board, player: Player) -> Result<usize, AgentError> {
        self.set_player(player);
        self.set_current_board(board);
        let iterations = self.search()?;
        let column = self.choose_action()?;
        debug!(
            "mcts picked column {column} for {player:?} after {iterations} iterations \
             (mean {:.3}, {} nodes)",
            self.best_child().map_or(0.0, |c| c.value().mean_score()),
            self.tree.len()
        );
        Ok(column)
    }

    /// Walks down from the root along the children with the highest UCB1 value.
    fn select(&self) -> Vec<usize> {
        let root_visits = self.tree.root().value().visits;
        let mut node = self.tree.root();
        let mut path = Vec::new();

        loop {
            let mut best: Option<(usize, NodeRef<'_, MctsNode>, f64)> = None;
            for (index, child) in node.children().enumerate() {
                let ucb = ucb_value(
                    root_visits,
                    child.value().score,
                    child.value().visits,
                    self.exploration,
                );
                if best.as_ref().is_none_or(|&(_, _, max_ucb)| ucb > max_ucb) {
                    best = Some((index, child, ucb));
                }
            }

            match best {
                Some((index, child, _)) => {
                    path.push(index);
                    node = child;
                }
                None => break,
            }
        }

        path
    }

    /// Adds one child per engine move, each followed by the opponent's reply(s).
    ///
    /// Returns the number of children added.
    fn expand(&mut self, node_id: NodeId) -> Result<usize, AgentError> {
        let board = self.leaf_value(node_id)?.board;
        if board.is_finished() {
            return Ok(0);
        }

        let mut columns = board.valid_moves();
        self.random.shuffle(&mut columns);

        let mut children = Vec::with_capacity(columns.len() * self.branching);
        for column in columns {
            let after = board.with_move(column, self.player)?;
            if after.is_finished() {
                children.push(after);
                continue;
            }

            match self.policy {
                RolloutPolicy::Heuristic => {
                    let reply = best_heuristic_move(&after, self.opponent, &mut self.random)
                        .ok_or(AgentError::NoMoveFound)?;
                    children.push(after.with_move(reply, self.opponent)?);
                }
                RolloutPolicy::Random => {
                    let mut replies = after.valid_moves();
                    self.random.shuffle(&mut replies);
                    for reply in replies.into_iter().take(self.branching) {
                        children.push(after.with_move(reply, self.opponent)?);
                    }
                }
            }
        }

        for child in &children {
            self.tree.add_child(node_id, MctsNode::new(*child));
        }
        Ok(children.len())
    }

    fn simulate(
        &mut self,
        path: &[usize],
        node_id: NodeId,
        board: &Board,
    ) -> Result<(), AgentError> {
        let reward = self.rollout(board)?;
        self.tree.set_score(node_id, reward);
        self.tree.backpropagate(path)
    }

    /// Plays the game out from `board`, the engine moving first, and returns the engine's reward.
    fn rollout(&mut self, board: &Board) -> Result<f64, AgentError> {
        let mut board = *board;
        let mut to_move = self.player;

        loop {
            if let Some(reward) = self.terminal_reward(&board) {
                return Ok(reward);
            }

            let column = match self.policy {
                RolloutPolicy::Random => {
                    let columns = board.valid_moves();
                    *self.random.choose(&columns).ok_or(AgentError::NoMoveFound)?
                }
                RolloutPolicy::Heuristic => best_heuristic_move(&board, to_move, &mut self.random)
                    .ok_or(AgentError::NoMoveFound)?,
            };
            board.apply_move(column, to_move)?;
            to_move = to_move.other();
        }
    }

    fn terminal_reward(&self, board: &Board) -> Option<f64> {
        if board.connected_four(self.player) {
            Some(WIN_REWARD)
        } else if board.connected_four(self.opponent) {
            Some(LOSS_REWARD)
        } else if board.is_full() {
            Some(DRAW_REWARD)
        } else {
            None
        }
    }

    fn leaf_value(&self, node_id: NodeId) -> Result<MctsNode, AgentError> {
        self.tree
            .get(node_id)
            .map(|node| node.value().clone())
            .ok_or(AgentError::NoMoveFound)
    }
}

impl MonteCarloTreeSearch<StandardRandomGenerator> {
    /// Creates an engine for `player` with default settings.
    pub fn for_player(player: Player) -> Self {
        MonteCarloTreeSearchBuilder::new(player).build()
    }
}

/// Returns the column `mcts` picks for `player` on `board`, reusing its tree where possible.
pub fn generate_move_mcts<K: RandomGenerator>(
    mcts: &mut MonteCarloTreeSearch<K>,
    board: &Board,
    player: Player,
) -> Result<usize, AgentError> {
    mcts.generate_move(board, player)
}

/// When a search with `limit` has to stop, `None` if `Instant` cannot represent it.
fn search_deadline(limit: Duration) -> Option<Instant> {
    Instant::now().checked_add(limit)
}

/// Calculates the UCB1 (Upper Confidence Bound 1) value for a node.
///
/// Unvisited nodes get an infinite value so every child is tried once before any is preferred.
fn ucb_value(root_visits: u32, node_score: f64, node_visits: u32, exploration: f64) -> f64 {
    if node_visits == 0 {
        return f64::INFINITY;
    }

    let visits = node_visits as f64;
    node_score / visits + exploration * f64::sqrt(f64::ln(root_visits.max(1) as f64) / visits)
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, COLUMNS, Player};
    use crate::error::AgentError;
    use crate::mcts::{
        Budget, DEFAULT_EXPLORATION, MonteCarloTreeSearch, RolloutPolicy, generate_move_mcts,
        search_deadline, ucb_value,
    };
    use crate::heuristic::evaluate;
    use crate::mcts_node::MctsNode;
    use crate::random::CustomNumberGenerator;
    use ego_tree::NodeRef;
    use std::time::Duration;

    const THREE_STACKED: &str = "
|==============|
|              |
|              |
|              |
|X             |
|X             |
|X O O         |
|==============|
|0 1 2 3 4 5 6 |";

    fn engine(
        player: Player,
        policy: RolloutPolicy,
    ) -> MonteCarloTreeSearch<CustomNumberGenerator> {
        MonteCarloTreeSearch::builder(player)
            .with_random_generator(CustomNumberGenerator::default())
            .with_rollout_policy(policy)
            .build()
    }

    fn assert_totals(node: NodeRef<'_, MctsNode>) {
        let value = node.value();
        if node.has_children() && !value.board.is_finished() {
            let visits: u32 = node.children().map(|c| c.value().visits).sum();
            let score: f64 = node.children().map(|c| c.value().score).sum();
            assert!(value.visits == visits || value.visits == visits + 1);
            assert!((value.score - score).abs() <= 1.0);
        }
        for child in node.children() {
            assert_totals(child);
        }
    }

    #[test]
    fn unvisited_children_have_infinite_priority() {
        assert_eq!(ucb_value(10, 0.0, 0, DEFAULT_EXPLORATION), f64::INFINITY);
        assert_eq!(ucb_value(0, 0.0, 0, DEFAULT_EXPLORATION), f64::INFINITY);
        let exploit_only = ucb_value(1, 0.5, 1, DEFAULT_EXPLORATION);
        assert_eq!(exploit_only, 0.5);
        assert!(ucb_value(100, 0.5, 1, DEFAULT_EXPLORATION) > exploit_only);
    }

    #[test]
    fn every_iteration_adds_one_visit_to_the_root() {
        // arrange
        let mut mcts = engine(Player::One, RolloutPolicy::Random);

        // act
        mcts.iterate_n_times(300).unwrap();

        // assert
        let root = mcts.tree().root();
        assert_eq!(root.value().visits, 300);
        let children_visits: u32 = root.children().map(|c| c.value().visits).sum();
        let children_score: f64 = root.children().map(|c| c.value().score).sum();
        assert_eq!(children_visits, 300);
        assert_eq!(root.value().score, children_score);
        assert_totals(root);
    }

    #[test]
    fn root_expansion_creates_one_child_per_column() {
        let mut heuristic = engine(Player::One, RolloutPolicy::Heuristic);
        heuristic.iterate().unwrap();
        assert_eq!(heuristic.tree().root().children().count(), COLUMNS);

        let mut wide = MonteCarloTreeSearch::builder(Player::One)
            .with_random_generator(CustomNumberGenerator::default())
            .with_branching(3)
            .build();
        wide.iterate().unwrap();
        assert_eq!(wide.tree().root().children().count(), COLUMNS * 3);
    }

    #[test]
    fn heuristic_expansion_answers_with_the_opponents_best_reply() {
        // arrange
        let mut mcts = engine(Player::One, RolloutPolicy::Heuristic);

        // act
        mcts.iterate().unwrap();

        // assert
        let root = mcts.tree().root();
        let board = root.value().board;
        let mut engine_columns = Vec::new();
        for child in root.children() {
            let child_board = child.value().board;
            let column = board.placed_column(&child_board, Player::One).unwrap();
            let after = board.with_move(column, Player::One).unwrap();
            let reply = after.placed_column(&child_board, Player::Two).unwrap();
            let best = after
                .valid_moves()
                .into_iter()
                .map(|c| evaluate(&after.with_move(c, Player::Two).unwrap(), Player::Two))
                .fold(f64::NEG_INFINITY, f64::max);
            let replied = evaluate(&after.with_move(reply, Player::Two).unwrap(), Player::Two);
            assert_eq!(replied, best);
            engine_columns.push(column);
        }
        engine_columns.sort();
        assert_eq!(engine_columns, (0..COLUMNS).collect::<Vec<_>>());
    }

    #[test]
    fn random_expansion_caps_distinct_replies_at_branching() {
        for (branching, replies) in [(1, 1), (3, 3), (10, COLUMNS)] {
            // arrange
            let mut mcts = MonteCarloTreeSearch::builder(Player::One)
                .with_random_generator(CustomNumberGenerator::default())
                .with_branching(branching)
                .build();

            // act
            mcts.iterate().unwrap();

            // assert
            let root = mcts.tree().root();
            let board = root.value().board;
            let mut by_column = vec![Vec::new(); COLUMNS];
            for child in root.children() {
                let child_board = child.value().board;
                let column = board.placed_column(&child_board, Player::One).unwrap();
                let after = board.with_move(column, Player::One).unwrap();
                let reply = after.placed_column(&child_board, Player::Two).unwrap();
                by_column[column].push(reply);
            }
            for mut column_replies in by_column {
                assert_eq!(column_replies.len(), replies, "branching {branching}");
                column_replies.sort();
                column_replies.dedup();
                assert_eq!(column_replies.len(), replies, "branching {branching}");
            }
        }
    }

    #[test]
    fn every_child_is_sampled_before_any_is_revisited() {
        let mut mcts = engine(Player::Two, RolloutPolicy::Random);
        mcts.set_player(Player::Two);
        mcts.iterate_n_times(COLUMNS as u32).unwrap();
        assert!(mcts.tree().root().children().all(|c| c.value().visits == 1));
    }

    #[test]
    fn chosen_action_has_the_best_mean_reward() {
        // arrange
        let mut mcts = engine(Player::One, RolloutPolicy::Random);

        // act
        mcts.iterate_n_times(700).unwrap();
        let column = mcts.choose_action().unwrap();

        // assert
        assert!(column < COLUMNS);
        let root = mcts.tree().root();
        let chosen = root
            .children()
            .find(|c| {
                root.value().board.placed_column(&c.value().board, Player::One) == Some(column)
            })
            .unwrap();
        for child in root.children().filter(|c| c.value().visits > 0) {
            assert!(chosen.value().mean_score() >= child.value().mean_score());
        }
    }

    #[test]
    fn random_search_takes_the_winning_column() {
        // arrange
        let board: Board = THREE_STACKED.parse().unwrap();
        let mut mcts = MonteCarloTreeSearch::builder(Player::One)
            .with_random_generator(CustomNumberGenerator::default())
            .with_budget(Budget::Iterations(1500))
            .build();

        // act
        let column = generate_move_mcts(&mut mcts, &board, Player::One).unwrap();

        // assert
        assert_eq!(column, 0);
    }

    #[test]
    fn heuristic_search_takes_the_winning_column() {
        let board: Board = THREE_STACKED.parse().unwrap();
        let mut mcts = MonteCarloTreeSearch::builder(Player::One)
            .with_random_generator(CustomNumberGenerator::default())
            .with_rollout_policy(RolloutPolicy::Heuristic)
            .with_budget(Budget::Iterations(300))
            .build();
        assert_eq!(mcts.generate_move(&board, Player::One).unwrap(), 0);
    }

    #[test]
    fn rollout_rewards_follow_the_outcome() {
        // arrange
        let mut mcts = engine(Player::One, RolloutPolicy::Random);
        let mut won = Board::new();
        let mut lost = Board::new();
        for _ in 0..4 {
            won.apply_move(0, Player::One).unwrap();
            lost.apply_move(0, Player::Two).unwrap();
        }
        let mut full = Board::new();
        for column in 0..COLUMNS {
            for row in 0..6 {
                let player = if (row / 2 + column) % 2 == 0 { Player::One } else { Player::Two };
                full.apply_move(column, player).unwrap();
            }
        }

        // act / assert
        assert_eq!(mcts.rollout(&won).unwrap(), 1.0);
        assert_eq!(mcts.rollout(&lost).unwrap(), 0.0);
        assert_eq!(mcts.rollout(&full).unwrap(), 0.5);
        let reward = mcts.rollout(&Board::new()).unwrap();
        assert!([0.0, 0.5, 1.0].contains(&reward));
    }

    #[test]
    fn switching_player_discards_the_tree() {
        // arrange
        let mut mcts = engine(Player::One, RolloutPolicy::Random);
        mcts.iterate_n_times(50).unwrap();

        // act
        mcts.set_player(Player::One);
        let kept = mcts.tree().len();
        mcts.set_player(Player::Two);

        // assert
        assert!(kept > 1);
        assert_eq!(mcts.player(), Player::Two);
        assert_eq!(mcts.tree().len(), 1);
        assert_eq!(mcts.tree().root().value().board, Board::new());
        assert_eq!(mcts.tree().root().value().visits, 0);
    }

    #[test]
    fn known_board_reuses_search_results() {
        // arrange
        let mut mcts = engine(Player::One, RolloutPolicy::Random);
        mcts.iterate_n_times(200).unwrap();
        let explored = mcts
            .tree()
            .root()
            .children()
            .max_by_key(|c| c.value().visits)
            .map(|c| c.value().clone())
            .unwrap();

        // act
        mcts.set_current_board(&explored.board);

        // assert
        assert_eq!(mcts.tree().root().value(), &explored);
        assert!(mcts.tree().len() > 1);
    }

    #[test]
    fn unknown_board_starts_a_fresh_tree() {
        let mut mcts = engine(Player::One, RolloutPolicy::Random);
        mcts.iterate_n_times(20).unwrap();
        let board: Board = THREE_STACKED.parse().unwrap();
        mcts.set_current_board(&board);
        assert_eq!(mcts.tree().len(), 1);
        assert_eq!(mcts.tree().root().value().board, board);
        assert_eq!(mcts.tree().root().value().visits, 0);
    }

    #[test]
    fn time_budget_runs_at_least_one_iteration() {
        let mut mcts = MonteCarloTreeSearch::builder(Player::Two)
            .with_random_generator(CustomNumberGenerator::default())
            .with_budget(Budget::Time(Duration::from_millis(20)))
            .build();
        let iterations = mcts.search().unwrap();
        assert!(iterations >= 1);
        assert_eq!(mcts.tree().root().value().visits, iterations);
    }

    #[test]
    fn unbounded_time_budget_has_no_deadline() {
        assert_eq!(search_deadline(Duration::MAX), None);
        assert!(search_deadline(Duration::from_millis(20)).is_some());

        let mut mcts = MonteCarloTreeSearch::builder(Player::One)
            .with_random_generator(CustomNumberGenerator::default())
            .with_budget(Budget::Time(Duration::MAX))
            .build();
        mcts.iterate_n_times(5).unwrap();
        assert_eq!(mcts.budget(), Budget::Time(Duration::MAX));
        assert_eq!(mcts.tree().root().value().visits, 5);
    }

    #[test]
    fn finished_board_has_no_move() {
        // arrange
        let mut board = Board::new();
        for _ in 0..4 {
            board.apply_move(3, Player::Two).unwrap();
        }
        let mut mcts = MonteCarloTreeSearch::builder(Player::One)
            .with_random_generator(CustomNumberGenerator::default())
            .with_budget(Budget::Iterations(10))
            .build();

        // act
        let result = mcts.generate_move(&board, Player::One);

        // assert
        assert_eq!(result, Err(AgentError::NoMoveFound));
        assert_eq!(mcts.tree().root().value().visits, 10);
        assert_eq!(mcts.tree().root().value().score, 0.0);
    }
}
