use crate::board::Board;

/// Represents a single node in the Monte Carlo search tree.
///
/// A node stores the position it stands for and the statistics of every simulation run
/// anywhere in its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsNode {
    /// The position this node represents.
    pub board: Board,
    /// Sum of the rewards of all simulations in this subtree (1 win, 0.5 draw, 0 loss).
    pub score: f64,
    /// Number of simulations in this subtree.
    pub visits: u32,
}

impl MctsNode {
    /// Creates an unvisited node for `board`.
    pub fn new(board: Board) -> Self {
        MctsNode {
            board,
            score: 0.0,
            visits: 0,
        }
    }

    /// Mean simulated reward of this subtree.
    pub fn mean_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / (self.visits as f64)
        }
    }

    /// Records the result of the rollout played from this node.
    ///
    /// Only the first call on an unvisited node has any effect; returns whether the score was
    /// taken.
    pub fn set_score(&mut self, score: f64) -> bool {
        if self.visits > 0 {
            return false;
        }
        self.score = score;
        self.visits = 1;
        true
    }

    pub(crate) fn absorb(&mut self, score: f64, visits: u32) {
        self.score += score;
        self.visits += visits;
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::mcts_node::MctsNode;

    #[test]
    fn set_score_only_counts_once() {
        // arrange
        let mut node = MctsNode::new(Board::new());

        // act
        let first = node.set_score(0.5);
        let second = node.set_score(1.0);

        // assert
        assert!(first);
        assert!(!second);
        assert_eq!(node.score, 0.5);
        assert_eq!(node.visits, 1);
    }

    #[test]
    fn mean_score_of_unvisited_node_is_zero() {
        let mut node = MctsNode::new(Board::new());
        assert_eq!(node.mean_score(), 0.0);
        node.absorb(1.5, 2);
        assert_eq!(node.mean_score(), 0.75);
    }
}
