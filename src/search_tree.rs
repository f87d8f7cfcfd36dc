use crate::board::Board;
use crate::error::AgentError;
use crate::mcts_node::MctsNode;
use ego_tree::{NodeId, NodeRef, Tree};

/// Arena backed search tree of [`MctsNode`]s.
///
/// Every node is exclusively owned by its parent and there are no back references, so a subtree
/// handed out by [`SearchTree::find`] or taken in by [`SearchTree::add_subtree`] is always an
/// independent copy. Paths through the tree are given as child indices starting at the root.
#[derive(Debug, Clone)]
pub struct SearchTree {
    tree: Tree<MctsNode>,
}

impl SearchTree {
    /// Creates a single-node tree for `board`.
    pub fn new(board: Board) -> Self {
        Self {
            tree: Tree::new(MctsNode::new(board)),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeRef<'_, MctsNode> {
        self.tree.root()
    }

    /// Returns the id of the root node.
    pub fn root_id(&self) -> NodeId {
        self.tree.root().id()
    }

    /// Returns the node with the given id, if it belongs to this tree.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, MctsNode>> {
        self.tree.get(id)
    }

    /// Number of nodes in the tree, the root included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tree.values().count()
    }

    /// Returns `true` if the node has no children. Unknown ids count as leaves.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.tree.get(id).is_none_or(|node| !node.has_children())
    }

    /// Looks for a node holding `board`, searching depth first with each parent before its
    /// children.
    ///
    /// Returns an independent copy of the first matching subtree, statistics included.
    pub fn find(&self, board: &Board) -> Option<SearchTree> {
        let found = self
            .tree
            .root()
            .descendants()
            .find(|node| node.value().board == *board)?;

        let mut tree = Tree::new(found.value().clone());
        let root_id = tree.root().id();
        copy_children(&mut tree, found, root_id);
        Some(SearchTree { tree })
    }

    /// Appends `node` as the last child of `parent` and returns its id.
    pub fn add_child(&mut self, parent: NodeId, node: MctsNode) -> Option<NodeId> {
        Some(self.tree.get_mut(parent)?.append(node).id())
    }

    /// Appends a copy of the whole of `subtree` as the last child of `parent`.
    pub fn add_subtree(&mut self, parent: NodeId, subtree: &SearchTree) -> Option<NodeId> {
        let source = subtree.tree.root();
        let top = self.tree.get_mut(parent)?.append(source.value().clone()).id();
        copy_children(&mut self.tree, source, top);
        Some(top)
    }

    /// Commits a rollout result to a node. See [`MctsNode::set_score`].
    pub fn set_score(&mut self, id: NodeId, score: f64) -> bool {
        match self.tree.get_mut(id) {
            Some(mut node) => node.value().set_score(score),
            None => false,
        }
    }

    /// Resolves a path of child indices to the id of the node it ends at.
    pub fn node_at(&self, path: &[usize]) -> Result<NodeId, AgentError> {
        let ids = self.path_ids(path)?;
        Ok(ids[ids.len() - 1])
    }

    /// Adds the statistics of the node at the end of `path` to every node above it on the path.
    ///
    /// Must follow every [`SearchTree::set_score`] on a freshly simulated node so that each
    /// ancestor's totals cover every simulation run in its subtree.
    pub fn backpropagate(&mut self, path: &[usize]) -> Result<(), AgentError> {
        let ids = self.path_ids(path)?;
        let Some((&simulated, ancestors)) = ids.split_last() else {
            return Ok(());
        };
        let (score, visits) = match self.tree.get(simulated) {
            Some(node) => (node.value().score, node.value().visits),
            None => return Ok(()),
        };

        for &id in ancestors.iter().rev() {
            if let Some(mut node) = self.tree.get_mut(id) {
                node.value().absorb(score, visits);
            }
        }
        Ok(())
    }

    /// Counts one more simulation worth `score` at the node at the end of `path` and all its
    /// ancestors.
    ///
    /// Used for terminal positions, which are revisited instead of expanded.
    pub fn reinforce(&mut self, path: &[usize], score: f64) -> Result<(), AgentError> {
        for id in self.path_ids(path)? {
            if let Some(mut node) = self.tree.get_mut(id) {
                node.value().absorb(score, 1);
            }
        }
        Ok(())
    }

    fn path_ids(&self, path: &[usize]) -> Result<Vec<NodeId>, AgentError> {
        let mut node = self.tree.root();
        let mut ids = Vec::with_capacity(path.len() + 1);
        ids.push(node.id());
        for (depth, &index) in path.iter().enumerate() {
            node = node
                .children()
                .nth(index)
                .ok_or(AgentError::InvalidPath { depth, index })?;
            ids.push(node.id());
        }
        Ok(ids)
    }
}

/// Copies every descendant of `source` under `target_id`, keeping the child order.
fn copy_children(target: &mut Tree<MctsNode>, source: NodeRef<'_, MctsNode>, target_id: NodeId) {
    let mut pending = vec![(source, target_id)];
    while let Some((from, to)) = pending.pop() {
        for child in from.children() {
            if let Some(mut parent) = target.get_mut(to) {
                let id = parent.append(child.value().clone()).id();
                pending.push((child, id));
            }
        }
    }
}
