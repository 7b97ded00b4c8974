use std::collections::VecDeque;

use crate::error::{DegreesError, Result};
use crate::model::{MovieId, PersonId};

/// Position of an expanded node in a search's node arena.
pub type NodeIndex = usize;

/// One step of a candidate path. `parent` points into the arena of expanded
/// nodes; the start node has neither a parent nor an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: PersonId,
    pub action: Option<MovieId>,
    pub parent: Option<NodeIndex>,
}

impl SearchNode {
    pub fn root(state: PersonId) -> Self {
        Self {
            state,
            action: None,
            parent: None,
        }
    }
}

/// Nodes waiting to be expanded. The removal order decides the search
/// strategy.
pub trait Frontier: Default {
    fn add(&mut self, node: SearchNode);

    fn remove(&mut self) -> Result<SearchNode>;

    fn contains_state(&self, state: &PersonId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FIFO frontier: breadth-first, so the first hit is a shortest path.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<SearchNode>,
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<SearchNode> {
        self.nodes.pop_front().ok_or(DegreesError::EmptyFrontier)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.nodes.iter().any(|node| &node.state == state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// LIFO frontier: depth-first, finds some path but not necessarily a
/// shortest one.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<SearchNode>,
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: SearchNode) {
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<SearchNode> {
        self.nodes.pop().ok_or(DegreesError::EmptyFrontier)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.nodes.iter().any(|node| &node.state == state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(state: &str) -> SearchNode {
        SearchNode::root(PersonId::new(state))
    }

    #[test]
    fn test_queue_frontier_is_fifo() {
        let mut frontier = QueueFrontier::default();
        frontier.add(node("a"));
        frontier.add(node("b"));
        frontier.add(node("c"));
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.remove().unwrap().state, PersonId::new("a"));
        assert_eq!(frontier.remove().unwrap().state, PersonId::new("b"));
        assert_eq!(frontier.remove().unwrap().state, PersonId::new("c"));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_stack_frontier_is_lifo() {
        let mut frontier = StackFrontier::default();
        frontier.add(node("a"));
        frontier.add(node("b"));
        assert_eq!(frontier.remove().unwrap().state, PersonId::new("b"));
        assert_eq!(frontier.remove().unwrap().state, PersonId::new("a"));
    }

    #[test]
    fn test_remove_from_empty_frontier() {
        let mut queue = QueueFrontier::default();
        assert!(matches!(queue.remove(), Err(DegreesError::EmptyFrontier)));
        let mut stack = StackFrontier::default();
        assert!(matches!(stack.remove(), Err(DegreesError::EmptyFrontier)));
    }

    #[test]
    fn test_contains_state() {
        let mut frontier = QueueFrontier::default();
        frontier.add(node("a"));
        frontier.add(node("a")); // duplicates are allowed on the frontier
        assert!(frontier.contains_state(&PersonId::new("a")));
        assert!(!frontier.contains_state(&PersonId::new("b")));
        frontier.remove().unwrap();
        assert!(frontier.contains_state(&PersonId::new("a")));
    }
}
