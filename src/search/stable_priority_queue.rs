use crate::problem::NodeId;
use crate::search::HeuristicValue;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

type Priority = (Reverse<HeuristicValue>, Reverse<u64>);

/// Min-priority queue of nodes where equal keys pop in insertion order.
/// Each node is queued at most once; pushing a queued node again replaces
/// its key and moves it to the back of its tie group.
#[derive(Debug, Clone, Default)]
pub struct StablePriorityQueue {
    queue: PriorityQueue<NodeId, Priority>,
    sequence: u64,
}

impl StablePriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, key: f64) {
        let priority = (Reverse(OrderedFloat(key)), Reverse(self.sequence));
        self.sequence += 1;
        self.queue.push(node, priority);
    }

    pub fn pop(&mut self) -> Option<(NodeId, f64)> {
        self.queue
            .pop()
            .map(|(node, (Reverse(key), _))| (node, key.into_inner()))
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.queue.get(node).is_some()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The queued nodes in the order they would be popped.
    pub fn snapshot(&self) -> Vec<NodeId> {
        let mut entries: Vec<(&NodeId, &Priority)> = self.queue.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(a.1));
        entries.into_iter().map(|(node, _)| node.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[NodeId]) -> Vec<&str> {
        nodes.iter().map(NodeId::as_str).collect()
    }

    #[test]
    fn pops_lowest_key_first() {
        let mut queue = StablePriorityQueue::new();
        queue.push("c".into(), 3.);
        queue.push("a".into(), 1.);
        queue.push("b".into(), 2.);
        assert_eq!(queue.pop(), Some(("a".into(), 1.)));
        assert_eq!(queue.pop(), Some(("b".into(), 2.)));
        assert_eq!(queue.pop(), Some(("c".into(), 3.)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut queue = StablePriorityQueue::new();
        for id in ["x", "b", "z", "a"] {
            queue.push(id.into(), 1.);
        }
        assert_eq!(ids(&queue.snapshot()), vec!["x", "b", "z", "a"]);
        assert_eq!(queue.pop().unwrap().0.as_str(), "x");
        assert_eq!(queue.pop().unwrap().0.as_str(), "b");
    }

    #[test]
    fn pushing_again_updates_key() {
        let mut queue = StablePriorityQueue::new();
        queue.push("a".into(), 5.);
        queue.push("b".into(), 3.);
        queue.push("a".into(), 2.);
        assert_eq!(queue.len(), 2);
        assert!(queue.contains(&"a".into()));
        assert_eq!(ids(&queue.snapshot()), vec!["a", "b"]);
        assert_eq!(queue.pop(), Some(("a".into(), 2.)));
    }

    #[test]
    fn snapshot_does_not_consume() {
        let mut queue = StablePriorityQueue::new();
        queue.push("a".into(), 0.);
        let _ = queue.snapshot();
        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
    }
}
