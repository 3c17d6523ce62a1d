//! Directed acyclic task graph produced by the upstream flow engine.

use serde::{Deserialize, Serialize};

/// Identifier of a task within a [`FlowGraph`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TaskId(pub u32);

impl TaskId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task node and its rendering metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    /// Display name. Unique across the graph; the rendering backend keys
    /// nodes on it.
    pub name: String,
    /// Free-text description, shown as the node tooltip. May be absent.
    pub doc: Option<String>,
    /// Draw order within the entity cluster. Ties keep insertion order.
    pub task_ix: i64,
    /// Entity this task computes. Drives visual clustering and coloring.
    pub entity_name: String,
}

/// Directed acyclic task graph.
///
/// Acyclicity and `name` uniqueness are guaranteed by the upstream graph
/// builder and not validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    nodes: Vec<TaskNode>,
    edges: Vec<(TaskId, TaskId)>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task and return its id.
    pub fn add_task(&mut self, node: TaskNode) -> TaskId {
        let id = TaskId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add a directed dependency edge: `from` feeds into `to`.
    pub fn add_dependency(&mut self, from: TaskId, to: TaskId) {
        self.edges.push((from, to));
    }

    /// Look up a task by id.
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    pub fn node(&self, id: TaskId) -> &TaskNode {
        &self.nodes[id.as_u32() as usize]
    }

    /// Iterate all tasks in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (TaskId, &TaskNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(ix, node)| (TaskId::new(ix as u32), node))
    }

    /// All dependency edges in insertion order.
    pub fn edges(&self) -> &[(TaskId, TaskId)] {
        &self.edges
    }

    /// Iterate the direct successors of a task.
    pub fn successors(&self, id: TaskId) -> impl Iterator<Item = TaskId> + '_ {
        self.edges
            .iter()
            .filter(move |(from, _)| *from == id)
            .map(|(_, to)| *to)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(name: &str, entity: &str, ix: i64) -> TaskNode {
        TaskNode {
            name: name.to_string(),
            doc: None,
            task_ix: ix,
            entity_name: entity.to_string(),
        }
    }

    #[test]
    fn test_add_and_lookup() {
        let mut graph = FlowGraph::new();
        let a = graph.add_task(task("model", "model", 0));
        let b = graph.add_task(task("score", "score", 0));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node(a).name, "model");
        assert_eq!(graph.node(b).entity_name, "score");
    }

    #[test]
    fn test_successors() {
        let mut graph = FlowGraph::new();
        let a = graph.add_task(task("raw", "raw", 0));
        let b = graph.add_task(task("clean", "clean", 0));
        let c = graph.add_task(task("model", "model", 0));
        graph.add_dependency(a, b);
        graph.add_dependency(a, c);
        graph.add_dependency(b, c);

        let succs: Vec<TaskId> = graph.successors(a).collect();
        assert_eq!(succs, vec![b, c]);
        assert_eq!(graph.successors(c).count(), 0);
    }

    #[test]
    fn test_node_iteration_order() {
        let mut graph = FlowGraph::new();
        for ix in 0..4 {
            graph.add_task(task(&format!("t{ix}"), "e", ix));
        }
        let names: Vec<&str> = graph.nodes().map(|(_, n)| n.name.as_str()).collect();
        assert_eq!(names, vec!["t0", "t1", "t2", "t3"]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = FlowGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut graph = FlowGraph::new();
        let a = graph.add_task(task("raw", "raw", 0));
        let b = graph.add_task(task("clean", "clean", 1));
        graph.add_dependency(a, b);

        let json = serde_json::to_string(&graph).unwrap();
        let back: FlowGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.node_count(), 2);
        assert_eq!(back.edges(), graph.edges());
    }
}
