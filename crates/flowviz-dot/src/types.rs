//! Drawing specification value types.
//!
//! A [`DrawingSpec`] is the backend-agnostic description of a styled flow
//! diagram: what to draw and how to style it, with layout left entirely to
//! the rendering backend.

use serde::Serialize;

/// Overall layout direction of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RankDir {
    /// Left to right (default).
    #[default]
    LeftRight,
    /// Top to bottom.
    TopBottom,
}

impl RankDir {
    pub fn as_dot(&self) -> &'static str {
        match self {
            RankDir::LeftRight => "LR",
            RankDir::TopBottom => "TB",
        }
    }
}

/// Edge routing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SplineMode {
    /// Straight lines (default).
    #[default]
    Line,
    /// Curved splines.
    Spline,
}

impl SplineMode {
    pub fn as_dot(&self) -> &'static str {
        match self {
            SplineMode::Line => "line",
            SplineMode::Spline => "spline",
        }
    }
}

/// Side of the source node an edge leaves from. A rendering aesthetic only;
/// no effect on graph structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TailPort {
    /// Right side (default, matches left-to-right layout).
    #[default]
    East,
    /// Bottom (matches top-to-bottom layout).
    South,
}

impl TailPort {
    pub fn as_dot(&self) -> &'static str {
        match self {
            TailPort::East => "e",
            TailPort::South => "s",
        }
    }
}

/// Options for building a drawing from a flow graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawOptions {
    /// Lay the diagram out top-to-bottom instead of left-to-right.
    pub vertical: bool,
    /// Route edges as curved splines instead of straight lines.
    pub curvy_lines: bool,
}

/// A styled node declaration.
///
/// Shape and fill style are fixed for the whole diagram (filled boxes); only
/// the color and tooltip vary per node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSpec {
    /// Backend key; the task's unique display name.
    pub name: String,
    /// Hover text. Empty when the task has no doc.
    pub tooltip: String,
    /// Fill color, shared by all tasks of one entity.
    pub fill_color: String,
}

/// One entity's tasks, grouped into a cluster with an invisible border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterSpec {
    pub entity_name: String,
    /// Node declarations in ascending `task_ix` order.
    pub nodes: Vec<NodeSpec>,
}

/// A directed edge declaration, referencing nodes by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub tail_port: TailPort,
}

/// Backend-agnostic description of the styled diagram.
///
/// Cluster membership partitions the node set by entity; edges are drawn
/// beneath nodes so nodes occlude edge endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawingSpec {
    pub rankdir: RankDir,
    pub splines: SplineMode,
    pub clusters: Vec<ClusterSpec>,
    pub edges: Vec<EdgeSpec>,
}

impl DrawingSpec {
    /// Total node declarations across all clusters.
    pub fn node_count(&self) -> usize {
        self.clusters.iter().map(|c| c.nodes.len()).sum()
    }
}
