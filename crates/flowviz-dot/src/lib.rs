//! Drawing construction for flow graphs, rendered to DOT format.
//!
//! This crate transforms a [`FlowGraph`](flowviz_core::FlowGraph) into a
//! backend-agnostic [`DrawingSpec`] and translates that to DOT source for
//! Graphviz. Tasks are grouped into one invisible cluster per entity, with
//! one perceptually distinct fill color per entity.
//!
//! # Module Structure
//!
//! - [`color`]: Evenly spaced perceptual colors for entity clusters
//! - [`types`]: Drawing specification value types
//! - [`dot`]: DOT format utilities and helpers
//! - [`draw`]: Graph-to-drawing translation and DOT emission

pub mod color;
mod dot;
mod draw;
mod types;

pub use dot::DotBuilder;
pub use draw::{build_drawing, render_dot, render_graph};
pub use types::{
    ClusterSpec, DrawOptions, DrawingSpec, EdgeSpec, NodeSpec, RankDir, SplineMode, TailPort,
};
