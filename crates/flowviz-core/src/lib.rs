//! # flowviz-core
//!
//! The task-graph model consumed by the flowviz renderers.
//!
//! The upstream flow engine fills a [`FlowGraph`] with one [`TaskNode`] per
//! computed task and one directed edge per dependency. This crate only holds
//! the data; styling and rendering live in `flowviz-dot` and
//! `flowviz-render`.

mod graph;

pub use graph::{FlowGraph, TaskId, TaskNode};
