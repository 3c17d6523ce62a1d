//! Graph-to-drawing translation and DOT emission.

use std::collections::HashMap;

use flowviz_core::{FlowGraph, TaskId};

use crate::color::hpluv_color_map;
use crate::dot::DotBuilder;
use crate::types::{
    ClusterSpec, DrawOptions, DrawingSpec, EdgeSpec, NodeSpec, RankDir, SplineMode, TailPort,
};

/// Entity cluster color convention: pastel fills with uniform perceived
/// lightness. Callers wanting different aesthetics must change these.
const FILL_SATURATION: f64 = 99.0;
const FILL_LIGHTNESS: f64 = 90.0;

/// Build the backend-agnostic drawing specification for a flow graph.
///
/// Tasks are partitioned into one invisible cluster per entity, ordered by
/// `task_ix` within the cluster, with one evenly spaced fill color per
/// entity. Entities keep first-seen order, so the hue pairing is stable
/// within one call.
pub fn build_drawing(graph: &FlowGraph, options: &DrawOptions) -> DrawingSpec {
    // Partition tasks by entity, entities in first-seen order.
    let mut entity_order: Vec<String> = Vec::new();
    let mut tasks_by_entity: HashMap<String, Vec<TaskId>> = HashMap::new();
    for (id, node) in graph.nodes() {
        tasks_by_entity
            .entry(node.entity_name.clone())
            .or_insert_with(|| {
                entity_order.push(node.entity_name.clone());
                Vec::new()
            })
            .push(id);
    }

    let colors = hpluv_color_map(entity_order.iter().cloned(), FILL_SATURATION, FILL_LIGHTNESS);

    let mut clusters = Vec::with_capacity(entity_order.len());
    for entity in &entity_order {
        let mut task_ids = tasks_by_entity.remove(entity).unwrap_or_default();
        // Stable sort: equal task_ix keeps insertion order.
        task_ids.sort_by_key(|&id| graph.node(id).task_ix);

        let nodes = task_ids
            .iter()
            .map(|&id| {
                let node = graph.node(id);
                NodeSpec {
                    name: node.name.clone(),
                    tooltip: node.doc.clone().unwrap_or_default(),
                    fill_color: colors[entity].clone(),
                }
            })
            .collect();

        clusters.push(ClusterSpec {
            entity_name: entity.clone(),
            nodes,
        });
    }

    let tail_port = if options.vertical {
        TailPort::South
    } else {
        TailPort::East
    };
    let edges = graph
        .edges()
        .iter()
        .map(|&(from, to)| EdgeSpec {
            from: graph.node(from).name.clone(),
            to: graph.node(to).name.clone(),
            tail_port,
        })
        .collect();

    tracing::debug!(
        clusters = clusters.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built drawing specification"
    );

    DrawingSpec {
        rankdir: if options.vertical {
            RankDir::TopBottom
        } else {
            RankDir::LeftRight
        },
        splines: if options.curvy_lines {
            SplineMode::Spline
        } else {
            SplineMode::Line
        },
        clusters,
        edges,
    }
}

/// Translate a drawing specification to DOT source in one pass.
pub fn render_dot(spec: &DrawingSpec) -> String {
    let mut dot = DotBuilder::new("flow");
    dot.attr("splines", spec.splines.as_dot())
        // Edges beneath nodes, so nodes occlude edge endpoints.
        .attr("outputorder", "edgesfirst")
        .attr("rankdir", spec.rankdir.as_dot());

    for cluster in &spec.clusters {
        dot.start_cluster(&cluster.entity_name);
        dot.attr("style", "invis");
        for node in &cluster.nodes {
            dot.node(
                &node.name,
                &[
                    ("tooltip", node.tooltip.as_str()),
                    ("style", "filled"),
                    ("fillcolor", node.fill_color.as_str()),
                    ("shape", "box"),
                ],
            );
        }
        dot.end_cluster();
    }

    for edge in &spec.edges {
        dot.edge(
            &edge.from,
            &edge.to,
            &[
                ("arrowhead", "open"),
                ("tailport", edge.tail_port.as_dot()),
            ],
        );
    }

    dot.build()
}

/// Render a flow graph straight to DOT source.
pub fn render_graph(graph: &FlowGraph, options: &DrawOptions) -> String {
    render_dot(&build_drawing(graph, options))
}
