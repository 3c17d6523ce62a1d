//! End-to-end rendering tests: flow graph -> DOT -> dual-format image.
//!
//! Tests that invoke the Graphviz backend are `#[ignore]`d so the suite
//! passes on machines without it; run them with `cargo test -- --ignored`.

use flowviz_core::{FlowGraph, TaskNode};
use flowviz_dot::{DrawOptions, render_graph};
use flowviz_render::FlowImage;

fn sample_graph() -> FlowGraph {
    let mut graph = FlowGraph::new();
    let raw = graph.add_task(TaskNode {
        name: "raw_frame".to_string(),
        doc: Some("load raw data".to_string()),
        task_ix: 0,
        entity_name: "raw_frame".to_string(),
    });
    let clean = graph.add_task(TaskNode {
        name: "clean_frame".to_string(),
        doc: None,
        task_ix: 0,
        entity_name: "clean_frame".to_string(),
    });
    let model = graph.add_task(TaskNode {
        name: "model".to_string(),
        doc: Some("fraüd modeling".to_string()),
        task_ix: 0,
        entity_name: "model".to_string(),
    });
    graph.add_dependency(raw, clean);
    graph.add_dependency(clean, model);
    graph
}

#[test]
fn dot_source_is_complete_without_a_backend() {
    let dot = render_graph(&sample_graph(), &DrawOptions::default());
    assert!(dot.starts_with("digraph flow {"));
    assert!(dot.contains("subgraph cluster_model {"));
    assert!(dot.contains("\"clean_frame\" -> \"model\""));
}

// Requires graphviz on PATH.
#[test]
#[ignore]
fn render_produces_both_formats() {
    let dot = render_graph(&sample_graph(), &DrawOptions::default());
    let image = FlowImage::render(&dot).expect("graphviz render");

    assert!(image.raster().width() > 0);
    assert!(image.svg_markup().contains("<svg"));
    // The tooltip survives into the vector output.
    assert!(image.svg_markup().contains("fraüd modeling"));
}

// Requires graphviz on PATH.
#[test]
#[ignore]
fn save_both_formats_to_disk() {
    let dot = render_graph(&sample_graph(), &DrawOptions::default());
    let image = FlowImage::render(&dot).expect("graphviz render");

    let dir = tempfile::tempdir().unwrap();
    let svg_path = dir.path().join("flow.svg");
    let png_path = dir.path().join("flow.png");

    image.save(&svg_path).unwrap();
    image.save(&png_path).unwrap();

    assert_eq!(std::fs::read(&svg_path).unwrap(), image.vector_markup());
    assert!(
        std::fs::read(&png_path)
            .unwrap()
            .starts_with(&[137, 80, 78, 71])
    );
}
