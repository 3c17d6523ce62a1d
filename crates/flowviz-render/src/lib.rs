//! Rendering backend invocation and the dual-format image result.
//!
//! DOT source produced by `flowviz-dot` is piped through the external
//! Graphviz `dot` program, which computes layout and produces both a raster
//! (PNG) and a vector (SVG) encoding of the same diagram. [`FlowImage`]
//! owns both representations and exposes format-aware save and display
//! operations.
//!
//! # Module Structure
//!
//! - [`backend`]: Graphviz subprocess invocation
//! - [`FlowImage`]: The dual-format render result

pub mod backend;
mod flow_image;

pub use backend::{BackendFormat, render_via_dot};
pub use flow_image::{FlowImage, SaveOptions, SaveTarget, WriteSeek};

// The raster format type callers pass to `save_with` comes from the image
// crate; re-exported so downstream crates need no direct dependency.
pub use image::ImageFormat;
