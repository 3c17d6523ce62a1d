//! Graphviz subprocess invocation.
//!
//! Layout and rasterization are delegated entirely to the external `dot`
//! program. DOT source goes in on stdin; rendered bytes come back on
//! stdout. One short-lived synchronous process per requested format.

use std::io::Write;
use std::process::{Command, Stdio};

use flowviz_error::{Error, Result};

/// Program used for layout and rasterization.
const DOT_PROGRAM: &str = "dot";

/// Output format requested from the layout backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendFormat {
    Png,
    Svg,
}

impl BackendFormat {
    pub fn as_flag(&self) -> &'static str {
        match self {
            BackendFormat::Png => "-Tpng",
            BackendFormat::Svg => "-Tsvg",
        }
    }
}

/// Pipe DOT source through the Graphviz `dot` program and return the
/// rendered bytes in the requested format.
pub fn render_via_dot(dot_source: &str, format: BackendFormat) -> Result<Vec<u8>> {
    render_via_program(DOT_PROGRAM, dot_source, format)
}

fn render_via_program(program: &str, dot_source: &str, format: BackendFormat) -> Result<Vec<u8>> {
    let mut child = Command::new(program)
        .arg(format.as_flag())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| spawn_error(program, err))?;

    // Write the source, then drop stdin so the backend sees EOF.
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(dot_source.as_bytes())
            .map_err(|err| Error::from(err).with_operation("backend::render_via_dot"))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|err| Error::from(err).with_operation("backend::render_via_dot"))?;

    if !output.status.success() {
        return Err(Error::backend_failed("dot exited with failure")
            .with_operation("backend::render_via_dot")
            .with_context("status", output.status.to_string())
            .with_context(
                "stderr",
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
    }

    tracing::debug!(
        format = format.as_flag(),
        bytes = output.stdout.len(),
        "backend render complete"
    );
    Ok(output.stdout)
}

fn spawn_error(program: &str, err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::backend_not_found(program)
            .with_operation("backend::render_via_dot")
            .with_context("purpose", "rendering the flow DAG")
            .with_context("hint", "install graphviz and ensure `dot` is on PATH")
            .set_source(err)
    } else {
        Error::from(err).with_operation("backend::render_via_dot")
    }
}
