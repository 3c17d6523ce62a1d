//! DOT format utilities for diagram emission.

use std::fmt::Write;

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for DOT quoted strings.
pub fn escape_value(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write indentation to output.
fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
///
/// Node and edge endpoints are emitted as quoted strings, so arbitrary
/// display names (spaces, unicode) survive as backend keys.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new directed graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {} {{", sanitize_id(name));
        Self { output, indent: 1 }
    }

    /// Add a graph attribute at the current nesting level.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_value(value));
        self
    }

    /// Add a node declaration with attributes.
    pub fn node(&mut self, name: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "\"{}\"", escape_value(name));
        self.write_attr_list(attrs);
        self
    }

    /// Add an edge declaration with attributes.
    pub fn edge(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(
            self.output,
            "\"{}\" -> \"{}\"",
            escape_value(from),
            escape_value(to)
        );
        self.write_attr_list(attrs);
        self
    }

    /// Start a subgraph cluster.
    pub fn start_cluster(&mut self, id: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph cluster_{} {{", sanitize_id(id));
        self.indent += 1;
        self
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }

    fn write_attr_list(&mut self, attrs: &[(&str, &str)]) {
        if !attrs.is_empty() {
            self.output.push_str(" [");
            for (i, (key, value)) in attrs.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                let _ = write!(self.output, "{}=\"{}\"", key, escape_value(value));
            }
            self.output.push(']');
        }
        self.output.push_str(";\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("my entity"), "my_entity");
        assert_eq!(sanitize_id("buzz"), "buzz");
        assert_eq!(sanitize_id("a/b.c"), "a_b_c");
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("plain"), "plain");
        assert_eq!(escape_value("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_value("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_value("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_builder_output() {
        let mut dot = DotBuilder::new("flow");
        dot.attr("rankdir", "LR");
        dot.start_cluster("buzz");
        dot.attr("style", "invis");
        dot.node("foo", &[("shape", "box")]);
        dot.end_cluster();
        dot.edge("foo", "bar", &[("arrowhead", "open")]);
        let out = dot.build();

        assert_eq!(
            out,
            "digraph flow {\n\
             \x20 rankdir=\"LR\";\n\
             \x20 subgraph cluster_buzz {\n\
             \x20   style=\"invis\";\n\
             \x20   \"foo\" [shape=\"box\"];\n\
             \x20 }\n\
             \x20 \"foo\" -> \"bar\" [arrowhead=\"open\"];\n\
             }\n"
        );
    }

    #[test]
    fn test_node_without_attrs() {
        let mut dot = DotBuilder::new("g");
        dot.node("plain", &[]);
        let out = dot.build();
        assert!(out.contains("\"plain\";\n"));
    }
}
