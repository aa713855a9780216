//! Layout options for Graphviz output.

/// Options controlling the DOT text layout.
///
/// The defaults produce the canonical layout: an anonymous `digraph` with
/// every line indented by four spaces.
///
/// ```rust
/// use kripke_structures::graphviz::DotOptions;
///
/// let options = DotOptions::new().indent(2).graph_name("traffic_light");
/// assert_eq!(options.indent_width(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotOptions {
    indent: usize,
    graph_name: Option<String>,
}

impl DotOptions {
    /// Default layout: four-space indent, anonymous graph.
    pub fn new() -> Self {
        Self {
            indent: 4,
            graph_name: None,
        }
    }

    /// Set the number of spaces before every line inside the graph
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Name the graph: `digraph "<name>" { ... }`
    pub fn graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = Some(name.into());
        self
    }

    /// Number of spaces before each line inside the graph.
    pub fn indent_width(&self) -> usize {
        self.indent
    }

    /// Wrap body lines in a `digraph` block.
    ///
    /// Lines holding embedded newlines are split so that every physical
    /// line is indented.
    pub(crate) fn wrap(&self, lines: &[String]) -> String {
        let padding = " ".repeat(self.indent);
        let header = match &self.graph_name {
            Some(name) => format!("digraph \"{}\" {{", super::escape(name)),
            None => "digraph {".to_string(),
        };
        let body: Vec<String> = lines
            .iter()
            .flat_map(|line| line.lines())
            .map(|line| format!("{padding}{line}"))
            .collect();
        if body.is_empty() {
            format!("{header}\n}}")
        } else {
            format!("{header}\n{}\n}}", body.join("\n"))
        }
    }
}

impl Default for DotOptions {
    fn default() -> Self {
        Self::new()
    }
}
