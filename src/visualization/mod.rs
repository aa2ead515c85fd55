use crate::errors::IncludeGraphError;
use crate::graph::DependencyGraph;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotTheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir {
    LR,
    TB,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Curved,
    Ortho,
    Polyline,
}

#[derive(Debug, Clone, Copy)]
pub struct DotOptions {
    pub theme: DotTheme,
    pub rankdir: RankDir,
    pub splines: EdgeStyle,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self { theme: DotTheme::Light, rankdir: RankDir::LR, splines: EdgeStyle::Curved }
    }
}

#[derive(Debug, Default)]
pub struct DotGenerator;

impl DotGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Generate DOT with default options.
    #[must_use]
    pub fn generate_dot(&self, graph: &DependencyGraph) -> String {
        self.generate_dot_with_options(graph, DotOptions::default())
    }

    /// Generate DOT with the given `opts`. Output is deterministic for a
    /// given graph: node declarations in node order, then one edge
    /// statement per edge. Endpoints without a declaration are created
    /// implicitly by Graphviz.
    #[must_use]
    pub fn generate_dot_with_options(&self, graph: &DependencyGraph, opts: DotOptions) -> String {
        let mut s = String::new();
        s.push_str("digraph Includes\n{\n");
        let rank = match opts.rankdir {
            RankDir::LR => "LR",
            RankDir::TB => "TB",
        };
        let splines = match opts.splines {
            EdgeStyle::Curved => "curved",
            EdgeStyle::Ortho => "ortho",
            EdgeStyle::Polyline => "polyline",
        };
        let (bgcolor, fill, fontcolor) = match opts.theme {
            DotTheme::Light => ("white", "#e0f3ff", "black"),
            DotTheme::Dark => ("#1e1e1e", "#124559", "white"),
        };
        let _ = write!(
            s,
            "  rankdir={rank};\n  graph [fontname=Helvetica, splines={splines}, bgcolor=\"{bgcolor}\"] ;\n  node [shape=box, fontsize=10, style=filled, fillcolor=\"{fill}\", fontcolor=\"{fontcolor}\"] ;\n  edge [fontname=Helvetica, fontsize=9, color=\"{fontcolor}\"];\n"
        );

        for node in &graph.nodes {
            let _ = writeln!(s, "  \"{}\";", escape_label(node));
        }
        for (from, to) in &graph.edges {
            let _ = writeln!(s, "  \"{}\" -> \"{}\";", escape_label(from), escape_label(to));
        }

        s.push_str("}\n");
        s
    }
}

#[derive(Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Render DOT source to SVG using Graphviz.
    ///
    /// # Errors
    /// Returns `IncludeGraphError::Render` if invoking Graphviz fails, if
    /// the process exits with a non-success status, or if its output is not
    /// valid UTF-8.
    pub fn render_svg(&self, dot: &str) -> Result<String, IncludeGraphError> {
        let output = std::process::Command::new("dot")
            .arg("-Tsvg")
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .spawn()
            .and_then(|mut child| {
                use std::io::Write;
                if let Some(stdin) = child.stdin.as_mut() {
                    stdin.write_all(dot.as_bytes())?;
                }
                child.wait_with_output()
            })
            .map_err(|e| IncludeGraphError::Render(format!("Failed to run graphviz 'dot': {e}")))?;
        if !output.status.success() {
            return Err(IncludeGraphError::Render(format!(
                "Graphviz 'dot' failed with code {:?}",
                output.status.code()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| IncludeGraphError::Render(format!("Invalid UTF-8 from dot: {e}")))
    }
}

fn escape_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
