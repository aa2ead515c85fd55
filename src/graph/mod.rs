//! Graph assembly for the crate.
//!
//! Turns the scanner's [`IncludeMap`](crate::scanner::IncludeMap) into a
//! renderable node/edge set. The graph is a plain directed multigraph: no
//! cycle detection, no ordering, no weights, duplicate edges preserved.
use crate::scanner::IncludeMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyGraph {
    /// Scanned files, sorted by name for run-to-run determinism.
    pub nodes: Vec<String>,
    /// One `(from, to)` pair per include line, in per-file order.
    pub edges: Vec<(String, String)>,
}

impl DependencyGraph {
    /// Assemble a graph from a completed scan.
    ///
    /// Nodes are declared only for scanned files. Include targets that were
    /// never scanned (system headers, files outside the extension filter)
    /// appear solely as edge endpoints; the rendering collaborator
    /// auto-creates endpoint nodes referenced only by edges.
    #[must_use]
    pub fn from_include_map(map: &IncludeMap) -> Self {
        let mut nodes: Vec<String> = map.entries.keys().cloned().collect();
        nodes.sort();

        let mut edges = Vec::new();
        for node in &nodes {
            if let Some(includes) = map.entries.get(node) {
                for target in includes {
                    edges.push((node.clone(), target.clone()));
                }
            }
        }
        Self { nodes, edges }
    }

    /// Save the graph as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `IncludeGraphError::Io` if serialization or writing the file
    /// fails.
    pub fn save_json(&self, path: &std::path::Path) -> Result<(), crate::errors::IncludeGraphError> {
        let data = serde_json::to_string_pretty(self).map_err(|e| {
            crate::errors::IncludeGraphError::Io(std::io::Error::other(e.to_string()))
        })?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
