//! include-graph — C/C++ include dependency graphs
//!
//! Scan a source tree for `#include` directives and render the dependency
//! graph with Graphviz.
//!
//! # Features
//! - Work-queue directory traversal with symlink-cycle guarding
//! - Extension filtering and regex path exclusion
//! - Byte-level directive matching (binary-safe, no decoding failures)
//! - Optional suppression of C standard library headers
//! - DOT and SVG output
//!
//! # Quickstart (Library)
//! ```no_run
//! use include_graph::graph::DependencyGraph;
//! use include_graph::scanner::{ScanOptions, Scanner};
//!
//! let root = std::path::Path::new(".");
//! let map = Scanner::new(ScanOptions::default()).walk(root).expect("scan");
//! let graph = DependencyGraph::from_include_map(&map);
//! println!("files: {} includes: {}", graph.nodes.len(), graph.edges.len());
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! include-graph --root src --extension h c cpp --exclude 'test/' --nosysinc
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod scanner;
pub mod utils;
pub mod visualization;
