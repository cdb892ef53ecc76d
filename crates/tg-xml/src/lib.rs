//! tg-xml: XML scanning and graph building for turbograph.
//!
//! Converts the turbine XML dialect (`<nodes>`/`<node>`/`<nodedata>`/`<data>`,
//! `<edges>`/`<edge>`) into a [`tg_graph::Graph`]. Two passes over the
//! document: a raw scan that records section presence and element attributes,
//! then typed assembly with per-field strictness (lenient coercion for node
//! data values, strict parses for type codes, ports, and edge physics).
//!
//! Any failure anywhere in the document aborts the whole conversion; there
//! is no skip-and-continue.

mod build;
pub mod error;
mod scan;

pub use error::{XmlError, XmlResult};

use std::path::Path;

use tg_graph::Graph;

/// Parse an XML document string into a graph.
pub fn graph_from_str(xml: &str) -> XmlResult<Graph> {
    let raw = scan::scan(xml)?;
    build::build(raw)
}

/// Read and parse an XML file into a graph.
pub fn graph_from_file(path: &Path) -> XmlResult<Graph> {
    let content = std::fs::read_to_string(path)?;
    let graph = graph_from_str(&content)?;
    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "parsed turbine document"
    );
    Ok(graph)
}
