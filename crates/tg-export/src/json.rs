//! JSON document sink.

use std::path::Path;

use serde_json::{Map, Value};
use tg_graph::Graph;

use crate::ExportResult;

/// External shape of the node collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeShape {
    /// Mapping keyed by node id. The id is dropped from each value and
    /// duplicate ids collapse last-wins, staying at the position of the
    /// first occurrence.
    #[default]
    Map,
    /// Ordered list in document order; each record keeps its id.
    List,
}

/// Project a graph into its JSON value, `{"nodes": ..., "edges": [...]}`.
pub fn graph_to_value(graph: &Graph, shape: NodeShape) -> ExportResult<Value> {
    let nodes = match shape {
        NodeShape::Map => {
            let mut map = Map::new();
            for node in &graph.nodes {
                let mut entry = Map::new();
                entry.insert("type".to_string(), Value::from(node.ty));
                entry.insert("data".to_string(), serde_json::to_value(&node.data)?);
                map.insert(node.id.clone(), Value::Object(entry));
            }
            Value::Object(map)
        }
        NodeShape::List => serde_json::to_value(&graph.nodes)?,
    };

    let mut root = Map::new();
    root.insert("nodes".to_string(), nodes);
    root.insert("edges".to_string(), serde_json::to_value(&graph.edges)?);
    Ok(Value::Object(root))
}

/// Render a graph as an indented JSON document.
pub fn graph_to_string(graph: &Graph, shape: NodeShape) -> ExportResult<String> {
    let value = graph_to_value(graph, shape)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Serialize the graph and write it as an indented JSON document.
pub fn write_json(path: &Path, graph: &Graph, shape: NodeShape) -> ExportResult<()> {
    let content = graph_to_string(graph, shape)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), ?shape, "wrote JSON graph");
    Ok(())
}
