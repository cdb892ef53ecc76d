//! Core graph data structures.

use serde::Serialize;

use crate::Scalar;

/// A graph vertex: one turbine/process component.
///
/// The type code is the component kind as encoded by the source tool;
/// data values are auxiliary per-component readings in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub ty: i64,
    pub data: Vec<Scalar>,
}

/// One endpoint of an edge: a node identifier plus the port index where
/// the edge attaches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeEnd {
    pub node: String,
    pub port: i64,
}

/// A directed connection between two (node, port) endpoints.
///
/// The four physical attributes are always floats, even when integral;
/// they never go through scalar coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: EdgeEnd,
    pub to: EdgeEnd,
    pub pressure: f64,
    pub enthalpy: f64,
    pub flow: f64,
    pub temperature: f64,
}

/// A parsed document: nodes and edges in document order.
///
/// Nodes keep their identifiers here. The id-keyed mapping shape is a
/// projection applied at serialization time, where duplicate identifiers
/// collapse last-wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Longest data sequence across all nodes in this graph.
    pub fn max_data_len(&self) -> usize {
        self.nodes.iter().map(|n| n.data.len()).max().unwrap_or(0)
    }
}
