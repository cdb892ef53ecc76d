//! Graph assembly.
//!
//! Second pass: interpret the raw scan into a typed [`Graph`]. Sections
//! are checked first; after that every node and edge is interpreted in
//! document order and any single failure aborts the conversion with no
//! partial graph.

use tg_graph::{Edge, EdgeEnd, Graph, Node, coerce};

use crate::error::{XmlError, XmlResult};
use crate::scan::{RawDocument, RawEdge, RawNode};

pub(crate) fn build(doc: RawDocument) -> XmlResult<Graph> {
    if !doc.saw_nodes {
        return Err(XmlError::MissingSection { section: "nodes" });
    }
    if !doc.saw_edges {
        return Err(XmlError::MissingSection { section: "edges" });
    }

    let mut graph = Graph::default();
    for raw in doc.nodes {
        graph.nodes.push(build_node(raw)?);
    }
    for raw in doc.edges {
        graph.edges.push(build_edge(raw)?);
    }
    Ok(graph)
}

fn build_node(raw: RawNode) -> XmlResult<Node> {
    let id = raw.id.ok_or(XmlError::MissingAttribute {
        element: "node",
        attribute: "ID",
    })?;
    let ty_raw = raw.ty.ok_or(XmlError::MissingAttribute {
        element: "node",
        attribute: "type",
    })?;
    let ty = ty_raw.parse::<i64>().map_err(|_| XmlError::InvalidInt {
        what: "node type",
        value: ty_raw,
    })?;

    // <data> entries without a value attribute are skipped, not errors.
    let data = raw.data.into_iter().flatten().map(|v| coerce(&v)).collect();

    Ok(Node { id, ty, data })
}

fn build_edge(raw: RawEdge) -> XmlResult<Edge> {
    Ok(Edge {
        from: parse_endpoint(required(raw.start, "start")?)?,
        to: parse_endpoint(required(raw.end, "end")?)?,
        pressure: parse_float(required(raw.pressure, "pressure")?, "pressure")?,
        enthalpy: parse_float(required(raw.enthalpy, "enthalpy")?, "enthalpy")?,
        flow: parse_float(required(raw.flow, "flow")?, "flow")?,
        temperature: parse_float(required(raw.temperature, "temperature")?, "temperature")?,
    })
}

fn required(value: Option<String>, attribute: &'static str) -> XmlResult<String> {
    value.ok_or(XmlError::MissingAttribute {
        element: "edge",
        attribute,
    })
}

/// `"453,2"` becomes `{ node: "453", port: 2 }`. Split on the first comma
/// only; the node identifier is not checked against the node set.
fn parse_endpoint(raw: String) -> XmlResult<EdgeEnd> {
    let Some((node, port)) = raw.split_once(',') else {
        return Err(XmlError::MalformedEndpoint { value: raw });
    };
    let port = port.parse::<i64>().map_err(|_| XmlError::InvalidInt {
        what: "edge port",
        value: port.to_string(),
    })?;
    Ok(EdgeEnd {
        node: node.to_string(),
        port,
    })
}

// Edge physics parse strictly; there is no fallback to text here.
fn parse_float(raw: String, what: &'static str) -> XmlResult<f64> {
    raw.parse::<f64>()
        .map_err(|_| XmlError::InvalidFloat { what, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_splits_on_first_comma() {
        let end = parse_endpoint("453,2".to_string()).unwrap();
        assert_eq!(end.node, "453");
        assert_eq!(end.port, 2);
    }

    #[test]
    fn endpoint_with_comma_in_id_keeps_remainder_as_port() {
        // "a,b,2" splits once: node "a", port "b,2" which is not an integer
        let err = parse_endpoint("a,b,2".to_string()).unwrap_err();
        assert!(matches!(err, XmlError::InvalidInt { what: "edge port", .. }));
    }

    #[test]
    fn endpoint_without_comma_is_rejected() {
        let err = parse_endpoint("453".to_string()).unwrap_err();
        assert!(matches!(err, XmlError::MalformedEndpoint { .. }));
    }
}
