//! Raw document scan.
//!
//! First of two passes: walk the XML event stream and collect the raw
//! attributes of every `<node>`, `<data>`, and `<edge>` element,
//! uninterpreted. Section presence is recorded here and checked before
//! interpretation starts, so a document missing `<nodes>` or `<edges>`
//! fails the same way whether or not its elements are well formed.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlResult;

/// Attributes of one `<node>` element, plus the `value` attribute of each
/// `<data>` entry under its `<nodedata>` container (`None` when absent).
#[derive(Debug, Default)]
pub(crate) struct RawNode {
    pub id: Option<String>,
    pub ty: Option<String>,
    pub data: Vec<Option<String>>,
}

/// Attributes of one `<edge>` element.
#[derive(Debug, Default)]
pub(crate) struct RawEdge {
    pub start: Option<String>,
    pub end: Option<String>,
    pub pressure: Option<String>,
    pub enthalpy: Option<String>,
    pub flow: Option<String>,
    pub temperature: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct RawDocument {
    pub saw_nodes: bool,
    pub saw_edges: bool,
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Nodes,
    Edges,
}

/// Scan the document, collecting raw node/edge elements in document order.
///
/// Only `<nodes>`/`<edges>` that are direct children of the root count as
/// sections; `<node>`/`<edge>` elements are only picked up inside their
/// section, `<data>` entries only inside a `<nodedata>` container.
pub(crate) fn scan(xml: &str) -> XmlResult<RawDocument> {
    let mut reader = Reader::from_str(xml);

    let mut doc = RawDocument::default();
    let mut depth = 0usize;
    let mut section = Section::None;
    let mut node: Option<RawNode> = None;
    let mut in_nodedata = false;

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let name = e.local_name();
                match (depth, section, name.as_ref()) {
                    (1, _, b"nodes") => {
                        doc.saw_nodes = true;
                        if !is_empty {
                            section = Section::Nodes;
                        }
                    }
                    (1, _, b"edges") => {
                        doc.saw_edges = true;
                        if !is_empty {
                            section = Section::Edges;
                        }
                    }
                    (2, Section::Nodes, b"node") => {
                        let raw = RawNode {
                            id: attribute_value(e, "ID")?,
                            ty: attribute_value(e, "type")?,
                            data: Vec::new(),
                        };
                        if is_empty {
                            doc.nodes.push(raw);
                        } else {
                            node = Some(raw);
                        }
                    }
                    (2, Section::Edges, b"edge") => {
                        doc.edges.push(RawEdge {
                            start: attribute_value(e, "start")?,
                            end: attribute_value(e, "end")?,
                            pressure: attribute_value(e, "pressure")?,
                            enthalpy: attribute_value(e, "enthalpy")?,
                            flow: attribute_value(e, "flow")?,
                            temperature: attribute_value(e, "temperature")?,
                        });
                    }
                    (3, Section::Nodes, b"nodedata") => {
                        if !is_empty {
                            in_nodedata = true;
                        }
                    }
                    (4, Section::Nodes, b"data") if in_nodedata => {
                        if let Some(n) = node.as_mut() {
                            n.data.push(attribute_value(e, "value")?);
                        }
                    }
                    _ => {}
                }
                if !is_empty {
                    depth += 1;
                }
            }
            Event::End(ref e) => {
                depth = depth.saturating_sub(1);
                let name = e.local_name();
                match name.as_ref() {
                    b"nodedata" => in_nodedata = false,
                    b"node" => {
                        if let Some(n) = node.take() {
                            doc.nodes.push(n);
                        }
                    }
                    b"nodes" | b"edges" if depth == 1 => section = Section::None,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(doc)
}

fn attribute_value(event: &BytesStart, key: &str) -> XmlResult<Option<String>> {
    for attr in event.attributes().with_checks(false) {
        let attr = attr?;
        if attr.key.local_name().as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sections_are_still_sections() {
        let doc = scan("<turbine><nodes/><edges/></turbine>").unwrap();
        assert!(doc.saw_nodes);
        assert!(doc.saw_edges);
        assert!(doc.nodes.is_empty());
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn nested_nodes_element_is_not_a_section() {
        let doc = scan("<turbine><wrapper><nodes/></wrapper><edges/></turbine>").unwrap();
        assert!(!doc.saw_nodes);
        assert!(doc.saw_edges);
    }

    #[test]
    fn node_outside_its_section_is_ignored() {
        let doc = scan(r#"<turbine><nodes/><edges><node ID="1" type="2"/></edges></turbine>"#)
            .unwrap();
        assert!(doc.nodes.is_empty());
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn data_value_attributes_are_collected_in_order() {
        let doc = scan(concat!(
            r#"<turbine><nodes><node ID="51" type="101"><nodedata>"#,
            r#"<data value="0.0"/><data/><data value="x"/>"#,
            r#"</nodedata></node></nodes><edges/></turbine>"#,
        ))
        .unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(
            doc.nodes[0].data,
            vec![Some("0.0".to_string()), None, Some("x".to_string())]
        );
    }

    #[test]
    fn escaped_attribute_values_are_unescaped() {
        let doc = scan(concat!(
            r#"<turbine><nodes><node ID="a&amp;b" type="1"/></nodes>"#,
            r#"<edges/></turbine>"#,
        ))
        .unwrap();
        assert_eq!(doc.nodes[0].id.as_deref(), Some("a&b"));
    }
}
