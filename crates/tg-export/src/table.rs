//! Tabular sink: flat node and edge tables as CSV.

use std::path::{Path, PathBuf};

use tg_graph::Graph;

use crate::ExportResult;

/// Write the node and edge tables next to `path`.
///
/// `path` supplies the stem: `plant.csv` becomes `plant_nodes.csv` and
/// `plant_edges.csv` in the same directory. Returns the two paths written.
///
/// Consumes the list-shaped graph directly; every node record carries its
/// own identifier.
pub fn write_tables(path: &Path, graph: &Graph) -> ExportResult<(PathBuf, PathBuf)> {
    let nodes_path = sibling(path, "nodes");
    let edges_path = sibling(path, "edges");

    let nodes = nodes_table(graph)?;
    let edges = edges_table(graph)?;
    std::fs::write(&nodes_path, nodes)?;
    std::fs::write(&edges_path, edges)?;

    tracing::debug!(
        nodes = %nodes_path.display(),
        edges = %edges_path.display(),
        "wrote CSV tables"
    );
    Ok((nodes_path, edges_path))
}

fn sibling(path: &Path, table: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph");
    path.with_file_name(format!("{stem}_{table}.csv"))
}

/// Columns: `id`, `type`, then `data_1..data_N` where N is the longest
/// data sequence in the whole graph. Shorter nodes get empty trailing
/// cells; the width is graph-global, not per-row.
fn nodes_table(graph: &Graph) -> ExportResult<Vec<u8>> {
    let width = graph.max_data_len();
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);

        let mut header = vec!["id".to_string(), "type".to_string()];
        header.extend((1..=width).map(|i| format!("data_{i}")));
        writer.write_record(&header)?;

        for node in &graph.nodes {
            let mut record = vec![node.id.clone(), node.ty.to_string()];
            for slot in 0..width {
                record.push(match node.data.get(slot) {
                    Some(value) => value.to_string(),
                    None => String::new(),
                });
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

fn edges_table(graph: &Graph) -> ExportResult<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);

        writer.write_record([
            "from_node",
            "from_port",
            "to_node",
            "to_port",
            "pressure",
            "enthalpy",
            "flow",
            "temperature",
        ])?;

        for edge in &graph.edges {
            writer.write_record(&[
                edge.from.node.clone(),
                edge.from.port.to_string(),
                edge.to.node.clone(),
                edge.to.port.to_string(),
                edge.pressure.to_string(),
                edge.enthalpy.to_string(),
                edge.flow.to_string(),
                edge.temperature.to_string(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tg_graph::{Edge, EdgeEnd, Node, coerce};

    fn node(id: &str, ty: i64, data: &[&str]) -> Node {
        Node {
            id: id.to_string(),
            ty,
            data: data.iter().map(|v| coerce(v)).collect(),
        }
    }

    #[test]
    fn node_table_width_is_graph_global() {
        let graph = Graph {
            nodes: vec![
                node("51", 101, &["0.0"]),
                node("171", 116, &["11.21", "87.84", "N/A"]),
            ],
            edges: vec![],
        };
        let text = String::from_utf8(nodes_table(&graph).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,type,data_1,data_2,data_3");
        assert_eq!(lines[1], "51,101,0,,");
        assert_eq!(lines[2], "171,116,11.21,87.84,N/A");
    }

    #[test]
    fn node_table_without_data_has_two_columns() {
        let graph = Graph {
            nodes: vec![node("1", 5, &[])],
            edges: vec![],
        };
        let text = String::from_utf8(nodes_table(&graph).unwrap()).unwrap();
        assert_eq!(text, "id,type\n1,5\n");
    }

    #[test]
    fn edge_table_rows_follow_edge_order() {
        let edge = |p: f64| Edge {
            from: EdgeEnd {
                node: "453".to_string(),
                port: 2,
            },
            to: EdgeEnd {
                node: "634".to_string(),
                port: 1,
            },
            pressure: p,
            enthalpy: 2.0,
            flow: 3.0,
            temperature: 4.5,
        };
        let graph = Graph {
            nodes: vec![],
            edges: vec![edge(1.0), edge(10.5)],
        };
        let text = String::from_utf8(edges_table(&graph).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "from_node,from_port,to_node,to_port,pressure,enthalpy,flow,temperature"
        );
        assert_eq!(lines[1], "453,2,634,1,1,2,3,4.5");
        assert_eq!(lines[2], "453,2,634,1,10.5,2,3,4.5");
    }

    #[test]
    fn sibling_paths_share_the_stem() {
        let (a, b) = (
            sibling(Path::new("/tmp/plant.csv"), "nodes"),
            sibling(Path::new("/tmp/plant.csv"), "edges"),
        );
        assert_eq!(a, Path::new("/tmp/plant_nodes.csv"));
        assert_eq!(b, Path::new("/tmp/plant_edges.csv"));
    }
}
