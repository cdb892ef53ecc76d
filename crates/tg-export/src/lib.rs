//! tg-export: sink adapters for turbograph graphs.
//!
//! Two sinks over the in-memory [`tg_graph::Graph`]:
//! - [`json`]: nested JSON document, one-to-one with the graph shape
//! - [`table`]: flat node/edge tables as CSV
//!
//! Both sinks serialize fully in memory and write the result in a single
//! filesystem call, so a failed conversion never leaves a partial file.

pub mod json;
pub mod table;

pub use json::{NodeShape, graph_to_value, write_json};
pub use table::write_tables;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
