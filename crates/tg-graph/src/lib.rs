//! tg-graph: core graph model for turbograph.
//!
//! Provides:
//! - Scalar values with best-effort numeric coercion
//! - Node/Edge/Graph data structures shared by the XML builder and the sinks
//!
//! # Example
//!
//! ```
//! use tg_graph::{coerce, Scalar};
//!
//! assert_eq!(coerce("0.0"), Scalar::Int(0));
//! assert_eq!(coerce("11.21"), Scalar::Float(11.21));
//! assert_eq!(coerce("N/A"), Scalar::Text("N/A".into()));
//! ```

pub mod graph;
pub mod scalar;

// Re-exports for ergonomics
pub use graph::{Edge, EdgeEnd, Graph, Node};
pub use scalar::{Scalar, coerce};
