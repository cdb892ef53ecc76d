use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tg_export::NodeShape;

#[derive(Parser)]
#[command(name = "tg-cli")]
#[command(about = "Turbograph CLI - turbine XML to graph conversion tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a turbine XML file to a JSON graph document
    Json {
        /// Path to the XML file
        input_xml: PathBuf,
        /// Path to write JSON output
        output_json: PathBuf,
        /// Emit nodes as an ordered list instead of an id-keyed mapping
        #[arg(long)]
        list: bool,
    },
    /// Export turbine XML nodes and edges to CSV tables
    Table {
        /// Path to the XML file
        input_xml: PathBuf,
        /// Base path for the CSV tables to create
        output_csv: PathBuf,
    },
}

/// Unified error surface for the CLI, wrapping the backend crates.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Conversion error: {0}")]
    Xml(#[from] tg_xml::XmlError),

    #[error("Export error: {0}")]
    Export(#[from] tg_export::ExportError),
}

type AppResult<T> = Result<T, AppError>;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Json {
            input_xml,
            output_json,
            list,
        } => {
            let shape = if list { NodeShape::List } else { NodeShape::Map };
            cmd_json(&input_xml, &output_json, shape)
        }
        Commands::Table {
            input_xml,
            output_csv,
        } => cmd_table(&input_xml, &output_csv),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_json(input: &Path, output: &Path, shape: NodeShape) -> AppResult<()> {
    let graph = tg_xml::graph_from_file(input)?;
    tg_export::write_json(output, &graph, shape)?;
    println!(
        "✓ Wrote {} ({} nodes, {} edges)",
        output.display(),
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(())
}

fn cmd_table(input: &Path, output: &Path) -> AppResult<()> {
    let graph = tg_xml::graph_from_file(input)?;
    let (nodes_path, edges_path) = tg_export::write_tables(output, &graph)?;
    println!(
        "✓ Wrote {} and {} ({} nodes, {} edges)",
        nodes_path.display(),
        edges_path.display(),
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(())
}
