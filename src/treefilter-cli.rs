//! Command-line companion of the tree filter viewer.
//!
//! - `generate` writes a deterministic demo dataset (`.br` for Brotli)
//! - `filter` loads a dataset, applies a name filter and prints the
//!   renumbered nodes as JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rtreefilter::{
    init_tracing, DatasetCache, DatasetWriter, JsonDatasetReader, NamePredicate, ViewerConfig,
    VirtualDatasetReader,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "treefilter", about = "Filter hierarchical node datasets by name")]
struct Cli {
    /// Emit logs as JSON lines (overrides TREEFILTER_LOG_JSON)
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a generated demo dataset
    Generate {
        /// Output file (`.br` suffix enables Brotli compression)
        #[arg(long, short, default_value = "data.json")]
        out: PathBuf,
        /// Random seed (defaults to TREEFILTER_DEMO_SEED or 42)
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum tree depth
        #[arg(long, default_value_t = 4)]
        max_depth: usize,
        /// Maximum children per node
        #[arg(long, default_value_t = 5)]
        max_children: usize,
    },
    /// Filter a dataset and print the renumbered nodes
    Filter {
        /// Dataset file (defaults to TREEFILTER_DATA)
        file: Option<PathBuf>,
        /// Case-insensitive substring of node names; empty keeps everything
        #[arg(long, short, default_value = "")]
        predicate: String,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ViewerConfig::from_env();
    init_tracing(cli.log_json || config.log_json);

    match cli.command {
        Command::Generate {
            out,
            seed,
            max_depth,
            max_children,
        } => generate(&out, seed.unwrap_or(config.demo_seed), max_depth, max_children),
        Command::Filter {
            file,
            predicate,
            compact,
        } => {
            let path = file
                .or(config.data_path)
                .context("No dataset given: pass a file or set TREEFILTER_DATA")?;
            filter(&path, &predicate, compact)
        }
    }
}

fn generate(out: &Path, seed: u64, max_depth: usize, max_children: usize) -> Result<()> {
    let dataset = VirtualDatasetReader::with_config(max_depth, max_children, seed).generate();
    let out_str = path_str(out)?;

    let mut writer = DatasetWriter::new(out_str)?;
    writer.write_dataset(&dataset)?;

    info!(path = out_str, nodes = dataset.len(), seed, "dataset written");
    println!("Dataset with {} nodes written to: {}", dataset.len(), out_str);
    Ok(())
}

fn filter(path: &Path, predicate: &str, compact: bool) -> Result<()> {
    let cache = DatasetCache::new(JsonDatasetReader::new(), path_str(path)?);
    let context = cache.get_or_load()?;

    let nodes = rtreefilter::refresh(context.dataset().nodes(), &NamePredicate::new(predicate))?;
    info!(predicate, visible = nodes.len(), total = context.dataset().len(), "filtered");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if compact {
        serde_json::to_writer(&mut out, &nodes)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &nodes)?;
    }
    writeln!(out)?;
    Ok(())
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))
}
