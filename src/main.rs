//! cbtree-viz CLI
//!
//! Turns concurrent B-tree dumps found in debug logs into Graphviz graphs.

use anyhow::Result;
use cbtree_viz::commands::{
    display_version, execute_inspect, execute_parse, execute_render, validate_render_args,
    InspectArgs, ParseArgs, RenderArgs,
};
use cbtree_viz::graph::GraphConfig;
use cbtree_viz::output::GraphvizRenderer;
use cbtree_viz::utils::config::{
    DEFAULT_DOT_PROGRAM, DEFAULT_GRAPH_NAME, DEFAULT_IMAGE_FORMAT, DEFAULT_KEY_PREFIX,
};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// cbtree-viz - visualise concurrent B-tree dumps
#[derive(Parser, Debug)]
#[command(name = "cbtree-viz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Graph document options shared by commands that emit graphs
#[derive(Args, Debug)]
struct GraphOpts {
    /// Name of the emitted digraph
    #[arg(long, default_value = DEFAULT_GRAPH_NAME)]
    graph_name: String,

    /// Prefix for leaf entry nodes
    #[arg(long, default_value = DEFAULT_KEY_PREFIX)]
    key_prefix: String,
}

impl GraphOpts {
    fn into_config(self) -> GraphConfig {
        GraphConfig::new()
            .with_graph_name(self.graph_name)
            .with_key_prefix(self.key_prefix)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a log into tree dumps and render each one
    Render {
        /// Log file to process
        #[arg(short, long)]
        log: PathBuf,

        /// Output directory for .gv documents and images
        #[arg(short, long, env = "CBTREE_VIZ_OUT_DIR", default_value = "graphs")]
        out_dir: PathBuf,

        /// Only emit this segment (0-based)
        #[arg(short, long)]
        segment: Option<usize>,

        /// Image format passed to the renderer (-T<format>)
        #[arg(short, long, default_value = DEFAULT_IMAGE_FORMAT)]
        format: String,

        /// Graphviz program to run
        #[arg(long, env = "CBTREE_VIZ_DOT", default_value = DEFAULT_DOT_PROGRAM)]
        dot: String,

        /// Write .gv documents only
        #[arg(long)]
        no_render: bool,

        #[command(flatten)]
        graph: GraphOpts,
    },

    /// Parse a file holding a single tree dump
    Parse {
        /// Dump file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print an indented text outline instead of a graph
        #[arg(long)]
        outline: bool,

        #[command(flatten)]
        graph: GraphOpts,
    },

    /// Summarise every tree dump in a log
    Inspect {
        /// Log file to process
        #[arg(short, long)]
        log: PathBuf,

        /// Write a JSON summary to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Print each tree's outline
        #[arg(long)]
        outline: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Render {
            log,
            out_dir,
            segment,
            format,
            dot,
            no_render,
            graph,
        } => {
            let renderer = GraphvizRenderer::new(dot, format.clone());
            let args = RenderArgs {
                log_path: log,
                output_dir: out_dir,
                segment,
                graph_config: graph.into_config(),
                render: !no_render,
                format,
            };

            validate_render_args(&args)?;
            execute_render(&args, &renderer)?;
        }

        Commands::Parse {
            input,
            output,
            outline,
            graph,
        } => {
            let args = ParseArgs {
                input,
                output,
                graph_config: graph.into_config(),
                outline,
            };
            execute_parse(&args)?;
        }

        Commands::Inspect { log, json, outline } => {
            execute_inspect(&InspectArgs {
                log_path: log,
                json,
                outline,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
