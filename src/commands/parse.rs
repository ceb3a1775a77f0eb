//! Parse command: a single tree dump to a graph document.

use super::models::ParseArgs;
use crate::graph::{generate_dot, generate_text_outline};
use crate::output::write_dot;
use crate::parser::{parse_tree_str, NodeNamer, Tree};
use anyhow::{Context, Result};
use log::info;

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
///
/// Returns the parsed tree; the document (or outline) goes to
/// `args.output` or stdout.
pub fn execute_parse(args: &ParseArgs) -> Result<Tree> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let tree = parse_tree_str(&text, &mut NodeNamer::new())
        .with_context(|| format!("Failed to parse tree dump {}", args.input.display()))?;

    let rendered = if args.outline {
        generate_text_outline(&tree)
    } else {
        generate_dot(&tree, Some(&args.graph_config))
    };

    match &args.output {
        Some(path) => {
            write_dot(&rendered, path).context("Failed to write graph document")?;
            info!("✓ Graph written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(tree)
}
