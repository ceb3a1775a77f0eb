use super::models::InspectArgs;
use super::render::parse_all;
use crate::aggregator::calculate_tree_stats;
use crate::graph::generate_text_outline;
use crate::output::write_summary;
use crate::parser::schema::{NameBinding, RunSummary, SegmentSummary};
use crate::parser::{load_segments, NodeNamer};
use crate::utils::config::SUMMARY_VERSION;
use anyhow::{Context, Result};
use chrono::Utc;

/// Inspect a log: one summary line per segment, optional JSON export
pub fn execute_inspect(args: &InspectArgs) -> Result<RunSummary> {
    let segments = load_segments(&args.log_path)
        .with_context(|| format!("Failed to split log {}", args.log_path.display()))?;

    let mut namer = NodeNamer::new();
    let trees = parse_all(&segments, &mut namer)?;

    println!("Log: {}", args.log_path.display());
    println!("Segments: {}", segments.len());

    let mut summaries = Vec::with_capacity(segments.len());
    for (index, (segment, tree)) in segments.into_iter().zip(trees).enumerate() {
        let stats = calculate_tree_stats(&tree);
        let kind = if segment.key.is_failure() { "FAIL" } else { "INSERT" };
        println!(
            "  [{:03}] {} {:<8} line {:<6} root {}: {}",
            index,
            kind,
            segment.key.to_string(),
            segment.start_line,
            tree.root.name,
            stats.summary()
        );

        if args.outline {
            for line in generate_text_outline(&tree).lines() {
                println!("        {}", line);
            }
        }

        summaries.push(SegmentSummary {
            index,
            key: segment.key,
            start_line: segment.start_line,
            stats,
            tree,
        });
    }

    let summary = RunSummary {
        version: SUMMARY_VERSION.to_string(),
        source: args.log_path.display().to_string(),
        generated_at: Utc::now().to_rfc3339(),
        segments: summaries,
        names: namer
            .entries()
            .map(|(pointer, name)| NameBinding { pointer, name })
            .collect(),
    };

    if let Some(path) = &args.json {
        write_summary(&summary, path).context("Failed to write JSON summary")?;
        println!("✓ Summary written to: {}", path.display());
    }

    Ok(summary)
}

/// Display version information
pub fn display_version() {
    println!("cbtree-viz v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SUMMARY_VERSION);
    println!();
    println!("Rebuilds concurrent B-tree dumps from debug logs as Graphviz graphs.");
}
