//! Render command implementation.
//!
//! The render command:
//! 1. Splits the log into segments
//! 2. Parses every segment with one shared namer
//! 3. Generates a graph document per selected segment
//! 4. Writes documents and invokes the renderer

use super::models::{RenderArgs, RenderedSegment};
use crate::graph::generate_dot;
use crate::output::{write_dot, Renderer};
use crate::parser::schema::{SegmentKey, Tree};
use crate::parser::{load_segments, parse_segment, LogSegment, NodeNamer};
use crate::utils::config::GRAPH_DOC_EXTENSION;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Render command arguments
/// * `renderer` - Image renderer, only used when `args.render` is set
///
/// # Errors
/// * Unreadable or malformed log
/// * Any segment failing to parse (processing stops at the first one)
/// * File write or renderer failures
///
/// # Example
/// ```ignore
/// let args = RenderArgs {
///     log_path: PathBuf::from("logs/wrong_tree_key_38"),
///     ..Default::default()
/// };
/// execute_render(&args, &GraphvizRenderer::default())?;
/// ```
pub fn execute_render(args: &RenderArgs, renderer: &dyn Renderer) -> Result<Vec<RenderedSegment>> {
    let start_time = Instant::now();

    info!("Step 1/3: Splitting log {}...", args.log_path.display());
    let segments = load_segments(&args.log_path)
        .with_context(|| format!("Failed to split log {}", args.log_path.display()))?;

    if let Some(idx) = args.segment {
        if idx >= segments.len() {
            anyhow::bail!(
                "Segment {} requested but the log only has {} segment(s)",
                idx,
                segments.len()
            );
        }
    }

    info!("Step 2/3: Parsing {} segment(s)...", segments.len());
    let mut namer = NodeNamer::new();
    let trees = parse_all(&segments, &mut namer)?;
    debug!("Named {} distinct node(s)", namer.len());

    info!("Step 3/3: Writing graphs to {}...", args.output_dir.display());
    let mut rendered = Vec::new();

    for (index, (segment, tree)) in segments.iter().zip(&trees).enumerate() {
        if args.segment.is_some_and(|wanted| wanted != index) {
            continue;
        }

        let stem = segment_file_stem(index, &segment.key);
        let doc_path = args
            .output_dir
            .join(format!("{}.{}", stem, GRAPH_DOC_EXTENSION));

        let dot = generate_dot(tree, Some(&args.graph_config));
        write_dot(&dot, &doc_path)
            .with_context(|| format!("Failed to write graph for segment {}", index))?;

        let image_path = if args.render {
            let image_path = args.output_dir.join(format!("{}.{}", stem, args.format));
            renderer
                .render(&doc_path, &image_path)
                .with_context(|| format!("Failed to render segment {}", index))?;
            Some(image_path)
        } else {
            None
        };

        rendered.push(RenderedSegment {
            index,
            key: segment.key.clone(),
            doc_path,
            image_path,
        });
    }

    info!(
        "Render completed: {} graph(s) in {:.2}s",
        rendered.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(rendered)
}

/// Parse every segment in order with a shared namer
///
/// **Public** - also used by the inspect command
///
/// Stops at the first segment that fails to parse.
pub fn parse_all(segments: &[LogSegment], namer: &mut NodeNamer) -> Result<Vec<Tree>> {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            debug!("Parsing segment {} (key {})", index, segment.key);
            parse_segment(segment, namer).with_context(|| {
                format!(
                    "Failed to parse segment {} (key {}, log line {})",
                    index, segment.key, segment.start_line
                )
            })
        })
        .collect()
}

/// File name stem for a segment's outputs
///
/// `007_ins_key42` for insertions, `000_fail_38` for failures.
pub fn segment_file_stem(index: usize, key: &SegmentKey) -> String {
    match key {
        SegmentKey::Insert(k) => format!("{:03}_ins_key{}", index, k),
        SegmentKey::Failure(k) => format!("{:03}_fail_{}", index, sanitize_file_part(k)),
    }
}

fn sanitize_file_part(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_render_args(args: &RenderArgs) -> Result<()> {
    if args.log_path.as_os_str().is_empty() {
        anyhow::bail!("Log path cannot be empty");
    }

    if !args.log_path.is_file() {
        anyhow::bail!("Log file not found: {}", args.log_path.display());
    }

    if args.output_dir.is_file() {
        anyhow::bail!("Output directory is a file: {}", args.output_dir.display());
    }

    if args.format.is_empty() || !args.format.chars().all(|c| c.is_ascii_alphanumeric()) {
        anyhow::bail!("Invalid image format: '{}'", args.format);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_segment_file_stem() {
        assert_eq!(segment_file_stem(7, &SegmentKey::Insert(42)), "007_ins_key42");
        assert_eq!(segment_file_stem(0, &SegmentKey::Insert(-1)), "000_ins_key-1");
        assert_eq!(
            segment_file_stem(12, &SegmentKey::Failure("38".to_string())),
            "012_fail_38"
        );
        assert_eq!(
            segment_file_stem(1, &SegmentKey::Failure("a/b c".to_string())),
            "001_fail_a_b_c"
        );
        assert_eq!(
            segment_file_stem(1, &SegmentKey::Failure(String::new())),
            "001_fail_unknown"
        );
    }

    #[test]
    fn test_validate_args_missing_log() {
        let args = RenderArgs {
            log_path: PathBuf::from("/definitely/not/here.log"),
            ..Default::default()
        };
        assert!(validate_render_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_log() {
        assert!(validate_render_args(&RenderArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_bad_format() {
        let log = tempfile::NamedTempFile::new().unwrap();
        let args = RenderArgs {
            log_path: log.path().to_path_buf(),
            format: "pdf;rm".to_string(),
            ..Default::default()
        };
        assert!(validate_render_args(&args).is_err());

        let args = RenderArgs {
            log_path: log.path().to_path_buf(),
            ..Default::default()
        };
        assert!(validate_render_args(&args).is_ok());
    }
}
