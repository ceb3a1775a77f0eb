//! JSON run summary writer.
//!
//! Writes RunSummary structs to JSON files with proper formatting.

use crate::parser::schema::RunSummary;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a run summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(summary: &RunSummary, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    if output_path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }
    if output_path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary).map_err(OutputError::SerializationFailed)?;

    info!("Summary written ({} segments)", summary.segments.len());

    Ok(())
}

/// Read a run summary from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<RunSummary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let summary: RunSummary =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Summary loaded: version {}, {} segments",
        summary.version,
        summary.segments.len()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::calculate_tree_stats;
    use crate::parser::schema::{NameBinding, SegmentKey, SegmentSummary};
    use crate::parser::{parse_tree_str, NodeNamer};
    use tempfile::NamedTempFile;

    fn create_test_summary() -> RunSummary {
        let mut namer = NodeNamer::new();
        let tree = parse_tree_str("internal 0x10:\n key 5\n leaf 0x20: [1=a]\n leaf 0x30: [6=c]", &mut namer)
            .unwrap();
        RunSummary {
            version: "1.0.0".to_string(),
            source: "test.log".to_string(),
            generated_at: "2024-01-01T00:00:00Z".to_string(),
            segments: vec![SegmentSummary {
                index: 0,
                key: SegmentKey::Failure("38".to_string()),
                start_line: 1,
                stats: calculate_tree_stats(&tree),
                tree,
            }],
            names: namer
                .entries()
                .map(|(pointer, name)| NameBinding { pointer, name })
                .collect(),
        }
    }

    #[test]
    fn test_write_and_read_summary() {
        let summary = create_test_summary();
        let temp_file = NamedTempFile::new().unwrap();

        write_summary(&summary, temp_file.path()).unwrap();
        let loaded = read_summary(temp_file.path()).unwrap();

        assert_eq!(loaded.segments.len(), 1);
        assert_eq!(loaded.segments[0].key, SegmentKey::Failure("38".to_string()));
        assert_eq!(loaded.segments[0].tree, summary.segments[0].tree);
        assert_eq!(loaded.names, summary.names);
    }

    #[test]
    fn test_write_summary_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(write_summary(&create_test_summary(), temp_dir.path()).is_err());
    }
}
