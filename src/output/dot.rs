//! Graph document output writer.
//!
//! Writes generated `digraph` text to `.gv` files.

use crate::utils::config::GRAPH_DOC_EXTENSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a graph document to a file
///
/// **Public** - main entry point for graph document output
///
/// # Arguments
/// * `dot_content` - Document text from the graph generator
/// * `output_path` - Path to output `.gv` file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
///
/// # Example
/// ```ignore
/// let dot = generate_dot(&tree, None);
/// write_dot(&dot, "000_ins_key5.gv")?;
/// ```
pub fn write_dot(dot_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing graph to: {}", output_path.display());

    validate_dot_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(dot_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!("Graph written ({} bytes)", dot_content.len());

    Ok(())
}

/// Validate output path for a graph document
///
/// **Private** - internal validation
fn validate_dot_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if path.extension().is_some_and(|ext| ext != GRAPH_DOC_EXTENSION && ext != "dot") {
        debug!("Graph file does not have a .gv/.dot extension: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const DOC: &str = "digraph G {\nN0 -> K1;\n}\n";

    #[test]
    fn test_write_dot() {
        let temp_file = NamedTempFile::new().unwrap();
        write_dot(DOC, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, DOC);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/tree.gv");

        write_dot(DOC, &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_validate_dot_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_dot_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_validate_dot_path_empty() {
        assert!(validate_dot_path(Path::new("")).is_err());
    }
}
