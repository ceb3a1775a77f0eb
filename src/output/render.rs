//! External rendering of graph documents into images.
//!
//! Rendering is behind the `Renderer` trait so commands can be driven
//! without Graphviz installed; `GraphvizRenderer` is the real one.

use crate::utils::config::{DEFAULT_DOT_PROGRAM, DEFAULT_IMAGE_FORMAT};
use crate::utils::error::RenderError;
use log::{debug, info};
use std::path::Path;
use std::process::Command;

/// Turns a graph document on disk into an image on disk
pub trait Renderer {
    fn render(&self, doc_path: &Path, image_path: &Path) -> Result<(), RenderError>;
}

/// Runs `<program> -T<format> <doc> -o <image>`
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    pub program: String,
    pub format: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self {
            program: DEFAULT_DOT_PROGRAM.to_string(),
            format: DEFAULT_IMAGE_FORMAT.to_string(),
        }
    }
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    fn command(&self, doc_path: &Path, image_path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(format!("-T{}", self.format))
            .arg(doc_path)
            .arg("-o")
            .arg(image_path);
        cmd
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, doc_path: &Path, image_path: &Path) -> Result<(), RenderError> {
        debug!(
            "Running {} -T{} {} -o {}",
            self.program,
            self.format,
            doc_path.display(),
            image_path.display()
        );

        let output = self
            .command(doc_path, image_path)
            .output()
            .map_err(|source| RenderError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!("✓ Rendered {}", image_path.display());
        Ok(())
    }
}
