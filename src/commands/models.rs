use crate::graph::GraphConfig;
use crate::parser::schema::SegmentKey;
use crate::utils::config::DEFAULT_IMAGE_FORMAT;
use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Log file to split into tree dumps
    pub log_path: PathBuf,

    /// Directory receiving `.gv` documents and images
    pub output_dir: PathBuf,

    /// Only emit this segment (0-based); all segments are still parsed
    pub segment: Option<usize>,

    /// Graph document configuration
    pub graph_config: GraphConfig,

    /// Invoke the renderer after writing each document
    pub render: bool,

    /// Image format, also used as the image file extension
    pub format: String,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            log_path: PathBuf::new(),
            output_dir: PathBuf::from("graphs"),
            segment: None,
            graph_config: GraphConfig::default(),
            render: true,
            format: DEFAULT_IMAGE_FORMAT.to_string(),
        }
    }
}

/// Arguments for the parse command
#[derive(Debug, Clone, Default)]
pub struct ParseArgs {
    /// File holding a single tree dump
    pub input: PathBuf,

    /// Where to write the graph document; stdout when absent
    pub output: Option<PathBuf>,

    pub graph_config: GraphConfig,

    /// Print a text outline instead of the graph document
    pub outline: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Default)]
pub struct InspectArgs {
    pub log_path: PathBuf,

    /// Optional JSON summary output
    pub json: Option<PathBuf>,

    /// Print each tree's outline after its summary line
    pub outline: bool,
}

/// Files produced for one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSegment {
    pub index: usize,
    pub key: SegmentKey,
    pub doc_path: PathBuf,
    pub image_path: Option<PathBuf>,
}
