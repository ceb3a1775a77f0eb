//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod parse;
pub mod render;
pub mod utils;

// Re-export main command functions
pub use models::{InspectArgs, ParseArgs, RenderArgs, RenderedSegment};
pub use parse::execute_parse;
pub use render::{execute_render, parse_all, segment_file_stem, validate_render_args};
pub use utils::{display_version, execute_inspect};
