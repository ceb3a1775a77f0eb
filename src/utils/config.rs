//! Configuration and constants for the CLI.

/// Startup noise emitted by glog before logging is initialised
pub const IGNORED_WARNING: &str =
    "WARNING: Logging before InitGoogleLogging() is written to STDERR";

/// Marker starting a new insertion event: `INSERT <key> ...`
pub const INSERT_MARKER: &str = "INSERT";

/// Marker recording the key a consistency check failed on
pub const FAILED_KEY_MARKER: &str = "Failed on key:";

/// Substring identifying tree-dump lines
pub const DUMP_SOURCE_TAG: &str = "concurrent_btree";

/// Structured glog prefix written by the tree dump code
pub const LOG_PREFIX_PATTERN: &str =
    r"^[IWEF]\d{8} \d{2}:\d{2}:\d{2}\.\d+ \d+ concurrent_btree\.h:\d+\] ";

/// A single `[key=value]` leaf entry
pub const LEAF_ENTRY_PATTERN: &str = r"\[([^=\[\]]+)=([^=\[\]]+)\]";

/// A leaf field made only of adjacent entries
pub const LEAF_FIELD_PATTERN: &str = r"^(?:\[[^=\[\]]+=[^=\[\]]+\])+$";

// Node header keywords (matched case-insensitively)
pub const INTERNAL_KEYWORD: &str = "internal";
pub const LEAF_KEYWORD: &str = "leaf";
pub const SEPARATOR_KEYWORD: &str = "key";

/// Name of the emitted digraph
pub const DEFAULT_GRAPH_NAME: &str = "G";

/// Prefix of synthetic leaf-entry targets in the graph
pub const DEFAULT_KEY_PREFIX: &str = "K";

/// Prefix of display names minted by the namer
pub const NODE_NAME_PREFIX: &str = "N";

/// Graphviz program used for rendering
pub const DEFAULT_DOT_PROGRAM: &str = "dot";

/// Image format passed to the renderer as `-T<format>`
pub const DEFAULT_IMAGE_FORMAT: &str = "pdf";

/// Extension of written graph documents
pub const GRAPH_DOC_EXTENSION: &str = "gv";

/// Current JSON summary schema version
pub const SUMMARY_VERSION: &str = "1.0.0";
