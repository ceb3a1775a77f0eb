//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Line numbers are 1-based and relative to the segment being parsed.

use thiserror::Error;

/// Errors that can occur while rebuilding a tree from dump lines
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: invalid node type: {payload}")]
    InvalidNodeType { line: usize, payload: String },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid pointer '{token}'")]
    InvalidPointer { line: usize, token: String },

    #[error("line {line}: unexpected fields after internal node header: {rest}")]
    UnexpectedHeaderFields { line: usize, rest: String },

    #[error("line {line}: malformed leaf entry: {field}")]
    MalformedLeafEntry { line: usize, field: String },

    #[error("unexpected end of input after line {line}")]
    UnexpectedEnd { line: usize },

    #[error("line {line}: input continues after the root node: {payload}")]
    TrailingInput { line: usize, payload: String },
}

/// Errors that can occur while splitting a log file into segments
#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("line {line}: invalid line: {content}")]
    InvalidLine { line: usize, content: String },

    #[error("line {line}: INSERT without an integer key: {content}")]
    InvalidInsertKey { line: usize, content: String },

    #[error("failed to read log: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while invoking the external renderer
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to launch '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}
