//! Split a debug log into per-event tree dumps.
//!
//! Recognised line shapes:
//! - the glog startup warning, ignored
//! - `INSERT <key> ...`, which closes the open segment and starts a new one
//! - `Failed on key:<text>`, which rekeys the open segment
//! - lines containing `concurrent_btree`, appended to the open segment
//!
//! Blank lines are skipped. Anything else is an error.
//!
//! At end of input the open segment is flushed only if a key was recorded;
//! dump lines seen before any key are dropped with a warning.

use super::schema::{LogSegment, SegmentKey};
use crate::utils::config::{DUMP_SOURCE_TAG, FAILED_KEY_MARKER, IGNORED_WARNING, INSERT_MARKER};
use crate::utils::error::SegmentError;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Incremental segment builder
///
/// **Public** - feed lines with `push_line`, then call `finish`
#[derive(Debug, Default)]
pub struct LogSegmenter {
    segments: Vec<LogSegment>,
    key: Option<SegmentKey>,
    buffer: Vec<String>,
    start_line: usize,
    line_no: usize,
}

impl LogSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next raw log line
    pub fn push_line(&mut self, line: &str) -> Result<(), SegmentError> {
        self.line_no += 1;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.starts_with(IGNORED_WARNING) {
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix(INSERT_MARKER) {
            let key = parse_insert_key(rest).ok_or_else(|| SegmentError::InvalidInsertKey {
                line: self.line_no,
                content: line.to_string(),
            })?;
            self.flush();
            debug!("Line {}: INSERT {}", self.line_no, key);
            self.key = Some(SegmentKey::Insert(key));
            self.start_line = self.line_no;
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix(FAILED_KEY_MARKER) {
            let key = rest.trim().to_string();
            info!("Line {}: failure reported on key {}", self.line_no, key);
            self.key = Some(SegmentKey::Failure(key));
            self.start_line = self.line_no;
            return Ok(());
        }

        if line.contains(DUMP_SOURCE_TAG) {
            self.buffer.push(line.to_string());
            return Ok(());
        }

        if line.trim().is_empty() {
            return Ok(());
        }

        Err(SegmentError::InvalidLine {
            line: self.line_no,
            content: line.to_string(),
        })
    }

    /// Flush the open segment and return every segment in file order
    pub fn finish(mut self) -> Vec<LogSegment> {
        self.flush();
        info!("Split log into {} segment(s)", self.segments.len());
        self.segments
    }

    fn flush(&mut self) {
        let lines = std::mem::take(&mut self.buffer);

        match self.key.take() {
            Some(key) => {
                debug!("Segment {} ({}): {} dump lines", self.segments.len(), key, lines.len());
                self.segments.push(LogSegment {
                    key,
                    lines,
                    start_line: self.start_line,
                });
            }
            None if !lines.is_empty() => {
                warn!("Dropping {} dump line(s) not tied to any key", lines.len());
            }
            None => {}
        }
    }
}

/// Split log text into segments
///
/// **Public** - main entry point for segmenting
///
/// # Errors
/// * `SegmentError::InvalidLine` - Unrecognised non-blank line
/// * `SegmentError::InvalidInsertKey` - `INSERT` not followed by an integer
pub fn segment_log(text: &str) -> Result<Vec<LogSegment>, SegmentError> {
    let mut segmenter = LogSegmenter::new();
    for line in text.lines() {
        segmenter.push_line(line)?;
    }
    Ok(segmenter.finish())
}

/// Read and segment a log file
pub fn load_segments(path: impl AsRef<Path>) -> Result<Vec<LogSegment>, SegmentError> {
    let path = path.as_ref();
    debug!("Reading log from: {}", path.display());
    let text = fs::read_to_string(path)?;
    segment_log(&text)
}

/// Parse the integer following `INSERT`
///
/// The marker must be followed by whitespace; trailing fields are ignored.
fn parse_insert_key(rest: &str) -> Option<i64> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    rest.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert_key() {
        assert_eq!(parse_insert_key(" 42"), Some(42));
        assert_eq!(parse_insert_key("\t-3 extra"), Some(-3));
        assert_eq!(parse_insert_key("42"), None);
        assert_eq!(parse_insert_key(" x"), None);
        assert_eq!(parse_insert_key(""), None);
    }

    #[test]
    fn test_key_zero_is_flushed_at_end() {
        let segments = segment_log("INSERT 0\nI x concurrent_btree.h:1] leaf 0x1: [0=a]\n").unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].key, SegmentKey::Insert(0));
    }

    #[test]
    fn test_orphan_dump_lines_are_dropped() {
        let segments = segment_log("concurrent_btree leaf 0x1:\n").unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let segments = segment_log("INSERT 1\r\nconcurrent_btree leaf 0x1:\r\n\r\n").unwrap();
        assert_eq!(segments[0].lines, vec!["concurrent_btree leaf 0x1:".to_string()]);
    }
}
