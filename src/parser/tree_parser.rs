//! Recursive-descent parser rebuilding a tree from an indented dump.
//!
//! Dump grammar, one node header or separator per line:
//!
//! ```text
//! internal 0x10:
//!  key 5
//!  leaf 0x20: [1=a] [3=b]
//!  leaf 0x30: [6=c]
//! ```
//!
//! Leading spaces are the only nesting signal. An internal node owns every
//! following line indented deeper than its header; the first line at the
//! same depth or shallower belongs to an ancestor.

use super::cursor::LineCursor;
use super::line::{normalize_line, parse_int_literal, split_line, strip_keyword};
use super::namer::NodeNamer;
use super::schema::{LogSegment, Node, NodeKind, Tree};
use crate::utils::config::{
    INTERNAL_KEYWORD, LEAF_ENTRY_PATTERN, LEAF_FIELD_PATTERN, LEAF_KEYWORD, SEPARATOR_KEYWORD,
};
use crate::utils::error::ParseError;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static LEAF_ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LEAF_ENTRY_PATTERN).expect("leaf entry pattern is valid"));

static LEAF_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LEAF_FIELD_PATTERN).expect("leaf field pattern is valid"));

/// Node variant announced by a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderKind {
    Internal,
    Leaf,
}

/// Parse raw dump lines into a tree
///
/// **Public** - main entry point for tree parsing
///
/// # Arguments
/// * `lines` - Dump lines in order; glog prefixes are stripped here
/// * `namer` - Registry shared across every tree of the run
///
/// # Errors
/// * `ParseError::InvalidNodeType` - Header is neither `internal` nor `leaf`
/// * `ParseError::UnexpectedHeaderFields` - Internal header has trailing fields
/// * `ParseError::MalformedLeafEntry` - Leaf field is not `[k=v]` entries
/// * `ParseError::UnexpectedEnd` - No node to parse
/// * `ParseError::TrailingInput` - Lines left after the root's subtree
pub fn parse_tree<S: AsRef<str>>(lines: &[S], namer: &mut NodeNamer) -> Result<Tree, ParseError> {
    let normalized: Vec<&str> = lines.iter().map(|l| normalize_line(l.as_ref())).collect();
    let mut cursor = LineCursor::new(normalized);

    let root = parse_node(&mut cursor, namer)?;

    if let Some(line) = skip_blank(&mut cursor) {
        return Err(ParseError::TrailingInput {
            line: cursor.line_number(),
            payload: line.trim().to_string(),
        });
    }

    debug!("Parsed tree rooted at {} ({:#x})", root.name, root.pointer);
    Ok(Tree::new(root))
}

/// Parse a segment's dump lines
pub fn parse_segment(segment: &LogSegment, namer: &mut NodeNamer) -> Result<Tree, ParseError> {
    parse_tree(&segment.lines, namer)
}

/// Parse a dump held in a single string
pub fn parse_tree_str(text: &str, namer: &mut NodeNamer) -> Result<Tree, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_tree(&lines, namer)
}

/// Build one node starting at the cursor
///
/// **Private** - recursive step of parse_tree
///
/// Returns with the cursor on the first line outside the node's subtree.
fn parse_node(cursor: &mut LineCursor<'_>, namer: &mut NodeNamer) -> Result<Node, ParseError> {
    let Some(line) = skip_blank(cursor) else {
        return Err(ParseError::UnexpectedEnd {
            line: cursor.line_number() - 1,
        });
    };
    let line_no = cursor.line_number();
    let (my_depth, payload) = split_line(line);

    let (header_kind, header) = if let Some(rest) = strip_keyword(payload, INTERNAL_KEYWORD) {
        (HeaderKind::Internal, rest)
    } else if let Some(rest) = strip_keyword(payload, LEAF_KEYWORD) {
        (HeaderKind::Leaf, rest)
    } else {
        return Err(ParseError::InvalidNodeType {
            line: line_no,
            payload: payload.to_string(),
        });
    };

    let mut fields = header.split_whitespace();
    let token = fields.next().ok_or(ParseError::MissingField {
        line: line_no,
        field: "node pointer",
    })?;
    let pointer = parse_pointer(token).ok_or_else(|| ParseError::InvalidPointer {
        line: line_no,
        token: token.to_string(),
    })?;
    let name = namer.resolve(pointer);

    if header_kind == HeaderKind::Leaf {
        let entries = parse_leaf_entries(fields, line_no)?;
        cursor.advance();
        return Ok(Node {
            pointer,
            name,
            depth: my_depth,
            kind: NodeKind::Leaf { entries },
        });
    }

    let rest: Vec<&str> = fields.collect();
    if !rest.is_empty() {
        return Err(ParseError::UnexpectedHeaderFields {
            line: line_no,
            rest: rest.join(" "),
        });
    }
    cursor.advance();

    let mut separators = Vec::new();
    let mut children = Vec::new();

    while let Some(line) = skip_blank(cursor) {
        let (depth, payload) = split_line(line);
        if depth <= my_depth {
            break;
        }

        if let Some(rest) = strip_keyword(payload, SEPARATOR_KEYWORD) {
            let value = rest.split_whitespace().next().ok_or(ParseError::MissingField {
                line: cursor.line_number(),
                field: "separator value",
            })?;
            separators.push(value.to_string());
            cursor.advance();
        } else {
            children.push(parse_node(cursor, namer)?);
        }
    }

    Ok(Node {
        pointer,
        name,
        depth: my_depth,
        kind: NodeKind::Internal {
            separators,
            children,
        },
    })
}

/// Move past blank lines and peek the next one
fn skip_blank<'a>(cursor: &mut LineCursor<'a>) -> Option<&'a str> {
    while let Some(line) = cursor.peek() {
        if !line.trim().is_empty() {
            return Some(line);
        }
        cursor.advance();
    }
    None
}

/// Parse a pointer token such as `0x7f00dead:`
fn parse_pointer(token: &str) -> Option<u64> {
    let token = token
        .strip_suffix(':')
        .or_else(|| token.strip_suffix(','))
        .unwrap_or(token);
    parse_int_literal(token)
}

/// Collect `[k=v]` entries from the fields after a leaf pointer
///
/// A field may hold several adjacent entries, e.g. `[1=a][3=b]`.
fn parse_leaf_entries<'a>(
    fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Vec<(String, String)>, ParseError> {
    let mut entries = Vec::new();

    for field in fields {
        if !LEAF_FIELD_RE.is_match(field) {
            return Err(ParseError::MalformedLeafEntry {
                line,
                field: field.to_string(),
            });
        }
        for caps in LEAF_ENTRY_RE.captures_iter(field) {
            entries.push((caps[1].to_string(), caps[2].to_string()));
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Tree, ParseError> {
        parse_tree_str(text, &mut NodeNamer::new())
    }

    #[test]
    fn test_parse_single_leaf() {
        let tree = parse("leaf 0x20: [1=a] [3=b]").unwrap();
        assert_eq!(tree.root.name, "N0");
        assert_eq!(tree.root.pointer, 0x20);
        assert_eq!(
            tree.root.entries(),
            &[
                ("1".to_string(), "a".to_string()),
                ("3".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_empty_leaf() {
        let tree = parse("leaf 0x20:").unwrap();
        assert!(tree.root.is_leaf());
        assert!(tree.root.entries().is_empty());
    }

    #[test]
    fn test_parse_adjacent_leaf_entries() {
        let tree = parse("leaf 0x20: [1=a][3=b]").unwrap();
        assert_eq!(tree.root.entries().len(), 2);
        assert_eq!(tree.root.entries()[1].0, "3");
    }

    #[test]
    fn test_keeps_entry_case() {
        let tree = parse("LEAF 0X20: [Key=Value]").unwrap();
        assert_eq!(tree.root.pointer, 0x20);
        assert_eq!(tree.root.entries()[0], ("Key".to_string(), "Value".to_string()));
    }

    #[test]
    fn test_decimal_pointer() {
        let tree = parse("leaf 4096: [1=a]").unwrap();
        assert_eq!(tree.root.pointer, 4096);
    }

    #[test]
    fn test_nested_internal_nodes() {
        let text = "\
internal 0x1:
  key 10
  internal 0x2:
    key 5
    leaf 0x3: [1=a]
    leaf 0x4: [6=b]
  internal 0x5:
    key 15
    leaf 0x6: [11=c]
    leaf 0x7: [20=d]";
        let tree = parse(text).unwrap();

        assert_eq!(tree.root.separators(), &["10".to_string()]);
        let children = tree.root.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].separators(), &["5".to_string()]);
        assert_eq!(children[1].separators(), &["15".to_string()]);
        assert_eq!(children[1].children()[1].entries()[0].1, "d");

        let names: Vec<&str> = tree.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["N0", "N1", "N2", "N3", "N4", "N5", "N6"]);
    }

    #[test]
    fn test_separators_keep_order_across_children() {
        let text = "\
internal 0x1:
 leaf 0x2: [1=a]
 key 5
 leaf 0x3: [5=b]
 key 9
 leaf 0x4: [9=c]";
        let tree = parse(text).unwrap();
        assert_eq!(tree.root.separators(), &["5".to_string(), "9".to_string()]);
        assert_eq!(tree.root.children().len(), 3);
    }

    #[test]
    fn test_glog_prefix_is_stripped() {
        let lines = vec![
            "I20230115 10:22:33.123456 4242 concurrent_btree.h:311] internal 0x10: ",
            "I20230115 10:22:33.123460 4242 concurrent_btree.h:318]  key 5",
            "I20230115 10:22:33.123470 4242 concurrent_btree.h:305]  leaf 0x20: [1=a]",
            "I20230115 10:22:33.123480 4242 concurrent_btree.h:305]  leaf 0x30: [6=c]",
        ];
        let tree = parse_tree(&lines, &mut NodeNamer::new()).unwrap();
        assert_eq!(tree.root.pointer, 0x10);
        assert_eq!(tree.root.children().len(), 2);
        assert_eq!(tree.root.children()[0].depth, 1);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let text = "internal 0x1:\n\n key 5\n leaf 0x2: [1=a]\n   \n leaf 0x3: [7=b]\n";
        let tree = parse(text).unwrap();
        assert_eq!(tree.root.children().len(), 2);
    }

    #[test]
    fn test_invalid_node_type() {
        let err = parse("branch 0x10:").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNodeType { line: 1, .. }));
    }

    #[test]
    fn test_invalid_child_type() {
        let err = parse("internal 0x10:\n node 0x20:").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNodeType { line: 2, .. }));
    }

    #[test]
    fn test_internal_header_with_extra_fields() {
        let err = parse("internal 0x10: extra").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedHeaderFields {
                line: 1,
                rest: "extra".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_leaf_entry() {
        let err = parse("leaf 0x20: [1=a] 3=b").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLeafEntry { line: 1, .. }));

        let err = parse("leaf 0x20: [1=a]junk").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLeafEntry { .. }));
    }

    #[test]
    fn test_missing_pointer() {
        let err = parse("leaf").unwrap_err();
        assert!(matches!(err, ParseError::MissingField { field: "node pointer", .. }));
    }

    #[test]
    fn test_invalid_pointer() {
        let err = parse("leaf 0xzz: [1=a]").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPointer { .. }));
    }

    #[test]
    fn test_separator_without_value() {
        let err = parse("internal 0x1:\n key\n leaf 0x2:").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField {
                line: 2,
                field: "separator value"
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEnd { line: 0 });

        let err = parse("\n  \n").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEnd { line: 2 });
    }

    #[test]
    fn test_trailing_root_level_line() {
        let err = parse("leaf 0x1: [1=a]\nleaf 0x2: [2=b]").unwrap_err();
        assert!(matches!(err, ParseError::TrailingInput { line: 2, .. }));
    }

    #[test]
    fn test_internal_without_children() {
        let tree = parse("internal 0x1:").unwrap();
        assert!(tree.root.children().is_empty());
        assert!(tree.root.separators().is_empty());
    }
}
