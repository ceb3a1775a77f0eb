//! Forward cursor over normalized dump lines.

/// Peekable cursor with an explicit end-of-input state
///
/// **Public** - the tree parser advances it one node at a time
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    idx: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        Self { lines, idx: 0 }
    }

    /// Current line, `None` once the input is exhausted
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.idx).copied()
    }

    pub fn advance(&mut self) {
        if self.idx < self.lines.len() {
            self.idx += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.idx >= self.lines.len()
    }

    /// 1-based number of the current line
    pub fn line_number(&self) -> usize {
        self.idx + 1
    }
}
