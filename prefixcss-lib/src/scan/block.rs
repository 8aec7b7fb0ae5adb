//! Brace-counting block detection.
//!
//! Detection is purely textual: each line moves the depth by at most one in
//! each direction, based on whether it contains `{` and/or `}` at all. Braces
//! inside comments or string literals are counted like any other.

use crate::error::PrefixError;

/// An inclusive range of line indices forming one at-rule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

impl Block {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Index of the first line after the block.
    pub fn next(&self) -> usize {
        self.end + 1
    }

    pub fn lines<'a>(&self, lines: &'a [String]) -> &'a [String] {
        &lines[self.start..=self.end]
    }
}

/// Collects the block whose header sits at `start`.
///
/// The block ends on the first line where the depth drops back to zero after
/// having been opened. Lines before the opening brace (a header split from its
/// `{`) and lines without braces are part of the block.
pub fn collect_block(lines: &[String], start: usize) -> Result<Block, PrefixError> {
    let mut depth = 0usize;
    let mut opened = false;

    for (index, line) in lines.iter().enumerate().skip(start) {
        if line.contains('{') {
            depth += 1;
            opened = true;
        }
        if line.contains('}') {
            depth = depth.saturating_sub(1);
        }
        if opened && depth == 0 {
            return Ok(Block { start, end: index });
        }
    }

    Err(PrefixError::UnterminatedBlock { line: start + 1 })
}
