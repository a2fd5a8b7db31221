//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use modalix_spans::visible_width;
use std::ops::Index;

/// A rectangular region of rendered terminal output: an ordered sequence of
/// rows, top to bottom.
///
/// Rows are stored as already-rendered strings and may contain style escape
/// sequences; they may also have differing visible widths (a block is only
/// as rectangular as its widest row, and narrower rows are padded on demand
/// by the compositor). Blocks are plain values built fresh for every
/// composite operation; nothing is cached between calls.
///
/// # Examples
///
/// ```rust
/// use modalix_overlay::Block;
///
/// let block = Block::from_text("ab\ncdef\ng");
/// assert_eq!(block.height(), 3);
/// assert_eq!(block.width(), 4);
/// assert_eq!(block.to_string(), "ab\ncdef\ng");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    rows: Vec<String>,
}

impl Block {
    /// Creates a block by splitting rendered text on newlines.
    ///
    /// Empty input yields a single empty row, matching how a rendered frame
    /// of text is split by the surrounding terminal program.
    pub fn from_text(text: &str) -> Block {
        Block {
            rows: text.split('\n').map(String::from).collect(),
        }
    }

    /// Creates a block from already-split rows.
    pub fn from_rows(rows: Vec<String>) -> Block {
        Block { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Visible width of the widest row in columns.
    ///
    /// Escape sequences contribute zero width, consistent with the splice
    /// and centering math.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| visible_width(row)).max().unwrap_or(0)
    }

    /// Returns `true` if the block holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.rows.iter()
    }
}

impl Index<usize> for Block {
    type Output = String;
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Block::from_text(text)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "\n")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
