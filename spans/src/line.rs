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

use crate::span::{MARKER, Span, is_terminator};
use std::ops::Index;

/// One row of terminal output, tokenized into an ordered sequence of
/// [`Span`]s.
///
/// `StyledLine` is the parsing result of a single line that may interleave
/// style-introducing and style-terminating escape sequences with visible
/// text. Rendering the spans back in order (via `Display`) reproduces the
/// original line byte-for-byte, provided the line did not end in the middle
/// of an escape sequence.
///
/// # Examples
///
/// ```rust
/// use modalix_spans::StyledLine;
///
/// let line = StyledLine::parse("plain \x1b[31mred\x1b[0m tail");
/// assert_eq!(line.count(), 3);
/// assert_eq!(line.width(), 14);
/// assert_eq!(line.to_string(), "plain \x1b[31mred\x1b[0m tail");
/// ```
///
/// # Performance
///
/// Parsing is a single forward pass over the runes of the input; width and
/// iteration are linear in the number of spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledLine(Vec<Span>);

impl StyledLine {
    /// Tokenizes a raw line into spans.
    ///
    /// The scan keeps a current-span accumulator and two flags for an
    /// in-progress opening or closing sequence:
    ///
    /// - A marker seen while the current span has no prefix flushes any
    ///   accumulated content as a completed unstyled span, then starts
    ///   accumulating an opening sequence.
    /// - A marker seen after a prefix exists starts accumulating a closing
    ///   sequence instead.
    /// - While a sequence is open, runes accumulate into the prefix or
    ///   suffix until a terminator rune ends it. A finished closing
    ///   sequence completes the span.
    /// - Any other rune is visible content.
    ///
    /// At end of input a pending span is flushed only if it has content and
    /// no suffix. A style opened but never closed therefore stays attached
    /// to its content with no synthetic reset appended; a line that ends
    /// inside an escape sequence drops the unfinished accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modalix_spans::StyledLine;
    ///
    /// let line = StyledLine::parse("\x1b[1;31mbold red\x1b[0m");
    /// assert_eq!(line.count(), 1);
    /// assert_eq!(line[0].prefix(), "\x1b[1;31m");
    ///
    /// // Opening-only input yields no spans.
    /// let line = StyledLine::parse("\x1b[2J");
    /// assert_eq!(line.count(), 0);
    /// ```
    pub fn parse(line: &str) -> StyledLine {
        let mut spans = Vec::new();
        let mut current = Span::default();
        let mut opening = false;
        let mut closing = false;

        for c in line.chars() {
            if c == MARKER {
                if current.prefix.is_empty() {
                    if !current.content.is_empty() {
                        spans.push(std::mem::take(&mut current));
                    }
                    opening = true;
                    current.prefix.push(c);
                } else {
                    closing = true;
                    current.suffix.push(c);
                }
            } else if opening {
                current.prefix.push(c);
                if is_terminator(c) {
                    opening = false;
                }
            } else if closing {
                current.suffix.push(c);
                if is_terminator(c) {
                    closing = false;
                    spans.push(std::mem::take(&mut current));
                }
            } else {
                current.content.push(c);
            }
        }

        if current.suffix.is_empty() && !current.content.is_empty() {
            spans.push(current);
        }

        StyledLine(spans)
    }

    /// Total visible width of the line in columns.
    pub fn width(&self) -> usize {
        self.0.iter().map(Span::width).sum()
    }

    /// Number of spans in the line.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the line holds no spans.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the spans in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.0.iter()
    }
}

impl Index<usize> for StyledLine {
    type Output = Span;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::fmt::Display for StyledLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for span in &self.0 {
            write!(f, "{span}")?;
        }
        Ok(())
    }
}
