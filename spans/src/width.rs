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

use crate::span::{MARKER, is_terminator};
use std::borrow::Cow;

/// Returns the visible width of a string in terminal columns.
///
/// Escape sequences contribute zero width: from a marker rune the scan skips
/// everything through the next terminator rune, using the same
/// marker/terminator classification as the tokenizer, so measurement can
/// never disagree with span-based editing. Every rune outside an escape
/// sequence counts as exactly one column.
///
/// This is the coordinate system for all column-indexed operations in this
/// crate and must also be the metric callers use to lay out the content they
/// later composite.
///
/// # Examples
///
/// ```rust
/// use modalix_spans::visible_width;
///
/// assert_eq!(visible_width("hello"), 5);
/// assert_eq!(visible_width("\x1b[1;31mRed\x1b[0m"), 3);
/// assert_eq!(visible_width(""), 0);
/// ```
///
/// # Performance
///
/// Single forward pass, no allocation.
pub fn visible_width(str: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in str.chars() {
        if c == MARKER {
            in_escape = true;
        } else if in_escape {
            if is_terminator(c) {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Removes escape sequences from a string.
///
/// Strips every sequence from a marker rune through its terminator rune,
/// leaving only the visible runes. The result always satisfies
/// `strip_codes(s).chars().count() == visible_width(s)`.
///
/// # Performance
///
/// The function performs a quick check for the presence of the marker rune
/// before processing. If no escape sequences are found, it returns a
/// borrowed reference to the original string (zero-copy). Otherwise it
/// allocates a new `String` with the sequences removed.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use modalix_spans::strip_codes;
///
/// let colored = "\x1b[1;31mRed Text\x1b[0m";
/// assert_eq!(strip_codes(colored), "Red Text");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_codes(plain), Cow::Borrowed(_)));
/// ```
pub fn strip_codes(str: &str) -> Cow<'_, str> {
    if !str.contains(MARKER) {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    let mut in_escape = false;
    for c in str.chars() {
        if c == MARKER {
            in_escape = true;
        } else if in_escape {
            if is_terminator(c) {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }

    Cow::Owned(result)
}

/// Right-pads a string with plain spaces to the requested visible width.
///
/// Padding is appended after the existing content (and after any trailing
/// escape sequences). A string already at least `width` columns wide is
/// returned borrowed, unchanged.
///
/// # Examples
///
/// ```rust
/// use modalix_spans::{pad_to_width, visible_width};
///
/// assert_eq!(pad_to_width("ab", 5), "ab   ");
/// assert_eq!(visible_width(&pad_to_width("\x1b[31mab\x1b[0m", 5)), 5);
/// assert_eq!(pad_to_width("abcdef", 3), "abcdef");
/// ```
pub fn pad_to_width(str: &str, width: usize) -> Cow<'_, str> {
    let current = visible_width(str);
    if current >= width {
        return Cow::Borrowed(str);
    }

    let missing = width - current;
    let mut result = String::with_capacity(str.len() + missing);
    result.push_str(str);
    for _ in 0..missing {
        result.push(' ');
    }
    Cow::Owned(result)
}

/// Drops visible runes beyond the requested width while keeping escape
/// sequences intact.
///
/// Truncation counts columns the same way [`visible_width`] does. Escape
/// sequences after the cut point are retained so that styling opened before
/// the cut is still closed in the truncated result.
///
/// # Examples
///
/// ```rust
/// use modalix_spans::truncate_to_width;
///
/// assert_eq!(truncate_to_width("hello world", 5), "hello");
/// assert_eq!(
///     truncate_to_width("\x1b[31mhello world\x1b[0m", 5),
///     "\x1b[31mhello\x1b[0m",
/// );
/// ```
pub fn truncate_to_width(str: &str, width: usize) -> Cow<'_, str> {
    if visible_width(str) <= width {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    let mut seen = 0;
    let mut in_escape = false;
    for c in str.chars() {
        if c == MARKER {
            in_escape = true;
            result.push(c);
        } else if in_escape {
            result.push(c);
            if is_terminator(c) {
                in_escape = false;
            }
        } else if seen < width {
            result.push(c);
            seen += 1;
        }
    }

    Cow::Owned(result)
}
