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

use crate::line::StyledLine;
use crate::width::{pad_to_width, visible_width};
use tracing::trace;

/// Replaces a range of visible columns in a styled line.
///
/// The visible columns `[start_column, start_column + width(replacement))`
/// of `line` are overwritten with `replacement`; everything outside that
/// range keeps its original bytes, including its style codes. A span that
/// straddles a boundary of the range is split at a rune offset and the
/// surviving fragment is re-wrapped in the span's own prefix and suffix, so
/// styling neither leaks into the replacement nor gets lost around it.
///
/// The replacement is inserted as an opaque chunk: its visible width is
/// measured, but its own escape sequences are never re-tokenized against the
/// surrounding line, and it is inserted exactly once.
///
/// If `start_column` lies beyond the end of the line, the line is first
/// right-padded with plain spaces out to `start_column` columns (an empty
/// line pads to exactly `start_column` spaces), which makes the operation
/// total over all columns. The result is always at least
/// `start_column + width(replacement)` columns wide.
///
/// # Examples
///
/// ```rust
/// use modalix_spans::splice_at;
///
/// // Plain splice.
/// assert_eq!(splice_at("abcdef", 2, "XY"), "abXYef");
///
/// // Styling on the untouched remainder survives the split.
/// assert_eq!(
///     splice_at("\x1b[31mHELLO\x1b[0m", 2, "X"),
///     "\x1b[31mHE\x1b[0mX\x1b[31mLO\x1b[0m",
/// );
///
/// // Splicing past the end pads with spaces.
/// assert_eq!(splice_at("", 5, "X"), "     X");
/// ```
pub fn splice_at(line: &str, start_column: usize, replacement: &str) -> String {
    let padded = pad_to_width(line, start_column);
    let spans = StyledLine::parse(&padded);
    let replacement_width = visible_width(replacement);
    let end_column = start_column + replacement_width;
    trace!(start_column, replacement_width, "splicing line");

    let mut replaced = String::with_capacity(padded.len() + replacement.len());
    let mut width_so_far = 0;
    let mut inserted = false;

    for span in spans.iter() {
        let current_width = span.width();
        let width_before = width_so_far;

        if width_before > start_column {
            if width_before > end_column {
                // Entirely after the replacement region.
                span.write_to(&mut replaced);
                width_so_far += current_width;
            } else if width_before + current_width > end_column {
                // The leading part of this span is covered by the
                // replacement region; keep only what lies past its end.
                if !inserted {
                    replaced.push_str(replacement);
                    width_so_far += replacement_width;
                    inserted = true;
                }
                let fragment = span.tail(end_column - width_before);
                fragment.write_to(&mut replaced);
                width_so_far += fragment.width();
            }
            // Spans falling wholly inside the region are dropped.
        } else if width_before + current_width >= start_column {
            // The replacement region begins inside this span.
            let split = start_column - width_before;
            let fragment = span.head(split);
            fragment.write_to(&mut replaced);
            width_so_far += fragment.width();
            if width_before + current_width >= end_column {
                // ... and ends inside it too.
                if !inserted {
                    replaced.push_str(replacement);
                    width_so_far += replacement_width;
                    inserted = true;
                }
                let fragment = span.tail(split + replacement_width);
                fragment.write_to(&mut replaced);
                width_so_far += fragment.width();
            }
        } else {
            // Entirely before the replacement region.
            span.write_to(&mut replaced);
            width_so_far += current_width;
        }
    }

    // The region began beyond every existing span (including the padding
    // case); the replacement still has to land.
    if width_so_far <= start_column {
        replaced.push_str(replacement);
    }

    replaced
}
