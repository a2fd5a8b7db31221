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

use crate::block::Block;
use modalix_spans::splice_at;
use tracing::debug;

/// Composites a foreground block over a background block.
///
/// The foreground's top-left corner lands at row `y`, column `x` of the
/// background, row-major. The result has exactly the background's row count:
/// rows outside the foreground's vertical range are copied through
/// unchanged, and each overlapping row is rewritten by the width-indexed
/// splice, so styling on either side of the foreground survives.
///
/// Foreground rows that would fall below the bottom of the background are
/// silently clipped and never indexed. There is no horizontal clipping: a
/// foreground wider than the remaining columns simply widens that output
/// row, and a background row shorter than `x` is padded with spaces first.
///
/// # Examples
///
/// ```rust
/// use modalix_overlay::{Block, overlay};
///
/// let background = Block::from_text("..........\n..........\n..........");
/// let foreground = Block::from_text("##\n##");
/// let result = overlay(&background, &foreground, 4, 1);
/// assert_eq!(result.to_string(), "..........\n....##....\n....##....");
/// ```
pub fn overlay(background: &Block, foreground: &Block, x: usize, y: usize) -> Block {
    debug!(
        x,
        y,
        background_rows = background.height(),
        foreground_rows = foreground.height(),
        "compositing block"
    );

    let mut rows = Vec::with_capacity(background.height());
    for (i, row) in background.iter().enumerate() {
        if i >= y && i - y < foreground.height() {
            rows.push(splice_at(row, x, &foreground[i - y]));
        } else {
            rows.push(row.clone());
        }
    }
    Block::from_rows(rows)
}

/// Composites a foreground block centered over a background block.
///
/// The offsets are computed from the blocks' own measured dimensions with
/// the same visible-width metric the splice uses, so a box rendered and
/// measured by this crate lands exactly centered:
/// `x = (background.width - foreground.width) / 2` and likewise for `y`,
/// saturating at zero when the foreground is larger than the background.
pub fn overlay_centered(background: &Block, foreground: &Block) -> Block {
    let x = background.width().saturating_sub(foreground.width()) / 2;
    let y = background.height().saturating_sub(foreground.height()) / 2;
    overlay(background, foreground, x, y)
}
