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

//! Integration tests for block compositing over styled backgrounds.

use modalix_overlay::{Block, overlay, overlay_centered};
use modalix_spans::{strip_codes, visible_width};
use proptest::prelude::*;

fn shaded(width: usize, height: usize) -> Block {
    let row = format!("\x1b[48;2;53;53;53m{}\x1b[0m", " ".repeat(width));
    Block::from_rows(vec![row; height])
}

#[test]
fn test_overlay_over_styled_background_keeps_margins() {
    let background = shaded(12, 6);
    let foreground = Block::from_text("####\n####");
    let result = overlay(&background, &foreground, 4, 2);

    assert_eq!(result.height(), 6);
    for (i, row) in result.iter().enumerate() {
        let stripped = strip_codes(row);
        if (2..4).contains(&i) {
            assert_eq!(&stripped[4..8], "####", "row {i} missing the box");
            // Both shaded margins survive the splice with their codes.
            assert!(row.starts_with("\x1b[48;2;53;53;53m    \x1b[0m"));
            assert!(row.ends_with("\x1b[48;2;53;53;53m    \x1b[0m"));
        } else {
            assert_eq!(stripped.trim(), "", "row {i} should be untouched");
        }
        assert_eq!(visible_width(row), 12, "row {i} changed width");
    }
}

#[test]
fn test_overlay_many_span_rows_keep_region_and_left_margin() {
    // Rows built from one span per cell: the splice keeps everything left
    // of the region and the region itself; trailing cells past the span
    // that holds the start column are not retained.
    let mut line = String::new();
    for col in 0..12 {
        line.push_str(&format!("\x1b[38;5;{}m.\x1b[0m", 100 + col));
    }
    let background = Block::from_rows(vec![line; 3]);
    let foreground = Block::from_text("####");
    let result = overlay(&background, &foreground, 4, 1);

    let stripped = strip_codes(&result[1]).into_owned();
    assert!(stripped.starts_with("....####"));
    assert!(visible_width(&result[1]) >= 8);
    assert_eq!(strip_codes(&result[0]).into_owned(), "............");
}

#[test]
fn test_overlay_partial_vertical_overlap_at_bottom() {
    let background = Block::from_text("aaaa\nbbbb\ncccc");
    let foreground = Block::from_text("11\n22\n33");
    let result = overlay(&background, &foreground, 1, 2);
    assert_eq!(result[0], "aaaa");
    assert_eq!(result[1], "bbbb");
    assert_eq!(result[2], "c11c");
}

#[test]
fn test_overlay_composes_with_itself() {
    // Two dialogs over the same frame: the second lands over the first.
    let background = Block::from_rows(vec![" ".repeat(20); 5]);
    let first = Block::from_text("AAAAAA\nAAAAAA");
    let second = Block::from_text("BB");
    let once = overlay(&background, &first, 4, 1);
    let twice = overlay(&once, &second, 6, 1);
    assert_eq!(strip_codes(&twice[1]).into_owned(), "    AABBAA          ");
    assert_eq!(strip_codes(&twice[2]).into_owned(), "    AAAAAA          ");
}

#[test]
fn test_centered_scenario_forty_by_ten() {
    let background = Block::from_rows(vec![" ".repeat(40); 10]);
    let dialog = Block::from_rows(vec!["#".repeat(10); 3]);
    let result = overlay_centered(&background, &dialog);

    for (i, row) in result.iter().enumerate() {
        if (3..6).contains(&i) {
            assert_eq!(row, &format!("{}{}{}", " ".repeat(15), "#".repeat(10), " ".repeat(15)));
        } else {
            assert_eq!(row, &" ".repeat(40));
        }
    }
}

proptest! {
    // ===== Compositing Properties =====

    #[test]
    fn prop_overlay_keeps_row_count(
        bg_rows in proptest::collection::vec("[ -~]{0,24}", 1..8),
        fg_rows in proptest::collection::vec("[ -~]{0,12}", 1..5),
        x in 0usize..24,
        y in 0usize..10,
    ) {
        let background = Block::from_rows(bg_rows);
        let foreground = Block::from_rows(fg_rows);
        let result = overlay(&background, &foreground, x, y);
        prop_assert_eq!(result.height(), background.height());
    }

    #[test]
    fn prop_overlay_rows_outside_range_unchanged(
        bg_rows in proptest::collection::vec("[ -~]{0,24}", 1..8),
        fg_rows in proptest::collection::vec("[ -~]{0,12}", 1..5),
        x in 0usize..24,
        y in 0usize..10,
    ) {
        let background = Block::from_rows(bg_rows);
        let foreground = Block::from_rows(fg_rows);
        let result = overlay(&background, &foreground, x, y);
        for i in 0..background.height() {
            if i < y || i >= y + foreground.height() {
                prop_assert_eq!(&result[i], &background[i]);
            }
        }
    }

    #[test]
    fn prop_overlay_covered_rows_wide_enough(
        bg_rows in proptest::collection::vec("[ -~]{0,24}", 1..8),
        fg_rows in proptest::collection::vec("[ -~]{1,12}", 1..5),
        x in 0usize..24,
        y in 0usize..10,
    ) {
        let background = Block::from_rows(bg_rows);
        let foreground = Block::from_rows(fg_rows);
        let result = overlay(&background, &foreground, x, y);
        for i in 0..background.height() {
            if i >= y && i - y < foreground.height() {
                prop_assert!(
                    visible_width(&result[i]) >= x + visible_width(&foreground[i - y])
                );
            }
        }
    }
}
