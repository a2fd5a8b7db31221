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
use crate::compose::overlay;
use crate::style::{Color, Style};
use modalix_spans::{pad_to_width, truncate_to_width, visible_width};
use tracing::debug;

// Normal box-drawing border pieces.
const TOP_LEFT: &str = "┌";
const TOP_RIGHT: &str = "┐";
const BOTTOM_LEFT: &str = "└";
const BOTTOM_RIGHT: &str = "┘";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

// Columns of padding between the border and the content on each side.
const PADDING: usize = 2;

/// A modal dialog box: a styled title over a body, wrapped in a border and
/// composited centered over a background render.
///
/// The dialog holds the terminal dimensions it will be centered against and
/// the title/border styles; it does not handle keys, confirmation state, or
/// redraw scheduling. Callers render their background first, then ask the
/// dialog for the composited frame.
///
/// # Examples
///
/// ```rust
/// use modalix_overlay::Dialog;
///
/// let dialog = Dialog::new("Delete?", "y/n").with_size(40, 10);
/// let frame = dialog.compose_over("some rendered background\nwith rows");
/// assert!(frame.contains("Delete?"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    width: usize,
    height: usize,
    title: String,
    body: String,
    title_style: Style,
    border_style: Style,
}

impl Dialog {
    /// Creates a dialog with a default 80x24 terminal size and the default
    /// theme (bold muted-green title, green border).
    pub fn new(title: &str, body: &str) -> Dialog {
        Dialog {
            width: 80,
            height: 24,
            title: String::from(title),
            body: String::from(body),
            title_style: Style::new().bold().foreground(Color::Rgb(0x87, 0xa9, 0x87)),
            border_style: Style::new().foreground(Color::Rgb(0x00, 0xff, 0x00)),
        }
    }

    /// Sets the terminal dimensions the dialog centers against.
    pub fn with_size(mut self, width: usize, height: usize) -> Dialog {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the style applied to the title line.
    pub fn with_title_style(mut self, style: Style) -> Dialog {
        self.title_style = style;
        self
    }

    /// Sets the style applied to the border pieces.
    pub fn with_border_style(mut self, style: Style) -> Dialog {
        self.border_style = style;
        self
    }

    /// The dialog title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The dialog body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Renders the bordered dialog box alone.
    ///
    /// The styled title is stacked over the body; body lines are cut to the
    /// terminal width minus the border and padding columns, every row is
    /// padded out to the widest one, and the border is drawn around the
    /// padded content in the border style.
    pub fn render(&self) -> Block {
        let max_body = self.width.saturating_sub(2 * PADDING + 2);
        let mut content = vec![self.title_style.render(&self.title)];
        for line in self.body.split('\n') {
            content.push(truncate_to_width(line, max_body).into_owned());
        }

        let inner = content
            .iter()
            .map(|line| visible_width(line))
            .max()
            .unwrap_or(0);

        let mut rows = Vec::with_capacity(content.len() + 2);
        let horizontal = HORIZONTAL.repeat(inner + 2 * PADDING);
        rows.push(
            self.border_style
                .render(&format!("{TOP_LEFT}{horizontal}{TOP_RIGHT}")),
        );
        let side = self.border_style.render(VERTICAL);
        let pad = " ".repeat(PADDING);
        for line in &content {
            rows.push(format!(
                "{side}{pad}{}{pad}{side}",
                pad_to_width(line, inner)
            ));
        }
        rows.push(
            self.border_style
                .render(&format!("{BOTTOM_LEFT}{horizontal}{BOTTOM_RIGHT}")),
        );
        Block::from_rows(rows)
    }

    /// Renders the dialog and composites it centered over a background
    /// render, returning the finished frame.
    ///
    /// Centering uses the dialog's terminal dimensions and the same
    /// visible-width metric the box was rendered with, so border, padding,
    /// and placement all agree on where a column is.
    pub fn compose_over(&self, background: &str) -> String {
        let dialog = self.render();
        let x = (self.width / 2).saturating_sub(dialog.width() / 2);
        let y = (self.height / 2).saturating_sub(dialog.height() / 2);
        debug!(x, y, "placing dialog");
        overlay(&Block::from_text(background), &dialog, x, y).to_string()
    }
}
