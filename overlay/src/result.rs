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

//! Error types for the overlay crate.
//!
//! Compositing itself is total: every line and every column offset produces
//! a result, and malformed escape sequences degrade to best-effort spans
//! rather than failures. The only fallible surface is style construction
//! from user-supplied values.

/// Result type alias for operations that may fail with an [`OverlayError`].
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Errors that can occur when building overlay styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// A color value could not be parsed.
    ///
    /// Hex colors must be of the form `#rrggbb` with exactly six hex digits.
    #[error("invalid color {value:?}: {reason}")]
    InvalidColor {
        /// The value that was rejected
        value: String,
        /// Description of why it's invalid
        reason: &'static str,
    },
}
