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

mod line;
mod span;
mod splice;
mod width;

pub use self::line::StyledLine;
pub use self::span::{MARKER, Span, is_terminator};
pub use self::splice::splice_at;
pub use self::width::{pad_to_width, strip_codes, truncate_to_width, visible_width};
