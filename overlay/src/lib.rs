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

mod block;
mod compose;
mod dialog;
mod result;
mod style;

pub use self::block::Block;
pub use self::compose::{overlay, overlay_centered};
pub use self::dialog::Dialog;
pub use self::result::{OverlayError, OverlayResult};
pub use self::style::{Color, Style};
