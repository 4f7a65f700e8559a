// Copyright 2023 drey7925
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! Track paint routines for roller coasters.
//!
//! Each ride type exposes a `get_track_paint_function` dispatcher that maps a
//! [TrackElemType](trackpaint_core::track::TrackElemType) to the routine painting one
//! tile of it. Routines draw through [PaintSession](trackpaint_core::session::PaintSession)
//! and have no failure path: a sequence or direction a piece doesn't have paints nothing.

/// Common constant values useful to track painting.
pub use trackpaint_core::constants;

/// The lay-down (flying) roller coaster.
pub mod lay_down;
/// Recording pieces for tools, benchmarks and tests.
pub mod preview;
/// Stations, photo sections and boosters that every coaster can fall back to.
pub mod shared;
/// Table-driven piece painting and the sequence maps used by mirror-image pieces.
pub mod track_paint;

#[cfg(test)]
mod tests {
    #[ctor::ctor]
    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
