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

//! Types shared by every ride type's track painting code.
//!
//! The paint session itself (occlusion, sorting, rasterisation) lives outside of this
//! crate; [session::PaintSession] is the narrow interface track paint routines call into,
//! and [recording::RecordingSession] is a command-buffer implementation of it that is
//! used for tooling and tests.

pub mod constants;
pub mod coordinates;
pub mod image;
pub mod recording;
pub mod session;
pub mod settings;
pub mod supports;
pub mod track;

#[cfg(test)]
mod tests {
    #[ctor::ctor]
    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
