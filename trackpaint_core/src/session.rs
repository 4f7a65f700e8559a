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

use crate::{
    constants::{TunnelSide, TunnelType},
    coordinates::{BoundBoxXYZ, CoordsXY, CoordsXYZ, Direction},
    image::{ColourScheme, ImageId},
    supports::{MetalSupportPlace, MetalSupportType},
};

/// The per-frame paint context that track paint routines draw into.
///
/// Implementations own sorting and occlusion; track paint code only ever appends to it,
/// one tile at a time. All heights are in world units, already including the track
/// element's base height.
pub trait PaintSession {
    /// The colour template for the element currently being painted.
    fn track_colours(&self, scheme: ColourScheme) -> ImageId;

    /// World position of the tile currently being painted.
    fn map_position(&self) -> CoordsXY;

    /// Adds a sprite that takes part in sorting on its own.
    fn add_image_as_parent(&mut self, image: ImageId, offset: CoordsXYZ, bound_box: BoundBoxXYZ);

    /// Draws a metal support column from the ground up to `height`.
    ///
    /// `special` selects the extra crossbeam piece drawn at the top for sloped track.
    /// Returns false if nothing was drawn (e.g. supports are hidden, or the column would
    /// be entirely underground).
    fn metal_a_supports(
        &mut self,
        support_type: MetalSupportType,
        place: MetalSupportPlace,
        special: i32,
        height: i32,
        template: ImageId,
    ) -> bool;

    fn push_tunnel(&mut self, side: TunnelSide, height: i32, kind: TunnelType);

    fn set_segment_support_height(&mut self, segments: u16, height: u16, slope: u8);

    fn set_general_support_height(&mut self, height: i32, slope: u8);

    /// Like [PaintSession::add_image_as_parent], but with the offset and bounding box
    /// given for direction 0 of a piece that is symmetric under a half turn. On odd
    /// directions x and y are swapped.
    fn add_image_as_parent_rotated(
        &mut self,
        direction: Direction,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) {
        if direction.is_odd() {
            self.add_image_as_parent(image, offset.swap_xy(), bound_box.swap_xy());
        } else {
            self.add_image_as_parent(image, offset, bound_box);
        }
    }

    /// Pushes a tunnel onto the edge a straight piece facing `direction` enters through.
    fn push_tunnel_rotated(&mut self, direction: Direction, height: i32, kind: TunnelType) {
        if direction.is_odd() {
            self.push_tunnel(TunnelSide::Right, height, kind);
        } else {
            self.push_tunnel(TunnelSide::Left, height, kind);
        }
    }

    /// Draws a support whose placement is given for direction 0.
    fn metal_a_supports_rotated(
        &mut self,
        support_type: MetalSupportType,
        place: MetalSupportPlace,
        direction: Direction,
        special: i32,
        height: i32,
        template: ImageId,
    ) -> bool {
        self.metal_a_supports(
            support_type.rotated(direction),
            place.rotated(direction),
            special,
            height,
            template,
        )
    }

    /// Checkerboard test used by track that only gets a support on every other tile.
    fn should_paint_supports(&self) -> bool {
        let position = self.map_position();
        (position.x & 32) == (position.y & 32)
    }
}
