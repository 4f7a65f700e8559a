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

use serde::{Deserialize, Serialize};

use crate::coordinates::Direction;

/// Tile octant bits used for segment support heights.
///
/// The eight edge and corner segments occupy the low byte, ordered so that rotating
/// the byte left by two bits rotates the tile a quarter turn clockwise. The centre
/// segment sits above them and never moves.
#[rustfmt::skip]
pub mod segments {
    pub const B4: u16  = 0b0_0000_0001;
    pub const CC: u16  = 0b0_0000_0010;
    pub const BC: u16  = 0b0_0000_0100;
    pub const D4: u16  = 0b0_0000_1000;
    pub const C0: u16  = 0b0_0001_0000;
    pub const D0: u16  = 0b0_0010_0000;
    pub const B8: u16  = 0b0_0100_0000;
    pub const C8: u16  = 0b0_1000_0000;
    pub const C4: u16  = 0b1_0000_0000;

    pub const ALL: u16 = 0b1_1111_1111;
}

/// Marker for "the segment is blocked all the way up".
pub const SUPPORT_HEIGHT_BLOCKED: u16 = 0xFFFF;
/// Slope marker passed alongside general support heights for track.
pub const GENERAL_SUPPORT_SLOPE: u8 = 0x20;

/// Rotates a segment mask a number of quarter turns clockwise.
pub const fn rotate_segments(segments: u16, direction: Direction) -> u16 {
    let edges = (segments & 0xff) as u8;
    let rotated = edges.rotate_left(direction.get() as u32 * 2);
    (segments & 0xff00) | rotated as u16
}

/// Which visible tile edge a tunnel marker belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TunnelSide {
    Left,
    Right,
}

/// Tunnel mouth shapes, in the order the tunnel sprite sheets use.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TunnelType {
    StandardFlat = 0,
    StandardSlopeStart = 1,
    StandardSlopeEnd = 2,
    InvertedFlat = 3,
    InvertedSlopeStart = 4,
    InvertedSlopeEnd = 5,
    SquareFlat = 6,
    SquareSlopeStart = 7,
    SquareSlopeEnd = 8,
    InvertedSquare = 9,
    PathAndMiniGolf = 10,
    Path11 = 11,
    StandardFlatTo25Deg = 12,
    InvertedFlatTo25Deg = 13,
    SquareFlatTo25Deg = 14,
    InvertedSquareFlatTo25Deg = 15,
}

/// Tunnel heights are stored in units of this many world units.
pub const TUNNEL_HEIGHT_UNIT: i32 = 16;

#[cfg(test)]
mod tests {
    use super::segments::*;
    use super::*;

    #[test]
    fn rotating_segments_walks_the_ring() {
        // corners
        assert_eq!(rotate_segments(B4, Direction::new(1)), BC);
        assert_eq!(rotate_segments(B4, Direction::new(2)), C0);
        assert_eq!(rotate_segments(B4, Direction::new(3)), B8);
        // sides
        assert_eq!(rotate_segments(CC, Direction::new(1)), D4);
        assert_eq!(rotate_segments(D0, Direction::new(1)), C8);
        assert_eq!(rotate_segments(C8, Direction::new(1)), CC);
    }

    #[test]
    fn centre_never_rotates() {
        for direction in Direction::ALL {
            assert_eq!(rotate_segments(C4, direction), C4);
            assert_eq!(rotate_segments(ALL, direction), ALL);
        }
        assert_eq!(rotate_segments(C4 | CC | D0, Direction::new(0)), C4 | CC | D0);
        assert_eq!(rotate_segments(C4 | CC | D0, Direction::new(1)), C4 | D4 | C8);
    }
}
