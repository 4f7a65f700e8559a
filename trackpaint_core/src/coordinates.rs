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

use std::fmt::Debug;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Size of a map tile in world units.
pub const TILE_SIZE: i32 = 32;

/// A 2D position on the map, in world units (32 per tile).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CoordsXY {
    pub x: i32,
    pub y: i32,
}
impl CoordsXY {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    /// The position of the tile with the given tile indices.
    pub const fn from_tile(tile_x: i32, tile_y: i32) -> Self {
        Self {
            x: tile_x * TILE_SIZE,
            y: tile_y * TILE_SIZE,
        }
    }
}
impl Debug for CoordsXY {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, {}]", self.x, self.y))
    }
}
impl FromStr for CoordsXY {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pieces = s.split(',').map(str::trim).collect::<Vec<_>>();
        if pieces.len() != 2 {
            bail!("Expected two comma-separated coordinates, got {s:?}");
        }
        let x = pieces[0].parse().context("Invalid x coordinate")?;
        let y = pieces[1].parse().context("Invalid y coordinate")?;
        Ok(CoordsXY { x, y })
    }
}

/// A 3D offset or extent, in world units. z is vertical.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CoordsXYZ {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}
impl CoordsXYZ {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
    /// Swaps x and y, leaving z alone. This is how offsets follow a quarter rotation
    /// of an otherwise symmetric piece.
    #[inline]
    pub const fn swap_xy(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            z: self.z,
        }
    }
    #[inline]
    pub const fn raise(&self, dz: i32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: self.z + dz,
        }
    }
}
impl Debug for CoordsXYZ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, {}, {}]", self.x, self.y, self.z))
    }
}

/// An axis-aligned bounding box used by the paint session's sorting pass.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoundBoxXYZ {
    pub offset: CoordsXYZ,
    pub length: CoordsXYZ,
}
impl BoundBoxXYZ {
    pub const fn new(offset: CoordsXYZ, length: CoordsXYZ) -> Self {
        Self { offset, length }
    }
    #[inline]
    pub const fn swap_xy(&self) -> Self {
        Self {
            offset: self.offset.swap_xy(),
            length: self.length.swap_xy(),
        }
    }
}
impl Debug for BoundBoxXYZ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}+{:?}", self.offset, self.length))
    }
}

/// One of the four compass directions a track piece can face.
///
/// The value is always in 0..4; every constructor masks it. Rotation is clockwise in
/// units of 90 degrees, matching the order of the sprite tables.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
#[repr(transparent)]
pub struct Direction(u8);
impl Direction {
    pub const ALL: [Direction; 4] = [Direction(0), Direction(1), Direction(2), Direction(3)];

    pub const fn new(value: u8) -> Self {
        Direction(value & 3)
    }
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
    /// Rotates clockwise by `quarter_turns`. Counterclockwise rotation is `rotate(3)`.
    #[inline]
    pub const fn rotate(&self, quarter_turns: u8) -> Self {
        Direction(self.0.wrapping_add(quarter_turns) & 3)
    }
    #[inline]
    pub const fn is_odd(&self) -> bool {
        self.0 & 1 != 0
    }
}
impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        Direction::new(value)
    }
}
impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        value.0
    }
}
impl Debug for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("dir:{}", self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_wraps() {
        assert_eq!(Direction::new(5), Direction::new(1));
        assert_eq!(Direction::new(3).rotate(1), Direction::new(0));
        assert_eq!(Direction::new(0).rotate(3), Direction::new(3));
        assert_eq!(Direction::new(2).rotate(2).get(), 0);
        assert!(Direction::new(3).is_odd());
        assert!(!Direction::new(2).is_odd());
    }

    #[test]
    fn swap_xy_keeps_height() {
        let bb = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3));
        assert_eq!(
            bb.swap_xy(),
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 8), CoordsXYZ::new(20, 32, 3))
        );
        assert_eq!(CoordsXYZ::new(1, 2, 3).raise(5), CoordsXYZ::new(1, 2, 8));
    }

    #[test]
    fn parse_coords() {
        assert_eq!(
            "64, 96".parse::<CoordsXY>().unwrap(),
            CoordsXY::from_tile(2, 3)
        );
        assert!("1,2,3".parse::<CoordsXY>().is_err());
        assert!("a,2".parse::<CoordsXY>().is_err());
    }
}
