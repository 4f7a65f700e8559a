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

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Image index 0x{0:x} does not fit in 19 bits")]
    IndexOutOfRange(u32),
    #[error("Colour {0} is out of range (max is 31)")]
    ColourOutOfRange(u8),
}

#[rustfmt::skip]
mod c {
    pub(crate) const INDEX_MASK: u32      = 0b0000_0000_0000_0111_1111_1111_1111_1111;
    pub(crate) const PRIMARY_MASK: u32    = 0b0000_0000_1111_1000_0000_0000_0000_0000;
    pub(crate) const PRIMARY_SHIFT: u32   = 19;
    pub(crate) const SECONDARY_MASK: u32  = 0b0001_1111_0000_0000_0000_0000_0000_0000;
    pub(crate) const SECONDARY_SHIFT: u32 = 24;
    /// Primary colour remap is active
    pub(crate) const REMAP: u32           = 0b0010_0000_0000_0000_0000_0000_0000_0000;
    /// Secondary colour remap is active as well
    pub(crate) const REMAP_2: u32         = 0b0100_0000_0000_0000_0000_0000_0000_0000;
    /// Drawn translucent, e.g. for ghost previews and see-through supports
    pub(crate) const TRANSLUCENT: u32     = 0b1000_0000_0000_0000_0000_0000_0000_0000;
    pub(crate) const MAX_COLOUR: u8       = 31;
}

/// A sprite index together with the colour remap flags it should be drawn with.
///
/// Track paint code receives a colour *template* (an ImageId with index 0) from the
/// session and combines it with literal sprite indices via [ImageId::with_index].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ImageId(pub u32);
impl ImageId {
    pub fn new(index: u32) -> Result<ImageId> {
        ensure!(
            index & c::INDEX_MASK == index,
            ImageError::IndexOutOfRange(index)
        );
        Ok(ImageId(index))
    }
    /// A template remapping the primary and secondary colours.
    pub fn remap(primary: u8, secondary: u8) -> Result<ImageId> {
        ensure!(
            primary <= c::MAX_COLOUR,
            ImageError::ColourOutOfRange(primary)
        );
        ensure!(
            secondary <= c::MAX_COLOUR,
            ImageError::ColourOutOfRange(secondary)
        );
        Ok(ImageId(
            c::REMAP
                | c::REMAP_2
                | ((primary as u32) << c::PRIMARY_SHIFT)
                | ((secondary as u32) << c::SECONDARY_SHIFT),
        ))
    }
    #[inline]
    pub const fn index(&self) -> u32 {
        self.0 & c::INDEX_MASK
    }
    /// Replaces the sprite index, keeping colour and flags. Bits above the index range
    /// are discarded.
    #[inline]
    pub const fn with_index(self, index: u32) -> ImageId {
        ImageId((self.0 & !c::INDEX_MASK) | (index & c::INDEX_MASK))
    }
    #[inline]
    pub const fn primary_colour(&self) -> u8 {
        ((self.0 & c::PRIMARY_MASK) >> c::PRIMARY_SHIFT) as u8
    }
    #[inline]
    pub const fn secondary_colour(&self) -> u8 {
        ((self.0 & c::SECONDARY_MASK) >> c::SECONDARY_SHIFT) as u8
    }
    #[inline]
    pub const fn is_remap(&self) -> bool {
        self.0 & c::REMAP != 0
    }
    #[inline]
    pub const fn is_translucent(&self) -> bool {
        self.0 & c::TRANSLUCENT != 0
    }
    pub const fn translucent(self) -> ImageId {
        ImageId(self.0 | c::TRANSLUCENT)
    }
}

impl From<u32> for ImageId {
    fn from(value: u32) -> Self {
        ImageId(value)
    }
}
impl From<ImageId> for u32 {
    fn from(value: ImageId) -> Self {
        value.0
    }
}
impl Debug for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("image:{}", self.index()))?;
        if self.is_remap() {
            f.write_fmt(format_args!(
                "/{}:{}",
                self.primary_colour(),
                self.secondary_colour()
            ))?;
        }
        if self.is_translucent() {
            f.write_str("/translucent")?;
        }
        Ok(())
    }
}

/// Which of the ride's colour templates an image is drawn with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ColourScheme {
    Track = 0,
    Supports = 1,
    Misc = 2,
    Special = 3,
}
impl ColourScheme {
    pub const ALL: [ColourScheme; 4] = [
        ColourScheme::Track,
        ColourScheme::Supports,
        ColourScheme::Misc,
        ColourScheme::Special,
    ];
    #[inline]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_keeps_colours() {
        let template = ImageId::remap(3, 17).unwrap();
        let image = template.with_index(26_227);
        assert_eq!(image.index(), 26_227);
        assert_eq!(image.primary_colour(), 3);
        assert_eq!(image.secondary_colour(), 17);
        assert!(image.is_remap());
        assert!(!image.is_translucent());
        assert!(image.translucent().is_translucent());
        // replacing the index again doesn't leak the old one
        assert_eq!(image.with_index(1).index(), 1);
    }

    #[test]
    fn range_checks() {
        assert!(ImageId::new(0x8_0000).is_err());
        assert_eq!(ImageId::new(0x7_ffff).unwrap().index(), 0x7_ffff);
        assert!(ImageId::remap(32, 0).is_err());
        assert!(ImageId::remap(0, 32).is_err());
    }
}
