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

/// Styles of steel support that can be drawn under (or above, for inverted track) a tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MetalSupportType {
    Tubes,
    Fork,
    ForkAlt,
    Boxed,
    Stick,
    StickAlt,
    ThickCentred,
    Thick,
    ThickAlt,
    ThickAltCentred,
    Truss,
    TubesInverted,
    BoxedCoated,
}
impl MetalSupportType {
    /// Some support styles are drawn with a mirrored variant on odd directions.
    pub const fn rotated(self, direction: Direction) -> MetalSupportType {
        use MetalSupportType::*;
        if !direction.is_odd() {
            return self;
        }
        match self {
            Fork => ForkAlt,
            ForkAlt => Fork,
            Stick => StickAlt,
            StickAlt => Stick,
            Thick => ThickAlt,
            ThickAlt => Thick,
            ThickCentred => ThickAltCentred,
            ThickAltCentred => ThickCentred,
            x => x,
        }
    }
}

/// Where on the tile a support column stands.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MetalSupportPlace {
    TopCorner = 0,
    LeftCorner = 1,
    RightCorner = 2,
    BottomCorner = 3,
    Centre = 4,
    TopLeftSide = 5,
    TopRightSide = 6,
    BottomLeftSide = 7,
    BottomRightSide = 8,
}

#[rustfmt::skip]
const PLACEMENT_ROTATED: [[MetalSupportPlace; 4]; 9] = {
    use MetalSupportPlace::*;
    [
        [TopCorner,       RightCorner,     BottomCorner,    LeftCorner],
        [LeftCorner,      TopCorner,       RightCorner,     BottomCorner],
        [RightCorner,     BottomCorner,    LeftCorner,      TopCorner],
        [BottomCorner,    LeftCorner,      TopCorner,       RightCorner],
        [Centre,          Centre,          Centre,          Centre],
        [TopLeftSide,     TopRightSide,    BottomRightSide, BottomLeftSide],
        [TopRightSide,    BottomRightSide, BottomLeftSide,  TopLeftSide],
        [BottomLeftSide,  TopLeftSide,     TopRightSide,    BottomRightSide],
        [BottomRightSide, BottomLeftSide,  TopLeftSide,     TopRightSide],
    ]
};

impl MetalSupportPlace {
    /// The placement a piece drawn facing `direction` uses for a support that sits at
    /// `self` when the piece faces direction 0.
    pub const fn rotated(self, direction: Direction) -> MetalSupportPlace {
        PLACEMENT_ROTATED[self as usize][direction.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placements_cycle() {
        for place in [
            MetalSupportPlace::TopCorner,
            MetalSupportPlace::LeftCorner,
            MetalSupportPlace::RightCorner,
            MetalSupportPlace::BottomCorner,
            MetalSupportPlace::Centre,
            MetalSupportPlace::TopLeftSide,
            MetalSupportPlace::TopRightSide,
            MetalSupportPlace::BottomLeftSide,
            MetalSupportPlace::BottomRightSide,
        ] {
            assert_eq!(place.rotated(Direction::new(0)), place);
            // four quarter turns bring every placement back home
            let mut current = place;
            for _ in 0..4 {
                current = current.rotated(Direction::new(1));
            }
            assert_eq!(current, place);
            // and rotating twice by one is the same as rotating once by two
            assert_eq!(
                place.rotated(Direction::new(1)).rotated(Direction::new(1)),
                place.rotated(Direction::new(2))
            );
        }
        assert_eq!(
            MetalSupportPlace::LeftCorner.rotated(Direction::new(1)),
            MetalSupportPlace::TopCorner
        );
    }

    #[test]
    fn alt_types_on_odd_directions() {
        assert_eq!(
            MetalSupportType::Fork.rotated(Direction::new(1)),
            MetalSupportType::ForkAlt
        );
        assert_eq!(
            MetalSupportType::Fork.rotated(Direction::new(2)),
            MetalSupportType::Fork
        );
        assert_eq!(
            MetalSupportType::Tubes.rotated(Direction::new(3)),
            MetalSupportType::Tubes
        );
        assert_eq!(
            MetalSupportType::TubesInverted.rotated(Direction::new(1)),
            MetalSupportType::TubesInverted
        );
    }
}
