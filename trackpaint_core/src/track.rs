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

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackError {
    #[error("Track element type {0} does not exist")]
    UnknownType(u16),
    #[error("No track element type is named `{0}`")]
    UnknownName(String),
}

macro_rules! track_elem_types {
    ($($name:ident = $value:literal => $sequences:literal,)*) => {
        /// The geometric identity of a placed piece of track.
        ///
        /// Discriminants follow the saved-game numbering, so they are stable and can be
        /// read straight out of a track element.
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum TrackElemType {
            $($name = $value,)*
        }

        impl TrackElemType {
            /// Every track element type, in numeric order.
            pub const ALL: &'static [TrackElemType] = &[$(TrackElemType::$name,)*];

            pub const fn name(&self) -> &'static str {
                match self {
                    $(TrackElemType::$name => stringify!($name),)*
                }
            }

            /// How many tiles (track sequences) the piece occupies.
            pub const fn sequence_count(&self) -> u8 {
                match self {
                    $(TrackElemType::$name => $sequences,)*
                }
            }
        }

        impl TryFrom<u16> for TrackElemType {
            type Error = TrackError;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(TrackElemType::$name),)*
                    _ => Err(TrackError::UnknownType(value)),
                }
            }
        }
    };
}

track_elem_types! {
    Flat = 0 => 1,
    EndStation = 1 => 1,
    BeginStation = 2 => 1,
    MiddleStation = 3 => 1,
    Up25 = 4 => 1,
    Up60 = 5 => 1,
    FlatToUp25 = 6 => 1,
    Up25ToUp60 = 7 => 1,
    Up60ToUp25 = 8 => 1,
    Up25ToFlat = 9 => 1,
    Down25 = 10 => 1,
    Down60 = 11 => 1,
    FlatToDown25 = 12 => 1,
    Down25ToDown60 = 13 => 1,
    Down60ToDown25 = 14 => 1,
    Down25ToFlat = 15 => 1,
    LeftQuarterTurn5Tiles = 16 => 7,
    RightQuarterTurn5Tiles = 17 => 7,
    FlatToLeftBank = 18 => 1,
    FlatToRightBank = 19 => 1,
    LeftBankToFlat = 20 => 1,
    RightBankToFlat = 21 => 1,
    BankedLeftQuarterTurn5Tiles = 22 => 7,
    BankedRightQuarterTurn5Tiles = 23 => 7,
    LeftBankToUp25 = 24 => 1,
    RightBankToUp25 = 25 => 1,
    Up25ToLeftBank = 26 => 1,
    Up25ToRightBank = 27 => 1,
    LeftBankToDown25 = 28 => 1,
    RightBankToDown25 = 29 => 1,
    Down25ToLeftBank = 30 => 1,
    Down25ToRightBank = 31 => 1,
    LeftBank = 32 => 1,
    RightBank = 33 => 1,
    LeftQuarterTurn5TilesUp25 = 34 => 7,
    RightQuarterTurn5TilesUp25 = 35 => 7,
    LeftQuarterTurn5TilesDown25 = 36 => 7,
    RightQuarterTurn5TilesDown25 = 37 => 7,
    SBendLeft = 38 => 4,
    SBendRight = 39 => 4,
    LeftVerticalLoop = 40 => 10,
    RightVerticalLoop = 41 => 10,
    LeftQuarterTurn3Tiles = 42 => 4,
    RightQuarterTurn3Tiles = 43 => 4,
    LeftBankedQuarterTurn3Tiles = 44 => 4,
    RightBankedQuarterTurn3Tiles = 45 => 4,
    LeftQuarterTurn3TilesUp25 = 46 => 4,
    RightQuarterTurn3TilesUp25 = 47 => 4,
    LeftQuarterTurn3TilesDown25 = 48 => 4,
    RightQuarterTurn3TilesDown25 = 49 => 4,
    LeftQuarterTurn1Tile = 50 => 1,
    RightQuarterTurn1Tile = 51 => 1,
    LeftTwistDownToUp = 52 => 3,
    RightTwistDownToUp = 53 => 3,
    LeftTwistUpToDown = 54 => 3,
    RightTwistUpToDown = 55 => 3,
    HalfLoopUp = 56 => 4,
    HalfLoopDown = 57 => 4,
    LeftCorkscrewUp = 58 => 3,
    RightCorkscrewUp = 59 => 3,
    LeftCorkscrewDown = 60 => 3,
    RightCorkscrewDown = 61 => 3,
    FlatToUp60 = 62 => 1,
    Up60ToFlat = 63 => 1,
    FlatToDown60 = 64 => 1,
    Down60ToFlat = 65 => 1,
    TowerBase = 66 => 9,
    TowerSection = 67 => 2,
    FlatCovered = 68 => 1,
    Up25Covered = 69 => 1,
    Up60Covered = 70 => 1,
    FlatToUp25Covered = 71 => 1,
    Up25ToUp60Covered = 72 => 1,
    Up60ToUp25Covered = 73 => 1,
    Up25ToFlatCovered = 74 => 1,
    Down25Covered = 75 => 1,
    Down60Covered = 76 => 1,
    FlatToDown25Covered = 77 => 1,
    Down25ToDown60Covered = 78 => 1,
    Down60ToDown25Covered = 79 => 1,
    Down25ToFlatCovered = 80 => 1,
    LeftQuarterTurn5TilesCovered = 81 => 7,
    RightQuarterTurn5TilesCovered = 82 => 7,
    SBendLeftCovered = 83 => 4,
    SBendRightCovered = 84 => 4,
    LeftQuarterTurn3TilesCovered = 85 => 4,
    RightQuarterTurn3TilesCovered = 86 => 4,
    LeftHalfBankedHelixUpSmall = 87 => 8,
    RightHalfBankedHelixUpSmall = 88 => 8,
    LeftHalfBankedHelixDownSmall = 89 => 8,
    RightHalfBankedHelixDownSmall = 90 => 8,
    LeftHalfBankedHelixUpLarge = 91 => 14,
    RightHalfBankedHelixUpLarge = 92 => 14,
    LeftHalfBankedHelixDownLarge = 93 => 14,
    RightHalfBankedHelixDownLarge = 94 => 14,
    LeftQuarterTurn1TileUp60 = 95 => 1,
    RightQuarterTurn1TileUp60 = 96 => 1,
    LeftQuarterTurn1TileDown60 = 97 => 1,
    RightQuarterTurn1TileDown60 = 98 => 1,
    Brakes = 99 => 1,
    Booster = 100 => 1,
    Inverted90UpToFlatQuarterLoop = 101 => 1,
    LeftQuarterBankedHelixLargeUp = 102 => 7,
    RightQuarterBankedHelixLargeUp = 103 => 7,
    LeftQuarterBankedHelixLargeDown = 104 => 7,
    RightQuarterBankedHelixLargeDown = 105 => 7,
    LeftQuarterHelixLargeUp = 106 => 7,
    RightQuarterHelixLargeUp = 107 => 7,
    LeftQuarterHelixLargeDown = 108 => 7,
    RightQuarterHelixLargeDown = 109 => 7,
    Up25LeftBanked = 110 => 1,
    Up25RightBanked = 111 => 1,
    Waterfall = 112 => 1,
    Rapids = 113 => 1,
    OnRidePhoto = 114 => 1,
    Down25LeftBanked = 115 => 1,
    Down25RightBanked = 116 => 1,
    WaterSplash = 117 => 5,
    FlatToUp60LongBase = 118 => 4,
    Up60ToFlatLongBase = 119 => 4,
    Whirlpool = 120 => 1,
    FlatToDown60LongBase = 121 => 4,
    Down60ToFlatLongBase = 122 => 4,
    CableLiftHill = 123 => 4,
    ReverseFreefallSlope = 124 => 7,
    ReverseFreefallVertical = 125 => 2,
    Up90 = 126 => 2,
    Down90 = 127 => 2,
    Up60ToUp90 = 128 => 2,
    Down90ToDown60 = 129 => 1,
    Up90ToUp60 = 130 => 1,
    Down60ToDown90 = 131 => 2,
    BrakeForDrop = 132 => 1,
    LeftEighthToDiag = 133 => 5,
    RightEighthToDiag = 134 => 5,
    LeftEighthToOrthogonal = 135 => 5,
    RightEighthToOrthogonal = 136 => 5,
    LeftEighthBankToDiag = 137 => 5,
    RightEighthBankToDiag = 138 => 5,
    LeftEighthBankToOrthogonal = 139 => 5,
    RightEighthBankToOrthogonal = 140 => 5,
    DiagFlat = 141 => 4,
    DiagUp25 = 142 => 4,
    DiagUp60 = 143 => 4,
    DiagFlatToUp25 = 144 => 4,
    DiagUp25ToUp60 = 145 => 4,
    DiagUp60ToUp25 = 146 => 4,
    DiagUp25ToFlat = 147 => 4,
    DiagDown25 = 148 => 4,
    DiagDown60 = 149 => 4,
    DiagFlatToDown25 = 150 => 4,
    DiagDown25ToDown60 = 151 => 4,
    DiagDown60ToDown25 = 152 => 4,
    DiagDown25ToFlat = 153 => 4,
    DiagFlatToUp60 = 154 => 4,
    DiagUp60ToFlat = 155 => 4,
    DiagFlatToDown60 = 156 => 4,
    DiagDown60ToFlat = 157 => 4,
    DiagFlatToLeftBank = 158 => 4,
    DiagFlatToRightBank = 159 => 4,
    DiagLeftBankToFlat = 160 => 4,
    DiagRightBankToFlat = 161 => 4,
    DiagLeftBankToUp25 = 162 => 4,
    DiagRightBankToUp25 = 163 => 4,
    DiagUp25ToLeftBank = 164 => 4,
    DiagUp25ToRightBank = 165 => 4,
    DiagLeftBankToDown25 = 166 => 4,
    DiagRightBankToDown25 = 167 => 4,
    DiagDown25ToLeftBank = 168 => 4,
    DiagDown25ToRightBank = 169 => 4,
    DiagLeftBank = 170 => 4,
    DiagRightBank = 171 => 4,
    LogFlumeReverser = 172 => 1,
    SpinningTunnel = 173 => 1,
    LeftBarrelRollUpToDown = 174 => 3,
    RightBarrelRollUpToDown = 175 => 3,
    LeftBarrelRollDownToUp = 176 => 3,
    RightBarrelRollDownToUp = 177 => 3,
    LeftBankToLeftQuarterTurn3TilesUp25 = 178 => 4,
    RightBankToRightQuarterTurn3TilesUp25 = 179 => 4,
    LeftQuarterTurn3TilesDown25ToLeftBank = 180 => 4,
    RightQuarterTurn3TilesDown25ToRightBank = 181 => 4,
    PoweredLift = 182 => 1,
    LeftLargeHalfLoopUp = 183 => 7,
    RightLargeHalfLoopUp = 184 => 7,
    RightLargeHalfLoopDown = 185 => 7,
    LeftLargeHalfLoopDown = 186 => 7,
    LeftFlyerTwistUp = 187 => 3,
    RightFlyerTwistUp = 188 => 3,
    LeftFlyerTwistDown = 189 => 3,
    RightFlyerTwistDown = 190 => 3,
    FlyerHalfLoopUp = 191 => 4,
    FlyerHalfLoopDown = 192 => 4,
    LeftFlyerCorkscrewUp = 193 => 3,
    RightFlyerCorkscrewUp = 194 => 3,
    LeftFlyerCorkscrewDown = 195 => 3,
    RightFlyerCorkscrewDown = 196 => 3,
    HeartlineTransferUp = 197 => 4,
    HeartlineTransferDown = 198 => 4,
    LeftHeartlineRoll = 199 => 6,
    RightHeartlineRoll = 200 => 6,
    MiniGolfHoleA = 201 => 2,
    MiniGolfHoleB = 202 => 2,
    MiniGolfHoleC = 203 => 2,
    MiniGolfHoleD = 204 => 3,
    MiniGolfHoleE = 205 => 3,
    MultiDimInvertedFlatToDown90QuarterLoop = 206 => 4,
    Up90ToInvertedFlatQuarterLoop = 207 => 3,
    InvertedFlatToDown90QuarterLoop = 208 => 4,
    LeftCurvedLiftHill = 209 => 4,
    RightCurvedLiftHill = 210 => 4,
    LeftReverser = 211 => 6,
    RightReverser = 212 => 6,
    AirThrustTopCap = 213 => 4,
    AirThrustVerticalDown = 214 => 2,
    AirThrustVerticalDownToLevel = 215 => 7,
    BlockBrakes = 216 => 1,
    LeftBankedQuarterTurn3TileUp25 = 217 => 4,
    RightBankedQuarterTurn3TileUp25 = 218 => 4,
    LeftBankedQuarterTurn3TileDown25 = 219 => 4,
    RightBankedQuarterTurn3TileDown25 = 220 => 4,
    LeftBankedQuarterTurn5TileUp25 = 221 => 7,
    RightBankedQuarterTurn5TileUp25 = 222 => 7,
    LeftBankedQuarterTurn5TileDown25 = 223 => 7,
    RightBankedQuarterTurn5TileDown25 = 224 => 7,
    Up25ToLeftBankedUp25 = 225 => 1,
    Up25ToRightBankedUp25 = 226 => 1,
    LeftBankedUp25ToUp25 = 227 => 1,
    RightBankedUp25ToUp25 = 228 => 1,
    Down25ToLeftBankedDown25 = 229 => 1,
    Down25ToRightBankedDown25 = 230 => 1,
    LeftBankedDown25ToDown25 = 231 => 1,
    RightBankedDown25ToDown25 = 232 => 1,
    LeftBankedFlatToLeftBankedUp25 = 233 => 1,
    RightBankedFlatToRightBankedUp25 = 234 => 1,
    LeftBankedUp25ToLeftBankedFlat = 235 => 1,
    RightBankedUp25ToRightBankedFlat = 236 => 1,
    LeftBankedFlatToLeftBankedDown25 = 237 => 1,
    RightBankedFlatToRightBankedDown25 = 238 => 1,
    LeftBankedDown25ToLeftBankedFlat = 239 => 1,
    RightBankedDown25ToRightBankedFlat = 240 => 1,
    FlatToLeftBankedUp25 = 241 => 1,
    FlatToRightBankedUp25 = 242 => 1,
    LeftBankedUp25ToFlat = 243 => 1,
    RightBankedUp25ToFlat = 244 => 1,
    FlatToLeftBankedDown25 = 245 => 1,
    FlatToRightBankedDown25 = 246 => 1,
    LeftBankedDown25ToFlat = 247 => 1,
    RightBankedDown25ToFlat = 248 => 1,
    LeftQuarterTurn1TileUp90 = 249 => 2,
    RightQuarterTurn1TileUp90 = 250 => 2,
    LeftQuarterTurn1TileDown90 = 251 => 2,
    RightQuarterTurn1TileDown90 = 252 => 2,
    MultiDimUp90ToInvertedFlatQuarterLoop = 253 => 3,
    MultiDimFlatToDown90QuarterLoop = 254 => 4,
}

impl From<TrackElemType> for u16 {
    fn from(value: TrackElemType) -> Self {
        value as u16
    }
}

impl Display for TrackElemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrackElemType {
    type Err = TrackError;

    /// Accepts either the variant name (`LeftQuarterTurn5Tiles`) or its number (`16`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<u16>() {
            return TrackElemType::try_from(value);
        }
        TrackElemType::ALL
            .iter()
            .find(|x| x.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| TrackError::UnknownName(s.to_string()))
    }
}

/// One placed unit of ride track, as seen by the painting code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TrackElement {
    pub track_type: TrackElemType,
    /// The car rides beneath the rail (lay-down and flying coasters)
    pub inverted: bool,
    /// The piece carries a chain lift
    pub has_chain: bool,
    /// Only meaningful for on-ride photo sections: the camera is firing this frame
    pub taking_photo: bool,
}
impl TrackElement {
    pub const fn new(track_type: TrackElemType) -> Self {
        Self {
            track_type,
            inverted: false,
            has_chain: false,
            taking_photo: false,
        }
    }
    pub const fn inverted(self, inverted: bool) -> Self {
        Self { inverted, ..self }
    }
    pub const fn with_chain(self, has_chain: bool) -> Self {
        Self { has_chain, ..self }
    }
    pub const fn taking_photo(self, taking_photo: bool) -> Self {
        Self {
            taking_photo,
            ..self
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum StationStyle {
    #[default]
    Plain,
    /// Adds a canopy over the platform
    Covered,
}

/// The parts of a ride that track painting looks at.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Ride {
    pub id: u16,
    pub name: String,
    pub station_style: StationStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_is_stable() {
        assert_eq!(TrackElemType::ALL.len(), 255);
        for (i, x) in TrackElemType::ALL.iter().enumerate() {
            assert_eq!(u16::from(*x) as usize, i);
            assert_eq!(TrackElemType::try_from(i as u16), Ok(*x));
        }
        assert_eq!(TrackElemType::OnRidePhoto as u16, 114);
        assert_eq!(TrackElemType::BlockBrakes as u16, 216);
        assert_eq!(
            TrackElemType::try_from(255),
            Err(TrackError::UnknownType(255))
        );
    }

    #[test]
    fn parse_by_name_or_number() {
        assert_eq!(
            "LeftQuarterTurn5Tiles".parse::<TrackElemType>(),
            Ok(TrackElemType::LeftQuarterTurn5Tiles)
        );
        assert_eq!("diagflat".parse::<TrackElemType>(), Ok(TrackElemType::DiagFlat));
        assert_eq!("99".parse::<TrackElemType>(), Ok(TrackElemType::Brakes));
        assert_eq!(
            "NotATrack".parse::<TrackElemType>(),
            Err(TrackError::UnknownName("NotATrack".to_string()))
        );
    }

    #[test]
    fn sequence_counts() {
        assert_eq!(TrackElemType::Flat.sequence_count(), 1);
        assert_eq!(TrackElemType::LeftQuarterTurn5Tiles.sequence_count(), 7);
        assert_eq!(TrackElemType::LeftVerticalLoop.sequence_count(), 10);
        assert_eq!(TrackElemType::LeftHalfBankedHelixUpLarge.sequence_count(), 14);
        assert_eq!(TrackElemType::LeftEighthToDiag.sequence_count(), 5);
        assert_eq!(TrackElemType::DiagFlat.sequence_count(), 4);
        assert!(TrackElemType::ALL.iter().all(|x| x.sequence_count() >= 1));
    }

    #[test]
    fn element_builders() {
        let element = TrackElement::new(TrackElemType::Up25)
            .inverted(true)
            .with_chain(true);
        assert!(element.inverted);
        assert!(element.has_chain);
        assert!(!element.taking_photo);
        assert_eq!(element.track_type.to_string(), "Up25");
    }
}
