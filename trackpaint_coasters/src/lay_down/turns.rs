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

//! Quarter turns, S-bends and one tile steep turns.

use trackpaint_core::{
    constants::{segments as s, TunnelType},
    coordinates::Direction,
    image::ColourScheme,
    session::PaintSession,
    supports::MetalSupportType,
    track::{Ride, TrackElement},
};

use super::geometry;
use crate::track_paint::{
    map_sequence, piece_routines, support_tile, Boxes, Layer,
    MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES,
    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES, PieceDef, Style, Supports,
    TunnelSpec, Tunnels, Turn,
};

static LEFT_QUARTER_TURN_5_TILES_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_423, 26_424, 26_425, 26_426],
            [0, 0, 0, 0],
            [26_427, 26_428, 26_429, 26_430],
            [26_431, 26_432, 26_433, 26_434],
            [0, 0, 0, 0],
            [26_435, 26_436, 26_437, 26_438],
            [26_439, 26_440, 26_441, 26_442],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(LeftCorner, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::C8 | s::CC,
        s::B8 | s::BC | s::C4 | s::C8 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[32, 32, 32, 32, 32, 32, 32],
};

static LEFT_QUARTER_TURN_5_TILES_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_443, 26_444, 26_445, 26_446],
            [0, 0, 0, 0],
            [26_447, 26_448, 26_449, 26_450],
            [26_451, 26_452, 26_453, 26_454],
            [0, 0, 0, 0],
            [26_455, 26_456, 26_457, 26_458],
            [26_459, 26_460, 26_461, 26_462],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_LEFT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            Some(support_tile!(Centre, 0, 30)),
            Some(support_tile!(LeftCorner, 0, 30)),
            None,
            Some(support_tile!(Centre, 0, 30)),
            Some(support_tile!(Centre, 0, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::C8 | s::CC,
        s::B8 | s::BC | s::C4 | s::C8 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[48, 48, 48, 48, 48, 48, 48],
};

static LEFT_QUARTER_TURN_5_TILES: PieceDef = PieceDef {
    upright: &LEFT_QUARTER_TURN_5_TILES_UPRIGHT,
    inverted: Some(&LEFT_QUARTER_TURN_5_TILES_INVERTED),
};

static BANKED_LEFT_QUARTER_TURN_5_TILES_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[
                [26_463, 26_464, 26_465, 26_466],
                [0, 0, 0, 0],
                [26_467, 26_468, 26_469, 26_470],
                [26_471, 26_472, 26_473, 26_474],
                [0, 0, 0, 0],
                [26_475, 26_476, 26_477, 26_478],
                [26_479, 26_480, 26_481, 26_482],
            ],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_LEFT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[
                [26_483, 0, 0, 26_484],
                [0, 0, 0, 0],
                [26_485, 0, 0, 26_486],
                [26_487, 0, 0, 26_488],
                [0, 0, 0, 0],
                [26_489, 0, 0, 26_490],
                [26_491, 0, 0, 26_492],
            ],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(LeftCorner, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::C8 | s::CC,
        s::B8 | s::BC | s::C4 | s::C8 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[32, 32, 32, 32, 32, 32, 32],
};

static BANKED_LEFT_QUARTER_TURN_5_TILES_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[
                [26_493, 26_494, 26_495, 26_496],
                [0, 0, 0, 0],
                [26_497, 26_498, 26_499, 26_500],
                [26_501, 26_502, 26_503, 26_504],
                [0, 0, 0, 0],
                [26_505, 26_506, 26_507, 26_508],
                [26_509, 26_510, 26_511, 26_512],
            ],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_LEFT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[
                [26_513, 0, 0, 26_514],
                [0, 0, 0, 0],
                [26_515, 0, 0, 26_516],
                [26_517, 0, 0, 26_518],
                [0, 0, 0, 0],
                [26_519, 0, 0, 26_520],
                [26_521, 0, 0, 26_522],
            ],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            Some(support_tile!(Centre, 0, 30)),
            Some(support_tile!(LeftCorner, 0, 30)),
            None,
            Some(support_tile!(Centre, 0, 30)),
            Some(support_tile!(Centre, 0, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::C8 | s::CC,
        s::B8 | s::BC | s::C4 | s::C8 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[48, 48, 48, 48, 48, 48, 48],
};

static BANKED_LEFT_QUARTER_TURN_5_TILES: PieceDef = PieceDef {
    upright: &BANKED_LEFT_QUARTER_TURN_5_TILES_UPRIGHT,
    inverted: Some(&BANKED_LEFT_QUARTER_TURN_5_TILES_INVERTED),
};

static LEFT_QUARTER_TURN_5_TILES_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_523, 26_524, 26_525, 26_526],
            [0, 0, 0, 0],
            [26_527, 26_528, 26_529, 26_530],
            [26_531, 26_532, 26_533, 26_534],
            [0, 0, 0, 0],
            [26_535, 26_536, 26_537, 26_538],
            [26_539, 26_540, 26_541, 26_542],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 8, 0)),
            None,
            Some(support_tile!(Centre, 8, 0)),
            Some(support_tile!(LeftCorner, 8, 0)),
            None,
            Some(support_tile!(Centre, 8, 0)),
            Some(support_tile!(Centre, 8, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::StandardSlopeStart)),
        exit: Some(TunnelSpec::new(8, TunnelType::StandardSlopeEnd)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::C8 | s::CC,
        s::B8 | s::BC | s::C4 | s::C8 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[72, 72, 72, 72, 72, 72, 72],
};

static LEFT_QUARTER_TURN_5_TILES_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_543, 26_544, 26_545, 26_546],
            [0, 0, 0, 0],
            [26_547, 26_548, 26_549, 26_550],
            [26_551, 26_552, 26_553, 26_554],
            [0, 0, 0, 0],
            [26_555, 26_556, 26_557, 26_558],
            [26_559, 26_560, 26_561, 26_562],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_LEFT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 8, 30)),
            None,
            Some(support_tile!(Centre, 8, 30)),
            Some(support_tile!(LeftCorner, 8, 30)),
            None,
            Some(support_tile!(Centre, 8, 30)),
            Some(support_tile!(Centre, 8, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::InvertedSlopeStart)),
        exit: Some(TunnelSpec::new(8, TunnelType::InvertedSlopeEnd)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::C8 | s::CC,
        s::B8 | s::BC | s::C4 | s::C8 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[88, 88, 88, 88, 88, 88, 88],
};

static LEFT_QUARTER_TURN_5_TILES_UP_25: PieceDef = PieceDef {
    upright: &LEFT_QUARTER_TURN_5_TILES_UP_25_UPRIGHT,
    inverted: Some(&LEFT_QUARTER_TURN_5_TILES_UP_25_INVERTED),
};

static RIGHT_QUARTER_TURN_5_TILES_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_563, 26_564, 26_565, 26_566],
            [0, 0, 0, 0],
            [26_567, 26_568, 26_569, 26_570],
            [26_571, 26_572, 26_573, 26_574],
            [0, 0, 0, 0],
            [26_575, 26_576, 26_577, 26_578],
            [26_579, 26_580, 26_581, 26_582],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 8, 0)),
            None,
            Some(support_tile!(Centre, 8, 0)),
            Some(support_tile!(RightCorner, 8, 0)),
            None,
            Some(support_tile!(Centre, 8, 0)),
            Some(support_tile!(Centre, 8, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::StandardSlopeStart)),
        exit: Some(TunnelSpec::new(8, TunnelType::StandardSlopeEnd)),
        turn: Turn::Right,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C0 | s::C4 | s::D0,
        s::B4 | s::BC | s::C0 | s::C4 | s::C8,
        s::B4 | s::B8 | s::BC | s::C4 | s::C8,
        s::B4 | s::C4 | s::C8 | s::CC,
    ],
    clearance: &[72, 72, 72, 72, 72, 72, 72],
};

static RIGHT_QUARTER_TURN_5_TILES_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_583, 26_584, 26_585, 26_586],
            [0, 0, 0, 0],
            [26_587, 26_588, 26_589, 26_590],
            [26_591, 26_592, 26_593, 26_594],
            [0, 0, 0, 0],
            [26_595, 26_596, 26_597, 26_598],
            [26_599, 26_600, 26_601, 26_602],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_5_RIGHT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 8, 30)),
            None,
            Some(support_tile!(Centre, 8, 30)),
            Some(support_tile!(RightCorner, 8, 30)),
            None,
            Some(support_tile!(Centre, 8, 30)),
            Some(support_tile!(Centre, 8, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::InvertedSlopeStart)),
        exit: Some(TunnelSpec::new(8, TunnelType::InvertedSlopeEnd)),
        turn: Turn::Right,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C0 | s::C4 | s::D0,
        s::B4 | s::BC | s::C0 | s::C4 | s::C8,
        s::B4 | s::B8 | s::BC | s::C4 | s::C8,
        s::B4 | s::C4 | s::C8 | s::CC,
    ],
    clearance: &[88, 88, 88, 88, 88, 88, 88],
};

static RIGHT_QUARTER_TURN_5_TILES_UP_25: PieceDef = PieceDef {
    upright: &RIGHT_QUARTER_TURN_5_TILES_UP_25_UPRIGHT,
    inverted: Some(&RIGHT_QUARTER_TURN_5_TILES_UP_25_INVERTED),
};

static S_BEND_LEFT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_603, 26_604, 26_605, 26_606],
            [26_607, 26_608, 26_609, 26_610],
            [26_611, 26_612, 26_613, 26_614],
            [26_615, 26_616, 26_617, 26_618],
        ],
        boxes: Boxes::Fixed(&geometry::S_BEND_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(TopLeftSide, 0, 0)),
            Some(support_tile!(BottomRightSide, 0, 0)),
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::BC | s::C4 | s::CC | s::D0 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D0 | s::D4,
        s::B4 | s::C4 | s::CC | s::D0,
    ],
    clearance: &[32, 32, 32, 32],
};

static S_BEND_LEFT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_619, 26_620, 26_621, 26_622],
            [26_623, 26_624, 26_625, 26_626],
            [26_627, 26_628, 26_629, 26_630],
            [26_631, 26_632, 26_633, 26_634],
        ],
        boxes: Boxes::Fixed(&geometry::S_BEND_LEFT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            Some(support_tile!(TopLeftSide, 0, 30)),
            Some(support_tile!(BottomRightSide, 0, 30)),
            Some(support_tile!(Centre, 0, 30)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::BC | s::C4 | s::CC | s::D0 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D0 | s::D4,
        s::B4 | s::C4 | s::CC | s::D0,
    ],
    clearance: &[48, 48, 48, 48],
};

static S_BEND_LEFT: PieceDef = PieceDef {
    upright: &S_BEND_LEFT_UPRIGHT,
    inverted: Some(&S_BEND_LEFT_INVERTED),
};

static S_BEND_RIGHT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_635, 26_636, 26_637, 26_638],
            [26_639, 26_640, 26_641, 26_642],
            [26_643, 26_644, 26_645, 26_646],
            [26_647, 26_648, 26_649, 26_650],
        ],
        boxes: Boxes::Fixed(&geometry::S_BEND_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(BottomRightSide, 0, 0)),
            Some(support_tile!(TopLeftSide, 0, 0)),
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::CC | s::D0 | s::D4,
        s::C4 | s::CC | s::D0 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static S_BEND_RIGHT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_651, 26_652, 26_653, 26_654],
            [26_655, 26_656, 26_657, 26_658],
            [26_659, 26_660, 26_661, 26_662],
            [26_663, 26_664, 26_665, 26_666],
        ],
        boxes: Boxes::Fixed(&geometry::S_BEND_RIGHT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            Some(support_tile!(BottomRightSide, 0, 30)),
            Some(support_tile!(TopLeftSide, 0, 30)),
            Some(support_tile!(Centre, 0, 30)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::CC | s::D0 | s::D4,
        s::C4 | s::CC | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static S_BEND_RIGHT: PieceDef = PieceDef {
    upright: &S_BEND_RIGHT_UPRIGHT,
    inverted: Some(&S_BEND_RIGHT_INVERTED),
};

static LEFT_QUARTER_TURN_3_TILES_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_667, 26_668, 26_669, 26_670],
            [0, 0, 0, 0],
            [26_671, 26_672, 26_673, 26_674],
            [26_675, 26_676, 26_677, 26_678],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            None,
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static LEFT_QUARTER_TURN_3_TILES_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_679, 26_680, 26_681, 26_682],
            [0, 0, 0, 0],
            [26_683, 26_684, 26_685, 26_686],
            [26_687, 26_688, 26_689, 26_690],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_LEFT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            None,
            Some(support_tile!(Centre, 0, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static LEFT_QUARTER_TURN_3_TILES: PieceDef = PieceDef {
    upright: &LEFT_QUARTER_TURN_3_TILES_UPRIGHT,
    inverted: Some(&LEFT_QUARTER_TURN_3_TILES_INVERTED),
};

static LEFT_BANKED_QUARTER_TURN_3_TILES_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[
                [26_691, 26_692, 26_693, 26_694],
                [0, 0, 0, 0],
                [26_695, 26_696, 26_697, 26_698],
                [26_699, 26_700, 26_701, 26_702],
            ],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_LEFT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[
                [26_703, 0, 0, 26_704],
                [0, 0, 0, 0],
                [26_705, 0, 0, 26_706],
                [26_707, 0, 0, 26_708],
            ],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            None,
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static LEFT_BANKED_QUARTER_TURN_3_TILES_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[
                [26_709, 26_710, 26_711, 26_712],
                [0, 0, 0, 0],
                [26_713, 26_714, 26_715, 26_716],
                [26_717, 26_718, 26_719, 26_720],
            ],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_LEFT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[
                [26_721, 0, 0, 26_722],
                [0, 0, 0, 0],
                [26_723, 0, 0, 26_724],
                [26_725, 0, 0, 26_726],
            ],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            None,
            Some(support_tile!(Centre, 0, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static LEFT_BANKED_QUARTER_TURN_3_TILES: PieceDef = PieceDef {
    upright: &LEFT_BANKED_QUARTER_TURN_3_TILES_UPRIGHT,
    inverted: Some(&LEFT_BANKED_QUARTER_TURN_3_TILES_INVERTED),
};

static LEFT_QUARTER_TURN_3_TILES_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_727, 26_728, 26_729, 26_730],
            [0, 0, 0, 0],
            [26_731, 26_732, 26_733, 26_734],
            [26_735, 26_736, 26_737, 26_738],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 8, 0)),
            None,
            None,
            Some(support_tile!(Centre, 8, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::StandardSlopeStart)),
        exit: Some(TunnelSpec::new(8, TunnelType::StandardSlopeEnd)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[72, 72, 72, 72],
};

static LEFT_QUARTER_TURN_3_TILES_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_739, 26_740, 26_741, 26_742],
            [0, 0, 0, 0],
            [26_743, 26_744, 26_745, 26_746],
            [26_747, 26_748, 26_749, 26_750],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_LEFT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 8, 30)),
            None,
            None,
            Some(support_tile!(Centre, 8, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::InvertedSlopeStart)),
        exit: Some(TunnelSpec::new(8, TunnelType::InvertedSlopeEnd)),
        turn: Turn::Left,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
    ],
    clearance: &[88, 88, 88, 88],
};

static LEFT_QUARTER_TURN_3_TILES_UP_25: PieceDef = PieceDef {
    upright: &LEFT_QUARTER_TURN_3_TILES_UP_25_UPRIGHT,
    inverted: Some(&LEFT_QUARTER_TURN_3_TILES_UP_25_INVERTED),
};

static RIGHT_QUARTER_TURN_3_TILES_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_751, 26_752, 26_753, 26_754],
            [0, 0, 0, 0],
            [26_755, 26_756, 26_757, 26_758],
            [26_759, 26_760, 26_761, 26_762],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 8, 0)),
            None,
            None,
            Some(support_tile!(Centre, 8, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::StandardSlopeStart)),
        exit: Some(TunnelSpec::new(8, TunnelType::StandardSlopeEnd)),
        turn: Turn::Right,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::BC | s::C0 | s::C4 | s::D4,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::B4 | s::C4 | s::C8 | s::CC,
    ],
    clearance: &[72, 72, 72, 72],
};

static RIGHT_QUARTER_TURN_3_TILES_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_763, 26_764, 26_765, 26_766],
            [0, 0, 0, 0],
            [26_767, 26_768, 26_769, 26_770],
            [26_771, 26_772, 26_773, 26_774],
        ],
        boxes: Boxes::Fixed(&geometry::QUARTER_TURN_3_RIGHT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 8, 30)),
            None,
            None,
            Some(support_tile!(Centre, 8, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::InvertedSlopeStart)),
        exit: Some(TunnelSpec::new(8, TunnelType::InvertedSlopeEnd)),
        turn: Turn::Right,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::BC | s::C0 | s::C4 | s::D4,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::B4 | s::C4 | s::C8 | s::CC,
    ],
    clearance: &[88, 88, 88, 88],
};

static RIGHT_QUARTER_TURN_3_TILES_UP_25: PieceDef = PieceDef {
    upright: &RIGHT_QUARTER_TURN_3_TILES_UP_25_UPRIGHT,
    inverted: Some(&RIGHT_QUARTER_TURN_3_TILES_UP_25_INVERTED),
};

static LEFT_QUARTER_TURN_1_TILE_UP_60_TRACK: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_775, 26_776, 26_777, 26_778]],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_1_STEEP_BACK),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_779, 26_780, 26_781, 26_782]],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_1_STEEP_FRONT),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 32, 0))],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::StandardSlopeStart)),
        exit: Some(TunnelSpec::new(56, TunnelType::StandardSlopeEnd)),
        turn: Turn::Left,
    },
    segments: &[s::B4 | s::C4 | s::C8 | s::CC],
    clearance: &[104],
};

static LEFT_QUARTER_TURN_1_TILE_UP_60: PieceDef = PieceDef {
    upright: &LEFT_QUARTER_TURN_1_TILE_UP_60_TRACK,
    inverted: None,
};

static RIGHT_QUARTER_TURN_1_TILE_UP_60_TRACK: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_783, 26_784, 26_785, 26_786]],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_1_STEEP_BACK),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_787, 26_788, 26_789, 26_790]],
            boxes: Boxes::Fixed(&geometry::QUARTER_TURN_1_STEEP_FRONT),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 32, 0))],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::StandardSlopeStart)),
        exit: Some(TunnelSpec::new(56, TunnelType::StandardSlopeEnd)),
        turn: Turn::Right,
    },
    segments: &[s::BC | s::C0 | s::C4 | s::D4],
    clearance: &[104],
};

static RIGHT_QUARTER_TURN_1_TILE_UP_60: PieceDef = PieceDef {
    upright: &RIGHT_QUARTER_TURN_1_TILE_UP_60_TRACK,
    inverted: None,
};

piece_routines! {
    left_quarter_turn_5_tiles => LEFT_QUARTER_TURN_5_TILES,
    banked_left_quarter_turn_5_tiles => BANKED_LEFT_QUARTER_TURN_5_TILES,
    left_quarter_turn_5_tiles_up_25 => LEFT_QUARTER_TURN_5_TILES_UP_25,
    right_quarter_turn_5_tiles_up_25 => RIGHT_QUARTER_TURN_5_TILES_UP_25,
    s_bend_left => S_BEND_LEFT,
    s_bend_right => S_BEND_RIGHT,
    left_quarter_turn_3_tiles => LEFT_QUARTER_TURN_3_TILES,
    left_banked_quarter_turn_3_tiles => LEFT_BANKED_QUARTER_TURN_3_TILES,
    left_quarter_turn_3_tiles_up_25 => LEFT_QUARTER_TURN_3_TILES_UP_25,
    right_quarter_turn_3_tiles_up_25 => RIGHT_QUARTER_TURN_3_TILES_UP_25,
    left_quarter_turn_1_tile_up_60 => LEFT_QUARTER_TURN_1_TILE_UP_60,
    right_quarter_turn_1_tile_up_60 => RIGHT_QUARTER_TURN_1_TILE_UP_60,
}

/// Right turns are left turns driven backwards.
pub(super) fn right_quarter_turn_5_tiles(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES, sequence)
    else {
        return;
    };
    left_quarter_turn_5_tiles(session, ride, sequence, direction.rotate(3), height, element);
}

pub(super) fn banked_right_quarter_turn_5_tiles(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES, sequence)
    else {
        return;
    };
    banked_left_quarter_turn_5_tiles(session, ride, sequence, direction.rotate(3), height, element);
}

/// Descending turns are the opposite-hand climbing turn walked from its far end.
pub(super) fn left_quarter_turn_5_tiles_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES, sequence)
    else {
        return;
    };
    right_quarter_turn_5_tiles_up_25(session, ride, sequence, direction.rotate(1), height, element);
}

pub(super) fn right_quarter_turn_5_tiles_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES, sequence)
    else {
        return;
    };
    left_quarter_turn_5_tiles_up_25(session, ride, sequence, direction.rotate(3), height, element);
}

pub(super) fn right_quarter_turn_3_tiles(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES, sequence)
    else {
        return;
    };
    left_quarter_turn_3_tiles(session, ride, sequence, direction.rotate(3), height, element);
}

pub(super) fn right_banked_quarter_turn_3_tiles(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES, sequence)
    else {
        return;
    };
    left_banked_quarter_turn_3_tiles(session, ride, sequence, direction.rotate(3), height, element);
}

pub(super) fn left_quarter_turn_3_tiles_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES, sequence)
    else {
        return;
    };
    right_quarter_turn_3_tiles_up_25(session, ride, sequence, direction.rotate(1), height, element);
}

pub(super) fn right_quarter_turn_3_tiles_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES, sequence)
    else {
        return;
    };
    left_quarter_turn_3_tiles_up_25(session, ride, sequence, direction.rotate(3), height, element);
}

pub(super) fn left_quarter_turn_1_tile_down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    right_quarter_turn_1_tile_up_60(session, ride, sequence, direction.rotate(1), height, element);
}

pub(super) fn right_quarter_turn_1_tile_down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    left_quarter_turn_1_tile_up_60(session, ride, sequence, direction.rotate(3), height, element);
}
