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

//! Eighth turns onto the diagonal, and the diagonal pieces themselves.
//!
//! Diagonal track is drawn once per piece, from whichever tile sorts last for the
//! direction; the other three tiles only carry supports and blocked segments.

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
    map_sequence, piece_routines, support_tile, Boxes, Layer, MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL,
    PieceDef, Style, Supports, TunnelSpec, Tunnels, Turn,
};

static LEFT_EIGHTH_TO_DIAG_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_855, 26_856, 26_857, 26_858],
            [26_859, 26_860, 26_861, 26_862],
            [26_863, 26_864, 26_865, 26_866],
            [0, 0, 0, 0],
            [26_867, 26_868, 26_869, 26_870],
        ],
        boxes: Boxes::Fixed(&geometry::EIGHTH_TO_DIAG_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            None,
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: None,
        turn: Turn::Straight,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8,
        s::BC | s::C0 | s::C4 | s::D4,
    ],
    clearance: &[32, 32, 32, 32, 32],
};

static LEFT_EIGHTH_TO_DIAG_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_871, 26_872, 26_873, 26_874],
            [26_875, 26_876, 26_877, 26_878],
            [26_879, 26_880, 26_881, 26_882],
            [0, 0, 0, 0],
            [26_883, 26_884, 26_885, 26_886],
        ],
        boxes: Boxes::Fixed(&geometry::EIGHTH_TO_DIAG_LEFT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            None,
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        exit: None,
        turn: Turn::Straight,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8,
        s::BC | s::C0 | s::C4 | s::D4,
    ],
    clearance: &[48, 48, 48, 48, 48],
};

static LEFT_EIGHTH_TO_DIAG: PieceDef = PieceDef {
    upright: &LEFT_EIGHTH_TO_DIAG_UPRIGHT,
    inverted: Some(&LEFT_EIGHTH_TO_DIAG_INVERTED),
};

static RIGHT_EIGHTH_TO_DIAG_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_887, 26_888, 26_889, 26_890],
            [26_891, 26_892, 26_893, 26_894],
            [26_895, 26_896, 26_897, 26_898],
            [0, 0, 0, 0],
            [26_899, 26_900, 26_901, 26_902],
        ],
        boxes: Boxes::Fixed(&geometry::EIGHTH_TO_DIAG_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(RightCorner, 0, 0)),
            None,
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: None,
        turn: Turn::Straight,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8,
    ],
    clearance: &[32, 32, 32, 32, 32],
};

static RIGHT_EIGHTH_TO_DIAG_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_903, 26_904, 26_905, 26_906],
            [26_907, 26_908, 26_909, 26_910],
            [26_911, 26_912, 26_913, 26_914],
            [0, 0, 0, 0],
            [26_915, 26_916, 26_917, 26_918],
        ],
        boxes: Boxes::Fixed(&geometry::EIGHTH_TO_DIAG_RIGHT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            Some(support_tile!(RightCorner, 0, 30)),
            None,
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        exit: None,
        turn: Turn::Straight,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8,
    ],
    clearance: &[48, 48, 48, 48, 48],
};

static RIGHT_EIGHTH_TO_DIAG: PieceDef = PieceDef {
    upright: &RIGHT_EIGHTH_TO_DIAG_UPRIGHT,
    inverted: Some(&RIGHT_EIGHTH_TO_DIAG_INVERTED),
};

static LEFT_EIGHTH_BANK_TO_DIAG_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_919, 26_920, 26_921, 26_922],
            [26_923, 26_924, 26_925, 26_926],
            [26_927, 26_928, 26_929, 26_930],
            [0, 0, 0, 0],
            [26_931, 26_932, 26_933, 26_934],
        ],
        boxes: Boxes::Fixed(&geometry::EIGHTH_TO_DIAG_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            None,
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: None,
        turn: Turn::Straight,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8,
        s::BC | s::C0 | s::C4 | s::D4,
    ],
    clearance: &[32, 32, 32, 32, 32],
};

static LEFT_EIGHTH_BANK_TO_DIAG_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_935, 26_936, 26_937, 26_938],
            [26_939, 26_940, 26_941, 26_942],
            [26_943, 26_944, 26_945, 26_946],
            [0, 0, 0, 0],
            [26_947, 26_948, 26_949, 26_950],
        ],
        boxes: Boxes::Fixed(&geometry::EIGHTH_TO_DIAG_LEFT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            None,
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        exit: None,
        turn: Turn::Straight,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8,
        s::BC | s::C0 | s::C4 | s::D4,
    ],
    clearance: &[48, 48, 48, 48, 48],
};

static LEFT_EIGHTH_BANK_TO_DIAG: PieceDef = PieceDef {
    upright: &LEFT_EIGHTH_BANK_TO_DIAG_UPRIGHT,
    inverted: Some(&LEFT_EIGHTH_BANK_TO_DIAG_INVERTED),
};

static RIGHT_EIGHTH_BANK_TO_DIAG_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_951, 26_952, 26_953, 26_954],
            [26_955, 26_956, 26_957, 26_958],
            [26_959, 26_960, 26_961, 26_962],
            [0, 0, 0, 0],
            [26_963, 26_964, 26_965, 26_966],
        ],
        boxes: Boxes::Fixed(&geometry::EIGHTH_TO_DIAG_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(RightCorner, 0, 0)),
            None,
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: None,
        turn: Turn::Straight,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8,
    ],
    clearance: &[32, 32, 32, 32, 32],
};

static RIGHT_EIGHTH_BANK_TO_DIAG_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_967, 26_968, 26_969, 26_970],
            [26_971, 26_972, 26_973, 26_974],
            [26_975, 26_976, 26_977, 26_978],
            [0, 0, 0, 0],
            [26_979, 26_980, 26_981, 26_982],
        ],
        boxes: Boxes::Fixed(&geometry::EIGHTH_TO_DIAG_RIGHT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            Some(support_tile!(RightCorner, 0, 30)),
            None,
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        exit: None,
        turn: Turn::Straight,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8,
    ],
    clearance: &[48, 48, 48, 48, 48],
};

static RIGHT_EIGHTH_BANK_TO_DIAG: PieceDef = PieceDef {
    upright: &RIGHT_EIGHTH_BANK_TO_DIAG_UPRIGHT,
    inverted: Some(&RIGHT_EIGHTH_BANK_TO_DIAG_INVERTED),
};

static DIAG_FLAT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 26_983],
            [26_984, 0, 0, 0],
            [0, 0, 26_985, 0],
            [0, 26_986, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 26_987],
            [26_988, 0, 0, 0],
            [0, 0, 26_989, 0],
            [0, 26_990, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            Some(support_tile!(RightCorner, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static DIAG_FLAT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 26_991],
            [26_992, 0, 0, 0],
            [0, 0, 26_993, 0],
            [0, 26_994, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 26_995],
            [26_996, 0, 0, 0],
            [0, 0, 26_997, 0],
            [0, 26_998, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            Some(support_tile!(RightCorner, 0, 30)),
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_FLAT: PieceDef = PieceDef {
    upright: &DIAG_FLAT_UPRIGHT,
    inverted: Some(&DIAG_FLAT_INVERTED),
};

static DIAG_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 26_999],
            [27_000, 0, 0, 0],
            [0, 0, 27_001, 0],
            [0, 27_002, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_003],
            [27_004, 0, 0, 0],
            [0, 0, 27_005, 0],
            [0, 27_006, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 8, 0)),
            Some(support_tile!(RightCorner, 8, 0)),
            Some(support_tile!(BottomCorner, 8, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 56, 56],
};

static DIAG_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_007],
            [27_008, 0, 0, 0],
            [0, 0, 27_009, 0],
            [0, 27_010, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_011],
            [27_012, 0, 0, 0],
            [0, 0, 27_013, 0],
            [0, 27_014, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 8, 30)),
            Some(support_tile!(RightCorner, 8, 30)),
            Some(support_tile!(BottomCorner, 8, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[72, 72, 72, 72],
};

static DIAG_UP_25: PieceDef = PieceDef {
    upright: &DIAG_UP_25_UPRIGHT,
    inverted: Some(&DIAG_UP_25_INVERTED),
};

static DIAG_UP_60_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_015],
            [27_016, 0, 0, 0],
            [0, 0, 27_017, 0],
            [0, 27_018, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_019],
            [27_020, 0, 0, 0],
            [0, 0, 27_021, 0],
            [0, 27_022, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 32, 0)),
            Some(support_tile!(RightCorner, 32, 0)),
            Some(support_tile!(BottomCorner, 32, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[104, 104, 104, 104],
};

static DIAG_UP_60_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_023],
            [27_024, 0, 0, 0],
            [0, 0, 27_025, 0],
            [0, 27_026, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_027],
            [27_028, 0, 0, 0],
            [0, 0, 27_029, 0],
            [0, 27_030, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 32, 30)),
            Some(support_tile!(RightCorner, 32, 30)),
            Some(support_tile!(BottomCorner, 32, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[120, 120, 120, 120],
};

static DIAG_UP_60: PieceDef = PieceDef {
    upright: &DIAG_UP_60_UPRIGHT,
    inverted: Some(&DIAG_UP_60_INVERTED),
};

static DIAG_FLAT_TO_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_031],
            [27_032, 0, 0, 0],
            [0, 0, 27_033, 0],
            [0, 27_034, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_035],
            [27_036, 0, 0, 0],
            [0, 0, 27_037, 0],
            [0, 27_038, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 0)),
            Some(support_tile!(RightCorner, 3, 0)),
            Some(support_tile!(BottomCorner, 3, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_FLAT_TO_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_039],
            [27_040, 0, 0, 0],
            [0, 0, 27_041, 0],
            [0, 27_042, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_043],
            [27_044, 0, 0, 0],
            [0, 0, 27_045, 0],
            [0, 27_046, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 30)),
            Some(support_tile!(RightCorner, 3, 30)),
            Some(support_tile!(BottomCorner, 3, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[64, 64, 64, 64],
};

static DIAG_FLAT_TO_UP_25: PieceDef = PieceDef {
    upright: &DIAG_FLAT_TO_UP_25_UPRIGHT,
    inverted: Some(&DIAG_FLAT_TO_UP_25_INVERTED),
};

static DIAG_UP_25_TO_UP_60_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_047],
            [27_048, 0, 0, 0],
            [0, 0, 27_049, 0],
            [0, 27_050, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_051],
            [27_052, 0, 0, 0],
            [0, 0, 27_053, 0],
            [0, 27_054, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 12, 0)),
            Some(support_tile!(RightCorner, 12, 0)),
            Some(support_tile!(BottomCorner, 12, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[72, 72, 72, 72],
};

static DIAG_UP_25_TO_UP_60_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_055],
            [27_056, 0, 0, 0],
            [0, 0, 27_057, 0],
            [0, 27_058, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_059],
            [27_060, 0, 0, 0],
            [0, 0, 27_061, 0],
            [0, 27_062, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 12, 30)),
            Some(support_tile!(RightCorner, 12, 30)),
            Some(support_tile!(BottomCorner, 12, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[88, 88, 88, 88],
};

static DIAG_UP_25_TO_UP_60: PieceDef = PieceDef {
    upright: &DIAG_UP_25_TO_UP_60_UPRIGHT,
    inverted: Some(&DIAG_UP_25_TO_UP_60_INVERTED),
};

static DIAG_UP_60_TO_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_063],
            [27_064, 0, 0, 0],
            [0, 0, 27_065, 0],
            [0, 27_066, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_067],
            [27_068, 0, 0, 0],
            [0, 0, 27_069, 0],
            [0, 27_070, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 20, 0)),
            Some(support_tile!(RightCorner, 20, 0)),
            Some(support_tile!(BottomCorner, 20, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[72, 72, 72, 72],
};

static DIAG_UP_60_TO_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_071],
            [27_072, 0, 0, 0],
            [0, 0, 27_073, 0],
            [0, 27_074, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_075],
            [27_076, 0, 0, 0],
            [0, 0, 27_077, 0],
            [0, 27_078, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 20, 30)),
            Some(support_tile!(RightCorner, 20, 30)),
            Some(support_tile!(BottomCorner, 20, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[88, 88, 88, 88],
};

static DIAG_UP_60_TO_UP_25: PieceDef = PieceDef {
    upright: &DIAG_UP_60_TO_UP_25_UPRIGHT,
    inverted: Some(&DIAG_UP_60_TO_UP_25_INVERTED),
};

static DIAG_UP_25_TO_FLAT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_079],
            [27_080, 0, 0, 0],
            [0, 0, 27_081, 0],
            [0, 27_082, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_083],
            [27_084, 0, 0, 0],
            [0, 0, 27_085, 0],
            [0, 27_086, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 0)),
            Some(support_tile!(RightCorner, 6, 0)),
            Some(support_tile!(BottomCorner, 6, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[40, 40, 40, 40],
};

static DIAG_UP_25_TO_FLAT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_087],
            [27_088, 0, 0, 0],
            [0, 0, 27_089, 0],
            [0, 27_090, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_091],
            [27_092, 0, 0, 0],
            [0, 0, 27_093, 0],
            [0, 27_094, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 30)),
            Some(support_tile!(RightCorner, 6, 30)),
            Some(support_tile!(BottomCorner, 6, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 56, 56],
};

static DIAG_UP_25_TO_FLAT: PieceDef = PieceDef {
    upright: &DIAG_UP_25_TO_FLAT_UPRIGHT,
    inverted: Some(&DIAG_UP_25_TO_FLAT_INVERTED),
};

static DIAG_DOWN_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_095],
            [27_096, 0, 0, 0],
            [0, 0, 27_097, 0],
            [0, 27_098, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_099],
            [27_100, 0, 0, 0],
            [0, 0, 27_101, 0],
            [0, 27_102, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 8, 0)),
            Some(support_tile!(RightCorner, 8, 0)),
            Some(support_tile!(BottomCorner, 8, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 56, 56],
};

static DIAG_DOWN_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_103],
            [27_104, 0, 0, 0],
            [0, 0, 27_105, 0],
            [0, 27_106, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_107],
            [27_108, 0, 0, 0],
            [0, 0, 27_109, 0],
            [0, 27_110, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 8, 30)),
            Some(support_tile!(RightCorner, 8, 30)),
            Some(support_tile!(BottomCorner, 8, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[72, 72, 72, 72],
};

static DIAG_DOWN_25: PieceDef = PieceDef {
    upright: &DIAG_DOWN_25_UPRIGHT,
    inverted: Some(&DIAG_DOWN_25_INVERTED),
};

static DIAG_DOWN_60_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_111],
            [27_112, 0, 0, 0],
            [0, 0, 27_113, 0],
            [0, 27_114, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_115],
            [27_116, 0, 0, 0],
            [0, 0, 27_117, 0],
            [0, 27_118, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 32, 0)),
            Some(support_tile!(RightCorner, 32, 0)),
            Some(support_tile!(BottomCorner, 32, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[104, 104, 104, 104],
};

static DIAG_DOWN_60_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_119],
            [27_120, 0, 0, 0],
            [0, 0, 27_121, 0],
            [0, 27_122, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_123],
            [27_124, 0, 0, 0],
            [0, 0, 27_125, 0],
            [0, 27_126, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 32, 30)),
            Some(support_tile!(RightCorner, 32, 30)),
            Some(support_tile!(BottomCorner, 32, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[120, 120, 120, 120],
};

static DIAG_DOWN_60: PieceDef = PieceDef {
    upright: &DIAG_DOWN_60_UPRIGHT,
    inverted: Some(&DIAG_DOWN_60_INVERTED),
};

static DIAG_FLAT_TO_DOWN_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_127],
            [27_128, 0, 0, 0],
            [0, 0, 27_129, 0],
            [0, 27_130, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_131],
            [27_132, 0, 0, 0],
            [0, 0, 27_133, 0],
            [0, 27_134, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 0)),
            Some(support_tile!(RightCorner, 6, 0)),
            Some(support_tile!(BottomCorner, 6, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[40, 40, 40, 40],
};

static DIAG_FLAT_TO_DOWN_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_135],
            [27_136, 0, 0, 0],
            [0, 0, 27_137, 0],
            [0, 27_138, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_139],
            [27_140, 0, 0, 0],
            [0, 0, 27_141, 0],
            [0, 27_142, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 30)),
            Some(support_tile!(RightCorner, 6, 30)),
            Some(support_tile!(BottomCorner, 6, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 56, 56],
};

static DIAG_FLAT_TO_DOWN_25: PieceDef = PieceDef {
    upright: &DIAG_FLAT_TO_DOWN_25_UPRIGHT,
    inverted: Some(&DIAG_FLAT_TO_DOWN_25_INVERTED),
};

static DIAG_DOWN_25_TO_DOWN_60_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_143],
            [27_144, 0, 0, 0],
            [0, 0, 27_145, 0],
            [0, 27_146, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_147],
            [27_148, 0, 0, 0],
            [0, 0, 27_149, 0],
            [0, 27_150, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 20, 0)),
            Some(support_tile!(RightCorner, 20, 0)),
            Some(support_tile!(BottomCorner, 20, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[72, 72, 72, 72],
};

static DIAG_DOWN_25_TO_DOWN_60_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_151],
            [27_152, 0, 0, 0],
            [0, 0, 27_153, 0],
            [0, 27_154, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_155],
            [27_156, 0, 0, 0],
            [0, 0, 27_157, 0],
            [0, 27_158, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 20, 30)),
            Some(support_tile!(RightCorner, 20, 30)),
            Some(support_tile!(BottomCorner, 20, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[88, 88, 88, 88],
};

static DIAG_DOWN_25_TO_DOWN_60: PieceDef = PieceDef {
    upright: &DIAG_DOWN_25_TO_DOWN_60_UPRIGHT,
    inverted: Some(&DIAG_DOWN_25_TO_DOWN_60_INVERTED),
};

static DIAG_DOWN_60_TO_DOWN_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_159],
            [27_160, 0, 0, 0],
            [0, 0, 27_161, 0],
            [0, 27_162, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_163],
            [27_164, 0, 0, 0],
            [0, 0, 27_165, 0],
            [0, 27_166, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 12, 0)),
            Some(support_tile!(RightCorner, 12, 0)),
            Some(support_tile!(BottomCorner, 12, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[72, 72, 72, 72],
};

static DIAG_DOWN_60_TO_DOWN_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_167],
            [27_168, 0, 0, 0],
            [0, 0, 27_169, 0],
            [0, 27_170, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_171],
            [27_172, 0, 0, 0],
            [0, 0, 27_173, 0],
            [0, 27_174, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 12, 30)),
            Some(support_tile!(RightCorner, 12, 30)),
            Some(support_tile!(BottomCorner, 12, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[88, 88, 88, 88],
};

static DIAG_DOWN_60_TO_DOWN_25: PieceDef = PieceDef {
    upright: &DIAG_DOWN_60_TO_DOWN_25_UPRIGHT,
    inverted: Some(&DIAG_DOWN_60_TO_DOWN_25_INVERTED),
};

static DIAG_DOWN_25_TO_FLAT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_175],
            [27_176, 0, 0, 0],
            [0, 0, 27_177, 0],
            [0, 27_178, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_179],
            [27_180, 0, 0, 0],
            [0, 0, 27_181, 0],
            [0, 27_182, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 0)),
            Some(support_tile!(RightCorner, 3, 0)),
            Some(support_tile!(BottomCorner, 3, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_DOWN_25_TO_FLAT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_183],
            [27_184, 0, 0, 0],
            [0, 0, 27_185, 0],
            [0, 27_186, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_187],
            [27_188, 0, 0, 0],
            [0, 0, 27_189, 0],
            [0, 27_190, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 30)),
            Some(support_tile!(RightCorner, 3, 30)),
            Some(support_tile!(BottomCorner, 3, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[64, 64, 64, 64],
};

static DIAG_DOWN_25_TO_FLAT: PieceDef = PieceDef {
    upright: &DIAG_DOWN_25_TO_FLAT_UPRIGHT,
    inverted: Some(&DIAG_DOWN_25_TO_FLAT_INVERTED),
};

static DIAG_FLAT_TO_LEFT_BANK_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_191],
            [27_192, 0, 0, 0],
            [0, 0, 27_193, 0],
            [0, 27_194, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            Some(support_tile!(RightCorner, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static DIAG_FLAT_TO_LEFT_BANK_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_195],
            [27_196, 0, 0, 0],
            [0, 0, 27_197, 0],
            [0, 27_198, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            Some(support_tile!(RightCorner, 0, 30)),
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_FLAT_TO_LEFT_BANK: PieceDef = PieceDef {
    upright: &DIAG_FLAT_TO_LEFT_BANK_UPRIGHT,
    inverted: Some(&DIAG_FLAT_TO_LEFT_BANK_INVERTED),
};

static DIAG_FLAT_TO_RIGHT_BANK_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_199],
            [27_200, 0, 0, 0],
            [0, 0, 27_201, 0],
            [0, 27_202, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            Some(support_tile!(RightCorner, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static DIAG_FLAT_TO_RIGHT_BANK_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_203],
            [27_204, 0, 0, 0],
            [0, 0, 27_205, 0],
            [0, 27_206, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            Some(support_tile!(RightCorner, 0, 30)),
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_FLAT_TO_RIGHT_BANK: PieceDef = PieceDef {
    upright: &DIAG_FLAT_TO_RIGHT_BANK_UPRIGHT,
    inverted: Some(&DIAG_FLAT_TO_RIGHT_BANK_INVERTED),
};

static DIAG_LEFT_BANK_TO_FLAT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_207],
            [27_208, 0, 0, 0],
            [0, 0, 27_209, 0],
            [0, 27_210, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            Some(support_tile!(RightCorner, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static DIAG_LEFT_BANK_TO_FLAT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_211],
            [27_212, 0, 0, 0],
            [0, 0, 27_213, 0],
            [0, 27_214, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            Some(support_tile!(RightCorner, 0, 30)),
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_LEFT_BANK_TO_FLAT: PieceDef = PieceDef {
    upright: &DIAG_LEFT_BANK_TO_FLAT_UPRIGHT,
    inverted: Some(&DIAG_LEFT_BANK_TO_FLAT_INVERTED),
};

static DIAG_RIGHT_BANK_TO_FLAT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_215],
            [27_216, 0, 0, 0],
            [0, 0, 27_217, 0],
            [0, 27_218, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            Some(support_tile!(RightCorner, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static DIAG_RIGHT_BANK_TO_FLAT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_219],
            [27_220, 0, 0, 0],
            [0, 0, 27_221, 0],
            [0, 27_222, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            Some(support_tile!(RightCorner, 0, 30)),
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_RIGHT_BANK_TO_FLAT: PieceDef = PieceDef {
    upright: &DIAG_RIGHT_BANK_TO_FLAT_UPRIGHT,
    inverted: Some(&DIAG_RIGHT_BANK_TO_FLAT_INVERTED),
};

static DIAG_LEFT_BANK_TO_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_223],
            [27_224, 0, 0, 0],
            [0, 0, 27_225, 0],
            [0, 27_226, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 0)),
            Some(support_tile!(RightCorner, 3, 0)),
            Some(support_tile!(BottomCorner, 3, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_LEFT_BANK_TO_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_227],
            [27_228, 0, 0, 0],
            [0, 0, 27_229, 0],
            [0, 27_230, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 30)),
            Some(support_tile!(RightCorner, 3, 30)),
            Some(support_tile!(BottomCorner, 3, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[64, 64, 64, 64],
};

static DIAG_LEFT_BANK_TO_UP_25: PieceDef = PieceDef {
    upright: &DIAG_LEFT_BANK_TO_UP_25_UPRIGHT,
    inverted: Some(&DIAG_LEFT_BANK_TO_UP_25_INVERTED),
};

static DIAG_RIGHT_BANK_TO_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_231],
            [27_232, 0, 0, 0],
            [0, 0, 27_233, 0],
            [0, 27_234, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 0)),
            Some(support_tile!(RightCorner, 3, 0)),
            Some(support_tile!(BottomCorner, 3, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_RIGHT_BANK_TO_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_235],
            [27_236, 0, 0, 0],
            [0, 0, 27_237, 0],
            [0, 27_238, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 30)),
            Some(support_tile!(RightCorner, 3, 30)),
            Some(support_tile!(BottomCorner, 3, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[64, 64, 64, 64],
};

static DIAG_RIGHT_BANK_TO_UP_25: PieceDef = PieceDef {
    upright: &DIAG_RIGHT_BANK_TO_UP_25_UPRIGHT,
    inverted: Some(&DIAG_RIGHT_BANK_TO_UP_25_INVERTED),
};

static DIAG_UP_25_TO_LEFT_BANK_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_239],
            [27_240, 0, 0, 0],
            [0, 0, 27_241, 0],
            [0, 27_242, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 0)),
            Some(support_tile!(RightCorner, 6, 0)),
            Some(support_tile!(BottomCorner, 6, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[40, 40, 40, 40],
};

static DIAG_UP_25_TO_LEFT_BANK_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_243],
            [27_244, 0, 0, 0],
            [0, 0, 27_245, 0],
            [0, 27_246, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 30)),
            Some(support_tile!(RightCorner, 6, 30)),
            Some(support_tile!(BottomCorner, 6, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 56, 56],
};

static DIAG_UP_25_TO_LEFT_BANK: PieceDef = PieceDef {
    upright: &DIAG_UP_25_TO_LEFT_BANK_UPRIGHT,
    inverted: Some(&DIAG_UP_25_TO_LEFT_BANK_INVERTED),
};

static DIAG_UP_25_TO_RIGHT_BANK_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_247],
            [27_248, 0, 0, 0],
            [0, 0, 27_249, 0],
            [0, 27_250, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 0)),
            Some(support_tile!(RightCorner, 6, 0)),
            Some(support_tile!(BottomCorner, 6, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[40, 40, 40, 40],
};

static DIAG_UP_25_TO_RIGHT_BANK_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_251],
            [27_252, 0, 0, 0],
            [0, 0, 27_253, 0],
            [0, 27_254, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 30)),
            Some(support_tile!(RightCorner, 6, 30)),
            Some(support_tile!(BottomCorner, 6, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 56, 56],
};

static DIAG_UP_25_TO_RIGHT_BANK: PieceDef = PieceDef {
    upright: &DIAG_UP_25_TO_RIGHT_BANK_UPRIGHT,
    inverted: Some(&DIAG_UP_25_TO_RIGHT_BANK_INVERTED),
};

static DIAG_LEFT_BANK_TO_DOWN_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_255],
            [27_256, 0, 0, 0],
            [0, 0, 27_257, 0],
            [0, 27_258, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 0)),
            Some(support_tile!(RightCorner, 6, 0)),
            Some(support_tile!(BottomCorner, 6, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[40, 40, 40, 40],
};

static DIAG_LEFT_BANK_TO_DOWN_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_259],
            [27_260, 0, 0, 0],
            [0, 0, 27_261, 0],
            [0, 27_262, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 30)),
            Some(support_tile!(RightCorner, 6, 30)),
            Some(support_tile!(BottomCorner, 6, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 56, 56],
};

static DIAG_LEFT_BANK_TO_DOWN_25: PieceDef = PieceDef {
    upright: &DIAG_LEFT_BANK_TO_DOWN_25_UPRIGHT,
    inverted: Some(&DIAG_LEFT_BANK_TO_DOWN_25_INVERTED),
};

static DIAG_RIGHT_BANK_TO_DOWN_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_263],
            [27_264, 0, 0, 0],
            [0, 0, 27_265, 0],
            [0, 27_266, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 0)),
            Some(support_tile!(RightCorner, 6, 0)),
            Some(support_tile!(BottomCorner, 6, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[40, 40, 40, 40],
};

static DIAG_RIGHT_BANK_TO_DOWN_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_267],
            [27_268, 0, 0, 0],
            [0, 0, 27_269, 0],
            [0, 27_270, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 6, 30)),
            Some(support_tile!(RightCorner, 6, 30)),
            Some(support_tile!(BottomCorner, 6, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 56, 56],
};

static DIAG_RIGHT_BANK_TO_DOWN_25: PieceDef = PieceDef {
    upright: &DIAG_RIGHT_BANK_TO_DOWN_25_UPRIGHT,
    inverted: Some(&DIAG_RIGHT_BANK_TO_DOWN_25_INVERTED),
};

static DIAG_DOWN_25_TO_LEFT_BANK_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_271],
            [27_272, 0, 0, 0],
            [0, 0, 27_273, 0],
            [0, 27_274, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 0)),
            Some(support_tile!(RightCorner, 3, 0)),
            Some(support_tile!(BottomCorner, 3, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_DOWN_25_TO_LEFT_BANK_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_275],
            [27_276, 0, 0, 0],
            [0, 0, 27_277, 0],
            [0, 27_278, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 30)),
            Some(support_tile!(RightCorner, 3, 30)),
            Some(support_tile!(BottomCorner, 3, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[64, 64, 64, 64],
};

static DIAG_DOWN_25_TO_LEFT_BANK: PieceDef = PieceDef {
    upright: &DIAG_DOWN_25_TO_LEFT_BANK_UPRIGHT,
    inverted: Some(&DIAG_DOWN_25_TO_LEFT_BANK_INVERTED),
};

static DIAG_DOWN_25_TO_RIGHT_BANK_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_279],
            [27_280, 0, 0, 0],
            [0, 0, 27_281, 0],
            [0, 27_282, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 0)),
            Some(support_tile!(RightCorner, 3, 0)),
            Some(support_tile!(BottomCorner, 3, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_DOWN_25_TO_RIGHT_BANK_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_283],
            [27_284, 0, 0, 0],
            [0, 0, 27_285, 0],
            [0, 27_286, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 3, 30)),
            Some(support_tile!(RightCorner, 3, 30)),
            Some(support_tile!(BottomCorner, 3, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[64, 64, 64, 64],
};

static DIAG_DOWN_25_TO_RIGHT_BANK: PieceDef = PieceDef {
    upright: &DIAG_DOWN_25_TO_RIGHT_BANK_UPRIGHT,
    inverted: Some(&DIAG_DOWN_25_TO_RIGHT_BANK_INVERTED),
};

static DIAG_LEFT_BANK_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_287],
            [27_288, 0, 0, 0],
            [0, 0, 27_289, 0],
            [0, 27_290, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            Some(support_tile!(RightCorner, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static DIAG_LEFT_BANK_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_291],
            [27_292, 0, 0, 0],
            [0, 0, 27_293, 0],
            [0, 27_294, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            Some(support_tile!(RightCorner, 0, 30)),
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_LEFT_BANK: PieceDef = PieceDef {
    upright: &DIAG_LEFT_BANK_UPRIGHT,
    inverted: Some(&DIAG_LEFT_BANK_INVERTED),
};

static DIAG_RIGHT_BANK_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_295],
            [27_296, 0, 0, 0],
            [0, 0, 27_297, 0],
            [0, 27_298, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 0)),
            Some(support_tile!(RightCorner, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[32, 32, 32, 32],
};

static DIAG_RIGHT_BANK_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [0, 0, 0, 27_299],
            [27_300, 0, 0, 0],
            [0, 0, 27_301, 0],
            [0, 27_302, 0, 0],
        ],
        boxes: Boxes::Fixed(&geometry::DIAGONAL_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[
            None,
            Some(support_tile!(LeftCorner, 0, 30)),
            Some(support_tile!(RightCorner, 0, 30)),
            Some(support_tile!(BottomCorner, 0, 30)),
        ],
    },
    tunnels: Tunnels::NONE,
    segments: &[
        s::B4 | s::C4 | s::C8 | s::CC,
        s::BC | s::C4 | s::CC | s::D0,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
    ],
    clearance: &[48, 48, 48, 48],
};

static DIAG_RIGHT_BANK: PieceDef = PieceDef {
    upright: &DIAG_RIGHT_BANK_UPRIGHT,
    inverted: Some(&DIAG_RIGHT_BANK_INVERTED),
};

piece_routines! {
    left_eighth_to_diag => LEFT_EIGHTH_TO_DIAG,
    right_eighth_to_diag => RIGHT_EIGHTH_TO_DIAG,
    left_eighth_bank_to_diag => LEFT_EIGHTH_BANK_TO_DIAG,
    right_eighth_bank_to_diag => RIGHT_EIGHTH_BANK_TO_DIAG,
    diag_flat => DIAG_FLAT,
    diag_up_25 => DIAG_UP_25,
    diag_up_60 => DIAG_UP_60,
    diag_flat_to_up_25 => DIAG_FLAT_TO_UP_25,
    diag_up_25_to_up_60 => DIAG_UP_25_TO_UP_60,
    diag_up_60_to_up_25 => DIAG_UP_60_TO_UP_25,
    diag_up_25_to_flat => DIAG_UP_25_TO_FLAT,
    diag_down_25 => DIAG_DOWN_25,
    diag_down_60 => DIAG_DOWN_60,
    diag_flat_to_down_25 => DIAG_FLAT_TO_DOWN_25,
    diag_down_25_to_down_60 => DIAG_DOWN_25_TO_DOWN_60,
    diag_down_60_to_down_25 => DIAG_DOWN_60_TO_DOWN_25,
    diag_down_25_to_flat => DIAG_DOWN_25_TO_FLAT,
    diag_flat_to_left_bank => DIAG_FLAT_TO_LEFT_BANK,
    diag_flat_to_right_bank => DIAG_FLAT_TO_RIGHT_BANK,
    diag_left_bank_to_flat => DIAG_LEFT_BANK_TO_FLAT,
    diag_right_bank_to_flat => DIAG_RIGHT_BANK_TO_FLAT,
    diag_left_bank_to_up_25 => DIAG_LEFT_BANK_TO_UP_25,
    diag_right_bank_to_up_25 => DIAG_RIGHT_BANK_TO_UP_25,
    diag_up_25_to_left_bank => DIAG_UP_25_TO_LEFT_BANK,
    diag_up_25_to_right_bank => DIAG_UP_25_TO_RIGHT_BANK,
    diag_left_bank_to_down_25 => DIAG_LEFT_BANK_TO_DOWN_25,
    diag_right_bank_to_down_25 => DIAG_RIGHT_BANK_TO_DOWN_25,
    diag_down_25_to_left_bank => DIAG_DOWN_25_TO_LEFT_BANK,
    diag_down_25_to_right_bank => DIAG_DOWN_25_TO_RIGHT_BANK,
    diag_left_bank => DIAG_LEFT_BANK,
    diag_right_bank => DIAG_RIGHT_BANK,
}

pub(super) fn left_eighth_to_orthogonal(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) = map_sequence(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, sequence) else {
        return;
    };
    right_eighth_to_diag(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn right_eighth_to_orthogonal(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) = map_sequence(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, sequence) else {
        return;
    };
    left_eighth_to_diag(session, ride, sequence, direction.rotate(3), height, element);
}

pub(super) fn left_eighth_bank_to_orthogonal(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) = map_sequence(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, sequence) else {
        return;
    };
    right_eighth_bank_to_diag(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn right_eighth_bank_to_orthogonal(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) = map_sequence(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, sequence) else {
        return;
    };
    left_eighth_bank_to_diag(session, ride, sequence, direction.rotate(3), height, element);
}
