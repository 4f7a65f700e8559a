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

static LEFT_HALF_BANKED_HELIX_UP_SMALL_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_791, 26_792, 26_793, 26_794],
            [0, 0, 0, 0],
            [26_795, 26_796, 26_797, 26_798],
            [26_799, 26_800, 26_801, 26_802],
            [26_794, 26_791, 26_792, 26_793],
            [0, 0, 0, 0],
            [26_798, 26_795, 26_796, 26_797],
            [26_802, 26_799, 26_800, 26_801],
        ],
        boxes: Boxes::Fixed(&geometry::HALF_HELIX_SMALL_LEFT),
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
            Some(support_tile!(Centre, 0, 0)),
            None,
            None,
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(8, TunnelType::StandardFlat)),
        turn: Turn::Reverse,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D0,
        s::BC | s::C4 | s::CC | s::D4,
        s::C0 | s::C4 | s::CC | s::D0,
    ],
    clearance: &[48, 48, 48, 48, 48, 48, 48, 48],
};

static LEFT_HALF_BANKED_HELIX_UP_SMALL: PieceDef = PieceDef {
    upright: &LEFT_HALF_BANKED_HELIX_UP_SMALL_TRACK,
    inverted: None,
};

static RIGHT_HALF_BANKED_HELIX_UP_SMALL_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_803, 26_804, 26_805, 26_806],
            [0, 0, 0, 0],
            [26_807, 26_808, 26_809, 26_810],
            [26_811, 26_812, 26_813, 26_814],
            [26_804, 26_805, 26_806, 26_803],
            [0, 0, 0, 0],
            [26_808, 26_809, 26_810, 26_807],
            [26_812, 26_813, 26_814, 26_811],
        ],
        boxes: Boxes::Fixed(&geometry::HALF_HELIX_SMALL_RIGHT),
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
            Some(support_tile!(Centre, 0, 0)),
            None,
            None,
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(8, TunnelType::StandardFlat)),
        turn: Turn::Reverse,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::BC | s::C0 | s::C4 | s::D4,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C4 | s::C8 | s::D0 | s::D4,
        s::B8 | s::C0 | s::C4 | s::D0,
        s::BC | s::C4 | s::CC | s::D4,
        s::BC | s::C4 | s::CC | s::D4,
    ],
    clearance: &[48, 48, 48, 48, 48, 48, 48, 48],
};

static RIGHT_HALF_BANKED_HELIX_UP_SMALL: PieceDef = PieceDef {
    upright: &RIGHT_HALF_BANKED_HELIX_UP_SMALL_TRACK,
    inverted: None,
};

static LEFT_HALF_BANKED_HELIX_UP_LARGE_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_815, 26_816, 26_817, 26_818],
            [0, 0, 0, 0],
            [26_819, 26_820, 26_821, 26_822],
            [26_823, 26_824, 26_825, 26_826],
            [0, 0, 0, 0],
            [26_827, 26_828, 26_829, 26_830],
            [26_831, 26_832, 26_833, 26_834],
            [26_818, 26_815, 26_816, 26_817],
            [0, 0, 0, 0],
            [26_822, 26_819, 26_820, 26_821],
            [26_826, 26_823, 26_824, 26_825],
            [0, 0, 0, 0],
            [26_830, 26_827, 26_828, 26_829],
            [26_834, 26_831, 26_832, 26_833],
        ],
        boxes: Boxes::Fixed(&geometry::HALF_HELIX_LARGE_LEFT),
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
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(8, TunnelType::StandardFlat)),
        turn: Turn::Reverse,
    },
    segments: &[
        s::B4 | s::C4 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C4 | s::C8 | s::CC,
        s::B8 | s::BC | s::C4 | s::C8 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D0 | s::D4,
        s::B8 | s::C0 | s::C4 | s::C8 | s::CC | s::D0 | s::D4,
        s::B4 | s::B8 | s::C4 | s::C8 | s::D0,
        s::B4 | s::C0 | s::C4 | s::CC | s::D0,
        s::BC | s::C0 | s::C4 | s::CC | s::D0,
        s::C0 | s::C4 | s::CC | s::D0,
    ],
    clearance: &[48, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48],
};

static LEFT_HALF_BANKED_HELIX_UP_LARGE: PieceDef = PieceDef {
    upright: &LEFT_HALF_BANKED_HELIX_UP_LARGE_TRACK,
    inverted: None,
};

static RIGHT_HALF_BANKED_HELIX_UP_LARGE_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [26_835, 26_836, 26_837, 26_838],
            [0, 0, 0, 0],
            [26_839, 26_840, 26_841, 26_842],
            [26_843, 26_844, 26_845, 26_846],
            [0, 0, 0, 0],
            [26_847, 26_848, 26_849, 26_850],
            [26_851, 26_852, 26_853, 26_854],
            [26_836, 26_837, 26_838, 26_835],
            [0, 0, 0, 0],
            [26_840, 26_841, 26_842, 26_839],
            [26_844, 26_845, 26_846, 26_843],
            [0, 0, 0, 0],
            [26_848, 26_849, 26_850, 26_847],
            [26_852, 26_853, 26_854, 26_851],
        ],
        boxes: Boxes::Fixed(&geometry::HALF_HELIX_LARGE_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(RightCorner, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(BottomCorner, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 0)),
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(8, TunnelType::StandardFlat)),
        turn: Turn::Reverse,
    },
    segments: &[
        s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::B4 | s::BC | s::C0 | s::C4 | s::D0,
        s::B4 | s::BC | s::C0 | s::C4 | s::C8,
        s::B4 | s::B8 | s::BC | s::C4 | s::C8,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::C4 | s::C8 | s::D0 | s::D4,
        s::B8 | s::C4 | s::C8 | s::D0 | s::D4,
        s::B8 | s::BC | s::C0 | s::C4 | s::C8 | s::D0 | s::D4,
        s::B8 | s::BC | s::C0 | s::C4 | s::C8,
        s::B8 | s::BC | s::C0 | s::C4 | s::CC,
        s::B4 | s::BC | s::C0 | s::C4 | s::CC,
        s::BC | s::C4 | s::CC | s::D4,
    ],
    clearance: &[48, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48],
};

static RIGHT_HALF_BANKED_HELIX_UP_LARGE: PieceDef = PieceDef {
    upright: &RIGHT_HALF_BANKED_HELIX_UP_LARGE_TRACK,
    inverted: None,
};

piece_routines! {
    left_half_banked_helix_up_small => LEFT_HALF_BANKED_HELIX_UP_SMALL,
    right_half_banked_helix_up_small => RIGHT_HALF_BANKED_HELIX_UP_SMALL,
    left_half_banked_helix_up_large => LEFT_HALF_BANKED_HELIX_UP_LARGE,
    right_half_banked_helix_up_large => RIGHT_HALF_BANKED_HELIX_UP_LARGE,
}

/// A descending helix is the opposite-handed ascending helix, one half at a time.
pub(super) fn left_half_banked_helix_down_small(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let (sequence, direction) = if sequence >= 4 {
        (sequence - 4, direction.rotate(3))
    } else {
        (sequence, direction)
    };
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES, sequence)
    else {
        return;
    };
    right_half_banked_helix_up_small(session, ride, sequence, direction.rotate(1), height, element);
}

pub(super) fn right_half_banked_helix_down_small(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let (sequence, direction) = if sequence >= 4 {
        (sequence - 4, direction.rotate(1))
    } else {
        (sequence, direction)
    };
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES, sequence)
    else {
        return;
    };
    left_half_banked_helix_up_small(session, ride, sequence, direction.rotate(3), height, element);
}

pub(super) fn left_half_banked_helix_down_large(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let (sequence, direction) = if sequence >= 7 {
        (sequence - 7, direction.rotate(3))
    } else {
        (sequence, direction)
    };
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES, sequence)
    else {
        return;
    };
    right_half_banked_helix_up_large(session, ride, sequence, direction.rotate(1), height, element);
}

pub(super) fn right_half_banked_helix_down_large(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let (sequence, direction) = if sequence >= 7 {
        (sequence - 7, direction.rotate(1))
    } else {
        (sequence, direction)
    };
    let Some(sequence) =
        map_sequence(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES, sequence)
    else {
        return;
    };
    left_half_banked_helix_up_large(session, ride, sequence, direction.rotate(3), height, element);
}
