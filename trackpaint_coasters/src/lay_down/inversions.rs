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

//! Loops, and the flyer twists/half loops/corkscrews that flip the car between
//! lying down and riding upright.

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
    piece_routines, support_tile, Boxes, Layer, PieceDef, Style, Supports, TunnelSpec, Tunnels,
    Turn,
};

static LEFT_VERTICAL_LOOP_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_303, 27_304, 27_305, 27_306],
            [27_307, 27_308, 27_309, 27_310],
            [27_311, 27_312, 27_313, 27_314],
            [27_315, 27_316, 27_317, 27_318],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [27_319, 27_320, 27_321, 27_322],
            [27_323, 27_324, 27_325, 27_326],
            [27_327, 27_328, 27_329, 27_330],
            [27_331, 27_332, 27_333, 27_334],
        ],
        boxes: Boxes::Fixed(&geometry::VERTICAL_LOOP_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 8, 0)),
            Some(support_tile!(Centre, 8, 0)),
            None,
            None,
            None,
            None,
            None,
            None,
            Some(support_tile!(Centre, 8, 0)),
            Some(support_tile!(Centre, 8, 0)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(-8, TunnelType::StandardSlopeEnd),
    ),
    segments: &[
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0,
        0,
        0,
        s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
    ],
    clearance: &[56, 56, 120, 168, 168, 168, 168, 120, 56, 56],
};

static LEFT_VERTICAL_LOOP: PieceDef = PieceDef {
    upright: &LEFT_VERTICAL_LOOP_TRACK,
    inverted: None,
};

static RIGHT_VERTICAL_LOOP_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_335, 27_336, 27_337, 27_338],
            [27_339, 27_340, 27_341, 27_342],
            [27_343, 27_344, 27_345, 27_346],
            [27_347, 27_348, 27_349, 27_350],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [27_351, 27_352, 27_353, 27_354],
            [27_355, 27_356, 27_357, 27_358],
            [27_359, 27_360, 27_361, 27_362],
            [27_363, 27_364, 27_365, 27_366],
        ],
        boxes: Boxes::Fixed(&geometry::VERTICAL_LOOP_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 8, 0)),
            Some(support_tile!(Centre, 8, 0)),
            None,
            None,
            None,
            None,
            None,
            None,
            Some(support_tile!(Centre, 8, 0)),
            Some(support_tile!(Centre, 8, 0)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(-8, TunnelType::StandardSlopeEnd),
    ),
    segments: &[
        s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        s::C0 | s::C4 | s::D0 | s::D4,
        s::BC | s::C0 | s::C4 | s::CC | s::D0 | s::D4,
        0,
        0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::C4 | s::C8 | s::CC,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0,
        s::B4 | s::B8 | s::C4 | s::C8 | s::CC | s::D0,
    ],
    clearance: &[56, 56, 120, 168, 168, 168, 168, 120, 56, 56],
};

static RIGHT_VERTICAL_LOOP: PieceDef = PieceDef {
    upright: &RIGHT_VERTICAL_LOOP_TRACK,
    inverted: None,
};

static LEFT_FLYER_TWIST_UP_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_367, 27_368, 27_369, 27_370],
            [27_371, 27_372, 27_373, 27_374],
            [27_375, 27_376, 27_377, 27_378],
        ],
        boxes: Boxes::Fixed(&geometry::FLYER_TWIST_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 30)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0, s::ALL, s::C4 | s::CC | s::D0],
    clearance: &[32, 56, 48],
};

static LEFT_FLYER_TWIST_UP: PieceDef = PieceDef {
    upright: &LEFT_FLYER_TWIST_UP_TRACK,
    inverted: None,
};

static RIGHT_FLYER_TWIST_UP_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_379, 27_380, 27_381, 27_382],
            [27_383, 27_384, 27_385, 27_386],
            [27_387, 27_388, 27_389, 27_390],
        ],
        boxes: Boxes::Fixed(&geometry::FLYER_TWIST_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 30)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0, s::ALL, s::C4 | s::CC | s::D0],
    clearance: &[32, 56, 48],
};

static RIGHT_FLYER_TWIST_UP: PieceDef = PieceDef {
    upright: &RIGHT_FLYER_TWIST_UP_TRACK,
    inverted: None,
};

static LEFT_FLYER_TWIST_DOWN_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_391, 27_392, 27_393, 27_394],
            [27_395, 27_396, 27_397, 27_398],
            [27_399, 27_400, 27_401, 27_402],
        ],
        boxes: Boxes::Fixed(&geometry::FLYER_TWIST_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0, s::ALL, s::C4 | s::CC | s::D0],
    clearance: &[48, 56, 32],
};

static LEFT_FLYER_TWIST_DOWN: PieceDef = PieceDef {
    upright: &LEFT_FLYER_TWIST_DOWN_TRACK,
    inverted: None,
};

static RIGHT_FLYER_TWIST_DOWN_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_403, 27_404, 27_405, 27_406],
            [27_407, 27_408, 27_409, 27_410],
            [27_411, 27_412, 27_413, 27_414],
        ],
        boxes: Boxes::Fixed(&geometry::FLYER_TWIST_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 30)),
            None,
            Some(support_tile!(Centre, 0, 0)),
        ],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0, s::ALL, s::C4 | s::CC | s::D0],
    clearance: &[48, 56, 32],
};

static RIGHT_FLYER_TWIST_DOWN: PieceDef = PieceDef {
    upright: &RIGHT_FLYER_TWIST_DOWN_TRACK,
    inverted: None,
};

static FLYER_HALF_LOOP_UP_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_415, 27_416, 27_417, 27_418],
            [27_419, 27_420, 27_421, 27_422],
            [27_423, 27_424, 27_425, 27_426],
            [27_427, 27_428, 27_429, 27_430],
        ],
        boxes: Boxes::Fixed(&geometry::FLYER_HALF_LOOP),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 8, 0)), None, None, None],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(-8, TunnelType::StandardSlopeStart)),
        exit: None,
        turn: Turn::Reverse,
    },
    segments: &[s::C4 | s::CC | s::D0, s::ALL, s::ALL, s::BC | s::C4 | s::D0 | s::D4],
    clearance: &[56, 104, 160, 64],
};

static FLYER_HALF_LOOP_UP: PieceDef = PieceDef {
    upright: &FLYER_HALF_LOOP_UP_TRACK,
    inverted: None,
};

static LEFT_FLYER_CORKSCREW_UP_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_431, 27_432, 27_433, 27_434],
            [27_435, 27_436, 27_437, 27_438],
            [27_439, 27_440, 27_441, 27_442],
        ],
        boxes: Boxes::Fixed(&geometry::FLYER_CORKSCREW_LEFT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 35)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        turn: Turn::Left,
    },
    segments: &[s::B4 | s::C4 | s::CC | s::D0, s::ALL, s::B8 | s::C4 | s::C8 | s::D4],
    clearance: &[40, 72, 56],
};

static LEFT_FLYER_CORKSCREW_UP: PieceDef = PieceDef {
    upright: &LEFT_FLYER_CORKSCREW_UP_TRACK,
    inverted: None,
};

static RIGHT_FLYER_CORKSCREW_UP_TRACK: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[
            [27_443, 27_444, 27_445, 27_446],
            [27_447, 27_448, 27_449, 27_450],
            [27_451, 27_452, 27_453, 27_454],
        ],
        boxes: Boxes::Fixed(&geometry::FLYER_CORKSCREW_RIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[
            Some(support_tile!(Centre, 0, 0)),
            None,
            Some(support_tile!(Centre, 0, 35)),
        ],
    },
    tunnels: Tunnels {
        entry: Some(TunnelSpec::new(0, TunnelType::StandardFlat)),
        exit: Some(TunnelSpec::new(0, TunnelType::InvertedFlat)),
        turn: Turn::Right,
    },
    segments: &[s::C4 | s::CC | s::D0 | s::D4, s::ALL, s::B4 | s::BC | s::C4 | s::C8],
    clearance: &[40, 72, 56],
};

static RIGHT_FLYER_CORKSCREW_UP: PieceDef = PieceDef {
    upright: &RIGHT_FLYER_CORKSCREW_UP_TRACK,
    inverted: None,
};

piece_routines! {
    left_vertical_loop => LEFT_VERTICAL_LOOP,
    right_vertical_loop => RIGHT_VERTICAL_LOOP,
    left_flyer_twist_up => LEFT_FLYER_TWIST_UP,
    right_flyer_twist_up => RIGHT_FLYER_TWIST_UP,
    left_flyer_twist_down => LEFT_FLYER_TWIST_DOWN,
    right_flyer_twist_down => RIGHT_FLYER_TWIST_DOWN,
    flyer_half_loop_up => FLYER_HALF_LOOP_UP,
    left_flyer_corkscrew_up => LEFT_FLYER_CORKSCREW_UP,
    right_flyer_corkscrew_up => RIGHT_FLYER_CORKSCREW_UP,
}

/// Same tiles as the way up, walked in reverse.
pub(super) fn flyer_half_loop_down(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) = 3u8.checked_sub(sequence) else {
        return;
    };
    flyer_half_loop_up(session, ride, sequence, direction, height, element);
}

pub(super) fn left_flyer_corkscrew_down(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) = 2u8.checked_sub(sequence) else {
        return;
    };
    right_flyer_corkscrew_up(session, ride, sequence, direction.rotate(1), height, element);
}

pub(super) fn right_flyer_corkscrew_down(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(sequence) = 2u8.checked_sub(sequence) else {
        return;
    };
    left_flyer_corkscrew_up(session, ride, sequence, direction.rotate(3), height, element);
}
