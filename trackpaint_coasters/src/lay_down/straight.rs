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

//! Straight pieces: flat track, brakes, slopes and banking transitions.

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
};

static FLAT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_227, 26_228, 26_227, 26_228]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_229, 26_230, 26_229, 26_230]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 0, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[32],
};

static FLAT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_231, 26_232, 26_231, 26_232]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_233, 26_234, 26_233, 26_234]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 0, 30))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static FLAT: PieceDef = PieceDef {
    upright: &FLAT_UPRIGHT,
    inverted: Some(&FLAT_INVERTED),
};

static BRAKES_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_235, 26_236, 26_235, 26_236]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 0, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[32],
};

static BRAKES_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_237, 26_238, 26_237, 26_238]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 0, 30))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static BRAKES: PieceDef = PieceDef {
    upright: &BRAKES_UPRIGHT,
    inverted: Some(&BRAKES_INVERTED),
};

static BLOCK_BRAKES_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_239, 26_240, 26_239, 26_240]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 0, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[32],
};

static BLOCK_BRAKES_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_241, 26_242, 26_241, 26_242]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 0, 30))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static BLOCK_BRAKES: PieceDef = PieceDef {
    upright: &BLOCK_BRAKES_UPRIGHT,
    inverted: Some(&BLOCK_BRAKES_INVERTED),
};

static UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_243, 26_244, 26_245, 26_246]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_247, 26_248, 26_249, 26_250]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 8, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(8, TunnelType::StandardSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[56],
};

static UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_251, 26_252, 26_253, 26_254]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_255, 26_256, 26_257, 26_258]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 8, 38))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::InvertedSlopeStart),
        TunnelSpec::new(8, TunnelType::InvertedSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[72],
};

static UP_25: PieceDef = PieceDef {
    upright: &UP_25_UPRIGHT,
    inverted: Some(&UP_25_INVERTED),
};

static UP_60_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_259, 26_260, 26_261, 26_262]],
        boxes: Boxes::Fixed(&geometry::STEEP),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_263, 26_264, 26_265, 26_266]],
        boxes: Boxes::Fixed(&geometry::STEEP),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 32, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(56, TunnelType::StandardSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[104],
};

static UP_60_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_267, 26_268, 26_269, 26_270]],
        boxes: Boxes::Fixed(&geometry::STEEP_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_271, 26_272, 26_273, 26_274]],
        boxes: Boxes::Fixed(&geometry::STEEP_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 32, 56))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::InvertedSlopeStart),
        TunnelSpec::new(56, TunnelType::InvertedSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[120],
};

static UP_60: PieceDef = PieceDef {
    upright: &UP_60_UPRIGHT,
    inverted: Some(&UP_60_INVERTED),
};

static FLAT_TO_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_275, 26_276, 26_277, 26_278]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_279, 26_280, 26_281, 26_282]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 3, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(8, TunnelType::StandardSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static FLAT_TO_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_283, 26_284, 26_285, 26_286]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_287, 26_288, 26_289, 26_290]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 3, 34))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(8, TunnelType::InvertedSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[64],
};

static FLAT_TO_UP_25: PieceDef = PieceDef {
    upright: &FLAT_TO_UP_25_UPRIGHT,
    inverted: Some(&FLAT_TO_UP_25_INVERTED),
};

static UP_25_TO_UP_60_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_291, 26_292, 26_293, 26_294]],
        boxes: Boxes::Fixed(&geometry::STEEP),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_295, 26_296, 26_297, 26_298]],
        boxes: Boxes::Fixed(&geometry::STEEP),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 12, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(24, TunnelType::StandardSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[72],
};

static UP_25_TO_UP_60_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_299, 26_300, 26_301, 26_302]],
        boxes: Boxes::Fixed(&geometry::STEEP_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_303, 26_304, 26_305, 26_306]],
        boxes: Boxes::Fixed(&geometry::STEEP_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 12, 46))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::InvertedSlopeStart),
        TunnelSpec::new(24, TunnelType::InvertedSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[88],
};

static UP_25_TO_UP_60: PieceDef = PieceDef {
    upright: &UP_25_TO_UP_60_UPRIGHT,
    inverted: Some(&UP_25_TO_UP_60_INVERTED),
};

static UP_60_TO_UP_25_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_307, 26_308, 26_309, 26_310]],
        boxes: Boxes::Fixed(&geometry::STEEP),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_311, 26_312, 26_313, 26_314]],
        boxes: Boxes::Fixed(&geometry::STEEP),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 20, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(24, TunnelType::StandardSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[72],
};

static UP_60_TO_UP_25_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_315, 26_316, 26_317, 26_318]],
        boxes: Boxes::Fixed(&geometry::STEEP_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_319, 26_320, 26_321, 26_322]],
        boxes: Boxes::Fixed(&geometry::STEEP_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 20, 46))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::InvertedSlopeStart),
        TunnelSpec::new(24, TunnelType::InvertedSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[88],
};

static UP_60_TO_UP_25: PieceDef = PieceDef {
    upright: &UP_60_TO_UP_25_UPRIGHT,
    inverted: Some(&UP_60_TO_UP_25_INVERTED),
};

static UP_25_TO_FLAT_UPRIGHT: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_323, 26_324, 26_325, 26_326]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_327, 26_328, 26_329, 26_330]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT),
    }],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 6, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(8, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[40],
};

static UP_25_TO_FLAT_INVERTED: Style = Style {
    layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_331, 26_332, 26_333, 26_334]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    chain_layers: &[Layer {
        scheme: ColourScheme::Track,
        images: &[[26_335, 26_336, 26_337, 26_338]],
        boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
    }],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 6, 34))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::InvertedSlopeStart),
        TunnelSpec::new(8, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[56],
};

static UP_25_TO_FLAT: PieceDef = PieceDef {
    upright: &UP_25_TO_FLAT_UPRIGHT,
    inverted: Some(&UP_25_TO_FLAT_INVERTED),
};

static FLAT_TO_LEFT_BANK_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_339, 26_340, 26_341, 26_342]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_343, 0, 0, 26_344]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 0, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[32],
};

static FLAT_TO_LEFT_BANK_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_345, 26_346, 26_347, 26_348]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_349, 0, 0, 26_350]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL_INVERTED),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 0, 30))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static FLAT_TO_LEFT_BANK: PieceDef = PieceDef {
    upright: &FLAT_TO_LEFT_BANK_UPRIGHT,
    inverted: Some(&FLAT_TO_LEFT_BANK_INVERTED),
};

static FLAT_TO_RIGHT_BANK_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_351, 26_352, 26_353, 26_354]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[0, 26_355, 26_356, 0]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 0, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[32],
};

static FLAT_TO_RIGHT_BANK_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_357, 26_358, 26_359, 26_360]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[0, 26_361, 26_362, 0]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL_INVERTED),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 0, 30))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static FLAT_TO_RIGHT_BANK: PieceDef = PieceDef {
    upright: &FLAT_TO_RIGHT_BANK_UPRIGHT,
    inverted: Some(&FLAT_TO_RIGHT_BANK_INVERTED),
};

static LEFT_BANK_TO_UP_25_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_363, 26_364, 26_365, 26_366]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_367, 0, 0, 26_368]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 3, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(8, TunnelType::StandardSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static LEFT_BANK_TO_UP_25_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_369, 26_370, 26_371, 26_372]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_373, 0, 0, 26_374]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL_INVERTED),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 3, 34))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(8, TunnelType::InvertedSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[64],
};

static LEFT_BANK_TO_UP_25: PieceDef = PieceDef {
    upright: &LEFT_BANK_TO_UP_25_UPRIGHT,
    inverted: Some(&LEFT_BANK_TO_UP_25_INVERTED),
};

static RIGHT_BANK_TO_UP_25_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_375, 26_376, 26_377, 26_378]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[0, 26_379, 26_380, 0]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 3, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(8, TunnelType::StandardSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static RIGHT_BANK_TO_UP_25_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_381, 26_382, 26_383, 26_384]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[0, 26_385, 26_386, 0]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL_INVERTED),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 3, 34))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(8, TunnelType::InvertedSlopeEnd),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[64],
};

static RIGHT_BANK_TO_UP_25: PieceDef = PieceDef {
    upright: &RIGHT_BANK_TO_UP_25_UPRIGHT,
    inverted: Some(&RIGHT_BANK_TO_UP_25_INVERTED),
};

static UP_25_TO_LEFT_BANK_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_387, 26_388, 26_389, 26_390]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_391, 0, 0, 26_392]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 6, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(8, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[40],
};

static UP_25_TO_LEFT_BANK_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_393, 26_394, 26_395, 26_396]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_397, 0, 0, 26_398]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL_INVERTED),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 6, 34))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::InvertedSlopeStart),
        TunnelSpec::new(8, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[56],
};

static UP_25_TO_LEFT_BANK: PieceDef = PieceDef {
    upright: &UP_25_TO_LEFT_BANK_UPRIGHT,
    inverted: Some(&UP_25_TO_LEFT_BANK_INVERTED),
};

static UP_25_TO_RIGHT_BANK_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_399, 26_400, 26_401, 26_402]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[0, 26_403, 26_404, 0]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 6, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
        TunnelSpec::new(8, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[40],
};

static UP_25_TO_RIGHT_BANK_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_405, 26_406, 26_407, 26_408]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[0, 26_409, 26_410, 0]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL_INVERTED),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 6, 34))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(-8, TunnelType::InvertedSlopeStart),
        TunnelSpec::new(8, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[56],
};

static UP_25_TO_RIGHT_BANK: PieceDef = PieceDef {
    upright: &UP_25_TO_RIGHT_BANK_UPRIGHT,
    inverted: Some(&UP_25_TO_RIGHT_BANK_INVERTED),
};

static LEFT_BANK_UPRIGHT: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_411, 26_412, 26_413, 26_414]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_415, 0, 0, 26_416]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::Tubes,
        checkerboard: false,
        tiles: &[Some(support_tile!(Centre, 0, 0))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::StandardFlat),
        TunnelSpec::new(0, TunnelType::StandardFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[32],
};

static LEFT_BANK_INVERTED: Style = Style {
    layers: &[
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_417, 26_418, 26_419, 26_420]],
            boxes: Boxes::Rotated(&geometry::STRAIGHT_INVERTED),
        },
        Layer {
            scheme: ColourScheme::Track,
            images: &[[26_421, 0, 0, 26_422]],
            boxes: Boxes::Rotated(&geometry::BANK_RAIL_INVERTED),
        },
    ],
    chain_layers: &[],
    supports: Supports {
        kind: MetalSupportType::TubesInverted,
        checkerboard: true,
        tiles: &[Some(support_tile!(Centre, 0, 30))],
    },
    tunnels: Tunnels::straight(
        TunnelSpec::new(0, TunnelType::InvertedFlat),
        TunnelSpec::new(0, TunnelType::InvertedFlat),
    ),
    segments: &[s::C4 | s::CC | s::D0],
    clearance: &[48],
};

static LEFT_BANK: PieceDef = PieceDef {
    upright: &LEFT_BANK_UPRIGHT,
    inverted: Some(&LEFT_BANK_INVERTED),
};

piece_routines! {
    flat => FLAT,
    brakes => BRAKES,
    block_brakes => BLOCK_BRAKES,
    up_25 => UP_25,
    up_60 => UP_60,
    flat_to_up_25 => FLAT_TO_UP_25,
    up_25_to_up_60 => UP_25_TO_UP_60,
    up_60_to_up_25 => UP_60_TO_UP_25,
    up_25_to_flat => UP_25_TO_FLAT,
    flat_to_left_bank => FLAT_TO_LEFT_BANK,
    flat_to_right_bank => FLAT_TO_RIGHT_BANK,
    left_bank_to_up_25 => LEFT_BANK_TO_UP_25,
    right_bank_to_up_25 => RIGHT_BANK_TO_UP_25,
    up_25_to_left_bank => UP_25_TO_LEFT_BANK,
    up_25_to_right_bank => UP_25_TO_RIGHT_BANK,
    left_bank => LEFT_BANK,
}

/// Descending pieces are the ascending piece seen from the other end.
pub(super) fn down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    up_25(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    up_60(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn flat_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    up_25_to_flat(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn down_25_to_down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    up_60_to_up_25(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn down_60_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    up_25_to_up_60(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn down_25_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    flat_to_up_25(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn left_bank_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    flat_to_right_bank(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn right_bank_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    flat_to_left_bank(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn left_bank_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    up_25_to_right_bank(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn right_bank_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    up_25_to_left_bank(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn down_25_to_left_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    right_bank_to_up_25(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn down_25_to_right_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    left_bank_to_up_25(session, ride, sequence, direction.rotate(2), height, element);
}

pub(super) fn right_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    left_bank(session, ride, sequence, direction.rotate(2), height, element);
}
