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

//! Bounding boxes shared between lay-down pieces of the same shape.

use crate::track_paint::{sprite_box, SpriteBox};

/// Flat and gently sloped straight track
pub(super) static STRAIGHT: [SpriteBox; 1] = [
    sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
];

pub(super) static STRAIGHT_INVERTED: [SpriteBox; 1] = [
    sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
];

/// Front rail of banked track, sorted in front of the car
pub(super) static BANK_RAIL: [SpriteBox; 1] = [
    sprite_box!([0, 6, 0], [0, 27, 0], [32, 1, 26]),
];

pub(super) static BANK_RAIL_INVERTED: [SpriteBox; 1] = [
    sprite_box!([0, 6, 24], [0, 27, 24], [32, 1, 26]),
];

/// Track at or near 60 degrees; the climbing face gets a tall, thin box
pub(super) static STEEP: [[SpriteBox; 4]; 1] = [
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [4, 0, 0], [2, 32, 93]),
        sprite_box!([0, 6, 0], [0, 4, 0], [32, 2, 93]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
];

pub(super) static STEEP_INVERTED: [[SpriteBox; 4]; 1] = [
    [
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([6, 0, 24], [4, 0, 24], [2, 32, 93]),
        sprite_box!([0, 6, 24], [0, 4, 24], [32, 2, 93]),
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
    ],
];

pub(super) static QUARTER_TURN_5_LEFT: [[SpriteBox; 4]; 7] = [
    [
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
    ],
];

pub(super) static QUARTER_TURN_5_LEFT_INVERTED: [[SpriteBox; 4]; 7] = [
    [
        sprite_box!([0, 0, 24], [0, 2, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [2, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 3, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [3, 0, 24], [27, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 24], [0, 16, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 16, 24], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 32, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [32, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [2, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 3, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [3, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 2, 24], [32, 27, 3]),
    ],
];

pub(super) static QUARTER_TURN_5_RIGHT: [[SpriteBox; 4]; 7] = [
    [
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
    ],
];

pub(super) static QUARTER_TURN_5_RIGHT_INVERTED: [[SpriteBox; 4]; 7] = [
    [
        sprite_box!([0, 0, 24], [0, 3, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [3, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 2, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [2, 0, 24], [27, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 32, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [16, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 32, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [32, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [2, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 3, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [3, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 2, 24], [32, 27, 3]),
    ],
];

pub(super) static QUARTER_TURN_3_LEFT: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
    ],
];

pub(super) static QUARTER_TURN_3_LEFT_INVERTED: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [20, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 24], [16, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [16, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 20, 3]),
    ],
];

pub(super) static QUARTER_TURN_3_RIGHT: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
    ],
];

pub(super) static QUARTER_TURN_3_RIGHT_INVERTED: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [20, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 16, 24], [16, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 20, 3]),
    ],
];

/// Front rail of the banked quarter turns
pub(super) static QUARTER_TURN_5_BANK_RAIL: [[SpriteBox; 4]; 7] = [
    [
        sprite_box!([0, 0, 0], [0, 27, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [27, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 4, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [4, 0, 0], [1, 32, 26]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 30, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [30, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 1, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [1, 0, 0], [1, 32, 26]),
    ],
    [
        sprite_box!([0, 0, 0], [30, 30, 0], [1, 1, 26]),
        sprite_box!([0, 0, 0], [30, 1, 0], [1, 1, 26]),
        sprite_box!([0, 0, 0], [1, 1, 0], [1, 1, 26]),
        sprite_box!([0, 0, 0], [1, 30, 0], [1, 1, 26]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [30, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 1, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [1, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 30, 0], [32, 1, 26]),
    ],
    [
        sprite_box!([0, 0, 0], [27, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 4, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [4, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 27, 0], [32, 1, 26]),
    ],
];

pub(super) static QUARTER_TURN_3_BANK_RAIL: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 0], [0, 27, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [27, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 4, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [4, 0, 0], [1, 32, 26]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [30, 30, 0], [1, 1, 26]),
        sprite_box!([0, 0, 0], [30, 1, 0], [1, 1, 26]),
        sprite_box!([0, 0, 0], [1, 1, 0], [1, 1, 26]),
        sprite_box!([0, 0, 0], [1, 30, 0], [1, 1, 26]),
    ],
    [
        sprite_box!([0, 0, 0], [27, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 4, 0], [32, 1, 26]),
        sprite_box!([0, 0, 0], [4, 0, 0], [1, 32, 26]),
        sprite_box!([0, 0, 0], [0, 27, 0], [32, 1, 26]),
    ],
];

pub(super) static S_BEND_LEFT: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 26, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [26, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 26, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [26, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 26, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [26, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 26, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [26, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
    ],
];

pub(super) static S_BEND_LEFT_INVERTED: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 24], [0, 2, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [2, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 3, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [3, 0, 24], [27, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 26, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [26, 32, 3]),
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 26, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [26, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 26, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [26, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 26, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [26, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 2, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [2, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 3, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [3, 0, 24], [27, 32, 3]),
    ],
];

pub(super) static S_BEND_RIGHT: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 26, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [26, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 26, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [26, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 26, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [26, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 26, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [26, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
    ],
];

pub(super) static S_BEND_RIGHT_INVERTED: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 0, 24], [0, 3, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [3, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 2, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [2, 0, 24], [27, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 26, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [26, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 26, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [26, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 26, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [26, 32, 3]),
        sprite_box!([0, 0, 24], [0, 6, 24], [32, 26, 3]),
        sprite_box!([0, 0, 24], [6, 0, 24], [26, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 3, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [3, 0, 24], [27, 32, 3]),
        sprite_box!([0, 0, 24], [0, 2, 24], [32, 27, 3]),
        sprite_box!([0, 0, 24], [2, 0, 24], [27, 32, 3]),
    ],
];

pub(super) static EIGHTH_TO_DIAG_LEFT: [[SpriteBox; 4]; 5] = [
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
    ],
];

pub(super) static EIGHTH_TO_DIAG_LEFT_INVERTED: [[SpriteBox; 4]; 5] = [
    [
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 32, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 24], [16, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [16, 16, 3]),
    ],
];

pub(super) static EIGHTH_TO_DIAG_RIGHT: [[SpriteBox; 4]; 5] = [
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
    ],
];

pub(super) static EIGHTH_TO_DIAG_RIGHT_INVERTED: [[SpriteBox; 4]; 5] = [
    [
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 16, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 32, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [32, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 24], [16, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 0, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [0, 16, 24], [16, 16, 3]),
        sprite_box!([0, 0, 24], [16, 16, 24], [16, 16, 3]),
    ],
];

/// Diagonal track is drawn from the tile centre
pub(super) static DIAGONAL: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
    ],
    [
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
    ],
    [
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
    ],
    [
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
        sprite_box!([-16, -16, 0], [-16, -16, 0], [32, 32, 3]),
    ],
];

pub(super) static DIAGONAL_INVERTED: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
    ],
    [
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
    ],
    [
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
    ],
    [
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
        sprite_box!([-16, -16, 24], [-16, -16, 24], [32, 32, 3]),
    ],
];

/// Half banked helices: two quarter turns, the second rotated
pub(super) static HALF_HELIX_SMALL_LEFT: [[SpriteBox; 4]; 8] = [
    [
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
];

pub(super) static HALF_HELIX_SMALL_RIGHT: [[SpriteBox; 4]; 8] = [
    [
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 0, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
];

pub(super) static HALF_HELIX_LARGE_LEFT: [[SpriteBox; 4]; 14] = [
    [
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
    ],
];

pub(super) static HALF_HELIX_LARGE_RIGHT: [[SpriteBox; 4]; 14] = [
    [
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [16, 16, 3]),
        sprite_box!([0, 0, 0], [16, 16, 0], [16, 16, 3]),
    ],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [0, 0, 0], [16, 32, 3]),
        sprite_box!([0, 0, 0], [0, 16, 0], [32, 16, 3]),
        sprite_box!([0, 0, 0], [16, 0, 0], [16, 32, 3]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 3, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [3, 0, 0], [27, 32, 3]),
        sprite_box!([0, 0, 0], [0, 2, 0], [32, 27, 3]),
        sprite_box!([0, 0, 0], [2, 0, 0], [27, 32, 3]),
    ],
];

/// Vertical loops climb on one side of the tile row and come down on the other
pub(super) static VERTICAL_LOOP_LEFT: [[SpriteBox; 4]; 10] = [
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 7]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 7]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 7]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 7]),
    ],
    [
        sprite_box!([0, 0, 16], [0, 0, 16], [32, 26, 48]),
        sprite_box!([0, 0, 16], [0, 0, 16], [26, 32, 48]),
        sprite_box!([0, 6, 16], [0, 6, 16], [32, 26, 48]),
        sprite_box!([6, 0, 16], [6, 0, 16], [26, 32, 48]),
    ],
    [
        sprite_box!([0, 0, 32], [0, 0, 32], [32, 26, 96]),
        sprite_box!([0, 0, 32], [0, 0, 32], [26, 32, 96]),
        sprite_box!([0, 6, 32], [0, 6, 32], [32, 26, 96]),
        sprite_box!([6, 0, 32], [6, 0, 32], [26, 32, 96]),
    ],
    [SpriteBox::EMPTY; 4],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 6, 32], [0, 6, 32], [32, 26, 96]),
        sprite_box!([6, 0, 32], [6, 0, 32], [26, 32, 96]),
        sprite_box!([0, 0, 32], [0, 0, 32], [32, 26, 96]),
        sprite_box!([0, 0, 32], [0, 0, 32], [26, 32, 96]),
    ],
    [
        sprite_box!([0, 6, 16], [0, 6, 16], [32, 26, 48]),
        sprite_box!([6, 0, 16], [6, 0, 16], [26, 32, 48]),
        sprite_box!([0, 0, 16], [0, 0, 16], [32, 26, 48]),
        sprite_box!([0, 0, 16], [0, 0, 16], [26, 32, 48]),
    ],
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 7]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 7]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 7]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 7]),
    ],
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
];

pub(super) static VERTICAL_LOOP_RIGHT: [[SpriteBox; 4]; 10] = [
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 7]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 7]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 7]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 7]),
    ],
    [
        sprite_box!([0, 6, 16], [0, 6, 16], [32, 26, 48]),
        sprite_box!([6, 0, 16], [6, 0, 16], [26, 32, 48]),
        sprite_box!([0, 0, 16], [0, 0, 16], [32, 26, 48]),
        sprite_box!([0, 0, 16], [0, 0, 16], [26, 32, 48]),
    ],
    [
        sprite_box!([0, 6, 32], [0, 6, 32], [32, 26, 96]),
        sprite_box!([6, 0, 32], [6, 0, 32], [26, 32, 96]),
        sprite_box!([0, 0, 32], [0, 0, 32], [32, 26, 96]),
        sprite_box!([0, 0, 32], [0, 0, 32], [26, 32, 96]),
    ],
    [SpriteBox::EMPTY; 4],
    [SpriteBox::EMPTY; 4],
    [
        sprite_box!([0, 0, 32], [0, 0, 32], [32, 26, 96]),
        sprite_box!([0, 0, 32], [0, 0, 32], [26, 32, 96]),
        sprite_box!([0, 6, 32], [0, 6, 32], [32, 26, 96]),
        sprite_box!([6, 0, 32], [6, 0, 32], [26, 32, 96]),
    ],
    [
        sprite_box!([0, 0, 16], [0, 0, 16], [32, 26, 48]),
        sprite_box!([0, 0, 16], [0, 0, 16], [26, 32, 48]),
        sprite_box!([0, 6, 16], [0, 6, 16], [32, 26, 48]),
        sprite_box!([6, 0, 16], [6, 0, 16], [26, 32, 48]),
    ],
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 7]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 7]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 7]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 7]),
    ],
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
];

pub(super) static FLYER_TWIST_LEFT: [[SpriteBox; 4]; 3] = [
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [
        sprite_box!([0, 6, 8], [0, 6, 8], [32, 20, 20]),
        sprite_box!([6, 0, 8], [6, 0, 8], [20, 32, 20]),
        sprite_box!([0, 6, 8], [0, 6, 8], [32, 20, 20]),
        sprite_box!([6, 0, 8], [6, 0, 8], [20, 32, 20]),
    ],
    [
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
    ],
];

pub(super) static FLYER_TWIST_RIGHT: [[SpriteBox; 4]; 3] = [
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [
        sprite_box!([0, 6, 8], [0, 6, 8], [32, 20, 20]),
        sprite_box!([6, 0, 8], [6, 0, 8], [20, 32, 20]),
        sprite_box!([0, 6, 8], [0, 6, 8], [32, 20, 20]),
        sprite_box!([6, 0, 8], [6, 0, 8], [20, 32, 20]),
    ],
    [
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
    ],
];

pub(super) static FLYER_HALF_LOOP: [[SpriteBox; 4]; 4] = [
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 32]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 32]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 32]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 32]),
    ],
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [32, 20, 64]),
        sprite_box!([0, 0, 0], [0, 0, 0], [20, 32, 64]),
        sprite_box!([0, 12, 0], [0, 12, 0], [32, 20, 64]),
        sprite_box!([12, 0, 0], [12, 0, 0], [20, 32, 64]),
    ],
    [
        sprite_box!([0, 6, 32], [0, 6, 32], [32, 20, 3]),
        sprite_box!([6, 0, 32], [6, 0, 32], [20, 32, 3]),
        sprite_box!([0, 6, 32], [0, 6, 32], [32, 20, 3]),
        sprite_box!([6, 0, 32], [6, 0, 32], [20, 32, 3]),
    ],
];

pub(super) static FLYER_CORKSCREW_LEFT: [[SpriteBox; 4]; 3] = [
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [
        sprite_box!([6, 6, 10], [6, 6, 10], [20, 20, 30]),
        sprite_box!([6, 6, 10], [6, 6, 10], [20, 20, 30]),
        sprite_box!([6, 6, 10], [6, 6, 10], [20, 20, 30]),
        sprite_box!([6, 6, 10], [6, 6, 10], [20, 20, 30]),
    ],
    [
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
    ],
];

pub(super) static FLYER_CORKSCREW_RIGHT: [[SpriteBox; 4]; 3] = [
    [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([6, 0, 0], [6, 0, 0], [20, 32, 3]),
    ],
    [
        sprite_box!([6, 6, 10], [6, 6, 10], [20, 20, 30]),
        sprite_box!([6, 6, 10], [6, 6, 10], [20, 20, 30]),
        sprite_box!([6, 6, 10], [6, 6, 10], [20, 20, 30]),
        sprite_box!([6, 6, 10], [6, 6, 10], [20, 20, 30]),
    ],
    [
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
        sprite_box!([6, 0, 24], [6, 0, 24], [20, 32, 3]),
        sprite_box!([0, 6, 24], [0, 6, 24], [32, 20, 3]),
    ],
];

/// One tile 60 degree turns are split into a back and a front half
pub(super) static QUARTER_TURN_1_STEEP_BACK: [[SpriteBox; 4]; 1] = [
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [28, 28, 3]),
        sprite_box!([0, 0, 0], [0, 4, 0], [28, 28, 3]),
        sprite_box!([0, 0, 0], [4, 4, 0], [28, 28, 3]),
        sprite_box!([0, 0, 0], [4, 0, 0], [28, 28, 3]),
    ],
];

pub(super) static QUARTER_TURN_1_STEEP_FRONT: [[SpriteBox; 4]; 1] = [
    [
        sprite_box!([0, 0, 0], [0, 0, 0], [28, 2, 99]),
        sprite_box!([0, 0, 0], [0, 4, 0], [2, 28, 99]),
        sprite_box!([0, 0, 0], [4, 30, 0], [28, 2, 99]),
        sprite_box!([0, 0, 0], [30, 0, 0], [2, 28, 99]),
    ],
];
