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

//! Building blocks shared by the per-ride track paint routines.
//!
//! Most pieces are described as a [PieceDef]: literal sprite tables indexed by
//! `[sequence][direction]`, plus the bounding boxes, supports, tunnels and clearances
//! that go with them. [paint_piece] walks one tile of such a table and issues the calls
//! into the paint session.

use trackpaint_core::{
    constants::{
        rotate_segments, TunnelSide, TunnelType, GENERAL_SUPPORT_SLOPE, SUPPORT_HEIGHT_BLOCKED,
    },
    coordinates::{BoundBoxXYZ, CoordsXYZ, Direction},
    image::ColourScheme,
    session::PaintSession,
    supports::{MetalSupportPlace, MetalSupportType},
    track::{Ride, TrackElement},
};

/// Paints one tile of a track piece.
///
/// Arguments are the session, the ride, the track sequence (tile index within the piece),
/// the direction the piece faces, the base height of the tile in world units, and the
/// element itself.
pub type TrackPaintFunction =
    fn(&mut dyn PaintSession, &Ride, u8, Direction, i32, &TrackElement);

pub const MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES: [u8; 7] =
    [6, 4, 5, 3, 1, 2, 0];
pub const MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES: [u8; 4] = [3, 1, 2, 0];
pub const MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL: [u8; 5] = [4, 2, 3, 1, 0];

/// Looks a sequence up in one of the mirror maps. Sequences past the end of the map
/// don't exist on the mirrored piece either.
#[inline]
pub fn map_sequence(map: &[u8], sequence: u8) -> Option<u8> {
    map.get(sequence as usize).copied()
}

/// Where a sprite is drawn, relative to the tile origin and the track's base height.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpriteBox {
    pub offset: CoordsXYZ,
    pub bound_box: BoundBoxXYZ,
}
impl SpriteBox {
    /// Placeholder for table cells that never have a sprite.
    pub const EMPTY: SpriteBox = SpriteBox {
        offset: CoordsXYZ::new(0, 0, 0),
        bound_box: BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    };

    #[inline]
    fn at_height(&self, height: i32) -> (CoordsXYZ, BoundBoxXYZ) {
        (
            self.offset.raise(height),
            BoundBoxXYZ::new(self.bound_box.offset.raise(height), self.bound_box.length),
        )
    }
}

/// Builds a [SpriteBox] from `[x, y, z]` triples: sprite offset, bounding box offset,
/// bounding box length.
///
/// Expands to a plain struct literal, usable anywhere in a static table.
macro_rules! sprite_box {
    ([$ox:expr, $oy:expr, $oz:expr], [$bx:expr, $by:expr, $bz:expr], [$lx:expr, $ly:expr, $lz:expr]) => {
        $crate::track_paint::SpriteBox {
            offset: ::trackpaint_core::coordinates::CoordsXYZ {
                x: $ox,
                y: $oy,
                z: $oz,
            },
            bound_box: ::trackpaint_core::coordinates::BoundBoxXYZ {
                offset: ::trackpaint_core::coordinates::CoordsXYZ {
                    x: $bx,
                    y: $by,
                    z: $bz,
                },
                length: ::trackpaint_core::coordinates::CoordsXYZ {
                    x: $lx,
                    y: $ly,
                    z: $lz,
                },
            },
        }
    };
}
pub(crate) use sprite_box;

/// A support column on one tile: placement (for direction 0), crossbeam selector, and
/// height above the track's base height.
macro_rules! support_tile {
    ($place:ident, $special:expr, $height:expr) => {
        $crate::track_paint::SupportTile {
            place: ::trackpaint_core::supports::MetalSupportPlace::$place,
            special: $special,
            height: $height,
        }
    };
}
pub(crate) use support_tile;

/// Bounding boxes for one sprite layer.
#[derive(Clone, Copy, Debug)]
pub enum Boxes {
    /// One box per sequence, given for direction 0; odd directions swap x and y.
    Rotated(&'static [SpriteBox]),
    /// Explicit boxes per sequence and direction.
    Fixed(&'static [[SpriteBox; 4]]),
}

/// A set of sprites drawn with the same colour scheme, e.g. the track itself or the
/// front half of a banked rail.
#[derive(Clone, Copy, Debug)]
pub struct Layer {
    pub scheme: ColourScheme,
    /// Sprite indices, `[sequence][direction]`. Zero means nothing is drawn.
    pub images: &'static [[u32; 4]],
    pub boxes: Boxes,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SupportTile {
    pub place: MetalSupportPlace,
    pub special: i8,
    pub height: i16,
}

#[derive(Clone, Copy, Debug)]
pub struct Supports {
    pub kind: MetalSupportType,
    /// Only draw on every other tile, see [PaintSession::should_paint_supports]
    pub checkerboard: bool,
    pub tiles: &'static [Option<SupportTile>],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TunnelSpec {
    /// Relative to the tile's base height
    pub height: i16,
    pub kind: TunnelType,
}
impl TunnelSpec {
    pub const fn new(height: i16, kind: TunnelType) -> Self {
        Self { height, kind }
    }
}

/// How a piece changes the heading of the train between its first and last tile.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Turn {
    Straight,
    Left,
    Right,
    Reverse,
}
impl Turn {
    const fn quarter_turns(&self) -> u8 {
        match self {
            Turn::Straight => 0,
            Turn::Right => 1,
            Turn::Reverse => 2,
            Turn::Left => 3,
        }
    }
}

/// Tunnel markers at the two ends of a piece.
///
/// Only the two tile edges facing the viewer carry tunnels: the entry edge of sequence 0
/// is visible when the piece faces direction 0 (left) or 3 (right), and the exit edge of
/// the last sequence when the train leaves heading 2 (left) or 1 (right).
#[derive(Clone, Copy, Debug)]
pub struct Tunnels {
    pub entry: Option<TunnelSpec>,
    pub exit: Option<TunnelSpec>,
    pub turn: Turn,
}
impl Tunnels {
    pub const NONE: Tunnels = Tunnels {
        entry: None,
        exit: None,
        turn: Turn::Straight,
    };

    pub const fn straight(entry: TunnelSpec, exit: TunnelSpec) -> Tunnels {
        Tunnels {
            entry: Some(entry),
            exit: Some(exit),
            turn: Turn::Straight,
        }
    }

    fn push(
        &self,
        session: &mut dyn PaintSession,
        sequence: usize,
        last_sequence: usize,
        direction: Direction,
        height: i32,
    ) {
        if sequence == 0 {
            if let Some(entry) = self.entry {
                let side = match direction.get() {
                    0 => Some(TunnelSide::Left),
                    3 => Some(TunnelSide::Right),
                    _ => None,
                };
                if let Some(side) = side {
                    session.push_tunnel(side, height + entry.height as i32, entry.kind);
                }
            }
        }
        if sequence == last_sequence {
            if let Some(exit) = self.exit {
                let side = match direction.rotate(self.turn.quarter_turns()).get() {
                    2 => Some(TunnelSide::Left),
                    1 => Some(TunnelSide::Right),
                    _ => None,
                };
                if let Some(side) = side {
                    session.push_tunnel(side, height + exit.height as i32, exit.kind);
                }
            }
        }
    }
}

/// Everything needed to paint one variant (upright or inverted) of a piece.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub layers: &'static [Layer],
    /// Drawn instead of `layers` when the element has a chain lift. Empty if the piece
    /// has no chain variant.
    pub chain_layers: &'static [Layer],
    pub supports: Supports,
    pub tunnels: Tunnels,
    /// Blocked segments per sequence, for direction 0
    pub segments: &'static [u16],
    /// General support height above the base height, per sequence
    pub clearance: &'static [i16],
}

#[derive(Clone, Copy, Debug)]
pub struct PieceDef {
    pub upright: &'static Style,
    /// None if the piece looks the same either way, e.g. because it changes inversion
    /// partway through.
    pub inverted: Option<&'static Style>,
}

impl PieceDef {
    pub fn style(&self, inverted: bool) -> &'static Style {
        match (self.inverted, inverted) {
            (Some(style), true) => style,
            _ => self.upright,
        }
    }

    pub fn sequence_count(&self) -> usize {
        self.upright.segments.len()
    }
}

impl Layer {
    fn paint(
        &self,
        session: &mut dyn PaintSession,
        sequence: usize,
        direction: Direction,
        height: i32,
    ) {
        let Some(row) = self.images.get(sequence) else {
            return;
        };
        let index = row[direction.index()];
        if index == 0 {
            return;
        }
        let image = session.track_colours(self.scheme).with_index(index);
        match self.boxes {
            Boxes::Rotated(boxes) => {
                if let Some(sprite_box) = boxes.get(sequence) {
                    let (offset, bound_box) = sprite_box.at_height(height);
                    session.add_image_as_parent_rotated(direction, image, offset, bound_box);
                }
            }
            Boxes::Fixed(boxes) => {
                if let Some(row) = boxes.get(sequence) {
                    let (offset, bound_box) = row[direction.index()].at_height(height);
                    session.add_image_as_parent(image, offset, bound_box);
                }
            }
        }
    }
}

impl Style {
    pub fn paint(
        &self,
        session: &mut dyn PaintSession,
        sequence: u8,
        direction: Direction,
        height: i32,
        has_chain: bool,
    ) {
        let sequence = sequence as usize;
        let Some(&segments) = self.segments.get(sequence) else {
            return;
        };

        let layers = if has_chain && !self.chain_layers.is_empty() {
            self.chain_layers
        } else {
            self.layers
        };
        for layer in layers {
            layer.paint(session, sequence, direction, height);
        }

        if let Some(Some(tile)) = self.supports.tiles.get(sequence) {
            if !self.supports.checkerboard || session.should_paint_supports() {
                let template = session.track_colours(ColourScheme::Supports);
                session.metal_a_supports_rotated(
                    self.supports.kind,
                    tile.place,
                    direction,
                    tile.special as i32,
                    height + tile.height as i32,
                    template,
                );
            }
        }

        self.tunnels.push(
            session,
            sequence,
            self.segments.len() - 1,
            direction,
            height,
        );

        if segments != 0 {
            session.set_segment_support_height(
                rotate_segments(segments, direction),
                SUPPORT_HEIGHT_BLOCKED,
                0,
            );
        }
        if let Some(&clearance) = self.clearance.get(sequence) {
            session.set_general_support_height(height + clearance as i32, GENERAL_SUPPORT_SLOPE);
        }
    }
}

/// Paints one tile of a table-driven piece, choosing the upright or inverted style and
/// the chain lift variant from the element.
pub fn paint_piece(
    session: &mut dyn PaintSession,
    piece: &PieceDef,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    piece
        .style(element.inverted)
        .paint(session, sequence, direction, height, element.has_chain);
}

/// Defines one paint routine per table-driven piece.
macro_rules! piece_routines {
    ($($name:ident => $piece:ident,)*) => {
        $(
            pub(super) fn $name(
                session: &mut dyn ::trackpaint_core::session::PaintSession,
                _ride: &::trackpaint_core::track::Ride,
                sequence: u8,
                direction: ::trackpaint_core::coordinates::Direction,
                height: i32,
                element: &::trackpaint_core::track::TrackElement,
            ) {
                $crate::track_paint::paint_piece(session, &$piece, sequence, direction, height, element);
            }
        )*
    };
}
pub(crate) use piece_routines;

#[cfg(test)]
mod tests {
    use super::*;
    use trackpaint_core::{
        constants::segments as s,
        image::ImageId,
        recording::{PaintCommand, RecordingSession},
        track::TrackElemType,
    };

    static BOXES: [SpriteBox; 2] = [
        sprite_box!([0, 6, 0], [0, 6, 0], [32, 20, 3]),
        sprite_box!([0, 6, 8], [0, 6, 8], [32, 20, 3]),
    ];

    static TWO_TILES_UPRIGHT: Style = Style {
        layers: &[Layer {
            scheme: ColourScheme::Track,
            images: &[[10, 11, 12, 13], [0, 21, 22, 23]],
            boxes: Boxes::Rotated(&BOXES),
        }],
        chain_layers: &[Layer {
            scheme: ColourScheme::Track,
            images: &[[30, 31, 32, 33], [0, 41, 42, 43]],
            boxes: Boxes::Rotated(&BOXES),
        }],
        supports: Supports {
            kind: MetalSupportType::Tubes,
            checkerboard: true,
            tiles: &[Some(support_tile!(TopLeftSide, 4, 2)), None],
        },
        tunnels: Tunnels::straight(
            TunnelSpec::new(-8, TunnelType::StandardSlopeStart),
            TunnelSpec::new(8, TunnelType::StandardSlopeEnd),
        ),
        segments: &[s::C4 | s::CC, 0],
        clearance: &[32, 40],
    };

    static TWO_TILES: PieceDef = PieceDef {
        upright: &TWO_TILES_UPRIGHT,
        inverted: None,
    };

    fn paint(sequence: u8, direction: u8, element: TrackElement) -> Vec<PaintCommand> {
        let mut session = RecordingSession::new();
        paint_piece(
            &mut session,
            &TWO_TILES,
            sequence,
            Direction::new(direction),
            64,
            &element,
        );
        session.take_commands()
    }

    #[test]
    fn first_tile_in_direction_zero() {
        let commands = paint(0, 0, TrackElement::new(TrackElemType::Up25));
        assert_eq!(
            commands,
            vec![
                PaintCommand::Image {
                    image: ImageId(10),
                    offset: CoordsXYZ::new(0, 6, 64),
                    bound_box: BoundBoxXYZ::new(
                        CoordsXYZ::new(0, 6, 64),
                        CoordsXYZ::new(32, 20, 3)
                    ),
                },
                PaintCommand::MetalSupport {
                    support_type: MetalSupportType::Tubes,
                    place: MetalSupportPlace::TopLeftSide,
                    special: 4,
                    height: 66,
                    image: ImageId(0),
                },
                PaintCommand::Tunnel {
                    side: TunnelSide::Left,
                    height: 56,
                    kind: TunnelType::StandardSlopeStart,
                },
                PaintCommand::SegmentSupportHeight {
                    segments: s::C4 | s::CC,
                    height: 0xFFFF,
                    slope: 0,
                },
                PaintCommand::GeneralSupportHeight {
                    height: 96,
                    slope: 0x20,
                },
            ]
        );
    }

    #[test]
    fn last_tile_pushes_exit_tunnel() {
        // direction 1 leaves through the right edge, with the odd-direction box swap
        let commands = paint(1, 1, TrackElement::new(TrackElemType::Up25).with_chain(true));
        assert_eq!(
            commands,
            vec![
                PaintCommand::Image {
                    image: ImageId(41),
                    offset: CoordsXYZ::new(6, 0, 72),
                    bound_box: BoundBoxXYZ::new(
                        CoordsXYZ::new(6, 0, 72),
                        CoordsXYZ::new(20, 32, 3)
                    ),
                },
                PaintCommand::Tunnel {
                    side: TunnelSide::Right,
                    height: 72,
                    kind: TunnelType::StandardSlopeEnd,
                },
                PaintCommand::GeneralSupportHeight {
                    height: 104,
                    slope: 0x20,
                },
            ]
        );
        // direction 0 has no sprite on the last tile, and faces away from the viewer
        let commands = paint(1, 0, TrackElement::new(TrackElemType::Up25));
        assert_eq!(
            commands,
            vec![PaintCommand::GeneralSupportHeight {
                height: 104,
                slope: 0x20
            }]
        );
    }

    #[test]
    fn out_of_range_sequence_is_ignored() {
        assert!(paint(2, 0, TrackElement::new(TrackElemType::Up25)).is_empty());
    }

    #[test]
    fn inverted_flag_without_inverted_style() {
        assert_eq!(
            paint(0, 2, TrackElement::new(TrackElemType::Up25).inverted(true)),
            paint(0, 2, TrackElement::new(TrackElemType::Up25))
        );
    }

    #[test]
    fn checkerboard_skips_supports() {
        let mut session = RecordingSession::new();
        session.set_map_position(trackpaint_core::coordinates::CoordsXY::from_tile(1, 0));
        TWO_TILES
            .upright
            .paint(&mut session, 0, Direction::new(3), 0, false);
        assert!(!session
            .commands()
            .iter()
            .any(|x| matches!(x, PaintCommand::MetalSupport { .. })));
        assert!(session
            .commands()
            .contains(&PaintCommand::Tunnel {
                side: TunnelSide::Right,
                height: -8,
                kind: TunnelType::StandardSlopeStart
            }));
    }

    #[test]
    fn sequence_maps_are_involutions() {
        for map in [
            &MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES[..],
            &MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES[..],
            &MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL[..],
        ] {
            for sequence in 0..map.len() as u8 {
                let mapped = map_sequence(map, sequence).unwrap();
                assert_eq!(map_sequence(map, mapped), Some(sequence));
            }
            assert_eq!(map_sequence(map, map.len() as u8), None);
        }
    }
}
