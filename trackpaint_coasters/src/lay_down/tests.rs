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

use itertools::iproduct;
use trackpaint_core::{
    constants::{segments as s, TunnelSide, TunnelType},
    coordinates::{BoundBoxXYZ, CoordsXY, CoordsXYZ, Direction},
    image::ImageId,
    recording::{PaintCommand, RecordingSession},
    supports::{MetalSupportPlace, MetalSupportType},
    track::{Ride, TrackElemType, TrackElement},
};

use super::{diagonal, helix, inversions, straight, turns};
use crate::track_paint::{
    TrackPaintFunction, MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL,
    MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES as MAP_Q3,
    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES as MAP_Q5,
};

const HEIGHT: i32 = 48;

fn paint_at(
    paint: TrackPaintFunction,
    element: &TrackElement,
    sequence: u8,
    direction: Direction,
    position: CoordsXY,
) -> Vec<PaintCommand> {
    let mut session = RecordingSession::new();
    session.set_map_position(position);
    paint(
        &mut session,
        &Ride::default(),
        sequence,
        direction,
        HEIGHT,
        element,
    );
    session.take_commands()
}

fn paint(
    paint: TrackPaintFunction,
    element: &TrackElement,
    sequence: u8,
    direction: u8,
) -> Vec<PaintCommand> {
    paint_at(
        paint,
        element,
        sequence,
        Direction::new(direction),
        CoordsXY::default(),
    )
}

fn image(index: u32, offset: [i32; 3], bound_offset: [i32; 3], length: [i32; 3]) -> PaintCommand {
    PaintCommand::Image {
        image: ImageId(index),
        offset: CoordsXYZ::new(offset[0], offset[1], offset[2]),
        bound_box: BoundBoxXYZ::new(
            CoordsXYZ::new(bound_offset[0], bound_offset[1], bound_offset[2]),
            CoordsXYZ::new(length[0], length[1], length[2]),
        ),
    }
}

fn support(support_type: MetalSupportType, place: MetalSupportPlace, height: i32) -> PaintCommand {
    PaintCommand::MetalSupport {
        support_type,
        place,
        special: 0,
        height,
        image: ImageId(0),
    }
}

fn blocked(segments: u16) -> PaintCommand {
    PaintCommand::SegmentSupportHeight {
        segments,
        height: 0xFFFF,
        slope: 0,
    }
}

fn general(height: i32) -> PaintCommand {
    PaintCommand::GeneralSupportHeight {
        height,
        slope: 0x20,
    }
}

fn tunnels(commands: &[PaintCommand]) -> Vec<PaintCommand> {
    commands
        .iter()
        .filter(|x| matches!(x, PaintCommand::Tunnel { .. }))
        .copied()
        .collect()
}

#[test]
fn flat_upright() {
    let element = TrackElement::new(TrackElemType::Flat);
    assert_eq!(
        paint(straight::flat, &element, 0, 0),
        vec![
            image(26_227, [0, 6, 48], [0, 6, 48], [32, 20, 3]),
            support(MetalSupportType::Tubes, MetalSupportPlace::Centre, 48),
            PaintCommand::Tunnel {
                side: TunnelSide::Left,
                height: 48,
                kind: TunnelType::StandardFlat,
            },
            blocked(s::C4 | s::CC | s::D0),
            general(80),
        ]
    );
}

#[test]
fn flat_chain_lift_on_odd_direction() {
    let element = TrackElement::new(TrackElemType::Flat).with_chain(true);
    assert_eq!(
        paint(straight::flat, &element, 0, 1),
        vec![
            image(26_230, [6, 0, 48], [6, 0, 48], [20, 32, 3]),
            support(MetalSupportType::Tubes, MetalSupportPlace::Centre, 48),
            PaintCommand::Tunnel {
                side: TunnelSide::Right,
                height: 48,
                kind: TunnelType::StandardFlat,
            },
            blocked(s::C4 | s::C8 | s::D4),
            general(80),
        ]
    );
}

#[test]
fn flat_inverted() {
    let element = TrackElement::new(TrackElemType::Flat).inverted(true);
    assert_eq!(
        paint(straight::flat, &element, 0, 2),
        vec![
            image(26_231, [0, 6, 72], [0, 6, 72], [32, 20, 3]),
            support(MetalSupportType::TubesInverted, MetalSupportPlace::Centre, 78),
            PaintCommand::Tunnel {
                side: TunnelSide::Left,
                height: 48,
                kind: TunnelType::InvertedFlat,
            },
            blocked(s::C4 | s::CC | s::D0),
            general(96),
        ]
    );
    // inverted supports only stand on every other tile
    let commands = paint_at(
        straight::flat,
        &element,
        0,
        Direction::new(2),
        CoordsXY::from_tile(1, 0),
    );
    assert!(!commands
        .iter()
        .any(|x| matches!(x, PaintCommand::MetalSupport { .. })));
    assert_eq!(commands.len(), 4);
}

#[test]
fn slope_tunnels() {
    let element = TrackElement::new(TrackElemType::Up25);
    assert_eq!(
        tunnels(&paint(straight::up_25, &element, 0, 0)),
        vec![PaintCommand::Tunnel {
            side: TunnelSide::Left,
            height: 40,
            kind: TunnelType::StandardSlopeStart,
        }]
    );
    // going down, the visible edge is the top of the slope
    let element = TrackElement::new(TrackElemType::Down25);
    assert_eq!(
        tunnels(&paint(straight::down_25, &element, 0, 0)),
        vec![PaintCommand::Tunnel {
            side: TunnelSide::Left,
            height: 56,
            kind: TunnelType::StandardSlopeEnd,
        }]
    );
    assert_eq!(
        tunnels(&paint(straight::up_25, &element, 0, 1)),
        vec![PaintCommand::Tunnel {
            side: TunnelSide::Right,
            height: 56,
            kind: TunnelType::StandardSlopeEnd,
        }]
    );
}

#[test]
fn banked_track_draws_front_rail() {
    let element = TrackElement::new(TrackElemType::LeftBank);
    assert_eq!(
        paint(straight::left_bank, &element, 0, 0)[..2],
        [
            image(26_411, [0, 6, 48], [0, 6, 48], [32, 20, 3]),
            image(26_415, [0, 6, 48], [0, 27, 48], [32, 1, 26]),
        ]
    );
    let indices: Vec<u32> = paint(straight::left_bank, &element, 0, 1)
        .iter()
        .filter_map(|x| match x {
            PaintCommand::Image { image, .. } => Some(image.index()),
            _ => None,
        })
        .collect();
    assert_eq!(indices, vec![26_412]);
}

#[test]
fn quarter_turn_exit_tile() {
    let element = TrackElement::new(TrackElemType::LeftQuarterTurn5Tiles);
    assert_eq!(
        paint(turns::left_quarter_turn_5_tiles, &element, 6, 3),
        vec![
            image(26_442, [0, 0, 48], [0, 2, 48], [32, 27, 3]),
            support(MetalSupportType::Tubes, MetalSupportPlace::Centre, 48),
            PaintCommand::Tunnel {
                side: TunnelSide::Left,
                height: 48,
                kind: TunnelType::StandardFlat,
            },
            blocked(s::C0 | s::C4 | s::CC | s::D0),
            general(80),
        ]
    );
    // tiles the curve only clips have no sprite of their own
    assert_eq!(
        paint(turns::left_quarter_turn_5_tiles, &element, 1, 0),
        vec![blocked(s::B4 | s::C4 | s::C8 | s::CC | s::D0), general(80)]
    );
}

#[test]
fn diagonal_draws_from_one_tile() {
    let element = TrackElement::new(TrackElemType::DiagFlat);
    assert_eq!(
        paint(diagonal::diag_flat, &element, 1, 0),
        vec![
            image(26_984, [-16, -16, 48], [-16, -16, 48], [32, 32, 3]),
            support(MetalSupportType::Tubes, MetalSupportPlace::LeftCorner, 48),
            blocked(s::BC | s::C4 | s::CC | s::D0),
            general(80),
        ]
    );
    assert_eq!(
        paint(diagonal::diag_flat, &element, 0, 0),
        vec![blocked(s::B4 | s::C4 | s::C8 | s::CC), general(80)]
    );
}

#[test]
fn stations_use_lay_down_track() {
    let paint_station = super::get_track_paint_function(TrackElemType::BeginStation).unwrap();
    let element = TrackElement::new(TrackElemType::BeginStation).inverted(true);
    let mut session = RecordingSession::new();
    paint_station(
        &mut session,
        &Ride::default(),
        0,
        Direction::new(0),
        HEIGHT,
        &element,
    );
    assert_eq!(session.image_indices(), vec![22_430, 27_457, 22_402]);
    assert_eq!(session.commands().last(), Some(&general(96)));
}

#[test]
fn on_ride_photo() {
    let element = TrackElement::new(TrackElemType::OnRidePhoto);
    let mut session = RecordingSession::new();
    super::on_ride_photo(
        &mut session,
        &Ride::default(),
        0,
        Direction::new(0),
        HEIGHT,
        &element,
    );
    assert_eq!(
        session.image_indices(),
        vec![22_432, 27_459, 25_623, 25_623, 25_617]
    );
    assert_eq!(
        session.tunnels(TunnelSide::Left)[0].kind,
        TunnelType::StandardFlat
    );
    assert_eq!(session.commands().last(), Some(&general(96)));

    let mut session = RecordingSession::new();
    super::on_ride_photo(
        &mut session,
        &Ride::default(),
        0,
        Direction::new(1),
        HEIGHT,
        &element.inverted(true).taking_photo(true),
    );
    assert_eq!(
        session.image_indices(),
        vec![22_432, 27_462, 25_624, 25_624, 25_622]
    );
    assert!(session.commands().iter().any(|x| matches!(
        x,
        PaintCommand::MetalSupport {
            support_type: MetalSupportType::TubesInverted,
            ..
        }
    )));
}

fn assert_forwards(
    forwarder: TrackPaintFunction,
    canonical: TrackPaintFunction,
    track_type: TrackElemType,
    transform: impl Fn(u8, Direction) -> Option<(u8, Direction)>,
) {
    for (direction, sequence, inverted, chain) in iproduct!(
        Direction::ALL,
        0..track_type.sequence_count(),
        [false, true],
        [false, true]
    ) {
        let element = TrackElement::new(track_type)
            .inverted(inverted)
            .with_chain(chain);
        let expected = match transform(sequence, direction) {
            Some((sequence, direction)) => {
                paint_at(canonical, &element, sequence, direction, CoordsXY::default())
            }
            None => vec![],
        };
        assert_eq!(
            paint_at(forwarder, &element, sequence, direction, CoordsXY::default()),
            expected,
            "{track_type} sequence {sequence} {direction:?} inverted {inverted} chain {chain}"
        );
    }
}

fn rotated(quarter_turns: u8) -> impl Fn(u8, Direction) -> Option<(u8, Direction)> {
    move |sequence, direction| Some((sequence, direction.rotate(quarter_turns)))
}

fn mapped(
    map: &'static [u8],
    quarter_turns: u8,
) -> impl Fn(u8, Direction) -> Option<(u8, Direction)> {
    move |sequence, direction| Some((map[sequence as usize], direction.rotate(quarter_turns)))
}

#[test]
fn descending_straight_pieces() {
    use TrackElemType as T;
    assert_forwards(straight::down_25, straight::up_25, T::Down25, rotated(2));
    assert_forwards(straight::down_60, straight::up_60, T::Down60, rotated(2));
    assert_forwards(
        straight::flat_to_down_25,
        straight::up_25_to_flat,
        T::FlatToDown25,
        rotated(2),
    );
    assert_forwards(
        straight::down_25_to_down_60,
        straight::up_60_to_up_25,
        T::Down25ToDown60,
        rotated(2),
    );
    assert_forwards(
        straight::down_60_to_down_25,
        straight::up_25_to_up_60,
        T::Down60ToDown25,
        rotated(2),
    );
    assert_forwards(
        straight::down_25_to_flat,
        straight::flat_to_up_25,
        T::Down25ToFlat,
        rotated(2),
    );
}

#[test]
fn banking_transitions() {
    use TrackElemType as T;
    assert_forwards(
        straight::left_bank_to_flat,
        straight::flat_to_right_bank,
        T::LeftBankToFlat,
        rotated(2),
    );
    assert_forwards(
        straight::right_bank_to_flat,
        straight::flat_to_left_bank,
        T::RightBankToFlat,
        rotated(2),
    );
    assert_forwards(
        straight::left_bank_to_down_25,
        straight::up_25_to_right_bank,
        T::LeftBankToDown25,
        rotated(2),
    );
    assert_forwards(
        straight::right_bank_to_down_25,
        straight::up_25_to_left_bank,
        T::RightBankToDown25,
        rotated(2),
    );
    assert_forwards(
        straight::down_25_to_left_bank,
        straight::right_bank_to_up_25,
        T::Down25ToLeftBank,
        rotated(2),
    );
    assert_forwards(
        straight::down_25_to_right_bank,
        straight::left_bank_to_up_25,
        T::Down25ToRightBank,
        rotated(2),
    );
    assert_forwards(straight::right_bank, straight::left_bank, T::RightBank, rotated(2));
}

#[test]
fn right_handed_turns() {
    use TrackElemType as T;
    assert_forwards(
        turns::right_quarter_turn_5_tiles,
        turns::left_quarter_turn_5_tiles,
        T::RightQuarterTurn5Tiles,
        mapped(&MAP_Q5, 3),
    );
    assert_forwards(
        turns::banked_right_quarter_turn_5_tiles,
        turns::banked_left_quarter_turn_5_tiles,
        T::BankedRightQuarterTurn5Tiles,
        mapped(&MAP_Q5, 3),
    );
    assert_forwards(
        turns::right_quarter_turn_3_tiles,
        turns::left_quarter_turn_3_tiles,
        T::RightQuarterTurn3Tiles,
        mapped(&MAP_Q3, 3),
    );
    assert_forwards(
        turns::right_banked_quarter_turn_3_tiles,
        turns::left_banked_quarter_turn_3_tiles,
        T::RightBankedQuarterTurn3Tiles,
        mapped(&MAP_Q3, 3),
    );
}

#[test]
fn descending_turns() {
    use TrackElemType as T;
    assert_forwards(
        turns::left_quarter_turn_5_tiles_down_25,
        turns::right_quarter_turn_5_tiles_up_25,
        T::LeftQuarterTurn5TilesDown25,
        mapped(&MAP_Q5, 1),
    );
    assert_forwards(
        turns::right_quarter_turn_5_tiles_down_25,
        turns::left_quarter_turn_5_tiles_up_25,
        T::RightQuarterTurn5TilesDown25,
        mapped(&MAP_Q5, 3),
    );
    assert_forwards(
        turns::left_quarter_turn_3_tiles_down_25,
        turns::right_quarter_turn_3_tiles_up_25,
        T::LeftQuarterTurn3TilesDown25,
        mapped(&MAP_Q3, 1),
    );
    assert_forwards(
        turns::right_quarter_turn_3_tiles_down_25,
        turns::left_quarter_turn_3_tiles_up_25,
        T::RightQuarterTurn3TilesDown25,
        mapped(&MAP_Q3, 3),
    );
    assert_forwards(
        turns::left_quarter_turn_1_tile_down_60,
        turns::right_quarter_turn_1_tile_up_60,
        T::LeftQuarterTurn1TileDown60,
        rotated(1),
    );
    assert_forwards(
        turns::right_quarter_turn_1_tile_down_60,
        turns::left_quarter_turn_1_tile_up_60,
        T::RightQuarterTurn1TileDown60,
        rotated(3),
    );
}

#[test]
fn descending_turn_starts_at_the_top() {
    // the first tile of the way down is the last tile of the climb
    let element = TrackElement::new(TrackElemType::LeftQuarterTurn3TilesDown25);
    assert_eq!(
        paint(turns::left_quarter_turn_3_tiles_down_25, &element, 0, 0),
        vec![
            image(26_760, [0, 0, 48], [0, 6, 48], [32, 20, 3]),
            PaintCommand::MetalSupport {
                support_type: MetalSupportType::Tubes,
                place: MetalSupportPlace::Centre,
                special: 8,
                height: 48,
                image: ImageId(0),
            },
            PaintCommand::Tunnel {
                side: TunnelSide::Left,
                height: 56,
                kind: TunnelType::StandardSlopeEnd,
            },
            blocked(s::BC | s::C4 | s::CC | s::D4),
            general(120),
        ]
    );
    // the steep single-tile turns hand the heading on the other way round
    let element = TrackElement::new(TrackElemType::LeftQuarterTurn1TileDown60);
    for direction in 0..4 {
        assert_eq!(
            paint(turns::left_quarter_turn_1_tile_down_60, &element, 0, direction),
            paint(
                turns::right_quarter_turn_1_tile_up_60,
                &element,
                0,
                (direction + 1) & 3
            )
        );
    }
}

#[test]
fn descending_helices() {
    use TrackElemType as T;
    fn helix_down(
        half: u8,
        map: &'static [u8],
        wrap: u8,
        turn: u8,
    ) -> impl Fn(u8, Direction) -> Option<(u8, Direction)> {
        move |sequence, direction| {
            let (sequence, direction) = if sequence >= half {
                (sequence - half, direction.rotate(wrap))
            } else {
                (sequence, direction)
            };
            Some((map[sequence as usize], direction.rotate(turn)))
        }
    }
    assert_forwards(
        helix::left_half_banked_helix_down_small,
        helix::right_half_banked_helix_up_small,
        T::LeftHalfBankedHelixDownSmall,
        helix_down(4, &MAP_Q3, 3, 1),
    );
    assert_forwards(
        helix::right_half_banked_helix_down_small,
        helix::left_half_banked_helix_up_small,
        T::RightHalfBankedHelixDownSmall,
        helix_down(4, &MAP_Q3, 1, 3),
    );
    assert_forwards(
        helix::left_half_banked_helix_down_large,
        helix::right_half_banked_helix_up_large,
        T::LeftHalfBankedHelixDownLarge,
        helix_down(7, &MAP_Q5, 3, 1),
    );
    assert_forwards(
        helix::right_half_banked_helix_down_large,
        helix::left_half_banked_helix_up_large,
        T::RightHalfBankedHelixDownLarge,
        helix_down(7, &MAP_Q5, 1, 3),
    );
}

#[test]
fn helix_halves_are_rotated_quarter_turns() {
    let cases: [(TrackPaintFunction, TrackElemType, u8); 4] = [
        (
            helix::left_half_banked_helix_up_small,
            TrackElemType::LeftHalfBankedHelixUpSmall,
            3,
        ),
        (
            helix::right_half_banked_helix_up_small,
            TrackElemType::RightHalfBankedHelixUpSmall,
            1,
        ),
        (
            helix::left_half_banked_helix_up_large,
            TrackElemType::LeftHalfBankedHelixUpLarge,
            3,
        ),
        (
            helix::right_half_banked_helix_up_large,
            TrackElemType::RightHalfBankedHelixUpLarge,
            1,
        ),
    ];
    for (routine, track_type, turn) in cases {
        let element = TrackElement::new(track_type);
        let half = track_type.sequence_count() / 2;
        for (direction, sequence) in iproduct!(0..4, 0..half) {
            let without_tunnels = |commands: Vec<PaintCommand>| {
                commands
                    .into_iter()
                    .filter(|x| !matches!(x, PaintCommand::Tunnel { .. }))
                    .collect::<Vec<_>>()
            };
            assert_eq!(
                without_tunnels(paint(routine, &element, sequence + half, direction)),
                without_tunnels(paint(
                    routine,
                    &element,
                    sequence,
                    Direction::new(direction).rotate(turn).get()
                )),
                "{track_type} sequence {sequence} direction {direction}"
            );
        }
    }
}

#[test]
fn eighth_turns_to_orthogonal() {
    use TrackElemType as T;
    assert_forwards(
        diagonal::left_eighth_to_orthogonal,
        diagonal::right_eighth_to_diag,
        T::LeftEighthToOrthogonal,
        mapped(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, 2),
    );
    assert_forwards(
        diagonal::right_eighth_to_orthogonal,
        diagonal::left_eighth_to_diag,
        T::RightEighthToOrthogonal,
        mapped(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, 3),
    );
    assert_forwards(
        diagonal::left_eighth_bank_to_orthogonal,
        diagonal::right_eighth_bank_to_diag,
        T::LeftEighthBankToOrthogonal,
        mapped(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, 2),
    );
    assert_forwards(
        diagonal::right_eighth_bank_to_orthogonal,
        diagonal::left_eighth_bank_to_diag,
        T::RightEighthBankToOrthogonal,
        mapped(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, 3),
    );
}

#[test]
fn flyer_descents_run_backwards() {
    use TrackElemType as T;
    assert_forwards(
        inversions::flyer_half_loop_down,
        inversions::flyer_half_loop_up,
        T::FlyerHalfLoopDown,
        |sequence, direction| Some((3 - sequence, direction)),
    );
    assert_forwards(
        inversions::left_flyer_corkscrew_down,
        inversions::right_flyer_corkscrew_up,
        T::LeftFlyerCorkscrewDown,
        |sequence, direction| Some((2 - sequence, direction.rotate(1))),
    );
    assert_forwards(
        inversions::right_flyer_corkscrew_down,
        inversions::left_flyer_corkscrew_up,
        T::RightFlyerCorkscrewDown,
        |sequence, direction| Some((2 - sequence, direction.rotate(3))),
    );
}

#[test]
fn flyer_twists_change_inversion() {
    let element = TrackElement::new(TrackElemType::LeftFlyerTwistUp);
    // the inverted flag has no effect on a piece that flips the train itself
    assert_eq!(
        paint(inversions::left_flyer_twist_up, &element, 2, 0),
        paint(inversions::left_flyer_twist_up, &element.inverted(true), 2, 0)
    );
    assert!(paint(inversions::left_flyer_twist_up, &element, 0, 0).contains(
        &PaintCommand::Tunnel {
            side: TunnelSide::Left,
            height: 48,
            kind: TunnelType::StandardFlat,
        }
    ));
    let element = TrackElement::new(TrackElemType::LeftFlyerTwistDown);
    assert!(paint(inversions::left_flyer_twist_down, &element, 0, 0).contains(
        &PaintCommand::Tunnel {
            side: TunnelSide::Left,
            height: 48,
            kind: TunnelType::InvertedFlat,
        }
    ));
}

#[test]
fn vertical_loop_top_has_no_sprites() {
    let element = TrackElement::new(TrackElemType::LeftVerticalLoop);
    for (sequence, direction) in iproduct!([4, 5], 0..4) {
        assert_eq!(
            paint(inversions::left_vertical_loop, &element, sequence, direction),
            vec![general(HEIGHT + 168)]
        );
    }
}
