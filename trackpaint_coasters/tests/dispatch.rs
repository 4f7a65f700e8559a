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
use rustc_hash::FxHashSet;
use trackpaint_coasters::{
    lay_down,
    shared::{self, SPR_GENERIC_BOOSTER_SW_NE},
};
use trackpaint_core::{
    coordinates::Direction,
    recording::{PaintCommand, RecordingSession},
    track::{Ride, TrackElemType, TrackElemType as T, TrackElement},
};

#[ctor::ctor]
fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Every piece the lay-down coaster has its own sprites for.
const LAY_DOWN_TYPES: [TrackElemType; 110] = [
    T::Flat,
    T::EndStation,
    T::BeginStation,
    T::MiddleStation,
    T::Up25,
    T::Up60,
    T::FlatToUp25,
    T::Up25ToUp60,
    T::Up60ToUp25,
    T::Up25ToFlat,
    T::Down25,
    T::Down60,
    T::FlatToDown25,
    T::Down25ToDown60,
    T::Down60ToDown25,
    T::Down25ToFlat,
    T::LeftQuarterTurn5Tiles,
    T::RightQuarterTurn5Tiles,
    T::FlatToLeftBank,
    T::FlatToRightBank,
    T::LeftBankToFlat,
    T::RightBankToFlat,
    T::BankedLeftQuarterTurn5Tiles,
    T::BankedRightQuarterTurn5Tiles,
    T::LeftBankToUp25,
    T::RightBankToUp25,
    T::Up25ToLeftBank,
    T::Up25ToRightBank,
    T::LeftBankToDown25,
    T::RightBankToDown25,
    T::Down25ToLeftBank,
    T::Down25ToRightBank,
    T::LeftBank,
    T::RightBank,
    T::LeftQuarterTurn5TilesUp25,
    T::RightQuarterTurn5TilesUp25,
    T::LeftQuarterTurn5TilesDown25,
    T::RightQuarterTurn5TilesDown25,
    T::SBendLeft,
    T::SBendRight,
    T::LeftVerticalLoop,
    T::RightVerticalLoop,
    T::LeftQuarterTurn3Tiles,
    T::RightQuarterTurn3Tiles,
    T::LeftBankedQuarterTurn3Tiles,
    T::RightBankedQuarterTurn3Tiles,
    T::LeftQuarterTurn3TilesUp25,
    T::RightQuarterTurn3TilesUp25,
    T::LeftQuarterTurn3TilesDown25,
    T::RightQuarterTurn3TilesDown25,
    T::LeftHalfBankedHelixUpSmall,
    T::RightHalfBankedHelixUpSmall,
    T::LeftHalfBankedHelixDownSmall,
    T::RightHalfBankedHelixDownSmall,
    T::LeftHalfBankedHelixUpLarge,
    T::RightHalfBankedHelixUpLarge,
    T::LeftHalfBankedHelixDownLarge,
    T::RightHalfBankedHelixDownLarge,
    T::LeftQuarterTurn1TileUp60,
    T::RightQuarterTurn1TileUp60,
    T::LeftQuarterTurn1TileDown60,
    T::RightQuarterTurn1TileDown60,
    T::Brakes,
    T::OnRidePhoto,
    T::LeftEighthToDiag,
    T::RightEighthToDiag,
    T::LeftEighthToOrthogonal,
    T::RightEighthToOrthogonal,
    T::LeftEighthBankToDiag,
    T::RightEighthBankToDiag,
    T::LeftEighthBankToOrthogonal,
    T::RightEighthBankToOrthogonal,
    T::DiagFlat,
    T::DiagUp25,
    T::DiagUp60,
    T::DiagFlatToUp25,
    T::DiagUp25ToUp60,
    T::DiagUp60ToUp25,
    T::DiagUp25ToFlat,
    T::DiagDown25,
    T::DiagDown60,
    T::DiagFlatToDown25,
    T::DiagDown25ToDown60,
    T::DiagDown60ToDown25,
    T::DiagDown25ToFlat,
    T::DiagFlatToLeftBank,
    T::DiagFlatToRightBank,
    T::DiagLeftBankToFlat,
    T::DiagRightBankToFlat,
    T::DiagLeftBankToUp25,
    T::DiagRightBankToUp25,
    T::DiagUp25ToLeftBank,
    T::DiagUp25ToRightBank,
    T::DiagLeftBankToDown25,
    T::DiagRightBankToDown25,
    T::DiagDown25ToLeftBank,
    T::DiagDown25ToRightBank,
    T::DiagLeftBank,
    T::DiagRightBank,
    T::LeftFlyerTwistUp,
    T::RightFlyerTwistUp,
    T::LeftFlyerTwistDown,
    T::RightFlyerTwistDown,
    T::FlyerHalfLoopUp,
    T::FlyerHalfLoopDown,
    T::LeftFlyerCorkscrewUp,
    T::RightFlyerCorkscrewUp,
    T::LeftFlyerCorkscrewDown,
    T::RightFlyerCorkscrewDown,
    T::BlockBrakes,
];

fn paint(
    track_type: TrackElemType,
    sequence: u8,
    direction: Direction,
    element: &TrackElement,
) -> Vec<PaintCommand> {
    let mut session = RecordingSession::new();
    if let Some(paint) = lay_down::get_track_paint_function(track_type) {
        paint(
            &mut session,
            &Ride::default(),
            sequence,
            direction,
            64,
            element,
        );
    }
    session.take_commands()
}

#[test]
fn dispatch_covers_lay_down_and_shared_pieces() {
    let lay_down_types: FxHashSet<TrackElemType> = LAY_DOWN_TYPES.into_iter().collect();
    assert_eq!(lay_down_types.len(), LAY_DOWN_TYPES.len());
    for &track_type in TrackElemType::ALL {
        assert_eq!(
            lay_down::own_track_paint_function(track_type).is_some(),
            lay_down_types.contains(&track_type),
            "{track_type}"
        );
        let expected = lay_down_types.contains(&track_type)
            || shared::get_track_paint_function(track_type).is_some();
        assert_eq!(
            lay_down::get_track_paint_function(track_type).is_some(),
            expected,
            "{track_type}"
        );
    }
    assert!(lay_down::get_track_paint_function(T::MiniGolfHoleA).is_none());
}

#[test]
fn boosters_fall_back_to_shared_sprites() {
    assert!(!LAY_DOWN_TYPES.contains(&T::Booster));
    let element = TrackElement::new(T::Booster);
    let mut session = RecordingSession::new();
    let paint = lay_down::get_track_paint_function(T::Booster).unwrap();
    paint(
        &mut session,
        &Ride::default(),
        0,
        Direction::new(0),
        64,
        &element,
    );
    assert_eq!(session.image_indices(), vec![SPR_GENERIC_BOOSTER_SW_NE]);
}

#[test]
fn stations_use_lay_down_sprites() {
    for track_type in [T::BeginStation, T::MiddleStation, T::EndStation] {
        let commands = paint(
            track_type,
            0,
            Direction::new(0),
            &TrackElement::new(track_type),
        );
        assert!(commands.iter().any(|x| matches!(
            x,
            PaintCommand::Image { image, .. } if image.index() == 27_455
        )));
        // stations only draw from their first tile
        assert!(paint(track_type, 1, Direction::new(0), &TrackElement::new(track_type)).is_empty());
    }
}

#[test]
fn every_tile_reports_clearance() {
    for &track_type in LAY_DOWN_TYPES.iter().chain([T::Booster].iter()) {
        let count = track_type.sequence_count();
        for (direction, sequence, inverted, chain) in
            iproduct!(Direction::ALL, 0..count, [false, true], [false, true])
        {
            let element = TrackElement::new(track_type)
                .inverted(inverted)
                .with_chain(chain);
            let commands = paint(track_type, sequence, direction, &element);
            assert!(
                matches!(
                    commands.last(),
                    Some(PaintCommand::GeneralSupportHeight { height, .. }) if *height > 64
                ),
                "{track_type} sequence {sequence} {direction:?} inverted {inverted}"
            );
            let segments = commands
                .iter()
                .filter(|x| matches!(x, PaintCommand::SegmentSupportHeight { .. }))
                .count();
            assert!(segments <= 1);
        }
        for direction in Direction::ALL {
            assert!(
                paint(track_type, count, direction, &TrackElement::new(track_type)).is_empty(),
                "{track_type} painted past its last tile"
            );
        }
    }
}
