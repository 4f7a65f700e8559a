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

//! Track painting for the lay-down roller coaster.
//!
//! Lay-down trains ride either upright on top of the rail or lying on their backs beneath
//! it, so most pieces come in an upright and an inverted style. A handful of pieces
//! (the flyer twists, half loops and corkscrews) switch between the two partway through
//! and only have one style.
//!
//! Descending pieces, right-handed turns and the second half of each pair of transition
//! pieces are painted by forwarding to a mirror-image piece with a remapped direction
//! and sequence.

mod diagonal;
mod geometry;
mod helix;
mod inversions;
mod straight;
mod turns;

#[cfg(test)]
mod tests;

use trackpaint_core::{
    constants::{segments, TunnelType, GENERAL_SUPPORT_SLOPE, SUPPORT_HEIGHT_BLOCKED},
    coordinates::{BoundBoxXYZ, CoordsXYZ, Direction},
    image::ColourScheme,
    session::PaintSession,
    supports::MetalSupportType,
    track::{Ride, TrackElemType, TrackElement},
};

use crate::{
    shared::{self, AxisSprites},
    track_paint::TrackPaintFunction,
};

const STATION_TRACK: AxisSprites = [27_455, 27_456];
const STATION_TRACK_INVERTED: AxisSprites = [27_457, 27_458];
const PHOTO_TRACK: AxisSprites = [27_459, 27_460];
const PHOTO_TRACK_INVERTED: AxisSprites = [27_461, 27_462];

fn station(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    if sequence != 0 {
        return;
    }
    let track = if element.inverted {
        STATION_TRACK_INVERTED
    } else {
        STATION_TRACK
    };
    shared::paint_station(session, ride, direction, height, track, element.inverted);
}

fn on_ride_photo(
    session: &mut dyn PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    if sequence != 0 {
        return;
    }
    let misc = session.track_colours(ColourScheme::Misc);
    session.add_image_as_parent_rotated(
        direction,
        misc.with_index(shared::SPR_STATION_BASE_D),
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, height), CoordsXYZ::new(32, 32, 1)),
    );

    let (track, track_z, support_type, tunnel) = if element.inverted {
        (
            PHOTO_TRACK_INVERTED,
            height + 27,
            MetalSupportType::TubesInverted,
            TunnelType::InvertedFlat,
        )
    } else {
        (
            PHOTO_TRACK,
            height + 3,
            MetalSupportType::Tubes,
            TunnelType::StandardFlat,
        )
    };
    shared::paint_station_supports(session, direction, height, support_type);
    let image = session
        .track_colours(ColourScheme::Track)
        .with_index(track[direction.index() & 1]);
    session.add_image_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 6, track_z),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, track_z), CoordsXYZ::new(32, 20, 0)),
    );
    shared::paint_on_ride_photo_equipment(session, direction, height + 3, element);

    session.push_tunnel_rotated(direction, height, tunnel);
    session.set_segment_support_height(segments::ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    let clearance = if element.inverted { 64 } else { 48 };
    session.set_general_support_height(height + clearance, GENERAL_SUPPORT_SLOPE);
}

/// Looks up the paint routine for a lay-down coaster track piece.
///
/// Pieces this coaster has no sprites of its own for are handed to
/// [shared::get_track_paint_function]; `None` means nothing can paint the piece.
pub fn get_track_paint_function(track_type: TrackElemType) -> Option<TrackPaintFunction> {
    own_track_paint_function(track_type).or_else(|| {
        log::debug!("No lay-down paint routine for {track_type}, trying shared routines");
        shared::get_track_paint_function(track_type)
    })
}

/// The routines drawn with lay-down sprites, without the shared fallback.
pub fn own_track_paint_function(track_type: TrackElemType) -> Option<TrackPaintFunction> {
    use TrackElemType as T;
    let paint: TrackPaintFunction = match track_type {
        T::Flat => straight::flat,
        T::EndStation | T::BeginStation | T::MiddleStation => station,
        T::Up25 => straight::up_25,
        T::Up60 => straight::up_60,
        T::FlatToUp25 => straight::flat_to_up_25,
        T::Up25ToUp60 => straight::up_25_to_up_60,
        T::Up60ToUp25 => straight::up_60_to_up_25,
        T::Up25ToFlat => straight::up_25_to_flat,
        T::Down25 => straight::down_25,
        T::Down60 => straight::down_60,
        T::FlatToDown25 => straight::flat_to_down_25,
        T::Down25ToDown60 => straight::down_25_to_down_60,
        T::Down60ToDown25 => straight::down_60_to_down_25,
        T::Down25ToFlat => straight::down_25_to_flat,
        T::LeftQuarterTurn5Tiles => turns::left_quarter_turn_5_tiles,
        T::RightQuarterTurn5Tiles => turns::right_quarter_turn_5_tiles,
        T::FlatToLeftBank => straight::flat_to_left_bank,
        T::FlatToRightBank => straight::flat_to_right_bank,
        T::LeftBankToFlat => straight::left_bank_to_flat,
        T::RightBankToFlat => straight::right_bank_to_flat,
        T::BankedLeftQuarterTurn5Tiles => turns::banked_left_quarter_turn_5_tiles,
        T::BankedRightQuarterTurn5Tiles => turns::banked_right_quarter_turn_5_tiles,
        T::LeftBankToUp25 => straight::left_bank_to_up_25,
        T::RightBankToUp25 => straight::right_bank_to_up_25,
        T::Up25ToLeftBank => straight::up_25_to_left_bank,
        T::Up25ToRightBank => straight::up_25_to_right_bank,
        T::LeftBankToDown25 => straight::left_bank_to_down_25,
        T::RightBankToDown25 => straight::right_bank_to_down_25,
        T::Down25ToLeftBank => straight::down_25_to_left_bank,
        T::Down25ToRightBank => straight::down_25_to_right_bank,
        T::LeftBank => straight::left_bank,
        T::RightBank => straight::right_bank,
        T::LeftQuarterTurn5TilesUp25 => turns::left_quarter_turn_5_tiles_up_25,
        T::RightQuarterTurn5TilesUp25 => turns::right_quarter_turn_5_tiles_up_25,
        T::LeftQuarterTurn5TilesDown25 => turns::left_quarter_turn_5_tiles_down_25,
        T::RightQuarterTurn5TilesDown25 => turns::right_quarter_turn_5_tiles_down_25,
        T::SBendLeft => turns::s_bend_left,
        T::SBendRight => turns::s_bend_right,
        T::LeftVerticalLoop => inversions::left_vertical_loop,
        T::RightVerticalLoop => inversions::right_vertical_loop,
        T::LeftQuarterTurn3Tiles => turns::left_quarter_turn_3_tiles,
        T::RightQuarterTurn3Tiles => turns::right_quarter_turn_3_tiles,
        T::LeftBankedQuarterTurn3Tiles => turns::left_banked_quarter_turn_3_tiles,
        T::RightBankedQuarterTurn3Tiles => turns::right_banked_quarter_turn_3_tiles,
        T::LeftQuarterTurn3TilesUp25 => turns::left_quarter_turn_3_tiles_up_25,
        T::RightQuarterTurn3TilesUp25 => turns::right_quarter_turn_3_tiles_up_25,
        T::LeftQuarterTurn3TilesDown25 => turns::left_quarter_turn_3_tiles_down_25,
        T::RightQuarterTurn3TilesDown25 => turns::right_quarter_turn_3_tiles_down_25,
        T::LeftHalfBankedHelixUpSmall => helix::left_half_banked_helix_up_small,
        T::RightHalfBankedHelixUpSmall => helix::right_half_banked_helix_up_small,
        T::LeftHalfBankedHelixDownSmall => helix::left_half_banked_helix_down_small,
        T::RightHalfBankedHelixDownSmall => helix::right_half_banked_helix_down_small,
        T::LeftHalfBankedHelixUpLarge => helix::left_half_banked_helix_up_large,
        T::RightHalfBankedHelixUpLarge => helix::right_half_banked_helix_up_large,
        T::LeftHalfBankedHelixDownLarge => helix::left_half_banked_helix_down_large,
        T::RightHalfBankedHelixDownLarge => helix::right_half_banked_helix_down_large,
        T::LeftQuarterTurn1TileUp60 => turns::left_quarter_turn_1_tile_up_60,
        T::RightQuarterTurn1TileUp60 => turns::right_quarter_turn_1_tile_up_60,
        T::LeftQuarterTurn1TileDown60 => turns::left_quarter_turn_1_tile_down_60,
        T::RightQuarterTurn1TileDown60 => turns::right_quarter_turn_1_tile_down_60,
        T::Brakes => straight::brakes,
        T::OnRidePhoto => on_ride_photo,
        T::LeftEighthToDiag => diagonal::left_eighth_to_diag,
        T::RightEighthToDiag => diagonal::right_eighth_to_diag,
        T::LeftEighthToOrthogonal => diagonal::left_eighth_to_orthogonal,
        T::RightEighthToOrthogonal => diagonal::right_eighth_to_orthogonal,
        T::LeftEighthBankToDiag => diagonal::left_eighth_bank_to_diag,
        T::RightEighthBankToDiag => diagonal::right_eighth_bank_to_diag,
        T::LeftEighthBankToOrthogonal => diagonal::left_eighth_bank_to_orthogonal,
        T::RightEighthBankToOrthogonal => diagonal::right_eighth_bank_to_orthogonal,
        T::DiagFlat => diagonal::diag_flat,
        T::DiagUp25 => diagonal::diag_up_25,
        T::DiagUp60 => diagonal::diag_up_60,
        T::DiagFlatToUp25 => diagonal::diag_flat_to_up_25,
        T::DiagUp25ToUp60 => diagonal::diag_up_25_to_up_60,
        T::DiagUp60ToUp25 => diagonal::diag_up_60_to_up_25,
        T::DiagUp25ToFlat => diagonal::diag_up_25_to_flat,
        T::DiagDown25 => diagonal::diag_down_25,
        T::DiagDown60 => diagonal::diag_down_60,
        T::DiagFlatToDown25 => diagonal::diag_flat_to_down_25,
        T::DiagDown25ToDown60 => diagonal::diag_down_25_to_down_60,
        T::DiagDown60ToDown25 => diagonal::diag_down_60_to_down_25,
        T::DiagDown25ToFlat => diagonal::diag_down_25_to_flat,
        T::DiagFlatToLeftBank => diagonal::diag_flat_to_left_bank,
        T::DiagFlatToRightBank => diagonal::diag_flat_to_right_bank,
        T::DiagLeftBankToFlat => diagonal::diag_left_bank_to_flat,
        T::DiagRightBankToFlat => diagonal::diag_right_bank_to_flat,
        T::DiagLeftBankToUp25 => diagonal::diag_left_bank_to_up_25,
        T::DiagRightBankToUp25 => diagonal::diag_right_bank_to_up_25,
        T::DiagUp25ToLeftBank => diagonal::diag_up_25_to_left_bank,
        T::DiagUp25ToRightBank => diagonal::diag_up_25_to_right_bank,
        T::DiagLeftBankToDown25 => diagonal::diag_left_bank_to_down_25,
        T::DiagRightBankToDown25 => diagonal::diag_right_bank_to_down_25,
        T::DiagDown25ToLeftBank => diagonal::diag_down_25_to_left_bank,
        T::DiagDown25ToRightBank => diagonal::diag_down_25_to_right_bank,
        T::DiagLeftBank => diagonal::diag_left_bank,
        T::DiagRightBank => diagonal::diag_right_bank,
        T::LeftFlyerTwistUp => inversions::left_flyer_twist_up,
        T::RightFlyerTwistUp => inversions::right_flyer_twist_up,
        T::LeftFlyerTwistDown => inversions::left_flyer_twist_down,
        T::RightFlyerTwistDown => inversions::right_flyer_twist_down,
        T::FlyerHalfLoopUp => inversions::flyer_half_loop_up,
        T::FlyerHalfLoopDown => inversions::flyer_half_loop_down,
        T::LeftFlyerCorkscrewUp => inversions::left_flyer_corkscrew_up,
        T::RightFlyerCorkscrewUp => inversions::right_flyer_corkscrew_up,
        T::LeftFlyerCorkscrewDown => inversions::left_flyer_corkscrew_down,
        T::RightFlyerCorkscrewDown => inversions::right_flyer_corkscrew_down,
        T::BlockBrakes => straight::block_brakes,
        _ => return None,
    };
    Some(paint)
}
