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

//! Pieces that look the same on every coaster (stations, photo sections, boosters),
//! and the helpers ride-specific code uses to draw its own versions of them.

use trackpaint_core::{
    constants::{
        rotate_segments, segments, TunnelType, GENERAL_SUPPORT_SLOPE, SUPPORT_HEIGHT_BLOCKED,
    },
    coordinates::{BoundBoxXYZ, CoordsXYZ, Direction},
    image::ColourScheme,
    session::PaintSession,
    supports::{MetalSupportPlace, MetalSupportType},
    track::{Ride, StationStyle, TrackElemType, TrackElement},
};

use crate::track_paint::TrackPaintFunction;

pub const SPR_STATION_INVERTED_BAR_E_SW_NE: u32 = 22402;
pub const SPR_STATION_BASE_A_SW_NE: u32 = 22426;
pub const SPR_STATION_BASE_C_SW_NE: u32 = 22430;
pub const SPR_STATION_BASE_D: u32 = 22432;
pub const SPR_STATION_CANOPY_SW_NE: u32 = 22434;
pub const SPR_ON_RIDE_PHOTO_CAMERA_N: u32 = 25615;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N: u32 = 25619;
pub const SPR_ON_RIDE_PHOTO_SIGN_SW_NE: u32 = 25623;
pub const SPR_GENERIC_BOOSTER_SW_NE: u32 = 29060;

/// Sprite pair for track that only differs between the two axes: `[SW_NE, NW_SE]`.
pub type AxisSprites = [u32; 2];

#[inline]
fn axis_sprite(sprites: AxisSprites, direction: Direction) -> u32 {
    sprites[direction.index() & 1]
}

/// Height of the station track above the platform for inverted trains.
const INVERTED_TRACK_OFFSET: i32 = 24;

/// Paints one station tile: platform base, the ride's station track, and the supports
/// holding up the platform.
pub fn paint_station(
    session: &mut dyn PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
    track: AxisSprites,
    inverted: bool,
) {
    let misc = session.track_colours(ColourScheme::Misc);
    session.add_image_as_parent_rotated(
        direction,
        misc.with_index(SPR_STATION_BASE_C_SW_NE + (direction.get() & 1) as u32),
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 2, height), CoordsXYZ::new(32, 28, 1)),
    );

    let track_z = if inverted {
        height + INVERTED_TRACK_OFFSET
    } else {
        height
    };
    let image = session
        .track_colours(ColourScheme::Track)
        .with_index(axis_sprite(track, direction));
    session.add_image_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 6, track_z),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, track_z), CoordsXYZ::new(32, 20, 1)),
    );
    if inverted {
        let image = session
            .track_colours(ColourScheme::Supports)
            .with_index(SPR_STATION_INVERTED_BAR_E_SW_NE + (direction.get() & 1) as u32);
        session.add_image_as_parent_rotated(
            direction,
            image,
            CoordsXYZ::new(0, 6, track_z + 8),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, track_z + 8), CoordsXYZ::new(32, 20, 3)),
        );
    }

    let support_type = if inverted {
        MetalSupportType::TubesInverted
    } else {
        MetalSupportType::Tubes
    };
    paint_station_supports(session, direction, height, support_type);

    if ride.station_style == StationStyle::Covered {
        let image = misc.with_index(SPR_STATION_CANOPY_SW_NE + (direction.get() & 1) as u32);
        let z = height + if inverted { 48 } else { 32 };
        session.add_image_as_parent_rotated(
            direction,
            image,
            CoordsXYZ::new(0, 0, z),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, z), CoordsXYZ::new(32, 32, 3)),
        );
    }

    session.push_tunnel_rotated(direction, height, TunnelType::SquareFlat);
    session.set_segment_support_height(segments::ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(
        height + if inverted { 48 } else { 32 },
        GENERAL_SUPPORT_SLOPE,
    );
}

/// Two columns under the platform edges, on whichever pair of sides runs along the
/// track.
pub fn paint_station_supports(
    session: &mut dyn PaintSession,
    direction: Direction,
    height: i32,
    support_type: MetalSupportType,
) {
    let template = session.track_colours(ColourScheme::Supports);
    let places = if direction.is_odd() {
        [MetalSupportPlace::TopRightSide, MetalSupportPlace::BottomLeftSide]
    } else {
        [MetalSupportPlace::TopLeftSide, MetalSupportPlace::BottomRightSide]
    };
    for place in places {
        session.metal_a_supports(support_type, place, 0, height, template);
    }
}

/// Sign posts on both sides of the track and a camera facing it. The camera is swapped
/// for its flash sprite while the element is taking a photo.
pub fn paint_on_ride_photo_equipment(
    session: &mut dyn PaintSession,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    // sign posts, then camera
    #[rustfmt::skip]
    const POSITIONS: [[(i32, i32); 3]; 4] = [
        [(26, 0), (26, 31), (6, 0)],
        [(0, 6), (31, 6), (0, 26)],
        [(6, 0), (6, 31), (26, 31)],
        [(0, 26), (31, 26), (31, 6)],
    ];
    let misc = session.track_colours(ColourScheme::Misc);
    let sign = misc.with_index(SPR_ON_RIDE_PHOTO_SIGN_SW_NE + direction.get() as u32);
    // the camera looks back across the track
    let facing = direction.rotate(2).get() as u32;
    let camera = if element.taking_photo {
        misc.with_index(SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N + facing)
    } else {
        misc.with_index(SPR_ON_RIDE_PHOTO_CAMERA_N + facing)
    };
    let [first, second, camera_at] = POSITIONS[direction.index()];
    for ((x, y), image) in [(first, sign), (second, sign), (camera_at, camera)] {
        let offset = CoordsXYZ::new(x, y, height);
        let bound_box = BoundBoxXYZ::new(offset, CoordsXYZ::new(1, 1, 19));
        session.add_image_as_parent(image, offset, bound_box);
    }
}

fn paint_generic_station(
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
    paint_station(
        session,
        ride,
        direction,
        height,
        [SPR_STATION_BASE_A_SW_NE, SPR_STATION_BASE_A_SW_NE + 1],
        element.inverted,
    );
}

fn paint_generic_on_ride_photo(
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
        misc.with_index(SPR_STATION_BASE_D),
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, height), CoordsXYZ::new(32, 32, 1)),
    );
    paint_station_supports(session, direction, height, MetalSupportType::Tubes);
    paint_on_ride_photo_equipment(session, direction, height + 3, element);
    session.push_tunnel_rotated(direction, height, TunnelType::StandardFlat);
    session.set_segment_support_height(segments::ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + 48, GENERAL_SUPPORT_SLOPE);
}

fn paint_booster(
    session: &mut dyn PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
) {
    if sequence != 0 {
        return;
    }
    let image = session
        .track_colours(ColourScheme::Track)
        .with_index(SPR_GENERIC_BOOSTER_SW_NE + (direction.get() & 1) as u32);
    session.add_image_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 6, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, height), CoordsXYZ::new(32, 20, 3)),
    );
    if session.should_paint_supports() {
        let template = session.track_colours(ColourScheme::Supports);
        session.metal_a_supports(
            MetalSupportType::Tubes,
            MetalSupportPlace::Centre,
            0,
            height,
            template,
        );
    }
    session.push_tunnel_rotated(direction, height, TunnelType::StandardFlat);
    session.set_segment_support_height(
        rotate_segments(segments::C4 | segments::CC | segments::D0, direction),
        SUPPORT_HEIGHT_BLOCKED,
        0,
    );
    session.set_general_support_height(height + 32, GENERAL_SUPPORT_SLOPE);
}

/// Paint routines every coaster can fall back to.
pub fn get_track_paint_function(track_type: TrackElemType) -> Option<TrackPaintFunction> {
    let paint: TrackPaintFunction = match track_type {
        TrackElemType::BeginStation | TrackElemType::MiddleStation | TrackElemType::EndStation => {
            paint_generic_station
        }
        TrackElemType::OnRidePhoto => paint_generic_on_ride_photo,
        TrackElemType::Booster => paint_booster,
        _ => return None,
    };
    Some(paint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackpaint_core::{
        constants::TunnelSide,
        image::ImageId,
        recording::{PaintCommand, RecordingSession},
    };

    fn supports(commands: &[PaintCommand]) -> Vec<(MetalSupportType, MetalSupportPlace)> {
        commands
            .iter()
            .filter_map(|x| match x {
                PaintCommand::MetalSupport {
                    support_type,
                    place,
                    ..
                } => Some((*support_type, *place)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn station_supports_run_along_the_platform() {
        for (direction, expected) in [
            (0, [MetalSupportPlace::TopLeftSide, MetalSupportPlace::BottomRightSide]),
            (1, [MetalSupportPlace::TopRightSide, MetalSupportPlace::BottomLeftSide]),
            (2, [MetalSupportPlace::TopLeftSide, MetalSupportPlace::BottomRightSide]),
            (3, [MetalSupportPlace::TopRightSide, MetalSupportPlace::BottomLeftSide]),
        ] {
            let mut session = RecordingSession::new();
            paint_station(
                &mut session,
                &Ride::default(),
                Direction::new(direction),
                16,
                [100, 101],
                false,
            );
            assert_eq!(
                supports(session.commands()),
                expected
                    .iter()
                    .map(|x| (MetalSupportType::Tubes, *x))
                    .collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn inverted_covered_station() {
        let ride = Ride {
            station_style: StationStyle::Covered,
            ..Default::default()
        };
        let mut session = RecordingSession::new();
        paint_station(&mut session, &ride, Direction::new(1), 16, [100, 101], true);
        assert_eq!(
            session.image_indices(),
            vec![
                SPR_STATION_BASE_C_SW_NE + 1,
                101,
                SPR_STATION_INVERTED_BAR_E_SW_NE + 1,
                SPR_STATION_CANOPY_SW_NE + 1
            ]
        );
        assert!(supports(session.commands())
            .iter()
            .all(|(kind, _)| *kind == MetalSupportType::TubesInverted));
        assert_eq!(
            session.tunnels(TunnelSide::Right)[0].kind,
            TunnelType::SquareFlat
        );
        assert_eq!(
            session.commands().last(),
            Some(&PaintCommand::GeneralSupportHeight {
                height: 64,
                slope: GENERAL_SUPPORT_SLOPE
            })
        );
    }

    #[test]
    fn photo_equipment_positions() {
        let element = TrackElement::new(TrackElemType::OnRidePhoto);
        let mut session = RecordingSession::new();
        paint_on_ride_photo_equipment(&mut session, Direction::new(0), 10, &element);
        assert_eq!(
            session.commands(),
            &[(26, 0), (26, 31), (6, 0)]
                .iter()
                .zip([25623, 25623, 25617])
                .map(|(&(x, y), index)| PaintCommand::Image {
                    image: ImageId(index),
                    offset: CoordsXYZ::new(x, y, 10),
                    bound_box: BoundBoxXYZ::new(
                        CoordsXYZ::new(x, y, 10),
                        CoordsXYZ::new(1, 1, 19)
                    ),
                })
                .collect::<Vec<_>>()[..]
        );
    }

    #[test]
    fn photo_flash() {
        let mut session = RecordingSession::new();
        let element = TrackElement::new(TrackElemType::OnRidePhoto).taking_photo(true);
        paint_on_ride_photo_equipment(&mut session, Direction::new(3), 0, &element);
        assert_eq!(session.image_indices(), vec![25626, 25626, 25620]);
    }

    #[test]
    fn shared_dispatch() {
        for track_type in [
            TrackElemType::BeginStation,
            TrackElemType::MiddleStation,
            TrackElemType::EndStation,
            TrackElemType::OnRidePhoto,
            TrackElemType::Booster,
        ] {
            assert!(get_track_paint_function(track_type).is_some(), "{track_type}");
        }
        assert!(get_track_paint_function(TrackElemType::Flat).is_none());
        assert!(get_track_paint_function(TrackElemType::MiniGolfHoleA).is_none());
    }

    #[test]
    fn booster_supports_follow_checkerboard() {
        let paint = get_track_paint_function(TrackElemType::Booster).unwrap();
        let element = TrackElement::new(TrackElemType::Booster);
        let mut session = RecordingSession::new();
        session.set_map_position(trackpaint_core::coordinates::CoordsXY::from_tile(1, 0));
        paint(&mut session, &Ride::default(), 0, Direction::new(0), 0, &element);
        assert!(supports(session.commands()).is_empty());
        assert_eq!(session.image_indices(), vec![SPR_GENERIC_BOOSTER_SW_NE]);
    }
}
