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

use anyhow::Result;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    constants::{TunnelSide, TunnelType, TUNNEL_HEIGHT_UNIT},
    coordinates::{BoundBoxXYZ, CoordsXY, CoordsXYZ},
    image::{ColourScheme, ImageId},
    session::PaintSession,
    settings::PaintSettings,
    supports::{MetalSupportPlace, MetalSupportType},
};

/// One call made into a [RecordingSession].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PaintCommand {
    Image {
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    },
    MetalSupport {
        support_type: MetalSupportType,
        place: MetalSupportPlace,
        special: i32,
        height: i32,
        image: ImageId,
    },
    Tunnel {
        side: TunnelSide,
        height: i32,
        kind: TunnelType,
    },
    SegmentSupportHeight {
        segments: u16,
        height: u16,
        slope: u8,
    },
    GeneralSupportHeight {
        height: i32,
        slope: u8,
    },
}

/// A tunnel as the sorting pass stores it: height in tunnel units.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TunnelEntry {
    pub height: i32,
    pub kind: TunnelType,
}

/// A paint session that records every call instead of drawing.
///
/// This stands in for the real renderer in tools and tests. Supports honour the
/// visibility flags from [PaintSettings], the same way the renderer's support painter
/// would.
#[derive(Clone, Debug)]
pub struct RecordingSession {
    position: CoordsXY,
    templates: [ImageId; 4],
    settings: PaintSettings,
    commands: Vec<PaintCommand>,
    left_tunnels: SmallVec<[TunnelEntry; 4]>,
    right_tunnels: SmallVec<[TunnelEntry; 4]>,
}

impl RecordingSession {
    /// A session at the origin tile with default settings.
    pub fn new() -> RecordingSession {
        RecordingSession {
            position: CoordsXY::default(),
            templates: [ImageId::default(); 4],
            settings: PaintSettings::default(),
            commands: Vec::new(),
            left_tunnels: SmallVec::new(),
            right_tunnels: SmallVec::new(),
        }
    }

    pub fn with_settings(settings: PaintSettings) -> Result<RecordingSession> {
        let templates = settings.track_colours.templates()?;
        Ok(RecordingSession {
            templates,
            settings,
            ..RecordingSession::new()
        })
    }

    pub fn set_map_position(&mut self, position: CoordsXY) {
        self.position = position;
    }

    pub fn set_track_colours(&mut self, scheme: ColourScheme, template: ImageId) {
        self.templates[scheme.index()] = template;
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the session empty and ready for another tile.
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        self.left_tunnels.clear();
        self.right_tunnels.clear();
        std::mem::take(&mut self.commands)
    }

    pub fn tunnels(&self, side: TunnelSide) -> &[TunnelEntry] {
        match side {
            TunnelSide::Left => self.left_tunnels.as_slice(),
            TunnelSide::Right => self.right_tunnels.as_slice(),
        }
    }

    /// Sprite indices drawn so far, in order. Supports are not included.
    pub fn image_indices(&self) -> Vec<u32> {
        self.commands
            .iter()
            .filter_map(|x| match x {
                PaintCommand::Image { image, .. } => Some(image.index()),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSession for RecordingSession {
    fn track_colours(&self, scheme: ColourScheme) -> ImageId {
        self.templates[scheme.index()]
    }

    fn map_position(&self) -> CoordsXY {
        self.position
    }

    fn add_image_as_parent(&mut self, image: ImageId, offset: CoordsXYZ, bound_box: BoundBoxXYZ) {
        self.commands.push(PaintCommand::Image {
            image,
            offset,
            bound_box,
        });
    }

    fn metal_a_supports(
        &mut self,
        support_type: MetalSupportType,
        place: MetalSupportPlace,
        special: i32,
        height: i32,
        template: ImageId,
    ) -> bool {
        if self.settings.invisible_supports {
            return false;
        }
        let image = if self.settings.see_through_supports {
            template.translucent()
        } else {
            template
        };
        self.commands.push(PaintCommand::MetalSupport {
            support_type,
            place,
            special,
            height,
            image,
        });
        true
    }

    fn push_tunnel(&mut self, side: TunnelSide, height: i32, kind: TunnelType) {
        let entry = TunnelEntry {
            height: height / TUNNEL_HEIGHT_UNIT,
            kind,
        };
        match side {
            TunnelSide::Left => self.left_tunnels.push(entry),
            TunnelSide::Right => self.right_tunnels.push(entry),
        }
        self.commands.push(PaintCommand::Tunnel { side, height, kind });
    }

    fn set_segment_support_height(&mut self, segments: u16, height: u16, slope: u8) {
        self.commands.push(PaintCommand::SegmentSupportHeight {
            segments,
            height,
            slope,
        });
    }

    fn set_general_support_height(&mut self, height: i32, slope: u8) {
        self.commands
            .push(PaintCommand::GeneralSupportHeight { height, slope });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Direction;

    fn support(session: &mut RecordingSession) -> bool {
        session.metal_a_supports(
            MetalSupportType::Tubes,
            MetalSupportPlace::Centre,
            0,
            48,
            session.track_colours(ColourScheme::Supports),
        )
    }

    #[test]
    fn supports_follow_view_flags() {
        let mut session = RecordingSession::new();
        assert!(support(&mut session));
        assert_eq!(session.commands().len(), 1);

        let mut hidden = RecordingSession::with_settings(PaintSettings {
            invisible_supports: true,
            ..Default::default()
        })
        .unwrap();
        assert!(!support(&mut hidden));
        assert!(hidden.commands().is_empty());

        let mut ghost = RecordingSession::with_settings(PaintSettings {
            see_through_supports: true,
            ..Default::default()
        })
        .unwrap();
        assert!(support(&mut ghost));
        match ghost.commands()[0] {
            PaintCommand::MetalSupport { image, .. } => {
                assert!(image.is_translucent());
                assert_eq!(image.primary_colour(), 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rotated_helpers() {
        let mut session = RecordingSession::new();
        let bb = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 16), CoordsXYZ::new(32, 20, 3));
        session.add_image_as_parent_rotated(
            Direction::new(1),
            ImageId(100),
            CoordsXYZ::new(0, 6, 16),
            bb,
        );
        session.push_tunnel_rotated(Direction::new(2), 48, TunnelType::StandardFlat);
        session.push_tunnel_rotated(Direction::new(3), 48, TunnelType::StandardFlat);
        assert_eq!(
            session.commands()[0],
            PaintCommand::Image {
                image: ImageId(100),
                offset: CoordsXYZ::new(6, 0, 16),
                bound_box: bb.swap_xy(),
            }
        );
        assert_eq!(
            session.tunnels(TunnelSide::Left),
            &[TunnelEntry {
                height: 3,
                kind: TunnelType::StandardFlat
            }]
        );
        assert_eq!(session.tunnels(TunnelSide::Right).len(), 1);
        assert_eq!(session.image_indices(), vec![100]);

        let taken = session.take_commands();
        assert_eq!(taken.len(), 3);
        assert!(session.commands().is_empty());
        assert!(session.tunnels(TunnelSide::Left).is_empty());
    }

    #[test]
    fn checkerboard_supports() {
        let mut session = RecordingSession::new();
        let expected = [
            ((0, 0), true),
            ((1, 0), false),
            ((0, 1), false),
            ((1, 1), true),
            ((2, 0), true),
            ((3, 2), false),
        ];
        for ((x, y), paint) in expected {
            session.set_map_position(CoordsXY::from_tile(x, y));
            assert_eq!(session.should_paint_supports(), paint, "tile {x},{y}");
        }
    }

    #[test]
    fn rotated_support_placement() {
        let mut session = RecordingSession::new();
        session.metal_a_supports_rotated(
            MetalSupportType::Fork,
            MetalSupportPlace::TopLeftSide,
            Direction::new(1),
            6,
            40,
            ImageId::default(),
        );
        assert_eq!(
            session.commands()[0],
            PaintCommand::MetalSupport {
                support_type: MetalSupportType::ForkAlt,
                place: MetalSupportPlace::TopRightSide,
                special: 6,
                height: 40,
                image: ImageId::default(),
            }
        );
    }
}
