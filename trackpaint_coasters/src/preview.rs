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

//! Paints lay-down pieces into a [RecordingSession] and hands back what was drawn.

use anyhow::{Context, Result};
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use trackpaint_core::{
    coordinates::{CoordsXY, Direction},
    recording::{PaintCommand, RecordingSession},
    settings::PaintSettings,
    track::{Ride, TrackElement},
};

use crate::{lay_down, track_paint::TrackPaintFunction};

/// The commands recorded for one tile of a piece.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TilePaint {
    pub sequence: u8,
    pub direction: Direction,
    pub commands: Vec<PaintCommand>,
}

pub struct Previewer {
    session: RecordingSession,
    ride: Ride,
    height: i32,
}

impl Previewer {
    pub fn new(settings: PaintSettings, ride: Ride) -> Result<Previewer> {
        Ok(Previewer {
            session: RecordingSession::with_settings(settings)?,
            ride,
            height: 0,
        })
    }

    /// Moves subsequent painting to another tile and base height.
    pub fn set_position(&mut self, position: CoordsXY, height: i32) {
        self.session.set_map_position(position);
        self.height = height;
    }

    fn routine(element: &TrackElement) -> Result<TrackPaintFunction> {
        lay_down::get_track_paint_function(element.track_type)
            .with_context(|| format!("Nothing paints {} track", element.track_type))
    }

    pub fn paint_tile(
        &mut self,
        element: &TrackElement,
        sequence: u8,
        direction: Direction,
    ) -> Result<Vec<PaintCommand>> {
        let paint = Self::routine(element)?;
        paint(
            &mut self.session,
            &self.ride,
            sequence,
            direction,
            self.height,
            element,
        );
        Ok(self.session.take_commands())
    }

    /// Paints every tile of the piece in every direction.
    pub fn paint_all(&mut self, element: &TrackElement) -> Result<Vec<TilePaint>> {
        let paint = Self::routine(element)?;
        let tiles = iproduct!(Direction::ALL, 0..element.track_type.sequence_count())
            .map(|(direction, sequence)| {
                paint(
                    &mut self.session,
                    &self.ride,
                    sequence,
                    direction,
                    self.height,
                    element,
                );
                TilePaint {
                    sequence,
                    direction,
                    commands: self.session.take_commands(),
                }
            })
            .collect();
        Ok(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackpaint_core::track::TrackElemType;

    #[test]
    fn paints_every_tile() {
        let mut previewer = Previewer::new(PaintSettings::default(), Ride::default()).unwrap();
        let tiles = previewer
            .paint_all(&TrackElement::new(TrackElemType::LeftQuarterTurn3Tiles))
            .unwrap();
        assert_eq!(tiles.len(), 16);
        assert_eq!(tiles[5].direction, Direction::new(1));
        assert_eq!(tiles[5].sequence, 1);
        assert!(tiles.iter().all(|x| !x.commands.is_empty()));
    }

    #[test]
    fn height_and_colours_apply() {
        let mut previewer = Previewer::new(PaintSettings::default(), Ride::default()).unwrap();
        previewer.set_position(CoordsXY::from_tile(3, 3), 64);
        let commands = previewer
            .paint_tile(&TrackElement::new(TrackElemType::Flat), 0, Direction::new(0))
            .unwrap();
        match commands[0] {
            PaintCommand::Image { image, offset, .. } => {
                assert_eq!(offset.z, 64);
                assert!(image.is_remap());
                assert_eq!(image.primary_colour(), 28);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unpaintable_track_is_an_error() {
        let mut previewer = Previewer::new(PaintSettings::default(), Ride::default()).unwrap();
        let result = previewer.paint_tile(
            &TrackElement::new(TrackElemType::MiniGolfHoleA),
            0,
            Direction::new(0),
        );
        assert!(result.is_err());
    }
}
