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

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;
use ron::ser::PrettyConfig;
use tracing::metadata::LevelFilter;
use tracing_subscriber::prelude::*;
use trackpaint_coasters::{lay_down, preview::Previewer, shared};
use trackpaint_core::{
    coordinates::{CoordsXY, Direction},
    settings::PaintSettings,
    track::{Ride, StationStyle, TrackElemType, TrackElement},
};

/// Prints the paint calls the lay-down coaster makes for a piece of track.
#[derive(Parser, Debug, Clone)]
#[command(name = "trackpaint")]
struct PreviewArgs {
    /// Track element type, by name (`LeftQuarterTurn5Tiles`) or number (`16`)
    #[arg(short, long, value_name = "TRACK_TYPE", required_unless_present = "list")]
    track_type: Option<TrackElemType>,

    #[arg(short, long, default_value_t = 0)]
    direction: u8,

    #[arg(short, long, default_value_t = 0)]
    sequence: u8,

    /// Base height of the element, in paint units
    #[arg(long, default_value_t = 0)]
    height: i32,

    #[arg(long)]
    inverted: bool,

    #[arg(long)]
    chain: bool,

    #[arg(long)]
    taking_photo: bool,

    /// Give stations a canopy
    #[arg(long)]
    covered: bool,

    /// Paint every tile in every direction instead of a single one
    #[arg(long)]
    all: bool,

    /// List every track element type and what paints it
    #[arg(long)]
    list: bool,

    /// Tile coordinates as `x,y`; support checkerboarding depends on them
    #[arg(long, value_name = "X,Y")]
    tile: Option<CoordsXY>,

    /// Colour and support visibility settings: a RON file, or a data directory
    /// holding `paint_settings.ron`
    #[arg(long, value_name = "SETTINGS")]
    settings: Option<PathBuf>,
}

fn list_track_types() {
    for &track_type in TrackElemType::ALL {
        let painter = if lay_down::own_track_paint_function(track_type).is_some() {
            "lay-down"
        } else if shared::get_track_paint_function(track_type).is_some() {
            "shared"
        } else {
            "none"
        };
        println!(
            "{:>3} {:<40} {}",
            u16::from(track_type),
            track_type.name(),
            painter
        );
    }
}

fn load_settings(path: Option<&Path>) -> Result<PaintSettings> {
    match path {
        Some(path) if path.is_dir() => PaintSettings::load_from_dir(path),
        Some(path) => PaintSettings::load(path),
        None => Ok(PaintSettings::default()),
    }
}

fn run(args: &PreviewArgs) -> Result<()> {
    if args.list {
        list_track_types();
        return Ok(());
    }
    let Some(track_type) = args.track_type else {
        bail!("--track-type is required");
    };
    if args.direction > 3 {
        bail!("Direction must be 0 to 3, got {}", args.direction);
    }

    let settings = load_settings(args.settings.as_deref())?;
    let ride = Ride {
        station_style: if args.covered {
            StationStyle::Covered
        } else {
            StationStyle::Plain
        },
        ..Default::default()
    };
    let element = TrackElement::new(track_type)
        .inverted(args.inverted)
        .with_chain(args.chain)
        .taking_photo(args.taking_photo);

    let mut previewer = Previewer::new(settings, ride)?;
    let tile = args.tile.unwrap_or_default();
    previewer.set_position(CoordsXY::from_tile(tile.x, tile.y), args.height);

    let _span = tracing::info_span!("paint", %track_type).entered();
    let output = if args.all {
        let tiles = previewer.paint_all(&element)?;
        tracing::info!("Painted {} tiles", tiles.len());
        ron::ser::to_string_pretty(&tiles, PrettyConfig::default())?
    } else {
        if args.sequence >= track_type.sequence_count() {
            tracing::warn!(
                "{track_type} only has {} tiles; nothing will be painted",
                track_type.sequence_count()
            );
        }
        let commands =
            previewer.paint_tile(&element, args.sequence, Direction::new(args.direction))?;
        ron::ser::to_string_pretty(&commands, PrettyConfig::default())?
    };
    println!("{output}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(
                    tracing_subscriber::EnvFilter::builder()
                        .with_default_directive(LevelFilter::INFO.into())
                        .from_env_lossy(),
                ),
        )
        .init();

    run(&PreviewArgs::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackpaint_core::settings::FILENAME;

    #[test]
    fn tile_argument() {
        let args = PreviewArgs::try_parse_from(["trackpaint", "-t", "Flat", "--tile", "2,3"])
            .unwrap();
        assert_eq!(args.tile, Some(CoordsXY { x: 2, y: 3 }));
        assert!(PreviewArgs::try_parse_from(["trackpaint", "-t", "Flat", "--tile", "2"]).is_err());
        let args = PreviewArgs::try_parse_from(["trackpaint", "--list"]).unwrap();
        assert_eq!(args.tile, None);
    }

    #[test]
    fn settings_from_file_or_data_dir() {
        let dir = std::env::temp_dir().join(format!("trackpaint_cli_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(FILENAME), "(invisible_supports: true)").unwrap();
        let from_dir = load_settings(Some(&dir)).unwrap();
        let from_file = load_settings(Some(&dir.join(FILENAME))).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert!(from_dir.invisible_supports);
        assert_eq!(from_dir, from_file);
        assert_eq!(load_settings(None).unwrap(), PaintSettings::default());
    }
}
