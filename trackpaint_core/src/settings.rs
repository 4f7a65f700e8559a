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

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::image::{ColourScheme, ImageId};

/// Primary/secondary colour pair for one colour scheme.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SchemeColours {
    pub primary: u8,
    pub secondary: u8,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ColourSettings {
    pub track: SchemeColours,
    pub supports: SchemeColours,
    pub misc: SchemeColours,
    pub special: SchemeColours,
}
impl Default for ColourSettings {
    fn default() -> Self {
        Self {
            // bright red track on grey supports
            track: SchemeColours {
                primary: 28,
                secondary: 2,
            },
            supports: SchemeColours {
                primary: 1,
                secondary: 1,
            },
            misc: SchemeColours {
                primary: 2,
                secondary: 28,
            },
            special: SchemeColours {
                primary: 0,
                secondary: 0,
            },
        }
    }
}
impl ColourSettings {
    pub fn for_scheme(&self, scheme: ColourScheme) -> SchemeColours {
        match scheme {
            ColourScheme::Track => self.track,
            ColourScheme::Supports => self.supports,
            ColourScheme::Misc => self.misc,
            ColourScheme::Special => self.special,
        }
    }
    /// Builds the four colour templates, indexed by [ColourScheme::index].
    pub fn templates(&self) -> Result<[ImageId; 4]> {
        let mut result = [ImageId::default(); 4];
        for scheme in ColourScheme::ALL {
            let colours = self.for_scheme(scheme);
            result[scheme.index()] = ImageId::remap(colours.primary, colours.secondary)
                .with_context(|| format!("Bad colours for {scheme:?}"))?;
        }
        Ok(result)
    }
}

/// View options that affect how track is painted.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PaintSettings {
    /// Supports are drawn translucent
    pub see_through_supports: bool,
    /// Supports are not drawn at all
    pub invisible_supports: bool,
    pub track_colours: ColourSettings,
}

pub const FILENAME: &str = "paint_settings.ron";

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            see_through_supports: false,
            invisible_supports: false,
            track_colours: ColourSettings::default(),
        }
    }
}

impl PaintSettings {
    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<PaintSettings> {
        log::info!("Loading paint settings from {}", path.display());
        if !path.exists() {
            log::info!("No paint settings found; using defaults");
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = PaintSettings::parse(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!("Loaded paint settings from {}", path.display());
        Ok(settings)
    }

    pub fn parse(contents: &str) -> Result<PaintSettings> {
        Ok(ron::from_str::<PaintSettings>(contents)?)
    }

    /// Loads `paint_settings.ron` from a data directory.
    pub fn load_from_dir(data_dir: &Path) -> Result<PaintSettings> {
        Self::load(&data_dir.join(FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = PaintSettings::parse("(invisible_supports: true)").unwrap();
        assert!(settings.invisible_supports);
        assert!(!settings.see_through_supports);
        assert_eq!(settings.track_colours, ColourSettings::default());
    }

    #[test]
    fn nested_colours() {
        let settings = PaintSettings::parse(
            "(track_colours: (supports: (primary: 4, secondary: 5)))",
        )
        .unwrap();
        assert_eq!(
            settings.track_colours.supports,
            SchemeColours {
                primary: 4,
                secondary: 5
            }
        );
        assert_eq!(settings.track_colours.track.primary, 28);
        let templates = settings.track_colours.templates().unwrap();
        assert_eq!(templates[ColourScheme::Supports.index()].primary_colour(), 4);
        assert_eq!(templates[ColourScheme::Track.index()].index(), 0);
    }

    #[test]
    fn bad_colour_is_an_error() {
        let settings =
            PaintSettings::parse("(track_colours: (misc: (primary: 40, secondary: 0)))").unwrap();
        assert!(settings.track_colours.templates().is_err());
        assert!(PaintSettings::parse("(invisible_supports: 3)").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let settings =
            PaintSettings::load(Path::new("/nonexistent/trackpaint/paint_settings.ron")).unwrap();
        assert_eq!(settings, PaintSettings::default());
    }

    #[test]
    fn loads_from_data_dir() {
        let dir = std::env::temp_dir().join(format!("trackpaint_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(FILENAME), "(see_through_supports: true)").unwrap();
        let settings = PaintSettings::load_from_dir(&dir).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert!(settings.see_through_supports);
        assert!(!settings.invisible_supports);
    }
}
