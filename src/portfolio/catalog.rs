// SPDX-License-Identifier: MPL-2.0
//! Portfolio catalog loaded from a TOML file.
//!
//! ```toml
//! owner = "Jane Doe"
//! tagline = "Mechanical engineer"
//!
//! [[projects]]
//! title = "Line follower"
//! description = "PID-tuned robot"
//! categories = ["robotics", "embedded"]
//!
//! [[designs]]
//! heading = "Bracket Assembly"
//! images = '["cad/bracket/iso.png", "cad/bracket/front.png"]'
//!
//! [[skills]]
//! name = "SolidWorks"
//! level = 90
//! ```
//!
//! A design card's `images` value is kept as the raw serialized attribute and
//! only parsed when its gallery is opened, so a broken entry never prevents
//! the page from loading.

use super::reveal::Reveal;
use crate::error::{Error, Result};
use crate::gallery::Trigger;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no catalog is given.
pub const DEFAULT_CATALOG_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Catalog {
    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub tagline: Option<String>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub designs: Vec<DesignCard>,

    #[serde(default)]
    pub skills: Vec<Skill>,

    /// Directory relative image references are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub categories: Vec<String>,
}

/// A mechanical-design card, the gallery's trigger element.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct DesignCard {
    /// Card heading, used as the gallery title.
    #[serde(default)]
    pub heading: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    /// Serialized JSON list of image references.
    #[serde(default)]
    pub images: Option<String>,
}

/// A named proficiency shown as a horizontal bar.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,

    /// Percentage; values above 100 are shown as a full bar.
    #[serde(default)]
    pub level: u8,
}

impl Skill {
    /// Target fill of the bar in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }

    /// Fill for the current point of the bar's entrance, growing from empty.
    #[must_use]
    pub fn animated_fraction(&self, reveal: Reveal) -> f32 {
        self.fraction() * reveal.opacity()
    }
}

impl Catalog {
    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] when `content` is not a valid catalog.
    pub fn parse(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut catalog: Catalog =
            toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
        catalog.base_dir = base_dir.into();
        Ok(catalog)
    }

    /// Loads a catalog file; relative image paths resolve against its directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Catalog`] when its content is not a valid catalog.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::parse(&content, base_dir)
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Distinct project categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for category in self.projects.iter().flat_map(|p| p.categories.iter()) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
        categories
    }

    /// Builds the gallery trigger for the design card at `index`.
    #[must_use]
    pub fn design_trigger(&self, index: usize) -> Option<Trigger> {
        self.designs
            .get(index)
            .map(|design| design.trigger(&self.base_dir))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.designs.is_empty() && self.skills.is_empty()
    }
}

impl DesignCard {
    #[must_use]
    pub fn trigger(&self, base_dir: &Path) -> Trigger {
        Trigger {
            images: self.images.clone(),
            heading: self.heading.clone(),
            base_dir: base_dir.to_path_buf(),
        }
    }
}
