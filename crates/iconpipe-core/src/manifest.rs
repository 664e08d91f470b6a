//! Icon manifest data model.
//!
//! Two manifests drive the pipeline:
//!
//! - `devicon.json`: a JSON array of [`IconRecord`]s, the canonical list of
//!   icons that should exist.
//! - `icomoon.json`: a [`IcomoonManifest`], the export of icons already
//!   published in the generated font.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::PipelineError;
use crate::Result;

/// One icon entry of `devicon.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Icon name, also the name of its folder under the icons root.
    pub name: String,

    /// Font versions that have no standalone SVG file.
    ///
    /// Older manifests omit the key entirely; that reads as no aliases.
    #[serde(default)]
    pub aliases: Vec<Alias>,

    /// Versions available for this icon.
    ///
    /// Only the path resolver reads this, so a record without it still diffs.
    #[serde(default)]
    pub versions: Versions,

    /// Remaining keys of the record, kept so the record round-trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IconRecord {
    /// Creates a record with the given font versions and no aliases.
    pub fn new<S: Into<String>>(name: impl Into<String>, font: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            versions: Versions {
                font: font.into_iter().map(Into::into).collect(),
                svg: Vec::new(),
            },
            extra: Map::new(),
        }
    }

    /// Adds an alias entry.
    pub fn with_alias(mut self, alias: impl Into<String>, base: impl Into<String>) -> Self {
        self.aliases.push(Alias {
            base: Some(base.into()),
            alias: alias.into(),
        });
        self
    }

    /// Returns `true` if `version` is listed as an alias of this icon.
    #[must_use]
    pub fn is_alias(&self, version: &str) -> bool {
        self.aliases.iter().any(|a| a.alias == version)
    }

    /// File name of the SVG for one font version, e.g. `rust-plain.svg`.
    #[must_use]
    pub fn svg_file_name(&self, version: &str) -> String {
        format!("{}-{version}.svg", self.name)
    }
}

/// Maps a font version to the version it reuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// The version whose glyph is reused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// The aliased version name.
    pub alias: String,
}

/// Version lists of an icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versions {
    /// Versions that go into the icon font.
    #[serde(default)]
    pub font: Vec<String>,
    /// Versions shipped as plain SVG.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub svg: Vec<String>,
}

/// The `icomoon.json` export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcomoonManifest {
    /// Published glyphs.
    pub icons: Vec<IcomoonEntry>,
}

impl IcomoonManifest {
    /// Builds a manifest from glyph names like `rust-plain`.
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            icons: names
                .into_iter()
                .map(|name| IcomoonEntry {
                    properties: IcomoonProperties { name: name.into() },
                })
                .collect(),
        }
    }

    /// Iterates the glyph names in export order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().map(|icon| icon.properties.name.as_str())
    }
}

/// One published glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcomoonEntry {
    /// Glyph properties.
    pub properties: IcomoonProperties,
}

/// Properties of a published glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcomoonProperties {
    /// Glyph name, encoded as `<iconName>-<variant>`.
    pub name: String,
}

/// Loads `devicon.json`.
pub fn load_icon_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<IconRecord>> {
    load_json(path.as_ref())
}

/// Loads `icomoon.json`.
pub fn load_icomoon_manifest<P: AsRef<Path>>(path: P) -> Result<IcomoonManifest> {
    load_json(path.as_ref())
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| PipelineError::open_failed(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| PipelineError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}
