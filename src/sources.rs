//! Loading serialized metadata dumps into value trees.

use std::fs::File;
use std::io::Error as IoError;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::Value;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open file: {0:?}")]
    FileOpen(PathBuf, #[source] IoError),
    #[error("cannot read file to string")]
    FileRead(#[source] IoError),
    #[error("cannot deserialize JSON metadata")]
    JsonDeserialize(#[source] serde_json::Error),
    #[error("cannot deserialize YAML metadata")]
    YamlDeserialize(#[source] serde_yaml::Error),
    #[error("unrecognized metadata file extension: {0:?}")]
    UnknownExtension(PathBuf),
}

/// Represents all the different metadata dump formats that are supported.
///
/// The native `.epj` XML export is converted to one of these by an external
/// tool before it reaches this crate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerializeFormat {
    Json,
    Yaml,
}

impl Default for SerializeFormat {
    fn default() -> Self {
        Self::Json
    }
}

impl SerializeFormat {
    /// Returns the expected file name extension for files in this format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yml",
        }
    }

    /// Guesses the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn read_str(&self, s: &str) -> Result<Value, Error> {
        match self {
            Self::Json => serde_json::from_str(s).map_err(Error::JsonDeserialize),
            Self::Yaml => serde_yaml::from_str(s).map_err(Error::YamlDeserialize),
        }
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Value, Error> {
        let path = path.as_ref();
        let mut f = File::open(path).map_err(|e| Error::FileOpen(path.to_path_buf(), e))?;

        let mut buffer = String::new();
        f.read_to_string(&mut buffer).map_err(Error::FileRead)?;

        self.read_str(&buffer)
    }
}

/// Loads a metadata dump, picking the format from the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Value, Error> {
    let path = path.as_ref();
    let format = SerializeFormat::from_path(path)
        .ok_or_else(|| Error::UnknownExtension(path.to_path_buf()))?;

    format.read_file(path)
}
