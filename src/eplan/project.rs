//! EPLAN project model over a normalized metadata mapping.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::eplan::keys;
use crate::ops::{remove_null_values, rename_mapping_keys};
use crate::sources::{self, SerializeFormat};
use crate::types::{Mapping, Sequence, Value};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] sources::Error),
    #[error("project root is not a mapping")]
    NonMappingRoot,
}

/// An ingested EPLAN project export.
///
/// The raw dump is normalized on construction: every key code the static
/// table knows about is renamed to its human-readable label, and absent
/// fields (serialized as nulls) are pruned. The typed accessors then read
/// labeled fields, returning `None` for anything the export did not carry.
#[derive(Debug, Default)]
pub struct EplanProject {
    file_location: Option<PathBuf>,
    meta_data: Mapping,
}

impl EplanProject {
    /// Loads a project dump from disk, picking the format from the file
    /// extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let value = sources::load(path)?;

        let mut project = Self::from_value(value)?;
        project.file_location = Some(path.to_path_buf());
        Ok(project)
    }

    pub fn from_str(s: &str, format: SerializeFormat) -> Result<Self, Error> {
        Self::from_value(format.read_str(s)?)
    }

    /// Builds a project from an already-deserialized value tree, which must
    /// be a mapping at its root.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Mapping(mut meta_data) => {
                normalize(&mut meta_data);

                Ok(Self {
                    file_location: None,
                    meta_data,
                })
            },
            _ => Err(Error::NonMappingRoot),
        }
    }

    pub fn file_location(&self) -> Option<&Path> {
        self.file_location.as_deref()
    }

    pub fn meta_data(&self) -> &Mapping {
        &self.meta_data
    }

    /// The root entry that carries the bulk of the project data, when the
    /// export has one.
    pub fn indexed_attribute(&self) -> Option<&Mapping> {
        self.meta_data
            .get(keys::PROJECT_ROOT)
            .and_then(Value::as_mapping)
    }

    /// Looks up a labeled field under the project root, falling back to the
    /// top level for dumps that were exported without the root wrapper.
    fn field(&self, label: &str) -> Option<&Value> {
        self.indexed_attribute()
            .and_then(|root| root.get(label))
            .or_else(|| self.meta_data.get(label))
    }

    pub fn project_data(&self) -> Option<&Mapping> {
        self.field(keys::LABEL_PROJECT_DATA).and_then(Value::as_mapping)
    }

    pub fn properties(&self) -> Option<&Mapping> {
        self.field(keys::LABEL_PROPERTIES).and_then(Value::as_mapping)
    }

    pub fn sheets(&self) -> Option<&Sequence> {
        self.field(keys::LABEL_SHEETS).and_then(Value::as_sequence)
    }

    pub fn project_bom(&self) -> Option<&Sequence> {
        self.field(keys::LABEL_PROJECT_BOM).and_then(Value::as_sequence)
    }

    pub fn project_name(&self) -> Option<&str> {
        self.property(keys::LABEL_PROJECT_NAME)
    }

    pub fn project_name_full(&self) -> Option<&str> {
        self.property(keys::LABEL_PROJECT_NAME_FULL)
    }

    pub fn project_description(&self) -> Option<&str> {
        self.property(keys::LABEL_PROJECT_DESCRIPTION)
    }

    pub fn company_name(&self) -> Option<&str> {
        self.property(keys::LABEL_COMPANY_NAME)
    }

    pub fn job_number(&self) -> Option<&str> {
        self.property(keys::LABEL_JOB_NUMBER)
    }

    pub fn unique_project_id(&self) -> Option<&str> {
        self.property(keys::LABEL_UNIQUE_PROJECT_ID)
    }

    /// Reads a scalar string out of the properties block, falling back to
    /// the same label as a direct field.
    fn property(&self, label: &str) -> Option<&str> {
        self.properties()
            .and_then(|props| props.get(label))
            .or_else(|| self.field(label))
            .and_then(Value::as_str)
    }
}

fn normalize(meta_data: &mut Mapping) {
    let table = keys::key_map();

    rename_mapping_keys(meta_data, &table);
    remove_null_values(meta_data);

    debug!(
        "normalized EPLAN metadata: {} top-level entries",
        meta_data.len()
    );
}
