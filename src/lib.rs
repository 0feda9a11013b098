//! Normalization of hierarchical EPLAN project metadata.
//!
//! EPLAN electrical-CAD exports key every data field by opaque positional
//! codes (`@P10009`, `O4`, `S75x5`, ...). This crate deserializes such
//! dumps into insertion-ordered value trees and normalizes them in place:
//! renaming coded keys to human-readable labels (safely, even across
//! circular rename tables), pruning null-valued entries, and repositioning
//! keys without disturbing the order of their neighbors. The `eplan`
//! module layers a typed project model on top.

pub mod eplan;
pub mod ops;
pub mod sources;
pub mod types;

pub use crate::eplan::EplanProject;
pub use crate::ops::{remove_null_values, rename_keys, RenameTable};
pub use crate::sources::SerializeFormat;
pub use crate::types::{Mapping, Sequence, Value};
