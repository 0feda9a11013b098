//! In-place normalization passes over deserialized metadata structures.

pub mod prune;
pub mod rename;

pub use self::prune::remove_null_values;
pub use self::rename::{rename_keys, rename_mapping_keys, RenameTable};
