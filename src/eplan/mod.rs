//! EPLAN project domain: key code tables and the project model.

pub mod keys;
pub mod project;

pub use self::project::{EplanProject, Error as ProjectError};
