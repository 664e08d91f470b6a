//! Validated path wrappers.
//!
//! Types here are checked on construction, so a value in hand is known to
//! satisfy its invariant.

pub mod existing_dir;

pub use existing_dir::ExistingDir;
