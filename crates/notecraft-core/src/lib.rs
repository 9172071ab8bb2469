//! # notecraft-core
//!
//! Core types, traits, and error taxonomy for notecraft.
//!
//! This crate provides the data model shared by the extraction and
//! translation pipelines, the collaborator traits they are wired through,
//! and the constants every other crate references.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
