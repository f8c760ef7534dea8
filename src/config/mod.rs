// src/config/mod.rs

//! Request loading and validation for taskwave.
//!
//! Responsibilities:
//! - Define the TOML/JSON-backed request model (`model.rs`).
//! - Load a request file from disk (`loader.rs`).
//! - Validate task shape at the boundary (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_str, RequestFormat};
pub use model::{ConfigSection, RawRequestFile, RequestFile};
pub use validate::validate_request;
