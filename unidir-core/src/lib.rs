//! # unidir Core
//!
//! Core types, errors, and constants for the unidir university-directory proxy.
//!
//! This crate provides the foundational building blocks used by the other
//! unidir crates:
//!
//! - **Types**: the normalized `UniversityRecord`, the raw upstream record
//!   shape, and the `Lookup` result wrapper
//! - **Errors**: the `DirectoryError` taxonomy shared by every layer
//! - **Constants**: upstream endpoint, cache TTL, timeout defaults
//!
//! ## Example
//!
//! ```rust
//! use unidir_core::{RawUniversity, UniversityRecord};
//!
//! let raw: RawUniversity = serde_json::from_str(
//!     r#"{"name":"MIT","country":"United States","alpha_two_code":"US"}"#,
//! ).unwrap();
//! assert_eq!(raw.name, "MIT");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{DirectoryError, Result};
pub use types::*;
