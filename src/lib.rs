#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared numerical aliases for cross-section points and field vectors.
pub mod math;
/// Line-charge pair potential and field formulas.
pub mod fields;
/// Medium properties (relative permittivity of the surrounding soil).
pub mod materials;
/// Grid sampling helpers for building field maps.
pub mod sweep;
/// Error types for the typed construction layer.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
