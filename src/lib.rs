//! Placeholder asset generation.
//!
//! Decodes one embedded base64 constant (a 1x1 blue PNG) and writes it to
//! the four asset file names a packaging step expects to find:
//! `icon.png`, `adaptive-icon.png`, `favicon.png`, `splash-icon.png`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! let report = asset_stubs::generate()?;
//! assert!(report.is_complete());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod asset;
mod error;
mod generator;
mod payload;

// Re-exports
pub use asset::AssetKind;
pub use error::AssetError;
pub use generator::{generate, generate_in, GenerateReport};
pub use payload::{PayloadDigest, PngPayload, PLACEHOLDER_PNG_BASE64, PNG_SIGNATURE};
