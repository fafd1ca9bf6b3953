//! # pbr2gltf
//!
//! Packs a folder of loose PBR texture maps into glTF 2.0 composite
//! textures and a material document.
//!
//! Each image's semantic role (base color, opacity, metallic, roughness,
//! occlusion, normal, emissive) is recognized from its filename suffix.
//! Single-channel maps are packed into the two composites glTF expects: a
//! base color RGBA image (opacity in alpha) and a metallic-roughness image
//! with R=occlusion, G=roughness, B=metallic. Normal and emissive maps are
//! copied byte-for-byte by default to avoid lossy recompression.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use pbr2gltf::convert::{ConvertOptions, convert};
//!
//! let summary = convert(
//!     Path::new("textures/rock01"),
//!     Path::new("out"),
//!     &ConvertOptions::default(),
//! )?;
//! println!("wrote {}", summary.gltf_path.display());
//! # Ok::<(), pbr2gltf::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `pbr2gltf` command-line binary

pub mod classify;
pub mod convert;
pub mod error;
pub mod gltf;
pub mod raster;
pub mod texture_set;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::classify::{SemanticRole, classify};
    pub use crate::convert::{ConversionSummary, ConvertOptions, convert};
    pub use crate::error::{Error, Result};
    pub use crate::gltf::{AssembledMaterial, GltfDocument, assemble};
    pub use crate::raster::RasterImage;
    pub use crate::texture_set::{IngestOutcome, MapSlot, RawMap, TextureSet};
}
