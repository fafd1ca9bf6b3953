//! glTF 2.0 material descriptor output
//!
//! Serde types for the document subset this tool writes, plus the assembler
//! that turns an accumulated texture set into planned output files and the
//! referencing document.

mod assemble;
mod types;

pub use assemble::{AssembledMaterial, GENERATOR, ImagePayload, OutputFile, assemble};
pub use types::{
    GltfAsset, GltfDocument, GltfImage, GltfMaterial, GltfPbrMetallicRoughness, GltfTexture,
    GltfTextureInfo,
};
