//! glTF 2.0 document types for the material descriptor.
//!
//! Only the subset this tool writes: asset metadata, uri-referenced images,
//! textures, and one PBR metallic-roughness material.

use serde::Serialize;

/// Asset metadata
#[derive(Debug, Clone, Serialize)]
pub struct GltfAsset {
    pub version: String,
    pub generator: String,
}

/// Image referenced by relative uri
#[derive(Debug, Clone, Serialize)]
pub struct GltfImage {
    pub uri: String,
}

/// Texture referencing an image
#[derive(Debug, Clone, Serialize)]
pub struct GltfTexture {
    pub source: usize,
}

/// Texture info used in materials
#[derive(Debug, Clone, Serialize)]
pub struct GltfTextureInfo {
    pub index: usize,
}

/// PBR Metallic-Roughness material model
#[derive(Debug, Clone, Default, Serialize)]
pub struct GltfPbrMetallicRoughness {
    #[serde(rename = "baseColorTexture")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_color_texture: Option<GltfTextureInfo>,
    #[serde(rename = "metallicFactor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metallic_factor: Option<f32>,
    #[serde(rename = "roughnessFactor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness_factor: Option<f32>,
    #[serde(rename = "metallicRoughnessTexture")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metallic_roughness_texture: Option<GltfTextureInfo>,
}

/// Material definition
///
/// `pbrMetallicRoughness` is always emitted, as an empty object when no map
/// contributed to it.
#[derive(Debug, Clone, Serialize)]
pub struct GltfMaterial {
    pub name: String,
    #[serde(rename = "pbrMetallicRoughness")]
    pub pbr_metallic_roughness: GltfPbrMetallicRoughness,
    #[serde(rename = "normalTexture")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_texture: Option<GltfTextureInfo>,
    #[serde(rename = "occlusionTexture")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occlusion_texture: Option<GltfTextureInfo>,
    #[serde(rename = "emissiveTexture")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive_texture: Option<GltfTextureInfo>,
    #[serde(rename = "emissiveFactor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive_factor: Option<[f32; 3]>,
    #[serde(rename = "alphaMode")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_mode: Option<String>,
    #[serde(rename = "doubleSided")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_sided: Option<bool>,
}

/// Complete glTF document
///
/// `textures` and `images` keys appear only when non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct GltfDocument {
    pub asset: GltfAsset,
    pub materials: Vec<GltfMaterial>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub textures: Vec<GltfTexture>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<GltfImage>,
}
