//! Material descriptor assembly
//!
//! Consumes an accumulated [`TextureSet`] and decides which composite
//! images to write and which glTF fields to emit. Image and texture indices
//! are allocated in a fixed order (base color, metallic-roughness, normal,
//! emissive), skipping any composite that was never populated.

use crate::raster::RasterImage;
use crate::texture_set::{MapSlot, TextureSet};

use super::types::{
    GltfAsset, GltfDocument, GltfImage, GltfMaterial, GltfPbrMetallicRoughness, GltfTexture,
    GltfTextureInfo,
};

/// Generator string written into the glTF asset block.
pub const GENERATOR: &str = concat!("pbr2gltf ", env!("CARGO_PKG_VERSION"));

/// Payload of one output image file.
#[derive(Debug, Clone)]
pub enum ImagePayload {
    /// Composite pixels to encode as PNG.
    Png(RasterImage),
    /// Original encoded bytes written verbatim.
    Raw(Vec<u8>),
}

/// One image file the conversion must write.
#[derive(Debug, Clone)]
pub struct OutputFile {
    /// Filename relative to the destination folder; also the image's uri.
    pub file_name: String,
    /// What to write.
    pub payload: ImagePayload,
}

/// The assembled material: planned image files plus the glTF document
/// referencing them.
#[derive(Debug, Clone)]
pub struct AssembledMaterial {
    pub files: Vec<OutputFile>,
    pub document: GltfDocument,
}

/// Assemble the material descriptor from an accumulated texture set.
///
/// `set` is `None` when the source folder held no eligible image; the
/// result is then an empty-but-valid descriptor. The scalar factors apply
/// only when the corresponding map was never observed but the
/// metallic-roughness texture is still emitted for another channel.
pub fn assemble(
    set: Option<TextureSet>,
    base_name: &str,
    default_metallic_factor: f32,
    default_roughness_factor: f32,
) -> AssembledMaterial {
    let mut files = Vec::new();
    let mut images = Vec::new();
    let mut textures = Vec::new();

    let mut pbr = GltfPbrMetallicRoughness::default();
    let mut normal_texture = None;
    let mut occlusion_texture = None;
    let mut emissive_texture = None;
    let mut emissive_factor = None;
    let mut alpha_mode = None;
    let mut double_sided = None;

    if let Some(set) = set {
        let observed = set.observed;

        if observed.base_color || observed.opacity {
            let index = textures.len();
            pbr.base_color_texture = Some(GltfTextureInfo { index });
            if observed.opacity {
                alpha_mode = Some("MASK".to_string());
                double_sided = Some(true);
            }
            push_image(
                &mut files,
                &mut images,
                &mut textures,
                format!("{base_name}_baseColor.png"),
                ImagePayload::Png(set.base_color),
            );
        }

        if observed.metallic || observed.roughness || observed.occlusion {
            let index = textures.len();
            if !observed.metallic {
                pbr.metallic_factor = Some(default_metallic_factor);
            }
            if !observed.roughness {
                pbr.roughness_factor = Some(default_roughness_factor);
            }
            pbr.metallic_roughness_texture = Some(GltfTextureInfo { index });
            if observed.occlusion {
                occlusion_texture = Some(GltfTextureInfo { index });
            }
            push_image(
                &mut files,
                &mut images,
                &mut textures,
                format!("{base_name}_metallicRoughness.png"),
                ImagePayload::Png(set.metallic_roughness),
            );
        }

        if observed.normal {
            if let Some(slot) = set.normal {
                let index = textures.len();
                normal_texture = Some(GltfTextureInfo { index });
                let (file_name, payload) = slot_output(slot, base_name, "normal");
                push_image(&mut files, &mut images, &mut textures, file_name, payload);
            }
        }

        if observed.emissive {
            if let Some(slot) = set.emissive {
                let index = textures.len();
                emissive_texture = Some(GltfTextureInfo { index });
                // Fixed constant whenever an emissive texture exists
                emissive_factor = Some([1.0, 1.0, 1.0]);
                let (file_name, payload) = slot_output(slot, base_name, "emissive");
                push_image(&mut files, &mut images, &mut textures, file_name, payload);
            }
        }
    }

    let material = GltfMaterial {
        name: base_name.to_string(),
        pbr_metallic_roughness: pbr,
        normal_texture,
        occlusion_texture,
        emissive_texture,
        emissive_factor,
        alpha_mode,
        double_sided,
    };

    AssembledMaterial {
        files,
        document: GltfDocument {
            asset: GltfAsset {
                version: "2.0".to_string(),
                generator: GENERATOR.to_string(),
            },
            materials: vec![material],
            textures,
            images,
        },
    }
}

fn push_image(
    files: &mut Vec<OutputFile>,
    images: &mut Vec<GltfImage>,
    textures: &mut Vec<GltfTexture>,
    file_name: String,
    payload: ImagePayload,
) {
    // Image and texture arrays stay parallel, so the texture's source index
    // equals its own index.
    textures.push(GltfTexture {
        source: images.len(),
    });
    images.push(GltfImage {
        uri: file_name.clone(),
    });
    files.push(OutputFile { file_name, payload });
}

fn slot_output(slot: MapSlot, base_name: &str, suffix: &str) -> (String, ImagePayload) {
    match slot {
        MapSlot::Recomposed(image) => (
            format!("{base_name}_{suffix}.png"),
            ImagePayload::Png(image),
        ),
        MapSlot::Passthrough { bytes, extension } => (
            format!("{base_name}_{suffix}{extension}"),
            ImagePayload::Raw(bytes),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SemanticRole;
    use crate::texture_set::RawMap;

    fn gray(value: u8) -> RasterImage {
        RasterImage::filled(2, 2, 1, value)
    }

    fn set_with(roles: &[SemanticRole]) -> TextureSet {
        let mut set = TextureSet::new(2, 2, true, true);
        for &role in roles {
            let raw = matches!(role, SemanticRole::Normal | SemanticRole::Emissive).then(|| {
                RawMap {
                    bytes: vec![1, 2, 3],
                    extension: ".png".to_string(),
                }
            });
            set.ingest(role, &gray(100), raw);
        }
        set
    }

    #[test]
    fn test_empty_descriptor() {
        let assembled = assemble(None, "pbr", 1.0, 1.0);

        assert!(assembled.files.is_empty());
        let json = serde_json::to_value(&assembled.document).unwrap();
        assert_eq!(json["asset"]["version"], "2.0");
        assert_eq!(json["materials"][0]["name"], "pbr");
        assert_eq!(json["materials"][0]["pbrMetallicRoughness"], serde_json::json!({}));
        assert!(json.get("textures").is_none());
        assert!(json.get("images").is_none());
    }

    #[test]
    fn test_factors_omitted_when_both_maps_observed() {
        let set = set_with(&[SemanticRole::Metallic, SemanticRole::Roughness]);
        let assembled = assemble(Some(set), "rock", 0.3, 0.4);

        let pbr = &assembled.document.materials[0].pbr_metallic_roughness;
        assert!(pbr.metallic_factor.is_none());
        assert!(pbr.roughness_factor.is_none());
        assert!(pbr.metallic_roughness_texture.is_some());
        assert!(assembled.document.materials[0].occlusion_texture.is_none());
    }

    #[test]
    fn test_default_factor_fallback() {
        let set = set_with(&[SemanticRole::Roughness]);
        let assembled = assemble(Some(set), "rock", 0.3, 0.4);

        let pbr = &assembled.document.materials[0].pbr_metallic_roughness;
        assert_eq!(pbr.metallic_factor, Some(0.3));
        assert!(pbr.roughness_factor.is_none());
        assert!(pbr.metallic_roughness_texture.is_some());
    }

    #[test]
    fn test_occlusion_shares_metallic_roughness_image() {
        let set = set_with(&[SemanticRole::Occlusion]);
        let assembled = assemble(Some(set), "rock", 1.0, 1.0);

        let material = &assembled.document.materials[0];
        let mr_index = material
            .pbr_metallic_roughness
            .metallic_roughness_texture
            .as_ref()
            .unwrap()
            .index;
        assert_eq!(material.occlusion_texture.as_ref().unwrap().index, mr_index);
        assert_eq!(assembled.document.images.len(), 1);
    }

    #[test]
    fn test_opacity_sets_alpha_mode_and_double_sided() {
        let set = set_with(&[SemanticRole::Opacity]);
        let assembled = assemble(Some(set), "leaf", 1.0, 1.0);

        let material = &assembled.document.materials[0];
        assert_eq!(material.alpha_mode.as_deref(), Some("MASK"));
        assert_eq!(material.double_sided, Some(true));
        assert!(material.pbr_metallic_roughness.base_color_texture.is_some());
    }

    #[test]
    fn test_base_color_without_opacity_sets_neither() {
        let set = set_with(&[SemanticRole::BaseColor]);
        let assembled = assemble(Some(set), "rock", 1.0, 1.0);

        let material = &assembled.document.materials[0];
        assert!(material.alpha_mode.is_none());
        assert!(material.double_sided.is_none());
    }

    #[test]
    fn test_emissive_factor_is_constant() {
        let set = set_with(&[SemanticRole::Emissive]);
        let assembled = assemble(Some(set), "lamp", 1.0, 1.0);

        let material = &assembled.document.materials[0];
        assert_eq!(material.emissive_factor, Some([1.0, 1.0, 1.0]));
        assert!(material.emissive_texture.is_some());
    }

    #[test]
    fn test_index_allocation_skips_unwritten_composites() {
        // Normal only: it gets image/texture index 0, not 2.
        let set = set_with(&[SemanticRole::Normal]);
        let assembled = assemble(Some(set), "rock", 1.0, 1.0);

        let material = &assembled.document.materials[0];
        assert_eq!(material.normal_texture.as_ref().unwrap().index, 0);
        assert_eq!(assembled.document.textures.len(), 1);
        assert_eq!(assembled.document.images[0].uri, "rock_normal.png");
        assert!(matches!(assembled.files[0].payload, ImagePayload::Raw(_)));
    }

    #[test]
    fn test_passthrough_extension_survives() {
        let mut set = TextureSet::new(2, 2, true, true);
        set.ingest(
            SemanticRole::Normal,
            &gray(0),
            Some(RawMap {
                bytes: vec![9, 9],
                extension: ".jpg".to_string(),
            }),
        );
        let assembled = assemble(Some(set), "rock", 1.0, 1.0);

        assert_eq!(assembled.files[0].file_name, "rock_normal.jpg");
        assert_eq!(assembled.document.images[0].uri, "rock_normal.jpg");
    }
}
