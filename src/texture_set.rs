//! Accumulation of classified texture maps into glTF composite buffers
//!
//! A [`TextureSet`] is created once per conversion run when the first
//! eligible image fixes the canvas size, mutated as each classified map is
//! ingested, and consumed once by the assembler. The channel layout of the
//! metallic-roughness composite (R=occlusion, G=roughness, B=metallic) is
//! mandated by the glTF 2.0 `metallicRoughnessTexture` definition.

use crate::classify::SemanticRole;
use crate::raster::RasterImage;

/// Undecoded bytes of a source file kept for passthrough output.
#[derive(Debug, Clone)]
pub struct RawMap {
    /// The file's original encoded bytes.
    pub bytes: Vec<u8>,
    /// The file's original extension, with leading dot.
    pub extension: String,
}

/// A normal or emissive map in exactly one of its two representations.
#[derive(Debug, Clone)]
pub enum MapSlot {
    /// Decoded pixels, re-encoded to PNG on output.
    Recomposed(RasterImage),
    /// Original encoded bytes, written verbatim with their extension.
    Passthrough {
        /// The source file's encoded bytes.
        bytes: Vec<u8>,
        /// The source file's extension, with leading dot.
        extension: String,
    },
}

/// Which semantic roles have been observed during a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Observed {
    pub base_color: bool,
    pub opacity: bool,
    pub metallic: bool,
    pub roughness: bool,
    pub occlusion: bool,
    pub normal: bool,
    pub emissive: bool,
}

/// Result of ingesting one classified image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The image was applied to the set (a no-op for unclassified files).
    Applied,
    /// The image size differs from the established canvas; nothing was
    /// mutated and the file should be skipped with a warning.
    SizeMismatch {
        /// The rejected image's width.
        width: u32,
        /// The rejected image's height.
        height: u32,
    },
}

/// One conversion run's accumulated composite state.
#[derive(Debug, Clone)]
pub struct TextureSet {
    /// Canvas width, fixed by the first accepted image.
    pub width: u32,
    /// Canvas height, fixed by the first accepted image.
    pub height: u32,
    /// RGBA base color composite, default opaque white.
    pub base_color: RasterImage,
    /// RGBA metallic-roughness composite, default all-255. Channel layout
    /// R=occlusion, G=roughness, B=metallic; alpha unused and left at 255.
    pub metallic_roughness: RasterImage,
    /// Normal map slot. Pre-allocated as `Recomposed` when passthrough is
    /// disabled, otherwise populated on first ingest.
    pub normal: Option<MapSlot>,
    /// Emissive map slot, symmetric to `normal`.
    pub emissive: Option<MapSlot>,
    /// Roles observed so far.
    pub observed: Observed,
}

impl TextureSet {
    /// Allocate the composites for a fixed canvas size.
    ///
    /// The passthrough toggles must be decided here: they determine whether
    /// the normal/emissive composite buffers exist at all.
    pub fn new(width: u32, height: u32, keep_normal_raw: bool, keep_emissive_raw: bool) -> Self {
        let recomposed = || MapSlot::Recomposed(RasterImage::filled(width, height, 3, 0));
        Self {
            width,
            height,
            base_color: RasterImage::filled(width, height, 4, 255),
            metallic_roughness: RasterImage::filled(width, height, 4, 255),
            normal: (!keep_normal_raw).then(recomposed),
            emissive: (!keep_emissive_raw).then(recomposed),
            observed: Observed::default(),
        }
    }

    /// Apply one classified image to the composites.
    ///
    /// The size check happens before any mutation; a mismatching image
    /// leaves the set untouched. `raw` carries the file's undecoded bytes
    /// when passthrough is enabled for the role.
    pub fn ingest(
        &mut self,
        role: SemanticRole,
        image: &RasterImage,
        raw: Option<RawMap>,
    ) -> IngestOutcome {
        if image.width != self.width || image.height != self.height {
            return IngestOutcome::SizeMismatch {
                width: image.width,
                height: image.height,
            };
        }

        match role {
            SemanticRole::BaseColor => {
                copy_rgb(&mut self.base_color, image);
                self.observed.base_color = true;
            }
            SemanticRole::Opacity => {
                copy_channel(&mut self.base_color, image, 3);
                self.observed.opacity = true;
            }
            SemanticRole::Metallic => {
                copy_channel(&mut self.metallic_roughness, image, 2);
                self.observed.metallic = true;
            }
            SemanticRole::Roughness => {
                copy_channel(&mut self.metallic_roughness, image, 1);
                self.observed.roughness = true;
            }
            SemanticRole::Occlusion => {
                copy_channel(&mut self.metallic_roughness, image, 0);
                self.observed.occlusion = true;
            }
            SemanticRole::Normal => {
                apply_slot(&mut self.normal, image, raw);
                self.observed.normal = true;
            }
            SemanticRole::Emissive => {
                apply_slot(&mut self.emissive, image, raw);
                self.observed.emissive = true;
            }
            SemanticRole::None => {}
        }

        IngestOutcome::Applied
    }
}

/// Copy source RGB into the destination's first three channels.
fn copy_rgb(dst: &mut RasterImage, src: &RasterImage) {
    for y in 0..dst.height {
        for x in 0..dst.width {
            let [r, g, b, _] = src.rgba_at(x, y);
            dst.set(x, y, 0, r);
            dst.set(x, y, 1, g);
            dst.set(x, y, 2, b);
        }
    }
}

/// Copy source channel 0 into one destination channel.
fn copy_channel(dst: &mut RasterImage, src: &RasterImage, channel: usize) {
    for y in 0..dst.height {
        for x in 0..dst.width {
            let [value, ..] = src.rgba_at(x, y);
            dst.set(x, y, channel, value);
        }
    }
}

fn apply_slot(slot: &mut Option<MapSlot>, image: &RasterImage, raw: Option<RawMap>) {
    match raw {
        Some(RawMap { bytes, extension }) => {
            *slot = Some(MapSlot::Passthrough { bytes, extension });
        }
        None => {
            if let Some(MapSlot::Recomposed(dst)) = slot {
                copy_rgb(dst, image);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32, value: u8) -> RasterImage {
        RasterImage::filled(width, height, 1, value)
    }

    #[test]
    fn test_size_mismatch_leaves_set_untouched() {
        let mut set = TextureSet::new(2, 2, true, true);
        let before = set.clone();

        let outcome = set.ingest(SemanticRole::Roughness, &gray(4, 4, 20), None);

        assert_eq!(
            outcome,
            IngestOutcome::SizeMismatch {
                width: 4,
                height: 4
            }
        );
        assert_eq!(set.base_color.pixels, before.base_color.pixels);
        assert_eq!(set.metallic_roughness.pixels, before.metallic_roughness.pixels);
        assert!(!set.observed.roughness);
    }

    #[test]
    fn test_metallic_roughness_packing() {
        let mut set = TextureSet::new(2, 2, true, true);
        assert_eq!(set.ingest(SemanticRole::Metallic, &gray(2, 2, 10), None), IngestOutcome::Applied);
        assert_eq!(set.ingest(SemanticRole::Roughness, &gray(2, 2, 20), None), IngestOutcome::Applied);

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(set.metallic_roughness.rgba_at(x, y), [255, 20, 10, 255]);
            }
        }
        assert!(set.observed.metallic);
        assert!(set.observed.roughness);
        assert!(!set.observed.occlusion);
    }

    #[test]
    fn test_occlusion_lands_in_red() {
        let mut set = TextureSet::new(1, 1, true, true);
        set.ingest(SemanticRole::Occlusion, &gray(1, 1, 77), None);
        assert_eq!(set.metallic_roughness.rgba_at(0, 0), [77, 255, 255, 255]);
    }

    #[test]
    fn test_opacity_fills_base_color_alpha() {
        let mut set = TextureSet::new(1, 1, true, true);
        set.ingest(SemanticRole::Opacity, &gray(1, 1, 128), None);
        assert_eq!(set.base_color.rgba_at(0, 0), [255, 255, 255, 128]);
        assert!(set.observed.opacity);
        assert!(!set.observed.base_color);
    }

    #[test]
    fn test_base_color_keeps_alpha() {
        let mut set = TextureSet::new(1, 1, true, true);
        set.ingest(SemanticRole::Opacity, &gray(1, 1, 128), None);
        let rgb = RasterImage {
            width: 1,
            height: 1,
            channels: 3,
            pixels: vec![1, 2, 3],
        };
        set.ingest(SemanticRole::BaseColor, &rgb, None);
        assert_eq!(set.base_color.rgba_at(0, 0), [1, 2, 3, 128]);
    }

    #[test]
    fn test_normal_passthrough_keeps_bytes() {
        let mut set = TextureSet::new(1, 1, true, true);
        assert!(set.normal.is_none());

        let raw = RawMap {
            bytes: vec![0xDE, 0xAD],
            extension: ".jpg".to_string(),
        };
        set.ingest(SemanticRole::Normal, &gray(1, 1, 0), Some(raw));

        match &set.normal {
            Some(MapSlot::Passthrough { bytes, extension }) => {
                assert_eq!(bytes, &[0xDE, 0xAD]);
                assert_eq!(extension, ".jpg");
            }
            other => panic!("expected passthrough slot, got {other:?}"),
        }
        assert!(set.observed.normal);
    }

    #[test]
    fn test_normal_recompose_copies_rgb() {
        let mut set = TextureSet::new(1, 1, false, true);
        assert!(matches!(set.normal, Some(MapSlot::Recomposed(_))));

        let rgb = RasterImage {
            width: 1,
            height: 1,
            channels: 3,
            pixels: vec![120, 130, 250],
        };
        set.ingest(SemanticRole::Normal, &rgb, None);

        match &set.normal {
            Some(MapSlot::Recomposed(img)) => {
                assert_eq!(img.channels, 3);
                assert_eq!(img.pixels, vec![120, 130, 250]);
            }
            other => panic!("expected recomposed slot, got {other:?}"),
        }
    }

    #[test]
    fn test_unclassified_image_is_a_noop() {
        let mut set = TextureSet::new(1, 1, true, true);
        let before = set.clone();
        assert_eq!(set.ingest(SemanticRole::None, &gray(1, 1, 9), None), IngestOutcome::Applied);
        assert_eq!(set.base_color.pixels, before.base_color.pixels);
        assert_eq!(set.metallic_roughness.pixels, before.metallic_roughness.pixels);
    }
}
