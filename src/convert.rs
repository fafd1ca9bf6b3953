//! End-to-end conversion of a folder of PBR maps into a glTF material
//!
//! Directory entries are processed strictly in the order the filesystem
//! yields them: the first eligible image fixes the canvas size and the
//! material base name, so enumeration order is observable in the output.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::classify::{self, SemanticRole};
use crate::error::{Error, Result};
use crate::gltf::{ImagePayload, assemble};
use crate::raster;
use crate::texture_set::{IngestOutcome, RawMap, TextureSet};

/// Conversion options.
///
/// The passthrough toggles must be fixed before the run starts; they decide
/// whether the normal/emissive composite buffers are allocated at all.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// `metallicFactor` emitted when no metallic map is observed (0..=1).
    pub metallic_factor: f32,
    /// `roughnessFactor` emitted when no roughness map is observed (0..=1).
    pub roughness_factor: f32,
    /// Copy the normal map's bytes verbatim instead of re-encoding to PNG.
    pub keep_normal_raw: bool,
    /// Copy the emissive map's bytes verbatim instead of re-encoding to PNG.
    pub keep_emissive_raw: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            keep_normal_raw: true,
            keep_emissive_raw: true,
        }
    }
}

/// Result of a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    /// Number of images applied to the texture set.
    pub processed: usize,
    /// Number of images skipped (decode failure or size mismatch).
    pub skipped: usize,
    /// Path of the written glTF document.
    pub gltf_path: PathBuf,
}

/// Convert a folder of loose PBR texture maps into composite images and a
/// glTF material document in `dest`.
///
/// Per-file decode failures and size mismatches are soft-skipped with a
/// warning. Failures to read a passthrough source or to write any output
/// artifact abort the run.
///
/// # Errors
/// Returns an error if the source folder cannot be enumerated, a
/// passthrough file cannot be read, or any output cannot be written.
pub fn convert(source: &Path, dest: &Path, options: &ConvertOptions) -> Result<ConversionSummary> {
    let mut set: Option<TextureSet> = None;
    let mut base_name = String::from(classify::FALLBACK_BASE_NAME);
    let mut processed = 0usize;
    let mut skipped = 0usize;

    // Entry order as the OS yields it; intentionally unsorted.
    for entry in WalkDir::new(source).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !classify::has_supported_extension(path) {
            continue;
        }

        tracing::info!("processing '{}'", path.display());

        let image = match raster::decode(path) {
            Ok(image) => image,
            Err(err) => {
                tracing::warn!("skipping '{}': {err}", path.display());
                skipped += 1;
                continue;
            }
        };

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if set.is_none() {
            // First accepted image fixes the canvas and the base name,
            // whatever its role.
            if let Some(prefix) = classify::base_name(stem) {
                base_name = prefix.to_owned();
            }
        }
        let target = set.get_or_insert_with(|| {
            TextureSet::new(
                image.width,
                image.height,
                options.keep_normal_raw,
                options.keep_emissive_raw,
            )
        });

        let role = classify::classify(stem);
        let raw = match role {
            SemanticRole::Normal if options.keep_normal_raw => Some(read_raw(path)?),
            SemanticRole::Emissive if options.keep_emissive_raw => Some(read_raw(path)?),
            _ => None,
        };

        match target.ingest(role, &image, raw) {
            IngestOutcome::Applied => {
                if role != SemanticRole::None {
                    tracing::info!("found {role}");
                }
                processed += 1;
            }
            IngestOutcome::SizeMismatch { width, height } => {
                tracing::warn!(
                    "skipping '{}': size {width}x{height} does not match canvas {}x{}",
                    path.display(),
                    target.width,
                    target.height
                );
                skipped += 1;
            }
        }
    }

    let assembled = assemble(
        set,
        &base_name,
        options.metallic_factor,
        options.roughness_factor,
    );

    fs::create_dir_all(dest).map_err(|e| Error::WriteFailed {
        path: dest.to_path_buf(),
        message: e.to_string(),
    })?;

    for file in assembled.files {
        let path = dest.join(&file.file_name);
        match file.payload {
            ImagePayload::Png(image) => raster::encode_png(&path, &image)?,
            ImagePayload::Raw(bytes) => {
                fs::write(&path, bytes).map_err(|e| Error::WriteFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
            }
        }
        tracing::info!("wrote '{}'", path.display());
    }

    let gltf_path = dest.join(format!("{base_name}.gltf"));
    let json = serde_json::to_string_pretty(&assembled.document)?;
    fs::write(&gltf_path, json).map_err(|e| Error::WriteFailed {
        path: gltf_path.clone(),
        message: e.to_string(),
    })?;

    tracing::info!("converted to '{}'", gltf_path.display());

    Ok(ConversionSummary {
        processed,
        skipped,
        gltf_path,
    })
}

fn read_raw(path: &Path) -> Result<RawMap> {
    let bytes = fs::read(path).map_err(|e| Error::RawReadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or_else(String::new, |ext| format!(".{ext}"));
    Ok(RawMap { bytes, extension })
}
