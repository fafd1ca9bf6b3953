//! Filename classification for PBR texture maps
//!
//! Asset packs name their maps with a shared prefix followed by a role
//! suffix (`rock01_Normal.png`, `rock01_Roughness.png`). This module maps
//! a file stem to its semantic role and recovers the shared prefix that
//! becomes the material's base name.

use std::fmt;
use std::path::Path;

/// The semantic role a texture map plays in a PBR material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticRole {
    /// Albedo/diffuse color, copied into the base color composite's RGB.
    BaseColor,
    /// Alpha mask, copied into the base color composite's alpha channel.
    Opacity,
    /// Metalness, packed into the metallic-roughness blue channel.
    Metallic,
    /// Roughness, packed into the metallic-roughness green channel.
    Roughness,
    /// Ambient occlusion, packed into the metallic-roughness red channel.
    Occlusion,
    /// Tangent-space normal map, kept as its own texture.
    Normal,
    /// Emissive color, kept as its own texture.
    Emissive,
    /// No recognized role.
    None,
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticRole::BaseColor => "base color",
            SemanticRole::Opacity => "opacity",
            SemanticRole::Metallic => "metallic",
            SemanticRole::Roughness => "roughness",
            SemanticRole::Occlusion => "occlusion",
            SemanticRole::Normal => "normal",
            SemanticRole::Emissive => "emissive",
            SemanticRole::None => "unclassified",
        };
        f.write_str(name)
    }
}

/// Ordered pattern table, scanned top to bottom.
///
/// A stem matching several patterns resolves to the first entry that hits,
/// so the order here is part of the classifier's contract.
const PATTERNS: &[(&str, SemanticRole)] = &[
    ("_color", SemanticRole::BaseColor),
    ("_base_color", SemanticRole::BaseColor),
    ("_basecolor", SemanticRole::BaseColor),
    ("_base color", SemanticRole::BaseColor),
    ("_diffuse", SemanticRole::BaseColor),
    ("_opacity", SemanticRole::Opacity),
    ("_metallic", SemanticRole::Metallic),
    ("_roughness", SemanticRole::Roughness),
    ("_rough", SemanticRole::Roughness),
    ("_ao", SemanticRole::Occlusion),
    ("_ambientocclusion", SemanticRole::Occlusion),
    ("_normal", SemanticRole::Normal),
    ("_nor", SemanticRole::Normal),
    ("_emissive", SemanticRole::Emissive),
];

/// Base name used when no map in the folder carries a recognized suffix.
pub const FALLBACK_BASE_NAME: &str = "pbr";

/// Classify a file stem by its role suffix.
///
/// Matching is case-insensitive and commits to the first pattern in the
/// table that occurs anywhere in the stem.
pub fn classify(stem: &str) -> SemanticRole {
    let lower = stem.to_ascii_lowercase();
    for &(pattern, role) in PATTERNS {
        if lower.contains(pattern) {
            return role;
        }
    }
    SemanticRole::None
}

/// Extract the material base name from a stem.
///
/// Returns everything before the earliest-occurring pattern in the table,
/// or `None` if no pattern matches. Unlike [`classify`] this scans for the
/// earliest match position, not the first table entry.
pub fn base_name(stem: &str) -> Option<&str> {
    let lower = stem.to_ascii_lowercase();
    PATTERNS
        .iter()
        .filter_map(|&(pattern, _)| lower.find(pattern))
        .min()
        .map(|offset| &stem[..offset])
}

/// Whether the path has an extension the converter accepts.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg")
        })
}
