//! pbr2gltf CLI - pack a folder of PBR maps into a glTF 2.0 material

use std::path::PathBuf;

use clap::Parser;

use crate::convert::{ConvertOptions, convert};

#[derive(Parser)]
#[command(name = "pbr2gltf")]
#[command(about = "Pack loose PBR texture maps into a glTF 2.0 material", long_about = None)]
struct Cli {
    /// Folder containing the PBR texture maps
    source: PathBuf,

    /// Output folder for the composite images and the glTF document
    #[arg(short, long, default_value = ".")]
    destination: PathBuf,

    /// Metallic factor used when no metallic map is found (clamped to 0..=1)
    #[arg(short = 'm', long, default_value_t = 1.0)]
    metallic_factor: f32,

    /// Roughness factor used when no roughness map is found (clamped to 0..=1)
    #[arg(short = 'r', long, default_value_t = 1.0)]
    roughness_factor: f32,

    /// Re-encode the normal map to PNG instead of copying its bytes verbatim
    #[arg(long)]
    recompose_normal: bool,

    /// Re-encode the emissive map to PNG instead of copying its bytes verbatim
    #[arg(long)]
    recompose_emissive: bool,
}

/// Run the pbr2gltf CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let options = ConvertOptions {
        metallic_factor: cli.metallic_factor.clamp(0.0, 1.0),
        roughness_factor: cli.roughness_factor.clamp(0.0, 1.0),
        keep_normal_raw: !cli.recompose_normal,
        keep_emissive_raw: !cli.recompose_emissive,
    };

    let summary = convert(&cli.source, &cli.destination, &options)?;
    println!(
        "Converted {} map(s), {} skipped -> {}",
        summary.processed,
        summary.skipped,
        summary.gltf_path.display()
    );

    Ok(())
}
