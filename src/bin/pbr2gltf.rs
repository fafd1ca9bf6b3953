fn main() -> anyhow::Result<()> {
    pbr2gltf::cli::run_cli()
}
