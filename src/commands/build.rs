use crate::{
    BuildArgs,
    build::{Builder, base_path_from_config},
    config::RootConfig,
};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let config_path = super::config_path(args.config_file.as_ref())?;
    let config = RootConfig::load_from_arg(Some(config_path.as_path())).await?;

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);

    let builder = Builder::new(config, base_path);
    let result = builder.build()?;

    println!(
        "Built site to {} ({} documents, {} static files)",
        result.output_dir.display(),
        result.documents,
        result.static_files
    );
    if result.skipped > 0 {
        println!("Skipped {} file(s) with errors", result.skipped);
    }

    Ok(())
}
