//! `springgen preview`: print one generated file without touching disk.

use serde_json::json;
use springgen_core::domain::{LayerArtifact, NamespaceMap, generate_layer_by_key};

use crate::{
    cli::PreviewArgs, commands::generate::effective_config, config::AppConfig, error::CliResult,
    output::OutputManager,
};

pub fn execute(args: PreviewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let artifact = render(&args, config)?;

    if output.is_json() {
        return output.json(&json!({
            "layer": artifact.layer,
            "entity": artifact.entity,
            "namespace": artifact.namespace,
            "path": artifact.relative_path(),
            "source": artifact.source,
        }));
    }

    output.raw(&artifact.source)?;
    Ok(())
}

fn render(args: &PreviewArgs, config: AppConfig) -> CliResult<LayerArtifact> {
    let generator = effective_config(config.generator, &args.project_dir);
    let namespaces = NamespaceMap::resolve(&generator, args.single_folder.as_deref());
    let artifact = generate_layer_by_key(&args.layer, &args.entity, &namespaces, &generator)?;
    Ok(artifact)
}
