//! `springgen generate`: write CRUD layers for one or more entities.

use std::path::{Path, PathBuf};

use serde_json::json;
use springgen_adapters::{LocalFilesystem, detect_persistence_package};
use springgen_core::{
    application::{
        DEFAULT_SOURCE_ROOT, GenerationPlan, GenerationReport, GenerationRequest,
        GenerationService, LayerSelection,
    },
    domain::{DomainValidator, GeneratorConfig},
};
use tracing::{debug, info, instrument};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

const POM_FILE: &str = "pom.xml";

#[instrument(skip_all, fields(entities = args.entities.len(), dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let interactive =
        !args.yes && !output.is_quiet() && !output.is_json() && prompt::can_prompt();
    debug!(interactive, "Resolving generation request");

    let entities = resolve_entities(&args.entities, interactive)?;
    let layers = resolve_layers(&args, interactive)?;
    let generator = effective_config(config.generator, &args.project_dir);
    let source_root = args
        .source_root
        .clone()
        .unwrap_or_else(|| default_source_root(&args.project_dir));

    let request = GenerationRequest {
        entities,
        layers,
        single_folder: args.single_folder.clone(),
        overwrite: args.force,
    };

    if !output.is_json() {
        show_configuration(&generator, &request, &source_root, &output)?;
    }

    if args.dry_run {
        let plan = GenerationService::plan(&generator, &request)?;
        return report_plan(&plan, &source_root, &output);
    }

    let service = GenerationService::new(Box::new(LocalFilesystem::new()));
    let report = service.execute(&generator, &request, &source_root)?;
    info!(written = report.written.len(), "Generate command finished");
    report_written(&report, &output)
}

/// Configuration with the persistence package resolved from the project's
/// `pom.xml` when it is still `auto`.
pub fn effective_config(config: GeneratorConfig, project_dir: &Path) -> GeneratorConfig {
    config.with_detected_persistence(detect_persistence_package(&project_dir.join(POM_FILE)))
}

/// Entity names from the arguments, or from a prompt when none were given.
///
/// Arguments may themselves be comma-separated lists.
fn resolve_entities(given: &[String], interactive: bool) -> CliResult<Vec<String>> {
    let mut entities = DomainValidator::normalize_entities(
        given
            .iter()
            .flat_map(|arg| DomainValidator::parse_entity_list(arg)),
    );

    if entities.is_empty() && interactive {
        let answer = prompt::input("Enter entity names (comma-separated)", None)?;
        entities = DomainValidator::parse_entity_list(&answer);
    }

    if entities.is_empty() {
        return Err(CliError::invalid_input("at least one entity name is required"));
    }
    Ok(entities)
}

/// Layer flags win; otherwise every optional layer is asked about, or all
/// are selected when nobody can answer.
fn resolve_layers(args: &GenerateArgs, interactive: bool) -> CliResult<LayerSelection> {
    if args.has_layer_flags() {
        return Ok(LayerSelection {
            repository: args.repository,
            service: args.service,
            controller: args.controller,
        });
    }
    if args.all || !interactive {
        return Ok(LayerSelection::all());
    }

    Ok(LayerSelection {
        repository: prompt::confirm("Generate repository?", true)?,
        service: prompt::confirm("Generate service and implementation?", true)?,
        controller: prompt::confirm("Generate controller?", true)?,
    })
}

fn show_configuration(
    config: &GeneratorConfig,
    request: &GenerationRequest,
    source_root: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let layout = match &request.single_folder {
        Some(folder) if !folder.trim().is_empty() => format!("single folder '{}'", folder.trim()),
        _ => "layered".to_string(),
    };
    let pagination = if config.features.pagination_and_sorting {
        "enabled"
    } else {
        "disabled"
    };

    out.header("Configuration")?;
    out.print(&format!("  Base package: {}", config.base_package))?;
    out.print(&format!("  Persistence:  {}", config.persistence_package.resolve()))?;
    out.print(&format!("  Layout:       {layout}"))?;
    out.print(&format!("  Pagination:   {pagination}"))?;
    out.print(&format!("  Source root:  {}", source_root.display()))?;
    out.print(&format!("  Entities:     {}", request.entities.join(", ")))?;
    out.print("")?;
    Ok(())
}

fn report_plan(plan: &GenerationPlan, source_root: &Path, out: &OutputManager) -> CliResult<()> {
    let paths = plan.paths(source_root);

    if out.is_json() {
        return out.json(&json!({
            "dry_run": true,
            "files": paths,
        }));
    }

    out.info(&format!("Dry run: {} file(s) would be written", plan.len()))?;
    for path in &paths {
        out.print(&format!("  {}", path.display()))?;
    }
    Ok(())
}

fn report_written(report: &GenerationReport, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        return out.json(report);
    }

    for path in &report.written {
        out.success(&format!("Created {}", path.display()))?;
    }
    for path in &report.skipped {
        out.warning(&format!(
            "Skipped {} (already exists, use --force to overwrite)",
            path.display()
        ))?;
    }
    out.success("CRUD boilerplate generation complete!")?;
    Ok(())
}

/// Default source root under `project_dir`.
pub fn default_source_root(project_dir: &Path) -> PathBuf {
    project_dir.join(DEFAULT_SOURCE_ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(entities: &[&str]) -> GenerateArgs {
        GenerateArgs {
            entities: entities.iter().map(|e| e.to_string()).collect(),
            single_folder: None,
            repository: false,
            service: false,
            controller: false,
            all: false,
            yes: false,
            dry_run: false,
            force: false,
            source_root: None,
            project_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn entities_accept_comma_separated_arguments() {
        let entities =
            resolve_entities(&["Order, Customer".into(), "Order".into()], false).unwrap();
        assert_eq!(entities, ["Order", "Customer"]);
    }

    #[test]
    fn missing_entities_without_terminal_is_an_input_error() {
        let err = resolve_entities(&[" ".into()], false).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn layer_flags_select_exactly_those_layers() {
        let mut a = args(&["Order"]);
        a.service = true;
        let layers = resolve_layers(&a, true).unwrap();
        assert_eq!(
            layers,
            LayerSelection {
                repository: false,
                service: true,
                controller: false,
            }
        );
    }

    #[test]
    fn non_interactive_run_selects_all_layers() {
        assert_eq!(
            resolve_layers(&args(&["Order"]), false).unwrap(),
            LayerSelection::all()
        );
    }

    #[test]
    fn pom_decides_auto_persistence_package() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(POM_FILE),
            "<project><parent><artifactId>spring-boot-starter-parent</artifactId>\
             <version>2.7.18</version></parent></project>",
        )
        .unwrap();

        let config = effective_config(GeneratorConfig::default(), dir.path());
        assert_eq!(config.persistence_package.resolve(), "javax.persistence");
    }

    #[test]
    fn source_root_defaults_under_project_dir() {
        assert_eq!(
            default_source_root(Path::new("shop")),
            PathBuf::from("shop/src/main/java")
        );
    }
}
