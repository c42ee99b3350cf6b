//! Generation Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate configuration and entity names
//! 2. Resolve the namespace map once
//! 3. Render every (entity, layer) artifact
//! 4. Create package directories and write files through the `Filesystem` port

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainValidator as validator, GeneratorConfig, Layer, LayerArtifact, NamespaceMap,
        generate_layer, namespace_dir,
    },
    error::SpringgenResult,
};

/// Conventional Maven/Gradle source root, relative to the project directory.
pub const DEFAULT_SOURCE_ROOT: &str = "src/main/java";

/// Which optional layers to generate. The entity layer is always generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayerSelection {
    pub repository: bool,
    /// Service interface and its implementation, together.
    pub service: bool,
    pub controller: bool,
}

impl LayerSelection {
    pub const fn all() -> Self {
        Self {
            repository: true,
            service: true,
            controller: true,
        }
    }

    /// Selected layers in generation order.
    pub fn layers(&self) -> Vec<Layer> {
        Layer::ALL
            .into_iter()
            .filter(|layer| match layer {
                Layer::Entity => true,
                Layer::Repository => self.repository,
                Layer::Service | Layer::ServiceImpl => self.service,
                Layer::Controller => self.controller,
            })
            .collect()
    }
}

/// Input of one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub entities: Vec<String>,
    pub layers: LayerSelection,
    /// Put every layer in `base_package.<single_folder>`.
    pub single_folder: Option<String>,
    /// Replace files that already exist instead of skipping them.
    pub overwrite: bool,
}

/// Everything a run would produce, before any I/O.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub namespaces: NamespaceMap,
    pub artifacts: Vec<LayerArtifact>,
}

impl GenerationPlan {
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Target path of every artifact under `source_root`.
    pub fn paths(&self, source_root: &Path) -> Vec<PathBuf> {
        self.artifacts
            .iter()
            .map(|a| source_root.join(a.relative_path()))
            .collect()
    }
}

/// Outcome of [`GenerationService::execute`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub directories: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Main generation service.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerationService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render every requested artifact without touching the filesystem.
    #[instrument(skip_all, fields(entities = request.entities.len()))]
    pub fn plan(
        config: &GeneratorConfig,
        request: &GenerationRequest,
    ) -> SpringgenResult<GenerationPlan> {
        validator::validate_config(config)?;

        let entities = validator::normalize_entities(&request.entities);
        if entities.is_empty() {
            return Err(ApplicationError::NoEntities.into());
        }

        let namespaces = NamespaceMap::resolve(config, request.single_folder.as_deref());
        let layers = request.layers.layers();

        let mut artifacts = Vec::with_capacity(entities.len() * layers.len());
        for entity in &entities {
            debug!(entity = %entity, "Generating layers");
            for &layer in &layers {
                artifacts.push(generate_layer(layer, entity, &namespaces, config)?);
            }
        }

        Ok(GenerationPlan {
            namespaces,
            artifacts,
        })
    }

    /// Generate and write every requested artifact under `source_root`.
    #[instrument(
        skip_all,
        fields(source_root = %source_root.as_ref().display(), overwrite = request.overwrite)
    )]
    pub fn execute(
        &self,
        config: &GeneratorConfig,
        request: &GenerationRequest,
        source_root: impl AsRef<Path>,
    ) -> SpringgenResult<GenerationReport> {
        let source_root = source_root.as_ref();
        let plan = Self::plan(config, request)?;
        let mut report = GenerationReport::default();

        // Every package directory exists afterwards, even for layers that
        // were not selected.
        for namespace in plan.namespaces.distinct() {
            let dir = source_root.join(namespace_dir(namespace));
            self.filesystem.create_dir_all(&dir)?;
            report.directories.push(dir);
        }

        for artifact in &plan.artifacts {
            let path = source_root.join(artifact.relative_path());

            if !request.overwrite && self.filesystem.exists(&path) {
                warn!(path = %path.display(), "File exists, skipping");
                report.skipped.push(path);
                continue;
            }

            self.filesystem.write_file(&path, &artifact.source)?;
            info!(path = %path.display(), layer = %artifact.layer, "Created");
            report.written.push(path);
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "Generation complete"
        );
        Ok(report)
    }
}
