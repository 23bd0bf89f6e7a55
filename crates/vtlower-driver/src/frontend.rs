//! Contracts of the stages that run before layout synthesis.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vtlower_ast::{ClassMap, ClassSignature, Hierarchy, Node};
use vtlower_common::Result;

/// Source-facing collaborators of a translation run.
///
/// Implementations parse and resolve sources, discover the class hierarchy
/// and rewrite source units into lowered units. The translator only consumes
/// their results.
pub trait Frontend {
    /// Source units, the primary unit first, then its imports.
    fn ingest(&self) -> Result<Vec<Node>>;

    /// Class map and package path of `units`.
    fn build_hierarchy(&self, units: &[Node]) -> Result<Hierarchy>;

    /// Lowered form of `units`, with method bodies rewritten against `classes`.
    fn lower(&self, units: &[Node], classes: &ClassMap) -> Result<Vec<Node>>;
}

/// Frontend outputs computed ahead of time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationBundle {
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub classes: Vec<ClassSignature>,
    #[serde(default)]
    pub units: Vec<Node>,
    #[serde(default)]
    pub lowered: Vec<Node>,
}

/// [`Frontend`] replaying a [`TranslationBundle`].
#[derive(Debug, Clone, Default)]
pub struct BundleFrontend {
    bundle: TranslationBundle,
}

impl BundleFrontend {
    pub fn new(bundle: TranslationBundle) -> Self {
        Self { bundle }
    }

    /// Load a JSON bundle.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let frontend = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            classes = frontend.bundle.classes.len(),
            units = frontend.bundle.units.len(),
            "loaded translation bundle"
        );
        Ok(frontend)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn bundle(&self) -> &TranslationBundle {
        &self.bundle
    }
}

impl Frontend for BundleFrontend {
    fn ingest(&self) -> Result<Vec<Node>> {
        Ok(self.bundle.units.clone())
    }

    fn build_hierarchy(&self, _units: &[Node]) -> Result<Hierarchy> {
        Ok(Hierarchy::new(
            self.bundle.classes.iter().cloned(),
            self.bundle.packages.clone(),
        ))
    }

    fn lower(&self, _units: &[Node], _classes: &ClassMap) -> Result<Vec<Node>> {
        Ok(self.bundle.lowered.clone())
    }
}
