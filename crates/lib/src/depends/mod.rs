//! Package dependency declarations and their activation.
//!
//! Version constraints use the orchestrator's range syntax (`3.18:` means
//! "3.18 or later") and are carried through as written; this crate never
//! solves versions.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::variant::Selection;

/// Which phases of the build need the dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyType {
  /// Needed only to run the build (compilers, generators).
  Build,
  /// Needed to build and linked into the result.
  BuildLink,
}

impl DependencyType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Build => "build",
      Self::BuildLink => "build,link",
    }
  }
}

/// Condition under which a dependency is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum When {
  Always,
  /// Required when the named boolean variant is enabled.
  Enabled(String),
}

impl When {
  pub fn holds(&self, selection: &Selection) -> bool {
    match self {
      Self::Always => true,
      Self::Enabled(variant) => selection.is_enabled(variant),
    }
  }
}

/// A declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
  pub name: String,
  /// Version range, e.g. `"1.86:"`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
  /// Variants the dependency itself must be built with, e.g. `["mpi"]`.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub variants: Vec<String>,
  #[serde(rename = "type")]
  pub type_: DependencyType,
  pub when: When,
}

impl Dependency {
  /// An unconditional build+link dependency with no version constraint.
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      version: None,
      variants: Vec::new(),
      type_: DependencyType::BuildLink,
      when: When::Always,
    }
  }

  pub fn version(mut self, range: &str) -> Self {
    self.version = Some(range.to_string());
    self
  }

  pub fn with_variant(mut self, variant: &str) -> Self {
    self.variants.push(variant.to_string());
    self
  }

  pub fn build_only(mut self) -> Self {
    self.type_ = DependencyType::Build;
    self
  }

  pub fn when_enabled(mut self, variant: &str) -> Self {
    self.when = When::Enabled(variant.to_string());
    self
  }

  pub fn is_conditional(&self) -> bool {
    !matches!(self.when, When::Always)
  }
}

/// Renders as a requirement string, e.g. `boost@1.86:+mpi`.
impl fmt::Display for Dependency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name)?;
    if let Some(version) = &self.version {
      write!(f, "@{}", version)?;
    }
    for variant in &self.variants {
      write!(f, "+{}", variant)?;
    }
    Ok(())
  }
}

/// Dependencies required under `selection`, in declaration order.
pub fn active_dependencies(dependencies: &[Dependency], selection: &Selection) -> Vec<Dependency> {
  dependencies
    .iter()
    .filter(|dep| {
      let active = dep.when.holds(selection);
      if dep.is_conditional() {
        debug!(dependency = %dep.name, active, "conditional dependency");
      }
      active
    })
    .cloned()
    .collect()
}
