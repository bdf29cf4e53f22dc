//! Build plan resolution.
//!
//! A [`BuildPlan`] is everything an orchestrator needs to configure one build:
//! the validated selection, the dependencies it activates and the CMake
//! definitions it translates to. Plans are content-hashed so two
//! configurations can be compared by hash alone.

use serde::Serialize;
use tracing::info;

use crate::define::BuildArgument;
use crate::depends::{Dependency, active_dependencies};
use crate::package::Package;
use crate::util::hash::Hashable;
use crate::variant::{Selection, ValidationError};

/// The resolved configuration of one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
  pub package: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
  /// Directory holding the root `CMakeLists.txt`, relative to the source root.
  pub source_subdir: String,
  pub selection: Selection,
  /// Active dependencies only, in declaration order.
  pub dependencies: Vec<Dependency>,
  pub arguments: Vec<BuildArgument>,
}

impl Hashable for BuildPlan {}

impl BuildPlan {
  /// The arguments as typed `-DKEY:TYPE=VALUE` flags.
  pub fn cmake_flags(&self) -> Vec<String> {
    self.arguments.iter().map(BuildArgument::to_cmake_flag).collect()
  }
}

/// Validate `selection` against `package` and resolve it into a plan.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found; nothing is resolved for an
/// invalid selection.
pub fn resolve<P: Package + ?Sized>(package: &P, selection: &Selection) -> Result<BuildPlan, ValidationError> {
  let pkg = package.info();
  package.schema().validate(selection)?;

  let dependencies = active_dependencies(package.dependencies(), selection);
  let arguments = package.cmake_args(selection);

  info!(
    package = %pkg.name,
    selection = %selection,
    dependencies = dependencies.len(),
    arguments = arguments.len(),
    "resolved build plan"
  );

  Ok(BuildPlan {
    package: pkg.name.clone(),
    version: pkg.default_version().map(|v| v.name.clone()),
    source_subdir: pkg.source_subdir.clone(),
    selection: selection.clone(),
    dependencies,
    arguments,
  })
}
