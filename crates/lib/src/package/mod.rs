//! Package definitions.
//!
//! A [`Package`] owns its variant schema and dependency list and knows how to
//! translate a selection into build-system arguments. The schema is built when
//! the package value is constructed, so independent package values never share
//! state.

mod hemepure;

use serde::Serialize;

use crate::define::BuildArgument;
use crate::depends::Dependency;
use crate::variant::{Schema, Selection};

pub use hemepure::{CORNER_SCHEMES, HemePure, IOLET_SCHEMES, Simd, WALL_SCHEMES};

/// A fetchable version of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageVersion {
  pub name: String,
  /// Git branch the version tracks.
  pub branch: String,
}

/// Static package metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
  pub name: String,
  pub description: String,
  pub homepage: String,
  pub git: String,
  pub maintainers: Vec<String>,
  pub license: String,
  pub versions: Vec<PackageVersion>,
  /// Directory holding the root `CMakeLists.txt`, relative to the source root.
  pub source_subdir: String,
}

impl PackageInfo {
  /// The preferred version: the first one declared.
  pub fn default_version(&self) -> Option<&PackageVersion> {
    self.versions.first()
  }
}

/// A CMake-built package with build variants.
pub trait Package {
  fn info(&self) -> &PackageInfo;

  fn schema(&self) -> &Schema;

  /// Every declared dependency, conditional ones included.
  fn dependencies(&self) -> &[Dependency];

  /// Translate a selection into CMake definitions.
  ///
  /// `selection` must already have passed [`Schema::validate`] for this
  /// package's schema; no further checks are made here.
  fn cmake_args(&self, selection: &Selection) -> Vec<BuildArgument>;
}
