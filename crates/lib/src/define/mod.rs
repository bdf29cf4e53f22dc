//! CMake cache definitions produced by argument resolution.
//!
//! A [`BuildArgument`] is one `-D` definition handed to the CMake configure
//! step. The two constructors mirror the two ways a package author writes them:
//! [`define`] for a fixed value and [`define_from_variant`] for a value taken
//! from the selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variant::{Selection, VariantValue};

/// CMake cache entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DefineKind {
  Bool,
  String,
}

impl DefineKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Bool => "BOOL",
      Self::String => "STRING",
    }
  }
}

impl fmt::Display for DefineKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A single build-system definition.
///
/// Displays as `KEY=VALUE`; [`BuildArgument::to_cmake_flag`] gives the typed
/// `-DKEY:TYPE=VALUE` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildArgument {
  pub key: String,
  pub value: String,
  pub kind: DefineKind,
}

impl BuildArgument {
  pub fn to_cmake_flag(&self) -> String {
    format!("-D{}:{}={}", self.key, self.kind, self.value)
  }
}

impl fmt::Display for BuildArgument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}={}", self.key, self.value)
  }
}

/// `ON`/`OFF` for a boolean.
pub fn on_off(enabled: bool) -> &'static str {
  if enabled { "ON" } else { "OFF" }
}

/// A fixed definition. Values are passed through as strings.
pub fn define(key: &str, value: &str) -> BuildArgument {
  BuildArgument {
    key: key.to_string(),
    value: value.to_string(),
    kind: DefineKind::String,
  }
}

/// A definition driven by a variant.
///
/// Booleans become `ON`/`OFF` with type `BOOL`; choices are passed verbatim
/// with type `STRING`.
///
/// The selection must already be validated. A variant missing from an
/// unvalidated selection resolves to an empty string.
pub fn define_from_variant(key: &str, variant: &str, selection: &Selection) -> BuildArgument {
  match selection.get(variant) {
    Some(VariantValue::Bool(enabled)) => BuildArgument {
      key: key.to_string(),
      value: on_off(*enabled).to_string(),
      kind: DefineKind::Bool,
    },
    Some(VariantValue::Choice(value)) => define(key, value),
    None => define(key, ""),
  }
}
