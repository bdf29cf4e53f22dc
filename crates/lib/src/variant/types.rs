use std::fmt;

use serde::{Deserialize, Serialize};

/// The domain of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
  /// `true` or `false`, written `+name` / `~name` on the command line.
  Bool,
  /// One value out of a closed vocabulary, written `name=value`.
  Choice,
}

impl VariantKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Bool => "bool",
      Self::Choice => "choice",
    }
  }
}

impl fmt::Display for VariantKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A concrete variant value.
///
/// Serializes untagged, so a selection reads naturally in JSON and TOML:
/// `{ "parmetis": true, "simd": "avx2" }`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
  Bool(bool),
  Choice(String),
}

impl VariantValue {
  pub fn kind(&self) -> VariantKind {
    match self {
      Self::Bool(_) => VariantKind::Bool,
      Self::Choice(_) => VariantKind::Choice,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Bool(b) => Some(*b),
      Self::Choice(_) => None,
    }
  }

  pub fn as_choice(&self) -> Option<&str> {
    match self {
      Self::Bool(_) => None,
      Self::Choice(s) => Some(s),
    }
  }
}

impl fmt::Display for VariantValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Bool(b) => write!(f, "{}", b),
      Self::Choice(s) => write!(f, "{}", s),
    }
  }
}

impl From<bool> for VariantValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<&str> for VariantValue {
  fn from(value: &str) -> Self {
    Self::Choice(value.to_string())
  }
}

impl From<String> for VariantValue {
  fn from(value: String) -> Self {
    Self::Choice(value)
  }
}

/// A declared build variant.
///
/// Declarations are only built through [`VariantDecl::bool`] and
/// [`VariantDecl::choice`], so the default always has the declared kind.
/// Whether a choice default is one of its values is checked by
/// [`Schema::register`](super::Schema::register).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantDecl {
  name: String,
  kind: VariantKind,
  default: VariantValue,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  values: Vec<String>,
  description: String,
}

impl VariantDecl {
  /// Declare a boolean variant.
  pub fn bool(name: &str, default: bool, description: &str) -> Self {
    Self {
      name: name.to_string(),
      kind: VariantKind::Bool,
      default: VariantValue::Bool(default),
      values: Vec::new(),
      description: description.to_string(),
    }
  }

  /// Declare a choice variant over a closed set of values.
  pub fn choice(name: &str, default: &str, values: &[&str], description: &str) -> Self {
    Self {
      name: name.to_string(),
      kind: VariantKind::Choice,
      default: VariantValue::Choice(default.to_string()),
      values: values.iter().map(|v| v.to_string()).collect(),
      description: description.to_string(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn kind(&self) -> VariantKind {
    self.kind
  }

  pub fn default_value(&self) -> &VariantValue {
    &self.default
  }

  /// Legal values of a choice variant. Empty for booleans.
  pub fn values(&self) -> &[String] {
    &self.values
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  /// Whether `value` is in this variant's domain.
  pub fn allows(&self, value: &VariantValue) -> bool {
    match (self.kind, value) {
      (VariantKind::Bool, VariantValue::Bool(_)) => true,
      (VariantKind::Choice, VariantValue::Choice(v)) => self.values.iter().any(|allowed| allowed == v),
      _ => false,
    }
  }

  /// The domain as strings, for error messages.
  pub fn allowed_values(&self) -> Vec<String> {
    match self.kind {
      VariantKind::Bool => vec!["true".to_string(), "false".to_string()],
      VariantKind::Choice => self.values.clone(),
    }
  }

  /// Parse a raw string into a value of this variant's kind.
  ///
  /// Booleans accept `true`/`false` in any case. Choices are taken verbatim;
  /// membership is checked separately by [`VariantDecl::allows`].
  pub fn parse_value(&self, raw: &str) -> Option<VariantValue> {
    match self.kind {
      VariantKind::Bool if raw.eq_ignore_ascii_case("true") => Some(VariantValue::Bool(true)),
      VariantKind::Bool if raw.eq_ignore_ascii_case("false") => Some(VariantValue::Bool(false)),
      VariantKind::Bool => None,
      VariantKind::Choice => Some(VariantValue::Choice(raw.to_string())),
    }
  }
}
