use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::schema::Schema;
use super::types::VariantValue;
use crate::config::SelectionFile;

/// Errors raised when a selection does not fit its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("variant '{name}' has no value")]
  MissingVariant { name: String },

  #[error("unknown variant '{name}'")]
  UnknownVariant { name: String },

  #[error("invalid value '{value}' for variant '{name}' (expected one of: {})", allowed.join(", "))]
  InvalidValue {
    name: String,
    value: String,
    allowed: Vec<String>,
  },

  #[error("malformed variant token '{token}' (expected +name, ~name or name=value)")]
  MalformedToken { token: String },
}

/// One concrete value per variant.
///
/// Backed by a [`BTreeMap`] so iteration, display and serialization are
/// deterministic. A selection is not checked on construction; pass it through
/// [`Schema::validate`] (or build it with [`SelectionBuilder`]) before resolving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
  values: BTreeMap<String, VariantValue>,
}

impl Selection {
  pub fn get(&self, name: &str) -> Option<&VariantValue> {
    self.values.get(name)
  }

  /// True only if `name` holds the boolean `true`.
  pub fn is_enabled(&self, name: &str) -> bool {
    matches!(self.values.get(name), Some(VariantValue::Bool(true)))
  }

  /// The value of a choice variant, if `name` holds one.
  pub fn choice(&self, name: &str) -> Option<&str> {
    self.values.get(name).and_then(VariantValue::as_choice)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &VariantValue)> {
    self.values.iter()
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

impl FromIterator<(String, VariantValue)> for Selection {
  fn from_iter<I: IntoIterator<Item = (String, VariantValue)>>(iter: I) -> Self {
    Self {
      values: iter.into_iter().collect(),
    }
  }
}

/// Renders in variant syntax: boolean flags first, then `name=value` pairs,
/// e.g. `+parmetis~tracer simd=avx2`.
impl fmt::Display for Selection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut flags = String::new();
    let mut pairs = Vec::new();

    for (name, value) in &self.values {
      match value {
        VariantValue::Bool(true) => flags.push_str(&format!("+{}", name)),
        VariantValue::Bool(false) => flags.push_str(&format!("~{}", name)),
        VariantValue::Choice(v) => pairs.push(format!("{}={}", name, v)),
      }
    }

    let mut parts = Vec::with_capacity(pairs.len() + 1);
    if !flags.is_empty() {
      parts.push(flags);
    }
    parts.extend(pairs);
    write!(f, "{}", parts.join(" "))
  }
}

/// A single parsed variant token.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
  Flag { name: String, enabled: bool },
  Assign { name: String, value: String },
}

fn is_variant_name(name: &str) -> bool {
  !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse one whitespace-free token.
///
/// `+a~b+c` is a chain of flags; `name=value` is an assignment.
fn parse_token(token: &str) -> Result<Vec<Token>, ValidationError> {
  let malformed = || ValidationError::MalformedToken {
    token: token.to_string(),
  };

  if token.starts_with(['+', '~']) {
    let mut flags = Vec::new();
    let mut rest = token;
    while let Some(sigil) = rest.chars().next() {
      let body = &rest[1..];
      let end = body.find(['+', '~']).unwrap_or(body.len());
      let name = &body[..end];
      if !is_variant_name(name) {
        return Err(malformed());
      }
      flags.push(Token::Flag {
        name: name.to_string(),
        enabled: sigil == '+',
      });
      rest = &body[end..];
    }
    return Ok(flags);
  }

  match token.split_once('=') {
    Some((name, value)) if is_variant_name(name) && !value.is_empty() => Ok(vec![Token::Assign {
      name: name.to_string(),
      value: value.to_string(),
    }]),
    _ => Err(malformed()),
  }
}

/// Builds a validated [`Selection`] by layering overrides over schema defaults.
///
/// ```ignore
/// let selection = SelectionBuilder::new(&schema)
///   .apply_file(&file)?
///   .apply_tokens(["+parmetis", "simd=avx2"])?
///   .build()?;
/// ```
///
/// Later layers win. Every override is checked against the schema as it is
/// applied, so the first bad name or value is reported as given.
#[derive(Debug, Clone)]
pub struct SelectionBuilder<'a> {
  schema: &'a Schema,
  values: BTreeMap<String, VariantValue>,
}

impl<'a> SelectionBuilder<'a> {
  /// Start from the schema's defaults.
  pub fn new(schema: &'a Schema) -> Self {
    let values = schema
      .iter()
      .map(|v| (v.name().to_string(), v.default_value().clone()))
      .collect();
    Self { schema, values }
  }

  /// Set one variant.
  pub fn set(mut self, name: &str, value: VariantValue) -> Result<Self, ValidationError> {
    let decl = self.schema.get(name).ok_or_else(|| ValidationError::UnknownVariant {
      name: name.to_string(),
    })?;

    if !decl.allows(&value) {
      return Err(ValidationError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        allowed: decl.allowed_values(),
      });
    }

    debug!(name, value = %value, "variant override");
    self.values.insert(name.to_string(), value);
    Ok(self)
  }

  /// Set one variant from its string form, parsed according to its kind.
  pub fn set_raw(self, name: &str, raw: &str) -> Result<Self, ValidationError> {
    let decl = self.schema.get(name).ok_or_else(|| ValidationError::UnknownVariant {
      name: name.to_string(),
    })?;

    let value = decl.parse_value(raw).ok_or_else(|| ValidationError::InvalidValue {
      name: name.to_string(),
      value: raw.to_string(),
      allowed: decl.allowed_values(),
    })?;

    self.set(name, value)
  }

  /// Apply already-typed values, e.g. from a selection file.
  pub fn apply_values<I>(mut self, values: I) -> Result<Self, ValidationError>
  where
    I: IntoIterator<Item = (String, VariantValue)>,
  {
    for (name, value) in values {
      self = self.set(&name, value)?;
    }
    Ok(self)
  }

  /// Apply the values pinned by a selection file.
  pub fn apply_file(self, file: &SelectionFile) -> Result<Self, ValidationError> {
    self.apply_values(file.variants.iter().map(|(name, value)| (name.clone(), value.clone())))
  }

  /// Apply variant tokens such as `+parmetis`, `~tracer+gmyplus` or `simd=avx2`.
  ///
  /// Each argument may hold several whitespace-separated tokens.
  pub fn apply_tokens<I, S>(mut self, args: I) -> Result<Self, ValidationError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    for arg in args {
      for token in arg.as_ref().split_whitespace() {
        for parsed in parse_token(token)? {
          self = match parsed {
            Token::Flag { name, enabled } => self.set(&name, VariantValue::Bool(enabled))?,
            Token::Assign { name, value } => self.set_raw(&name, &value)?,
          };
        }
      }
    }
    Ok(self)
  }

  /// Finish, validating the result against the schema.
  pub fn build(self) -> Result<Selection, ValidationError> {
    let selection = Selection { values: self.values };
    self.schema.validate(&selection)?;
    Ok(selection)
  }
}
