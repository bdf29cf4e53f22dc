use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::selection::{Selection, ValidationError};
use super::types::{VariantDecl, VariantKind};

/// Errors raised while declaring variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
  #[error("variant '{name}' is already registered")]
  DuplicateVariant { name: String },

  #[error("default '{default}' of variant '{name}' is not one of its values ({})", allowed.join(", "))]
  DefaultNotAllowed {
    name: String,
    default: String,
    allowed: Vec<String>,
  },

  #[error("choice variant '{name}' declares no values")]
  EmptyValues { name: String },
}

/// Ordered registry of declared variants.
///
/// Declaration order is preserved; it is the order variants are listed and
/// validated in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
  variants: Vec<VariantDecl>,
}

impl Schema {
  /// Create an empty schema.
  pub fn new() -> Self {
    Self { variants: Vec::new() }
  }

  /// Declare a variant.
  ///
  /// # Errors
  ///
  /// - [`SchemaError::DuplicateVariant`] if the name is already declared
  /// - [`SchemaError::EmptyValues`] if a choice variant has no values
  /// - [`SchemaError::DefaultNotAllowed`] if a choice default is not one of its values
  pub fn register(&mut self, decl: VariantDecl) -> Result<(), SchemaError> {
    if self.get(decl.name()).is_some() {
      return Err(SchemaError::DuplicateVariant {
        name: decl.name().to_string(),
      });
    }

    if decl.kind() == VariantKind::Choice {
      if decl.values().is_empty() {
        return Err(SchemaError::EmptyValues {
          name: decl.name().to_string(),
        });
      }
      if !decl.allows(decl.default_value()) {
        return Err(SchemaError::DefaultNotAllowed {
          name: decl.name().to_string(),
          default: decl.default_value().to_string(),
          allowed: decl.values().to_vec(),
        });
      }
    }

    debug!(name = decl.name(), kind = %decl.kind(), "registered variant");
    self.variants.push(decl);
    Ok(())
  }

  /// Builder-style [`Schema::register`].
  pub fn with(mut self, decl: VariantDecl) -> Result<Self, SchemaError> {
    self.register(decl)?;
    Ok(self)
  }

  /// Look up a variant by name.
  pub fn get(&self, name: &str) -> Option<&VariantDecl> {
    self.variants.iter().find(|v| v.name() == name)
  }

  /// Iterate variants in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = &VariantDecl> {
    self.variants.iter()
  }

  pub fn len(&self) -> usize {
    self.variants.len()
  }

  pub fn is_empty(&self) -> bool {
    self.variants.is_empty()
  }

  /// The selection holding every variant's default.
  pub fn defaults(&self) -> Selection {
    self
      .variants
      .iter()
      .map(|v| (v.name().to_string(), v.default_value().clone()))
      .collect()
  }

  /// Check that `selection` is total over this schema and every value is legal.
  ///
  /// Variants are checked in declaration order, then any names the schema does
  /// not declare are rejected.
  ///
  /// # Errors
  ///
  /// - [`ValidationError::MissingVariant`] if a declared variant has no value
  /// - [`ValidationError::InvalidValue`] if a value is outside the variant's domain
  /// - [`ValidationError::UnknownVariant`] if the selection names an undeclared variant
  pub fn validate(&self, selection: &Selection) -> Result<(), ValidationError> {
    for decl in &self.variants {
      let value = selection.get(decl.name()).ok_or_else(|| ValidationError::MissingVariant {
        name: decl.name().to_string(),
      })?;

      if !decl.allows(value) {
        return Err(ValidationError::InvalidValue {
          name: decl.name().to_string(),
          value: value.to_string(),
          allowed: decl.allowed_values(),
        });
      }
    }

    if let Some((name, _)) = selection.iter().find(|(name, _)| self.get(name).is_none()) {
      return Err(ValidationError::UnknownVariant { name: name.clone() });
    }

    Ok(())
  }
}
