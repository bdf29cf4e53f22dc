//! Build variants: the option schema and concrete selections over it.
//!
//! - [`VariantDecl`] - a single declared option (boolean or closed choice)
//! - [`Schema`] - the ordered registry of declared options
//! - [`Selection`] - one concrete value per declared option
//! - [`SelectionBuilder`] - layers config file values and variant tokens over the defaults

mod schema;
mod selection;
mod types;

pub use schema::{Schema, SchemaError};
pub use selection::{Selection, SelectionBuilder, ValidationError};
pub use types::{VariantDecl, VariantKind, VariantValue};
