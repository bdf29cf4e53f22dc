//! Implementation of the `hemeconf variants` command.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use hemeconf_lib::package::Package;
use hemeconf_lib::variant::VariantKind;

use super::load_package;
use crate::output::{OutputFormat, print_json};

/// List variants in declaration order with their defaults and legal values.
pub fn cmd_variants(format: OutputFormat) -> Result<()> {
  let package = load_package()?;
  let schema = package.schema();

  if format.is_json() {
    return print_json(schema);
  }

  let width = schema.iter().map(|v| v.name().len()).max().unwrap_or(0);

  println!("Variants ({}):", schema.len());
  for decl in schema.iter() {
    let default = format!("[{}]", decl.default_value());
    println!(
      "  {:<width$}  {:<30}  {}",
      decl.name().if_supports_color(Stream::Stdout, |s| s.bold()),
      default.if_supports_color(Stream::Stdout, |s| s.cyan()),
      decl.description(),
      width = width
    );
    if decl.kind() == VariantKind::Choice {
      println!(
        "  {:<width$}  {}",
        "",
        decl.values().join(", ").if_supports_color(Stream::Stdout, |s| s.dimmed()),
        width = width
      );
    }
  }

  Ok(())
}
