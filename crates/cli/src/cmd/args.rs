//! Implementation of the `hemeconf args` command.

use anyhow::{Context, Result};

use hemeconf_lib::plan::resolve;

use super::{ArgStyle, SelectionArgs, load_package, load_selection};
use crate::output::{OutputFormat, print_json};

/// Print one argument per line, in resolution order.
pub fn cmd_args(args: &SelectionArgs, style: ArgStyle, format: OutputFormat) -> Result<()> {
  let package = load_package()?;
  let selection = load_selection(&package, args)?;
  let plan = resolve(&package, &selection).context("Failed to resolve build arguments")?;

  if format.is_json() {
    return print_json(&plan.arguments);
  }

  for arg in &plan.arguments {
    match style {
      ArgStyle::Defines => println!("{}", arg),
      ArgStyle::Cmake => println!("{}", arg.to_cmake_flag()),
    }
  }

  Ok(())
}
