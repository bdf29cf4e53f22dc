//! Implementation of the `hemeconf deps` command.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use hemeconf_lib::depends::When;
use hemeconf_lib::plan::resolve;

use super::{SelectionArgs, load_package, load_selection};
use crate::output::{OutputFormat, print_json, symbols};

pub fn cmd_deps(args: &SelectionArgs, format: OutputFormat) -> Result<()> {
  let package = load_package()?;
  let selection = load_selection(&package, args)?;
  let plan = resolve(&package, &selection).context("Failed to resolve dependencies")?;

  if format.is_json() {
    return print_json(&plan.dependencies);
  }

  for dep in &plan.dependencies {
    let condition = match &dep.when {
      When::Always => String::new(),
      When::Enabled(variant) => format!(" when +{}", variant),
    };
    println!(
      "  {} {} {}{}",
      symbols::PLUS.if_supports_color(Stream::Stdout, |s| s.green()),
      dep.to_string().if_supports_color(Stream::Stdout, |s| s.cyan()),
      format!("({})", dep.type_.as_str()).if_supports_color(Stream::Stdout, |s| s.dimmed()),
      condition.if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
  }

  Ok(())
}
