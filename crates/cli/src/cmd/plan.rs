//! Implementation of the `hemeconf plan` command.
//!
//! Resolves a selection into a build plan, prints a summary with the plan's
//! content hash and optionally writes the plan as JSON for an orchestrator.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use hemeconf_lib::plan::{BuildPlan, resolve};
use hemeconf_lib::util::hash::{Hashable, ObjectHash};

use super::{SelectionArgs, load_package, load_selection};
use crate::output::{OutputFormat, print_info, print_json, print_stat, print_success};

#[derive(Serialize)]
struct PlanOutput<'a> {
  hash: ObjectHash,
  #[serde(flatten)]
  plan: &'a BuildPlan,
}

pub fn cmd_plan(args: &SelectionArgs, format: OutputFormat, out: Option<&Path>) -> Result<()> {
  let package = load_package()?;
  let selection = load_selection(&package, args)?;
  let plan = resolve(&package, &selection).context("Failed to resolve build plan")?;
  let hash = plan.compute_hash().context("Failed to compute plan hash")?;

  let output = PlanOutput { hash, plan: &plan };

  if let Some(path) = out {
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize plan")?;
    fs::write(path, json).with_context(|| format!("Failed to write plan: {}", path.display()))?;
  }

  if format.is_json() {
    return print_json(&output);
  }

  print_info(&format!("Plan: {}", output.hash));
  let version = plan.version.as_deref().unwrap_or("unversioned");
  print_stat("Package", &format!("{}@{}", plan.package, version));
  print_stat("Selection", &plan.selection.to_string());
  print_stat("Dependencies", &plan.dependencies.len().to_string());
  for dep in &plan.dependencies {
    println!("    {}", dep);
  }
  print_stat("Arguments", &plan.arguments.len().to_string());
  for flag in plan.cmake_flags() {
    println!("    {}", flag);
  }

  if let Some(path) = out {
    println!();
    print_success(&format!("Wrote plan to {}", path.display()));
  }

  Ok(())
}
