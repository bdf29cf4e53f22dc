//! Shared helpers for library integration tests.

use hemeconf_lib::define::BuildArgument;
use hemeconf_lib::package::{HemePure, Package};
use hemeconf_lib::plan::{BuildPlan, resolve};
use hemeconf_lib::variant::{Selection, SelectionBuilder};

/// A fresh HemePure package.
pub fn hemepure() -> HemePure {
  HemePure::new().expect("HemePure schema should be well formed")
}

/// Build a validated selection from variant tokens.
pub fn select(package: &HemePure, tokens: &[&str]) -> Selection {
  SelectionBuilder::new(package.schema())
    .apply_tokens(tokens)
    .unwrap()
    .build()
    .unwrap()
}

/// Resolve a plan from variant tokens.
pub fn plan(tokens: &[&str]) -> BuildPlan {
  let package = hemepure();
  let selection = select(&package, tokens);
  resolve(&package, &selection).unwrap()
}

/// Every value emitted for `key`, in order.
pub fn values_for<'a>(args: &'a [BuildArgument], key: &str) -> Vec<&'a str> {
  args.iter().filter(|a| a.key == key).map(|a| a.value.as_str()).collect()
}
