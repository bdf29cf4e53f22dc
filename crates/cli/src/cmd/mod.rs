mod args;
mod deps;
mod info;
mod plan;
mod variants;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use hemeconf_lib::config::{SelectionFile, find_config_path};
use hemeconf_lib::package::{HemePure, Package};
use hemeconf_lib::variant::{Selection, SelectionBuilder};

pub use args::cmd_args;
pub use deps::cmd_deps;
pub use info::cmd_info;
pub use plan::cmd_plan;
pub use variants::cmd_variants;

/// How `hemeconf args` renders each argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ArgStyle {
  /// `KEY=VALUE`
  #[default]
  Defines,
  /// `-DKEY:TYPE=VALUE`, ready to pass to `cmake`
  Cmake,
}

/// Variant selection options shared by the resolving commands.
#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
  /// Variant tokens, e.g. `+parmetis ~tracer simd=avx2`
  pub variants: Vec<String>,

  /// Selection file (default: $HEMECONF_CONFIG, ./hemeconf.toml, then the user config dir)
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// Ignore selection files; use only defaults and the given tokens
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,
}

fn load_package() -> Result<HemePure> {
  HemePure::new().context("Invalid package definition")
}

/// Defaults, then the selection file (if any), then the command-line tokens.
fn load_selection(package: &HemePure, args: &SelectionArgs) -> Result<Selection> {
  let mut builder = SelectionBuilder::new(package.schema());

  let config_path = if args.no_config {
    None
  } else {
    find_config_path(args.config.as_deref()).context("Failed to locate selection file")?
  };

  if let Some(path) = config_path {
    debug!(path = %path.display(), "using selection file");
    let file = SelectionFile::load(&path)?;
    builder = builder
      .apply_file(&file)
      .with_context(|| format!("Invalid selection file: {}", path.display()))?;
  }

  builder
    .apply_tokens(&args.variants)
    .context("Invalid variant")?
    .build()
    .context("Invalid selection")
}
