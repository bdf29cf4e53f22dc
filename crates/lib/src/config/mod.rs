//! Selection files.
//!
//! A selection file pins variant values so a build can be reproduced without
//! repeating them on the command line:
//!
//! ```toml
//! [variants]
//! parmetis = true
//! simd = "avx2"
//! wall_boundary = "BFL"
//! ```
//!
//! Booleans are TOML booleans; choices are strings. Values are checked against
//! the package schema when applied, not when the file is parsed.

mod paths;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::consts::{CONFIG_ENV_VAR, CONFIG_FILENAME};
use crate::variant::VariantValue;

pub use paths::config_dir;

/// Errors that can occur when locating or loading a selection file.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config file not found: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("failed to read config file {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse config file {}: {source}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

/// Contents of a `hemeconf.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionFile {
  #[serde(default)]
  pub variants: BTreeMap<String, VariantValue>,
}

impl SelectionFile {
  /// Load and parse a selection file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return Err(ConfigError::NotFound {
          path: path.to_path_buf(),
        });
      }
      Err(e) => {
        return Err(ConfigError::Read {
          path: path.to_path_buf(),
          source: e,
        });
      }
    };

    let file: SelectionFile = toml::from_str(&content).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      source: e,
    })?;

    debug!(path = %path.display(), variants = file.variants.len(), "loaded selection file");
    Ok(file)
  }
}

/// Find the selection file to use.
///
/// Priority order:
/// 1. Explicit path, which must exist
/// 2. `$HEMECONF_CONFIG`, which must exist if set and non-empty
/// 3. `./hemeconf.toml` in the current directory
/// 4. `hemeconf.toml` in the user config directory
///
/// Returns `Ok(None)` when no file is configured and none of the default
/// locations exist; variant defaults apply in that case.
pub fn find_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
  let required = explicit
    .map(Path::to_path_buf)
    .or_else(|| {
      std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
    });

  if let Some(path) = required {
    if path.exists() {
      return Ok(Some(path));
    }
    return Err(ConfigError::NotFound { path });
  }

  let cwd_config = PathBuf::from(".").join(CONFIG_FILENAME);
  if cwd_config.exists() {
    return Ok(Some(cwd_config));
  }

  Ok(
    config_dir()
      .map(|dir| dir.join(CONFIG_FILENAME))
      .filter(|path| path.exists()),
  )
}
