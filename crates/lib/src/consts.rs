/// Application name, used for config directory lookup.
pub const APP_NAME: &str = "hemeconf";

/// Default selection file name.
pub const CONFIG_FILENAME: &str = "hemeconf.toml";

/// Environment variable that points at an explicit selection file.
pub const CONFIG_ENV_VAR: &str = "HEMECONF_CONFIG";

/// Number of hex characters kept from a plan's SHA-256 digest.
pub const PLAN_HASH_PREFIX_LEN: usize = 20;
