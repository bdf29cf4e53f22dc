//! Selection file discovery and layering through the CLI.

use predicates::prelude::*;

use super::common::TestEnv;

const AVX512_PARMETIS: &str = r#"
[variants]
parmetis = true
simd = "avx512"
"#;

#[test]
fn cwd_selection_file_is_applied() {
  let env = TestEnv::new();
  env.write_file("hemeconf.toml", AVX512_PARMETIS);

  env
    .hemeconf_cmd()
    .arg("args")
    .assert()
    .success()
    .stdout(predicate::str::contains("HEMELB_USE_PARMETIS=ON"))
    .stdout(predicate::str::contains("HEMELB_USE_AVX512=ON"));
}

#[test]
#[cfg(not(windows))]
fn user_config_dir_selection_file_is_applied() {
  let env = TestEnv::new();
  env.write_file("config/hemeconf/hemeconf.toml", "[variants]\ngmyplus = true\n");

  env
    .hemeconf_cmd()
    .arg("args")
    .assert()
    .success()
    .stdout(predicate::str::contains("HEMELB_USE_GMYPLUS=ON"));
}

#[test]
fn env_var_selection_file_is_applied() {
  let env = TestEnv::new();
  let path = env.write_file("elsewhere/pinned.toml", "[variants]\nmpi_win = true\n");

  env
    .hemeconf_cmd()
    .env("HEMECONF_CONFIG", &path)
    .arg("args")
    .assert()
    .success()
    .stdout(predicate::str::contains("HEMELB_USE_MPI_WIN=ON"));
}

#[test]
fn tokens_override_selection_file() {
  let env = TestEnv::new();
  env.write_file("hemeconf.toml", AVX512_PARMETIS);

  env
    .hemeconf_cmd()
    .args(["args", "~parmetis", "simd=auto"])
    .assert()
    .success()
    .stdout(predicate::str::contains("HEMELB_USE_PARMETIS=OFF"))
    .stdout(predicate::str::contains("HEMELB_USE_AVX512").not());
}

#[test]
fn no_config_ignores_selection_file() {
  let env = TestEnv::new();
  env.write_file("hemeconf.toml", AVX512_PARMETIS);

  env
    .hemeconf_cmd()
    .args(["args", "--no-config"])
    .assert()
    .success()
    .stdout(predicate::str::contains("HEMELB_USE_PARMETIS=OFF"));
}

#[test]
fn invalid_selection_file_value_fails() {
  let env = TestEnv::new();
  env.write_file("hemeconf.toml", "[variants]\nwall_boundary = \"NOSLIP\"\n");

  env
    .hemeconf_cmd()
    .arg("args")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid selection file"))
    .stderr(predicate::str::contains("NOSLIP"));
}

#[test]
fn unparsable_selection_file_fails() {
  let env = TestEnv::new();
  env.write_file("hemeconf.toml", "[variants\n");

  env
    .hemeconf_cmd()
    .arg("deps")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to parse config file"));
}
