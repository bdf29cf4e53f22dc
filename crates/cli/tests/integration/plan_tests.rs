//! `hemeconf plan` output and plan files.

use predicates::prelude::*;

use super::common::TestEnv;

fn plan_json(env: &TestEnv, tokens: &[&str]) -> serde_json::Value {
  let output = env
    .hemeconf_cmd()
    .args(["plan", "--format", "json"])
    .args(tokens)
    .output()
    .unwrap();
  assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
  serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn plan_text_shows_hash_and_counts() {
  let env = TestEnv::new();

  env
    .hemeconf_cmd()
    .args(["plan", "+parmetis"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Plan: "))
    .stdout(predicate::str::contains("hemepure@master"))
    .stdout(predicate::str::contains("metis"))
    .stdout(predicate::str::contains("-DHEMELB_USE_PARMETIS:BOOL=ON"));
}

#[test]
fn plan_hash_is_stable_across_runs() {
  let env = TestEnv::new();
  let first = plan_json(&env, &["+tracer", "simd=avx2"]);
  let second = plan_json(&env, &["simd=avx2"]);

  assert_eq!(first["hash"], second["hash"]);
  assert_eq!(first["hash"].as_str().unwrap().len(), 20);
}

#[test]
fn plan_hash_changes_with_selection() {
  let env = TestEnv::new();
  let base = plan_json(&env, &[]);
  let changed = plan_json(&env, &["+velocity_weight"]);

  assert_ne!(base["hash"], changed["hash"]);
}

#[test]
fn plan_out_writes_json_file() {
  let env = TestEnv::new();
  let out = env.path("plan.json");

  env
    .hemeconf_cmd()
    .arg("plan")
    .arg("simd=sse3")
    .arg("--out")
    .arg(&out)
    .assert()
    .success()
    .stdout(predicate::str::contains("Wrote plan to"));

  let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
  assert_eq!(written["package"], "hemepure");
  assert_eq!(written["source_subdir"], "src");
  assert_eq!(written["selection"]["simd"], "sse3");
  assert!(
    written["dependencies"]
      .as_array()
      .unwrap()
      .iter()
      .all(|d| d["name"] != "metis")
  );
}
