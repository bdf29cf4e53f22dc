//! Selection files layered with command-line tokens.

use std::fs;

use hemeconf_lib::config::SelectionFile;
use hemeconf_lib::package::Package;
use hemeconf_lib::variant::{SelectionBuilder, ValidationError};
use tempfile::TempDir;

use super::common::hemepure;

fn write_file(content: &str) -> (TempDir, SelectionFile) {
  let temp = TempDir::new().unwrap();
  let path = temp.path().join("hemeconf.toml");
  fs::write(&path, content).unwrap();
  let file = SelectionFile::load(&path).unwrap();
  (temp, file)
}

#[test]
fn tokens_override_file_which_overrides_defaults() {
  let package = hemepure();
  let (_temp, file) = write_file(
    r#"
[variants]
parmetis = true
simd = "avx512"
wall_boundary = "BFL"
"#,
  );

  let selection = SelectionBuilder::new(package.schema())
    .apply_file(&file)
    .unwrap()
    .apply_tokens(["simd=sse3"])
    .unwrap()
    .build()
    .unwrap();

  assert!(selection.is_enabled("parmetis"));
  assert_eq!(selection.choice("simd"), Some("sse3"));
  assert_eq!(selection.choice("wall_boundary"), Some("BFL"));
  assert!(selection.is_enabled("tracer"));
}

#[test]
fn invalid_file_value_is_reported_not_replaced() {
  let package = hemepure();
  let (_temp, file) = write_file("[variants]\ninlet_boundary = \"BOUNCEBACK\"\n");

  let err = SelectionBuilder::new(package.schema())
    .apply_file(&file)
    .unwrap_err();

  assert!(matches!(
    err,
    ValidationError::InvalidValue { ref name, ref value, .. } if name == "inlet_boundary" && value == "BOUNCEBACK"
  ));
  assert!(err.to_string().contains("NASHZEROTHORDERPRESSUREIOLET, LADDIOLET"));
}

#[test]
fn string_for_boolean_variant_is_rejected() {
  let package = hemepure();
  let (_temp, file) = write_file("[variants]\ntracer = \"yes\"\n");

  let err = SelectionBuilder::new(package.schema())
    .apply_file(&file)
    .unwrap_err();

  assert!(matches!(err, ValidationError::InvalidValue { ref name, .. } if name == "tracer"));
}

#[test]
fn unknown_file_variant_is_rejected() {
  let package = hemepure();
  let (_temp, file) = write_file("[variants]\ncuda = true\n");

  let err = SelectionBuilder::new(package.schema())
    .apply_file(&file)
    .unwrap_err();

  assert_eq!(
    err,
    ValidationError::UnknownVariant {
      name: "cuda".to_string()
    }
  );
}
