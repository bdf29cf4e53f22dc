//! End-to-end resolution of HemePure build plans.

use hemeconf_lib::package::Package;
use hemeconf_lib::plan::resolve;
use hemeconf_lib::util::hash::Hashable;
use hemeconf_lib::variant::{Selection, ValidationError, VariantValue};

use super::common::{hemepure, plan, values_for};

#[test]
fn parmetis_with_avx2_uses_default_boundaries() {
  let plan = plan(&["+parmetis", "simd=avx2"]);
  let args = &plan.arguments;

  assert_eq!(values_for(args, "HEMELB_USE_PARMETIS"), vec!["ON"]);
  assert_eq!(values_for(args, "HEMELB_USE_AVX2"), vec!["ON"]);
  assert!(values_for(args, "HEMELB_USE_AUTO").is_empty());

  assert_eq!(values_for(args, "HEMELB_WALL_BOUNDARY"), vec!["SIMPLEBOUNCEBACK"]);
  assert_eq!(values_for(args, "HEMELB_INLET_BOUNDARY"), vec!["LADDIOLET"]);
  assert_eq!(values_for(args, "HEMELB_WALL_INLET_BOUNDARY"), vec!["LADDIOLETSBB"]);
  assert_eq!(
    values_for(args, "HEMELB_OUTLET_BOUNDARY"),
    vec!["NASHZEROTHORDERPRESSUREIOLET"]
  );
  assert_eq!(
    values_for(args, "HEMELB_WALL_OUTLET_BOUNDARY"),
    vec!["NASHZEROTHORDERPRESSURESBB"]
  );

  let deps: Vec<_> = plan.dependencies.iter().map(|d| d.name.as_str()).collect();
  assert!(deps.contains(&"metis"));
}

#[test]
fn metis_is_active_exactly_when_parmetis_is() {
  let cases: [&[&str]; 5] = [&["+parmetis"], &["~parmetis"], &[], &["+parmetis~parmetis"], &["parmetis=true"]];
  for tokens in cases {
    let plan = plan(tokens);
    let parmetis = plan.selection.get("parmetis") == Some(&VariantValue::Bool(true));
    let metis = plan.dependencies.iter().any(|d| d.name == "metis");
    assert_eq!(parmetis, metis, "{tokens:?}");
  }
}

#[test]
fn repeated_resolution_is_identical() {
  let first = plan(&["~tracer+big_mpi", "wall_boundary=JUNKYANG"]);
  let second = plan(&["~tracer+big_mpi", "wall_boundary=JUNKYANG"]);

  assert_eq!(first, second);
  assert_eq!(first.compute_hash().unwrap(), second.compute_hash().unwrap());
}

#[test]
fn plan_serializes_for_orchestrators() {
  let json = serde_json::to_value(plan(&["simd=sse3"])).unwrap();

  assert_eq!(json["package"], "hemepure");
  assert_eq!(json["selection"]["simd"], "sse3");
  assert_eq!(json["selection"]["tracer"], true);
  let last = json["arguments"].as_array().unwrap().last().unwrap().clone();
  assert_eq!(last, serde_json::json!({ "key": "HEMELB_USE_SSE3", "value": "ON", "kind": "STRING" }));
}

#[test]
fn unvalidated_selection_with_missing_variant_is_rejected() {
  let package = hemepure();
  let selection: Selection = package
    .schema()
    .defaults()
    .iter()
    .filter(|(name, _)| name.as_str() != "tracer")
    .map(|(k, v)| (k.clone(), v.clone()))
    .collect();

  assert_eq!(
    resolve(&package, &selection).unwrap_err(),
    ValidationError::MissingVariant {
      name: "tracer".to_string()
    }
  );
}
