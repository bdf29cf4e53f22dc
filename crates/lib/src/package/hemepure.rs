use std::str::FromStr;

use tracing::debug;

use super::{Package, PackageInfo, PackageVersion};
use crate::define::{BuildArgument, define, define_from_variant};
use crate::depends::Dependency;
use crate::variant::{Schema, SchemaError, Selection, ValidationError, VariantDecl};

/// Wall boundary-condition schemes.
pub const WALL_SCHEMES: &[&str] = &["BFL", "GZS", "SIMPLEBOUNCEBACK", "JUNKYANG", "GZSElastic"];

/// Inlet and outlet boundary-condition schemes.
pub const IOLET_SCHEMES: &[&str] = &["NASHZEROTHORDERPRESSUREIOLET", "LADDIOLET"];

/// Wall-inlet and wall-outlet corner boundary-condition schemes.
pub const CORNER_SCHEMES: &[&str] = &[
  "NASHZEROTHORDERPRESSURESBB",
  "NASHZEROTHORDERPRESSUREBFL",
  "LADDIOLETSBB",
  "LADDIOLETBFL",
  "NASHZEROTHORDERPRESSUREGZSE",
  "LADDIOLETGZSE",
];

/// Definitions the build always gets, whatever the selection.
const FIXED_DEFINES: &[(&str, &str)] = &[
  ("CMAKE_CXX_EXTENSIONS", "OFF"),
  ("HEMELB_COMPUTE_ARCHITECTURE", "NEUTRAL"),
  ("HEMELB_USE_MPI_PARALLEL_IO", "ON"),
  ("HEMELB_USE_VELOCITY_WEIGHTS_FILE", "ON"),
  ("HEMELB_LOG_LEVEL", "Info"),
];

/// CMake key -> variant, in emission order.
///
/// `HEMELB_USE_VELOCITY_WEIGHTS_FILE` also appears in [`FIXED_DEFINES`]; CMake
/// keeps the last definition, so the variant wins.
const VARIANT_DEFINES: &[(&str, &str)] = &[
  ("HEMELB_USE_PARMETIS", "parmetis"),
  ("HEMELB_USE_GMYPLUS", "gmyplus"),
  ("HEMELB_USE_MPI_CALL", "mpi_call"),
  ("HEMELB_USE_MPI_WIN", "mpi_win"),
  ("HEMELB_USE_BIGMPI", "big_mpi"),
  ("HEMELB_INLET_BOUNDARY", "inlet_boundary"),
  ("HEMELB_WALL_INLET_BOUNDARY", "wall_inlet_boundary"),
  ("HEMELB_OUTLET_BOUNDARY", "outlet_boundary"),
  ("HEMELB_WALL_OUTLET_BOUNDARY", "wall_outlet_boundary"),
  ("HEMELB_WALL_BOUNDARY", "wall_boundary"),
  ("HEMELB_TRACER_PARTICLES", "tracer"),
  ("HEMELB_USE_VELOCITY_WEIGHTS_FILE", "velocity_weight"),
];

/// SIMD instruction set the solver kernels are compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Simd {
  Sse3,
  Avx2,
  Avx512,
  /// Let the build system detect the host's instruction set.
  Auto,
}

impl Simd {
  pub const ALL: [Simd; 4] = [Simd::Sse3, Simd::Avx2, Simd::Avx512, Simd::Auto];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Sse3 => "sse3",
      Self::Avx2 => "avx2",
      Self::Avx512 => "avx512",
      Self::Auto => "auto",
    }
  }

  /// The CMake switch enabling this instruction set. `None` for [`Simd::Auto`].
  pub fn define_key(&self) -> Option<&'static str> {
    match self {
      Self::Sse3 => Some("HEMELB_USE_SSE3"),
      Self::Avx2 => Some("HEMELB_USE_AVX2"),
      Self::Avx512 => Some("HEMELB_USE_AVX512"),
      Self::Auto => None,
    }
  }
}

impl FromStr for Simd {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|simd| simd.as_str() == s)
      .ok_or_else(|| ValidationError::InvalidValue {
        name: "simd".to_string(),
        value: s.to_string(),
        allowed: Self::ALL.iter().map(|simd| simd.as_str().to_string()).collect(),
      })
  }
}

/// HemePure, the memory- and scaling-optimised HemeLB lattice-Boltzmann solver
/// for blood flow in sparse vascular geometries.
#[derive(Debug, Clone)]
pub struct HemePure {
  info: PackageInfo,
  schema: Schema,
  dependencies: Vec<Dependency>,
}

impl HemePure {
  pub fn new() -> Result<Self, SchemaError> {
    Ok(Self {
      info: package_info(),
      schema: schema()?,
      dependencies: dependencies(),
    })
  }
}

impl Package for HemePure {
  fn info(&self) -> &PackageInfo {
    &self.info
  }

  fn schema(&self) -> &Schema {
    &self.schema
  }

  fn dependencies(&self) -> &[Dependency] {
    &self.dependencies
  }

  fn cmake_args(&self, selection: &Selection) -> Vec<BuildArgument> {
    let mut args: Vec<BuildArgument> = FIXED_DEFINES.iter().map(|(key, value)| define(key, value)).collect();

    args.extend(
      VARIANT_DEFINES
        .iter()
        .map(|(key, variant)| define_from_variant(key, variant, selection)),
    );

    let simd = selection
      .choice("simd")
      .and_then(|value| value.parse::<Simd>().ok())
      .unwrap_or(Simd::Auto);
    if let Some(key) = simd.define_key() {
      args.push(define(key, "ON"));
    }

    debug!(count = args.len(), simd = simd.as_str(), "resolved cmake arguments");
    args
  }
}

fn package_info() -> PackageInfo {
  PackageInfo {
    name: "hemepure".to_string(),
    description: "HemeLB is a high performance lattice-Boltzmann solver optimized for simulating blood flow \
                  through sparse geometries, such as those found in the human vasculature. HemePure is an \
                  optimized version of HemeLB with improved memory, compilation and scaling."
      .to_string(),
    homepage: "https://github.com/UCL-CCS/HemePure".to_string(),
    git: "https://github.com/UCL-CCS/HemePure.git".to_string(),
    maintainers: ["nicolin", "connoraird", "tkoskela"].iter().map(|m| m.to_string()).collect(),
    license: "BSD-3-Clause".to_string(),
    versions: vec![PackageVersion {
      name: "master".to_string(),
      branch: "master".to_string(),
    }],
    source_subdir: "src".to_string(),
  }
}

fn schema() -> Result<Schema, SchemaError> {
  let simd_values: Vec<&str> = Simd::ALL.iter().map(Simd::as_str).collect();

  Schema::new()
    // Post processing
    .with(VariantDecl::bool("gmyplus", false, "Use GMY+ format"))?
    .with(VariantDecl::bool("parmetis", false, "Use ParMETIS"))?
    // Solver compute
    .with(VariantDecl::choice(
      "simd",
      Simd::Auto.as_str(),
      &simd_values,
      "Use SIMD intrinsics",
    ))?
    .with(VariantDecl::bool(
      "mpi_call",
      false,
      "Use standard MPI functions when reading blocks",
    ))?
    .with(VariantDecl::bool(
      "mpi_win",
      false,
      "Use MPI Domain Split to help load large domains",
    ))?
    .with(VariantDecl::bool(
      "big_mpi",
      false,
      "Use Domain Split to help load large domains",
    ))?
    // Boundary conditions
    .with(VariantDecl::choice(
      "wall_boundary",
      "SIMPLEBOUNCEBACK",
      WALL_SCHEMES,
      "Boundary conditions at walls",
    ))?
    .with(VariantDecl::choice(
      "inlet_boundary",
      "LADDIOLET",
      IOLET_SCHEMES,
      "Boundary conditions at inlets",
    ))?
    .with(VariantDecl::choice(
      "wall_inlet_boundary",
      "LADDIOLETSBB",
      CORNER_SCHEMES,
      "Boundary conditions at wall-inlet corners",
    ))?
    .with(VariantDecl::choice(
      "outlet_boundary",
      "NASHZEROTHORDERPRESSUREIOLET",
      IOLET_SCHEMES,
      "Boundary conditions at outlets",
    ))?
    .with(VariantDecl::choice(
      "wall_outlet_boundary",
      "NASHZEROTHORDERPRESSURESBB",
      CORNER_SCHEMES,
      "Boundary conditions at wall-outlet corners",
    ))?
    // Lagrangian tracking
    .with(VariantDecl::bool("tracer", true, "Use particles as tracers"))?
    .with(VariantDecl::bool("velocity_weight", false, "Use velocity weights file"))
}

fn dependencies() -> Vec<Dependency> {
  vec![
    Dependency::new("cmake").version("3.18:"),
    Dependency::new("openmpi").version("4:"),
    Dependency::new("boost").version("1.86:").with_variant("mpi"),
    Dependency::new("tinyxml"),
    Dependency::new("libtirpc"),
    Dependency::new("parmetis"),
    Dependency::new("metis").when_enabled("parmetis"),
    Dependency::new("ctemplate"),
    Dependency::new("c").build_only(),
    Dependency::new("cxx").build_only(),
  ]
}
