//! hemeconf-lib: build configuration resolution for HemePure
//!
//! This crate turns a selection of build variants into what an orchestrator
//! needs to configure a HemePure build:
//! - `variant`: the option schema and validated selections over it
//! - `define`: CMake definitions and the variant-to-define translation rules
//! - `depends`: dependency declarations and their activation conditions
//! - `package`: the `Package` seam and the HemePure package definition
//! - `plan`: validated, content-hashed build plans
//! - `config`: `hemeconf.toml` selection files

pub mod config;
pub mod consts;
pub mod define;
pub mod depends;
pub mod package;
pub mod plan;
pub mod util;
pub mod variant;
