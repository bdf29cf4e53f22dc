mod common;
mod config_tests;
mod plan_tests;
