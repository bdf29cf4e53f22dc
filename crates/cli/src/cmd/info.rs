use anyhow::Result;

use hemeconf_lib::package::Package;

use super::load_package;
use crate::output::{OutputFormat, print_json, print_stat};

pub fn cmd_info(format: OutputFormat) -> Result<()> {
  let package = load_package()?;
  let info = package.info();

  if format.is_json() {
    return print_json(info);
  }

  println!("{}", info.name);
  println!();
  println!("{}", info.description);
  println!();
  print_stat("Homepage", &info.homepage);
  print_stat("Git", &info.git);
  print_stat("License", &info.license);
  print_stat("Maintainers", &info.maintainers.join(", "));
  let versions: Vec<_> = info
    .versions
    .iter()
    .map(|v| format!("{} (branch {})", v.name, v.branch))
    .collect();
  print_stat("Versions", &versions.join(", "));
  print_stat("CMake source dir", &info.source_subdir);
  print_stat("Variants", &package.schema().len().to_string());
  print_stat("Dependencies", &package.dependencies().len().to_string());

  Ok(())
}
