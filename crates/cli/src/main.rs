mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{ArgStyle, SelectionArgs};
use crate::output::{OutputFormat, print_error};

/// hemeconf - resolve HemePure build variants into CMake arguments
#[derive(Parser)]
#[command(name = "hemeconf")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List the package's build variants
  Variants {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Print the CMake arguments for a variant selection
  Args {
    #[command(flatten)]
    selection: SelectionArgs,

    /// How to render each argument
    #[arg(long, value_enum, default_value_t = ArgStyle::Defines)]
    style: ArgStyle,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Print the dependencies a variant selection requires
  Deps {
    #[command(flatten)]
    selection: SelectionArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Resolve a full build plan
  Plan {
    #[command(flatten)]
    selection: SelectionArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the plan as JSON to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
  },

  /// Show package metadata
  Info {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },
}

fn init_tracing(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("hemeconf=debug,hemeconf_lib=debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Variants { format } => cmd::cmd_variants(format),
    Commands::Args {
      selection,
      style,
      format,
    } => cmd::cmd_args(&selection, style, format),
    Commands::Deps { selection, format } => cmd::cmd_deps(&selection, format),
    Commands::Plan {
      selection,
      format,
      out,
    } => cmd::cmd_plan(&selection, format, out.as_deref()),
    Commands::Info { format } => cmd::cmd_info(format),
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
