// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flinx::FileSystemWriter;
use flinx_cli::commands;
use flinx_cli::runner::SystemRunner;
use flinx_cli::sphinx::{BuildOptions, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flinx")]
#[command(author = "Oliver Steele")]
#[command(version)]
#[command(about = "Configuration-free Python documentation via Sphinx", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Project directory containing pyproject.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate docs/index.rst and docs/conf.py
    Generate {
        /// Replace files that were not generated by flinx
        #[arg(long)]
        force: bool,
    },
    /// Write docs/index.rst and docs/conf.py for manual editing
    Eject {
        /// Replace files that were not generated by flinx
        #[arg(long)]
        force: bool,
    },
    /// Build the documentation
    Build(BuildArgs),
    /// Serve the documentation, rebuilding on change
    Serve(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Rebuild all the docs, regardless of what has changed
    #[arg(short, long)]
    all: bool,

    /// Open the HTML index in a browser
    #[arg(short, long)]
    open: bool,

    /// The output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// List the generated files
    #[arg(long)]
    verbose: bool,
}

impl From<BuildArgs> for BuildOptions {
    fn from(args: BuildArgs) -> Self {
        Self {
            all: args.all,
            open: args.open,
            format: args.format,
            verbose: args.verbose,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let project_dir = cli.project_dir.as_path();
    let mut writer = FileSystemWriter;
    let mut runner = SystemRunner;

    match cli.command {
        Commands::Generate { force } => {
            commands::generate::run(project_dir, force, &mut writer)
        }
        Commands::Eject { force } => {
            commands::eject::run(project_dir, force, &mut writer)
        }
        Commands::Build(args) => {
            commands::build::run(project_dir, &args.into(), &mut writer, &mut runner)
        }
        Commands::Serve(args) => {
            commands::serve::run(project_dir, &args.into(), &mut writer, &mut runner)
        }
    }
}
