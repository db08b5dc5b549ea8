#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use natfed_core::config::DEFAULT_MODULES_DIR;
use natfed_core::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "natfed")]
#[command(author, version, about = "Resolve module federation shared mappings and package entry points", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    /// Directory packages are installed into, relative to the project root
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_MODULES_DIR)]
    modules_dir: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// List shared mappings from a tsconfig `paths` section
    Paths {
        /// The tsconfig file to read
        tsconfig: PathBuf,

        /// Only share this key (repeatable; omit to share every key)
        #[arg(long = "share", value_name = "KEY")]
        share: Vec<String>,

        /// Resolve mapping targets against this directory instead of the tsconfig's
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Resolve the ESM entry point and version of shared packages
    Pkg {
        /// Package specifiers (e.g., "rxjs", "@angular/common/http")
        specifiers: Vec<String>,

        /// Resolve every installed package
        #[arg(long, conflicts_with = "specifiers")]
        all: bool,

        /// Project root containing the module-install directory (defaults to cwd)
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine working directory
    let current = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let cwd = match cli.cwd {
        Some(cwd) if cwd.is_absolute() => cwd,
        Some(cwd) => current.join(cwd),
        None => current,
    };

    let config = Config::new(cwd)
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json)
        .with_modules_dir(cli.modules_dir);

    logging::init(config.verbosity, config.json_logs);

    match cli.command {
        Some(Commands::Version) | None => commands::version::run(),
        Some(Commands::Paths {
            tsconfig,
            share,
            root,
        }) => {
            let action = commands::paths::PathsAction {
                tsconfig,
                share,
                root,
            };
            commands::paths::run(&config, action, cli.json)
        }
        Some(Commands::Pkg {
            specifiers,
            all,
            project_root,
        }) => {
            let action = if all {
                commands::pkg::PkgAction::All { project_root }
            } else if specifiers.is_empty() {
                eprintln!("error: either provide package specifiers or use --all");
                std::process::exit(2);
            } else {
                commands::pkg::PkgAction::Resolve {
                    specifiers,
                    project_root,
                }
            };
            commands::pkg::run(&config, action, cli.json)
        }
    }
}
