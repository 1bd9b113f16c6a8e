//! Command-line interface implementation for subtheme.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for subtheme.
#[derive(Parser, Debug)]
#[command(author, version, about = "subtheme: starter-kit scaffolding tool for site themes", long_about = None)]
pub struct Args {
    /// Human-readable name of the new theme
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Starter kit location: a template directory, packed archive, git
    /// repository or http(s) URL
    #[arg(short, long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Base theme whose bundled starter kit is used when no source is given
    #[arg(short, long, value_name = "THEME")]
    pub base: Option<String>,

    /// Site root containing the themes directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Overwrite files in an existing theme directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
