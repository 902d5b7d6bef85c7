use crate::constants::{exit_codes, DEFAULT_LOG_FILTER};
use clap::{error::ErrorKind, CommandFactory, Parser};

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for aocgen.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Puzzle year, used in project names and input URLs.
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub year: i32,

    /// Number of days to scaffold (at least 1).
    #[arg(value_name = "DAYS", value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,
}

/// Parse command line arguments.
///
/// Missing or malformed arguments print the usage to stdout and exit with
/// status 1 before anything else happens. `--help` and `--version` behave as usual.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        kind => {
            if kind != ErrorKind::MissingRequiredArgument {
                if let Some(reason) = e.to_string().lines().next() {
                    eprintln!("{reason}");
                }
            }
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        }
    })
}

/// Initializes `env_logger`, honouring `RUST_LOG` and falling back to warnings.
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();
}
