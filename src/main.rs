use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use users_cli::cli::{Cli, Commands};
use users_cli::commands;
use users_cli::config::Config;
use users_cli::error::Result;
use users_cli::output;
use users_cli::repository::UserRepository;
use users_cli::transport::HttpTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");

            if verbose {
                let mut source = std::error::Error::source(&e);
                while let Some(cause) = source {
                    eprintln!("Caused by: {cause}");
                    source = std::error::Error::source(cause);
                }
            }

            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Returns `Ok(false)` when a save or delete was reported as failed.
async fn run(cli: Cli) -> Result<bool> {
    output::set_json_output(cli.json);
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/transport
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "users", &mut io::stdout());
            Ok(true)
        }
        Commands::Init => {
            commands::init::run().await?;
            Ok(true)
        }
        command => {
            let config = Config::load()?;
            let transport = HttpTransport::new(&config.base_url(cli.base_url.as_deref())?)?;
            let repo = UserRepository::new(transport);

            match command {
                Commands::Status { id } => {
                    commands::users::status(&repo, &id).await?;
                    Ok(true)
                }
                Commands::Show { id } => {
                    commands::users::show(&repo, &id).await?;
                    Ok(true)
                }
                Commands::Save(args) => Ok(commands::users::save(&repo, args).await),
                Commands::Delete { id } => Ok(commands::users::delete(&repo, &id).await),
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                    Ok(true)
                }
            }
        }
    }
}
