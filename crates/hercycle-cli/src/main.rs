//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers; every handler receives the
//! bootstrapped `CliContext` or needs nothing at all.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use hercycle_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig {
        settings_path: None,
        user: cli.user,
    })?;

    match command {
        Commands::List => handlers::list::execute()?,
        Commands::Show { day } => handlers::show::execute(&day)?,
        Commands::Play {
            day,
            period_day,
            pace,
            rate,
        } => {
            let args = handlers::play::PlayArgs {
                day,
                period_day,
                pace,
                rate,
            };
            handlers::play::execute(&ctx, args).await?;
        }
        Commands::Log { command } => handlers::log::execute(&ctx, command).await?,
        Commands::Voices => handlers::voices::execute(&ctx)?,
    }

    Ok(())
}
