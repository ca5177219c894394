//! The `notes-api` command line.
//!
//! ```sh
//! notes-api start -p 8080
//! notes-api -e production db migrate
//! notes-api routes
//! ```

use clap::{Parser, Subcommand};

use crate::{
    app::Hooks,
    boot::{self, RunDbCommand, ServeParams},
    environment::Environment,
    logger, Result,
};

#[derive(Parser, Debug)]
#[command(version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration to run with, read from `config/<ENVIRONMENT>.yaml`.
    /// Falls back to `NOTES_ENV`, then `development`
    #[arg(short, long, global = true)]
    environment: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the API
    #[command(alias = "s")]
    Start {
        /// Address to bind, overrides `server.binding`
        #[arg(short, long)]
        binding: Option<String>,
        /// Port to listen on, overrides `server.port`
        #[arg(short, long)]
        port: Option<u16>,
        /// Skip the startup banner
        #[arg(short, long)]
        no_banner: bool,
    },
    /// Manage the notes table
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Print every endpoint with its methods
    Routes,
    /// Print the version
    Version,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum DbCommands {
    /// Create the table when it is missing
    Migrate,
    /// Drop the table and create it again
    Reset,
    /// Delete every note, keeping the table
    Truncate,
}

impl From<DbCommands> for RunDbCommand {
    fn from(command: DbCommands) -> Self {
        match command {
            DbCommands::Migrate => Self::Migrate,
            DbCommands::Reset => Self::Reset,
            DbCommands::Truncate => Self::Truncate,
        }
    }
}

/// Run the command given on the process command line.
///
/// # Errors
///
/// When the configuration does not load, the logger does not install, or
/// the command fails.
pub async fn main<H: Hooks>() -> Result<()> {
    let cli = Cli::parse();
    let environment = Environment::resolve(cli.environment);
    let config = environment.load()?;
    logger::init::<H>(&config.logger)?;

    match cli.command {
        Commands::Start {
            binding,
            port,
            no_banner,
        } => {
            let params = ServeParams::resolve(&config, binding, port);
            let boot = boot::create_app::<H>(&environment, config).await?;
            boot::start(boot, params, no_banner).await?;
        }
        Commands::Db { command } => {
            let ctx = boot::create_context(&environment, config).await?;
            boot::run_db::<H>(&ctx, command.into()).await?;
        }
        Commands::Routes => {
            let ctx = boot::create_context(&environment, config).await?;
            for route in boot::list_endpoints::<H>(&ctx) {
                println!("{route}");
            }
        }
        Commands::Version => println!("{}", H::app_version()),
    }
    Ok(())
}
