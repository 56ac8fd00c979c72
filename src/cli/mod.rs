pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "employee-api")]
#[command(about = "Employee Management API - REST backend for employee records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on, overrides API_PORT/PORT")]
        port: Option<u16>,
    },

    #[command(about = "Apply pending database migrations and exit")]
    Migrate,

    #[command(about = "Print a fresh base64 JWT secret for JWT_SECRET")]
    GenerateSecret,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(port).await,
        Commands::Migrate => commands::migrate::handle().await,
        Commands::GenerateSecret => commands::secret::handle(),
    }
}
