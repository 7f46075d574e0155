use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use clinica::{serve, Commands, Container, ContainerConfig, ServeConfig, Specialty};

#[derive(Parser)]
#[command(name = "clinica")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve {
            service,
            host,
            port,
        } => {
            let config = ServeConfig {
                host,
                port: port.unwrap_or_else(|| service.default_port()),
                service,
            };
            let container = Container::new(ContainerConfig::default());
            serve(&container, &config).await?;
        }

        Commands::Specialties => {
            for specialty in Specialty::ALL {
                println!("{}", specialty);
            }
        }
    }

    Ok(())
}
