//! shipit CLI tool.

use std::path::PathBuf;

use clap::Parser;
use shipit_config::Environment;
use tracing_subscriber::EnvFilter;

mod deploy;

#[derive(Parser)]
#[command(name = "shipit")]
#[command(about = "Build a static site and publish it to S3 + CloudFront", long_about = None)]
struct Cli {
    /// Target environment (dev or prod)
    environment: Environment,

    /// Directory containing the application and its .env files
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    deploy::run(cli.environment, &cli.project_dir).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_environment_argument_is_validated() {
        assert!(Cli::try_parse_from(["shipit", "dev"]).is_ok());
        assert!(Cli::try_parse_from(["shipit", "prod"]).is_ok());
        assert!(Cli::try_parse_from(["shipit", "staging"]).is_err());
        assert!(Cli::try_parse_from(["shipit"]).is_err());
    }
}
