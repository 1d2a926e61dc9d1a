use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use mecm2m_setup::config::{Overrides, Settings};
use mecm2m_setup::orchestrator::{check_server_config, generate_server_config};

/// Generate the main server configuration (one cloud server, N edge servers)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of edge servers (defaults to the compiled-in EDGE_SERVER_NUM)
    #[arg(short = 'n', long)]
    edge_servers: Option<usize>,

    /// Project base directory (overrides PROJECT_PATH)
    #[arg(short, long)]
    project_path: Option<PathBuf>,

    /// Write to this file instead of the path derived from the project directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for reproducible address generation
    #[arg(long)]
    seed: Option<u64>,

    /// Validate the existing output file instead of generating a new one
    #[arg(long, conflicts_with = "seed")]
    check: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            project_path: self.project_path.clone(),
            edge_server_num: self.edge_servers,
            output: self.output.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env(args.overrides()).wrap_err("Failed to resolve settings")?;
    info!("Output file: {:?}", settings.output_path());

    if args.check {
        let document = check_server_config(&settings)?;
        info!(
            "Server configuration is valid ({} servers)",
            document.servers.server.len()
        );
        return Ok(());
    }

    let document = generate_server_config(&settings)?;
    info!(
        "Generated server configuration with {} servers",
        document.servers.server.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let args = Args::parse_from(["create-server-json"]);
        assert_eq!(args.edge_servers, None);
        assert_eq!(args.project_path, None);
        assert_eq!(args.output, None);
        assert_eq!(args.seed, None);
        assert!(!args.check);
    }

    #[test]
    fn test_cli_overrides() {
        let args = Args::parse_from([
            "create-server-json",
            "-n",
            "5",
            "--project-path",
            "/opt/mecm2m",
            "--seed",
            "7",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.edge_server_num, Some(5));
        assert_eq!(overrides.project_path, Some(PathBuf::from("/opt/mecm2m")));
        assert_eq!(overrides.seed, Some(7));
    }

    #[test]
    fn test_check_conflicts_with_seed() {
        let result = Args::try_parse_from(["create-server-json", "--check", "--seed", "1"]);
        assert!(result.is_err());
    }
}
