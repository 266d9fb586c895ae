//! Command-line front end for the auto-increment employee example

mod logging;

use anyhow::Context;
use autoincrement_example::{Config, EmployeeDemoModule};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Run the employee ORM demo and print its operation log
#[derive(Debug, Parser)]
#[command(name = "autoincrement-demo", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Database URL, e.g. sqlite://employees.db?mode=rwc
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,

    /// File that receives the operation transcript
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.transcript_file = path.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Exception: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let transcript_file = config.logging.transcript_file.clone();
    logging::init(&config.logging.level, &transcript_file)?;

    let module = EmployeeDemoModule::new();
    let outcome = execute(&module, config).await;
    let cleanup = module.cleanup().await;
    outcome?;
    cleanup?;

    let captured = std::fs::read_to_string(&transcript_file)
        .with_context(|| format!("reading {}", transcript_file.display()))?;
    println!("{captured}");
    Ok(())
}

async fn execute(module: &EmployeeDemoModule, config: Config) -> anyhow::Result<()> {
    module.init(config).await?;
    module.run().await?;
    Ok(())
}
