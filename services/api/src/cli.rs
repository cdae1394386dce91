use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mortgage_intake::applications::domain::ApplicationDraft;
use mortgage_intake::applications::validation;
use mortgage_intake::applications::{
    ApplicationServiceError, EvaluationConfig, RequirementEvaluator,
};
use mortgage_intake::config::{parse_amount_to_cents, AppConfig, ConfigError};
use mortgage_intake::error::AppError;

use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Mortgage Intake Service",
    about = "Run the mortgage intake HTTP service or evaluate disclosure requirements from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the disclosure requirements for a JSON application draft
    Requirements(RequirementsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct RequirementsArgs {
    /// JSON application draft to evaluate (reads stdin when omitted)
    #[arg(long)]
    file: Option<PathBuf>,
    /// Conforming loan limit in dollars, overriding CONFORMING_LOAN_LIMIT
    #[arg(long)]
    conforming_loan_limit: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Requirements(args) => run_requirements(args),
    }
}

fn run_requirements(args: RequirementsArgs) -> Result<(), AppError> {
    let conforming_loan_limit_cents = match args.conforming_loan_limit {
        Some(raw) => parse_amount_to_cents(&raw)
            .ok_or(ConfigError::InvalidConformingLoanLimit { value: raw })?,
        None => AppConfig::load()?.requirements.conforming_loan_limit_cents,
    };

    let raw_draft = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let draft: ApplicationDraft = serde_json::from_str(&raw_draft)?;
    validation::validate_draft(&draft).map_err(ApplicationServiceError::from)?;

    let evaluator = RequirementEvaluator::new(EvaluationConfig {
        conforming_loan_limit_cents,
    });
    let required = evaluator.evaluate(&validation::snapshot_from_draft(&draft));

    if required.is_empty() {
        println!("No additional disclosures required.");
    } else {
        println!("Required disclosures:");
        for tag in required.tags() {
            println!("- {}", tag.identifier());
        }
    }

    Ok(())
}
