use crate::server;
use benefitpath::benefits::{self, rules, BenefitError, StateCode};
use benefitpath::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "BenefitPath Calculator Service",
    about = "Serve and query unemployment benefit calculations from the command line",
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
    /// Run a single benefit calculation and print the JSON result
    Estimate(EstimateArgs),
    /// Print the benefit rules for a state
    Rules(RulesArgs),
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
pub(crate) struct EstimateArgs {
    /// Two-letter state code (e.g. CA)
    #[arg(long)]
    state: String,
    /// Quarterly earnings for the base period, at least four amounts
    #[arg(long, num_args = 4.., value_name = "AMOUNT", allow_negative_numbers = true)]
    earnings: Vec<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct RulesArgs {
    /// Two-letter state code (e.g. CA)
    #[arg(long)]
    state: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Rules(args) => run_rules(args),
    }
}

fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let result = benefits::calculate(&args.state, &args.earnings)?;
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("result unavailable: {err}"),
    }
    Ok(())
}

fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let normalized = args.state.trim().to_ascii_uppercase();
    let code = StateCode::parse(&normalized)
        .ok_or(AppError::Benefit(BenefitError::UnknownState { code: normalized }))?;

    let rule = rules::state_rule(code);
    match serde_json::to_string_pretty(&rule) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("rules unavailable: {err}"),
    }
    Ok(())
}
