use crate::report::{run_score, run_statements, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use polibench::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Political Bias Benchmark",
    about = "Score Likert-scale model answers against the weighted political-axis matrix",
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
    /// Score a responses file and print the benchmark report
    Score(ScoreArgs),
    /// Print the loaded statement catalog
    Statements,
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Statements => run_statements(),
    }
}
