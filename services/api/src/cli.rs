use crate::console::{run_chat, run_quote, run_replay, QuoteArgs, ReplayArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use underwriting::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Mortgage Underwriting Assistant",
    about = "Collect, validate, and summarize mortgage loan details from the command line",
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
    /// Walk through an underwriting dialogue on stdin/stdout
    Chat,
    /// Replay a `field,value` CSV transcript and print every message
    Replay(ReplayArgs),
    /// Print a one-shot loan summary for the given financing details
    Quote(QuoteArgs),
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
        Command::Chat => run_chat(),
        Command::Replay(args) => run_replay(args),
        Command::Quote(args) => run_quote(args),
    }
}
