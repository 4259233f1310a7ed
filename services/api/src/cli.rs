use crate::demo::{run_demo, run_feedback, run_report, run_vent, DemoArgs, TextArgs, VentArgs};
use crate::server;
use boss_vent::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Boss Vent",
    about = "Turn dictated complaints into anonymous boss reports from the command line",
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
    /// Print the boss report for a transcript
    Report(TextArgs),
    /// Print the single-paragraph feedback for a transcript
    Feedback(TextArgs),
    /// Capture a vent from stdin, one final transcript segment per line
    Vent(VentArgs),
    /// Run the canned complaint scenarios and print their reports
    Demo(DemoArgs),
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
        Command::Report(args) => run_report(args),
        Command::Feedback(args) => run_feedback(args),
        Command::Vent(args) => run_vent(args),
        Command::Demo(args) => run_demo(args),
    }
}
