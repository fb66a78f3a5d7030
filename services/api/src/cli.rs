use crate::demo::{run_demo, run_generate, DemoArgs, GenerateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use visa_checklist::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Visa Checklist",
    about = "Generate Japanese visa document checklists or run the checklist HTTP service",
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
    /// Work with individual applicant checklists
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommand,
    },
    /// Print checklists for a set of canned applicant scenarios
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ChecklistCommand {
    /// Generate a checklist from a questionnaire JSON file
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Requirement table JSON replacing the built-in table
    #[arg(long)]
    pub(crate) requirements: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Checklist {
            command: ChecklistCommand::Generate(args),
        } => run_generate(args),
        Command::Demo(args) => run_demo(args),
    }
}
