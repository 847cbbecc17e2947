use crate::demo::{run_demo, run_show, DemoArgs, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskboard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Project Task Dashboard",
    about = "Serve and render aggregated views over a project task dataset",
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
    /// Render dashboard screens from a task CSV on the command line
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommand,
    },
    /// Walk through every dashboard screen for a quick look at a dataset
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DashboardCommand {
    /// Render a single screen as text
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured task CSV file
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dashboard {
            command: DashboardCommand::Show(args),
        } => run_show(args),
        Command::Demo(args) => run_demo(args),
    }
}
