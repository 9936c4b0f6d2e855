use clap::Parser;
use grounded_qa::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ask(args) => cli::ask::run(args).await,
        Command::Check(args) => cli::check::run(args).await,
        Command::Draft(args) => cli::draft::run(args).await,
    }
}
