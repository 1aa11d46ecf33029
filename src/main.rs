use clap::Parser;

use oddsarb::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use oddsarb::adapter::inbound::cli::output::{self, OutputConfig};
use oddsarb::adapter::inbound::cli::{config, scan};
use oddsarb::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::from_choice(&cli.color));

    if let Err(e) = dispatch(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Scan(args) => scan::execute(&args).await.map(|_| ()),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(arg.config.as_deref()),
        Commands::Config(ConfigCommand::Validate(arg)) => {
            config::execute_validate(arg.config.as_deref())
        }
    }
}
