use clap::Parser;
use propedge::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use propedge::adapter::inbound::cli::output::{self, OutputConfig};
use propedge::adapter::inbound::cli::{config, markets, scan};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(
        OutputConfig::new(cli.json, cli.quiet, cli.verbose),
        &cli.color,
    );

    let result = match &cli.command {
        Commands::Scan(args) => scan::execute(args).await,
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(args.config.as_deref(), args.force)
        }
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(args.config.as_deref()),
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(args.config.as_deref())
        }
        Commands::Markets(args) => markets::list(args),
    };

    if let Err(err) = result {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}
